use std::collections::HashMap;

use crate::error::Error;
use crate::types::{HierarchyMap, Result};

/// Checks that a hierarchy table is non-empty and rectangular
pub fn validate(attribute: &str, hierarchy: &[Vec<String>]) -> Result<()> {
    if hierarchy.is_empty() || hierarchy[0].is_empty() {
        return Err(Error::InvalidInput(format!(
            "Empty hierarchy for attribute '{}'",
            attribute
        )));
    }
    let levels = hierarchy[0].len();
    for row in hierarchy {
        if row.len() != levels {
            return Err(Error::InvalidInput(format!(
                "Ragged hierarchy for attribute '{}': expected {} levels, found {}",
                attribute,
                levels,
                row.len()
            )));
        }
    }
    Ok(())
}

/// Looks up one attribute's hierarchy, validating presence and shape
pub fn lookup<'a>(attribute: &str, hierarchies: &'a HierarchyMap) -> Result<&'a [Vec<String>]> {
    let hierarchy = hierarchies.get(attribute).ok_or_else(|| {
        Error::InvalidInput(format!("No hierarchy for attribute '{}'", attribute))
    })?;
    validate(attribute, hierarchy)?;
    Ok(hierarchy)
}

/// Per-value generalization cost for one attribute, in [0, 1]
///
/// Values absent from the map are treated as fully generalized and cost 1.0.
/// If the same value appears at several hierarchy levels, the cost assigned
/// at the lowest level wins; hierarchies are expected to keep values unique
/// across levels.
#[derive(Debug, Clone)]
pub struct CostMap {
    costs: HashMap<String, f64>,
}

impl CostMap {
    /// Builds the loss cost map: a base value costs 1/N, and a value first
    /// seen at level k costs fan_in/N, where fan_in is the number of level
    /// k-1 values that generalize to it
    pub fn loss(hierarchy: &[Vec<String>]) -> Self {
        let rows = hierarchy.len() as f64;
        let levels = hierarchy[0].len();

        // Fan-in per level: level -> value on level + 1 -> count of values
        // on level that generalize to it
        let mut fan_in: Vec<HashMap<&str, usize>> = vec![HashMap::new(); levels - 1];
        for level in 0..levels - 1 {
            for row in hierarchy {
                *fan_in[level].entry(row[level + 1].as_str()).or_insert(0) += 1;
            }
        }

        let mut costs = HashMap::new();
        for row in hierarchy {
            costs.entry(row[0].clone()).or_insert(1.0 / rows);
        }
        for col in 1..levels {
            for row in hierarchy {
                let value = row[col].as_str();
                if !costs.contains_key(value) {
                    let count = fan_in[col - 1][value] as f64;
                    costs.insert(value.to_string(), count / rows);
                }
            }
        }

        Self { costs }
    }

    /// Builds the precision cost map: a value first seen at column c costs
    /// c/L, linear in generalization depth
    pub fn precision(hierarchy: &[Vec<String>]) -> Self {
        let levels = hierarchy[0].len();
        let mut costs = HashMap::new();
        for col in 0..levels {
            for row in hierarchy {
                costs
                    .entry(row[col].clone())
                    .or_insert(col as f64 / (levels as f64 - 1.0));
            }
        }
        Self { costs }
    }

    /// Cost of a value; 1.0 for values never seen in the hierarchy
    pub fn get(&self, value: &str) -> f64 {
        self.costs.get(value).copied().unwrap_or(1.0)
    }
}

/// Builds one cost map per header attribute, failing fast on attributes
/// missing from the hierarchy map
pub fn cost_maps(
    header: &[String],
    hierarchies: &HierarchyMap,
    build: fn(&[Vec<String>]) -> CostMap,
) -> Result<Vec<CostMap>> {
    if header.is_empty() {
        return Err(Error::InvalidInput("Empty header".to_string()));
    }
    header
        .iter()
        .map(|attribute| Ok(build(lookup(attribute, hierarchies)?)))
        .collect()
}

/// Maps an attribute's base values to their generalization at each level
#[derive(Debug, Clone)]
pub struct GeneralizationTable {
    levels: Vec<HashMap<String, String>>,
}

impl GeneralizationTable {
    pub fn new(hierarchy: &[Vec<String>]) -> Self {
        let mut levels = Vec::with_capacity(hierarchy[0].len());
        for level in 0..hierarchy[0].len() {
            let mut map = HashMap::new();
            for row in hierarchy {
                map.insert(row[0].clone(), row[level].clone());
            }
            levels.push(map);
        }
        Self { levels }
    }

    /// Number of levels, including the ungeneralized level 0
    pub fn levels(&self) -> usize {
        self.levels.len()
    }

    /// The base-value-to-generalized-value map at the given level
    pub fn level(&self, level: usize) -> Result<&HashMap<String, String>> {
        self.levels.get(level).ok_or_else(|| {
            Error::InvalidInput(format!(
                "Generalization level {} out of range, hierarchy has {} levels",
                level,
                self.levels.len()
            ))
        })
    }
}

/// Number of base values in an attribute's domain
pub fn domain_size(hierarchy: &[Vec<String>]) -> f64 {
    hierarchy.len() as f64
}
