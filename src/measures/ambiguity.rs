use crate::hierarchy::{self, CostMap};
use crate::types::{HierarchyMap, Result, UtilityValue};

use super::{check_columns, check_rows, check_transformation, UtilityMeasure};

/// The Ambiguity measure, as described in:
///
/// Goldberger, Tassa: Efficient Anonymizations with Enhanced Utility
///
/// Each output row is charged the number of base tuples it could stand
/// for: the product over attributes of the loss cost of the cell value
/// times the attribute's domain size. Row charges are summed into a single
/// scalar, so no aggregation strategy applies.
#[derive(Debug, Clone)]
pub struct Ambiguity {
    costs: Vec<CostMap>,
    domain_sizes: Vec<f64>,
}

impl Ambiguity {
    pub fn new(header: &[String], hierarchies: &HierarchyMap) -> Result<Self> {
        let costs = hierarchy::cost_maps(header, hierarchies, CostMap::loss)?;
        let domain_sizes = header
            .iter()
            .map(|attribute| {
                Ok(hierarchy::domain_size(hierarchy::lookup(
                    attribute,
                    hierarchies,
                )?))
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(Self {
            costs,
            domain_sizes,
        })
    }
}

impl UtilityMeasure for Ambiguity {
    fn evaluate(
        &self,
        output: &[Vec<String>],
        transformation: &[usize],
    ) -> Result<UtilityValue> {
        check_rows(output)?;
        check_columns(output, self.costs.len())?;
        check_transformation(transformation, self.costs.len())?;

        let mut result = 0.0;
        for row in output {
            let mut row_result = 1.0;
            for (i, costs) in self.costs.iter().enumerate() {
                row_result *= costs.get(&row[i]) * self.domain_sizes[i];
            }
            result += row_result;
        }
        Ok(UtilityValue::Scalar(result))
    }
}
