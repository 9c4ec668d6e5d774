use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sentinel value denoting a suppressed cell in an output dataset
pub const SUPPRESSION_MARKER: &str = "*";

/// Generalization hierarchies per attribute: each table is rectangular,
/// one row per base value, column 0 the base value, the last column the
/// most general value
pub type HierarchyMap = HashMap<String, Vec<Vec<String>>>;

/// Result of a utility measure evaluation
///
/// Scalars come from single-valued measures and scalar aggregations;
/// vectors come from the rank aggregation, which keeps one score per
/// attribute sorted in descending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum UtilityValue {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl UtilityValue {
    /// Returns the scalar value, if this is a scalar result
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            UtilityValue::Scalar(v) => Some(*v),
            UtilityValue::Vector(_) => None,
        }
    }

    /// Returns the per-attribute vector, if this is a vector result
    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            UtilityValue::Scalar(_) => None,
            UtilityValue::Vector(v) => Some(v),
        }
    }
}

impl PartialOrd for UtilityValue {
    /// Scalars compare numerically, vectors lexicographically; a scalar
    /// and a vector are incomparable
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (UtilityValue::Scalar(a), UtilityValue::Scalar(b)) => a.partial_cmp(b),
            (UtilityValue::Vector(a), UtilityValue::Vector(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, crate::error::Error>;
