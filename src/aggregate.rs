use crate::types::UtilityValue;

/// Strategy for combining per-attribute scores into a single result
///
/// The set is closed: measures take one of these tags instead of an open
/// strategy object. All variants produce a scalar except [`Rank`], which
/// keeps the full per-attribute profile sorted in descending order.
///
/// [`Rank`]: AggregateFunction::Rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    ArithmeticMean,
    GeometricMean,
    Sum,
    Max,
    Rank,
}

impl AggregateFunction {
    /// Combines a per-attribute score vector into a utility value
    pub fn aggregate(&self, mut values: Vec<f64>) -> UtilityValue {
        match self {
            AggregateFunction::ArithmeticMean => {
                let sum: f64 = values.iter().sum();
                UtilityValue::Scalar(sum / values.len() as f64)
            }
            AggregateFunction::GeometricMean => {
                // Shifted by one to stay defined for zero scores
                let log_sum: f64 = values.iter().map(|v| (v + 1.0).ln()).sum();
                UtilityValue::Scalar((log_sum / values.len() as f64).exp() - 1.0)
            }
            AggregateFunction::Sum => UtilityValue::Scalar(values.iter().sum()),
            AggregateFunction::Max => {
                UtilityValue::Scalar(values.iter().copied().fold(f64::MIN, f64::max))
            }
            AggregateFunction::Rank => {
                values.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
                UtilityValue::Vector(values)
            }
        }
    }
}
