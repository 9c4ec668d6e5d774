pub mod aecs;
pub mod ambiguity;
pub mod discernibility;
pub mod entropy;
pub mod entropy_bound;
pub mod loss;
pub mod precision;

pub use aecs::Aecs;
pub use ambiguity::Ambiguity;
pub use discernibility::Discernibility;
pub use entropy::NonUniformEntropy;
pub use entropy_bound::{NonUniformEntropyWithLowerBound, NonUniformEntropyWithLowerBoundNormalized};
pub use loss::Loss;
pub use precision::Precision;

use crate::error::Error;
use crate::types::{Result, UtilityValue};

/// Scores one output dataset against the measure's reference state.
///
/// A measure is constructed once from the header, the hierarchies and,
/// for the entropy family, the input dataset; it is immutable afterwards
/// and may be reused across many evaluations. Evaluation is read-only:
/// either a full utility value is produced or an error is raised, never a
/// partial result.
pub trait UtilityMeasure {
    /// Evaluates the output dataset produced by the given transformation
    fn evaluate(&self, output: &[Vec<String>], transformation: &[usize])
        -> Result<UtilityValue>;

    /// Evaluates a dataset as its own output, under the identity
    /// transformation
    fn evaluate_identity(&self, input: &[Vec<String>]) -> Result<UtilityValue> {
        let columns = input.first().map_or(0, |row| row.len());
        self.evaluate(input, &vec![0; columns])
    }
}

/// Rejects zero-row matrices
pub(crate) fn check_rows(output: &[Vec<String>]) -> Result<()> {
    if output.is_empty() {
        return Err(Error::InvalidInput("Empty dataset".to_string()));
    }
    Ok(())
}

/// Rejects matrices whose width disagrees with the measure's header
pub(crate) fn check_columns(output: &[Vec<String>], expected: usize) -> Result<()> {
    let columns = output.first().map_or(0, |row| row.len());
    if columns != expected {
        return Err(Error::InvalidInput(format!(
            "Dataset has {} columns, expected {}",
            columns, expected
        )));
    }
    Ok(())
}

/// Rejects transformation vectors whose length disagrees with the header
pub(crate) fn check_transformation(transformation: &[usize], expected: usize) -> Result<()> {
    if transformation.len() != expected {
        return Err(Error::InvalidInput(format!(
            "Transformation has {} levels, expected {}",
            transformation.len(),
            expected
        )));
    }
    Ok(())
}
