use crate::groupify::HashGroupify;
use crate::types::{Result, UtilityValue};

use super::{check_rows, UtilityMeasure};

/// The Average Equivalence Class Size (AECS) measure, as proposed in:
///
/// K. LeFevre, D. DeWitt, R. Ramakrishnan, Mondrian multidimensional
/// k-anonymity, in: Proc Int Conf Data Engineering (2006)
#[derive(Debug, Clone, Copy, Default)]
pub struct Aecs;

impl UtilityMeasure for Aecs {
    fn evaluate(
        &self,
        output: &[Vec<String>],
        _transformation: &[usize],
    ) -> Result<UtilityValue> {
        check_rows(output)?;

        let mut table = HashGroupify::new(10);
        for row in output {
            table.add(row);
        }

        let sum: usize = table.entries().map(|entry| entry.count()).sum();
        Ok(UtilityValue::Scalar(sum as f64 / table.size() as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_two_classes() {
        let output = matrix(&[&["a1", "x"], &["a1", "x"], &["a2", "y"]]);
        let result = Aecs.evaluate_identity(&output).unwrap();
        assert!((result.as_scalar().unwrap() - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_all_rows_distinct() {
        let output = matrix(&[&["a"], &["b"], &["c"], &["d"]]);
        let result = Aecs.evaluate_identity(&output).unwrap();
        assert!((result.as_scalar().unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_class() {
        let output = matrix(&[&["a", "x"], &["a", "x"], &["a", "x"]]);
        let result = Aecs.evaluate_identity(&output).unwrap();
        assert!((result.as_scalar().unwrap() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_output_rejected() {
        assert!(Aecs.evaluate(&[], &[]).is_err());
    }
}
