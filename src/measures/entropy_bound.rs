use std::collections::HashMap;

use crate::aggregate::AggregateFunction;
use crate::error::Error;
use crate::frequency;
use crate::hierarchy::{self, GeneralizationTable};
use crate::types::{HierarchyMap, Result, UtilityValue, SUPPRESSION_MARKER};

use super::entropy::lookup;
use super::{check_columns, check_rows, check_transformation, UtilityMeasure};

/// The Non-Uniform Entropy measure with a lower bound. Inspired by:
///
/// A. Gionis, T. Tassa, k-Anonymization with minimal loss of information,
/// Trans Knowl Data Engineering 21 (2) (2009)
///
/// Instead of the literal output values, each cell is compared against the
/// distribution the transformation implies: the input generalized through
/// the hierarchy level chosen for the attribute. Rows whose published
/// value differs from that generalization must carry the suppression
/// marker and are charged an additional term for the information removed
/// by suppression; any other difference means the output and the
/// transformation do not belong together, which is fatal.
#[derive(Debug, Clone)]
pub struct NonUniformEntropyWithLowerBound {
    input: Vec<Vec<String>>,
    input_frequencies: Vec<HashMap<String, f64>>,
    tables: Vec<GeneralizationTable>,
    function: AggregateFunction,
}

impl NonUniformEntropyWithLowerBound {
    pub fn new(
        header: &[String],
        input: &[Vec<String>],
        hierarchies: &HierarchyMap,
    ) -> Result<Self> {
        Self::with_function(header, input, hierarchies, AggregateFunction::Sum)
    }

    pub fn with_function(
        header: &[String],
        input: &[Vec<String>],
        hierarchies: &HierarchyMap,
        function: AggregateFunction,
    ) -> Result<Self> {
        if header.is_empty() {
            return Err(Error::InvalidInput("Empty header".to_string()));
        }
        check_rows(input)?;
        check_columns(input, header.len())?;

        let tables = header
            .iter()
            .map(|attribute| {
                Ok(GeneralizationTable::new(hierarchy::lookup(
                    attribute,
                    hierarchies,
                )?))
            })
            .collect::<Result<Vec<GeneralizationTable>>>()?;
        let input_frequencies = (0..header.len())
            .map(|column| frequency::frequencies(input, column))
            .collect();

        Ok(Self {
            input: input.to_vec(),
            input_frequencies,
            tables,
            function,
        })
    }

    fn scores(&self, output: &[Vec<String>], transformation: &[usize]) -> Result<Vec<f64>> {
        check_rows(output)?;
        let columns = self.tables.len();
        check_columns(output, columns)?;
        check_transformation(transformation, columns)?;
        if output.len() != self.input.len() {
            return Err(Error::InvalidInput(format!(
                "Output has {} rows, input has {}",
                output.len(),
                self.input.len()
            )));
        }

        let levels = frequency::level_maps(&self.tables, transformation)?;
        let generalized_frequencies = (0..columns)
            .map(|col| frequency::generalized_frequencies(&self.input, col, levels[col]))
            .collect::<Result<Vec<HashMap<String, f64>>>>()?;
        let suppressed_frequencies = (0..columns)
            .map(|col| frequency::suppressed_frequencies(&self.input, col, levels[col], output))
            .collect::<Result<Vec<HashMap<String, f64>>>>()?;
        let output_frequencies: Vec<HashMap<String, f64>> = (0..columns)
            .map(|col| frequency::frequencies(output, col))
            .collect();

        let mut result = vec![0.0; columns];
        for (row, out_row) in self.input.iter().zip(output) {
            for col in 0..columns {
                let generalized = frequency::generalize(&row[col], levels[col])?;
                let freq_in = lookup(&self.input_frequencies[col], &row[col])?;
                let freq_gen = lookup(&generalized_frequencies[col], generalized)?;
                result[col] += (freq_in / freq_gen).log2();

                if *generalized != out_row[col] {
                    if out_row[col] != SUPPRESSION_MARKER {
                        return Err(Error::Inconsistent(format!(
                            "Output value '{}' does not match generalization '{}' \
                             and is not suppressed",
                            out_row[col], generalized
                        )));
                    }
                    let freq_supp = lookup(&suppressed_frequencies[col], generalized)?;
                    let freq_out = lookup(&output_frequencies[col], &out_row[col])?;
                    result[col] += (freq_supp / freq_out).log2();
                }
            }
        }
        for score in &mut result {
            *score = -*score;
        }
        Ok(result)
    }
}

impl UtilityMeasure for NonUniformEntropyWithLowerBound {
    fn evaluate(
        &self,
        output: &[Vec<String>],
        transformation: &[usize],
    ) -> Result<UtilityValue> {
        Ok(self.function.aggregate(self.scores(output, transformation)?))
    }
}

/// Normalized version of [`NonUniformEntropyWithLowerBound`]: each
/// attribute's raw score is divided by the entropy of suppressing every
/// cell of that attribute, computed once at construction. Scores land in
/// [0, 1] for outputs the hierarchies can produce.
#[derive(Debug, Clone)]
pub struct NonUniformEntropyWithLowerBoundNormalized {
    inner: NonUniformEntropyWithLowerBound,
    upper: Vec<f64>,
}

impl NonUniformEntropyWithLowerBoundNormalized {
    pub fn new(
        header: &[String],
        input: &[Vec<String>],
        hierarchies: &HierarchyMap,
    ) -> Result<Self> {
        Self::with_function(header, input, hierarchies, AggregateFunction::Sum)
    }

    pub fn with_function(
        header: &[String],
        input: &[Vec<String>],
        hierarchies: &HierarchyMap,
        function: AggregateFunction,
    ) -> Result<Self> {
        let inner =
            NonUniformEntropyWithLowerBound::with_function(header, input, hierarchies, function)?;
        let upper = upper_bound(&inner)?;
        Ok(Self { inner, upper })
    }
}

/// Entropy of total suppression: every cell published as the one value
/// covering all rows
fn upper_bound(inner: &NonUniformEntropyWithLowerBound) -> Result<Vec<f64>> {
    let rows = inner.input.len() as f64;
    let columns = inner.input_frequencies.len();

    let mut result = vec![0.0; columns];
    for row in &inner.input {
        for col in 0..columns {
            let freq_in = lookup(&inner.input_frequencies[col], &row[col])?;
            result[col] += (freq_in / rows).log2();
        }
    }
    for score in &mut result {
        *score = -*score;
    }
    Ok(result)
}

impl UtilityMeasure for NonUniformEntropyWithLowerBoundNormalized {
    fn evaluate(
        &self,
        output: &[Vec<String>],
        transformation: &[usize],
    ) -> Result<UtilityValue> {
        let mut scores = self.inner.scores(output, transformation)?;
        for (score, upper) in scores.iter_mut().zip(&self.upper) {
            *score /= upper;
        }
        Ok(self.inner.function.aggregate(scores))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn matrix(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter().map(|row| strings(row)).collect()
    }

    fn age_hierarchies() -> HierarchyMap {
        let mut hierarchies = HierarchyMap::new();
        hierarchies.insert(
            "age".to_string(),
            matrix(&[
                &["34", "30-39", "*"],
                &["45", "40-49", "*"],
                &["66", "60-69", "*"],
            ]),
        );
        hierarchies
    }

    #[test]
    fn test_identity_at_level_zero_is_zero() {
        let header = strings(&["age"]);
        let input = matrix(&[&["34"], &["34"], &["45"]]);
        let mut hierarchies = HierarchyMap::new();
        hierarchies.insert(
            "age".to_string(),
            matrix(&[&["34", "30-39", "*"], &["45", "40-49", "*"]]),
        );
        let measure =
            NonUniformEntropyWithLowerBound::new(&header, &input, &hierarchies).unwrap();

        let result = measure.evaluate(&input, &[0]).unwrap();
        assert!((result.as_scalar().unwrap() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_generalization_without_suppression() {
        let header = strings(&["age"]);
        let input = matrix(&[&["34"], &["34"], &["45"]]);
        let mut hierarchies = HierarchyMap::new();
        hierarchies.insert(
            "age".to_string(),
            matrix(&[&["34", "30-39", "*"], &["45", "40-49", "*"]]),
        );
        let output = matrix(&[&["30-39"], &["30-39"], &["40-49"]]);
        let measure =
            NonUniformEntropyWithLowerBound::new(&header, &input, &hierarchies).unwrap();

        // Generalization collapses nothing new: both 34s share a decade
        let result = measure.evaluate(&output, &[1]).unwrap();
        assert!((result.as_scalar().unwrap() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_suppressed_rows_charged() {
        let header = strings(&["age"]);
        let input = matrix(&[&["34"], &["45"], &["66"]]);
        let output = matrix(&[&["30-39"], &["*"], &["*"]]);
        let measure =
            NonUniformEntropyWithLowerBound::new(&header, &input, &age_hierarchies()).unwrap();

        // Each suppressed row: log2(1/1) for the generalization step plus
        // log2(1/2) for vanishing into the two-row suppressed class
        let result = measure.evaluate(&output, &[1]).unwrap();
        assert!((result.as_scalar().unwrap() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_mismatch_without_marker_is_fatal() {
        let header = strings(&["age"]);
        let input = matrix(&[&["34"], &["45"], &["66"]]);
        // Second row claims a decade its transformation cannot produce
        let output = matrix(&[&["30-39"], &["60-69"], &["60-69"]]);
        let measure =
            NonUniformEntropyWithLowerBound::new(&header, &input, &age_hierarchies()).unwrap();

        let result = measure.evaluate(&output, &[1]);
        assert!(matches!(result, Err(Error::Inconsistent(_))));
    }

    #[test]
    fn test_level_out_of_range_rejected() {
        let header = strings(&["age"]);
        let input = matrix(&[&["34"], &["45"], &["66"]]);
        let measure =
            NonUniformEntropyWithLowerBound::new(&header, &input, &age_hierarchies()).unwrap();

        let result = measure.evaluate(&input, &[3]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_input_value_missing_from_hierarchy_is_fatal() {
        let header = strings(&["age"]);
        let input = matrix(&[&["99"]]);
        let measure =
            NonUniformEntropyWithLowerBound::new(&header, &input, &age_hierarchies()).unwrap();

        let result = measure.evaluate(&input, &[1]);
        assert!(matches!(result, Err(Error::Inconsistent(_))));
    }

    #[test]
    fn test_normalized_full_suppression_is_one() {
        let header = strings(&["age"]);
        let input = matrix(&[&["34"], &["34"], &["45"]]);
        let mut hierarchies = HierarchyMap::new();
        hierarchies.insert(
            "age".to_string(),
            matrix(&[&["34", "30-39", "*"], &["45", "40-49", "*"]]),
        );
        let output = matrix(&[&["*"], &["*"], &["*"]]);
        let measure =
            NonUniformEntropyWithLowerBoundNormalized::new(&header, &input, &hierarchies)
                .unwrap();

        let result = measure.evaluate(&output, &[2]).unwrap();
        assert!((result.as_scalar().unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_normalized_identity_is_zero() {
        let header = strings(&["age"]);
        let input = matrix(&[&["34"], &["34"], &["45"]]);
        let mut hierarchies = HierarchyMap::new();
        hierarchies.insert(
            "age".to_string(),
            matrix(&[&["34", "30-39", "*"], &["45", "40-49", "*"]]),
        );
        let measure =
            NonUniformEntropyWithLowerBoundNormalized::new(&header, &input, &hierarchies)
                .unwrap();

        let result = measure.evaluate(&input, &[0]).unwrap();
        assert!((result.as_scalar().unwrap() - 0.0).abs() < 1e-10);
    }
}
