use std::collections::HashMap;

use crate::aggregate::AggregateFunction;
use crate::error::Error;
use crate::frequency;
use crate::types::{Result, UtilityValue};

use super::{check_columns, check_rows, check_transformation, UtilityMeasure};

/// The Non-Uniform Entropy measure, as proposed in:
///
/// A. Gionis, T. Tassa, k-Anonymization with minimal loss of information,
/// Trans Knowl Data Engineering 21 (2) (2009)
///
/// For every cell the measure compares the frequency of the original value
/// in the input against the frequency of the published value in the
/// output; the per-attribute sums of `log2(freq_in / freq_out)` are
/// negated and combined with the configured aggregation (sum by default).
///
/// The input dataset and its frequency distributions are captured at
/// construction; outputs scored against the measure must be row-aligned
/// with that input.
#[derive(Debug, Clone)]
pub struct NonUniformEntropy {
    input: Vec<Vec<String>>,
    input_frequencies: Vec<HashMap<String, f64>>,
    function: AggregateFunction,
}

impl NonUniformEntropy {
    pub fn new(header: &[String], input: &[Vec<String>]) -> Result<Self> {
        Self::with_function(header, input, AggregateFunction::Sum)
    }

    pub fn with_function(
        header: &[String],
        input: &[Vec<String>],
        function: AggregateFunction,
    ) -> Result<Self> {
        if header.is_empty() {
            return Err(Error::InvalidInput("Empty header".to_string()));
        }
        check_rows(input)?;
        check_columns(input, header.len())?;

        let input_frequencies = (0..header.len())
            .map(|column| frequency::frequencies(input, column))
            .collect();
        Ok(Self {
            input: input.to_vec(),
            input_frequencies,
            function,
        })
    }

    fn scores(&self, output: &[Vec<String>]) -> Result<Vec<f64>> {
        check_rows(output)?;
        let columns = self.input_frequencies.len();
        check_columns(output, columns)?;
        if output.len() != self.input.len() {
            return Err(Error::InvalidInput(format!(
                "Output has {} rows, input has {}",
                output.len(),
                self.input.len()
            )));
        }

        let output_frequencies: Vec<HashMap<String, f64>> = (0..columns)
            .map(|column| frequency::frequencies(output, column))
            .collect();

        let mut result = vec![0.0; columns];
        for (row, out_row) in self.input.iter().zip(output) {
            for col in 0..columns {
                let freq_in = lookup(&self.input_frequencies[col], &row[col])?;
                let freq_out = lookup(&output_frequencies[col], &out_row[col])?;
                result[col] += (freq_in / freq_out).log2();
            }
        }
        for score in &mut result {
            *score = -*score;
        }
        Ok(result)
    }
}

impl UtilityMeasure for NonUniformEntropy {
    fn evaluate(
        &self,
        output: &[Vec<String>],
        transformation: &[usize],
    ) -> Result<UtilityValue> {
        check_transformation(transformation, self.input_frequencies.len())?;
        Ok(self.function.aggregate(self.scores(output)?))
    }
}

/// Frequency lookups are built from the same matrices they are queried
/// with; a miss means the caller mixed up inputs and outputs
pub(super) fn lookup(frequencies: &HashMap<String, f64>, value: &str) -> Result<f64> {
    frequencies.get(value).copied().ok_or_else(|| {
        Error::Inconsistent(format!("No frequency recorded for value '{}'", value))
    })
}
