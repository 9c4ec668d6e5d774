use std::collections::HashMap;

use crate::error::Error;
use crate::hierarchy::GeneralizationTable;
use crate::types::Result;

/// Occurrence counts of the distinct values in one column, as f64 for
/// direct use in ratio arithmetic
pub fn frequencies(data: &[Vec<String>], column: usize) -> HashMap<String, f64> {
    let mut counts = HashMap::new();
    for row in data {
        *counts.entry(row[column].clone()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Occurrence counts after mapping each base value through the given
/// hierarchy level, without materializing a generalized matrix
pub fn generalized_frequencies(
    input: &[Vec<String>],
    column: usize,
    level: &HashMap<String, String>,
) -> Result<HashMap<String, f64>> {
    let mut counts = HashMap::new();
    for row in input {
        let value = generalize(&row[column], level)?;
        *counts.entry(value.clone()).or_insert(0.0) += 1.0;
    }
    Ok(counts)
}

/// As [`generalized_frequencies`], restricted to rows whose generalized
/// value differs from the literal output value; those are the rows the
/// output suppressed
pub fn suppressed_frequencies(
    input: &[Vec<String>],
    column: usize,
    level: &HashMap<String, String>,
    output: &[Vec<String>],
) -> Result<HashMap<String, f64>> {
    let mut counts = HashMap::new();
    for (row, out_row) in input.iter().zip(output) {
        let value = generalize(&row[column], level)?;
        if *value != out_row[column] {
            *counts.entry(value.clone()).or_insert(0.0) += 1.0;
        }
    }
    Ok(counts)
}

/// Maps one base value through a hierarchy level. A base value missing
/// from the hierarchy means the dataset and hierarchy disagree; the
/// distribution cannot be computed
pub fn generalize<'a>(
    value: &str,
    level: &'a HashMap<String, String>,
) -> Result<&'a String> {
    level.get(value).ok_or_else(|| {
        Error::Inconsistent(format!("Value '{}' not found in hierarchy", value))
    })
}

/// Builds the per-column generalization level maps selected by a
/// transformation vector
pub fn level_maps<'a>(
    tables: &'a [GeneralizationTable],
    transformation: &[usize],
) -> Result<Vec<&'a HashMap<String, String>>> {
    tables
        .iter()
        .zip(transformation)
        .map(|(table, &level)| table.level(level))
        .collect()
}
