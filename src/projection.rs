use std::collections::HashSet;

use crate::error::Error;
use crate::types::{Result, SUPPRESSION_MARKER};

/// Read-only view of a tabular dataset, the boundary to the external
/// anonymization and I/O layer
pub trait TabularData {
    fn num_rows(&self) -> usize;

    fn num_columns(&self) -> usize;

    /// Name of the attribute at the given column
    fn attribute_name(&self, column: usize) -> &str;

    fn value(&self, row: usize, column: usize) -> &str;
}

/// Ordered attribute names of a dataset
pub fn header<D: TabularData>(data: &D) -> Vec<String> {
    (0..data.num_columns())
        .map(|column| data.attribute_name(column).to_string())
        .collect()
}

/// Projects a dataset onto the named attributes, in the given order
///
/// This is the shared input format for all measures: rows of string values
/// restricted to the quasi-identifiers. Unknown attribute names fail fast.
pub fn to_matrix<D: TabularData>(data: &D, attributes: &[String]) -> Result<Vec<Vec<String>>> {
    let indices = column_indices(data, attributes)?;
    let mut matrix = Vec::with_capacity(data.num_rows());
    for row in 0..data.num_rows() {
        matrix.push(
            indices
                .iter()
                .map(|&column| data.value(row, column).to_string())
                .collect(),
        );
    }
    Ok(matrix)
}

/// Projects a dataset onto all of its columns
pub fn to_matrix_full<D: TabularData>(data: &D) -> Vec<Vec<String>> {
    let mut matrix = Vec::with_capacity(data.num_rows());
    for row in 0..data.num_rows() {
        matrix.push(
            (0..data.num_columns())
                .map(|column| data.value(row, column).to_string())
                .collect(),
        );
    }
    matrix
}

/// Projects a dataset onto the named attributes, replacing every row not
/// in the given subset with a fully suppressed tuple. Row order is
/// preserved, so the result stays aligned with the input matrix.
pub fn to_matrix_subset<D: TabularData>(
    data: &D,
    attributes: &[String],
    subset: &HashSet<usize>,
) -> Result<Vec<Vec<String>>> {
    let indices = column_indices(data, attributes)?;
    let suppressed: Vec<String> = indices
        .iter()
        .map(|_| SUPPRESSION_MARKER.to_string())
        .collect();

    let mut matrix = Vec::with_capacity(data.num_rows());
    for row in 0..data.num_rows() {
        if subset.contains(&row) {
            matrix.push(
                indices
                    .iter()
                    .map(|&column| data.value(row, column).to_string())
                    .collect(),
            );
        } else {
            matrix.push(suppressed.clone());
        }
    }
    Ok(matrix)
}

fn column_indices<D: TabularData>(data: &D, attributes: &[String]) -> Result<Vec<usize>> {
    attributes
        .iter()
        .map(|attribute| {
            (0..data.num_columns())
                .find(|&column| data.attribute_name(column) == attribute)
                .ok_or_else(|| {
                    Error::InvalidInput(format!("Unknown attribute '{}'", attribute))
                })
        })
        .collect()
}

/// In-memory dataset, the simplest [`TabularData`] implementation
#[derive(Debug, Clone)]
pub struct ValueTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ValueTable {
    /// Creates a table from a header and rows; every row must match the
    /// header width
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for row in &rows {
            if row.len() != header.len() {
                return Err(Error::InvalidInput(format!(
                    "Row width {} does not match header width {}",
                    row.len(),
                    header.len()
                )));
            }
        }
        Ok(Self { header, rows })
    }
}

impl TabularData for ValueTable {
    fn num_rows(&self) -> usize {
        self.rows.len()
    }

    fn num_columns(&self) -> usize {
        self.header.len()
    }

    fn attribute_name(&self, column: usize) -> &str {
        &self.header[column]
    }

    fn value(&self, row: usize, column: usize) -> &str {
        &self.rows[row][column]
    }
}
