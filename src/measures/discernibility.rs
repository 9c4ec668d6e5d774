use crate::groupify::{GroupEntry, HashGroupify};
use crate::types::{Result, UtilityValue};

use super::{check_rows, UtilityMeasure};

/// The Discernibility measure, as proposed in:
///
/// R. Bayardo, R. Agrawal, Data privacy through optimal k-anonymization,
/// in: Proc Int Conf Data Engineering (2005)
///
/// Each equivalence class of the output is penalized with its squared
/// size; suppressed classes are penalized with class size times the total
/// row count instead. A class counts as suppressed when all values of its
/// tuple are identical, the convention used to denote suppressed rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discernibility;

impl UtilityMeasure for Discernibility {
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

        let rows = output.len() as f64;
        let sum = table.entries().map(|entry| penalty(entry, rows)).sum();
        Ok(UtilityValue::Scalar(sum))
    }
}

fn penalty(entry: &GroupEntry, rows: f64) -> f64 {
    let count = entry.count() as f64;
    if is_suppressed(entry) {
        count * rows
    } else {
        count * count
    }
}

fn is_suppressed(entry: &GroupEntry) -> bool {
    entry.values().windows(2).all(|pair| pair[0] == pair[1])
}
