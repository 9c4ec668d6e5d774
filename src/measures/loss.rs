use crate::aggregate::AggregateFunction;
use crate::hierarchy::{self, CostMap};
use crate::types::{HierarchyMap, Result, UtilityValue};

use super::{check_columns, check_rows, check_transformation, UtilityMeasure};

/// The Loss measure, as proposed in:
///
/// Iyengar, V.: Transforming data to satisfy privacy constraints.
/// In: Proc Int Conf Knowl Disc Data Mining (2002)
///
/// Each output cell is charged the fraction of the attribute's domain its
/// value covers; scores are averaged over rows per attribute and combined
/// with the configured aggregation (arithmetic mean by default).
#[derive(Debug, Clone)]
pub struct Loss {
    costs: Vec<CostMap>,
    function: AggregateFunction,
}

impl Loss {
    pub fn new(header: &[String], hierarchies: &HierarchyMap) -> Result<Self> {
        Self::with_function(header, hierarchies, AggregateFunction::ArithmeticMean)
    }

    pub fn with_function(
        header: &[String],
        hierarchies: &HierarchyMap,
        function: AggregateFunction,
    ) -> Result<Self> {
        Ok(Self {
            costs: hierarchy::cost_maps(header, hierarchies, CostMap::loss)?,
            function,
        })
    }

    fn scores(&self, output: &[Vec<String>]) -> Result<Vec<f64>> {
        check_rows(output)?;
        check_columns(output, self.costs.len())?;

        let mut result = vec![0.0; self.costs.len()];
        for row in output {
            for (i, costs) in self.costs.iter().enumerate() {
                result[i] += costs.get(&row[i]);
            }
        }
        for score in &mut result {
            *score /= output.len() as f64;
        }
        Ok(result)
    }
}

impl UtilityMeasure for Loss {
    fn evaluate(
        &self,
        output: &[Vec<String>],
        transformation: &[usize],
    ) -> Result<UtilityValue> {
        check_transformation(transformation, self.costs.len())?;
        Ok(self.function.aggregate(self.scores(output)?))
    }
}
