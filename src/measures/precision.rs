use crate::aggregate::AggregateFunction;
use crate::hierarchy::{self, CostMap};
use crate::types::{HierarchyMap, Result, UtilityValue};

use super::{check_columns, check_rows, check_transformation, UtilityMeasure};

/// The Precision measure, as proposed in:
///
/// L. Sweeney, Achieving k-anonymity privacy protection using
/// generalization and suppression, J Uncertain Fuzz Knowl Sys 10 (5) (2002)
///
/// Each output cell is charged its generalization depth as a fraction of
/// the hierarchy height, so precision grows linearly with the number of
/// generalization steps applied rather than with fan-in.
#[derive(Debug, Clone)]
pub struct Precision {
    costs: Vec<CostMap>,
    function: AggregateFunction,
}

impl Precision {
    pub fn new(header: &[String], hierarchies: &HierarchyMap) -> Result<Self> {
        Self::with_function(header, hierarchies, AggregateFunction::ArithmeticMean)
    }

    pub fn with_function(
        header: &[String],
        hierarchies: &HierarchyMap,
        function: AggregateFunction,
    ) -> Result<Self> {
        Ok(Self {
            costs: hierarchy::cost_maps(header, hierarchies, CostMap::precision)?,
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

impl UtilityMeasure for Precision {
    fn evaluate(
        &self,
        output: &[Vec<String>],
        transformation: &[usize],
    ) -> Result<UtilityValue> {
        check_transformation(transformation, self.costs.len())?;
        Ok(self.function.aggregate(self.scores(output)?))
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

    fn setup() -> (Vec<String>, HierarchyMap) {
        let mut hierarchies = HierarchyMap::new();
        hierarchies.insert(
            "age".to_string(),
            matrix(&[
                &["34", "30-39", "*"],
                &["38", "30-39", "*"],
                &["45", "40-49", "*"],
            ]),
        );
        hierarchies.insert(
            "sex".to_string(),
            matrix(&[&["m", "*"], &["f", "*"]]),
        );
        (strings(&["age", "sex"]), hierarchies)
    }

    #[test]
    fn test_identity_output_is_zero() {
        let (header, hierarchies) = setup();
        let measure = Precision::new(&header, &hierarchies).unwrap();
        let output = matrix(&[&["34", "m"], &["45", "f"]]);

        let result = measure.evaluate_identity(&output).unwrap();
        assert!((result.as_scalar().unwrap() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_intermediate_level() {
        let (header, hierarchies) = setup();
        let measure = Precision::new(&header, &hierarchies).unwrap();
        let output = matrix(&[&["30-39", "m"], &["40-49", "f"]]);

        // age at level 1 of 2, sex untouched
        let result = measure.evaluate(&output, &[1, 0]).unwrap();
        assert!((result.as_scalar().unwrap() - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_full_suppression_is_one() {
        let (header, hierarchies) = setup();
        let measure = Precision::new(&header, &hierarchies).unwrap();
        let output = matrix(&[&["*", "*"], &["*", "*"]]);

        let result = measure.evaluate(&output, &[2, 1]).unwrap();
        assert!((result.as_scalar().unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_unknown_value_costs_one() {
        let (header, hierarchies) = setup();
        let measure = Precision::new(&header, &hierarchies).unwrap();
        let output = matrix(&[&["unknown", "m"]]);

        let result = measure.evaluate_identity(&output).unwrap();
        assert!((result.as_scalar().unwrap() - 0.5).abs() < 1e-10);
    }
}
