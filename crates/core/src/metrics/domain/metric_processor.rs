use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::metrics::domain::metric_parameters::MetricParameters;
use crate::metrics::domain::metric_result::{MetricResult, MetricValue, SampleResults, TOTAL_KEY};
use crate::shared::annotation::Annotation;
use crate::shared::match_entry::{Confusion, MatchEntry};
use crate::shared::match_table::MatchTable;
use crate::shared::prediction::Prediction;

#[derive(Error, Debug, PartialEq)]
pub enum MetricError {
    #[error("no metric registered with identifier {0}")]
    UnknownMetric(u32),
}

/// Borrowed rows a metric is evaluated on.
#[derive(Clone, Debug, Default)]
pub struct MetricInput<'a> {
    pub annotations: Vec<&'a Annotation>,
    pub predictions: Vec<&'a Prediction>,
    pub matching: Vec<&'a MatchEntry>,
}

impl<'a> MetricInput<'a> {
    pub fn new(
        annotations: &'a [Annotation],
        predictions: &'a [Prediction],
        matching: &'a MatchTable,
    ) -> Self {
        Self {
            annotations: annotations.iter().collect(),
            predictions: predictions.iter().collect(),
            matching: matching.rows().iter().collect(),
        }
    }

    /// Sample names in order of first appearance in the matching.
    pub fn sample_names(&self) -> Vec<&'a str> {
        first_appearance(self.matching.iter().map(|&r| r.sample_name.as_str()))
    }

    /// Class ids in order of first appearance in the matching.
    pub fn class_ids(&self) -> Vec<&'a str> {
        first_appearance(self.matching.iter().map(|&r| r.class_id.as_str()))
    }

    pub fn for_sample(&self, sample_name: &str) -> MetricInput<'a> {
        MetricInput {
            annotations: self
                .annotations
                .iter()
                .copied()
                .filter(|a| a.sample_name == sample_name)
                .collect(),
            predictions: self
                .predictions
                .iter()
                .copied()
                .filter(|p| p.sample_name == sample_name)
                .collect(),
            matching: self
                .matching
                .iter()
                .copied()
                .filter(|r| r.sample_name == sample_name)
                .collect(),
        }
    }

    /// Splits the input into one slice per sample of the matching, in
    /// order of first appearance, with a single pass over each table.
    pub fn by_sample(&self) -> Vec<(&'a str, MetricInput<'a>)> {
        let mut slices: Vec<(&'a str, MetricInput<'a>)> = Vec::new();
        let mut position: HashMap<&'a str, usize> = HashMap::new();
        for &row in &self.matching {
            let name = row.sample_name.as_str();
            let index = *position.entry(name).or_insert_with(|| {
                slices.push((name, MetricInput::default()));
                slices.len() - 1
            });
            slices[index].1.matching.push(row);
        }
        for &annotation in &self.annotations {
            if let Some(&index) = position.get(annotation.sample_name.as_str()) {
                slices[index].1.annotations.push(annotation);
            }
        }
        for &prediction in &self.predictions {
            if let Some(&index) = position.get(prediction.sample_name.as_str()) {
                slices[index].1.predictions.push(prediction);
            }
        }
        slices
    }

    pub fn count(&self, confusion: Confusion) -> usize {
        count(&self.matching, confusion)
    }
}

fn first_appearance<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}

pub fn count(rows: &[&MatchEntry], confusion: Confusion) -> usize {
    rows.iter().filter(|r| r.confusion == confusion).count()
}

/// Evaluates `metric` on all rows under `"total"` and, when configured,
/// once per class on that class's rows.
pub fn per_class<F>(input: &MetricInput<'_>, params: &MetricParameters, metric: F) -> MetricResult
where
    F: Fn(&[&MatchEntry]) -> MetricValue,
{
    let mut result = MetricResult::new();
    result.insert(TOTAL_KEY, metric(&input.matching));
    if params.calculate_per_class {
        for class_id in input.class_ids() {
            let rows: Vec<&MatchEntry> = input
                .matching
                .iter()
                .copied()
                .filter(|r| r.class_id == class_id)
                .collect();
            result.insert(class_id, metric(&rows));
        }
    }
    result
}

/// A named, registered metric over a (reduced) match table.
pub trait MetricProcessor: Send + Sync {
    fn identifier(&self) -> u32;

    fn name(&self) -> &str;

    fn calculate_per_sample(&self) -> bool {
        true
    }

    fn calc(&self, input: &MetricInput<'_>, params: &MetricParameters) -> MetricResult;

    fn calc_global(&self, input: &MetricInput<'_>, params: &MetricParameters) -> MetricResult {
        self.calc(input, params)
    }

    /// One result per sample of the matching. Keys a sample lacks but
    /// another sample has are filled with NaN.
    fn calc_per_sample(&self, input: &MetricInput<'_>, params: &MetricParameters) -> SampleResults {
        let results: Vec<(String, MetricResult)> = input
            .by_sample()
            .into_iter()
            .map(|(name, slice)| (name.to_string(), self.calc(&slice, params)))
            .collect();

        let keys = first_appearance(results.iter().flat_map(|(_, result)| result.keys()));
        results
            .iter()
            .map(|(name, result)| {
                let aligned = keys
                    .iter()
                    .map(|&key| {
                        let value = result
                            .get(key)
                            .cloned()
                            .unwrap_or(MetricValue::Scalar(f64::NAN));
                        (key.to_string(), value)
                    })
                    .collect();
                (name.clone(), aligned)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_fixtures::{self, sample};

    struct RowCount;

    impl MetricProcessor for RowCount {
        fn identifier(&self) -> u32 {
            1
        }

        fn name(&self) -> &str {
            "Row Count"
        }

        fn calc(&self, input: &MetricInput<'_>, params: &MetricParameters) -> MetricResult {
            per_class(input, params, |rows| MetricValue::Scalar(rows.len() as f64))
        }
    }

    // ── input slicing ──

    #[test]
    fn test_sample_and_class_order_follow_first_appearance() {
        let matching = test_fixtures::metric_matching();
        let input = MetricInput::new(&[], &[], &matching);
        assert_eq!(input.sample_names(), vec![sample(0), sample(1)]);
        assert_eq!(input.class_ids(), vec!["vehicle", "human"]);
    }

    #[test]
    fn test_for_sample_slices_all_tables() {
        let annotations = test_fixtures::annotations();
        let predictions = test_fixtures::predictions();
        let matching = test_fixtures::metric_matching();
        let input = MetricInput::new(&annotations, &predictions, &matching);

        let slice = input.for_sample(&sample(1));
        assert_eq!(slice.annotations.len(), 1);
        assert!(slice.predictions.is_empty());
        assert_eq!(slice.matching.len(), 1);
    }

    #[test]
    fn test_by_sample_matches_for_sample() {
        let annotations = test_fixtures::annotations();
        let predictions = test_fixtures::predictions();
        let matching = test_fixtures::metric_matching();
        let input = MetricInput::new(&annotations, &predictions, &matching);

        let slices = input.by_sample();
        let names: Vec<_> = slices.iter().map(|(name, _)| name.to_string()).collect();
        assert_eq!(names, vec![sample(0), sample(1)]);
        for (name, slice) in &slices {
            let expected = input.for_sample(name);
            assert_eq!(slice.annotations.len(), expected.annotations.len());
            assert_eq!(slice.predictions.len(), expected.predictions.len());
            assert_eq!(slice.matching.len(), expected.matching.len());
        }
    }

    // ── provided methods ──

    #[test]
    fn test_per_class_respects_parameter() {
        let matching = test_fixtures::metric_matching();
        let input = MetricInput::new(&[], &[], &matching);
        let without = MetricParameters {
            calculate_per_class: false,
            ..MetricParameters::default()
        };

        let result = RowCount.calc(&input, &MetricParameters::default());
        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["total", "vehicle", "human"]);
        assert_eq!(result.scalar("human"), Some(7.0));
        assert_eq!(RowCount.calc(&input, &without).len(), 1);
    }

    #[test]
    fn test_per_sample_fills_missing_keys_with_nan() {
        let matching = test_fixtures::metric_matching();
        let input = MetricInput::new(&[], &[], &matching);
        let results = RowCount.calc_per_sample(&input, &MetricParameters::default());

        assert_eq!(results.len(), 2);
        let (name, second) = &results[1];
        assert_eq!(name, &sample(1));
        assert_eq!(second.keys().collect::<Vec<_>>(), vec!["total", "vehicle", "human"]);
        assert!(second.scalar("vehicle").unwrap().is_nan());
        assert_eq!(second.scalar("human"), Some(1.0));
    }

    #[test]
    fn test_per_sample_of_empty_input_is_empty() {
        let matching = MatchTable::default();
        let input = MetricInput::new(&[], &[], &matching);
        assert!(RowCount
            .calc_per_sample(&input, &MetricParameters::default())
            .is_empty());
    }
}
