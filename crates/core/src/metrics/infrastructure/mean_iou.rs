use crate::metrics::domain::metric_parameters::MetricParameters;
use crate::metrics::domain::metric_processor::{per_class, MetricInput, MetricProcessor};
use crate::metrics::domain::metric_result::{MetricResult, MetricValue};
use crate::shared::match_entry::{Confusion, MatchEntry};

pub const MEAN_IOU_ID: u32 = 1000;

/// Mean IoU over `tp` and `fn` rows; a missed annotation counts as 0.
pub struct MeanIntersectionOverUnion;

fn mean_iou(rows: &[&MatchEntry]) -> f64 {
    let values: Vec<f64> = rows
        .iter()
        .filter(|r| matches!(r.confusion, Confusion::Tp | Confusion::Fn))
        .map(|r| if r.match_value.is_nan() { 0.0 } else { r.match_value })
        .collect();
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

impl MetricProcessor for MeanIntersectionOverUnion {
    fn identifier(&self) -> u32 {
        MEAN_IOU_ID
    }

    fn name(&self) -> &str {
        "Mean Intersection Over Union"
    }

    fn calc(&self, input: &MetricInput<'_>, params: &MetricParameters) -> MetricResult {
        per_class(input, params, |rows| MetricValue::Scalar(mean_iou(rows)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::match_table::MatchTable;
    use crate::shared::test_fixtures;
    use approx::assert_relative_eq;

    #[test]
    fn test_global() {
        let matching = test_fixtures::metric_matching();
        let input = MetricInput::new(&[], &[], &matching);
        let result = MeanIntersectionOverUnion.calc(&input, &MetricParameters::default());

        assert_relative_eq!(result.scalar("total").unwrap(), 3.15 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(result.scalar("human").unwrap(), 3.15 / 6.0, epsilon = 1e-12);
        assert_eq!(result.scalar("vehicle"), Some(0.0));
    }

    #[test]
    fn test_per_sample() {
        let matching = test_fixtures::metric_matching();
        let input = MetricInput::new(&[], &[], &matching);
        let results = MeanIntersectionOverUnion.calc_per_sample(&input, &MetricParameters::default());

        assert_relative_eq!(results[0].1.scalar("total").unwrap(), 3.15 / 6.0, epsilon = 1e-12);
        assert_eq!(results[1].1.scalar("total"), Some(0.0));
    }

    #[test]
    fn test_only_false_positives_is_nan() {
        let matching = MatchTable::from_rows(vec![MatchEntry::false_positive("s", "s/1", "human", 0.4)]);
        let input = MetricInput::new(&[], &[], &matching);
        let result = MeanIntersectionOverUnion.calc(&input, &MetricParameters::default());
        assert!(result.scalar("total").unwrap().is_nan());
    }
}
