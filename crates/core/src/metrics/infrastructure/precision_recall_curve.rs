use ndarray::Array1;

use crate::metrics::domain::metric_parameters::MetricParameters;
use crate::metrics::domain::metric_processor::{count, per_class, MetricInput, MetricProcessor};
use crate::metrics::domain::metric_result::{MetricResult, MetricValue};
use crate::shared::match_entry::{Confusion, MatchEntry};
use crate::shared::numeric::cmp_desc_nan_last;

pub const PRECISION_RECALL_CURVE_ID: u32 = 1040;

/// Recall and precision after each prediction, ranked by confidence.
pub struct PrecisionRecallCurve;

/// Computes `(recall, precision)` over `rows`.
///
/// Without ground truth the recall is `[NaN]`, without predictions the
/// precision is `[NaN]`.
pub fn precision_recall(rows: &[&MatchEntry]) -> (Array1<f64>, Array1<f64>) {
    let n_gt = count(rows, Confusion::Tp) + count(rows, Confusion::Fn);

    let mut ranked: Vec<&MatchEntry> = rows
        .iter()
        .copied()
        .filter(|r| matches!(r.confusion, Confusion::Tp | Confusion::Fp))
        .collect();
    ranked.sort_by(|a, b| cmp_desc_nan_last(a.confidence, b.confidence));

    let cumulative = |confusion: Confusion| -> Array1<f64> {
        ranked
            .iter()
            .scan(0.0, |acc, r| {
                if r.confusion == confusion {
                    *acc += 1.0;
                }
                Some(*acc)
            })
            .collect()
    };
    let mut cum_tp = cumulative(Confusion::Tp);
    let cum_fp = cumulative(Confusion::Fp);
    if cum_tp.is_empty() {
        cum_tp = Array1::zeros(1);
    }

    let recall = if n_gt == 0 {
        Array1::from_elem(1, f64::NAN)
    } else {
        &cum_tp / n_gt as f64
    };
    let precision = if ranked.is_empty() {
        Array1::from_elem(1, f64::NAN)
    } else {
        let predicted = (&cum_tp + &cum_fp).mapv(|n| n.max(f64::EPSILON));
        &cum_tp / &predicted
    };
    (recall, precision)
}

impl MetricProcessor for PrecisionRecallCurve {
    fn identifier(&self) -> u32 {
        PRECISION_RECALL_CURVE_ID
    }

    fn name(&self) -> &str {
        "Precision-Recall Curve"
    }

    fn calc(&self, input: &MetricInput<'_>, params: &MetricParameters) -> MetricResult {
        per_class(input, params, |rows| {
            let (recall, precision) = precision_recall(rows);
            MetricValue::Curve {
                recall: recall.to_vec(),
                precision: precision.to_vec(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::match_table::MatchTable;
    use crate::shared::test_fixtures;
    use approx::assert_relative_eq;

    fn assert_curve(value: &MetricValue, recall: &[f64], precision: &[f64]) {
        let (r, p) = value.as_curve().unwrap();
        assert_eq!(r.len(), recall.len());
        assert_eq!(p.len(), precision.len());
        for (a, b) in r.iter().zip(recall) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
        for (a, b) in p.iter().zip(precision) {
            if b.is_nan() {
                assert!(a.is_nan());
            } else {
                assert_relative_eq!(*a, *b, epsilon = 1e-12);
            }
        }
    }

    // ── global ──

    #[test]
    fn test_global_curves() {
        let matching = test_fixtures::metric_matching();
        let input = MetricInput::new(&[], &[], &matching);
        let result = PrecisionRecallCurve.calc(&input, &MetricParameters::default());

        assert_curve(
            result.get("total").unwrap(),
            &[1.0 / 7.0, 1.0 / 7.0, 2.0 / 7.0, 3.0 / 7.0, 3.0 / 7.0, 4.0 / 7.0],
            &[1.0, 1.0 / 2.0, 2.0 / 3.0, 3.0 / 4.0, 3.0 / 5.0, 4.0 / 6.0],
        );
        assert_curve(
            result.get("human").unwrap(),
            &[1.0 / 6.0, 2.0 / 6.0, 3.0 / 6.0, 3.0 / 6.0, 4.0 / 6.0],
            &[1.0, 1.0, 1.0, 3.0 / 4.0, 4.0 / 5.0],
        );
        assert_curve(result.get("vehicle").unwrap(), &[0.0], &[0.0]);
    }

    // ── degenerate input ──

    #[test]
    fn test_sample_without_predictions() {
        let matching = test_fixtures::metric_matching();
        let input = MetricInput::new(&[], &[], &matching);
        let results = PrecisionRecallCurve.calc_per_sample(&input, &MetricParameters::default());
        assert_curve(results[1].1.get("total").unwrap(), &[0.0], &[f64::NAN]);
    }

    #[test]
    fn test_without_ground_truth_recall_is_nan() {
        let matching = MatchTable::from_rows(vec![MatchEntry::false_positive("s", "s/1", "human", 0.4)]);
        let rows: Vec<&MatchEntry> = matching.rows().iter().collect();
        let (recall, precision) = precision_recall(&rows);
        assert!(recall[0].is_nan());
        assert_eq!(precision.to_vec(), vec![0.0]);
    }

    #[test]
    fn test_nan_confidence_ranks_last() {
        let matching = MatchTable::from_rows(vec![
            MatchEntry::false_positive("s", "s/10", "human", f64::NAN),
            MatchEntry::true_positive("s", "s/1", "s/11", "human", 0.9, 0.2),
        ]);
        let rows: Vec<&MatchEntry> = matching.rows().iter().collect();
        let (recall, precision) = precision_recall(&rows);
        assert_eq!(recall.to_vec(), vec![1.0, 1.0]);
        assert_eq!(precision.to_vec(), vec![1.0, 0.5]);
    }
}
