use crate::metrics::domain::metric_parameters::MetricParameters;
use crate::metrics::domain::metric_processor::{count, per_class, MetricInput, MetricProcessor};
use crate::metrics::domain::metric_result::{MetricResult, MetricValue};
use crate::shared::match_entry::{Confusion, MatchEntry};
use crate::shared::numeric::ratio;

pub const F1_SCORE_ID: u32 = 1001;
pub const PRECISION_ID: u32 = 1027;
pub const RECALL_ID: u32 = 1028;

struct Counts {
    tp: f64,
    fp: f64,
    fn_: f64,
}

impl Counts {
    fn of(rows: &[&MatchEntry]) -> Self {
        Self {
            tp: count(rows, Confusion::Tp) as f64,
            fp: count(rows, Confusion::Fp) as f64,
            fn_: count(rows, Confusion::Fn) as f64,
        }
    }
}

/// `tp / (tp + fp)`
pub struct Precision;

impl MetricProcessor for Precision {
    fn identifier(&self) -> u32 {
        PRECISION_ID
    }

    fn name(&self) -> &str {
        "Precision"
    }

    fn calc(&self, input: &MetricInput<'_>, params: &MetricParameters) -> MetricResult {
        per_class(input, params, |rows| {
            let c = Counts::of(rows);
            MetricValue::Scalar(ratio(c.tp, c.tp + c.fp))
        })
    }
}

/// `tp / (tp + fn)`
pub struct Recall;

impl MetricProcessor for Recall {
    fn identifier(&self) -> u32 {
        RECALL_ID
    }

    fn name(&self) -> &str {
        "Recall"
    }

    fn calc(&self, input: &MetricInput<'_>, params: &MetricParameters) -> MetricResult {
        per_class(input, params, |rows| {
            let c = Counts::of(rows);
            MetricValue::Scalar(ratio(c.tp, c.tp + c.fn_))
        })
    }
}

/// `2tp / (2tp + fp + fn)`
pub struct F1Score;

impl MetricProcessor for F1Score {
    fn identifier(&self) -> u32 {
        F1_SCORE_ID
    }

    fn name(&self) -> &str {
        "F1-Score"
    }

    fn calc(&self, input: &MetricInput<'_>, params: &MetricParameters) -> MetricResult {
        per_class(input, params, |rows| {
            let c = Counts::of(rows);
            MetricValue::Scalar(ratio(2.0 * c.tp, 2.0 * c.tp + c.fp + c.fn_))
        })
    }
}
