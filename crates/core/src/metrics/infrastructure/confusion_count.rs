use crate::metrics::domain::metric_parameters::MetricParameters;
use crate::metrics::domain::metric_processor::{count, per_class, MetricInput, MetricProcessor};
use crate::metrics::domain::metric_result::{MetricResult, MetricValue};
use crate::shared::match_entry::Confusion;

pub const TRUE_POSITIVES_ID: u32 = 1029;
pub const FALSE_POSITIVES_ID: u32 = 1030;
pub const FALSE_NEGATIVES_ID: u32 = 1031;

/// Number of rows with one confusion class.
pub struct ConfusionCount {
    identifier: u32,
    name: &'static str,
    confusion: Confusion,
}

impl ConfusionCount {
    pub fn true_positives() -> Self {
        Self {
            identifier: TRUE_POSITIVES_ID,
            name: "Number of True Positives",
            confusion: Confusion::Tp,
        }
    }

    pub fn false_positives() -> Self {
        Self {
            identifier: FALSE_POSITIVES_ID,
            name: "Number of False Positives",
            confusion: Confusion::Fp,
        }
    }

    pub fn false_negatives() -> Self {
        Self {
            identifier: FALSE_NEGATIVES_ID,
            name: "Number of False Negatives",
            confusion: Confusion::Fn,
        }
    }

    pub fn confusion(&self) -> Confusion {
        self.confusion
    }
}

impl MetricProcessor for ConfusionCount {
    fn identifier(&self) -> u32 {
        self.identifier
    }

    fn name(&self) -> &str {
        self.name
    }

    fn calc(&self, input: &MetricInput<'_>, params: &MetricParameters) -> MetricResult {
        per_class(input, params, |rows| {
            MetricValue::Scalar(count(rows, self.confusion) as f64)
        })
    }
}
