use ndarray::Array1;

use crate::metrics::domain::metric_parameters::{ApIntegrationMode, MetricParameters};
use crate::metrics::domain::metric_processor::{MetricInput, MetricProcessor};
use crate::metrics::domain::metric_result::{MetricResult, MetricValue};
use crate::metrics::infrastructure::precision_recall_curve::precision_recall;
use crate::shared::match_entry::MatchEntry;
use crate::shared::numeric::nan_max;

pub const VOC_MAP_ID: u32 = 1003;

pub const MAP_KEY: &str = "mAP";

/// PASCAL VOC average precision per class and its mean.
pub struct VocMap;

/// Eleven-point interpolated AP. `eps` widens the recall window
/// the maximum precision is taken over.
pub fn voc_ap_2007(recall: &Array1<f64>, precision: &Array1<f64>, eps: f64) -> f64 {
    let mut score = 0.0;
    for i in 0..=10 {
        let threshold = i as f64 * 0.1;
        if !recall.iter().any(|&r| r >= threshold) {
            continue;
        }
        let best = recall
            .iter()
            .zip(precision.iter())
            .filter(|(r, _)| **r >= threshold - eps)
            .map(|(_, &p)| p)
            .fold(f64::NEG_INFINITY, nan_max);
        score += best;
    }
    score / 11.0
}

/// AP as the area under the monotone precision envelope.
pub fn voc_ap_exact(recall: &Array1<f64>, precision: &Array1<f64>) -> f64 {
    if recall.iter().chain(precision.iter()).any(|v| v.is_nan()) {
        return f64::NAN;
    }
    let pad = |first: f64, values: &Array1<f64>, last: f64| -> Array1<f64> {
        std::iter::once(first)
            .chain(values.iter().copied())
            .chain(std::iter::once(last))
            .collect()
    };
    let mrec = pad(0.0, recall, 1.0);
    let mut mpre = pad(0.0, precision, 0.0);

    for i in (1..mpre.len()).rev() {
        mpre[i - 1] = mpre[i - 1].max(mpre[i]);
    }
    (1..mrec.len())
        .filter(|&i| mrec[i] != mrec[i - 1])
        .map(|i| (mrec[i] - mrec[i - 1]) * mpre[i])
        .sum()
}

fn average_precision(rows: &[&MatchEntry], params: &MetricParameters) -> f64 {
    let (recall, precision) = precision_recall(rows);
    match params.ap_integration_mode {
        ApIntegrationMode::ElevenPoint => voc_ap_2007(&recall, &precision, params.eps),
        ApIntegrationMode::Exact => voc_ap_exact(&recall, &precision),
    }
}

impl MetricProcessor for VocMap {
    fn identifier(&self) -> u32 {
        VOC_MAP_ID
    }

    fn name(&self) -> &str {
        "VOC mAP"
    }

    fn calc(&self, input: &MetricInput<'_>, params: &MetricParameters) -> MetricResult {
        let mut per_class = MetricResult::new();
        for class_id in input.class_ids() {
            let rows: Vec<&MatchEntry> = input
                .matching
                .iter()
                .copied()
                .filter(|r| r.class_id == class_id)
                .collect();
            per_class.insert(class_id, MetricValue::Scalar(average_precision(&rows, params)));
        }

        let scores: Vec<f64> = per_class.iter().filter_map(|(_, v)| v.as_scalar()).collect();
        let mean = if scores.is_empty() {
            f64::NAN
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };

        let mut result = if params.calculate_per_class {
            per_class
        } else {
            MetricResult::new()
        };
        result.insert(MAP_KEY, MetricValue::Scalar(mean));
        result
    }
}
