use crate::metrics::domain::metric_processor::{MetricError, MetricProcessor};

use super::confusion_count::{
    ConfusionCount, FALSE_NEGATIVES_ID, FALSE_POSITIVES_ID, TRUE_POSITIVES_ID,
};
use super::confusion_rates::{F1Score, Precision, Recall, F1_SCORE_ID, PRECISION_ID, RECALL_ID};
use super::mean_iou::{MeanIntersectionOverUnion, MEAN_IOU_ID};
use super::precision_recall_curve::{PrecisionRecallCurve, PRECISION_RECALL_CURVE_ID};
use super::voc_map::{VocMap, VOC_MAP_ID};

type Constructor = fn() -> Box<dyn MetricProcessor>;

/// Every known metric, in listing order.
const REGISTRY: &[(u32, Constructor)] = &[
    (MEAN_IOU_ID, || Box::new(MeanIntersectionOverUnion)),
    (F1_SCORE_ID, || Box::new(F1Score)),
    (VOC_MAP_ID, || Box::new(VocMap)),
    (PRECISION_ID, || Box::new(Precision)),
    (RECALL_ID, || Box::new(Recall)),
    (TRUE_POSITIVES_ID, || Box::new(ConfusionCount::true_positives())),
    (FALSE_POSITIVES_ID, || Box::new(ConfusionCount::false_positives())),
    (FALSE_NEGATIVES_ID, || Box::new(ConfusionCount::false_negatives())),
    (PRECISION_RECALL_CURVE_ID, || Box::new(PrecisionRecallCurve)),
];

pub fn create_metric_processor(identifier: u32) -> Result<Box<dyn MetricProcessor>, MetricError> {
    REGISTRY
        .iter()
        .find(|(id, _)| *id == identifier)
        .map(|(_, constructor)| constructor())
        .ok_or(MetricError::UnknownMetric(identifier))
}

/// Processors for `identifiers` in the given order; every processor
/// when the list is empty.
pub fn create_metric_processors(
    identifiers: &[u32],
) -> Result<Vec<Box<dyn MetricProcessor>>, MetricError> {
    if identifiers.is_empty() {
        log::info!("No metrics selected, computing all {}", REGISTRY.len());
        return Ok(all_metric_processors());
    }
    let processors = identifiers
        .iter()
        .map(|&id| create_metric_processor(id))
        .collect::<Result<Vec<_>, _>>()?;
    log::info!(
        "Computing metrics {:?}",
        processors.iter().map(|p| p.identifier()).collect::<Vec<_>>()
    );
    Ok(processors)
}

pub fn all_metric_processors() -> Vec<Box<dyn MetricProcessor>> {
    REGISTRY.iter().map(|(_, constructor)| constructor()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::miou(1000, "Mean Intersection Over Union")]
    #[case::f1(1001, "F1-Score")]
    #[case::map(1003, "VOC mAP")]
    #[case::precision(1027, "Precision")]
    #[case::recall(1028, "Recall")]
    #[case::tp(1029, "Number of True Positives")]
    #[case::fp(1030, "Number of False Positives")]
    #[case::fn_(1031, "Number of False Negatives")]
    #[case::pr_curve(1040, "Precision-Recall Curve")]
    fn test_registered_metrics(#[case] identifier: u32, #[case] name: &str) {
        let processor = create_metric_processor(identifier).unwrap();
        assert_eq!(processor.identifier(), identifier);
        assert_eq!(processor.name(), name);
        assert!(processor.calculate_per_sample());
    }

    #[test]
    fn test_unknown_identifier() {
        assert_eq!(
            create_metric_processor(4242).err(),
            Some(MetricError::UnknownMetric(4242))
        );
    }

    #[test]
    fn test_empty_selection_means_all() {
        assert_eq!(create_metric_processors(&[]).unwrap().len(), 9);
    }

    #[test]
    fn test_selection_keeps_requested_order() {
        let ids: Vec<u32> = create_metric_processors(&[1040, 1001])
            .unwrap()
            .iter()
            .map(|p| p.identifier())
            .collect();
        assert_eq!(ids, vec![1040, 1001]);
    }

    #[test]
    fn test_selection_with_unknown_fails() {
        assert!(create_metric_processors(&[1001, 9]).is_err());
    }
}
