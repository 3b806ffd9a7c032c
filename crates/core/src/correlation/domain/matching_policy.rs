use crate::shared::annotation::Annotation;
use crate::shared::bounding_box::ClipWindow;
use crate::shared::box_record::BoxRecord;
use crate::shared::constants::{CENTER_COLUMN, CONFIDENCE_COLUMN, IOU_COLUMN, SIZE_COLUMN};
use crate::shared::match_entry::MatchEntry;
use crate::shared::match_table::MatchColumns;
use crate::shared::prediction::Prediction;

/// Column names the correlator reads boxes and confidences from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnNames {
    pub confidence: String,
    pub annotation_center: String,
    pub annotation_size: String,
    pub detection_center: String,
    pub detection_size: String,
    /// Output name of the IoU column.
    pub match_value: String,
}

impl ColumnNames {
    pub fn match_columns(&self) -> MatchColumns {
        MatchColumns {
            match_value: self.match_value.clone(),
            confidence: self.confidence.clone(),
        }
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            confidence: CONFIDENCE_COLUMN.to_string(),
            annotation_center: CENTER_COLUMN.to_string(),
            annotation_size: SIZE_COLUMN.to_string(),
            detection_center: CENTER_COLUMN.to_string(),
            detection_size: SIZE_COLUMN.to_string(),
            match_value: IOU_COLUMN.to_string(),
        }
    }
}

/// The rows of one `(sample, class)` pair, in input order.
pub struct Partition<'a> {
    pub sample_name: &'a str,
    pub class_id: &'a str,
    pub annotations: Vec<&'a Annotation>,
    pub detections: Vec<&'a Prediction>,
}

/// Scoring rule shared by all policies: clipped IoU against a threshold.
#[derive(Clone, Debug)]
pub struct MatchCriterion {
    pub threshold: f64,
    pub window: ClipWindow,
    pub columns: ColumnNames,
}

impl MatchCriterion {
    pub fn score(&self, detection: &Prediction, annotation: &Annotation) -> f64 {
        let detection_box =
            detection.bounding_box(&self.columns.detection_center, &self.columns.detection_size);
        let annotation_box = annotation
            .bounding_box(&self.columns.annotation_center, &self.columns.annotation_size);
        detection_box.iou(&annotation_box, &self.window)
    }

    pub fn accepts(&self, match_value: f64) -> bool {
        match_value >= self.threshold
    }

    pub fn confidence(&self, detection: &Prediction) -> f64 {
        detection.confidence_from(&self.columns.confidence)
    }
}

/// True positives found in a partition plus claim flags, positionally
/// aligned with `Partition::annotations` and `Partition::detections`.
#[derive(Debug)]
pub struct PolicyMatches {
    pub true_positives: Vec<MatchEntry>,
    pub annotation_claimed: Vec<bool>,
    pub detection_claimed: Vec<bool>,
}

impl PolicyMatches {
    pub fn unclaimed(partition: &Partition<'_>) -> Self {
        Self {
            true_positives: Vec::new(),
            annotation_claimed: vec![false; partition.annotations.len()],
            detection_claimed: vec![false; partition.detections.len()],
        }
    }

    /// Records a true positive between annotation `a` and detection `d`.
    pub fn claim(
        &mut self,
        partition: &Partition<'_>,
        criterion: &MatchCriterion,
        a: usize,
        d: usize,
        match_value: f64,
    ) {
        let annotation = partition.annotations[a];
        let detection = partition.detections[d];
        self.true_positives.push(MatchEntry::true_positive(
            partition.sample_name,
            &annotation.index,
            &detection.index,
            partition.class_id,
            match_value,
            criterion.confidence(detection),
        ));
        self.annotation_claimed[a] = true;
        self.detection_claimed[d] = true;
    }
}

/// Decides which detection/annotation pairs of a partition match.
///
/// Unclaimed rows are turned into `fp`/`fn` entries by the caller.
pub trait MatchingPolicy: Send + Sync {
    fn match_boxes(&self, partition: &Partition<'_>, criterion: &MatchCriterion) -> PolicyMatches;
}
