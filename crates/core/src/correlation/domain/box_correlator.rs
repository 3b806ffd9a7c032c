use std::collections::{BTreeSet, HashMap};

use crate::correlation::domain::matching_policy::{
    ColumnNames, MatchCriterion, MatchingPolicy, Partition,
};
use crate::correlation::domain::matching_type::{CorrelationError, MatchingType};
use crate::correlation::infrastructure::matching_policy_factory::create_matching_policy;
use crate::pipeline::sample_executor::{SampleExecutor, SequentialSampleExecutor};
use crate::shared::annotation::Annotation;
use crate::shared::bounding_box::ClipWindow;
use crate::shared::constants::{DEFAULT_MATCH_THRESHOLD, FRAME_HEIGHT, FRAME_WIDTH};
use crate::shared::match_entry::MatchEntry;
use crate::shared::match_table::MatchTable;
use crate::shared::prediction::Prediction;

/// Options a [`BoxCorrelator`] is built from.
#[derive(Clone, Debug)]
pub struct CorrelatorOptions {
    pub threshold: f64,
    pub matching_type: String,
    pub clip_truncated_boxes: bool,
    pub columns: ColumnNames,
    /// Horizontal clip range. Ignored unless `clip_truncated_boxes`;
    /// defaults to the frame width.
    pub clip_x: Option<[f64; 2]>,
    /// Vertical clip range. Ignored unless `clip_truncated_boxes`;
    /// defaults to the frame height.
    pub clip_y: Option<[f64; 2]>,
    /// Classes to correlate. Empty means all classes.
    pub match_classes: Vec<String>,
}

impl Default for CorrelatorOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
            matching_type: MatchingType::Complete.as_str().to_string(),
            clip_truncated_boxes: true,
            columns: ColumnNames::default(),
            clip_x: None,
            clip_y: None,
            match_classes: Vec::new(),
        }
    }
}

/// Correlates annotated and predicted boxes into a match table.
///
/// Samples come from the annotation table, so predictions of a sample
/// without annotations never show up in the output. Within a sample,
/// each class is matched separately under the configured policy, and
/// whatever the policy leaves unclaimed becomes `fp` or `fn`.
pub struct BoxCorrelator {
    matching_type: MatchingType,
    clip_truncated_boxes: bool,
    policy: Box<dyn MatchingPolicy>,
    criterion: MatchCriterion,
    match_classes: Vec<String>,
    executor: Box<dyn SampleExecutor>,
}

impl BoxCorrelator {
    pub fn new(options: CorrelatorOptions) -> Result<Self, CorrelationError> {
        let matching_type: MatchingType = options.matching_type.parse()?;
        let window = if options.clip_truncated_boxes {
            ClipWindow::new(
                options.clip_x.unwrap_or([0.0, FRAME_WIDTH]),
                options.clip_y.unwrap_or([0.0, FRAME_HEIGHT]),
            )
        } else {
            ClipWindow::unbounded()
        };
        log::debug!(
            "Correlator threshold={} clip_x={:?} clip_y={:?}",
            options.threshold,
            window.x,
            window.y
        );

        Ok(Self {
            matching_type,
            clip_truncated_boxes: options.clip_truncated_boxes,
            policy: create_matching_policy(matching_type),
            criterion: MatchCriterion {
                threshold: options.threshold,
                window,
                columns: options.columns,
            },
            match_classes: options.match_classes,
            executor: Box::new(SequentialSampleExecutor),
        })
    }

    /// Replaces the executor that runs the per-sample loop.
    pub fn with_executor(mut self, executor: Box<dyn SampleExecutor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.criterion.threshold
    }

    pub fn matching_type(&self) -> MatchingType {
        self.matching_type
    }

    pub fn clip_truncated_boxes(&self) -> bool {
        self.clip_truncated_boxes
    }

    pub fn clip_window(&self) -> ClipWindow {
        self.criterion.window
    }

    pub fn columns(&self) -> &ColumnNames {
        &self.criterion.columns
    }

    pub fn correlate(&self, annotations: &[Annotation], predictions: &[Prediction]) -> MatchTable {
        let match_columns = self.criterion.columns.match_columns();
        if annotations.is_empty() {
            return MatchTable::empty(match_columns);
        }

        let samples: Vec<&str> = annotations
            .iter()
            .map(|a| a.sample_name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let class_ids = self.class_ids(annotations, predictions);

        let annotations_by_sample = group_by_sample(annotations, |a| &a.sample_name);
        let predictions_by_sample = group_by_sample(predictions, |p| &p.sample_name);
        log::debug!(
            "Correlating {} samples over {} classes",
            samples.len(),
            class_ids.len()
        );

        let job = |i: usize| {
            let sample_name = samples[i];
            let sample_annotations = annotations_by_sample
                .get(sample_name)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let sample_predictions = predictions_by_sample
                .get(sample_name)
                .map(Vec::as_slice)
                .unwrap_or_default();
            self.correlate_sample(sample_name, &class_ids, sample_annotations, sample_predictions)
        };

        let rows: Vec<MatchEntry> = self
            .executor
            .run(samples.len(), &job)
            .into_iter()
            .flatten()
            .collect();
        log::debug!("Correlation produced {} rows", rows.len());
        MatchTable::new(match_columns, rows)
    }

    /// Sorted union of both tables' classes, narrowed by `match_classes`.
    fn class_ids<'a>(
        &self,
        annotations: &'a [Annotation],
        predictions: &'a [Prediction],
    ) -> Vec<&'a str> {
        annotations
            .iter()
            .map(|a| a.class_id.as_str())
            .chain(predictions.iter().map(|p| p.class_id.as_str()))
            .filter(|class_id| {
                self.match_classes.is_empty() || self.match_classes.iter().any(|c| c == class_id)
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn correlate_sample(
        &self,
        sample_name: &str,
        class_ids: &[&str],
        annotations: &[&Annotation],
        predictions: &[&Prediction],
    ) -> Vec<MatchEntry> {
        let mut rows = Vec::new();
        for &class_id in class_ids {
            let partition = Partition {
                sample_name,
                class_id,
                annotations: annotations
                    .iter()
                    .copied()
                    .filter(|a| a.class_id == class_id)
                    .collect(),
                detections: predictions
                    .iter()
                    .copied()
                    .filter(|p| p.class_id == class_id)
                    .collect(),
            };
            let matches = self.policy.match_boxes(&partition, &self.criterion);
            rows.extend(matches.true_positives);

            for (detection, _) in partition
                .detections
                .iter()
                .zip(&matches.detection_claimed)
                .filter(|(_, claimed)| !**claimed)
            {
                rows.push(MatchEntry::false_positive(
                    sample_name,
                    &detection.index,
                    class_id,
                    self.criterion.confidence(detection),
                ));
            }
            for (annotation, _) in partition
                .annotations
                .iter()
                .zip(&matches.annotation_claimed)
                .filter(|(_, claimed)| !**claimed)
            {
                rows.push(MatchEntry::false_negative(sample_name, &annotation.index, class_id));
            }
        }
        rows
    }
}

fn group_by_sample<'a, T>(
    rows: &'a [T],
    sample_name: impl Fn(&'a T) -> &'a String,
) -> HashMap<&'a str, Vec<&'a T>> {
    let mut groups: HashMap<&str, Vec<&T>> = HashMap::new();
    for row in rows {
        groups.entry(sample_name(row).as_str()).or_default().push(row);
    }
    groups
}
