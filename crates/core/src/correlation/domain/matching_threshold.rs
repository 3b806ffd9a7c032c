use crate::correlation::domain::matching_reduction::{
    annotation_of, detection_of, first_by_key, index_set, ConfusionSplit,
};
use crate::shared::match_entry::MatchEntry;
use crate::shared::match_table::{sort_canonical, MatchTable};

/// Re-applies a stricter IoU or confidence threshold to an existing
/// match table without recomputing any overlap.
///
/// Only raising the threshold is meaningful. A lower threshold is not
/// rejected, but it cannot bring back pairs the original run discarded.
pub struct MatchingThreshold {
    sort_output: bool,
}

impl MatchingThreshold {
    pub fn new() -> Self {
        Self { sort_output: true }
    }

    pub fn with_sort_output(mut self, sort_output: bool) -> Self {
        self.sort_output = sort_output;
        self
    }

    /// Drops true positives with IoU below `iou_threshold`.
    ///
    /// An annotation or detection left without any true positive comes
    /// back once as `fn` or `fp`. Rows with an unavailable IoU are
    /// neither kept nor demoted.
    pub fn apply_iou_threshold(&self, matching: &MatchTable, iou_threshold: f64) -> MatchTable {
        self.per_sample(matching, |rows| {
            let split = ConfusionSplit::new(rows);
            let (keep, check) = partition_by(&split.tp, |r| r.match_value, iou_threshold);

            let kept_annotations = index_set(&keep, annotation_of);
            let kept_detections = index_set(&keep, detection_of);

            let fp_update = first_by_key(
                &check
                    .iter()
                    .copied()
                    .filter(|r| detection_of(r).is_some_and(|d| !kept_detections.contains(d)))
                    .collect::<Vec<_>>(),
                |r| r.detection_index.clone(),
            );
            let fn_update = first_by_key(
                &check
                    .iter()
                    .copied()
                    .filter(|r| annotation_of(r).is_some_and(|a| !kept_annotations.contains(a)))
                    .collect::<Vec<_>>(),
                |r| r.annotation_index.clone(),
            );

            keep.into_iter()
                .cloned()
                .chain(split.fp.into_iter().cloned())
                .chain(fp_update.into_iter().map(MatchEntry::demote_to_false_positive))
                .chain(split.fn_.into_iter().cloned())
                .chain(fn_update.into_iter().map(MatchEntry::demote_to_false_negative))
                .collect()
        })
    }

    /// Drops true and false positives with confidence below
    /// `confidence_threshold`.
    ///
    /// Annotations left without any true positive become `fn`. A dropped
    /// detection simply disappears.
    pub fn apply_confidence_threshold(
        &self,
        matching: &MatchTable,
        confidence_threshold: f64,
    ) -> MatchTable {
        self.per_sample(matching, |rows| {
            let split = ConfusionSplit::new(rows);
            let fp_keep: Vec<&MatchEntry> = split
                .fp
                .iter()
                .copied()
                .filter(|r| r.confidence >= confidence_threshold)
                .collect();
            let (keep, check) = partition_by(&split.tp, |r| r.confidence, confidence_threshold);

            let kept_annotations = index_set(&keep, annotation_of);
            let fn_update = first_by_key(
                &check
                    .iter()
                    .copied()
                    .filter(|r| annotation_of(r).is_some_and(|a| !kept_annotations.contains(a)))
                    .collect::<Vec<_>>(),
                |r| r.annotation_index.clone(),
            );

            keep.into_iter()
                .cloned()
                .chain(fp_keep.into_iter().cloned())
                .chain(split.fn_.into_iter().cloned())
                .chain(fn_update.into_iter().map(MatchEntry::demote_to_false_negative))
                .collect()
        })
    }

    fn per_sample<F>(&self, matching: &MatchTable, update: F) -> MatchTable
    where
        F: Fn(&[&MatchEntry]) -> Vec<MatchEntry>,
    {
        let mut rows = Vec::with_capacity(matching.len());
        for sample_rows in matching.group_by_sample().values() {
            let mut updated = update(sample_rows);
            if self.sort_output {
                sort_canonical(&mut updated);
            }
            rows.extend(updated);
        }
        log::debug!("Threshold update: {} -> {} rows", matching.len(), rows.len());
        matching.with_rows(rows)
    }
}

impl Default for MatchingThreshold {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows at or above `threshold`, and rows strictly below it.
/// NaN values land in neither list.
fn partition_by<'a>(
    rows: &[&'a MatchEntry],
    value: fn(&MatchEntry) -> f64,
    threshold: f64,
) -> (Vec<&'a MatchEntry>, Vec<&'a MatchEntry>) {
    let keep = rows.iter().copied().filter(|r| value(r) >= threshold).collect();
    let check = rows.iter().copied().filter(|r| value(r) < threshold).collect();
    (keep, check)
}
