use std::collections::HashSet;

use crate::shared::match_entry::{Confusion, MatchEntry};
use crate::shared::match_table::{sort_canonical, MatchTable};
use crate::shared::numeric::cmp_desc_nan_last;

/// Rows of one sample split by confusion, each in table order.
pub(crate) struct ConfusionSplit<'a> {
    pub tp: Vec<&'a MatchEntry>,
    pub fp: Vec<&'a MatchEntry>,
    pub fn_: Vec<&'a MatchEntry>,
}

impl<'a> ConfusionSplit<'a> {
    pub fn new(rows: &[&'a MatchEntry]) -> Self {
        let mut split = Self {
            tp: Vec::new(),
            fp: Vec::new(),
            fn_: Vec::new(),
        };
        for &row in rows {
            match row.confusion {
                Confusion::Tp => split.tp.push(row),
                Confusion::Fp => split.fp.push(row),
                Confusion::Fn => split.fn_.push(row),
            }
        }
        split
    }
}

/// First row for each distinct key, in order.
pub(crate) fn first_by_key<'a, K, F>(rows: &[&'a MatchEntry], key: F) -> Vec<&'a MatchEntry>
where
    K: Eq + std::hash::Hash,
    F: Fn(&MatchEntry) -> K,
{
    let mut seen = HashSet::new();
    rows.iter()
        .copied()
        .filter(|row| seen.insert(key(row)))
        .collect()
}

/// Indices of `column` over `rows`.
pub(crate) fn index_set<'a>(
    rows: &[&'a MatchEntry],
    column: fn(&MatchEntry) -> Option<&str>,
) -> HashSet<&'a str> {
    rows.iter().filter_map(|&row| column(row)).collect()
}

pub(crate) fn annotation_of(row: &MatchEntry) -> Option<&str> {
    row.annotation_index.as_deref()
}

pub(crate) fn detection_of(row: &MatchEntry) -> Option<&str> {
    row.detection_index.as_deref()
}

/// Reduces a possibly many-to-many match table to a one-to-one table.
///
/// Works sample by sample. True positives are ranked by confidence, then
/// IoU; duplicates are dropped on the detection side first and on the
/// annotation side second, so confidence beats overlap. Every index that
/// loses all of its true positives comes back once as `fp` or `fn`.
pub struct MatchingReduction {
    sort_output: bool,
}

impl MatchingReduction {
    pub fn new() -> Self {
        Self { sort_output: true }
    }

    pub fn with_sort_output(mut self, sort_output: bool) -> Self {
        self.sort_output = sort_output;
        self
    }

    pub fn reduce_to_exclusive(&self, matching: &MatchTable) -> MatchTable {
        let mut rows = Vec::with_capacity(matching.len());
        for (sample_name, sample_rows) in matching.group_by_sample() {
            let mut reduced = reduce_sample(&sample_rows);
            if self.sort_output {
                sort_canonical(&mut reduced);
            }
            log::debug!(
                "Reduced sample {} from {} to {} rows",
                sample_name,
                sample_rows.len(),
                reduced.len()
            );
            rows.extend(reduced);
        }
        matching.with_rows(rows)
    }
}

impl Default for MatchingReduction {
    fn default() -> Self {
        Self::new()
    }
}

fn reduce_sample(rows: &[&MatchEntry]) -> Vec<MatchEntry> {
    let split = ConfusionSplit::new(rows);

    let mut ranked = split.tp.clone();
    ranked.sort_by(|a, b| {
        cmp_desc_nan_last(a.confidence, b.confidence)
            .then_with(|| cmp_desc_nan_last(a.match_value, b.match_value))
    });

    let unique_detections = first_by_key(&ranked, |r| r.detection_index.clone());
    let keep = first_by_key(&unique_detections, |r| r.annotation_index.clone());

    let kept_annotations = index_set(&keep, annotation_of);
    let kept_detections = index_set(&keep, detection_of);

    let lost_annotations: Vec<&MatchEntry> = ranked
        .iter()
        .copied()
        .filter(|r| annotation_of(r).is_some_and(|a| !kept_annotations.contains(a)))
        .collect();
    let fn_new = first_by_key(&lost_annotations, |r| r.annotation_index.clone());

    let lost_detections: Vec<&MatchEntry> = ranked
        .iter()
        .copied()
        .filter(|r| detection_of(r).is_some_and(|d| !kept_detections.contains(d)))
        .collect();
    let fp_new = first_by_key(&lost_detections, |r| r.detection_index.clone());

    keep.into_iter()
        .cloned()
        .chain(split.fp.into_iter().cloned())
        .chain(fp_new.into_iter().map(MatchEntry::demote_to_false_positive))
        .chain(split.fn_.into_iter().cloned())
        .chain(fn_new.into_iter().map(MatchEntry::demote_to_false_negative))
        .collect()
}
