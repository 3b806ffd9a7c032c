use crate::correlation::domain::matching_policy::{
    MatchCriterion, MatchingPolicy, Partition, PolicyMatches,
};
use crate::shared::numeric::cmp_desc_nan_last;

/// Greedy one-to-one matching in descending confidence order.
///
/// Each detection takes its best-overlapping annotation if that overlap
/// reaches the threshold and a more confident detection has not already
/// taken it. A detection whose best annotation is taken stays unmatched;
/// it does not fall back to its second-best annotation.
pub struct ExclusiveMatching;

impl MatchingPolicy for ExclusiveMatching {
    fn match_boxes(&self, partition: &Partition<'_>, criterion: &MatchCriterion) -> PolicyMatches {
        let mut matches = PolicyMatches::unclaimed(partition);

        let mut order: Vec<usize> = (0..partition.detections.len()).collect();
        order.sort_by(|&i, &j| {
            cmp_desc_nan_last(
                criterion.confidence(partition.detections[i]),
                criterion.confidence(partition.detections[j]),
            )
        });

        for d in order {
            let detection = partition.detections[d];
            let mut best: Option<(usize, f64)> = None;
            let mut best_value = f64::NEG_INFINITY;
            for (a, annotation) in partition.annotations.iter().enumerate() {
                let match_value = criterion.score(detection, annotation);
                // Strict comparison: equal overlaps keep the earlier annotation.
                if match_value > best_value {
                    best_value = match_value;
                    best = Some((a, match_value));
                }
            }

            if let Some((a, match_value)) = best {
                if criterion.accepts(match_value) && !matches.annotation_claimed[a] {
                    matches.claim(partition, criterion, a, d, match_value);
                }
            }
        }
        matches
    }
}
