use crate::correlation::domain::matching_policy::{
    MatchCriterion, MatchingPolicy, Partition, PolicyMatches,
};

/// n-to-m matching: every detection/annotation pair at or above the
/// threshold is a true positive.
pub struct CompleteMatching;

impl MatchingPolicy for CompleteMatching {
    fn match_boxes(&self, partition: &Partition<'_>, criterion: &MatchCriterion) -> PolicyMatches {
        let mut matches = PolicyMatches::unclaimed(partition);
        for (d, detection) in partition.detections.iter().enumerate() {
            for (a, annotation) in partition.annotations.iter().enumerate() {
                let match_value = criterion.score(detection, annotation);
                if criterion.accepts(match_value) {
                    matches.claim(partition, criterion, a, d, match_value);
                }
            }
        }
        matches
    }
}
