use crate::correlation::domain::matching_policy::MatchingPolicy;
use crate::correlation::domain::matching_type::MatchingType;

use super::complete_matching::CompleteMatching;
use super::exclusive_matching::ExclusiveMatching;

/// Builds the policy for `matching_type`, logging the choice.
pub fn create_matching_policy(matching_type: MatchingType) -> Box<dyn MatchingPolicy> {
    log::info!("Using {} box matching", matching_type);
    match matching_type {
        MatchingType::Complete => Box::new(CompleteMatching),
        MatchingType::Exclusive => Box::new(ExclusiveMatching),
    }
}
