pub mod box_correlator;
pub mod matching_policy;
pub mod matching_reduction;
pub mod matching_threshold;
pub mod matching_type;
