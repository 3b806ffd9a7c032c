pub mod complete_matching;
pub mod exclusive_matching;
pub mod matching_policy_factory;
