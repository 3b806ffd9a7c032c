pub mod evaluate_use_case;
pub mod infrastructure;
pub mod sample_executor;
