pub mod dataset_filter;
pub mod filter;
