pub mod dataset_reader;
pub mod splits;
