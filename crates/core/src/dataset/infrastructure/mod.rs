pub mod json_dataset_reader;
