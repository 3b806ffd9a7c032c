pub mod json_metric_writer;
