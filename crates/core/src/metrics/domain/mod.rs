pub mod metric_parameters;
pub mod metric_processor;
pub mod metric_result;
