pub mod metric_formatter;
pub mod metric_writer;
pub mod version_info;
