use std::path::PathBuf;

use thiserror::Error;

use crate::metrics::infrastructure::metric_processing::{GlobalMetrics, PerSampleMetrics};

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize metrics")]
    Serialize(#[from] serde_json::Error),
}

/// Sink for evaluated metrics.
pub trait MetricWriter {
    fn write_global_metrics(&self, metrics: &GlobalMetrics) -> Result<(), WriteError>;

    fn write_per_sample_metrics(&self, metrics: &PerSampleMetrics) -> Result<(), WriteError>;
}
