use std::fs;
use std::path::{Path, PathBuf};

use crate::metrics::infrastructure::metric_processing::{GlobalMetrics, PerSampleMetrics};
use crate::output::domain::metric_formatter::MetricFormatter;
use crate::output::domain::metric_writer::{MetricWriter, WriteError};
use crate::output::domain::version_info::VersionInfo;
use crate::shared::constants::{BOUNDING_BOX_2D_FOLDER, EVALUATION_FOLDER, GLOBAL_METRICS_FILE};

/// Writes metric documents below
/// `<output>/evaluations/<company>-<tool>-<release>-<commit>/2d-bounding-box_json/`.
pub struct JsonMetricWriter {
    formatter: MetricFormatter,
    folder: PathBuf,
}

impl JsonMetricWriter {
    pub fn new(version: VersionInfo, output_path: impl AsRef<Path>) -> Self {
        let folder = output_path
            .as_ref()
            .join(EVALUATION_FOLDER)
            .join(version.folder_name())
            .join(BOUNDING_BOX_2D_FOLDER);
        Self {
            formatter: MetricFormatter::new(&version.version, &version.tool),
            folder,
        }
    }

    pub fn with_formatter(mut self, formatter: MetricFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    fn write_json(&self, file_name: &str, text: &str) -> Result<(), WriteError> {
        let path = self.folder.join(file_name);
        let io_error = |source| WriteError::Io {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(&self.folder).map_err(io_error)?;
        fs::write(&path, text).map_err(io_error)?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// File name of a sample's document: its last `/` segment plus `.json`.
fn sample_file_name(sample_name: &str) -> String {
    let last = sample_name.rsplit('/').next().unwrap_or(sample_name);
    format!("{last}.json")
}

impl MetricWriter for JsonMetricWriter {
    fn write_global_metrics(&self, metrics: &GlobalMetrics) -> Result<(), WriteError> {
        let text = self.formatter.format_global_metrics(metrics)?;
        self.write_json(GLOBAL_METRICS_FILE, &text)
    }

    fn write_per_sample_metrics(&self, metrics: &PerSampleMetrics) -> Result<(), WriteError> {
        let documents = self.formatter.format_per_sample_metrics(metrics)?;
        for (sample_name, text) in &documents {
            self.write_json(&sample_file_name(sample_name), text)?;
        }
        log::info!("Wrote {} per-sample documents to {}", documents.len(), self.folder.display());
        Ok(())
    }
}
