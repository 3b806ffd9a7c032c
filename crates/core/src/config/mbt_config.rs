use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::correlation::domain::box_correlator::CorrelatorOptions;
use crate::correlation::domain::matching_policy::ColumnNames;
use crate::dataset::domain::splits;
use crate::filtering::domain::dataset_filter::FilterConfig;
use crate::metrics::domain::metric_parameters::MetricConfig;
use crate::shared::constants::{
    CENTER_COLUMN, CONFIDENCE_COLUMN, DEFAULT_VERSION_FILE, IOU_COLUMN, SIZE_COLUMN,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("config {path} has no `{section}` section")]
    MissingSection { path: PathBuf, section: &'static str },
}

const SECTIONS: [&str; 5] = ["io", "correlate", "filter", "metrics", "writer"];

/// Benchmark configuration; every section must be present.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MbtConfig {
    pub io: IoConfig,
    pub correlate: CorrelateConfig,
    pub filter: FilterConfig,
    pub metrics: MetricConfig,
    pub writer: WriterConfig,
}

impl MbtConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parse_error = |source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        };
        let value: serde_json::Value = serde_json::from_str(&text).map_err(parse_error)?;
        if let Some(section) = SECTIONS.into_iter().find(|s| value.get(s).is_none()) {
            return Err(ConfigError::MissingSection {
                path: path.to_path_buf(),
                section,
            });
        }
        let config: Self = serde_json::from_value(value).map_err(parse_error)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    pub data_path: PathBuf,
    pub predictions_path: PathBuf,
    /// Sub-directory of `predictions_path` holding the results.
    pub results_folder: Option<String>,
    /// Split names or sample-name prefixes to evaluate. Empty means the
    /// official test split.
    pub sequences: Vec<String>,
}

impl IoConfig {
    pub fn resolved_predictions_path(&self) -> PathBuf {
        match &self.results_folder {
            Some(folder) if !folder.is_empty() => self.predictions_path.join(folder),
            _ => self.predictions_path.clone(),
        }
    }

    /// Sample-name prefixes the reader keeps, with split names expanded.
    pub fn resolved_sequences(&self) -> Vec<String> {
        if self.sequences.is_empty() {
            log::info!("No sequences configured, evaluating the official test split");
            return owned_names(splits::official_test_split());
        }
        self.sequences
            .iter()
            .flat_map(|entry| match splits::split(entry) {
                Some(names) => owned_names(names),
                None => vec![entry.clone()],
            })
            .collect()
    }
}

fn owned_names(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CorrelateConfig {
    #[serde(default = "default_iou_threshold")]
    pub iou_threshold: f64,
    #[serde(default = "default_matching_type")]
    pub matching_type: String,
    #[serde(default = "default_clip")]
    pub clip_truncated_boxes: bool,
    #[serde(default)]
    pub optional_arguments: OptionalArguments,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

fn default_iou_threshold() -> f64 {
    0.1
}

fn default_matching_type() -> String {
    "complete".to_string()
}

fn default_clip() -> bool {
    true
}

fn default_num_threads() -> usize {
    1
}

impl Default for CorrelateConfig {
    fn default() -> Self {
        Self {
            iou_threshold: default_iou_threshold(),
            matching_type: default_matching_type(),
            clip_truncated_boxes: default_clip(),
            optional_arguments: OptionalArguments::default(),
            num_threads: default_num_threads(),
        }
    }
}

impl CorrelateConfig {
    pub fn correlator_options(&self) -> CorrelatorOptions {
        let args = &self.optional_arguments;
        CorrelatorOptions {
            threshold: self.iou_threshold,
            matching_type: self.matching_type.clone(),
            clip_truncated_boxes: self.clip_truncated_boxes,
            columns: ColumnNames {
                confidence: args.confidence_col.clone(),
                annotation_center: args.annotation_bb_center_col.clone(),
                annotation_size: args.annotation_bb_size_col.clone(),
                detection_center: args.detection_bb_center_col.clone(),
                detection_size: args.detection_bb_size_col.clone(),
                match_value: args.iou_column_name.clone(),
            },
            clip_x: args.clip_x,
            clip_y: args.clip_y,
            match_classes: args.match_classes.clone(),
        }
    }
}

/// Column overrides and clipping extras of the `correlate` section.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OptionalArguments {
    pub confidence_col: String,
    pub annotation_bb_center_col: String,
    pub annotation_bb_size_col: String,
    pub detection_bb_center_col: String,
    pub detection_bb_size_col: String,
    pub iou_column_name: String,
    pub clip_x: Option<[f64; 2]>,
    pub clip_y: Option<[f64; 2]>,
    pub match_classes: Vec<String>,
}

impl Default for OptionalArguments {
    fn default() -> Self {
        Self {
            confidence_col: CONFIDENCE_COLUMN.to_string(),
            annotation_bb_center_col: CENTER_COLUMN.to_string(),
            annotation_bb_size_col: SIZE_COLUMN.to_string(),
            detection_bb_center_col: CENTER_COLUMN.to_string(),
            detection_bb_size_col: SIZE_COLUMN.to_string(),
            iou_column_name: IOU_COLUMN.to_string(),
            clip_x: None,
            clip_y: None,
            match_classes: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    pub version_file: PathBuf,
    pub output_path: PathBuf,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            version_file: PathBuf::from(DEFAULT_VERSION_FILE),
            output_path: PathBuf::new(),
        }
    }
}
