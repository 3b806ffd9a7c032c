/// Native KIA camera resolution, used as the default clip window.
pub const FRAME_WIDTH: f64 = 1920.0;
pub const FRAME_HEIGHT: f64 = 1280.0;

pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.5;

/// Added to the IoU union so zero-area pairs evaluate to 0 instead of NaN.
pub const DEFAULT_IOU_EPS: f64 = 1e-12;

pub const DEFAULT_CONFIDENCE: f64 = 1.0;

pub const CONFIDENCE_COLUMN: &str = "confidence";
pub const CENTER_COLUMN: &str = "center";
pub const SIZE_COLUMN: &str = "size";
pub const IOU_COLUMN: &str = "match_value";

pub const EVALUATION_FOLDER: &str = "evaluations";
pub const BOUNDING_BOX_2D_FOLDER: &str = "2d-bounding-box_json";
pub const GLOBAL_METRICS_FILE: &str = "global_metrics.json";
pub const DEFAULT_VERSION_FILE: &str = "version.json";

pub const DATASET_EXTENSION: &str = "json";
