use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::box_record::{
    deserialize_number, deserialize_pair, number_from_value, unavailable_pair, BoxRecord,
};
use crate::shared::constants::{CONFIDENCE_COLUMN, DEFAULT_CONFIDENCE};

/// Detector output box with its confidence score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub index: String,
    pub sample_name: String,
    pub class_id: String,
    #[serde(default = "unavailable_pair", deserialize_with = "deserialize_pair")]
    pub center: [f64; 2],
    #[serde(default = "unavailable_pair", deserialize_with = "deserialize_pair")]
    pub size: [f64; 2],
    #[serde(default = "default_confidence", deserialize_with = "deserialize_number")]
    pub confidence: f64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

fn default_confidence() -> f64 {
    DEFAULT_CONFIDENCE
}

impl Prediction {
    pub fn new(
        index: impl Into<String>,
        sample_name: impl Into<String>,
        class_id: impl Into<String>,
        center: [f64; 2],
        size: [f64; 2],
        confidence: f64,
    ) -> Self {
        Self {
            index: index.into(),
            sample_name: sample_name.into(),
            class_id: class_id.into(),
            center,
            size,
            confidence,
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Confidence read from `column`; NaN when the column is absent.
    pub fn confidence_from(&self, column: &str) -> f64 {
        if column == CONFIDENCE_COLUMN {
            self.confidence
        } else {
            self.attributes
                .get(column)
                .map_or(f64::NAN, number_from_value)
        }
    }
}

impl BoxRecord for Prediction {
    fn index(&self) -> &str {
        &self.index
    }

    fn sample_name(&self) -> &str {
        &self.sample_name
    }

    fn class_id(&self) -> &str {
        &self.class_id
    }

    fn center(&self) -> [f64; 2] {
        self.center
    }

    fn size(&self) -> [f64; 2] {
        self.size
    }

    fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}
