use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::box_record::{deserialize_pair, unavailable_pair, BoxRecord};

/// Ground-truth 2D box of one object in one sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub index: String,
    pub sample_name: String,
    pub class_id: String,
    #[serde(default = "unavailable_pair", deserialize_with = "deserialize_pair")]
    pub center: [f64; 2],
    #[serde(default = "unavailable_pair", deserialize_with = "deserialize_pair")]
    pub size: [f64; 2],
    /// Dataset-specific metadata (occlusion, depth, ...), reachable by filters.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Annotation {
    pub fn new(
        index: impl Into<String>,
        sample_name: impl Into<String>,
        class_id: impl Into<String>,
        center: [f64; 2],
        size: [f64; 2],
    ) -> Self {
        Self {
            index: index.into(),
            sample_name: sample_name.into(),
            class_id: class_id.into(),
            center,
            size,
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

impl BoxRecord for Annotation {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_keeps_extra_fields_as_attributes() {
        let a: Annotation = serde_json::from_value(json!({
            "index": "s/1",
            "sample_name": "s",
            "class_id": "human",
            "center": [10, 20],
            "size": [4, 6],
            "occlusion": 0.25
        }))
        .unwrap();
        assert_eq!(a.center, [10.0, 20.0]);
        assert_eq!(a.attributes.get("occlusion"), Some(&json!(0.25)));
    }

    #[test]
    fn test_deserialize_missing_box_is_unavailable() {
        let a: Annotation =
            serde_json::from_value(json!({"sample_name": "s", "class_id": "c", "size": null}))
                .unwrap();
        assert!(a.center[0].is_nan());
        assert!(a.size[1].is_nan());
        assert!(a.index.is_empty());
    }

    #[test]
    fn test_override_column_reads_attribute_pair() {
        let a = Annotation::new("s/1", "s", "c", [0.0, 0.0], [1.0, 1.0])
            .with_attribute("visible_center", json!([5.0, 6.0]));
        let b = a.bounding_box("visible_center", "size");
        assert_eq!(b.center, [5.0, 6.0]);
        assert_eq!(b.size, [1.0, 1.0]);
    }
}
