use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::shared::bounding_box::BoundingBox;
use crate::shared::constants::{CENTER_COLUMN, SIZE_COLUMN};

/// Common view over annotation and prediction rows.
///
/// `center`/`size` are the typed default columns; any other column name
/// is looked up in the row's dataset-specific attributes.
pub trait BoxRecord {
    fn index(&self) -> &str;
    fn sample_name(&self) -> &str;
    fn class_id(&self) -> &str;
    fn center(&self) -> [f64; 2];
    fn size(&self) -> [f64; 2];
    fn attributes(&self) -> &Map<String, Value>;

    /// Reads a 2-vector column. Missing or non-numeric entries are NaN.
    fn pair(&self, column: &str) -> [f64; 2] {
        match column {
            CENTER_COLUMN => self.center(),
            SIZE_COLUMN => self.size(),
            other => self
                .attributes()
                .get(other)
                .map_or(unavailable_pair(), pair_from_value),
        }
    }

    fn bounding_box(&self, center_column: &str, size_column: &str) -> BoundingBox {
        BoundingBox::new(self.pair(center_column), self.pair(size_column))
    }
}

pub(crate) fn unavailable_pair() -> [f64; 2] {
    [f64::NAN, f64::NAN]
}

pub(crate) fn pair_from_value(value: &Value) -> [f64; 2] {
    match value.as_array().map(Vec::as_slice) {
        Some([a, b]) => [
            a.as_f64().unwrap_or(f64::NAN),
            b.as_f64().unwrap_or(f64::NAN),
        ],
        _ => unavailable_pair(),
    }
}

pub(crate) fn number_from_value(value: &Value) -> f64 {
    value.as_f64().unwrap_or(f64::NAN)
}

/// Accepts `[x, y]` where either element, or the whole pair, may be null.
pub(crate) fn deserialize_pair<'de, D>(deserializer: D) -> Result<[f64; 2], D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<[Option<f64>; 2]> = Option::deserialize(deserializer)?;
    Ok(value.map_or(unavailable_pair(), |[a, b]| {
        [a.unwrap_or(f64::NAN), b.unwrap_or(f64::NAN)]
    }))
}

pub(crate) fn deserialize_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<f64> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pair_from_value_reads_numbers() {
        assert_eq!(pair_from_value(&json!([3, 4.5])), [3.0, 4.5]);
    }

    #[test]
    fn test_pair_from_value_malformed_is_nan() {
        let p = pair_from_value(&json!("not a pair"));
        assert!(p[0].is_nan() && p[1].is_nan());
        let p = pair_from_value(&json!([1.0, null]));
        assert_eq!(p[0], 1.0);
        assert!(p[1].is_nan());
    }
}
