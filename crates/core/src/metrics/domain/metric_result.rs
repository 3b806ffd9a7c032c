use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Key of the value computed over all classes.
pub const TOTAL_KEY: &str = "total";

#[derive(Clone, Debug, PartialEq)]
pub enum MetricValue {
    Scalar(f64),
    Curve {
        recall: Vec<f64>,
        precision: Vec<f64>,
    },
}

impl MetricValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            MetricValue::Scalar(value) => Some(*value),
            MetricValue::Curve { .. } => None,
        }
    }

    pub fn as_curve(&self) -> Option<(&[f64], &[f64])> {
        match self {
            MetricValue::Curve { recall, precision } => Some((recall, precision)),
            MetricValue::Scalar(_) => None,
        }
    }
}

/// Scalars serialise as numbers (NaN as `null`), curves as
/// `[recall, precision]`.
impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetricValue::Scalar(value) => serializer.serialize_f64(*value),
            MetricValue::Curve { recall, precision } => (recall, precision).serialize(serializer),
        }
    }
}

/// Insertion-ordered `key → value` map of one metric evaluation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricResult {
    entries: Vec<(String, MetricValue)>,
}

impl MetricResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value`, replacing an existing entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: MetricValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetricValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn scalar(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(MetricValue::as_scalar)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, MetricValue)> for MetricResult {
    fn from_iter<I: IntoIterator<Item = (String, MetricValue)>>(iter: I) -> Self {
        let mut result = Self::new();
        for (key, value) in iter {
            result.insert(key, value);
        }
        result
    }
}

impl Serialize for MetricResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One result per sample, samples in evaluation order.
pub type SampleResults = Vec<(String, MetricResult)>;

/// Output of a processor: identifier, display name and result.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricOutput<T> {
    pub identifier: u32,
    pub name: String,
    pub result: T,
}
