use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum ApIntegrationMode {
    /// PASCAL VOC 2007 eleven-point interpolation.
    #[default]
    #[serde(rename = "11point")]
    ElevenPoint,
    /// Area under the monotone precision envelope.
    #[serde(rename = "exact")]
    Exact,
}

/// Per-metric knobs read from the `metrics.parameters` section.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MetricParameters {
    pub calculate_per_class: bool,
    pub ap_integration_mode: ApIntegrationMode,
    /// Recall slack for the eleven-point interpolation.
    pub eps: f64,
}

impl MetricParameters {
    const KNOWN_KEYS: [&'static str; 3] = ["calculate_per_class", "ap_integration_mode", "eps"];
}

impl Default for MetricParameters {
    fn default() -> Self {
        Self {
            calculate_per_class: true,
            ap_integration_mode: ApIntegrationMode::ElevenPoint,
            eps: 0.0,
        }
    }
}

/// `metrics` configuration section.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MetricConfig {
    /// Identifiers to compute. Empty means every registered metric.
    pub calculate: Vec<u32>,
    /// Parameter objects keyed by identifier, e.g. `"1003"`.
    pub parameters: Map<String, Value>,
}

impl MetricConfig {
    /// Parameters configured for `identifier`, defaults when absent or
    /// unreadable.
    pub fn parameters_for(&self, identifier: u32) -> MetricParameters {
        let entry = self
            .parameters
            .iter()
            .find(|(key, _)| key.trim().parse::<u32>().ok() == Some(identifier))
            .map(|(_, value)| value);
        let Some(value) = entry else {
            return MetricParameters::default();
        };

        if let Some(fields) = value.as_object() {
            for key in fields.keys() {
                if !MetricParameters::KNOWN_KEYS.contains(&key.as_str()) {
                    log::warn!("Ignoring unknown parameter '{}' of metric {}", key, identifier);
                }
            }
        }
        match serde_json::from_value(value.clone()) {
            Ok(parameters) => parameters,
            Err(e) => {
                log::warn!("Invalid parameters for metric {}: {}, using defaults", identifier, e);
                MetricParameters::default()
            }
        }
    }
}
