use std::fmt::Write;

use crate::metrics::domain::metric_parameters::MetricConfig;
use crate::metrics::domain::metric_processor::{MetricError, MetricInput};
use crate::metrics::domain::metric_result::{MetricOutput, MetricResult, SampleResults};

use super::metric_factory::{all_metric_processors, create_metric_processors};

pub type GlobalMetrics = Vec<MetricOutput<MetricResult>>;
pub type PerSampleMetrics = Vec<MetricOutput<SampleResults>>;

/// Runs the configured metrics (all when none are selected) globally and,
/// where supported, per sample.
pub fn calc_metrics(
    input: &MetricInput<'_>,
    config: &MetricConfig,
) -> Result<(GlobalMetrics, PerSampleMetrics), MetricError> {
    let processors = create_metric_processors(&config.calculate)?;

    let mut global = Vec::with_capacity(processors.len());
    let mut per_sample = Vec::new();
    for processor in &processors {
        let params = config.parameters_for(processor.identifier());
        log::debug!("Computing {} ({})", processor.name(), processor.identifier());

        global.push(MetricOutput {
            identifier: processor.identifier(),
            name: processor.name().to_string(),
            result: processor.calc_global(input, &params),
        });
        if processor.calculate_per_sample() {
            per_sample.push(MetricOutput {
                identifier: processor.identifier(),
                name: processor.name().to_string(),
                result: processor.calc_per_sample(input, &params),
            });
        }
    }
    Ok((global, per_sample))
}

/// Human-readable list of the registered metrics.
pub fn list_metrics() -> String {
    let mut listing = String::from("Available metrics:\n");
    for processor in all_metric_processors() {
        let _ = writeln!(listing, "- {} (ID: {})", processor.name(), processor.identifier());
    }
    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_fixtures;
    use serde_json::json;

    #[test]
    fn test_all_metrics_when_none_selected() {
        let matching = test_fixtures::metric_matching();
        let input = MetricInput::new(&[], &[], &matching);
        let (global, per_sample) = calc_metrics(&input, &MetricConfig::default()).unwrap();

        assert_eq!(global.len(), 9);
        assert_eq!(per_sample.len(), 9);
        assert!(per_sample.iter().all(|m| m.result.len() == 2));
    }

    #[test]
    fn test_selected_metrics_use_their_parameters() {
        let matching = test_fixtures::metric_matching();
        let input = MetricInput::new(&[], &[], &matching);
        let config: MetricConfig = serde_json::from_value(json!({
            "calculate": [1031, 1003],
            "parameters": {"1003": {"calculate_per_class": false}}
        }))
        .unwrap();
        let (global, _) = calc_metrics(&input, &config).unwrap();

        assert_eq!(global[0].identifier, 1031);
        assert_eq!(global[0].name, "Number of False Negatives");
        assert_eq!(global[0].result.scalar("total"), Some(3.0));
        assert_eq!(global[1].result.keys().collect::<Vec<_>>(), vec!["mAP"]);
    }

    #[test]
    fn test_unknown_metric_is_an_error() {
        let matching = test_fixtures::metric_matching();
        let input = MetricInput::new(&[], &[], &matching);
        let config = MetricConfig {
            calculate: vec![7],
            ..MetricConfig::default()
        };
        assert_eq!(
            calc_metrics(&input, &config).err(),
            Some(MetricError::UnknownMetric(7))
        );
    }

    #[test]
    fn test_list_metrics() {
        let listing = list_metrics();
        assert!(listing.starts_with("Available metrics:\n"));
        assert!(listing.contains("- VOC mAP (ID: 1003)\n"));
        assert_eq!(listing.lines().count(), 10);
    }
}
