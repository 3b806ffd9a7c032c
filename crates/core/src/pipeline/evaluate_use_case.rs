use thiserror::Error;

use crate::correlation::domain::box_correlator::BoxCorrelator;
use crate::correlation::domain::matching_reduction::MatchingReduction;
use crate::dataset::domain::dataset_reader::{DatasetError, DatasetReader};
use crate::filtering::domain::dataset_filter::{DatasetFilter, FilterConfig};
use crate::filtering::domain::filter::FilterError;
use crate::metrics::domain::metric_parameters::MetricConfig;
use crate::metrics::domain::metric_processor::{MetricError, MetricInput};
use crate::metrics::infrastructure::metric_processing::{
    calc_metrics, GlobalMetrics, PerSampleMetrics,
};
use crate::output::domain::metric_writer::{MetricWriter, WriteError};
use crate::shared::match_table::MatchTable;

#[derive(Error, Debug)]
pub enum EvaluateError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Metric(#[from] MetricError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Everything one evaluation run produced.
#[derive(Debug)]
pub struct Evaluation {
    /// Filtered and reduced one-to-one matching the metrics ran on.
    pub matching: MatchTable,
    pub global: GlobalMetrics,
    pub per_sample: PerSampleMetrics,
}

/// End-to-end benchmark: load → correlate → filter → reduce → metrics → write.
///
/// Metrics see the full annotation and prediction tables; only the
/// matching is filtered. Without a writer the run is dry.
pub struct EvaluateUseCase {
    reader: Box<dyn DatasetReader>,
    correlator: BoxCorrelator,
    reduction: MatchingReduction,
    filter_config: FilterConfig,
    metric_config: MetricConfig,
    writer: Option<Box<dyn MetricWriter>>,
}

impl EvaluateUseCase {
    pub fn new(
        reader: Box<dyn DatasetReader>,
        correlator: BoxCorrelator,
        filter_config: FilterConfig,
        metric_config: MetricConfig,
        writer: Option<Box<dyn MetricWriter>>,
    ) -> Self {
        Self {
            reader,
            correlator,
            reduction: MatchingReduction::new(),
            filter_config,
            metric_config,
            writer,
        }
    }

    pub fn execute(&self) -> Result<Evaluation, EvaluateError> {
        log::info!("Loading annotation data");
        let annotations = self.reader.read_annotations()?;
        log::debug!("Loaded {} annotations", annotations.len());

        log::info!("Loading prediction data");
        let predictions = self.reader.read_predictions()?;
        log::debug!("Loaded {} predictions", predictions.len());

        log::info!(
            "Correlating annotations and predictions ({}, threshold {})",
            self.correlator.matching_type(),
            self.correlator.threshold()
        );
        let correlated = self.correlator.correlate(&annotations, &predictions);
        log::debug!("Correlation produced {} rows", correlated.len());

        log::info!("Applying filters");
        let filtered = DatasetFilter::from_config(
            &annotations,
            &predictions,
            &correlated,
            &self.filter_config,
        )?
        .view();
        log::debug!("{} of {} rows passed the filters", filtered.len(), correlated.len());

        log::info!("Reducing matching to one-to-one");
        let matching = self.reduction.reduce_to_exclusive(&filtered);
        log::debug!("Reduced matching has {} rows", matching.len());

        log::info!("Calculating metrics");
        let input = MetricInput::new(&annotations, &predictions, &matching);
        let (global, per_sample) = calc_metrics(&input, &self.metric_config)?;
        log::debug!(
            "Calculated {} global and {} per-sample metrics",
            global.len(),
            per_sample.len()
        );

        match &self.writer {
            Some(writer) => {
                log::info!("Writing results");
                writer.write_global_metrics(&global)?;
                writer.write_per_sample_metrics(&per_sample)?;
            }
            None => log::info!("Dry run, no results written"),
        }

        Ok(Evaluation {
            matching,
            global,
            per_sample,
        })
    }
}
