use std::fs::File;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use mbt_core::config::mbt_config::MbtConfig;
use mbt_core::correlation::domain::box_correlator::BoxCorrelator;
use mbt_core::dataset::infrastructure::json_dataset_reader::JsonDatasetReader;
use mbt_core::metrics::domain::metric_result::TOTAL_KEY;
use mbt_core::metrics::infrastructure::metric_processing::list_metrics;
use mbt_core::output::domain::metric_writer::MetricWriter;
use mbt_core::output::domain::version_info::VersionInfo;
use mbt_core::output::infrastructure::json_metric_writer::JsonMetricWriter;
use mbt_core::pipeline::evaluate_use_case::EvaluateUseCase;
use mbt_core::pipeline::infrastructure::sample_executor_factory::create_sample_executor;

/// Benchmarks 2D bounding box detections against KIA annotations.
#[derive(Parser)]
#[command(name = "mbt")]
struct Cli {
    /// Evaluate without writing any result files.
    #[arg(long)]
    dryrun: bool,

    /// Write log output to this file instead of stderr.
    #[arg(short, long)]
    logfile: Option<PathBuf>,

    /// JSON configuration file (required unless --list-metrics is used).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,

    /// Print the available metrics and exit.
    #[arg(long)]
    list_metrics: bool,

    /// Number of correlation workers, overriding the config.
    #[arg(long)]
    threads: Option<usize>,
}

fn main() {
    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    if cli.list_metrics {
        print!("{}", list_metrics());
        return Ok(());
    }
    validate(&cli)?;

    let config_path = cli.config.as_ref().ok_or("Configuration file missing, use -c")?;
    let mut config = MbtConfig::load(config_path)?;
    if let Some(threads) = cli.threads {
        config.correlate.num_threads = threads;
    }

    let reader = JsonDatasetReader::new(
        config.io.data_path.clone(),
        config.io.resolved_predictions_path(),
    )
    .with_sequences(config.io.resolved_sequences());
    let correlator = BoxCorrelator::new(config.correlate.correlator_options())?
        .with_executor(create_sample_executor(config.correlate.num_threads));
    let writer: Option<Box<dyn MetricWriter>> = if cli.dryrun {
        None
    } else {
        let version = VersionInfo::load(&config.writer.version_file);
        Some(Box::new(JsonMetricWriter::new(
            version,
            &config.writer.output_path,
        )))
    };

    let use_case = EvaluateUseCase::new(
        Box::new(reader),
        correlator,
        config.filter,
        config.metrics,
        writer,
    );
    let evaluation = use_case.execute()?;

    for metric in &evaluation.global {
        if let Some(total) = metric.result.scalar(TOTAL_KEY) {
            log::info!("{} ({}): {total:.4}", metric.name, metric.identifier);
        }
    }
    log::info!("Done");
    Ok(())
}

fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let level = if cli.verbose { "debug" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    if let Some(path) = &cli.logfile {
        let file = File::create(path)
            .map_err(|e| format!("Cannot create log file {}: {e}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init()?;
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(config) = &cli.config else {
        return Err("Configuration file missing, use -c".into());
    };
    if !config.exists() {
        return Err(format!("Config file not found: {}", config.display()).into());
    }
    if cli.threads == Some(0) {
        return Err("--threads must be at least 1".into());
    }
    Ok(())
}
