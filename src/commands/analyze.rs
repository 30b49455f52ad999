//! Analyze command handler
//!
//! Uses the AnalyzerService facade to orchestrate analysis:
//! 1. Merge CLI flags over the loaded configuration
//! 2. Create the analysis backend (real or mock)
//! 3. Load log files from the input directory
//! 4. Analyze chunks sequentially with retry and pacing
//! 5. Write the report file and print the report

use std::path::Path;

use anyhow::{Context, Result};

use logdigest::analyzer::tracker::format_summary;
use logdigest::analyzer::{BackendKind, ReportWriter};
use logdigest::{AnalyzeOptions, AnalyzerService, Config, LogLoader};

use crate::cli::AnalyzeArgs;

/// Analyze every log file in the input directory.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: Config, args: &AnalyzeArgs) -> Result<()> {
    let config = apply_args(config, args);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid settings: {}", e))?;

    let input_dir = config.input_directory();
    let report_path = config.report_path();

    let kind = BackendKind::from_config(&config.service);
    let backend = kind
        .create_backend(&config.service)
        .with_context(|| format!("Failed to create {} backend", kind))?;

    let mut options = AnalyzeOptions::from_config(&config.analysis);
    if args.quiet {
        options = options.quiet();
    }
    let service = AnalyzerService::new(options, backend)?;

    tracing::info!(
        "Analyzing {} with {} backend",
        input_dir.display(),
        service.backend_name()
    );

    let loader = LogLoader::new(config.input.suffix.clone());
    let run = service
        .analyze_directory(&input_dir, &loader)
        .with_context(|| format!("Failed to load logs from {}", input_dir.display()))?;

    tracing::info!("{}", format_summary(&run.usage));

    let report = run.report();
    ReportWriter::write(&report_path, &report)
        .with_context(|| format!("Failed to save report to {}", report_path.display()))?;

    if run.is_partial() {
        eprintln!(
            "Warning: Analysis partially complete. {} of {} chunks succeeded.",
            run.usage.successful_chunks, run.usage.chunks_processed
        );
    }

    println!("{}", report);
    if !args.quiet {
        eprintln!("Report saved to {}", report_path.display());
    }

    Ok(())
}

/// Overlay command-line flags on the configuration.
///
/// Flags that were not given leave the configured value alone.
pub fn apply_args(mut config: Config, args: &AnalyzeArgs) -> Config {
    if let Some(dir) = &args.directory {
        config.input.directory = path_string(dir);
    }
    if let Some(suffix) = &args.suffix {
        config.input.suffix = suffix.clone();
    }
    if let Some(output) = &args.output {
        config.output.report_file = path_string(output);
    }
    if let Some(size) = args.chunk_size {
        config.analysis.chunk_size = size;
    }
    if let Some(overlap) = args.overlap {
        config.analysis.chunk_overlap = overlap;
    }
    if let Some(retries) = args.max_retries {
        config.analysis.max_retries = retries;
    }
    if let Some(ms) = args.pacing_ms {
        config.analysis.pacing_delay_ms = ms;
    }
    if let Some(ms) = args.backoff_ms {
        config.analysis.backoff_base_ms = ms;
    }
    if args.mock {
        config.service.mock = true;
    }
    if let Some(model) = &args.model {
        config.service.model = model.clone();
    }
    config
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
