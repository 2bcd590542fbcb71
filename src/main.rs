use clap::Parser;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use copydelta::{
    cli::{Cli, OutputFormat},
    config::CopyDeltaConfig,
    diff::{DiffFormat, DiffFormatter, ViewSide},
    export::{format_score, ComparisonExporter, ExportFormat},
    watcher::InputWatcher,
    AppEvent, ComparisonResult, TextMetrics, WatchState,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = cli.validate() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    cli.setup_logging();

    let config = cli.load_config()?;
    if let Err(err) = config.validate() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    let format = cli.output_format(&config);
    tracing::debug!("Comparing {} -> {}", cli.before.display(), cli.after.display());

    let mut state = WatchState::new(read_input(&cli.before)?, read_input(&cli.after)?);
    let result = state.compare();
    emit(&result, &cli, &config, format)?;

    if cli.watch {
        run_watch_mode(&cli, &config, format, state)?;
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn emit(
    result: &ComparisonResult,
    cli: &Cli,
    config: &CopyDeltaConfig,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_text_result(result, config),
        OutputFormat::Json => println!("{}", serde_json::to_string(result)?),
        OutputFormat::Compact => print_compact_result(result),
    }

    if let Some(path) = &cli.export {
        let export_format = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Text,
        };
        ComparisonExporter::new(config.export.clone(), export_format).export_to_file(result, path)?;
    }

    Ok(())
}

fn run_watch_mode(
    cli: &Cli,
    config: &CopyDeltaConfig,
    format: OutputFormat,
    mut state: WatchState,
) -> Result<()> {
    let watcher = InputWatcher::new(&cli.before, &cli.after, &config.watch)?;

    tracing::info!("Watching {} and {}", cli.before.display(), cli.after.display());
    if format == OutputFormat::Text {
        println!("Press Ctrl+C to quit");
        println!("---");
    }

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;

    while running.load(Ordering::SeqCst) {
        match watcher.recv_timeout(config.watch.poll_timeout_duration()) {
            Ok(AppEvent::InputChanged(event)) => {
                tracing::debug!("{:?} input changed: {}", event.side, event.path.display());
                if state.apply(event) {
                    let result = state.compare();
                    emit(&result, cli, config, format)?;
                }
            }
            Ok(AppEvent::InputRemoved(side)) => {
                tracing::warn!("{:?} input was removed; keeping last known text", side);
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => continue,
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Stopped after {} comparisons", state.comparisons);
    Ok(())
}

fn print_text_result(result: &ComparisonResult, config: &CopyDeltaConfig) {
    let diff_format = if config.output.color {
        DiffFormat::Colored
    } else {
        DiffFormat::Marked
    };
    let width = config.output.max_diff_width;

    println!("Before:");
    let before =
        DiffFormatter::format_view_wrapped(&result.before_view, ViewSide::Before, diff_format, width);
    println!("{}", before);
    println!();
    println!("After:");
    let after =
        DiffFormatter::format_view_wrapped(&result.after_view, ViewSide::After, diff_format, width);
    println!("{}", after);
    println!();
    println!("Changes: {}", DiffFormatter::format_stats(&result.diff_stats));
    println!();

    print_metrics_table(&result.before_metrics, &result.after_metrics);
    println!();

    let score = format_score(result.improvement_score);
    if config.output.color {
        let color = match result.improvement_score {
            s if s > 0 => "\x1b[32m", // Green
            s if s < 0 => "\x1b[31m", // Red
            _ => "\x1b[33m",          // Yellow
        };
        println!("Improvement Score: {}{}\x1b[0m", color, score);
    } else {
        println!("Improvement Score: {}", score);
    }
    println!("{}", result.summary);
}

fn print_metrics_table(before: &TextMetrics, after: &TextMetrics) {
    let rows = [
        ("Words", before.word_count.to_string(), after.word_count.to_string()),
        ("Sentences", before.sentence_count.to_string(), after.sentence_count.to_string()),
        (
            "Avg sentence length",
            format!("{:.1}", before.avg_sentence_length),
            format!("{:.1}", after.avg_sentence_length),
        ),
        (
            "Grade level",
            format!("{:.1}", before.flesch_kincaid_grade),
            format!("{:.1}", after.flesch_kincaid_grade),
        ),
        (
            "Reading ease",
            format!("{:.1}", before.flesch_reading_ease),
            format!("{:.1}", after.flesch_reading_ease),
        ),
        (
            "Passive voice",
            before.passive_voice_count.to_string(),
            after.passive_voice_count.to_string(),
        ),
        ("Adverbs", before.adverb_count.to_string(), after.adverb_count.to_string()),
        (
            "Reading time",
            format!("{}s", before.reading_time),
            format!("{}s", after.reading_time),
        ),
    ];

    println!("{:<20} {:>10} {:>10}", "Metric", "Before", "After");
    for (name, old, new) in rows {
        println!("{:<20} {:>10} {:>10}", name, old, new);
    }
}

fn print_compact_result(result: &ComparisonResult) {
    println!(
        "{} +{} -{} ease {:.1}->{:.1} grade {:.1}->{:.1}",
        format_score(result.improvement_score),
        result.diff_stats.words_added,
        result.diff_stats.words_removed,
        result.before_metrics.flesch_reading_ease,
        result.after_metrics.flesch_reading_ease,
        result.before_metrics.flesch_kincaid_grade,
        result.after_metrics.flesch_kincaid_grade,
    );
}
