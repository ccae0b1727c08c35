//! Batch command - parse many resume files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use resumatch_core::models::config::ResumatchConfig;
use resumatch_core::{DocumentFormat, ExtractedProfile, ParsedResume};

use super::parse::{format_profile, parse_file, profile_values, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern of input files
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Year used to turn an earliest listed year into years of experience
    #[arg(long)]
    reference_year: Option<i32>,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    parsed: Option<ParsedResume>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::load_config(config_path)?;
    if args.reference_year.is_some() {
        config.extraction.reference_year = args.reference_year;
    }
    let config = Arc::new(config);

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| DocumentFormat::from_path(p).is_some())
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files",
            )?
            .progress_chars("=>-"),
    );

    // Parsing is CPU-bound, so each file runs on the blocking pool
    let permits = Arc::new(Semaphore::new(args.jobs.max(1)));
    let mut tasks = JoinSet::new();

    for path in files {
        let permits = Arc::clone(&permits);
        let config = Arc::clone(&config);
        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let result = tokio::task::spawn_blocking(move || {
                let file_start = Instant::now();
                let parsed = parse_file(&path, &config);
                ProcessResult {
                    processing_time_ms: file_start.elapsed().as_millis() as u64,
                    error: parsed.as_ref().err().map(|e| e.to_string()),
                    parsed: parsed.ok(),
                    path,
                }
            })
            .await?;
            anyhow::Ok(result)
        });
    }

    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let result = joined??;

        if let Some(error_msg) = &result.error {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", result.path.display(), error_msg);
            } else {
                error!("Failed to process {}: {}", result.path.display(), error_msg);
                pb.abandon();
                anyhow::bail!("Processing failed for {}: {}", result.path.display(), error_msg);
            }
        }

        results.push(result);
        pb.inc(1);
    }

    pb.finish_and_clear();
    results.sort_by(|a, b| a.path.cmp(&b.path));

    let successful: Vec<_> = results.iter().filter(|r| r.parsed.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for result in &successful {
            if let Some(parsed) = &result.parsed {
                write_output(output_dir, &result.path, &parsed.profile, args.format)?;
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_output(
    output_dir: &Path,
    input: &Path,
    profile: &ExtractedProfile,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let output_path = output_path_for(output_dir, input, format);

    fs::write(&output_path, format_profile(profile, format)?)?;
    debug!("Wrote output to {}", output_path.display());

    Ok(())
}

/// Output file for one input, keeping the source extension so that
/// `jane.txt` and `jane.pdf` do not overwrite each other.
fn output_path_for(output_dir: &Path, input: &Path, format: OutputFormat) -> PathBuf {
    let output_name = input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");
    output_dir.join(format!("{}.{}", output_name, format.extension()))
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["filename", "status"];
    header.extend(ExtractedProfile::FIELDS);
    header.extend(["missing_fields", "char_count", "processing_time_ms", "error"]);
    wtr.write_record(&header)?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();

        let mut record = vec![filename];
        match &result.parsed {
            Some(parsed) => {
                record.push("success".to_string());
                record.extend(profile_values(&parsed.profile));
                record.push(parsed.profile.missing_fields().join(";"));
                record.push(parsed.char_count.to_string());
                record.push(result.processing_time_ms.to_string());
                record.push(String::new());
            }
            None => {
                record.push("error".to_string());
                let blanks = ExtractedProfile::FIELDS.len() + 2;
                record.extend(std::iter::repeat_n(String::new(), blanks));
                record.push(result.processing_time_ms.to_string());
                record.push(result.error.clone().unwrap_or_default());
            }
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
