//! Parse command - extract candidate fields from a single resume.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use resumatch_core::models::config::ResumatchConfig;
use resumatch_core::{
    parse_resume, validate_upload, DocumentFormat, ExtractedProfile, ParsedResume, RawDocument,
};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print the start of the decoded text after the profile
    #[arg(long)]
    show_preview: bool,

    /// Year used to turn an earliest listed year into years of experience
    #[arg(long)]
    reference_year: Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension used when writing to an output directory.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::load_config(config_path)?;
    if args.reference_year.is_some() {
        config.extraction.reference_year = args.reference_year;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Parsing resume: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Extracting candidate fields...");

    let parsed = parse_file(&args.input, &config)?;

    pb.finish_and_clear();

    let missing = parsed.profile.missing_fields();
    if !missing.is_empty() {
        eprintln!(
            "{} Not found, fill in manually: {}",
            style("!").yellow(),
            missing.join(", ")
        );
    }

    let output = format_profile(&parsed.profile, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_preview {
        println!();
        println!(
            "{} Decoded {} characters, preview:",
            style("ℹ").blue(),
            parsed.char_count
        );
        println!("{}", parsed.text_preview);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Validate, read and parse one resume file.
pub fn parse_file(path: &Path, config: &ResumatchConfig) -> anyhow::Result<ParsedResume> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        anyhow::anyhow!("Unsupported file format: {}", extension)
    })?;

    let size = fs::metadata(path)?.len();
    validate_upload(format.mime_type(), size, &config.ingest)?;

    let data = fs::read(path)?;
    let parsed = parse_resume(&RawDocument::new(&data, format), config)?;

    debug!(
        "Extracted {}/{} fields from {}",
        parsed.profile.field_count(),
        ExtractedProfile::FIELDS.len(),
        path.display()
    );

    Ok(parsed)
}

/// Render a profile in the requested format.
pub fn format_profile(profile: &ExtractedProfile, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(profile)?),
        OutputFormat::Csv => format_profile_csv(profile),
        OutputFormat::Text => Ok(format_profile_text(profile)),
    }
}

/// Field values in [`ExtractedProfile::FIELDS`] order, blank when absent.
pub fn profile_values(profile: &ExtractedProfile) -> [String; 6] {
    [
        profile.full_name.clone().unwrap_or_default(),
        profile.email.clone().unwrap_or_default(),
        profile.phone.clone().unwrap_or_default(),
        profile.current_company.clone().unwrap_or_default(),
        profile.linkedin_url.clone().unwrap_or_default(),
        profile
            .years_of_experience
            .map(|y| y.to_string())
            .unwrap_or_default(),
    ]
}

fn format_profile_csv(profile: &ExtractedProfile) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(ExtractedProfile::FIELDS)?;
    wtr.write_record(profile_values(profile))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_profile_text(profile: &ExtractedProfile) -> String {
    let labels = [
        "Name",
        "Email",
        "Phone",
        "Current company",
        "LinkedIn",
        "Years of experience",
    ];

    let mut output = String::new();
    output.push_str(&format!("{}\n", style("Candidate").bold()));
    output.push_str(&format!("{}\n", "=".repeat(40)));

    for (label, value) in labels.iter().zip(profile_values(profile)) {
        let value = if value.is_empty() { "-".to_string() } else { value };
        output.push_str(&format!("{:<20} {}\n", format!("{}:", label), value));
    }

    output.push_str(&format!(
        "\nExtracted {} of {} fields\n",
        profile.field_count(),
        ExtractedProfile::FIELDS.len()
    ));

    output
}
