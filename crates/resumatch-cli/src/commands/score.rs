//! Score command - screen a candidate against job requirements.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use resumatch_core::screening::KeywordMatch;
use resumatch_core::{parse_skill_list, screen, CandidateProfile, JobRequirements, ScreeningReport};

use super::parse::OutputFormat;

/// Arguments for the score command.
#[derive(Args)]
pub struct ScoreArgs {
    /// Candidate profile JSON file
    #[arg(long, conflicts_with_all = ["skills", "years"])]
    candidate: Option<PathBuf>,

    /// Comma-separated candidate skills, instead of --candidate
    #[arg(long)]
    skills: Option<String>,

    /// Candidate years of experience, used with --skills
    #[arg(long)]
    years: Option<u32>,

    /// Job requirements JSON file
    #[arg(short, long, required = true)]
    job: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub async fn run(args: ScoreArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let candidate = load_candidate(&args)?;
    let job: JobRequirements = serde_json::from_str(&fs::read_to_string(&args.job)?)
        .map_err(|e| anyhow::anyhow!("Invalid job requirements in {}: {}", args.job.display(), e))?;

    if job.is_unconstrained() {
        eprintln!(
            "{} Job declares no requirements, every candidate scores 100%",
            style("!").yellow()
        );
    }

    let report = screen(&candidate, &job, &config.scoring);
    info!(
        "Overall match {}% ({})",
        report.score.overall_match_percentage, report.band
    );

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Csv => format_report_csv(&report)?,
        OutputFormat::Text => format_report_text(&report),
    };

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

    Ok(())
}

fn load_candidate(args: &ScoreArgs) -> anyhow::Result<CandidateProfile> {
    if let Some(path) = &args.candidate {
        let candidate = serde_json::from_str(&fs::read_to_string(path)?)
            .map_err(|e| {
                anyhow::anyhow!("Invalid candidate profile in {}: {}", path.display(), e)
            })?;
        return Ok(candidate);
    }

    match &args.skills {
        Some(skills) => Ok(CandidateProfile::new(parse_skill_list(skills))
            .with_years_of_experience(args.years)),
        None => anyhow::bail!("Provide a candidate with --candidate or --skills"),
    }
}

fn format_report_csv(report: &ScreeningReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    let score = &report.score;

    wtr.write_record([
        "overall_match_percentage",
        "band",
        "mandatory_matched",
        "mandatory_total",
        "preferred_matched",
        "preferred_total",
        "experience_match",
    ])?;
    wtr.write_record([
        score.overall_match_percentage.to_string(),
        report.band.label().to_string(),
        score.mandatory_keywords_matched.to_string(),
        score.mandatory_keywords_total.to_string(),
        score.preferred_keywords_matched.to_string(),
        score.preferred_keywords_total.to_string(),
        score.experience_match.to_string(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_report_text(report: &ScreeningReport) -> String {
    let score = &report.score;
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}% ({})\n",
        style("Overall match:").bold(),
        score.overall_match_percentage,
        report.band
    ));
    output.push_str(&format!("{}\n", "=".repeat(40)));

    output.push_str(&format!(
        "Mandatory keywords: {}/{}\n",
        score.mandatory_keywords_matched, score.mandatory_keywords_total
    ));
    push_badges(&mut output, &report.mandatory);

    output.push_str(&format!(
        "Preferred keywords: {}/{}\n",
        score.preferred_keywords_matched, score.preferred_keywords_total
    ));
    push_badges(&mut output, &report.preferred);

    let experience = if score.experience_match {
        style("met").green()
    } else {
        style("not met").red()
    };
    output.push_str(&format!("Experience: {}\n", experience));

    output
}

fn push_badges(output: &mut String, keywords: &[KeywordMatch]) {
    for keyword in keywords {
        let mark = if keyword.matched {
            style("✓").green()
        } else {
            style("✗").red()
        };
        output.push_str(&format!("  {} {}\n", mark, keyword.keyword));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumatch_core::ScoringConfig;

    fn sample_report() -> ScreeningReport {
        let candidate =
            CandidateProfile::new(["Rust", "PostgreSQL"]).with_years_of_experience(Some(6));
        let job = JobRequirements::new(["rust", "Go"])
            .with_preferred(["SQL"])
            .with_min_experience(Some(5));
        screen(&candidate, &job, &ScoringConfig::default())
    }

    #[test]
    fn test_text_report_lists_badges() {
        console::set_colors_enabled(false);
        let text = format_report_text(&sample_report());

        assert!(text.contains("Overall match: 70% (Strong Match)"));
        assert!(text.contains("Mandatory keywords: 1/2"));
        assert!(text.contains("✓ rust"));
        assert!(text.contains("✗ Go"));
        assert!(text.contains("✓ SQL"));
        assert!(text.contains("Experience: met"));
    }

    #[test]
    fn test_csv_report() {
        let csv = format_report_csv(&sample_report()).unwrap();
        assert!(csv.ends_with("70,Strong Match,1,2,1,1,true\n"));
    }
}
