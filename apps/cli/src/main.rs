use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;
use tracing_subscriber::EnvFilter;

use proverka_core::{
    AnalysisBundle, AnalysisSession, Analyzer, PhraseCatalog, ReportFormat,
    format_bundle_readable, render, transcript_available,
};

/// CLI wrapper for ReportFormat enum (needed for clap ValueEnum)
#[derive(Clone, Copy, Default, ValueEnum)]
enum CliFormat {
    #[default]
    Json,
    Html,
    Pdf,
}

impl From<CliFormat> for ReportFormat {
    fn from(cli: CliFormat) -> Self {
        match cli {
            CliFormat::Json => ReportFormat::Json,
            CliFormat::Html => ReportFormat::Html,
            CliFormat::Pdf => ReportFormat::Pdf,
        }
    }
}

#[derive(Parser)]
#[command(name = "proverka")]
#[command(
    about = "Analyze TikTok, Instagram, and YouTube videos for credibility, scams, and deepfakes"
)]
struct Cli {
    /// Video URL
    url: String,

    /// Report format to export
    #[arg(short, long, default_value = "json")]
    format: CliFormat,

    /// Report output path. Defaults to analysis_<timestamp>.<ext> in the
    /// current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Phrase catalog JSON overriding the built-in detection rules
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_report_path(format: ReportFormat) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("analysis_{}.{}", stamp, format.extension()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    println!(
        "\n{}  {}\n",
        style("proverka").cyan().bold(),
        style("Video Credibility Analyzer").dim()
    );

    let analyzer = match &cli.catalog {
        Some(path) => {
            let raw = fs::read_to_string(path).await?;
            Analyzer::with_catalog(PhraseCatalog::from_json(&raw)?)
        }
        None => Analyzer::new(),
    };

    let mut session = AnalysisSession::new();

    // Step 1: Validate the link
    let spinner = create_spinner("Validating video link...");
    let video_info = match analyzer.resolve(&cli.url) {
        Ok(info) => info,
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    spinner.finish_with_message(format!(
        "{} Link resolved: {} {}",
        style("✓").green().bold(),
        video_info.platform.name(),
        style(&video_info.video_id).dim()
    ));

    // Step 2: Extract transcript (degrades to a sentinel, never fails)
    let spinner = create_spinner("Extracting transcript...");
    let transcript = analyzer.fetch_transcript(&video_info).await;
    if transcript_available(&transcript) {
        spinner.finish_with_message(format!(
            "{} Transcript extracted: {} chars",
            style("✓").green().bold(),
            transcript.chars().count()
        ));
    } else {
        spinner.finish_with_message(format!(
            "{} Transcript unavailable, continuing with metadata only",
            style("!").yellow().bold()
        ));
    }

    // Step 3: Detect claims
    let spinner = create_spinner("Detecting claims...");
    let claims = analyzer.detect_claims(&transcript).await?;
    spinner.finish_with_message(format!(
        "{} Claims detected: {}",
        style("✓").green().bold(),
        claims.len()
    ));

    // Step 4: Analyze risks and freeze the bundle
    let spinner = create_spinner("Analyzing risks...");
    let risk_analysis = analyzer.assess(&transcript, &claims, &video_info);
    let bundle: &AnalysisBundle =
        session.record(AnalysisBundle::new(video_info, transcript, claims, risk_analysis));
    spinner.finish_with_message(format!(
        "{} Risks analyzed: scam {}, deepfake {}",
        style("✓").green().bold(),
        bundle.risk_analysis.scam_risk_level.as_str(),
        bundle.risk_analysis.deepfake_risk_level.as_str()
    ));

    // Export the report
    let format: ReportFormat = cli.format.into();
    let report = render(bundle, format)?;
    if format == ReportFormat::Pdf {
        println!("\n{} {}", style("Note:").yellow().bold(), report);
    } else {
        let output_path = cli
            .output
            .clone()
            .unwrap_or_else(|| default_report_path(format));
        fs::write(&output_path, &report).await?;
        println!(
            "\n{} {}",
            style("Saved:").dim(),
            style(output_path.display()).cyan()
        );
    }

    println!("{}", style("─".repeat(60)).dim());

    // Human-readable output
    println!("{}", format_bundle_readable(bundle));

    // Full risk detail dump
    println!("{}", style("Risk analysis detail:").dim());
    println!("{}", serde_json::to_string_pretty(&bundle.risk_analysis)?);

    Ok(())
}
