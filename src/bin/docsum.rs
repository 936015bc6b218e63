//! CLI binary for docsum.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `UploadConfig`, drives a `Session` through the select → upload →
//! display flow, and prints the chosen summary variant.

use anyhow::{Context, Result};
use clap::Parser;
use docsum::{
    select_document, summarize_to_file, Session, Summary, SummaryClient, SummaryVariant,
    UploadConfig,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Summarize a document (short variant, stdout)
  docsum report.pdf

  # Medium or long variant
  docsum --variant medium report.pdf
  docsum --variant long scan.png

  # All three variants, labelled
  docsum --all report.pdf

  # Structured JSON output
  docsum --json report.pdf > summary.json

  # Write the chosen variant to a file
  docsum report.pdf -o summary.txt

  # Point at a deployed service
  docsum --base-url https://summaries.example.com report.pdf

ACCEPTED DOCUMENTS:
  .pdf .png .jpg .jpeg — up to 5 MiB.
  The type check is by extension (declared type), not content sniffing.

ENVIRONMENT VARIABLES:
  DOCSUM_BASE_URL   Service base URL (default: http://localhost:5000)
  DOCSUM_TIMEOUT    Upload timeout in seconds (default: none)
"#;

/// Upload a document to a summarization service and print the summary.
#[derive(Parser, Debug)]
#[command(
    name = "docsum",
    version,
    about = "Upload a document (PDF/JPEG/PNG) to a summarization service and print the summary",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the document (.pdf, .png, .jpg, .jpeg).
    input: PathBuf,

    /// Summary variant to display.
    #[arg(long, value_enum, default_value = "short")]
    variant: VariantArg,

    /// Print all three variants, labelled.
    #[arg(long, conflicts_with = "variant")]
    all: bool,

    /// Output the full summary as JSON instead of plain text.
    #[arg(long)]
    json: bool,

    /// Write the chosen variant to this file instead of stdout.
    #[arg(short, long, conflicts_with_all = ["all", "json"])]
    output: Option<PathBuf>,

    /// Base URL of the summarization service.
    #[arg(long, env = "DOCSUM_BASE_URL", default_value = docsum::DEFAULT_BASE_URL)]
    base_url: String,

    /// Upload timeout in seconds. No timeout when unset.
    #[arg(long, env = "DOCSUM_TIMEOUT")]
    timeout: Option<u64>,

    /// Disable the upload spinner.
    #[arg(long, env = "DOCSUM_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "DOCSUM_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and the summary itself.
    #[arg(short, long, env = "DOCSUM_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum VariantArg {
    Short,
    Medium,
    Long,
}

impl From<VariantArg> for SummaryVariant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Short => SummaryVariant::Short,
            VariantArg::Medium => SummaryVariant::Medium,
            VariantArg::Long => SummaryVariant::Long,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = UploadConfig::builder().base_url(&cli.base_url);
    if let Some(secs) = cli.timeout {
        builder = builder.upload_timeout_secs(secs);
    }
    let config = builder.build().context("Invalid configuration")?;
    let variant: SummaryVariant = cli.variant.into();

    // ── Output-file mode ─────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        let summary = summarize_to_file(&cli.input, output_path, variant, &config)
            .await
            .context("Summarization failed")?;
        if !cli.quiet {
            eprintln!(
                "{}  {} summary ({} chars)  →  {}",
                green("✔"),
                variant,
                summary.variant(variant).len(),
                bold(&output_path.display().to_string()),
            );
        }
        return Ok(());
    }

    // ── Interactive flow: drive a Session ────────────────────────────────
    let mut session = Session::new();
    session.select(select_document(&cli.input, &config));
    if let Some(msg) = session.error() {
        anyhow::bail!("{msg}");
    }

    let (document, ticket) = session
        .begin_upload()
        .context("Cannot start upload")?;

    let spinner = if cli.quiet || cli.no_progress {
        None
    } else {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
        );
        bar.set_prefix("Uploading");
        bar.set_message(format!(
            "{} ({} bytes)",
            document.file_name(),
            document.size()
        ));
        bar.enable_steady_tick(Duration::from_millis(80));
        Some(bar)
    };

    let client = SummaryClient::new(&config).context("Failed to build HTTP client")?;
    let outcome = client.upload(document).await;
    session.finish_upload(ticket, outcome);

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    if let Some(msg) = session.error() {
        eprintln!("{} {}", red("✘"), msg);
        std::process::exit(1);
    }

    session.set_variant(variant);
    let summary = session
        .summary()
        .cloned()
        .context("Upload finished without a summary")?;

    // ── Print results ────────────────────────────────────────────────────
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialise summary")?
        );
    } else if cli.all {
        print_all(&summary);
    } else {
        let text = session.displayed_text().unwrap_or_default();
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(text.as_bytes())
            .context("Failed to write to stdout")?;
        if !text.ends_with('\n') {
            handle.write_all(b"\n").ok();
        }
    }

    if !cli.quiet && !cli.json {
        eprintln!(
            "{}  {}",
            green("✔"),
            dim(&format!("displayed variant: {}", session.variant())),
        );
    }

    Ok(())
}

/// Print all three variants with labels.
fn print_all(summary: &Summary) {
    for v in [
        SummaryVariant::Short,
        SummaryVariant::Medium,
        SummaryVariant::Long,
    ] {
        println!("{}", bold(&format!("── {} ──", v)));
        let text = summary.variant(v);
        if text.is_empty() {
            println!("{}", dim("(empty)"));
        } else {
            println!("{text}");
        }
        println!();
    }
}
