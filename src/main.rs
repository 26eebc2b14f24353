//! pdfsplit - Split a PDF file into multiple documents.
//!
//! A CLI tool for splitting PDFs by page ranges or into fixed-size chunks.

use clap::Parser;
use std::path::Path;
use std::process;

use pdfsplit::cli::{Cli, Command};
use pdfsplit::config::{Config, SplitMode};
use pdfsplit::error::SplitError;
use pdfsplit::io::reader::{DocumentInfo, PdfReader};
use pdfsplit::io::writer::format_file_size;
use pdfsplit::output::{OutputFormatter, ProgressBar, ProgressStyle};
use pdfsplit::plan::SplitPlan;
use pdfsplit::split::Splitter;

fn main() {
    let cli = Cli::parse();

    // Any handled failure exits with status 1
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> Result<(), SplitError> {
    match &cli.command {
        Command::Info { input, json } => run_info(input, *json),
        command => {
            let config = command
                .to_config()?
                .ok_or_else(|| SplitError::invalid_argument("No split configuration"))?;
            run_split(&config)
        }
    }
}

/// Execute a split operation (range or count mode).
fn run_split(config: &Config) -> Result<(), SplitError> {
    let formatter = OutputFormatter::from_config(config);

    formatter.info(&format!("Reading {}", config.input.display()));

    let source = PdfReader::new().load(&config.input)?;

    if source.is_encrypted {
        // Opened with an empty password; outputs will be unencrypted
        formatter.warning("Input is encrypted; writing decrypted output files");
    }

    formatter.info(&format!("Loaded {} page(s)", source.page_count));

    let plan = match &config.mode {
        SplitMode::Ranges(intervals) => {
            SplitPlan::by_ranges(intervals, source.page_count, &config.input)?
        }
        SplitMode::Count(pages_per_file) => {
            SplitPlan::by_count(source.page_count, *pages_per_file, &config.input)?
        }
    };

    if formatter.is_verbose() {
        formatter.debug(&format!("Output directory: {}", config.output_dir.display()));
        for entry in plan.entries() {
            formatter.debug(&format!("{} <- pages {}", entry.file_name, entry.interval));
        }
    }

    let mut bar = if formatter.should_print() {
        ProgressBar::new(plan.total_page_copies(), ProgressStyle::Bar)
    } else {
        ProgressBar::disabled(plan.total_page_copies())
    };
    bar.set_message("copying pages");

    let outcome = Splitter::new().split(&source, &plan, &config.output_dir, || {
        bar.increment();
    })?;
    bar.finish_with_message("done");

    formatter.success(&format!(
        "Created {} file(s) in {}",
        outcome.files.len(),
        config.output_dir.display()
    ));

    for (i, file) in outcome.files.iter().enumerate() {
        if let Some(name) = file.file_name() {
            formatter.list_item(i + 1, &name.to_string_lossy());
        }
    }

    Ok(())
}

/// Show information about a PDF without modifying it.
fn run_info(input: &Path, json: bool) -> Result<(), SplitError> {
    let source = PdfReader::new().load(input)?;
    let info = source.info();

    if json {
        let rendered = serde_json::to_string_pretty(&info)
            .map_err(|e| SplitError::other(e.to_string()))?;
        println!("{rendered}");
    } else {
        display_info(&OutputFormatter::default(), &info);
    }

    Ok(())
}

/// Render the information panel for the `info` subcommand.
fn display_info(formatter: &OutputFormatter, info: &DocumentInfo) {
    formatter.section("PDF Information");
    formatter.detail("File", &info.filename);
    formatter.detail("Path", &info.path.display().to_string());
    formatter.detail("Pages", &info.pages.to_string());
    formatter.detail("Size", &format_file_size(info.file_size));
    formatter.detail("Version", &info.version);

    if info.is_encrypted {
        formatter.detail("Encrypted", "yes (opened with empty password)");
    } else {
        formatter.detail("Encrypted", "no");
    }

    if !info.metadata.is_empty() {
        formatter.section("Metadata");
        let fields = [
            ("Title", &info.metadata.title),
            ("Author", &info.metadata.author),
            ("Subject", &info.metadata.subject),
            ("Keywords", &info.metadata.keywords),
            ("Creator", &info.metadata.creator),
            ("Producer", &info.metadata.producer),
            ("Created", &info.metadata.creation_date),
            ("Modified", &info.metadata.mod_date),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                formatter.detail(label, value);
            }
        }
    }

    formatter.blank_line();
}
