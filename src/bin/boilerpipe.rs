//! Command-line front end: extract title and body from HTML files or stdin.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rs_boilerpipe::{extract_bytes_with_options, ExtractResult, Options};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "boilerpipe",
    version,
    about = "Extract the title and main text of HTML documents"
)]
struct Cli {
    /// HTML files to read; `-` or none reads stdin
    files: Vec<PathBuf>,

    /// Print one JSON object per document instead of plain text
    #[arg(long)]
    json: bool,

    /// Stop the article pipeline at comment and footer markers
    #[arg(long)]
    end_of_text: bool,

    /// Ignore login and browser-warning chrome
    #[arg(long)]
    ignore_chrome: bool,

    /// Do not fall back to the largest paragraph
    #[arg(long)]
    no_fallback: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    source: String,
    #[serde(flatten)]
    result: &'a ExtractResult,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let options = Options {
        detect_end_of_text: cli.end_of_text,
        ignore_chrome_text: cli.ignore_chrome,
        paragraph_fallback: !cli.no_fallback,
        ..Options::default()
    };

    let sources = if cli.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.files.clone()
    };

    let mut failed = false;
    for source in &sources {
        if let Err(err) = run(source, &options, cli.json) {
            eprintln!("boilerpipe: {err:#}");
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(source: &PathBuf, options: &Options, json: bool) -> Result<()> {
    let html = read_source(source)?;
    let result = extract_bytes_with_options(&html, options)
        .with_context(|| format!("failed to extract {}", source.display()))?;

    let mut stdout = io::stdout().lock();
    if json {
        let output = JsonOutput {
            source: source.display().to_string(),
            result: &result,
        };
        serde_json::to_writer(&mut stdout, &output)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}\n\n{}", result.title, result.body)?;
    }
    Ok(())
}

fn read_source(source: &PathBuf) -> Result<Vec<u8>> {
    if source.as_os_str() == "-" {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }
    fs::read(source).with_context(|| format!("failed to read {}", source.display()))
}
