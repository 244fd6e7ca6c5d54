use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use request_file::request::{load, ParsedRequest};

#[derive(Parser, Debug)]
#[command(name = "request_file")]
#[command(about = "Parse a .request file into a structured HTTP request.", long_about = None)]
struct Cli {
    /// Path to the request file. Use `-` to read from stdin.
    file: PathBuf,
    /// Host used when the file has no Host header.
    #[arg(long, default_value = "localhost")]
    fallback_domain: String,
    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Json,
    Summary,
    Url,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let request = if cli.file.as_os_str() == "-" {
        info!(target: "loader", "Reading request from stdin");
        load::from_reader(&cli.fallback_domain, io::stdin().lock())
            .context("failed to parse request from stdin")?
    } else {
        info!(target: "loader", "Reading request from {0}", cli.file.display());
        load::from_path(&cli.fallback_domain, &cli.file)
            .with_context(|| format!("failed to parse {0}", cli.file.display()))?
    };

    let mut stdout = io::stdout().lock();
    match cli.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut stdout, &request)?;
            writeln!(stdout)?;
        }
        Format::Summary => write_summary(&mut stdout, &request)?,
        Format::Url => writeln!(stdout, "{0}", request.url())?,
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, request: &ParsedRequest) -> io::Result<()> {
    writeln!(out, "{0} {1}", request.method(), request.url())?;
    for (name, values) in request.headers().iter() {
        for value in values {
            writeln!(out, "{name}: {value}")?;
        }
    }
    if let Some(body) = request.body() {
        writeln!(out)?;
        writeln!(out, "{body}")?;
    }
    Ok(())
}
