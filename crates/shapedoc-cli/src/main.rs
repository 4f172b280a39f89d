//! shapedoc CLI - Markdown reference documentation for interface and type alias declarations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use shapedoc_core::syntax::SourceFile;
use shapedoc_core::{DiagnosticSink, NullSink, OutputFormat};

mod config;
mod sink;

use config::{Config, Overrides};
use sink::LogSink;

#[derive(Parser, Debug)]
#[command(name = "shapedoc")]
#[command(version = shapedoc_core::VERSION)]
#[command(about = "Generate Markdown reference docs from exported interfaces and type aliases", long_about = None)]
struct Cli {
    /// Declaration tree produced by the parser adapter (JSON)
    input: PathBuf,

    /// Interface body format (tables or json)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Write the document to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Top-level heading for the document
    #[arg(long)]
    title: Option<String>,

    /// Emit a table of contents before the sections
    #[arg(long)]
    toc: bool,

    /// Configuration file (defaults to ./shapedoc.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not report diagnostics
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log pipeline progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    run(cli)
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::Error
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = Config::discover(cli.config.as_deref(), &cwd).context("Failed to load configuration")?;
    let (options, output) = config.merge(Overrides {
        format: cli.format,
        title: cli.title,
        table_of_contents: cli.toc,
        output: cli.output,
    });

    let source = read_source(&cli.input)?;
    log::debug!(
        "read {} statements from '{}'",
        source.statements.len(),
        cli.input.display()
    );

    let mut log_sink = LogSink::new();
    let mut null_sink = NullSink;
    let sink: &mut dyn DiagnosticSink = if cli.quiet { &mut null_sink } else { &mut log_sink };
    let markdown = shapedoc_core::generate(&source.statements, &options, sink);

    match &output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            std::fs::write(path, &markdown)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log::info!("wrote {} ({} format)", path.display(), options.format);
        }
        None => print!("{}", markdown),
    }

    if !cli.quiet {
        match log_sink.count() {
            0 => log::info!("no diagnostics"),
            1 => log::warn!("1 diagnostic reported"),
            n => log::warn!("{} diagnostics reported", n),
        }
    }

    Ok(())
}

fn read_source(path: &Path) -> Result<SourceFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse declaration tree in '{}'", path.display()))
}
