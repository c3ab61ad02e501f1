//! Command-line interface for the yumlzoo utility
//!
//! Provides a CLI to parse yUML class diagrams, compute their structural
//! statistics and summarize a whole diagram zoo.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, span, warn, Level};

use crate::report;
use yumlzoo::core::logging::init_logging;
use yumlzoo::core::Parser as _;
use yumlzoo::stats::{SummaryOptions, DEFAULT_TOP_DENSE};
use yumlzoo::{
    collect_stats, compute_model_stats, compute_stats, summarize_with, YumlParser, ZooIndex,
};

/// yumlzoo - Structural statistics for yUML class diagrams
#[derive(Parser)]
#[command(name = "yumlzoo")]
#[command(about = "Parse yUML class diagrams and summarize a diagram zoo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error) [default: YUMLZOO_LOG_LEVEL, RUST_LOG or info]
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json) [default: YUMLZOO_LOG_FORMAT or compact]
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a yUML diagram and list its classes and relations
    Parse {
        /// Input yUML file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the parsed graph as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the structural statistics of one diagram
    Stats {
        /// Input yUML file (use - for stdin)
        #[arg(short, long, conflicts_with = "zoo")]
        input: Option<PathBuf>,

        /// Zoo directory to look the model up in
        #[arg(short, long, requires = "model")]
        zoo: Option<PathBuf>,

        /// Model name (defaults to the input file stem)
        #[arg(short, long)]
        model: Option<String>,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize every yUML model in a zoo directory
    Summary {
        /// Zoo directory
        #[arg(short, long)]
        zoo: PathBuf,

        /// Number of models in the density ranking
        #[arg(long, default_value_t = DEFAULT_TOP_DENSE)]
        top: usize,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the files of a zoo directory with their name metadata
    Index {
        /// Zoo directory
        #[arg(short, long)]
        zoo: PathBuf,

        /// Print the index as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Main CLI application
#[derive(Default)]
pub struct YumlzooApp;

impl YumlzooApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Flags left unset fall back to the environment inside `init_logging`
        let log_level = cli.log_level.map(|level| level.as_str());
        let log_format = cli.log_format.map(|format| format.as_str());

        if let Err(e) = init_logging(log_level, log_format) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("yumlzoo v{}", env!("CARGO_PKG_VERSION"));
        }

        let output = match cli.command {
            Commands::Parse { input, json } => self.parse_command(input, json, cli.verbose),
            Commands::Stats {
                input,
                zoo,
                model,
                json,
            } => self.stats_command(input, zoo, model, json, cli.verbose),
            Commands::Summary { zoo, top, json } => {
                self.summary_command(&zoo, top, json, cli.verbose)
            }
            Commands::Index { zoo, json } => self.index_command(&zoo, json),
        }?;

        self.write_output(&output)
    }

    /// Handle the parse command
    fn parse_command(&self, input: Option<PathBuf>, json: bool, verbose: bool) -> Result<String> {
        let name = Self::model_name(input.as_deref(), None);
        let command_span = span!(Level::INFO, "parse_command", model = %name, json);
        let _enter = command_span.enter();

        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }
        Self::check_notation(&name, &content);

        let graph = yumlzoo::parse(&content);
        if json {
            Self::to_json(&graph)
        } else {
            Ok(report::graph_report(&name, &graph))
        }
    }

    /// Handle the stats command
    fn stats_command(
        &self,
        input: Option<PathBuf>,
        zoo: Option<PathBuf>,
        model: Option<String>,
        json: bool,
        verbose: bool,
    ) -> Result<String> {
        let command_span = span!(Level::INFO, "stats_command", json);
        let _enter = command_span.enter();

        let stats = match zoo {
            Some(dir) => {
                let model = model.ok_or_else(|| anyhow!("--zoo needs --model"))?;
                let index = ZooIndex::scan(&dir)
                    .with_context(|| format!("Failed to scan zoo '{}'", dir.display()))?;
                if verbose {
                    eprintln!("Indexed {} files in {}", index.len(), dir.display());
                }
                compute_model_stats(&model, &index)?
            }
            None => {
                let name = Self::model_name(input.as_deref(), model);
                let content = self.read_input(input)?;
                if verbose {
                    eprintln!("Read {} bytes of input", content.len());
                }
                Self::check_notation(&name, &content);
                compute_stats(name, &yumlzoo::parse(&content))
            }
        };
        debug!(model = %stats.model, blocks = stats.num_blocks, "Computed statistics");

        if json {
            Self::to_json(&stats)
        } else {
            Ok(report::stats_report(&stats))
        }
    }

    /// Handle the summary command
    fn summary_command(&self, zoo: &Path, top: usize, json: bool, verbose: bool) -> Result<String> {
        let command_span = span!(Level::INFO, "summary_command", zoo = %zoo.display(), top);
        let _enter = command_span.enter();

        let options = SummaryOptions::with_top_dense(top)?;
        let index = ZooIndex::scan(zoo)
            .with_context(|| format!("Failed to scan zoo '{}'", zoo.display()))?;
        let records = collect_stats(&index)?;

        if verbose {
            eprintln!("Computed statistics for {} models", records.len());
        }

        let summary = summarize_with(&records, &options)
            .with_context(|| format!("No .yuml models found in '{}'", zoo.display()))?;
        info!(
            models = summary.total_models,
            blocks = summary.total_blocks,
            "Summarized zoo"
        );
        if json {
            Self::to_json(&summary)
        } else {
            Ok(report::summary_report(&summary))
        }
    }

    /// Handle the index command
    fn index_command(&self, zoo: &Path, json: bool) -> Result<String> {
        let command_span = span!(Level::INFO, "index_command", zoo = %zoo.display());
        let _enter = command_span.enter();

        let index = ZooIndex::scan(zoo)
            .with_context(|| format!("Failed to scan zoo '{}'", zoo.display()))?;
        debug!(files = index.len(), "Listed zoo");
        if json {
            Self::to_json(index.entries())
        } else {
            Ok(report::index_report(&index))
        }
    }

    /// Warn when the input holds no bracketed class at all
    fn check_notation(name: &str, content: &str) -> bool {
        let recognized = YumlParser::new().can_parse(content);
        if !recognized {
            warn!(model = %name, "Input holds no yUML class or relation");
        }
        recognized
    }

    fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    /// Explicit name, else the input file stem, else `stdin`
    fn model_name(input: Option<&Path>, model: Option<String>) -> String {
        model.unwrap_or_else(|| {
            input
                .filter(|path| path.as_os_str() != "-")
                .and_then(|path| path.file_stem())
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "stdin".to_string())
        })
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write a report to stdout, ending with a newline
    pub fn write_output(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        if !content.is_empty() && !content.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
        Ok(())
    }
}
