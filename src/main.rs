//! toyc-lex - converts a source file into its token stream.
//!
//! Reads the input file, runs the lexer over it and writes the
//! space-separated token kinds to a `.lex` file next to the input.

use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use toyc_lexer::{lexer::lexer::tokenize, output, render_error};

/// Tokenize a source file into a space-separated list of token kinds.
#[derive(Parser, Debug)]
#[command(name = "toyc-lex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a source file into a space-separated list of token kinds", long_about = None)]
struct Cli {
    /// Source file to tokenize
    input: PathBuf,

    /// Output file (defaults to the input name with a `.lex` extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, env = "TOYC_LEX_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "TOYC_LEX_NO_COLOR")]
    no_color: bool,

    /// Do not print the analysis report
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to initialize logging: {0}")]
    Logging(String),
    #[error("lexical analysis failed")]
    Lexical,
}

type Result<T> = std::result::Result<T, CliError>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Lexical) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();

    let source = read_to_string(&cli.input).map_err(|source| CliError::Read {
        path: cli.input.clone(),
        source,
    })?;

    let file_name = display_name(&cli.input);
    let (tokens, error) = tokenize(source.clone(), Some(file_name));

    info!(tokens = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| output::output_path(&cli.input));

    // The tokens read before a lexical error are still persisted.
    let line = output::write_tokens(&output_path, &tokens).map_err(|source| CliError::Write {
        path: output_path.clone(),
        source,
    })?;

    if let Some(error) = error {
        eprintln!("{}", render_error(&error, &source));
        return Err(CliError::Lexical);
    }

    debug!(elapsed = ?start.elapsed(), "finished");

    if !cli.quiet {
        println!("Analysis completed successfully!");
        println!("Input: {}", source.trim());
        println!("Output: {}", line);
        println!("Generated file: {}", output_path.display());
    }

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
