//! searchlabel CLI entry point.
//!
//! Resolves labels for search-form components from the command line:
//! - `searchlabel attribute` - Label a compound search name
//! - `searchlabel association` - Label an association path
//! - `searchlabel predicate` / `searchlabel word` - Label vocabulary

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    AssociationArgs, AttributeArgs, VocabularyArgs, VocabularyKind, run_association,
    run_attribute, run_vocabulary,
};
use tracing_subscriber::EnvFilter;

/// Search-form label tools.
#[derive(Debug, Parser)]
#[command(name = "searchlabel")]
#[command(about = "Resolve human-readable labels for search names", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log every fallback chain as it is resolved
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Label a compound search name such as `name_or_email_cont`
    Attribute(AttributeArgs),
    /// Label an association path, or the root model when empty
    Association(AssociationArgs),
    /// Label a predicate such as `cont`
    Predicate(VocabularyArgs),
    /// Label a vocabulary word such as `and`
    Word(VocabularyArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG`; `--verbose` lowers the default to
/// `debug`.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Attribute(args) => run_attribute(args),
        Commands::Association(args) => run_association(args),
        Commands::Predicate(args) => run_vocabulary(VocabularyKind::Predicate, args),
        Commands::Word(args) => run_vocabulary(VocabularyKind::Word, args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::DATAERR);
        }
    }
}
