//! CLI command implementations.

mod association;
mod attribute;
mod vocabulary;

pub use association::{AssociationArgs, run_association};
pub use attribute::{AttributeArgs, run_attribute};
pub use vocabulary::{VocabularyArgs, VocabularyKind, run_vocabulary};

use std::path::PathBuf;

use miette::Result;
use searchlabel::{Dictionary, Schema};
use tracing::debug;

use crate::output::diagnostic::{load_error_report, schema_error_report};

/// Dictionary and output options shared by every command.
#[derive(Debug, clap::Args)]
pub struct LookupArgs {
    /// JSON dictionary files, later files win (repeatable)
    #[arg(
        short = 'd',
        long = "dictionary",
        env = "SEARCHLABEL_DICTIONARY",
        value_delimiter = ','
    )]
    pub dictionaries: Vec<PathBuf>,

    /// Language to resolve labels in
    #[arg(long, env = "SEARCHLABEL_LANG", default_value = "en")]
    pub lang: String,

    /// Do not fall back to the bundled English vocabulary
    #[arg(long)]
    pub no_vocabulary: bool,

    /// Show every fallback chain that was resolved
    #[arg(long)]
    pub explain: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl LookupArgs {
    /// Build a dictionary for `--lang` from every `--dictionary` file.
    pub fn dictionary(&self) -> Result<Dictionary> {
        let mut dictionary = Dictionary::builder()
            .language(self.lang.as_str())
            .bundled_vocabulary(!self.no_vocabulary)
            .build();
        for path in &self.dictionaries {
            let count = dictionary
                .merge_file(&self.lang, path)
                .map_err(load_error_report)?;
            debug!(path = %path.display(), count, "loaded dictionary");
        }
        Ok(dictionary)
    }
}

/// The schema and the model a search is rooted at.
#[derive(Debug, clap::Args)]
pub struct SchemaArgs {
    /// JSON schema describing models, columns and associations
    #[arg(long, env = "SEARCHLABEL_SCHEMA")]
    pub schema: PathBuf,

    /// Model the search is rooted at (e.g., Person)
    #[arg(long)]
    pub model: String,
}

impl SchemaArgs {
    pub fn load(&self) -> Result<Schema> {
        let schema = Schema::load(&self.schema).map_err(schema_error_report)?;
        debug!(path = %self.schema.display(), models = schema.models().len(), "loaded schema");
        Ok(schema)
    }
}
