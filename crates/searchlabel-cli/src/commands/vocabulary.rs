//! Implementation of the `searchlabel predicate` and `searchlabel word`
//! commands.

use miette::Result;
use searchlabel::{RecordingLookup, Translator};

use super::LookupArgs;
use crate::output::print_label;

/// Which vocabulary namespace to resolve in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyKind {
    Predicate,
    Word,
}

/// Arguments for the predicate and word commands.
#[derive(Debug, clap::Args)]
pub struct VocabularyArgs {
    /// Key to resolve (e.g., cont, not_eq, and, asc)
    pub key: String,

    #[command(flatten)]
    pub lookup: LookupArgs,
}

/// Run the predicate or word command.
pub fn run_vocabulary(kind: VocabularyKind, args: VocabularyArgs) -> Result<i32> {
    let translator = Translator::new(RecordingLookup::new(args.lookup.dictionary()?));
    let label = match kind {
        VocabularyKind::Predicate => translator.predicate(&args.key),
        VocabularyKind::Word => translator.word(&args.key),
    };

    print_label(&label, translator.lookup(), &args.lookup)?;
    Ok(exitcode::OK)
}
