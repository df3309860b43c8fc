//! Implementation of the `searchlabel association` command.

use miette::{IntoDiagnostic, Result};
use searchlabel::{RecordingLookup, Translator};

use super::{LookupArgs, SchemaArgs};
use crate::output::diagnostic::schema_error_report;
use crate::output::print_label;

/// Arguments for the association command.
#[derive(Debug, clap::Args)]
pub struct AssociationArgs {
    /// Association path (e.g., articles_comments); omit for the root model
    #[arg(default_value = "")]
    pub path: String,

    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub lookup: LookupArgs,
}

/// Run the association command.
pub fn run_association(args: AssociationArgs) -> Result<i32> {
    let schema = args.schema.load()?;
    let context = schema
        .context(&args.schema.model)
        .map_err(schema_error_report)?;
    let translator = Translator::new(RecordingLookup::new(args.lookup.dictionary()?));

    let label = translator
        .association(&args.path, Some(&context))
        .into_diagnostic()?;

    print_label(&label, translator.lookup(), &args.lookup)?;
    Ok(exitcode::OK)
}
