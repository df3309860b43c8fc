//! Implementation of the `searchlabel attribute` command.

use miette::{IntoDiagnostic, Result};
use searchlabel::{AttributeOptions, RecordingLookup, Translator};

use super::{LookupArgs, SchemaArgs};
use crate::output::diagnostic::schema_error_report;
use crate::output::print_label;

/// Arguments for the attribute command.
#[derive(Debug, clap::Args)]
pub struct AttributeArgs {
    /// Compound search name (e.g., name_or_email_cont)
    pub name: String,

    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Prefix associated attributes with the association label
    #[arg(long)]
    pub include_associations: bool,

    /// Label to use when no dictionary key matches the whole name
    #[arg(long = "default")]
    pub default_label: Option<String>,

    #[command(flatten)]
    pub lookup: LookupArgs,
}

/// Run the attribute command.
pub fn run_attribute(args: AttributeArgs) -> Result<i32> {
    let schema = args.schema.load()?;
    let context = schema
        .context(&args.schema.model)
        .map_err(schema_error_report)?;
    let translator = Translator::new(RecordingLookup::new(args.lookup.dictionary()?));

    let options = AttributeOptions {
        context: Some(&context),
        include_associations: args.include_associations,
        default_label: args.default_label.clone(),
    };
    let label = translator.attribute(&args.name, &options).into_diagnostic()?;

    print_label(&label, translator.lookup(), &args.lookup)?;
    Ok(exitcode::OK)
}
