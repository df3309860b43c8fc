//! Printing resolved labels.

pub mod diagnostic;
pub mod table;

use std::collections::BTreeMap;

use miette::{IntoDiagnostic, Result};
use searchlabel::{Dictionary, LookupRequest, RecordingLookup};
use serde::Serialize;

use crate::commands::LookupArgs;
use table::{format_explain_table, format_near_misses};

/// JSON output for one resolved chain.
#[derive(Debug, Serialize)]
struct RequestJson {
    chain: Vec<String>,
    count: Option<i64>,
    result: String,
}

/// JSON output for a command.
#[derive(Debug, Serialize)]
struct LabelJson {
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    requests: Option<Vec<RequestJson>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    near_misses: Option<BTreeMap<String, Vec<String>>>,
}

impl From<&LookupRequest> for RequestJson {
    fn from(request: &LookupRequest) -> Self {
        Self {
            chain: request.chain.iter().map(ToString::to_string).collect(),
            count: request.count,
            result: request.result.clone(),
        }
    }
}

/// Dictionary keys missed while resolving `requests` that have a close
/// loaded match, keyed by the missed key.
pub fn collect_near_misses(
    dictionary: &Dictionary,
    requests: &[LookupRequest],
) -> BTreeMap<String, Vec<String>> {
    requests
        .iter()
        .flat_map(|request| dictionary.near_misses(&request.chain))
        .collect()
}

/// Print a label, followed by the recorded chains and any near-miss keys
/// when `--explain` is set.
pub fn print_label(
    label: &str,
    lookup: &RecordingLookup<Dictionary>,
    args: &LookupArgs,
) -> Result<()> {
    let requests = lookup.requests();
    if args.json {
        let output = LabelJson {
            label: label.to_string(),
            requests: args
                .explain
                .then(|| requests.iter().map(RequestJson::from).collect()),
            near_misses: args
                .explain
                .then(|| collect_near_misses(lookup.inner(), &requests)),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{label}");
        if args.explain {
            println!("{}", format_explain_table(&requests));
            for line in format_near_misses(&collect_near_misses(lookup.inner(), &requests)) {
                println!("{line}");
            }
        }
    }
    Ok(())
}
