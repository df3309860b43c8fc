//! Table formatting utilities for CLI output.

use std::collections::BTreeMap;

use comfy_table::{ContentArrangement, Table, presets};
use owo_colors::{OwoColorize, Stream};
use searchlabel::LookupRequest;

/// Format recorded lookups as a table, one row per chain in request order.
pub fn format_explain_table(requests: &[LookupRequest]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Fallback chain", "Count", "Result"]);

    for (index, request) in requests.iter().enumerate() {
        let chain: Vec<String> = request.chain.iter().map(ToString::to_string).collect();
        let result = if request.result.starts_with("translation missing") {
            request
                .result
                .if_supports_color(Stream::Stdout, OwoColorize::red)
                .to_string()
        } else {
            request.result.clone()
        };
        table.add_row(vec![
            (index + 1).to_string(),
            chain.join("\n"),
            request
                .count
                .map_or_else(|| "-".to_string(), |count| count.to_string()),
            result,
        ]);
    }

    table
}

/// One "did you mean" line per missed key.
pub fn format_near_misses(near_misses: &BTreeMap<String, Vec<String>>) -> Vec<String> {
    near_misses
        .iter()
        .map(|(key, suggestions)| {
            format!(
                "{} {key}: did you mean {}?",
                "missing".if_supports_color(Stream::Stdout, OwoColorize::yellow),
                suggestions.join(", ")
            )
        })
        .collect()
}
