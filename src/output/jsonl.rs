#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. All decoration records (sorted by start, then end)
//! 2. One summary record

use crate::decoration::Decoration;
use crate::text::DecoratedText;
use serde::Serialize;

/// JSONL output formatter
///
/// Formats a decorated text as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format a decorated text as JSONL
    ///
    /// Decorations with the same range keep the order they were applied
    /// in.
    pub fn format(&self, text: &DecoratedText) -> String {
        let mut output = String::new();

        let mut records: Vec<DecorationRecord<'_>> = text
            .decorations()
            .map(|(range, decoration)| DecorationRecord {
                record_type: "decoration",
                kind: decoration.kind(),
                start: range.start,
                end: range.end,
                snippet: &text.as_str()[range.clone()],
                decoration,
            })
            .collect();

        records.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.end.cmp(&b.end)));

        for record in &records {
            push_line(&mut output, record);
        }

        let summary = SummaryRecord {
            record_type: "summary",
            text: text.as_str(),
            length: text.len(),
            decorations: text.decorations_len(),
            runs: text.runs().len(),
        };
        push_line(&mut output, &summary);

        output
    }

    /// Print the formatted text to stdout
    pub fn write_to_stdout(&self, text: &DecoratedText) {
        print!("{}", self.format(text));
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_line(output: &mut String, record: &impl Serialize) {
    match serde_json::to_string(record) {
        Ok(json) => {
            output.push_str(&json);
            output.push('\n');
        }
        Err(e) => log::warn!("Failed to serialize JSONL record: {}", e),
    }
}

/// Decoration record for JSONL output
#[derive(Debug, Serialize)]
struct DecorationRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    kind: &'static str,
    start: usize,
    end: usize,
    snippet: &'a str,
    decoration: &'a Decoration,
}

/// Summary record for JSONL output
#[derive(Debug, Serialize)]
struct SummaryRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    text: &'a str,
    length: usize,
    decorations: usize,
    runs: usize,
}
