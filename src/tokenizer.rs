use serde::Serialize;
use thiserror::Error;

/// One log line split into its fixed leading fields plus the free-text rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub head: [String; 2], // tokens 0 and 1, passed through unparsed (typically severity and timestamp)
    pub event_type: String,
    pub stage: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("line {line_number}: expected at least 4 fields, got {field_count}: {raw_text:?}")]
pub struct MalformedLine {
    pub line_number: usize,
    pub field_count: usize,
    pub raw_text: String,
}

/// Split a line on runs of whitespace into four leading fields plus a
/// message built from the remaining tokens rejoined with single spaces.
/// A line with exactly 4 tokens yields an empty message; fewer than 4
/// tokens is a `MalformedLine`.
pub fn tokenize(line: &str, line_number: usize) -> Result<ParsedLine, MalformedLine> {
    let mut tokens = line.split_whitespace();
    let mut take_field = || tokens.next().map(str::to_string);

    let fields = [take_field(), take_field(), take_field(), take_field()];
    match fields {
        [Some(f0), Some(f1), Some(f2), Some(f3)] => Ok(ParsedLine {
            head: [f0, f1],
            event_type: f2,
            stage: f3,
            message: itertools::join(tokens, " "),
        }),
        _ => Err(MalformedLine {
            line_number,
            field_count: fields.iter().flatten().count(),
            raw_text: line.to_string(),
        }),
    }
}
