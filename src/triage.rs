use crate::grouping::{GroupAccumulator, GroupIndex, IngestOutcome};
use crate::tokenizer::{self, MalformedLine, ParsedLine};

/// Result of one triage pass over a batch of lines.
#[derive(Debug, Clone)]
pub struct TriageSummary {
    pub groups: GroupIndex,
    pub total_lines: usize,
    pub ingested: usize,
    pub duplicates: usize,
    pub malformed: Vec<MalformedLine>,
}

/// Per-line notification for callers that want to trace the run.
#[derive(Debug)]
pub enum LineEvent<'a> {
    Ingested {
        line_number: usize,
        line: &'a ParsedLine,
        outcome: IngestOutcome,
    },
    Malformed(&'a MalformedLine),
}

pub fn triage_lines(lines: &[&str]) -> TriageSummary {
    triage_lines_with(lines, |_| {})
}

/// Tokenize and ingest every line, collecting malformed lines instead of
/// stopping on them. Line numbers are 1-based. The grouping stays valid
/// across malformed lines, so a run always covers the whole input.
pub fn triage_lines_with<F>(lines: &[&str], mut on_line: F) -> TriageSummary
where
    F: FnMut(LineEvent<'_>),
{
    let mut acc = GroupAccumulator::new();
    let mut ingested = 0usize;
    let mut duplicates = 0usize;
    let mut malformed = Vec::new();

    for (idx, raw) in lines.iter().enumerate() {
        let line_number = idx + 1;
        match tokenizer::tokenize(raw, line_number) {
            Ok(parsed) => {
                let outcome = acc.ingest(&parsed);
                if outcome == IngestOutcome::DuplicateMessage {
                    duplicates += 1;
                }
                ingested += 1;
                on_line(LineEvent::Ingested {
                    line_number,
                    line: &parsed,
                    outcome,
                });
            }
            Err(err) => {
                on_line(LineEvent::Malformed(&err));
                malformed.push(err);
            }
        }
    }

    TriageSummary {
        groups: acc.snapshot(),
        total_lines: lines.len(),
        ingested,
        duplicates,
        malformed,
    }
}
