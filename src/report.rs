use crate::grouping::GroupIndex;
use crate::triage::TriageSummary;
use serde_json::{json, Value};
use std::fmt::Write;

/// Nested indented listing: type, its stages, the distinct messages seen
/// for each, all in first-seen order.
pub fn render_text(index: &GroupIndex) -> String {
    let mut out = String::new();
    for (event_type, stages) in index {
        let _ = writeln!(out, "{event_type}");
        for (stage, messages) in stages {
            let _ = writeln!(out, "  {stage} ({})", messages.len());
            for message in messages {
                let _ = writeln!(out, "    {message}");
            }
        }
    }
    out
}

/// JSON report with a counts summary, the nested groups, and any malformed
/// lines collected during the run.
pub fn report_json(summary: &TriageSummary) -> Value {
    json!({
        "summary": {
            "total_lines": summary.total_lines,
            "ingested": summary.ingested,
            "event_types": summary.groups.len(),
            "distinct_messages": distinct_messages(&summary.groups),
            "duplicate_messages": summary.duplicates,
            "malformed_lines": summary.malformed.len(),
        },
        "groups": &summary.groups,
        "errors": &summary.malformed,
    })
}

fn distinct_messages(index: &GroupIndex) -> usize {
    index
        .values()
        .flat_map(|stages| stages.values())
        .map(|messages| messages.len())
        .sum()
}
