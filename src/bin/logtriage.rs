use anyhow::bail;
use clap::Parser;
use logtriage::grouping::IngestOutcome;
use logtriage::triage::{self, LineEvent};
use logtriage::report;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

#[derive(Parser, Debug)]
#[command(name = "logtriage", version, about = "Group distinct log messages by event type and stage")]
struct Cli {
    /// Input files (`-` for stdin). May be repeated.
    #[arg(required = false)]
    input: Vec<String>,

    /// Output format: text | json
    #[arg(long = "format", default_value = "text")]
    format: String,

    /// Exit non-zero if any line was malformed (default: skip and summarize)
    #[arg(long = "fail-fast", default_value_t = false)]
    fail_fast: bool,

    /// Trace each line's grouping branch to stderr
    #[arg(long = "verbose", short = 'v', default_value_t = false)]
    verbose: bool,
}

fn read_all_lines(paths: &[String]) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    for p in paths {
        if p == "-" {
            let stdin = io::stdin();
            let reader = stdin.lock();
            for line in reader.lines() {
                out.push(line?);
            }
        } else {
            let f = File::open(p)?;
            let r = BufReader::new(f);
            for line in r.lines() {
                out.push(line?);
            }
        }
    }
    Ok(out)
}

fn trace_line(event: &LineEvent<'_>) {
    match event {
        LineEvent::Ingested { line_number, line, outcome } => {
            let branch = match outcome {
                IngestOutcome::NewType => "new type",
                IngestOutcome::NewStage => "new stage",
                IngestOutcome::NewMessage => "new message",
                IngestOutcome::DuplicateMessage => "duplicate message (already recorded)",
            };
            eprintln!(
                "line {line_number}: {branch} [{} / {}] {:?}",
                line.event_type, line.stage, line.message
            );
        }
        LineEvent::Malformed(err) => eprintln!("{err}"),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default to stdin if no input specified
    let input_files = if cli.input.is_empty() {
        vec!["-".to_string()]
    } else {
        cli.input.clone()
    };

    let lines = read_all_lines(&input_files)?;
    let refs: Vec<&str> = lines.iter().map(|s| s.as_ref()).collect();

    let summary = if cli.verbose {
        triage::triage_lines_with(&refs, |event| trace_line(&event))
    } else {
        triage::triage_lines_with(&refs, |event| {
            // malformed lines always go to stderr so the data output stays clean
            if let LineEvent::Malformed(err) = event {
                eprintln!("skipped: {err}");
            }
        })
    };

    match cli.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report::report_json(&summary))?),
        "text" => {
            print!("{}", report::render_text(&summary.groups));
            eprintln!(
                "{} lines: {} ingested, {} duplicate messages, {} malformed",
                summary.total_lines,
                summary.ingested,
                summary.duplicates,
                summary.malformed.len()
            );
        }
        other => bail!("unknown format: {other} (expected text or json)"),
    }

    if cli.fail_fast && !summary.malformed.is_empty() {
        bail!("{} malformed line(s)", summary.malformed.len());
    }
    Ok(())
}
