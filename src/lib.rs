pub mod grouping;
pub mod report;
pub mod tokenizer;
pub mod triage;
