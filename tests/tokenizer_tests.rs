use logtriage::tokenizer::tokenize;

#[test]
fn splits_four_fields_and_joins_remainder_into_message() {
    let line = "INFO 2024-01-01 Loader Stage1 file not found";
    let parsed = tokenize(line, 1).expect("well-formed line");
    assert_eq!(parsed.head, ["INFO".to_string(), "2024-01-01".to_string()]);
    assert_eq!(parsed.event_type, "Loader");
    assert_eq!(parsed.stage, "Stage1");
    assert_eq!(parsed.message, "file not found");
}

#[test]
fn exactly_four_tokens_yields_empty_message() {
    let parsed = tokenize("WARN ts TypeA StageB", 3).expect("well-formed line");
    assert_eq!(parsed.event_type, "TypeA");
    assert_eq!(parsed.stage, "StageB");
    assert_eq!(parsed.message, "");
}

#[test]
fn collapses_whitespace_runs_and_drops_trailing_space() {
    let parsed = tokenize("ERR  ts\tTypeA  StageB   disk   full  ", 1).expect("well-formed line");
    assert_eq!(parsed.head, ["ERR".to_string(), "ts".to_string()]);
    assert_eq!(parsed.message, "disk full");
}

#[test]
fn short_line_is_a_malformed_line_error() {
    let err = tokenize("onlyThreeTokens here now", 17).unwrap_err();
    assert_eq!(err.line_number, 17);
    assert_eq!(err.field_count, 3);
    assert_eq!(err.raw_text, "onlyThreeTokens here now");
}

#[test]
fn empty_line_is_a_malformed_line_error() {
    let err = tokenize("", 5).unwrap_err();
    assert_eq!(err.field_count, 0);
    assert_eq!(err.raw_text, "");
}

#[test]
fn malformed_line_error_message_names_the_line() {
    let err = tokenize("a b", 9).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 9"), "got: {msg}");
    assert!(msg.contains("got 2"), "got: {msg}");
}
