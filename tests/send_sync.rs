use ecma_regex_parser::{Error, ParsedPattern, ParserBuilder, RegExpTree, UnicodeTables};

// Helper functions to ensure types implement Send and Sync
fn assert_send<T: Send>() {}
fn assert_sync<T: Sync>() {}

#[test]
fn test_parsed_pattern_is_send_sync() {
    assert_send::<ParsedPattern>();
    assert_sync::<ParsedPattern>();
    assert_send::<RegExpTree>();
    assert_sync::<RegExpTree>();
}

#[test]
fn test_builder_and_tables_are_send_sync() {
    assert_send::<ParserBuilder>();
    assert_sync::<ParserBuilder>();
    assert_send::<UnicodeTables>();
    assert_sync::<UnicodeTables>();
}

#[test]
#[cfg(feature = "std")]
fn test_error_is_send_sync() {
    assert_send::<Error>();
    assert_sync::<Error>();

    // Errors can travel across threads as boxed std errors.
    let err: Box<dyn std::error::Error + Send + Sync> =
        Box::new(RegExpTree::parse("(").unwrap_err());
    assert_eq!(err.to_string(), "Parsing error at position 1: Unterminated group");
}
