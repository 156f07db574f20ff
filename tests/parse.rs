use ecma_regex_parser::{
    CharacterRange, Error, ParseError, ParserBuilder, PropertyResolver, RegExpTree, WideCharRange,
    MAX_NESTING,
};

fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

fn unicode() -> ParserBuilder {
    let mut builder = ParserBuilder::new();
    builder.unicode(true);
    builder
}

#[test]
fn error_positions() {
    let test_cases = [
        ("a)", "Parsing error at position 1: Unmatched ')'"),
        ("(a", "Parsing error at position 2: Unterminated group"),
        ("*a", "Parsing error at position 0: Nothing to repeat"),
        ("[a", "Parsing error at position 2: Unterminated character class"),
        ("[b-a]", "Parsing error at position 4: Range out of order in character class"),
        ("ab\\", "Parsing error at position 2: \\ at end of pattern"),
        ("(?x)", "Parsing error at position 1: Invalid group"),
    ];
    for (pattern, expected_message) in test_cases {
        assert_parse_error(&ParserBuilder::new(), pattern, expected_message);
    }
}

#[test]
fn unicode_mode_errors() {
    let test_cases = [
        ("\\-", "Parsing error at position 0: Invalid escape"),
        ("a{", "Parsing error at position 1: Lone quantifier brackets"),
        ("]", "Parsing error at position 0: Lone ']' in pattern"),
        ("\\u{110000}", "Parsing error at position 8: Unicode escape must not be greater than 0x10FFFF"),
        ("\\2(a)", "Parsing error at position 0: Back reference out of range"),
        ("[\\w-z]", "Parsing error at position 5: Character class escape used as range endpoint"),
        ("\\p{NotAProperty}", "Parsing error at position 16: Invalid property name"),
    ];
    for (pattern, expected_message) in test_cases {
        assert_parse_error(&unicode(), pattern, expected_message);
    }
}

#[test]
fn annex_b_is_lenient() {
    let builder = ParserBuilder::new();
    for pattern in ["\\-", "a{", "]", "\\2(a)", "[\\w-z]", "\\p{NotAProperty}", "\\c", "\\u{1"] {
        assert!(builder.parse_str(pattern).is_ok(), "{} should parse", pattern);
    }
}

#[test]
fn named_reference_before_group() {
    let parsed = ParserBuilder::new().parse_str("\\k<year>-(?<year>\\d{4})").unwrap();
    assert_eq!(parsed.capture_count, 1);
    assert_eq!(parsed.capture_index("year"), Some(1));
    assert!(parsed.backrefs.contains(1));
    assert_eq!(parsed.tree.to_string(), "(: (<- 1) '-' (^ (# 4 4 g [0-9])))");
}

#[test]
fn unknown_named_reference() {
    let err = ParserBuilder::new().parse_str("(?<a>x)\\k<b>").unwrap_err();
    assert_eq!(
        err,
        Error::ParseError(12, ParseError::InvalidNamedCaptureReference("b".to_string()))
    );
    assert_eq!(err.position(), 12);
    assert_eq!(
        err.to_string(),
        "Parsing error at position 12: Invalid named capture referenced: 'b'"
    );
}

#[test]
fn supplementary_characters() {
    let parsed = unicode().parse_str("[\u{1F600}-\u{1F64F}]").unwrap();
    assert_eq!(parsed.tree.to_string(), "(! '\\ud83d' [\\ude00-\\ude4f])");

    // Outside Unicode mode the class holds two code units and a range.
    let parsed = ParserBuilder::new().parse_str("[\u{1F600}]").unwrap();
    assert_eq!(parsed.tree.to_string(), "[\\ud83d \\ude00]");
}

#[test]
fn parse_raw_utf16() {
    let parsed = ParserBuilder::new().parse(&units("a|b")).unwrap();
    assert_eq!(parsed.tree.to_string(), "(| 'a' 'b')");
    // A lone lead surrogate is a pattern character too.
    assert!(unicode().parse(&[0x61, 0xD800]).is_ok());
    assert!(unicode().validate(&[0x5C]).is_err());
}

#[test]
fn match_only_trimming() {
    let mut builder = ParserBuilder::new();
    builder.match_only(true);
    let parsed = builder.parse_str(".*needle.*").unwrap();
    assert!(parsed.simple);
    assert_eq!(parsed.tree, RegExpTree::Atom(units("needle")));
    // Error positions refer to the trimmed source.
    assert_parse_error(&builder, ".*(", "Parsing error at position 1: Unterminated group");
}

struct Vowels;

impl PropertyResolver for Vowels {
    fn resolve(&self, name: &str, value: &str) -> Option<Vec<WideCharRange>> {
        if name == "Vowel" && value.is_empty() {
            let vowels = "aeiou".chars().map(|c| WideCharRange::singleton(c as u32));
            Some(vowels.collect())
        } else {
            None
        }
    }
}

#[test]
fn custom_property_resolver() {
    let parsed = unicode()
        .parse_with_properties(&units("\\p{Vowel}"), &Vowels)
        .unwrap();
    assert_eq!(parsed.tree.to_string(), "[a e i o u]");
    let err = unicode()
        .parse_with_properties(&units("\\p{L}"), &Vowels)
        .unwrap_err();
    assert_eq!(err.kind(), &ParseError::InvalidPropertyName);
}

#[test]
fn case_insensitive_classes() {
    let mut builder = unicode();
    builder.case_insensitive(true);
    let parsed = builder.parse_str("[\u{10400}]").unwrap();
    // DESERET CAPITAL LONG I and its lowercase partner share a lead surrogate.
    match parsed.tree {
        RegExpTree::Text(_) | RegExpTree::Disjunction(_) => {}
        tree => panic!("unexpected tree {}", tree),
    }
    let lower = builder.parse_str("\\u{10428}").unwrap();
    assert_eq!(lower.tree.to_string(), "(! '\\ud801' [\\udc28 \\udc00])");
}

#[test]
fn character_ranges_are_public() {
    let parsed = ParserBuilder::new().parse_str("[a-z]").unwrap();
    match parsed.tree {
        RegExpTree::CharacterClass(class) => {
            assert!(!class.negated);
            assert_eq!(class.ranges, vec![CharacterRange::range(0x61, 0x7A)]);
        }
        tree => panic!("unexpected tree {}", tree),
    }
}

#[test]
fn property_names_must_match_exactly() {
    let builder = unicode();
    for pattern in [
        "\\p{lu}",
        "\\p{isAlphabetic}",
        "\\p{alpha}",
        "\\p{gc=Any}",
        "\\p{L_u}",
        "\\p{sc=greek}",
        "\\p{Script=Latin_}",
        "\\p{Block=Basic_Latin}",
    ] {
        let err = builder.parse_str(pattern).unwrap_err();
        assert_eq!(err.kind(), &ParseError::InvalidPropertyName, "{}", pattern);
    }
    for pattern in ["\\p{Lu}", "\\p{Alphabetic}", "\\p{gc=L}", "\\p{sc=Greek}", "\\p{Any}"] {
        assert!(builder.parse_str(pattern).is_ok(), "{}", pattern);
    }
}

#[test]
fn nesting_limit() {
    let at_limit = format!("{}a{}*", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    let parsed = ParserBuilder::new().parse_str(&at_limit).unwrap();
    assert_eq!(parsed.capture_count, MAX_NESTING);
    assert_eq!(parsed.tree.min_match(), 0);

    let lookarounds = format!("{}a{}", "(?<=".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert!(unicode().parse_str(&lookarounds).is_ok());

    assert_parse_error(
        &ParserBuilder::new(),
        &format!("a{}", "(".repeat(MAX_NESTING + 1)),
        "Parsing error at position 257: Pattern too deeply nested",
    );
    let err = unicode()
        .parse_str(&format!("{}a{}", "(?=".repeat(200_000), ")".repeat(200_000)))
        .unwrap_err();
    assert_eq!(err.kind(), &ParseError::NestingTooDeep);
}

#[test]
fn emoji_sequence_properties() {
    let builder = unicode();
    let flags = builder.parse_str("\\p{RGI_Emoji_Flag_Sequence}").unwrap().tree;
    match &flags {
        RegExpTree::Disjunction(alternatives) => {
            assert!(alternatives.len() > 250);
            assert!(alternatives.iter().all(|flag| flag.min_match() == 4));
        }
        tree => panic!("unexpected tree {}", tree),
    }
    assert_eq!(builder.parse_str("\\p{Emoji_Flag_Sequence}").unwrap().tree, flags);

    let tags = builder.parse_str("\\p{RGI_Emoji_Tag_Sequence}").unwrap().tree;
    assert_eq!(tags.min_match(), 14);
    assert_eq!(tags.max_match(), 14);

    let zwj = builder.parse_str("\\p{RGI_Emoji_ZWJ_Sequence}").unwrap().tree;
    match &zwj {
        RegExpTree::Disjunction(alternatives) => assert!(alternatives.len() > 1000),
        tree => panic!("unexpected tree {}", tree),
    }
    assert!(zwj.min_match() >= 3);

    for pattern in ["\\P{RGI_Emoji_ZWJ_Sequence}", "\\p{rgi_emoji_flag_sequence}"] {
        let err = builder.parse_str(pattern).unwrap_err();
        assert_eq!(err.kind(), &ParseError::InvalidPropertyName, "{}", pattern);
    }
    let err = builder.parse_str("[\\p{RGI_Emoji_Tag_Sequence}]").unwrap_err();
    assert_eq!(err.kind(), &ParseError::InvalidClassPropertyName);
    // Outside Unicode mode \p is an identity escape.
    assert!(ParserBuilder::new().parse_str("\\p{RGI_Emoji_Flag_Sequence}").is_ok());
}

/// Puts letters where the emoji modifier properties would be, so that case
/// folding shows up in the tree.
struct LetterModifiers;

impl PropertyResolver for LetterModifiers {
    fn resolve(&self, name: &str, value: &str) -> Option<Vec<WideCharRange>> {
        match (name, value) {
            ("Emoji_Modifier_Base", "") => Some(vec![WideCharRange::singleton('a' as u32)]),
            ("Emoji_Modifier", "") => Some(vec![WideCharRange::singleton('b' as u32)]),
            _ => None,
        }
    }
}

#[test]
fn modifier_sequence_is_not_case_folded() {
    let pattern = units("\\p{Emoji_Modifier_Sequence}");
    let mut folding = unicode();
    folding.case_insensitive(true);
    let folded = folding
        .parse_with_properties(&pattern, &LetterModifiers)
        .unwrap();
    let exact = unicode()
        .parse_with_properties(&pattern, &LetterModifiers)
        .unwrap();
    assert_eq!(folded.tree, exact.tree);

    let base = units("\\p{Emoji_Modifier_Base}");
    let folded_base = folding.parse_with_properties(&base, &LetterModifiers).unwrap();
    let exact_base = unicode().parse_with_properties(&base, &LetterModifiers).unwrap();
    assert_ne!(folded_base.tree, exact_base.tree);
}

#[cfg_attr(feature = "track_caller", track_caller)]
fn assert_parse_error(builder: &ParserBuilder, pattern: &str, expected_message: &str) {
    let result = builder.parse_str(pattern);
    assert!(
        result.is_err(),
        "Expected parse error, but was: {:?}",
        result
    );
    assert_eq!(result.err().unwrap().to_string(), expected_message);
}
