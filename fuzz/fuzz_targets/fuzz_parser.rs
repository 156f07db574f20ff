#![no_main]

#[macro_use]
extern crate libfuzzer_sys;
extern crate ecma_regex_parser;

use ecma_regex_parser::ParserBuilder;

fuzz_target!(|data: &[u8]| {
    // The first byte picks the flags, the rest is UTF-16 source.
    if let Some((&flags, rest)) = data.split_first() {
        let pattern: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        let _ = ParserBuilder::new()
            .case_insensitive(flags & 1 != 0)
            .multi_line(flags & 2 != 0)
            .dot_all(flags & 4 != 0)
            .unicode(flags & 8 != 0)
            .match_only(flags & 16 != 0)
            .parse(&pattern);
    }
});
