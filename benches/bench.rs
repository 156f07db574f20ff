// Copyright 2016 The Fancy Regex Authors.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.


#[macro_use]
extern crate criterion;

use criterion::Criterion;

use ecma_regex_parser::{ParserBuilder, RegExpTree, MAX_NESTING};

fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

fn parse_lifetime_re(c: &mut Criterion) {
    c.bench_function("parse_lifetime_re", |b| {
        b.iter(|| RegExpTree::parse("\\'[a-zA-Z_][a-zA-Z0-9_]*(?!\\')\\b").unwrap())
    });
}

fn parse_literal_re(c: &mut Criterion) {
    let re = units("^\\\\([!-/:-@\\[-`\\{-~aftnrv]|[0-7]{1,3}|x[0-9a-fA-F]{2}|x\\{[0-9a-fA-F]{1,6}\\})");
    let builder = ParserBuilder::new();
    c.bench_function("parse_literal_re", |b| b.iter(|| builder.parse(&re).unwrap()));
}

fn parse_unicode_properties(c: &mut Criterion) {
    let re = units("^\\p{L}|\\p{N}|\\s|.|\\d");
    let mut builder = ParserBuilder::new();
    builder.unicode(true);
    c.bench_function("parse_unicode_properties", |b| {
        b.iter(|| builder.parse(&re).unwrap())
    });
}

fn parse_unicode_ignore_case(c: &mut Criterion) {
    let re = units("[\\u{10400}-\\u{1044F}a-z\\w]+");
    let mut builder = ParserBuilder::new();
    builder.unicode(true).case_insensitive(true);
    c.bench_function("parse_unicode_ignore_case", |b| {
        b.iter(|| builder.parse(&re).unwrap())
    });
}

fn parse_named_groups(c: &mut Criterion) {
    let re = units("\\k<day>(?<year>\\d{4})-(?<month>\\d{2})-(?<day>\\d{2})\\k<year>");
    let builder = ParserBuilder::new();
    c.bench_function("parse_named_groups", |b| b.iter(|| builder.parse(&re).unwrap()));
}

fn parse_deep_nesting(c: &mut Criterion) {
    let depth = MAX_NESTING;
    let re = units(&format!("{}a{}", "(?:".repeat(depth), ")*".repeat(depth)));
    let builder = ParserBuilder::new();
    c.bench_function("parse_deep_nesting", |b| b.iter(|| builder.parse(&re).unwrap()));
}

criterion_group!(
    benches,
    parse_lifetime_re,
    parse_literal_re,
    parse_unicode_properties,
    parse_unicode_ignore_case,
    parse_named_groups,
    parse_deep_nesting,
);
criterion_main!(benches);
