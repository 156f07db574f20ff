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


//! A simple test app for exercising and debugging the pattern parser.

use ecma_regex_parser::*;
use std::env;

fn main() {
    let mut args = env::args().skip(1);
    if let Some(cmd) = args.next() {
        let re = args.next().expect("expected regexp argument");
        let flags = args.next().unwrap_or_default();
        let mut builder = ParserBuilder::new();
        builder
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_all(flags.contains('s'))
            .unicode(flags.contains('u'))
            .global(flags.contains('g'))
            .sticky(flags.contains('y'));
        if cmd == "parse" {
            match builder.parse_str(&re) {
                Ok(parsed) => println!("{:#?}", parsed),
                Err(e) => println!("{}", e),
            }
        } else if cmd == "tree" {
            match builder.parse_str(&re) {
                Ok(parsed) => show_parsed(&parsed),
                Err(e) => println!("{}", e),
            }
        } else if cmd == "match-only" {
            builder.match_only(true);
            match builder.parse_str(&re) {
                Ok(parsed) => show_parsed(&parsed),
                Err(e) => println!("{}", e),
            }
        } else {
            println!("commands: parse|tree|match-only <expr> [flags]");
        }
    }
}

fn show_parsed(parsed: &ParsedPattern) {
    println!("{}", parsed.tree);
    println!("captures: {}", parsed.capture_count);
    for (name, index) in &parsed.named_captures {
        println!("  {} => {}", name, index);
    }
    let backrefs: Vec<_> = parsed.backrefs.iter().collect();
    println!("backrefs: {:?}", backrefs);
    println!("simple: {}", parsed.simple);
    println!("anchored: {}", parsed.contains_anchor);
    println!(
        "match length: {}..{}",
        parsed.tree.min_match(),
        parsed.tree.max_match()
    );
}
