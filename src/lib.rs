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

//! A parser for ECMAScript regular expression patterns.
//!
//! The parser reads a pattern as UTF-16 code units and produces a
//! [`RegExpTree`]: the abstract syntax tree a regex compiler consumes. It
//! validates the syntax, builds canonical-ready character ranges, splits
//! supplementary characters into surrogate-aware alternatives in Unicode
//! mode, and resolves named back-references, including references that
//! appear before the group they name.
//!
//! # Example
//!
//! ```rust
//! use ecma_regex_parser::{ParserBuilder, RegExpTree};
//!
//! let parsed = ParserBuilder::new().parse_str("(?<x>a)\\k<x>+").unwrap();
//! assert_eq!(parsed.capture_count, 1);
//! assert_eq!(parsed.capture_index("x"), Some(1));
//! assert_eq!(parsed.tree.to_string(), "(: (^ 'a') (# 1 - g (<- 1)))");
//!
//! let err = RegExpTree::parse("a)").unwrap_err();
//! assert_eq!(err.to_string(), "Parsing error at position 1: Unmatched ')'");
//! ```
//!
//! # Syntax
//!
//! Everything in the ECMAScript pattern grammar, including the Annex B
//! extensions that apply outside Unicode mode (octal escapes, identity
//! escapes of any character, literal braces, quantifiable lookaheads):
//!
//! ```text
//! .             any code unit except a line terminator (any at all with dot_all)
//! [xyz] [^xyz]  character class, with ranges and class escapes
//! \d \s \w      digit, whitespace, word character (and the negated \D \S \W)
//! \p{Lu}        Unicode property (Unicode mode only), \P{..} negated
//! x* x+ x?      repetition, greedy; add ? for non-greedy
//! x{n} x{n,} x{n,m}
//! (x)           numbered capture group
//! (?<name>x)    named capture group
//! (?:x)         non-capturing group
//! (?=x) (?!x)   lookahead
//! (?<=x) (?<!x) lookbehind
//! \1 \k<name>   back-references
//! ^ $ \b \B     anchors and word boundaries
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
#[macro_use]
extern crate matches;
#[cfg(test)]
#[macro_use]
extern crate quickcheck;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::min;
use core::fmt;

use bit_set::BitSet;

mod builder;
mod emoji;
mod error;
mod parse;
mod parse_flags;
pub mod ranges;
pub mod unicode;

pub use crate::error::{Error, ParseError, ParseErrorPosition, Result};
pub use crate::ranges::{CharacterRange, WideCharRange};
pub use crate::unicode::{PropertyResolver, UnicodeTables};

use crate::parse_flags::*;

/// The maximum repetition count; also the `max` of unbounded quantifiers.
pub const INFINITY: u32 = 0x7FFF_FFFF;

/// The maximum number of capture groups in one pattern.
pub const MAX_CAPTURES: usize = 1 << 16;

/// The maximum number of groups open at once.
pub const MAX_NESTING: usize = 256;

/// A node of the pattern syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegExpTree {
    /// Matches the empty string
    Empty,
    /// A run of literal code units
    Atom(Vec<u16>),
    /// Adjacent atoms and classes, matched in sequence
    Text(Vec<TextElement>),
    /// A single code unit from a set
    CharacterClass(CharacterClass),
    /// Alternatives, tried in order
    Disjunction(Vec<RegExpTree>),
    /// Terms matched in sequence
    Alternative(Vec<RegExpTree>),
    /// A zero-width assertion
    Assertion(AssertionType),
    /// Repetition of `body`; `max` is [`INFINITY`] when unbounded
    Quantifier {
        /// The repeated node
        body: Box<RegExpTree>,
        /// Minimum number of repetitions
        min: u32,
        /// Maximum number of repetitions
        max: u32,
        /// Whether to prefer more repetitions
        greedy: bool,
    },
    /// A capture group
    Capture {
        /// 1-based group number
        index: usize,
        /// The group name, for `(?<name>...)`
        name: Option<String>,
        /// The captured node
        body: Box<RegExpTree>,
    },
    /// A back-reference to a capture group
    BackReference {
        /// The referenced group; `None` only while a named reference is
        /// still unresolved during parsing
        index: Option<usize>,
        /// The name used by `\k<name>`
        name: Option<String>,
    },
    /// A lookahead or lookbehind
    Lookaround {
        /// The asserted node
        body: Box<RegExpTree>,
        /// Whether the assertion is positive
        positive: bool,
        /// Which way the body is matched
        direction: LookaroundType,
        /// Number of capture groups inside the body
        capture_count: usize,
        /// Number of capture groups opened before the lookaround; groups in
        /// the body are numbered from `capture_from + 1`
        capture_from: usize,
    },
}

/// An element of [`RegExpTree::Text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextElement {
    /// A run of literal code units
    Atom(Vec<u16>),
    /// A single code unit from a set
    CharClass(CharacterClass),
}

impl TextElement {
    /// Number of code units the element matches.
    pub fn length(&self) -> u32 {
        match self {
            TextElement::Atom(units) => saturating_len(units.len()),
            TextElement::CharClass(_) => 1,
        }
    }
}

/// A set of code units. Ranges are not necessarily canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClass {
    /// The code units in (or, when negated, not in) the class
    pub ranges: Vec<CharacterRange>,
    /// Whether the class matches everything outside `ranges`
    pub negated: bool,
}

impl CharacterClass {
    /// Create a class.
    pub fn new(ranges: Vec<CharacterRange>, negated: bool) -> CharacterClass {
        CharacterClass { ranges, negated }
    }
}

/// Type of zero-width assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertionType {
    /// `^` with the multi-line flag
    StartOfLine,
    /// `^`
    StartOfInput,
    /// `$` with the multi-line flag
    EndOfLine,
    /// `$`
    EndOfInput,
    /// `\b`
    Boundary,
    /// `\B`
    NonBoundary,
    /// Not directly after a lead surrogate
    NotAfterLeadSurrogate,
    /// Not between the two halves of a surrogate pair
    NotInSurrogatePair,
}

/// Direction of a lookaround.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookaroundType {
    /// `(?=...)` and `(?!...)`
    Lookahead,
    /// `(?<=...)` and `(?<!...)`
    Lookbehind,
}

fn saturating_len(len: usize) -> u32 {
    min(len, INFINITY as usize) as u32
}

fn saturating_add(a: u32, b: u32) -> u32 {
    min(u64::from(a) + u64::from(b), u64::from(INFINITY)) as u32
}

fn saturating_mul(a: u32, b: u32) -> u32 {
    min(u64::from(a) * u64::from(b), u64::from(INFINITY)) as u32
}

impl RegExpTree {
    /// Parse a pattern with default options.
    pub fn parse(re: &str) -> Result<ParsedPattern> {
        ParserBuilder::new().parse_str(re)
    }

    /// Whether this is the [`RegExpTree::Empty`] node.
    pub fn is_empty(&self) -> bool {
        matches!(self, RegExpTree::Empty)
    }

    /// Whether this node can be merged into a [`RegExpTree::Text`].
    pub fn is_text_element(&self) -> bool {
        matches!(
            self,
            RegExpTree::Atom(_) | RegExpTree::CharacterClass(_) | RegExpTree::Text(_)
        )
    }

    /// Move this text node's elements onto the end of `text`.
    pub fn append_to_text(self, text: &mut Vec<TextElement>) {
        match self {
            RegExpTree::Atom(units) => text.push(TextElement::Atom(units)),
            RegExpTree::CharacterClass(class) => text.push(TextElement::CharClass(class)),
            RegExpTree::Text(elements) => text.extend(elements),
            _ => unreachable!("not a text element"),
        }
    }

    /// Fewest code units a match of this node can consume.
    pub fn min_match(&self) -> u32 {
        match self {
            RegExpTree::Empty
            | RegExpTree::Assertion(_)
            | RegExpTree::BackReference { .. }
            | RegExpTree::Lookaround { .. } => 0,
            RegExpTree::Atom(units) => saturating_len(units.len()),
            RegExpTree::Text(elements) => elements
                .iter()
                .fold(0, |acc, element| saturating_add(acc, element.length())),
            RegExpTree::CharacterClass(_) => 1,
            RegExpTree::Disjunction(alternatives) => alternatives
                .iter()
                .map(RegExpTree::min_match)
                .min()
                .unwrap_or(0),
            RegExpTree::Alternative(terms) => terms
                .iter()
                .fold(0, |acc, term| saturating_add(acc, term.min_match())),
            RegExpTree::Quantifier { body, min, .. } => saturating_mul(*min, body.min_match()),
            RegExpTree::Capture { body, .. } => body.min_match(),
        }
    }

    /// Most code units a match of this node can consume, saturating at
    /// [`INFINITY`].
    pub fn max_match(&self) -> u32 {
        match self {
            RegExpTree::Empty | RegExpTree::Assertion(_) | RegExpTree::Lookaround { .. } => 0,
            RegExpTree::BackReference { .. } => INFINITY,
            RegExpTree::Atom(units) => saturating_len(units.len()),
            RegExpTree::Text(elements) => elements
                .iter()
                .fold(0, |acc, element| saturating_add(acc, element.length())),
            RegExpTree::CharacterClass(_) => 1,
            RegExpTree::Disjunction(alternatives) => alternatives
                .iter()
                .map(RegExpTree::max_match)
                .max()
                .unwrap_or(0),
            RegExpTree::Alternative(terms) => terms
                .iter()
                .fold(0, |acc, term| saturating_add(acc, term.max_match())),
            RegExpTree::Quantifier { body, max, .. } => saturating_mul(*max, body.max_match()),
            RegExpTree::Capture { body, .. } => body.max_match(),
        }
    }
}

fn write_code_unit(f: &mut fmt::Formatter, c: u16) -> fmt::Result {
    if (0x20..0x7F).contains(&c) {
        write!(f, "{}", c as u8 as char)
    } else {
        write!(f, "\\u{:04x}", c)
    }
}

fn write_atom(f: &mut fmt::Formatter, units: &[u16]) -> fmt::Result {
    f.write_str("'")?;
    for &c in units {
        write_code_unit(f, c)?;
    }
    f.write_str("'")
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negated {
            f.write_str("^")?;
        }
        f.write_str("[")?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write_code_unit(f, range.from())?;
            if !range.is_singleton() {
                f.write_str("-")?;
                write_code_unit(f, range.to())?;
            }
        }
        f.write_str("]")
    }
}

impl fmt::Display for TextElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TextElement::Atom(units) => write_atom(f, units),
            TextElement::CharClass(class) => fmt::Display::fmt(class, f),
        }
    }
}

/// An s-expression dump of the tree.
///
/// `%` is the empty node, `'abc'` an atom, `[a-z]`/`^[a-z]` a class,
/// `(! ...)` text, `(: ...)` an alternative, `(| ...)` a disjunction,
/// `(# min max g|n body)` a quantifier (`-` for an unbounded max),
/// `(^ body)` a capture, `(-> +|- body)`/`(<- +|- body)` lookarounds,
/// `(<- n)` a back-reference and `@...` assertions.
impl fmt::Display for RegExpTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegExpTree::Empty => f.write_str("%"),
            RegExpTree::Atom(units) => write_atom(f, units),
            RegExpTree::Text(elements) if elements.len() == 1 => fmt::Display::fmt(&elements[0], f),
            RegExpTree::Text(elements) => {
                f.write_str("(!")?;
                for element in elements {
                    write!(f, " {}", element)?;
                }
                f.write_str(")")
            }
            RegExpTree::CharacterClass(class) => fmt::Display::fmt(class, f),
            RegExpTree::Disjunction(children) | RegExpTree::Alternative(children) => {
                let tag = if let RegExpTree::Disjunction(_) = self { "(|" } else { "(:" };
                f.write_str(tag)?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                f.write_str(")")
            }
            RegExpTree::Assertion(assertion) => f.write_str(match assertion {
                AssertionType::StartOfLine => "@^l",
                AssertionType::StartOfInput => "@^i",
                AssertionType::EndOfLine => "@$l",
                AssertionType::EndOfInput => "@$i",
                AssertionType::Boundary => "@b",
                AssertionType::NonBoundary => "@B",
                AssertionType::NotAfterLeadSurrogate => "@!ls",
                AssertionType::NotInSurrogatePair => "@!sp",
            }),
            RegExpTree::Quantifier {
                body,
                min,
                max,
                greedy,
            } => {
                write!(f, "(# {} ", min)?;
                if *max == INFINITY {
                    f.write_str("-")?;
                } else {
                    write!(f, "{}", max)?;
                }
                write!(f, " {} {})", if *greedy { "g" } else { "n" }, body)
            }
            RegExpTree::Capture { body, .. } => write!(f, "(^ {})", body),
            RegExpTree::BackReference { index, name } => match (index, name) {
                (Some(index), _) => write!(f, "(<- {})", index),
                (None, Some(name)) => write!(f, "(<- <{}>)", name),
                (None, None) => f.write_str("(<- ?)"),
            },
            RegExpTree::Lookaround {
                body,
                positive,
                direction,
                ..
            } => {
                let arrow = match direction {
                    LookaroundType::Lookahead => "->",
                    LookaroundType::Lookbehind => "<-",
                };
                write!(f, "({} {} {})", arrow, if *positive { "+" } else { "-" }, body)
            }
        }
    }
}

/// The result of a successful parse.
#[derive(Debug, Clone)]
pub struct ParsedPattern {
    /// The root of the syntax tree
    pub tree: RegExpTree,
    /// Number of capture groups in the pattern
    pub capture_count: usize,
    /// Whether the whole pattern is one literal atom with no escapes
    pub simple: bool,
    /// Whether the pattern contains `^` outside multi-line mode
    pub contains_anchor: bool,
    /// Named groups and their indices, in the order the groups close
    pub named_captures: Vec<(String, usize)>,
    /// Indices of the groups that are back-referenced
    pub backrefs: BitSet,
}

impl ParsedPattern {
    /// The index of the group called `name`.
    pub fn capture_index(&self, name: &str) -> Option<usize> {
        self.named_captures
            .iter()
            .find(|(capture_name, _)| capture_name == name)
            .map(|&(_, index)| index)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct PatternOptions {
    case_insensitive: bool,
    multi_line: bool,
    dot_all: bool,
    unicode: bool,
    global: bool,
    sticky: bool,
    match_only: bool,
}

impl PatternOptions {
    fn get_flag_value(flag_value: bool, enum_value: u32) -> u32 {
        if flag_value {
            enum_value
        } else {
            0
        }
    }

    fn compute_flags(&self) -> u32 {
        let insensitive = Self::get_flag_value(self.case_insensitive, FLAG_CASEI);
        let multiline = Self::get_flag_value(self.multi_line, FLAG_MULTI);
        let dot_all = Self::get_flag_value(self.dot_all, FLAG_DOTNL);
        let unicode = Self::get_flag_value(self.unicode, FLAG_UNICODE);
        let global = Self::get_flag_value(self.global, FLAG_GLOBAL);
        let sticky = Self::get_flag_value(self.sticky, FLAG_STICKY);
        let match_only = Self::get_flag_value(self.match_only, FLAG_MATCH_ONLY);

        insensitive | multiline | dot_all | unicode | global | sticky | match_only
    }
}

/// A builder for parsing patterns with the flags of a regular expression
/// literal.
///
/// ```rust
/// use ecma_regex_parser::ParserBuilder;
///
/// let parsed = ParserBuilder::new().unicode(true).parse_str("\\u{1F600}").unwrap();
/// assert_eq!(parsed.tree.to_string(), "'\\ud83d\\ude00'");
/// assert!(ParserBuilder::new().unicode(true).parse_str("\\-").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParserBuilder(PatternOptions);

impl ParserBuilder {
    /// Create a builder with every flag off.
    pub fn new() -> Self {
        ParserBuilder::default()
    }

    /// Match letters case-insensitively (`i`).
    pub fn case_insensitive(&mut self, yes: bool) -> &mut Self {
        self.0.case_insensitive = yes;
        self
    }

    /// Make `^` and `$` match at line terminators (`m`).
    pub fn multi_line(&mut self, yes: bool) -> &mut Self {
        self.0.multi_line = yes;
        self
    }

    /// Make `.` match line terminators (`s`).
    pub fn dot_all(&mut self, yes: bool) -> &mut Self {
        self.0.dot_all = yes;
        self
    }

    /// Parse in Unicode mode (`u`): stricter syntax, code point semantics
    /// and `\u{...}`/`\p{...}` escapes.
    pub fn unicode(&mut self, yes: bool) -> &mut Self {
        self.0.unicode = yes;
        self
    }

    /// Global matching (`g`). Only affects match-only trimming.
    pub fn global(&mut self, yes: bool) -> &mut Self {
        self.0.global = yes;
        self
    }

    /// Sticky matching (`y`). Only affects match-only trimming.
    pub fn sticky(&mut self, yes: bool) -> &mut Self {
        self.0.sticky = yes;
        self
    }

    /// The pattern will only be tested for a match, so leading and trailing
    /// `.*` that cannot change the outcome are dropped before parsing.
    pub fn match_only(&mut self, yes: bool) -> &mut Self {
        self.0.match_only = yes;
        self
    }

    /// Parse UTF-16 pattern source.
    pub fn parse(&self, pattern: &[u16]) -> Result<ParsedPattern> {
        self.parse_with_properties(pattern, &UnicodeTables)
    }

    /// Parse UTF-16 pattern source, resolving `\p{...}` with `properties`.
    pub fn parse_with_properties(
        &self,
        pattern: &[u16],
        properties: &dyn PropertyResolver,
    ) -> Result<ParsedPattern> {
        parse::parse_with_flags(pattern, self.0.compute_flags(), properties)
    }

    /// Parse pattern source given as a Rust string.
    pub fn parse_str(&self, pattern: &str) -> Result<ParsedPattern> {
        let units: Vec<u16> = pattern.encode_utf16().collect();
        self.parse(&units)
    }

    /// Check the syntax of a pattern without keeping the tree.
    pub fn validate(&self, pattern: &[u16]) -> Result<()> {
        self.parse(pattern).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::ToString;
    use alloc::vec;

    use crate::ranges::CharacterRange;
    use crate::{AssertionType, CharacterClass, ParserBuilder, RegExpTree, TextElement, INFINITY};

    fn p(s: &str) -> RegExpTree {
        RegExpTree::parse(s).unwrap().tree
    }

    fn atom(s: &str) -> RegExpTree {
        RegExpTree::Atom(s.encode_utf16().collect())
    }

    #[test]
    fn display() {
        assert_eq!(p("").to_string(), "%");
        assert_eq!(p("abc").to_string(), "'abc'");
        assert_eq!(p("ab+").to_string(), "(: 'a' (# 1 - g 'b'))");
        assert_eq!(p("a|b").to_string(), "(| 'a' 'b')");
        assert_eq!(p("a{2,3}?").to_string(), "(# 2 3 n 'a')");
        assert_eq!(p("(a)\\1").to_string(), "(: (^ 'a') (<- 1))");
        assert_eq!(p("(?=a)").to_string(), "(-> + 'a')");
        assert_eq!(p("(?<!a)").to_string(), "(<- - 'a')");
        assert_eq!(p("^$").to_string(), "(: @^i @$i)");
        assert_eq!(p("[a-c]").to_string(), "[a-c]");
        assert_eq!(p("[^ax]").to_string(), "^[a x]");
        assert_eq!(p("[a]b").to_string(), "(! [a] 'b')");
        assert_eq!(p("\u{1}").to_string(), "'\\u0001'");
    }

    #[test]
    fn match_lengths() {
        assert_eq!(p("abc").min_match(), 3);
        assert_eq!(p("a|bc").min_match(), 1);
        assert_eq!(p("a|bc").max_match(), 2);
        assert_eq!(p("a{2,5}").min_match(), 2);
        assert_eq!(p("a{2,5}").max_match(), 5);
        assert_eq!(p("(ab)*").max_match(), INFINITY);
        assert_eq!(p("(a)\\1").max_match(), INFINITY);
        assert_eq!(p("(?=abc)").max_match(), 0);
        assert_eq!(p("(?:x{1000000}){1000000}").max_match(), INFINITY);
    }

    #[test]
    fn text_elements() {
        let mut text = vec![];
        atom("ab").append_to_text(&mut text);
        RegExpTree::CharacterClass(CharacterClass::new(vec![CharacterRange::singleton(0x63)], false))
            .append_to_text(&mut text);
        assert_eq!(text.len(), 2);
        assert_eq!(text[0].length(), 2);
        assert_eq!(text[1].length(), 1);
        assert!(atom("a").is_text_element());
        assert!(!RegExpTree::Assertion(AssertionType::Boundary).is_text_element());
        assert!(!RegExpTree::Quantifier {
            body: Box::new(atom("a")),
            min: 0,
            max: 1,
            greedy: true
        }
        .is_text_element());
        assert_matches!(text[0], TextElement::Atom(ref units) if units.len() == 2);
    }

    #[test]
    fn flags() {
        let mut builder = ParserBuilder::new();
        assert_eq!(builder.0.compute_flags(), 0);
        builder.case_insensitive(true).unicode(true);
        assert_eq!(builder.0.compute_flags(), super::FLAG_CASEI | super::FLAG_UNICODE);
        builder.multi_line(true);
        let parsed = builder.parse_str("^a").unwrap();
        assert!(!parsed.contains_anchor);
        assert!(ParserBuilder::new().validate(&[0x28]).is_err());
        assert!(ParserBuilder::new().validate(&[0x61]).is_ok());
    }
}
