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

//! The pattern parser.
//!
//! One left-to-right pass over the UTF-16 source validates the pattern
//! and builds the tree. Open groups live on an explicit stack of
//! [`ParserState`]s rather than the call stack; at most [`MAX_NESTING`]
//! of them may be open at once. Named back-references may precede the
//! group they name; they are resolved once the whole pattern has been read.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::iter;
use core::mem;

use bit_set::BitSet;

use crate::builder::{
    lone_surrogate_atom, surrogate_pair_atom, unicode_back_reference_atom,
    unicode_character_class_escape_atom, unicode_dot_all_atom, unicode_everything_atom,
    unicode_ranges_atom, RegExpBuilder,
};
use crate::emoji::emoji_sequences;
use crate::parse_flags::*;
use crate::ranges::{
    add_class_escape, add_class_escape_unicode, add_dot_ranges, negate_unicode_ranges,
    CharacterRange, ClassEscape, CodeRange, UnicodeClassRanges, WideCharRange,
};
use crate::unicode::{
    case_fold_code_points, is_lead_surrogate, is_trail_surrogate, utf16_decode,
    IdentifierTables, PropertyResolver, NON_BMP_MAX,
};
use crate::{
    AssertionType, CharacterClass, Error, LookaroundType, ParseError, ParsedPattern, RegExpTree,
    Result, INFINITY, MAX_CAPTURES, MAX_NESTING,
};

/// Value of the current character once the input is exhausted. Lies
/// outside the code point range.
const END_MARKER: u32 = 1 << 21;

/// The current character as an ASCII byte, or 0 for anything else.
fn byte_of(c: u32) -> u8 {
    if c < 0x80 {
        c as u8
    } else {
        0
    }
}

fn is_decimal_digit(c: u32) -> bool {
    (u32::from(b'0')..=u32::from(b'9')).contains(&c)
}

fn is_octal_digit(c: u32) -> bool {
    (u32::from(b'0')..=u32::from(b'7')).contains(&c)
}

fn hex_value(c: u32) -> Option<u32> {
    char::from_u32(c)?.to_digit(16)
}

fn is_syntax_character(c: u32) -> bool {
    matches!(
        byte_of(c),
        b'^' | b'$' | b'\\' | b'.' | b'*' | b'+' | b'?' | b'(' | b')' | b'[' | b']' | b'{'
            | b'}' | b'|' | b'/'
    )
}

fn is_meta_character(c: u16) -> bool {
    c != u16::from(b'/') && is_syntax_character(u32::from(c))
}

fn is_property_value_character(c: u32) -> bool {
    c < 0x80 && ((c as u8).is_ascii_alphanumeric() || c == u32::from(b'_'))
}

/// Drop a leading `.*` (unless lazy) and, for patterns without other
/// meta characters that are not global or sticky, a trailing `.*`. A
/// match-only test cannot tell the difference.
fn trim_match_only(pattern: &[u16], flags: u32) -> &[u16] {
    let dot = u16::from(b'.');
    let star = u16::from(b'*');
    let mut chars = pattern;
    if chars.len() >= 3 && chars[0] == dot && chars[1] == star && chars[2] != u16::from(b'?') {
        chars = &chars[2..];
    }
    let len = chars.len();
    if len >= 3
        && chars[len - 2] == dot
        && chars[len - 1] == star
        && flags & (FLAG_GLOBAL | FLAG_STICKY) == 0
        && !chars[..len - 2].iter().any(|&c| is_meta_character(c))
    {
        chars = &chars[..len - 2];
    }
    chars
}

pub(crate) fn parse_with_flags(
    pattern: &[u16],
    flags: u32,
    properties: &dyn PropertyResolver,
) -> Result<ParsedPattern> {
    let source = if flags & FLAG_MATCH_ONLY != 0 {
        trim_match_only(pattern, flags)
    } else {
        pattern
    };
    Parser::new(source, flags, properties).parse_pattern()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SubexpressionType {
    Initial,
    Capture,
    Grouping,
    PositiveLookaround,
    NegativeLookaround,
}

/// An open group: its builder and how to close it.
struct ParserState {
    builder: RegExpBuilder,
    group_type: SubexpressionType,
    lookaround_type: LookaroundType,
    /// For captures, the group's own index; otherwise the number of groups
    /// opened before this one.
    capture_index: usize,
    capture_name: Option<String>,
}

impl ParserState {
    fn new(
        group_type: SubexpressionType,
        lookaround_type: LookaroundType,
        capture_index: usize,
        capture_name: Option<String>,
    ) -> ParserState {
        ParserState {
            builder: RegExpBuilder::new(),
            group_type,
            lookaround_type,
            capture_index,
            capture_name,
        }
    }

    fn is_lookaround(&self) -> bool {
        matches!(
            self.group_type,
            SubexpressionType::PositiveLookaround | SubexpressionType::NegativeLookaround
        )
    }
}

/// Innermost first.
fn open_states<'s>(
    state: &'s ParserState,
    enclosing: &'s [ParserState],
) -> impl Iterator<Item = &'s ParserState> {
    iter::once(state).chain(enclosing.iter().rev())
}

/// Whether capture group `index` is still open.
fn is_inside_capture_group(state: &ParserState, enclosing: &[ParserState], index: usize) -> bool {
    for s in open_states(state, enclosing) {
        if s.group_type != SubexpressionType::Capture {
            continue;
        }
        if index == s.capture_index {
            return true;
        }
        if index > s.capture_index {
            return false;
        }
    }
    false
}

/// Whether a capture group called `name` is still open.
fn is_inside_named_capture_group(state: &ParserState, enclosing: &[ParserState], name: &str) -> bool {
    open_states(state, enclosing).any(|s| {
        s.group_type == SubexpressionType::Capture && s.capture_name.as_deref() == Some(name)
    })
}

/// What a class atom turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClassAtom {
    /// A single code point.
    Char(u32),
    /// A class escape or property, already added to the class.
    Class,
}

struct Parser<'a> {
    input: &'a [u16],
    flags: u32,
    properties: &'a dyn PropertyResolver,
    current: u32,
    next_pos: usize,
    has_more: bool,
    captures_started: usize,
    /// Total number of groups, valid once `is_scanned_for_captures`.
    capture_count: usize,
    is_scanned_for_captures: bool,
    has_named_captures: bool,
    contains_anchor: bool,
    named_captures: Vec<(String, usize)>,
    named_back_references: Vec<String>,
    backrefs: BitSet,
    identifiers: IdentifierTables,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u16], flags: u32, properties: &'a dyn PropertyResolver) -> Parser<'a> {
        let mut parser = Parser {
            input,
            flags,
            properties,
            current: END_MARKER,
            next_pos: 0,
            has_more: true,
            captures_started: 0,
            capture_count: 0,
            is_scanned_for_captures: false,
            has_named_captures: false,
            contains_anchor: false,
            named_captures: Vec::new(),
            named_back_references: Vec::new(),
            backrefs: BitSet::new(),
            identifiers: IdentifierTables::default(),
        };
        parser.advance();
        parser
    }

    fn flag(&self, flag: u32) -> bool {
        self.flags & flag != 0
    }

    fn unicode(&self) -> bool {
        self.flag(FLAG_UNICODE)
    }

    fn ignore_case(&self) -> bool {
        self.flag(FLAG_CASEI)
    }

    fn multiline(&self) -> bool {
        self.flag(FLAG_MULTI)
    }

    fn dot_all(&self) -> bool {
        self.flag(FLAG_DOTNL)
    }

    fn current(&self) -> u32 {
        self.current
    }

    fn has_more(&self) -> bool {
        self.has_more
    }

    fn has_next(&self) -> bool {
        self.next_pos < self.input.len()
    }

    fn next(&self) -> u32 {
        if self.has_next() {
            u32::from(self.input[self.next_pos])
        } else {
            END_MARKER
        }
    }

    /// Offset of the current character; the input length at the end.
    fn position(&self) -> usize {
        self.next_pos - 1
    }

    fn advance(&mut self) {
        if self.next_pos < self.input.len() {
            self.current = u32::from(self.input[self.next_pos]);
            self.next_pos += 1;
        } else {
            self.current = END_MARKER;
            self.next_pos = self.input.len() + 1;
            self.has_more = false;
        }
    }

    fn advance_by(&mut self, dist: usize) {
        self.next_pos += dist - 1;
        self.advance();
    }

    fn reset(&mut self, pos: usize) {
        self.next_pos = pos;
        self.has_more = pos < self.input.len();
        self.advance();
    }

    fn at(&self, c: u8) -> bool {
        self.current == u32::from(c)
    }

    fn error(&self, kind: ParseError) -> Error {
        Error::ParseError(self.position(), kind)
    }

    fn parse_pattern(mut self) -> Result<ParsedPattern> {
        let mut tree = self.parse_disjunction()?;
        self.patch_named_back_references(&mut tree)?;
        let simple = matches!(&tree, RegExpTree::Atom(units) if units.len() == self.input.len());
        Ok(ParsedPattern {
            tree,
            capture_count: self.captures_started,
            simple,
            contains_anchor: self.contains_anchor,
            named_captures: self.named_captures,
            backrefs: self.backrefs,
        })
    }

    /// Disjunction ::
    ///   Alternative
    ///   Alternative | Disjunction
    /// Alternative ::
    ///   [empty]
    ///   Term Alternative
    /// Term ::
    ///   Assertion
    ///   Atom
    ///   Atom Quantifier
    fn parse_disjunction(&mut self) -> Result<RegExpTree> {
        let mut state = ParserState::new(
            SubexpressionType::Initial,
            LookaroundType::Lookahead,
            0,
            None,
        );
        let mut enclosing: Vec<ParserState> = Vec::new();

        loop {
            if !self.has_more() {
                if !enclosing.is_empty() {
                    return Err(self.error(ParseError::UnterminatedGroup));
                }
                return Ok(state.builder.into_regexp());
            }

            match byte_of(self.current()) {
                b')' => {
                    let Some(parent) = enclosing.pop() else {
                        return Err(self.error(ParseError::UnmatchedRightParen));
                    };
                    self.advance();
                    let closed = mem::replace(&mut state, parent);
                    let is_lookaround = closed.is_lookaround();
                    let body = self.close_group(closed)?;
                    state.builder.add_atom(body);
                    // Lookarounds are not quantifiable in Unicode mode.
                    if is_lookaround && self.unicode() {
                        continue;
                    }
                }
                b'|' => {
                    self.advance();
                    state.builder.new_alternative();
                    continue;
                }
                b'*' | b'+' | b'?' => return Err(self.error(ParseError::NothingToRepeat)),
                b'^' => {
                    self.advance();
                    if self.multiline() {
                        state.builder.add_assertion(AssertionType::StartOfLine);
                    } else {
                        state.builder.add_assertion(AssertionType::StartOfInput);
                        self.contains_anchor = true;
                    }
                    continue;
                }
                b'$' => {
                    self.advance();
                    let assertion = if self.multiline() {
                        AssertionType::EndOfLine
                    } else {
                        AssertionType::EndOfInput
                    };
                    state.builder.add_assertion(assertion);
                    continue;
                }
                b'.' => {
                    self.advance();
                    let atom = self.dot_atom();
                    state.builder.add_atom(atom);
                }
                b'(' => {
                    if enclosing.len() >= MAX_NESTING {
                        return Err(self.error(ParseError::NestingTooDeep));
                    }
                    let child = self.open_group(&state)?;
                    enclosing.push(mem::replace(&mut state, child));
                    continue;
                }
                b'[' => {
                    let atom = self.parse_character_class()?;
                    state.builder.add_atom(atom);
                }
                b'\\' => {
                    if !self.parse_atom_escape(&mut state, &enclosing)? {
                        continue;
                    }
                }
                b'{' => {
                    if self.unicode() {
                        return Err(self.error(ParseError::RawBraceInPattern));
                    }
                    let start = self.position();
                    if self.parse_interval_quantifier().is_some() {
                        self.reset(start);
                        return Err(self.error(ParseError::NothingToRepeat));
                    }
                    self.parse_literal(&mut state.builder)?;
                }
                _ => self.parse_literal(&mut state.builder)?,
            }

            let (min, max) = match byte_of(self.current()) {
                b'*' => {
                    self.advance();
                    (0, INFINITY)
                }
                b'+' => {
                    self.advance();
                    (1, INFINITY)
                }
                b'?' => {
                    self.advance();
                    (0, 1)
                }
                b'{' => match self.parse_interval_quantifier() {
                    Some((min, max)) => {
                        if max < min {
                            return Err(self.error(ParseError::NumbersOutOfOrder));
                        }
                        (min, max)
                    }
                    None => continue,
                },
                _ => continue,
            };
            let greedy = if self.at(b'?') {
                self.advance();
                false
            } else {
                true
            };
            state.builder.add_quantifier_to_atom(min, max, greedy);
        }
    }

    /// Parse the start of a group and return its state. The current
    /// character is `(`.
    fn open_group(&mut self, state: &ParserState) -> Result<ParserState> {
        let mut group_type = SubexpressionType::Capture;
        let mut lookaround_type = state.lookaround_type;
        let mut is_named_capture = false;
        self.advance();
        if self.at(b'?') {
            match byte_of(self.next()) {
                b':' => group_type = SubexpressionType::Grouping,
                b'=' => {
                    lookaround_type = LookaroundType::Lookahead;
                    group_type = SubexpressionType::PositiveLookaround;
                }
                b'!' => {
                    lookaround_type = LookaroundType::Lookahead;
                    group_type = SubexpressionType::NegativeLookaround;
                }
                b'<' => {
                    self.advance();
                    match byte_of(self.next()) {
                        b'=' => {
                            lookaround_type = LookaroundType::Lookbehind;
                            group_type = SubexpressionType::PositiveLookaround;
                        }
                        b'!' => {
                            lookaround_type = LookaroundType::Lookbehind;
                            group_type = SubexpressionType::NegativeLookaround;
                        }
                        _ => {
                            is_named_capture = true;
                            self.has_named_captures = true;
                        }
                    }
                }
                _ => return Err(self.error(ParseError::InvalidGroup)),
            }
            self.advance_by(if is_named_capture { 1 } else { 2 });
        }

        let mut capture_name = None;
        if group_type == SubexpressionType::Capture {
            if self.captures_started >= MAX_CAPTURES {
                return Err(self.error(ParseError::TooManyCaptures));
            }
            self.captures_started += 1;
            if is_named_capture {
                capture_name = Some(self.parse_capture_group_name()?);
            }
        }
        Ok(ParserState::new(
            group_type,
            lookaround_type,
            self.captures_started,
            capture_name,
        ))
    }

    /// Build the node for a group whose `)` was just consumed.
    fn close_group(&mut self, closed: ParserState) -> Result<RegExpTree> {
        let end_capture_index = self.captures_started;
        let ParserState {
            builder,
            group_type,
            lookaround_type,
            capture_index,
            capture_name,
        } = closed;
        let body = builder.into_regexp();
        match group_type {
            SubexpressionType::Capture => {
                if let Some(name) = &capture_name {
                    self.create_named_capture_at_index(name, capture_index)?;
                }
                Ok(RegExpTree::Capture {
                    index: capture_index,
                    name: capture_name,
                    body: body.into(),
                })
            }
            SubexpressionType::Grouping => Ok(body),
            SubexpressionType::PositiveLookaround | SubexpressionType::NegativeLookaround => {
                Ok(RegExpTree::Lookaround {
                    body: body.into(),
                    positive: group_type == SubexpressionType::PositiveLookaround,
                    direction: lookaround_type,
                    capture_count: end_capture_index - capture_index,
                    capture_from: capture_index,
                })
            }
            SubexpressionType::Initial => unreachable!("the initial state is never closed"),
        }
    }

    fn dot_atom(&self) -> RegExpTree {
        if self.unicode() {
            if self.dot_all() {
                unicode_dot_all_atom()
            } else {
                unicode_everything_atom()
            }
        } else {
            let mut ranges = Vec::new();
            add_dot_ranges(&mut ranges, self.dot_all());
            RegExpTree::CharacterClass(CharacterClass::new(ranges, false))
        }
    }

    /// A character with no special meaning at the top level.
    fn parse_literal(&mut self, builder: &mut RegExpBuilder) -> Result<()> {
        let c = self.current();
        if self.unicode() {
            if let Some((lead, trail)) = self.parse_raw_surrogate_pair() {
                builder.add_atom(surrogate_pair_atom(lead, trail, self.ignore_case()));
                return Ok(());
            }
            if let Some(atom) = lone_surrogate_atom(c as u16) {
                builder.add_atom(atom);
                self.advance();
                return Ok(());
            }
            match byte_of(c) {
                b']' => return Err(self.error(ParseError::RawBracketInPattern)),
                b'}' => return Err(self.error(ParseError::RawBraceInPattern)),
                _ => {}
            }
        }
        builder.add_character(c as u16);
        self.advance();
        Ok(())
    }

    /// Parse an escape outside a class. The current character is `\`.
    ///
    /// Returns whether the result may take a quantifier.
    fn parse_atom_escape(&mut self, state: &mut ParserState, enclosing: &[ParserState]) -> Result<bool> {
        if !self.has_next() {
            return Err(self.error(ParseError::EscapeAtEndOfPattern));
        }
        let next = self.next();
        match byte_of(next) {
            b'b' => {
                self.advance_by(2);
                state.builder.add_assertion(AssertionType::Boundary);
                return Ok(false);
            }
            b'B' => {
                self.advance_by(2);
                state.builder.add_assertion(AssertionType::NonBoundary);
                return Ok(false);
            }
            b'd' | b'D' | b's' | b'S' | b'w' | b'W' => {
                if let Some(escape) = ClassEscape::from_letter(next) {
                    self.advance_by(2);
                    let atom = if self.unicode() && escape.is_negated() {
                        unicode_character_class_escape_atom(escape, self.ignore_case())
                    } else {
                        let mut ranges = Vec::new();
                        if self.unicode() {
                            add_class_escape_unicode(escape, &mut ranges, self.ignore_case());
                        } else {
                            add_class_escape(escape, &mut ranges);
                        }
                        RegExpTree::CharacterClass(CharacterClass::new(ranges, false))
                    };
                    state.builder.add_atom(atom);
                }
            }
            b'p' | b'P' => {
                self.advance_by(2);
                if self.unicode() {
                    let negate = next == u32::from(b'P');
                    let atom = self
                        .parse_property_class_name()
                        .and_then(|(name, value)| {
                            self.property_atom(&name, &value, negate, self.ignore_case())
                        });
                    match atom {
                        Some(atom) => state.builder.add_atom(atom),
                        None => return Err(self.error(ParseError::InvalidPropertyName)),
                    }
                } else {
                    state.builder.add_character(next as u16);
                }
            }
            b'1'..=b'9' => {
                if let Some(index) = self.parse_back_reference_index() {
                    if is_inside_capture_group(state, enclosing, index) {
                        // Nothing can have been captured yet.
                        state.builder.add_empty();
                    } else {
                        self.backrefs.insert(index);
                        let atom = RegExpTree::BackReference {
                            index: Some(index),
                            name: None,
                        };
                        if self.unicode() {
                            state.builder.add_atom(unicode_back_reference_atom(atom));
                        } else {
                            state.builder.add_atom(atom);
                        }
                    }
                    return Ok(true);
                }
                if self.unicode() {
                    return Err(self.error(ParseError::BackReferenceOutOfRange));
                }
                if next == u32::from(b'8') || next == u32::from(b'9') {
                    state.builder.add_character(next as u16);
                    self.advance_by(2);
                } else {
                    self.parse_legacy_octal_escape(&mut state.builder);
                }
            }
            b'0' => {
                if self.unicode() {
                    self.advance_by(2);
                    if is_decimal_digit(self.current()) {
                        return Err(self.error(ParseError::InvalidDecimalEscape));
                    }
                    state.builder.add_character(0);
                } else {
                    self.parse_legacy_octal_escape(&mut state.builder);
                }
            }
            b'f' => {
                self.advance_by(2);
                state.builder.add_character(0x0C);
            }
            b'n' => {
                self.advance_by(2);
                state.builder.add_character(0x0A);
            }
            b'r' => {
                self.advance_by(2);
                state.builder.add_character(0x0D);
            }
            b't' => {
                self.advance_by(2);
                state.builder.add_character(0x09);
            }
            b'v' => {
                self.advance_by(2);
                state.builder.add_character(0x0B);
            }
            b'c' => {
                self.advance();
                let control_letter = self.next();
                let letter = control_letter & !0x20;
                if (u32::from(b'A')..=u32::from(b'Z')).contains(&letter) {
                    self.advance_by(2);
                    // Control letters map to 0x00-0x1f.
                    state.builder.add_character((control_letter & 0x1F) as u16);
                } else {
                    if self.unicode() {
                        return Err(self.error(ParseError::InvalidIdentityEscape));
                    }
                    // The backslash is a literal and the 'c' is read next.
                    state.builder.add_character(u16::from(b'\\'));
                }
            }
            b'x' => {
                self.advance_by(2);
                match self.parse_hex_escape(2) {
                    Some(value) => state.builder.add_character(value as u16),
                    None if self.unicode() => {
                        return Err(self.error(ParseError::InvalidIdentityEscape))
                    }
                    None => state.builder.add_character(u16::from(b'x')),
                }
            }
            b'u' => {
                self.advance_by(2);
                match self.parse_unicode_escape()? {
                    Some(value) if self.unicode() => state
                        .builder
                        .add_unicode_character(value, self.ignore_case()),
                    Some(value) => state.builder.add_character(value as u16),
                    None if self.unicode() => {
                        return Err(self.error(ParseError::InvalidUnicodeEscape))
                    }
                    None => state.builder.add_character(u16::from(b'u')),
                }
            }
            b'k' => {
                // A named back-reference in Unicode mode or when the pattern
                // has named groups, otherwise an identity escape.
                self.advance_by(2);
                if self.unicode() || self.has_named_captures() {
                    self.parse_named_back_reference(state, enclosing)?;
                } else {
                    state.builder.add_character(u16::from(b'k'));
                }
            }
            _ => {
                if self.unicode() && !is_syntax_character(next) {
                    return Err(self.error(ParseError::InvalidIdentityEscape));
                }
                state.builder.add_character(next as u16);
                self.advance_by(2);
            }
        }
        Ok(true)
    }

    /// `\0`-`\7` outside Unicode mode, when not a back-reference.
    fn parse_legacy_octal_escape(&mut self, builder: &mut RegExpBuilder) {
        self.advance();
        let value = self.parse_octal_literal();
        builder.add_character(value as u16);
    }

    /// Up to three octal digits, keeping the value below 256.
    fn parse_octal_literal(&mut self) -> u32 {
        debug_assert!(is_octal_digit(self.current()));
        let mut value = self.current() - u32::from(b'0');
        self.advance();
        if is_octal_digit(self.current()) {
            value = value * 8 + self.current() - u32::from(b'0');
            self.advance();
            if value < 32 && is_octal_digit(self.current()) {
                value = value * 8 + self.current() - u32::from(b'0');
                self.advance();
            }
        }
        value
    }

    /// Exactly `length` hex digits, or `None` with the position unchanged.
    fn parse_hex_escape(&mut self, length: usize) -> Option<u32> {
        let start = self.position();
        let mut value = 0;
        for _ in 0..length {
            match hex_value(self.current()) {
                Some(digit) => {
                    value = value * 16 + digit;
                    self.advance();
                }
                None => {
                    self.reset(start);
                    return None;
                }
            }
        }
        Some(value)
    }

    /// `{` HexDigits `}` with a value of at most 0x10FFFF.
    fn parse_braced_hex_escape(&mut self) -> Result<u32> {
        debug_assert!(self.at(b'{'));
        self.advance();
        let mut value: u32 = 0;
        let mut first = true;
        loop {
            let c = self.current();
            if c == u32::from(b'}') && !first {
                self.advance();
                return Ok(value);
            }
            let Some(digit) = hex_value(c) else {
                return Err(self.error(ParseError::InvalidUnicodeEscape));
            };
            value = (value << 4) | digit;
            if value > NON_BMP_MAX {
                return Err(self.error(ParseError::UnicodeOverflow));
            }
            self.advance();
            first = false;
        }
    }

    /// The part of a `\u` escape after the `u`.
    ///
    /// `Ok(None)` leaves the position unchanged. In Unicode mode braces are
    /// accepted and an escaped lead surrogate followed by an escaped trail
    /// surrogate yields the combined code point.
    fn parse_unicode_escape(&mut self) -> Result<Option<u32>> {
        if self.at(b'{') && self.unicode() {
            return self.parse_braced_hex_escape().map(Some);
        }
        let Some(value) = self.parse_hex_escape(4) else {
            return Ok(None);
        };
        if self.unicode() && is_lead_surrogate(value) && self.at(b'\\') {
            let start = self.position();
            if self.next() == u32::from(b'u') {
                self.advance_by(2);
                if let Some(trail) = self.parse_hex_escape(4) {
                    if is_trail_surrogate(trail) {
                        return Ok(Some(utf16_decode(value, trail)));
                    }
                }
            }
            self.reset(start);
        }
        Ok(Some(value))
    }

    /// A lead surrogate code unit directly followed by a trail surrogate.
    fn parse_raw_surrogate_pair(&mut self) -> Option<(u16, u16)> {
        let lead = self.current();
        let trail = self.next();
        if is_lead_surrogate(lead) && is_trail_surrogate(trail) {
            self.advance_by(2);
            return Some((lead as u16, trail as u16));
        }
        None
    }

    /// `{` name `}` or `{` name `=` value `}` after `\p`.
    fn parse_property_class_name(&mut self) -> Option<(String, String)> {
        if !self.at(b'{') {
            return None;
        }
        self.advance();
        let mut name = String::new();
        let mut value = String::new();
        while !self.at(b'}') && !self.at(b'=') {
            if !is_property_value_character(self.current()) || !self.has_next() {
                return None;
            }
            name.push(self.current() as u8 as char);
            self.advance();
        }
        if self.at(b'=') {
            self.advance();
            while !self.at(b'}') {
                if !is_property_value_character(self.current()) || !self.has_next() {
                    return None;
                }
                value.push(self.current() as u8 as char);
                self.advance();
            }
        }
        self.advance();
        Some((name, value))
    }

    /// Add the code points of a property to `sets`; false if the property
    /// is unknown.
    fn add_property_class_range(
        &self,
        name: &str,
        value: &str,
        negate: bool,
        ignore_case: bool,
        sets: &mut UnicodeClassRanges,
    ) -> bool {
        let Some(mut code_points) = self.properties.resolve(name, value) else {
            return false;
        };
        if ignore_case {
            code_points = case_fold_code_points(&code_points);
        }
        if negate {
            code_points =
                negate_unicode_ranges(&code_points, WideCharRange::range(0, NON_BMP_MAX));
        }
        for range in code_points {
            sets.add_range(range.from(), range.to());
        }
        true
    }

    /// The tree for `\p{...}` or `\P{...}` outside a class.
    fn property_atom(
        &self,
        name: &str,
        value: &str,
        negate: bool,
        ignore_case: bool,
    ) -> Option<RegExpTree> {
        let mut sets = UnicodeClassRanges::new();
        if self.add_property_class_range(name, value, negate, ignore_case, &mut sets) {
            return Some(unicode_ranges_atom(sets, false, false));
        }
        if value.is_empty() && !negate {
            return self.property_sequence_atom(name);
        }
        None
    }

    /// Emoji sequence properties. Sequences never fold case.
    fn property_sequence_atom(&self, name: &str) -> Option<RegExpTree> {
        let mut builder = RegExpBuilder::new();
        if let Some(sequences) = emoji_sequences(name) {
            for (i, sequence) in sequences.iter().enumerate() {
                if i > 0 {
                    builder.new_alternative();
                }
                for &c in sequence {
                    builder.add_unicode_character(c, false);
                }
            }
            return Some(builder.into_regexp());
        }
        match name {
            "Emoji_Keycap_Sequence" => {
                // [0-9#*] U+FE0F U+20E3
                builder.add_atom(RegExpTree::CharacterClass(CharacterClass::new(
                    vec![
                        CharacterRange::range(u16::from(b'0'), u16::from(b'9')),
                        CharacterRange::singleton(u16::from(b'#')),
                        CharacterRange::singleton(u16::from(b'*')),
                    ],
                    false,
                )));
                builder.add_character(0xFE0F);
                builder.add_character(0x20E3);
            }
            "Emoji_Modifier_Sequence" | "RGI_Emoji_Modifier_Sequence" => {
                builder.add_atom(self.property_atom("Emoji_Modifier_Base", "", false, false)?);
                builder.add_atom(self.property_atom("Emoji_Modifier", "", false, false)?);
            }
            _ => return None,
        }
        Some(builder.into_regexp())
    }

    /// Parse a class. The current character is `[`.
    fn parse_character_class(&mut self) -> Result<RegExpTree> {
        debug_assert!(self.at(b'['));
        self.advance();
        let mut is_negated = false;
        if self.at(b'^') {
            is_negated = true;
            self.advance();
        }

        // Outside Unicode mode only `sets.ranges` is used.
        let mut sets = UnicodeClassRanges::new();
        while self.has_more() && !self.at(b']') {
            let first = self.parse_class_escape(&mut sets)?;
            if self.at(b'-') {
                self.advance();
                if !self.has_more() {
                    // Reported below as an unterminated class.
                    break;
                }
                if self.at(b']') {
                    if let ClassAtom::Char(c) = first {
                        self.add_class_char(&mut sets, c);
                    }
                    sets.ranges.push(CharacterRange::singleton(u16::from(b'-')));
                    break;
                }
                let second = self.parse_class_escape(&mut sets)?;
                match (first, second) {
                    (ClassAtom::Char(from), ClassAtom::Char(to)) => {
                        if from > to {
                            return Err(self.error(ParseError::BadClassRange));
                        }
                        if self.unicode() {
                            sets.add_range(from, to);
                        } else {
                            sets.ranges.push(CharacterRange::range(from as u16, to as u16));
                        }
                    }
                    _ => {
                        if self.unicode() {
                            return Err(self.error(ParseError::RangeWithClassEscape));
                        }
                        // A class escape as an endpoint makes the '-' literal.
                        if let ClassAtom::Char(c) = first {
                            self.add_class_char(&mut sets, c);
                        }
                        sets.ranges.push(CharacterRange::singleton(u16::from(b'-')));
                        if let ClassAtom::Char(c) = second {
                            self.add_class_char(&mut sets, c);
                        }
                    }
                }
            } else if let ClassAtom::Char(c) = first {
                self.add_class_char(&mut sets, c);
            }
        }
        if !self.has_more() {
            return Err(self.error(ParseError::UnterminatedCharacterClass));
        }
        self.advance();

        if !self.unicode() {
            if sets.ranges.is_empty() {
                // [] never matches and [^] matches anything.
                sets.ranges.push(CharacterRange::everything());
                is_negated = !is_negated;
            }
            return Ok(RegExpTree::CharacterClass(CharacterClass::new(sets.ranges, is_negated)));
        }
        if !is_negated && sets.is_empty() {
            return Ok(RegExpTree::CharacterClass(CharacterClass::new(
                vec![CharacterRange::everything()],
                true,
            )));
        }
        Ok(unicode_ranges_atom(sets, is_negated, self.ignore_case()))
    }

    fn add_class_char(&self, sets: &mut UnicodeClassRanges, c: u32) {
        if self.unicode() {
            sets.add_char(c);
        } else {
            sets.ranges.push(CharacterRange::singleton(c as u16));
        }
    }

    /// One class atom. Class escapes and properties are added to `sets`
    /// directly.
    fn parse_class_escape(&mut self, sets: &mut UnicodeClassRanges) -> Result<ClassAtom> {
        let first = self.current();
        if first == u32::from(b'\\') {
            let next = self.next();
            if next == END_MARKER {
                return Err(self.error(ParseError::EscapeAtEndOfPattern));
            }
            if let Some(escape) = ClassEscape::from_letter(next) {
                self.advance_by(2);
                if self.unicode() {
                    sets.add_class_escape(escape, self.ignore_case());
                } else {
                    add_class_escape(escape, &mut sets.ranges);
                }
                return Ok(ClassAtom::Class);
            }
            if self.unicode() && (next == u32::from(b'p') || next == u32::from(b'P')) {
                self.advance_by(2);
                let negate = next == u32::from(b'P');
                let added = match self.parse_property_class_name() {
                    Some((name, value)) => {
                        let ignore_case = self.ignore_case();
                        self.add_property_class_range(&name, &value, negate, ignore_case, sets)
                    }
                    None => false,
                };
                if !added {
                    return Err(self.error(ParseError::InvalidClassPropertyName));
                }
                return Ok(ClassAtom::Class);
            }
            return self.parse_class_character_escape().map(ClassAtom::Char);
        }
        if self.unicode() {
            if let Some((lead, trail)) = self.parse_raw_surrogate_pair() {
                return Ok(ClassAtom::Char(utf16_decode(u32::from(lead), u32::from(trail))));
            }
        }
        self.advance();
        Ok(ClassAtom::Char(first))
    }

    /// An escape inside a class that denotes one character. The current
    /// character is `\`.
    fn parse_class_character_escape(&mut self) -> Result<u32> {
        debug_assert!(self.at(b'\\'));
        self.advance();
        let c = self.current();
        let simple = match byte_of(c) {
            b'b' => Some(0x08),
            b'f' => Some(0x0C),
            b'n' => Some(0x0A),
            b'r' => Some(0x0D),
            b't' => Some(0x09),
            b'v' => Some(0x0B),
            _ => None,
        };
        if let Some(value) = simple {
            self.advance();
            return Ok(value);
        }

        match byte_of(c) {
            b'c' => {
                let control_letter = self.next();
                let letter = control_letter & !0x20;
                // Digits and underscore are accepted too, outside Unicode mode.
                if (u32::from(b'A')..=u32::from(b'Z')).contains(&letter)
                    || (!self.unicode()
                        && (is_decimal_digit(control_letter) || control_letter == u32::from(b'_')))
                {
                    self.advance_by(2);
                    return Ok(control_letter & 0x1F);
                }
                if self.unicode() {
                    return Err(self.error(ParseError::InvalidIdentityEscape));
                }
                // The backslash is a literal and the 'c' is read next.
                Ok(u32::from(b'\\'))
            }
            b'0'..=b'7' => {
                if self.unicode() {
                    if c == u32::from(b'0') {
                        self.advance();
                        return Ok(0);
                    }
                    return Err(self.error(ParseError::InvalidIdentityEscape));
                }
                Ok(self.parse_octal_literal())
            }
            b'x' => {
                self.advance();
                if let Some(value) = self.parse_hex_escape(2) {
                    return Ok(value);
                }
                if self.unicode() {
                    return Err(self.error(ParseError::InvalidIdentityEscape));
                }
                Ok(u32::from(b'x'))
            }
            b'u' => {
                self.advance();
                if let Some(value) = self.parse_unicode_escape()? {
                    return Ok(value);
                }
                if self.unicode() {
                    return Err(self.error(ParseError::InvalidUnicodeEscape));
                }
                Ok(u32::from(b'u'))
            }
            _ => {
                if self.unicode() && c != u32::from(b'-') && !is_syntax_character(c) {
                    return Err(self.error(ParseError::InvalidIdentityEscape));
                }
                self.advance();
                Ok(c)
            }
        }
    }

    /// `{` n `}`, `{` n `,}` or `{` n `,` m `}`. Counts saturate at
    /// [`INFINITY`]. On failure the position is unchanged.
    fn parse_interval_quantifier(&mut self) -> Option<(u32, u32)> {
        debug_assert!(self.at(b'{'));
        let start = self.position();
        self.advance();
        if !is_decimal_digit(self.current()) {
            self.reset(start);
            return None;
        }
        let min = self.parse_saturating_decimal();
        let max;
        if self.at(b'}') {
            max = min;
            self.advance();
        } else if self.at(b',') {
            self.advance();
            if self.at(b'}') {
                max = INFINITY;
                self.advance();
            } else {
                max = self.parse_saturating_decimal();
                if !self.at(b'}') {
                    self.reset(start);
                    return None;
                }
                self.advance();
            }
        } else {
            self.reset(start);
            return None;
        }
        Some((min, max))
    }

    fn parse_saturating_decimal(&mut self) -> u32 {
        let mut value: u32 = 0;
        while is_decimal_digit(self.current()) {
            let digit = self.current() - u32::from(b'0');
            if value > (INFINITY - digit) / 10 {
                while is_decimal_digit(self.current()) {
                    self.advance();
                }
                return INFINITY;
            }
            value = 10 * value + digit;
            self.advance();
        }
        value
    }

    /// A decimal escape that refers to an existing group. The current
    /// character is `\`. On failure the position is unchanged.
    fn parse_back_reference_index(&mut self) -> Option<usize> {
        debug_assert!(self.at(b'\\'));
        debug_assert!(is_decimal_digit(self.next()));
        let start = self.position();
        let mut value = (self.next() - u32::from(b'0')) as usize;
        self.advance_by(2);
        while is_decimal_digit(self.current()) {
            value = 10 * value + (self.current() - u32::from(b'0')) as usize;
            if value > MAX_CAPTURES {
                self.reset(start);
                return None;
            }
            self.advance();
        }
        if value > self.captures_started {
            if !self.is_scanned_for_captures {
                self.scan_for_captures();
            }
            if value > self.capture_count {
                self.reset(start);
                return None;
            }
        }
        Some(value)
    }

    /// Count the capture groups in the rest of the pattern, and note
    /// whether any of them is named. The position is unchanged.
    fn scan_for_captures(&mut self) {
        let saved_position = self.position();
        let mut capture_count = self.captures_started;
        while self.has_more() {
            let c = self.current();
            self.advance();
            match byte_of(c) {
                b'\\' => self.advance(),
                b'[' => {
                    while self.has_more() {
                        let c = self.current();
                        self.advance();
                        if c == u32::from(b'\\') {
                            self.advance();
                        } else if c == u32::from(b']') {
                            break;
                        }
                    }
                }
                b'(' => {
                    if self.at(b'?') {
                        // (?: (?= (?! (?<= (?<! are not captures; (?<name> is.
                        self.advance();
                        if !self.at(b'<') {
                            continue;
                        }
                        self.advance();
                        if self.at(b'=') || self.at(b'!') {
                            continue;
                        }
                        self.has_named_captures = true;
                    }
                    capture_count += 1;
                }
                _ => {}
            }
        }
        self.capture_count = capture_count;
        self.is_scanned_for_captures = true;
        self.reset(saved_position);
    }

    fn has_named_captures(&mut self) -> bool {
        if self.has_named_captures || self.is_scanned_for_captures {
            return self.has_named_captures;
        }
        self.scan_for_captures();
        self.has_named_captures
    }

    /// A group name, through the closing `>`. The current character is the
    /// first one of the name.
    fn parse_capture_group_name(&mut self) -> Result<String> {
        let mut name = String::new();
        let mut at_start = true;
        loop {
            let mut c = self.current();
            self.advance();

            // Convert unicode escapes and raw surrogate pairs.
            if c == u32::from(b'\\') && self.at(b'u') {
                self.advance();
                match self.parse_unicode_escape()? {
                    Some(value) => c = value,
                    None => return Err(self.error(ParseError::InvalidUnicodeEscape)),
                }
            } else if is_lead_surrogate(c) && is_trail_surrogate(self.current()) {
                c = utf16_decode(c, self.current());
                self.advance();
            }

            if c == u32::from(b'\\') {
                return Err(self.error(ParseError::InvalidCaptureGroupName));
            }
            if at_start {
                if !self.identifiers.is_start(c) {
                    return Err(self.error(ParseError::InvalidCaptureGroupName));
                }
                at_start = false;
            } else if c == u32::from(b'>') {
                return Ok(name);
            } else if !self.identifiers.is_part(c) {
                return Err(self.error(ParseError::InvalidCaptureGroupName));
            }
            match char::from_u32(c) {
                Some(ch) => name.push(ch),
                None => return Err(self.error(ParseError::InvalidCaptureGroupName)),
            }
        }
    }

    fn find_named_capture(&self, name: &str) -> Option<usize> {
        self.named_captures
            .iter()
            .find(|(capture_name, _)| capture_name == name)
            .map(|&(_, index)| index)
    }

    fn create_named_capture_at_index(&mut self, name: &str, index: usize) -> Result<()> {
        debug_assert!(0 < index && index <= self.captures_started);
        if self.find_named_capture(name).is_some() {
            return Err(self.error(ParseError::DuplicateCaptureGroupName(name.into())));
        }
        self.named_captures.push((name.into(), index));
        Ok(())
    }

    /// `<` name `>` after `\k`.
    fn parse_named_back_reference(&mut self, state: &mut ParserState, enclosing: &[ParserState]) -> Result<()> {
        if !self.at(b'<') {
            return Err(self.error(ParseError::InvalidNamedReference));
        }
        self.advance();
        let name = self.parse_capture_group_name()?;
        if is_inside_named_capture_group(state, enclosing, &name) {
            state.builder.add_empty();
        } else {
            state.builder.add_atom(RegExpTree::BackReference {
                index: None,
                name: Some(name.clone()),
            });
            self.named_back_references.push(name);
        }
        Ok(())
    }

    /// Point every named back-reference at its group, now that all groups
    /// are known.
    fn patch_named_back_references(&mut self, tree: &mut RegExpTree) -> Result<()> {
        let Some(first) = self.named_back_references.first() else {
            return Ok(());
        };
        if self.named_captures.is_empty() {
            let name = first.clone();
            return Err(self.error(ParseError::InvalidNamedCaptureReference(name)));
        }
        if let Some(name) = self
            .named_back_references
            .iter()
            .find(|name| self.find_named_capture(name).is_none())
        {
            let name = name.clone();
            return Err(self.error(ParseError::InvalidNamedCaptureReference(name)));
        }

        let mut stack = vec![tree];
        while let Some(node) = stack.pop() {
            match node {
                RegExpTree::BackReference {
                    index,
                    name: Some(name),
                } => {
                    if index.is_none() {
                        *index = self.find_named_capture(name);
                    }
                    if let Some(index) = *index {
                        self.backrefs.insert(index);
                    }
                }
                RegExpTree::Disjunction(children) | RegExpTree::Alternative(children) => {
                    stack.extend(children.iter_mut());
                }
                RegExpTree::Quantifier { body, .. }
                | RegExpTree::Capture { body, .. }
                | RegExpTree::Lookaround { body, .. } => stack.push(body),
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use crate::ranges::CharacterRange;
    use crate::{
        Error, LookaroundType, ParseError, ParsedPattern, ParserBuilder, RegExpTree, Result,
        INFINITY, MAX_CAPTURES, MAX_NESTING,
    };

    fn parse(s: &str) -> Result<ParsedPattern> {
        RegExpTree::parse(s)
    }

    fn parse_unicode(s: &str) -> Result<ParsedPattern> {
        ParserBuilder::new().unicode(true).parse_str(s)
    }

    fn p(s: &str) -> RegExpTree {
        parse(s).unwrap().tree
    }

    fn pu(s: &str) -> RegExpTree {
        parse_unicode(s).unwrap().tree
    }

    fn atom(s: &str) -> RegExpTree {
        RegExpTree::Atom(s.encode_utf16().collect())
    }

    #[cfg_attr(feature = "track_caller", track_caller)]
    fn fail(s: &str) {
        assert!(
            parse(s).is_err(),
            "Expected parse error, but was: {:?}",
            parse(s)
        );
    }

    #[cfg_attr(feature = "track_caller", track_caller)]
    fn fail_unicode(s: &str) {
        assert!(
            parse_unicode(s).is_err(),
            "Expected parse error in Unicode mode, but was: {:?}",
            parse_unicode(s)
        );
    }

    #[cfg_attr(feature = "track_caller", track_caller)]
    fn assert_error(re: &str, expected_error: &str) {
        let result = parse(re);
        assert!(
            result.is_err(),
            "Expected parse error, but was: {:?}",
            result
        );
        assert_eq!(&format!("{}", result.err().unwrap()), expected_error);
    }

    #[cfg_attr(feature = "track_caller", track_caller)]
    fn assert_error_unicode(re: &str, expected_error: &str) {
        let result = parse_unicode(re);
        assert!(
            result.is_err(),
            "Expected parse error in Unicode mode, but was: {:?}",
            result
        );
        assert_eq!(&format!("{}", result.err().unwrap()), expected_error);
    }

    fn kind(result: Result<ParsedPattern>) -> ParseError {
        match result {
            Err(Error::ParseError(_, kind)) => kind,
            Ok(parsed) => panic!("Expected parse error, but got {}", parsed.tree),
        }
    }

    #[test]
    fn empty() {
        assert_eq!(p(""), RegExpTree::Empty);
        assert_eq!(p("|").to_string(), "(| % %)");
        assert_eq!(p("()").to_string(), "(^ %)");
    }

    #[test]
    fn literal() {
        let parsed = parse("abc").unwrap();
        assert_eq!(parsed.tree, atom("abc"));
        assert!(parsed.simple);
        assert!(!parse("ab+").unwrap().simple);
        assert!(!parse("\\x61").unwrap().simple);
        assert_eq!(p("ab+").to_string(), "(: 'a' (# 1 - g 'b'))");
    }

    #[test]
    fn quantifiers() {
        assert_eq!(p("a*").to_string(), "(# 0 - g 'a')");
        assert_eq!(p("a+?").to_string(), "(# 1 - n 'a')");
        assert_eq!(p("a??").to_string(), "(# 0 1 n 'a')");
        assert_eq!(p("a{3}").to_string(), "(# 3 3 g 'a')");
        assert_eq!(p("a{3,}").to_string(), "(# 3 - g 'a')");
        assert_eq!(p("a{3,5}?").to_string(), "(# 3 5 n 'a')");
        assert_matches!(
            p("a{999999999999}"),
            RegExpTree::Quantifier { min: INFINITY, max: INFINITY, .. }
        );
        assert_matches!(
            p("a{1,99999999999999}"),
            RegExpTree::Quantifier { min: 1, max: INFINITY, .. }
        );
    }

    #[test]
    fn quantifier_errors() {
        assert_error("*a", "Parsing error at position 0: Nothing to repeat");
        assert_error("a|+", "Parsing error at position 2: Nothing to repeat");
        assert_error("a**", "Parsing error at position 2: Nothing to repeat");
        assert_error("{1}", "Parsing error at position 0: Nothing to repeat");
        assert_error(
            "a{2,1}",
            "Parsing error at position 6: Numbers out of order in {} quantifier",
        );
        fail("\\b*");
        fail("^*");
    }

    #[test]
    fn literal_braces() {
        assert_eq!(p("{"), atom("{"));
        assert_eq!(p("a{,5}"), atom("a{,5}"));
        assert_eq!(p("a{1"), atom("a{1"));
        assert_eq!(p("}]"), atom("}]"));
        assert_error_unicode("{", "Parsing error at position 0: Lone quantifier brackets");
        assert_error_unicode("a{1", "Parsing error at position 1: Lone quantifier brackets");
        assert_error_unicode("}", "Parsing error at position 0: Lone quantifier brackets");
        assert_error_unicode("]", "Parsing error at position 0: Lone ']' in pattern");
    }

    #[test]
    fn groups() {
        assert_eq!(p("(?:ab)").to_string(), "'ab'");
        assert_eq!(p("(a)(b)").to_string(), "(: (^ 'a') (^ 'b'))");
        assert_eq!(p("(?:a|b)c").to_string(), "(: (| 'a' 'b') 'c')");
        let parsed = parse("(a(b))(c)").unwrap();
        assert_eq!(parsed.capture_count, 3);
        assert_matches!(
            parsed.tree,
            RegExpTree::Alternative(ref children)
                if matches!(children[1], RegExpTree::Capture { index: 3, .. })
        );
    }

    #[test]
    fn group_errors() {
        assert_error("(a", "Parsing error at position 2: Unterminated group");
        assert_error("a)", "Parsing error at position 1: Unmatched ')'");
        assert_error("(?a)", "Parsing error at position 1: Invalid group");
        assert_error("(?", "Parsing error at position 1: Invalid group");
        fail("((a)");
    }

    #[test]
    fn deep_nesting() {
        let re = format!("{}a{}", "(?:".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert_eq!(p(&re), atom("a"));

        let re = format!("{}a{}", "(?=".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert_matches!(p(&re), RegExpTree::Lookaround { .. });
        assert_matches!(pu(&re), RegExpTree::Lookaround { .. });

        let re = format!("{}a{}*", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        let parsed = parse(&re).unwrap();
        assert_eq!(parsed.capture_count, MAX_NESTING);
        assert_eq!(parsed.tree.min_match(), 0);
        assert_eq!(parsed.tree.max_match(), INFINITY);
    }

    #[test]
    fn nesting_too_deep() {
        let depth = MAX_NESTING + 1;
        let re = format!("{}a{}", "(?=".repeat(depth), ")".repeat(depth));
        assert_error(&re, "Parsing error at position 768: Pattern too deeply nested");

        let re = format!("{}a{}*", "(".repeat(60000), ")".repeat(60000));
        assert_eq!(kind(parse(&re)), ParseError::NestingTooDeep);
        assert_eq!(kind(parse_unicode(&re)), ParseError::NestingTooDeep);

        let re = format!("{}a{}", "(?=".repeat(200_000), ")".repeat(200_000));
        assert_eq!(kind(parse(&re)), ParseError::NestingTooDeep);
    }

    #[test]
    fn too_many_captures() {
        let ok = "()".repeat(MAX_CAPTURES);
        assert_eq!(parse(&ok).unwrap().capture_count, MAX_CAPTURES);
        let too_many = "()".repeat(MAX_CAPTURES + 1);
        assert_eq!(kind(parse(&too_many)), ParseError::TooManyCaptures);
    }

    #[test]
    fn lookarounds() {
        assert_eq!(p("(?=a)").to_string(), "(-> + 'a')");
        assert_eq!(p("(?!a)").to_string(), "(-> - 'a')");
        assert_eq!(p("(?<=a)").to_string(), "(<- + 'a')");
        assert_eq!(p("(?<!a)").to_string(), "(<- - 'a')");
        assert_matches!(
            p("x(?<=(a)(b))"),
            RegExpTree::Alternative(ref children) if matches!(
                children[1],
                RegExpTree::Lookaround {
                    capture_count: 2,
                    capture_from: 0,
                    direction: LookaroundType::Lookbehind,
                    ..
                }
            )
        );
        assert_matches!(
            p("(a)(?=(b))"),
            RegExpTree::Alternative(ref children) if matches!(
                children[1],
                RegExpTree::Lookaround { capture_count: 1, capture_from: 1, .. }
            )
        );
    }

    #[test]
    fn quantified_lookarounds() {
        assert_eq!(p("(?=a)*"), RegExpTree::Empty);
        assert_eq!(p("(?=a)?b"), atom("b"));
        assert_eq!(p("(?=a)+").to_string(), "(-> + 'a')");
        assert_eq!(p("(?=a){2}").to_string(), "(-> + 'a')");
        assert_error_unicode("(?=a)*", "Parsing error at position 5: Nothing to repeat");
        assert_error_unicode("(?<!a)+", "Parsing error at position 6: Nothing to repeat");
    }

    #[test]
    fn assertions() {
        let parsed = parse("^a$").unwrap();
        assert_eq!(parsed.tree.to_string(), "(: @^i 'a' @$i)");
        assert!(parsed.contains_anchor);
        let parsed = ParserBuilder::new().multi_line(true).parse_str("^a$").unwrap();
        assert_eq!(parsed.tree.to_string(), "(: @^l 'a' @$l)");
        assert!(!parsed.contains_anchor);
        assert_eq!(p("\\ba\\B").to_string(), "(: @b 'a' @B)");
    }

    #[test]
    fn dot() {
        assert_eq!(p(".").to_string(), "[\\u0000-\\u0009 \\u000b-\\u000c \\u000e-\\u2027 \\u202a-\\uffff]");
        let dot_all = ParserBuilder::new().dot_all(true).parse_str(".").unwrap();
        assert_eq!(dot_all.tree.to_string(), "[\\u0000-\\uffff]");
        assert_matches!(pu("."), RegExpTree::Disjunction(ref alternatives) if alternatives.len() == 4);
    }

    #[test]
    fn character_classes() {
        assert_eq!(p("[abc]").to_string(), "[a b c]");
        assert_eq!(p("[a-c]").to_string(), "[a-c]");
        assert_eq!(p("[^a-c]").to_string(), "^[a-c]");
        assert_eq!(p("[a-]").to_string(), "[a -]");
        assert_eq!(p("[-a]").to_string(), "[- a]");
        assert_eq!(p("[\\]]").to_string(), "[]]");
        assert_eq!(p("[\\b]").to_string(), "[\\u0008]");
        assert_eq!(p("[\\d-z]").to_string(), "[0-9 - z]");
        assert_eq!(p("[z-\\d]").to_string(), "[0-9 z -]");
        assert_eq!(p("[\\c1]").to_string(), "[\\u0011]");
        assert_eq!(p("[\\c*]").to_string(), "[\\ c *]");
        assert_eq!(p("[\\101]").to_string(), "[A]");
    }

    #[test]
    fn empty_classes() {
        assert_eq!(
            p("[]"),
            RegExpTree::CharacterClass(crate::CharacterClass::new(
                [CharacterRange::everything()].to_vec(),
                true
            ))
        );
        assert_eq!(
            p("[^]"),
            RegExpTree::CharacterClass(crate::CharacterClass::new(
                [CharacterRange::everything()].to_vec(),
                false
            ))
        );
        assert_eq!(pu("[]").to_string(), "^[\\u0000-\\uffff]");
    }

    #[test]
    fn class_errors() {
        assert_error("[a", "Parsing error at position 2: Unterminated character class");
        assert_error("[a-", "Parsing error at position 3: Unterminated character class");
        assert_error("[b-a]", "Parsing error at position 4: Range out of order in character class");
        assert_error("[\\", "Parsing error at position 1: \\ at end of pattern");
        assert_eq!(kind(parse_unicode("[\\d-z]")), ParseError::RangeWithClassEscape);
        assert_eq!(kind(parse_unicode("[\\c1]")), ParseError::InvalidIdentityEscape);
        assert_eq!(kind(parse_unicode("[\\1]")), ParseError::InvalidIdentityEscape);
        assert_eq!(kind(parse_unicode("[\\q]")), ParseError::InvalidIdentityEscape);
        assert_eq!(pu("[\\-\\0]").to_string(), "[- \\u0000]");
    }

    #[test]
    fn class_escapes() {
        assert_eq!(p("\\d").to_string(), "[0-9]");
        assert_eq!(p("\\D").to_string(), "[\\u0000-/ :-\\uffff]");
        assert_matches!(p("\\w"), RegExpTree::CharacterClass(ref class) if !class.negated);
        assert_eq!(pu("\\d").to_string(), "[0-9]");
        assert_matches!(pu("\\D"), RegExpTree::Disjunction(_));
    }

    #[test]
    fn escapes() {
        assert_eq!(p("\\f\\n\\r\\t\\v").to_string(), "'\\u000c\\u000a\\u000d\\u0009\\u000b'");
        assert_eq!(p("\\cA\\cz"), RegExpTree::Atom([1, 26].to_vec()));
        assert_eq!(p("\\c1"), atom("\\c1"));
        assert_eq!(p("\\x41\\xg"), atom("Axg"));
        assert_eq!(p("\\u0041\\u00"), atom("Au00"));
        assert_eq!(p("\\u{1F600}"), atom("u{1F600}"));
        assert_eq!(p("\\u{41}").to_string(), "(# 41 41 g 'u')");
        assert_eq!(p("\\q\\-"), atom("q-"));
        assert_eq!(p("\\0"), RegExpTree::Atom([0].to_vec()));
        assert_eq!(p("\\101"), atom("A"));
        assert_eq!(p("\\400"), atom("\u{20}0"));
        assert_eq!(p("\\8\\9"), atom("89"));
        assert_error("\\", "Parsing error at position 0: \\ at end of pattern");
    }

    #[test]
    fn unicode_escapes() {
        assert_eq!(pu("\\u{41}"), atom("A"));
        assert_eq!(pu("\\u{1F600}"), atom("\u{1F600}"));
        assert_eq!(pu("\\ud83d\\ude00"), atom("\u{1F600}"));
        assert_eq!(pu("\u{1F600}"), atom("\u{1F600}"));
        assert_eq!(pu("\\/\\^"), atom("/^"));
        assert_eq!(pu("\\0a"), RegExpTree::Atom([0, 0x61].to_vec()));
        assert_eq!(kind(parse_unicode("\\u{110000}")), ParseError::UnicodeOverflow);
        assert_eq!(kind(parse_unicode("\\u{}")), ParseError::InvalidUnicodeEscape);
        assert_eq!(kind(parse_unicode("\\u12")), ParseError::InvalidUnicodeEscape);
        assert_eq!(kind(parse_unicode("\\x1")), ParseError::InvalidIdentityEscape);
        assert_eq!(kind(parse_unicode("\\c")), ParseError::InvalidIdentityEscape);
        assert_eq!(kind(parse_unicode("\\q")), ParseError::InvalidIdentityEscape);
        assert_eq!(kind(parse_unicode("\\00")), ParseError::InvalidDecimalEscape);
        assert_eq!(kind(parse_unicode("\\1")), ParseError::BackReferenceOutOfRange);
    }

    #[test]
    fn lone_surrogates() {
        assert_eq!(pu("\\ud83d").to_string(), "(: '\\ud83d' (-> - [\\udc00-\\udfff]))");
        assert_eq!(pu("\\ude00").to_string(), "(: @!ls '\\ude00')");
        // Outside Unicode mode surrogates are plain code units.
        assert_eq!(p("\\ud83d"), RegExpTree::Atom([0xD83D].to_vec()));
    }

    #[test]
    fn unicode_class_ranges() {
        assert_eq!(
            pu("[\\u{10000}-\\u{10002}]").to_string(),
            "(! '\\ud800' [\\udc00-\\udc02])"
        );
        assert_eq!(
            pu("[a\\u{10000}]").to_string(),
            "(| [a] '\\ud800\\udc00')"
        );
        assert_eq!(kind(parse_unicode("[\\u{10002}-\\u{10000}]")), ParseError::BadClassRange);
    }

    #[test]
    fn back_references() {
        let parsed = parse("(a)\\1").unwrap();
        assert_eq!(parsed.tree.to_string(), "(: (^ 'a') (<- 1))");
        assert!(parsed.backrefs.contains(1));
        assert_eq!(pu("(a)\\1").to_string(), "(: (^ 'a') (: (<- 1) @!sp))");
        // A reference inside its own group matches the empty string.
        let parsed = parse("(a\\1)").unwrap();
        assert_eq!(parsed.tree.to_string(), "(^ 'a')");
        assert!(parsed.backrefs.is_empty());
        assert_eq!(p("(a)(b\\1)").to_string(), "(: (^ 'a') (^ (: 'b' (<- 1))))");
    }

    #[test]
    fn forward_back_references() {
        assert_eq!(p("\\2(a)(b)").to_string(), "(: (<- 2) (^ 'a') (^ 'b'))");
        assert_eq!(p("\\2(a)").to_string(), "(: '\\u0002' (^ 'a'))");
        assert_eq!(p("\\10(a)").to_string(), "(: '\\u0008' (^ 'a'))");
    }

    #[test]
    fn scan_for_captures_skips_non_captures() {
        let parsed = parse("\\1[(]\\((?:x)(?=y)(?<=z)").unwrap();
        assert_eq!(parsed.capture_count, 0);
        assert!(parsed.backrefs.is_empty());
        let parsed = parse("\\1(?<n>x)").unwrap();
        assert!(parsed.backrefs.contains(1));
    }

    #[test]
    fn named_captures() {
        let parsed = parse("(?<a>(?<b>x))").unwrap();
        assert_eq!(
            parsed.named_captures,
            [(String::from("b"), 2), (String::from("a"), 1)].to_vec()
        );
        assert_eq!(parsed.capture_index("a"), Some(1));
        assert_matches!(
            parsed.tree,
            RegExpTree::Capture { index: 1, name: Some(ref name), .. } if name == "a"
        );
        assert_eq!(parse("(?<\\u0061b>x)").unwrap().capture_index("ab"), Some(1));
        assert_eq!(parse("(?<$_\u{e9}>x)").unwrap().capture_index("$_\u{e9}"), Some(1));
    }

    #[test]
    fn named_capture_errors() {
        assert_eq!(kind(parse("(?<1a>x)")), ParseError::InvalidCaptureGroupName);
        assert_eq!(kind(parse("(?<a-b>x)")), ParseError::InvalidCaptureGroupName);
        assert_eq!(kind(parse("(?<>x)")), ParseError::InvalidCaptureGroupName);
        assert_eq!(kind(parse("(?<a")), ParseError::InvalidCaptureGroupName);
        assert_error(
            "(?<a>x)(?<a>y)",
            "Parsing error at position 14: Duplicate capture group name 'a'",
        );
    }

    #[test]
    fn named_back_references() {
        let parsed = parse("(?<x>a)\\k<x>").unwrap();
        assert_eq!(parsed.tree.to_string(), "(: (^ 'a') (<- 1))");
        assert!(parsed.backrefs.contains(1));

        let parsed = parse("\\k<x>(?<x>a)").unwrap();
        assert_matches!(
            parsed.tree,
            RegExpTree::Alternative(ref children) if matches!(
                children[0],
                RegExpTree::BackReference { index: Some(1), name: Some(_) }
            )
        );
        assert!(parsed.backrefs.contains(1));

        assert_eq!(p("(?<x>a\\k<x>)").to_string(), "(^ 'a')");
    }

    #[test]
    fn named_back_reference_errors() {
        assert_eq!(
            kind(parse("\\k<y>(?<x>a)")),
            ParseError::InvalidNamedCaptureReference("y".to_string())
        );
        assert_eq!(
            kind(parse_unicode("\\k<y>")),
            ParseError::InvalidNamedCaptureReference("y".to_string())
        );
        assert_eq!(kind(parse("(?<x>a)\\k")), ParseError::InvalidNamedReference);
        assert_eq!(kind(parse_unicode("\\k")), ParseError::InvalidNamedReference);
        fail_unicode("(?<a>x)\\k<b>");
        fail_unicode("\\k<1>");
        // Without named groups \k is an identity escape.
        assert_eq!(p("\\k<y>"), atom("k<y>"));
    }

    #[test]
    fn properties() {
        assert_eq!(pu("\\p{ASCII}").to_string(), "[\\u0000-\\u007f]");
        assert_matches!(
            pu("\\P{ASCII}"),
            RegExpTree::Disjunction(ref alternatives) if alternatives.len() == 4
        );
        assert!(parse_unicode("\\p{Script=Greek}").is_ok());
        assert!(parse_unicode("\\p{scx=Grek}").is_ok());
        assert!(parse_unicode("[\\p{Lu}\\P{Nd}]").is_ok());
        assert_eq!(kind(parse_unicode("\\p{Greek}")), ParseError::InvalidPropertyName);
        assert_eq!(kind(parse_unicode("\\p{Bogus}")), ParseError::InvalidPropertyName);
        assert_eq!(kind(parse_unicode("\\p")), ParseError::InvalidPropertyName);
        assert_eq!(kind(parse_unicode("[\\p{Bogus}]")), ParseError::InvalidClassPropertyName);
        assert_eq!(p("\\p{L}"), atom("p{L}"));
    }

    #[test]
    fn property_names_are_case_sensitive() {
        for re in [
            "\\p{lu}",
            "\\p{isAlphabetic}",
            "\\p{alpha}",
            "\\p{gc=Any}",
            "\\p{gc=ASCII}",
            "\\p{L_u}",
            "\\p{sc=greek}",
            "\\P{ascii}",
            "\\p{General_Category=uppercase_letter}",
        ] {
            assert_eq!(kind(parse_unicode(re)), ParseError::InvalidPropertyName, "{}", re);
        }
        assert_eq!(kind(parse_unicode("[\\p{lu}]")), ParseError::InvalidClassPropertyName);
        assert_error_unicode("a\\p{alpha}", "Parsing error at position 10: Invalid property name");
        assert!(parse_unicode("\\p{Alpha}\\p{gc=Lu}\\p{sc=Grek}").is_ok());
    }

    #[test]
    fn case_insensitive_properties() {
        let parsed = ParserBuilder::new()
            .unicode(true)
            .case_insensitive(true)
            .parse_str("\\p{Lu}")
            .unwrap();
        let RegExpTree::Disjunction(alternatives) = parsed.tree else {
            panic!("expected a disjunction");
        };
        assert_matches!(
            alternatives[0],
            RegExpTree::CharacterClass(ref class)
                if class.ranges.iter().any(|range| range.contains(0x61))
        );
    }

    #[test]
    fn property_sequences() {
        assert_eq!(
            pu("\\p{Emoji_Keycap_Sequence}").to_string(),
            "(! [0-9 # *] '\\ufe0f\\u20e3')"
        );
        assert_eq!(kind(parse_unicode("\\P{Emoji_Keycap_Sequence}")), ParseError::InvalidPropertyName);

        let RegExpTree::Disjunction(tags) = pu("\\p{Emoji_Tag_Sequence}") else {
            panic!("expected a disjunction");
        };
        assert_eq!(tags.len(), 3);
        assert_eq!(
            tags[0].to_string(),
            "(! '\\ud83c\\udff4' '\\udb40\\udc67' '\\udb40\\udc62' '\\udb40\\udc65' \
             '\\udb40\\udc6e' '\\udb40\\udc67' '\\udb40\\udc7f')"
        );

        let RegExpTree::Disjunction(flags) = pu("\\p{RGI_Emoji_Flag_Sequence}") else {
            panic!("expected a disjunction");
        };
        assert_eq!(flags[0].to_string(), "(! '\\ud83c\\udde6' '\\ud83c\\udde8')");
        assert_matches!(
            pu("x\\p{RGI_Emoji_Flag_Sequence}"),
            RegExpTree::Alternative(ref terms) if terms.len() == 2
        );

        assert_matches!(pu("\\p{RGI_Emoji_ZWJ_Sequence}"), RegExpTree::Disjunction(_));
        assert_eq!(kind(parse_unicode("\\P{Emoji_ZWJ_Sequence}")), ParseError::InvalidPropertyName);

        let modifiers = pu("\\p{Emoji_Modifier_Sequence}");
        let folded = ParserBuilder::new()
            .unicode(true)
            .case_insensitive(true)
            .parse_str("\\p{RGI_Emoji_Modifier_Sequence}")
            .unwrap();
        assert_eq!(folded.tree, modifiers);
    }

    #[test]
    fn match_only() {
        let mut builder = ParserBuilder::new();
        builder.match_only(true);
        let parsed = builder.parse_str(".*abc.*").unwrap();
        assert_eq!(parsed.tree, atom("abc"));
        assert!(parsed.simple);
        assert_eq!(builder.parse_str(".*?a").unwrap().tree.to_string(), "(: (# 0 - n [\\u0000-\\u0009 \\u000b-\\u000c \\u000e-\\u2027 \\u202a-\\uffff]) 'a')");
        assert_matches!(builder.parse_str("a+.*").unwrap().tree, RegExpTree::Alternative(_));
        builder.global(true);
        assert_matches!(builder.parse_str(".*abc.*").unwrap().tree, RegExpTree::Alternative(_));
    }

    #[test]
    fn utf16_input() {
        let units: Vec<u16> = [0x61, 0xD800, 0x62].to_vec();
        let parsed = ParserBuilder::new().parse(&units).unwrap();
        assert_eq!(parsed.tree, RegExpTree::Atom(units));
        assert!(ParserBuilder::new().unicode(true).parse(&[0xD800]).is_ok());
    }
}
