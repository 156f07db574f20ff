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

//! Assembly of the tree for one group body.
//!
//! The parser feeds a [`RegExpBuilder`] atoms, assertions, quantifiers and
//! alternative separators in source order. Literal code units accumulate
//! into one atom, adjacent atoms and classes into one text node, terms
//! into an alternative and alternatives into a disjunction; each level is
//! flushed into the next when something that cannot join it arrives.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::mem;

use crate::ranges::{
    negate_unicode_ranges, CharacterRange, ClassEscape, CodeRange, UnicodeClassRanges,
    WideCharRange,
};
use crate::unicode::{
    add_case_folded_wide_ranges, fold_case_orbit, utf16_decode, utf16_encode, LEAD_SURROGATE_MAX,
    LEAD_SURROGATE_MIN, NON_BMP_MIN, TRAIL_SURROGATE_MAX, TRAIL_SURROGATE_MIN,
};
use crate::{AssertionType, CharacterClass, LookaroundType, RegExpTree, TextElement};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LastAdded {
    Nothing,
    Char,
    Atom,
    Term,
    Assertion,
}

pub(crate) struct RegExpBuilder {
    pending_empty: bool,
    characters: Option<Vec<u16>>,
    text: Vec<RegExpTree>,
    terms: Vec<RegExpTree>,
    alternatives: Vec<RegExpTree>,
    last_added: LastAdded,
}

impl RegExpBuilder {
    pub(crate) fn new() -> RegExpBuilder {
        RegExpBuilder {
            pending_empty: false,
            characters: None,
            text: Vec::new(),
            terms: Vec::new(),
            alternatives: Vec::new(),
            last_added: LastAdded::Nothing,
        }
    }

    fn flush_characters(&mut self) {
        self.pending_empty = false;
        if let Some(characters) = self.characters.take() {
            self.text.push(RegExpTree::Atom(characters));
        }
    }

    fn flush_text(&mut self) {
        self.flush_characters();
        match self.text.len() {
            0 => {}
            1 => self.terms.extend(self.text.pop()),
            _ => {
                let mut elements: Vec<TextElement> = Vec::new();
                for node in self.text.drain(..) {
                    node.append_to_text(&mut elements);
                }
                self.terms.push(RegExpTree::Text(elements));
            }
        }
    }

    fn flush_terms(&mut self) {
        self.flush_text();
        let alternative = if self.terms.len() > 1 {
            RegExpTree::Alternative(mem::take(&mut self.terms))
        } else {
            self.terms.pop().unwrap_or(RegExpTree::Empty)
        };
        self.alternatives.push(alternative);
        self.last_added = LastAdded::Nothing;
    }

    pub(crate) fn add_character(&mut self, c: u16) {
        self.pending_empty = false;
        self.characters.get_or_insert_with(Vec::new).push(c);
        self.last_added = LastAdded::Char;
    }

    /// Add a code point, splitting supplementary ones into surrogates.
    pub(crate) fn add_unicode_character(&mut self, c: u32, ignore_case: bool) {
        if c >= NON_BMP_MIN {
            let (lead, trail) = utf16_encode(c);
            self.add_atom(surrogate_pair_atom(lead, trail, ignore_case));
        } else if let Some(atom) = lone_surrogate_atom(c as u16) {
            self.add_atom(atom);
        } else {
            self.add_character(c as u16);
        }
    }

    pub(crate) fn add_empty(&mut self) {
        self.pending_empty = true;
    }

    pub(crate) fn add_atom(&mut self, term: RegExpTree) {
        if term.is_empty() {
            self.add_empty();
            return;
        }
        if term.is_text_element() {
            self.flush_characters();
            self.text.push(term);
        } else {
            self.flush_text();
            self.terms.push(term);
        }
        self.last_added = LastAdded::Atom;
    }

    pub(crate) fn add_assertion(&mut self, assertion: AssertionType) {
        self.flush_text();
        self.terms.push(RegExpTree::Assertion(assertion));
        self.last_added = LastAdded::Assertion;
    }

    pub(crate) fn new_alternative(&mut self) {
        self.flush_terms();
    }

    /// Apply a quantifier to the most recently added atom.
    ///
    /// Only the last code unit of a pending literal run is quantified. A
    /// quantifier on a node that matches nothing (an empty node, or a
    /// lookaround outside Unicode mode) drops the node when `min` is 0 and
    /// leaves it unquantified otherwise.
    pub(crate) fn add_quantifier_to_atom(&mut self, min: u32, max: u32, greedy: bool) {
        if self.pending_empty {
            self.pending_empty = false;
            return;
        }
        let atom = if let Some(mut characters) = self.characters.take() {
            debug_assert_eq!(self.last_added, LastAdded::Char);
            let last = characters.split_off(characters.len() - 1);
            if !characters.is_empty() {
                self.text.push(RegExpTree::Atom(characters));
            }
            self.flush_text();
            RegExpTree::Atom(last)
        } else if let Some(atom) = self.text.pop() {
            debug_assert_eq!(self.last_added, LastAdded::Atom);
            self.flush_text();
            atom
        } else if let Some(atom) = self.terms.pop() {
            debug_assert!(matches!(self.last_added, LastAdded::Atom | LastAdded::Term));
            if atom.max_match() == 0 {
                self.last_added = LastAdded::Term;
                if min > 0 {
                    self.terms.push(atom);
                }
                return;
            }
            atom
        } else {
            unreachable!("quantifier without an atom");
        };
        self.terms.push(RegExpTree::Quantifier {
            body: Box::new(atom),
            min,
            max,
            greedy,
        });
        self.last_added = LastAdded::Term;
    }

    /// Finish the group body.
    pub(crate) fn into_regexp(mut self) -> RegExpTree {
        self.flush_terms();
        let mut alternatives = self.alternatives;
        if alternatives.len() > 1 {
            RegExpTree::Disjunction(alternatives)
        } else {
            alternatives.pop().unwrap_or(RegExpTree::Empty)
        }
    }
}

fn class_atom(ranges: Vec<CharacterRange>, negated: bool) -> RegExpTree {
    RegExpTree::CharacterClass(CharacterClass::new(ranges, negated))
}

/// A class holding `from..=to`.
pub(crate) fn range_atom(from: u16, to: u16) -> RegExpTree {
    class_atom(vec![CharacterRange::range(from, to)], false)
}

/// `(?!` `[from-to]` `)`
pub(crate) fn negative_lookahead(from: u16, to: u16) -> RegExpTree {
    RegExpTree::Lookaround {
        body: Box::new(range_atom(from, to)),
        positive: false,
        direction: LookaroundType::Lookahead,
        capture_count: 0,
        capture_from: 0,
    }
}

/// A supplementary character as its two code units. Under `ignore_case`
/// the trail becomes a class of the trails of case partners that share
/// the lead.
pub(crate) fn surrogate_pair_atom(lead: u16, trail: u16, ignore_case: bool) -> RegExpTree {
    let mut builder = RegExpBuilder::new();
    if ignore_case {
        let c = utf16_decode(u32::from(lead), u32::from(trail));
        let mut trails = vec![CharacterRange::singleton(trail)];
        for other in fold_case_orbit(c).into_iter().skip(1) {
            if other < NON_BMP_MIN {
                continue;
            }
            let (other_lead, other_trail) = utf16_encode(other);
            if other_lead == lead {
                trails.push(CharacterRange::singleton(other_trail));
            }
        }
        if trails.len() > 1 {
            builder.add_character(lead);
            builder.add_atom(class_atom(trails, false));
            return builder.into_regexp();
        }
    }
    builder.add_character(lead);
    builder.add_character(trail);
    builder.into_regexp()
}

/// A lead surrogate that is not followed by a trail surrogate.
pub(crate) fn lead_surrogate_atom(lead: u16) -> RegExpTree {
    let mut builder = RegExpBuilder::new();
    builder.add_character(lead);
    builder.add_atom(negative_lookahead(TRAIL_SURROGATE_MIN, TRAIL_SURROGATE_MAX));
    builder.into_regexp()
}

/// A trail surrogate that does not follow a lead surrogate.
pub(crate) fn trail_surrogate_atom(trail: u16) -> RegExpTree {
    let mut builder = RegExpBuilder::new();
    builder.add_assertion(AssertionType::NotAfterLeadSurrogate);
    builder.add_character(trail);
    builder.into_regexp()
}

/// The atom for a lone surrogate code unit, or `None` if `c` is not one.
pub(crate) fn lone_surrogate_atom(c: u16) -> Option<RegExpTree> {
    if (LEAD_SURROGATE_MIN..=LEAD_SURROGATE_MAX).contains(&c) {
        Some(lead_surrogate_atom(c))
    } else if (TRAIL_SURROGATE_MIN..=TRAIL_SURROGATE_MAX).contains(&c) {
        Some(trail_surrogate_atom(c))
    } else {
        None
    }
}

/// The tree matching one code point from a Unicode-mode class.
///
/// Each kind of range becomes one alternative: BMP code units as a class
/// (negated with surrogates added when `is_negated`), lead surrogates not
/// followed by a trail, trail surrogates not preceded by a lead, and each
/// supplementary range as lead/trail class pairs. Negation applies to the
/// surrogate and supplementary lists directly.
pub(crate) fn unicode_ranges_atom(mut sets: UnicodeClassRanges, is_negated: bool, ignore_case: bool) -> RegExpTree {
    if ignore_case {
        add_case_folded_wide_ranges(&mut sets.wide_ranges);
    }

    if is_negated {
        sets.lead_ranges = negate_unicode_ranges(&sets.lead_ranges, CharacterRange::lead_surrogate());
        sets.trail_ranges = negate_unicode_ranges(&sets.trail_ranges, CharacterRange::trail_surrogate());
        sets.wide_ranges = negate_unicode_ranges(&sets.wide_ranges, WideCharRange::non_bmp());
        sets.ranges.push(CharacterRange::lead_surrogate());
        sets.ranges.push(CharacterRange::trail_surrogate());
    }

    let mut builder = RegExpBuilder::new();
    let mut added = false;

    if !sets.ranges.is_empty() {
        builder.add_atom(class_atom(sets.ranges, is_negated));
        added = true;
    }

    if !sets.lead_ranges.is_empty() {
        if added {
            builder.new_alternative();
        }
        builder.add_atom(class_atom(sets.lead_ranges, false));
        builder.add_atom(negative_lookahead(TRAIL_SURROGATE_MIN, TRAIL_SURROGATE_MAX));
        added = true;
    }

    if !sets.trail_ranges.is_empty() {
        if added {
            builder.new_alternative();
        }
        builder.add_assertion(AssertionType::NotAfterLeadSurrogate);
        builder.add_atom(class_atom(sets.trail_ranges, false));
        added = true;
    }

    for range in sets.wide_ranges {
        if added {
            builder.new_alternative();
        }
        added = true;
        add_wide_range(&mut builder, range);
    }

    builder.into_regexp()
}

fn add_wide_range(builder: &mut RegExpBuilder, range: WideCharRange) {
    let (from_lead, from_trail) = utf16_encode(range.from());
    if range.from() == range.to() {
        builder.add_character(from_lead);
        builder.add_character(from_trail);
        return;
    }
    let (to_lead, to_trail) = utf16_encode(range.to());

    if from_lead == to_lead {
        // One lead.
        builder.add_character(from_lead);
        builder.add_atom(range_atom(from_trail, to_trail));
    } else if from_trail == TRAIL_SURROGATE_MIN && to_trail == TRAIL_SURROGATE_MAX {
        // Whole leads.
        builder.add_atom(range_atom(from_lead, to_lead));
        builder.add_atom(range_atom(TRAIL_SURROGATE_MIN, TRAIL_SURROGATE_MAX));
    } else if from_lead + 1 == to_lead {
        // Adjacent leads.
        builder.add_character(from_lead);
        builder.add_atom(range_atom(from_trail, TRAIL_SURROGATE_MAX));
        builder.new_alternative();
        builder.add_character(to_lead);
        builder.add_atom(range_atom(TRAIL_SURROGATE_MIN, to_trail));
    } else if from_lead + 2 == to_lead {
        builder.add_character(from_lead);
        builder.add_atom(range_atom(from_trail, TRAIL_SURROGATE_MAX));
        builder.new_alternative();
        builder.add_character(from_lead + 1);
        builder.add_atom(range_atom(TRAIL_SURROGATE_MIN, TRAIL_SURROGATE_MAX));
        builder.new_alternative();
        builder.add_character(to_lead);
        builder.add_atom(range_atom(TRAIL_SURROGATE_MIN, to_trail));
    } else {
        builder.add_character(from_lead);
        builder.add_atom(range_atom(from_trail, TRAIL_SURROGATE_MAX));
        builder.new_alternative();
        builder.add_atom(range_atom(from_lead + 1, to_lead - 1));
        builder.add_atom(range_atom(TRAIL_SURROGATE_MIN, TRAIL_SURROGATE_MAX));
        builder.new_alternative();
        builder.add_character(to_lead);
        builder.add_atom(range_atom(TRAIL_SURROGATE_MIN, to_trail));
    }
}

/// `.` in Unicode mode: any code point except a line terminator.
pub(crate) fn unicode_everything_atom() -> RegExpTree {
    let mut builder = RegExpBuilder::new();

    // Everything except \x0a, \x0d, \u2028 and \u2029.
    builder.add_atom(class_atom(
        vec![
            CharacterRange::range(0x0, 0x09),
            CharacterRange::range(0x0B, 0x0C),
            CharacterRange::range(0x0E, 0x2027),
            CharacterRange::range(0x202A, LEAD_SURROGATE_MIN - 1),
            CharacterRange::range(TRAIL_SURROGATE_MAX + 1, 0xFFFF),
        ],
        false,
    ));

    builder.new_alternative();
    builder.add_atom(range_atom(LEAD_SURROGATE_MIN, LEAD_SURROGATE_MAX));
    builder.add_atom(negative_lookahead(TRAIL_SURROGATE_MIN, TRAIL_SURROGATE_MAX));

    builder.new_alternative();
    builder.add_assertion(AssertionType::NotAfterLeadSurrogate);
    builder.add_atom(range_atom(TRAIL_SURROGATE_MIN, TRAIL_SURROGATE_MAX));

    builder.new_alternative();
    builder.add_atom(range_atom(LEAD_SURROGATE_MIN, LEAD_SURROGATE_MAX));
    builder.add_atom(range_atom(TRAIL_SURROGATE_MIN, TRAIL_SURROGATE_MAX));

    builder.into_regexp()
}

/// `.` in Unicode mode with `dot_all`: any code point.
pub(crate) fn unicode_dot_all_atom() -> RegExpTree {
    let mut builder = RegExpBuilder::new();

    builder.add_atom(class_atom(
        vec![
            CharacterRange::range(0x0, LEAD_SURROGATE_MIN - 1),
            CharacterRange::range(TRAIL_SURROGATE_MAX + 1, 0xFFFF),
        ],
        false,
    ));

    builder.new_alternative();
    builder.add_atom(range_atom(LEAD_SURROGATE_MIN, LEAD_SURROGATE_MAX));
    builder.add_atom(negative_lookahead(TRAIL_SURROGATE_MIN, TRAIL_SURROGATE_MAX));

    builder.new_alternative();
    builder.add_assertion(AssertionType::NotAfterLeadSurrogate);
    builder.add_atom(range_atom(TRAIL_SURROGATE_MIN, TRAIL_SURROGATE_MAX));

    builder.new_alternative();
    builder.add_atom(range_atom(LEAD_SURROGATE_MIN, LEAD_SURROGATE_MAX));
    builder.add_atom(range_atom(TRAIL_SURROGATE_MIN, TRAIL_SURROGATE_MAX));

    builder.into_regexp()
}

/// A class escape outside a class in Unicode mode.
pub(crate) fn unicode_character_class_escape_atom(escape: ClassEscape, ignore_case: bool) -> RegExpTree {
    let mut sets = UnicodeClassRanges::new();
    sets.add_class_escape(escape, ignore_case);
    unicode_ranges_atom(sets, false, false)
}

/// A numeric back-reference that never matches starting inside a pair.
pub(crate) fn unicode_back_reference_atom(backref: RegExpTree) -> RegExpTree {
    let mut builder = RegExpBuilder::new();
    builder.add_atom(backref);
    builder.add_assertion(AssertionType::NotInSurrogatePair);
    builder.into_regexp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INFINITY;

    fn atom(s: &str) -> RegExpTree {
        RegExpTree::Atom(s.encode_utf16().collect())
    }

    fn add_str(builder: &mut RegExpBuilder, s: &str) {
        for c in s.encode_utf16() {
            builder.add_character(c);
        }
    }

    #[test]
    fn characters_join() {
        let mut builder = RegExpBuilder::new();
        add_str(&mut builder, "abc");
        assert_eq!(builder.into_regexp(), atom("abc"));
    }

    #[test]
    fn quantifier_takes_last_character() {
        let mut builder = RegExpBuilder::new();
        add_str(&mut builder, "ab");
        builder.add_quantifier_to_atom(1, INFINITY, true);
        assert_eq!(
            builder.into_regexp(),
            RegExpTree::Alternative(vec![
                atom("a"),
                RegExpTree::Quantifier {
                    body: Box::new(atom("b")),
                    min: 1,
                    max: INFINITY,
                    greedy: true,
                },
            ])
        );
    }

    #[test]
    fn text_merges_atoms_and_classes() {
        let mut builder = RegExpBuilder::new();
        add_str(&mut builder, "a");
        builder.add_atom(range_atom(0x30, 0x39));
        add_str(&mut builder, "b");
        assert_eq!(
            builder.into_regexp(),
            RegExpTree::Text(vec![
                TextElement::Atom(vec![0x61]),
                TextElement::CharClass(CharacterClass::new(vec![CharacterRange::range(0x30, 0x39)], false)),
                TextElement::Atom(vec![0x62]),
            ])
        );
    }

    #[test]
    fn quantified_class_leaves_text() {
        let mut builder = RegExpBuilder::new();
        add_str(&mut builder, "a");
        builder.add_atom(range_atom(0x30, 0x39));
        builder.add_quantifier_to_atom(0, 1, false);
        assert_eq!(
            builder.into_regexp(),
            RegExpTree::Alternative(vec![
                atom("a"),
                RegExpTree::Quantifier {
                    body: Box::new(range_atom(0x30, 0x39)),
                    min: 0,
                    max: 1,
                    greedy: false,
                },
            ])
        );
    }

    #[test]
    fn zero_width_terms() {
        let mut builder = RegExpBuilder::new();
        builder.add_atom(negative_lookahead(0x61, 0x61));
        builder.add_quantifier_to_atom(0, INFINITY, true);
        assert_eq!(builder.into_regexp(), RegExpTree::Empty);

        let mut builder = RegExpBuilder::new();
        builder.add_atom(negative_lookahead(0x61, 0x61));
        builder.add_quantifier_to_atom(1, 3, true);
        assert_eq!(builder.into_regexp(), negative_lookahead(0x61, 0x61));

        let mut builder = RegExpBuilder::new();
        add_str(&mut builder, "a");
        builder.add_empty();
        builder.add_quantifier_to_atom(2, 2, true);
        assert_eq!(builder.into_regexp(), atom("a"));
    }

    #[test]
    fn alternatives() {
        let mut builder = RegExpBuilder::new();
        add_str(&mut builder, "a");
        builder.new_alternative();
        builder.new_alternative();
        add_str(&mut builder, "b");
        assert_eq!(
            builder.into_regexp(),
            RegExpTree::Disjunction(vec![atom("a"), RegExpTree::Empty, atom("b")])
        );
    }

    #[test]
    fn supplementary_characters() {
        let mut builder = RegExpBuilder::new();
        builder.add_unicode_character(0x1F600, false);
        assert_eq!(builder.into_regexp(), RegExpTree::Atom(vec![0xD83D, 0xDE00]));

        // U+10400 and U+10428 are case partners with the same lead.
        assert_eq!(
            surrogate_pair_atom(0xD801, 0xDC00, true),
            RegExpTree::Text(vec![
                TextElement::Atom(vec![0xD801]),
                TextElement::CharClass(CharacterClass::new(
                    vec![CharacterRange::singleton(0xDC00), CharacterRange::singleton(0xDC28)],
                    false
                )),
            ])
        );
        assert_eq!(surrogate_pair_atom(0xD83D, 0xDE00, true), RegExpTree::Atom(vec![0xD83D, 0xDE00]));
    }

    #[test]
    fn lone_surrogates() {
        assert_eq!(
            lone_surrogate_atom(0xD83D),
            Some(RegExpTree::Alternative(vec![
                RegExpTree::Atom(vec![0xD83D]),
                negative_lookahead(0xDC00, 0xDFFF),
            ]))
        );
        assert_eq!(
            lone_surrogate_atom(0xDE00),
            Some(RegExpTree::Alternative(vec![
                RegExpTree::Assertion(AssertionType::NotAfterLeadSurrogate),
                RegExpTree::Atom(vec![0xDE00]),
            ]))
        );
        assert_eq!(lone_surrogate_atom(0x61), None);
    }

    #[test]
    fn wide_range_splits() {
        let mut sets = UnicodeClassRanges::new();
        sets.add_range(0x10000, 0x10002);
        assert_eq!(
            unicode_ranges_atom(sets, false, false),
            RegExpTree::Text(vec![
                TextElement::Atom(vec![0xD800]),
                TextElement::CharClass(CharacterClass::new(vec![CharacterRange::range(0xDC00, 0xDC02)], false)),
            ])
        );

        // Two leads apart: three alternatives.
        let mut sets = UnicodeClassRanges::new();
        sets.add_range(0x10010, 0x10820);
        match unicode_ranges_atom(sets, false, false) {
            RegExpTree::Disjunction(alternatives) => {
                assert_eq!(alternatives.len(), 3);
                assert_eq!(
                    alternatives[1],
                    RegExpTree::Text(vec![
                        TextElement::Atom(vec![0xD801]),
                        TextElement::CharClass(CharacterClass::new(vec![CharacterRange::trail_surrogate()], false)),
                    ])
                );
            }
            tree => panic!("unexpected tree {:?}", tree),
        }
    }

    #[test]
    fn negated_empty_class() {
        match unicode_ranges_atom(UnicodeClassRanges::new(), true, false) {
            RegExpTree::Disjunction(alternatives) => {
                assert_eq!(alternatives.len(), 4);
                assert_eq!(
                    alternatives[0],
                    class_atom(
                        vec![CharacterRange::lead_surrogate(), CharacterRange::trail_surrogate()],
                        true
                    )
                );
            }
            tree => panic!("unexpected tree {:?}", tree),
        }
    }

    #[test]
    fn dot_atoms_have_four_alternatives() {
        assert_matches!(unicode_everything_atom(), RegExpTree::Disjunction(ref a) if a.len() == 4);
        assert_matches!(unicode_dot_all_atom(), RegExpTree::Disjunction(ref a) if a.len() == 4);
    }

    #[test]
    fn back_reference_guard() {
        let backref = RegExpTree::BackReference {
            index: Some(1),
            name: None,
        };
        assert_eq!(
            unicode_back_reference_atom(backref.clone()),
            RegExpTree::Alternative(vec![
                backref,
                RegExpTree::Assertion(AssertionType::NotInSurrogatePair)
            ])
        );
    }
}
