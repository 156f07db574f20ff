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

//! Code unit and code point ranges, and the set operations character
//! classes are built from.
//!
//! A class is a list of [`CharacterRange`]s over UTF-16 code units. In
//! Unicode mode the parser keeps four lists instead (see
//! [`UnicodeClassRanges`]): plain BMP ranges, lead surrogates, trail
//! surrogates and supplementary [`WideCharRange`]s, so that each can be
//! turned into the right code unit sequence later.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::{max, min};

use crate::unicode::{
    fold_case_orbit, is_lead_surrogate, is_trail_surrogate, to_upper_case, LEAD_SURROGATE_MAX,
    LEAD_SURROGATE_MIN, NON_BMP_MAX, NON_BMP_MIN, TRAIL_SURROGATE_MAX, TRAIL_SURROGATE_MIN,
    UTF16_MAX,
};

/// Largest Latin-1 code unit.
pub const MAX_ONE_BYTE_CHAR_CODE: u16 = 0xFF;
/// Largest code unit.
pub const MAX_UTF16_CODE_UNIT: u16 = 0xFFFF;
const MAX_ASCII_CHAR_CODE: u16 = 0x7F;

/// An inclusive range with `u32` bounds, implemented by both range types
/// so negation can be shared.
pub trait CodeRange: Copy {
    /// First value in the range.
    fn from(&self) -> u32;
    /// Last value in the range.
    fn to(&self) -> u32;
    /// Build a range from bounds that fit the implementing type.
    fn between(from: u32, to: u32) -> Self;
}

/// An inclusive range of UTF-16 code units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterRange {
    from: u16,
    to: u16,
}

impl CharacterRange {
    /// The range holding just `value`.
    pub fn singleton(value: u16) -> CharacterRange {
        CharacterRange {
            from: value,
            to: value,
        }
    }

    /// The range `from..=to`.
    pub fn range(from: u16, to: u16) -> CharacterRange {
        debug_assert!(from <= to, "inverted range {:#x}-{:#x}", from, to);
        CharacterRange { from, to }
    }

    /// Every code unit.
    pub fn everything() -> CharacterRange {
        CharacterRange::range(0, MAX_UTF16_CODE_UNIT)
    }

    /// All lead surrogates.
    pub fn lead_surrogate() -> CharacterRange {
        CharacterRange::range(LEAD_SURROGATE_MIN, LEAD_SURROGATE_MAX)
    }

    /// All trail surrogates.
    pub fn trail_surrogate() -> CharacterRange {
        CharacterRange::range(TRAIL_SURROGATE_MIN, TRAIL_SURROGATE_MAX)
    }

    pub fn from(&self) -> u16 {
        self.from
    }

    pub fn to(&self) -> u16 {
        self.to
    }

    pub fn contains(&self, c: u16) -> bool {
        self.from <= c && c <= self.to
    }

    pub fn is_singleton(&self) -> bool {
        self.from == self.to
    }

    /// Whether the range covers `0..=max`.
    pub fn is_everything(&self, max: u16) -> bool {
        self.from == 0 && self.to >= max
    }

    /// Append to `ranges` the code units that are case-equivalent to some
    /// code unit of this range and not already covered by `ranges`.
    ///
    /// With `is_ascii` (a Latin-1 subject) nothing above 0xFF is added, and
    /// the scan is clamped to Latin-1 unless the range holds a character
    /// whose equivalents fall inside Latin-1.
    pub fn add_case_equivalents(&self, is_ascii: bool, unicode: bool, ranges: &mut Vec<CharacterRange>) {
        let bottom = self.from;
        let mut top = self.to;
        if is_ascii && !range_contains_latin1_equivalents(*self, unicode) {
            if bottom > MAX_ONE_BYTE_CHAR_CODE {
                return;
            }
            top = min(top, MAX_ONE_BYTE_CHAR_CODE);
        }

        for c in bottom..=top {
            for other in case_independent_letters(c, is_ascii, unicode) {
                if other == c {
                    continue;
                }
                let mut found = false;
                for range in ranges.iter_mut() {
                    if range.contains(other) {
                        found = true;
                        break;
                    } else if u32::from(other) + 1 == u32::from(range.from) {
                        range.from = other;
                        found = true;
                        break;
                    } else if u32::from(other) == u32::from(range.to) + 1 {
                        range.to = other;
                        found = true;
                        break;
                    }
                }
                if !found {
                    ranges.push(CharacterRange::singleton(other));
                }
            }
        }
    }
}

impl CodeRange for CharacterRange {
    fn from(&self) -> u32 {
        u32::from(self.from)
    }

    fn to(&self) -> u32 {
        u32::from(self.to)
    }

    fn between(from: u32, to: u32) -> CharacterRange {
        CharacterRange::range(from as u16, to as u16)
    }
}

/// An inclusive range of code points, used for supplementary characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WideCharRange {
    from: u32,
    to: u32,
}

impl WideCharRange {
    pub fn singleton(value: u32) -> WideCharRange {
        WideCharRange {
            from: value,
            to: value,
        }
    }

    pub fn range(from: u32, to: u32) -> WideCharRange {
        debug_assert!(from <= to, "inverted range {:#x}-{:#x}", from, to);
        WideCharRange { from, to }
    }

    /// All supplementary code points.
    pub fn non_bmp() -> WideCharRange {
        WideCharRange::range(NON_BMP_MIN, NON_BMP_MAX)
    }
}

impl CodeRange for WideCharRange {
    fn from(&self) -> u32 {
        self.from
    }

    fn to(&self) -> u32 {
        self.to
    }

    fn between(from: u32, to: u32) -> WideCharRange {
        WideCharRange::range(from, to)
    }
}

// Class tables, as sorted inclusive pairs.

const SPACE_RANGES: &[(u16, u16)] = &[
    (0x09, 0x0D),
    (0x20, 0x20),
    (0xA0, 0xA0),
    (0x1680, 0x1680),
    (0x2000, 0x200A),
    (0x2028, 0x2029),
    (0x202F, 0x202F),
    (0x205F, 0x205F),
    (0x3000, 0x3000),
    (0xFEFF, 0xFEFF),
];
const SPACE_AND_SURROGATE_RANGES: &[(u16, u16)] = &[
    (0x09, 0x0D),
    (0x20, 0x20),
    (0xA0, 0xA0),
    (0x1680, 0x1680),
    (0x2000, 0x200A),
    (0x2028, 0x2029),
    (0x202F, 0x202F),
    (0x205F, 0x205F),
    (0x3000, 0x3000),
    (0xD800, 0xDFFF),
    (0xFEFF, 0xFEFF),
];
const WORD_RANGES: &[(u16, u16)] = &[(0x30, 0x39), (0x41, 0x5A), (0x5F, 0x5F), (0x61, 0x7A)];
const WORD_AND_SURROGATE_RANGES: &[(u16, u16)] = &[
    (0x30, 0x39),
    (0x41, 0x5A),
    (0x5F, 0x5F),
    (0x61, 0x7A),
    (0xD800, 0xDFFF),
];
// U+017F and U+212A fold to 's' and 'k'.
const IGNORE_CASE_WORD_RANGES: &[(u16, u16)] = &[
    (0x30, 0x39),
    (0x41, 0x5A),
    (0x5F, 0x5F),
    (0x61, 0x7A),
    (0x17F, 0x17F),
    (0x212A, 0x212A),
];
const IGNORE_CASE_WORD_AND_SURROGATE_RANGES: &[(u16, u16)] = &[
    (0x30, 0x39),
    (0x41, 0x5A),
    (0x5F, 0x5F),
    (0x61, 0x7A),
    (0x17F, 0x17F),
    (0x212A, 0x212A),
    (0xD800, 0xDFFF),
];
const DIGIT_RANGES: &[(u16, u16)] = &[(0x30, 0x39)];
const DIGIT_AND_SURROGATE_RANGES: &[(u16, u16)] = &[(0x30, 0x39), (0xD800, 0xDFFF)];
const LINE_TERMINATOR_RANGES: &[(u16, u16)] = &[(0x0A, 0x0A), (0x0D, 0x0D), (0x2028, 0x2029)];

// Characters above Latin-1 with a case equivalent inside it.
const LATIN1_EQUIVALENTS: &[u16] = &[0x178, 0x39C, 0x3BC];
const UNICODE_LATIN1_EQUIVALENTS: &[u16] = &[0x17F, 0x1E9E, 0x212A, 0x212B];

/// The standard class escapes `\d \D \s \S \w \W`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassEscape {
    Digit,
    NotDigit,
    Space,
    NotSpace,
    Word,
    NotWord,
}

impl ClassEscape {
    /// The escape named by the letter after a backslash, if any.
    pub fn from_letter(c: u32) -> Option<ClassEscape> {
        match char::from_u32(c)? {
            'd' => Some(ClassEscape::Digit),
            'D' => Some(ClassEscape::NotDigit),
            's' => Some(ClassEscape::Space),
            'S' => Some(ClassEscape::NotSpace),
            'w' => Some(ClassEscape::Word),
            'W' => Some(ClassEscape::NotWord),
            _ => None,
        }
    }

    pub fn is_negated(self) -> bool {
        matches!(
            self,
            ClassEscape::NotDigit | ClassEscape::NotSpace | ClassEscape::NotWord
        )
    }
}

/// Append the ranges of a class table.
pub fn add_class(table: &[(u16, u16)], ranges: &mut Vec<CharacterRange>) {
    ranges.extend(
        table
            .iter()
            .map(|&(from, to)| CharacterRange::range(from, to)),
    );
}

/// Append the complement of a class table over all code units.
pub fn add_class_negated(table: &[(u16, u16)], ranges: &mut Vec<CharacterRange>) {
    let mut last: u32 = 0;
    for &(from, to) in table {
        if u32::from(from) > last {
            ranges.push(CharacterRange::range(last as u16, from - 1));
        }
        last = u32::from(to) + 1;
    }
    if last <= u32::from(MAX_UTF16_CODE_UNIT) {
        ranges.push(CharacterRange::range(last as u16, MAX_UTF16_CODE_UNIT));
    }
}

/// Append the code units matched by a class escape outside Unicode mode.
pub fn add_class_escape(escape: ClassEscape, ranges: &mut Vec<CharacterRange>) {
    match escape {
        ClassEscape::Digit => add_class(DIGIT_RANGES, ranges),
        ClassEscape::NotDigit => add_class_negated(DIGIT_RANGES, ranges),
        ClassEscape::Space => add_class(SPACE_RANGES, ranges),
        ClassEscape::NotSpace => add_class_negated(SPACE_RANGES, ranges),
        ClassEscape::Word => add_class(WORD_RANGES, ranges),
        ClassEscape::NotWord => add_class_negated(WORD_RANGES, ranges),
    }
}

/// Append the BMP non-surrogate code units matched by a class escape in
/// Unicode mode. Negated escapes leave out surrogates, which the caller
/// handles separately.
pub fn add_class_escape_unicode(escape: ClassEscape, ranges: &mut Vec<CharacterRange>, ignore_case: bool) {
    match escape {
        ClassEscape::Digit | ClassEscape::Space => add_class_escape(escape, ranges),
        ClassEscape::NotDigit => add_class_negated(DIGIT_AND_SURROGATE_RANGES, ranges),
        ClassEscape::NotSpace => add_class_negated(SPACE_AND_SURROGATE_RANGES, ranges),
        ClassEscape::Word if ignore_case => add_class(IGNORE_CASE_WORD_RANGES, ranges),
        ClassEscape::Word => add_class(WORD_RANGES, ranges),
        ClassEscape::NotWord if ignore_case => {
            add_class_negated(IGNORE_CASE_WORD_AND_SURROGATE_RANGES, ranges)
        }
        ClassEscape::NotWord => add_class_negated(WORD_AND_SURROGATE_RANGES, ranges),
    }
}

/// Append the code units matched by `.` outside Unicode mode.
pub fn add_dot_ranges(ranges: &mut Vec<CharacterRange>, dot_all: bool) {
    if dot_all {
        ranges.push(CharacterRange::everything());
    } else {
        add_class_negated(LINE_TERMINATOR_RANGES, ranges);
    }
}

/// Whether `ranges` is exactly `table`.
pub fn compare_ranges(ranges: &[CharacterRange], table: &[(u16, u16)]) -> bool {
    ranges.len() == table.len()
        && ranges
            .iter()
            .zip(table)
            .all(|(range, &(from, to))| range.from == from && range.to == to)
}

/// Whether `ranges` is exactly the complement of `table`.
pub fn compare_inverse_ranges(ranges: &[CharacterRange], table: &[(u16, u16)]) -> bool {
    let mut inverse = Vec::new();
    add_class_negated(table, &mut inverse);
    ranges == &inverse[..]
}

/// The `\s` table, for comparing against parsed classes.
pub fn space_table() -> &'static [(u16, u16)] {
    SPACE_RANGES
}

/// The `\w` table, for comparing against parsed classes.
pub fn word_table() -> &'static [(u16, u16)] {
    WORD_RANGES
}

/// The `\d` table, for comparing against parsed classes.
pub fn digit_table() -> &'static [(u16, u16)] {
    DIGIT_RANGES
}

/// Whether `range` contains a character above Latin-1 whose case
/// equivalents fall inside Latin-1.
pub fn range_contains_latin1_equivalents(range: CharacterRange, unicode: bool) -> bool {
    let extra: &[u16] = if unicode { UNICODE_LATIN1_EQUIVALENTS } else { &[] };
    LATIN1_EQUIVALENTS
        .iter()
        .chain(extra)
        .any(|&c| range.contains(c))
}

pub fn ranges_contain_latin1_equivalents(ranges: &[CharacterRange], unicode: bool) -> bool {
    ranges
        .iter()
        .any(|&range| range_contains_latin1_equivalents(range, unicode))
}

/// The code units matching `character` case-insensitively, `character`
/// included.
///
/// In Unicode mode equivalence is simple case folding. Otherwise two code
/// units are equivalent when they upper-case to the same code unit, except
/// that a non-ASCII character never matches an ASCII one. With
/// `ascii_subject` (outside Unicode mode) results above 0xFF are dropped.
pub fn case_independent_letters(character: u16, ascii_subject: bool, unicode: bool) -> Vec<u16> {
    let choices: Vec<u16> = if unicode {
        fold_case_orbit(u32::from(character))
            .into_iter()
            .filter(|&c| c <= UTF16_MAX)
            .map(|c| c as u16)
            .collect()
    } else {
        let upper = to_upper_case(character);
        let mut others: Vec<u16> = fold_case_orbit(u32::from(character))
            .into_iter()
            .chain(fold_case_orbit(u32::from(upper)))
            .filter(|&c| c <= UTF16_MAX)
            .map(|c| c as u16)
            .filter(|&c| c != character && c != upper && to_upper_case(c) == upper)
            .collect();
        if upper <= MAX_ASCII_CHAR_CODE {
            if character > MAX_ASCII_CHAR_CODE {
                return vec![character];
            }
            for other in others.iter_mut() {
                if *other > MAX_ASCII_CHAR_CODE {
                    *other = character;
                }
            }
        }
        let mut choices = vec![character, upper];
        choices.append(&mut others);
        choices
    };

    let mut letters = Vec::with_capacity(choices.len());
    for c in choices {
        if ascii_subject && !unicode && c > MAX_ONE_BYTE_CHAR_CODE {
            continue;
        }
        if !letters.contains(&c) {
            letters.push(c);
        }
    }
    letters
}

/// Whether `ranges` is sorted with no overlapping or adjacent ranges.
pub fn is_canonical(ranges: &[CharacterRange]) -> bool {
    ranges
        .windows(2)
        .all(|pair| u32::from(pair[0].to) + 1 < u32::from(pair[1].from))
}

/// Merge `insert` into the canonical prefix `list[..count]`, returning the
/// new prefix length.
///
/// `list` must have room for one more element past `count`; the element at
/// `count` may be overwritten.
pub fn insert_range_in_canonical_list(list: &mut [CharacterRange], count: usize, insert: CharacterRange) -> usize {
    let from = u32::from(insert.from);
    let to = u32::from(insert.to);
    let mut start_pos = 0;
    let mut end_pos = count;
    for i in (0..count).rev() {
        let current = list[i];
        if u32::from(current.from) > to + 1 {
            end_pos = i;
        } else if u32::from(current.to) + 1 < from {
            start_pos = i + 1;
            break;
        }
    }

    // start_pos..end_pos are the ranges that touch or overlap `insert`.
    if start_pos == end_pos {
        if start_pos < count {
            list.copy_within(start_pos..count, start_pos + 1);
        }
        list[start_pos] = insert;
        return count + 1;
    }
    if start_pos + 1 == end_pos {
        let to_replace = list[start_pos];
        list[start_pos] = CharacterRange::range(
            min(to_replace.from, insert.from),
            max(to_replace.to, insert.to),
        );
        return count;
    }

    let new_from = min(list[start_pos].from, insert.from);
    let new_to = max(list[end_pos - 1].to, insert.to);
    if end_pos < count {
        list.copy_within(end_pos..count, start_pos + 1);
    }
    list[start_pos] = CharacterRange::range(new_from, new_to);
    count - (end_pos - start_pos) + 1
}

/// Sort and merge `ranges` in place so that it is canonical.
pub fn canonicalize(ranges: &mut Vec<CharacterRange>) {
    let n = ranges.len();
    if n <= 1 {
        return;
    }

    // Skip the prefix that is already canonical.
    let mut max_to = u32::from(ranges[0].to);
    let mut i = 1;
    while i < n {
        let current = ranges[i];
        if u32::from(current.from) <= max_to + 1 {
            break;
        }
        max_to = u32::from(current.to);
        i += 1;
    }
    if i == n {
        return;
    }

    let mut num_canonical = i;
    for read in i..n {
        let insert = ranges[read];
        num_canonical = insert_range_in_canonical_list(ranges, num_canonical, insert);
    }
    ranges.truncate(num_canonical);
    debug_assert!(is_canonical(ranges));
}

/// The complement of canonical `ranges` over all code units.
pub fn negate(ranges: &[CharacterRange]) -> Vec<CharacterRange> {
    debug_assert!(is_canonical(ranges));
    let mut negated = Vec::with_capacity(ranges.len() + 1);
    let mut from: u32 = 0;
    for range in ranges {
        if u32::from(range.from) > from {
            negated.push(CharacterRange::range(from as u16, range.from - 1));
        }
        from = u32::from(range.to) + 1;
    }
    if from <= u32::from(MAX_UTF16_CODE_UNIT) {
        negated.push(CharacterRange::range(from as u16, MAX_UTF16_CODE_UNIT));
    }
    negated
}

/// The part of `full_range` not covered by any of `ranges`, which may be
/// in any order. The result is sorted.
pub fn negate_unicode_ranges<R: CodeRange>(ranges: &[R], full_range: R) -> Vec<R> {
    let mut remaining = vec![full_range];
    for range in ranges {
        let (from, to) = (range.from(), range.to());
        let mut i = 0;
        while i < remaining.len() {
            let (rest_from, rest_to) = (remaining[i].from(), remaining[i].to());
            if from <= rest_from && rest_to <= to {
                remaining.remove(i);
                continue;
            }
            if rest_from < from && to < rest_to {
                remaining[i] = R::between(rest_from, from - 1);
                remaining.insert(i + 1, R::between(to + 1, rest_to));
                i += 2;
                continue;
            }
            if from <= rest_from && rest_from <= to {
                remaining[i] = R::between(to + 1, rest_to);
            } else if from <= rest_to && rest_to <= to {
                remaining[i] = R::between(rest_from, from - 1);
            }
            i += 1;
        }
    }
    remaining
}

/// Code unit and code point ranges of a Unicode-mode class, split by
/// kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnicodeClassRanges {
    /// BMP code units that are not surrogates.
    pub ranges: Vec<CharacterRange>,
    /// Lead surrogate code units.
    pub lead_ranges: Vec<CharacterRange>,
    /// Trail surrogate code units.
    pub trail_ranges: Vec<CharacterRange>,
    /// Supplementary code points.
    pub wide_ranges: Vec<WideCharRange>,
}

impl UnicodeClassRanges {
    pub fn new() -> UnicodeClassRanges {
        UnicodeClassRanges::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
            && self.lead_ranges.is_empty()
            && self.trail_ranges.is_empty()
            && self.wide_ranges.is_empty()
    }

    /// Add one code point.
    pub fn add_char(&mut self, c: u32) {
        if c > UTF16_MAX {
            self.wide_ranges.push(WideCharRange::singleton(c));
        } else if is_lead_surrogate(c) {
            self.lead_ranges.push(CharacterRange::singleton(c as u16));
        } else if is_trail_surrogate(c) {
            self.trail_ranges.push(CharacterRange::singleton(c as u16));
        } else {
            self.ranges.push(CharacterRange::singleton(c as u16));
        }
    }

    /// Add the code points `first..=last`, split across the four lists.
    pub fn add_range(&mut self, first: u32, last: u32) {
        debug_assert!(first <= last && last <= NON_BMP_MAX);
        let lead_min = u32::from(LEAD_SURROGATE_MIN);
        let lead_max = u32::from(LEAD_SURROGATE_MAX);
        let trail_min = u32::from(TRAIL_SURROGATE_MIN);
        let trail_max = u32::from(TRAIL_SURROGATE_MAX);
        let unit = |from: u32, to: u32| CharacterRange::range(from as u16, to as u16);

        let mut first = first;
        if first < lead_min {
            if last < lead_min {
                self.ranges.push(unit(first, last));
                return;
            }
            self.ranges.push(unit(first, lead_min - 1));
            first = lead_min;
        }
        if first <= lead_max {
            if last <= lead_max {
                self.lead_ranges.push(unit(first, last));
                return;
            }
            self.lead_ranges.push(unit(first, lead_max));
            first = trail_min;
        }
        if first <= trail_max {
            if last <= trail_max {
                self.trail_ranges.push(unit(first, last));
                return;
            }
            self.trail_ranges.push(unit(first, trail_max));
            first = trail_max + 1;
        }
        if first <= UTF16_MAX {
            if last <= UTF16_MAX {
                self.ranges.push(unit(first, last));
                return;
            }
            self.ranges.push(unit(first, UTF16_MAX));
            first = NON_BMP_MIN;
        }
        self.wide_ranges.push(WideCharRange::range(first, last));
    }

    /// Add a class escape. Negated escapes also cover every surrogate and
    /// supplementary code point.
    pub fn add_class_escape(&mut self, escape: ClassEscape, ignore_case: bool) {
        add_class_escape_unicode(escape, &mut self.ranges, ignore_case);
        if escape.is_negated() {
            self.lead_ranges.push(CharacterRange::lead_surrogate());
            self.trail_ranges.push(CharacterRange::trail_surrogate());
            self.wide_ranges.push(WideCharRange::non_bmp());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bit_set::BitSet;
    use quickcheck::{Arbitrary, Gen};

    fn r(from: u16, to: u16) -> CharacterRange {
        CharacterRange::range(from, to)
    }

    #[derive(Clone, Debug)]
    struct SmallRanges(Vec<CharacterRange>);

    impl Arbitrary for SmallRanges {
        fn arbitrary(g: &mut Gen) -> Self {
            let pairs = Vec::<(u8, u8)>::arbitrary(g);
            SmallRanges(
                pairs
                    .into_iter()
                    .map(|(a, b)| r(u16::from(a.min(b)), u16::from(a.max(b))))
                    .collect(),
            )
        }
    }

    fn coverage<R: CodeRange>(ranges: &[R]) -> BitSet {
        let mut set = BitSet::new();
        for range in ranges {
            for c in range.from()..=range.to() {
                set.insert(c as usize);
            }
        }
        set
    }

    #[test]
    fn canonicalize_merges() {
        let mut ranges = vec![r(10, 20), r(0, 5), r(6, 8), r(15, 30), r(40, 40)];
        canonicalize(&mut ranges);
        assert_eq!(ranges, vec![r(0, 8), r(10, 30), r(40, 40)]);
        assert!(is_canonical(&ranges));
    }

    #[test]
    fn canonicalize_keeps_canonical_input() {
        let mut ranges = vec![r(0, 1), r(3, 4)];
        canonicalize(&mut ranges);
        assert_eq!(ranges, vec![r(0, 1), r(3, 4)]);
        assert!(!is_canonical(&[r(0, 1), r(2, 4)]));
        assert!(!is_canonical(&[r(3, 4), r(0, 1)]));
    }

    #[test]
    fn insert_spanning_several() {
        let mut list = vec![r(0, 1), r(4, 5), r(8, 9), r(12, 13), r(0, 0)];
        let count = insert_range_in_canonical_list(&mut list, 4, r(3, 10));
        assert_eq!(count, 3);
        assert_eq!(&list[..count], &[r(0, 1), r(3, 10), r(12, 13)]);
    }

    #[test]
    fn insert_in_gap() {
        let mut list = vec![r(0, 1), r(8, 9), r(0, 0)];
        let count = insert_range_in_canonical_list(&mut list, 2, r(4, 5));
        assert_eq!(count, 3);
        assert_eq!(list, vec![r(0, 1), r(4, 5), r(8, 9)]);
    }

    #[test]
    fn negate_bmp() {
        assert_eq!(negate(&[r(0x61, 0x7A)]), vec![r(0, 0x60), r(0x7B, 0xFFFF)]);
        assert_eq!(negate(&[]), vec![CharacterRange::everything()]);
        assert!(negate(&[CharacterRange::everything()]).is_empty());
    }

    #[test]
    fn negate_generic() {
        let negated = negate_unicode_ranges(
            &[WideCharRange::range(0x10010, 0x10020), WideCharRange::singleton(0x10000)],
            WideCharRange::non_bmp(),
        );
        assert_eq!(
            negated,
            vec![
                WideCharRange::range(0x10001, 0x1000F),
                WideCharRange::range(0x10021, 0x10FFFF)
            ]
        );
        let lead = negate_unicode_ranges(&[CharacterRange::lead_surrogate()], CharacterRange::lead_surrogate());
        assert!(lead.is_empty());
    }

    #[test]
    fn class_tables() {
        let mut ranges = Vec::new();
        add_class_escape(ClassEscape::NotDigit, &mut ranges);
        assert_eq!(ranges, vec![r(0, 0x2F), r(0x3A, 0xFFFF)]);
        assert!(compare_inverse_ranges(&ranges, digit_table()));
        assert!(!compare_ranges(&ranges, digit_table()));

        let mut ranges = Vec::new();
        add_class_escape(ClassEscape::Space, &mut ranges);
        assert!(compare_ranges(&ranges, space_table()));

        let mut ranges = Vec::new();
        add_dot_ranges(&mut ranges, false);
        assert_eq!(ranges, vec![r(0, 9), r(0xB, 0xC), r(0xE, 0x2027), r(0x202A, 0xFFFF)]);
    }

    #[test]
    fn unicode_class_escapes_skip_surrogates() {
        let mut sets = UnicodeClassRanges::new();
        sets.add_class_escape(ClassEscape::NotWord, false);
        assert!(!sets.ranges.iter().any(|range| range.contains(0xD800)));
        assert_eq!(sets.lead_ranges, vec![CharacterRange::lead_surrogate()]);
        assert_eq!(sets.trail_ranges, vec![CharacterRange::trail_surrogate()]);
        assert_eq!(sets.wide_ranges, vec![WideCharRange::non_bmp()]);

        let mut ranges = Vec::new();
        add_class_escape_unicode(ClassEscape::Word, &mut ranges, true);
        assert!(ranges.contains(&CharacterRange::singleton(0x17F)));
        assert!(ranges.contains(&CharacterRange::singleton(0x212A)));
        assert!(word_table().len() < ranges.len());
    }

    #[test]
    fn add_range_splits_by_kind() {
        let mut sets = UnicodeClassRanges::new();
        sets.add_range(0xD000, 0x10010);
        assert_eq!(sets.ranges, vec![r(0xD000, 0xD7FF), r(0xE000, 0xFFFF)]);
        assert_eq!(sets.lead_ranges, vec![CharacterRange::lead_surrogate()]);
        assert_eq!(sets.trail_ranges, vec![CharacterRange::trail_surrogate()]);
        assert_eq!(sets.wide_ranges, vec![WideCharRange::range(0x10000, 0x10010)]);

        let mut sets = UnicodeClassRanges::new();
        sets.add_range(0xDC10, 0xDC20);
        assert!(sets.ranges.is_empty() && sets.lead_ranges.is_empty());
        assert_eq!(sets.trail_ranges, vec![r(0xDC10, 0xDC20)]);

        let mut sets = UnicodeClassRanges::new();
        sets.add_char(0x1F600);
        sets.add_char(0xD83D);
        sets.add_char('a' as u32);
        assert_eq!(sets.wide_ranges, vec![WideCharRange::singleton(0x1F600)]);
        assert_eq!(sets.lead_ranges, vec![CharacterRange::singleton(0xD83D)]);
        assert_eq!(sets.ranges, vec![CharacterRange::singleton(0x61)]);
    }

    #[test]
    fn letters_non_unicode() {
        assert_eq!(case_independent_letters('a' as u16, false, false), vec![0x61, 0x41]);
        assert_eq!(case_independent_letters('1' as u16, false, false), vec![0x31]);
        // Non-ASCII characters never match ASCII ones.
        assert_eq!(case_independent_letters(0x17F, false, false), vec![0x17F]);
        assert_eq!(case_independent_letters('k' as u16, false, false), vec![0x6B, 0x4B]);
        // U+00B5 and U+03BC both upper-case to U+039C.
        assert_eq!(case_independent_letters(0xB5, false, false), vec![0xB5, 0x39C, 0x3BC]);
        assert_eq!(case_independent_letters(0xB5, true, false), vec![0xB5]);
    }

    #[test]
    fn letters_unicode() {
        assert_eq!(case_independent_letters('k' as u16, false, true), vec![0x6B, 0x4B, 0x212A]);
        assert_eq!(case_independent_letters(0x17F, false, true), vec![0x17F, 0x53, 0x73]);
    }

    #[test]
    fn case_equivalents() {
        let mut ranges = vec![r(0x61, 0x63)];
        r(0x61, 0x63).add_case_equivalents(false, false, &mut ranges);
        canonicalize(&mut ranges);
        assert_eq!(ranges, vec![r(0x41, 0x43), r(0x61, 0x63)]);

        let mut ranges = vec![r(0x6B, 0x6B)];
        r(0x6B, 0x6B).add_case_equivalents(false, true, &mut ranges);
        canonicalize(&mut ranges);
        assert_eq!(ranges, vec![r(0x4B, 0x4B), r(0x6B, 0x6B), r(0x212A, 0x212A)]);

        // Outside Latin-1 with a Latin-1 subject there is nothing to add.
        let mut ranges = vec![r(0x400, 0x410)];
        r(0x400, 0x410).add_case_equivalents(true, false, &mut ranges);
        assert_eq!(ranges, vec![r(0x400, 0x410)]);

        // U+0178 upper-cases from U+00FF.
        let mut ranges = vec![r(0x178, 0x178)];
        r(0x178, 0x178).add_case_equivalents(true, false, &mut ranges);
        assert_eq!(ranges, vec![r(0x178, 0x178), r(0xFF, 0xFF)]);
    }

    #[test]
    fn latin1_equivalents() {
        assert!(range_contains_latin1_equivalents(r(0x100, 0x200), false));
        assert!(!range_contains_latin1_equivalents(r(0x200, 0x300), false));
        assert!(!range_contains_latin1_equivalents(r(0x2100, 0x2200), false));
        assert!(range_contains_latin1_equivalents(r(0x2100, 0x2200), true));
        assert!(ranges_contain_latin1_equivalents(&[r(0, 1), r(0x39C, 0x39C)], false));
    }

    quickcheck! {
        fn canonicalize_is_idempotent(ranges: SmallRanges) -> bool {
            let mut once = ranges.0;
            canonicalize(&mut once);
            let mut twice = once.clone();
            canonicalize(&mut twice);
            is_canonical(&once) && once == twice
        }

        fn canonicalize_preserves_coverage(ranges: SmallRanges) -> bool {
            let mut canonical = ranges.0.clone();
            canonicalize(&mut canonical);
            coverage(&ranges.0) == coverage(&canonical)
        }

        fn negation_is_an_involution(ranges: SmallRanges) -> bool {
            let domain = r(0, 0xFF);
            let twice = negate_unicode_ranges(&negate_unicode_ranges(&ranges.0, domain), domain);
            let mut canonical = ranges.0;
            canonicalize(&mut canonical);
            twice == canonical
        }

        fn negate_matches_generic_negation(ranges: SmallRanges) -> bool {
            let mut canonical = ranges.0;
            canonicalize(&mut canonical);
            negate(&canonical) == negate_unicode_ranges(&canonical, CharacterRange::everything())
        }

        fn negation_partitions_wide_domain(points: Vec<(u8, u8)>) -> bool {
            let ranges: Vec<WideCharRange> = points
                .into_iter()
                .map(|(a, b)| {
                    WideCharRange::range(
                        NON_BMP_MIN + u32::from(a.min(b)),
                        NON_BMP_MIN + u32::from(a.max(b)),
                    )
                })
                .collect();
            let domain = WideCharRange::range(NON_BMP_MIN, NON_BMP_MIN + 0xFF);
            let negated = negate_unicode_ranges(&ranges, domain);
            let covered = coverage(&ranges);
            let uncovered = coverage(&negated);
            covered.is_disjoint(&uncovered) && covered.union(&uncovered).count() == 0x100
        }
    }
}
