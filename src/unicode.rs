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

//! Unicode queries used while parsing: surrogate arithmetic, case
//! folding, property lookup and identifier classification.
//!
//! The tables come from `regex-syntax`, which works on Unicode scalar
//! values. Surrogate code points are handled here explicitly where the
//! pattern language needs them.

use alloc::vec::Vec;
use alloc::{format, vec};
use core::cmp::Ordering;

use regex_syntax::hir::{Class, ClassUnicode, ClassUnicodeRange, HirKind, Literal};

use crate::ranges::{CodeRange, WideCharRange};

/// First lead (high) surrogate code unit.
pub const LEAD_SURROGATE_MIN: u16 = 0xD800;
/// Last lead (high) surrogate code unit.
pub const LEAD_SURROGATE_MAX: u16 = 0xDBFF;
/// First trail (low) surrogate code unit.
pub const TRAIL_SURROGATE_MIN: u16 = 0xDC00;
/// Last trail (low) surrogate code unit.
pub const TRAIL_SURROGATE_MAX: u16 = 0xDFFF;
/// Largest code point representable in one code unit.
pub const UTF16_MAX: u32 = 0xFFFF;
/// First supplementary code point.
pub const NON_BMP_MIN: u32 = 0x10000;
/// Last code point.
pub const NON_BMP_MAX: u32 = 0x10FFFF;

const ZWNJ: u32 = 0x200C;
const ZWJ: u32 = 0x200D;

/// Whether `c` is a lead surrogate code unit.
pub fn is_lead_surrogate(c: u32) -> bool {
    (u32::from(LEAD_SURROGATE_MIN)..=u32::from(LEAD_SURROGATE_MAX)).contains(&c)
}

/// Whether `c` is a trail surrogate code unit.
pub fn is_trail_surrogate(c: u32) -> bool {
    (u32::from(TRAIL_SURROGATE_MIN)..=u32::from(TRAIL_SURROGATE_MAX)).contains(&c)
}

fn is_surrogate(c: u32) -> bool {
    (u32::from(LEAD_SURROGATE_MIN)..=u32::from(TRAIL_SURROGATE_MAX)).contains(&c)
}

/// Split a supplementary code point into its surrogate pair.
pub fn utf16_encode(c: u32) -> (u16, u16) {
    debug_assert!((NON_BMP_MIN..=NON_BMP_MAX).contains(&c));
    let offset = c - NON_BMP_MIN;
    (
        LEAD_SURROGATE_MIN + (offset >> 10) as u16,
        TRAIL_SURROGATE_MIN + (offset & 0x3FF) as u16,
    )
}

/// Join a surrogate pair into its code point.
pub fn utf16_decode(lead: u32, trail: u32) -> u32 {
    debug_assert!(is_lead_surrogate(lead) && is_trail_surrogate(trail));
    ((lead - u32::from(LEAD_SURROGATE_MIN)) << 10) + (trail - u32::from(TRAIL_SURROGATE_MIN))
        + NON_BMP_MIN
}

/// The single code unit upper case mapping of `c`, or `c` itself when
/// the mapping is not exactly one BMP character.
pub fn to_upper_case(c: u16) -> u16 {
    let Some(ch) = char::from_u32(u32::from(c)) else {
        return c;
    };
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if u as u32 <= UTF16_MAX => u as u32 as u16,
        _ => c,
    }
}

/// The code points equivalent to `c` under simple case folding, with `c`
/// first and the rest ascending.
pub fn fold_case_orbit(c: u32) -> Vec<u32> {
    let mut orbit = vec![c];
    let Some(ch) = char::from_u32(c) else {
        return orbit;
    };
    let mut class = ClassUnicode::new(core::iter::once(ClassUnicodeRange::new(ch, ch)));
    class.case_fold_simple();
    for range in class.ranges() {
        for other in range.start() as u32..=range.end() as u32 {
            if other != c {
                orbit.push(other);
            }
        }
    }
    orbit
}

fn to_class(ranges: &[WideCharRange]) -> ClassUnicode {
    ClassUnicode::new(ranges.iter().filter_map(|range| {
        let start = if is_surrogate(range.from()) {
            u32::from(TRAIL_SURROGATE_MAX) + 1
        } else {
            range.from()
        };
        let end = if is_surrogate(range.to()) {
            u32::from(LEAD_SURROGATE_MIN) - 1
        } else {
            range.to()
        };
        if start > end {
            return None;
        }
        Some(ClassUnicodeRange::new(
            char::from_u32(start)?,
            char::from_u32(end)?,
        ))
    }))
}

fn class_ranges(class: &ClassUnicode) -> Vec<WideCharRange> {
    class
        .ranges()
        .iter()
        .map(|range| WideCharRange::range(range.start() as u32, range.end() as u32))
        .collect()
}

fn class_contains(class: &ClassUnicode, c: char) -> bool {
    class
        .ranges()
        .binary_search_by(|range| {
            if range.end() < c {
                Ordering::Less
            } else if range.start() > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Code points reachable from `ranges` by simple case folding that are not
/// already in `ranges`.
pub(crate) fn case_fold_additions(ranges: &[WideCharRange]) -> Vec<WideCharRange> {
    let original = to_class(ranges);
    let mut folded = original.clone();
    folded.case_fold_simple();
    folded.difference(&original);
    class_ranges(&folded)
}

/// Extend supplementary ranges with their simple case fold partners.
pub(crate) fn add_case_folded_wide_ranges(wide_ranges: &mut Vec<WideCharRange>) {
    if wide_ranges.is_empty() {
        return;
    }
    for range in case_fold_additions(wide_ranges) {
        if range.to() < NON_BMP_MIN {
            continue;
        }
        wide_ranges.push(WideCharRange::range(
            range.from().max(NON_BMP_MIN),
            range.to(),
        ));
    }
}

/// Extend a property set with its simple case fold partners.
pub(crate) fn case_fold_code_points(ranges: &[WideCharRange]) -> Vec<WideCharRange> {
    let mut closed = ranges.to_vec();
    closed.extend(case_fold_additions(ranges));
    closed
}

fn lookup_class(expr: &str) -> Option<ClassUnicode> {
    let hir = regex_syntax::Parser::new().parse(expr).ok()?;
    match hir.kind() {
        HirKind::Class(Class::Unicode(class)) => Some(class.clone()),
        // Single code point sets come back as literals.
        HirKind::Literal(Literal(bytes)) => {
            let s = core::str::from_utf8(bytes).ok()?;
            Some(ClassUnicode::new(s.chars().map(|c| ClassUnicodeRange::new(c, c))))
        }
        _ => None,
    }
}

fn lookup_ranges(expr: &str) -> Option<Vec<WideCharRange>> {
    lookup_class(expr).map(|class| class_ranges(&class))
}

/// Source of the code point sets behind `\p{...}` escapes.
pub trait PropertyResolver {
    /// Resolve `\p{name}` (with an empty `value`) or `\p{name=value}`.
    ///
    /// Returns `None` for unknown properties. Ranges may come in any order.
    fn resolve(&self, name: &str, value: &str) -> Option<Vec<WideCharRange>>;
}

/// General_Category values, canonical name first.
static GENERAL_CATEGORY_VALUES: &[&[&str]] = &[
    &["Cased_Letter", "LC"],
    &["Close_Punctuation", "Pe"],
    &["Connector_Punctuation", "Pc"],
    &["Control", "Cc", "cntrl"],
    &["Currency_Symbol", "Sc"],
    &["Dash_Punctuation", "Pd"],
    &["Decimal_Number", "Nd", "digit"],
    &["Enclosing_Mark", "Me"],
    &["Final_Punctuation", "Pf"],
    &["Format", "Cf"],
    &["Initial_Punctuation", "Pi"],
    &["Letter", "L"],
    &["Letter_Number", "Nl"],
    &["Line_Separator", "Zl"],
    &["Lowercase_Letter", "Ll"],
    &["Mark", "M", "Combining_Mark"],
    &["Math_Symbol", "Sm"],
    &["Modifier_Letter", "Lm"],
    &["Modifier_Symbol", "Sk"],
    &["Nonspacing_Mark", "Mn"],
    &["Number", "N"],
    &["Open_Punctuation", "Ps"],
    &["Other", "C"],
    &["Other_Letter", "Lo"],
    &["Other_Number", "No"],
    &["Other_Punctuation", "Po"],
    &["Other_Symbol", "So"],
    &["Paragraph_Separator", "Zp"],
    &["Private_Use", "Co"],
    &["Punctuation", "P", "punct"],
    &["Separator", "Z"],
    &["Space_Separator", "Zs"],
    &["Spacing_Mark", "Mc"],
    &["Surrogate", "Cs"],
    &["Symbol", "S"],
    &["Titlecase_Letter", "Lt"],
    &["Unassigned", "Cn"],
    &["Uppercase_Letter", "Lu"],
];

/// Binary properties usable as a lone `\p{...}` name.
static BINARY_PROPERTIES: &[&[&str]] = &[
    &["ASCII"],
    &["ASCII_Hex_Digit", "AHex"],
    &["Alphabetic", "Alpha"],
    &["Any"],
    &["Assigned"],
    &["Bidi_Control", "Bidi_C"],
    &["Bidi_Mirrored", "Bidi_M"],
    &["Case_Ignorable", "CI"],
    &["Cased"],
    &["Changes_When_Casefolded", "CWCF"],
    &["Changes_When_Casemapped", "CWCM"],
    &["Changes_When_Lowercased", "CWL"],
    &["Changes_When_NFKC_Casefolded", "CWKCF"],
    &["Changes_When_Titlecased", "CWT"],
    &["Changes_When_Uppercased", "CWU"],
    &["Dash"],
    &["Default_Ignorable_Code_Point", "DI"],
    &["Deprecated", "Dep"],
    &["Diacritic", "Dia"],
    &["Emoji"],
    &["Emoji_Component", "EComp"],
    &["Emoji_Modifier", "EMod"],
    &["Emoji_Modifier_Base", "EBase"],
    &["Emoji_Presentation", "EPres"],
    &["Extended_Pictographic", "ExtPict"],
    &["Extender", "Ext"],
    &["Grapheme_Base", "Gr_Base"],
    &["Grapheme_Extend", "Gr_Ext"],
    &["Hex_Digit", "Hex"],
    &["IDS_Binary_Operator", "IDSB"],
    &["IDS_Trinary_Operator", "IDST"],
    &["ID_Continue", "IDC"],
    &["ID_Start", "IDS"],
    &["Ideographic", "Ideo"],
    &["Join_Control", "Join_C"],
    &["Logical_Order_Exception", "LOE"],
    &["Lowercase", "Lower"],
    &["Math"],
    &["Noncharacter_Code_Point", "NChar"],
    &["Pattern_Syntax", "Pat_Syn"],
    &["Pattern_White_Space", "Pat_WS"],
    &["Quotation_Mark", "QMark"],
    &["Radical"],
    &["Regional_Indicator", "RI"],
    &["Sentence_Terminal", "STerm"],
    &["Soft_Dotted", "SD"],
    &["Terminal_Punctuation", "Term"],
    &["Unified_Ideograph", "UIdeo"],
    &["Uppercase", "Upper"],
    &["Variation_Selector", "VS"],
    &["White_Space", "space"],
    &["XID_Continue", "XIDC"],
    &["XID_Start", "XIDS"],
];

/// Script and Script_Extensions values, canonical name first.
static SCRIPT_VALUES: &[&[&str]] = &[
    &["Adlam", "Adlm"],
    &["Ahom"],
    &["Anatolian_Hieroglyphs", "Hluw"],
    &["Arabic", "Arab"],
    &["Armenian", "Armn"],
    &["Avestan", "Avst"],
    &["Balinese", "Bali"],
    &["Bamum", "Bamu"],
    &["Bassa_Vah", "Bass"],
    &["Batak", "Batk"],
    &["Bengali", "Beng"],
    &["Bhaiksuki", "Bhks"],
    &["Bopomofo", "Bopo"],
    &["Brahmi", "Brah"],
    &["Braille", "Brai"],
    &["Buginese", "Bugi"],
    &["Buhid", "Buhd"],
    &["Canadian_Aboriginal", "Cans"],
    &["Carian", "Cari"],
    &["Caucasian_Albanian", "Aghb"],
    &["Chakma", "Cakm"],
    &["Cham"],
    &["Cherokee", "Cher"],
    &["Chorasmian", "Chrs"],
    &["Common", "Zyyy"],
    &["Coptic", "Copt", "Qaac"],
    &["Cuneiform", "Xsux"],
    &["Cypriot", "Cprt"],
    &["Cypro_Minoan", "Cpmn"],
    &["Cyrillic", "Cyrl"],
    &["Deseret", "Dsrt"],
    &["Devanagari", "Deva"],
    &["Dives_Akuru", "Diak"],
    &["Dogra", "Dogr"],
    &["Duployan", "Dupl"],
    &["Egyptian_Hieroglyphs", "Egyp"],
    &["Elbasan", "Elba"],
    &["Elymaic", "Elym"],
    &["Ethiopic", "Ethi"],
    &["Georgian", "Geor"],
    &["Glagolitic", "Glag"],
    &["Gothic", "Goth"],
    &["Grantha", "Gran"],
    &["Greek", "Grek"],
    &["Gujarati", "Gujr"],
    &["Gunjala_Gondi", "Gong"],
    &["Gurmukhi", "Guru"],
    &["Han", "Hani"],
    &["Hangul", "Hang"],
    &["Hanifi_Rohingya", "Rohg"],
    &["Hanunoo", "Hano"],
    &["Hatran", "Hatr"],
    &["Hebrew", "Hebr"],
    &["Hiragana", "Hira"],
    &["Imperial_Aramaic", "Armi"],
    &["Inherited", "Zinh", "Qaai"],
    &["Inscriptional_Pahlavi", "Phli"],
    &["Inscriptional_Parthian", "Prti"],
    &["Javanese", "Java"],
    &["Kaithi", "Kthi"],
    &["Kannada", "Knda"],
    &["Katakana", "Kana"],
    &["Kawi"],
    &["Kayah_Li", "Kali"],
    &["Kharoshthi", "Khar"],
    &["Khitan_Small_Script", "Kits"],
    &["Khmer", "Khmr"],
    &["Khojki", "Khoj"],
    &["Khudawadi", "Sind"],
    &["Lao", "Laoo"],
    &["Latin", "Latn"],
    &["Lepcha", "Lepc"],
    &["Limbu", "Limb"],
    &["Linear_A", "Lina"],
    &["Linear_B", "Linb"],
    &["Lisu"],
    &["Lycian", "Lyci"],
    &["Lydian", "Lydi"],
    &["Mahajani", "Mahj"],
    &["Makasar", "Maka"],
    &["Malayalam", "Mlym"],
    &["Mandaic", "Mand"],
    &["Manichaean", "Mani"],
    &["Marchen", "Marc"],
    &["Masaram_Gondi", "Gonm"],
    &["Medefaidrin", "Medf"],
    &["Meetei_Mayek", "Mtei"],
    &["Mende_Kikakui", "Mend"],
    &["Meroitic_Cursive", "Merc"],
    &["Meroitic_Hieroglyphs", "Mero"],
    &["Miao", "Plrd"],
    &["Modi"],
    &["Mongolian", "Mong"],
    &["Mro", "Mroo"],
    &["Multani", "Mult"],
    &["Myanmar", "Mymr"],
    &["Nabataean", "Nbat"],
    &["Nag_Mundari", "Nagm"],
    &["Nandinagari", "Nand"],
    &["New_Tai_Lue", "Talu"],
    &["Newa"],
    &["Nko", "Nkoo"],
    &["Nushu", "Nshu"],
    &["Nyiakeng_Puachue_Hmong", "Hmnp"],
    &["Ogham", "Ogam"],
    &["Ol_Chiki", "Olck"],
    &["Old_Hungarian", "Hung"],
    &["Old_Italic", "Ital"],
    &["Old_North_Arabian", "Narb"],
    &["Old_Permic", "Perm"],
    &["Old_Persian", "Xpeo"],
    &["Old_Sogdian", "Sogo"],
    &["Old_South_Arabian", "Sarb"],
    &["Old_Turkic", "Orkh"],
    &["Old_Uyghur", "Ougr"],
    &["Oriya", "Orya"],
    &["Osage", "Osge"],
    &["Osmanya", "Osma"],
    &["Pahawh_Hmong", "Hmng"],
    &["Palmyrene", "Palm"],
    &["Pau_Cin_Hau", "Pauc"],
    &["Phags_Pa", "Phag"],
    &["Phoenician", "Phnx"],
    &["Psalter_Pahlavi", "Phlp"],
    &["Rejang", "Rjng"],
    &["Runic", "Runr"],
    &["Samaritan", "Samr"],
    &["Saurashtra", "Saur"],
    &["Sharada", "Shrd"],
    &["Shavian", "Shaw"],
    &["Siddham", "Sidd"],
    &["SignWriting", "Sgnw"],
    &["Sinhala", "Sinh"],
    &["Sogdian", "Sogd"],
    &["Sora_Sompeng", "Sora"],
    &["Soyombo", "Soyo"],
    &["Sundanese", "Sund"],
    &["Syloti_Nagri", "Sylo"],
    &["Syriac", "Syrc"],
    &["Tagalog", "Tglg"],
    &["Tagbanwa", "Tagb"],
    &["Tai_Le", "Tale"],
    &["Tai_Tham", "Lana"],
    &["Tai_Viet", "Tavt"],
    &["Takri", "Takr"],
    &["Tamil", "Taml"],
    &["Tangsa", "Tnsa"],
    &["Tangut", "Tang"],
    &["Telugu", "Telu"],
    &["Thaana", "Thaa"],
    &["Thai"],
    &["Tibetan", "Tibt"],
    &["Tifinagh", "Tfng"],
    &["Tirhuta", "Tirh"],
    &["Toto"],
    &["Ugaritic", "Ugar"],
    &["Unknown", "Zzzz"],
    &["Vai", "Vaii"],
    &["Vithkuqi", "Vith"],
    &["Wancho", "Wcho"],
    &["Warang_Citi", "Wara"],
    &["Yezidi", "Yezi"],
    &["Yi", "Yiii"],
    &["Zanabazar_Square", "Zanb"],
];

/// The canonical spelling of `name`, which must match one of the table's
/// names or aliases exactly.
fn canonical_name(table: &'static [&'static [&'static str]], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|names| names.contains(&name))
        .map(|names| names[0])
}

/// The default property resolver, backed by the Unicode tables of
/// `regex-syntax`.
///
/// Lone names are General_Category values or binary properties. Script
/// values must be spelled `Script=...`, `sc=...`, `Script_Extensions=...`
/// or `scx=...`. Names, values and aliases are case-sensitive and must be
/// spelled exactly as in the ECMAScript property tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeTables;

impl UnicodeTables {
    fn general_category(value: &str) -> Option<Vec<WideCharRange>> {
        let value = canonical_name(GENERAL_CATEGORY_VALUES, value)?;
        let ranges = lookup_ranges(&format!(r"\p{{gc={}}}", value));
        if !matches!(value, "Surrogate" | "Other") {
            return ranges;
        }
        Some(with_surrogates(ranges.unwrap_or_default()))
    }

    fn binary_property(name: &str) -> Option<Vec<WideCharRange>> {
        let name = canonical_name(BINARY_PROPERTIES, name)?;
        let ranges = lookup_ranges(&format!(r"\p{{{}}}", name))?;
        if !matches!(name, "Any" | "Assigned") {
            return Some(ranges);
        }
        Some(with_surrogates(ranges))
    }

    fn script(property: &str, value: &str) -> Option<Vec<WideCharRange>> {
        let value = canonical_name(SCRIPT_VALUES, value)?;
        lookup_ranges(&format!(r"\p{{{}={}}}", property, value))
    }
}

fn with_surrogates(mut ranges: Vec<WideCharRange>) -> Vec<WideCharRange> {
    ranges.push(WideCharRange::range(
        u32::from(LEAD_SURROGATE_MIN),
        u32::from(TRAIL_SURROGATE_MAX),
    ));
    ranges.sort();
    ranges
}

impl PropertyResolver for UnicodeTables {
    fn resolve(&self, name: &str, value: &str) -> Option<Vec<WideCharRange>> {
        if value.is_empty() {
            return UnicodeTables::general_category(name)
                .or_else(|| UnicodeTables::binary_property(name));
        }
        match name {
            "General_Category" | "gc" => UnicodeTables::general_category(value),
            "Script" | "sc" => UnicodeTables::script("sc", value),
            "Script_Extensions" | "scx" => UnicodeTables::script("scx", value),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct IdentifierClasses {
    start: ClassUnicode,
    part: ClassUnicode,
}

impl IdentifierClasses {
    fn load() -> IdentifierClasses {
        IdentifierClasses {
            start: lookup_class(r"\p{ID_Start}").unwrap_or_else(ClassUnicode::empty),
            part: lookup_class(r"\p{ID_Continue}").unwrap_or_else(ClassUnicode::empty),
        }
    }
}

/// The process-wide identifier classes, loaded on first use.
#[cfg(feature = "std")]
fn shared_identifier_classes() -> &'static IdentifierClasses {
    static CLASSES: std::sync::OnceLock<IdentifierClasses> = std::sync::OnceLock::new();
    CLASSES.get_or_init(IdentifierClasses::load)
}

/// Identifier classification for group names.
///
/// With `std` the classes are shared by every parse; without it each
/// parser loads them on its first non-ASCII group name.
#[derive(Debug, Default)]
pub(crate) struct IdentifierTables {
    #[cfg(not(feature = "std"))]
    classes: Option<IdentifierClasses>,
}

impl IdentifierTables {
    #[cfg(feature = "std")]
    fn classes(&mut self) -> &IdentifierClasses {
        shared_identifier_classes()
    }

    #[cfg(not(feature = "std"))]
    fn classes(&mut self) -> &IdentifierClasses {
        self.classes.get_or_insert_with(IdentifierClasses::load)
    }

    pub(crate) fn is_start(&mut self, c: u32) -> bool {
        if c < 0x80 {
            return (c as u8).is_ascii_alphabetic() || c == '$' as u32 || c == '_' as u32;
        }
        match char::from_u32(c) {
            Some(ch) => class_contains(&self.classes().start, ch),
            None => false,
        }
    }

    pub(crate) fn is_part(&mut self, c: u32) -> bool {
        if c < 0x80 {
            return (c as u8).is_ascii_alphanumeric() || c == '$' as u32 || c == '_' as u32;
        }
        if c == ZWNJ || c == ZWJ {
            return true;
        }
        match char::from_u32(c) {
            Some(ch) => class_contains(&self.classes().part, ch),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covers(ranges: &[WideCharRange], c: u32) -> bool {
        ranges.iter().any(|r| r.from() <= c && c <= r.to())
    }

    #[test]
    fn surrogate_pairs() {
        assert_eq!(utf16_encode(0x1F600), (0xD83D, 0xDE00));
        assert_eq!(utf16_encode(0x10000), (0xD800, 0xDC00));
        assert_eq!(utf16_encode(0x10FFFF), (0xDBFF, 0xDFFF));
        assert_eq!(utf16_decode(0xD83D, 0xDE00), 0x1F600);
        assert!(is_lead_surrogate(0xDBFF));
        assert!(!is_lead_surrogate(0xDC00));
        assert!(is_trail_surrogate(0xDC00));
    }

    #[test]
    fn upper_case() {
        assert_eq!(to_upper_case('a' as u16), 'A' as u16);
        assert_eq!(to_upper_case(0x17F), 'S' as u16);
        // U+00DF uppercases to "SS"
        assert_eq!(to_upper_case(0xDF), 0xDF);
        assert_eq!(to_upper_case(0xD800), 0xD800);
    }

    #[test]
    fn orbits() {
        assert_eq!(fold_case_orbit('k' as u32), vec![0x6B, 0x4B, 0x212A]);
        assert_eq!(fold_case_orbit('1' as u32), vec![0x31]);
        assert_eq!(fold_case_orbit(0x10400), vec![0x10400, 0x10428]);
        assert_eq!(fold_case_orbit(0xDC00), vec![0xDC00]);
    }

    #[test]
    fn wide_folding() {
        let mut wide = vec![WideCharRange::singleton(0x10400)];
        add_case_folded_wide_ranges(&mut wide);
        assert_eq!(
            wide,
            vec![WideCharRange::singleton(0x10400), WideCharRange::singleton(0x10428)]
        );
    }

    #[test]
    fn properties() {
        let tables = UnicodeTables;
        let lu = tables.resolve("Lu", "").unwrap();
        assert!(covers(&lu, 'A' as u32));
        assert!(!covers(&lu, 'a' as u32));
        let greek = tables.resolve("Script", "Greek").unwrap();
        assert!(covers(&greek, 0x3B1));
        assert!(tables.resolve("sc", "Greek").is_some());
        assert!(tables.resolve("Greek", "").is_none());
        assert!(tables.resolve("Alphabetic", "").is_some());
        assert!(tables.resolve("Block", "Basic_Latin").is_none());
        assert!(tables.resolve("NotAProperty", "").is_none());
    }

    #[test]
    fn property_names_are_exact() {
        let tables = UnicodeTables;
        assert!(tables.resolve("Uppercase_Letter", "").is_some());
        assert!(tables.resolve("Alpha", "").is_some());
        assert!(tables.resolve("gc", "Lu").is_some());
        assert!(tables.resolve("General_Category", "digit").is_some());
        assert!(tables.resolve("scx", "Grek").is_some());
        assert!(tables.resolve("sc", "Qaai").is_some());
        for name in ["lu", "isAlphabetic", "alpha", "L_u", "uppercase letter", "ALPHABETIC"] {
            assert_eq!(tables.resolve(name, ""), None, "{}", name);
        }
        for value in ["Any", "ASCII", "Assigned", "lu", "uppercaseletter"] {
            assert_eq!(tables.resolve("gc", value), None, "{}", value);
        }
        assert_eq!(tables.resolve("sc", "greek"), None);
        assert_eq!(tables.resolve("sc", "Lu"), None);
        assert_eq!(tables.resolve("Script", "isGreek"), None);
        assert_eq!(tables.resolve("script", "Greek"), None);
        assert_eq!(tables.resolve("Alphabetic", "Y"), None);
    }

    #[test]
    fn surrogate_categories() {
        let cs = UnicodeTables.resolve("Cs", "").unwrap();
        assert_eq!(cs, vec![WideCharRange::range(0xD800, 0xDFFF)]);
        let any = UnicodeTables.resolve("Any", "").unwrap();
        assert!(covers(&any, 0xDA00));
        assert!(covers(&any, 0x10FFFF));
    }

    #[test]
    fn identifiers() {
        let mut tables = IdentifierTables::default();
        assert!(tables.is_start('a' as u32));
        assert!(tables.is_start('$' as u32));
        assert!(!tables.is_start('1' as u32));
        assert!(tables.is_part('1' as u32));
        assert!(tables.is_start(0x3B1));
        assert!(tables.is_part(ZWJ));
        assert!(!tables.is_start(ZWJ));
        assert!(!tables.is_part('-' as u32));
        assert!(!tables.is_start(0xD800));
    }

    #[cfg(feature = "std")]
    #[test]
    fn identifier_classes_are_shared() {
        let first = shared_identifier_classes();
        let mut tables = IdentifierTables::default();
        assert!(tables.is_part(0x3B1));
        assert!(core::ptr::eq(first, tables.classes()));
        assert!(core::ptr::eq(first, IdentifierTables::default().classes()));
    }
}
