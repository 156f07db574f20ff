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

//! Emoji sequence tables behind `\p{RGI_Emoji_Flag_Sequence}`,
//! `\p{RGI_Emoji_Tag_Sequence}` and `\p{RGI_Emoji_ZWJ_Sequence}`.
//!
//! The data is the RGI set of Unicode Emoji 16.0 (`emoji-test.txt`,
//! fully-qualified entries). Flags are stored as region codes and tag
//! sequences as subdivision codes; both expand to code points on use.

use alloc::vec::Vec;

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;
const BLACK_FLAG: u32 = 0x1F3F4;
const TAG_BASE: u32 = 0xE0000;
const CANCEL_TAG: u32 = 0xE007F;

/// Regions with an RGI flag, as ISO 3166-1 alpha-2 codes.
static FLAG_REGIONS: &[&str] = &[
    "AC", "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS",
    "AT", "AU", "AW", "AX", "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH",
    "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS", "BT", "BV", "BW",
    "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM",
    "CN", "CO", "CP", "CQ", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE",
    "DG", "DJ", "DK", "DM", "DO", "DZ", "EA", "EC", "EE", "EG", "EH", "ER",
    "ES", "ET", "EU", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD",
    "GE", "GF", "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS",
    "GT", "GU", "GW", "GY", "HK", "HM", "HN", "HR", "HT", "HU", "IC", "ID",
    "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM", "JO",
    "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ",
    "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA",
    "MC", "MD", "ME", "MF", "MG", "MH", "MK", "ML", "MM", "MN", "MO", "MP",
    "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NC",
    "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA",
    "PE", "PF", "PG", "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW",
    "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA", "SB", "SC", "SD", "SE",
    "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS", "ST",
    "SV", "SX", "SY", "SZ", "TA", "TC", "TD", "TF", "TG", "TH", "TJ", "TK",
    "TL", "TM", "TN", "TO", "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM",
    "UN", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI", "VN", "VU", "WF",
    "WS", "XK", "YE", "YT", "ZA", "ZM", "ZW",
];

/// Subdivisions with an RGI tag sequence flag.
static TAG_SUBDIVISIONS: &[&str] = &["gbeng", "gbsct", "gbwls"];

static ZWJ_SEQUENCES: &[&[u32]] = &[
    &[0x1F636, 0x200D, 0x1F32B, 0xFE0F],
    &[0x1F62E, 0x200D, 0x1F4A8],
    &[0x1F642, 0x200D, 0x2194, 0xFE0F],
    &[0x1F642, 0x200D, 0x2195, 0xFE0F],
    &[0x1F635, 0x200D, 0x1F4AB],
    &[0x2764, 0xFE0F, 0x200D, 0x1F525],
    &[0x2764, 0xFE0F, 0x200D, 0x1FA79],
    &[0x1F441, 0xFE0F, 0x200D, 0x1F5E8, 0xFE0F],
    &[0x1FAF1, 0x1F3FB, 0x200D, 0x1FAF2, 0x1F3FC],
    &[0x1FAF1, 0x1F3FB, 0x200D, 0x1FAF2, 0x1F3FD],
    &[0x1FAF1, 0x1F3FB, 0x200D, 0x1FAF2, 0x1F3FE],
    &[0x1FAF1, 0x1F3FB, 0x200D, 0x1FAF2, 0x1F3FF],
    &[0x1FAF1, 0x1F3FC, 0x200D, 0x1FAF2, 0x1F3FB],
    &[0x1FAF1, 0x1F3FC, 0x200D, 0x1FAF2, 0x1F3FD],
    &[0x1FAF1, 0x1F3FC, 0x200D, 0x1FAF2, 0x1F3FE],
    &[0x1FAF1, 0x1F3FC, 0x200D, 0x1FAF2, 0x1F3FF],
    &[0x1FAF1, 0x1F3FD, 0x200D, 0x1FAF2, 0x1F3FB],
    &[0x1FAF1, 0x1F3FD, 0x200D, 0x1FAF2, 0x1F3FC],
    &[0x1FAF1, 0x1F3FD, 0x200D, 0x1FAF2, 0x1F3FE],
    &[0x1FAF1, 0x1F3FD, 0x200D, 0x1FAF2, 0x1F3FF],
    &[0x1FAF1, 0x1F3FE, 0x200D, 0x1FAF2, 0x1F3FB],
    &[0x1FAF1, 0x1F3FE, 0x200D, 0x1FAF2, 0x1F3FC],
    &[0x1FAF1, 0x1F3FE, 0x200D, 0x1FAF2, 0x1F3FD],
    &[0x1FAF1, 0x1F3FE, 0x200D, 0x1FAF2, 0x1F3FF],
    &[0x1FAF1, 0x1F3FF, 0x200D, 0x1FAF2, 0x1F3FB],
    &[0x1FAF1, 0x1F3FF, 0x200D, 0x1FAF2, 0x1F3FC],
    &[0x1FAF1, 0x1F3FF, 0x200D, 0x1FAF2, 0x1F3FD],
    &[0x1FAF1, 0x1F3FF, 0x200D, 0x1FAF2, 0x1F3FE],
    &[0x1F9D4, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D4, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D4, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D4, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D4, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D4, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D4, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D4, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D4, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D4, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D4, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D4, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F468, 0x200D, 0x1F9B0],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F9B0],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F9B0],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F9B0],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F9B0],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F9B0],
    &[0x1F468, 0x200D, 0x1F9B1],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F9B1],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F9B1],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F9B1],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F9B1],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F9B1],
    &[0x1F468, 0x200D, 0x1F9B3],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F9B3],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F9B3],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F9B3],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F9B3],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F9B3],
    &[0x1F468, 0x200D, 0x1F9B2],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F9B2],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F9B2],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F9B2],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F9B2],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F9B2],
    &[0x1F469, 0x200D, 0x1F9B0],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F9B0],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F9B0],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F9B0],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F9B0],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F9B0],
    &[0x1F9D1, 0x200D, 0x1F9B0],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F9B0],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F9B0],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F9B0],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F9B0],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F9B0],
    &[0x1F469, 0x200D, 0x1F9B1],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F9B1],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F9B1],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F9B1],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F9B1],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F9B1],
    &[0x1F9D1, 0x200D, 0x1F9B1],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F9B1],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F9B1],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F9B1],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F9B1],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F9B1],
    &[0x1F469, 0x200D, 0x1F9B3],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F9B3],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F9B3],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F9B3],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F9B3],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F9B3],
    &[0x1F9D1, 0x200D, 0x1F9B3],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F9B3],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F9B3],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F9B3],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F9B3],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F9B3],
    &[0x1F469, 0x200D, 0x1F9B2],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F9B2],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F9B2],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F9B2],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F9B2],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F9B2],
    &[0x1F9D1, 0x200D, 0x1F9B2],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F9B2],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F9B2],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F9B2],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F9B2],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F9B2],
    &[0x1F471, 0x200D, 0x2640, 0xFE0F],
    &[0x1F471, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F471, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F471, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F471, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F471, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F471, 0x200D, 0x2642, 0xFE0F],
    &[0x1F471, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F471, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F471, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F471, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F471, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64D, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64D, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64D, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64D, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64D, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64D, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64D, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64D, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64D, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64D, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64D, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64D, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64E, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64E, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64E, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64E, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64E, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64E, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64E, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64E, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64E, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64E, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64E, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64E, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F645, 0x200D, 0x2642, 0xFE0F],
    &[0x1F645, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F645, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F645, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F645, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F645, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F645, 0x200D, 0x2640, 0xFE0F],
    &[0x1F645, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F645, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F645, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F645, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F645, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F646, 0x200D, 0x2642, 0xFE0F],
    &[0x1F646, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F646, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F646, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F646, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F646, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F646, 0x200D, 0x2640, 0xFE0F],
    &[0x1F646, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F646, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F646, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F646, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F646, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F481, 0x200D, 0x2642, 0xFE0F],
    &[0x1F481, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F481, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F481, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F481, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F481, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F481, 0x200D, 0x2640, 0xFE0F],
    &[0x1F481, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F481, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F481, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F481, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F481, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64B, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64B, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64B, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64B, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64B, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64B, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F64B, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64B, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64B, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64B, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64B, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F64B, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CF, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CF, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CF, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CF, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CF, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CF, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CF, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CF, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CF, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CF, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F647, 0x200D, 0x2642, 0xFE0F],
    &[0x1F647, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F647, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F647, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F647, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F647, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F647, 0x200D, 0x2640, 0xFE0F],
    &[0x1F647, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F647, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F647, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F647, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F647, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F926, 0x200D, 0x2642, 0xFE0F],
    &[0x1F926, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F926, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F926, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F926, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F926, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F926, 0x200D, 0x2640, 0xFE0F],
    &[0x1F926, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F926, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F926, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F926, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F926, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F937, 0x200D, 0x2642, 0xFE0F],
    &[0x1F937, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F937, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F937, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F937, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F937, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F937, 0x200D, 0x2640, 0xFE0F],
    &[0x1F937, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F937, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F937, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F937, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F937, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D1, 0x200D, 0x2695, 0xFE0F],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x2695, 0xFE0F],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x2695, 0xFE0F],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x2695, 0xFE0F],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x2695, 0xFE0F],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x2695, 0xFE0F],
    &[0x1F468, 0x200D, 0x2695, 0xFE0F],
    &[0x1F468, 0x1F3FB, 0x200D, 0x2695, 0xFE0F],
    &[0x1F468, 0x1F3FC, 0x200D, 0x2695, 0xFE0F],
    &[0x1F468, 0x1F3FD, 0x200D, 0x2695, 0xFE0F],
    &[0x1F468, 0x1F3FE, 0x200D, 0x2695, 0xFE0F],
    &[0x1F468, 0x1F3FF, 0x200D, 0x2695, 0xFE0F],
    &[0x1F469, 0x200D, 0x2695, 0xFE0F],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2695, 0xFE0F],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2695, 0xFE0F],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2695, 0xFE0F],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2695, 0xFE0F],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2695, 0xFE0F],
    &[0x1F9D1, 0x200D, 0x1F393],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F393],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F393],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F393],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F393],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F393],
    &[0x1F468, 0x200D, 0x1F393],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F393],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F393],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F393],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F393],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F393],
    &[0x1F469, 0x200D, 0x1F393],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F393],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F393],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F393],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F393],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F393],
    &[0x1F9D1, 0x200D, 0x1F3EB],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F3EB],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F3EB],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F3EB],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F3EB],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F3EB],
    &[0x1F468, 0x200D, 0x1F3EB],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F3EB],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F3EB],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F3EB],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F3EB],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F3EB],
    &[0x1F469, 0x200D, 0x1F3EB],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F3EB],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F3EB],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F3EB],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F3EB],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F3EB],
    &[0x1F9D1, 0x200D, 0x2696, 0xFE0F],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x2696, 0xFE0F],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x2696, 0xFE0F],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x2696, 0xFE0F],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x2696, 0xFE0F],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x2696, 0xFE0F],
    &[0x1F468, 0x200D, 0x2696, 0xFE0F],
    &[0x1F468, 0x1F3FB, 0x200D, 0x2696, 0xFE0F],
    &[0x1F468, 0x1F3FC, 0x200D, 0x2696, 0xFE0F],
    &[0x1F468, 0x1F3FD, 0x200D, 0x2696, 0xFE0F],
    &[0x1F468, 0x1F3FE, 0x200D, 0x2696, 0xFE0F],
    &[0x1F468, 0x1F3FF, 0x200D, 0x2696, 0xFE0F],
    &[0x1F469, 0x200D, 0x2696, 0xFE0F],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2696, 0xFE0F],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2696, 0xFE0F],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2696, 0xFE0F],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2696, 0xFE0F],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2696, 0xFE0F],
    &[0x1F9D1, 0x200D, 0x1F33E],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F33E],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F33E],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F33E],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F33E],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F33E],
    &[0x1F468, 0x200D, 0x1F33E],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F33E],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F33E],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F33E],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F33E],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F33E],
    &[0x1F469, 0x200D, 0x1F33E],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F33E],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F33E],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F33E],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F33E],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F33E],
    &[0x1F9D1, 0x200D, 0x1F373],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F373],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F373],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F373],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F373],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F373],
    &[0x1F468, 0x200D, 0x1F373],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F373],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F373],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F373],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F373],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F373],
    &[0x1F469, 0x200D, 0x1F373],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F373],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F373],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F373],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F373],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F373],
    &[0x1F9D1, 0x200D, 0x1F527],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F527],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F527],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F527],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F527],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F527],
    &[0x1F468, 0x200D, 0x1F527],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F527],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F527],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F527],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F527],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F527],
    &[0x1F469, 0x200D, 0x1F527],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F527],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F527],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F527],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F527],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F527],
    &[0x1F9D1, 0x200D, 0x1F3ED],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F3ED],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F3ED],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F3ED],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F3ED],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F3ED],
    &[0x1F468, 0x200D, 0x1F3ED],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F3ED],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F3ED],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F3ED],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F3ED],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F3ED],
    &[0x1F469, 0x200D, 0x1F3ED],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F3ED],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F3ED],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F3ED],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F3ED],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F3ED],
    &[0x1F9D1, 0x200D, 0x1F4BC],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F4BC],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F4BC],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F4BC],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F4BC],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F4BC],
    &[0x1F468, 0x200D, 0x1F4BC],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F4BC],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F4BC],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F4BC],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F4BC],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F4BC],
    &[0x1F469, 0x200D, 0x1F4BC],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F4BC],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F4BC],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F4BC],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F4BC],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F4BC],
    &[0x1F9D1, 0x200D, 0x1F52C],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F52C],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F52C],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F52C],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F52C],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F52C],
    &[0x1F468, 0x200D, 0x1F52C],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F52C],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F52C],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F52C],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F52C],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F52C],
    &[0x1F469, 0x200D, 0x1F52C],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F52C],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F52C],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F52C],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F52C],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F52C],
    &[0x1F9D1, 0x200D, 0x1F4BB],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F4BB],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F4BB],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F4BB],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F4BB],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F4BB],
    &[0x1F468, 0x200D, 0x1F4BB],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F4BB],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F4BB],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F4BB],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F4BB],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F4BB],
    &[0x1F469, 0x200D, 0x1F4BB],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F4BB],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F4BB],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F4BB],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F4BB],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F4BB],
    &[0x1F9D1, 0x200D, 0x1F3A4],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F3A4],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F3A4],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F3A4],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F3A4],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F3A4],
    &[0x1F468, 0x200D, 0x1F3A4],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F3A4],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F3A4],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F3A4],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F3A4],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F3A4],
    &[0x1F469, 0x200D, 0x1F3A4],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F3A4],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F3A4],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F3A4],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F3A4],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F3A4],
    &[0x1F9D1, 0x200D, 0x1F3A8],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F3A8],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F3A8],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F3A8],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F3A8],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F3A8],
    &[0x1F468, 0x200D, 0x1F3A8],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F3A8],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F3A8],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F3A8],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F3A8],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F3A8],
    &[0x1F469, 0x200D, 0x1F3A8],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F3A8],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F3A8],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F3A8],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F3A8],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F3A8],
    &[0x1F9D1, 0x200D, 0x2708, 0xFE0F],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x2708, 0xFE0F],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x2708, 0xFE0F],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x2708, 0xFE0F],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x2708, 0xFE0F],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x2708, 0xFE0F],
    &[0x1F468, 0x200D, 0x2708, 0xFE0F],
    &[0x1F468, 0x1F3FB, 0x200D, 0x2708, 0xFE0F],
    &[0x1F468, 0x1F3FC, 0x200D, 0x2708, 0xFE0F],
    &[0x1F468, 0x1F3FD, 0x200D, 0x2708, 0xFE0F],
    &[0x1F468, 0x1F3FE, 0x200D, 0x2708, 0xFE0F],
    &[0x1F468, 0x1F3FF, 0x200D, 0x2708, 0xFE0F],
    &[0x1F469, 0x200D, 0x2708, 0xFE0F],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2708, 0xFE0F],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2708, 0xFE0F],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2708, 0xFE0F],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2708, 0xFE0F],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2708, 0xFE0F],
    &[0x1F9D1, 0x200D, 0x1F680],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F680],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F680],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F680],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F680],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F680],
    &[0x1F468, 0x200D, 0x1F680],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F680],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F680],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F680],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F680],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F680],
    &[0x1F469, 0x200D, 0x1F680],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F680],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F680],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F680],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F680],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F680],
    &[0x1F9D1, 0x200D, 0x1F692],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F692],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F692],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F692],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F692],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F692],
    &[0x1F468, 0x200D, 0x1F692],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F692],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F692],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F692],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F692],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F692],
    &[0x1F469, 0x200D, 0x1F692],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F692],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F692],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F692],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F692],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F692],
    &[0x1F46E, 0x200D, 0x2642, 0xFE0F],
    &[0x1F46E, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F46E, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F46E, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F46E, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F46E, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F46E, 0x200D, 0x2640, 0xFE0F],
    &[0x1F46E, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F46E, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F46E, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F46E, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F46E, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F575, 0xFE0F, 0x200D, 0x2642, 0xFE0F],
    &[0x1F575, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F575, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F575, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F575, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F575, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F575, 0xFE0F, 0x200D, 0x2640, 0xFE0F],
    &[0x1F575, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F575, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F575, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F575, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F575, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F482, 0x200D, 0x2642, 0xFE0F],
    &[0x1F482, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F482, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F482, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F482, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F482, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F482, 0x200D, 0x2640, 0xFE0F],
    &[0x1F482, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F482, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F482, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F482, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F482, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F477, 0x200D, 0x2642, 0xFE0F],
    &[0x1F477, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F477, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F477, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F477, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F477, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F477, 0x200D, 0x2640, 0xFE0F],
    &[0x1F477, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F477, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F477, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F477, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F477, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F473, 0x200D, 0x2642, 0xFE0F],
    &[0x1F473, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F473, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F473, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F473, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F473, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F473, 0x200D, 0x2640, 0xFE0F],
    &[0x1F473, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F473, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F473, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F473, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F473, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F935, 0x200D, 0x2642, 0xFE0F],
    &[0x1F935, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F935, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F935, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F935, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F935, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F935, 0x200D, 0x2640, 0xFE0F],
    &[0x1F935, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F935, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F935, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F935, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F935, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F470, 0x200D, 0x2642, 0xFE0F],
    &[0x1F470, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F470, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F470, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F470, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F470, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F470, 0x200D, 0x2640, 0xFE0F],
    &[0x1F470, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F470, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F470, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F470, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F470, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F469, 0x200D, 0x1F37C],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F37C],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F37C],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F37C],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F37C],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F37C],
    &[0x1F468, 0x200D, 0x1F37C],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F37C],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F37C],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F37C],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F37C],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F37C],
    &[0x1F9D1, 0x200D, 0x1F37C],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F37C],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F37C],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F37C],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F37C],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F37C],
    &[0x1F9D1, 0x200D, 0x1F384],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F384],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F384],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F384],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F384],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F384],
    &[0x1F9B8, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9B8, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9B8, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9B8, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9B8, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9B8, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9B8, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9B8, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9B8, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9B8, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9B8, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9B8, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9B9, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9B9, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9B9, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9B9, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9B9, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9B9, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9B9, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9B9, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9B9, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9B9, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9B9, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9B9, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D9, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D9, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D9, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D9, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D9, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D9, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D9, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D9, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D9, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D9, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D9, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D9, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DA, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DA, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DA, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DA, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DA, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DA, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DA, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DA, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DA, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DA, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DA, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DA, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DB, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DB, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DB, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DB, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DB, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DB, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DB, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DB, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DB, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DB, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DC, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DC, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DC, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DC, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DC, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DC, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DC, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DC, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DC, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DC, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DD, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DD, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DD, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DD, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DD, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DD, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DD, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DD, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DD, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DD, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9DF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9DF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F486, 0x200D, 0x2642, 0xFE0F],
    &[0x1F486, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F486, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F486, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F486, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F486, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F486, 0x200D, 0x2640, 0xFE0F],
    &[0x1F486, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F486, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F486, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F486, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F486, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F487, 0x200D, 0x2642, 0xFE0F],
    &[0x1F487, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F487, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F487, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F487, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F487, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F487, 0x200D, 0x2640, 0xFE0F],
    &[0x1F487, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F487, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F487, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F487, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F487, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B6, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B6, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B6, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B6, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B6, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B6, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B6, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B6, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B6, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B6, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B6, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B6, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B6, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FB, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FE, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FB, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FC, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FD, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FE, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FF, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FB, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FC, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FD, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FE, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F6B6, 0x1F3FF, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CD, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CD, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CD, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CD, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CD, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CD, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CD, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CD, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CD, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CD, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CE, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CE, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CE, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CE, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CE, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9CE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CE, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CE, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CE, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CE, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CE, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9CE, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FB, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FE, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FB, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FC, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FD, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FE, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FF, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FB, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FC, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FD, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FE, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9CE, 0x1F3FF, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x200D, 0x1F9AF],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F9AF],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F9AF],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F9AF],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F9AF],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F9AF],
    &[0x1F9D1, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x200D, 0x1F9AF],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F9AF],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F9AF],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F9AF],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F9AF],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F9AF],
    &[0x1F468, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x200D, 0x1F9AF],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F9AF],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F9AF],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F9AF],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F9AF],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F9AF],
    &[0x1F469, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F9AF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x200D, 0x1F9BC],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F9BC],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F9BC],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F9BC],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F9BC],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F9BC],
    &[0x1F9D1, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x200D, 0x1F9BC],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F9BC],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F9BC],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F9BC],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F9BC],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F9BC],
    &[0x1F468, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x200D, 0x1F9BC],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F9BC],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F9BC],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F9BC],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F9BC],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F9BC],
    &[0x1F469, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F9BC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x200D, 0x1F9BD],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F9BD],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F9BD],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F9BD],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F9BD],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F9BD],
    &[0x1F9D1, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x200D, 0x1F9BD],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F9BD],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F9BD],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F9BD],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F9BD],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F9BD],
    &[0x1F468, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x200D, 0x1F9BD],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F9BD],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F9BD],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F9BD],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F9BD],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F9BD],
    &[0x1F469, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F9BD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3C3, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3C3, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3C3, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3C3, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3C3, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3C3, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3C3, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3C3, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3C3, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3C3, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3C3, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3C3, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FB, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FC, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FD, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FE, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FF, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FB, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FC, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FD, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FE, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FF, 0x200D, 0x2640, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FB, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FC, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FD, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FE, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F3C3, 0x1F3FF, 0x200D, 0x2642, 0xFE0F, 0x200D, 0x27A1, 0xFE0F],
    &[0x1F46F, 0x200D, 0x2642, 0xFE0F],
    &[0x1F46F, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D6, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D6, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D6, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D6, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D6, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D6, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D6, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D6, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D6, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D6, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D6, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D6, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D7, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D7, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D7, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D7, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D7, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D7, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D7, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D7, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D7, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D7, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D7, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D7, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CC, 0xFE0F, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CC, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CC, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CC, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CC, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CC, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CC, 0xFE0F, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CC, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CC, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CC, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CC, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CC, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3C4, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3C4, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3C4, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3C4, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3C4, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3C4, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3C4, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3C4, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3C4, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3C4, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3C4, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3C4, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6A3, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6A3, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6A3, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6A3, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6A3, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6A3, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6A3, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6A3, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6A3, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6A3, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6A3, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6A3, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CA, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CA, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CA, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CA, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CA, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CA, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CA, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CA, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CA, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CA, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CA, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CA, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x26F9, 0xFE0F, 0x200D, 0x2642, 0xFE0F],
    &[0x26F9, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x26F9, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x26F9, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x26F9, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x26F9, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x26F9, 0xFE0F, 0x200D, 0x2640, 0xFE0F],
    &[0x26F9, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x26F9, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x26F9, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x26F9, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x26F9, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CB, 0xFE0F, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CB, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CB, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CB, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CB, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CB, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F3CB, 0xFE0F, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CB, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CB, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CB, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CB, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F3CB, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B4, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B4, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B4, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B4, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B4, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B4, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B4, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B4, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B4, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B4, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B4, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B4, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B5, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B5, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B5, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B5, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B5, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B5, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F6B5, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B5, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B5, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B5, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B5, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F6B5, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F938, 0x200D, 0x2642, 0xFE0F],
    &[0x1F938, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F938, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F938, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F938, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F938, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F938, 0x200D, 0x2640, 0xFE0F],
    &[0x1F938, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F938, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F938, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F938, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F938, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F93C, 0x200D, 0x2642, 0xFE0F],
    &[0x1F93C, 0x200D, 0x2640, 0xFE0F],
    &[0x1F93D, 0x200D, 0x2642, 0xFE0F],
    &[0x1F93D, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F93D, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F93D, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F93D, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F93D, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F93D, 0x200D, 0x2640, 0xFE0F],
    &[0x1F93D, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F93D, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F93D, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F93D, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F93D, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F93E, 0x200D, 0x2642, 0xFE0F],
    &[0x1F93E, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F93E, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F93E, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F93E, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F93E, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F93E, 0x200D, 0x2640, 0xFE0F],
    &[0x1F93E, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F93E, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F93E, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F93E, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F93E, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F939, 0x200D, 0x2642, 0xFE0F],
    &[0x1F939, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F939, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F939, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F939, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F939, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F939, 0x200D, 0x2640, 0xFE0F],
    &[0x1F939, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F939, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F939, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F939, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F939, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D8, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D8, 0x1F3FB, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D8, 0x1F3FC, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D8, 0x1F3FD, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D8, 0x1F3FE, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D8, 0x1F3FF, 0x200D, 0x2642, 0xFE0F],
    &[0x1F9D8, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D8, 0x1F3FB, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D8, 0x1F3FC, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D8, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D8, 0x1F3FE, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D8, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    &[0x1F9D1, 0x200D, 0x1F91D, 0x200D, 0x1F9D1],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FB],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FC],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FD],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FE],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FF],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FC],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FD],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FE],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FF],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FB],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FD],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FE],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FF],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FB],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FC],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FE],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FF],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FB],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FC],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FD],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FF],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FB],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FC],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FD],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FE],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FC],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FD],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FE],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FF],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FB],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FD],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FE],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FF],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FB],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FC],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FE],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FF],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FB],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FC],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FD],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FF],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FB],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FC],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FD],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F469, 0x1F3FE],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F469, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F469, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F469, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F469, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F469, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F468, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F468, 0x1F3FC, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F468, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F468, 0x1F3FE, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F468, 0x1F3FF, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FC],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FD],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FE],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FF],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FB],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FD],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FE],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FF],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FB],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FC],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FE],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FF],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FB],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FC],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FD],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FF],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FB],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FC],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FD],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F9D1, 0x1F3FE],
    &[0x1F469, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F468, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468],
    &[0x1F468, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F468, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F468, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F468, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F468, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F468, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F468, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F468, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F468, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F468, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F468, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F468, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F468, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F468, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F468, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F468, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F468, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F468, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F468, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F468, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F468, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F468, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F468, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F468, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F468, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F469, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FB],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FC],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FD],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FE],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FF],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FC],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FD],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FE],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FF],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FB],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FD],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FE],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FF],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FB],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FC],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FE],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FF],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FB],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FC],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FD],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FF],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FB],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FC],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FD],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B, 0x200D, 0x1F469, 0x1F3FE],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FC],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FD],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FE],
    &[0x1F9D1, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FF],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FB],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FD],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FE],
    &[0x1F9D1, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FF],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FB],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FC],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FE],
    &[0x1F9D1, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FF],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FB],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FC],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FD],
    &[0x1F9D1, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FF],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FB],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FC],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FD],
    &[0x1F9D1, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F9D1, 0x1F3FE],
    &[0x1F469, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F468, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468],
    &[0x1F468, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F468, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F468, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F468, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F468, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F468, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F468, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F468, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F468, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F468, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F468, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F468, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F468, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F468, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F468, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F468, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F468, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F468, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F468, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F468, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F468, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FF],
    &[0x1F468, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FB],
    &[0x1F468, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FC],
    &[0x1F468, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FD],
    &[0x1F468, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468, 0x1F3FE],
    &[0x1F469, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FB],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FC],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FD],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FE],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FF],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FC],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FD],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FE],
    &[0x1F469, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FF],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FB],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FD],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FE],
    &[0x1F469, 0x1F3FC, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FF],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FB],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FC],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FE],
    &[0x1F469, 0x1F3FD, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FF],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FB],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FC],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FD],
    &[0x1F469, 0x1F3FE, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FF],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FB],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FC],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FD],
    &[0x1F469, 0x1F3FF, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F469, 0x1F3FE],
    &[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F466],
    &[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467],
    &[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466],
    &[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F466, 0x200D, 0x1F466],
    &[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F467],
    &[0x1F468, 0x200D, 0x1F468, 0x200D, 0x1F466],
    &[0x1F468, 0x200D, 0x1F468, 0x200D, 0x1F467],
    &[0x1F468, 0x200D, 0x1F468, 0x200D, 0x1F467, 0x200D, 0x1F466],
    &[0x1F468, 0x200D, 0x1F468, 0x200D, 0x1F466, 0x200D, 0x1F466],
    &[0x1F468, 0x200D, 0x1F468, 0x200D, 0x1F467, 0x200D, 0x1F467],
    &[0x1F469, 0x200D, 0x1F469, 0x200D, 0x1F466],
    &[0x1F469, 0x200D, 0x1F469, 0x200D, 0x1F467],
    &[0x1F469, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466],
    &[0x1F469, 0x200D, 0x1F469, 0x200D, 0x1F466, 0x200D, 0x1F466],
    &[0x1F469, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F467],
    &[0x1F468, 0x200D, 0x1F466],
    &[0x1F468, 0x200D, 0x1F466, 0x200D, 0x1F466],
    &[0x1F468, 0x200D, 0x1F467],
    &[0x1F468, 0x200D, 0x1F467, 0x200D, 0x1F466],
    &[0x1F468, 0x200D, 0x1F467, 0x200D, 0x1F467],
    &[0x1F469, 0x200D, 0x1F466],
    &[0x1F469, 0x200D, 0x1F466, 0x200D, 0x1F466],
    &[0x1F469, 0x200D, 0x1F467],
    &[0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466],
    &[0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F467],
    &[0x1F9D1, 0x200D, 0x1F9D1, 0x200D, 0x1F9D2],
    &[0x1F9D1, 0x200D, 0x1F9D1, 0x200D, 0x1F9D2, 0x200D, 0x1F9D2],
    &[0x1F9D1, 0x200D, 0x1F9D2],
    &[0x1F9D1, 0x200D, 0x1F9D2, 0x200D, 0x1F9D2],
    &[0x1F415, 0x200D, 0x1F9BA],
    &[0x1F408, 0x200D, 0x2B1B],
    &[0x1F43B, 0x200D, 0x2744, 0xFE0F],
    &[0x1F426, 0x200D, 0x2B1B],
    &[0x1F426, 0x200D, 0x1F525],
    &[0x1F34B, 0x200D, 0x1F7E9],
    &[0x1F344, 0x200D, 0x1F7EB],
    &[0x26D3, 0xFE0F, 0x200D, 0x1F4A5],
    &[0x1F3F3, 0xFE0F, 0x200D, 0x1F308],
    &[0x1F3F3, 0xFE0F, 0x200D, 0x26A7, 0xFE0F],
    &[0x1F3F4, 0x200D, 0x2620, 0xFE0F],
];

fn flag_sequence(region: &str) -> Vec<u32> {
    region
        .bytes()
        .map(|b| REGIONAL_INDICATOR_A + u32::from(b - b'A'))
        .collect()
}

fn tag_sequence(subdivision: &str) -> Vec<u32> {
    let mut sequence = Vec::with_capacity(subdivision.len() + 2);
    sequence.push(BLACK_FLAG);
    sequence.extend(subdivision.bytes().map(|b| TAG_BASE + u32::from(b)));
    sequence.push(CANCEL_TAG);
    sequence
}

/// The code point sequences making up the sequence property `name`, or
/// `None` if `name` is not a table-backed sequence property.
pub(crate) fn emoji_sequences(name: &str) -> Option<Vec<Vec<u32>>> {
    let sequences: Vec<Vec<u32>> = match name {
        "Emoji_Flag_Sequence" | "RGI_Emoji_Flag_Sequence" => {
            FLAG_REGIONS.iter().map(|region| flag_sequence(region)).collect()
        }
        "Emoji_Tag_Sequence" | "RGI_Emoji_Tag_Sequence" => TAG_SUBDIVISIONS
            .iter()
            .map(|subdivision| tag_sequence(subdivision))
            .collect(),
        "Emoji_ZWJ_Sequence" | "RGI_Emoji_ZWJ_Sequence" => {
            ZWJ_SEQUENCES.iter().map(|sequence| sequence.to_vec()).collect()
        }
        _ => return None,
    };
    Some(sequences)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    const ZWJ: u32 = 0x200D;

    #[test]
    fn flags() {
        let flags = emoji_sequences("RGI_Emoji_Flag_Sequence").unwrap();
        assert_eq!(flags.len(), FLAG_REGIONS.len());
        assert!(flags.contains(&vec![0x1F1FA, 0x1F1F8]));
        assert!(flags.iter().all(|flag| flag.len() == 2));
        assert_eq!(emoji_sequences("Emoji_Flag_Sequence"), Some(flags));
    }

    #[test]
    fn tags() {
        let tags = emoji_sequences("RGI_Emoji_Tag_Sequence").unwrap();
        assert_eq!(
            tags[0],
            vec![0x1F3F4, 0xE0067, 0xE0062, 0xE0065, 0xE006E, 0xE0067, 0xE007F]
        );
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn zwj_sequences() {
        let sequences = emoji_sequences("RGI_Emoji_ZWJ_Sequence").unwrap();
        assert_eq!(sequences.len(), ZWJ_SEQUENCES.len());
        assert!(sequences.contains(&vec![0x1F3F3, 0xFE0F, ZWJ, 0x1F308]));
        for sequence in &sequences {
            assert!(sequence.contains(&ZWJ), "{:x?}", sequence);
            assert_ne!(sequence.first(), Some(&ZWJ));
            assert_ne!(sequence.last(), Some(&ZWJ));
        }
    }

    #[test]
    fn other_names() {
        assert_eq!(emoji_sequences("Emoji_Keycap_Sequence"), None);
        assert_eq!(emoji_sequences("rgi_emoji_flag_sequence"), None);
        assert_eq!(emoji_sequences("Emoji"), None);
    }
}
