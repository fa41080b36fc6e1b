//! Look-alike characters for π's operators and delimiters.
//!
//! Used only to attach a "did you mean" hint to an unrecognized-character
//! error. Classification itself stays ASCII-only.

/// Characters visually similar to a π token, sorted by codepoint for
/// binary search.
///
/// Format: `(found_char, suggested_ascii, unicode_name)`
const CONFUSABLES: &[(char, char, &str)] = &[
    ('\u{00D7}', '*', "Multiplication Sign"),
    ('\u{00F7}', '/', "Division Sign"),
    ('\u{2010}', '-', "Hyphen"),
    ('\u{2011}', '-', "Non-Breaking Hyphen"),
    ('\u{2012}', '-', "Figure Dash"),
    ('\u{2013}', '-', "En Dash"),
    ('\u{2014}', '-', "Em Dash"),
    ('\u{2044}', '/', "Fraction Slash"),
    ('\u{2212}', '-', "Minus Sign"),
    ('\u{2215}', '/', "Division Slash"),
    ('\u{2217}', '*', "Asterisk Operator"),
    ('\u{2236}', ':', "Ratio"),
    ('\u{2768}', '(', "Medium Left Parenthesis Ornament"),
    ('\u{2769}', ')', "Medium Right Parenthesis Ornament"),
    ('\u{FF08}', '(', "Fullwidth Left Parenthesis"),
    ('\u{FF09}', ')', "Fullwidth Right Parenthesis"),
    ('\u{FF0A}', '*', "Fullwidth Asterisk"),
    ('\u{FF0B}', '+', "Fullwidth Plus Sign"),
    ('\u{FF0D}', '-', "Fullwidth Hyphen-Minus"),
    ('\u{FF0F}', '/', "Fullwidth Solidus"),
    ('\u{FF1A}', ':', "Fullwidth Colon"),
    ('\u{FF1D}', '=', "Fullwidth Equals Sign"),
    ('\u{FF3B}', '[', "Fullwidth Left Square Bracket"),
    ('\u{FF3D}', ']', "Fullwidth Right Square Bracket"),
    ('\u{FF5B}', '{', "Fullwidth Left Curly Bracket"),
    ('\u{FF5D}', '}', "Fullwidth Right Curly Bracket"),
];

/// Look up the ASCII token character `ch` is likely meant to be.
///
/// Returns `(suggested, unicode_name)`.
pub fn lookup_confusable(ch: char) -> Option<(char, &'static str)> {
    CONFUSABLES
        .binary_search_by_key(&ch, |&(found, _, _)| found)
        .ok()
        .map(|i| (CONFUSABLES[i].1, CONFUSABLES[i].2))
}
