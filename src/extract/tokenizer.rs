use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A digit directly followed by a letter, as in "10km" or "5kg"
    static ref DIGIT_LETTER: Regex = Regex::new(r"(\d)(\p{Alphabetic})").unwrap();
}

/// Characters that end a token besides whitespace.
/// '.' is kept for decimals. '-', '/' and apostrophes stay inside a token so
/// "-5", "km/h" and "i'm" never yield a bare unit alias.
const DELIMITERS: &[char] = &[',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '`'];

/// Lower-case, trim, and separate a number glued to a following word
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    DIGIT_LETTER.replace_all(&lowered, "$1 $2").into_owned()
}

/// Split normalized text into tokens. A trailing sentence period is dropped
/// from each token so "pounds." reads as "pounds".
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(|c: char| c.is_whitespace() || DELIMITERS.contains(&c))
        .map(|token| token.trim_end_matches('.'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// A plain decimal literal: digits with at most one decimal point
pub fn is_numeric_literal(token: &str) -> bool {
    let mut seen_point = false;
    let mut seen_digit = false;
    for c in token.chars() {
        match c {
            '.' if !seen_point => seen_point = true,
            c if c.is_ascii_digit() => seen_digit = true,
            _ => return false,
        }
    }
    seen_digit
}
