//! Numeric and escape-sequence conversion helpers. Out-of-scope as a primary
//! deliverable per the design — standard-library wrappers, not part of the
//! combinator/grammar/IR engineering this crate exists to demonstrate.

use crate::error::Error;

pub fn parse_int(slice: &str) -> Result<i64, Error> {
    slice.parse::<i64>().map_err(|_| Error::NumericOverflow { literal: slice.to_string(), ty: "i64" })
}

pub fn parse_float(slice: &str) -> Result<f64, Error> {
    slice.parse::<f64>().map_err(|_| Error::NumericOverflow { literal: slice.to_string(), ty: "f64" })
}

/// Decodes the body of a `StringLiteral` token (quotes already stripped),
/// recognizing `\" \\ \b \f \n \r \t \v` and silently dropping any other
/// escaped character.
pub fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('v') => out.push('\u{b}'),
            Some(_) | None => {}
        }
    }
    out
}

/// Strips the leading and trailing `"` from a raw `StringLiteral` token
/// slice.
pub fn strip_quotes(slice: &str) -> &str {
    slice.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(slice)
}

#[cfg(test)]
#[path = "stringconv_tests.rs"]
mod tests;
