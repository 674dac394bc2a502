//! Character-class predicates. Out-of-scope as a primary deliverable per the
//! design — these are thin wrappers over `char`'s own classification, kept
//! here only so the grammar has a single place to call them from.

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_alpha(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

pub fn is_alpha_num(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}
