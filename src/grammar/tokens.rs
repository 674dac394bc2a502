//! Token-level productions: each skips leading blank (`Term`), then wraps
//! its match in `Catch(_, "Name")` so the matched slice becomes a `Token`
//! child at the cursor.

use super::{match_key, term};
use crate::chartype::{is_alpha, is_alpha_num, is_digit};
use crate::combinator::{Process, catch_token, match_any_str, match_char, match_chars, match_pred};

pub(crate) fn int_literal<'src>() -> Process<'src> {
    term(catch_token(match_pred(is_digit).many1(), "IntLiteral"))
}

pub(crate) fn float_literal<'src>() -> Process<'src> {
    let int_part = match_pred(is_digit).many1();
    let frac_part = match_char('.').then(match_pred(is_digit).many1());
    let exponent = match_chars(&['e', 'E'])
        .then(match_chars(&['+', '-']).opt())
        .then(match_pred(is_digit).many1());
    term(catch_token(int_part.then(frac_part).then(exponent.opt()), "FloatLiteral"))
}

fn escaped_character<'src>() -> Process<'src> {
    match_char('\\').then(match_chars(&['"', '\\', 'b', 'f', 'n', 'r', 't', 'v']))
}

fn unescaped_character<'src>() -> Process<'src> {
    match_pred(|c| c != '"' && c != '\\')
}

pub(crate) fn string_literal<'src>() -> Process<'src> {
    let body = escaped_character().or(unescaped_character()).many0();
    term(catch_token(match_char('"').then(body).then(match_char('"')), "StringLiteral"))
}

pub(crate) fn identifier<'src>() -> Process<'src> {
    term(catch_token(match_pred(is_alpha).then(match_pred(is_alpha_num).many0()), "Identifier"))
}

pub(crate) fn null_literal<'src>() -> Process<'src> {
    term(catch_token(match_key("null"), "NullLiteral"))
}

pub(crate) fn undefined_literal<'src>() -> Process<'src> {
    term(catch_token(match_key("undefined"), "UndefinedLiteral"))
}

pub(crate) fn true_literal<'src>() -> Process<'src> {
    term(catch_token(match_key("true"), "TrueLiteral"))
}

pub(crate) fn false_literal<'src>() -> Process<'src> {
    term(catch_token(match_key("false"), "FalseLiteral"))
}

/// `Literal = FloatLiteral | IntLiteral | StringLiteral | NullLiteral |
/// UndefinedLiteral | TrueLiteral | FalseLiteral` — float is tried before
/// int so `1.5` isn't partially consumed as `IntLiteral("1")` plus `.5`.
pub(crate) fn literal<'src>() -> Process<'src> {
    float_literal()
        .or(int_literal())
        .or(string_literal())
        .or(null_literal())
        .or(undefined_literal())
        .or(true_literal())
        .or(false_literal())
}

/// The `,` / `;` statement separator used by
/// [`super::multi_expression_package`] (shared by `Expression` and
/// `PatternExpression`'s parameter list). Never matches `...` — a pack
/// marker belongs to the element it follows, not to this wrapper.
pub(crate) fn stmt_separator<'src>() -> Process<'src> {
    term(catch_token(match_any_str(&[",", ";"]), "Separator"))
}

/// The `...` pack/fold marker specifically — unlike [`stmt_separator`],
/// never matches a bare `,` or `;`, so it can be used as an optional suffix
/// right before one of those without swallowing it.
pub(crate) fn pack_marker<'src>() -> Process<'src> {
    use crate::combinator::match_str;
    term(catch_token(match_str("..."), "Separator"))
}

pub(crate) fn binary_operator<'src>(options: &'static [&'static str]) -> Process<'src> {
    term(catch_token(match_any_str(options), "BinaryOperator"))
}

/// A keyword-bounded operator (`or`, `and`, `not`) captured as the given
/// token kind.
pub(crate) fn binary_op_keyword<'src>(word: &'static str) -> Process<'src> {
    term(catch_token(match_key(word), "BinaryOperator"))
}

#[cfg(test)]
#[path = "tokens_tests.rs"]
mod tests;
