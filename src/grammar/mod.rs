//! The concrete Chtholly grammar: ~30 productions layered by operator
//! precedence, built on the [`crate::combinator`] algebra.
//!
//! Every production is a plain function returning a [`Process`]. Because
//! `Process::lazy` defers building a production's body until it actually
//! runs, mutually-recursive productions (`Expression` reaches back to itself
//! through `List` -> `ExpressionList`) can call each other directly without
//! blowing the stack while merely being *constructed*.

mod expressions;
mod lists;
mod tokens;

use crate::combinator::{Info, Process, match_pred};
use crate::tree::ParseTree;

/// `Term(p) = (space | comment)* p` — skip whitespace/comments, then run
/// `p`. Applied at token boundaries inside productions, never inside tokens.
pub(crate) fn term<'src>(p: Process<'src>) -> Process<'src> {
    skip_blank().then(p)
}

fn skip_blank<'src>() -> Process<'src> {
    match_pred(crate::chartype::is_space).or(comment()).many0()
}

fn comment<'src>() -> Process<'src> {
    multi_line_comment().or(single_line_comment())
}

fn single_line_comment<'src>() -> Process<'src> {
    use crate::combinator::{any_char_until, match_char, match_str};
    match_str("//").then(any_char_until(match_char('\n')))
}

fn multi_line_comment<'src>() -> Process<'src> {
    use crate::combinator::{any_char_until, match_str};
    match_str("/*").then(any_char_until(match_str("*/")))
}

/// `MatchKey(w) = Match(w) ^ Match(alnum|_)` — a keyword literal that must
/// not be a prefix of a longer identifier.
pub(crate) fn match_key<'src>(word: &'static str) -> Process<'src> {
    use crate::combinator::match_str;
    match_str(word).not_followed_by(match_pred(crate::chartype::is_alpha_num))
}

/// A bare keyword used as structural syntax (not captured as a token),
/// blank-skipped first.
pub(crate) fn kw<'src>(word: &'static str) -> Process<'src> {
    term(match_key(word))
}

/// A single punctuation character used as structural syntax, blank-skipped
/// first.
pub(crate) fn punct<'src>(ch: char) -> Process<'src> {
    use crate::combinator::match_char;
    term(match_char(ch))
}

/// A literal operator/punctuation string used as structural syntax,
/// blank-skipped first.
pub(crate) fn op_str<'src>(s: &'static str) -> Process<'src> {
    use crate::combinator::match_str;
    term(match_str(s))
}

/// Shared by `Expression` and `PatternExpression`: `sub ((,|;) sub)* (,|;)?`.
///
/// Both separator positions are `,`/`;` only, never the 3-way `,`/`;`/`...`
/// set — a pack marker belongs to `sub` itself (via `FoldExpression`/
/// `ConstraintExpressionAtPatternExpression`), not to this wrapper.
///
/// The original also applies a cleanup pass (`RemoveFailedBlankTerm`) for a
/// doubled trailing separator left behind when a failed tail attempt still
/// committed its separator token. With the strict tree-mutation rollback
/// this crate's combinators perform (see `combinator` module docs), a failed
/// tail never leaves a stray separator in the first place, so that cleanup
/// pass is unnecessary here.
pub(crate) fn multi_expression_package<'src>(sub: Process<'src>) -> Process<'src> {
    let tail = tokens::stmt_separator().then(sub.clone());
    sub.then(tail.many0()).then(tokens::stmt_separator().opt())
}

/// Parses `source` as a top-level [`Expression`](expressions::expression),
/// returning the tree and the final `Info` (whose `remaining` slice is the
/// longest unconsumed suffix — empty on a full, successful parse).
pub fn parse(source: &str) -> (ParseTree<'_>, Info<'_>) {
    let mut tree = ParseTree::new();
    let info = Info { remaining: source, cursor: tree.root() };
    let result = expressions::expression().run(&mut tree, info);
    (tree, result)
}
