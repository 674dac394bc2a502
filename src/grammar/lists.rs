//! List-shaped productions (`List` and its four alternatives), constraints
//! and patterns, and the `var`/`const` declaration forms. None of these cut
//! unused units even when they end up with fewer than two children — unlike
//! the precedence ladder, an empty `ArrayList` or a bare `var x` constraint
//! is a meaningful shape in its own right, not a pass-through wrapper.

use super::expressions::single_expression;
use super::tokens::identifier;
use super::{kw, punct};
use crate::combinator::{Process, change_in, change_out};

/// `UndefExpression = "(" ")"`.
pub(crate) fn undef_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        change_in("UndefExpression").then(punct('(')).then(punct(')')).then(change_out(false))
    })
}

/// `ExpressionList = "(" Expression ")"` — produces the inner `Expression`
/// only; it is not itself wrapped in a term.
pub(crate) fn expression_list<'src>() -> Process<'src> {
    Process::lazy(false, || punct('(').then(super::expressions::expression()).then(punct(')')))
}

/// `ArrayList = "[" (SingleExpr ("," SingleExpr)*)? "]"`.
pub(crate) fn array_list<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let items = single_expression().then(punct(',').then(single_expression()).many0());
        change_in("ArrayList")
            .then(punct('['))
            .then(items.opt())
            .then(punct(']'))
            .then(change_out(false))
    })
}

/// `DictList = "{" (SingleExpr ("," SingleExpr)*)? "}"`.
pub(crate) fn dict_list<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let items = single_expression().then(punct(',').then(single_expression()).many0());
        change_in("DictList")
            .then(punct('{'))
            .then(items.opt())
            .then(punct('}'))
            .then(change_out(false))
    })
}

/// `List = UndefExpression | ExpressionList | ArrayList | DictList`.
pub(crate) fn list<'src>() -> Process<'src> {
    Process::lazy(false, || {
        undef_expression().or(expression_list()).or(array_list()).or(dict_list())
    })
}

/// `PrimaryExpression = Literal | Identifier | List`.
pub(crate) fn primary_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        super::tokens::literal().or(identifier()).or(list())
    })
}

/// `ConstraintExpression = Identifier (":" PrimaryExpression)?`.
pub(crate) fn constraint_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        change_in("ConstraintExpression")
            .then(identifier())
            .then(punct(':').then(primary_expression()).opt())
            .then(change_out(false))
    })
}

/// `ConstraintExpressionAtPatternExpression = Identifier "..."? (":"
/// SingleExpr)?` — the `...` becomes a `Separator` child marking a pack
/// parameter.
pub(crate) fn constraint_expression_at_pattern_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        change_in("ConstraintExpressionAtPatternExpression")
            .then(identifier())
            .then(super::tokens::pack_marker().opt())
            .then(punct(':').then(single_expression()).opt())
            .then(change_out(false))
    })
}

/// `PatternExpression = "(" (")" | ConstraintAtPattern (("," | ";")
/// ConstraintAtPattern)* sep?) (":" PrimaryExpression)?`.
pub(crate) fn pattern_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let params = super::multi_expression_package(constraint_expression_at_pattern_expression());
        let body = punct(')').or(params.then(punct(')')));
        change_in("PatternExpression")
            .then(punct('('))
            .then(body)
            .then(punct(':').then(primary_expression()).opt())
            .then(change_out(false))
    })
}

/// `VarDefineExpression = "var" (ConstraintExpression | PatternExpression)
/// List?`.
pub(crate) fn var_define_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        change_in("VarDefineExpression")
            .then(kw("var"))
            .then(constraint_expression().or(pattern_expression()))
            .then(list().opt())
            .then(change_out(false))
    })
}

/// `ConstDefineExpression = "const" (ConstraintExpression |
/// PatternExpression) List?`.
pub(crate) fn const_define_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        change_in("ConstDefineExpression")
            .then(kw("const"))
            .then(constraint_expression().or(pattern_expression()))
            .then(list().opt())
            .then(change_out(false))
    })
}

/// `DefineExpression = VarDefineExpression | ConstDefineExpression |
/// PrimaryExpression`.
pub(crate) fn define_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        var_define_expression().or(const_define_expression()).or(primary_expression())
    })
}

#[cfg(test)]
#[path = "lists_tests.rs"]
mod tests;
