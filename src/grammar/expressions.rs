//! The operator-precedence ladder, from `Expression` (lowest) down to
//! `FunctionExpression`, and the control-flow sub-ladder it bottoms out
//! into (`do`/`while`/`break`/`continue`/`return`/`if`/`fn`) before reaching
//! `DefineExpression` in `lists.rs`.
//!
//! Every precedence level opens with `ChangeIn(name)` and closes with
//! `ChangeOut(cutUnused=true)`: if the level matched only one child (its
//! operator never appeared), the wrapper collapses away and the single
//! child takes its place directly. `PairExpression` and `AssignmentExpression`
//! are documented as right-grouping; unlike the other levels' flat
//! "X (op Y)*" shape, they recurse into themselves on the right so `a:b:c`
//! nests as `PairExpression(a, PairExpression(b, c))` rather than sitting
//! flat.
//!
//! `BreakExpression`/`ContinueExpression`/`ReturnExpression` are the
//! exception: their keyword is structural syntax, never captured as a
//! child, so `cutUnused` would be indistinguishable from "just erase this
//! node" whenever it has 0 or 1 children — which is always, since their
//! trailing value is optional. They close with `ChangeOut(cutUnused=false)`
//! instead, like the list-shaped productions in `lists.rs`.

use super::lists::{define_expression, list};
use super::tokens::{binary_operator, pack_marker};
use super::{kw, match_key, op_str, punct};
use crate::combinator::{Process, change_in, change_out, match_any_str, match_char};

/// `Expression = SingleExpr ((";" | ",") SingleExpr)* trailing sep?`.
pub(crate) fn expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        change_in("Expression")
            .then(super::multi_expression_package(single_expression()))
            .then(change_out(true))
    })
}

/// `SingleExpression = PairExpression` — a bare alias, no wrapper of its
/// own.
pub(crate) fn single_expression<'src>() -> Process<'src> {
    Process::lazy(false, pair_expression)
}

/// `PairExpression = AssignmentExpression (":" SingleExpr)?` (right-grouping).
pub(crate) fn pair_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        change_in("PairExpression")
            .then(assignment_expression())
            .then(punct(':').then(single_expression()).opt())
            .then(change_out(true))
    })
}

/// `AssignmentExpression = LogicalOrExpression (AssignOp SingleExpr)?`
/// (right-grouping).
pub(crate) fn assignment_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let assign_op = binary_operator(&["==", "+=", "-=", "*=", "/=", "%=", "="]);
        change_in("AssignmentExpression")
            .then(logical_or_expression())
            .then(assign_op.then(single_expression()).opt())
            .then(change_out(true))
    })
}

/// `LogicalOrExpression = LogicalAndExpression ("or" LogicalAndExpression)*`.
pub(crate) fn logical_or_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let op = super::tokens::binary_op_keyword("or");
        change_in("LogicalOrExpression")
            .then(logical_and_expression())
            .then(op.then(logical_and_expression()).many0())
            .then(change_out(true))
    })
}

/// `LogicalAndExpression = EqualityExpression ("and" EqualityExpression)*`.
pub(crate) fn logical_and_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let op = super::tokens::binary_op_keyword("and");
        change_in("LogicalAndExpression")
            .then(equality_expression())
            .then(op.then(equality_expression()).many0())
            .then(change_out(true))
    })
}

/// `EqualityExpression = RelationalExpression (("==" | "<>") RelationalExpression)*`.
pub(crate) fn equality_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let op = binary_operator(&["==", "<>"]);
        change_in("EqualityExpression")
            .then(relational_expression())
            .then(op.then(relational_expression()).many0())
            .then(change_out(true))
    })
}

/// `RelationalExpression = AdditiveExpression (("<=" | ">=" | ">" | "<" ^
/// ">") AdditiveExpression)*`.
pub(crate) fn relational_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let raw = match_any_str(&["<=", ">="]).or(match_any_str(&[">"])).or(match_char('<').not_followed_by(match_char('>')));
        let op = super::term(crate::combinator::catch_token(raw, "BinaryOperator"));
        change_in("RelationalExpression")
            .then(additive_expression())
            .then(op.then(additive_expression()).many0())
            .then(change_out(true))
    })
}

/// `AdditiveExpression = MultiplicativeExpression (("+" | "-") ^ "="
/// MultiplicativeExpression)*`.
pub(crate) fn additive_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let raw = match_any_str(&["+", "-"]).not_followed_by(match_char('='));
        let op = super::term(crate::combinator::catch_token(raw, "BinaryOperator"));
        change_in("AdditiveExpression")
            .then(multiplicative_expression())
            .then(op.then(multiplicative_expression()).many0())
            .then(change_out(true))
    })
}

/// `MultiplicativeExpression = UnaryExpression (("*" | "/" | "%") ^ "="
/// UnaryExpression)*`.
pub(crate) fn multiplicative_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let raw = match_any_str(&["*", "/", "%"]).not_followed_by(match_char('='));
        let op = super::term(crate::combinator::catch_token(raw, "BinaryOperator"));
        change_in("MultiplicativeExpression")
            .then(unary_expression())
            .then(op.then(unary_expression()).many0())
            .then(change_out(true))
    })
}

/// `UnaryExpression = (("+" | "-" | "not"))* FoldExpression`.
pub(crate) fn unary_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let raw = match_any_str(&["+", "-"]).or(match_key("not"));
        let op = super::term(crate::combinator::catch_token(raw, "UnaryOperator"));
        change_in("UnaryExpression").then(op.many0()).then(fold_expression()).then(change_out(true))
    })
}

/// `FoldExpression = PointExpression "..."?`.
pub(crate) fn fold_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        change_in("FoldExpression")
            .then(point_expression())
            .then(pack_marker().opt())
            .then(change_out(true))
    })
}

/// `PointExpression = FunctionExpression ("->" FunctionExpression)*`.
pub(crate) fn point_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        change_in("PointExpression")
            .then(function_expression())
            .then(op_str("->").then(function_expression()).many0())
            .then(change_out(true))
    })
}

/// `FunctionExpression = DoWhileLoopExpression List*`.
pub(crate) fn function_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        change_in("FunctionExpression")
            .then(do_while_loop_expression())
            .then(list().many0())
            .then(change_out(true))
    })
}

/// `DoWhileLoopExpression = "do" SingleExpr "while" "(" Expression ")"
/// ("else" SingleExpr)? | WhileLoopExpression`.
pub(crate) fn do_while_loop_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let form = change_in("DoWhileLoopExpression")
            .then(kw("do"))
            .then(single_expression())
            .then(kw("while"))
            .then(punct('('))
            .then(expression())
            .then(punct(')'))
            .then(kw("else").then(single_expression()).opt())
            .then(change_out(true));
        form.or(while_loop_expression())
    })
}

/// `WhileLoopExpression = "while" "(" Expression ")" SingleExpr ("else"
/// SingleExpr)? | LoopControlExpression`.
pub(crate) fn while_loop_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let form = change_in("WhileLoopExpression")
            .then(kw("while"))
            .then(punct('('))
            .then(expression())
            .then(punct(')'))
            .then(single_expression())
            .then(kw("else").then(single_expression()).opt())
            .then(change_out(true));
        form.or(loop_control_expression())
    })
}

/// `LoopControlExpression = BreakExpression | ContinueExpression |
/// ReturnExpression`.
fn loop_control_expression<'src>() -> Process<'src> {
    Process::lazy(false, || break_expression().or(continue_expression()).or(return_expression()))
}

/// `BreakExpression = "break" SingleExpression?`. The `break` keyword is
/// structural syntax, never captured as a child, so unlike the precedence
/// ladder above, this wrapper is kept even with 0 or 1 children — cutting it
/// would erase the only trace that a `break` happened.
pub(crate) fn break_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        change_in("BreakExpression")
            .then(kw("break"))
            .then(single_expression().opt())
            .then(change_out(false))
    })
}

/// `ContinueExpression = "continue" SingleExpression?` (see `BreakExpression`).
pub(crate) fn continue_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        change_in("ContinueExpression")
            .then(kw("continue"))
            .then(single_expression().opt())
            .then(change_out(false))
    })
}

/// `ReturnExpression = "return" SingleExpression? | ConditionExpression`
/// (see `BreakExpression`).
pub(crate) fn return_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let form = change_in("ReturnExpression")
            .then(kw("return"))
            .then(single_expression().opt())
            .then(change_out(false));
        form.or(condition_expression())
    })
}

/// `ConditionExpression = "if" "(" Expression ")" SingleExpression ("else"
/// SingleExpression)? | LambdaExpression`.
pub(crate) fn condition_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let form = change_in("ConditionExpression")
            .then(kw("if"))
            .then(punct('('))
            .then(expression())
            .then(punct(')'))
            .then(single_expression())
            .then(kw("else").then(single_expression()).opt())
            .then(change_out(true));
        form.or(lambda_expression())
    })
}

/// `LambdaExpression = "fn" PatternExpression SingleExpression |
/// DefineExpression`.
pub(crate) fn lambda_expression<'src>() -> Process<'src> {
    Process::lazy(false, || {
        let form = change_in("LambdaExpression")
            .then(kw("fn"))
            .then(super::lists::pattern_expression())
            .then(single_expression())
            .then(change_out(true));
        form.or(define_expression())
    })
}

#[cfg(test)]
#[path = "expressions_tests.rs"]
mod tests;
