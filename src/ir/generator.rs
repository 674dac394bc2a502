//! The IR generator: a name-indexed dispatch table mapping each grammar
//! term/token name to a walker. `Walk(node) = table[node.name](node, seq,
//! state)`.
//!
//! Productions the design defers IR lowering for (the arithmetic/logical
//! operator ladder, loop/condition/lambda forms, and the two operator-token
//! kinds) still get an explicit table entry — a conservative "walk my
//! children in order, emit nothing of my own" stub — rather than being
//! absent from the table. A future pass can replace just those entries
//! without touching the table's shape. A name that is not one the grammar
//! can ever produce is a bug, not a deferred feature, and panics.

use super::instruction::{Instruction, block, function, literal, object};
use crate::stringconv;
use crate::tree::{Kind, Observer};

/// Which declaration form (`var`/`const`) children of a `ConstraintExpression`
/// are currently being walked under, threaded through `Walk` as shared
/// mutable state (mirrors the original's `SetStateProp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectProp {
    Invalid,
    Var,
    Const,
}

#[derive(Debug)]
struct State {
    object_prop: ObjectProp,
}

impl Default for State {
    fn default() -> Self {
        State { object_prop: ObjectProp::Invalid }
    }
}

pub type Sequence = Vec<Instruction>;

/// Walks `root` (the synthetic tree root, whose one child is the top term)
/// and returns the emitted instruction sequence.
pub fn generate(root: Observer<'_, '_>) -> Sequence {
    let mut seq = Sequence::new();
    let mut state = State::default();
    for child in root.children() {
        walk(child, &mut seq, &mut state);
    }
    seq
}

fn walk_children(node: Observer<'_, '_>, seq: &mut Sequence, state: &mut State) {
    for child in node.children() {
        walk(child, seq, state);
    }
}

fn walk(node: Observer<'_, '_>, seq: &mut Sequence, state: &mut State) {
    let unit = node.value();
    match unit.name.as_str() {
        "IntLiteral" => seq.push(literal::int(
            stringconv::parse_int(unit.value).unwrap_or_else(|e| panic!("{e}")),
        )),
        "FloatLiteral" => seq.push(literal::float(
            stringconv::parse_float(unit.value).unwrap_or_else(|e| panic!("{e}")),
        )),
        "StringLiteral" => {
            let body = stringconv::strip_quotes(unit.value);
            seq.push(literal::string(stringconv::unescape(body)));
        }
        "NullLiteral" => seq.push(literal::null()),
        "UndefinedLiteral" | "UndefExpression" => seq.push(literal::undef()),
        "TrueLiteral" => seq.push(literal::bool(true)),
        "FalseLiteral" => seq.push(literal::bool(false)),
        "Identifier" => seq.push(object::use_(unit.value)),

        "ArrayList" => walk_bracketed(node, seq, state, "array.literal"),
        "DictList" => walk_bracketed(node, seq, state, "dict.literal"),

        "Expression" | "PatternExpression" => walk_separated_automaton(node, seq, state),

        "VarDefineExpression" => walk_define(node, seq, state, ObjectProp::Var),
        "ConstDefineExpression" => walk_define(node, seq, state, ObjectProp::Const),

        "ConstraintExpression" | "ConstraintExpressionAtPatternExpression" => {
            walk_constraint(node, seq, state)
        }

        // Tree shape is fully specified (grammar.rs) but IR lowering for
        // these is deferred; walk children so literals/identifiers nested
        // inside still emit, without claiming an opcode for the wrapper
        // itself.
        "PairExpression"
        | "AssignmentExpression"
        | "LogicalOrExpression"
        | "LogicalAndExpression"
        | "EqualityExpression"
        | "RelationalExpression"
        | "AdditiveExpression"
        | "MultiplicativeExpression"
        | "UnaryExpression"
        | "FoldExpression"
        | "PointExpression"
        | "FunctionExpression"
        | "LambdaExpression"
        | "ConditionExpression"
        | "ReturnExpression"
        | "BreakExpression"
        | "ContinueExpression"
        | "WhileLoopExpression"
        | "DoWhileLoopExpression" => walk_children(node, seq, state),

        // Operator tokens carry no instruction of their own (deferred along
        // with the productions that capture them).
        "BinaryOperator" | "UnaryOperator" | "Separator" => {}

        other => match unit.kind {
            Kind::Term => unreachable!("IR generator: unknown term name {other:?}"),
            Kind::Token => unreachable!("IR generator: unknown token name {other:?}"),
        },
    }
}

fn walk_bracketed(node: Observer<'_, '_>, seq: &mut Sequence, state: &mut State, ctor_name: &str) {
    seq.push(block::begin());
    seq.push(object::use_(ctor_name));
    walk_children(node, seq, state);
    seq.push(function::call());
}

/// Drives the two-state DFA described for `Expression`/`PatternExpression`:
/// `value` on a non-separator child (emit `Block.Begin`, walk it, go to
/// `sep`); `sep` on a `Separator` child (`;` -> `Block.End`, `,` ->
/// `Block.Drop`, go back to `value`). A closing `Block.End` is emitted if
/// the automaton ends in `sep` (no trailing separator was present).
fn walk_separated_automaton(node: Observer<'_, '_>, seq: &mut Sequence, state: &mut State) {
    #[derive(PartialEq, Eq)]
    enum Dfa {
        Value,
        Sep,
    }
    let mut dfa = Dfa::Value;
    for child in node.children() {
        let is_separator = child.value().name == "Separator";
        match dfa {
            Dfa::Value => {
                assert!(!is_separator, "Expression automaton: leading separator");
                seq.push(block::begin());
                walk(child, seq, state);
                dfa = Dfa::Sep;
            }
            Dfa::Sep => {
                assert!(is_separator, "Expression automaton: two values with no separator");
                match child.value().value {
                    ";" => seq.push(block::end()),
                    "," => seq.push(block::drop()),
                    other => unreachable!("Expression automaton: unexpected separator {other:?}"),
                }
                dfa = Dfa::Value;
            }
        }
    }
    if dfa == Dfa::Sep {
        seq.push(block::end());
    }
}

fn walk_define(node: Observer<'_, '_>, seq: &mut Sequence, state: &mut State, prop: ObjectProp) {
    seq.push(object::begin());
    let children: Vec<_> = node.children().collect();
    let has_initializer = children.len() > 1;
    state.object_prop = prop;
    for child in &children {
        walk(*child, seq, state);
    }
    state.object_prop = ObjectProp::Invalid;
    if has_initializer {
        seq.push(object::end_with_init());
    } else {
        seq.push(object::end());
    }
}

/// Walks `ConstraintExpression`/`ConstraintExpressionAtPatternExpression`.
/// Children are positional, not classified by kind: the first child is
/// always the declared name, an optional `Separator` right after it marks a
/// pack parameter (only `...AtPatternExpression` ever produces one), and
/// whatever remains is the type constraint — which may itself be an
/// `Identifier` (a primitive type name), so it cannot be told apart from the
/// name by shape alone.
fn walk_constraint(node: Observer<'_, '_>, seq: &mut Sequence, state: &mut State) {
    let children: Vec<_> = node.children().collect();
    let name = children[0].value().value;
    let mut idx = 1;
    let mut is_pack = false;
    if let Some(c) = children.get(idx)
        && c.value().kind == Kind::Token
        && c.value().name == "Separator"
    {
        is_pack = true;
        idx += 1;
    }
    let constraint = children.get(idx).copied();
    let has_constraint = constraint.is_some();
    if let Some(c) = constraint {
        walk(c, seq, state);
    }
    let instr = match (state.object_prop, is_pack, has_constraint) {
        (ObjectProp::Var, false, false) => object::var(name),
        (ObjectProp::Var, false, true) => object::var_with_constraint(name),
        (ObjectProp::Var, true, false) => object::var_pack(name),
        (ObjectProp::Var, true, true) => object::var_pack_with_constraint(name),
        (ObjectProp::Const, false, false) => object::const_(name),
        (ObjectProp::Const, false, true) => object::const_with_constraint(name),
        (ObjectProp::Const, true, false) => object::const_pack(name),
        (ObjectProp::Const, true, true) => object::const_pack_with_constraint(name),
        (ObjectProp::Invalid, ..) => {
            unreachable!("ConstraintExpression walked outside a Var/Const declaration")
        }
    };
    seq.push(instr);
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
