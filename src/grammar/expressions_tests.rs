use super::*;
use crate::combinator::Info;
use crate::tree::{NodeId, ParseTree};

fn run<'src>(p: &Process<'src>, src: &'src str) -> (ParseTree<'src>, Info<'src>) {
    let mut tree = ParseTree::new();
    let info = Info { remaining: src, cursor: tree.root() };
    let result = p.run(&mut tree, info);
    (tree, result)
}

fn names(tree: &ParseTree, id: NodeId) -> Vec<String> {
    tree.children(id).iter().map(|&c| tree.value(c).name.clone()).collect()
}

#[test]
fn a_single_literal_collapses_the_whole_ladder_down_to_the_literal_itself() {
    let (tree, r) = run(&expression(), "1");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "IntLiteral");
}

#[test]
fn a_string_literal_also_collapses_through_the_whole_ladder() {
    let (tree, r) = run(&expression(), r#""hi""#);
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "StringLiteral");
}

#[test]
fn additive_expression_keeps_its_wrapper_once_an_operator_appears() {
    let (tree, r) = run(&expression(), "1 + 2");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "AdditiveExpression");
    assert_eq!(names(&tree, top), vec!["IntLiteral", "BinaryOperator", "IntLiteral"]);
}

#[test]
fn additive_operator_is_not_followed_by_an_equals_sign_so_plus_equals_falls_to_assignment() {
    let (tree, r) = run(&expression(), "x += 1");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "AssignmentExpression");
    let op = tree.children(top)[1];
    assert_eq!(tree.value(op).value, "+=");
}

#[test]
fn relational_less_than_is_not_confused_with_not_equal_angle_brackets() {
    let (tree, r) = run(&expression(), "a <> b");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "EqualityExpression");
    let op = tree.children(top)[1];
    assert_eq!(tree.value(op).value, "<>");
}

#[test]
fn relational_less_than_alone_is_captured_as_a_relational_operator() {
    let (tree, r) = run(&expression(), "a < b");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "RelationalExpression");
}

#[test]
fn pair_expression_right_groups_chained_colons() {
    let (tree, r) = run(&expression(), "a:b:c");
    assert_eq!(r.remaining, "");
    let outer = tree.children(tree.root())[0];
    assert_eq!(tree.value(outer).name, "PairExpression");
    let outer_children = tree.children(outer);
    assert_eq!(tree.value(outer_children[0]).name, "Identifier");
    let inner = outer_children[1];
    assert_eq!(tree.value(inner).name, "PairExpression");
    assert_eq!(names(&tree, inner), vec!["Identifier", "Identifier"]);
}

#[test]
fn multi_statement_expression_uses_semicolons_to_separate_statements() {
    let (tree, r) = run(&expression(), "1;2,3");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "Expression");
    assert_eq!(
        names(&tree, top),
        vec!["IntLiteral", "Separator", "IntLiteral", "Separator", "IntLiteral"]
    );
}

#[test]
fn unary_expression_collects_prefix_operators_before_the_operand() {
    let (tree, r) = run(&expression(), "- - 1");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "UnaryExpression");
    assert_eq!(names(&tree, top), vec!["UnaryOperator", "UnaryOperator", "IntLiteral"]);
}

#[test]
fn fold_expression_keeps_its_wrapper_for_a_trailing_ellipsis() {
    let (tree, r) = run(&expression(), "x...");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "FoldExpression");
    assert_eq!(names(&tree, top), vec!["Identifier", "Separator"]);
}

#[test]
fn while_loop_expression_parses_condition_body_and_else() {
    let (tree, r) = run(&expression(), "while (1) 2 else 3");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "WhileLoopExpression");
    assert_eq!(names(&tree, top), vec!["IntLiteral", "IntLiteral", "IntLiteral"]);
}

#[test]
fn do_while_loop_expression_parses_body_then_condition() {
    let (tree, r) = run(&expression(), "do 1 while (2)");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "DoWhileLoopExpression");
    assert_eq!(names(&tree, top), vec!["IntLiteral", "IntLiteral"]);
}

#[test]
fn condition_expression_parses_an_if_with_no_else() {
    let (tree, r) = run(&expression(), "if (1) 2");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "ConditionExpression");
    assert_eq!(names(&tree, top), vec!["IntLiteral", "IntLiteral"]);
}

#[test]
fn break_continue_return_accept_an_optional_trailing_value() {
    let (tree, r) = run(&expression(), "break 1");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "BreakExpression");
    assert_eq!(names(&tree, top), vec!["IntLiteral"]);

    let (tree, r) = run(&expression(), "return");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "ReturnExpression");
    assert_eq!(tree.children_len(top), 0);
}

#[test]
fn lambda_expression_parses_a_pattern_and_a_body() {
    let (tree, r) = run(&expression(), "fn (x) x");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "LambdaExpression");
    assert_eq!(names(&tree, top), vec!["PatternExpression", "Identifier"]);
}

#[test]
fn function_expression_applies_a_trailing_argument_list() {
    let (tree, r) = run(&expression(), "f(1)");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "FunctionExpression");
    assert_eq!(names(&tree, top), vec!["Identifier", "IntLiteral"]);
}

#[test]
fn comments_and_whitespace_are_transparent_between_tokens() {
    let (tree, r) = run(&expression(), "1 /* c */ + // line\n 2");
    assert_eq!(r.remaining, "");
    let top = tree.children(tree.root())[0];
    assert_eq!(tree.value(top).name, "AdditiveExpression");
}
