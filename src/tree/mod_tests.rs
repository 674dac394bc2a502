use super::*;

fn leaf<'src>(name: &str, value: &'src str) -> ParseUnit<'src> {
    ParseUnit::token(name, value)
}

#[test]
fn new_tree_has_a_single_root_with_no_parent() {
    let tree = ParseTree::new();
    assert_eq!(tree.children(tree.root()).len(), 0);
    assert_eq!(tree.parent(tree.root()), None);
}

#[test]
fn push_back_and_front_maintain_order_and_parent_links() {
    let mut tree = ParseTree::new();
    let root = tree.root();
    let a = tree.push_back_child(root, leaf("A", "a"));
    let b = tree.push_back_child(root, leaf("B", "b"));
    let c = tree.push_front_child(root, leaf("C", "c"));
    assert_eq!(tree.children(root), &[c, a, b]);
    assert_eq!(tree.parent(a), Some(root));
    assert_eq!(tree.parent(b), Some(root));
    assert_eq!(tree.parent(c), Some(root));
    assert!(tree.check_parent_invariant());
}

#[test]
fn insert_child_places_at_exact_position() {
    let mut tree = ParseTree::new();
    let root = tree.root();
    let a = tree.push_back_child(root, leaf("A", "a"));
    let b = tree.push_back_child(root, leaf("B", "b"));
    let mid = tree.insert_child(root, 1, leaf("MID", "m"));
    assert_eq!(tree.children(root), &[a, mid, b]);
}

#[test]
fn pop_back_and_front_unlink_the_removed_node() {
    let mut tree = ParseTree::new();
    let root = tree.root();
    let a = tree.push_back_child(root, leaf("A", "a"));
    let b = tree.push_back_child(root, leaf("B", "b"));
    tree.pop_front_child(root);
    assert_eq!(tree.children(root), &[b]);
    assert_eq!(tree.parent(a), None);
    tree.pop_back_child(root);
    assert_eq!(tree.children(root), &[]);
    assert_eq!(tree.parent(b), None);
}

#[test]
fn erase_child_removes_by_position() {
    let mut tree = ParseTree::new();
    let root = tree.root();
    let a = tree.push_back_child(root, leaf("A", "a"));
    let b = tree.push_back_child(root, leaf("B", "b"));
    tree.erase_child(root, 0);
    assert_eq!(tree.children(root), &[b]);
    assert_eq!(tree.parent(a), None);
}

#[test]
fn erase_children_range_unlinks_every_removed_node() {
    let mut tree = ParseTree::new();
    let root = tree.root();
    let a = tree.push_back_child(root, leaf("A", "a"));
    let b = tree.push_back_child(root, leaf("B", "b"));
    let c = tree.push_back_child(root, leaf("C", "c"));
    tree.erase_children_range(root, 0, 2);
    assert_eq!(tree.children(root), &[c]);
    assert_eq!(tree.parent(a), None);
    assert_eq!(tree.parent(b), None);
}

#[test]
fn splice_out_replaces_node_with_its_children_in_place() {
    let mut tree = ParseTree::new();
    let root = tree.root();
    let before = tree.push_back_child(root, leaf("Before", "x"));
    let wrapper = tree.push_back_child(root, ParseUnit::term("Wrapper"));
    let gc1 = tree.push_back_child(wrapper, leaf("GC1", "1"));
    let gc2 = tree.push_back_child(wrapper, leaf("GC2", "2"));
    let after = tree.push_back_child(root, leaf("After", "y"));
    tree.splice_out(wrapper);
    assert_eq!(tree.children(root), &[before, gc1, gc2, after]);
    assert_eq!(tree.parent(gc1), Some(root));
    assert_eq!(tree.parent(gc2), Some(root));
}

#[test]
fn splice_out_of_a_childless_node_just_removes_it() {
    let mut tree = ParseTree::new();
    let root = tree.root();
    let a = tree.push_back_child(root, leaf("A", "a"));
    let empty = tree.push_back_child(root, ParseUnit::term("Empty"));
    let b = tree.push_back_child(root, leaf("B", "b"));
    tree.splice_out(empty);
    assert_eq!(tree.children(root), &[a, b]);
}

#[test]
fn copy_subtree_duplicates_values_and_rewrites_parents() {
    let mut tree = ParseTree::new();
    let root = tree.root();
    let src = tree.push_back_child(root, ParseUnit::term("Src"));
    tree.push_back_child(src, leaf("Leaf", "v"));
    let dst_parent = tree.push_back_child(root, ParseUnit::term("Dst"));
    let copy = tree.copy_subtree(src, dst_parent);
    assert_eq!(tree.children(dst_parent), &[copy]);
    assert_eq!(tree.children_len(copy), 1);
    let copied_leaf = tree.children(copy)[0];
    assert_eq!(tree.value(copied_leaf).value, "v");
    assert_eq!(tree.parent(copied_leaf), Some(copy));
    // original subtree is untouched
    assert_eq!(tree.children_len(src), 1);
    assert!(tree.check_parent_invariant());
}

#[test]
fn move_subtree_unlinks_from_old_parent_and_relinks_to_new() {
    let mut tree = ParseTree::new();
    let root = tree.root();
    let old_parent = tree.push_back_child(root, ParseUnit::term("Old"));
    let node = tree.push_back_child(old_parent, leaf("Node", "n"));
    let new_parent = tree.push_back_child(root, ParseUnit::term("New"));
    tree.move_subtree(node, new_parent);
    assert_eq!(tree.children(old_parent), &[]);
    assert_eq!(tree.children(new_parent), &[node]);
    assert_eq!(tree.parent(node), Some(new_parent));
    assert!(tree.check_parent_invariant());
}

#[test]
fn rollback_discards_nodes_allocated_since_the_checkpoint() {
    let mut tree = ParseTree::new();
    let root = tree.root();
    let kept = tree.push_back_child(root, leaf("Kept", "k"));
    let cp = tree.checkpoint();
    tree.push_back_child(root, leaf("Discarded1", "d1"));
    tree.push_back_child(root, leaf("Discarded2", "d2"));
    tree.rollback(cp);
    assert_eq!(tree.children(root), &[kept]);
    assert!(tree.check_parent_invariant());
}

#[test]
fn rollback_to_a_point_before_a_nested_checkpoint_also_undoes_nested_work() {
    let mut tree = ParseTree::new();
    let root = tree.root();
    let cp_outer = tree.checkpoint();
    let wrapper = tree.push_back_child(root, ParseUnit::term("Wrapper"));
    let cp_inner = tree.checkpoint();
    tree.push_back_child(wrapper, leaf("Inner", "i"));
    tree.rollback(cp_inner);
    assert_eq!(tree.children_len(wrapper), 0);
    tree.rollback(cp_outer);
    assert_eq!(tree.children(root), &[]);
}
