//! Read/write/structural cursor roles over a [`ParseTree`].
//!
//! `Observer` only navigates; `Visitor` adds in-place value mutation;
//! `Modifier` adds structural mutation. Each is a thin `(tree ref, NodeId)`
//! pair — the permission tiering is enforced by which reference (`&` vs
//! `&mut`) and which methods each struct exposes, not by runtime checks.

use super::{NodeId, ParseTree, ParseUnit};

/// Read-only navigation over a tree.
#[derive(Clone, Copy)]
pub struct Observer<'t, 'src> {
    tree: &'t ParseTree<'src>,
    id: NodeId,
}

impl<'t, 'src> Observer<'t, 'src> {
    pub fn new(tree: &'t ParseTree<'src>, id: NodeId) -> Self {
        Observer { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &'t ParseUnit<'src> {
        self.tree.value(self.id)
    }

    pub fn parent(&self) -> Option<Observer<'t, 'src>> {
        self.tree.parent(self.id).map(|id| Observer { tree: self.tree, id })
    }

    pub fn children(&self) -> impl Iterator<Item = Observer<'t, 'src>> + 't {
        let tree = self.tree;
        tree.children(self.id).iter().map(move |&id| Observer { tree, id })
    }

    pub fn children_size(&self) -> usize {
        self.tree.children_len(self.id)
    }

    pub fn children_empty(&self) -> bool {
        self.children_size() == 0
    }

    pub fn child(&self, index: usize) -> Observer<'t, 'src> {
        Observer { tree: self.tree, id: self.tree.children(self.id)[index] }
    }
}

impl PartialEq for Observer<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Observer<'_, '_> {}

/// `Observer` permissions plus in-place mutation of a node's own value.
pub struct Visitor<'t, 'src> {
    tree: &'t mut ParseTree<'src>,
    id: NodeId,
}

impl<'t, 'src> Visitor<'t, 'src> {
    pub fn new(tree: &'t mut ParseTree<'src>, id: NodeId) -> Self {
        Visitor { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &ParseUnit<'src> {
        self.tree.value(self.id)
    }

    pub fn set_value(&mut self, value: ParseUnit<'src>) {
        *self.tree.value_mut(self.id) = value;
    }

    pub fn as_observer(&self) -> Observer<'_, 'src> {
        Observer::new(self.tree, self.id)
    }
}

/// `Visitor` permissions plus structural mutation: push/pop/insert/erase
/// children and copy/move whole subtrees between cursors.
pub struct Modifier<'t, 'src> {
    tree: &'t mut ParseTree<'src>,
    id: NodeId,
}

impl<'t, 'src> Modifier<'t, 'src> {
    pub fn new(tree: &'t mut ParseTree<'src>, id: NodeId) -> Self {
        Modifier { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&mut self) -> &mut ParseTree<'src> {
        self.tree
    }

    pub fn value(&self) -> &ParseUnit<'src> {
        self.tree.value(self.id)
    }

    pub fn as_observer(&self) -> Observer<'_, 'src> {
        Observer::new(self.tree, self.id)
    }

    pub fn parent_id(&self) -> Option<NodeId> {
        self.tree.parent(self.id)
    }

    /// Moves this cursor to its parent, returning the new cursor.
    pub fn into_parent(self) -> Modifier<'t, 'src> {
        let parent = self.tree.parent(self.id).expect("Modifier::into_parent: at root");
        Modifier { tree: self.tree, id: parent }
    }

    /// Descends into the child at `index`, returning the new cursor.
    pub fn into_child(self, index: usize) -> Modifier<'t, 'src> {
        let child = self.tree.children(self.id)[index];
        Modifier { tree: self.tree, id: child }
    }

    pub fn children_size(&self) -> usize {
        self.tree.children_len(self.id)
    }

    pub fn children_push_back(&mut self, value: ParseUnit<'src>) -> NodeId {
        self.tree.push_back_child(self.id, value)
    }

    pub fn children_push_front(&mut self, value: ParseUnit<'src>) -> NodeId {
        self.tree.push_front_child(self.id, value)
    }

    pub fn children_pop_back(&mut self) {
        self.tree.pop_back_child(self.id)
    }

    pub fn children_pop_front(&mut self) {
        self.tree.pop_front_child(self.id)
    }

    pub fn children_insert(&mut self, pos: usize, value: ParseUnit<'src>) -> NodeId {
        self.tree.insert_child(self.id, pos, value)
    }

    pub fn children_erase(&mut self, pos: usize) {
        self.tree.erase_child(self.id, pos)
    }

    pub fn children_erase_range(&mut self, start: usize, end: usize) {
        self.tree.erase_children_range(self.id, start, end)
    }

    /// Descends into a freshly-appended `Term{name}` child, entering it.
    pub fn push_term(self, name: impl Into<String>) -> Modifier<'t, 'src> {
        let Modifier { tree, id } = self;
        let child = tree.push_back_child(id, ParseUnit::term(name));
        Modifier { tree, id: child }
    }

    /// Appends a `Token{name, value}` as the last child, staying at `self`.
    pub fn push_token(&mut self, name: impl Into<String>, value: &'src str) -> NodeId {
        self.tree.push_back_child(self.id, ParseUnit::token(name, value))
    }

    /// Splices this node's children into its parent's position and discards
    /// this node, then returns a cursor over the parent.
    pub fn splice_out_into_parent(self) -> Modifier<'t, 'src> {
        let Modifier { tree, id } = self;
        let parent = tree.parent(id).expect("splice_out_into_parent: at root");
        tree.splice_out(id);
        Modifier { tree, id: parent }
    }

    /// Deep-copies this subtree as a new last child of `dst`, which must be
    /// a node in the same tree as this cursor.
    pub fn copy_to(&mut self, dst: NodeId) -> NodeId {
        self.tree.copy_subtree(self.id, dst)
    }

    /// Moves this subtree to become the last child of `dst`, which must be
    /// a node in the same tree as this cursor and not this node itself.
    pub fn move_to(&mut self, dst: NodeId) {
        self.tree.move_subtree(self.id, dst);
    }
}
