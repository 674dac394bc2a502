//! Chtholly front end: a parser-combinator framework, the concrete grammar
//! built on it, and the IR generator that lowers its parse trees into a flat
//! instruction stream.
//!
//! ```
//! let unit = chtholly::parse("1 + 2").unwrap();
//! let seq = chtholly::ir::generate(unit.observer());
//! assert!(!seq.is_empty());
//! ```

pub mod chartype;
pub mod combinator;
mod error;
pub mod ir;
pub mod stringconv;
pub mod tree;

mod grammar;

pub use error::{Error, Result};
use tree::{NodeId, Observer, ParseTree};

/// A fully-parsed source. The backing tree's synthetic root has exactly one
/// child: the parsed top-level production.
#[derive(Debug)]
pub struct ParsedUnit<'src> {
    tree: ParseTree<'src>,
    top: NodeId,
}

impl<'src> ParsedUnit<'src> {
    /// An observer over the tree's synthetic root, suitable for
    /// [`crate::ir::generate`] (which walks its argument's children).
    pub fn observer(&self) -> Observer<'_, 'src> {
        Observer::new(&self.tree, self.tree.root())
    }

    /// An observer over the parsed top-level production itself (the
    /// synthetic root's single child).
    pub fn top(&self) -> Observer<'_, 'src> {
        Observer::new(&self.tree, self.top)
    }

    pub fn tree(&self) -> &ParseTree<'src> {
        &self.tree
    }
}

/// Parses `source` as a single top-level `Expression`.
///
/// On success, the tree's synthetic root has exactly one child: the parsed
/// `Expression` (or, if cut-unused-unit collapsed it away, whatever single
/// production it reduced to). On failure, reports the byte offset of the
/// longest prefix consumed — the grammar does not attempt error recovery.
pub fn parse(source: &str) -> Result<ParsedUnit<'_>> {
    let (tree, info) = grammar::parse(source);
    if !info.remaining.is_empty() {
        return Err(Error::IncompleteParse {
            consumed: source.len() - info.remaining.len(),
            remaining: info.remaining.len(),
        });
    }
    let top = *tree.children(tree.root()).first().expect("parse: empty tree on success");
    Ok(ParsedUnit { tree, top })
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
