//! Parser-combinator algebra: first-class `Process` values that transform an
//! `Info` (remaining input, tree cursor) pair.
//!
//! A `Process` never reports failure out-of-band — a non-optional process
//! that fails to consume is, by definition, indistinguishable from one that
//! consumed nothing; callers detect this by comparing `remaining` lengths
//! before and after a call. Tree mutations made by an attempt that is
//! ultimately discarded (a losing alternative, a failed lookahead, a failed
//! sequence tail) are rolled back via `ParseTree::checkpoint`/`rollback` —
//! the strict-rollback resolution of the open question in the design notes,
//! chosen over keeping partially-committed mutations around.

use crate::tree::{NodeId, ParseTree, ParseUnit};
use std::rc::Rc;

/// The pair a `Process` transforms: the unconsumed input slice and the tree
/// cursor (a node id) mutations are applied relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Info<'src> {
    pub remaining: &'src str,
    pub cursor: NodeId,
}

type RunFn<'src> = dyn Fn(&mut ParseTree<'src>, Info<'src>) -> Info<'src> + 'src;

#[derive(Clone)]
pub struct Process<'src> {
    run: Rc<RunFn<'src>>,
    pub optional: bool,
}

impl<'src> Process<'src> {
    pub fn new(optional: bool, f: impl Fn(&mut ParseTree<'src>, Info<'src>) -> Info<'src> + 'src) -> Self {
        Process { run: Rc::new(f), optional }
    }

    /// Defers construction of the wrapped combinator tree until first run.
    /// Required for mutually-recursive grammar productions: calling this
    /// function must not eagerly call the productions it depends on, or
    /// building any one production would recurse through the whole grammar
    /// before a single character is parsed.
    pub fn lazy(optional: bool, build: impl Fn() -> Process<'src> + 'src) -> Self {
        Process::new(optional, move |tree, info| build().run(tree, info))
    }

    pub fn run(&self, tree: &mut ParseTree<'src>, info: Info<'src>) -> Info<'src> {
        (self.run)(tree, info)
    }

    fn consumed(before: Info<'src>, after: Info<'src>) -> bool {
        after.remaining.len() < before.remaining.len()
    }

    /// `(a , b)` — sequence.
    pub fn then(&self, next: Process<'src>) -> Process<'src> {
        let a = self.clone();
        let a_optional = a.optional;
        let optional = a.optional && next.optional;
        Process::new(optional, move |tree, info| {
            let cp = tree.checkpoint();
            let r1 = a.run(tree, info);
            if a_optional || Self::consumed(info, r1) {
                let r2 = next.run(tree, r1);
                if next.optional || Self::consumed(r1, r2) {
                    return r2;
                }
            }
            tree.rollback(cp);
            info
        })
    }

    /// `(a | b)` — ordered alternation.
    pub fn or(&self, other: Process<'src>) -> Process<'src> {
        let a = self.clone();
        let optional = a.optional || other.optional;
        Process::new(optional, move |tree, info| {
            let cp = tree.checkpoint();
            let r1 = a.run(tree, info);
            if Self::consumed(info, r1) {
                r1
            } else {
                tree.rollback(cp);
                other.run(tree, info)
            }
        })
    }

    /// `~a` — optional.
    pub fn opt(&self) -> Process<'src> {
        let a = self.clone();
        Process::new(true, move |tree, info| a.run(tree, info))
    }

    /// `+a` — one-or-more.
    pub fn many1(&self) -> Process<'src> {
        let a = self.clone();
        Process::new(false, move |tree, info| {
            let mut current = info;
            loop {
                let cp = tree.checkpoint();
                let next = a.run(tree, current);
                if Self::consumed(current, next) {
                    current = next;
                } else {
                    tree.rollback(cp);
                    break;
                }
            }
            current
        })
    }

    /// `*a` — zero-or-more, defined as `~(+a)`.
    pub fn many0(&self) -> Process<'src> {
        self.many1().opt()
    }

    /// `(a ^ b)` — not-followed-by.
    pub fn not_followed_by(&self, lookahead: Process<'src>) -> Process<'src> {
        let a = self.clone();
        let optional = a.optional;
        Process::new(optional, move |tree, info| {
            let cp = tree.checkpoint();
            let r1 = a.run(tree, info);
            if Self::consumed(info, r1) {
                let cp2 = tree.checkpoint();
                let r2 = lookahead.run(tree, r1);
                if Self::consumed(r1, r2) {
                    tree.rollback(cp);
                    return info;
                }
                tree.rollback(cp2);
            }
            r1
        })
    }
}

/// Always-succeed no-op; the identity element for `then`.
pub fn atom<'src>() -> Process<'src> {
    Process::new(true, |_tree, info| info)
}

/// Consume any single character.
pub fn any_char<'src>() -> Process<'src> {
    Process::new(false, |_tree, info| match info.remaining.chars().next() {
        Some(c) => Info { remaining: &info.remaining[c.len_utf8()..], cursor: info.cursor },
        None => info,
    })
}

/// `Match(predicate)` — consume exactly one character satisfying `pred`.
pub fn match_pred<'src>(pred: impl Fn(char) -> bool + 'src) -> Process<'src> {
    Process::new(false, move |_tree, info| match info.remaining.chars().next() {
        Some(c) if pred(c) => Info { remaining: &info.remaining[c.len_utf8()..], cursor: info.cursor },
        _ => info,
    })
}

/// `Match(ch)`.
pub fn match_char<'src>(ch: char) -> Process<'src> {
    match_pred(move |c| c == ch)
}

/// `Match(set-of-chars)`.
pub fn match_chars<'src>(set: &'static [char]) -> Process<'src> {
    match_pred(move |c| set.contains(&c))
}

/// `Match(str)` — consume a literal prefix.
pub fn match_str<'src>(s: &'static str) -> Process<'src> {
    Process::new(false, move |_tree, info| {
        if let Some(rest) = info.remaining.strip_prefix(s) {
            Info { remaining: rest, cursor: info.cursor }
        } else {
            info
        }
    })
}

/// `Match(set-of-strings)` — try candidates in order, take the first prefix
/// match.
pub fn match_any_str<'src>(options: &'static [&'static str]) -> Process<'src> {
    Process::new(false, move |_tree, info| {
        for s in options {
            if let Some(rest) = info.remaining.strip_prefix(s) {
                return Info { remaining: rest, cursor: info.cursor };
            }
        }
        info
    })
}

/// `AnyCharUntil(p)` — consume characters until `p` would match, consuming
/// through and including the first match of `p`.
pub fn any_char_until<'src>(stop: Process<'src>) -> Process<'src> {
    Process::new(false, move |tree, info| {
        let mut current = info;
        loop {
            let cp = tree.checkpoint();
            let after_stop = stop.run(tree, current);
            if Process::consumed(current, after_stop) {
                return after_stop;
            }
            tree.rollback(cp);
            let advanced = any_char().run(tree, current);
            if !Process::consumed(current, advanced) {
                return current;
            }
            current = advanced;
        }
    })
}

/// `Catch(p, mod)` — run `p`; if it consumed, apply `apply` to the captured
/// slice and the cursor at the point `p` started from.
pub fn catch<'src>(
    p: Process<'src>,
    apply: impl Fn(&mut ParseTree<'src>, NodeId, &'src str) + 'src,
) -> Process<'src> {
    let optional = p.optional;
    Process::new(optional, move |tree, info| {
        let cp = tree.checkpoint();
        let r = p.run(tree, info);
        if Process::consumed(info, r) {
            let len = info.remaining.len() - r.remaining.len();
            let captured = &info.remaining[..len];
            apply(tree, info.cursor, captured);
            r
        } else {
            tree.rollback(cp);
            r
        }
    })
}

/// `Catch(p, name)` — the name-form: appends `Token{name, captured}` as the
/// last child at the cursor.
pub fn catch_token<'src>(p: Process<'src>, name: &'static str) -> Process<'src> {
    catch(p, move |tree, cursor, captured| {
        tree.push_back_child(cursor, ParseUnit::token(name, captured));
    })
}

/// `Change(mod)` — mutate the cursor, never touching input; always succeeds.
pub fn change<'src>(apply: impl Fn(&mut ParseTree<'src>, NodeId) -> NodeId + 'src) -> Process<'src> {
    Process::new(true, move |tree, info| {
        let cursor = apply(tree, info.cursor);
        Info { remaining: info.remaining, cursor }
    })
}

/// `ChangeIn(term_name)` — append a `Term{term_name}` child and descend.
pub fn change_in<'src>(name: &'static str) -> Process<'src> {
    change(move |tree, cursor| tree.push_back_child(cursor, ParseUnit::term(name)))
}

/// `ChangeOut(cutUnused)` — move the cursor to its parent; if `cutUnused` and
/// the just-closed term has fewer than 2 children, splice it into its parent.
pub fn change_out<'src>(cut_unused: bool) -> Process<'src> {
    change(move |tree, cursor| {
        let parent = tree.parent(cursor).expect("ChangeOut: cursor at root");
        if cut_unused && tree.children_len(cursor) < 2 {
            tree.splice_out(cursor);
        }
        parent
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
