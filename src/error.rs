use thiserror::Error;

/// Errors a caller of [`crate::parse`] or [`crate::ir::generate`] can observe.
///
/// Most failure modes named in the design (an illegal cursor operation, an
/// unknown dispatch name reaching the IR generator) are programming-bug
/// conditions rather than recoverable errors and are reported via
/// `debug_assert!`/`unreachable!` instead — per the spec, the grammar is
/// total and the IR generator's dispatch table is only ever driven by trees
/// this crate itself produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Parsing stopped before consuming the whole input. Carries the byte
    /// offset of the longest prefix successfully consumed.
    #[error("parse error: stopped at byte offset {consumed}, {remaining} byte(s) left unconsumed")]
    IncompleteParse { consumed: usize, remaining: usize },

    /// A numeric literal token did not fit its target type.
    #[error("numeric literal {literal:?} does not fit in {ty}")]
    NumericOverflow { literal: String, ty: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
