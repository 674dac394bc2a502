//! IR value/instruction model and the tree-walking generator that lowers a
//! [`crate::tree::ParseTree`] into a flat [`generator::Sequence`].

mod generator;
mod instruction;
mod value;

pub use generator::{Sequence, generate};
pub use instruction::{Instruction, Opcode, block, control, function, list, literal, object};
pub use value::IRValue;
