use super::value::IRValue;
use serde::{Deserialize, Serialize};

/// Stable, equality-comparable identity for an [`Instruction`]. Operand
/// counts/types per opcode are fixed by §6 of the design and enforced only
/// by the constructors in [`block`], [`function`], [`list`], [`control`],
/// [`object`], and [`literal`] below — `Instruction` itself stores operands
/// as a plain `Vec` to match the data model exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opcode {
    None,
    BlockBegin,
    BlockNamedBegin,
    BlockDrop,
    BlockEnd,
    FunctionBegin,
    FunctionEnd,
    FunctionCall,
    ListPush,
    ListPop,
    ControlJump,
    ControlJumpIf,
    ControlJumpIfElse,
    ControlMark,
    ObjectBegin,
    ObjectEnd,
    ObjectEndWithInit,
    ObjectAttachTo,
    ObjectVar,
    ObjectVarWithConstraint,
    ObjectVarPack,
    ObjectVarPackWithConstraint,
    ObjectConst,
    ObjectConstWithConstraint,
    ObjectConstPack,
    ObjectConstPackWithConstraint,
    ObjectUse,
    LiteralInt,
    LiteralFloat,
    LiteralString,
    LiteralBool,
    LiteralNull,
    LiteralUndef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operands: Vec<IRValue>,
}

impl Instruction {
    fn new(opcode: Opcode, operands: Vec<IRValue>) -> Self {
        Instruction { opcode, operands }
    }

    pub fn none() -> Self {
        Self::new(Opcode::None, Vec::new())
    }
}

/// `Block.*` — expression-sequencing markers emitted by the `Expression`
/// automaton.
pub mod block {
    use super::*;

    pub fn begin() -> Instruction {
        Instruction::new(Opcode::BlockBegin, Vec::new())
    }
    pub fn named_begin(name: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::BlockNamedBegin, vec![IRValue::String(name.into())])
    }
    pub fn drop() -> Instruction {
        Instruction::new(Opcode::BlockDrop, Vec::new())
    }
    pub fn end() -> Instruction {
        Instruction::new(Opcode::BlockEnd, Vec::new())
    }
}

/// `Function.*`.
pub mod function {
    use super::*;

    pub fn begin() -> Instruction {
        Instruction::new(Opcode::FunctionBegin, Vec::new())
    }
    pub fn end() -> Instruction {
        Instruction::new(Opcode::FunctionEnd, Vec::new())
    }
    pub fn call() -> Instruction {
        Instruction::new(Opcode::FunctionCall, Vec::new())
    }
}

/// `List.*`.
pub mod list {
    use super::*;

    pub fn push() -> Instruction {
        Instruction::new(Opcode::ListPush, Vec::new())
    }
    pub fn pop() -> Instruction {
        Instruction::new(Opcode::ListPop, Vec::new())
    }
}

/// `Control.*`.
pub mod control {
    use super::*;

    pub fn jump(tag: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::ControlJump, vec![IRValue::String(tag.into())])
    }
    pub fn jump_if(tag: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::ControlJumpIf, vec![IRValue::String(tag.into())])
    }
    pub fn jump_if_else(tag_if: impl Into<String>, tag_else: impl Into<String>) -> Instruction {
        Instruction::new(
            Opcode::ControlJumpIfElse,
            vec![IRValue::String(tag_if.into()), IRValue::String(tag_else.into())],
        )
    }
    pub fn mark(tag: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::ControlMark, vec![IRValue::String(tag.into())])
    }
}

/// `Object.*` — declaration and use-site opcodes, selected by the
/// constraint-opcode matrix in the generator.
pub mod object {
    use super::*;

    pub fn begin() -> Instruction {
        Instruction::new(Opcode::ObjectBegin, Vec::new())
    }
    pub fn end() -> Instruction {
        Instruction::new(Opcode::ObjectEnd, Vec::new())
    }
    pub fn end_with_init() -> Instruction {
        Instruction::new(Opcode::ObjectEndWithInit, Vec::new())
    }
    pub fn attach_to(block_name: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::ObjectAttachTo, vec![IRValue::String(block_name.into())])
    }
    pub fn var(name: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::ObjectVar, vec![IRValue::String(name.into())])
    }
    pub fn var_with_constraint(name: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::ObjectVarWithConstraint, vec![IRValue::String(name.into())])
    }
    pub fn var_pack(name: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::ObjectVarPack, vec![IRValue::String(name.into())])
    }
    pub fn var_pack_with_constraint(name: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::ObjectVarPackWithConstraint, vec![IRValue::String(name.into())])
    }
    pub fn const_(name: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::ObjectConst, vec![IRValue::String(name.into())])
    }
    pub fn const_with_constraint(name: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::ObjectConstWithConstraint, vec![IRValue::String(name.into())])
    }
    pub fn const_pack(name: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::ObjectConstPack, vec![IRValue::String(name.into())])
    }
    pub fn const_pack_with_constraint(name: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::ObjectConstPackWithConstraint, vec![IRValue::String(name.into())])
    }
    pub fn use_(name: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::ObjectUse, vec![IRValue::String(name.into())])
    }
}

/// `Literal.*`.
pub mod literal {
    use super::*;

    pub fn int(value: i64) -> Instruction {
        Instruction::new(Opcode::LiteralInt, vec![IRValue::Int(value)])
    }
    pub fn float(value: f64) -> Instruction {
        Instruction::new(Opcode::LiteralFloat, vec![IRValue::Float(value)])
    }
    pub fn string(value: impl Into<String>) -> Instruction {
        Instruction::new(Opcode::LiteralString, vec![IRValue::String(value.into())])
    }
    pub fn bool(value: bool) -> Instruction {
        Instruction::new(Opcode::LiteralBool, vec![IRValue::Bool(value)])
    }
    pub fn null() -> Instruction {
        Instruction::new(Opcode::LiteralNull, Vec::new())
    }
    pub fn undef() -> Instruction {
        Instruction::new(Opcode::LiteralUndef, Vec::new())
    }
}

#[cfg(test)]
#[path = "instruction_tests.rs"]
mod tests;
