use serde::{Deserialize, Serialize};

/// Tagged sum of the values an instruction operand can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IRValue {
    Undef,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}
