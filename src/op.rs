use super::*;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// `lhs OP rhs`. Add, sub and mul wrap; division truncates and rejects a zero divisor.
    pub fn apply<W: Word>(self, lhs: W, rhs: W) -> Result<W, RuntimeError> {
        match self {
            BinOp::Add => add(lhs, rhs),
            BinOp::Sub => sub(lhs, rhs),
            BinOp::Mul => mul(lhs, rhs),
            BinOp::Div => div(lhs, rhs),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinOp::Add => "Add",
            BinOp::Sub => "Sub",
            BinOp::Mul => "Mul",
            BinOp::Div => "Div",
        })
    }
}

pub(crate) fn add<W: Word>(lhs: W, rhs: W) -> Result<W, RuntimeError> {
    Ok(lhs.wrapping_add(rhs))
}

pub(crate) fn sub<W: Word>(lhs: W, rhs: W) -> Result<W, RuntimeError> {
    Ok(lhs.wrapping_sub(rhs))
}

pub(crate) fn mul<W: Word>(lhs: W, rhs: W) -> Result<W, RuntimeError> {
    Ok(lhs.wrapping_mul(rhs))
}

pub(crate) fn div<W: Word>(lhs: W, rhs: W) -> Result<W, RuntimeError> {
    lhs.checked_div(rhs).ok_or(RuntimeError::DivisionByZero)
}

/// An executable unit: a fixed behaviour specialised to the type resolved for it at compile time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    ReadConstant(Scalar),
    Add(Scalar),
    Sub(Scalar),
    Mul(Scalar),
    Div(Scalar),
    Print(Type),
}

impl Op {
    /// Instantiates `op` for operands of type `ty`. Arithmetic on `none` is meaningless.
    pub fn binary(op: BinOp, ty: Type) -> Result<Self, CompileError> {
        let scalar = ty.scalar().ok_or(CompileError::InvalidOperandType { op, ty })?;
        Ok(match op {
            BinOp::Add => Op::Add(scalar),
            BinOp::Sub => Op::Sub(scalar),
            BinOp::Mul => Op::Mul(scalar),
            BinOp::Div => Op::Div(scalar),
        })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::ReadConstant(t) => write!(f, "ReadConstant<{t}>"),
            Op::Add(t) => write!(f, "Add<{t}>"),
            Op::Sub(t) => write!(f, "Sub<{t}>"),
            Op::Mul(t) => write!(f, "Mul<{t}>"),
            Op::Div(t) => write!(f, "Div<{t}>"),
            Op::Print(t) => write!(f, "Print<{t}>"),
        }
    }
}
