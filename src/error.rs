use std::io;

use thiserror::Error;

use crate::{op::BinOp, ty::Type};

/// Errors reported by the compiler. A failed compile never leaves a usable partial program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("type mismatch in {op}: left operand is {left}, right operand is {right}")]
    TypeMismatch { op: BinOp, left: Type, right: Type },

    #[error("cannot apply {op} to operands of type {ty}")]
    InvalidOperandType { op: BinOp, ty: Type },
}

/// Errors that abort execution.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("stack overflow: {size} byte push at offset {sp} exceeds capacity of {capacity} bytes")]
    StackOverflow {
        sp: usize,
        size: usize,
        capacity: usize,
    },

    #[error("cannot allocate a {capacity} byte operand stack")]
    StackAllocation { capacity: usize },

    #[error("stack underflow: {size} byte pop with {sp} bytes on the stack")]
    StackUnderflow { sp: usize, size: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("corrupt constant pool: {size} byte read at offset {offset} overruns {len} byte pool")]
    CorruptConstantPool {
        offset: usize,
        size: usize,
        len: usize,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Either phase of the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error("compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}
