pub mod ty;
pub mod resolve;
pub mod error;
pub mod config;
pub mod op;
pub mod pool;
pub mod stack;
pub mod compiler;
pub mod vm;
pub mod walker;
pub mod pipeline;

use std::io::Write;

pub use crate::{
    ty::{Type, Scalar, Word},
    resolve::{resolve, typecheck},
    error::{CompileError, RuntimeError, Error},
    config::{VmConfig, STACK_SIZE},
    op::{BinOp, Op},
    pool::{ConstantPool, Cursor},
    stack::Stack,
    compiler::{compile, Compiler, Program},
    vm::{Threaded, Vm},
    walker::{Checked, Walker},
};

// Children are borrowed: the caller owns the whole tree for as long as it is compiled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Expr<'a> {
    Value(u64), // u64
    Add(&'a Expr<'a>, &'a Expr<'a>), // T -> T -> T
    Sub(&'a Expr<'a>, &'a Expr<'a>), // T -> T -> T
    Mul(&'a Expr<'a>, &'a Expr<'a>), // T -> T -> T
    Div(&'a Expr<'a>, &'a Expr<'a>), // T -> T -> T
    Print(&'a Expr<'a>), // T -> ()
}

impl<'a> Expr<'a> {
    /// Splits an arithmetic node into its operator and `(left, right)` children.
    pub fn as_binary(&self) -> Option<(BinOp, &'a Expr<'a>, &'a Expr<'a>)> {
        match *self {
            Expr::Add(l, r) => Some((BinOp::Add, l, r)),
            Expr::Sub(l, r) => Some((BinOp::Sub, l, r)),
            Expr::Mul(l, r) => Some((BinOp::Mul, l, r)),
            Expr::Div(l, r) => Some((BinOp::Div, l, r)),
            Expr::Value(_) | Expr::Print(_) => None,
        }
    }
}

/// An execution strategy: something that turns a tree into a program and runs it.
pub trait Backend {
    type Program<'a>;

    fn compile<'a>(expr: &'a Expr<'a>) -> Result<Self::Program<'a>, CompileError>;

    fn execute<W: Write>(
        prog: Self::Program<'_>,
        config: &VmConfig,
        out: &mut W,
    ) -> Result<(), RuntimeError>;
}
