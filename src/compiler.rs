use super::*;
use std::fmt;
use tracing::debug;

/// Compiler output: the constant pool and the units that consume it, in execution order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    constants: ConstantPool,
    ops: Vec<Op>,
}

impl Program {
    pub fn from_parts(constants: ConstantPool, ops: Vec<Op>) -> Self {
        Self { constants, ops }
    }

    pub fn constants(&self) -> &ConstantPool {
        &self.constants
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn into_parts(self) -> (ConstantPool, Vec<Op>) {
        (self.constants, self.ops)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "; {} constant bytes", self.constants.len())?;
        for (idx, op) in self.ops.iter().enumerate() {
            writeln!(f, "{idx:04} {op}")?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct Compiler {
    constants: ConstantPool,
    ops: Vec<Op>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type-checks `expr` and appends its constants and units.
    ///
    /// On error everything appended by this call is discarded.
    pub fn compile(&mut self, expr: &Expr) -> Result<(), CompileError> {
        let (constants, ops) = (self.constants.len(), self.ops.len());
        self.compile_inner(expr).map_err(|err| {
            self.constants.truncate(constants);
            self.ops.truncate(ops);
            err
        })
    }

    fn compile_inner(&mut self, expr: &Expr) -> Result<(), CompileError> {
        match expr {
            Expr::Value(x) => {
                self.constants.push(*x);
                self.ops.push(Op::ReadConstant(u64::SCALAR));
            }
            Expr::Add(l, r) => self.binary(BinOp::Add, l, r)?,
            Expr::Sub(l, r) => self.binary(BinOp::Sub, l, r)?,
            Expr::Mul(l, r) => self.binary(BinOp::Mul, l, r)?,
            Expr::Div(l, r) => self.binary(BinOp::Div, l, r)?,
            Expr::Print(operand) => {
                let ty = resolve(operand);
                self.compile_inner(operand)?;
                self.ops.push(Op::Print(ty));
            }
        }
        Ok(())
    }

    fn binary(&mut self, op: BinOp, l: &Expr, r: &Expr) -> Result<(), CompileError> {
        let ty = resolve::check_operands(op, l, r)?;
        // Right first: the left operand ends up on top of the stack and is popped first.
        self.compile_inner(r)?;
        self.compile_inner(l)?;
        self.ops.push(Op::binary(op, ty)?);
        Ok(())
    }

    pub fn finish(self) -> Program {
        let program = Program {
            constants: self.constants,
            ops: self.ops,
        };
        debug!(
            constants = program.constants.len(),
            ops = program.ops.len(),
            "compiled program"
        );
        program
    }
}

/// Compiles `expr` into a fresh [`Program`].
pub fn compile(expr: &Expr) -> Result<Program, CompileError> {
    let mut compiler = Compiler::new();
    compiler.compile(expr)?;
    Ok(compiler.finish())
}
