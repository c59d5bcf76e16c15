use super::*;
use tracing::{debug, trace};

/// Executes compiled [`Program`]s against a bounded operand stack.
pub struct Vm {
    stack: Stack,
}

impl Vm {
    pub fn new() -> Result<Self, RuntimeError> {
        Self::with_config(&VmConfig::default())
    }

    pub fn with_config(config: &VmConfig) -> Result<Self, RuntimeError> {
        Ok(Self {
            stack: Stack::with_capacity(config.stack_size)?,
        })
    }

    /// Runs every unit of `prog` in order, writing `Print` output to `out`.
    ///
    /// Consumes both the VM and the program; the stack and the program's buffers are released
    /// when this returns, whether or not it succeeded.
    pub fn run<W: Write>(mut self, prog: Program, out: &mut W) -> Result<(), RuntimeError> {
        let (constants, ops) = prog.into_parts();
        let mut cursor = constants.cursor();

        for (pc, unit) in ops.iter().enumerate() {
            trace!(pc, %unit, sp = self.stack.len(), "exec");
            match *unit {
                Op::ReadConstant(Scalar::U64) => self.read_constant::<u64>(&mut cursor)?,
                Op::Add(Scalar::U64) => self.binary(op::add::<u64>)?,
                Op::Sub(Scalar::U64) => self.binary(op::sub::<u64>)?,
                Op::Mul(Scalar::U64) => self.binary(op::mul::<u64>)?,
                Op::Div(Scalar::U64) => self.binary(op::div::<u64>)?,
                Op::Print(Type::None) => writeln!(out, "none")?,
                Op::Print(Type::U64) => self.print::<u64, _>(out)?,
            }
        }

        debug!(
            ops = ops.len(),
            sp = self.stack.len(),
            constants_read = cursor.offset(),
            "program finished"
        );
        Ok(())
    }

    fn read_constant<T: Word>(&mut self, cursor: &mut Cursor) -> Result<(), RuntimeError> {
        let value = cursor.read::<T>()?;
        self.stack.push(value)
    }

    // The left operand was pushed last, so it comes off first: `a OP b` is `left OP right`.
    fn binary<T: Word>(
        &mut self,
        f: impl FnOnce(T, T) -> Result<T, RuntimeError>,
    ) -> Result<(), RuntimeError> {
        let a = self.stack.pop::<T>()?;
        let b = self.stack.pop::<T>()?;
        self.stack.push(f(a, b)?)
    }

    fn print<T: Word, W: Write>(&mut self, out: &mut W) -> Result<(), RuntimeError> {
        let value = self.stack.pop::<T>()?;
        writeln!(out, "{value}")?;
        Ok(())
    }
}

/// Compiles to type-specialised units and runs them on [`Vm`].
pub struct Threaded;

impl Backend for Threaded {
    type Program<'a> = Program;

    fn compile<'a>(expr: &'a Expr<'a>) -> Result<Self::Program<'a>, CompileError> {
        let prog = compile(expr)?;
        debug!(listing = %prog, "threaded program");
        Ok(prog)
    }

    fn execute<W: Write>(
        prog: Self::Program<'_>,
        config: &VmConfig,
        out: &mut W,
    ) -> Result<(), RuntimeError> {
        Vm::with_config(config)?.run(prog, out)
    }
}
