use super::*;

/// Evaluates the tree directly. Same observable behaviour as [`Threaded`], no compiled program.
pub struct Walker;

/// A tree that has passed [`typecheck`]. Only [`Walker::compile`] builds one.
#[derive(Copy, Clone, Debug)]
pub struct Checked<'a>(&'a Expr<'a>);

impl Backend for Walker {
    type Program<'a> = Checked<'a>;

    fn compile<'a>(expr: &'a Expr<'a>) -> Result<Self::Program<'a>, CompileError> {
        typecheck(expr)?;
        Ok(Checked(expr))
    }

    fn execute<W: Write>(
        prog: Self::Program<'_>,
        _config: &VmConfig,
        out: &mut W,
    ) -> Result<(), RuntimeError> {
        // `None` stands for the result of `Print`.
        fn execute_inner<W: Write>(expr: &Expr, out: &mut W) -> Result<Option<u64>, RuntimeError> {
            if let Some((op, l, r)) = expr.as_binary() {
                let rhs = execute_inner(r, out)?;
                let lhs = execute_inner(l, out)?;
                let (Some(lhs), Some(rhs)) = (lhs, rhs) else {
                    unreachable!("typecheck rejects {op} on none")
                };
                return op.apply(lhs, rhs).map(Some);
            }
            match expr {
                Expr::Value(x) => Ok(Some(*x)),
                Expr::Print(operand) => {
                    match execute_inner(operand, out)? {
                        Some(x) => writeln!(out, "{x}")?,
                        None => writeln!(out, "none")?,
                    }
                    Ok(None)
                }
                _ => unreachable!("binary nodes are handled above"),
            }
        }

        execute_inner(prog.0, out).map(|_| ())
    }
}
