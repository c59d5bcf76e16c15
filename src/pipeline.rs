use super::*;
use tracing::instrument;

/// Compiles `expr` with `B` and runs it, writing `Print` output to `out`.
#[instrument(level = "debug", skip_all, fields(backend = std::any::type_name::<B>()))]
pub fn run<B: Backend, W: Write>(expr: &Expr, config: &VmConfig, out: &mut W) -> Result<(), Error> {
    let prog = B::compile(expr)?;
    B::execute(prog, config, out)?;
    Ok(())
}

/// Like [`run`], but collects the output into a string.
pub fn eval<B: Backend>(expr: &Expr, config: &VmConfig) -> Result<String, Error> {
    let mut out = Vec::new();
    run::<B, _>(expr, config, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_carry_their_phase() {
        let one = Expr::Value(1);
        let print = Expr::Print(&one);
        let add = Expr::Add(&one, &print);
        let err = eval::<Threaded>(&add, &VmConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Compile(CompileError::TypeMismatch { .. })));
        assert_eq!(
            err.to_string(),
            "compile error: type mismatch in Add: left operand is u64, right operand is none"
        );

        let zero = Expr::Value(0);
        let div = Expr::Div(&one, &zero);
        let expr = Expr::Print(&div);
        let err = eval::<Walker>(&expr, &VmConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero)));
    }
}
