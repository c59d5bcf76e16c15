use super::*;

/// The static type of `expr`, without evaluating it.
///
/// Arithmetic takes the type of its left operand; whether both sides agree is checked by the
/// compiler, not here. Pure, so it is safe to call repeatedly on the same subtree.
pub fn resolve(expr: &Expr) -> Type {
    match expr {
        Expr::Value(_) => Type::U64,
        Expr::Add(l, _) | Expr::Sub(l, _) | Expr::Mul(l, _) | Expr::Div(l, _) => resolve(l),
        Expr::Print(_) => Type::None,
    }
}

/// Checks a whole tree and returns its type, or the first error the compiler would report.
///
/// Visits nodes in compilation order (right operand before left) so that every backend rejects
/// an ill-typed tree with the same error.
pub fn typecheck(expr: &Expr) -> Result<Type, CompileError> {
    if let Some((op, l, r)) = expr.as_binary() {
        let ty = check_operands(op, l, r)?;
        typecheck(r)?;
        typecheck(l)?;
        Op::binary(op, ty)?;
        return Ok(ty);
    }
    if let Expr::Print(operand) = expr {
        typecheck(operand)?;
    }
    Ok(resolve(expr))
}

/// Resolves both sides of a binary node and requires them to agree.
pub(crate) fn check_operands(op: BinOp, l: &Expr, r: &Expr) -> Result<Type, CompileError> {
    let (left, right) = (resolve(l), resolve(r));
    if left != right {
        return Err(CompileError::TypeMismatch { op, left, right });
    }
    Ok(left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_u64() {
        assert_eq!(resolve(&Expr::Value(7)), Type::U64);
    }

    #[test]
    fn print_has_no_result() {
        let v = Expr::Value(7);
        assert_eq!(resolve(&Expr::Print(&v)), Type::None);
    }

    #[test]
    fn binary_takes_left_type_without_checking_right() {
        let one = Expr::Value(1);
        let print = Expr::Print(&one);
        assert_eq!(resolve(&Expr::Sub(&one, &print)), Type::U64);
        assert_eq!(resolve(&Expr::Mul(&print, &one)), Type::None);
    }

    #[test]
    fn resolve_is_idempotent() {
        let a = Expr::Value(3);
        let b = Expr::Value(4);
        let sum = Expr::Add(&a, &b);
        let div = Expr::Div(&sum, &a);
        assert_eq!(resolve(&div), resolve(&div));
    }

    #[test]
    fn typecheck_rejects_mixed_operands() {
        let one = Expr::Value(1);
        let print = Expr::Print(&one);
        let add = Expr::Add(&one, &print);
        assert!(matches!(
            typecheck(&add),
            Err(CompileError::TypeMismatch {
                op: BinOp::Add,
                left: Type::U64,
                right: Type::None,
            })
        ));
    }

    #[test]
    fn typecheck_rejects_arithmetic_on_none() {
        let one = Expr::Value(1);
        let print = Expr::Print(&one);
        let div = Expr::Div(&print, &print);
        assert!(matches!(
            typecheck(&div),
            Err(CompileError::InvalidOperandType {
                op: BinOp::Div,
                ty: Type::None,
            })
        ));
    }

    #[test]
    fn typecheck_finds_nested_errors() {
        let one = Expr::Value(1);
        let print = Expr::Print(&one);
        let bad = Expr::Add(&print, &one);
        let outer = Expr::Print(&bad);
        assert!(matches!(typecheck(&outer), Err(CompileError::TypeMismatch { .. })));

        let good = Expr::Add(&one, &one);
        assert_eq!(typecheck(&Expr::Print(&good)).unwrap(), Type::None);
    }
}
