use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator},
    value::Value,
};

/// Prefix sign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `+x`
    Plus,
    /// `-x`
    Negate,
}

impl Evaluator {
    /// Evaluates a unary operation on a value.
    ///
    /// Both operators preserve the operand's variant. Negating `i64::MIN`
    /// wraps around to itself.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     Value,
    ///     interpreter::evaluator::{core::Evaluator, unary::UnaryOp},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOp::Negate, Value::Integer(5), 0).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOp::Plus, Value::Real(1.5), 0).unwrap();
    /// assert_eq!(v, Value::Real(1.5));
    /// ```
    #[allow(clippy::unnecessary_wraps)]
    pub fn eval_unary(op: UnaryOp, value: Value, _position: usize) -> EvalResult<Value> {
        match op {
            UnaryOp::Plus => Ok(value),
            UnaryOp::Negate => match value {
                Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
                Value::Real(r) => Ok(Value::Real(-r)),
            },
        }
    }
}
