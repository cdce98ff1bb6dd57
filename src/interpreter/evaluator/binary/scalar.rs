use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

/// The four scalar arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Evaluator {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Two integers use wrapping integer arithmetic; division truncates toward
    /// zero and fails on a zero divisor before dividing. If either operand is
    /// real, both are promoted to real and IEEE-754 rules apply, so dividing
    /// a real by zero yields an infinity or NaN rather than an error.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     Value,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::{binary::scalar::ScalarOp, core::Evaluator},
    /// };
    ///
    /// let sum = Evaluator::eval_scalar_op(ScalarOp::Add, Value::Integer(1), Value::Integer(2), 0);
    /// assert_eq!(sum.unwrap(), Value::Integer(3));
    ///
    /// let mixed = Evaluator::eval_scalar_op(ScalarOp::Add, Value::Real(1.0), Value::Integer(2), 0);
    /// assert_eq!(mixed.unwrap(), Value::Real(3.0));
    ///
    /// let err = Evaluator::eval_scalar_op(ScalarOp::Div, Value::Integer(2), Value::Integer(0), 2);
    /// assert_eq!(err.unwrap_err(), RuntimeError::DivisionByZero { position: 2 });
    /// ```
    pub fn eval_scalar_op(op: ScalarOp,
                          left: Value,
                          right: Value,
                          position: usize)
                          -> EvalResult<Value> {
        use ScalarOp::{Add, Div, Mul, Sub};
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => match op {
                Add => Ok(Integer(a.wrapping_add(b))),
                Sub => Ok(Integer(a.wrapping_sub(b))),
                Mul => Ok(Integer(a.wrapping_mul(b))),
                Div => {
                    if b == 0 {
                        Err(RuntimeError::DivisionByZero { position })
                    } else {
                        Ok(Integer(a.wrapping_div(b)))
                    }
                },
            },
            (Real(_), _) | (_, Real(_)) => {
                let left = left.as_real();
                let right = right.as_real();

                Ok(Real(match op {
                            Add => left + right,
                            Sub => left - right,
                            Mul => left * right,
                            Div => left / right,
                        }))
            },
        }
    }
}
