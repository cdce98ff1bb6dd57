use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator},
    value::Value,
};

impl Evaluator {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation with a non-negative exponent uses
    /// checked arithmetic and stays integral. Negative exponents and results
    /// that overflow `i64` are computed in floating-point form, as is any
    /// exponentiation involving a real operand.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `_position`: Byte offset of the operator.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use reckon::{Value, interpreter::evaluator::core::Evaluator};
    ///
    /// let result = Evaluator::eval_pow(Value::Integer(2), Value::Integer(10), 0).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Evaluator::eval_pow(Value::Integer(2), Value::Integer(-1), 0).unwrap();
    /// assert_eq!(result, Value::Real(0.5));
    /// ```
    #[allow(clippy::unnecessary_wraps)]
    pub fn eval_pow(base: Value, exponent: Value, _position: usize) -> EvalResult<Value> {
        if let (Value::Integer(b), Value::Integer(e)) = (base, exponent)
           && let Ok(e) = u32::try_from(e)
           && let Some(result) = b.checked_pow(e)
        {
            return Ok(Value::Integer(result));
        }

        Ok(Value::Real(base.as_real().powf(exponent.as_real())))
    }
}
