use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the evaluator.
///
/// The set of variants is closed: every number is either a 64-bit signed
/// integer or a 64-bit float. Operations on two integers stay integral;
/// as soon as one operand is real, both are promoted to real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers are converted with `as`, which rounds magnitudes above
    /// `2^53` to the nearest representable float.
    ///
    /// # Example
    /// ```
    /// use reckon::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Real(2.5).as_real(), 2.5);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Converts the value to `i64`, or returns an error if it is real.
    ///
    /// # Parameters
    /// - `position`: Byte offset used for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value.
    /// - `Err(RuntimeError::TypeError)`: If the value is real.
    pub fn as_integer(self, position: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(n),
            Self::Real(r) => {
                Err(RuntimeError::TypeError { details: format!("Expected integer, found real {r:?}"),
                                              position })
            },
        }
    }

    /// Returns `true` if the value is [`Value::Integer`].
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Value::Real`].
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug formatting keeps the fraction: `3.0`, not `3`.
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
