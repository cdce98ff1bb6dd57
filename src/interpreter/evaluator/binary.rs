/// Scalar arithmetic: addition, subtraction, multiplication and division
/// with integer/real promotion.
pub mod scalar;

/// Exponentiation.
pub mod power;
