use crate::interpreter::{
    evaluator::{
        binary::scalar::ScalarOp,
        core::{EvalResult, Evaluator},
        unary::UnaryOp,
    },
    parser::grammar,
    value::Value,
};

/// Handler for operators that take one operand.
pub type UnaryFn = fn(Value, usize) -> EvalResult<Value>;
/// Handler for operators that take two operands, left first.
pub type BinaryFn = fn(Value, Value, usize) -> EvalResult<Value>;

/// Binding strength of an operator, from loosest to tightest.
///
/// Variants are ordered so that `a > b` means `a` binds tighter than `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// `+` and `-`
    Additive,
    /// `*` and `/`
    Multiplicative,
    /// Prefix `+` and `-`
    Unary,
    /// `^`
    Power,
}

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// The reduction function of an operator; its variant fixes the arity.
#[derive(Clone, Copy)]
pub enum Reduction {
    /// Takes one operand.
    Unary(UnaryFn),
    /// Takes two operands.
    Binary(BinaryFn),
}

/// Describes one operator of the evaluator.
pub struct OperatorDef {
    /// The grammar rule name of the operator token.
    pub name:          &'static str,
    /// Binding strength.
    pub precedence:    Precedence,
    /// Grouping of equal-precedence chains.
    pub associativity: Associativity,
    /// Computes the result from the operands.
    pub reduction:     Reduction,
}

impl OperatorDef {
    /// Returns the number of operands the operator consumes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self.reduction {
            Reduction::Unary(_) => 1,
            Reduction::Binary(_) => 2,
        }
    }

    /// Tests whether `self`, already on the operator stack, must be reduced
    /// before `incoming` is pushed.
    ///
    /// A left-associative incoming operator yields to anything at least as
    /// tight; a right-associative one yields only to something strictly
    /// tighter.
    #[must_use]
    pub fn reduces_before(&self, incoming: &Self) -> bool {
        match incoming.associativity {
            Associativity::Left => self.precedence >= incoming.precedence,
            Associativity::Right => self.precedence > incoming.precedence,
        }
    }
}

/// Defines the operator table by generating a static lookup table.
///
/// Each entry provides:
/// - the grammar rule name of the operator token,
/// - a precedence tier,
/// - an associativity,
/// - a reduction function implementing the operator.
///
/// The macro produces `OPERATOR_TABLE`, the static table searched by
/// [`lookup`].
macro_rules! operator_table {
    (
        $(
            $name:expr => {
                precedence: $precedence:expr,
                associativity: $associativity:expr,
                reduction: $reduction:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static OPERATOR_TABLE: &[OperatorDef] = &[
            $(
                OperatorDef { name:          $name,
                              precedence:    $precedence,
                              associativity: $associativity,
                              reduction:     $reduction },
            )*
        ];
    };
}

operator_table! {
    grammar::POW      => { precedence: Precedence::Power, associativity: Associativity::Right,
                           reduction: Reduction::Binary(Evaluator::eval_pow) },
    grammar::UN_PLUS  => { precedence: Precedence::Unary, associativity: Associativity::Right,
                           reduction: Reduction::Unary(|v, p| Evaluator::eval_unary(UnaryOp::Plus, v, p)) },
    grammar::UN_MINUS => { precedence: Precedence::Unary, associativity: Associativity::Right,
                           reduction: Reduction::Unary(|v, p| Evaluator::eval_unary(UnaryOp::Negate, v, p)) },
    grammar::MUL      => { precedence: Precedence::Multiplicative, associativity: Associativity::Left,
                           reduction: Reduction::Binary(|l, r, p| Evaluator::eval_scalar_op(ScalarOp::Mul, l, r, p)) },
    grammar::DIV      => { precedence: Precedence::Multiplicative, associativity: Associativity::Left,
                           reduction: Reduction::Binary(|l, r, p| Evaluator::eval_scalar_op(ScalarOp::Div, l, r, p)) },
    grammar::BI_PLUS  => { precedence: Precedence::Additive, associativity: Associativity::Left,
                           reduction: Reduction::Binary(|l, r, p| Evaluator::eval_scalar_op(ScalarOp::Add, l, r, p)) },
    grammar::BI_MINUS => { precedence: Precedence::Additive, associativity: Associativity::Left,
                           reduction: Reduction::Binary(|l, r, p| Evaluator::eval_scalar_op(ScalarOp::Sub, l, r, p)) },
}

/// Looks up the operator produced by the grammar rule `name`.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::operator::{Precedence, lookup};
///
/// let pow = lookup("Pow").unwrap();
/// assert_eq!(pow.precedence, Precedence::Power);
/// assert_eq!(pow.arity(), 2);
///
/// assert!(lookup("Expr").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static OperatorDef> {
    OPERATOR_TABLE.iter().find(|op| op.name == name)
}
