use log::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::operator::{self, OperatorDef, Reduction},
        parser::{grammar, node::Node},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// An entry of the operator stack.
#[derive(Clone, Copy)]
enum StackEntry {
    /// Marks where a parenthesized group (or the whole input) begins.
    GroupOpen,
    /// An operator waiting for its right-hand side, with the byte offset of
    /// its token.
    Operator {
        def:      &'static OperatorDef,
        position: usize,
    },
}

/// Reduces a syntax tree to a value with the shunting-yard algorithm.
///
/// The evaluator never looks at the shape of the tree: it consumes the
/// pre-order sequence of nodes and recovers grouping from operator
/// precedence and associativity alone. State lives in two stacks that are
/// owned by a single evaluation.
///
/// ## Usage
///
/// ```
/// use reckon::{
///     Value,
///     interpreter::{evaluator::core::Evaluator, parser::grammar::arithmetic},
/// };
///
/// let grammar = arithmetic().unwrap();
/// let tree = grammar.parse("2 + 3 * 4").unwrap();
///
/// assert_eq!(Evaluator::eval_tree(&tree).unwrap(), Value::Integer(14));
/// ```
pub struct Evaluator {
    operators: Vec<StackEntry>,
    operands:  Vec<Value>,
}

#[allow(clippy::new_without_default)]
impl Evaluator {
    /// Creates an evaluator whose operator stack holds the outermost group
    /// marker.
    #[must_use]
    pub fn new() -> Self {
        Self { operators: vec![StackEntry::GroupOpen],
               operands:  Vec::new(), }
    }

    /// Evaluates a whole syntax tree.
    ///
    /// # Errors
    /// - `InvalidLiteral` if a number token cannot be converted.
    /// - `DivisionByZero` for integer division by zero.
    /// - `MismatchedGroup` if a `)` has no matching `(`.
    /// - `MissingOperands`, `MissingGroupMarker`, `UnevaluatedOperators`,
    ///   `UnevaluatedOperands` if the node sequence leaves the stacks in an
    ///   inconsistent state.
    pub fn eval_tree(tree: &Node<'_>) -> EvalResult<Value> {
        let mut evaluator = Self::new();
        for node in tree.preorder() {
            evaluator.visit(node)?;
        }
        let value = evaluator.finish()?;

        debug!("evaluated [{}, {}) to {value}", tree.span().start, tree.span().end);

        Ok(value)
    }

    /// Feeds one node of the pre-order sequence to the state machine.
    ///
    /// Nodes are dispatched by name. Number literals are pushed as operands,
    /// parentheses open and close groups, operator tokens go through the
    /// precedence check. Every other node is a grammar wrapper and is
    /// ignored.
    ///
    /// # Errors
    /// See [`Evaluator::eval_tree`].
    pub fn visit(&mut self, node: &Node<'_>) -> EvalResult<()> {
        let position = node.span().start;

        match node.name() {
            grammar::INT => {
                let literal = node.text().unwrap_or_default();
                let value = literal.parse::<i64>()
                                   .map_err(|_| Self::invalid_literal(literal, position))?;
                self.operands.push(Value::Integer(value));
            },
            grammar::FLOAT => {
                let literal = node.text().unwrap_or_default();
                let value = literal.parse::<f64>()
                                   .map_err(|_| Self::invalid_literal(literal, position))?;
                self.operands.push(Value::Real(value));
            },
            grammar::LPAREN => self.operators.push(StackEntry::GroupOpen),
            grammar::RPAREN => self.apply_till_group_open(position)?,
            name => {
                if let Some(def) = operator::lookup(name) {
                    self.push_operator(def, position)?;
                }
            },
        }

        Ok(())
    }

    /// Drains the remaining operators and returns the single result.
    ///
    /// # Errors
    /// See [`Evaluator::eval_tree`].
    pub fn finish(mut self) -> EvalResult<Value> {
        self.apply_till_group_open(0)
            .map_err(|e| match e {
                     RuntimeError::MismatchedGroup { .. } => RuntimeError::MissingGroupMarker,
                     other => other,
                 })?;

        if !self.operators.is_empty() {
            return Err(RuntimeError::UnevaluatedOperators { count: self.operators.len() });
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            rest => Err(RuntimeError::UnevaluatedOperands { count: rest.len() }),
        }
    }

    /// Pushes an operator, first reducing whatever on the stack binds at
    /// least as tightly.
    ///
    /// Unary operators are pushed as they come: nothing that may legally
    /// precede a prefix operator needs reducing before it.
    fn push_operator(&mut self, def: &'static OperatorDef, position: usize) -> EvalResult<()> {
        if def.arity() == 2 {
            while let Some(&StackEntry::Operator { def: top, .. }) = self.operators.last()
                  && top.reduces_before(def)
            {
                self.apply_one()?;
            }
        }

        self.operators.push(StackEntry::Operator { def, position });

        Ok(())
    }

    /// Pops the top operator, applies it to its operands and pushes the
    /// result.
    fn apply_one(&mut self) -> EvalResult<()> {
        let Some(StackEntry::Operator { def, position }) = self.operators.pop() else {
            return Err(RuntimeError::MissingGroupMarker);
        };

        let arity = def.arity();
        if self.operands.len() < arity {
            return Err(RuntimeError::MissingOperands { operator: def.name,
                                                       expected: arity,
                                                       found: self.operands.len(),
                                                       position });
        }
        let operands = self.operands.split_off(self.operands.len() - arity);

        let result = match (def.reduction, operands.as_slice()) {
            (Reduction::Unary(apply), [value]) => apply(*value, position)?,
            (Reduction::Binary(apply), [left, right]) => apply(*left, *right, position)?,
            _ => {
                return Err(RuntimeError::MissingOperands { operator: def.name,
                                                           expected: arity,
                                                           found: operands.len(),
                                                           position });
            },
        };

        debug!("reduced {} at {position} to {result}", def.name);
        self.operands.push(result);

        Ok(())
    }

    /// Applies operators until the innermost group marker, then removes the
    /// marker.
    fn apply_till_group_open(&mut self, position: usize) -> EvalResult<()> {
        loop {
            match self.operators.last() {
                Some(StackEntry::GroupOpen) => {
                    self.operators.pop();
                    return Ok(());
                },
                Some(StackEntry::Operator { .. }) => self.apply_one()?,
                None => return Err(RuntimeError::MismatchedGroup { position }),
            }
        }
    }

    fn invalid_literal(literal: &str, position: usize) -> RuntimeError {
        RuntimeError::InvalidLiteral { literal: literal.to_string(),
                                       position }
    }
}
