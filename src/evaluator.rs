//! in src/evaluator.rs
//!
//! Stack machine that replays a postfix `Expression` against inputs

use crate::expression::Expression;
use crate::stack::Stack;
use crate::token_type::Token;
use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

/// Reasons an evaluation can fail.
#[derive(Diagnostic, Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
	#[error("expression takes {expected} inputs, got {found}")]
	#[diagnostic(code(rpn::eval::input_count))]
	InputCountMismatch { expected: usize, found: usize },

	#[error("operator at postfix position {position} is missing an operand")]
	#[diagnostic(code(rpn::eval::stack_underflow))]
	StackUnderflow { position: usize },

	#[error("malformed expression: {reason}")]
	#[diagnostic(code(rpn::eval::malformed))]
	MalformedExpression { reason: Malformation },

	#[error("column {column} has {found} rows, expected {expected}")]
	#[diagnostic(code(rpn::eval::column_length))]
	ColumnLengthMismatch { column: usize, expected: usize, found: usize },
}

/// What made a postfix program unrunnable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Malformation {
	/// replay ended with a stack depth other than one
	#[error("evaluation left {depth} values on the stack instead of one")]
	Leftover { depth: usize },

	/// only operands and operators survive compilation
	#[error("unexpected `{token}` at postfix position {position}")]
	UnexpectedToken { position: usize, token: Token },
}

impl EvalError {
	fn leftover(depth: usize) -> Self {
		EvalError::MalformedExpression { reason: Malformation::Leftover { depth } }
	}

	/// Whether the program itself is broken, as opposed to the inputs.
	pub fn is_malformed(&self) -> bool {
		matches!(
			self,
			EvalError::MalformedExpression { .. } | EvalError::StackUnderflow { .. }
		)
	}
}

impl Expression {
	/// Evaluates the expression, feeding `inputs` to its operands left to right.
	pub fn evaluate(
		&self,
		inputs: &[f64],
	) -> Result<f64, EvalError> {
		self.check_input_count(inputs.len())?;

		let mut stack = Stack::new();
		self.replay(&mut stack, |slot| inputs[slot])
			.inspect_err(|e| debug!(error = %e, postfix = %self, "evaluation failed"))
	}

	/// Evaluates the expression once per row of a columnar batch.
	///
	/// `columns[i]` holds operand `i` for every row; row `r` of `output` gets
	/// the result of `[columns[0][r], columns[1][r], ...]`. Every column must
	/// be exactly `output.len()` long.
	pub fn evaluate_columns(
		&self,
		columns: &[&[f64]],
		output: &mut [f64],
	) -> Result<(), EvalError> {
		self.check_input_count(columns.len())?;

		let rows = output.len();
		for (column, values) in columns.iter().enumerate() {
			if values.len() != rows {
				return Err(EvalError::ColumnLengthMismatch { column, expected: rows, found: values.len() });
			}
		}

		let mut stack = Stack::new();
		for (row, out) in output.iter_mut().enumerate() {
			stack.clear();
			*out = self
				.replay(&mut stack, |slot| columns[slot][row])
				.inspect_err(|e| debug!(error = %e, row, postfix = %self, "evaluation failed"))?;
		}

		Ok(())
	}

	fn check_input_count(
		&self,
		found: usize,
	) -> Result<(), EvalError> {
		if found != self.required_inputs {
			return Err(EvalError::InputCountMismatch { expected: self.required_inputs, found });
		}
		Ok(())
	}

	/// Runs the postfix program. `input` maps an operand slot to its value and
	/// is only called with slots below `required_inputs`.
	fn replay(
		&self,
		stack: &mut Stack<f64>,
		input: impl Fn(usize) -> f64,
	) -> Result<f64, EvalError> {
		let mut cursor = 0;

		for (position, &token) in self.tokens.iter().enumerate() {
			match token {
				Token::Operand => {
					stack.push(input(cursor));
					cursor += 1;
				},
				Token::Operator(op) => {
					// right operand sits on top
					let right = stack.pop().ok_or(EvalError::StackUnderflow { position })?;
					let left = stack.pop().ok_or(EvalError::StackUnderflow { position })?;
					stack.push(op.apply(left, right));
				},
				Token::LeftParen | Token::RightParen => {
					let reason = Malformation::UnexpectedToken { position, token };
					return Err(EvalError::MalformedExpression { reason });
				},
			}
		}

		match (stack.pop(), stack.len()) {
			(Some(value), 0) => Ok(value),
			(Some(_), rest) => Err(EvalError::leftover(rest + 1)),
			(None, _) => Err(EvalError::leftover(0)),
		}
	}
}
