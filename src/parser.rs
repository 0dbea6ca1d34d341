//! in src/parser.rs
//!
//! Shunting-yard conversion of infix tokens into a postfix `Expression`

use crate::binds::precedence;
use crate::expression::{render_infix, Expression};
use crate::stack::Stack;
use crate::token_type::Token;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;
use tracing::{debug, trace};

/// Reasons an infix token sequence cannot be compiled.
#[derive(Diagnostic, Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
	#[error("the expression is empty")]
	#[diagnostic(code(rpn::compile::empty), help("pass at least one token"))]
	EmptyExpression,

	#[error("closing parenthesis at token {index} has no matching opening parenthesis")]
	#[diagnostic(code(rpn::compile::unmatched_paren))]
	UnmatchedParen {
		index: usize,
		#[source_code]
		src: String,
		#[label("this `)`")]
		span: SourceSpan,
	},

	#[error("opening parenthesis at token {index} is never closed")]
	#[diagnostic(code(rpn::compile::unmatched_left_paren), help("add a `)` after the group"))]
	UnmatchedLeftParen {
		index: usize,
		#[source_code]
		src: String,
		#[label("this `(`")]
		span: SourceSpan,
	},
}

impl CompileError {
	fn unmatched_paren(
		tokens: &[Token],
		index: usize,
	) -> Self {
		let (src, span) = render_infix(tokens, index);
		CompileError::UnmatchedParen { index, src, span }
	}

	fn unmatched_left_paren(
		tokens: &[Token],
		index: usize,
	) -> Self {
		let (src, span) = render_infix(tokens, index);
		CompileError::UnmatchedLeftParen { index, src, span }
	}
}

impl Expression {
	/// Compiles an infix token sequence into postfix form.
	///
	/// Operators of equal precedence associate to the left.
	pub fn from_infix(tokens: &[Token]) -> Result<Self, CompileError> {
		from_infix(tokens)
	}
}

/// See [`Expression::from_infix`].
pub fn from_infix(tokens: &[Token]) -> Result<Expression, CompileError> {
	trace!(tokens = tokens.len(), "compiling infix expression");

	let expression = shunting_yard(tokens).inspect_err(|e| debug!(error = %e, "compile failed"))?;

	debug!(
		postfix = %expression,
		required_inputs = expression.required_inputs,
		"compiled expression"
	);

	Ok(expression)
}

fn shunting_yard(tokens: &[Token]) -> Result<Expression, CompileError> {
	if tokens.is_empty() {
		return Err(CompileError::EmptyExpression);
	}

	let mut output = Vec::with_capacity(tokens.len());
	// operators and left parens, each with its index in `tokens`
	let mut ops: Stack<(Token, usize)> = Stack::new();

	for (index, &token) in tokens.iter().enumerate() {
		trace!(index, %token, pending = ops.len(), "shunting");

		match token {
			Token::Operand => output.push(token),
			Token::LeftParen => ops.push((token, index)),
			Token::RightParen => loop {
				match ops.pop() {
					Some((Token::LeftParen, _)) => break,
					Some((op, _)) => output.push(op),
					None => return Err(CompileError::unmatched_paren(tokens, index)),
				}
			},
			Token::Operator(_) => {
				let prec = precedence(token);

				// parens rank below every operator, so this stops at a group boundary
				while let Some(&(top, _)) = ops.peek() {
					if precedence(top) < prec {
						break;
					}
					output.push(top);
					ops.pop();
				}

				ops.push((token, index));
			},
		}
	}

	while let Some((token, index)) = ops.pop() {
		if token == Token::LeftParen {
			return Err(CompileError::unmatched_left_paren(tokens, index));
		}
		output.push(token);
	}

	Ok(Expression::new(output))
}
