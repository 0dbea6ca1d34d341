//! in src/expression.rs
//!
//! The compiled, postfix form of an expression

use crate::token_type::Token;
use miette::SourceSpan;
use std::fmt;

/// A compiled expression: its tokens in postfix order plus the number of
/// inputs it consumes.
///
/// Built once by [`Expression::from_infix`] and never mutated afterwards,
/// so one instance can be evaluated from many threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
	/// postfix program
	pub(crate) tokens: Box<[Token]>,
	/// number of `Operand` tokens in `tokens`
	pub(crate) required_inputs: usize,
}

impl Expression {
	pub(crate) fn new(tokens: Vec<Token>) -> Self {
		let required_inputs = tokens.iter().filter(|t| t.is_operand()).count();

		Self { tokens: tokens.into_boxed_slice(), required_inputs }
	}

	/// The postfix token sequence.
	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	/// How many inputs [`Expression::evaluate`] expects.
	pub fn required_input_count(&self) -> usize {
		self.required_inputs
	}
}

impl fmt::Display for Expression {
	fn fmt(
		&self,
		f: &mut fmt::Formatter<'_>,
	) -> fmt::Result {
		let mut tokens = self.tokens.iter();
		if let Some(first) = tokens.next() {
			write!(f, "{first}")?;
		}
		for t in tokens {
			write!(f, " {t}")?
		}
		Ok(())
	}
}

/// Renders an infix token sequence as text and returns the span of the
/// token at `index` inside it, for error labels.
pub(crate) fn render_infix(
	tokens: &[Token],
	index: usize,
) -> (String, SourceSpan) {
	let mut src = String::new();
	let mut span = SourceSpan::from(0..0);

	for (i, token) in tokens.iter().enumerate() {
		if i > 0 {
			src.push(' ');
		}
		let start = src.len();
		src.push_str(&token.to_string());
		if i == index {
			span = SourceSpan::from(start..src.len());
		}
	}

	(src, span)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_operands() {
		let expr = Expression::new(vec![Token::Operand, Token::Operand, Token::ADD]);
		assert_eq!(expr.required_input_count(), 2);
		assert_eq!(expr.tokens(), &[Token::Operand, Token::Operand, Token::ADD]);
	}

	#[test]
	fn display_is_space_separated_postfix() {
		let expr = Expression::new(vec![
			Token::Operand,
			Token::Operand,
			Token::Operand,
			Token::MUL,
			Token::ADD,
		]);
		assert_eq!(expr.to_string(), "x x x * +");
	}

	#[test]
	fn render_points_at_token() {
		let tokens = [Token::Operand, Token::ADD, Token::LeftParen, Token::Operand];
		let (src, span) = render_infix(&tokens, 2);

		assert_eq!(src, "x + ( x");
		assert_eq!(span.offset(), 4);
		assert_eq!(span.len(), 1);
	}
}
