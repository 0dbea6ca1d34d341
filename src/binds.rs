use crate::token_type::{Operator, Token};

/// Precedence reported for anything that is not an operator.
///
/// Sits below every operator tier so the converter never pops a paren
/// while resolving precedence.
pub const NON_OPERATOR: i8 = -1;

pub fn operator_precedence(op: Operator) -> i8 {
	match op {
		Operator::Add => 1,
		Operator::Sub => 1,
		Operator::Mul => 2,
		Operator::Div => 2,
	}
}

/// Total precedence map over tokens; higher binds tighter.
pub fn precedence(token: Token) -> i8 {
	match token {
		Token::Operator(op) => operator_precedence(op),
		Token::Operand | Token::LeftParen | Token::RightParen => NON_OPERATOR,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn add() {
		assert_eq!(precedence(Token::ADD), 1);
	}

	#[test]
	fn sub() {
		assert_eq!(precedence(Token::SUB), 1);
	}

	#[test]
	fn mul() {
		assert_eq!(precedence(Token::MUL), 2);
	}

	#[test]
	fn div() {
		assert_eq!(precedence(Token::DIV), 2);
	}

	#[test]
	fn non_operators_rank_below_every_operator() {
		for token in [Token::Operand, Token::LeftParen, Token::RightParen] {
			assert_eq!(precedence(token), NON_OPERATOR);
			assert!(precedence(token) < precedence(Token::ADD));
		}
	}
}
