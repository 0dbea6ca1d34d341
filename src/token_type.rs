use std::fmt;

/// The four binary arithmetic operators an expression can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Add,
	Sub,
	Mul,
	Div,
}

impl Operator {
	/// Maps an operator symbol to its `Operator`.
	///
	/// Both the ASCII spellings (`+ - * /`) and the typographic ones
	/// (`− × ÷`) are accepted.
	pub fn from_symbol(symbol: char) -> Option<Self> {
		match symbol {
			'+' => Some(Operator::Add),
			'-' | '−' => Some(Operator::Sub),
			'*' | '×' => Some(Operator::Mul),
			'/' | '÷' => Some(Operator::Div),
			_ => None,
		}
	}

	/// ASCII spelling; the typographic forms are accepted on input only.
	pub fn symbol(self) -> char {
		match self {
			Operator::Add => '+',
			Operator::Sub => '-',
			Operator::Mul => '*',
			Operator::Div => '/',
		}
	}

	/// Computes `left op right` with plain IEEE-754 double semantics.
	///
	/// Division by zero gives an infinity or NaN, it never fails.
	pub fn apply(
		self,
		left: f64,
		right: f64,
	) -> f64 {
		match self {
			Operator::Add => left + right,
			Operator::Sub => left - right,
			Operator::Mul => left * right,
			Operator::Div => left / right,
		}
	}
}

impl fmt::Display for Operator {
	fn fmt(
		&self,
		f: &mut fmt::Formatter<'_>,
	) -> fmt::Result {
		write!(f, "{}", self.symbol())
	}
}

/// A single infix token, as handed over by whatever tokenized the input.
///
/// `Operand` carries no value: it is a slot that consumes the next input
/// at evaluation time, in the order operands appear in the infix form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
	Operand,
	LeftParen,
	RightParen,
	Operator(Operator),
}

impl Token {
	pub const ADD: Token = Token::Operator(Operator::Add);
	pub const SUB: Token = Token::Operator(Operator::Sub);
	pub const MUL: Token = Token::Operator(Operator::Mul);
	pub const DIV: Token = Token::Operator(Operator::Div);

	pub fn is_operand(&self) -> bool {
		matches!(self, Token::Operand)
	}
}

impl From<Operator> for Token {
	fn from(op: Operator) -> Self {
		Token::Operator(op)
	}
}

impl fmt::Display for Token {
	fn fmt(
		&self,
		f: &mut fmt::Formatter<'_>,
	) -> fmt::Result {
		match self {
			Token::Operand => write!(f, "x"),
			Token::LeftParen => write!(f, "("),
			Token::RightParen => write!(f, ")"),
			Token::Operator(op) => write!(f, "{op}"),
		}
	}
}
