//! Compiles pre-tokenized infix arithmetic into postfix form and evaluates it
//! against vectors of `f64` inputs.
//!
//! ```
//! use rpn_engine::{Expression, Token};
//!
//! // (a + b) * c
//! let expr = Expression::from_infix(&[
//!     Token::LeftParen,
//!     Token::Operand,
//!     Token::ADD,
//!     Token::Operand,
//!     Token::RightParen,
//!     Token::MUL,
//!     Token::Operand,
//! ])?;
//!
//! assert_eq!(expr.required_input_count(), 3);
//! assert_eq!(expr.evaluate(&[1.0, 2.0, 3.0])?, 9.0);
//! # Ok::<(), miette::Report>(())
//! ```
pub mod binds;
pub mod evaluator;
pub mod expression;
pub mod parser;
pub mod stack;
pub mod token_type;

pub use binds::precedence;
pub use evaluator::{EvalError, Malformation};
pub use expression::Expression;
pub use parser::{from_infix, CompileError};
pub use stack::Stack;
pub use token_type::{Operator, Token};
