//! Lexing, parsing and name resolution for skiff programs.
//!
//! The pipeline is `lex` -> `parse` -> `lower`: the lexer produces a flat
//! token sequence, the parser builds an unresolved AST, and the lowerer
//! registers every function signature before resolving bodies, so that
//! duplicate names, unknown names and call arity are all checked
//! statically regardless of declaration order.

#[macro_use]
extern crate macro_rules_attribute;

mod error;
mod lexer;
mod lower;
mod parser;

pub mod ast;
pub mod token;

pub use error::{CompileError, SyntaxError};
pub use lexer::Lexer;
pub use lower::lower;
pub use parser::Parser;

use token::Token;

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)];
}

pub fn lex(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(source).lex()
}

pub fn parse(tokens: Vec<Token>) -> Result<ast::Module, SyntaxError> {
    Parser::new(tokens).parse()
}
