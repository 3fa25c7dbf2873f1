
mod expr;

use crate::ast::*;
use crate::error::SyntaxError;
use crate::token::{Token, TokenKind};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Recursive-descent parser over the token sequence. Purely grammatical:
/// name resolution and arity checking happen in the lowerer.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a whole program: zero or more function definitions, one
    /// trailing expression, nothing left over.
    pub fn parse(mut self) -> ParseResult<Module> {
        let funcs = self.parse_func_decls()?;
        let body = self.parse_expr()?;
        self.expect_end()?;
        Ok(Module { funcs, body })
    }

    fn parse_func_decls(&mut self) -> ParseResult<Vec<FuncDecl>> {
        let mut funcs = vec![];
        while self.at_func_header() {
            funcs.push(self.parse_func_decl()?);
        }
        Ok(funcs)
    }

    // `f(x` opens a definition header; `f(1` does not, and parsing falls
    // through to the trailing expression. This is the only place needing
    // more than one token of lookahead.
    fn at_func_header(&self) -> bool {
        matches!(self.peek_kind(0), Some(TokenKind::Identifier(_)))
            && matches!(self.peek_kind(1), Some(TokenKind::LParen))
            && matches!(self.peek_kind(2), Some(TokenKind::Identifier(_)))
    }

    fn parse_func_decl(&mut self) -> ParseResult<FuncDecl> {
        let ident = self.parse_ident()?;
        self.expect(TokenKind::LParen)?;
        let params = self.parse_params()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Equal)?;
        self.expect(TokenKind::LBrace)?;
        let body = self.parse_expr()?;
        self.expect(TokenKind::RBrace)?;
        self.expect(TokenKind::Newline)?;

        Ok(FuncDecl {
            ident,
            params,
            body,
        })
    }

    // At least one parameter; `f()={..}` is not a valid definition.
    fn parse_params(&mut self) -> ParseResult<Vec<Ident>> {
        let mut params = vec![self.parse_ident()?];
        while self.eat(TokenKind::Comma) {
            params.push(self.parse_ident()?);
        }
        Ok(params)
    }

    fn parse_ident(&mut self) -> ParseResult<Ident> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Identifier(name),
                line,
            }) => {
                let ident = Ident {
                    name: name.clone(),
                    line: *line,
                };
                self.pos += 1;
                Ok(ident)
            }
            other => Err(self.error_expected("an identifier", other)),
        }
    }

    fn expect_end(&self) -> ParseResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(self.error_expected("end of input", Some(token))),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<()> {
        match self.peek() {
            Some(t) if t.kind == kind => {
                self.pos += 1;
                Ok(())
            }
            other => Err(self.error_expected(kind.token_name(), other)),
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        match self.peek() {
            Some(t) if t.kind == kind => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self, offset: usize) -> Option<&TokenKind> {
        self.tokens.get(self.pos + offset).map(|t| &t.kind)
    }

    fn error_expected(&self, expected: impl Into<String>, found: Option<&Token>) -> SyntaxError {
        match found {
            Some(token) => SyntaxError::Expected {
                expected: expected.into(),
                found: token.kind.token_name().to_owned(),
                line: token.line,
            },
            None => SyntaxError::Expected {
                expected: expected.into(),
                found: "end of input".to_owned(),
                line: self.eof_line(),
            },
        }
    }

    fn eof_line(&self) -> u32 {
        self.tokens.last().map_or(0, |t| t.line)
    }
}
