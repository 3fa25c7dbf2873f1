use skiff_ir::BinOp;

use super::{ParseResult, Parser};
use crate::ast::{Expr, ExprKind};
use crate::token::{Token, TokenKind};

impl Parser {
    /// `Expression := Call | Unary | '(' Addition ')' | '[' IfExpr`
    ///
    /// Binary operator chains are only reachable through parentheses, so
    /// `2+2` without them is a syntax error.
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Expr> {
        match self.peek_kind(0) {
            Some(TokenKind::Identifier(_)) => self.parse_call(),
            Some(TokenKind::Integer(_) | TokenKind::Minus) => self.parse_unary(),

            Some(TokenKind::LParen) => {
                self.pos += 1;
                let expr = self.parse_addition()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }

            Some(TokenKind::LBracket) => {
                self.pos += 1;
                self.parse_if()
            }

            _ => Err(self.error_expected("an expression", self.peek())),
        }
    }

    // `[` is already consumed. The node reports the condition's line.
    fn parse_if(&mut self) -> ParseResult<Expr> {
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RBracket)?;
        self.expect(TokenKind::Question)?;
        self.expect(TokenKind::LBrace)?;
        let then = self.parse_expr()?;
        self.expect(TokenKind::RBrace)?;
        self.expect(TokenKind::Colon)?;
        self.expect(TokenKind::LBrace)?;
        let else_ = self.parse_expr()?;
        self.expect(TokenKind::RBrace)?;

        let line = cond.line;
        Ok(Expr::new(
            ExprKind::If {
                cond: Box::new(cond),
                then: Box::new(then),
                else_: Box::new(else_),
            },
            line,
        ))
    }

    // A bare identifier is a parameter reference; with an argument list it
    // is a call. The argument list requires at least one expression, so
    // `f()` fails here.
    fn parse_call(&mut self) -> ParseResult<Expr> {
        let ident = self.parse_ident()?;
        let line = ident.line;

        if !self.eat(TokenKind::LParen) {
            return Ok(Expr::new(ExprKind::Var(ident), line));
        }

        let mut args = vec![self.parse_expr()?];
        while self.eat(TokenKind::Comma) {
            args.push(self.parse_expr()?);
        }
        self.expect(TokenKind::RParen)?;

        Ok(Expr::new(ExprKind::Call { ident, args }, line))
    }

    // The four ranked levels below reproduce the language's deliberately
    // nonstandard precedence: comparisons bind tighter than `%`, which
    // binds tighter than `*` and `/`, which bind tighter than `+` and `-`.
    // All are left-associative.

    fn parse_addition(&mut self) -> ParseResult<Expr> {
        self.parse_binary(Self::parse_multiplication, &[BinOp::Add, BinOp::Sub])
    }

    fn parse_multiplication(&mut self) -> ParseResult<Expr> {
        self.parse_binary(Self::parse_mod_level, &[BinOp::Mul, BinOp::Div])
    }

    fn parse_mod_level(&mut self) -> ParseResult<Expr> {
        self.parse_binary(Self::parse_comparison, &[BinOp::Mod])
    }

    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.parse_binary(
            Self::parse_unary,
            &[BinOp::Less, BinOp::Greater, BinOp::Equal],
        )
    }

    fn parse_binary(
        &mut self,
        next_level: fn(&mut Self) -> ParseResult<Expr>,
        ops: &[BinOp],
    ) -> ParseResult<Expr> {
        let mut lhs = next_level(self)?;

        while let Some(op) = self.peek_bin_op(ops) {
            self.pos += 1;
            let rhs = next_level(self)?;

            let line = lhs.line;
            lhs = Expr::new(
                ExprKind::BinOp {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                line,
            );
        }

        Ok(lhs)
    }

    fn peek_bin_op(&self, ops: &[BinOp]) -> Option<BinOp> {
        let op = match self.peek_kind(0)? {
            TokenKind::Plus => BinOp::Add,
            TokenKind::Minus => BinOp::Sub,
            TokenKind::Star => BinOp::Mul,
            TokenKind::Slash => BinOp::Div,
            TokenKind::Percent => BinOp::Mod,
            TokenKind::Less => BinOp::Less,
            TokenKind::Greater => BinOp::Greater,
            TokenKind::Equal => BinOp::Equal,
            _ => return None,
        };

        ops.contains(&op).then_some(op)
    }

    /// `Unary := NUMBER | '-' NUMBER | Expression`; the leading minus only
    /// negates a literal directly, so `--1` is a syntax error.
    pub(crate) fn parse_unary(&mut self) -> ParseResult<Expr> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Integer(n),
                line,
            }) => {
                let expr = Expr::new(ExprKind::Integer(*n), *line);
                self.pos += 1;
                Ok(expr)
            }

            Some(t) if t.kind == TokenKind::Minus => {
                self.pos += 1;
                match self.peek() {
                    Some(Token {
                        kind: TokenKind::Integer(n),
                        line,
                    }) => {
                        let expr = Expr::new(ExprKind::Integer(-n), *line);
                        self.pos += 1;
                        Ok(expr)
                    }
                    other => Err(self.error_expected("a number", other)),
                }
            }

            _ => self.parse_expr(),
        }
    }
}
