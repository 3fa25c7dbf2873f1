#[cfg(test)]
mod tests;

use std::str::Chars;

use crate::error::SyntaxError;
use crate::token::{Token, TokenKind};

pub type LexerResult<T> = Result<T, SyntaxError>;

pub struct Lexer<'src> {
    chars: Chars<'src>,
    line: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: source.chars(),
            line: 0,
        }
    }

    /// Scans the whole input, failing on the first character that starts
    /// no token. Never returns a partial sequence.
    pub fn lex(mut self) -> LexerResult<Vec<Token>> {
        let mut tokens = vec![];
        while let Some(token) = self.lex_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn lex_token(&mut self) -> LexerResult<Option<Token>> {
        loop {
            let line = self.line;

            let kind = match self.chars.next() {
                None => return Ok(None),

                // The newline token itself reports the line it ends.
                Some('\n') => {
                    self.line += 1;
                    TokenKind::Newline
                }

                Some(ch) if ch.is_ascii_whitespace() => continue,

                Some('+') => TokenKind::Plus,
                Some('-') => TokenKind::Minus,
                Some('*') => TokenKind::Star,
                Some('/') => TokenKind::Slash,
                Some('%') => TokenKind::Percent,

                Some('<') => TokenKind::Less,
                Some('>') => TokenKind::Greater,
                Some('=') => TokenKind::Equal,

                Some('(') => TokenKind::LParen,
                Some(')') => TokenKind::RParen,
                Some('[') => TokenKind::LBracket,
                Some(']') => TokenKind::RBracket,
                Some('{') => TokenKind::LBrace,
                Some('}') => TokenKind::RBrace,

                Some(',') => TokenKind::Comma,
                Some(':') => TokenKind::Colon,
                Some('?') => TokenKind::Question,

                // A literal `0` never starts a longer number, so `007`
                // lexes as three tokens (and the parser then rejects the
                // juxtaposition).
                Some('0') => TokenKind::Integer(0),
                Some(ch @ '1'..='9') => self.lex_integer(ch)?,

                Some(ch) if is_ident(ch) => self.lex_identifier(ch),

                Some(ch) => return Err(SyntaxError::UnexpectedChar { ch, line }),
            };

            return Ok(Some(Token::new(kind, line)));
        }
    }

    fn lex_integer(&mut self, first: char) -> LexerResult<TokenKind> {
        let mut n = Some(first as i64 - '0' as i64);

        while let Some(ch @ '0'..='9') = self.peek() {
            self.chars.next();
            let digit = ch as i64 - '0' as i64;
            n = n.and_then(|n| n.checked_mul(10));
            n = n.and_then(|n| n.checked_add(digit));
        }

        n.map(TokenKind::Integer)
            .ok_or(SyntaxError::IntegerOverflow { line: self.line })
    }

    fn lex_identifier(&mut self, first: char) -> TokenKind {
        let mut name = String::from(first);
        while let Some(ch) = self.peek() {
            if !is_ident(ch) {
                break;
            }
            self.chars.next();
            name.push(ch);
        }
        TokenKind::Identifier(name)
    }

    fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }
}

// Identifiers are letters and underscores only; digits end them.
fn is_ident(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}
