use insta::assert_debug_snapshot;

use super::Lexer;
use crate::error::SyntaxError;
use crate::token::{Token, TokenKind};

fn lex(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(source).lex()
}

fn lex_kinds(source: &str) -> Vec<TokenKind> {
    lex(source)
        .expect("lexing failed")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn single_number() {
    assert_debug_snapshot!(lex("1"), @r###"
    Ok(
        [
            Token {
                kind: Integer(
                    1,
                ),
                line: 0,
            },
        ],
    )
    "###);
}

#[test]
fn negated_number_is_two_tokens() {
    assert_eq!(lex_kinds("-1"), vec![TokenKind::Minus, TokenKind::Integer(1)]);
}

#[test]
fn identifier() {
    assert_eq!(
        lex_kinds("a"),
        vec![TokenKind::Identifier("a".to_owned())]
    );
}

#[test]
fn identifier_with_underscores_and_case() {
    assert_eq!(
        lex_kinds("a_abB_Cc"),
        vec![TokenKind::Identifier("a_abB_Cc".to_owned())]
    );
}

#[test]
fn identifier_ends_at_digit() {
    assert_eq!(
        lex_kinds("a1"),
        vec![
            TokenKind::Identifier("a".to_owned()),
            TokenKind::Integer(1)
        ]
    );
}

#[test]
fn operators() {
    assert_eq!(
        lex_kinds("2+2"),
        vec![
            TokenKind::Integer(2),
            TokenKind::Plus,
            TokenKind::Integer(2)
        ]
    );
    assert_eq!(
        lex_kinds("0-3"),
        vec![
            TokenKind::Integer(0),
            TokenKind::Minus,
            TokenKind::Integer(3)
        ]
    );
    assert_eq!(
        lex_kinds("5*7"),
        vec![
            TokenKind::Integer(5),
            TokenKind::Star,
            TokenKind::Integer(7)
        ]
    );
    assert_eq!(
        lex_kinds("10/4"),
        vec![
            TokenKind::Integer(10),
            TokenKind::Slash,
            TokenKind::Integer(4)
        ]
    );
    assert_eq!(
        lex_kinds("17%7"),
        vec![
            TokenKind::Integer(17),
            TokenKind::Percent,
            TokenKind::Integer(7)
        ]
    );
}

#[test]
fn comparisons() {
    assert_eq!(
        lex_kinds("0<0"),
        vec![
            TokenKind::Integer(0),
            TokenKind::Less,
            TokenKind::Integer(0)
        ]
    );
    assert_eq!(
        lex_kinds("0>0"),
        vec![
            TokenKind::Integer(0),
            TokenKind::Greater,
            TokenKind::Integer(0)
        ]
    );
    assert_eq!(
        lex_kinds("0=0"),
        vec![
            TokenKind::Integer(0),
            TokenKind::Equal,
            TokenKind::Integer(0)
        ]
    );
}

#[test]
fn function_definition() {
    assert_eq!(
        lex_kinds("f(x,y)={1}"),
        vec![
            TokenKind::Identifier("f".to_owned()),
            TokenKind::LParen,
            TokenKind::Identifier("x".to_owned()),
            TokenKind::Comma,
            TokenKind::Identifier("y".to_owned()),
            TokenKind::RParen,
            TokenKind::Equal,
            TokenKind::LBrace,
            TokenKind::Integer(1),
            TokenKind::RBrace,
        ]
    );
}

#[test]
fn if_expression() {
    assert_eq!(
        lex_kinds("[1]?{2}:{3}"),
        vec![
            TokenKind::LBracket,
            TokenKind::Integer(1),
            TokenKind::RBracket,
            TokenKind::Question,
            TokenKind::LBrace,
            TokenKind::Integer(2),
            TokenKind::RBrace,
            TokenKind::Colon,
            TokenKind::LBrace,
            TokenKind::Integer(3),
            TokenKind::RBrace,
        ]
    );
}

#[test]
fn multiline_line_numbers() {
    let tokens = lex("f(x)={x}\nf(1)").expect("lexing failed");
    let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();

    // The newline token itself reports the line it ends; everything after
    // it is one line further down.
    assert_eq!(lines, vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1]);
    assert_eq!(tokens[8].kind, TokenKind::Newline);
}

#[test]
fn spaces_and_tabs_are_skipped() {
    assert_eq!(
        lex_kinds("  1 \t+  2 "),
        vec![
            TokenKind::Integer(1),
            TokenKind::Plus,
            TokenKind::Integer(2)
        ]
    );
}

#[test]
fn no_leading_zeros() {
    // `007` is three tokens; the grammar then rejects the juxtaposition.
    assert_eq!(
        lex_kinds("007"),
        vec![
            TokenKind::Integer(0),
            TokenKind::Integer(0),
            TokenKind::Integer(7)
        ]
    );
}

#[test]
fn integer_overflow() {
    assert_eq!(
        lex("100000000000000000000"),
        Err(SyntaxError::IntegerOverflow { line: 0 })
    );
}

#[test]
fn unexpected_character() {
    assert_eq!(
        lex("2^2"),
        Err(SyntaxError::UnexpectedChar { ch: '^', line: 0 })
    );
}

#[test]
fn unexpected_character_reports_line() {
    assert_eq!(
        lex("1\n2\n^"),
        Err(SyntaxError::UnexpectedChar { ch: '^', line: 2 })
    );
}

#[test]
fn empty_input() {
    assert_debug_snapshot!(lex(""), @r###"
    Ok(
        [],
    )
    "###);
}
