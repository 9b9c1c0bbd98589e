//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer and rational literals
//! - String literals
//! - Operators and punctuation
//! - Error cases

use std::rc::Rc;

use crate::errors::errors::ErrorKind;

use super::{lexer::tokenize, tokens::TokenKind};

fn lex(source: &str) -> Vec<super::tokens::Token> {
    tokenize(source.to_string(), Rc::new("test.rhl".to_string())).unwrap()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = lex("fun if else while return true false none int ratio bool str any list func or and");

    assert_eq!(tokens[0].kind, TokenKind::Fun);
    assert_eq!(tokens[1].kind, TokenKind::If);
    assert_eq!(tokens[2].kind, TokenKind::Else);
    assert_eq!(tokens[3].kind, TokenKind::While);
    assert_eq!(tokens[4].kind, TokenKind::Return);
    assert_eq!(tokens[5].kind, TokenKind::True);
    assert_eq!(tokens[6].kind, TokenKind::False);
    assert_eq!(tokens[7].kind, TokenKind::None);
    assert_eq!(tokens[8].kind, TokenKind::Int);
    assert_eq!(tokens[9].kind, TokenKind::Ratio);
    assert_eq!(tokens[10].kind, TokenKind::Bool);
    assert_eq!(tokens[11].kind, TokenKind::Str);
    assert_eq!(tokens[12].kind, TokenKind::Any);
    assert_eq!(tokens[13].kind, TokenKind::List);
    assert_eq!(tokens[14].kind, TokenKind::Func);
    assert_eq!(tokens[15].kind, TokenKind::Or);
    assert_eq!(tokens[16].kind, TokenKind::And);
    assert_eq!(tokens[17].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = lex("foo bar baz_123 _underscore CamelCase");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_keyword_prefix_stays_identifier() {
    // Reserved words only win on an exact match.
    let tokens = lex("iffy function whiled organism android");

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
}

#[test]
fn test_tokenize_integers() {
    let tokens = lex("42 0 100");

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].value, "100");
}

#[test]
fn test_tokenize_rationals() {
    let tokens = lex("3.14 0.5 100.");

    assert_eq!(tokens[0].kind, TokenKind::Rational);
    assert_eq!(tokens[0].value, "3.14");
    assert_eq!(tokens[1].kind, TokenKind::Rational);
    assert_eq!(tokens[1].value, "0.5");
    assert_eq!(tokens[2].kind, TokenKind::Rational);
    assert_eq!(tokens[2].value, "100.");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_trailing_dot_is_one_rational() {
    // Maximal munch: `3.` is a single Rational, not Integer plus a dot.
    let tokens = lex("3.");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Rational);
    assert_eq!(tokens[0].value, "3.");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let tokens = lex(r#""hello" "multiple words" """#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_strings_have_no_escapes() {
    // Backslashes are ordinary characters.
    let tokens = lex(r#""a\nb""#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\\nb");
}

#[test]
fn test_unterminated_string() {
    let result = tokenize(
        "x = \"oops".to_string(),
        Rc::new("test.rhl".to_string()),
    );

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_kind(), ErrorKind::Lexical);
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_operators() {
    let tokens = lex("+ - * / == != < > <= >= = ! or and");

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::Equals);
    assert_eq!(tokens[5].kind, TokenKind::NotEquals);
    assert_eq!(tokens[6].kind, TokenKind::Less);
    assert_eq!(tokens[7].kind, TokenKind::Greater);
    assert_eq!(tokens[8].kind, TokenKind::LessEquals);
    assert_eq!(tokens[9].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[10].kind, TokenKind::Assignment);
    assert_eq!(tokens[11].kind, TokenKind::Not);
    assert_eq!(tokens[12].kind, TokenKind::Or);
    assert_eq!(tokens[13].kind, TokenKind::And);
    assert_eq!(tokens[14].kind, TokenKind::EOF);
}

#[test]
fn test_greedy_operator_matching() {
    // No whitespace: `>=` must not split into `>` `=`.
    let tokens = lex("a>=b");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = lex("( ) { } [ ] , ; : ->");

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::OpenBracket);
    assert_eq!(tokens[5].kind, TokenKind::CloseBracket);
    assert_eq!(tokens[6].kind, TokenKind::Comma);
    assert_eq!(tokens[7].kind, TokenKind::Semicolon);
    assert_eq!(tokens[8].kind, TokenKind::Colon);
    assert_eq!(tokens[9].kind, TokenKind::Arrow);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_colon_equals_are_separate_tokens() {
    // `x:=5` is four tokens; there is no combined `:=`.
    let tokens = lex("x:=5");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Colon);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_statement() {
    let tokens = lex("x: int = 42;");

    assert_eq!(tokens.len(), 7); // x, :, int, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::Colon);
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[3].kind, TokenKind::Assignment);
    assert_eq!(tokens[4].kind, TokenKind::Integer);
    assert_eq!(tokens[4].value, "42");
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_function_declaration() {
    let tokens = lex("fun add(a: int, b: int) -> int { return a + b; }");

    assert_eq!(tokens[0].kind, TokenKind::Fun);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "add");
    assert_eq!(tokens[2].kind, TokenKind::OpenParen);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "a");
    assert_eq!(tokens[4].kind, TokenKind::Colon);
    assert_eq!(tokens[5].kind, TokenKind::Int);
}

#[test]
fn test_token_spans() {
    let tokens = lex("ab 12");

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[1].span.start.0, 3);
    assert_eq!(tokens[1].span.end.0, 5);
    // EOF sits at end of input
    assert_eq!(tokens[2].span.start.0, 5);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let result = tokenize("x = @".to_string(), Rc::new("test.rhl".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_kind(), ErrorKind::Lexical);
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_bare_dot_is_unrecognised() {
    // There is no dot token in the language.
    let result = tokenize(". ".to_string(), Rc::new("test.rhl".to_string()));

    assert!(result.is_err());
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = lex("  x   =   42  ");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_newlines() {
    let tokens = lex("x = 1;\ny = 2;\n");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "y");
    assert_eq!(tokens[4].span.start.0, 7);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = lex("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}
