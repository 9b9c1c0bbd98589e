use std::collections::HashMap;

use crate::{
    ast::ast::{ExprWrapper, StmtWrapper},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding power levels for the expression grammar, weakest first.
///
/// The ordering mirrors the language's precedence table exactly: `or` and
/// `and` share one level, and the greater-than comparisons bind tighter
/// than the less-than comparisons. Assignment and declaration sit below
/// every operator, so they are reachable only where a full expression
/// starts (expression statements, call arguments, list elements), never
/// as operands of a surrounding operator.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Logical,
    Equality,
    LessThan,
    GreaterThan,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<StmtWrapper, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<ExprWrapper, Error>;
pub type LEDHandler = fn(&mut Parser, ExprWrapper, BindingPower) -> Result<ExprWrapper, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Assignment and declaration, lowest of the operators
    parser.led(TokenKind::Assignment, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::Colon, BindingPower::Assignment, parse_declaration_expr);

    // Logical - `or` and `and` deliberately share one level
    parser.led(TokenKind::Or, BindingPower::Logical, parse_binary_expr);
    parser.led(TokenKind::And, BindingPower::Logical, parse_binary_expr);

    // Equality
    parser.led(TokenKind::Equals, BindingPower::Equality, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Equality, parse_binary_expr);

    // Comparisons - greater binds tighter than less
    parser.led(TokenKind::Less, BindingPower::LessThan, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::LessThan, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::GreaterThan, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::GreaterThan, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);

    // Postfix chain: calls and indexing
    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);
    parser.led(TokenKind::OpenBracket, BindingPower::Call, parse_get_item_expr);

    // Literals and symbols
    parser.nud(TokenKind::Integer, parse_primary_expr);
    parser.nud(TokenKind::Rational, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::None, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Dash, parse_unary_expr);
    parser.nud(TokenKind::Not, parse_unary_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::OpenBracket, parse_list_expr);

    // Statements
    parser.stmt(TokenKind::Fun, parse_fn_decl_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
