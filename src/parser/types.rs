//! Type annotation parsing.
//!
//! The type grammar dispatches on a single leading token:
//!
//! - `none`, `int`, `ratio`, `bool`, `str`, `any` - basic types
//! - `list` `[` type `]` - list types
//! - `func` `[` `[` type, ... `]` `,` type `]` - function types
//!
//! The grammar is fully recursive; the core imposes no nesting limit.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::TypeWrapper,
        types::{BasicType, BasicTypeKind, FuncType, ListType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::parser::Parser;

/// Type alias for type handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<TypeWrapper, Error>;

/// Type alias for the type lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Initializes the type parsing lookup table.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::None, parse_basic_type);
    parser.type_nud(TokenKind::Int, parse_basic_type);
    parser.type_nud(TokenKind::Ratio, parse_basic_type);
    parser.type_nud(TokenKind::Bool, parse_basic_type);
    parser.type_nud(TokenKind::Str, parse_basic_type);
    parser.type_nud(TokenKind::Any, parse_basic_type);
    parser.type_nud(TokenKind::List, parse_list_type);
    parser.type_nud(TokenKind::Func, parse_func_type);
}

pub fn parse_type(parser: &mut Parser) -> Result<TypeWrapper, Error> {
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_type_nud_lookup().get(&token_kind) {
        Some(handler) => *handler,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ))
        }
    };

    nud_fn(parser)
}

pub fn parse_basic_type(parser: &mut Parser) -> Result<TypeWrapper, Error> {
    let token = parser.advance().clone();

    let kind = match token.kind {
        TokenKind::None => BasicTypeKind::None,
        TokenKind::Int => BasicTypeKind::Int,
        TokenKind::Ratio => BasicTypeKind::Ratio,
        TokenKind::Bool => BasicTypeKind::Bool,
        TokenKind::Str => BasicTypeKind::Str,
        TokenKind::Any => BasicTypeKind::Any,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        }
    };

    Ok(TypeWrapper::new(BasicType {
        kind,
        span: token.span,
    }))
}

pub fn parse_list_type(parser: &mut Parser) -> Result<TypeWrapper, Error> {
    let start = parser.advance().span.start.clone();

    parser.expect(TokenKind::OpenBracket)?;
    let element = parse_type(parser)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(TypeWrapper::new(ListType {
        element,
        span: Span {
            start,
            end: parser.previous_end(),
        },
    }))
}

pub fn parse_func_type(parser: &mut Parser) -> Result<TypeWrapper, Error> {
    let start = parser.advance().span.start.clone();

    parser.expect(TokenKind::OpenBracket)?;
    parser.expect(TokenKind::OpenBracket)?;

    let parameter_types =
        parser.parse_separated(TokenKind::Comma, TokenKind::CloseBracket, parse_type)?;

    parser.expect(TokenKind::CloseBracket)?;
    parser.expect(TokenKind::Comma)?;

    let return_type = parse_type(parser)?;

    parser.expect(TokenKind::CloseBracket)?;

    Ok(TypeWrapper::new(FuncType {
        parameter_types,
        return_type,
        span: Span {
            start,
            end: parser.previous_end(),
        },
    }))
}
