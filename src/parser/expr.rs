use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{
            AssignmentExpr, BinaryExpr, BooleanExpr, CallExpr, DeclarationExpr, GetItemExpr,
            GroupExpr, IntegerExpr, ListExpr, NoneExpr, RationalExpr, StringExpr, SymbolExpr,
            UnaryExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser, types::parse_type};

/// Precedence-climbing core: parses a NUD term, then folds in LED
/// operators while their binding power exceeds `bp`. Passing the
/// operator's own power for the right operand makes every operator
/// left-associative.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
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

    let mut left = nud_fn(parser)?;

    loop {
        let current_kind = parser.current_token_kind();
        let current_bp = *parser
            .get_bp_lookup()
            .get(&current_kind)
            .unwrap_or(&BindingPower::Default);

        if current_bp <= bp {
            break;
        }

        let led_fn = match parser.get_led_lookup().get(&current_kind) {
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

        left = led_fn(parser, left, current_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            let result = parser.current_token().value.parse::<i64>();

            match result {
                Ok(value) => Ok(ExprWrapper::new(IntegerExpr {
                    value,
                    span: parser.advance().span.clone(),
                })),
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::Rational => {
            // A trailing dot ("3.") parses fine as f64.
            let result = parser.current_token().value.parse::<f64>();

            match result {
                Ok(value) => Ok(ExprWrapper::new(RationalExpr {
                    value,
                    span: parser.advance().span.clone(),
                })),
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::String => Ok(ExprWrapper::new(StringExpr {
            value: parser.current_token().value.clone(),
            span: parser.advance().span.clone(),
        })),
        TokenKind::True | TokenKind::False => {
            let value = parser.current_token_kind() == TokenKind::True;
            Ok(ExprWrapper::new(BooleanExpr {
                value,
                span: parser.advance().span.clone(),
            }))
        }
        TokenKind::None => Ok(ExprWrapper::new(NoneExpr {
            span: parser.advance().span.clone(),
        })),
        TokenKind::Identifier => Ok(ExprWrapper::new(SymbolExpr {
            value: parser.current_token().value.clone(),
            span: parser.advance().span.clone(),
        })),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left,
        operator: operator_token,
        right,
    }))
}

/// Prefix `-` and `!`: the operand is parsed at Unary power so only the
/// postfix chain binds tighter.
pub fn parse_unary_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();
    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(ExprWrapper::new(UnaryExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: right.get_span().end.clone(),
        },
        operator: operator_token,
        right,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(ExprWrapper::new(GroupExpr {
        expression,
        span: Span {
            start,
            end: parser.previous_end(),
        },
    }))
}

pub fn parse_list_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let elements = parser.parse_separated(TokenKind::Comma, TokenKind::CloseBracket, |p| {
        parse_expr(p, BindingPower::Default)
    })?;

    parser.expect(TokenKind::CloseBracket)?;

    Ok(ExprWrapper::new(ListExpr {
        elements,
        span: Span {
            start,
            end: parser.previous_end(),
        },
    }))
}

/// `name = value`. Registered at Assignment power, the lowest operator
/// level, so an assignment can never end up as an operand of a binary or
/// postfix operator.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    let name = match left.as_any().downcast_ref::<SymbolExpr>() {
        Some(symbol) => symbol.value.clone(),
        None => {
            return Err(Error::new(
                ErrorImpl::InvalidAssignmentTarget {
                    token: String::from("="),
                },
                left.get_span().start.clone(),
            ))
        }
    };

    parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(ExprWrapper::new(AssignmentExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: value.get_span().end.clone(),
        },
        name,
        value,
    }))
}

/// `name : type? = value`. The colon commits to a declaration; the type
/// is parsed only when the next token is not `=`.
pub fn parse_declaration_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    let name = match left.as_any().downcast_ref::<SymbolExpr>() {
        Some(symbol) => symbol.value.clone(),
        None => {
            return Err(Error::new(
                ErrorImpl::InvalidAssignmentTarget {
                    token: String::from(":"),
                },
                left.get_span().start.clone(),
            ))
        }
    };

    parser.advance();

    let explicit_type = if parser.current_token_kind() != TokenKind::Assignment {
        Some(parse_type(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(ExprWrapper::new(DeclarationExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: value.get_span().end.clone(),
        },
        name,
        explicit_type,
        value,
    }))
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    parser.advance();

    let arguments = parser.parse_separated(TokenKind::Comma, TokenKind::CloseParen, |p| {
        parse_expr(p, BindingPower::Default)
    })?;

    parser.expect(TokenKind::CloseParen)?;

    Ok(ExprWrapper::new(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.previous_end(),
        },
        callee: left,
        arguments,
    }))
}

pub fn parse_get_item_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    parser.advance();

    let index = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::CloseBracket)?;

    Ok(ExprWrapper::new(GetItemExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.previous_end(),
        },
        left,
        index,
    }))
}
