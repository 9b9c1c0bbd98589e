use crate::{
    ast::{
        ast::{Expr, StmtWrapper, Type},
        statements::{
            BlockStmt, ExpressionStmt, FnDeclStmt, IfStmt, Parameter, ReturnStmt, WhileStmt,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let stmt_fn = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();
    if let Some(stmt_fn) = stmt_fn {
        return stmt_fn(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(ExpressionStmt {
        span: expression.get_span().clone(),
        expression,
    }))
}

/// Parses a braced block. Unlike if/while bodies, function bodies must
/// be blocks, so this is shared between the statement lookup and
/// `parse_fn_decl_stmt`.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut body = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body,
        span: Span {
            start,
            end: parser.previous_end(),
        },
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    Ok(StmtWrapper::new(parse_block(parser)?))
}

/// `if condition body (else else_body)?` - the bodies are arbitrary
/// statements. Consuming a trailing `else` right here binds every `else`
/// to the nearest enclosing `if` that lacks one.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let then_body = parse_stmt(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_stmt(parser)?)
    } else {
        None
    };

    Ok(StmtWrapper::new(IfStmt {
        condition,
        then_body,
        else_body,
        span: Span {
            start,
            end: parser.previous_end(),
        },
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_stmt(parser)?;

    Ok(StmtWrapper::new(WhileStmt {
        condition,
        body,
        span: Span {
            start,
            end: parser.previous_end(),
        },
    }))
}

/// `return expression ;` - the expression is mandatory, so `return;`
/// fails inside `parse_expr` at the semicolon.
pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let value = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(ReturnStmt {
        value,
        span: Span {
            start,
            end: parser.previous_end(),
        },
    }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let identifier = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenParen)?;

    let parameters = parser.parse_separated(TokenKind::Comma, TokenKind::CloseParen, |p| {
        let name_token = p.expect(TokenKind::Identifier)?;
        p.expect(TokenKind::Colon)?;
        let param_type = parse_type(p)?;

        let span = Span {
            start: name_token.span.start.clone(),
            end: param_type.get_span().end.clone(),
        };
        Ok(Parameter {
            name: name_token.value,
            param_type,
            span,
        })
    })?;

    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.current_token_kind() == TokenKind::Arrow {
        parser.advance();
        Some(parse_type(parser)?)
    } else {
        None
    };

    let body = parse_block(parser)?;

    Ok(StmtWrapper::new(FnDeclStmt {
        span: Span {
            start,
            end: body.span.end.clone(),
        },
        identifier,
        parameters,
        return_type,
        body,
    }))
}
