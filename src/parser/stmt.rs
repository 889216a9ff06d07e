use log::debug;

use crate::{
    ast::{
        ast::Node,
        expressions::AssignTarget,
        statements::{AssignmentStmt, ExpressionStmt, FnDeclStmt, ReturnStmt, Stmt, VarDeclStmt},
        types::ReturnType,
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{
    expr::{parse_binary_rhs, parse_unary_expr},
    parser::Parser,
    types::{parse_base_type, parse_params, parse_pointer_depth},
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token_kind = parser.current_token_kind();

    if let Some(handler) = parser.get_stmt_lookup().get(&token_kind).copied() {
        debug!("statement at {} opens with {}", parser.get_position(), token_kind);
        return handler(parser);
    }

    if !parser.get_nud_lookup().contains_key(&token_kind) {
        return Err(parser.unexpected(parser.statement_starts()));
    }

    parse_assignment_or_expr_stmt(parser)
}

/// Parses `unary = expression ;` or `expression ;`.
///
/// The left-hand unary expression is parsed first. If `=` follows it must
/// be an assignable target; otherwise precedence climbing resumes from it.
pub fn parse_assignment_or_expr_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.current_token().clone();
    let lhs = parse_unary_expr(parser)?;

    if parser.current_token_kind() == TokenKind::Assignment {
        debug!("assignment at {}", start.span.start);

        let target = AssignTarget::try_from(lhs).map_err(|_| {
            Error::syntax(
                [TokenKind::Identifier, TokenKind::Star, TokenKind::OpenParen],
                start.kind,
                &start.value,
                start.span.start.clone(),
            )
        })?;
        parser.advance();

        let value = parse_expr(parser, BindingPower::Default)?;
        let semicolon = parser.expect(TokenKind::Semicolon)?;

        return Ok(Stmt::Assignment(AssignmentStmt {
            span: target.get_span().to(&semicolon.span),
            target,
            value,
        }));
    }

    let expression = parse_binary_rhs(parser, lhs, BindingPower::Default)?;
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt {
        span: expression.get_span().to(&semicolon.span),
        expression,
    }))
}

/// Handles statements opening with `const` or a type keyword: variable
/// declarations and, at top level, function definitions.
pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.current_token().clone();

    let is_const = start.kind == TokenKind::Const;
    if is_const {
        parser.advance();
    }

    if parser.current_token_kind() == TokenKind::Void && !is_const && !parser.in_function() {
        parser.advance();
        let pointer_depth = parse_pointer_depth(parser);
        let name = parser.expect(TokenKind::Identifier)?;

        return parse_fn_decl_stmt(parser, start, ReturnType::Void, pointer_depth, name);
    }

    let (base_type, _) = parse_base_type(parser)?;
    let pointer_depth = parse_pointer_depth(parser);
    let name = parser.expect(TokenKind::Identifier)?;

    let may_be_function = !is_const && !parser.in_function();
    if may_be_function && parser.current_token_kind() == TokenKind::OpenParen {
        return parse_fn_decl_stmt(parser, start, ReturnType::Base(base_type), pointer_depth, name);
    }

    let initializer = match parser.current_token_kind() {
        TokenKind::Assignment => {
            parser.advance();
            Some(parse_expr(parser, BindingPower::Default)?)
        }
        TokenKind::Semicolon => None,
        _ => {
            let mut expected = vec![TokenKind::Assignment, TokenKind::Semicolon];
            if may_be_function {
                expected.push(TokenKind::OpenParen);
            }
            return Err(parser.unexpected(expected));
        }
    };

    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        is_const,
        base_type,
        pointer_depth,
        name: name.value,
        initializer,
        span: start.span.to(&semicolon.span),
    }))
}

/// Parses the rest of a function definition once its return type and name
/// have been consumed.
fn parse_fn_decl_stmt(
    parser: &mut Parser,
    start: Token,
    return_type: ReturnType,
    pointer_depth: u32,
    name: Token,
) -> Result<Stmt, Error> {
    debug!("function `{}` at {}", name.value, start.span.start);

    parser.expect(TokenKind::OpenParen)?;
    let params = parse_params(parser)?;
    parser.expect(TokenKind::OpenCurly)?;

    parser.set_in_function(true);
    let body = parse_fn_body(parser);
    parser.set_in_function(false);
    let body = body?;

    let close = parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        return_type,
        pointer_depth,
        name: name.value,
        params,
        body,
        span: start.span.to(&close.span),
    }))
}

fn parse_fn_body(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut body = vec![];

    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            let mut expected = parser.statement_starts();
            expected.push(TokenKind::CloseCurly);
            return Err(parser.unexpected(expected));
        }
        body.push(parse_stmt(parser)?);
    }

    Ok(body)
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if !parser.in_function() {
        return Err(parser.unexpected(parser.statement_starts()));
    }

    let start = parser.advance().span.clone();

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span {
            start: start.start,
            end: semicolon.span.end,
        },
    }))
}
