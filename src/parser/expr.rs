use crate::{
    ast::{
        ast::Node,
        expressions::{
            BinaryExpr, BinaryOp, CastExpr, Expr, GroupingExpr, IdentifierExpr, LiteralExpr,
            UnaryExpr, UnaryOp,
        },
        types::LiteralValue,
    },
    errors::errors::Error,
    lexer::{
        lexer::{decode_char_literal, decode_float_literal, decode_int_literal},
        tokens::TokenKind,
    },
};

use super::{
    lookups::{precedence_of, BindingPower},
    parser::Parser,
    types::{parse_base_type, parse_pointer_depth},
};

/// Parses an expression whose binary operators all bind at least as
/// tightly as `min_bp`.
pub fn parse_expr(parser: &mut Parser, min_bp: BindingPower) -> Result<Expr, Error> {
    let left = parse_unary_expr(parser)?;
    parse_binary_rhs(parser, left, min_bp)
}

/// Precedence climbing loop, continuing from an already parsed left operand.
pub fn parse_binary_rhs(
    parser: &mut Parser,
    mut left: Expr,
    min_bp: BindingPower,
) -> Result<Expr, Error> {
    loop {
        let kind = parser.current_token_kind();
        let (Some(bp), Some(op)) = (precedence_of(kind), BinaryOp::from_token(kind)) else {
            break;
        };
        if bp < min_bp {
            break;
        }
        parser.advance();

        let right = parse_expr(parser, bp.next())?;
        let span = left.get_span().to(right.get_span());

        left = Expr::Binary(BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span,
        });
    }

    Ok(left)
}

/// Parses a unary expression: prefix operators, casts, and primaries with
/// an optional postfix operator.
///
/// Every nested operand passes through here, so this is where the nesting
/// depth is tracked.
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();

    let Some(handler) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected(parser.expression_starts()));
    };

    parser.enter_nested()?;
    let expr = handler(parser);
    parser.leave_nested();
    expr
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let value = match token.kind {
        TokenKind::IntLiteral => decode_int_literal(&token.value).map(LiteralValue::Int),
        TokenKind::FloatLiteral => decode_float_literal(&token.value).map(LiteralValue::Float),
        TokenKind::CharLiteral => decode_char_literal(&token.value).map(LiteralValue::Char),
        TokenKind::Identifier => {
            parser.advance();
            let ident = Expr::Identifier(IdentifierExpr {
                name: token.value,
                span: token.span,
            });
            return parse_postfix_expr(parser, ident);
        }
        _ => return Err(parser.unexpected(parser.expression_starts())),
    };

    let value = value.map_err(|error| Error::new(error, token.span.start.clone()))?;
    parser.advance();

    let literal = Expr::Literal(LiteralExpr {
        value,
        span: token.span,
    });
    parse_postfix_expr(parser, literal)
}

/// Attaches at most one postfix `++`/`--` to a primary expression.
pub fn parse_postfix_expr(parser: &mut Parser, operand: Expr) -> Result<Expr, Error> {
    let Some(op) = UnaryOp::from_postfix_token(parser.current_token_kind()) else {
        return Ok(operand);
    };
    let op_span = parser.advance().span.clone();

    Ok(Expr::Unary(UnaryExpr {
        span: operand.get_span().to(&op_span),
        op,
        operand: Box::new(operand),
        is_postfix: true,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(op) = UnaryOp::from_prefix_token(parser.current_token_kind()) else {
        return Err(parser.unexpected(parser.expression_starts()));
    };
    let operator_token = parser.advance().clone();

    let operand = parse_unary_expr(parser)?;

    Ok(Expr::Unary(UnaryExpr {
        span: operator_token.span.to(operand.get_span()),
        op,
        operand: Box::new(operand),
        is_postfix: false,
    }))
}

/// Parses `(` either as a cast or as a parenthesized expression.
///
/// A base type keyword right after the `(` commits to a cast; type keywords
/// can never start an expression, so one token of lookahead decides.
pub fn parse_paren_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.expect(TokenKind::OpenParen)?;

    if parser.current_token_kind().is_base_type() {
        let (target_type, _) = parse_base_type(parser)?;
        let pointer_depth = parse_pointer_depth(parser);
        parser.expect(TokenKind::CloseParen)?;

        let operand = parse_unary_expr(parser)?;

        return Ok(Expr::Cast(CastExpr {
            span: open.span.to(operand.get_span()),
            target_type,
            pointer_depth,
            operand: Box::new(operand),
        }));
    }

    let inner = parse_expr(parser, BindingPower::Default)?;
    let close = parser.expect(TokenKind::CloseParen)?;

    let grouping = Expr::Grouping(GroupingExpr {
        inner: Box::new(inner),
        span: open.span.to(&close.span),
    });
    parse_postfix_expr(parser, grouping)
}
