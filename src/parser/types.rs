//! Type specifier parsing.
//!
//! Declarations, casts and parameters all spell their type the same way:
//! a base type keyword followed by any number of `*` declarators.

use crate::{
    ast::types::{BaseType, Param},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::parser::Parser;

pub const BASE_TYPE_TOKENS: [TokenKind; 4] = [
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::Char,
    TokenKind::Double,
];

/// Consumes a base type keyword.
pub fn parse_base_type(parser: &mut Parser) -> Result<(BaseType, Span), Error> {
    match BaseType::from_token(parser.current_token_kind()) {
        Some(base_type) => Ok((base_type, parser.advance().span.clone())),
        None => Err(parser.unexpected(BASE_TYPE_TOKENS)),
    }
}

/// Consumes consecutive `*` tokens and returns how many there were.
pub fn parse_pointer_depth(parser: &mut Parser) -> u32 {
    let mut depth = 0;
    while parser.current_token_kind() == TokenKind::Star {
        parser.advance();
        depth += 1;
    }
    depth
}

/// Parses a parameter list after the opening `(`, up to and including `)`.
///
/// Accepts `()`, `(void)` and comma separated `type '*'* name` entries.
pub fn parse_params(parser: &mut Parser) -> Result<Vec<Param>, Error> {
    let mut params = vec![];

    if parser.current_token_kind() == TokenKind::Void
        && parser.peek_kind(1) == TokenKind::CloseParen
    {
        parser.advance();
    } else if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let (base_type, start) = parse_base_type(parser)?;
            let pointer_depth = parse_pointer_depth(parser);
            let name = parser.expect(TokenKind::Identifier)?;

            params.push(Param {
                base_type,
                pointer_depth,
                name: name.value,
                span: start.to(&name.span),
            });

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    if parser.current_token_kind() != TokenKind::CloseParen {
        let mut expected = vec![TokenKind::CloseParen];
        if !params.is_empty() {
            expected.push(TokenKind::Comma);
        }
        return Err(parser.unexpected(expected));
    }
    parser.advance();

    Ok(params)
}
