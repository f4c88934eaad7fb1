use std::{collections::HashSet, rc::Rc};

use tracing::trace;

use crate::{
    ast::{
        ast::{Expr, Node},
        expressions::{
            BooleanConstant, BracketIndex, DotField, FloatConstant, FunctionInvocation,
            InlineIncrement, IntegerConstant, NullConstant, OpChain, StringConstant,
            TernaryExpression, UnaryPrefix, Variable,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenRef},
};

use super::{
    literals::{parse_float_literal, parse_integer_literal, string_literal_to_value},
    lookups::{
        ExprHandler, ADDITIVE_OPS, BITWISE_OPS, EQUALITY_OPS, INCREMENT_OPS, LOGICAL_OPS,
        MULTIPLICATIVE_OPS, NULL_COALESCING_OPS, PREFIX_OPS, RELATIONAL_OPS, SHIFT_OPS,
    },
    parser::Parser,
};

fn unexpected_token(token: &TokenRef, message: String) -> Error {
    Error::at_token(
        ErrorImpl::UnexpectedToken {
            token: token.value.clone(),
            message,
        },
        token,
    )
}

fn next_is_one_of(parser: &Parser, ops: &HashSet<&'static str>) -> bool {
    parser.tokens.peek_value().is_some_and(|value| ops.contains(value))
}

/// Parses a full expression.
pub fn parse_expression(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(parse_ternary)
}

/// Builds one left-associative precedence level.
///
/// Parses an operand with `next`, then keeps consuming `op operand` pairs while
/// the next token is in `ops`. A lone operand is returned as is; otherwise the
/// operands and operators are collected into a flat `OpChain`.
pub fn parse_op_chain(
    parser: &mut Parser,
    ops: &HashSet<&'static str>,
    next: ExprHandler,
) -> Result<Expr, Error> {
    let expr = next(parser)?;
    if !next_is_one_of(parser, ops) {
        return Ok(expr);
    }

    let mut expressions = vec![expr];
    let mut op_tokens = vec![];
    while next_is_one_of(parser, ops) {
        op_tokens.push(parser.tokens.pop()?);
        expressions.push(next(parser)?);
    }

    Ok(Expr::OpChain(OpChain {
        expressions,
        ops: op_tokens,
    }))
}

pub fn parse_multiplication(parser: &mut Parser) -> Result<Expr, Error> {
    parse_op_chain(parser, &MULTIPLICATIVE_OPS, parse_unaries)
}

pub fn parse_addition(parser: &mut Parser) -> Result<Expr, Error> {
    parse_op_chain(parser, &ADDITIVE_OPS, parse_multiplication)
}

pub fn parse_bitshift(parser: &mut Parser) -> Result<Expr, Error> {
    parse_op_chain(parser, &SHIFT_OPS, parse_addition)
}

pub fn parse_inequality(parser: &mut Parser) -> Result<Expr, Error> {
    parse_op_chain(parser, &RELATIONAL_OPS, parse_bitshift)
}

pub fn parse_equality(parser: &mut Parser) -> Result<Expr, Error> {
    parse_op_chain(parser, &EQUALITY_OPS, parse_inequality)
}

pub fn parse_bitwise(parser: &mut Parser) -> Result<Expr, Error> {
    parse_op_chain(parser, &BITWISE_OPS, parse_equality)
}

pub fn parse_boolean_combinator(parser: &mut Parser) -> Result<Expr, Error> {
    parse_op_chain(parser, &LOGICAL_OPS, parse_bitwise)
}

pub fn parse_null_coalescer(parser: &mut Parser) -> Result<Expr, Error> {
    parse_op_chain(parser, &NULL_COALESCING_OPS, parse_boolean_combinator)
}

/// `condition ? true_expr : false_expr`, right-associative.
pub fn parse_ternary(parser: &mut Parser) -> Result<Expr, Error> {
    trace!(next = ?parser.tokens.peek_value(), "parse_ternary");
    let condition = parse_null_coalescer(parser)?;
    if !parser.tokens.is_next("?") {
        return Ok(condition);
    }

    let question_mark = parser.tokens.pop_expected("?")?;
    let true_expr = parse_expression(parser)?;
    parser.tokens.pop_expected(":")?;
    let false_expr = parse_expression(parser)?;

    Ok(Expr::TernaryExpression(TernaryExpression {
        condition: Box::new(condition),
        question_mark,
        true_expr: Box::new(true_expr),
        false_expr: Box::new(false_expr),
    }))
}

pub fn parse_unaries(parser: &mut Parser) -> Result<Expr, Error> {
    parse_unary_with_postfix(parser, true)
}

// The operand of a prefix ++/-- is parsed with `allow_postfix` off, so one
// operand never gets both a prefix and a postfix increment.
fn parse_unary_with_postfix(parser: &mut Parser, allow_postfix: bool) -> Result<Expr, Error> {
    trace!(next = ?parser.tokens.peek_value(), "parse_unaries");

    if next_is_one_of(parser, &PREFIX_OPS) {
        let op = parser.tokens.pop()?;
        let is_increment_op = INCREMENT_OPS.contains(op.value.as_str());
        let expr = parser.nested(|parser| {
            parse_unary_with_postfix(parser, allow_postfix && !is_increment_op)
        })?;

        if is_increment_op {
            return Ok(Expr::InlineIncrement(InlineIncrement {
                first_token: Rc::clone(&op),
                is_increment: op.is("++"),
                op,
                expr: Box::new(expr),
                is_prefix: true,
            }));
        }

        return Ok(Expr::UnaryPrefix(UnaryPrefix {
            op,
            expr: Box::new(expr),
        }));
    }

    let expr = parse_entity_with_suffix_chains(parser)?;
    if allow_postfix && next_is_one_of(parser, &INCREMENT_OPS) {
        let op = parser.tokens.pop()?;
        return Ok(Expr::InlineIncrement(InlineIncrement {
            first_token: Rc::clone(expr.first_token()),
            is_increment: op.is("++"),
            op,
            expr: Box::new(expr),
            is_prefix: false,
        }));
    }

    Ok(expr)
}

/// Parses an entity followed by any number of `.field`, `(args)` and `[index]` suffixes.
pub fn parse_entity_with_suffix_chains(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_entity(parser)?;

    loop {
        match parser.tokens.peek_value() {
            Some(".") => {
                let dot = parser.tokens.pop()?;
                let field_name = parser.tokens.pop()?;
                if field_name.kind != TokenKind::Word {
                    return Err(unexpected_token(
                        &field_name,
                        format!("Expected a valid field name but found '{}'.", field_name.value),
                    ));
                }

                expr = Expr::DotField(DotField {
                    root: Box::new(expr),
                    dot,
                    field_name,
                });
            }
            Some("(") => {
                let open_paren = parser.tokens.pop()?;
                let mut args = vec![];
                while !parser.tokens.pop_if_present(")") {
                    if !args.is_empty() {
                        parser.tokens.pop_expected(",")?;
                    }
                    args.push(parse_expression(parser)?);
                }

                expr = Expr::FunctionInvocation(FunctionInvocation {
                    root: Box::new(expr),
                    open_paren,
                    args,
                });
            }
            Some("[") => {
                let open_bracket = parser.tokens.pop()?;
                let index = parse_expression(parser)?;
                parser.tokens.pop_expected("]")?;

                expr = Expr::BracketIndex(BracketIndex {
                    root: Box::new(expr),
                    open_bracket,
                    index: Box::new(index),
                });
            }
            _ => return Ok(expr),
        }
    }
}

/// Parses a single term: a parenthesised expression, a literal or a variable.
pub fn parse_entity(parser: &mut Parser) -> Result<Expr, Error> {
    trace!(next = ?parser.tokens.peek_value(), "parse_entity");

    if parser.tokens.is_next("(") {
        parser.tokens.pop_expected("(")?;
        let expr = parse_expression(parser)?;
        parser.tokens.pop_expected(")")?;
        return Ok(expr);
    }

    let token = parser.tokens.pop()?;
    match token.kind {
        TokenKind::Keyword => match token.value.as_str() {
            "true" | "false" => Ok(Expr::BooleanConstant(BooleanConstant {
                value: token.is("true"),
                first_token: token,
            })),
            "null" => Ok(Expr::NullConstant(NullConstant { first_token: token })),
            _ => Err(unexpected_token(
                &token,
                format!("Unexpected usage of '{}'.", token.value),
            )),
        },
        TokenKind::Word => Ok(Expr::Variable(Variable {
            name: token.value.clone(),
            first_token: token,
        })),
        TokenKind::Float => Ok(Expr::FloatConstant(FloatConstant {
            value: parse_float_literal(&token)?,
            first_token: token,
        })),
        TokenKind::Number => Ok(Expr::IntegerConstant(IntegerConstant {
            value: parse_integer_literal(&token)?,
            first_token: token,
        })),
        TokenKind::String => Ok(Expr::StringConstant(StringConstant {
            value: string_literal_to_value(&token)?,
            first_token: token,
        })),
        TokenKind::Punctuation | TokenKind::EOF => Err(unexpected_token(
            &token,
            format!("Unexpected token: '{}'.", token.value),
        )),
    }
}
