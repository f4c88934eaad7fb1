use tracing::trace;

use crate::{
    ast::{
        ast::{Executable, Expr, Node},
        statements::{
            AssignStatement, BreakStatement, ContinueStatement, DoWhileLoop,
            ExpressionAsExecutable, IfStatement, ReturnStatement, WhileLoop,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expression,
    lookups::{ASSIGN_OPS, STMT_LOOKUP},
    parser::Parser,
};

/// Parses one executable.
///
/// # Arguments
///
/// * `allow_complex` - Whether keyword-led statements (`if`, `while`, ...) may appear here
/// * `include_semicolon` - Whether the statement must end with `;`
///
/// Control-flow statements consume their own terminators. Anything else must be
/// an assignment or a function call; other bare expressions are rejected since
/// they can only mean a forgotten assignment.
pub fn parse_executable(
    parser: &mut Parser,
    allow_complex: bool,
    include_semicolon: bool,
) -> Result<Executable, Error> {
    let next = match parser.tokens.peek() {
        Some(token) => token.clone(),
        None => return Err(parser.tokens.eof()),
    };
    trace!(next = %next, allow_complex, include_semicolon, "parse_executable");

    if next.kind == TokenKind::Keyword {
        if !allow_complex {
            return Err(Error::at_token(
                ErrorImpl::UnexpectedToken {
                    token: next.value.clone(),
                    message: format!("Unexpected token: '{}'", next.value),
                },
                &next,
            ));
        }

        if let Some(handler) = STMT_LOOKUP.get(next.value.as_str()) {
            return handler(parser);
        }
    }

    let expr = parse_expression(parser)?;
    let output = if parser
        .tokens
        .peek_value()
        .is_some_and(|value| ASSIGN_OPS.contains(value))
    {
        let op = parser.tokens.pop()?;
        let value = parse_expression(parser)?;
        Executable::AssignStatement(AssignStatement {
            target: expr,
            op,
            value,
        })
    } else {
        match expr {
            Expr::FunctionInvocation(invocation) => {
                Executable::ExpressionAsExecutable(ExpressionAsExecutable { invocation })
            }
            other => {
                let first_token = other.first_token();
                return Err(Error::at_token(
                    ErrorImpl::UselessExpression {
                        token: first_token.value.clone(),
                    },
                    first_token,
                ));
            }
        }
    };

    if include_semicolon {
        parser.tokens.pop_expected(";")?;
    }

    Ok(output)
}

/// Parses a `{ ... }` block, or a single executable when no brace follows.
pub fn parse_code_block(parser: &mut Parser) -> Result<Vec<Executable>, Error> {
    parser.nested(|parser| {
        if !parser.tokens.pop_if_present("{") {
            return Ok(vec![parse_executable(parser, true, true)?]);
        }

        let mut body = vec![];
        while !parser.tokens.pop_if_present("}") {
            body.push(parse_executable(parser, true, true)?);
        }
        Ok(body)
    })
}

fn parse_condition(parser: &mut Parser) -> Result<Expr, Error> {
    parser.tokens.pop_expected("(")?;
    let condition = parse_expression(parser)?;
    parser.tokens.pop_expected(")")?;
    Ok(condition)
}

pub fn parse_if_statement(parser: &mut Parser) -> Result<Executable, Error> {
    let if_token = parser.tokens.pop_expected("if")?;
    let condition = parse_condition(parser)?;
    let if_body = parse_code_block(parser)?;

    let else_body = if parser.tokens.pop_if_present("else") {
        if parser.tokens.is_next("if") {
            vec![parser.nested(parse_if_statement)?]
        } else {
            parse_code_block(parser)?
        }
    } else {
        vec![]
    };

    Ok(Executable::IfStatement(IfStatement {
        if_token,
        condition,
        if_body,
        else_body,
    }))
}

pub fn parse_while_loop(parser: &mut Parser) -> Result<Executable, Error> {
    let while_token = parser.tokens.pop_expected("while")?;
    let condition = parse_condition(parser)?;
    let body = parse_code_block(parser)?;

    Ok(Executable::WhileLoop(WhileLoop {
        while_token,
        condition,
        body,
    }))
}

pub fn parse_do_while_loop(parser: &mut Parser) -> Result<Executable, Error> {
    let do_token = parser.tokens.pop_expected("do")?;
    let body = parse_code_block(parser)?;
    parser.tokens.pop_expected("while")?;
    let condition = parse_condition(parser)?;
    parser.tokens.pop_expected(";")?;

    Ok(Executable::DoWhileLoop(DoWhileLoop {
        do_token,
        body,
        condition,
    }))
}

// Recognised so that `for` gets a clear diagnostic, but there is no grammar for it yet.
pub fn parse_for_loop(parser: &mut Parser) -> Result<Executable, Error> {
    let for_token = parser.tokens.pop_expected("for")?;
    Err(Error::at_token(
        ErrorImpl::NotYetImplemented {
            feature: String::from("for loops"),
        },
        &for_token,
    ))
}

pub fn parse_return_statement(parser: &mut Parser) -> Result<Executable, Error> {
    let return_token = parser.tokens.pop_expected("return")?;

    let value = if parser.tokens.is_next(";") {
        None
    } else {
        Some(parse_expression(parser)?)
    };

    parser.tokens.pop_expected(";")?;

    Ok(Executable::ReturnStatement(ReturnStatement {
        return_token,
        value,
    }))
}

pub fn parse_break_statement(parser: &mut Parser) -> Result<Executable, Error> {
    let break_token = parser.tokens.pop_expected("break")?;
    parser.tokens.pop_expected(";")?;

    Ok(Executable::BreakStatement(BreakStatement { break_token }))
}

pub fn parse_continue_statement(parser: &mut Parser) -> Result<Executable, Error> {
    let continue_token = parser.tokens.pop_expected("continue")?;
    parser.tokens.pop_expected(";")?;

    Ok(Executable::ContinueStatement(ContinueStatement { continue_token }))
}
