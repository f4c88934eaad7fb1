use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::{ast::ast::{Executable, Expr}, errors::errors::Error};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Executable, Error>;
pub type ExprHandler = fn(&mut Parser) -> Result<Expr, Error>;

fn lookup(ops: &[&'static str]) -> HashSet<&'static str> {
    ops.iter().copied().collect()
}

lazy_static! {
    pub static ref ASSIGN_OPS: HashSet<&'static str> =
        lookup(&["=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^="]);

    pub static ref PREFIX_OPS: HashSet<&'static str> = lookup(&["~", "!", "-", "++", "--"]);
    pub static ref INCREMENT_OPS: HashSet<&'static str> = lookup(&["++", "--"]);

    // Binary precedence levels, tightest first
    pub static ref MULTIPLICATIVE_OPS: HashSet<&'static str> = lookup(&["*", "/", "%"]);
    pub static ref ADDITIVE_OPS: HashSet<&'static str> = lookup(&["+", "-"]);
    pub static ref SHIFT_OPS: HashSet<&'static str> = lookup(&["<<", ">>"]);
    pub static ref RELATIONAL_OPS: HashSet<&'static str> = lookup(&["<", ">", "<=", ">="]);
    pub static ref EQUALITY_OPS: HashSet<&'static str> = lookup(&["==", "!="]);
    pub static ref BITWISE_OPS: HashSet<&'static str> = lookup(&["&", "|", "^"]);
    pub static ref LOGICAL_OPS: HashSet<&'static str> = lookup(&["&&", "||"]);
    pub static ref NULL_COALESCING_OPS: HashSet<&'static str> = lookup(&["??"]);

    /// Keywords that start a statement rather than an expression.
    pub static ref STMT_LOOKUP: HashMap<&'static str, StmtHandler> = {
        let mut map: HashMap<&'static str, StmtHandler> = HashMap::new();
        map.insert("if", parse_if_statement);
        map.insert("while", parse_while_loop);
        map.insert("for", parse_for_loop);
        map.insert("do", parse_do_while_loop);
        map.insert("return", parse_return_statement);
        map.insert("break", parse_break_statement);
        map.insert("continue", parse_continue_statement);
        map
    };
}
