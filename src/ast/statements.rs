use crate::lexer::tokens::TokenRef;

use super::{
    ast::{Executable, Expr, Node},
    expressions::FunctionInvocation,
};

/// Assign Statement
/// `target op value` where op is `=` or a compound assignment such as `+=`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStatement {
    pub target: Expr,
    pub op: TokenRef,
    pub value: Expr,
}

impl Node for AssignStatement {
    fn first_token(&self) -> &TokenRef {
        self.target.first_token()
    }
}

/// Expression As Executable
/// A call evaluated only for its side effects. No other bare expression is a
/// valid statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionAsExecutable {
    pub invocation: FunctionInvocation,
}

impl Node for ExpressionAsExecutable {
    fn first_token(&self) -> &TokenRef {
        self.invocation.first_token()
    }
}

/// If Statement
///
/// An `else if` chain is stored as an `else_body` holding a single nested
/// `IfStatement`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub if_token: TokenRef,
    pub condition: Expr,
    pub if_body: Vec<Executable>,
    pub else_body: Vec<Executable>,
}

impl Node for IfStatement {
    fn first_token(&self) -> &TokenRef {
        &self.if_token
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub while_token: TokenRef,
    pub condition: Expr,
    pub body: Vec<Executable>,
}

impl Node for WhileLoop {
    fn first_token(&self) -> &TokenRef {
        &self.while_token
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileLoop {
    pub do_token: TokenRef,
    pub body: Vec<Executable>,
    pub condition: Expr,
}

impl Node for DoWhileLoop {
    fn first_token(&self) -> &TokenRef {
        &self.do_token
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub return_token: TokenRef,
    pub value: Option<Expr>,
}

impl Node for ReturnStatement {
    fn first_token(&self) -> &TokenRef {
        &self.return_token
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement {
    pub break_token: TokenRef,
}

impl Node for BreakStatement {
    fn first_token(&self) -> &TokenRef {
        &self.break_token
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStatement {
    pub continue_token: TokenRef,
}

impl Node for ContinueStatement {
    fn first_token(&self) -> &TokenRef {
        &self.continue_token
    }
}
