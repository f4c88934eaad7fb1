use crate::lexer::tokens::TokenRef;

use super::{
    expressions::{
        BooleanConstant, BracketIndex, DotField, FloatConstant, FunctionInvocation,
        InlineIncrement, IntegerConstant, NullConstant, OpChain, StringConstant,
        TernaryExpression, UnaryPrefix, Variable,
    },
    statements::{
        AssignStatement, BreakStatement, ContinueStatement, DoWhileLoop, ExpressionAsExecutable,
        IfStatement, ReturnStatement, WhileLoop,
    },
};

/// Node Trait
///
/// Implemented by every AST node so diagnostics can point at the first token
/// that contributed to it.
pub trait Node {
    fn first_token(&self) -> &TokenRef;
}

/// Expression
///
/// Every expression kind the parser can produce. Consumers are expected to
/// match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Variable(Variable),
    BooleanConstant(BooleanConstant),
    NullConstant(NullConstant),
    FloatConstant(FloatConstant),
    IntegerConstant(IntegerConstant),
    StringConstant(StringConstant),
    DotField(DotField),
    FunctionInvocation(FunctionInvocation),
    BracketIndex(BracketIndex),
    UnaryPrefix(UnaryPrefix),
    InlineIncrement(InlineIncrement),
    OpChain(OpChain),
    TernaryExpression(TernaryExpression),
}

impl Node for Expr {
    fn first_token(&self) -> &TokenRef {
        match self {
            Expr::Variable(expr) => expr.first_token(),
            Expr::BooleanConstant(expr) => expr.first_token(),
            Expr::NullConstant(expr) => expr.first_token(),
            Expr::FloatConstant(expr) => expr.first_token(),
            Expr::IntegerConstant(expr) => expr.first_token(),
            Expr::StringConstant(expr) => expr.first_token(),
            Expr::DotField(expr) => expr.first_token(),
            Expr::FunctionInvocation(expr) => expr.first_token(),
            Expr::BracketIndex(expr) => expr.first_token(),
            Expr::UnaryPrefix(expr) => expr.first_token(),
            Expr::InlineIncrement(expr) => expr.first_token(),
            Expr::OpChain(expr) => expr.first_token(),
            Expr::TernaryExpression(expr) => expr.first_token(),
        }
    }
}

/// Executable
///
/// A top-level or block-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Executable {
    AssignStatement(AssignStatement),
    ExpressionAsExecutable(ExpressionAsExecutable),
    IfStatement(IfStatement),
    WhileLoop(WhileLoop),
    DoWhileLoop(DoWhileLoop),
    ReturnStatement(ReturnStatement),
    BreakStatement(BreakStatement),
    ContinueStatement(ContinueStatement),
}

impl Node for Executable {
    fn first_token(&self) -> &TokenRef {
        match self {
            Executable::AssignStatement(stmt) => stmt.first_token(),
            Executable::ExpressionAsExecutable(stmt) => stmt.first_token(),
            Executable::IfStatement(stmt) => stmt.first_token(),
            Executable::WhileLoop(stmt) => stmt.first_token(),
            Executable::DoWhileLoop(stmt) => stmt.first_token(),
            Executable::ReturnStatement(stmt) => stmt.first_token(),
            Executable::BreakStatement(stmt) => stmt.first_token(),
            Executable::ContinueStatement(stmt) => stmt.first_token(),
        }
    }
}
