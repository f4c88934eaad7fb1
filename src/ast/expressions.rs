use crate::lexer::tokens::TokenRef;

use super::ast::{Expr, Node};

// LITERALS

/// Variable
/// A bare word used as a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub first_token: TokenRef,
    pub name: String,
}

impl Node for Variable {
    fn first_token(&self) -> &TokenRef {
        &self.first_token
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanConstant {
    pub first_token: TokenRef,
    pub value: bool,
}

impl Node for BooleanConstant {
    fn first_token(&self) -> &TokenRef {
        &self.first_token
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NullConstant {
    pub first_token: TokenRef,
}

impl Node for NullConstant {
    fn first_token(&self) -> &TokenRef {
        &self.first_token
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatConstant {
    pub first_token: TokenRef,
    pub value: f64,
}

impl Node for FloatConstant {
    fn first_token(&self) -> &TokenRef {
        &self.first_token
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerConstant {
    pub first_token: TokenRef,
    pub value: i64,
}

impl Node for IntegerConstant {
    fn first_token(&self) -> &TokenRef {
        &self.first_token
    }
}

/// String Constant
/// The decoded value of a string literal; quotes and escapes are already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StringConstant {
    pub first_token: TokenRef,
    pub value: String,
}

impl Node for StringConstant {
    fn first_token(&self) -> &TokenRef {
        &self.first_token
    }
}

// SUFFIXES

/// Dot Field
/// `root.field_name`
#[derive(Debug, Clone, PartialEq)]
pub struct DotField {
    pub root: Box<Expr>,
    pub dot: TokenRef,
    pub field_name: TokenRef,
}

impl Node for DotField {
    fn first_token(&self) -> &TokenRef {
        self.root.first_token()
    }
}

/// Function Invocation
/// `root(args...)`. The callee can be any suffix-chained expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionInvocation {
    pub root: Box<Expr>,
    pub open_paren: TokenRef,
    pub args: Vec<Expr>,
}

impl Node for FunctionInvocation {
    fn first_token(&self) -> &TokenRef {
        self.root.first_token()
    }
}

/// Bracket Index
/// `root[index]`
#[derive(Debug, Clone, PartialEq)]
pub struct BracketIndex {
    pub root: Box<Expr>,
    pub open_bracket: TokenRef,
    pub index: Box<Expr>,
}

impl Node for BracketIndex {
    fn first_token(&self) -> &TokenRef {
        self.root.first_token()
    }
}

// OPERATORS

/// Unary Prefix
/// One of `~`, `!` or `-` applied to an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryPrefix {
    pub op: TokenRef,
    pub expr: Box<Expr>,
}

impl Node for UnaryPrefix {
    fn first_token(&self) -> &TokenRef {
        &self.op
    }
}

/// Inline Increment
/// `++x`, `--x`, `x++` or `x--`.
///
/// `first_token` is the operator for the prefix form and the operand's first
/// token for the postfix form.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineIncrement {
    pub first_token: TokenRef,
    pub op: TokenRef,
    pub expr: Box<Expr>,
    pub is_prefix: bool,
    pub is_increment: bool,
}

impl Node for InlineIncrement {
    fn first_token(&self) -> &TokenRef {
        &self.first_token
    }
}

/// Op Chain
/// A run of binary operators that share one precedence level, kept flat:
/// `a + b - c` is `expressions: [a, b, c], ops: [+, -]`.
///
/// There is always exactly one fewer operator than operands, and the chain
/// evaluates left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct OpChain {
    pub expressions: Vec<Expr>,
    pub ops: Vec<TokenRef>,
}

impl OpChain {
    /// Left fold over the chain: `step` receives the accumulator, the operator
    /// and the operand to its right.
    pub fn fold<T>(
        &self,
        init: impl FnOnce(&Expr) -> T,
        mut step: impl FnMut(T, &TokenRef, &Expr) -> T,
    ) -> T {
        let mut acc = init(&self.expressions[0]);
        for (op, right) in self.ops.iter().zip(&self.expressions[1..]) {
            acc = step(acc, op, right);
        }
        acc
    }
}

impl Node for OpChain {
    fn first_token(&self) -> &TokenRef {
        self.expressions[0].first_token()
    }
}

/// Ternary Expression
/// `condition ? true_expr : false_expr`
#[derive(Debug, Clone, PartialEq)]
pub struct TernaryExpression {
    pub condition: Box<Expr>,
    pub question_mark: TokenRef,
    pub true_expr: Box<Expr>,
    pub false_expr: Box<Expr>,
}

impl Node for TernaryExpression {
    fn first_token(&self) -> &TokenRef {
        self.condition.first_token()
    }
}
