//! Property-based tests for the parser.
//!
//! 1. **Never panics**: arbitrary and near-valid input always yields a result
//! 2. **Errors point into the source**: every reported position is a real line
//! 3. **Op chains stay aligned**: one fewer operator than operands, in source order
//! 4. **Integer literals agree**: decimal and hexadecimal spellings parse alike
//! 5. **Nesting below the depth limit parses**: the stack never runs out first

use proptest::prelude::*;

use super::{
    expr::parse_expression,
    parser::{parse, Parser, ParserConfig, DEFAULT_MAX_DEPTH},
};
use crate::{
    ast::ast::{Executable, Expr},
    errors::errors::Error,
    lexer::lexer::tokenize,
};

/// Statement fragments used to build near-valid programs.
const FRAGMENTS: &[&str] = &[
    "x = 1;",
    "x += y * 2;",
    "f();",
    "f(a, b, 3.5);",
    "a.b[0](c);",
    "y = a ? b : c;",
    "z = x ?? null;",
    "n = ++i;",
    "s = \"hi\\n\";",
    "if (x > 0) { y = 1; } else { y = 2; }",
    "while (i < 10) i += 1;",
    "do { f(); } while (x);",
    "return x;",
    "break;",
    "continue;",
    "k = 0x1F << 2;",
    "b = !(a && c) || d;",
];

const PUNCTUATION: &[&str] = &[";", "(", ")", "{", "}", "?", "."];

/// Operators sharing each binary precedence level.
const BINARY_LEVELS: &[&[&str]] = &[
    &["*", "/", "%"],
    &["+", "-"],
    &["<<", ">>"],
    &["<", ">", "<=", ">="],
    &["==", "!="],
    &["&", "|", "^"],
    &["&&", "||"],
    &["??"],
];

fn fragment() -> impl Strategy<Value = String> {
    prop::sample::select(FRAGMENTS).prop_map(String::from)
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..8).prop_map(|parts| parts.join("\n"))
}

/// A program cut short at an arbitrary character.
fn truncated_program() -> impl Strategy<Value = String> {
    program().prop_flat_map(|source| {
        let len = source.len();
        (0..=len).prop_map(move |cut| source[..cut].to_string())
    })
}

/// A program with one character swapped for a piece of punctuation.
fn corrupted_program() -> impl Strategy<Value = String> {
    (program(), any::<prop::sample::Index>(), prop::sample::select(PUNCTUATION))
        .prop_map(|(source, index, replacement)| {
            if source.is_empty() {
                return source;
            }
            let at = index.index(source.len());
            format!("{}{}{}", &source[..at], replacement, &source[at + 1..])
        })
}

fn parse_source(source: &str) -> Option<Result<usize, Error>> {
    let tokens = tokenize(source.to_string(), Some("prop.sw".to_string())).ok()?;
    Some(parse(tokens).map(|executables| executables.len()))
}

fn binary_level() -> impl Strategy<Value = &'static [&'static str]> {
    prop::sample::select(BINARY_LEVELS)
}

fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(256),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn parser_never_panics(input in "\\PC{0,300}") {
        let _ = parse_source(&input);
    }

    #[test]
    fn valid_programs_parse(source in program()) {
        let fragments = source.lines().filter(|line| !line.is_empty()).count();
        prop_assert_eq!(parse_source(&source).unwrap().unwrap(), fragments);
    }

    #[test]
    fn errors_point_into_the_source(source in prop_oneof![truncated_program(), corrupted_program()]) {
        let lines = source.split('\n').count() as u32;
        if let Some(Err(error)) = parse_source(&source) {
            let position = error.get_position().unwrap();
            prop_assert!(position.line >= 1 && position.line <= lines, "{} outside {} lines", position, lines);
            prop_assert!(position.column >= 1);
        }
    }

    #[test]
    fn op_chains_keep_operators_between_operands(
        (ops, picks) in binary_level().prop_flat_map(|ops| {
            (Just(ops), prop::collection::vec(0..ops.len(), 1..12))
        })
    ) {
        let chosen: Vec<&str> = picks.iter().map(|&i| ops[i]).collect();
        let mut source = String::from("v0");
        for (i, op) in chosen.iter().enumerate() {
            source.push_str(&format!(" {} v{}", op, i + 1));
        }

        let tokens = tokenize(source, None).unwrap();
        let mut parser = Parser::new(tokens, ParserConfig::default());
        let expr = parse_expression(&mut parser).unwrap();
        prop_assert!(!parser.tokens.has_more());

        match expr {
            Expr::OpChain(chain) => {
                prop_assert_eq!(chain.ops.len(), chain.expressions.len() - 1);
                prop_assert_eq!(chain.expressions.len(), chosen.len() + 1);
                let found: Vec<&str> = chain.ops.iter().map(|op| op.value.as_str()).collect();
                prop_assert_eq!(found, chosen);
            }
            other => prop_assert!(false, "expected an op chain, got {:?}", other),
        }
    }

    #[test]
    fn hex_and_decimal_literals_agree(value in any::<u32>()) {
        let source = format!("a = {}; b = 0x{:x}; c = 0X{:X};", value, value, value);
        let tokens = tokenize(source, None).unwrap();
        let executables = parse(tokens).unwrap();

        for executable in executables {
            match executable {
                Executable::AssignStatement(assign) => match assign.value {
                    Expr::IntegerConstant(constant) => prop_assert_eq!(constant.value, i64::from(value)),
                    other => prop_assert!(false, "expected an integer, got {:?}", other),
                },
                other => prop_assert!(false, "expected an assignment, got {:?}", other),
            }
        }
    }

    #[test]
    fn nesting_within_the_limit_is_accepted(depth in 0..DEFAULT_MAX_DEPTH) {
        let source = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
        prop_assert_eq!(parse_source(&source).unwrap().unwrap(), 1);
    }
}
