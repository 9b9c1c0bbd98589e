//! Integration tests for the front end.
//!
//! These tests run complete programs through tokenization and parsing and
//! check the shape of the resulting tree and the errors reported for
//! malformed input.

use rhl::{
    ast::{
        ast::{Expr, ExprType, Stmt, StmtType},
        expressions::DeclarationExpr,
        statements::{ExpressionStmt, FnDeclStmt, IfStmt, WhileStmt},
    },
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse_program,
    parser::parser::parse,
};
use std::rc::Rc;

#[test]
fn test_parse_fibonacci_program() {
    let source = r#"
        fun fib(n: int) -> int {
            if n <= 1 {
                return n;
            }

            a := 0;
            b := 1;
            i := 2;
            while i <= n {
                next := a + b;
                a = b;
                b = next;
                i = i + 1;
            }
            return b;
        }

        result: int = fib(10);
    "#
    .to_string();

    let program = parse_program(source, Some("fib.rhl".to_string())).unwrap();
    assert_eq!(program.statements.len(), 2);

    let fib = program.statements[0].as_any().downcast_ref::<FnDeclStmt>().unwrap();
    assert_eq!(fib.identifier, "fib");
    assert_eq!(fib.parameters.len(), 1);
    assert_eq!(fib.body.body.len(), 6);

    assert_eq!(fib.body.body[0].get_stmt_type(), StmtType::IfStmt);
    assert_eq!(fib.body.body[4].get_stmt_type(), StmtType::WhileStmt);
    assert_eq!(fib.body.body[5].get_stmt_type(), StmtType::ReturnStmt);

    let while_stmt = fib.body.body[4].as_any().downcast_ref::<WhileStmt>().unwrap();
    assert_eq!(while_stmt.body.get_stmt_type(), StmtType::BlockStmt);

    let result = program.statements[1].as_any().downcast_ref::<ExpressionStmt>().unwrap();
    let decl = result.expression.as_any().downcast_ref::<DeclarationExpr>().unwrap();
    assert_eq!(decl.name, "result");
    assert_eq!(decl.value.get_expr_type(), ExprType::Call);
}

#[test]
fn test_parse_higher_order_program() {
    let source = r#"
        fun apply(f: func[[int], int], xs: list[int]) -> list[int] {
            out: list[int] = [];
            i := 0;
            while i < 3 {
                out = push(out, f(xs[i]));
                i = i + 1;
            }
            return out;
        }
    "#
    .to_string();

    let program = parse_program(source, None).unwrap();
    assert_eq!(program.statements.len(), 1);

    let apply = program.statements[0].as_any().downcast_ref::<FnDeclStmt>().unwrap();
    assert_eq!(apply.parameters.len(), 2);
    assert!(apply.return_type.is_some());
}

#[test]
fn test_parse_branching_program() {
    let source = r#"
        fun classify(x: int) -> str {
            if x < 0 or x == 0 and flag {
                return "low";
            } else if x < 100 {
                return "mid";
            } else {
                return "high";
            }
        }
    "#
    .to_string();

    let program = parse_program(source, None).unwrap();
    let classify = program.statements[0].as_any().downcast_ref::<FnDeclStmt>().unwrap();

    let branch = classify.body.body[0].as_any().downcast_ref::<IfStmt>().unwrap();
    // `or` and `and` share a level, so the condition is a top-level `and`.
    assert_eq!(branch.condition.get_expr_type(), ExprType::Binary);

    let else_body = branch.else_body.as_ref().unwrap();
    let inner = else_body.as_any().downcast_ref::<IfStmt>().unwrap();
    assert!(inner.else_body.is_some());
}

#[test]
fn test_tokenize_then_parse_separately() {
    let file = Rc::new("split.rhl".to_string());
    let tokens = tokenize("x := 1 + 2;".to_string(), Rc::clone(&file)).unwrap();

    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);

    let program = parse(tokens, file).unwrap();
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_lexical_error_surfaces() {
    let error = parse_program("x = 1 $ 2;".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_position().0, 6);
    assert_eq!(*error.get_position().1, "shell");
}

#[test]
fn test_syntax_error_surfaces() {
    let error = parse_program(
        "fun broken(a: int { return a; }".to_string(),
        Some("broken.rhl".to_string()),
    )
    .unwrap_err();

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(*error.get_position().1, "broken.rhl");
}

#[test]
fn test_first_error_wins() {
    // Parsing stops at the first error even when later statements are
    // also malformed.
    let error = parse_program("x = ;\ny = )\n".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_empty_source_parses() {
    let program = parse_program(String::new(), None).unwrap();
    assert!(program.statements.is_empty());
}
