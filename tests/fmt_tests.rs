use packlang::ast::{BinOpKind, Expr};
use packlang::parse;

fn roundtrip(input: &str) {
    let first = parse(input).expect("parsing failed");
    let printed = first.to_string();
    let second = match parse(&printed) {
        Ok(root) => root,
        Err(err) => panic!("printed source failed to parse: {err}\n{printed}"),
    };
    assert_eq!(first, second, "printed as:\n{printed}");
}

#[test]
fn fmt_empty_function() {
    let root = parse("main(){}").expect("parsing failed");
    assert_eq!(root.to_string(), "main() {}\n");
}

#[test]
fn fmt_block_layout() {
    let root = parse("main(){x=1;x+2}").expect("parsing failed");
    assert_eq!(root.to_string(), "main() {\n    x = 1;\n    x + 2\n}\n");
}

#[test]
fn fmt_nested_operands_get_parentheses() {
    let expr = Expr::binary(
        BinOpKind::Sub,
        Expr::binary(BinOpKind::Sub, Expr::Int(1), Expr::Int(2)),
        Expr::Int(3),
    );
    assert_eq!(expr.to_string(), "(1 - 2) - 3");
}

#[test]
fn fmt_roundtrip_arithmetic() {
    roundtrip("main() { 1 + 2 * 3 - 4 / 5 }");
    roundtrip("main() { (1 - 2) - 3 }");
    roundtrip("main() { 1 - 2 - 3 }");
}

#[test]
fn fmt_roundtrip_comparisons() {
    roundtrip("main() { 1 <= 2; 1 >= 2; 1 == 2; 1 != 2; 1 < 2 + 3 }");
}

#[test]
fn fmt_roundtrip_conditionals() {
    roundtrip("main() { if 1 then if 2 then 3 else 4 }");
    roundtrip("main() { if x < 1 then { y = 2; y } else (if z then 0) }");
    roundtrip("main() { x = if a then b else c; x }");
}

#[test]
fn fmt_roundtrip_nested_blocks() {
    roundtrip("main() { { { 1 }; 2 } + 3 } helper() { a = 1; }");
}
