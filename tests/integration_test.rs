// ABOUTME: End-to-end scenarios and invariants from spec §8, run through the full pipeline

use exo_lang::error::ErrorKind;
use exo_lang::exec::{run_program, split_source_lines};
use exo_lang::interpreter::Interpreter;
use exo_lang::sandbox::Sandbox;
use exo_lang::value::Value;

fn run(source: &str) -> Value {
    let mut interp = Interpreter::new(Sandbox::test_sandbox(), std::env::temp_dir());
    let lines = split_source_lines(source);
    let scope = interp.global.clone();
    run_program(&lines, &scope, &mut interp).expect("program failed")
}

fn run_err(source: &str) -> exo_lang::error::ExoError {
    let mut interp = Interpreter::new(Sandbox::test_sandbox(), std::env::temp_dir());
    let lines = split_source_lines(source);
    let scope = interp.global.clone();
    run_program(&lines, &scope, &mut interp).unwrap_err()
}

// S1 — right-associative exponent.
#[test]
fn s1_exponent_is_right_associative() {
    let value = run("let x = 2^3^2\nx\n");
    assert_eq!(value, Value::Int(512));
}

// S2 — container aliasing through push is observed by sum.
#[test]
fn s2_push_then_sum() {
    let value = run("let xs = [3, 1, 2]\npush(xs, 0)\nsum(xs)\n");
    assert_eq!(value, Value::Int(6));
}

// S3 — closures over a captured parameter survive the defining call's return.
#[test]
fn s3_nested_closures_capture_parameter() {
    let value = run(
        "func make(n)\nfunc inner() return n end\nreturn inner\nend\nlet f = make(7)\nf()\n",
    );
    assert_eq!(value, Value::Int(7));
}

// S4 — property read/write plus insertion-order keys.
#[test]
fn s4_property_assignment_and_key_order() {
    let updated = run("let m = {\"a\": 1, \"b\": 2}\nm.a = m.a + 10\nm.a\n");
    assert_eq!(updated, Value::Int(11));

    let keys = run("let m = {\"a\": 1, \"b\": 2}\nkeys(m)\n");
    assert_eq!(keys, Value::list(vec![Value::str("a"), Value::str("b")]));
}

// S5 — for-loop over range().
#[test]
fn s5_for_loop_over_range_sums_to_ten() {
    let value = run("let s = 0\nfor i in range(1, 5) s = s + i end\ns\n");
    assert_eq!(value, Value::Int(10));
}

// S6 — division/modulo typing and division-by-zero diagnostics.
#[test]
fn s6_float_division_and_int_modulo() {
    assert_eq!(run("10 / 4\n"), Value::Float(2.5));
    assert_eq!(run("10 % 3\n"), Value::Int(1));
}

#[test]
fn s6_division_by_zero_is_arithmetic_error_with_line_and_context() {
    let err = run_err("1 / 0\n");
    assert_eq!(err.kind, ErrorKind::Arithmetic);
    assert_eq!(err.line, Some(1));
    assert_eq!(err.context.as_deref(), Some("1 / 0"));
}

// Invariant 1 — lexical closure observes a later mutation of its captured scope.
#[test]
fn invariant_closure_observes_later_mutation() {
    let value = run("let v = 1\nfunc p() return v end\nv = 2\np()\n");
    assert_eq!(value, Value::Int(2));
}

// Invariant 2 — declare vs. assign semantics, both directions.
#[test]
fn invariant_assign_mutates_enclosing_declare_does_not() {
    let assigned = run("let x = 1\nfunc f() x = 2 end\nf()\nx\n");
    assert_eq!(assigned, Value::Int(2));

    let declared = run("let x = 1\nfunc g() let x = 5 end\ng()\nx\n");
    assert_eq!(declared, Value::Int(1));
}

#[test]
fn invariant_assigning_undeclared_outer_name_is_name_error() {
    let err = run_err("func f() y = 1 end\nf()\n");
    assert_eq!(err.kind, ErrorKind::Name);
}

// Invariant 3 — division always promotes to Float; +, -, * stay Int for Int operands.
#[test]
fn invariant_division_typing() {
    assert_eq!(run("6 / 3\n"), Value::Float(2.0));
    assert_eq!(run("6 + 3\n"), Value::Int(9));
    assert_eq!(run("6 - 3\n"), Value::Int(3));
    assert_eq!(run("6 * 3\n"), Value::Int(18));
}

// Invariant 4 — short-circuit evaluation never touches the right operand.
#[test]
fn invariant_short_circuit_and_or() {
    assert_eq!(run("false and (1 / 0)\n"), Value::Bool(false));
    assert_eq!(run("true or (1 / 0)\n"), Value::Bool(true));
}

// Invariant 5 — importing the same module path twice returns the same exports object.
#[test]
fn invariant_module_idempotence() {
    let dir = std::env::temp_dir().join(format!("exo-module-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let module_path = dir.join("counter.exo");
    std::fs::write(&module_path, "let n = 0\nn = n + 1\nexport(\"n\", n)\n").unwrap();

    let mut interp = Interpreter::new(Sandbox::test_sandbox(), dir.clone());
    interp.current_file = Some(dir.join("main.exo").display().to_string());
    let lines =
        split_source_lines("let a = import(\"counter\")\nlet b = import(\"counter\")\na.n\n");
    let scope = interp.global.clone();
    let value = run_program(&lines, &scope, &mut interp).expect("program failed");
    assert_eq!(value, Value::Int(1));

    std::fs::remove_dir_all(&dir).ok();
}

// Invariant 6 — unbounded recursion fails with RecursionError near depth 1000.
#[test]
fn invariant_recursion_cap() {
    let err = run_err("func loop() return loop() end\nloop()\n");
    assert_eq!(err.kind, ErrorKind::Recursion);
}

// Invariant 7 — aliased containers observe mutation through either binding.
#[test]
fn invariant_container_aliasing() {
    let value = run("let a = [1, 2]\nlet b = a\npush(b, 3)\nlen(a)\n");
    assert_eq!(value, Value::Int(3));
}
