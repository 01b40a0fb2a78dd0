// ABOUTME: Script-level tests for string coercion and join/split built-ins

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

#[test]
fn split_then_join_round_trips_a_sentence() {
    let value = run("join(\" \", split(\"a b c\"))\n");
    assert_eq!(value, Value::str("a b c"));
}

#[test]
fn join_accepts_a_list_built_from_str_coercions() {
    let value = run("let xs = [str(1), str(2), str(3)]\njoin(\"-\", xs)\n");
    assert_eq!(value, Value::str("1-2-3"));
}

#[test]
fn string_concatenation_uses_plus_not_join() {
    let value = run("\"hello \" + \"world\"\n");
    assert_eq!(value, Value::str("hello world"));
}

#[test]
fn int_and_float_coercions_compose_with_arithmetic() {
    let value = run("int(\"4\") + float(\"2.5\")\n");
    assert_eq!(value, Value::Float(6.5));
}

#[test]
fn coercing_a_non_numeric_string_is_a_type_error() {
    let err = run_err("int(\"not a number\")\n");
    assert_eq!(err.kind, ErrorKind::Type);
}

#[test]
fn len_counts_characters_in_arabic_identifiers_and_strings() {
    let value = run("let اسم = \"مرحبا\"\nlen(اسم)\n");
    assert_eq!(value, Value::Int(5));
}
