// ABOUTME: Script-level tests for math/sequence/container/host built-ins

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
fn range_feeds_a_for_loop_and_sum() {
    let value = run("sum(range(1, 11))\n");
    assert_eq!(value, Value::Int(55));
}

#[test]
fn max_min_and_abs_compose() {
    let value = run("max(abs(-3), min(2, 9))\n");
    assert_eq!(value, Value::Int(3));
}

#[test]
fn pop_removes_the_last_pushed_element() {
    let value = run("let xs = [1, 2]\npush(xs, 3)\npop(xs)\n");
    assert_eq!(value, Value::Int(3));
}

#[test]
fn pop_on_empty_list_is_a_name_error() {
    let err = run_err("pop([])\n");
    assert_eq!(err.kind, ErrorKind::Name);
}

#[test]
fn keys_and_values_stay_in_insertion_order() {
    let keys = run("let m = {\"z\": 1, \"a\": 2}\nkeys(m)\n");
    assert_eq!(keys, Value::list(vec![Value::str("z"), Value::str("a")]));

    let values = run("let m = {\"z\": 1, \"a\": 2}\nvalues(m)\n");
    assert_eq!(values, Value::list(vec![Value::Int(1), Value::Int(2)]));
}

#[test]
fn write_read_and_delete_file_round_trip_through_the_sandbox() {
    let script = "writeFile(\"note.txt\", \"hi there\")\nlet before = fileExists(\"note.txt\")\nlet text = readFile(\"note.txt\")\ndeleteFile(\"note.txt\")\nlet after = fileExists(\"note.txt\")\n[before, text, after]\n";
    let value = run(script);
    assert_eq!(
        value,
        Value::list(vec![Value::Bool(true), Value::str("hi there"), Value::Bool(false)])
    );
}

#[test]
fn json_round_trips_a_nested_structure_through_a_string() {
    let value = run("let m = {\"a\": [1, 2], \"b\": true}\nparseJson(json(m))\n");
    assert_eq!(
        value,
        Value::map(vec![
            (Value::str("a"), Value::list(vec![Value::Int(1), Value::Int(2)])),
            (Value::str("b"), Value::Bool(true)),
        ])
    );
}

#[test]
fn reading_a_path_outside_the_sandbox_root_is_an_io_error() {
    let err = run_err("readFile(\"../escape.txt\")\n");
    assert_eq!(err.kind, ErrorKind::Io);
}
