// ABOUTME: Output/Input built-ins — print, input (spec §4.5)

use crate::error::{ExoError, ARITY_ONE};
use crate::interpreter::Interpreter;
use crate::value::{BuiltinFn, Value};
use std::collections::HashMap;
use std::io::Write;

fn print(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("print", ARITY_ONE, args.len()));
    }
    println!("{}", args[0]);
    std::io::stdout().flush().ok();
    Ok(Value::Null)
}

/// Reads one line from stdin. Attempts an integer parse, then a float parse,
/// and otherwise returns the raw (trimmed) string (spec §4.5).
fn input(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if !args.is_empty() {
        return Err(ExoError::arity("input", "0", args.len()));
    }
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(|e| ExoError::io(format!("failed to read stdin: {}", e)))?;
    let trimmed = line.trim_end_matches(['\n', '\r']);
    if let Ok(i) = trimmed.parse::<i64>() {
        return Ok(Value::Int(i));
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return Ok(Value::Float(f));
    }
    Ok(Value::str(trimmed))
}

pub fn register(table: &mut HashMap<String, BuiltinFn>) {
    table.insert("print".to_string(), print);
    table.insert("input".to_string(), input);
}
