// ABOUTME: Coercion built-ins — str, int, float (spec §4.5)

use crate::error::{ExoError, ARITY_ONE};
use crate::interpreter::Interpreter;
use crate::value::{BuiltinFn, Value};
use std::collections::HashMap;

fn str_of(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("str", ARITY_ONE, args.len()));
    }
    Ok(Value::str(args[0].to_string()))
}

fn int_of(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("int", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::Int(n) => Ok(Value::Int(*n)),
        Value::Float(n) => Ok(Value::Int(*n as i64)),
        Value::Bool(b) => Ok(Value::Int(*b as i64)),
        Value::Str(s) => s
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| ExoError::type_error("int", "numeric string", "non-numeric string")),
        other => Err(ExoError::type_error("int", "int, float, bool, or str", other.type_name())),
    }
}

fn float_of(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("float", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::Int(n) => Ok(Value::Float(*n as f64)),
        Value::Float(n) => Ok(Value::Float(*n)),
        Value::Str(s) => s
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| ExoError::type_error("float", "numeric string", "non-numeric string")),
        other => Err(ExoError::type_error("float", "int, float, or str", other.type_name())),
    }
}

pub fn register(table: &mut HashMap<String, BuiltinFn>) {
    table.insert("str".to_string(), str_of);
    table.insert("int".to_string(), int_of);
    table.insert("float".to_string(), float_of);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::Sandbox;

    fn interp() -> Interpreter {
        Interpreter::new(Sandbox::test_sandbox(), std::env::temp_dir())
    }

    #[test]
    fn int_truncates_float() {
        let mut i = interp();
        assert_eq!(int_of(&[Value::Float(3.9)], &mut i).unwrap(), Value::Int(3));
    }

    #[test]
    fn float_parses_numeric_string() {
        let mut i = interp();
        assert_eq!(float_of(&[Value::str("2.5")], &mut i).unwrap(), Value::Float(2.5));
    }

    #[test]
    fn str_stringifies_any_value() {
        let mut i = interp();
        assert_eq!(str_of(&[Value::Bool(true)], &mut i).unwrap(), Value::str("True"));
    }
}
