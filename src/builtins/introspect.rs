// ABOUTME: Introspection built-ins — len, type (spec §4.5)

use crate::error::{ExoError, ARITY_ONE};
use crate::interpreter::Interpreter;
use crate::value::{BuiltinFn, Value};
use std::collections::HashMap;

fn len(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("len", ARITY_ONE, args.len()));
    }
    let n = match &args[0] {
        Value::List(items) => items.borrow().len(),
        Value::Map(entries) => entries.borrow().len(),
        Value::Str(s) => s.chars().count(),
        other => return Err(ExoError::type_error("len", "list, map, or str", other.type_name())),
    };
    Ok(Value::Int(n as i64))
}

fn type_of(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("type", ARITY_ONE, args.len()));
    }
    Ok(Value::str(args[0].type_name()))
}

pub fn register(table: &mut HashMap<String, BuiltinFn>) {
    table.insert("len".to_string(), len);
    table.insert("type".to_string(), type_of);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::Sandbox;

    fn interp() -> Interpreter {
        Interpreter::new(Sandbox::test_sandbox(), std::env::temp_dir())
    }

    #[test]
    fn len_counts_characters_not_bytes() {
        let mut i = interp();
        assert_eq!(len(&[Value::str("abc")], &mut i).unwrap(), Value::Int(3));
    }

    #[test]
    fn type_reports_textual_tags() {
        let mut i = interp();
        assert_eq!(type_of(&[Value::Int(1)], &mut i).unwrap(), Value::str("int"));
        assert_eq!(type_of(&[Value::Null], &mut i).unwrap(), Value::str("null"));
    }
}
