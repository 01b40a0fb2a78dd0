// ABOUTME: Sequencing built-in — range (spec §4.5)

use crate::error::ExoError;
use crate::interpreter::Interpreter;
use crate::value::{BuiltinFn, Value};
use std::collections::HashMap;

fn as_int(v: &Value, function: &str) -> Result<i64, ExoError> {
    match v {
        Value::Int(n) => Ok(*n),
        other => Err(ExoError::type_error(function, "int", other.type_name())),
    }
}

/// `range(stop)`, `range(start, stop)`, or `range(start, stop, step)` —
/// half-open, identical to the common `range` builtin (spec §4.5).
fn range(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    let (start, stop, step) = match args.len() {
        1 => (0, as_int(&args[0], "range")?, 1),
        2 => (as_int(&args[0], "range")?, as_int(&args[1], "range")?, 1),
        3 => (as_int(&args[0], "range")?, as_int(&args[1], "range")?, as_int(&args[2], "range")?),
        n => return Err(ExoError::arity("range", "1-3", n)),
    };
    if step == 0 {
        return Err(ExoError::arithmetic("range: step cannot be zero"));
    }
    let mut items = Vec::new();
    let mut current = start;
    if step > 0 {
        while current < stop {
            items.push(Value::Int(current));
            current += step;
        }
    } else {
        while current > stop {
            items.push(Value::Int(current));
            current += step;
        }
    }
    Ok(Value::list(items))
}

pub fn register(table: &mut HashMap<String, BuiltinFn>) {
    table.insert("range".to_string(), range);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::Sandbox;

    fn interp() -> Interpreter {
        Interpreter::new(Sandbox::test_sandbox(), std::env::temp_dir())
    }

    fn to_ints(v: Value) -> Vec<i64> {
        match v {
            Value::List(items) => items
                .borrow()
                .iter()
                .map(|i| match i {
                    Value::Int(n) => *n,
                    _ => panic!("expected int"),
                })
                .collect(),
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn single_arg_ranges_from_zero() {
        let mut i = interp();
        assert_eq!(to_ints(range(&[Value::Int(4)], &mut i).unwrap()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn three_arg_respects_negative_step() {
        let mut i = interp();
        let v = range(&[Value::Int(5), Value::Int(1), Value::Int(-2)], &mut i).unwrap();
        assert_eq!(to_ints(v), vec![5, 3]);
    }
}
