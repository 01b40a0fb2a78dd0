// ABOUTME: String helper built-ins — join, split (spec §4.5)

use crate::error::{ExoError, ARITY_ONE_OR_TWO, ARITY_TWO};
use crate::interpreter::Interpreter;
use crate::value::{BuiltinFn, Value};
use std::collections::HashMap;

fn join(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 2 {
        return Err(ExoError::arity("join", ARITY_TWO, args.len()));
    }
    let sep = match &args[0] {
        Value::Str(s) => s.as_str(),
        other => return Err(ExoError::type_error("join", "str", other.type_name())),
    };
    let items = match &args[1] {
        Value::List(items) => items.borrow().clone(),
        other => return Err(ExoError::type_error("join", "list", other.type_name())),
    };
    let joined = items.iter().map(Value::to_string).collect::<Vec<_>>().join(sep);
    Ok(Value::str(joined))
}

/// `split(str)` defaults to a single space separator (spec §4.5).
fn split(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    let (text, sep) = match args.len() {
        1 => (&args[0], " ".to_string()),
        2 => {
            let sep = match &args[1] {
                Value::Str(s) => s.clone(),
                other => return Err(ExoError::type_error("split", "str", other.type_name())),
            };
            (&args[0], sep)
        }
        n => return Err(ExoError::arity("split", ARITY_ONE_OR_TWO, n)),
    };
    let text = match text {
        Value::Str(s) => s,
        other => return Err(ExoError::type_error("split", "str", other.type_name())),
    };
    let parts: Vec<Value> = if sep.is_empty() {
        text.chars().map(|c| Value::str(c.to_string())).collect()
    } else {
        text.split(sep.as_str()).map(Value::str).collect()
    };
    Ok(Value::list(parts))
}

pub fn register(table: &mut HashMap<String, BuiltinFn>) {
    table.insert("join".to_string(), join);
    table.insert("split".to_string(), split);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::Sandbox;

    fn interp() -> Interpreter {
        Interpreter::new(Sandbox::test_sandbox(), std::env::temp_dir())
    }

    #[test]
    fn join_stringifies_non_string_elements() {
        let mut i = interp();
        let list = Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert_eq!(join(&[Value::str(","), list], &mut i).unwrap(), Value::str("1,2,3"));
    }

    #[test]
    fn split_defaults_to_single_space() {
        let mut i = interp();
        let result = split(&[Value::str("a b  c")], &mut i).unwrap();
        assert_eq!(result, Value::list(vec![Value::str("a"), Value::str("b"), Value::str(""), Value::str("c")]));
    }

    #[test]
    fn split_with_explicit_separator() {
        let mut i = interp();
        let result = split(&[Value::str("a,b,c"), Value::str(",")], &mut i).unwrap();
        assert_eq!(result, Value::list(vec![Value::str("a"), Value::str("b"), Value::str("c")]));
    }
}
