// ABOUTME: Container mutator built-ins — push, pop, keys, values (spec §4.5)

use crate::error::{ExoError, ARITY_ONE, ARITY_TWO};
use crate::interpreter::Interpreter;
use crate::value::{BuiltinFn, Value};
use std::collections::HashMap;

/// Mutates the list in place (observed by every alias, per §8 invariant 7
/// container aliasing) and returns it.
fn push(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 2 {
        return Err(ExoError::arity("push", ARITY_TWO, args.len()));
    }
    match &args[0] {
        Value::List(items) => {
            items.borrow_mut().push(args[1].clone());
            Ok(args[0].clone())
        }
        other => Err(ExoError::type_error("push", "list", other.type_name())),
    }
}

fn pop(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("pop", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::List(items) => items
            .borrow_mut()
            .pop()
            .ok_or_else(|| ExoError::name("pop: list is empty".to_string())),
        other => Err(ExoError::type_error("pop", "list", other.type_name())),
    }
}

fn keys(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("keys", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::Map(entries) => Ok(Value::list(entries.borrow().iter().map(|(k, _)| k.clone()).collect())),
        other => Err(ExoError::type_error("keys", "map", other.type_name())),
    }
}

fn values(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("values", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::Map(entries) => Ok(Value::list(entries.borrow().iter().map(|(_, v)| v.clone()).collect())),
        other => Err(ExoError::type_error("values", "map", other.type_name())),
    }
}

pub fn register(table: &mut HashMap<String, BuiltinFn>) {
    table.insert("push".to_string(), push);
    table.insert("pop".to_string(), pop);
    table.insert("keys".to_string(), keys);
    table.insert("values".to_string(), values);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::Sandbox;

    fn interp() -> Interpreter {
        Interpreter::new(Sandbox::test_sandbox(), std::env::temp_dir())
    }

    #[test]
    fn push_mutates_through_every_alias() {
        let mut i = interp();
        let list = Value::list(vec![Value::Int(1)]);
        let alias = list.clone();
        push(&[list, Value::Int(2)], &mut i).unwrap();
        if let Value::List(items) = alias {
            assert_eq!(items.borrow().len(), 2);
        }
    }

    #[test]
    fn keys_preserves_insertion_order() {
        let mut i = interp();
        let map = Value::map(vec![(Value::str("b"), Value::Int(1)), (Value::str("a"), Value::Int(2))]);
        let result = keys(&[map], &mut i).unwrap();
        assert_eq!(result, Value::list(vec![Value::str("b"), Value::str("a")]));
    }
}
