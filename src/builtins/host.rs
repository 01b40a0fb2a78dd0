// ABOUTME: Host-service built-ins — sandboxed filesystem, sleep, JSON, html (spec §4.5)

use crate::error::{ExoError, ARITY_ONE, ARITY_TWO};
use crate::interpreter::Interpreter;
use crate::sandbox::SandboxError;
use crate::stdlib::json::{json_to_value, value_to_json};
use crate::value::{BuiltinFn, Value};
use std::collections::HashMap;

impl From<SandboxError> for ExoError {
    fn from(e: SandboxError) -> Self {
        ExoError::io(e.to_string())
    }
}

fn as_str<'a>(v: &'a Value, function: &str) -> Result<&'a str, ExoError> {
    match v {
        Value::Str(s) => Ok(s),
        other => Err(ExoError::type_error(function, "str", other.type_name())),
    }
}

fn read_file(args: &[Value], interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("readFile", ARITY_ONE, args.len()));
    }
    let path = as_str(&args[0], "readFile")?;
    Ok(Value::str(interp.sandbox.read_file(path)?))
}

fn write_file(args: &[Value], interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 2 {
        return Err(ExoError::arity("writeFile", ARITY_TWO, args.len()));
    }
    let path = as_str(&args[0], "writeFile")?;
    let contents = as_str(&args[1], "writeFile")?;
    interp.sandbox.write_file(path, contents)?;
    Ok(Value::Null)
}

fn file_exists(args: &[Value], interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("fileExists", ARITY_ONE, args.len()));
    }
    let path = as_str(&args[0], "fileExists")?;
    Ok(Value::Bool(interp.sandbox.file_exists(path)?))
}

fn delete_file(args: &[Value], interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("deleteFile", ARITY_ONE, args.len()));
    }
    let path = as_str(&args[0], "deleteFile")?;
    interp.sandbox.delete_file(path)?;
    Ok(Value::Null)
}

fn sleep(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("sleep", ARITY_ONE, args.len()));
    }
    let seconds = match &args[0] {
        Value::Int(n) => *n as f64,
        Value::Float(n) => *n,
        other => return Err(ExoError::type_error("sleep", "number", other.type_name())),
    };
    if seconds > 0.0 {
        std::thread::sleep(std::time::Duration::from_secs_f64(seconds));
    }
    Ok(Value::Null)
}

fn json(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("json", ARITY_ONE, args.len()));
    }
    let encoded = serde_json::to_string(&value_to_json(&args[0])?)
        .map_err(|e| ExoError::type_error("json", "encodable value", &e.to_string()))?;
    Ok(Value::str(encoded))
}

fn parse_json(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("parseJson", ARITY_ONE, args.len()));
    }
    let text = as_str(&args[0], "parseJson")?;
    let parsed: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ExoError::syntax(format!("parseJson: {}", e)))?;
    Ok(json_to_value(&parsed))
}

/// Identity — a no-op marker built-in (spec §4.5 "html (identity)").
fn html(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("html", ARITY_ONE, args.len()));
    }
    Ok(args[0].clone())
}

pub fn register(table: &mut HashMap<String, BuiltinFn>) {
    table.insert("readFile".to_string(), read_file);
    table.insert("writeFile".to_string(), write_file);
    table.insert("fileExists".to_string(), file_exists);
    table.insert("deleteFile".to_string(), delete_file);
    table.insert("sleep".to_string(), sleep);
    table.insert("json".to_string(), json);
    table.insert("parseJson".to_string(), parse_json);
    table.insert("html".to_string(), html);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::Sandbox;

    fn interp() -> Interpreter {
        Interpreter::new(Sandbox::test_sandbox(), std::env::temp_dir())
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut i = interp();
        write_file(&[Value::str("a.txt"), Value::str("hi")], &mut i).unwrap();
        assert_eq!(read_file(&[Value::str("a.txt")], &mut i).unwrap(), Value::str("hi"));
    }

    #[test]
    fn json_and_parse_json_round_trip() {
        let mut i = interp();
        let value = Value::list(vec![Value::Int(1), Value::str("x")]);
        let encoded = json(&[value.clone()], &mut i).unwrap();
        let decoded = parse_json(&[encoded], &mut i).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn html_is_identity() {
        let mut i = interp();
        assert_eq!(html(&[Value::str("<b>hi</b>")], &mut i).unwrap(), Value::str("<b>hi</b>"));
    }
}
