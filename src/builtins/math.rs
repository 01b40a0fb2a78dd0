// ABOUTME: Math built-ins — sqrt, pow, abs, round, floor, ceil, max, min, sum, random (spec §4.5)

use crate::error::{ExoError, ARITY_ONE, ARITY_TWO};
use crate::interpreter::Interpreter;
use crate::value::{BuiltinFn, Value};
use rand::Rng;
use std::collections::HashMap;

fn as_f64(v: &Value, function: &str) -> Result<f64, ExoError> {
    match v {
        Value::Int(n) => Ok(*n as f64),
        Value::Float(n) => Ok(*n),
        other => Err(ExoError::type_error(function, "number", other.type_name())),
    }
}

fn sqrt(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("sqrt", ARITY_ONE, args.len()));
    }
    Ok(Value::Float(as_f64(&args[0], "sqrt")?.sqrt()))
}

fn pow(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 2 {
        return Err(ExoError::arity("pow", ARITY_TWO, args.len()));
    }
    if let (Value::Int(b), Value::Int(e)) = (&args[0], &args[1]) {
        if *e >= 0 {
            return Ok(Value::Int(b.pow(*e as u32)));
        }
    }
    Ok(Value::Float(as_f64(&args[0], "pow")?.powf(as_f64(&args[1], "pow")?)))
}

fn abs(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("abs", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::Int(n) => Ok(Value::Int(n.abs())),
        Value::Float(n) => Ok(Value::Float(n.abs())),
        other => Err(ExoError::type_error("abs", "number", other.type_name())),
    }
}

fn round(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("round", ARITY_ONE, args.len()));
    }
    Ok(Value::Int(as_f64(&args[0], "round")?.round() as i64))
}

fn floor(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("floor", ARITY_ONE, args.len()));
    }
    Ok(Value::Int(as_f64(&args[0], "floor")?.floor() as i64))
}

fn ceil(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("ceil", ARITY_ONE, args.len()));
    }
    Ok(Value::Int(as_f64(&args[0], "ceil")?.ceil() as i64))
}

fn numeric_cmp(a: &Value, b: &Value, function: &str) -> Result<std::cmp::Ordering, ExoError> {
    match (a, b) {
        (Value::Str(x), Value::Str(y)) => Ok(x.cmp(y)),
        _ => as_f64(a, function)?
            .partial_cmp(&as_f64(b, function)?)
            .ok_or_else(|| ExoError::type_error(function, "comparable values", "NaN")),
    }
}

fn max(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 2 {
        return Err(ExoError::arity("max", ARITY_TWO, args.len()));
    }
    Ok(if numeric_cmp(&args[0], &args[1], "max")?.is_ge() { args[0].clone() } else { args[1].clone() })
}

fn min(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 2 {
        return Err(ExoError::arity("min", ARITY_TWO, args.len()));
    }
    Ok(if numeric_cmp(&args[0], &args[1], "min")?.is_le() { args[0].clone() } else { args[1].clone() })
}

fn sum(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    if args.len() != 1 {
        return Err(ExoError::arity("sum", ARITY_ONE, args.len()));
    }
    let items = match &args[0] {
        Value::List(items) => items.borrow().clone(),
        other => return Err(ExoError::type_error("sum", "list", other.type_name())),
    };
    let mut int_acc: i64 = 0;
    let mut float_acc: f64 = 0.0;
    let mut is_float = false;
    for item in &items {
        match item {
            Value::Int(n) if !is_float => int_acc += n,
            Value::Int(n) => float_acc += *n as f64,
            Value::Float(n) => {
                if !is_float {
                    float_acc = int_acc as f64;
                    is_float = true;
                }
                float_acc += n;
            }
            other => return Err(ExoError::type_error("sum", "number", other.type_name())),
        }
    }
    Ok(if is_float { Value::Float(float_acc) } else { Value::Int(int_acc) })
}

/// No-arg call returns a uniform `Float` in `[0, 1)`; two-arg call returns a
/// uniform `Int` in the inclusive range `[low, high]` (spec §4.5).
fn random(args: &[Value], _interp: &mut Interpreter) -> Result<Value, ExoError> {
    match args.len() {
        0 => Ok(Value::Float(rand::thread_rng().gen_range(0.0..1.0))),
        2 => {
            let low = match &args[0] {
                Value::Int(n) => *n,
                other => return Err(ExoError::type_error("random", "int", other.type_name())),
            };
            let high = match &args[1] {
                Value::Int(n) => *n,
                other => return Err(ExoError::type_error("random", "int", other.type_name())),
            };
            if low > high {
                return Err(ExoError::arithmetic("random: low bound exceeds high bound"));
            }
            Ok(Value::Int(rand::thread_rng().gen_range(low..=high)))
        }
        n => Err(ExoError::arity("random", "0 or 2", n)),
    }
}

pub fn register(table: &mut HashMap<String, BuiltinFn>) {
    table.insert("sqrt".to_string(), sqrt);
    table.insert("pow".to_string(), pow);
    table.insert("abs".to_string(), abs);
    table.insert("round".to_string(), round);
    table.insert("floor".to_string(), floor);
    table.insert("ceil".to_string(), ceil);
    table.insert("max".to_string(), max);
    table.insert("min".to_string(), min);
    table.insert("sum".to_string(), sum);
    table.insert("random".to_string(), random);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::Sandbox;

    fn interp() -> Interpreter {
        Interpreter::new(Sandbox::test_sandbox(), std::env::temp_dir())
    }

    #[test]
    fn pow_stays_integral_for_integer_operands() {
        let mut i = interp();
        assert_eq!(pow(&[Value::Int(2), Value::Int(10)], &mut i).unwrap(), Value::Int(1024));
    }

    #[test]
    fn sum_promotes_to_float_when_any_element_is_float() {
        let mut i = interp();
        let list = Value::list(vec![Value::Int(1), Value::Float(2.5)]);
        assert_eq!(sum(&[list], &mut i).unwrap(), Value::Float(3.5));
    }

    #[test]
    fn random_two_arg_stays_within_inclusive_bounds() {
        let mut i = interp();
        for _ in 0..50 {
            let v = random(&[Value::Int(1), Value::Int(3)], &mut i).unwrap();
            match v {
                Value::Int(n) => assert!((1..=3).contains(&n)),
                _ => panic!("expected int"),
            }
        }
    }
}
