// ABOUTME: Value types representing Exo's runtime data

use crate::env::Scope;
use crate::interpreter::Interpreter;
use crate::error::ExoError;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A user-defined procedure: parameter names, raw body source lines, and the
/// scope captured at the point of definition (shared, not copied — this is
/// what makes closures observe later mutations of their enclosing scope).
#[derive(Debug)]
pub struct Procedure {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<String>,
    pub scope: Rc<Scope>,
}

pub type BuiltinFn = fn(&[Value], &mut Interpreter) -> Result<Value, ExoError>;

#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Rc<RefCell<Vec<Value>>>),
    Map(Rc<RefCell<Vec<(Value, Value)>>>),
    Procedure(Rc<Procedure>),
    /// Refers to an entry in the built-in dispatcher by name, not a raw
    /// function pointer — see DESIGN.md "Value model".
    Builtin(String),
}

impl Value {
    pub fn str(s: impl Into<String>) -> Value {
        Value::Str(s.into())
    }

    pub fn list(items: Vec<Value>) -> Value {
        Value::List(Rc::new(RefCell::new(items)))
    }

    pub fn map(entries: Vec<(Value, Value)>) -> Value {
        Value::Map(Rc::new(RefCell::new(entries)))
    }

    /// Textual type tag used by the `type` built-in (spec §4.5).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Procedure(_) => "procedure",
            Value::Builtin(_) => "procedure",
        }
    }

    /// Truthiness used by `if`/`while`/logical operators: Null and Bool(false)
    /// are falsy, everything else (including 0 and "") is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Bool(false))
    }

    /// Representation used for elements nested inside a List/Map display —
    /// strings are quoted here but not at top level (spec §8 S4:
    /// `print(keys(m))` → `['a', 'b']`).
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => format!("'{}'", s),
            other => other.to_string(),
        }
    }

    /// First ~20 characters of the stringified value, used for call-stack
    /// frame snapshots (spec §3.6, §4.6).
    pub fn snapshot(&self) -> String {
        let s = self.to_string();
        if s.chars().count() > 20 {
            s.chars().take(20).collect()
        } else {
            s
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => *a.borrow() == *b.borrow(),
            (Value::Map(a), Value::Map(b)) => *a.borrow() == *b.borrow(),
            (Value::Procedure(a), Value::Procedure(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item.repr())?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k.repr(), v.repr())?;
                }
                write!(f, "}}")
            }
            Value::Procedure(p) => write!(f, "<procedure {}>", p.name),
            Value::Builtin(name) => write!(f, "<builtin {}>", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_display_has_no_decimal() {
        assert_eq!(format!("{}", Value::Int(42)), "42");
    }

    #[test]
    fn float_display_keeps_one_decimal_for_whole_numbers() {
        assert_eq!(format!("{}", Value::Float(10.0)), "10.0");
        assert_eq!(format!("{}", Value::Float(2.5)), "2.5");
    }

    #[test]
    fn list_display_quotes_nested_strings_not_top_level() {
        let s = Value::str("a");
        assert_eq!(format!("{}", s), "a");

        let list = Value::list(vec![Value::str("a"), Value::str("b")]);
        assert_eq!(format!("{}", list), "['a', 'b']");
    }

    #[test]
    fn numeric_equality_crosses_int_float() {
        assert_eq!(Value::Int(2), Value::Float(2.0));
    }

    #[test]
    fn list_aliasing_via_rc() {
        let a = Value::list(vec![Value::Int(1), Value::Int(2)]);
        let b = a.clone();
        if let Value::List(items) = &b {
            items.borrow_mut().push(Value::Int(3));
        }
        if let Value::List(items) = &a {
            assert_eq!(items.borrow().len(), 3);
        }
    }

    #[test]
    fn snapshot_truncates_to_twenty_chars() {
        let s = Value::str("this is a rather long string");
        assert_eq!(s.snapshot().chars().count(), 20);
    }
}
