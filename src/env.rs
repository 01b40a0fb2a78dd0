// ABOUTME: Scope module implementing the lexically-nested name-to-value chain

use crate::error::ExoError;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A single scope node: a parent link and a bindings map (spec §3.2). The
/// global scope is the only node with `parent == None`.
#[derive(Debug)]
pub struct Scope {
    name: String,
    bindings: RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Scope>>,
}

impl Scope {
    /// Creates a new global scope with no parent.
    pub fn new_global() -> Rc<Self> {
        Rc::new(Scope {
            name: "global".to_string(),
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    /// Creates a new child scope. `name` is carried purely for diagnostics
    /// (call-stack frames, error context).
    pub fn with_parent(parent: Rc<Scope>, name: impl Into<String>) -> Rc<Self> {
        Rc::new(Scope {
            name: name.into(),
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// **Declare**: unconditionally writes into this scope, shadowing any
    /// outer binding of the same name (spec §3.2, §4.3).
    pub fn declare(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Walks `this -> parent*` until a hit.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|p| p.get(name))
    }

    /// Walks the chain and reports whether `name` resolves anywhere.
    pub fn has(&self, name: &str) -> bool {
        self.bindings.borrow().contains_key(name)
            || self.parent.as_ref().is_some_and(|p| p.has(name))
    }

    /// **Assign**: walks parents to find the node where `name` is already
    /// declared and writes there (nearest definition wins). Errors if the
    /// name is not declared anywhere in the chain (spec §4.3: "use
    /// declaration keyword first").
    pub fn assign(&self, name: &str, value: Value) -> Result<(), ExoError> {
        if self.bindings.borrow().contains_key(name) {
            self.bindings.borrow_mut().insert(name.to_string(), value);
            return Ok(());
        }
        if let Some(parent) = &self.parent {
            return parent.assign(name, value);
        }
        Err(ExoError::name(format!(
            "'{}' is not declared — use declaration keyword first",
            name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_and_get() {
        let scope = Scope::new_global();
        scope.declare("x", Value::Int(42));
        assert_eq!(scope.get("x"), Some(Value::Int(42)));
    }

    #[test]
    fn undeclared_lookup_is_none() {
        let scope = Scope::new_global();
        assert!(scope.get("missing").is_none());
    }

    #[test]
    fn declare_in_child_shadows_parent() {
        let parent = Scope::new_global();
        parent.declare("x", Value::Int(1));

        let child = Scope::with_parent(parent.clone(), "child");
        child.declare("x", Value::Int(2));

        assert_eq!(child.get("x"), Some(Value::Int(2)));
        assert_eq!(parent.get("x"), Some(Value::Int(1)));
    }

    #[test]
    fn child_sees_parent_binding() {
        let parent = Scope::new_global();
        parent.declare("x", Value::Int(42));
        let child = Scope::with_parent(parent, "child");
        assert_eq!(child.get("x"), Some(Value::Int(42)));
    }

    #[test]
    fn assign_walks_to_defining_scope() {
        let parent = Scope::new_global();
        parent.declare("x", Value::Int(1));
        let child = Scope::with_parent(parent.clone(), "child");

        child.assign("x", Value::Int(99)).unwrap();

        assert_eq!(parent.get("x"), Some(Value::Int(99)));
        assert_eq!(child.get("x"), Some(Value::Int(99)));
    }

    #[test]
    fn assign_to_undeclared_name_errors() {
        let scope = Scope::new_global();
        let err = scope.assign("never_declared", Value::Int(1));
        assert!(err.is_err());
    }

    #[test]
    fn declare_inside_child_does_not_leak_to_parent() {
        let parent = Scope::new_global();
        let child = Scope::with_parent(parent.clone(), "child");
        child.declare("y", Value::Int(5));
        assert!(parent.get("y").is_none());
    }
}
