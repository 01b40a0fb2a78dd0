// ABOUTME: Bundles the process-wide mutable state every evaluation entry point shares

use crate::env::Scope;
use crate::error::ExoError;
use crate::modules::ModuleLoader;
use crate::routes::RouteRegistry;
use crate::sandbox::Sandbox;
use crate::value::{BuiltinFn, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

/// Hard cap on call-stack depth (spec §4.6).
pub const MAX_RECURSION_DEPTH: usize = 1000;

/// Spec §9 "Global mutable state": current scope, functions (procedures live
/// as values in scope, see DESIGN.md), modules, routes, call stack — bundled
/// into one context value passed explicitly through every evaluation entry
/// point, rather than stashed in statics. The HTTP adapter wraps this in a
/// mutex and acquires it before dispatching a route body (spec §5).
pub struct Interpreter {
    pub global: Rc<Scope>,
    pub builtins: HashMap<String, BuiltinFn>,
    pub modules: ModuleLoader,
    pub routes: RouteRegistry,
    pub call_stack: Vec<String>,
    pub sandbox: Sandbox,
    /// Directory imports are resolved relative to; pushed/popped around a
    /// nested `import` the same way the call stack is pushed/popped around a
    /// nested call (spec §4.7.2).
    pub current_dir: PathBuf,
    pub current_file: Option<String>,
    /// Exports map of the module currently being loaded, if any (innermost
    /// last). `export()` writes into `.last()` — spec §4.7 step 4.
    pub export_stack: Vec<Value>,
}

impl Interpreter {
    pub fn new(sandbox: Sandbox, current_dir: PathBuf) -> Self {
        let global = Scope::new_global();
        let mut builtins = HashMap::new();
        crate::builtins::register_builtins(&mut builtins);
        Interpreter {
            global,
            builtins,
            modules: ModuleLoader::new(),
            routes: RouteRegistry::new(),
            call_stack: Vec::new(),
            sandbox,
            current_dir,
            current_file: None,
            export_stack: Vec::new(),
        }
    }

    /// Pushes a call-stack frame `"name(arg0, arg1, ...)"` with each argument
    /// stringified and truncated to ~20 characters (spec §4.6 step 1), and
    /// enforces the recursion cap (step 2).
    pub fn push_frame(&mut self, name: &str, args: &[Value]) -> Result<(), ExoError> {
        if self.call_stack.len() >= MAX_RECURSION_DEPTH {
            return Err(ExoError::recursion(self.call_stack.len()).with_stack(self.call_stack.clone()));
        }
        let rendered = format!(
            "{}({})",
            name,
            args.iter().map(Value::snapshot).collect::<Vec<_>>().join(", ")
        );
        self.call_stack.push(rendered);
        Ok(())
    }

    pub fn pop_frame(&mut self) {
        self.call_stack.pop();
    }

    pub fn stack_snapshot(&self) -> Vec<String> {
        self.call_stack.clone()
    }

    pub fn error(&self, err: ExoError) -> ExoError {
        let mut err = err.with_stack(self.stack_snapshot());
        if let Some(file) = &self.current_file {
            err = err.with_file(file.clone());
        }
        err
    }
}
