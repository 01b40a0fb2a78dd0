// ABOUTME: Module loader — load-once-per-path cache with cycle handling

use crate::value::Value;
use std::collections::HashMap;
use std::path::PathBuf;

/// Keyed by canonical absolute path (spec §3.4). A module is loaded at most
/// once; re-importing the same path returns the same exports `Value::Map`
/// object (spec §8 invariant 5 — module idempotence, same object identity).
pub struct ModuleLoader {
    exports: HashMap<PathBuf, Value>,
}

impl ModuleLoader {
    pub fn new() -> Self {
        ModuleLoader {
            exports: HashMap::new(),
        }
    }

    /// If `path` has already been registered (loaded or currently loading),
    /// returns its exports map. The record is registered *before* the module
    /// body executes, so a circular import observes the partially-populated
    /// exports map instead of re-entering the loader (spec §4.7 cycle
    /// handling, §9 "partial visibility is intentional but subtle").
    pub fn get(&self, path: &PathBuf) -> Option<Value> {
        self.exports.get(path).cloned()
    }

    /// Registers an empty exports map for `path` before the module body
    /// executes. Returns the (empty, to-be-populated-by-`export`) map.
    pub fn register(&mut self, path: PathBuf) -> Value {
        let exports = Value::map(Vec::new());
        self.exports.insert(path, exports.clone());
        exports
    }
}

impl Default for ModuleLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_same_path_twice_returns_same_object() {
        let mut loader = ModuleLoader::new();
        let path = PathBuf::from("/tmp/a.exo");
        let exports = loader.register(path.clone());
        if let Value::Map(rc) = &exports {
            rc.borrow_mut().push((Value::str("x"), Value::Int(1)));
        }

        let fetched = loader.get(&path).unwrap();
        match fetched {
            Value::Map(rc) => assert_eq!(rc.borrow().len(), 1),
            _ => panic!("expected map"),
        }
    }

    #[test]
    fn unregistered_path_is_none() {
        let loader = ModuleLoader::new();
        assert!(loader.get(&PathBuf::from("/tmp/missing.exo")).is_none());
    }
}
