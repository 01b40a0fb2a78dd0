// ABOUTME: Route registry — maps a path to a captured body, not executed at registration

use std::collections::HashMap;

/// Keyed by a leading-`/` path string (spec §3.5). The body is raw source
/// lines, executed fresh on each request by the external HTTP adapter — it
/// is *not* an AST and is not run at `route ... end` registration time.
pub struct RouteRegistry {
    routes: HashMap<String, Vec<String>>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        RouteRegistry {
            routes: HashMap::new(),
        }
    }

    pub fn register(&mut self, path: String, body: Vec<String>) {
        self.routes.insert(path, body);
    }

    pub fn get(&self, path: &str) -> Option<&Vec<String>> {
        self.routes.get(path)
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Paths in registration-independent sorted order, used for the 404
    /// "index of known routes" body (spec §6.4).
    pub fn paths(&self) -> Vec<&String> {
        let mut paths: Vec<&String> = self.routes.keys().collect();
        paths.sort();
        paths
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_get_round_trips() {
        let mut routes = RouteRegistry::new();
        routes.register("/hello".to_string(), vec!["return \"hi\"".to_string()]);
        assert_eq!(routes.get("/hello").unwrap().len(), 1);
        assert!(routes.get("/missing").is_none());
    }

    #[test]
    fn paths_are_sorted() {
        let mut routes = RouteRegistry::new();
        routes.register("/b".to_string(), vec![]);
        routes.register("/a".to_string(), vec![]);
        assert_eq!(routes.paths(), vec!["/a", "/b"]);
    }
}
