// ABOUTME: Configuration for sandboxed I/O and the HTTP adapter

use std::path::PathBuf;

pub const VERSION: &str = "0.1.0";
pub const WELCOME_MESSAGE: &str = "Exo";
pub const WELCOME_SUBTITLE: &str = "A bilingual English/Arabic scripting language";

/// Filesystem sandbox configuration (spec §5 "Resource model", §12).
#[derive(Debug, Clone)]
pub struct SandboxConfig {
    pub allowed_paths: Vec<PathBuf>,
    pub max_file_size: usize,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            allowed_paths: vec![PathBuf::from("./data"), PathBuf::from("./scripts")],
            max_file_size: 10 * 1024 * 1024,
        }
    }
}

/// HTTP adapter configuration (spec §4.8, §6.4).
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { port: 8000 }
    }
}
