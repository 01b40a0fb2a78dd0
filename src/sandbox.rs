// ABOUTME: Sandboxed filesystem module — safe host-service access via cap-std capability directories

use crate::config::SandboxConfig;
use cap_std::fs::Dir;

/// Error type for sandbox operations. Surfaced to the interpreter as an
/// `ExoError` of kind `Io` (spec §4.8 "Host services").
#[derive(Debug, Clone)]
pub enum SandboxError {
    PathNotAllowed(String),
    FileNotFound(String),
    FileTooLarge(String),
    IoError(String),
}

impl std::fmt::Display for SandboxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SandboxError::PathNotAllowed(path) => {
                write!(f, "Access denied: {} is not in allowed paths", path)
            }
            SandboxError::FileNotFound(path) => write!(f, "File not found: {}", path),
            SandboxError::FileTooLarge(msg) => write!(f, "File too large: {}", msg),
            SandboxError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for SandboxError {}

/// Sandbox for safe filesystem access. Every built-in that touches the host
/// filesystem (`readFile`, `writeFile`, `fileExists`, `deleteFile`) goes
/// through here instead of calling `std::fs` directly (spec §5, §9 "opaque
/// host services").
pub struct Sandbox {
    fs_roots: Vec<Dir>,
    config: SandboxConfig,
}

impl Sandbox {
    pub fn new(config: SandboxConfig) -> Result<Self, SandboxError> {
        let mut fs_roots = Vec::new();
        for path in &config.allowed_paths {
            std::fs::create_dir_all(path)
                .map_err(|e| SandboxError::IoError(format!("Cannot create {}: {}", path.display(), e)))?;
            let dir = Dir::open_ambient_dir(path, cap_std::ambient_authority())
                .map_err(|e| SandboxError::IoError(format!("Cannot open {}: {}", path.display(), e)))?;
            fs_roots.push(dir);
        }
        Ok(Self { fs_roots, config })
    }

    /// A sandbox rooted at the OS temp directory, for unit tests that need a
    /// real `Sandbox` but don't care which directory it serves.
    pub fn test_sandbox() -> Self {
        let dir = std::env::temp_dir().join(format!("exo-test-{}", std::process::id()));
        Sandbox::new(SandboxConfig {
            allowed_paths: vec![dir],
            max_file_size: 10 * 1024 * 1024,
        })
        .expect("test sandbox directory is always creatable")
    }

    fn validate(path: &str) -> Result<(), SandboxError> {
        if path.starts_with('/') || path.starts_with('\\') {
            return Err(SandboxError::PathNotAllowed(path.to_string()));
        }
        if path.contains("..") {
            return Err(SandboxError::PathNotAllowed(path.to_string()));
        }
        Ok(())
    }

    /// Reads try every root in order; writes and deletes always use the
    /// first root (spec §5 "first allowed path is the write target").
    fn find_root_for_path(&self, user_path: &str, write_mode: bool) -> Result<&Dir, SandboxError> {
        if write_mode {
            return self.fs_roots.first().ok_or_else(|| SandboxError::PathNotAllowed(user_path.to_string()));
        }
        for root in &self.fs_roots {
            if root.metadata(user_path).is_ok() {
                return Ok(root);
            }
        }
        self.fs_roots.first().ok_or_else(|| SandboxError::PathNotAllowed(user_path.to_string()))
    }

    pub fn read_file(&self, path: &str) -> Result<String, SandboxError> {
        Self::validate(path)?;
        let root = self.find_root_for_path(path, false)?;
        root.read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SandboxError::FileNotFound(path.to_string())
            } else {
                SandboxError::IoError(format!("Cannot read {}: {}", path, e))
            }
        })
    }

    pub fn write_file(&self, path: &str, contents: &str) -> Result<(), SandboxError> {
        Self::validate(path)?;
        if contents.len() > self.config.max_file_size {
            return Err(SandboxError::FileTooLarge(format!(
                "{} bytes exceeds limit of {} bytes",
                contents.len(),
                self.config.max_file_size
            )));
        }
        let root = self.find_root_for_path(path, true)?;
        root.write(path, contents)
            .map_err(|e| SandboxError::IoError(format!("Cannot write {}: {}", path, e)))
    }

    pub fn file_exists(&self, path: &str) -> Result<bool, SandboxError> {
        Self::validate(path)?;
        let root = self.find_root_for_path(path, false)?;
        match root.metadata(path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(SandboxError::IoError(format!("Cannot check {}: {}", path, e))),
        }
    }

    /// Removes a file from the first allowed root (spec §4.5 `deleteFile`).
    pub fn delete_file(&self, path: &str) -> Result<(), SandboxError> {
        Self::validate(path)?;
        let root = self.find_root_for_path(path, true)?;
        root.remove_file(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SandboxError::FileNotFound(path.to_string())
            } else {
                SandboxError::IoError(format!("Cannot delete {}: {}", path, e))
            }
        })
    }

    pub fn list_files(&self, dir: &str) -> Result<Vec<String>, SandboxError> {
        Self::validate(dir)?;
        let root = self.find_root_for_path(dir, false)?;
        root.read_dir(dir)
            .map_err(|e| SandboxError::IoError(format!("Cannot list {}: {}", dir, e)))
            .and_then(|entries| {
                entries
                    .map(|entry| {
                        entry
                            .map_err(|e| SandboxError::IoError(e.to_string()))
                            .and_then(|e| {
                                e.file_name()
                                    .to_str()
                                    .map(|s| s.to_string())
                                    .ok_or_else(|| SandboxError::IoError("Invalid UTF-8 in filename".to_string()))
                            })
                    })
                    .collect()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use std::path::PathBuf;

    fn create_test_sandbox() -> (Sandbox, PathBuf) {
        let test_dir = PathBuf::from("./test_sandbox_temp");
        let _ = fs::remove_dir_all(&test_dir);
        fs::create_dir_all(&test_dir).unwrap();
        let config = SandboxConfig {
            allowed_paths: vec![test_dir.clone()],
            ..Default::default()
        };
        (Sandbox::new(config).unwrap(), test_dir)
    }

    fn cleanup(test_dir: &PathBuf) {
        let _ = fs::remove_dir_all(test_dir);
    }

    #[test]
    #[serial]
    fn read_file_round_trips_through_write_file() {
        let (sandbox, dir) = create_test_sandbox();
        sandbox.write_file("output.txt", "test data").unwrap();
        assert_eq!(sandbox.read_file("output.txt").unwrap(), "test data");
        cleanup(&dir);
    }

    #[test]
    #[serial]
    fn file_exists_reflects_deletion() {
        let (sandbox, dir) = create_test_sandbox();
        fs::write(dir.join("exists.txt"), "data").unwrap();
        assert!(sandbox.file_exists("exists.txt").unwrap());
        sandbox.delete_file("exists.txt").unwrap();
        assert!(!sandbox.file_exists("exists.txt").unwrap());
        cleanup(&dir);
    }

    #[test]
    #[serial]
    fn path_traversal_is_rejected() {
        let (sandbox, dir) = create_test_sandbox();
        let result = sandbox.read_file("../../../etc/passwd");
        assert!(matches!(result, Err(SandboxError::PathNotAllowed(_))));
        cleanup(&dir);
    }

    #[test]
    #[serial]
    fn absolute_path_is_rejected() {
        let (sandbox, dir) = create_test_sandbox();
        let result = sandbox.read_file("/etc/passwd");
        assert!(matches!(result, Err(SandboxError::PathNotAllowed(_))));
        cleanup(&dir);
    }

    #[test]
    #[serial]
    fn write_over_size_limit_is_rejected() {
        let test_dir = PathBuf::from("./test_sandbox_temp_size");
        let _ = fs::remove_dir_all(&test_dir);
        fs::create_dir_all(&test_dir).unwrap();
        let config = SandboxConfig {
            allowed_paths: vec![test_dir.clone()],
            max_file_size: 4,
        };
        let sandbox = Sandbox::new(config).unwrap();
        let result = sandbox.write_file("big.txt", "too much data");
        assert!(matches!(result, Err(SandboxError::FileTooLarge(_))));
        cleanup(&test_dir);
    }

    #[test]
    #[serial]
    fn list_files_reports_created_files() {
        let (sandbox, dir) = create_test_sandbox();
        fs::write(dir.join("file1.txt"), "data1").unwrap();
        fs::write(dir.join("file2.txt"), "data2").unwrap();
        let files = sandbox.list_files(".").unwrap();
        assert!(files.contains(&"file1.txt".to_string()));
        assert!(files.contains(&"file2.txt".to_string()));
        cleanup(&dir);
    }
}
