// ABOUTME: Structured error type for evaluation failures

use std::fmt;

// ===== Arity constant strings (mirrors common call shapes without allocating) =====
pub const ARITY_ONE: &str = "1";
pub const ARITY_TWO: &str = "2";
pub const ARITY_ONE_OR_TWO: &str = "1-2";
pub const ARITY_ONE_TO_THREE: &str = "1-3";
pub const ARITY_TWO_OR_THREE: &str = "2-3";

/// One of the eight error tags spec.md §7 names. These are tags on a single
/// structured error, not distinct error types — see DESIGN.md "Errors".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Name,
    Type,
    Arity,
    Arithmetic,
    Syntax,
    Recursion,
    Io,
    Import,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ErrorKind::Name => "NameError",
            ErrorKind::Type => "TypeError",
            ErrorKind::Arity => "ArityError",
            ErrorKind::Arithmetic => "ArithmeticError",
            ErrorKind::Syntax => "SyntaxError",
            ErrorKind::Recursion => "RecursionError",
            ErrorKind::Io => "IOError",
            ErrorKind::Import => "ImportError",
        };
        write!(f, "{}", tag)
    }
}

/// A structured error carrying everything spec §3.6 requires: message, an
/// optional source line, an optional file tag, optional offending-expression
/// context, and a copy of the call-stack snapshot at the point of failure.
#[derive(Debug, Clone)]
pub struct ExoError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: Option<usize>,
    pub file: Option<String>,
    pub context: Option<String>,
    pub stack: Vec<String>,
}

impl fmt::Display for ExoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        if let Some(file) = &self.file {
            write!(f, " in {}", file)?;
        }
        if let Some(context) = &self.context {
            write!(f, " [{}]", context)?;
        }
        if !self.stack.is_empty() {
            write!(f, "\n  call stack:")?;
            for frame in self.stack.iter().rev() {
                write!(f, "\n    at {}", frame)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ExoError {}

impl ExoError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ExoError {
            kind,
            message: message.into(),
            line: None,
            file: None,
            context: None,
            stack: Vec::new(),
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_stack(mut self, stack: Vec<String>) -> Self {
        self.stack = stack;
        self
    }

    pub fn name(message: impl Into<String>) -> Self {
        ExoError::new(ErrorKind::Name, message)
    }

    pub fn type_error(function: &str, expected: &str, actual: &str) -> Self {
        ExoError::new(
            ErrorKind::Type,
            format!("{}: expected {}, got {}", function, expected, actual),
        )
    }

    pub fn arity(function: &str, expected: impl Into<String>, actual: usize) -> Self {
        let expected = expected.into();
        let plural = if expected == "1" { "" } else { "s" };
        ExoError::new(
            ErrorKind::Arity,
            format!(
                "{}: expected {} argument{}, got {}",
                function, expected, plural, actual
            ),
        )
    }

    pub fn arithmetic(message: impl Into<String>) -> Self {
        ExoError::new(ErrorKind::Arithmetic, message)
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        ExoError::new(ErrorKind::Syntax, message)
    }

    pub fn recursion(depth: usize) -> Self {
        ExoError::new(
            ErrorKind::Recursion,
            format!("Recursion depth exceeded ({} frames)", depth),
        )
    }

    pub fn io(message: impl Into<String>) -> Self {
        ExoError::new(ErrorKind::Io, message)
    }

    pub fn import(message: impl Into<String>) -> Self {
        ExoError::new(ErrorKind::Import, message)
    }
}
