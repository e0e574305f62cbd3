//! Warnings recorded during scanning and rendering.
//!
//! The transpiler never aborts on malformed input — it records what it had
//! to drop or repair and leaves reporting to the caller.

use std::fmt;

/// A warning recorded while transpiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Byte offset into the source, when the issue has one.
    pub offset: Option<usize>,
    /// Human-readable description of the issue.
    pub message: String,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            offset: None,
            message: message.into(),
        }
    }

    pub fn at(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset: Some(offset),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{} (byte {})", self.message, offset),
            None => write!(f, "{}", self.message),
        }
    }
}
