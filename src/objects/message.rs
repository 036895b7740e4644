use serde::Serialize;
use std::fmt;

/// A commit message, one entry per line with the four-space indent removed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    lines: Vec<String>,
}

impl Message {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// First line, or empty
    pub fn short(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    pub fn full(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full())
    }
}
