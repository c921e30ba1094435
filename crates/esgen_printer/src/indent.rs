//! Indentation strategies.

use std::fmt;

/// The unit of nesting offset applied to child text.
///
/// Implementations only choose the unit; splitting and prefixing lines is
/// shared.
pub trait Indentor: fmt::Debug + Send + Sync {
    /// The text prepended to each line for one level of nesting.
    fn unit(&self) -> String;

    /// Prefix every line of `text` with one unit.
    fn indent(&self, text: &str) -> String {
        let unit = self.unit();
        let mut out = String::with_capacity(text.len() + unit.len());
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&unit);
            out.push_str(line);
        }
        out
    }

    /// Indent each element of an already-split sequence, without joining.
    fn indent_lines(&self, lines: Vec<String>) -> Vec<String> {
        lines.into_iter().map(|line| self.indent(&line)).collect()
    }
}

/// Indent with `width` spaces per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spaces {
    pub width: usize,
}

impl Default for Spaces {
    fn default() -> Self {
        Self { width: 2 }
    }
}

impl Indentor for Spaces {
    fn unit(&self) -> String {
        " ".repeat(self.width)
    }
}

/// Indent with `width` tab characters per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tabs {
    pub width: usize,
}

impl Default for Tabs {
    fn default() -> Self {
        Self { width: 1 }
    }
}

impl Indentor for Tabs {
    fn unit(&self) -> String {
        "\t".repeat(self.width)
    }
}
