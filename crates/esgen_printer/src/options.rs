//! Printer configuration.

use crate::error::IndentStyleError;
use crate::indent::{Indentor, Spaces, Tabs};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Options for the printer.
#[derive(Debug, Clone)]
pub struct PrinterOptions {
    /// Indentation strategy applied at every nesting level.
    pub indent: Arc<dyn Indentor>,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent: Arc::new(Spaces::default()),
        }
    }
}

impl PrinterOptions {
    pub fn spaces(width: usize) -> Self {
        Self::with_indent(Spaces { width })
    }

    pub fn tabs(width: usize) -> Self {
        Self::with_indent(Tabs { width })
    }

    pub fn with_indent(indent: impl Indentor + 'static) -> Self {
        Self {
            indent: Arc::new(indent),
        }
    }
}

/// A serializable description of an indentation strategy, for loading from
/// configuration files.
///
/// Parses from `spaces`, `tabs`, `spaces:<width>` or `tabs:<width>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    Spaces(usize),
    Tabs(usize),
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(2)
    }
}

impl FromStr for IndentStyle {
    type Err = IndentStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || IndentStyleError { value: s.to_string() };
        let (name, width) = match s.trim().split_once(':') {
            Some((name, width)) => {
                let width = width.trim().parse::<usize>().map_err(|_| invalid())?;
                (name.trim(), Some(width))
            }
            None => (s.trim(), None),
        };
        match name.to_ascii_lowercase().as_str() {
            "spaces" => Ok(IndentStyle::Spaces(width.unwrap_or(2))),
            "tabs" => Ok(IndentStyle::Tabs(width.unwrap_or(1))),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentStyle::Spaces(width) => write!(f, "spaces:{}", width),
            IndentStyle::Tabs(width) => write!(f, "tabs:{}", width),
        }
    }
}

impl From<IndentStyle> for PrinterOptions {
    fn from(style: IndentStyle) -> Self {
        match style {
            IndentStyle::Spaces(width) => PrinterOptions::spaces(width),
            IndentStyle::Tabs(width) => PrinterOptions::tabs(width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_two_spaces() {
        assert_eq!(PrinterOptions::default().indent.unit(), "  ");
    }

    #[test]
    fn test_parse_indent_style() {
        assert_eq!("spaces".parse::<IndentStyle>().unwrap(), IndentStyle::Spaces(2));
        assert_eq!("spaces:4".parse::<IndentStyle>().unwrap(), IndentStyle::Spaces(4));
        assert_eq!("Tabs".parse::<IndentStyle>().unwrap(), IndentStyle::Tabs(1));
        assert_eq!("tabs:2".parse::<IndentStyle>().unwrap(), IndentStyle::Tabs(2));
        assert!("spaces:x".parse::<IndentStyle>().is_err());
        assert!("dots".parse::<IndentStyle>().is_err());
    }

    #[test]
    fn test_indent_style_display_round_trips() {
        for style in [IndentStyle::Spaces(3), IndentStyle::Tabs(1)] {
            assert_eq!(style.to_string().parse::<IndentStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_indent_style_json() {
        let style: IndentStyle = serde_json::from_str(r#"{"tabs":1}"#).unwrap();
        assert_eq!(style, IndentStyle::Tabs(1));
        assert_eq!(serde_json::to_string(&IndentStyle::Spaces(4)).unwrap(), r#"{"spaces":4}"#);
    }

    #[test]
    fn test_indent_style_into_options() {
        let options = PrinterOptions::from(IndentStyle::Tabs(1));
        assert_eq!(options.indent.unit(), "\t");
    }
}
