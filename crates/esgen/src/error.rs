//! Unified error type.

use esgen_ast::ConstructionError;
use esgen_printer::{IndentStyleError, PrintError};
use miette::Diagnostic;
use thiserror::Error;

/// All errors that can be produced while building or printing a module.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    /// A node could not be constructed or narrowed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Construction(#[from] ConstructionError),

    /// The tree could not be rendered.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Print(#[from] PrintError),

    /// An indentation style string could not be parsed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    IndentStyle(#[from] IndentStyleError),
}

/// Convenient `Result` alias for fallible generator operations.
pub type Result<T> = std::result::Result<T, Error>;
