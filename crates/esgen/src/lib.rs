//! esgen: build JavaScript syntax trees and print them as source text.
//!
//! A [`Generator`] accumulates top-level statements for one module and renders
//! them with a [`Printer`]. Tree types, literal constructors and printer
//! configuration are re-exported from the underlying crates.
//!
//! ```
//! use esgen::*;
//!
//! let mut generator = Generator::new();
//! generator.add_statement(ExpressionStatement::new(CallExpression::new(
//!     StaticMemberExpression::new(Identifier::new("console"), Identifier::new("log")),
//!     vec![string_literal("hi").into()],
//! )));
//! assert_eq!(generator.print().unwrap(), "console.log(\"hi\");");
//! ```

pub mod error;

pub use error::{Error, Result};

pub use esgen_ast as ast;
pub use esgen_ast::*;
pub use esgen_core::{Position, SourceLocation, TextRange};
pub use esgen_printer as printer;
pub use esgen_printer::{
    print_literal, IndentStyle, Indentor, PrintError, Printer, PrinterOptions, Spaces, Tabs,
};

/// A named module body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// Informational module name.
    pub name: Option<String>,
    pub body: Vec<StatementListItem>,
    pub range: Option<TextRange>,
}

impl Program {
    pub fn new(body: Vec<StatementListItem>) -> Self {
        Self {
            body,
            ..Default::default()
        }
    }
}

/// Accumulates top-level statements and prints them.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    module_name: Option<String>,
    statements: Vec<StatementListItem>,
    options: PrinterOptions,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PrinterOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Set the module name. It does not affect the output.
    pub fn module_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.module_name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.module_name.as_deref()
    }

    pub fn add_statement(&mut self, item: impl Into<StatementListItem>) -> &mut Self {
        self.statements.push(item.into());
        self
    }

    pub fn add_statements<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<StatementListItem>,
    {
        self.statements.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn statements(&self) -> &[StatementListItem] {
        &self.statements
    }

    pub fn options(&self) -> &PrinterOptions {
        &self.options
    }

    /// Render every statement in insertion order, joined by newlines.
    #[tracing::instrument(level = "trace", skip_all, fields(module = ?self.module_name))]
    pub fn print(&self) -> Result<String> {
        let printer = Printer::new(self.options.clone());
        Ok(printer.print_statements(&self.statements)?)
    }

    pub fn from_program(program: Program) -> Self {
        Self {
            module_name: program.name,
            statements: program.body,
            options: PrinterOptions::default(),
        }
    }

    pub fn into_program(self) -> Program {
        Program {
            name: self.module_name,
            body: self.statements,
            range: None,
        }
    }
}

impl From<Program> for Generator {
    fn from(program: Program) -> Self {
        Generator::from_program(program)
    }
}
