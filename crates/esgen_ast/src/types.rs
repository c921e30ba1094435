//! Flag types and operator enumerations for the AST.
//!
//! Operators are closed enumerations; there is no way to put free-form
//! operator text into a tree.

use std::fmt;

bitflags::bitflags! {
    /// Capability groups a node kind belongs to. A kind may belong to several.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        const NONE                           = 0;
        const EXPRESSION                     = 1 << 0;
        const STATEMENT                      = 1 << 1;
        const DECLARATION                    = 1 << 2;
        const STATEMENT_LIST_ITEM            = 1 << 3;
        const LITERAL                        = 1 << 4;
        const BINDING_PATTERN                = 1 << 5;
        const BINDING_IDENTIFIER_OR_PATTERN  = 1 << 6;
        const ARGUMENT_LIST_ELEMENT          = 1 << 7;
        const ARRAY_EXPRESSION_ELEMENT       = 1 << 8;
        const ARRAY_PATTERN_ELEMENT          = 1 << 9;
        const FUNCTION_PARAMETER             = 1 << 10;
        const PROPERTY_KEY                   = 1 << 11;
        const PROPERTY_VALUE                 = 1 << 12;
        const OBJECT_EXPRESSION_PROPERTY     = 1 << 13;
        const OBJECT_PATTERN_PROPERTY        = 1 << 14;
        const IMPORT_DECLARATION_SPECIFIER   = 1 << 15;
        const EXPORTABLE_DEFAULT_DECLARATION = 1 << 16;
        const EXPORTABLE_NAMED_DECLARATION   = 1 << 17;
        const CHAIN_ELEMENT                  = 1 << 18;
        const CLASS_PROPERTY                 = 1 << 19;
        const EXPORT_DECLARATION             = 1 << 20;

        /// Every expression can also be an argument, an array element and a default export.
        const EXPRESSION_LIKE = Self::EXPRESSION.bits()
            | Self::ARGUMENT_LIST_ELEMENT.bits()
            | Self::ARRAY_EXPRESSION_ELEMENT.bits()
            | Self::EXPORTABLE_DEFAULT_DECLARATION.bits();
        const STATEMENT_LIKE = Self::STATEMENT.bits() | Self::STATEMENT_LIST_ITEM.bits();
        const DECLARATION_LIKE = Self::DECLARATION.bits() | Self::STATEMENT_LIST_ITEM.bits();
    }
}

/// Which keyword prefix a function-like node carries. The three are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FunctionType {
    #[default]
    Normal,
    Async,
    Generator,
}

/// `const`, `let` or `var`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Const,
    Let,
    Var,
}

impl VariableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Const => "const",
            VariableKind::Let => "let",
            VariableKind::Var => "var",
        }
    }
}

/// The flavour of a class method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MethodKind {
    #[default]
    Method,
    Constructor,
    Get,
    Set,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Exponent,
    Divide,
    Modulus,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    ShiftLeft,
    ShiftRight,
    ZeroFillShiftRight,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    InstanceOf,
    In,
}

impl BinaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Exponent => "**",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulus => "%",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::BitwiseXor => "^",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::ZeroFillShiftRight => ">>>",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::StrictEqual => "===",
            BinaryOperator::StrictNotEqual => "!==",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::InstanceOf => "instanceof",
            BinaryOperator::In => "in",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    Or,
    And,
    NullishCoalescing,
}

impl LogicalOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOperator::Or => "||",
            LogicalOperator::And => "&&",
            LogicalOperator::NullishCoalescing => "??",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ModulusAssign,
    ExponentAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
    ZeroFillShiftRightAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,
    AndAssign,
    OrAssign,
    NullishAssign,
}

impl AssignmentOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubtractAssign => "-=",
            AssignmentOperator::MultiplyAssign => "*=",
            AssignmentOperator::DivideAssign => "/=",
            AssignmentOperator::ModulusAssign => "%=",
            AssignmentOperator::ExponentAssign => "**=",
            AssignmentOperator::ShiftLeftAssign => "<<=",
            AssignmentOperator::ShiftRightAssign => ">>=",
            AssignmentOperator::ZeroFillShiftRightAssign => ">>>=",
            AssignmentOperator::BitwiseAndAssign => "&=",
            AssignmentOperator::BitwiseOrAssign => "|=",
            AssignmentOperator::BitwiseXorAssign => "^=",
            AssignmentOperator::AndAssign => "&&=",
            AssignmentOperator::OrAssign => "||=",
            AssignmentOperator::NullishAssign => "??=",
        }
    }
}

/// Unary operators, each spelled as a (prefix, suffix) pair around the operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
    BitwiseNot,
    TypeOf,
    Void,
    Delete,
    IncrementPrefix,
    IncrementPostfix,
    DecrementPrefix,
    DecrementPostfix,
}

impl UnaryOperator {
    /// The text placed before and after the operand.
    pub fn affixes(self) -> (&'static str, &'static str) {
        match self {
            UnaryOperator::Plus => ("+", ""),
            UnaryOperator::Minus => ("-", ""),
            UnaryOperator::Not => ("!", ""),
            UnaryOperator::BitwiseNot => ("~", ""),
            UnaryOperator::TypeOf => ("typeof ", ""),
            UnaryOperator::Void => ("void ", ""),
            UnaryOperator::Delete => ("delete ", ""),
            UnaryOperator::IncrementPrefix => ("++", ""),
            UnaryOperator::IncrementPostfix => ("", "++"),
            UnaryOperator::DecrementPrefix => ("--", ""),
            UnaryOperator::DecrementPostfix => ("", "--"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

impl UpdateOperator {
    /// The (prefix, suffix) pair for this operator in prefix or postfix position.
    pub fn affixes(self, prefix: bool) -> (&'static str, &'static str) {
        let op = match self {
            UpdateOperator::Increment => "++",
            UpdateOperator::Decrement => "--",
        };
        if prefix { (op, "") } else { ("", op) }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display_as_str!(VariableKind, BinaryOperator, LogicalOperator, AssignmentOperator);
