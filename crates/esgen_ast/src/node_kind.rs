//! NodeKind enum - the closed set of concrete node kinds in the tree.
//!
//! Every struct in [`crate::node`] and every literal value maps to exactly one
//! kind. Capability group membership is a static property of the kind, see
//! [`NodeKind::capabilities`].

use crate::types::Capabilities;

/// The kind of a concrete syntax tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum NodeKind {
    // ========================================================================
    // Identifiers & literals
    // ========================================================================
    Identifier,
    NullLiteral,
    UndefinedLiteral,
    StringLiteral,
    BooleanLiteral,
    NumberLiteral,
    BigDecimalLiteral,

    // ========================================================================
    // Expressions
    // ========================================================================
    ThisExpression,
    Super,
    ArrayExpression,
    ArrowFunctionExpression,
    AssignmentExpression,
    AwaitExpression,
    BinaryExpression,
    LogicalExpression,
    CallExpression,
    ChainExpression,
    ClassExpression,
    ComputedMemberExpression,
    ConditionalExpression,
    FunctionExpression,
    ImportExpression,
    MetaProperty,
    NewExpression,
    ObjectExpression,
    SequenceExpression,
    StaticMemberExpression,
    TaggedTemplateExpression,
    TemplateLiteral,
    TemplateElement,
    UnaryExpression,
    UpdateExpression,
    YieldExpression,

    // ========================================================================
    // Statements
    // ========================================================================
    BlockStatement,
    BreakStatement,
    ContinueStatement,
    DebuggerStatement,
    DoWhileStatement,
    EmptyStatement,
    ExpressionStatement,
    Directive,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    IfStatement,
    LabeledStatement,
    ReturnStatement,
    SwitchStatement,
    SwitchCase,
    ThrowStatement,
    TryStatement,
    CatchClause,
    WhileStatement,
    WithStatement,

    // ========================================================================
    // Declarations
    // ========================================================================
    ClassDeclaration,
    FunctionDeclaration,
    ImportDeclaration,
    VariableDeclaration,
    VariableDeclarator,
    ExportAllDeclaration,
    ExportDefaultDeclaration,
    ExportNamedDeclaration,
    ExportSpecifier,

    // ========================================================================
    // Classes, properties & patterns
    // ========================================================================
    ClassBody,
    MethodDefinition,
    PropertyDefinition,
    Property,
    PropertyPattern,
    ArrayPattern,
    ObjectPattern,
    AssignmentPattern,
    RestElement,
    SpreadElement,

    // ========================================================================
    // Import specifiers
    // ========================================================================
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    ImportSpecifier,
    NamedImport,
}

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: &'static [NodeKind] = &[
        NodeKind::Identifier,
        NodeKind::NullLiteral,
        NodeKind::UndefinedLiteral,
        NodeKind::StringLiteral,
        NodeKind::BooleanLiteral,
        NodeKind::NumberLiteral,
        NodeKind::BigDecimalLiteral,
        NodeKind::ThisExpression,
        NodeKind::Super,
        NodeKind::ArrayExpression,
        NodeKind::ArrowFunctionExpression,
        NodeKind::AssignmentExpression,
        NodeKind::AwaitExpression,
        NodeKind::BinaryExpression,
        NodeKind::LogicalExpression,
        NodeKind::CallExpression,
        NodeKind::ChainExpression,
        NodeKind::ClassExpression,
        NodeKind::ComputedMemberExpression,
        NodeKind::ConditionalExpression,
        NodeKind::FunctionExpression,
        NodeKind::ImportExpression,
        NodeKind::MetaProperty,
        NodeKind::NewExpression,
        NodeKind::ObjectExpression,
        NodeKind::SequenceExpression,
        NodeKind::StaticMemberExpression,
        NodeKind::TaggedTemplateExpression,
        NodeKind::TemplateLiteral,
        NodeKind::TemplateElement,
        NodeKind::UnaryExpression,
        NodeKind::UpdateExpression,
        NodeKind::YieldExpression,
        NodeKind::BlockStatement,
        NodeKind::BreakStatement,
        NodeKind::ContinueStatement,
        NodeKind::DebuggerStatement,
        NodeKind::DoWhileStatement,
        NodeKind::EmptyStatement,
        NodeKind::ExpressionStatement,
        NodeKind::Directive,
        NodeKind::ForStatement,
        NodeKind::ForInStatement,
        NodeKind::ForOfStatement,
        NodeKind::IfStatement,
        NodeKind::LabeledStatement,
        NodeKind::ReturnStatement,
        NodeKind::SwitchStatement,
        NodeKind::SwitchCase,
        NodeKind::ThrowStatement,
        NodeKind::TryStatement,
        NodeKind::CatchClause,
        NodeKind::WhileStatement,
        NodeKind::WithStatement,
        NodeKind::ClassDeclaration,
        NodeKind::FunctionDeclaration,
        NodeKind::ImportDeclaration,
        NodeKind::VariableDeclaration,
        NodeKind::VariableDeclarator,
        NodeKind::ExportAllDeclaration,
        NodeKind::ExportDefaultDeclaration,
        NodeKind::ExportNamedDeclaration,
        NodeKind::ExportSpecifier,
        NodeKind::ClassBody,
        NodeKind::MethodDefinition,
        NodeKind::PropertyDefinition,
        NodeKind::Property,
        NodeKind::PropertyPattern,
        NodeKind::ArrayPattern,
        NodeKind::ObjectPattern,
        NodeKind::AssignmentPattern,
        NodeKind::RestElement,
        NodeKind::SpreadElement,
        NodeKind::ImportDefaultSpecifier,
        NodeKind::ImportNamespaceSpecifier,
        NodeKind::ImportSpecifier,
        NodeKind::NamedImport,
    ];

    /// The static set of capability groups this kind belongs to.
    pub fn capabilities(self) -> Capabilities {
        use Capabilities as C;
        match self {
            NodeKind::Identifier => {
                C::EXPRESSION_LIKE
                    | C::BINDING_IDENTIFIER_OR_PATTERN
                    | C::ARRAY_PATTERN_ELEMENT
                    | C::FUNCTION_PARAMETER
                    | C::PROPERTY_KEY
                    | C::PROPERTY_VALUE
            }

            NodeKind::NullLiteral
            | NodeKind::UndefinedLiteral
            | NodeKind::StringLiteral
            | NodeKind::BooleanLiteral
            | NodeKind::NumberLiteral
            | NodeKind::BigDecimalLiteral => C::EXPRESSION_LIKE | C::LITERAL | C::PROPERTY_KEY,

            NodeKind::CallExpression
            | NodeKind::ComputedMemberExpression
            | NodeKind::StaticMemberExpression => C::EXPRESSION_LIKE | C::CHAIN_ELEMENT,

            NodeKind::FunctionExpression => C::EXPRESSION_LIKE | C::PROPERTY_VALUE,

            NodeKind::ThisExpression
            | NodeKind::Super
            | NodeKind::ArrayExpression
            | NodeKind::ArrowFunctionExpression
            | NodeKind::AssignmentExpression
            | NodeKind::AwaitExpression
            | NodeKind::BinaryExpression
            | NodeKind::LogicalExpression
            | NodeKind::ChainExpression
            | NodeKind::ClassExpression
            | NodeKind::ConditionalExpression
            | NodeKind::ImportExpression
            | NodeKind::MetaProperty
            | NodeKind::NewExpression
            | NodeKind::ObjectExpression
            | NodeKind::SequenceExpression
            | NodeKind::TaggedTemplateExpression
            | NodeKind::TemplateLiteral
            | NodeKind::UnaryExpression
            | NodeKind::UpdateExpression
            | NodeKind::YieldExpression => C::EXPRESSION_LIKE,

            NodeKind::BlockStatement
            | NodeKind::BreakStatement
            | NodeKind::ContinueStatement
            | NodeKind::DebuggerStatement
            | NodeKind::DoWhileStatement
            | NodeKind::EmptyStatement
            | NodeKind::ExpressionStatement
            | NodeKind::Directive
            | NodeKind::ForStatement
            | NodeKind::ForInStatement
            | NodeKind::ForOfStatement
            | NodeKind::IfStatement
            | NodeKind::LabeledStatement
            | NodeKind::ReturnStatement
            | NodeKind::SwitchStatement
            | NodeKind::ThrowStatement
            | NodeKind::TryStatement
            | NodeKind::WhileStatement
            | NodeKind::WithStatement => C::STATEMENT_LIKE,

            NodeKind::ClassDeclaration | NodeKind::FunctionDeclaration => {
                C::DECLARATION_LIKE
                    | C::EXPORTABLE_DEFAULT_DECLARATION
                    | C::EXPORTABLE_NAMED_DECLARATION
            }
            NodeKind::VariableDeclaration => C::DECLARATION_LIKE | C::EXPORTABLE_NAMED_DECLARATION,
            NodeKind::ImportDeclaration => C::DECLARATION_LIKE,
            NodeKind::ExportAllDeclaration
            | NodeKind::ExportDefaultDeclaration
            | NodeKind::ExportNamedDeclaration => C::DECLARATION_LIKE | C::EXPORT_DECLARATION,

            NodeKind::MethodDefinition | NodeKind::PropertyDefinition => C::CLASS_PROPERTY,
            NodeKind::Property => C::OBJECT_EXPRESSION_PROPERTY,
            NodeKind::PropertyPattern => C::OBJECT_PATTERN_PROPERTY,
            NodeKind::ArrayPattern | NodeKind::ObjectPattern => {
                C::BINDING_PATTERN
                    | C::BINDING_IDENTIFIER_OR_PATTERN
                    | C::ARRAY_PATTERN_ELEMENT
                    | C::FUNCTION_PARAMETER
                    | C::PROPERTY_VALUE
            }
            NodeKind::AssignmentPattern => {
                C::ARRAY_PATTERN_ELEMENT | C::FUNCTION_PARAMETER | C::PROPERTY_VALUE
            }
            NodeKind::RestElement => {
                C::ARRAY_PATTERN_ELEMENT | C::OBJECT_PATTERN_PROPERTY | C::FUNCTION_PARAMETER
            }
            NodeKind::SpreadElement => {
                C::ARGUMENT_LIST_ELEMENT | C::ARRAY_EXPRESSION_ELEMENT | C::OBJECT_EXPRESSION_PROPERTY
            }

            NodeKind::ImportDefaultSpecifier
            | NodeKind::ImportNamespaceSpecifier
            | NodeKind::ImportSpecifier => C::IMPORT_DECLARATION_SPECIFIER,

            // Structural parts that only appear inside their parent node.
            NodeKind::TemplateElement
            | NodeKind::SwitchCase
            | NodeKind::CatchClause
            | NodeKind::VariableDeclarator
            | NodeKind::ExportSpecifier
            | NodeKind::ClassBody
            | NodeKind::NamedImport => C::NONE,
        }
    }

    /// Whether this kind is an expression.
    #[inline]
    pub fn is_expression(self) -> bool {
        self.capabilities().contains(Capabilities::EXPRESSION)
    }

    /// Whether this kind is a statement.
    #[inline]
    pub fn is_statement(self) -> bool {
        self.capabilities().contains(Capabilities::STATEMENT)
    }

    /// Whether this kind is a declaration.
    #[inline]
    pub fn is_declaration(self) -> bool {
        self.capabilities().contains(Capabilities::DECLARATION)
    }

    /// Whether this kind is a literal value.
    #[inline]
    pub fn is_literal(self) -> bool {
        self.capabilities().contains(Capabilities::LITERAL)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_list_item_is_union_of_statement_and_declaration() {
        for &kind in NodeKind::ALL {
            let caps = kind.capabilities();
            let expected = caps.intersects(Capabilities::STATEMENT | Capabilities::DECLARATION);
            assert_eq!(caps.contains(Capabilities::STATEMENT_LIST_ITEM), expected, "{kind}");
        }
    }

    #[test]
    fn test_literals_are_expressions() {
        for &kind in NodeKind::ALL.iter().filter(|k| k.is_literal()) {
            assert!(kind.is_expression(), "{kind}");
            assert!(kind.capabilities().contains(Capabilities::PROPERTY_KEY), "{kind}");
        }
    }

    #[test]
    fn test_expressions_are_arguments_and_array_elements() {
        for &kind in NodeKind::ALL.iter().filter(|k| k.is_expression()) {
            let caps = kind.capabilities();
            assert!(caps.contains(Capabilities::ARGUMENT_LIST_ELEMENT), "{kind}");
            assert!(caps.contains(Capabilities::ARRAY_EXPRESSION_ELEMENT), "{kind}");
            assert!(caps.contains(Capabilities::EXPORTABLE_DEFAULT_DECLARATION), "{kind}");
        }
    }

    #[test]
    fn test_chain_elements() {
        let chain: Vec<_> = NodeKind::ALL
            .iter()
            .filter(|k| k.capabilities().contains(Capabilities::CHAIN_ELEMENT))
            .copied()
            .collect();
        assert_eq!(
            chain,
            vec![
                NodeKind::CallExpression,
                NodeKind::ComputedMemberExpression,
                NodeKind::StaticMemberExpression,
            ]
        );
    }

    #[test]
    fn test_all_is_exhaustive() {
        assert_eq!(NodeKind::ALL.len(), NodeKind::NamedImport as usize + 1);
        for (i, kind) in NodeKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
    }
}
