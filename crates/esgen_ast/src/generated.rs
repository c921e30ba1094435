//! Macro-generated node plumbing.
//!
//! Kind/data accessors for every node, `From` impls that place a node into the
//! groups it belongs to, and `TryFrom` impls that narrow one group into another.

use crate::error::ConstructionError;
use crate::node::*;
use crate::node_kind::NodeKind;
use crate::types::Capabilities;
use esgen_core::text::TextRange;

/// Common accessors for every node and group.
pub trait Node {
    fn kind(&self) -> NodeKind;

    /// Position metadata. Literals are shared values and carry none.
    fn data(&self) -> Option<&NodeData>;

    fn range(&self) -> Option<TextRange> {
        self.data().and_then(|d| d.range)
    }
}

/// A closed set of node kinds permitted in some slot of the tree.
pub trait CapabilityGroup: Node {
    const NAME: &'static str;
    const CAPABILITY: Capabilities;

    /// Whether the held node's kind is statically a member of this group.
    fn is_member(&self) -> bool {
        self.kind().capabilities().contains(Self::CAPABILITY)
    }
}

// ============================================================================
// Concrete nodes
// ============================================================================

macro_rules! impl_node {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Node for $ty {
                #[inline]
                fn kind(&self) -> NodeKind {
                    NodeKind::$ty
                }

                #[inline]
                fn data(&self) -> Option<&NodeData> {
                    Some(&self.data)
                }
            }
        )*
    };
}

impl_node!(
    Identifier,
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
    ClassDeclaration,
    ClassBody,
    MethodDefinition,
    PropertyDefinition,
    FunctionDeclaration,
    ImportDeclaration,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    ImportSpecifier,
    NamedImport,
    VariableDeclaration,
    VariableDeclarator,
    ExportAllDeclaration,
    ExportDefaultDeclaration,
    ExportNamedDeclaration,
    ExportSpecifier,
    Property,
    PropertyPattern,
    ArrayPattern,
    ObjectPattern,
    AssignmentPattern,
    RestElement,
    SpreadElement,
);

impl Node for Literal {
    fn kind(&self) -> NodeKind {
        match self {
            Literal::Null => NodeKind::NullLiteral,
            Literal::Undefined => NodeKind::UndefinedLiteral,
            Literal::String(_) => NodeKind::StringLiteral,
            Literal::Boolean(_) => NodeKind::BooleanLiteral,
            Literal::Number(_) => NodeKind::NumberLiteral,
            Literal::BigDecimal(_) => NodeKind::BigDecimalLiteral,
        }
    }

    fn data(&self) -> Option<&NodeData> {
        None
    }
}

// ============================================================================
// Group enums
// ============================================================================

/// Delegating `Node` impl plus one `From` impl per variant.
macro_rules! node_enum {
    ($group:ident { $($variant:ident($ty:ty)),* $(,)? }) => {
        impl Node for $group {
            fn kind(&self) -> NodeKind {
                match self {
                    $($group::$variant(n) => n.kind(),)*
                }
            }

            fn data(&self) -> Option<&NodeData> {
                match self {
                    $($group::$variant(n) => n.data(),)*
                }
            }
        }

        $(
            impl From<$ty> for $group {
                #[inline]
                fn from(node: $ty) -> Self {
                    $group::$variant(node)
                }
            }
        )*
    };
}

macro_rules! capability_group {
    ($($group:ident => $cap:ident),* $(,)?) => {
        $(
            impl CapabilityGroup for $group {
                const NAME: &'static str = stringify!($group);
                const CAPABILITY: Capabilities = Capabilities::$cap;
            }
        )*
    };
}

/// `From` impls that reach an outer group through an inner one.
macro_rules! lift {
    ($outer:ident via $inner:ident: $($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for $outer {
                #[inline]
                fn from(node: $ty) -> Self {
                    $outer::from($inner::from(node))
                }
            }
        )*
    };
}

/// `TryFrom` impls that narrow one group into another.
macro_rules! narrow {
    ($from:ident => $to:ident { $($fv:ident => $tv:ident),* $(,)? }) => {
        impl TryFrom<$from> for $to {
            type Error = ConstructionError;

            fn try_from(node: $from) -> Result<Self, Self::Error> {
                match node {
                    $($from::$fv(n) => Ok($to::$tv(n)),)*
                    other => Err(ConstructionError::NotInGroup {
                        kind: other.kind(),
                        group: <$to as CapabilityGroup>::NAME,
                    }),
                }
            }
        }
    };
}

/// Invokes `$mac!` with the given prefix followed by every expression type.
macro_rules! with_expression_types {
    ($mac:ident!($($prefix:tt)*)) => {
        $mac!($($prefix)*
            Identifier,
            Literal,
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
            UnaryExpression,
            UpdateExpression,
            YieldExpression,
        );
    };
}

node_enum!(Expression {
    Identifier(Identifier),
    Literal(Literal),
    This(ThisExpression),
    Super(Super),
    Array(ArrayExpression),
    ArrowFunction(ArrowFunctionExpression),
    Assignment(AssignmentExpression),
    Await(AwaitExpression),
    Binary(BinaryExpression),
    Logical(LogicalExpression),
    Call(CallExpression),
    Chain(ChainExpression),
    Class(ClassExpression),
    ComputedMember(ComputedMemberExpression),
    Conditional(ConditionalExpression),
    Function(FunctionExpression),
    Import(ImportExpression),
    MetaProperty(MetaProperty),
    New(NewExpression),
    Object(ObjectExpression),
    Sequence(SequenceExpression),
    StaticMember(StaticMemberExpression),
    TaggedTemplate(TaggedTemplateExpression),
    TemplateLiteral(TemplateLiteral),
    Unary(UnaryExpression),
    Update(UpdateExpression),
    Yield(YieldExpression),
});

node_enum!(Statement {
    Block(BlockStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Debugger(DebuggerStatement),
    DoWhile(DoWhileStatement),
    Empty(EmptyStatement),
    Expression(ExpressionStatement),
    Directive(Directive),
    For(ForStatement),
    ForIn(ForInStatement),
    ForOf(ForOfStatement),
    If(IfStatement),
    Labeled(LabeledStatement),
    Return(ReturnStatement),
    Switch(SwitchStatement),
    Throw(ThrowStatement),
    Try(TryStatement),
    While(WhileStatement),
    With(WithStatement),
});

node_enum!(Declaration {
    Class(ClassDeclaration),
    Function(FunctionDeclaration),
    Import(ImportDeclaration),
    Variable(VariableDeclaration),
    ExportAll(ExportAllDeclaration),
    ExportDefault(ExportDefaultDeclaration),
    ExportNamed(ExportNamedDeclaration),
});

node_enum!(StatementListItem {
    Statement(Statement),
    Declaration(Declaration),
});

lift!(StatementListItem via Statement:
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
    ThrowStatement,
    TryStatement,
    WhileStatement,
    WithStatement,
);

lift!(StatementListItem via Declaration:
    ClassDeclaration,
    FunctionDeclaration,
    ImportDeclaration,
    VariableDeclaration,
    ExportAllDeclaration,
    ExportDefaultDeclaration,
    ExportNamedDeclaration,
);

node_enum!(BindingPattern {
    Array(ArrayPattern),
    Object(ObjectPattern),
});

node_enum!(BindingIdentifierOrPattern {
    Identifier(Identifier),
    Array(ArrayPattern),
    Object(ObjectPattern),
});

node_enum!(ArgumentListElement {
    Expression(Expression),
    Spread(SpreadElement),
});

node_enum!(ArrayExpressionElement {
    Expression(Expression),
    Spread(SpreadElement),
});

with_expression_types!(lift!(ArgumentListElement via Expression:));
with_expression_types!(lift!(ArrayExpressionElement via Expression:));

node_enum!(ArrayPatternElement {
    Identifier(Identifier),
    Array(ArrayPattern),
    Object(ObjectPattern),
    Assignment(AssignmentPattern),
    Rest(RestElement),
});

node_enum!(FunctionParameter {
    Identifier(Identifier),
    Array(ArrayPattern),
    Object(ObjectPattern),
    Assignment(AssignmentPattern),
    Rest(RestElement),
});

node_enum!(PropertyKey {
    Identifier(Identifier),
    Literal(Literal),
});

node_enum!(PropertyValue {
    Identifier(Identifier),
    Function(FunctionExpression),
    Assignment(AssignmentPattern),
    Array(ArrayPattern),
    Object(ObjectPattern),
});

node_enum!(ObjectExpressionProperty {
    Property(Property),
    Spread(SpreadElement),
});

node_enum!(ObjectPatternProperty {
    Property(PropertyPattern),
    Rest(RestElement),
});

node_enum!(ImportDeclarationSpecifier {
    Default(ImportDefaultSpecifier),
    Namespace(ImportNamespaceSpecifier),
    Named(ImportSpecifier),
});

node_enum!(ExportableDefaultDeclaration {
    Expression(Expression),
    Class(ClassDeclaration),
    Function(FunctionDeclaration),
});

with_expression_types!(lift!(ExportableDefaultDeclaration via Expression:));

node_enum!(ExportableNamedDeclaration {
    Class(ClassDeclaration),
    Function(FunctionDeclaration),
    Variable(VariableDeclaration),
});

node_enum!(ChainElement {
    Call(CallExpression),
    ComputedMember(ComputedMemberExpression),
    StaticMember(StaticMemberExpression),
});

node_enum!(ClassProperty {
    Method(MethodDefinition),
    Property(PropertyDefinition),
});

node_enum!(ForInit {
    Declaration(VariableDeclaration),
    Expression(Expression),
});

with_expression_types!(lift!(ForInit via Expression:));

capability_group!(
    Expression => EXPRESSION,
    Statement => STATEMENT,
    Declaration => DECLARATION,
    StatementListItem => STATEMENT_LIST_ITEM,
    Literal => LITERAL,
    BindingPattern => BINDING_PATTERN,
    BindingIdentifierOrPattern => BINDING_IDENTIFIER_OR_PATTERN,
    ArgumentListElement => ARGUMENT_LIST_ELEMENT,
    ArrayExpressionElement => ARRAY_EXPRESSION_ELEMENT,
    ArrayPatternElement => ARRAY_PATTERN_ELEMENT,
    FunctionParameter => FUNCTION_PARAMETER,
    PropertyKey => PROPERTY_KEY,
    PropertyValue => PROPERTY_VALUE,
    ObjectExpressionProperty => OBJECT_EXPRESSION_PROPERTY,
    ObjectPatternProperty => OBJECT_PATTERN_PROPERTY,
    ImportDeclarationSpecifier => IMPORT_DECLARATION_SPECIFIER,
    ExportableDefaultDeclaration => EXPORTABLE_DEFAULT_DECLARATION,
    ExportableNamedDeclaration => EXPORTABLE_NAMED_DECLARATION,
    ChainElement => CHAIN_ELEMENT,
    ClassProperty => CLASS_PROPERTY,
);

// ============================================================================
// Narrowing
// ============================================================================

narrow!(Expression => ChainElement {
    Call => Call,
    ComputedMember => ComputedMember,
    StaticMember => StaticMember,
});

narrow!(Expression => PropertyKey {
    Identifier => Identifier,
    Literal => Literal,
});

narrow!(Expression => PropertyValue {
    Identifier => Identifier,
    Function => Function,
});

narrow!(Expression => FunctionParameter {
    Identifier => Identifier,
});

narrow!(Expression => BindingIdentifierOrPattern {
    Identifier => Identifier,
});

/// Unwraps a single-variant selection out of a wider group.
macro_rules! unwrap_variant {
    ($from:ident::$variant:ident => $to:ident) => {
        impl TryFrom<$from> for $to {
            type Error = ConstructionError;

            fn try_from(node: $from) -> Result<Self, Self::Error> {
                match node {
                    $from::$variant(n) => Ok(n),
                    other => Err(ConstructionError::NotInGroup {
                        kind: other.kind(),
                        group: <$to as CapabilityGroup>::NAME,
                    }),
                }
            }
        }
    };
}

unwrap_variant!(Expression::Literal => Literal);
unwrap_variant!(StatementListItem::Statement => Statement);
unwrap_variant!(StatementListItem::Declaration => Declaration);

narrow!(Declaration => ExportableNamedDeclaration {
    Class => Class,
    Function => Function,
    Variable => Variable,
});

narrow!(Declaration => ExportableDefaultDeclaration {
    Class => Class,
    Function => Function,
});

narrow!(BindingIdentifierOrPattern => BindingPattern {
    Array => Array,
    Object => Object,
});

impl From<BindingPattern> for BindingIdentifierOrPattern {
    fn from(pattern: BindingPattern) -> Self {
        match pattern {
            BindingPattern::Array(p) => BindingIdentifierOrPattern::Array(p),
            BindingPattern::Object(p) => BindingIdentifierOrPattern::Object(p),
        }
    }
}

impl From<BindingIdentifierOrPattern> for FunctionParameter {
    fn from(binding: BindingIdentifierOrPattern) -> Self {
        match binding {
            BindingIdentifierOrPattern::Identifier(p) => FunctionParameter::Identifier(p),
            BindingIdentifierOrPattern::Array(p) => FunctionParameter::Array(p),
            BindingIdentifierOrPattern::Object(p) => FunctionParameter::Object(p),
        }
    }
}

impl From<BindingIdentifierOrPattern> for ArrayPatternElement {
    fn from(binding: BindingIdentifierOrPattern) -> Self {
        match binding {
            BindingIdentifierOrPattern::Identifier(p) => ArrayPatternElement::Identifier(p),
            BindingIdentifierOrPattern::Array(p) => ArrayPatternElement::Array(p),
            BindingIdentifierOrPattern::Object(p) => ArrayPatternElement::Object(p),
        }
    }
}

impl From<ChainElement> for Expression {
    fn from(element: ChainElement) -> Self {
        match element {
            ChainElement::Call(e) => Expression::Call(e),
            ChainElement::ComputedMember(e) => Expression::ComputedMember(e),
            ChainElement::StaticMember(e) => Expression::StaticMember(e),
        }
    }
}

impl From<PropertyKey> for Expression {
    fn from(key: PropertyKey) -> Self {
        match key {
            PropertyKey::Identifier(i) => Expression::Identifier(i),
            PropertyKey::Literal(l) => Expression::Literal(l),
        }
    }
}
