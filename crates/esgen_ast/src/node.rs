//! AST node definitions.
//!
//! Every concrete node is a plain struct embedding [`NodeData`]. Capability
//! groups ("may appear as a function parameter", "is a statement", ...) are
//! enums whose variants are exactly the permitted kinds, so a node can only
//! land in a slot its kind is allowed in. Children are owned through `Box`
//! and `Vec`; trees are built once and then only read.

use crate::types::*;
use bigdecimal::BigDecimal;
use esgen_core::text::{SourceLocation, TextRange};

// ============================================================================
// Core Node Data
// ============================================================================

/// Common data shared by all AST nodes. Informational only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeData {
    /// Source offset range, if the node came from source text.
    pub range: Option<TextRange>,
    /// Line/column location, if known.
    pub loc: Option<SourceLocation>,
}

impl NodeData {
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            range: Some(TextRange::new(start, end)),
            loc: None,
        }
    }

    pub fn with_loc(mut self, loc: SourceLocation) -> Self {
        self.loc = Some(loc);
        self
    }
}

// ============================================================================
// Identifier & Literals
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identifier {
    pub data: NodeData,
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: NodeData::default(),
            name: name.into(),
        }
    }
}

/// A literal value. `Null` and `Undefined` are shared singletons, see
/// [`crate::literal::NULL`] and [`crate::literal::UNDEFINED`].
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Undefined,
    String(String),
    Boolean(bool),
    Number(f64),
    BigDecimal(BigDecimal),
}

// ============================================================================
// Capability Groups
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
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
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
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
}

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Class(ClassDeclaration),
    Function(FunctionDeclaration),
    Import(ImportDeclaration),
    Variable(VariableDeclaration),
    ExportAll(ExportAllDeclaration),
    ExportDefault(ExportDefaultDeclaration),
    ExportNamed(ExportNamedDeclaration),
}

/// Anything that may appear in a statement list: a statement or a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum StatementListItem {
    Statement(Statement),
    Declaration(Declaration),
}

/// Array or object destructuring target.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingPattern {
    Array(ArrayPattern),
    Object(ObjectPattern),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BindingIdentifierOrPattern {
    Identifier(Identifier),
    Array(ArrayPattern),
    Object(ObjectPattern),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentListElement {
    Expression(Expression),
    Spread(SpreadElement),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArrayExpressionElement {
    Expression(Expression),
    Spread(SpreadElement),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArrayPatternElement {
    Identifier(Identifier),
    Array(ArrayPattern),
    Object(ObjectPattern),
    Assignment(AssignmentPattern),
    Rest(RestElement),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionParameter {
    Identifier(Identifier),
    Array(ArrayPattern),
    Object(ObjectPattern),
    Assignment(AssignmentPattern),
    Rest(RestElement),
}

/// The key of a property, method or field. Identifiers render bare; every
/// other key renders in brackets as a computed key.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKey {
    Identifier(Identifier),
    Literal(Literal),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Identifier(Identifier),
    Function(FunctionExpression),
    Assignment(AssignmentPattern),
    Array(ArrayPattern),
    Object(ObjectPattern),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectExpressionProperty {
    Property(Property),
    Spread(SpreadElement),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectPatternProperty {
    Property(PropertyPattern),
    Rest(RestElement),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportDeclarationSpecifier {
    Default(ImportDefaultSpecifier),
    Namespace(ImportNamespaceSpecifier),
    Named(ImportSpecifier),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportableDefaultDeclaration {
    Expression(Expression),
    Class(ClassDeclaration),
    Function(FunctionDeclaration),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportableNamedDeclaration {
    Class(ClassDeclaration),
    Function(FunctionDeclaration),
    Variable(VariableDeclaration),
}

/// Member and call targets usable after an optional-chaining operator.
#[derive(Debug, Clone, PartialEq)]
pub enum ChainElement {
    Call(CallExpression),
    ComputedMember(ComputedMemberExpression),
    StaticMember(StaticMemberExpression),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassProperty {
    Method(MethodDefinition),
    Property(PropertyDefinition),
}

/// The head of a `for` loop, or the left side of `for-in`/`for-of`.
#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    Declaration(VariableDeclaration),
    Expression(Expression),
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThisExpression {
    pub data: NodeData,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Super {
    pub data: NodeData,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayExpression {
    pub data: NodeData,
    pub elements: Vec<ArrayExpressionElement>,
}

impl ArrayExpression {
    pub fn new(elements: Vec<ArrayExpressionElement>) -> Self {
        Self { data: NodeData::default(), elements }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrowFunctionExpression {
    pub data: NodeData,
    pub params: Vec<FunctionParameter>,
    pub body: BlockStatement,
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    pub data: NodeData,
    pub operator: AssignmentOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl AssignmentExpression {
    pub fn new(operator: AssignmentOperator, left: impl Into<Expression>, right: impl Into<Expression>) -> Self {
        Self {
            data: NodeData::default(),
            operator,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AwaitExpression {
    pub data: NodeData,
    pub argument: Box<Expression>,
}

impl AwaitExpression {
    pub fn new(argument: impl Into<Expression>) -> Self {
        Self { data: NodeData::default(), argument: Box::new(argument.into()) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub data: NodeData,
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl BinaryExpression {
    pub fn new(operator: BinaryOperator, left: impl Into<Expression>, right: impl Into<Expression>) -> Self {
        Self {
            data: NodeData::default(),
            operator,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpression {
    pub data: NodeData,
    pub operator: LogicalOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl LogicalExpression {
    pub fn new(operator: LogicalOperator, left: impl Into<Expression>, right: impl Into<Expression>) -> Self {
        Self {
            data: NodeData::default(),
            operator,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub data: NodeData,
    pub callee: Box<Expression>,
    pub arguments: Vec<ArgumentListElement>,
}

impl CallExpression {
    pub fn new(callee: impl Into<Expression>, arguments: Vec<ArgumentListElement>) -> Self {
        Self {
            data: NodeData::default(),
            callee: Box::new(callee.into()),
            arguments,
        }
    }
}

/// An optional chain. The wrapped element renders with `?.` in place of its
/// plain member or call operator.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainExpression {
    pub data: NodeData,
    pub expression: Box<ChainElement>,
}

impl ChainExpression {
    pub fn new(expression: impl Into<ChainElement>) -> Self {
        Self { data: NodeData::default(), expression: Box::new(expression.into()) }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassExpression {
    pub data: NodeData,
    pub id: Option<Identifier>,
    pub super_class: Option<Box<Expression>>,
    pub body: ClassBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedMemberExpression {
    pub data: NodeData,
    pub object: Box<Expression>,
    pub property: Box<Expression>,
}

impl ComputedMemberExpression {
    pub fn new(object: impl Into<Expression>, property: impl Into<Expression>) -> Self {
        Self {
            data: NodeData::default(),
            object: Box::new(object.into()),
            property: Box::new(property.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    pub data: NodeData,
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
}

impl ConditionalExpression {
    pub fn new(
        test: impl Into<Expression>,
        consequent: impl Into<Expression>,
        alternate: impl Into<Expression>,
    ) -> Self {
        Self {
            data: NodeData::default(),
            test: Box::new(test.into()),
            consequent: Box::new(consequent.into()),
            alternate: Box::new(alternate.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionExpression {
    pub data: NodeData,
    pub id: Option<Identifier>,
    pub params: Vec<FunctionParameter>,
    pub body: BlockStatement,
    pub function_type: FunctionType,
}

/// Dynamic `import(source)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportExpression {
    pub data: NodeData,
    pub source: Box<Expression>,
}

/// `new.target`, `import.meta`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaProperty {
    pub data: NodeData,
    pub meta: Identifier,
    pub property: Identifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpression {
    pub data: NodeData,
    pub callee: Box<Expression>,
    pub arguments: Vec<ArgumentListElement>,
}

impl NewExpression {
    pub fn new(callee: impl Into<Expression>, arguments: Vec<ArgumentListElement>) -> Self {
        Self {
            data: NodeData::default(),
            callee: Box::new(callee.into()),
            arguments,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectExpression {
    pub data: NodeData,
    pub properties: Vec<ObjectExpressionProperty>,
}

impl ObjectExpression {
    pub fn new(properties: Vec<ObjectExpressionProperty>) -> Self {
        Self { data: NodeData::default(), properties }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequenceExpression {
    pub data: NodeData,
    pub expressions: Vec<Expression>,
}

/// Dot access, `object.property`.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMemberExpression {
    pub data: NodeData,
    pub object: Box<Expression>,
    pub property: Box<Expression>,
}

impl StaticMemberExpression {
    pub fn new(object: impl Into<Expression>, property: impl Into<Expression>) -> Self {
        Self {
            data: NodeData::default(),
            object: Box::new(object.into()),
            property: Box::new(property.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaggedTemplateExpression {
    pub data: NodeData,
    pub tag: Box<Expression>,
    pub quasi: TemplateLiteral,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateLiteral {
    pub data: NodeData,
    pub quasis: Vec<TemplateElement>,
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateElement {
    pub data: NodeData,
    pub raw: String,
    pub cooked: Option<String>,
    pub tail: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub data: NodeData,
    pub operator: UnaryOperator,
    pub argument: Box<Expression>,
}

impl UnaryExpression {
    pub fn new(operator: UnaryOperator, argument: impl Into<Expression>) -> Self {
        Self { data: NodeData::default(), operator, argument: Box::new(argument.into()) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub data: NodeData,
    pub operator: UpdateOperator,
    pub prefix: bool,
    pub argument: Box<Expression>,
}

impl UpdateExpression {
    pub fn new(operator: UpdateOperator, prefix: bool, argument: impl Into<Expression>) -> Self {
        Self {
            data: NodeData::default(),
            operator,
            prefix,
            argument: Box::new(argument.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct YieldExpression {
    pub data: NodeData,
    pub argument: Option<Box<Expression>>,
    pub delegate: bool,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockStatement {
    pub data: NodeData,
    pub body: Vec<StatementListItem>,
}

impl BlockStatement {
    pub fn new(body: Vec<StatementListItem>) -> Self {
        Self { data: NodeData::default(), body }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreakStatement {
    pub data: NodeData,
    pub label: Option<Identifier>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContinueStatement {
    pub data: NodeData,
    pub label: Option<Identifier>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebuggerStatement {
    pub data: NodeData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    pub data: NodeData,
    pub body: Box<Statement>,
    pub test: Expression,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmptyStatement {
    pub data: NodeData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub data: NodeData,
    pub expression: Expression,
}

impl ExpressionStatement {
    pub fn new(expression: impl Into<Expression>) -> Self {
        Self { data: NodeData::default(), expression: expression.into() }
    }
}

/// A prologue directive such as `"use strict"`. Has no text form.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub data: NodeData,
    pub expression: Expression,
    pub directive: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub data: NodeData,
    pub init: Option<ForInit>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForInStatement {
    pub data: NodeData,
    pub left: ForInit,
    pub right: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForOfStatement {
    pub data: NodeData,
    pub is_await: bool,
    pub left: ForInit,
    pub right: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub data: NodeData,
    pub test: Expression,
    pub consequent: Box<Statement>,
    pub alternate: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStatement {
    pub data: NodeData,
    pub label: Identifier,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnStatement {
    pub data: NodeData,
    pub argument: Option<Expression>,
}

impl ReturnStatement {
    pub fn new(argument: Option<Expression>) -> Self {
        Self { data: NodeData::default(), argument }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub data: NodeData,
    pub discriminant: Expression,
    pub cases: Vec<SwitchCase>,
}

/// One `case` arm; `test` is `None` for `default`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchCase {
    pub data: NodeData,
    pub test: Option<Expression>,
    pub consequent: Vec<StatementListItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    pub data: NodeData,
    pub argument: Expression,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TryStatement {
    pub data: NodeData,
    pub block: BlockStatement,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<BlockStatement>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatchClause {
    pub data: NodeData,
    pub param: Option<BindingIdentifierOrPattern>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub data: NodeData,
    pub test: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithStatement {
    pub data: NodeData,
    pub object: Expression,
    pub body: Box<Statement>,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassDeclaration {
    pub data: NodeData,
    pub id: Option<Identifier>,
    pub super_class: Option<Box<Expression>>,
    pub body: ClassBody,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassBody {
    pub data: NodeData,
    pub body: Vec<ClassProperty>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDefinition {
    pub data: NodeData,
    pub key: PropertyKey,
    pub value: FunctionExpression,
    pub kind: MethodKind,
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
    pub data: NodeData,
    pub key: PropertyKey,
    pub value: Option<Expression>,
    pub is_static: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionDeclaration {
    pub data: NodeData,
    pub id: Option<Identifier>,
    pub params: Vec<FunctionParameter>,
    pub body: BlockStatement,
    pub function_type: FunctionType,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportDeclaration {
    pub data: NodeData,
    pub specifiers: Vec<ImportDeclarationSpecifier>,
    pub source: String,
}

impl ImportDeclaration {
    pub fn new(source: impl Into<String>, specifiers: Vec<ImportDeclarationSpecifier>) -> Self {
        Self { data: NodeData::default(), specifiers, source: source.into() }
    }
}

/// `Name` in `import Name from "..."`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportDefaultSpecifier {
    pub data: NodeData,
    pub local: Identifier,
}

/// `* as Name`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportNamespaceSpecifier {
    pub data: NodeData,
    pub local: Identifier,
}

/// The `{ a, b as c }` clause of an import.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportSpecifier {
    pub data: NodeData,
    pub named_imports: Vec<NamedImport>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedImport {
    pub data: NodeData,
    pub imported: Identifier,
    /// Local rename, rendered as `imported as local`.
    pub local: Option<Identifier>,
}

impl NamedImport {
    pub fn new(imported: impl Into<String>) -> Self {
        Self {
            data: NodeData::default(),
            imported: Identifier::new(imported),
            local: None,
        }
    }

    pub fn renamed(imported: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            data: NodeData::default(),
            imported: Identifier::new(imported),
            local: Some(Identifier::new(local)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub data: NodeData,
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
}

impl VariableDeclaration {
    pub fn new(kind: VariableKind, declarations: Vec<VariableDeclarator>) -> Self {
        Self { data: NodeData::default(), kind, declarations }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub data: NodeData,
    pub id: BindingIdentifierOrPattern,
    pub init: Option<Expression>,
}

impl VariableDeclarator {
    pub fn new(id: impl Into<BindingIdentifierOrPattern>, init: Option<Expression>) -> Self {
        Self { data: NodeData::default(), id: id.into(), init }
    }
}

/// `export * from "..."`. Has no text form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportAllDeclaration {
    pub data: NodeData,
    pub source: String,
    pub exported: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDefaultDeclaration {
    pub data: NodeData,
    pub declaration: ExportableDefaultDeclaration,
}

/// `export <declaration>;` or `export { a, b as c } [from "..."];`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportNamedDeclaration {
    pub data: NodeData,
    pub declaration: Option<ExportableNamedDeclaration>,
    pub specifiers: Vec<ExportSpecifier>,
    pub source: Option<String>,
}

impl ExportNamedDeclaration {
    pub fn declaration(declaration: impl Into<ExportableNamedDeclaration>) -> Self {
        Self {
            declaration: Some(declaration.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportSpecifier {
    pub data: NodeData,
    pub local: Identifier,
    /// Exported name, rendered as `local as exported`.
    pub exported: Option<Identifier>,
}

// ============================================================================
// Properties, Patterns & Spread
// ============================================================================

/// An object literal property; `value: None` is shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub data: NodeData,
    pub key: PropertyKey,
    pub value: Option<Expression>,
}

impl Property {
    pub fn new(key: impl Into<PropertyKey>, value: impl Into<Expression>) -> Self {
        Self {
            data: NodeData::default(),
            key: key.into(),
            value: Some(value.into()),
        }
    }

    pub fn shorthand(key: impl Into<PropertyKey>) -> Self {
        Self { data: NodeData::default(), key: key.into(), value: None }
    }
}

/// An object pattern property; `value: None` is shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPattern {
    pub data: NodeData,
    pub key: PropertyKey,
    pub value: Option<PropertyValue>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayPattern {
    pub data: NodeData,
    pub elements: Vec<ArrayPatternElement>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectPattern {
    pub data: NodeData,
    pub properties: Vec<ObjectPatternProperty>,
}

/// `left = right`, a binding with a default value.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentPattern {
    pub data: NodeData,
    pub left: BindingIdentifierOrPattern,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestElement {
    pub data: NodeData,
    pub argument: BindingIdentifierOrPattern,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpreadElement {
    pub data: NodeData,
    pub argument: Expression,
}

impl SpreadElement {
    pub fn new(argument: impl Into<Expression>) -> Self {
        Self { data: NodeData::default(), argument: argument.into() }
    }
}
