//! esgen_printer: syntax tree to JavaScript text.
//!
//! Rendering is compositional: every node renders to a `String` built from the
//! renderings of its children, and nested text is offset by the indentation
//! strategy carried in [`PrinterOptions`]. The printer holds no mutable state,
//! so one instance can render any number of trees.

pub mod error;
pub mod indent;
pub mod options;

pub use error::{IndentStyleError, PrintError, PrintResult};
pub use indent::{Indentor, Spaces, Tabs};
pub use options::{IndentStyle, PrinterOptions};

use esgen_ast::*;

/// The printer converts syntax trees to text.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    options: PrinterOptions,
}

impl Printer {
    pub fn new(options: PrinterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PrinterOptions {
        &self.options
    }

    /// Print a statement list, one rendering per line, with no trailing newline.
    #[tracing::instrument(level = "trace", skip_all, fields(items = items.len()))]
    pub fn print_statements(&self, items: &[StatementListItem]) -> PrintResult<String> {
        self.print_items(items)
    }

    fn print_items(&self, items: &[StatementListItem]) -> PrintResult<String> {
        let lines = items
            .iter()
            .map(|item| self.print_statement_list_item(item))
            .collect::<PrintResult<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }

    pub fn print_statement_list_item(&self, item: &StatementListItem) -> PrintResult<String> {
        match item {
            StatementListItem::Statement(stmt) => self.print_statement(stmt),
            StatementListItem::Declaration(decl) => self.print_declaration(decl),
        }
    }

    // ========================================================================
    // Statement printing
    // ========================================================================

    pub fn print_statement(&self, stmt: &Statement) -> PrintResult<String> {
        Ok(match stmt {
            Statement::Block(n) => self.braced(&self.print_block_body(n)?),
            Statement::Break(n) => match n.label {
                Some(ref label) => format!("break {};", label.name),
                None => "break;".to_string(),
            },
            Statement::Continue(n) => match n.label {
                Some(ref label) => format!("continue {};", label.name),
                None => "continue;".to_string(),
            },
            Statement::Debugger(_) => "debugger;".to_string(),
            Statement::DoWhile(n) => format!(
                "do {} while ({});",
                self.braced(&self.print_body(&n.body)?),
                self.print_expression(&n.test)?
            ),
            Statement::Empty(_) => ";".to_string(),
            Statement::Expression(n) => format!("{};", self.print_expression(&n.expression)?),
            Statement::Directive(n) => return unsupported(n.kind()),
            Statement::For(n) => self.print_for_statement(n)?,
            Statement::ForIn(n) => format!(
                "for ({} in {}) {}",
                self.print_for_init(&n.left)?,
                self.print_expression(&n.right)?,
                self.braced(&self.print_body(&n.body)?)
            ),
            Statement::ForOf(n) => self.print_for_of_statement(n)?,
            Statement::If(n) => self.print_if_statement(n)?,
            Statement::Labeled(n) => {
                format!("{}: {}", n.label.name, self.print_statement(&n.body)?)
            }
            Statement::Return(n) => match n.argument {
                Some(ref arg) => format!("return {};", self.print_expression(arg)?),
                None => "return;".to_string(),
            },
            Statement::Switch(n) => self.print_switch_statement(n)?,
            Statement::Throw(n) => format!("throw {};", self.print_expression(&n.argument)?),
            Statement::Try(n) => self.print_try_statement(n)?,
            Statement::While(n) => format!(
                "while ({}) {}",
                self.print_expression(&n.test)?,
                self.braced(&self.print_body(&n.body)?)
            ),
            Statement::With(n) => format!(
                "with ({}) {}",
                self.print_expression(&n.object)?,
                self.braced(&self.print_body(&n.body)?)
            ),
        })
    }

    /// The items of a block, one per line, without the surrounding braces.
    fn print_block_body(&self, block: &BlockStatement) -> PrintResult<String> {
        self.print_items(&block.body)
    }

    /// A statement used as the body of a compound statement. Blocks
    /// contribute their items; the caller adds the braces.
    fn print_body(&self, stmt: &Statement) -> PrintResult<String> {
        match stmt {
            Statement::Block(block) => self.print_block_body(block),
            other => self.print_statement(other),
        }
    }

    fn print_if_statement(&self, node: &IfStatement) -> PrintResult<String> {
        let mut out = format!(
            "if ({}) {}",
            self.print_expression(&node.test)?,
            self.braced(&self.print_body(&node.consequent)?)
        );
        if let Some(ref alternate) = node.alternate {
            out.push_str(" else ");
            match &**alternate {
                Statement::If(nested) => out.push_str(&self.print_if_statement(nested)?),
                other => out.push_str(&self.braced(&self.print_body(other)?)),
            }
        }
        Ok(out)
    }

    fn print_for_statement(&self, node: &ForStatement) -> PrintResult<String> {
        let init = match node.init {
            Some(ref init) => self.print_for_init(init)?,
            None => String::new(),
        };
        let test = self.print_optional_expression(node.test.as_ref())?;
        let update = self.print_optional_expression(node.update.as_ref())?;
        Ok(format!(
            "for ({}; {}; {}) {}",
            init,
            test,
            update,
            self.braced(&self.print_body(&node.body)?)
        ))
    }

    fn print_for_of_statement(&self, node: &ForOfStatement) -> PrintResult<String> {
        // Both loop forms print `in`.
        let keyword = if node.is_await { "for await" } else { "for" };
        Ok(format!(
            "{} ({} in {}) {}",
            keyword,
            self.print_for_init(&node.left)?,
            self.print_expression(&node.right)?,
            self.braced(&self.print_body(&node.body)?)
        ))
    }

    fn print_for_init(&self, init: &ForInit) -> PrintResult<String> {
        match init {
            ForInit::Declaration(decl) => self.print_variable_declaration(decl),
            ForInit::Expression(expr) => self.print_expression(expr),
        }
    }

    fn print_switch_statement(&self, node: &SwitchStatement) -> PrintResult<String> {
        let discriminant = self.print_expression(&node.discriminant)?;
        if node.cases.is_empty() {
            return Ok(format!("switch ({}) {{}}", discriminant));
        }
        let cases = node
            .cases
            .iter()
            .map(|case| self.print_switch_case(case))
            .collect::<PrintResult<Vec<_>>>()?;
        Ok(format!(
            "switch ({}) {{\n{}\n}}",
            discriminant,
            self.indent(&cases.join("\n"))
        ))
    }

    fn print_switch_case(&self, case: &SwitchCase) -> PrintResult<String> {
        let mut out = match case.test {
            Some(ref test) => format!("case {}:", self.print_expression(test)?),
            None => "default:".to_string(),
        };
        if !case.consequent.is_empty() {
            out.push('\n');
            out.push_str(&self.indent(&self.print_items(&case.consequent)?));
        }
        Ok(out)
    }

    fn print_try_statement(&self, node: &TryStatement) -> PrintResult<String> {
        let mut out = format!("try {}", self.braced(&self.print_block_body(&node.block)?));
        if let Some(ref handler) = node.handler {
            let body = self.braced(&self.print_block_body(&handler.body)?);
            match handler.param {
                Some(ref param) => {
                    out.push_str(&format!(" catch ({}) {}", self.print_binding(param)?, body))
                }
                None => out.push_str(&format!(" catch {}", body)),
            }
        }
        if let Some(ref finalizer) = node.finalizer {
            out.push_str(" finally ");
            out.push_str(&self.braced(&self.print_block_body(finalizer)?));
        }
        Ok(out)
    }

    // ========================================================================
    // Declaration printing
    // ========================================================================

    pub fn print_declaration(&self, decl: &Declaration) -> PrintResult<String> {
        match decl {
            Declaration::Class(n) => {
                self.print_class(n.id.as_ref(), n.super_class.as_deref(), &n.body)
            }
            Declaration::Function(n) => {
                self.print_function(n.id.as_ref(), &n.params, &n.body, n.function_type)
            }
            Declaration::Import(n) => self.print_import_declaration(n),
            Declaration::Variable(n) => Ok(format!("{};", self.print_variable_declaration(n)?)),
            Declaration::ExportAll(n) => unsupported(n.kind()),
            Declaration::ExportDefault(n) => self.print_export_default_declaration(n),
            Declaration::ExportNamed(n) => self.print_export_named_declaration(n),
        }
    }

    /// `kind a = x, b`, unterminated.
    fn print_variable_declaration(&self, node: &VariableDeclaration) -> PrintResult<String> {
        let declarators = node
            .declarations
            .iter()
            .map(|d| {
                let id = self.print_binding(&d.id)?;
                Ok(match d.init {
                    Some(ref init) => format!("{} = {}", id, self.print_expression(init)?),
                    None => id,
                })
            })
            .collect::<PrintResult<Vec<_>>>()?;
        Ok(format!("{} {}", node.kind, declarators.join(", ")))
    }

    fn print_function(
        &self,
        id: Option<&Identifier>,
        params: &[FunctionParameter],
        body: &BlockStatement,
        function_type: FunctionType,
    ) -> PrintResult<String> {
        let prefix = match function_type {
            FunctionType::Async => "async function ",
            FunctionType::Generator => "function* ",
            FunctionType::Normal => "function ",
        };
        Ok(format!(
            "{}{}({}) {}",
            prefix,
            id.map(|id| id.name.as_str()).unwrap_or_default(),
            self.print_parameters(params)?,
            self.braced(&self.print_block_body(body)?)
        ))
    }

    fn print_class(
        &self,
        id: Option<&Identifier>,
        super_class: Option<&Expression>,
        body: &ClassBody,
    ) -> PrintResult<String> {
        let mut out = String::from("class ");
        if let Some(id) = id {
            out.push_str(&id.name);
            out.push(' ');
        }
        if let Some(super_class) = super_class {
            let text = self.print_expression(super_class)?;
            let text = match super_class {
                Expression::Binary(_) | Expression::Logical(_) | Expression::Literal(_) => {
                    parenthesize(&text)
                }
                _ => text,
            };
            out.push_str(&format!("extends {} ", text));
        }
        let members = body
            .body
            .iter()
            .map(|member| self.print_class_property(member))
            .collect::<PrintResult<Vec<_>>>()?;
        out.push_str(&self.braced(&members.join("\n")));
        Ok(out)
    }

    fn print_class_property(&self, member: &ClassProperty) -> PrintResult<String> {
        match member {
            ClassProperty::Method(m) => self.print_method_definition(m),
            ClassProperty::Property(p) => {
                let mut out = String::new();
                if p.is_static {
                    out.push_str("static ");
                }
                out.push_str(&self.print_property_key(&p.key));
                if let Some(ref value) = p.value {
                    out.push_str(" = ");
                    out.push_str(&self.print_expression(value)?);
                }
                out.push(';');
                Ok(out)
            }
        }
    }

    fn print_method_definition(&self, node: &MethodDefinition) -> PrintResult<String> {
        let mut out = String::new();
        if node.is_static {
            out.push_str("static ");
        }
        match node.value.function_type {
            FunctionType::Async => out.push_str("async "),
            FunctionType::Generator => out.push('*'),
            FunctionType::Normal => {}
        }
        match node.kind {
            MethodKind::Get => out.push_str("get "),
            MethodKind::Set => out.push_str("set "),
            MethodKind::Method | MethodKind::Constructor => {}
        }
        out.push_str(&self.print_property_key(&node.key));
        out.push_str(&format!(
            "({}) {}",
            self.print_parameters(&node.value.params)?,
            self.braced(&self.print_block_body(&node.value.body)?)
        ));
        Ok(out)
    }

    fn print_import_declaration(&self, node: &ImportDeclaration) -> PrintResult<String> {
        let source = quote(&node.source);
        if node.specifiers.is_empty() {
            return Ok(format!("import {};", source));
        }

        let mut default = None;
        let mut namespace = None;
        let mut named: Option<Vec<String>> = None;
        for spec in &node.specifiers {
            match spec {
                ImportDeclarationSpecifier::Default(s) => default = Some(s.local.name.clone()),
                ImportDeclarationSpecifier::Namespace(s) => {
                    namespace = Some(format!("* as {}", s.local.name))
                }
                ImportDeclarationSpecifier::Named(s) => named
                    .get_or_insert_with(Vec::new)
                    .extend(s.named_imports.iter().map(print_named_import)),
            }
        }

        let mut clauses = Vec::with_capacity(3);
        clauses.extend(default);
        clauses.extend(namespace);
        if let Some(named) = named {
            clauses.push(if named.is_empty() {
                "{}".to_string()
            } else {
                format!("{{ {} }}", named.join(", "))
            });
        }
        Ok(format!("import {} from {};", clauses.join(", "), source))
    }

    fn print_export_default_declaration(
        &self,
        node: &ExportDefaultDeclaration,
    ) -> PrintResult<String> {
        let declaration = match node.declaration {
            ExportableDefaultDeclaration::Expression(ref e) => self.print_expression(e)?,
            ExportableDefaultDeclaration::Class(ref c) => {
                self.print_class(c.id.as_ref(), c.super_class.as_deref(), &c.body)?
            }
            ExportableDefaultDeclaration::Function(ref f) => {
                self.print_function(f.id.as_ref(), &f.params, &f.body, f.function_type)?
            }
        };
        Ok(format!("export default {}", declaration))
    }

    fn print_export_named_declaration(&self, node: &ExportNamedDeclaration) -> PrintResult<String> {
        let body = match node.declaration {
            Some(ExportableNamedDeclaration::Class(ref c)) => {
                self.print_class(c.id.as_ref(), c.super_class.as_deref(), &c.body)?
            }
            Some(ExportableNamedDeclaration::Function(ref f)) => {
                self.print_function(f.id.as_ref(), &f.params, &f.body, f.function_type)?
            }
            Some(ExportableNamedDeclaration::Variable(ref v)) => self.print_variable_declaration(v)?,
            None => {
                let specifiers: Vec<_> = node.specifiers.iter().map(print_export_specifier).collect();
                let mut out = if specifiers.is_empty() {
                    "{}".to_string()
                } else {
                    format!("{{ {} }}", specifiers.join(", "))
                };
                if let Some(ref source) = node.source {
                    out.push_str(" from ");
                    out.push_str(&quote(source));
                }
                out
            }
        };
        Ok(format!("export {};", body))
    }

    // ========================================================================
    // Expression printing
    // ========================================================================

    pub fn print_expression(&self, expr: &Expression) -> PrintResult<String> {
        Ok(match expr {
            Expression::Identifier(n) => n.name.clone(),
            Expression::Literal(lit) => print_literal(lit),
            Expression::This(_) => "this".to_string(),
            Expression::Super(_) => "super".to_string(),
            Expression::Array(n) => self.print_array_expression(n)?,
            Expression::ArrowFunction(n) => {
                let prefix = if n.is_async { "async " } else { "" };
                format!(
                    "{}({}) => {}",
                    prefix,
                    self.print_parameters(&n.params)?,
                    self.braced(&self.print_block_body(&n.body)?)
                )
            }
            Expression::Assignment(n) => format!(
                "{} {} {}",
                self.print_expression(&n.left)?,
                n.operator,
                self.print_expression(&n.right)?
            ),
            Expression::Await(n) => format!("await {}", self.print_expression(&n.argument)?),
            Expression::Binary(n) => format!(
                "{} {} {}",
                self.print_expression(&n.left)?,
                n.operator,
                self.print_expression(&n.right)?
            ),
            Expression::Logical(n) => format!(
                "{} {} {}",
                self.print_expression(&n.left)?,
                n.operator,
                self.print_expression(&n.right)?
            ),
            Expression::Call(n) => self.print_call(n, "")?,
            Expression::Chain(n) => self.print_chain_element(&n.expression)?,
            Expression::Class(n) => {
                self.print_class(n.id.as_ref(), n.super_class.as_deref(), &n.body)?
            }
            Expression::ComputedMember(n) => format!(
                "{}[{}]",
                self.print_expression(&n.object)?,
                self.print_expression(&n.property)?
            ),
            Expression::Conditional(n) => format!(
                "{}? {}: {}",
                self.print_expression(&n.test)?,
                self.print_expression(&n.consequent)?,
                self.print_expression(&n.alternate)?
            ),
            Expression::Function(n) => {
                self.print_function(n.id.as_ref(), &n.params, &n.body, n.function_type)?
            }
            Expression::Import(n) => format!("import({})", self.print_expression(&n.source)?),
            Expression::MetaProperty(n) => format!("{}.{}", n.meta.name, n.property.name),
            Expression::New(n) => {
                let callee = self.print_expression(&n.callee)?;
                let callee = match *n.callee {
                    Expression::Identifier(_) | Expression::StaticMember(_) => callee,
                    _ => parenthesize(&callee),
                };
                format!("new {}({})", callee, self.print_arguments(&n.arguments)?)
            }
            Expression::Object(n) => self.print_object_expression(n)?,
            Expression::Sequence(n) => n
                .expressions
                .iter()
                .map(|e| self.print_expression(e))
                .collect::<PrintResult<Vec<_>>>()?
                .join(", "),
            Expression::StaticMember(n) => self.print_static_member(n, ".")?,
            Expression::TaggedTemplate(n) => return unsupported(n.kind()),
            Expression::TemplateLiteral(n) => return unsupported(n.kind()),
            Expression::Unary(n) => {
                let (prefix, suffix) = n.operator.affixes();
                self.print_affixed(prefix, &n.argument, suffix)?
            }
            Expression::Update(n) => {
                let (prefix, suffix) = n.operator.affixes(n.prefix);
                self.print_affixed(prefix, &n.argument, suffix)?
            }
            Expression::Yield(n) => {
                let mut out = String::from(if n.delegate { "yield*" } else { "yield" });
                if let Some(ref arg) = n.argument {
                    out.push(' ');
                    out.push_str(&self.print_expression(arg)?);
                }
                out
            }
        })
    }

    fn print_optional_expression(&self, expr: Option<&Expression>) -> PrintResult<String> {
        match expr {
            Some(expr) => self.print_expression(expr),
            None => Ok(String::new()),
        }
    }

    /// `callee(args)`, with `operator` placed between callee and parens.
    fn print_call(&self, node: &CallExpression, operator: &str) -> PrintResult<String> {
        Ok(format!(
            "{}{}({})",
            self.print_expression(&node.callee)?,
            operator,
            self.print_arguments(&node.arguments)?
        ))
    }

    fn print_chain_element(&self, element: &ChainElement) -> PrintResult<String> {
        match element {
            ChainElement::Call(n) => self.print_call(n, "?."),
            ChainElement::ComputedMember(n) => Ok(format!(
                "{}?.[{}]",
                self.print_expression(&n.object)?,
                self.print_expression(&n.property)?
            )),
            ChainElement::StaticMember(n) => self.print_static_member(n, "?."),
        }
    }

    fn print_static_member(
        &self,
        node: &StaticMemberExpression,
        operator: &str,
    ) -> PrintResult<String> {
        let object = self.print_member_operand(&node.object)?;
        let property = match *node.property {
            Expression::Identifier(ref id) => id.name.clone(),
            ref other => self.print_member_operand(other)?,
        };
        Ok(format!("{}{}{}", object, operator, property))
    }

    /// One side of a dot access; anything but a call, member access,
    /// identifier, `this` or `super` is parenthesized.
    fn print_member_operand(&self, expr: &Expression) -> PrintResult<String> {
        let text = self.print_expression(expr)?;
        Ok(match expr {
            Expression::Call(_)
            | Expression::Identifier(_)
            | Expression::StaticMember(_)
            | Expression::ComputedMember(_)
            | Expression::This(_)
            | Expression::Super(_) => text,
            _ => parenthesize(&text),
        })
    }

    fn print_affixed(&self, prefix: &str, operand: &Expression, suffix: &str) -> PrintResult<String> {
        let text = self.print_expression(operand)?;
        let text = match operand {
            Expression::Identifier(_) | Expression::StaticMember(_) => text,
            _ => parenthesize(&text),
        };
        Ok(format!("{}{}{}", prefix, text, suffix))
    }

    fn print_arguments(&self, args: &[ArgumentListElement]) -> PrintResult<String> {
        let args = args
            .iter()
            .map(|arg| match arg {
                ArgumentListElement::Expression(e) => self.print_expression(e),
                ArgumentListElement::Spread(s) => self.print_spread(s),
            })
            .collect::<PrintResult<Vec<_>>>()?;
        Ok(args.join(", "))
    }

    fn print_array_expression(&self, node: &ArrayExpression) -> PrintResult<String> {
        if node.elements.is_empty() {
            return Ok("[]".to_string());
        }
        let elements = node
            .elements
            .iter()
            .map(|el| match el {
                ArrayExpressionElement::Expression(e) => self.print_expression(e),
                ArrayExpressionElement::Spread(s) => self.print_spread(s),
            })
            .collect::<PrintResult<Vec<_>>>()?;
        Ok(format!("[\n{}\n]", self.indent(&(elements.join(", ") + ","))))
    }

    fn print_object_expression(&self, node: &ObjectExpression) -> PrintResult<String> {
        if node.properties.is_empty() {
            return Ok("{}".to_string());
        }
        let properties = node
            .properties
            .iter()
            .map(|prop| match prop {
                ObjectExpressionProperty::Property(p) => {
                    let key = self.print_property_key(&p.key);
                    Ok(match p.value {
                        Some(ref value) => format!("{}: {}", key, self.print_expression(value)?),
                        None => key,
                    })
                }
                ObjectExpressionProperty::Spread(s) => self.print_spread(s),
            })
            .collect::<PrintResult<Vec<_>>>()?;
        Ok(format!("{{\n{}\n}}", self.indent(&(properties.join(",\n") + ","))))
    }

    fn print_spread(&self, node: &SpreadElement) -> PrintResult<String> {
        Ok(format!("...{}", self.print_expression(&node.argument)?))
    }

    // ========================================================================
    // Patterns & names
    // ========================================================================

    fn print_binding(&self, binding: &BindingIdentifierOrPattern) -> PrintResult<String> {
        match binding {
            BindingIdentifierOrPattern::Identifier(id) => Ok(id.name.clone()),
            BindingIdentifierOrPattern::Array(p) => self.print_array_pattern(p),
            BindingIdentifierOrPattern::Object(p) => self.print_object_pattern(p),
        }
    }

    fn print_parameters(&self, params: &[FunctionParameter]) -> PrintResult<String> {
        let params = params
            .iter()
            .map(|param| match param {
                FunctionParameter::Identifier(id) => Ok(id.name.clone()),
                FunctionParameter::Array(p) => self.print_array_pattern(p),
                FunctionParameter::Object(p) => self.print_object_pattern(p),
                FunctionParameter::Assignment(p) => self.print_assignment_pattern(p),
                FunctionParameter::Rest(r) => self.print_rest(r),
            })
            .collect::<PrintResult<Vec<_>>>()?;
        Ok(params.join(", "))
    }

    fn print_array_pattern(&self, node: &ArrayPattern) -> PrintResult<String> {
        if node.elements.is_empty() {
            return Ok("[]".to_string());
        }
        let elements = node
            .elements
            .iter()
            .map(|el| match el {
                ArrayPatternElement::Identifier(id) => Ok(id.name.clone()),
                ArrayPatternElement::Array(p) => self.print_array_pattern(p),
                ArrayPatternElement::Object(p) => self.print_object_pattern(p),
                ArrayPatternElement::Assignment(p) => self.print_assignment_pattern(p),
                ArrayPatternElement::Rest(r) => self.print_rest(r),
            })
            .collect::<PrintResult<Vec<_>>>()?;
        let elements = self.options.indent.indent_lines(elements);
        Ok(format!("[\n{}\n]", elements.join(",\n")))
    }

    fn print_object_pattern(&self, node: &ObjectPattern) -> PrintResult<String> {
        if node.properties.is_empty() {
            return Ok("{}".to_string());
        }
        let properties = node
            .properties
            .iter()
            .map(|prop| match prop {
                ObjectPatternProperty::Property(p) => self.print_property_pattern(p),
                ObjectPatternProperty::Rest(r) => self.print_rest(r),
            })
            .collect::<PrintResult<Vec<_>>>()?;
        let properties = self.options.indent.indent_lines(properties);
        Ok(format!("{{\n{}\n}}", properties.join(",\n")))
    }

    fn print_property_pattern(&self, node: &PropertyPattern) -> PrintResult<String> {
        let key = self.print_property_key(&node.key);
        let value = match node.value {
            None => return Ok(key),
            Some(PropertyValue::Identifier(ref id)) => id.name.clone(),
            Some(PropertyValue::Function(ref f)) => {
                self.print_function(f.id.as_ref(), &f.params, &f.body, f.function_type)?
            }
            Some(PropertyValue::Assignment(ref p)) => self.print_assignment_pattern(p)?,
            Some(PropertyValue::Array(ref p)) => self.print_array_pattern(p)?,
            Some(PropertyValue::Object(ref p)) => self.print_object_pattern(p)?,
        };
        Ok(format!("{}: {}", key, value))
    }

    fn print_assignment_pattern(&self, node: &AssignmentPattern) -> PrintResult<String> {
        Ok(format!(
            "{} = {}",
            self.print_binding(&node.left)?,
            self.print_expression(&node.right)?
        ))
    }

    fn print_rest(&self, node: &RestElement) -> PrintResult<String> {
        Ok(format!("...{}", self.print_binding(&node.argument)?))
    }

    /// Identifiers render bare, every other key as a computed `[key]`.
    fn print_property_key(&self, key: &PropertyKey) -> String {
        match key {
            PropertyKey::Identifier(id) => id.name.clone(),
            PropertyKey::Literal(lit) => format!("[{}]", print_literal(lit)),
        }
    }

    // ========================================================================
    // Output helpers
    // ========================================================================

    fn indent(&self, text: &str) -> String {
        self.options.indent.indent(text)
    }

    /// `{}` for empty content, otherwise the content indented between braces.
    fn braced(&self, content: &str) -> String {
        if content.is_empty() {
            "{}".to_string()
        } else {
            format!("{{\n{}\n}}", self.indent(content))
        }
    }
}

fn unsupported<T>(kind: NodeKind) -> PrintResult<T> {
    tracing::debug!(%kind, "refusing to print construct with no text form");
    Err(PrintError::Unsupported { kind })
}

fn parenthesize(text: &str) -> String {
    format!("({})", text)
}

/// Double-quoted JSON string form.
fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

fn print_named_import(named: &NamedImport) -> String {
    match named.local {
        Some(ref local) => format!("{} as {}", named.imported.name, local.name),
        None => named.imported.name.clone(),
    }
}

fn print_export_specifier(spec: &ExportSpecifier) -> String {
    match spec.exported {
        Some(ref exported) => format!("{} as {}", spec.local.name, exported.name),
        None => spec.local.name.clone(),
    }
}

/// The source text of a literal value.
pub fn print_literal(lit: &Literal) -> String {
    match lit {
        Literal::Null => "null".to_string(),
        Literal::Undefined => "undefined".to_string(),
        Literal::String(s) => quote(s),
        Literal::Boolean(b) => b.to_string(),
        Literal::Number(n) => format_number(*n),
        Literal::BigDecimal(d) => d.to_string(),
    }
}

/// Fixed six-decimal notation, with the JavaScript spellings for non-finite values.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        format!("{:.6}", n)
    }
}
