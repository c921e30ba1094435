//! Printer tests.
//!
//! Each test builds a small tree by hand and checks the exact rendering.

use esgen_ast::*;
use esgen_printer::{PrintError, Printer};
use std::str::FromStr;

fn id(name: &str) -> Identifier {
    Identifier::new(name)
}

fn call(callee: impl Into<Expression>, args: Vec<ArgumentListElement>) -> CallExpression {
    CallExpression::new(callee, args)
}

fn expr_stmt(expr: impl Into<Expression>) -> StatementListItem {
    ExpressionStatement::new(expr).into()
}

fn block(items: Vec<StatementListItem>) -> Box<Statement> {
    Box::new(BlockStatement::new(items).into())
}

fn return_stmt(expr: impl Into<Expression>) -> StatementListItem {
    ReturnStatement::new(Some(expr.into())).into()
}

fn print_items(items: Vec<StatementListItem>) -> String {
    Printer::default().print_statements(&items).unwrap()
}

fn print_item(item: impl Into<StatementListItem>) -> String {
    print_items(vec![item.into()])
}

fn print_expr(expr: impl Into<Expression>) -> String {
    Printer::default().print_expression(&expr.into()).unwrap()
}

fn function(
    name: Option<&str>,
    params: Vec<FunctionParameter>,
    body: Vec<StatementListItem>,
    function_type: FunctionType,
) -> FunctionDeclaration {
    FunctionDeclaration {
        id: name.map(id),
        params,
        body: BlockStatement::new(body),
        function_type,
        ..Default::default()
    }
}

fn binary(operator: BinaryOperator, left: &str, right: &str) -> BinaryExpression {
    BinaryExpression::new(operator, id(left), id(right))
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_string_literal() {
    assert_eq!(print_expr(string_literal("hello")), "\"hello\"");
    assert_eq!(print_expr(string_literal("say \"hi\"")), "\"say \\\"hi\\\"\"");
}

#[test]
fn test_bool_null_undefined() {
    assert_eq!(print_expr(bool_literal(false)), "false");
    assert_eq!(print_expr(bool_literal(true)), "true");
    assert_eq!(print_expr(NULL), "null");
    assert_eq!(print_expr(UNDEFINED), "undefined");
}

#[test]
fn test_number_literals() {
    assert_eq!(print_expr(number_literal(10.123123).unwrap()), "10.123123");
    assert_eq!(print_expr(number_literal(42).unwrap()), "42.000000");
    assert_eq!(print_expr(Literal::Number(f64::NAN)), "NaN");
    assert_eq!(print_expr(Literal::Number(f64::NEG_INFINITY)), "-Infinity");
}

#[test]
fn test_big_decimal_literal() {
    let value = BigDecimal::from_str("10.123123").unwrap();
    assert_eq!(print_expr(number_literal(value).unwrap()), "10.123123");
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_simple_statements() {
    assert_eq!(print_item(EmptyStatement::default()), ";");
    assert_eq!(print_item(DebuggerStatement::default()), "debugger;");
    assert_eq!(print_item(ReturnStatement::new(None)), "return;");
    assert_eq!(print_items(vec![return_stmt(id("x"))]), "return x;");
    assert_eq!(print_item(BreakStatement::default()), "break;");
    assert_eq!(
        print_item(ContinueStatement {
            label: Some(id("outer")),
            ..Default::default()
        }),
        "continue outer;"
    );
    assert_eq!(
        print_item(ThrowStatement {
            data: NodeData::default(),
            argument: id("err").into(),
        }),
        "throw err;"
    );
}

#[test]
fn test_statements_join_without_trailing_newline() {
    let out = print_items(vec![
        expr_stmt(call(id("a"), vec![])),
        expr_stmt(call(id("b"), vec![])),
    ]);
    assert_eq!(out, "a();\nb();");
    assert_eq!(print_items(vec![]), "");
}

#[test]
fn test_block_as_statement_is_braced() {
    assert_eq!(print_item(BlockStatement::new(vec![])), "{}");
    assert_eq!(
        print_item(BlockStatement::new(vec![expr_stmt(id("a"))])),
        "{\n  a;\n}"
    );
}

#[test]
fn test_if_else_chain_stays_flat() {
    let stmt = IfStatement {
        data: NodeData::default(),
        test: id("a").into(),
        consequent: block(vec![ReturnStatement::new(None).into()]),
        alternate: Some(Box::new(
            IfStatement {
                data: NodeData::default(),
                test: id("b").into(),
                consequent: block(vec![]),
                alternate: Some(block(vec![expr_stmt(call(id("f"), vec![]))])),
            }
            .into(),
        )),
    };
    assert_eq!(
        print_item(stmt),
        "if (a) {\n  return;\n} else if (b) {} else {\n  f();\n}"
    );
}

#[test]
fn test_non_block_body_is_braced() {
    let stmt = WhileStatement {
        data: NodeData::default(),
        test: Expression::from(bool_literal(true)),
        body: Box::new(BreakStatement::default().into()),
    };
    assert_eq!(print_item(stmt), "while (true) {\n  break;\n}");
}

#[test]
fn test_do_while() {
    let stmt = DoWhileStatement {
        data: NodeData::default(),
        body: block(vec![expr_stmt(UpdateExpression::new(
            UpdateOperator::Increment,
            false,
            id("i"),
        ))]),
        test: binary(BinaryOperator::LessThan, "i", "n").into(),
    };
    assert_eq!(print_item(stmt), "do {\n  i++;\n} while (i < n);");
}

#[test]
fn test_with_statement() {
    let stmt = WithStatement {
        data: NodeData::default(),
        object: id("scope").into(),
        body: block(vec![expr_stmt(id("x"))]),
    };
    assert_eq!(print_item(stmt), "with (scope) {\n  x;\n}");
}

#[test]
fn test_for_statement() {
    let stmt = ForStatement {
        data: NodeData::default(),
        init: Some(
            VariableDeclaration::new(
                VariableKind::Let,
                vec![VariableDeclarator::new(id("i"), Some(id("start").into()))],
            )
            .into(),
        ),
        test: Some(binary(BinaryOperator::LessThan, "i", "n").into()),
        update: Some(UpdateExpression::new(UpdateOperator::Increment, false, id("i")).into()),
        body: block(vec![expr_stmt(call(id("f"), vec![id("i").into()]))]),
    };
    assert_eq!(
        print_item(stmt),
        "for (let i = start; i < n; i++) {\n  f(i);\n}"
    );
}

#[test]
fn test_for_statement_empty_slots() {
    let stmt = ForStatement {
        data: NodeData::default(),
        init: None,
        test: None,
        update: None,
        body: block(vec![]),
    };
    assert_eq!(print_item(stmt), "for (; ; ) {}");
}

#[test]
fn test_for_in_and_for_of() {
    let left = || -> ForInit {
        VariableDeclaration::new(VariableKind::Const, vec![VariableDeclarator::new(id("k"), None)])
            .into()
    };
    let for_in = ForInStatement {
        data: NodeData::default(),
        left: left(),
        right: id("obj").into(),
        body: block(vec![expr_stmt(call(id("use"), vec![id("k").into()]))]),
    };
    assert_eq!(print_item(for_in), "for (const k in obj) {\n  use(k);\n}");

    let for_of = ForOfStatement {
        data: NodeData::default(),
        is_await: false,
        left: left(),
        right: id("list").into(),
        body: block(vec![]),
    };
    assert_eq!(print_item(for_of.clone()), "for (const k in list) {}");

    let for_await = ForOfStatement { is_await: true, ..for_of };
    assert_eq!(print_item(for_await), "for await (const k in list) {}");
}

#[test]
fn test_switch_statement() {
    let stmt = SwitchStatement {
        data: NodeData::default(),
        discriminant: id("x").into(),
        cases: vec![
            SwitchCase {
                test: Some(id("a").into()),
                consequent: vec![
                    expr_stmt(call(id("f"), vec![])),
                    BreakStatement::default().into(),
                ],
                ..Default::default()
            },
            SwitchCase {
                test: None,
                consequent: vec![expr_stmt(call(id("g"), vec![]))],
                ..Default::default()
            },
        ],
    };
    assert_eq!(
        print_item(stmt),
        "switch (x) {\n  case a:\n    f();\n    break;\n  default:\n    g();\n}"
    );
}

#[test]
fn test_try_catch_finally() {
    let stmt = TryStatement {
        block: BlockStatement::new(vec![expr_stmt(call(id("f"), vec![]))]),
        handler: Some(CatchClause {
            param: Some(id("e").into()),
            body: BlockStatement::new(vec![expr_stmt(call(id("log"), vec![id("e").into()]))]),
            ..Default::default()
        }),
        finalizer: Some(BlockStatement::new(vec![expr_stmt(call(id("done"), vec![]))])),
        ..Default::default()
    };
    assert_eq!(
        print_item(stmt),
        "try {\n  f();\n} catch (e) {\n  log(e);\n} finally {\n  done();\n}"
    );

    let bare = TryStatement {
        handler: Some(CatchClause::default()),
        ..Default::default()
    };
    assert_eq!(print_item(bare), "try {} catch {}");
}

#[test]
fn test_labeled_statement() {
    let stmt = LabeledStatement {
        data: NodeData::default(),
        label: id("outer"),
        body: block(vec![BreakStatement {
            label: Some(id("outer")),
            ..Default::default()
        }
        .into()]),
    };
    assert_eq!(print_item(stmt), "outer: {\n  break outer;\n}");
}

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn test_variable_declaration() {
    let decl = VariableDeclaration::new(
        VariableKind::Let,
        vec![
            VariableDeclarator::new(id("a"), Some(id("x").into())),
            VariableDeclarator::new(id("b"), None),
        ],
    );
    assert_eq!(print_item(decl), "let a = x, b;");
}

#[test]
fn test_function_declarations() {
    let f = function(
        Some("f"),
        vec![id("x").into()],
        vec![IfStatement {
            data: NodeData::default(),
            test: id("x").into(),
            consequent: block(vec![return_stmt(id("x"))]),
            alternate: None,
        }
        .into()],
        FunctionType::Normal,
    );
    assert_eq!(
        print_item(f),
        "function f(x) {\n  if (x) {\n    return x;\n  }\n}"
    );

    let load = function(Some("load"), vec![], vec![], FunctionType::Async);
    assert_eq!(print_item(load), "async function load() {}");

    let gen = function(Some("gen"), vec![], vec![], FunctionType::Generator);
    assert_eq!(print_item(gen), "function* gen() {}");
}

#[test]
fn test_class_declaration() {
    let constructor = MethodDefinition {
        data: NodeData::default(),
        key: id("constructor").into(),
        value: FunctionExpression {
            params: vec![id("x").into()],
            body: BlockStatement::new(vec![expr_stmt(AssignmentExpression::new(
                AssignmentOperator::Assign,
                StaticMemberExpression::new(ThisExpression::default(), id("x")),
                id("x"),
            ))]),
            ..Default::default()
        },
        kind: MethodKind::Constructor,
        is_static: false,
    };
    let create = MethodDefinition {
        data: NodeData::default(),
        key: id("create").into(),
        value: FunctionExpression {
            function_type: FunctionType::Async,
            ..Default::default()
        },
        kind: MethodKind::Method,
        is_static: true,
    };
    let getter = MethodDefinition {
        data: NodeData::default(),
        key: id("value").into(),
        value: FunctionExpression {
            body: BlockStatement::new(vec![return_stmt(StaticMemberExpression::new(
                ThisExpression::default(),
                id("v"),
            ))]),
            ..Default::default()
        },
        kind: MethodKind::Get,
        is_static: false,
    };
    let count = PropertyDefinition {
        data: NodeData::default(),
        key: id("count").into(),
        value: Some(id("zero").into()),
        is_static: true,
    };
    let computed = PropertyDefinition {
        data: NodeData::default(),
        key: string_literal("k").into(),
        value: None,
        is_static: false,
    };

    let class = ClassDeclaration {
        id: Some(id("Foo")),
        super_class: Some(Box::new(binary(BinaryOperator::Add, "a", "b").into())),
        body: ClassBody {
            body: vec![
                constructor.into(),
                create.into(),
                getter.into(),
                count.into(),
                computed.into(),
            ],
            ..Default::default()
        },
        ..Default::default()
    };
    let expected = "class Foo extends (a + b) {\n  constructor(x) {\n    this.x = x;\n  }\n  static async create() {}\n  get value() {\n    return this.v;\n  }\n  static count = zero;\n  [\"k\"];\n}";
    assert_eq!(print_item(class), expected);
}

#[test]
fn test_class_without_members_or_name() {
    let class = ClassDeclaration {
        id: Some(id("Empty")),
        super_class: Some(Box::new(id("Base").into())),
        ..Default::default()
    };
    assert_eq!(print_item(class), "class Empty extends Base {}");
    assert_eq!(print_expr(ClassExpression::default()), "class {}");
}

#[test]
fn test_generator_method() {
    let class = ClassExpression {
        body: ClassBody {
            body: vec![MethodDefinition {
                data: NodeData::default(),
                key: id("items").into(),
                value: FunctionExpression {
                    function_type: FunctionType::Generator,
                    ..Default::default()
                },
                kind: MethodKind::Method,
                is_static: false,
            }
            .into()],
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(print_expr(class), "class {\n  *items() {}\n}");
}

#[test]
fn test_import_declarations() {
    let default = ImportDeclaration::new(
        "@aws-amplify/core",
        vec![ImportDeclarationSpecifier::Default(ImportDefaultSpecifier {
            local: id("Amplify"),
            ..Default::default()
        })],
    );
    assert_eq!(print_item(default), "import Amplify from \"@aws-amplify/core\";");

    let mixed = ImportDeclaration::new(
        "react",
        vec![
            ImportDefaultSpecifier {
                local: id("React"),
                ..Default::default()
            }
            .into(),
            ImportNamespaceSpecifier {
                local: id("All"),
                ..Default::default()
            }
            .into(),
        ],
    );
    assert_eq!(print_item(mixed), "import React, * as All from \"react\";");

    let named = ImportDeclaration::new(
        "m",
        vec![ImportSpecifier {
            named_imports: vec![NamedImport::new("a"), NamedImport::renamed("b", "c")],
            ..Default::default()
        }
        .into()],
    );
    assert_eq!(print_item(named), "import { a, b as c } from \"m\";");

    let empty_named = ImportDeclaration::new("m", vec![ImportSpecifier::default().into()]);
    assert_eq!(print_item(empty_named), "import {} from \"m\";");

    assert_eq!(print_item(ImportDeclaration::new("polyfill", vec![])), "import \"polyfill\";");
}

#[test]
fn test_export_declarations() {
    let default = ExportDefaultDeclaration {
        data: NodeData::default(),
        declaration: id("app").into(),
    };
    assert_eq!(print_item(default), "export default app");

    let default_fn = ExportDefaultDeclaration {
        data: NodeData::default(),
        declaration: function(None, vec![], vec![], FunctionType::Normal).into(),
    };
    assert_eq!(print_item(default_fn), "export default function () {}");

    let named = ExportNamedDeclaration::declaration(VariableDeclaration::new(
        VariableKind::Const,
        vec![VariableDeclarator::new(id("x"), Some(id("y").into()))],
    ));
    assert_eq!(print_item(named), "export const x = y;");

    let specifiers = ExportNamedDeclaration {
        specifiers: vec![
            ExportSpecifier {
                local: id("a"),
                ..Default::default()
            },
            ExportSpecifier {
                local: id("b"),
                exported: Some(id("c")),
                ..Default::default()
            },
        ],
        ..Default::default()
    };
    assert_eq!(print_item(specifiers), "export { a, b as c };");

    let reexport = ExportNamedDeclaration {
        specifiers: vec![ExportSpecifier {
            local: id("a"),
            ..Default::default()
        }],
        source: Some("m".to_string()),
        ..Default::default()
    };
    assert_eq!(print_item(reexport), "export { a } from \"m\";");
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_static_member_parenthesization() {
    let sum = StaticMemberExpression::new(binary(BinaryOperator::Add, "a", "b"), id("toString"));
    assert_eq!(print_expr(sum), "(a + b).toString");

    let after_call = StaticMemberExpression::new(call(id("f"), vec![]), id("x"));
    assert_eq!(print_expr(after_call), "f().x");

    let awaited = StaticMemberExpression::new(
        AwaitExpression::new(StaticMemberExpression::new(id("Auth"), call(id("currentSession"), vec![]))),
        StaticMemberExpression::new(call(id("getAccessToken"), vec![]), call(id("getJwtToken"), vec![])),
    );
    assert_eq!(
        print_expr(awaited),
        "(await Auth.currentSession()).getAccessToken().getJwtToken()"
    );
}

#[test]
fn test_computed_member_and_chains() {
    let computed = ComputedMemberExpression::new(id("a"), binary(BinaryOperator::Add, "b", "c"));
    assert_eq!(print_expr(computed), "a[b + c]");

    let optional_call = ChainExpression::new(call(id("fn"), vec![id("x").into()]));
    assert_eq!(print_expr(optional_call), "fn?.(x)");

    let optional_index = ChainExpression::new(ComputedMemberExpression::new(id("obj"), id("key")));
    assert_eq!(print_expr(optional_index), "obj?.[key]");

    let optional_member = ChainExpression::new(StaticMemberExpression::new(id("a"), id("b")));
    assert_eq!(print_expr(optional_member), "a?.b");
}

#[test]
fn test_call_callee_plain_and_new_callee_parenthesized() {
    assert_eq!(print_expr(NewExpression::new(id("Date"), vec![])), "new Date()");
    assert_eq!(
        print_expr(NewExpression::new(call(id("factory"), vec![]), vec![id("x").into()])),
        "new (factory())(x)"
    );

    let anonymous = FunctionExpression::default();
    assert_eq!(print_expr(call(anonymous, vec![])), "function () {}()");
    assert_eq!(print_expr(call(call(id("f"), vec![]), vec![])), "f()()");
    assert_eq!(
        print_expr(call(ComputedMemberExpression::new(id("a"), id("i")), vec![])),
        "a[i]()"
    );
    let curried = ChainExpression::new(call(call(id("f"), vec![]), vec![id("x").into()]));
    assert_eq!(print_expr(curried), "f()?.(x)");

    let member = call(StaticMemberExpression::new(id("console"), id("log")), vec![
        string_literal("hi").into(),
        SpreadElement::new(id("rest")).into(),
    ]);
    assert_eq!(print_expr(member), "console.log(\"hi\", ...rest)");
}

#[test]
fn test_unary_and_update() {
    assert_eq!(print_expr(UnaryExpression::new(UnaryOperator::Not, id("a"))), "!a");
    assert_eq!(print_expr(UnaryExpression::new(UnaryOperator::TypeOf, id("x"))), "typeof x");
    assert_eq!(
        print_expr(UnaryExpression::new(UnaryOperator::Minus, binary(BinaryOperator::Add, "a", "b"))),
        "-(a + b)"
    );
    assert_eq!(
        print_expr(UnaryExpression::new(
            UnaryOperator::IncrementPostfix,
            StaticMemberExpression::new(id("a"), id("b")),
        )),
        "a.b++"
    );
    assert_eq!(
        print_expr(UpdateExpression::new(UpdateOperator::Decrement, true, id("i"))),
        "--i"
    );
}

#[test]
fn test_binary_operators_add_no_parentheses() {
    let nested = BinaryExpression::new(
        BinaryOperator::Multiply,
        binary(BinaryOperator::Add, "a", "b"),
        id("c"),
    );
    assert_eq!(print_expr(nested), "a + b * c");
    assert_eq!(
        print_expr(LogicalExpression::new(LogicalOperator::NullishCoalescing, id("a"), id("b"))),
        "a ?? b"
    );
    assert_eq!(
        print_expr(AssignmentExpression::new(AssignmentOperator::AddAssign, id("x"), id("y"))),
        "x += y"
    );
}

#[test]
fn test_misc_expressions() {
    assert_eq!(print_expr(ConditionalExpression::new(id("t"), id("a"), id("b"))), "t? a: b");
    assert_eq!(
        print_expr(SequenceExpression {
            expressions: vec![id("a").into(), id("b").into()],
            ..Default::default()
        }),
        "a, b"
    );
    assert_eq!(print_expr(AwaitExpression::new(id("p"))), "await p");
    assert_eq!(print_expr(YieldExpression::default()), "yield");
    assert_eq!(
        print_expr(YieldExpression {
            argument: Some(Box::new(id("gen").into())),
            delegate: true,
            ..Default::default()
        }),
        "yield* gen"
    );
    assert_eq!(print_expr(ThisExpression::default()), "this");
    assert_eq!(print_expr(Super::default()), "super");
    assert_eq!(
        print_expr(MetaProperty {
            meta: id("new"),
            property: id("target"),
            ..Default::default()
        }),
        "new.target"
    );
    assert_eq!(
        print_expr(ImportExpression {
            data: NodeData::default(),
            source: Box::new(string_literal("./m").into()),
        }),
        "import(\"./m\")"
    );
}

#[test]
fn test_arrow_function() {
    let arrow = ArrowFunctionExpression {
        params: vec![id("a").into(), id("b").into()],
        body: BlockStatement::new(vec![return_stmt(id("a"))]),
        is_async: true,
        ..Default::default()
    };
    assert_eq!(print_expr(arrow), "async (a, b) => {\n  return a;\n}");
    assert_eq!(print_expr(ArrowFunctionExpression::default()), "() => {}");
}

// ============================================================================
// Objects, arrays & patterns
// ============================================================================

#[test]
fn test_empty_collections() {
    assert_eq!(print_expr(ObjectExpression::default()), "{}");
    assert_eq!(print_expr(ArrayExpression::default()), "[]");

    let decl = VariableDeclaration::new(
        VariableKind::Let,
        vec![VariableDeclarator::new(ArrayPattern::default(), Some(id("xs").into()))],
    );
    assert_eq!(print_item(decl), "let [] = xs;");

    let decl = VariableDeclaration::new(
        VariableKind::Const,
        vec![VariableDeclarator::new(ObjectPattern::default(), Some(id("o").into()))],
    );
    assert_eq!(print_item(decl), "const {} = o;");
}

#[test]
fn test_object_expression() {
    let object = ObjectExpression::new(vec![
        Property::shorthand(id("a")).into(),
        SpreadElement::new(id("rest")).into(),
        Property::new(string_literal("k"), id("v")).into(),
    ]);
    assert_eq!(print_expr(object), "{\n  a,\n  ...rest,\n  [\"k\"]: v,\n}");
}

#[test]
fn test_array_expression() {
    let array = ArrayExpression::new(vec![id("a").into(), SpreadElement::new(id("b")).into()]);
    assert_eq!(print_expr(array), "[\n  a, ...b,\n]");
}

#[test]
fn test_nested_object_indentation_composes() {
    let inner = ObjectExpression::new(vec![Property::new(id("b"), id("c")).into()]);
    let outer = ObjectExpression::new(vec![Property::new(id("a"), inner).into()]);
    assert_eq!(print_expr(outer), "{\n  a: {\n    b: c,\n  },\n}");
}

#[test]
fn test_object_pattern() {
    let pattern = ObjectPattern {
        properties: vec![
            ObjectPatternProperty::Property(PropertyPattern {
                data: NodeData::default(),
                key: id("a").into(),
                value: None,
            }),
            ObjectPatternProperty::Property(PropertyPattern {
                data: NodeData::default(),
                key: id("b").into(),
                value: Some(id("c").into()),
            }),
            ObjectPatternProperty::Rest(RestElement {
                data: NodeData::default(),
                argument: id("others").into(),
            }),
        ],
        ..Default::default()
    };
    let decl = VariableDeclaration::new(
        VariableKind::Const,
        vec![VariableDeclarator::new(pattern, Some(id("obj").into()))],
    );
    assert_eq!(print_item(decl), "const {\n  a,\n  b: c,\n  ...others\n} = obj;");
}

#[test]
fn test_array_pattern_parameters() {
    let pattern = ArrayPattern {
        elements: vec![
            id("x").into(),
            AssignmentPattern {
                data: NodeData::default(),
                left: id("y").into(),
                right: Box::new(id("z").into()),
            }
            .into(),
        ],
        ..Default::default()
    };
    let rest = RestElement {
        data: NodeData::default(),
        argument: id("rest").into(),
    };
    let f = function(Some("f"), vec![pattern.into(), rest.into()], vec![], FunctionType::Normal);
    assert_eq!(print_item(f), "function f([\n  x,\n  y = z\n], ...rest) {}");
}

// ============================================================================
// Unsupported constructs
// ============================================================================

#[test]
fn test_template_literal_is_unsupported() {
    let printer = Printer::default();
    let err = printer
        .print_expression(&TemplateLiteral::default().into())
        .unwrap_err();
    assert_eq!(err, PrintError::Unsupported { kind: NodeKind::TemplateLiteral });
}

#[test]
fn test_unsupported_inside_tree_fails_whole_print() {
    let tagged = TaggedTemplateExpression {
        data: NodeData::default(),
        tag: Box::new(id("css").into()),
        quasi: TemplateLiteral::default(),
    };
    let f = function(Some("f"), vec![], vec![return_stmt(tagged)], FunctionType::Normal);
    let items = vec![expr_stmt(id("ok")), f.into()];
    let err = Printer::default().print_statements(&items).unwrap_err();
    assert_eq!(
        err,
        PrintError::Unsupported { kind: NodeKind::TaggedTemplateExpression }
    );
}

#[test]
fn test_directive_and_export_all_are_unsupported() {
    let printer = Printer::default();
    let directive: StatementListItem = Directive {
        data: NodeData::default(),
        expression: string_literal("use strict").into(),
        directive: "use strict".to_string(),
    }
    .into();
    assert!(matches!(
        printer.print_statement_list_item(&directive),
        Err(PrintError::Unsupported { kind: NodeKind::Directive })
    ));

    let export_all: StatementListItem = ExportAllDeclaration {
        source: "m".to_string(),
        ..Default::default()
    }
    .into();
    assert!(matches!(
        printer.print_statement_list_item(&export_all),
        Err(PrintError::Unsupported { kind: NodeKind::ExportAllDeclaration })
    ));
}
