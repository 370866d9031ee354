#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// TypeRef parsing tests

#[test]
fn TypeRef___parse___simple_name() {
    let ty = TypeRef::parse("java.lang.String").unwrap();

    assert_eq!(ty, TypeRef::named("java.lang.String"));
    assert_eq!(ty.simple_name(), "String");
}

#[test]
fn TypeRef___parse___primitive() {
    let ty = TypeRef::parse("int").unwrap();

    assert_eq!(ty.name, "int");
    assert!(!ty.is_array());
}

#[test]
fn TypeRef___parse___generic_with_whitespace() {
    let ty = TypeRef::parse(" java.util.Map< java.lang.String , app.Order > ").unwrap();

    assert_eq!(
        ty,
        TypeRef::generic(
            "java.util.Map",
            vec![
                TypeRef::named("java.lang.String"),
                TypeRef::named("app.Order")
            ]
        )
    );
}

#[test]
fn TypeRef___parse___nested_generics() {
    let ty = TypeRef::parse("java.util.List<java.util.Set<app.Tag>>").unwrap();

    assert_eq!(ty.args.len(), 1);
    assert_eq!(ty.args[0].name, "java.util.Set");
    assert_eq!(ty.args[0].args[0].name, "app.Tag");
}

#[test]
fn TypeRef___parse___array_markers() {
    let ty = TypeRef::parse("byte[][]").unwrap();

    assert_eq!(ty.name, "byte");
    assert_eq!(ty.array_depth, 2);
    assert!(ty.is_array());
}

#[test_case(""; "empty")]
#[test_case("java.util.List<"; "unbalanced open")]
#[test_case("java.util.List<app.Order"; "missing close")]
#[test_case("java..String"; "empty segment")]
#[test_case("java.lang."; "trailing dot")]
#[test_case("app.Order>"; "trailing close")]
#[test_case("byte[x]"; "bad array marker")]
#[test_case("1abc"; "leading digit")]
#[test_case("java.util.List<>"; "empty argument")]
fn TypeRef___parse___rejects_malformed(descriptor: &str) {
    let result = TypeRef::parse(descriptor);

    assert!(matches!(
        result,
        Err(ModelError::InvalidTypeDescriptor { .. })
    ));
}

#[test]
fn TypeRef___display___normalizes_spacing() {
    let ty = TypeRef::parse("java.util.Map<java.lang.String,app.Order>").unwrap();

    assert_eq!(ty.to_string(), "java.util.Map<java.lang.String, app.Order>");
}

#[test]
fn TypeRef___deserialize___from_string() {
    let ty: TypeRef = serde_json::from_str("\"java.util.List<app.Order>\"").unwrap();

    assert_eq!(ty.name, "java.util.List");
    assert_eq!(ty.args[0].name, "app.Order");
}

#[test]
fn TypeRef___deserialize___malformed_is_error() {
    let result: Result<TypeRef, _> = serde_json::from_str("\"java.util.List<\"");

    assert!(result.is_err());
}

// BoxedScalar tests

#[test_case("java.lang.Integer", BoxedScalar::Integer)]
#[test_case("Integer", BoxedScalar::Integer)]
#[test_case("int", BoxedScalar::Integer)]
#[test_case("boolean", BoxedScalar::Boolean)]
#[test_case("char", BoxedScalar::Character)]
#[test_case("java.lang.String", BoxedScalar::String)]
fn BoxedScalar___from_type_name___recognizes(name: &str, expected: BoxedScalar) {
    assert_eq!(BoxedScalar::from_type_name(name), Some(expected));
}

#[test]
fn BoxedScalar___from_type_name___rejects_other_types() {
    assert_eq!(BoxedScalar::from_type_name("java.math.BigDecimal"), None);
    assert_eq!(BoxedScalar::from_type_name("app.Integer"), None);
}

#[test]
fn BoxedScalar___all___have_distinct_java_names() {
    let names: std::collections::BTreeSet<&str> =
        BoxedScalar::ALL.iter().map(|s| s.java_name()).collect();

    assert_eq!(names.len(), BoxedScalar::ALL.len());
}

#[test]
fn BoxedScalar___character___uses_full_java_name() {
    assert_eq!(BoxedScalar::Character.java_name(), "java.lang.Character");
    assert_eq!(BoxedScalar::Character.simple_name(), "Character");
}

// TypeExpr rendering tests

#[test]
fn TypeExpr___render___no_args() {
    let expr = TypeExpr::new("PString");

    assert_eq!(expr.render(None), "PString");
}

#[test]
fn TypeExpr___render___comma_without_space() {
    let expr = TypeExpr::new("PEnum")
        .with_name("QCustomer")
        .with_name("Status");

    assert_eq!(expr.render(None), "PEnum<QCustomer,Status>");
}

#[test]
fn TypeExpr___render___nested_expression() {
    let inner = TypeExpr::new("QAssocOrder").with_name("R");
    let expr = TypeExpr::new("TQAssocMany")
        .with_name("Order")
        .with_name("R")
        .with_arg(TypeArg::Expr(inner));

    assert_eq!(expr.to_string(), "TQAssocMany<Order,R,QAssocOrder<R>>");
}

#[test]
fn TypeExpr___render___boxed_uses_canonical_name_without_family() {
    let expr = TypeExpr::new("PArray")
        .with_name("QCustomer")
        .with_arg(TypeArg::Boxed(BoxedScalar::Integer));

    assert_eq!(expr.render(None), "PArray<QCustomer,Integer>");
}

#[test]
fn TypeExpr___render___boxed_uses_family_target() {
    let mut family = FamilyMapping::new();
    family.insert(BoxedScalar::Integer, "kotlin.Int");
    let expr = TypeExpr::new("PArray")
        .with_name("QCustomer")
        .with_arg(TypeArg::Boxed(BoxedScalar::Integer));

    assert_eq!(expr.render(Some(&family)), "PArray<QCustomer,Int>");
}
