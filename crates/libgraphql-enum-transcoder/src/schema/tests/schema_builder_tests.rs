use crate::operation::OperationKind;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaLookup;
use crate::schema::SchemaType;
use crate::schema::TypeAnnotation;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn builtin_scalars_are_injected() -> Result<()> {
    let schema = SchemaBuilder::from_str("type Query { field: String }")?
        .build()?;

    for name in ["Boolean", "Float", "ID", "Int", "String"] {
        assert!(matches!(
            schema.type_by_name(name),
            Some(SchemaType::Scalar(_)),
        ));
    }
    assert_eq!(schema.all_types().len(), 6);

    Ok(())
}

#[test]
fn default_root_operation_types() -> Result<()> {
    let schema = SchemaBuilder::from_str(concat!(
        "type Query { a: Int }\n",
        "type Mutation { b: Int }\n",
    ))?.build()?;

    assert_eq!(schema.root_type_name(OperationKind::Query), Some("Query"));
    assert_eq!(schema.root_type_name(OperationKind::Mutation), Some("Mutation"));
    assert_eq!(schema.root_type_name(OperationKind::Subscription), None);
    assert!(schema.root_type(OperationKind::Subscription).is_none());

    Ok(())
}

#[test]
fn schema_definition_overrides_root_operation_types() -> Result<()> {
    let schema = SchemaBuilder::from_str(r#"
        schema { query: RootQuery }
        type RootQuery { a: Int }
        type Query { b: Int }
    "#)?.build()?;

    let root = schema.root_type(OperationKind::Query)
        .and_then(SchemaType::as_object)
        .unwrap();
    assert_eq!(root.name(), "RootQuery");
    assert!(root.fields().contains_key("a"));

    Ok(())
}

#[test]
fn field_types_keep_their_wrappers() -> Result<()> {
    let schema = SchemaBuilder::from_str(r#"
        enum Fruit { Apple Peach }
        type ShopList { fruits: [Fruit!] }
        input FruitFilter { fruit: Fruit! nested: [FruitFilter] }
    "#)?.build()?;

    let shop = schema.type_by_name("ShopList")
        .and_then(SchemaType::as_object)
        .unwrap();
    assert_eq!(
        shop.fields().get("fruits"),
        Some(&TypeAnnotation::list(TypeAnnotation::non_null("Fruit"))),
    );

    let filter = schema.type_by_name("FruitFilter")
        .and_then(SchemaType::as_input_object)
        .unwrap();
    assert_eq!(filter.fields().get("fruit").unwrap().to_string(), "Fruit!");
    assert_eq!(filter.fields().get("nested").unwrap().to_string(), "[FruitFilter]");

    let fruit = schema.type_by_name("Fruit")
        .and_then(SchemaType::as_enum)
        .unwrap();
    assert_eq!(fruit.values(), ["Apple", "Peach"]);

    Ok(())
}

#[test]
fn extensions_merge_regardless_of_order() -> Result<()> {
    let schema = SchemaBuilder::from_str("extend enum Fruit { Peach }")?
        .load_str("enum Fruit { Apple }")?
        .load_str("type Query { a: Int } extend type Query { fruit: Fruit }")?
        .build()?;

    let fruit = schema.type_by_name("Fruit")
        .and_then(SchemaType::as_enum)
        .unwrap();
    assert_eq!(fruit.values(), ["Apple", "Peach"]);

    let query = schema.root_type(OperationKind::Query)
        .and_then(SchemaType::as_object)
        .unwrap();
    assert_eq!(
        query.fields().keys().collect::<Vec<_>>(),
        vec!["a", "fruit"],
    );

    Ok(())
}

#[test]
fn duplicate_type_definition_is_an_error() {
    let result = SchemaBuilder::from_str("enum Fruit { Apple } enum Fruit { Peach }");
    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. })
            if type_name == "Fruit"
    ));
}

#[test]
fn duplicate_field_definition_is_an_error() {
    let result = SchemaBuilder::from_str("type Query { a: Int a: String }");
    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateFieldDefinition { type_name, field_name, .. })
            if type_name == "Query" && field_name == "a"
    ));
}

#[test]
fn extension_of_undefined_type_is_an_error() -> Result<()> {
    let result = SchemaBuilder::from_str("extend enum Fruit { Apple }")?.build();
    assert!(matches!(
        result,
        Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. })
            if type_name == "Fruit"
    ));
    Ok(())
}

#[test]
fn extension_of_different_kind_is_an_error() -> Result<()> {
    let result = SchemaBuilder::from_str("enum Fruit { Apple } extend type Fruit { a: Int }")?
        .build();
    assert!(matches!(
        result,
        Err(SchemaBuildError::InvalidExtensionType { type_name, type_kind: "enum", .. })
            if type_name == "Fruit"
    ));
    Ok(())
}

#[test]
fn parse_errors_are_reported() {
    assert!(matches!(
        SchemaBuilder::from_str("type Query {"),
        Err(SchemaBuildError::ParseError(_)),
    ));
}
