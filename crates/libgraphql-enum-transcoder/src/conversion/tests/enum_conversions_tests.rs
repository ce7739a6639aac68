use crate::conversion::ConversionDirection;
use crate::conversion::EnumConversion;
use crate::conversion::EnumConversionError;
use crate::conversion::EnumConversionFn;
use crate::conversion::EnumConversions;
use crate::conversion::EnumValueFormat;
use crate::conversion::EnumValueFormats;
use crate::conversion::EnumValueMap;
use serde_json::json;
use serde_json::Value;
use std::sync::Arc;

fn animal_value_map() -> EnumValueMap {
    [
        ("DOG", "dog"),
        ("CAT", "cat"),
        ("FANCY_CAT", "fancy-cat"),
    ].into_iter().collect()
}

fn suffix_fn(suffix: &'static str) -> EnumConversionFn {
    Arc::new(move |value: &Value| -> Result<Value, EnumConversionError> {
        Ok(Value::String(format!("{}{suffix}", value.as_str().unwrap_or_default())))
    })
}

#[test]
fn no_configuration_is_identity() {
    let conversions = EnumConversions::default();

    assert!(matches!(
        conversions.resolve("Animal", ConversionDirection::Serialize),
        EnumConversion::Identity,
    ));
    assert_eq!(
        conversions.convert("Animal", ConversionDirection::Parse, json!("CAT")),
        Ok(json!("CAT")),
    );
}

#[test]
fn function_map_wins_over_value_map_and_format() {
    let conversions = EnumConversions {
        serializers: [("Animal".to_string(), suffix_fn("!"))].into_iter().collect(),
        value_maps: [("Animal".to_string(), animal_value_map())].into_iter().collect(),
        value_formats: EnumValueFormats {
            server: Some(EnumValueFormat::KebabCase),
            ..Default::default()
        },
        ..Default::default()
    };

    assert_eq!(
        conversions.convert("Animal", ConversionDirection::Serialize, json!("CAT")),
        Ok(json!("CAT!")),
    );

    // No parser function configured: the value map applies when parsing.
    assert_eq!(
        conversions.convert("Animal", ConversionDirection::Parse, json!("fancy-cat")),
        Ok(json!("FANCY_CAT")),
    );
}

#[test]
fn value_map_wins_over_format() {
    let conversions = EnumConversions {
        value_maps: [("Animal".to_string(), animal_value_map())].into_iter().collect(),
        value_formats: EnumValueFormats {
            client: Some(EnumValueFormat::PascalCase),
            server: Some(EnumValueFormat::ScreamingSnakeCase),
            ..Default::default()
        },
        ..Default::default()
    };

    assert_eq!(
        conversions.convert("Animal", ConversionDirection::Serialize, json!("FANCY_CAT")),
        Ok(json!("fancy-cat")),
    );

    // Other enums still fall through to the naming convention.
    assert_eq!(
        conversions.convert("Fruit", ConversionDirection::Serialize, json!("GrapeFruit")),
        Ok(json!("GRAPE_FRUIT")),
    );
    assert_eq!(
        conversions.convert("Fruit", ConversionDirection::Parse, json!("GRAPE_FRUIT")),
        Ok(json!("GrapeFruit")),
    );
}

#[test]
fn unmapped_values_pass_through_value_maps() {
    let conversions = EnumConversions {
        value_maps: [("Animal".to_string(), animal_value_map())].into_iter().collect(),
        ..Default::default()
    };

    assert_eq!(
        conversions.convert("Animal", ConversionDirection::Serialize, json!("HAMSTER")),
        Ok(json!("HAMSTER")),
    );
    assert_eq!(
        conversions.convert("Animal", ConversionDirection::Parse, json!("hamster")),
        Ok(json!("hamster")),
    );
}

#[test]
fn value_maps_support_non_string_server_values() {
    let status_map: EnumValueMap = [
        ("OK", json!(200)),
        ("FORBIDDEN", json!(403)),
    ].into_iter().collect();
    let conversions = EnumConversions {
        value_maps: [("HttpStatus".to_string(), status_map)].into_iter().collect(),
        ..Default::default()
    };

    assert_eq!(
        conversions.convert("HttpStatus", ConversionDirection::Parse, json!(403)),
        Ok(json!("FORBIDDEN")),
    );
    assert_eq!(
        conversions.convert("HttpStatus", ConversionDirection::Serialize, json!("OK")),
        Ok(json!(200)),
    );
}

#[test]
fn non_injective_value_map_parses_to_first_key() {
    let map: EnumValueMap = [
        ("CAT", "cat"),
        ("KITTEN", "cat"),
    ].into_iter().collect();

    assert_eq!(map.client_value(&json!("cat")), Some("CAT"));
}

#[test]
fn per_enum_format_overrides_global_format() {
    let formats = EnumValueFormats {
        client: Some(EnumValueFormat::PascalCase),
        client_enums: [("Animal".to_string(), EnumValueFormat::CamelCase)].into_iter().collect(),
        server: Some(EnumValueFormat::ScreamingSnakeCase),
        server_enums: [("Animal".to_string(), EnumValueFormat::KebabCase)].into_iter().collect(),
    };

    assert_eq!(
        formats.target_format("Animal", ConversionDirection::Parse),
        Some(EnumValueFormat::CamelCase),
    );
    assert_eq!(
        formats.target_format("Animal", ConversionDirection::Serialize),
        Some(EnumValueFormat::KebabCase),
    );
    assert_eq!(
        formats.target_format("Fruit", ConversionDirection::Parse),
        Some(EnumValueFormat::PascalCase),
    );
}

#[test]
fn formats_leave_non_string_values_alone() {
    let conversions = EnumConversions {
        value_formats: EnumValueFormats {
            server: Some(EnumValueFormat::SnakeCase),
            ..Default::default()
        },
        ..Default::default()
    };

    assert_eq!(
        conversions.convert("HttpStatus", ConversionDirection::Serialize, json!(200)),
        Ok(json!(200)),
    );
}

#[test]
fn null_never_reaches_a_conversion() {
    let failing: EnumConversionFn = Arc::new(|_: &Value| -> Result<Value, EnumConversionError> {
        Err(EnumConversionError::new("should not be called"))
    });
    let conversions = EnumConversions {
        parsers: [("Animal".to_string(), failing)].into_iter().collect(),
        ..Default::default()
    };

    assert_eq!(
        conversions.convert("Animal", ConversionDirection::Parse, Value::Null),
        Ok(Value::Null),
    );
}

#[test]
fn function_errors_are_tagged_with_the_enum_name() {
    let failing: EnumConversionFn = Arc::new(|_: &Value| -> Result<Value, EnumConversionError> {
        Err(EnumConversionError::new("boom"))
    });
    let conversions = EnumConversions {
        parsers: [("Animal".to_string(), failing)].into_iter().collect(),
        ..Default::default()
    };

    let err = conversions
        .convert("Animal", ConversionDirection::Parse, json!("cat"))
        .unwrap_err();
    assert_eq!(err.enum_name(), Some("Animal"));
    assert_eq!(err.to_string(), "Failed to convert a value of enum `Animal`: boom");

    let err = EnumConversionError::unconvertible("Fruit", json!("KIWI"))
        .with_enum_name("Animal");
    assert_eq!(err.enum_name(), Some("Fruit"));
}

#[test]
fn value_maps_and_formats_deserialize_from_json() {
    let map: EnumValueMap = serde_json::from_value(json!({
        "DOG": "dog",
        "OK": 200,
    })).unwrap();
    assert_eq!(map.server_value("OK"), Some(&json!(200)));
    assert_eq!(map.len(), 2);

    let formats: EnumValueFormats = serde_json::from_value(json!({
        "client": "PascalCase",
        "server": "SCREAMING_SNAKE_CASE",
        "serverEnums": { "Animal": "kebab-case" },
    })).unwrap();
    assert_eq!(formats.client, Some(EnumValueFormat::PascalCase));
    assert_eq!(formats.server_enums.get("Animal"), Some(&EnumValueFormat::KebabCase));
    assert!(formats.client_enums.is_empty());
}
