use crate::conversion::value_format_converter;
use crate::conversion::EnumValueFormat;
use crate::conversion::UnknownEnumValueFormat;
use proptest::prelude::*;

#[test]
fn camel_case() {
    let format = EnumValueFormat::CamelCase;
    assert_eq!(format.convert("FANCY_CAT"), "fancyCat");
    assert_eq!(format.convert("fancy-cat"), "fancyCat");
    assert_eq!(format.convert("FancyCat"), "fancyCat");
    assert_eq!(format.convert("fancy cat_mixed-Separators"), "fancyCatMixedSeparators");
}

#[test]
fn pascal_case() {
    let format = EnumValueFormat::PascalCase;
    assert_eq!(format.convert("FANCY_CAT"), "FancyCat");
    assert_eq!(format.convert("GRAPE_FRUIT"), "GrapeFruit");
    assert_eq!(format.convert("blue-berry"), "BlueBerry");
}

#[test]
fn kebab_case() {
    let format = EnumValueFormat::KebabCase;
    assert_eq!(format.convert("FancyCat"), "fancy-cat");
    assert_eq!(format.convert("FANCY_CAT"), "fancy-cat");
    assert_eq!(format.convert("anonymousUser"), "anonymous-user");
}

#[test]
fn snake_case() {
    let format = EnumValueFormat::SnakeCase;
    assert_eq!(format.convert("FancyCat"), "fancy_cat");
    assert_eq!(format.convert("fancy-cat"), "fancy_cat");
}

#[test]
fn screaming_snake_case() {
    let format = EnumValueFormat::ScreamingSnakeCase;
    assert_eq!(format.convert("FancyCat"), "FANCY_CAT");
    assert_eq!(format.convert("BlueBerry"), "BLUE_BERRY");
    assert_eq!(format.convert("internal server error"), "INTERNAL_SERVER_ERROR");
}

#[test]
fn word_boundaries() {
    let snake = EnumValueFormat::SnakeCase;
    assert_eq!(snake.convert("HTTPStatus"), "http_status");
    assert_eq!(snake.convert("status404NotFound"), "status404_not_found");
    assert_eq!(snake.convert("__FANCY__CAT__"), "fancy_cat");
    assert_eq!(snake.convert(""), "");
    assert_eq!(snake.convert("--"), "");
}

#[test]
fn missing_format_is_not_a_converter() {
    assert!(value_format_converter(None).is_none());

    let converter = value_format_converter(Some(EnumValueFormat::KebabCase)).unwrap();
    assert_eq!(converter("FancyCat"), "fancy-cat");
    assert_eq!(converter(""), "");
}

#[test]
fn names_round_trip_through_serde_and_from_str() {
    for format in [
        EnumValueFormat::CamelCase,
        EnumValueFormat::KebabCase,
        EnumValueFormat::PascalCase,
        EnumValueFormat::ScreamingSnakeCase,
        EnumValueFormat::SnakeCase,
    ] {
        let json = serde_json::to_value(format).unwrap();
        assert_eq!(json, serde_json::Value::String(format.to_string()));
        assert_eq!(format.as_str().parse::<EnumValueFormat>(), Ok(format));
    }

    assert_eq!(
        "ScreamingSnakeCase".parse::<EnumValueFormat>(),
        Ok(EnumValueFormat::ScreamingSnakeCase),
    );
    assert_eq!(
        "Title Case".parse::<EnumValueFormat>(),
        Err(UnknownEnumValueFormat("Title Case".to_string())),
    );
}

proptest! {
    #[test]
    fn pascal_and_screaming_snake_invert_each_other(
        words in prop::collection::vec("[a-z]{2,8}", 1..5),
    ) {
        let pascal = EnumValueFormat::PascalCase.convert(&words.join("_"));
        let screaming = EnumValueFormat::ScreamingSnakeCase.convert(&pascal);
        prop_assert_eq!(&screaming, &words.join("_").to_uppercase());
        prop_assert_eq!(EnumValueFormat::PascalCase.convert(&screaming), pascal);
    }

    #[test]
    fn separated_conversions_are_idempotent(value in "[A-Za-z0-9_ -]{0,24}") {
        for format in [
            EnumValueFormat::KebabCase,
            EnumValueFormat::ScreamingSnakeCase,
            EnumValueFormat::SnakeCase,
        ] {
            let once = format.convert(&value);
            prop_assert_eq!(format.convert(&once), once);
        }
    }
}
