use heck::ToKebabCase;
use heck::ToLowerCamelCase;
use heck::ToShoutySnakeCase;
use heck::ToSnakeCase;
use heck::ToUpperCamelCase;
use thiserror::Error;

/// A naming convention for enum values, such as `PascalCase` on the client
/// and `SCREAMING_SNAKE_CASE` on the server.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum EnumValueFormat {
    /// `fancyCat`
    #[serde(rename = "camelCase")]
    CamelCase,

    /// `fancy-cat`
    #[serde(rename = "kebab-case")]
    KebabCase,

    /// `FancyCat`
    #[serde(rename = "PascalCase")]
    PascalCase,

    /// `FANCY_CAT`
    #[serde(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnakeCase,

    /// `fancy_cat`
    #[serde(rename = "snake_case")]
    SnakeCase,
}
impl EnumValueFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CamelCase => "camelCase",
            Self::KebabCase => "kebab-case",
            Self::PascalCase => "PascalCase",
            Self::ScreamingSnakeCase => "SCREAMING_SNAKE_CASE",
            Self::SnakeCase => "snake_case",
        }
    }

    /// Rewrite `value` into this naming convention.
    pub fn convert(&self, value: &str) -> String {
        self.converter()(value)
    }

    /// The string transform implementing this naming convention.
    ///
    /// Words are split on non-alphanumeric characters and on case changes
    /// (`fancyCat`, `HTTPStatus`). Digits stay attached to the preceding
    /// word.
    pub fn converter(&self) -> fn(&str) -> String {
        match self {
            Self::CamelCase => |value: &str| value.to_lower_camel_case(),
            Self::KebabCase => |value: &str| value.to_kebab_case(),
            Self::PascalCase => |value: &str| value.to_upper_camel_case(),
            Self::ScreamingSnakeCase => |value: &str| value.to_shouty_snake_case(),
            Self::SnakeCase => |value: &str| value.to_snake_case(),
        }
    }
}
impl std::fmt::Display for EnumValueFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl std::str::FromStr for EnumValueFormat {
    type Err = UnknownEnumValueFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camelCase" | "CamelCase" => Ok(Self::CamelCase),
            "kebab-case" | "KebabCase" => Ok(Self::KebabCase),
            "PascalCase" => Ok(Self::PascalCase),
            "SCREAMING_SNAKE_CASE" | "ScreamingSnakeCase" => Ok(Self::ScreamingSnakeCase),
            "snake_case" | "SnakeCase" => Ok(Self::SnakeCase),
            other => Err(UnknownEnumValueFormat(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("Unknown enum value format `{0}`")]
pub struct UnknownEnumValueFormat(pub String);

/// Resolve an optional naming convention to its string transform.
///
/// `None` means "no convention" and is distinct from a transform that
/// happens to produce an empty string: callers fall through to the identity
/// conversion instead.
pub fn value_format_converter(format: Option<EnumValueFormat>) -> Option<fn(&str) -> String> {
    format.map(|format| format.converter())
}
