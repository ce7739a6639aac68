mod enum_conversions;
mod value_format;

pub use enum_conversions::ConversionDirection;
pub use enum_conversions::EnumConversion;
pub use enum_conversions::EnumConversionError;
pub use enum_conversions::EnumConversionFn;
pub use enum_conversions::EnumConversions;
pub use enum_conversions::EnumValueFormats;
pub use enum_conversions::EnumValueMap;
pub use value_format::value_format_converter;
pub use value_format::EnumValueFormat;
pub use value_format::UnknownEnumValueFormat;

#[cfg(test)]
mod tests;
