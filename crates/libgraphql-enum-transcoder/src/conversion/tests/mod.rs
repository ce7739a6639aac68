mod enum_conversions_tests;
mod value_format_tests;
