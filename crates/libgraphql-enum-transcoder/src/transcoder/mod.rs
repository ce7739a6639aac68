mod enum_transcoder;
mod enum_transcoder_builder;
mod result_parser;
mod variable_serializer;

pub use enum_transcoder::EnumTranscoder;
pub use enum_transcoder::TranscodeError;
pub use enum_transcoder_builder::ConfigValidationError;
pub use enum_transcoder_builder::EnumTranscoderBuilder;
pub use enum_transcoder_builder::EnumTranscoderConfig;
pub use result_parser::ResultParser;
pub use variable_serializer::VariableSerializer;

#[cfg(test)]
mod tests;
