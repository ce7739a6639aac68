//! Schema-driven transcoding of GraphQL enum values.
//!
//! Outgoing operations have their enum-typed variables rewritten from the
//! client's representation to the server's, and incoming results have their
//! enum-typed fields rewritten from the server's representation back to the
//! client's. The schema and the operation's selection set decide which
//! positions hold enums; an [`EnumTranscoder`] decides how each enum type is
//! converted.
//!
//! ```
//! use libgraphql_enum_transcoder::conversion::EnumValueFormat;
//! use libgraphql_enum_transcoder::conversion::EnumValueFormats;
//! use libgraphql_enum_transcoder::schema::SchemaBuilder;
//! use libgraphql_enum_transcoder::EnumTranscoder;
//! use std::sync::Arc;
//!
//! let schema = SchemaBuilder::from_str(
//!     "enum Fruit { Apple GrapeFruit } type Query { fruit: Fruit }",
//! )?.build()?;
//!
//! let transcoder = EnumTranscoder::builder(Arc::new(schema))
//!     .value_formats(EnumValueFormats {
//!         client: Some(EnumValueFormat::PascalCase),
//!         server: Some(EnumValueFormat::ScreamingSnakeCase),
//!         ..Default::default()
//!     })
//!     .build();
//!
//! let document = libgraphql_enum_transcoder::ast::operation::parse("{ fruit }")?;
//! let data = transcoder.parse_data(
//!     &document,
//!     None,
//!     serde_json::json!({ "fruit": "GRAPE_FRUIT" }),
//! )?;
//! assert_eq!(data, serde_json::json!({ "fruit": "GrapeFruit" }));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ast;
pub mod conversion;
pub mod link;
pub mod operation;
pub mod schema;
pub mod transcoder;

pub use link::EnumLink;
pub use transcoder::EnumTranscoder;
pub use transcoder::EnumTranscoderBuilder;
pub use transcoder::TranscodeError;
