//! Lower validation-schema trees into Apache Avro schema declarations.
//!
//! Build a [`Node`] tree with the constructors in [`node`], hand it to
//! [`convert`], and get back an [`AvroSchema`] value that renders to
//! canonical Avro JSON via [`AvroSchema::to_value`] or `serde`.
//!
//! Design goals:
//! - Single synchronous pass; no state besides a per-call registry of
//!   already-emitted named schemas (for reused sub-schema instances).
//! - Declaration order survives everywhere it exists: record fields, union
//!   alternatives, enum symbols.
//! - Optional/nullable wrapping, however stacked, lowers to exactly one
//!   `["null", T]` union.
//!
//! ```
//! use schema_to_avro::{convert, ConvertOptions, Node};
//!
//! let profile = Node::object([
//!     ("id", Node::string().describe("Stable identifier")),
//!     ("score", Node::number()),
//! ]);
//! let options = ConvertOptions { namespace: Some("com.example".into()) };
//! let avro = convert("profile", &profile, &options)?;
//! assert_eq!(avro.to_value()["type"], "record");
//! # Ok::<(), schema_to_avro::UnsupportedTypeError>(())
//! ```

pub mod avro;
pub mod error;
pub mod lower;
pub mod node;

pub use avro::{AvroSchema, Primitive, RecordField};
pub use error::UnsupportedTypeError;
pub use lower::{ConvertOptions, convert};
pub use node::{Kind, Node};
