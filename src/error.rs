/// Raised when the input tree contains a node kind with no Avro mapping.
///
/// There is no recovery path: the error propagates straight to the caller,
/// since it signals a schema-authoring mistake rather than bad data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported schema type `{type_name}` at `{name}`")]
pub struct UnsupportedTypeError {
    /// Name under which the offending node was being converted.
    pub name: String,
    /// The foreign node kind.
    pub type_name: String,
}
