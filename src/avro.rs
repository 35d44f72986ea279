//! Output side: Avro schema values and their JSON rendering.
//!
//! The value tree mirrors the declarations an `.avsc` file holds. Primitives
//! exist in two forms: a bare type tag (the shape a record field carries) and
//! an annotated node with its own name/doc/namespace (the shape a standalone
//! conversion returns). Records, enums and arrays always carry their own
//! metadata.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// The full Avro primitive set. The lowering only ever produces
/// `null`/`boolean`/`long`/`double`/`string`; the rest are here because this
/// module models Avro, not the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
}

impl Primitive {
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::Null => "null",
            Primitive::Boolean => "boolean",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Bytes => "bytes",
            Primitive::String => "string",
        }
    }
}

/// One Avro schema value. Equality is structural; union deduplication
/// compares produced alternatives with it.
#[derive(Debug, Clone, PartialEq)]
pub enum AvroSchema {
    /// Bare type tag, e.g. `"string"` inside a record field.
    Primitive(Primitive),
    /// Primitive carrying its own metadata (standalone form).
    Annotated {
        name: String,
        primitive: Primitive,
        doc: Option<String>,
        namespace: Option<String>,
    },
    Record {
        name: String,
        fields: Vec<RecordField>,
        doc: Option<String>,
        namespace: Option<String>,
    },
    Enum {
        name: String,
        symbols: Vec<String>,
        doc: Option<String>,
        namespace: Option<String>,
    },
    Array {
        name: String,
        items: Box<AvroSchema>,
        doc: Option<String>,
        namespace: Option<String>,
    },
    /// Alternatives in first-occurrence order; never nests a union directly.
    Union(Vec<AvroSchema>),
    /// Full name of an already-emitted record or enum.
    Ref(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    pub name: String,
    pub schema: AvroSchema,
    pub doc: Option<String>,
    pub default: Option<Value>,
}

impl AvroSchema {
    /// Render the canonical Avro JSON form. Absent doc/namespace emit no key.
    pub fn to_value(&self) -> Value {
        match self {
            AvroSchema::Primitive(primitive) => Value::from(primitive.as_str()),
            AvroSchema::Ref(fullname) => Value::from(fullname.clone()),
            AvroSchema::Union(alternatives) => {
                Value::Array(alternatives.iter().map(AvroSchema::to_value).collect())
            }
            AvroSchema::Annotated { name, primitive, doc, namespace } => {
                Value::Object(named(name, primitive.as_str(), doc, namespace))
            }
            AvroSchema::Record { name, fields, doc, namespace } => {
                let mut out = named(name, "record", doc, namespace);
                out.insert(
                    "fields".into(),
                    Value::Array(fields.iter().map(RecordField::to_value).collect()),
                );
                Value::Object(out)
            }
            AvroSchema::Enum { name, symbols, doc, namespace } => {
                let mut out = named(name, "enum", doc, namespace);
                out.insert(
                    "symbols".into(),
                    Value::Array(symbols.iter().cloned().map(Value::from).collect()),
                );
                Value::Object(out)
            }
            AvroSchema::Array { name, items, doc, namespace } => {
                let mut out = named(name, "array", doc, namespace);
                out.insert("items".into(), items.to_value());
                Value::Object(out)
            }
        }
    }
}

impl RecordField {
    fn to_value(&self) -> Value {
        let mut out = Map::new();
        out.insert("name".into(), Value::from(self.name.clone()));
        out.insert("type".into(), self.schema.to_value());
        if let Some(doc) = &self.doc {
            out.insert("doc".into(), Value::from(doc.clone()));
        }
        if let Some(default) = &self.default {
            out.insert("default".into(), default.clone());
        }
        Value::Object(out)
    }
}

fn named(name: &str, ty: &str, doc: &Option<String>, namespace: &Option<String>) -> Map<String, Value> {
    let mut out = Map::new();
    out.insert("name".into(), Value::from(name));
    out.insert("type".into(), Value::from(ty));
    if let Some(doc) = doc {
        out.insert("doc".into(), Value::from(doc.clone()));
    }
    if let Some(namespace) = namespace {
        out.insert("namespace".into(), Value::from(namespace.clone()));
    }
    out
}

impl Serialize for AvroSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
