// Input side: the validation-schema tree handed to `convert`.

use std::sync::Arc;

use indexmap::IndexMap;

/// One element of a validation schema: a kind plus an optional free-text
/// description (which becomes `doc` on the Avro side).
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: Kind,
    pub description: Option<String>,
}

/// The node kinds the lowering understands, plus one escape hatch.
///
/// Children are `Arc<Node>` so a single sub-schema instance can sit under
/// several field positions; the lowering keys its already-emitted registry
/// on that shared allocation, not on structural equality.
#[derive(Debug, Clone)]
pub enum Kind {
    String,
    Number,                                          // always "double", never an integer width
    Boolean,
    BigInt,
    Date,                                            // timestamp tag, lowered to "long"
    Enum { symbols: Vec<String> },                   // declared order is kept
    Array { item: Arc<Node> },
    Object { fields: IndexMap<String, Arc<Node>> },  // declaration order
    Union { variants: Vec<Arc<Node>> },
    Optional { inner: Arc<Node> },
    Nullable { inner: Arc<Node> },
    /// Library-specific node the lowering has no Avro mapping for.
    Custom { type_name: String },
}

impl Node {
    fn new(kind: Kind) -> Self {
        Self { kind, description: None }
    }

    pub fn string() -> Self {
        Self::new(Kind::String)
    }

    pub fn number() -> Self {
        Self::new(Kind::Number)
    }

    pub fn boolean() -> Self {
        Self::new(Kind::Boolean)
    }

    pub fn bigint() -> Self {
        Self::new(Kind::BigInt)
    }

    pub fn date() -> Self {
        Self::new(Kind::Date)
    }

    pub fn enumeration<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Kind::Enum {
            symbols: symbols.into_iter().map(Into::into).collect(),
        })
    }

    pub fn array(item: impl Into<Arc<Node>>) -> Self {
        Self::new(Kind::Array { item: item.into() })
    }

    /// Field order in the iterator is the field order of the lowered record.
    pub fn object<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Arc<Node>>,
    {
        Self::new(Kind::Object {
            fields: fields
                .into_iter()
                .map(|(name, child)| (name.into(), child.into()))
                .collect(),
        })
    }

    pub fn union<I, V>(variants: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Arc<Node>>,
    {
        Self::new(Kind::Union {
            variants: variants.into_iter().map(Into::into).collect(),
        })
    }

    pub fn custom(type_name: impl Into<String>) -> Self {
        Self::new(Kind::Custom { type_name: type_name.into() })
    }

    /// Attach a description; surfaces as `doc` in the output.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn optional(self) -> Self {
        Self::new(Kind::Optional { inner: Arc::new(self) })
    }

    pub fn nullable(self) -> Self {
        Self::new(Kind::Nullable { inner: Arc::new(self) })
    }

    /// Optional-of-nullable; both wrappers collapse into one null union
    /// when lowered.
    pub fn nullish(self) -> Self {
        self.nullable().optional()
    }
}
