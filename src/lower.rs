//! Lowering: validation-schema tree → Avro schema value.
//!
//! One synchronous recursive pass over the input tree. The only state
//! threaded through the recursion is the read-only [`ConvertOptions`] and a
//! per-call registry of named schemas already emitted, used to turn a reused
//! sub-schema instance into a name reference instead of a second definition.
//!
//! Null wrappers (`optional`, `nullable`) are unwrapped before the inner
//! kind is inspected and rebuilt through the same union assembly as explicit
//! unions, so stacked wrappers collapse to a single `["null", T]`.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::avro::{AvroSchema, Primitive, RecordField};
use crate::error::UnsupportedTypeError;
use crate::node::{Kind, Node};

/// Read-only settings carried through the whole recursion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Namespace stamped onto every named output node. Absent is fine.
    pub namespace: Option<String>,
}

/// How much metadata a primitive carries at its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Render {
    /// Standalone node: `{name, type, doc, namespace}`.
    Qualified,
    /// Record-field position: plain type tag; name/doc live on the field.
    Bare,
}

/// Named schemas emitted so far in one top-level call, keyed by the address
/// of the shared node allocation. Identity, never structural equality: two
/// independently authored identical shapes must stay independent.
#[derive(Default)]
struct Registry {
    emitted: HashMap<usize, String>,
}

impl Registry {
    fn get(&self, node: &Node) -> Option<&String> {
        self.emitted.get(&(node as *const Node as usize))
    }

    fn insert(&mut self, node: &Node, fullname: String) {
        self.emitted.insert(node as *const Node as usize, fullname);
    }
}

/// Lower one validation-schema node into its Avro schema value.
///
/// Top-level results are fully qualified: primitives come back with their
/// own `name`/`doc`/`namespace`. Each call starts a fresh registry, so
/// identical inputs always produce structurally identical outputs.
pub fn convert(
    name: &str,
    node: &Node,
    options: &ConvertOptions,
) -> Result<AvroSchema, UnsupportedTypeError> {
    let mut registry = Registry::default();
    lower(name, node, options, Render::Qualified, &mut registry)
}

fn lower(
    name: &str,
    node: &Node,
    options: &ConvertOptions,
    render: Render,
    registry: &mut Registry,
) -> Result<AvroSchema, UnsupportedTypeError> {
    match &node.kind {
        // Null wrappers unwrap before the inner kind is looked at. Building
        // through the union assembly collapses optional(nullable(T)) into a
        // single ["null", T] and splices an inner union instead of nesting.
        Kind::Optional { inner } | Kind::Nullable { inner } => {
            let mut alternatives = vec![AvroSchema::Primitive(Primitive::Null)];
            push_alternative(
                &mut alternatives,
                lower(name, inner, options, render, registry)?,
            );
            Ok(AvroSchema::Union(alternatives))
        }
        Kind::Object { fields } => lower_record(name, node, fields, options, registry),
        Kind::String => Ok(lower_primitive(name, Primitive::String, node, options, render)),
        Kind::Union { variants } => {
            let mut alternatives = Vec::with_capacity(variants.len());
            for variant in variants {
                push_alternative(
                    &mut alternatives,
                    lower(name, variant, options, render, registry)?,
                );
            }
            Ok(AvroSchema::Union(alternatives))
        }
        Kind::Enum { symbols } => {
            if let Some(fullname) = registry.get(node) {
                return Ok(AvroSchema::Ref(fullname.clone()));
            }
            registry.insert(node, fullname(name, options));
            Ok(AvroSchema::Enum {
                name: name.to_owned(),
                symbols: symbols.clone(),
                doc: node.description.clone(),
                namespace: options.namespace.clone(),
            })
        }
        Kind::Number => Ok(lower_primitive(name, Primitive::Double, node, options, render)),
        Kind::Date => Ok(lower_primitive(name, Primitive::Long, node, options, render)),
        Kind::Array { item } => {
            // The element gets its own name scope via the fixed suffix, and
            // is always qualified regardless of the surrounding position.
            let items = lower(
                &format!("{name}-value"),
                item,
                options,
                Render::Qualified,
                registry,
            )?;
            Ok(AvroSchema::Array {
                name: name.to_owned(),
                items: Box::new(items),
                doc: node.description.clone(),
                namespace: options.namespace.clone(),
            })
        }
        Kind::BigInt => Ok(lower_primitive(name, Primitive::Long, node, options, render)),
        Kind::Boolean => Ok(lower_primitive(name, Primitive::Boolean, node, options, render)),
        Kind::Custom { type_name } => Err(UnsupportedTypeError {
            name: name.to_owned(),
            type_name: type_name.clone(),
        }),
    }
}

fn lower_primitive(
    name: &str,
    primitive: Primitive,
    node: &Node,
    options: &ConvertOptions,
    render: Render,
) -> AvroSchema {
    match render {
        Render::Bare => AvroSchema::Primitive(primitive),
        Render::Qualified => AvroSchema::Annotated {
            name: name.to_owned(),
            primitive,
            doc: node.description.clone(),
            namespace: options.namespace.clone(),
        },
    }
}

fn lower_record(
    name: &str,
    node: &Node,
    fields: &IndexMap<String, Arc<Node>>,
    options: &ConvertOptions,
    registry: &mut Registry,
) -> Result<AvroSchema, UnsupportedTypeError> {
    if let Some(fullname) = registry.get(node) {
        return Ok(AvroSchema::Ref(fullname.clone()));
    }
    // Register before descending, so a self-referencing schema lands on the
    // name instead of recursing.
    registry.insert(node, fullname(name, options));

    let mut out = Vec::with_capacity(fields.len());
    for (field_name, child) in fields {
        let schema = lower(field_name, child, options, Render::Bare, registry)?;
        out.push(RecordField {
            name: field_name.clone(),
            schema,
            doc: child.description.clone(),
            default: default_for(child),
        });
    }
    Ok(AvroSchema::Record {
        name: name.to_owned(),
        fields: out,
        doc: node.description.clone(),
        namespace: options.namespace.clone(),
    })
}

/// The one default-value inference rule: an optional string field defaults
/// to null. Deliberately does not generalize to other optional kinds.
fn default_for(child: &Node) -> Option<Value> {
    match &child.kind {
        Kind::Optional { inner } if matches!(inner.kind, Kind::String) => Some(Value::Null),
        _ => None,
    }
}

/// Splice one lowered member into a union's alternative list. A member that
/// is itself a union contributes its elements (unions never nest), and an
/// alternative equal to one already present is dropped, keeping first
/// occurrence order.
fn push_alternative(alternatives: &mut Vec<AvroSchema>, schema: AvroSchema) {
    match schema {
        AvroSchema::Union(inner) => {
            for alternative in inner {
                if !alternatives.contains(&alternative) {
                    alternatives.push(alternative);
                }
            }
        }
        other => {
            if !alternatives.contains(&other) {
                alternatives.push(other);
            }
        }
    }
}

fn fullname(name: &str, options: &ConvertOptions) -> String {
    match &options.namespace {
        Some(namespace) => format!("{namespace}.{name}"),
        None => name.to_owned(),
    }
}
