//! Drive the library end-to-end on a realistic schema and print the Avro JSON.

use std::sync::Arc;

use schema_to_avro::{ConvertOptions, Node, convert};

/// A plausible CRM customer schema:
/// - optional and enum fields
/// - an array of records
/// - one address shape shared between two field positions
fn sample_schema() -> Node {
    let address = Arc::new(Node::object([
        ("street", Node::string()),
        ("city", Node::string()),
        ("country", Node::string().describe("ISO 3166-1 alpha-2")),
    ]));

    Node::object([
        ("id", Arc::new(Node::string().describe("Stable customer identifier"))),
        ("name", Arc::new(Node::string())),
        ("nickname", Arc::new(Node::string().optional())),
        ("age", Arc::new(Node::number().nullish())),
        ("created_at", Arc::new(Node::date().describe("Unix epoch millis"))),
        (
            "status",
            Arc::new(Node::enumeration(["active", "suspended", "closed"])),
        ),
        ("tags", Arc::new(Node::array(Node::string()))),
        ("shipping_address", address.clone()),
        ("billing_address", address),
    ])
    .describe("A CRM customer profile")
}

fn main() {
    let options = ConvertOptions { namespace: Some("com.example.crm".to_owned()) };
    match convert("customer", &sample_schema(), &options) {
        Ok(avro) => {
            println!("{}", serde_json::to_string_pretty(&avro.to_value()).unwrap());
        }
        Err(err) => {
            eprintln!("conversion failed: {err}");
            std::process::exit(1);
        }
    }
}
