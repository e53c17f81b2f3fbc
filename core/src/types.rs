//! Records exchanged with the clients resource.
//!
//! # Design
//! The record shapes belong to the server. Only the fields this crate needs
//! to address a resource (`id`) or that every paging envelope carries are
//! typed; everything else is kept in a flattened JSON map so a record goes
//! back to the server exactly as it came.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A client record. `id` is absent until the server assigns one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Client {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Client {
    /// Build a record from a JSON object.
    ///
    /// A numeric `id` becomes `Client::id`; an `id` of any other type stays
    /// in `fields` untouched. Non-object values produce an empty record.
    pub fn from_fields(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => {
                let id = fields.get("id").and_then(Value::as_i64);
                if id.is_some() {
                    fields.remove("id");
                }
                Self { id, fields }
            }
            _ => Self::default(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }
}

/// Paging envelope returned by the listing endpoint.
///
/// Every paging field is optional: an absent field stays absent on the way
/// back out and `null` reads as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Client>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_elements: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerResponse {
    /// The records on this page; empty when the server sent none.
    pub fn clients(&self) -> &[Client] {
        self.content.as_deref().unwrap_or_default()
    }
}
