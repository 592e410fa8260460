use serde::{Deserialize, Serialize};

/// One linked bank connection ("item") in the Bridge model.
///
/// Beyond `id` the shape is opaque to this client: status fields, bank id
/// and anything the API adds later ride along in `extra` and survive export
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned item identifier.
    pub id: i64,
    /// All remaining item fields, preserved as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
