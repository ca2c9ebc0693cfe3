//! Schema Type Declarations
//!
//! The `Published` and `Unpublished` types must stay queryable even when a
//! build produces zero instances of one of them, so the plugin declares both
//! with the host during schema customization.

use serde::{Deserialize, Serialize};

/// A field declared on a schema type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Field name as exposed to queries
    pub name: String,
    /// Scalar type name (e.g., "ID", "String", "Boolean")
    pub field_type: String,
    /// Whether the field is non-nullable
    pub non_null: bool,
}

impl SchemaField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>, non_null: bool) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            non_null,
        }
    }
}

/// A node type declared with the host's schema customization surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaType {
    /// Type name (e.g., "Published")
    pub name: String,
    /// Declared fields
    pub fields: Vec<SchemaField>,
}

impl SchemaType {
    pub fn new(name: impl Into<String>, fields: Vec<SchemaField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}
