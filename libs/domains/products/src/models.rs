use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product entity - one row of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier, immutable after creation
    pub id: i32,
    /// Product name, no uniqueness or format constraint
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Unit price, no enforced range
    pub price: f64,
}

/// Request body for create, update, and delete-by-body.
///
/// The same wire shape as [`Product`] with every field optional enough to
/// accept partial bodies: `id` is ignored on create, overridden by the path
/// id on update, and required for delete-by-body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductInput {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
}
