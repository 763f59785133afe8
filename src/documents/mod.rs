//! Document type declarations (top-level content types).

pub mod post;

pub use post::post;

use crate::schema::SchemaType;

/// All document types, in registration order.
pub fn document_types() -> Vec<SchemaType> {
    vec![post()]
}
