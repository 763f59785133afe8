//! Object type declarations (embeddable, non-top-level types).

pub mod callout;

pub use callout::callout;

use crate::schema::SchemaType;

/// All object types, in registration order.
pub fn object_types() -> Vec<SchemaType> {
    vec![callout()]
}
