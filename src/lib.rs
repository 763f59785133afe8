//! Content schema declarations for a blog CMS.
//!
//! This crate models the content schema consumed by a studio host: the
//! `post` document type, the `callout` object type, their validation
//! rules and their preview projections. Declarations are immutable
//! values; the host owns registration, storage and rendering.
//!
//! # Modules
//!
//! | Module          | Purpose                                          |
//! |-----------------|--------------------------------------------------|
//! | `schema`        | Field/type declaration model, rules, previews    |
//! | `portable_text` | Rich text vocabularies and instance types        |
//! | `documents`     | Top-level document types (`post`)                |
//! | `objects`       | Embeddable object types (`callout`)              |
//! | `slug`          | Slug generation from source fields               |
//!
//! # Example
//!
//! ```
//! use blog_schema::{schema_types, schema::validate_document};
//! use serde_json::json;
//!
//! let types = schema_types();
//! let post = types.iter().find(|t| t.name == "post").unwrap();
//!
//! let errors = validate_document(post, &json!({
//!     "title": "Hello",
//!     "slug": { "current": "hello" },
//! }));
//! assert!(errors.is_empty());
//! ```

pub mod documents;
pub mod objects;
pub mod portable_text;
pub mod schema;
pub mod slug;

pub use documents::document_types;
pub use objects::object_types;
pub use schema::{SchemaKind, SchemaType};

use log::debug;

/// Every schema type, documents first, then objects, each group in
/// insertion order. This is the collection handed to the host's
/// registration entry point.
pub fn schema_types() -> Vec<SchemaType> {
    let mut types = document_types();
    types.extend(object_types());
    debug!(
        "assembled {} schema types: [{}]",
        types.len(),
        types
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    types
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_collection_length() {
        let combined = schema_types();
        assert_eq!(
            combined.len(),
            document_types().len() + object_types().len()
        );
    }

    #[test]
    fn test_documents_precede_objects() {
        let combined = schema_types();
        let first_object = combined
            .iter()
            .position(|t| t.kind == SchemaKind::Object)
            .unwrap();
        assert!(
            combined[..first_object]
                .iter()
                .all(|t| t.kind == SchemaKind::Document)
        );
        assert!(
            combined[first_object..]
                .iter()
                .all(|t| t.kind == SchemaKind::Object)
        );
    }

    #[test]
    fn test_type_names_are_unique() {
        let combined = schema_types();
        let mut names: Vec<_> = combined.iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), combined.len());
    }

    #[test]
    fn test_registered_names() {
        let names: Vec<_> = schema_types().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["post", "callout"]);
    }

    #[test]
    fn test_every_type_with_preview_projects_cleanly() {
        // Projections must never fail, even on an empty instance
        for schema in schema_types() {
            if let Some(preview) = &schema.preview {
                let prepared = preview.run(&serde_json::json!({}));
                assert!(!prepared.subtitle.is_empty() || !prepared.title.is_empty());
            }
        }
    }
}
