//! Core schema declaration model.
//!
//! # Modules
//!
//! | Module       | Purpose                                             |
//! |--------------|-----------------------------------------------------|
//! | `field`      | Field declarations and the `FieldKind` tag          |
//! | `options`    | Kind-specific option sets (lists, slug, image, ...) |
//! | `validation` | Declarative rules and the uniform evaluator         |
//! | `preview`    | Preview projection declarations                     |
//!
//! A [`SchemaType`] bundles an ordered field list with an optional
//! preview projection, tagged as either a document (top-level, has its
//! own identity) or an object (embeddable only). Declarations are
//! immutable values constructed once; registration and lifecycle belong
//! to the host.

pub mod field;
pub mod options;
pub mod preview;
pub mod validation;

pub use field::{Field, FieldKind, InitialValue};
pub use options::{
    FieldOptions, FileOptions, ImageOptions, ListLayout, ObjectOptions, SelectItem, SelectList,
    SlugOptions,
};
pub use preview::{PreparedPreview, PrepareFn, Preview, SelectedValues, Selection};
pub use validation::{Rule, ValidationError, validate_document, validate_field};

use serde::Serialize;
use std::fmt;

/// Whether a schema type stands alone or only nests inside other fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    /// Top-level, independently creatable content type
    Document,
    /// Nested type, usable only inside array/object fields
    Object,
}

impl SchemaKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete document or object type declaration.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaType {
    /// Type name, referenced by stored content (`_type`)
    pub name: String,
    /// Display label in the studio
    pub title: String,
    pub kind: SchemaKind,
    /// Ordered field declarations
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,
}

impl SchemaType {
    pub fn document(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, SchemaKind::Document)
    }

    pub fn object(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, SchemaKind::Object)
    }

    fn new(name: impl Into<String>, title: impl Into<String>, kind: SchemaKind) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            kind,
            fields: Vec::new(),
            preview: None,
        }
    }

    #[must_use]
    pub fn fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub fn preview(mut self, preview: Preview) -> Self {
        self.preview = Some(preview);
        self
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names that appear more than once among siblings.
    ///
    /// Field names must be unique within their parent; this is checked
    /// by declaration tests rather than at construction time.
    pub fn duplicate_field_names(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        let mut duplicates = Vec::new();
        for field in &self.fields {
            let name = field.name.as_str();
            if seen.contains(&name) {
                if !duplicates.contains(&name) {
                    duplicates.push(name);
                }
            } else {
                seen.push(name);
            }
        }
        duplicates
    }
}
