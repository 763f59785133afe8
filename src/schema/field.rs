//! Field declarations.
//!
//! A [`Field`] is the named, typed, optionally validated unit of a schema.
//! The [`FieldKind`] tag determines which parts of the declaration are
//! meaningful: select lists only apply to strings, `members` only to
//! arrays, nested `fields` only to images and objects.

use crate::portable_text::ArrayMember;
use crate::schema::options::FieldOptions;
use crate::schema::validation::Rule;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Primitive or composite kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line string
    String,
    /// Multi-line text
    Text,
    /// URL-safe identifier derived from another field
    Slug,
    /// ISO 8601 timestamp
    Datetime,
    Boolean,
    Image,
    File,
    /// Ordered collection of tagged members
    Array,
    /// Inline group of nested fields
    Object,
    /// Rich text block
    Block,
    Url,
}

impl FieldKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Slug => "slug",
            Self::Datetime => "datetime",
            Self::Boolean => "boolean",
            Self::Image => "image",
            Self::File => "file",
            Self::Array => "array",
            Self::Object => "object",
            Self::Block => "block",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initial value assigned to a field when a new instance is created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InitialValue {
    /// Fixed JSON value
    Static(Value),
    /// Creation timestamp, resolved when the instance is created
    CurrentDatetime,
}

impl InitialValue {
    /// Resolve to a concrete JSON value.
    pub fn resolve(&self) -> Value {
        match self {
            Self::Static(value) => value.clone(),
            Self::CurrentDatetime => {
                Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }
    }
}

/// A single field declaration within a document or object type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Key of the field, unique among siblings
    pub name: String,
    /// Display label in the editor
    pub title: String,
    /// Kind tag, decides which of `options`/`fields`/`members` apply
    pub kind: FieldKind,
    /// Editor help text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ghost text shown in empty inputs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Editor height hint for text fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<InitialValue>,
    #[serde(skip_serializing_if = "FieldOptions::is_none")]
    pub options: FieldOptions,
    /// Validation rules, evaluated in declaration order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validation: Vec<Rule>,
    /// Nested fields (image and object kinds)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    /// Allowed member declarations (array kind, the `of` list)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ArrayMember>,
}

impl Field {
    pub fn new(name: impl Into<String>, title: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            kind,
            description: None,
            placeholder: None,
            rows: None,
            initial_value: None,
            options: FieldOptions::None,
            validation: Vec::new(),
            fields: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn string(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, FieldKind::String)
    }

    pub fn text(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, FieldKind::Text)
    }

    pub fn slug(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, FieldKind::Slug)
    }

    pub fn datetime(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, FieldKind::Datetime)
    }

    pub fn boolean(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, FieldKind::Boolean)
    }

    pub fn image(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, FieldKind::Image)
    }

    pub fn array(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, FieldKind::Array)
    }

    pub fn object(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, FieldKind::Object)
    }

    pub fn url(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, FieldKind::Url)
    }

    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    #[must_use]
    pub fn rows(mut self, rows: u8) -> Self {
        self.rows = Some(rows);
        self
    }

    #[must_use]
    pub fn initial(mut self, value: Value) -> Self {
        self.initial_value = Some(InitialValue::Static(value));
        self
    }

    #[must_use]
    pub fn initial_now(mut self) -> Self {
        self.initial_value = Some(InitialValue::CurrentDatetime);
        self
    }

    #[must_use]
    pub fn options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub fn members(mut self, members: Vec<ArrayMember>) -> Self {
        self.members = members;
        self
    }

    /// Mark the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.validation.push(Rule::Required);
        self
    }

    /// Cap the length (strings) or element count (arrays).
    #[must_use]
    pub fn max(mut self, max: u32) -> Self {
        self.validation.push(Rule::Max(max));
        self
    }

    /// Restrict URL values to the given schemes.
    #[must_use]
    pub fn uri(mut self, schemes: &[&str]) -> Self {
        self.validation.push(Rule::Uri {
            allowed_schemes: schemes.iter().map(|s| (*s).to_string()).collect(),
        });
        self
    }

    /// Whether a [`Rule::Required`] is declared.
    pub fn is_required(&self) -> bool {
        self.validation.iter().any(|r| matches!(r, Rule::Required))
    }

    /// Look up a nested field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
