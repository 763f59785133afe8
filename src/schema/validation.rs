//! Validation rules and the uniform evaluator.
//!
//! Rules are declarative predicates attached to fields. The evaluator
//! walks a JSON instance against a schema and reports field-level
//! outcomes; nothing here is fatal, errors simply block save/publish in
//! the host workflow.
//!
//! | Rule       | Applies to          | Failure                      |
//! |------------|---------------------|------------------------------|
//! | `Required` | any kind            | missing or null value        |
//! | `Max(n)`   | string/text/slug    | more than `n` characters     |
//! | `Max(n)`   | array               | more than `n` elements       |
//! | `Uri`      | url                 | scheme outside the allow-list|
//!
//! Beyond explicit rules, the evaluator enforces what the declarations
//! imply: enumerated select lists reject values outside the list, slug
//! options cap the slug length, and array fields reject members whose
//! `_type` tag is not declared.

use crate::schema::field::{Field, FieldKind};
use crate::schema::SchemaType;
use log::{debug, trace};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A declarative validation predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    /// Value must be present and non-null
    Required,
    /// Maximum length (strings) or element count (arrays)
    Max(u32),
    /// URL scheme must be in the allow-list
    Uri { allowed_schemes: Vec<String> },
}

/// A field-level validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{field}` is missing")]
    RequiredFieldMissing { field: String },

    #[error("field `{field}` exceeds maximum length {max} (got {actual})")]
    MaxLengthExceeded { field: String, max: u32, actual: usize },

    #[error("field `{field}` exceeds maximum count {max} (got {actual})")]
    MaxCountExceeded { field: String, max: u32, actual: usize },

    #[error("field `{field}` value `{value}` is not in the allowed set")]
    NotInAllowedSet { field: String, value: String },

    #[error("field `{field}` URI scheme `{scheme}` is not permitted")]
    SchemeNotAllowed { field: String, scheme: String },

    #[error("array field `{field}` does not accept member type `{member_type}`")]
    UnknownMemberType { field: String, member_type: String },
}

/// Validate a whole instance against a schema type.
///
/// Walks every declared field in order and collects the first error per
/// field. Nested image/object fields are validated recursively when a
/// value is present.
pub fn validate_document(schema: &SchemaType, instance: &Value) -> Vec<ValidationError> {
    debug!("validating instance against `{}`", schema.name);
    let mut errors = Vec::new();
    collect_field_errors(&schema.fields, instance, &mut errors);
    errors
}

fn collect_field_errors(fields: &[Field], value: &Value, errors: &mut Vec<ValidationError>) {
    for field in fields {
        let field_value = value.get(&field.name);
        if let Err(err) = validate_field(field, field_value) {
            errors.push(err);
            continue;
        }
        // Recurse into nested declarations when a value is present
        if let Some(nested) = field_value
            && !field.fields.is_empty()
            && nested.is_object()
        {
            collect_field_errors(&field.fields, nested, errors);
        }
    }
}

/// Evaluate one field's rules against its instance value.
///
/// Returns the first failing rule. A missing or null value only fails
/// when the field is required; all other rules are skipped for absent
/// values, matching host-engine behavior.
pub fn validate_field(field: &Field, value: Option<&Value>) -> Result<(), ValidationError> {
    trace!("validating field `{}` ({})", field.name, field.kind);

    let value = match value {
        Some(v) if !v.is_null() => v,
        _ => {
            if field.is_required() {
                return Err(ValidationError::RequiredFieldMissing {
                    field: field.name.clone(),
                });
            }
            return Ok(());
        }
    };

    for rule in &field.validation {
        match rule {
            Rule::Required => check_required(field, value)?,
            Rule::Max(max) => check_max(field, value, *max)?,
            Rule::Uri { allowed_schemes } => check_uri(field, value, allowed_schemes)?,
        }
    }

    // Implied constraints from the declaration itself
    if let Some(list) = field.options.as_list() {
        check_in_list(field, value, list)?;
    }
    if let Some(slug) = field.options.as_slug() {
        check_max(field, value, slug.max_length)?;
    }
    if field.kind == FieldKind::Array && !field.members.is_empty() {
        check_member_tags(field, value)?;
    }

    Ok(())
}

/// Required on a present value: empty strings and empty slugs count as
/// missing.
fn check_required(field: &Field, value: &Value) -> Result<(), ValidationError> {
    let missing = match scalar_text(value) {
        Some(text) => text.is_empty(),
        None => false,
    };
    if missing {
        return Err(ValidationError::RequiredFieldMissing {
            field: field.name.clone(),
        });
    }
    Ok(())
}

fn check_max(field: &Field, value: &Value, max: u32) -> Result<(), ValidationError> {
    if let Some(array) = value.as_array() {
        if array.len() > max as usize {
            return Err(ValidationError::MaxCountExceeded {
                field: field.name.clone(),
                max,
                actual: array.len(),
            });
        }
        return Ok(());
    }
    if let Some(text) = scalar_text(value) {
        let actual = text.chars().count();
        if actual > max as usize {
            return Err(ValidationError::MaxLengthExceeded {
                field: field.name.clone(),
                max,
                actual,
            });
        }
    }
    Ok(())
}

fn check_uri(field: &Field, value: &Value, allowed: &[String]) -> Result<(), ValidationError> {
    let Some(text) = value.as_str() else {
        return Ok(());
    };
    let scheme = text
        .split_once(':')
        .map(|(scheme, _)| scheme)
        .unwrap_or_default();
    if !allowed.iter().any(|s| s == scheme) {
        return Err(ValidationError::SchemeNotAllowed {
            field: field.name.clone(),
            scheme: scheme.to_string(),
        });
    }
    Ok(())
}

fn check_in_list(
    field: &Field,
    value: &Value,
    list: &crate::schema::options::SelectList,
) -> Result<(), ValidationError> {
    let Some(text) = value.as_str() else {
        return Ok(());
    };
    if !list.contains(text) {
        return Err(ValidationError::NotInAllowedSet {
            field: field.name.clone(),
            value: text.to_string(),
        });
    }
    Ok(())
}

/// Every element of an array value must carry a `_type` tag declared in
/// the field's member list.
fn check_member_tags(field: &Field, value: &Value) -> Result<(), ValidationError> {
    let Some(elements) = value.as_array() else {
        return Ok(());
    };
    for element in elements {
        let tag = element.get("_type").and_then(Value::as_str).unwrap_or("");
        if !field.members.iter().any(|m| m.type_tag() == tag) {
            return Err(ValidationError::UnknownMemberType {
                field: field.name.clone(),
                member_type: tag.to_string(),
            });
        }
    }
    Ok(())
}

/// Text content of a scalar value, looking through slug objects.
fn scalar_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s),
        Value::Object(map) => map.get("current").and_then(Value::as_str),
        _ => None,
    }
}
