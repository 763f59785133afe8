//! Preview projections for list and reference UIs.
//!
//! A [`Preview`] declares which instance fields the host should select
//! and a pure `prepare` function that shapes them into a
//! title/subtitle/media triple. The host invokes `prepare` with the
//! selected subset; [`Preview::run`] replicates that callback for tests
//! and in-process consumers.
//!
//! `prepare` functions must never fail: missing or malformed values are
//! substituted with literal fallback strings, never propagated as errors.

use serde::Serialize;
use serde_json::{Map, Value};

/// The named subset of field values handed to a `prepare` function.
pub type SelectedValues = Map<String, Value>;

/// A pure projection from selected values to a display triple.
pub type PrepareFn = fn(&SelectedValues) -> PreparedPreview;

/// One selection entry: `key` is the name `prepare` sees, `path` the
/// (dotted) field path it is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub key: String,
    pub path: String,
}

impl Selection {
    pub fn new(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }
}

/// What a preview projection produces for the list/reference UI.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PreparedPreview {
    pub title: String,
    pub subtitle: String,
    /// Image value for the thumbnail, when the type declares one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Value>,
}

/// Preview declaration: selection paths plus the projection function.
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub select: Vec<Selection>,
    #[serde(skip)]
    pub prepare: PrepareFn,
}

impl Preview {
    pub fn new(select: Vec<Selection>, prepare: PrepareFn) -> Self {
        Self { select, prepare }
    }

    /// Apply the declared selection to a full instance and invoke
    /// `prepare`, exactly as the host does when rendering a list entry.
    pub fn run(&self, instance: &Value) -> PreparedPreview {
        let mut selected = SelectedValues::new();
        for selection in &self.select {
            if let Some(value) = lookup(instance, &selection.path) {
                selected.insert(selection.key.clone(), value.clone());
            }
        }
        (self.prepare)(&selected)
    }
}

/// Resolve a dotted path (`"seo.metaTitle"`) against a JSON instance.
fn lookup<'a>(instance: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(instance, |value, segment| value.get(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prepare_upper(selected: &SelectedValues) -> PreparedPreview {
        PreparedPreview {
            title: selected
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or("Untitled")
                .to_uppercase(),
            subtitle: String::new(),
            media: None,
        }
    }

    #[test]
    fn test_run_selects_and_prepares() {
        let preview = Preview::new(vec![Selection::new("title", "title")], prepare_upper);
        let prepared = preview.run(&json!({ "title": "hello", "other": 1 }));
        assert_eq!(prepared.title, "HELLO");
    }

    #[test]
    fn test_run_with_missing_field_uses_fallback() {
        let preview = Preview::new(vec![Selection::new("title", "title")], prepare_upper);
        let prepared = preview.run(&json!({}));
        assert_eq!(prepared.title, "UNTITLED");
    }

    #[test]
    fn test_dotted_path_lookup() {
        let preview = Preview::new(vec![Selection::new("title", "seo.metaTitle")], prepare_upper);
        let prepared = preview.run(&json!({ "seo": { "metaTitle": "meta" } }));
        assert_eq!(prepared.title, "META");
    }

    #[test]
    fn test_selection_key_aliasing() {
        // The prepare function sees the key, not the source path
        let preview = Preview::new(vec![Selection::new("title", "category")], prepare_upper);
        let prepared = preview.run(&json!({ "category": "TECHNOLOGY" }));
        assert_eq!(prepared.title, "TECHNOLOGY");
    }
}
