//! Kind-specific field options.
//!
//! Options configure how the studio presents a field: enumerated choice
//! lists, slug sources, image crop behavior, file accept filters and
//! collapsible grouping. Which option set applies is determined by the
//! field's [`FieldKind`](super::field::FieldKind).

use educe::Educe;
use serde::Serialize;

/// One entry of an enumerated choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectItem {
    /// Display label shown to the editor
    pub title: String,
    /// Persisted value (must stay bit-exact, stored content references it)
    pub value: String,
}

impl SelectItem {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// How a choice list is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Educe, Serialize)]
#[educe(Default)]
#[serde(rename_all = "lowercase")]
pub enum ListLayout {
    /// Compact dropdown selector
    #[educe(Default)]
    Dropdown,
    /// One radio button per value
    Radio,
}

/// Enumerated choice list for a string field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SelectList {
    pub items: Vec<SelectItem>,
    pub layout: ListLayout,
}

impl SelectList {
    pub fn new(items: Vec<SelectItem>) -> Self {
        Self {
            items,
            layout: ListLayout::Dropdown,
        }
    }

    /// Build from `(title, value)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(title, value)| SelectItem::new(*title, *value))
                .collect(),
        )
    }

    /// Render as radio buttons instead of a dropdown.
    #[must_use]
    pub fn radio(mut self) -> Self {
        self.layout = ListLayout::Radio;
        self
    }

    /// Whether `value` is one of the allowed persisted values.
    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|item| item.value == value)
    }
}

/// Options for a slug field: which field it derives from and how long it
/// may grow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugOptions {
    /// Name of the sibling field the slug is generated from
    pub source: String,
    /// Maximum slug length, enforced at generation and validation
    pub max_length: u32,
}

impl SlugOptions {
    pub fn new(source: impl Into<String>, max_length: u32) -> Self {
        Self {
            source: source.into(),
            max_length,
        }
    }
}

/// Options for image fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ImageOptions {
    /// Enable crop/hotspot UI so editors can mark the focal point
    pub hotspot: bool,
}

impl ImageOptions {
    pub const fn hotspot() -> Self {
        Self { hotspot: true }
    }
}

/// Options for file fields.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct FileOptions {
    /// MIME accept filter for the upload dialog (e.g. `video/*`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    /// Keep the uploaded file's original name
    #[educe(Default = true)]
    pub store_original_filename: bool,
}

impl FileOptions {
    pub fn accept(filter: impl Into<String>) -> Self {
        Self {
            accept: Some(filter.into()),
            ..Self::default()
        }
    }
}

/// Options for inline object fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ObjectOptions {
    /// Whether the editor may collapse the field group
    pub collapsible: bool,
    /// Whether the group starts collapsed
    pub collapsed: bool,
}

impl ObjectOptions {
    pub const fn collapsed() -> Self {
        Self {
            collapsible: true,
            collapsed: true,
        }
    }
}

/// Union of all kind-specific option sets.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOptions {
    /// No options declared
    #[default]
    None,
    /// Enumerated choice list (string fields)
    List(SelectList),
    /// Slug derivation (slug fields)
    Slug(SlugOptions),
    /// Image behavior (image fields)
    Image(ImageOptions),
    /// File behavior (file fields)
    File(FileOptions),
    /// Grouping behavior (object fields)
    Object(ObjectOptions),
}

impl FieldOptions {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn as_list(&self) -> Option<&SelectList> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_slug(&self) -> Option<&SlugOptions> {
        match self {
            Self::Slug(slug) => Some(slug),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_list_contains() {
        let list = SelectList::from_pairs(&[("Info", "info"), ("Warning", "warning")]);
        assert!(list.contains("info"));
        assert!(list.contains("warning"));
        assert!(!list.contains("Info"));
        assert!(!list.contains("fatal"));
    }

    #[test]
    fn test_select_list_layout() {
        let list = SelectList::from_pairs(&[("A", "a")]);
        assert_eq!(list.layout, ListLayout::Dropdown);
        assert_eq!(list.radio().layout, ListLayout::Radio);
    }

    #[test]
    fn test_file_options_defaults() {
        let opts = FileOptions::default();
        assert!(opts.store_original_filename);
        assert_eq!(opts.accept, None);

        let video = FileOptions::accept("video/*");
        assert_eq!(video.accept.as_deref(), Some("video/*"));
        assert!(video.store_original_filename);
    }

    #[test]
    fn test_object_options_collapsed() {
        let opts = ObjectOptions::collapsed();
        assert!(opts.collapsible);
        assert!(opts.collapsed);
        assert!(!ObjectOptions::default().collapsible);
    }
}
