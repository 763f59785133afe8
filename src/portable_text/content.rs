//! Instance-side model of rich text content.
//!
//! These types describe the JSON documents editors actually produce
//! against the declarations in [`members`](super::members). The member
//! union is closed: deserializing an element with an undeclared `_type`
//! tag fails, which is the schema-level rejection the body field
//! promises.

use crate::portable_text::vocab::{BlockStyle, CalloutKind, ListType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One element of a post body array, tagged by `_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "lowercase")]
pub enum BodyMember {
    Block(Block),
    Image(ImageEntry),
    File(FileEntry),
    Callout(CalloutEntry),
}

/// A styled text block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub style: BlockStyle,
    /// Present when the block is part of a list
    #[serde(rename = "listItem", default, skip_serializing_if = "Option::is_none")]
    pub list_item: Option<ListType>,
    #[serde(default)]
    pub children: Vec<Child>,
    /// Annotation payloads referenced by span marks
    #[serde(rename = "markDefs", default, skip_serializing_if = "Vec::is_empty")]
    pub mark_defs: Vec<MarkDef>,
}

impl Block {
    /// Concatenated text of all span children, in document order, with
    /// no separator. Non-span children contribute nothing.
    pub fn span_text(&self) -> String {
        self.children
            .iter()
            .filter(|child| child.is_span())
            .map(|child| child.text.as_str())
            .collect()
    }
}

/// An inline child of a block: a text run (`span`) or an embedded
/// inline object of some other `_type`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Child {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    /// Decorator values and markDef keys applied to this run
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<String>,
}

impl Child {
    pub fn span(text: impl Into<String>) -> Self {
        Self {
            kind: "span".into(),
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn is_span(&self) -> bool {
        self.kind == "span"
    }
}

/// Annotation payload attached to a block, referenced from span marks
/// by `key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    /// Annotation fields (e.g. `href`/`blank` for links)
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

/// An inline image entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Asset reference, opaque to this crate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<Value>,
}

/// A file/video attachment entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<Value>,
}

/// An embedded callout box.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalloutEntry {
    #[serde(rename = "type", default)]
    pub kind: CalloutKind,
    #[serde(default)]
    pub content: Vec<Block>,
}
