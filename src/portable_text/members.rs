//! Declarations for rich content array members.
//!
//! A rich content array declares a *closed* set of member types. The set
//! is a tagged union: adding a new embeddable type means adding a
//! variant here, not registering anything at runtime.

use crate::portable_text::vocab::{BlockStyle, Decorator, ListType};
use crate::schema::field::Field;
use crate::schema::options::{FileOptions, ImageOptions};
use serde::Serialize;

/// A vocabulary entry paired with its editor label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labeled<T> {
    pub title: String,
    pub value: T,
}

impl<T> Labeled<T> {
    pub fn new(title: impl Into<String>, value: T) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }
}

/// An inline annotation: a mark that carries structured data (unlike a
/// plain decorator), declared as a named object with its own fields.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationDecl {
    /// Mark name referenced by span `marks` / block `markDefs`
    pub name: String,
    pub title: String,
    pub fields: Vec<Field>,
}

impl AnnotationDecl {
    pub fn new(name: impl Into<String>, title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            fields,
        }
    }
}

/// Declaration of a text block member: which styles, lists and marks the
/// editor offers.
///
/// An empty vocabulary list means "host editor defaults" (the bare
/// `block` member used by callout content).
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlockMemberDecl {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<Labeled<BlockStyle>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lists: Vec<Labeled<ListType>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<Labeled<Decorator>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationDecl>,
}

impl BlockMemberDecl {
    /// Bare block member with the host editor's default vocabulary.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Block member offering the full declared vocabulary.
    pub fn full_vocabulary(annotations: Vec<AnnotationDecl>) -> Self {
        Self {
            styles: BlockStyle::ALL
                .into_iter()
                .map(|s| Labeled::new(s.label(), s))
                .collect(),
            lists: ListType::ALL
                .into_iter()
                .map(|l| Labeled::new(l.label(), l))
                .collect(),
            decorators: Decorator::ALL
                .into_iter()
                .map(|d| Labeled::new(d.label(), d))
                .collect(),
            annotations,
        }
    }

    /// Look up an annotation declaration by mark name.
    pub fn annotation(&self, name: &str) -> Option<&AnnotationDecl> {
        self.annotations.iter().find(|a| a.name == name)
    }
}

/// Declaration of an inline image member.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImageMemberDecl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub options: ImageOptions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

/// Declaration of an inline file member.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileMemberDecl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub options: FileOptions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

/// The closed set of member types a rich content array may allow.
///
/// Member type tags are disjoint; rendering order follows array order.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ArrayMember {
    /// Styled text block
    Block(BlockMemberDecl),
    /// Inline image entry
    Image(ImageMemberDecl),
    /// File/video attachment entry
    File(FileMemberDecl),
    /// Embedded callout object
    Callout,
}

impl ArrayMember {
    /// The `_type` tag instance elements carry for this member.
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::Block(_) => "block",
            Self::Image(_) => "image",
            Self::File(_) => "file",
            Self::Callout => "callout",
        }
    }

    pub fn as_block(&self) -> Option<&BlockMemberDecl> {
        match self {
            Self::Block(decl) => Some(decl),
            _ => None,
        }
    }
}
