//! Closed vocabularies for rich text content.
//!
//! Every enum here maps 1:1 to a string value persisted in stored content,
//! so the serde representations are load-bearing and must stay bit-exact.
//!
//! | Vocabulary   | Values                                                        |
//! |--------------|---------------------------------------------------------------|
//! | Block styles | `normal`, `lead`, `h1`, `h2`, `h3`, `h4`, `blockquote`        |
//! | List types   | `bullet`, `number`                                            |
//! | Decorators   | `strong`, `em`, `code`, `underline`, `strike-through`, `highlight` |
//! | Text colors  | `default`, `muted`, `primary`, `success`, `warning`, `danger` |
//! | Callout kind | `info`, `warning`, `success`, `error`                         |

use educe::Educe;
use serde::{Deserialize, Serialize};
use std::fmt;

/// URI schemes accepted by link annotations.
pub const LINK_URI_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Paragraph-level style of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    /// Regular paragraph
    #[educe(Default)]
    Normal,
    /// Lead paragraph (larger intro text)
    Lead,
    H1,
    H2,
    H3,
    H4,
    Blockquote,
}

impl BlockStyle {
    /// Persisted string value of this style.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Lead => "lead",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::Blockquote => "blockquote",
        }
    }

    /// Display label shown in the style dropdown.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Lead => "Lead Paragraph",
            Self::H1 => "Heading 1",
            Self::H2 => "Heading 2",
            Self::H3 => "Heading 3",
            Self::H4 => "Heading 4",
            Self::Blockquote => "Quote",
        }
    }

    /// All styles, in toolbar order.
    pub const ALL: [Self; 7] = [
        Self::Normal,
        Self::Lead,
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::Blockquote,
    ];
}

impl fmt::Display for BlockStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// List membership of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Bullet,
    Number,
}

impl ListType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bullet => "bullet",
            Self::Number => "number",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bullet => "Bullet List",
            Self::Number => "Numbered List",
        }
    }

    pub const ALL: [Self; 2] = [Self::Bullet, Self::Number];
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean inline mark (no attached data, unlike annotations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decorator {
    Strong,
    Em,
    Code,
    Underline,
    #[serde(rename = "strike-through")]
    StrikeThrough,
    Highlight,
}

impl Decorator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Em => "em",
            Self::Code => "code",
            Self::Underline => "underline",
            Self::StrikeThrough => "strike-through",
            Self::Highlight => "highlight",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Em => "Emphasis",
            Self::Code => "Code",
            Self::Underline => "Underline",
            Self::StrikeThrough => "Strike",
            Self::Highlight => "Highlight",
        }
    }

    pub const ALL: [Self; 6] = [
        Self::Strong,
        Self::Em,
        Self::Code,
        Self::Underline,
        Self::StrikeThrough,
        Self::Highlight,
    ];
}

impl fmt::Display for Decorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic color of a `textColor` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[educe(Default)]
    Default,
    Muted,
    Primary,
    Success,
    Warning,
    Danger,
}

impl TextColor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Muted => "muted",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Muted => "Muted",
            Self::Primary => "Primary",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Danger => "Danger",
        }
    }

    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Muted,
        Self::Primary,
        Self::Success,
        Self::Warning,
        Self::Danger,
    ];
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a callout box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    #[educe(Default)]
    Info,
    Warning,
    Success,
    Error,
}

impl CalloutKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Display label shown in the radio selector.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "💡 Info",
            Self::Warning => "⚠️ Warning",
            Self::Success => "✅ Success",
            Self::Error => "❌ Error",
        }
    }

    pub const ALL: [Self; 4] = [Self::Info, Self::Warning, Self::Success, Self::Error];
}

impl fmt::Display for CalloutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
