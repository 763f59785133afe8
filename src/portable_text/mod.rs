//! Rich text ("portable text") model.
//!
//! Two halves, mirroring how the host treats rich content:
//!
//! | Module    | Side        | Purpose                                       |
//! |-----------|-------------|-----------------------------------------------|
//! | `vocab`   | both        | Closed vocabularies with bit-exact values     |
//! | `members` | declaration | Allowed member types of a rich content array  |
//! | `content` | instance    | The JSON shape editors actually produce       |

pub mod content;
pub mod members;
pub mod vocab;

pub use content::{Block, BodyMember, CalloutEntry, Child, FileEntry, ImageEntry, MarkDef};
pub use members::{
    AnnotationDecl, ArrayMember, BlockMemberDecl, FileMemberDecl, ImageMemberDecl, Labeled,
};
pub use vocab::{
    BlockStyle, CalloutKind, Decorator, LINK_URI_SCHEMES, ListType, TextColor,
};
