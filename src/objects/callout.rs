//! The `callout` object type: an inline alert box.
//!
//! Embeddable inside rich content arrays. Carries a severity kind and
//! its own (text-only) rich content; nesting further media or callouts
//! is not allowed.

use crate::portable_text::{ArrayMember, Block, BlockMemberDecl, CalloutKind};
use crate::schema::{
    Field, FieldOptions, PreparedPreview, Preview, SchemaType, SelectItem, SelectList,
    SelectedValues, Selection,
};
use serde_json::{Value, json};

/// Build the `callout` object type declaration.
pub fn callout() -> SchemaType {
    SchemaType::object("callout", "Callout Box")
        .fields(vec![
            Field::string("type", "Type")
                .options(FieldOptions::List(
                    SelectList::new(
                        CalloutKind::ALL
                            .into_iter()
                            .map(|k| SelectItem::new(k.label(), k.as_str()))
                            .collect(),
                    )
                    .radio(),
                ))
                .initial(json!(CalloutKind::Info.as_str())),
            Field::array("content", "Content")
                .members(vec![ArrayMember::Block(BlockMemberDecl::plain())]),
        ])
        .preview(Preview::new(
            vec![
                Selection::new("type", "type"),
                Selection::new("blocks", "content"),
            ],
            prepare_callout,
        ))
}

/// Preview projection for embedded callouts.
///
/// Title is the raw kind value (or "Callout" when unset). The subtitle
/// is the span text of the first content block; a missing or empty
/// content array yields the literal "Empty callout".
fn prepare_callout(selected: &SelectedValues) -> PreparedPreview {
    let first_block = selected
        .get("blocks")
        .and_then(Value::as_array)
        .and_then(|blocks| blocks.first());

    let subtitle = match first_block {
        Some(block) => serde_json::from_value::<Block>(block.clone())
            .map(|b| b.span_text())
            .unwrap_or_default(),
        None => "Empty callout".to_string(),
    };

    PreparedPreview {
        title: selected
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("Callout")
            .to_string(),
        subtitle,
        media: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ValidationError, validate_document};
    use serde_json::json;

    fn run_preview(instance: Value) -> PreparedPreview {
        callout().preview.as_ref().unwrap().run(&instance)
    }

    #[test]
    fn test_field_names_are_unique() {
        assert!(callout().duplicate_field_names().is_empty());
    }

    #[test]
    fn test_preview_empty_content() {
        let prepared = run_preview(json!({ "type": "info", "content": [] }));
        assert_eq!(prepared.subtitle, "Empty callout");
        assert_eq!(prepared.title, "info");
    }

    #[test]
    fn test_preview_missing_content() {
        let prepared = run_preview(json!({}));
        assert_eq!(prepared.subtitle, "Empty callout");
        assert_eq!(prepared.title, "Callout");
    }

    #[test]
    fn test_preview_concatenates_span_children() {
        let prepared = run_preview(json!({
            "type": "warning",
            "content": [{
                "_type": "block",
                "children": [
                    { "_type": "span", "text": "Hello " },
                    { "_type": "image" },
                    { "_type": "span", "text": "world" },
                ],
            }],
        }));
        assert_eq!(prepared.subtitle, "Hello world");
        assert_eq!(prepared.title, "warning");
    }

    #[test]
    fn test_preview_uses_only_first_block() {
        let prepared = run_preview(json!({
            "content": [
                { "_type": "block", "children": [{ "_type": "span", "text": "first" }] },
                { "_type": "block", "children": [{ "_type": "span", "text": "second" }] },
            ],
        }));
        assert_eq!(prepared.subtitle, "first");
    }

    #[test]
    fn test_preview_block_without_spans_is_blank() {
        // Present but span-less first block: blank subtitle, not the
        // empty-content fallback
        let prepared = run_preview(json!({
            "content": [{ "_type": "block", "children": [{ "_type": "image" }] }],
        }));
        assert_eq!(prepared.subtitle, "");
    }

    #[test]
    fn test_kind_must_be_in_list() {
        let errors = validate_document(&callout(), &json!({ "type": "fatal" }));
        assert_eq!(
            errors,
            vec![ValidationError::NotInAllowedSet {
                field: "type".into(),
                value: "fatal".into(),
            }]
        );
        assert!(validate_document(&callout(), &json!({ "type": "error" })).is_empty());
    }

    #[test]
    fn test_kind_radio_layout_and_initial() {
        let schema = callout();
        let kind = schema.field("type").unwrap();
        let list = kind.options.as_list().unwrap();
        assert_eq!(list.layout, crate::schema::ListLayout::Radio);
        assert_eq!(list.items.len(), 4);
        assert_eq!(
            kind.initial_value.as_ref().unwrap().resolve(),
            json!("info")
        );
    }

    #[test]
    fn test_content_allows_blocks_only() {
        let blocks_only = json!({
            "content": [{ "_type": "block", "children": [] }],
        });
        assert!(validate_document(&callout(), &blocks_only).is_empty());

        let with_image = json!({
            "content": [{ "_type": "image", "alt": "nope" }],
        });
        let errors = validate_document(&callout(), &with_image);
        assert_eq!(
            errors,
            vec![ValidationError::UnknownMemberType {
                field: "content".into(),
                member_type: "image".into(),
            }]
        );
    }
}
