//! The `post` document type: a blog article.
//!
//! Fields cover article metadata (titles, slug, category, dates), card
//! presentation (images, gradient), the rich text body, editorial flags
//! and SEO settings. The preview projects a card-style
//! `"{category} • {date}"` subtitle for list views.

use crate::portable_text::{
    AnnotationDecl, ArrayMember, BlockMemberDecl, FileMemberDecl, ImageMemberDecl,
    LINK_URI_SCHEMES, TextColor,
};
use crate::schema::{
    Field, FieldOptions, FileOptions, ImageOptions, ObjectOptions, PreparedPreview, Preview,
    SchemaType, SelectItem, SelectList, SelectedValues, Selection, SlugOptions,
};
use educe::Educe;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// Editorial category of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI STRATEGY")]
    AiStrategy,
    #[serde(rename = "TECHNOLOGY")]
    Technology,
    #[serde(rename = "BUSINESS")]
    Business,
    #[serde(rename = "INNOVATION")]
    Innovation,
}

impl Category {
    /// Persisted value (upper-cased, referenced by stored content).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AiStrategy => "AI STRATEGY",
            Self::Technology => "TECHNOLOGY",
            Self::Business => "BUSINESS",
            Self::Innovation => "INNOVATION",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AiStrategy => "AI Strategy",
            Self::Technology => "Technology",
            Self::Business => "Business",
            Self::Innovation => "Innovation",
        }
    }

    pub const ALL: [Self; 4] = [
        Self::AiStrategy,
        Self::Technology,
        Self::Business,
        Self::Innovation,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Background gradient of an article card. The persisted values are the
/// literal CSS strings the frontend applies verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
pub enum CardGradient {
    #[educe(Default)]
    #[serde(rename = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)")]
    PurpleBlue,
    #[serde(rename = "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)")]
    OrangeRed,
    #[serde(rename = "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)")]
    GreenBlue,
    #[serde(rename = "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)")]
    PinkPurple,
}

impl CardGradient {
    /// The CSS value applied by the frontend.
    pub const fn css(self) -> &'static str {
        match self {
            Self::PurpleBlue => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            Self::OrangeRed => "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
            Self::GreenBlue => "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
            Self::PinkPurple => "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PurpleBlue => "Purple-Blue",
            Self::OrangeRed => "Orange-Red",
            Self::GreenBlue => "Green-Blue",
            Self::PinkPurple => "Pink-Purple",
        }
    }

    pub const ALL: [Self; 4] = [
        Self::PurpleBlue,
        Self::OrangeRed,
        Self::GreenBlue,
        Self::PinkPurple,
    ];
}

/// Maximum slug length.
pub const SLUG_MAX_LENGTH: u32 = 96;
/// Maximum excerpt length.
pub const EXCERPT_MAX_LENGTH: u32 = 200;
/// Maximum SEO meta title length.
pub const META_TITLE_MAX_LENGTH: u32 = 60;
/// Maximum SEO meta description length.
pub const META_DESCRIPTION_MAX_LENGTH: u32 = 160;

/// Build the `post` document type declaration.
pub fn post() -> SchemaType {
    SchemaType::document("post", "Blog Post")
        .fields(vec![
            Field::string("title", "Title").required(),
            Field::string("subtitle", "Subtitle").description("Secondary headline"),
            Field::string("displayTitle", "Display Title (for card)").description(
                "Optional shorter title for article cards. Falls back to main title if empty.",
            ),
            Field::slug("slug", "Slug")
                .options(FieldOptions::Slug(SlugOptions::new("title", SLUG_MAX_LENGTH)))
                .required(),
            Field::string("category", "Category").options(FieldOptions::List(SelectList::new(
                Category::ALL
                    .into_iter()
                    .map(|c| SelectItem::new(c.label(), c.as_str()))
                    .collect(),
            ))),
            Field::string("date", "Display Date").placeholder("FEBRUARY, 2026"),
            Field::datetime("publishedAt", "Published At").initial_now(),
            Field::image("image", "Featured Image")
                .description("Main blog post image")
                .options(FieldOptions::Image(ImageOptions::hotspot()))
                .fields(vec![Field::string("alt", "Alt text")]),
            Field::image("cardImage", "Card Background Image")
                .description("Image shown on article card (optional, falls back to featured image)")
                .options(FieldOptions::Image(ImageOptions::hotspot()))
                .fields(vec![Field::string("alt", "Alt text")]),
            Field::image("coverImage", "Cover Image")
                .description("Alternative cover image (optional)")
                .options(FieldOptions::Image(ImageOptions::hotspot())),
            Field::string("cardGradient", "Card Gradient")
                .description("CSS gradient for article card")
                .initial(json!(CardGradient::PurpleBlue.css()))
                .options(FieldOptions::List(SelectList::new(
                    CardGradient::ALL
                        .into_iter()
                        .map(|g| SelectItem::new(g.label(), g.css()))
                        .collect(),
                ))),
            body_field(),
            Field::boolean("featured", "Featured")
                .description("Show in homepage carousel")
                .initial(json!(false)),
            Field::text("excerpt", "Excerpt")
                .description("Short summary for previews and SEO (150-200 characters)")
                .rows(3)
                .max(EXCERPT_MAX_LENGTH),
            Field::object("nextPost", "Next Post").fields(vec![
                Field::string("title", "Title"),
                Field::string("slug", "Slug").description("E.g., /blog/next-post-slug"),
            ]),
            Field::object("seo", "SEO Settings")
                .options(FieldOptions::Object(ObjectOptions::collapsed()))
                .fields(vec![
                    Field::string("metaTitle", "Meta Title")
                        .description("Custom title for search engines (leave blank to use main title)")
                        .max(META_TITLE_MAX_LENGTH),
                    Field::text("metaDescription", "Meta Description")
                        .rows(3)
                        .max(META_DESCRIPTION_MAX_LENGTH),
                ]),
        ])
        .preview(Preview::new(
            vec![
                Selection::new("title", "title"),
                Selection::new("media", "image"),
                Selection::new("subtitle", "category"),
                Selection::new("date", "date"),
            ],
            prepare_post,
        ))
}

/// The rich content body: styled blocks, inline media and callouts.
fn body_field() -> Field {
    Field::array("body", "Content")
        .description(
            "Paste content from Notion and it will preserve formatting. \
             Use toolbar or markdown shortcuts (##, ###) for headings.",
        )
        .members(vec![
            ArrayMember::Block(BlockMemberDecl::full_vocabulary(vec![
                text_color_annotation(),
                link_annotation(),
            ])),
            ArrayMember::Image(ImageMemberDecl {
                title: Some("Image".into()),
                options: ImageOptions::hotspot(),
                fields: vec![
                    Field::string("alt", "Alt text")
                        .description("Important for SEO and accessibility"),
                    Field::string("caption", "Caption"),
                ],
            }),
            ArrayMember::File(FileMemberDecl {
                title: Some("Video".into()),
                options: FileOptions::accept("video/*"),
                fields: vec![
                    Field::string("title", "Title"),
                    Field::string("caption", "Caption"),
                ],
            }),
            ArrayMember::Callout,
        ])
}

/// `textColor` annotation: a required color from the semantic palette.
fn text_color_annotation() -> AnnotationDecl {
    AnnotationDecl::new(
        "textColor",
        "Text Color",
        vec![
            Field::string("color", "Color")
                .required()
                .options(FieldOptions::List(SelectList::new(
                    TextColor::ALL
                        .into_iter()
                        .map(|c| SelectItem::new(c.label(), c.as_str()))
                        .collect(),
                )))
                .initial(json!(TextColor::Default.as_str())),
        ],
    )
}

/// `link` annotation: scheme-checked href plus open-in-new-tab flag.
fn link_annotation() -> AnnotationDecl {
    AnnotationDecl::new(
        "link",
        "Link",
        vec![
            Field::url("href", "URL").uri(LINK_URI_SCHEMES),
            Field::boolean("blank", "Open in new tab").initial(json!(true)),
        ],
    )
}

/// Preview projection for post list entries.
///
/// Title and media pass through; the subtitle is always
/// `"{category} • {date}"`, with literal fallbacks for missing values.
fn prepare_post(selected: &SelectedValues) -> PreparedPreview {
    let category = selected
        .get("subtitle")
        .and_then(Value::as_str)
        .unwrap_or("Uncategorized");
    let date = selected
        .get("date")
        .and_then(Value::as_str)
        .unwrap_or("No date");

    PreparedPreview {
        title: selected
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        subtitle: format!("{category} • {date}"),
        media: selected.get("media").cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ValidationError, validate_document, validate_field};
    use serde_json::json;

    fn instance(overrides: Value) -> Value {
        let mut base = json!({
            "title": "Shipping an AI roadmap",
            "slug": { "current": "shipping-an-ai-roadmap" },
        });
        base.as_object_mut()
            .unwrap()
            .extend(overrides.as_object().unwrap().clone());
        base
    }

    #[test]
    fn test_field_names_are_unique() {
        assert!(post().duplicate_field_names().is_empty());
    }

    #[test]
    fn test_preview_subtitle_full() {
        let schema = post();
        let prepared = schema.preview.as_ref().unwrap().run(&json!({
            "title": "My Post",
            "category": "TECHNOLOGY",
            "date": "FEBRUARY, 2026",
            "image": { "asset": { "_ref": "image-abc" } },
        }));
        assert_eq!(prepared.title, "My Post");
        assert_eq!(prepared.subtitle, "TECHNOLOGY • FEBRUARY, 2026");
        assert!(prepared.media.is_some());
    }

    #[test]
    fn test_preview_subtitle_missing_category() {
        let schema = post();
        let prepared = schema
            .preview
            .as_ref()
            .unwrap()
            .run(&json!({ "title": "t", "date": "JANUARY, 2026" }));
        assert!(prepared.subtitle.starts_with("Uncategorized • "));
        assert_eq!(prepared.subtitle, "Uncategorized • JANUARY, 2026");
    }

    #[test]
    fn test_preview_subtitle_missing_date() {
        let schema = post();
        let prepared = schema
            .preview
            .as_ref()
            .unwrap()
            .run(&json!({ "title": "t", "category": "BUSINESS" }));
        assert!(prepared.subtitle.ends_with(" • No date"));
        assert_eq!(prepared.subtitle, "BUSINESS • No date");
    }

    #[test]
    fn test_preview_subtitle_all_fallbacks() {
        let schema = post();
        let prepared = schema.preview.as_ref().unwrap().run(&json!({}));
        assert_eq!(prepared.subtitle, "Uncategorized • No date");
        assert_eq!(prepared.media, None);
    }

    #[test]
    fn test_required_title_and_slug() {
        let errors = validate_document(&post(), &json!({}));
        assert!(errors.contains(&ValidationError::RequiredFieldMissing {
            field: "title".into()
        }));
        assert!(errors.contains(&ValidationError::RequiredFieldMissing {
            field: "slug".into()
        }));
    }

    #[test]
    fn test_minimal_valid_instance() {
        let errors = validate_document(&post(), &instance(json!({})));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_category_must_be_in_list() {
        for category in Category::ALL {
            let errors =
                validate_document(&post(), &instance(json!({ "category": category.as_str() })));
            assert!(errors.is_empty());
        }
        let errors = validate_document(&post(), &instance(json!({ "category": "SPORTS" })));
        assert_eq!(
            errors,
            vec![ValidationError::NotInAllowedSet {
                field: "category".into(),
                value: "SPORTS".into(),
            }]
        );
    }

    #[test]
    fn test_card_gradient_must_be_in_list() {
        let errors = validate_document(
            &post(),
            &instance(json!({ "cardGradient": CardGradient::GreenBlue.css() })),
        );
        assert!(errors.is_empty());

        let errors = validate_document(
            &post(),
            &instance(json!({ "cardGradient": "linear-gradient(90deg, red, blue)" })),
        );
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            ValidationError::NotInAllowedSet { .. }
        ));
    }

    #[test]
    fn test_slug_boundary() {
        let ok = instance(json!({ "slug": { "current": "a".repeat(96) } }));
        assert!(validate_document(&post(), &ok).is_empty());

        let over = instance(json!({ "slug": { "current": "a".repeat(97) } }));
        let errors = validate_document(&post(), &over);
        assert_eq!(
            errors,
            vec![ValidationError::MaxLengthExceeded {
                field: "slug".into(),
                max: 96,
                actual: 97,
            }]
        );
    }

    #[test]
    fn test_excerpt_boundary() {
        let ok = instance(json!({ "excerpt": "e".repeat(200) }));
        assert!(validate_document(&post(), &ok).is_empty());

        let over = instance(json!({ "excerpt": "e".repeat(201) }));
        assert_eq!(validate_document(&post(), &over).len(), 1);
    }

    #[test]
    fn test_seo_meta_boundaries() {
        let ok = instance(json!({
            "seo": {
                "metaTitle": "t".repeat(60),
                "metaDescription": "d".repeat(160),
            }
        }));
        assert!(validate_document(&post(), &ok).is_empty());

        let over = instance(json!({
            "seo": {
                "metaTitle": "t".repeat(61),
                "metaDescription": "d".repeat(161),
            }
        }));
        let errors = validate_document(&post(), &over);
        assert_eq!(
            errors,
            vec![
                ValidationError::MaxLengthExceeded {
                    field: "metaTitle".into(),
                    max: 60,
                    actual: 61,
                },
                ValidationError::MaxLengthExceeded {
                    field: "metaDescription".into(),
                    max: 160,
                    actual: 161,
                },
            ]
        );
    }

    #[test]
    fn test_body_accepts_declared_members() {
        let body = json!([
            { "_type": "block", "children": [{ "_type": "span", "text": "hi" }] },
            { "_type": "image", "alt": "a" },
            { "_type": "file", "title": "v.mp4" },
            { "_type": "callout", "type": "info" },
        ]);
        let errors = validate_document(&post(), &instance(json!({ "body": body })));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_body_rejects_unknown_member() {
        let body = json!([{ "_type": "tweet", "id": "1" }]);
        let errors = validate_document(&post(), &instance(json!({ "body": body })));
        assert_eq!(
            errors,
            vec![ValidationError::UnknownMemberType {
                field: "body".into(),
                member_type: "tweet".into(),
            }]
        );
    }

    #[test]
    fn test_link_annotation_scheme_allow_list() {
        let schema = post();
        let body = schema.field("body").unwrap();
        let block = body.members[0].as_block().unwrap();
        let href = block.annotation("link").unwrap().fields[0].clone();

        assert!(validate_field(&href, Some(&json!("mailto:test@example.com"))).is_ok());
        assert!(validate_field(&href, Some(&json!("ftp://example.com"))).is_err());
    }

    #[test]
    fn test_text_color_annotation_requires_color() {
        let schema = post();
        let block = schema.field("body").unwrap().members[0].as_block().unwrap();
        let color = block.annotation("textColor").unwrap().fields[0].clone();

        assert!(validate_field(&color, None).is_err());
        assert!(validate_field(&color, Some(&json!("danger"))).is_ok());
        assert!(validate_field(&color, Some(&json!("crimson"))).is_err());
    }

    #[test]
    fn test_card_gradient_initial_value() {
        let schema = post();
        let gradient = schema.field("cardGradient").unwrap();
        assert_eq!(
            gradient.initial_value.as_ref().unwrap().resolve(),
            json!("linear-gradient(135deg, #667eea 0%, #764ba2 100%)")
        );
    }

    #[test]
    fn test_category_persisted_values() {
        let values: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            values,
            vec!["AI STRATEGY", "TECHNOLOGY", "BUSINESS", "INNOVATION"]
        );
        // serde uses the same persisted values
        assert_eq!(
            serde_json::to_value(Category::AiStrategy).unwrap(),
            json!("AI STRATEGY")
        );
    }

    #[test]
    fn test_slug_generation_from_long_title() {
        let schema = post();
        let options = schema.field("slug").unwrap().options.as_slug().unwrap().clone();
        assert_eq!(options.source, "title");

        let title = "How We Rebuilt Our Entire Content Pipeline Around Structured \
                     Data And Lived To Tell The Tale In Excruciating Detail";
        let slug = options.generate(title);
        assert!(slug.len() <= 96);
        assert!(!slug.ends_with('-'));
        assert!(slug.starts_with("how-we-rebuilt"));
    }

    #[test]
    fn test_featured_defaults_false() {
        let schema = post();
        let featured = schema.field("featured").unwrap();
        assert_eq!(
            featured.initial_value.as_ref().unwrap().resolve(),
            json!(false)
        );
    }
}
