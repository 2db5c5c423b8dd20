//! Content block model: a closed tagged union over the block types the page
//! builder supports.
//!
//! Blocks are authored in the CMS and arrive as JSON objects carrying a
//! `_type` discriminant. Every payload field is optional at the data-model
//! level; renderers degrade rather than fail when fields are absent. Tags
//! not in the registry resolve to [`ContentBlock::Unknown`] so a single
//! future block type never aborts a page render.

use serde::Deserialize;
use serde_json::Value;

/// One CMS-authored unit of page content.
#[derive(Debug, Clone)]
pub enum ContentBlock {
    Hero(HeroBlock),
    Content(RichTextBlock),
    Cta(CtaBlock),
    Grid(GridBlock),
    ImageText(ImageTextBlock),
    Faq(FaqBlock),
    Form(FormBlock),
    Spacer(SpacerBlock),
    Testimonial(TestimonialBlock),
    Stats(StatsBlock),
    Team(TeamBlock),
    Pricing(PricingBlock),
    Video(VideoBlock),
    LogoCloud(LogoCloudBlock),
    Timeline(TimelineBlock),
    Comparison(ComparisonBlock),
    Accordion(AccordionBlock),
    GalleryGrid(GalleryGridBlock),
    ContactMap(ContactMapBlock),
    Newsletter(NewsletterBlock),
    /// A block whose `_type` is not in the registry (or whose payload could
    /// not be decoded). Rendered as a visible fallback, never an error.
    Unknown { type_tag: String },
}

impl ContentBlock {
    /// Resolve a raw stored block to its typed variant by `_type` tag.
    ///
    /// Total: untyped objects, unregistered tags, and undecodable payloads
    /// all resolve to [`ContentBlock::Unknown`].
    pub fn from_value(value: &Value) -> Self {
        let tag = match value.get("_type").and_then(Value::as_str) {
            Some(tag) if !tag.is_empty() => tag,
            _ => {
                return Self::Unknown {
                    type_tag: "(untyped)".to_string(),
                }
            }
        };

        Self::decode(tag, value).unwrap_or_else(|err| {
            tracing::warn!(tag, %err, "content block payload failed to decode");
            Self::Unknown {
                type_tag: tag.to_string(),
            }
        })
    }

    /// The block-type registry: tag string to payload decoder.
    fn decode(tag: &str, value: &Value) -> Result<Self, serde_json::Error> {
        let value = value.clone();
        Ok(match tag {
            "hero" => Self::Hero(serde_json::from_value(value)?),
            "content" => Self::Content(serde_json::from_value(value)?),
            "cta" => Self::Cta(serde_json::from_value(value)?),
            "grid" => Self::Grid(serde_json::from_value(value)?),
            "imageText" => Self::ImageText(serde_json::from_value(value)?),
            "faq" => Self::Faq(serde_json::from_value(value)?),
            "form" => Self::Form(serde_json::from_value(value)?),
            "spacer" => Self::Spacer(serde_json::from_value(value)?),
            "testimonial" => Self::Testimonial(serde_json::from_value(value)?),
            "stats" => Self::Stats(serde_json::from_value(value)?),
            "team" => Self::Team(serde_json::from_value(value)?),
            "pricing" => Self::Pricing(serde_json::from_value(value)?),
            "video" => Self::Video(serde_json::from_value(value)?),
            "logoCloud" => Self::LogoCloud(serde_json::from_value(value)?),
            "timeline" => Self::Timeline(serde_json::from_value(value)?),
            "comparison" => Self::Comparison(serde_json::from_value(value)?),
            "accordion" => Self::Accordion(serde_json::from_value(value)?),
            "galleryGrid" => Self::GalleryGrid(serde_json::from_value(value)?),
            "contactMap" => Self::ContactMap(serde_json::from_value(value)?),
            "newsletter" => Self::Newsletter(serde_json::from_value(value)?),
            other => Self::Unknown {
                type_tag: other.to_string(),
            },
        })
    }

    /// The wire tag for this block's variant.
    pub fn type_tag(&self) -> &str {
        match self {
            Self::Hero(_) => "hero",
            Self::Content(_) => "content",
            Self::Cta(_) => "cta",
            Self::Grid(_) => "grid",
            Self::ImageText(_) => "imageText",
            Self::Faq(_) => "faq",
            Self::Form(_) => "form",
            Self::Spacer(_) => "spacer",
            Self::Testimonial(_) => "testimonial",
            Self::Stats(_) => "stats",
            Self::Team(_) => "team",
            Self::Pricing(_) => "pricing",
            Self::Video(_) => "video",
            Self::LogoCloud(_) => "logoCloud",
            Self::Timeline(_) => "timeline",
            Self::Comparison(_) => "comparison",
            Self::Accordion(_) => "accordion",
            Self::GalleryGrid(_) => "galleryGrid",
            Self::ContactMap(_) => "contactMap",
            Self::Newsletter(_) => "newsletter",
            Self::Unknown { type_tag } => type_tag,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroBlock {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_label: Option<String>,
    pub cta_link: Option<String>,
    pub background_image: Option<String>,
    pub background_color: Option<String>,
}

/// Free-form rich-text section (`content` tag).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RichTextBlock {
    pub title: Option<String>,
    pub body: Option<String>,
    pub background_color: Option<String>,
    pub padding: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaBlock {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub button_label: Option<String>,
    pub button_link: Option<String>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridBlock {
    pub title: Option<String>,
    pub columns: Option<String>,
    pub items: Vec<GridCard>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridCard {
    pub title: Option<String>,
    pub body: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageTextBlock {
    pub title: Option<String>,
    pub body: Option<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub image_left: Option<bool>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqBlock {
    pub title: Option<String>,
    pub items: Vec<FaqItem>,
    pub background_color: Option<String>,
    pub padding: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqItem {
    pub question: Option<String>,
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormBlock {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub submit_label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacerBlock {
    pub size: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialBlock {
    pub title: Option<String>,
    pub items: Vec<TestimonialItem>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialItem {
    pub quote: Option<String>,
    pub author: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsBlock {
    pub title: Option<String>,
    pub items: Vec<StatFigure>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatFigure {
    pub value: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamBlock {
    pub title: Option<String>,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingBlock {
    pub title: Option<String>,
    pub tiers: Vec<PricingTier>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingTier {
    pub name: Option<String>,
    pub price: Option<String>,
    pub features: Vec<String>,
    pub highlighted: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoBlock {
    pub title: Option<String>,
    pub url: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoCloudBlock {
    pub title: Option<String>,
    pub logos: Vec<LogoItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoItem {
    pub image: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineBlock {
    pub title: Option<String>,
    pub events: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineEvent {
    pub label: Option<String>,
    pub heading: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparisonBlock {
    pub title: Option<String>,
    pub left_label: Option<String>,
    pub right_label: Option<String>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparisonRow {
    pub feature: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccordionBlock {
    pub title: Option<String>,
    pub items: Vec<FaqItem>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryGridBlock {
    pub title: Option<String>,
    pub columns: Option<String>,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImage {
    pub image: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactMapBlock {
    pub title: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub map_embed_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsletterBlock {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub placeholder: Option<String>,
    pub button_label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_registered_tag() {
        let block = ContentBlock::from_value(&json!({
            "_type": "hero",
            "title": "Power your home",
            "ctaLabel": "Get a quote",
        }));
        match block {
            ContentBlock::Hero(hero) => {
                assert_eq!(hero.title.as_deref(), Some("Power your home"));
                assert_eq!(hero.cta_label.as_deref(), Some("Get a quote"));
                assert!(hero.subtitle.is_none());
            }
            other => panic!("expected hero, got {}", other.type_tag()),
        }
    }

    #[test]
    fn unregistered_tag_resolves_to_unknown() {
        let block = ContentBlock::from_value(&json!({ "_type": "carousel3d" }));
        assert!(matches!(
            block,
            ContentBlock::Unknown { ref type_tag } if type_tag == "carousel3d"
        ));
    }

    #[test]
    fn missing_tag_resolves_to_unknown() {
        let block = ContentBlock::from_value(&json!({ "title": "no tag" }));
        assert!(matches!(block, ContentBlock::Unknown { .. }));
    }

    #[test]
    fn undecodable_payload_degrades_to_unknown() {
        // `items` holding a number instead of an array.
        let block = ContentBlock::from_value(&json!({ "_type": "faq", "items": 5 }));
        assert!(matches!(
            block,
            ContentBlock::Unknown { ref type_tag } if type_tag == "faq"
        ));
    }

    #[test]
    fn absent_payload_fields_default() {
        let block = ContentBlock::from_value(&json!({ "_type": "pricing" }));
        match block {
            ContentBlock::Pricing(pricing) => {
                assert!(pricing.title.is_none());
                assert!(pricing.tiers.is_empty());
            }
            other => panic!("expected pricing, got {}", other.type_tag()),
        }
    }
}
