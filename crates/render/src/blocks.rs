//! Per-variant block renderers.
//!
//! Each renderer is a pure function of its own block payload. Every payload
//! field is optional: an absent title drops the heading, an absent list
//! renders the section's empty state, and style enums resolve through the
//! theme tables with their documented defaults.

use brightroof_core::block::*;
use brightroof_core::theme::{BackgroundColor, ColumnCount, Padding};

use crate::escape::escape;

/// Dispatch a resolved block to its variant renderer. Exhaustive over the
/// registry; `Unknown` renders the visible fallback banner.
pub fn render_block(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Hero(block) => hero(block),
        ContentBlock::Content(block) => rich_text(block),
        ContentBlock::Cta(block) => cta(block),
        ContentBlock::Grid(block) => grid(block),
        ContentBlock::ImageText(block) => image_text(block),
        ContentBlock::Faq(block) => faq(block),
        ContentBlock::Form(block) => form(block),
        ContentBlock::Spacer(block) => spacer(block),
        ContentBlock::Testimonial(block) => testimonial(block),
        ContentBlock::Stats(block) => stats(block),
        ContentBlock::Team(block) => team(block),
        ContentBlock::Pricing(block) => pricing(block),
        ContentBlock::Video(block) => video(block),
        ContentBlock::LogoCloud(block) => logo_cloud(block),
        ContentBlock::Timeline(block) => timeline(block),
        ContentBlock::Comparison(block) => comparison(block),
        ContentBlock::Accordion(block) => accordion(block),
        ContentBlock::GalleryGrid(block) => gallery_grid(block),
        ContentBlock::ContactMap(block) => contact_map(block),
        ContentBlock::Newsletter(block) => newsletter(block),
        ContentBlock::Unknown { type_tag } => unknown(type_tag),
    }
}

/// Visible fallback for a block type not in the registry. Named so content
/// authors can spot the tag that needs a deploy, and so a single future
/// block never takes the page down.
fn unknown(type_tag: &str) -> String {
    format!(
        "<section class=\"block-fallback\" data-block-type=\"{tag}\">\
         <p>Unknown content block type: &quot;{tag}&quot;</p></section>",
        tag = escape(type_tag)
    )
}

fn section(kind: &str, extra_classes: &str, inner: &str) -> String {
    let classes = if extra_classes.is_empty() {
        format!("block-{kind}")
    } else {
        format!("block-{kind} {extra_classes}")
    };
    format!("<section class=\"{classes}\">{inner}</section>")
}

fn heading(title: &Option<String>) -> String {
    match title {
        Some(title) => format!("<h2>{}</h2>", escape(title)),
        None => String::new(),
    }
}

fn paragraph(class: &str, text: &Option<String>) -> String {
    match text {
        Some(text) => format!("<p class=\"{class}\">{}</p>", escape(text)),
        None => String::new(),
    }
}

fn background(raw: &Option<String>) -> &'static str {
    BackgroundColor::resolve(raw.as_deref()).css_class()
}

fn hero(block: &HeroBlock) -> String {
    let mut inner = String::new();
    if let Some(title) = &block.title {
        inner.push_str(&format!("<h1>{}</h1>", escape(title)));
    }
    inner.push_str(&paragraph("hero-subtitle", &block.subtitle));
    if let Some(label) = &block.cta_label {
        let href = block.cta_link.as_deref().unwrap_or("#");
        inner.push_str(&format!(
            "<a class=\"hero-cta\" href=\"{}\">{}</a>",
            escape(href),
            escape(label)
        ));
    }
    let style = match &block.background_image {
        Some(image) => format!(" style=\"background-image:url('{}')\"", escape(image)),
        None => String::new(),
    };
    format!(
        "<section class=\"block-hero {}\"{style}>{inner}</section>",
        background(&block.background_color)
    )
}

fn rich_text(block: &RichTextBlock) -> String {
    let classes = format!(
        "{} {}",
        background(&block.background_color),
        Padding::resolve(block.padding.as_deref()).css_class()
    );
    let inner = format!(
        "{}{}",
        heading(&block.title),
        paragraph("content-body", &block.body)
    );
    section("content", &classes, &inner)
}

fn cta(block: &CtaBlock) -> String {
    let mut inner = format!(
        "{}{}",
        heading(&block.title),
        paragraph("cta-subtitle", &block.subtitle)
    );
    if let Some(label) = &block.button_label {
        let href = block.button_link.as_deref().unwrap_or("#");
        inner.push_str(&format!(
            "<a class=\"cta-button\" href=\"{}\">{}</a>",
            escape(href),
            escape(label)
        ));
    }
    section("cta", background(&block.background_color), &inner)
}

fn grid(block: &GridBlock) -> String {
    let cards: String = block
        .items
        .iter()
        .map(|card| {
            let icon = match &card.icon {
                Some(icon) => format!("<span class=\"card-icon\">{}</span>", escape(icon)),
                None => String::new(),
            };
            format!(
                "<div class=\"grid-card\">{icon}{}{}</div>",
                match &card.title {
                    Some(title) => format!("<h3>{}</h3>", escape(title)),
                    None => String::new(),
                },
                paragraph("card-body", &card.body)
            )
        })
        .collect();
    let classes = format!(
        "{} {}",
        background(&block.background_color),
        ColumnCount::resolve(block.columns.as_deref()).css_class()
    );
    section(
        "grid",
        &classes,
        &format!("{}<div class=\"grid-items\">{cards}</div>", heading(&block.title)),
    )
}

fn image_text(block: &ImageTextBlock) -> String {
    let image = match &block.image {
        Some(src) => format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape(src),
            escape(block.image_alt.as_deref().unwrap_or(""))
        ),
        None => String::new(),
    };
    let orientation = if block.image_left.unwrap_or(false) {
        "image-left"
    } else {
        "image-right"
    };
    let classes = format!("{} {orientation}", background(&block.background_color));
    let inner = format!(
        "{image}<div class=\"image-text-copy\">{}{}</div>",
        heading(&block.title),
        paragraph("image-text-body", &block.body)
    );
    section("image-text", &classes, &inner)
}

fn faq_items(items: &[FaqItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "<details class=\"faq-item\"><summary>{}</summary><p>{}</p></details>",
                escape(item.question.as_deref().unwrap_or("")),
                escape(item.answer.as_deref().unwrap_or(""))
            )
        })
        .collect()
}

fn faq(block: &FaqBlock) -> String {
    let classes = format!(
        "{} {}",
        background(&block.background_color),
        Padding::resolve(block.padding.as_deref()).css_class()
    );
    section(
        "faq",
        &classes,
        &format!("{}{}", heading(&block.title), faq_items(&block.items)),
    )
}

fn form(block: &FormBlock) -> String {
    let inner = format!(
        "{}{}<form class=\"quote-form\" method=\"post\" action=\"/api/submit-form\">\
         <input name=\"name\" required><input name=\"email\" type=\"email\" required>\
         <input name=\"phone\" required><input name=\"postcode\" required>\
         <textarea name=\"message\"></textarea>\
         <button type=\"submit\">{}</button></form>",
        heading(&block.title),
        paragraph("form-subtitle", &block.subtitle),
        escape(block.submit_label.as_deref().unwrap_or("Send"))
    );
    section("form", "", &inner)
}

fn spacer(block: &SpacerBlock) -> String {
    let size = Padding::resolve(block.size.as_deref()).css_class();
    format!("<div class=\"block-spacer {size}\"></div>")
}

fn testimonial(block: &TestimonialBlock) -> String {
    let quotes: String = block
        .items
        .iter()
        .map(|item| {
            let attribution = match (&item.author, &item.location) {
                (Some(author), Some(location)) => {
                    format!("<cite>{}, {}</cite>", escape(author), escape(location))
                }
                (Some(author), None) => format!("<cite>{}</cite>", escape(author)),
                _ => String::new(),
            };
            format!(
                "<blockquote>{}{attribution}</blockquote>",
                paragraph("quote", &item.quote)
            )
        })
        .collect();
    section(
        "testimonial",
        background(&block.background_color),
        &format!("{}{quotes}", heading(&block.title)),
    )
}

fn stats(block: &StatsBlock) -> String {
    let figures: String = block
        .items
        .iter()
        .map(|figure| {
            format!(
                "<div class=\"stat\"><span class=\"stat-value\">{}</span>\
                 <span class=\"stat-label\">{}</span></div>",
                escape(figure.value.as_deref().unwrap_or("")),
                escape(figure.label.as_deref().unwrap_or(""))
            )
        })
        .collect();
    section(
        "stats",
        background(&block.background_color),
        &format!("{}{figures}", heading(&block.title)),
    )
}

fn team(block: &TeamBlock) -> String {
    let members: String = block
        .members
        .iter()
        .map(|member| {
            let photo = match &member.photo {
                Some(src) => format!("<img src=\"{}\" alt=\"\">", escape(src)),
                None => String::new(),
            };
            format!(
                "<div class=\"team-member\">{photo}<h3>{}</h3>{}</div>",
                escape(member.name.as_deref().unwrap_or("")),
                paragraph("team-role", &member.role)
            )
        })
        .collect();
    section("team", "", &format!("{}{members}", heading(&block.title)))
}

fn pricing(block: &PricingBlock) -> String {
    let tiers: String = block
        .tiers
        .iter()
        .map(|tier| {
            let class = if tier.highlighted.unwrap_or(false) {
                "pricing-tier highlighted"
            } else {
                "pricing-tier"
            };
            let features: String = tier
                .features
                .iter()
                .map(|feature| format!("<li>{}</li>", escape(feature)))
                .collect();
            format!(
                "<div class=\"{class}\"><h3>{}</h3><p class=\"price\">{}</p><ul>{features}</ul></div>",
                escape(tier.name.as_deref().unwrap_or("")),
                escape(tier.price.as_deref().unwrap_or(""))
            )
        })
        .collect();
    section(
        "pricing",
        background(&block.background_color),
        &format!("{}{tiers}", heading(&block.title)),
    )
}

fn video(block: &VideoBlock) -> String {
    let player = match &block.url {
        Some(url) => format!(
            "<iframe src=\"{}\" allowfullscreen></iframe>",
            escape(url)
        ),
        None => String::new(),
    };
    let inner = format!(
        "{}{player}{}",
        heading(&block.title),
        paragraph("video-caption", &block.caption)
    );
    section("video", "", &inner)
}

fn logo_cloud(block: &LogoCloudBlock) -> String {
    let logos: String = block
        .logos
        .iter()
        .filter_map(|logo| {
            logo.image.as_ref().map(|src| {
                format!(
                    "<img src=\"{}\" alt=\"{}\">",
                    escape(src),
                    escape(logo.alt.as_deref().unwrap_or(""))
                )
            })
        })
        .collect();
    section(
        "logo-cloud",
        "",
        &format!("{}{logos}", heading(&block.title)),
    )
}

fn timeline(block: &TimelineBlock) -> String {
    let events: String = block
        .events
        .iter()
        .map(|event| {
            format!(
                "<li class=\"timeline-event\"><span class=\"timeline-label\">{}</span>\
                 <h3>{}</h3>{}</li>",
                escape(event.label.as_deref().unwrap_or("")),
                escape(event.heading.as_deref().unwrap_or("")),
                paragraph("timeline-body", &event.body)
            )
        })
        .collect();
    section(
        "timeline",
        "",
        &format!("{}<ol>{events}</ol>", heading(&block.title)),
    )
}

fn comparison(block: &ComparisonBlock) -> String {
    let rows: String = block
        .rows
        .iter()
        .map(|row| {
            format!(
                "<tr><th>{}</th><td>{}</td><td>{}</td></tr>",
                escape(row.feature.as_deref().unwrap_or("")),
                escape(row.left.as_deref().unwrap_or("")),
                escape(row.right.as_deref().unwrap_or(""))
            )
        })
        .collect();
    let head = format!(
        "<tr><th></th><th>{}</th><th>{}</th></tr>",
        escape(block.left_label.as_deref().unwrap_or("")),
        escape(block.right_label.as_deref().unwrap_or(""))
    );
    section(
        "comparison",
        "",
        &format!(
            "{}<table>{head}{rows}</table>",
            heading(&block.title)
        ),
    )
}

fn accordion(block: &AccordionBlock) -> String {
    section(
        "accordion",
        background(&block.background_color),
        &format!("{}{}", heading(&block.title), faq_items(&block.items)),
    )
}

fn gallery_grid(block: &GalleryGridBlock) -> String {
    let images: String = block
        .images
        .iter()
        .filter_map(|entry| {
            entry.image.as_ref().map(|src| {
                let caption = match &entry.caption {
                    Some(caption) => format!("<figcaption>{}</figcaption>", escape(caption)),
                    None => String::new(),
                };
                format!(
                    "<figure><img src=\"{}\" alt=\"{}\">{caption}</figure>",
                    escape(src),
                    escape(entry.alt.as_deref().unwrap_or(""))
                )
            })
        })
        .collect();
    let classes = ColumnCount::resolve(block.columns.as_deref()).css_class();
    section(
        "gallery-grid",
        classes,
        &format!("{}{images}", heading(&block.title)),
    )
}

fn contact_map(block: &ContactMapBlock) -> String {
    let mut details = String::new();
    details.push_str(&paragraph("contact-address", &block.address));
    details.push_str(&paragraph("contact-phone", &block.phone));
    details.push_str(&paragraph("contact-email", &block.email));
    let map = match &block.map_embed_url {
        Some(url) => format!("<iframe class=\"contact-map\" src=\"{}\"></iframe>", escape(url)),
        None => String::new(),
    };
    section(
        "contact-map",
        "",
        &format!("{}{details}{map}", heading(&block.title)),
    )
}

fn newsletter(block: &NewsletterBlock) -> String {
    let inner = format!(
        "{}{}<form class=\"newsletter-form\"><input type=\"email\" placeholder=\"{}\">\
         <button type=\"submit\">{}</button></form>",
        heading(&block.title),
        paragraph("newsletter-subtitle", &block.subtitle),
        escape(block.placeholder.as_deref().unwrap_or("Your email")),
        escape(block.button_label.as_deref().unwrap_or("Subscribe"))
    );
    section("newsletter", "", &inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve(value: serde_json::Value) -> ContentBlock {
        ContentBlock::from_value(&value)
    }

    #[test]
    fn hero_renders_title_and_cta() {
        let html = render_block(&resolve(json!({
            "_type": "hero",
            "title": "Power your home",
            "ctaLabel": "Get a quote",
            "ctaLink": "/quote",
        })));
        assert!(html.contains("<h1>Power your home</h1>"));
        assert!(html.contains("href=\"/quote\""));
        assert!(html.contains("bg-white"));
    }

    #[test]
    fn absent_fields_are_omitted_not_errors() {
        let html = render_block(&resolve(json!({ "_type": "cta" })));
        assert!(!html.contains("<h2>"));
        assert!(!html.contains("<a"));
    }

    #[test]
    fn style_enums_resolve_through_theme_defaults() {
        let html = render_block(&resolve(json!({
            "_type": "content",
            "body": "text",
            "backgroundColor": "primary",
            "padding": "not-a-padding",
        })));
        assert!(html.contains("bg-primary"));
        assert!(html.contains("pad-md"));
    }

    #[test]
    fn author_text_is_escaped() {
        let html = render_block(&resolve(json!({
            "_type": "content",
            "title": "<script>alert(1)</script>",
        })));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn unknown_banner_names_the_tag() {
        let html = render_block(&ContentBlock::Unknown {
            type_tag: "carousel3d".into(),
        });
        assert!(html.contains("block-fallback"));
        assert!(html.contains("carousel3d"));
    }

    #[test]
    fn list_blocks_render_each_item() {
        let html = render_block(&resolve(json!({
            "_type": "faq",
            "title": "Questions",
            "items": [
                { "question": "How long?", "answer": "A day or two." },
                { "question": "How much?", "answer": "Depends on the roof." },
            ],
        })));
        assert_eq!(html.matches("<details").count(), 2);
    }

    #[test]
    fn grid_columns_resolve_to_token() {
        let html = render_block(&resolve(json!({
            "_type": "grid",
            "columns": "4",
            "items": [{ "title": "Panels" }],
        })));
        assert!(html.contains("cols-4"));
    }
}
