//! The content composition pipeline.
//!
//! Takes a page's ordered block array as stored, resolves each block to its
//! typed variant, and renders every block in order. Rendering is a pure
//! function of the page: no I/O, no cross-block context. An unrecognized
//! block type becomes a visible fallback; it never aborts the page.

use brightroof_core::block::ContentBlock;
use brightroof_core::page::Page;

use crate::blocks::render_block;
use crate::escape::escape;

/// One rendered block. The key is derived from the block's position and is
/// stable across renders; it carries no business meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    pub key: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub title: String,
    pub blocks: Vec<RenderedBlock>,
}

impl RenderedPage {
    /// Concatenate the rendered blocks into the page shell. Block order is
    /// the stored order, untouched.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<!doctype html><html><head><title>{}</title></head><body><main>",
            escape(&self.title)
        ));
        for block in &self.blocks {
            out.push_str(&block.html);
        }
        out.push_str("</main></body></html>");
        out
    }
}

/// Render a page's ordered block sequence.
///
/// An empty block list renders a placeholder referencing the page title,
/// never an empty page.
pub fn render_page(page: &Page) -> RenderedPage {
    if page.content.is_empty() {
        return RenderedPage {
            title: page.title.clone(),
            blocks: vec![RenderedBlock {
                key: "block-empty".to_string(),
                html: format!(
                    "<section class=\"page-empty\"><h1>{}</h1>\
                     <p>This page has no content yet.</p></section>",
                    escape(&page.title)
                ),
            }],
        };
    }

    let blocks = page
        .content
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let block = ContentBlock::from_value(raw);
            if let ContentBlock::Unknown { type_tag } = &block {
                tracing::warn!(tag = %type_tag, index, page = %page.slug.current, "rendering fallback for unknown block type");
            }
            RenderedBlock {
                key: format!("block-{index}"),
                html: render_block(&block),
            }
        })
        .collect();

    RenderedPage {
        title: page.title.clone(),
        blocks,
    }
}

/// The not-found page body, served with a 404 when a slug has no published
/// match.
pub fn render_not_found(slug: &str) -> String {
    format!(
        "<!doctype html><html><head><title>Page not found</title></head><body>\
         <main><section class=\"page-not-found\"><h1>Page not found</h1>\
         <p>No published page at &quot;{}&quot;.</p></section></main></body></html>",
        escape(slug)
    )
}
