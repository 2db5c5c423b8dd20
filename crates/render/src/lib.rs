pub mod blocks;
pub mod escape;
pub mod pipeline;

pub use pipeline::{render_not_found, render_page, RenderedBlock, RenderedPage};
