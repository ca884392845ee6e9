mod assets;
mod block;
mod config;
mod error;
mod inline;
mod node;
mod page;
mod span;

pub use assets::{clean_dir, copy_dir_recursive};
pub use block::{BlockType, block_to_node, classify, markdown_to_html, split_into_blocks};
pub use config::{Config, PathsConfig, SiteConfig};
pub use error::{AssetError, Error, PageError, ParseError, RenderError};
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_spans_delimiter, split_spans_image,
    split_spans_link, text_to_spans,
};
pub use node::HtmlNode;
pub use page::{apply_basepath, extract_title, generate_page, generate_pages_recursive, render_page};
pub use span::{SpanKind, TextSpan, span_to_node};

/// Convert markdown to an HTML string.
pub fn markdown_to_html_string(markdown: &str) -> Result<String, Error> {
    Ok(markdown_to_html(markdown)?.to_html()?)
}

/// Counts reported by [`build_site`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub assets_copied: usize,
    pub pages_generated: usize,
}

/// Build the whole site described by `config`.
///
/// The output directory is deleted first, then static assets are copied and
/// every markdown page is rendered. A missing static directory is skipped.
pub fn build_site(config: &Config) -> Result<BuildSummary, Error> {
    let paths = &config.paths;

    clean_dir(&paths.output_dir)?;

    let assets_copied = if paths.static_dir.is_dir() {
        tracing::info!(
            from = %paths.static_dir.display(),
            to = %paths.output_dir.display(),
            "Copying static files"
        );
        copy_dir_recursive(&paths.static_dir, &paths.output_dir)?
    } else {
        tracing::warn!(path = %paths.static_dir.display(), "Static directory not found, skipping");
        0
    };

    tracing::info!(content = %paths.content_dir.display(), "Generating pages");
    let pages_generated = generate_pages_recursive(
        &paths.content_dir,
        &paths.template,
        &paths.output_dir,
        &config.site.basepath,
    )?;

    tracing::info!(assets_copied, pages_generated, "Site generation complete");
    Ok(BuildSummary {
        assets_copied,
        pages_generated,
    })
}
