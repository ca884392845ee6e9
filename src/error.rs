//! Error types for parsing, rendering and publishing.

use std::path::PathBuf;

/// Error returned while turning markdown text into spans or nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid markdown, formatted section not closed: `{delimiter}` in {text:?}")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        text: String,
    },
}

/// Error returned when an [`HtmlNode`](crate::HtmlNode) violates its shape invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("parent node has no tag")]
    MissingTag,

    #[error("leaf node has no value")]
    MissingValue,
}

/// Error returned while generating a page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no level-1 heading found in markdown")]
    NoTitleFound,

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{}: {source}", path.display())]
    Page {
        path: PathBuf,
        #[source]
        source: Box<PageError>,
    },
}

/// Error returned while copying static assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error for a site build.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Page(#[from] PageError),

    #[error("{0}")]
    Asset(#[from] AssetError),
}
