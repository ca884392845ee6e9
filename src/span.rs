use crate::node::HtmlNode;

/// Discriminant of a [`TextSpan`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// Inline text span produced by the inline parser.
///
/// Only `Link` and `Image` carry a URL. An empty URL is still a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl TextSpan {
    pub fn kind(&self) -> SpanKind {
        match self {
            TextSpan::Plain(_) => SpanKind::Plain,
            TextSpan::Bold(_) => SpanKind::Bold,
            TextSpan::Italic(_) => SpanKind::Italic,
            TextSpan::Code(_) => SpanKind::Code,
            TextSpan::Link { .. } => SpanKind::Link,
            TextSpan::Image { .. } => SpanKind::Image,
        }
    }

    /// Visible text: anchor text for links, alt text for images.
    pub fn text(&self) -> &str {
        match self {
            TextSpan::Plain(text)
            | TextSpan::Bold(text)
            | TextSpan::Italic(text)
            | TextSpan::Code(text)
            | TextSpan::Link { text, .. } => text,
            TextSpan::Image { alt, .. } => alt,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            TextSpan::Link { url, .. } | TextSpan::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Render the span back to the markdown it was parsed from.
    pub fn to_markdown(&self) -> String {
        match self {
            TextSpan::Plain(text) => text.clone(),
            TextSpan::Bold(text) => format!("**{text}**"),
            TextSpan::Italic(text) => format!("_{text}_"),
            TextSpan::Code(text) => format!("`{text}`"),
            TextSpan::Link { text, url } => format!("[{text}]({url})"),
            TextSpan::Image { alt, url } => format!("![{alt}]({url})"),
        }
    }
}

/// Lower a span to the HTML node that renders it.
pub fn span_to_node(span: &TextSpan) -> HtmlNode {
    match span {
        TextSpan::Plain(text) => HtmlNode::text(text),
        TextSpan::Bold(text) => HtmlNode::leaf("b", text),
        TextSpan::Italic(text) => HtmlNode::leaf("i", text),
        TextSpan::Code(text) => HtmlNode::leaf("code", text),
        TextSpan::Link { text, url } => {
            HtmlNode::leaf("a", text).with_attribute("href", url)
        }
        TextSpan::Image { alt, url } => HtmlNode::leaf("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", alt),
    }
}
