use crate::error::RenderError;

/// Elements that never have content and render self-closing.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img"];

/// An HTML element tree built from parsed markdown.
///
/// Leaves hold literal text and an optional tag; a leaf without a tag renders
/// its text verbatim. Parents hold children and must have a tag. Literal text
/// is emitted as-is, without HTML escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Vec<(String, String)>,
    },
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attributes: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// Tagless leaf that renders as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Vec::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Vec::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute. Attributes render in insertion order.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.push((name.into(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// Children of a parent node; empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    /// Serialize the tree to HTML markup.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => {
                let value = value.as_deref().ok_or(RenderError::MissingValue)?;
                let Some(tag) = tag else {
                    out.push_str(value);
                    return Ok(());
                };
                open_tag(tag, attributes, out);
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    out.push_str(" />");
                    return Ok(());
                }
                out.push('>');
                out.push_str(value);
                close_tag(tag, out);
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                let tag = tag.as_deref().ok_or(RenderError::MissingTag)?;
                open_tag(tag, attributes, out);
                out.push('>');
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn open_tag(tag: &str, attributes: &[(String, String)], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
