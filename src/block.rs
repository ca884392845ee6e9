use crate::error::ParseError;
use crate::inline::text_to_spans;
use crate::node::HtmlNode;
use crate::span::span_to_node;

const FENCE: &str = "```";

/// Structural kind of a markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    /// Heading level, 1 through 6.
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into blocks separated by one or more empty lines.
///
/// Whitespace-only lines do not separate blocks, so indented blank lines
/// inside a code fence stay in the fence. Each block is trimmed; blocks that
/// are empty after trimming are dropped.
pub fn split_into_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in markdown.lines() {
        if line.is_empty() {
            flush_block(&mut current, &mut blocks);
        } else {
            current.push(line);
        }
    }
    flush_block(&mut current, &mut blocks);

    blocks
}

fn flush_block(lines: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if lines.is_empty() {
        return;
    }
    let joined = lines.join("\n");
    lines.clear();
    let block = joined.trim();
    if !block.is_empty() {
        blocks.push(block.to_owned());
    }
}

/// Classify a block. The first matching rule wins:
/// heading, code fence, quote, unordered list, ordered list, paragraph.
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }

    if block.len() >= FENCE.len() * 2 && block.starts_with(FENCE) && block.ends_with(FENCE) {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }

    // Markers may be mixed within one list
    if lines
        .iter()
        .all(|line| line.starts_with("* ") || line.starts_with("- "))
    {
        return BlockType::UnorderedList;
    }

    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) || !block[hashes..].starts_with(' ') {
        return None;
    }
    u8::try_from(hashes).ok()
}

/// Build the HTML subtree for one block of the given type.
pub fn block_to_node(block: &str, block_type: BlockType) -> Result<HtmlNode, ParseError> {
    match block_type {
        BlockType::Paragraph => paragraph_to_node(block),
        BlockType::Heading(level) => heading_to_node(block, level),
        BlockType::Code => Ok(code_to_node(block)),
        BlockType::Quote => quote_to_node(block),
        BlockType::UnorderedList => list_to_node(block, "ul", |line| {
            line.get(2..).unwrap_or_default()
        }),
        BlockType::OrderedList => list_to_node(block, "ol", |line| {
            line.split_once(". ").map_or(line, |(_, item)| item)
        }),
    }
}

/// Convert a markdown document into a `<div>` holding one node per block.
pub fn markdown_to_html(markdown: &str) -> Result<HtmlNode, ParseError> {
    let mut children = Vec::new();
    for block in split_into_blocks(markdown) {
        let block_type = classify(&block);
        tracing::debug!(?block_type, len = block.len(), "Classified block");
        children.push(block_to_node(&block, block_type)?);
    }
    Ok(HtmlNode::parent("div", children))
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(text_to_spans(text)?.iter().map(span_to_node).collect())
}

fn paragraph_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let content = block.split('\n').collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_to_children(&content)?))
}

fn heading_to_node(block: &str, level: u8) -> Result<HtmlNode, ParseError> {
    let text = block.trim_start_matches('#').trim_start();
    Ok(HtmlNode::parent(format!("h{level}"), text_to_children(text)?))
}

fn code_to_node(block: &str) -> HtmlNode {
    // Fences are stripped verbatim, not per line; content is never inline-parsed
    let inner = block
        .get(FENCE.len()..block.len().saturating_sub(FENCE.len()))
        .unwrap_or_default();
    let inner = inner.strip_prefix('\n').unwrap_or(inner);
    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", inner)])
}

fn quote_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let content = block
        .split('\n')
        .map(|line| line.trim_start_matches(['>', ' ']).trim())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(HtmlNode::parent("blockquote", text_to_children(&content)?))
}

fn list_to_node(
    block: &str,
    tag: &str,
    item_text: fn(&str) -> &str,
) -> Result<HtmlNode, ParseError> {
    let items = block
        .split('\n')
        .map(|line| Ok(HtmlNode::parent("li", text_to_children(item_text(line))?)))
        .collect::<Result<Vec<_>, ParseError>>()?;
    Ok(HtmlNode::parent(tag, items))
}
