use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::span::TextSpan;

static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

// No lookbehind in `regex`; `extract_markdown_links` rejects matches preceded by `!`.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Parse a run of inline markdown into spans.
///
/// Images are extracted first, then links, then `**bold**`, `_italic_` and
/// `` `code` `` runs. Each stage only splits the plain text left over by the
/// previous ones, so an image's brackets are never read as a link and a URL
/// is never split on `_`.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, ParseError> {
    let spans = vec![TextSpan::Plain(text.to_owned())];
    let spans = split_spans_image(spans);
    let spans = split_spans_link(spans);
    let spans = split_spans_delimiter(spans, "**", TextSpan::Bold)?;
    let spans = split_spans_delimiter(spans, "_", TextSpan::Italic)?;
    split_spans_delimiter(spans, "`", TextSpan::Code)
}

/// `(alt, url)` pairs for every `![alt](url)` in `text`, in order.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    IMAGE_PATTERN
        .captures_iter(text)
        .map(|caps| (caps[1].to_owned(), caps[2].to_owned()))
        .collect()
}

/// `(text, url)` pairs for every `[text](url)` in `text` not preceded by `!`.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    let mut links = Vec::new();
    let mut pos = 0;
    while let Some(caps) = LINK_PATTERN.captures_at(text, pos) {
        let Some(found) = caps.get(0) else { break };
        if text[..found.start()].ends_with('!') {
            // Resume right after the `[`, as a lookbehind scan would.
            pos = found.start() + 1;
            continue;
        }
        links.push((caps[1].to_owned(), caps[2].to_owned()));
        pos = found.end();
    }
    links
}

/// Split plain spans around markdown images.
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_matching(
        spans,
        extract_markdown_images,
        |alt, url| format!("![{alt}]({url})"),
        |alt, url| TextSpan::Image { alt, url },
    )
}

/// Split plain spans around markdown links.
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_matching(
        spans,
        extract_markdown_links,
        |text, url| format!("[{text}]({url})"),
        |text, url| TextSpan::Link { text, url },
    )
}

fn split_spans_matching(
    spans: Vec<TextSpan>,
    extract: fn(&str) -> Vec<(String, String)>,
    literal: fn(&str, &str) -> String,
    make: fn(String, String) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let matches = extract(&text);
        if matches.is_empty() {
            if !text.is_empty() {
                out.push(TextSpan::Plain(text));
            }
            continue;
        }

        let mut rest = text.as_str();
        for (label, url) in matches {
            let needle = literal(&label, &url);
            let Some((before, after)) = rest.split_once(needle.as_str()) else {
                // Keep the remainder as plain text and stop splitting this span
                break;
            };
            if !before.is_empty() {
                out.push(TextSpan::Plain(before.to_owned()));
            }
            out.push(make(label, url));
            rest = after;
        }

        if !rest.is_empty() {
            out.push(TextSpan::Plain(rest.to_owned()));
        }
    }

    out
}

/// Split plain spans on `delimiter`, turning every odd segment into `make(segment)`.
///
/// Fails if a span contains an odd number of delimiters. Empty segments are
/// dropped and non-plain spans pass through untouched.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    make: fn(String) -> TextSpan,
) -> Result<Vec<TextSpan>, ParseError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let sections: Vec<&str> = text.split(delimiter).collect();
        if sections.len() % 2 == 0 {
            return Err(ParseError::UnbalancedDelimiter {
                delimiter,
                text: text.clone(),
            });
        }

        for (i, section) in sections.into_iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::Plain(section.to_owned()));
            } else {
                out.push(make(section.to_owned()));
            }
        }
    }

    Ok(out)
}
