//! Page generation: markdown files rendered into an HTML template.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::block::markdown_to_html;
use crate::error::PageError;

const TITLE_TOKEN: &str = "{{ Title }}";
const CONTENT_TOKEN: &str = "{{ Content }}";

// A single leading slash; `//host` is protocol-relative and left alone
static ROOT_RELATIVE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(href|src)="/([^/])"#).unwrap());

/// Text of the first `# ` heading line, trimmed.
pub fn extract_title(markdown: &str) -> Result<String, PageError> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_owned())
        .ok_or(PageError::NoTitleFound)
}

/// Rewrite root-relative `href` and `src` attributes to live under `basepath`.
pub fn apply_basepath(html: &str, basepath: &str) -> String {
    if basepath == "/" {
        return html.to_owned();
    }
    ROOT_RELATIVE_URL
        .replace_all(html, |caps: &Captures| {
            format!("{}=\"{}{}", &caps[1], basepath, &caps[2])
        })
        .into_owned()
}

/// Render a markdown document into `template`.
pub fn render_page(markdown: &str, template: &str, basepath: &str) -> Result<String, PageError> {
    let content = markdown_to_html(markdown)?.to_html()?;
    let title = extract_title(markdown)?;

    let html = template
        .replace(TITLE_TOKEN, &title)
        .replace(CONTENT_TOKEN, &content);
    Ok(apply_basepath(&html, basepath))
}

/// Render one markdown file into `dest`, creating parent directories as needed.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    basepath: &str,
) -> Result<(), PageError> {
    tracing::info!(
        from = %from.display(),
        dest = %dest.display(),
        template = %template_path.display(),
        "Generating page"
    );

    let markdown = read(from)?;
    let template = read(template_path)?;

    let html = render_page(&markdown, &template, basepath).map_err(|e| PageError::Page {
        path: from.to_path_buf(),
        source: Box::new(e),
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
    }
    fs::write(dest, html).map_err(|source| io_error(dest, source))
}

/// Render every `.md` file under `content_dir` to the matching `.html` path
/// under `dest_dir`. Returns the number of pages written.
///
/// Stops at the first page that fails.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    basepath: &str,
) -> Result<usize, PageError> {
    let mut entries: Vec<PathBuf> = fs::read_dir(content_dir)
        .map_err(|source| io_error(content_dir, source))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()
        .map_err(|source| io_error(content_dir, source))?;
    // Sorted so builds log and fail in a stable order
    entries.sort();

    let mut count = 0;
    for from in entries {
        let Some(name) = from.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);

        if from.is_dir() {
            count += generate_pages_recursive(&from, template_path, &dest, basepath)?;
        } else if from.extension().is_some_and(|ext| ext == "md") {
            generate_page(&from, template_path, &dest.with_extension("html"), basepath)?;
            count += 1;
        } else {
            tracing::debug!(path = %from.display(), "Skipping non-markdown file");
        }
    }

    Ok(count)
}

fn read(path: &Path) -> Result<String, PageError> {
    fs::read_to_string(path).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> PageError {
    PageError::Io {
        path: path.to_path_buf(),
        source,
    }
}
