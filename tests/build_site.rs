use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use sitegen::{BuildSummary, Config, Error, PageError, PathsConfig, SiteConfig, build_site};

const TEMPLATE: &str = "<html><head><title>{{ Title }}</title>\
<link href=\"/index.css\" rel=\"stylesheet\"></head>\
<body>{{ Content }}</body></html>";

fn config_for(root: &Path, basepath: &str) -> Config {
    Config {
        paths: PathsConfig {
            static_dir: root.join("static"),
            content_dir: root.join("content"),
            output_dir: root.join("docs"),
            template: root.join("template.html"),
        },
        site: SiteConfig {
            basepath: basepath.to_string(),
        },
    }
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn create_site(root: &Path) {
    write(&root.join("template.html"), TEMPLATE);
    write(&root.join("static/index.css"), "body { margin: 0; }");
    write(&root.join("static/images/tolkien.png"), "png");
    write(
        &root.join("content/index.md"),
        "# Tolkien Fan Club\n\n\
         ![JRR Tolkien sitting](/images/tolkien.png)\n\n\
         Here's the deal, **I like Tolkien**.\n\n\
         > \"I am in fact a Hobbit in all but size.\"\n>\n> -- J.R.R. Tolkien\n\n\
         ## Reasons\n\n\
         1. The _world-building_\n2. The `lore`\n\n\
         * [Blog](/blog)\n- Contact\n\n\
         ```\nfunc main() {\n    **not bold**\n}\n```",
    );
    write(
        &root.join("content/blog/glorfindel/index.md"),
        "# Why Glorfindel is More Impressive than Legolas\n\nHe fought a **Balrog**.",
    );
}

#[test]
fn builds_full_site() {
    let dir = tempfile::tempdir().unwrap();
    create_site(dir.path());
    // Stale output from a previous build is removed
    write(&dir.path().join("docs/stale.html"), "old");

    let summary = build_site(&config_for(dir.path(), "/")).unwrap();

    assert_eq!(
        summary,
        BuildSummary {
            assets_copied: 2,
            pages_generated: 2,
        }
    );
    let docs = dir.path().join("docs");
    assert!(!docs.join("stale.html").exists());
    assert!(docs.join("images/tolkien.png").is_file());
    assert!(docs.join("blog/glorfindel/index.html").is_file());

    let index = fs::read_to_string(docs.join("index.html")).unwrap();
    let expected_body = "<div><h1>Tolkien Fan Club</h1>\
        <p><img src=\"/images/tolkien.png\" alt=\"JRR Tolkien sitting\" /></p>\
        <p>Here's the deal, <b>I like Tolkien</b>.</p>\
        <blockquote>\"I am in fact a Hobbit in all but size.\"  -- J.R.R. Tolkien</blockquote>\
        <h2>Reasons</h2>\
        <ol><li>The <i>world-building</i></li><li>The <code>lore</code></li></ol>\
        <ul><li><a href=\"/blog\">Blog</a></li><li>Contact</li></ul>\
        <pre><code>func main() {\n    **not bold**\n}\n</code></pre></div>";
    assert_eq!(
        index,
        format!(
            "<html><head><title>Tolkien Fan Club</title>\
             <link href=\"/index.css\" rel=\"stylesheet\"></head>\
             <body>{expected_body}</body></html>"
        )
    );
}

#[test]
fn basepath_prefixes_root_relative_urls() {
    let dir = tempfile::tempdir().unwrap();
    create_site(dir.path());

    build_site(&config_for(dir.path(), "/fanclub/")).unwrap();

    let index = fs::read_to_string(dir.path().join("docs/index.html")).unwrap();
    assert!(index.contains("<link href=\"/fanclub/index.css\""));
    assert!(index.contains("<img src=\"/fanclub/images/tolkien.png\""));
    assert!(index.contains("<a href=\"/fanclub/blog\">Blog</a>"));
}

#[test]
fn missing_static_dir_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    create_site(dir.path());
    fs::remove_dir_all(dir.path().join("static")).unwrap();

    let summary = build_site(&config_for(dir.path(), "/")).unwrap();
    assert_eq!(summary.assets_copied, 0);
    assert_eq!(summary.pages_generated, 2);
}

#[test]
fn page_without_title_fails_build() {
    let dir = tempfile::tempdir().unwrap();
    create_site(dir.path());
    write(&dir.path().join("content/untitled.md"), "Just text.");

    let err = build_site(&config_for(dir.path(), "/")).unwrap_err();
    match err {
        Error::Page(PageError::Page { path, source }) => {
            assert!(path.ends_with("untitled.md"));
            assert!(matches!(*source, PageError::NoTitleFound));
        }
        other => panic!("expected page error, got {other:?}"),
    }
}

#[test]
fn unbalanced_markdown_fails_build() {
    let dir = tempfile::tempdir().unwrap();
    create_site(dir.path());
    write(&dir.path().join("content/broken.md"), "# Broken\n\nsnake_case");

    let err = build_site(&config_for(dir.path(), "/")).unwrap_err();
    assert!(err.to_string().contains("broken.md"));
}

#[test]
fn markdown_string_conversion() {
    assert_eq!(
        sitegen::markdown_to_html_string("* a\n* b").unwrap(),
        "<div><ul><li>a</li><li>b</li></ul></div>"
    );
    assert!(matches!(
        sitegen::markdown_to_html_string("a `b"),
        Err(Error::Parse(_))
    ));
}
