//! Integration tests for markdown processing

use super::*;

struct TaggingRenderer;

impl CodeBlockRenderer for TaggingRenderer {
    fn render(&self, code: &str, lang: Option<&str>) -> String {
        format!("<pre data-lang=\"{}\">{}</pre>", lang.unwrap_or("none"), code.len())
    }
}

fn processor_with(toc: TocConfig) -> MarkdownProcessor {
    MarkdownProcessor::new(toc, Box::new(TaggingRenderer))
}

#[test]
fn test_code_renderer_is_injected() {
    let processor = processor_with(TocConfig::default());
    let md = "```python extra words\nprint(1)\n```\n\n    indented\n\n```\nbare\n```\n";
    let out = processor.convert(md);

    assert!(out.html.contains("<pre data-lang=\"python\">9</pre>"));
    assert!(out.html.contains("<pre data-lang=\"none\">9</pre>"));
    assert!(out.html.contains("<pre data-lang=\"none\">5</pre>"));
    assert!(!out.html.contains("<code"));
}

#[test]
fn test_heading_anchor_uses_symbol() {
    let toc = TocConfig {
        anchor_symbol: "¶".to_string(),
        ..TocConfig::default()
    };
    let out = processor_with(toc).convert("## Getting Started");
    assert!(out.html.contains(
        "<h2 id=\"getting-started\"><a class=\"heading-anchor\" href=\"#getting-started\">¶</a>Getting Started</h2>"
    ));
}

#[test]
fn test_empty_anchor_symbol() {
    let out = processor_with(TocConfig::default()).convert("# Title");
    assert!(out
        .html
        .contains("<h1 id=\"title\"><a class=\"heading-anchor\" href=\"#title\"></a>Title</h1>"));
}

#[test]
fn test_toc_marker_is_replaced() {
    let md = "[TOC]\n\n# One\n\n## Two\n\n# Three\n";
    let out = processor_with(TocConfig::default()).convert(md);

    assert!(!out.html.contains("[TOC]"));
    assert!(out.html.starts_with("<ul class=\"toc\"><li><a href=\"#one\">One</a>"));
    assert!(out.html.contains("<li><a href=\"#two\">Two</a></li>"));
    assert_eq!(out.headings.len(), 3);
}

#[test]
fn test_toc_class_is_configurable() {
    let toc = TocConfig {
        class_name: "contents".to_string(),
        ..TocConfig::default()
    };
    let out = processor_with(toc).convert("@[toc]\n\n# A\n");
    assert!(out.html.contains("<ul class=\"contents\">"));
}

#[test]
fn test_no_marker_no_toc() {
    let out = processor_with(TocConfig::default()).convert("# A\n\n## B\n");
    assert!(!out.html.contains("class=\"toc\""));
}

#[test]
fn test_marker_inside_code_block_is_untouched() {
    let md = "# A\n\n```\n[TOC]\n```\n";
    let out = MarkdownProcessor::default().convert(md);
    assert!(out.html.contains("[TOC]"));
    assert!(!out.html.contains("class=\"toc\""));
}

#[test]
fn test_processor_is_reusable() {
    let processor = MarkdownProcessor::default();
    let first = processor.convert("# Same\n\n# Same\n");
    let second = processor.convert("# Same\n");

    assert_eq!(first.headings[1].id, "same-1");
    // Slug state must not carry over between documents
    assert_eq!(second.headings[0].id, "same");
}

#[test]
fn test_inline_code_renders_as_code() {
    let out = MarkdownProcessor::default().convert("Run `cargo` now.");
    assert!(out.html.contains("<code>cargo</code>"));
}
