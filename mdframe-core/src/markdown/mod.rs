//! Markdown processing pipeline with custom extensions.

pub mod highlight;
pub mod toc;

#[cfg(test)]
mod test_integration;

use crate::config::{Config, TocConfig};
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

pub use highlight::{CodeBlockRenderer, SyntectCodeRenderer};
pub use toc::TocItem;

/// Output of a single Markdown conversion
#[derive(Debug, Clone)]
pub struct RenderedMarkdown {
    pub html: String,
    pub headings: Vec<TocItem>,
}

impl RenderedMarkdown {
    /// Text of the first top-level heading, if any
    pub fn title(&self) -> Option<&str> {
        self.headings
            .iter()
            .find(|h| h.level == 1)
            .map(|h| h.title.as_str())
    }
}

/// Markdown processor with code block and TOC/anchor extensions.
///
/// Holds no per-document state, so one instance converts any number of
/// documents.
pub struct MarkdownProcessor {
    options: Options,
    toc: TocConfig,
    code_renderer: Box<dyn CodeBlockRenderer>,
}

impl MarkdownProcessor {
    pub fn new(toc: TocConfig, code_renderer: Box<dyn CodeBlockRenderer>) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

        Self {
            options,
            toc,
            code_renderer,
        }
    }

    /// Build a processor with the syntect renderer described by `config`
    pub fn from_config(config: &Config) -> Self {
        let renderer =
            SyntectCodeRenderer::new(&config.highlight.theme, config.page.copy_icon.clone());
        Self::new(config.toc.clone(), Box::new(renderer))
    }

    /// Convert markdown to an HTML fragment
    pub fn convert(&self, markdown: &str) -> RenderedMarkdown {
        let events: Vec<Event> = Parser::new_ext(markdown, self.options)
            .map(escape_raw_html)
            .collect();

        let (events, headings) = toc::assign_heading_ids(events);
        let events = toc::add_heading_anchors(events, &self.toc);
        let events = toc::insert_toc(events, &headings, &self.toc);
        let events = self.render_code_blocks(events);

        let mut html_output = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut html_output, events.into_iter());

        RenderedMarkdown {
            html: html_output,
            headings,
        }
    }

    /// Replace each code block with the renderer's HTML
    fn render_code_blocks<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut result = Vec::with_capacity(events.len());
        let mut block: Option<(Option<String>, String)> = None;

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .map(str::to_string),
                        CodeBlockKind::Indented => None,
                    };
                    block = Some((lang, String::new()));
                }
                Event::Text(text) if block.is_some() => {
                    if let Some((_, code)) = block.as_mut() {
                        code.push_str(&text);
                    }
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = block.take() {
                        let html = self.code_renderer.render(&code, lang.as_deref());
                        result.push(Event::Html(CowStr::from(html)));
                    }
                }
                other => result.push(other),
            }
        }

        result
    }
}

/// Turn HTML written in the source into literal text.
///
/// Raw HTML blocks become paragraphs. Markup added later by the anchor, TOC
/// and code block passes is not affected.
fn escape_raw_html(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        Event::Start(Tag::HtmlBlock) => Event::Start(Tag::Paragraph),
        Event::End(TagEnd::HtmlBlock) => Event::End(TagEnd::Paragraph),
        other => other,
    }
}

impl Default for MarkdownProcessor {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub(crate) fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
