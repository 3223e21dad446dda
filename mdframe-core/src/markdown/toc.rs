//! Heading ids, heading anchor links and the table of contents.

use super::html_escape;
use crate::config::TocConfig;
use crate::slug::HeadingSlugger;
use pulldown_cmark::{CowStr, Event, Tag, TagEnd};

/// One heading as it appears in the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocItem {
    pub level: u32,
    pub title: String,
    pub id: String,
}

const TOC_MARKERS: &[&str] = &["[toc]", "[[toc]]", "@[toc]"];

/// Give every heading a unique id and collect the TOC entries.
///
/// Headings that already carry an explicit `{#id}` keep it.
pub fn assign_heading_ids<'a>(events: Vec<Event<'a>>) -> (Vec<Event<'a>>, Vec<TocItem>) {
    let mut slugger = HeadingSlugger::new();
    for event in &events {
        if let Event::Start(Tag::Heading { id: Some(id), .. }) = event {
            slugger.reserve(id);
        }
    }

    // Titles are gathered first so the id can go on the opening tag
    let mut titles = Vec::new();
    let mut current: Option<String> = None;
    for event in &events {
        match event {
            Event::Start(Tag::Heading { .. }) => current = Some(String::new()),
            Event::Text(text) | Event::Code(text) => {
                if let Some(title) = current.as_mut() {
                    title.push_str(text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(title) = current.take() {
                    titles.push(title);
                }
            }
            _ => {}
        }
    }

    let mut titles = titles.into_iter();
    let mut toc = Vec::new();
    let mut result = Vec::with_capacity(events.len());

    for event in events {
        match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => {
                let title = titles.next().unwrap_or_default();
                let id = match id {
                    Some(id) => id,
                    None => CowStr::from(slugger.slug(&title)),
                };
                toc.push(TocItem {
                    level: level as u32,
                    title: display_title(&title),
                    id: id.to_string(),
                });
                result.push(Event::Start(Tag::Heading {
                    level,
                    id: Some(id),
                    classes,
                    attrs,
                }));
            }
            other => result.push(other),
        }
    }

    (result, toc)
}

/// Heading text as shown in the TOC and page title.
///
/// A literal `# ` left at the start of the heading is dropped, as it is in
/// the rendered page.
fn display_title(text: &str) -> String {
    let text = text.trim();
    text.strip_prefix("# ").unwrap_or(text).trim_start().to_string()
}

/// Insert an anchor link pointing at each heading's own id, right after the
/// opening tag.
pub fn add_heading_anchors<'a>(events: Vec<Event<'a>>, config: &TocConfig) -> Vec<Event<'a>> {
    if !config.anchor_link {
        return events;
    }

    let mut result = Vec::with_capacity(events.len());
    for event in events {
        let anchor = match &event {
            Event::Start(Tag::Heading { id: Some(id), .. }) => Some(format!(
                "<a class=\"heading-anchor\" href=\"#{}\">{}</a>",
                html_escape(id),
                html_escape(&config.anchor_symbol)
            )),
            _ => None,
        };
        result.push(event);
        if let Some(anchor) = anchor {
            result.push(Event::InlineHtml(CowStr::from(anchor)));
        }
    }
    result
}

/// Replace every paragraph that consists only of a TOC marker with the
/// rendered table of contents.
pub fn insert_toc<'a>(
    events: Vec<Event<'a>>,
    headings: &[TocItem],
    config: &TocConfig,
) -> Vec<Event<'a>> {
    let mut result = Vec::with_capacity(events.len());
    let mut iter = events.into_iter();

    while let Some(event) = iter.next() {
        if !matches!(event, Event::Start(Tag::Paragraph)) {
            result.push(event);
            continue;
        }

        let mut paragraph = vec![event];
        for inner in iter.by_ref() {
            let done = matches!(inner, Event::End(TagEnd::Paragraph));
            paragraph.push(inner);
            if done {
                break;
            }
        }

        if is_toc_marker(&paragraph) {
            result.push(Event::Html(CowStr::from(render_toc(headings, config))));
        } else {
            result.extend(paragraph);
        }
    }

    result
}

fn is_toc_marker(paragraph: &[Event<'_>]) -> bool {
    let inner = match paragraph {
        [Event::Start(Tag::Paragraph), inner @ .., Event::End(TagEnd::Paragraph)] => inner,
        _ => return false,
    };

    let mut text = String::new();
    for event in inner {
        match event {
            Event::Text(t) => text.push_str(t),
            _ => return false,
        }
    }

    let text = text.trim().to_lowercase();
    TOC_MARKERS.contains(&text.as_str())
}

/// Render headings as nested lists; the outermost list carries the
/// configured class.
pub fn render_toc(headings: &[TocItem], config: &TocConfig) -> String {
    let mut html = String::new();
    if headings.is_empty() {
        return html;
    }

    // Levels of the currently open lists
    let mut open: Vec<u32> = Vec::new();

    for h in headings {
        match open.last().copied() {
            None => {
                html.push_str(&format!("<ul class=\"{}\">", html_escape(&config.class_name)));
                open.push(h.level);
            }
            Some(top) if h.level > top => {
                html.push_str("<ul>");
                open.push(h.level);
            }
            Some(_) => {
                html.push_str("</li>");
                while open.len() > 1 && open.last().is_some_and(|&top| h.level < top) {
                    html.push_str("</ul></li>");
                    open.pop();
                }
            }
        }
        html.push_str(&format!(
            "<li><a href=\"#{}\">{}</a>",
            html_escape(&h.id),
            html_escape(&h.title)
        ));
    }

    html.push_str("</li>");
    while open.pop().is_some() {
        html.push_str("</ul>");
        if !open.is_empty() {
            html.push_str("</li>");
        }
    }
    html.push('\n');
    html
}
