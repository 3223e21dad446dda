//! Ordered text rewrites applied to the assembled page.
//!
//! Each rule is a plain `&str -> String` function so it can be tested on its
//! own. Order matters: later rules see the output of earlier ones.

use regex::{Captures, Regex};
use std::sync::OnceLock;

static HEADING_MARKER: OnceLock<Regex> = OnceLock::new();
static INLINE_CODE: OnceLock<Regex> = OnceLock::new();

fn heading_marker_regex() -> &'static Regex {
    // Opening heading tag, optionally followed by the injected anchor link
    HEADING_MARKER.get_or_init(|| {
        Regex::new(r#"(<h[1-6][^>]*>(?:<a class="heading-anchor"[^>]*>[^<]*</a>)?)# "#).unwrap()
    })
}

fn inline_code_regex() -> &'static Regex {
    INLINE_CODE.get_or_init(|| Regex::new(r"(<pre[^>]*>)?<code>([^<]+)</code>").unwrap())
}

/// A named rewrite step
pub struct RewriteRule {
    name: &'static str,
    rewrite: Box<dyn Fn(&str) -> String + Send + Sync>,
}

impl RewriteRule {
    pub fn new(
        name: &'static str,
        rewrite: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            rewrite: Box::new(rewrite),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, html: &str) -> String {
        (self.rewrite)(html)
    }
}

impl std::fmt::Debug for RewriteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteRule").field("name", &self.name).finish()
    }
}

/// Rules applied in sequence
#[derive(Debug)]
pub struct RewritePipeline {
    rules: Vec<RewriteRule>,
}

impl RewritePipeline {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// The standard page rewrites, with same-document anchors repointed at
    /// `anchor_target`
    pub fn standard(anchor_target: &str) -> Self {
        let anchor_target = anchor_target.to_string();
        Self::new(vec![
            RewriteRule::new("strip_heading_marker", strip_heading_marker),
            RewriteRule::new("inline_code_highlight", inline_code_highlight),
            RewriteRule::new("external_link_target", external_link_target),
            RewriteRule::new("internal_anchor_rewrite", move |html| {
                internal_anchor_rewrite(html, &anchor_target)
            }),
        ])
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(RewriteRule::name).collect()
    }

    pub fn apply(&self, html: &str) -> String {
        self.rules.iter().fold(html.to_string(), |acc, rule| {
            let next = rule.apply(&acc);
            if next != acc {
                tracing::trace!("Rewrite rule {} changed the page", rule.name());
            }
            next
        })
    }
}

/// Drop a literal `# ` left at the start of a heading's content
pub fn strip_heading_marker(html: &str) -> String {
    heading_marker_regex().replace_all(html, "$1").into_owned()
}

/// Turn inline `<code>` spans into highlighted `span.yellow-quote` elements.
///
/// Code that directly opens a `<pre>` block is a code block, not inline code,
/// and is left alone.
pub fn inline_code_highlight(html: &str) -> String {
    inline_code_regex()
        .replace_all(html, |caps: &Captures| {
            if caps.get(1).is_some() {
                caps[0].to_string()
            } else {
                format!("<span class='yellow-quote'>{}</span>", &caps[2])
            }
        })
        .into_owned()
}

/// Open absolute http(s) links in a new browsing context
pub fn external_link_target(html: &str) -> String {
    html.replace("<a href=\"http", "<a target=\"_blank\" href=\"http")
}

/// Point same-document anchors at `target` plus the original fragment
pub fn internal_anchor_rewrite(html: &str, target: &str) -> String {
    html.replace("<a href=\"#", &format!("<a href=\"{}#", target))
}
