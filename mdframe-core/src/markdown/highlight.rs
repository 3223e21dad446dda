//! Code block rendering with syntect highlighting and a copy button.

use super::html_escape;
use std::sync::OnceLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    THEME_SET.get_or_init(ThemeSet::load_defaults)
}

/// Renders the body of a fenced or indented code block to HTML.
///
/// Implementations must be reusable across documents: nothing from one call
/// may leak into the next.
pub trait CodeBlockRenderer: Send + Sync {
    /// Render `code`, tagged with `lang` when the fence carried an info string
    fn render(&self, code: &str, lang: Option<&str>) -> String;
}

/// Default renderer: inline-styled syntect highlighting inside a
/// `div.code-snippet` with a "Copy code" button.
pub struct SyntectCodeRenderer {
    theme: Option<&'static Theme>,
    copy_icon: String,
}

impl SyntectCodeRenderer {
    /// Create a renderer using one of syntect's bundled themes.
    ///
    /// An unknown theme name disables highlighting; every block is then
    /// rendered as escaped plain text.
    pub fn new(theme_name: &str, copy_icon: impl Into<String>) -> Self {
        let theme = theme_set().themes.get(theme_name);
        if theme.is_none() {
            tracing::warn!("Unknown highlight theme {:?}, highlighting disabled", theme_name);
        }
        Self {
            theme,
            copy_icon: copy_icon.into(),
        }
    }

    fn find_syntax(&self, lang: &str) -> Option<&'static SyntaxReference> {
        let ss = syntax_set();
        ss.find_syntax_by_token(lang)
            .or_else(|| ss.find_syntax_by_extension(lang))
    }

    fn highlight(
        &self,
        code: &str,
        syntax: &SyntaxReference,
        theme: &Theme,
    ) -> Result<String, syntect::Error> {
        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut html = String::with_capacity(code.len() * 2);
        for line in LinesWithEndings::from(code) {
            let regions = highlighter.highlight_line(line, syntax_set())?;
            html.push_str(&styled_line_to_highlighted_html(
                &regions,
                IncludeBackground::No,
            )?);
        }
        Ok(html)
    }
}

impl CodeBlockRenderer for SyntectCodeRenderer {
    fn render(&self, code: &str, lang: Option<&str>) -> String {
        let body = match (lang, self.theme) {
            (Some(lang), Some(theme)) => match self.find_syntax(lang) {
                Some(syntax) => highlighted_or_plain(code, self.highlight(code, syntax, theme)),
                None => html_escape(code),
            },
            _ => html_escape(code),
        };
        code_snippet(&self.copy_icon, &body)
    }
}

/// Use the highlighted body, or the escaped code if highlighting failed
fn highlighted_or_plain(code: &str, highlighted: Result<String, syntect::Error>) -> String {
    highlighted.unwrap_or_else(|err| {
        tracing::debug!("Highlighting failed, rendering plain text: {}", err);
        html_escape(code)
    })
}

/// Wrap rendered code in the snippet container with its copy button
pub fn code_snippet(copy_icon: &str, body: &str) -> String {
    format!(
        concat!(
            "<div class=\"code-snippet\">\n",
            "<button class=\"copy-code-button\" onclick=\"copyCodeToClipboard(this)\">",
            "<img src=\"{}\" alt=\"Copy code\" class=\"button-icon\"> Copy code</button>\n",
            "<pre class=\"hljs\"><code>{}</code></pre>\n",
            "</div>\n"
        ),
        html_escape(copy_icon),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> SyntectCodeRenderer {
        SyntectCodeRenderer::new("InspiredGitHub", "copy.png")
    }

    #[test]
    fn test_known_language_is_highlighted() {
        let html = renderer().render("print(1)\n", Some("python"));
        assert!(html.starts_with("<div class=\"code-snippet\">"));
        assert!(html.contains("Copy code</button>"));
        assert!(html.contains("<pre class=\"hljs\"><code><span style="));
        assert!(html.contains("print"));
    }

    #[test]
    fn test_extension_token_is_recognized() {
        let html = renderer().render("fn main() {}\n", Some("rs"));
        assert!(html.contains("<code><span style="));
    }

    #[test]
    fn test_unknown_language_is_escaped_plain_text() {
        let html = renderer().render("<b>&</b>\n", Some("not-a-language"));
        assert!(html
            .contains("<pre class=\"hljs\"><code>&lt;b&gt;&amp;&lt;/b&gt;\n</code></pre>"));
        assert!(html.contains("Copy code</button>"));
    }

    #[test]
    fn test_missing_language_is_escaped_plain_text() {
        let html = renderer().render("a < b\n", None);
        assert!(html.contains("<code>a &lt; b\n</code>"));
        assert!(!html.contains("<span"));
    }

    #[test]
    fn test_unknown_theme_disables_highlighting() {
        let html =
            SyntectCodeRenderer::new("no-such-theme", "copy.png").render("x = 1\n", Some("python"));
        assert!(html.contains("<code>x = 1\n</code>"));
    }

    #[test]
    fn test_highlight_error_falls_back_to_escaped_code() {
        let failed = Err(syntect::Error::from(std::fmt::Error));
        assert_eq!(highlighted_or_plain("a < b\n", failed), "a &lt; b\n");
        assert_eq!(
            highlighted_or_plain("x", Ok("<span>x</span>".to_string())),
            "<span>x</span>"
        );
    }

    #[test]
    fn test_copy_icon_is_used() {
        let html = code_snippet("icons/copy \"24\".png", "x");
        assert!(html.contains("<img src=\"icons/copy &quot;24&quot;.png\""));
    }
}
