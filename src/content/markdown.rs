//! Markdown rendering with syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::error::{ContentError, Result};

/// URL schemes that are never emitted in links or images
const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    highlight: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options(true)
    }

    /// Create with highlighting switched on or off
    pub fn with_options(highlight: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            highlight,
        }
    }

    /// Render markdown to HTML.
    ///
    /// Raw HTML in the source is dropped and script-capable URLs are
    /// replaced, so the output can be inserted into a page as-is.
    pub fn render(&self, markdown: &str) -> Result<String> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<Option<String>> = None;
        let mut code_block_content = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => code_language(&info),
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some(lang);
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let lang = code_block.take().flatten();
                    let block = self.code_block_html(&code_block_content, lang.as_deref())?;
                    events.push(Event::Html(CowStr::from(block)));
                }
                Event::Text(text) if code_block.is_some() => {
                    code_block_content.push_str(&text);
                }
                Event::Html(raw) | Event::InlineHtml(raw) => {
                    tracing::debug!("Dropping raw HTML: {}", raw.trim());
                }
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => {
                    events.push(Event::Start(Tag::Link {
                        link_type,
                        dest_url: safe_url(dest_url),
                        title,
                        id,
                    }));
                }
                Event::Start(Tag::Image {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => {
                    events.push(Event::Start(Tag::Image {
                        link_type,
                        dest_url: safe_url(dest_url),
                        title,
                        id,
                    }));
                }
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Render a code block, highlighting it when a language is given
    fn code_block_html(&self, code: &str, lang: Option<&str>) -> Result<String> {
        let Some(lang) = lang else {
            return Ok(format!("<pre><code>{}</code></pre>\n", html_escape(code)));
        };

        let class = html_escape(lang);
        if !self.highlight {
            return Ok(format!(
                r#"<pre><code class="language-{}">{}</code></pre>
"#,
                class,
                html_escape(code)
            ));
        }

        let highlighted = self.highlight_code(code, lang)?;
        Ok(format!(
            r#"<pre><code class="language-{}">{}</code></pre>
"#,
            class, highlighted
        ))
    }

    /// Highlight code with class-based spans
    fn highlight_code(&self, code: &str, lang: &str) -> Result<String> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, ClassStyle::Spaced);
        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|e| ContentError::Rendering(e.to_string()))?;
        }

        Ok(generator.finalize())
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// First word of a fence info string, e.g. "rust" from "rust,ignore"
fn code_language(info: &str) -> Option<String> {
    let lang = info
        .split(|c: char| c.is_whitespace() || c == ',' || c == '{')
        .next()
        .unwrap_or("")
        .trim();
    if lang.is_empty() {
        None
    } else {
        Some(lang.to_string())
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    if BLOCKED_SCHEMES.iter().any(|s| normalized.starts_with(s)) {
        tracing::warn!("Replacing unsafe link target: {}", url);
        CowStr::Borrowed("#")
    } else {
        url
    }
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
