//! Restricted-markdown renderer for chat messages.
//!
//! Converts the dialect the assistant replies in (bold, inline code,
//! ordered/unordered lists, inline `$...$` math) into sanitized display
//! markup. Message text is HTML-escaped; only the math collaborator's
//! output is inserted as trusted markup.
//!
//! Ordering invariant: math spans are extracted before escaping, and the
//! bold/code substitutions run only on already-escaped text. Otherwise
//! literal `<`/`&` inside bold or code spans would be misinterpreted, and
//! the math markup would be corrupted by the inline regexes.
//!
//! The transform is total but not idempotent: it is applied exactly once
//! per raw message, never to already-rendered output.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::math::MathTypesetter;

static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+(.*)$").unwrap());
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s+(.*)$").unwrap());
static MATH_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$([^$\n]+)\$").unwrap());
static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

// Placeholder delimiters for extracted math spans. Private-use characters:
// escaping leaves them alone and the bold/code regexes cannot produce them.
const MATH_OPEN: char = '\u{e000}';
const MATH_CLOSE: char = '\u{e001}';

/// Escapes the characters HTML assigns meaning to, neutralizing any
/// literal markup in message text.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    fn tags(self) -> (&'static str, &'static str) {
        match self {
            Self::Ordered => ("<ol>", "</ol>"),
            Self::Unordered => ("<ul>", "</ul>"),
        }
    }
}

/// Renders chat messages to sanitized display markup.
pub struct ChatMarkdownRenderer<'a> {
    typesetter: &'a dyn MathTypesetter,
}

impl<'a> ChatMarkdownRenderer<'a> {
    /// Creates a renderer delegating math spans to the given typesetter.
    pub fn new(typesetter: &'a dyn MathTypesetter) -> Self {
        Self { typesetter }
    }

    /// Renders one raw message to display markup.
    ///
    /// Single left-to-right pass over lines: consecutive list items of the
    /// same kind accumulate into one list, a blank line or a kind switch
    /// flushes, and every other non-empty line becomes a paragraph.
    pub fn render(&self, text: &str) -> String {
        let mut out = String::new();
        let mut pending: Vec<String> = Vec::new();
        let mut kind: Option<ListKind> = None;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                self.flush_list(&mut out, &mut pending, &mut kind);
                continue;
            }

            if let Some(caps) = ORDERED_ITEM.captures(line) {
                self.push_item(&mut out, &mut pending, &mut kind, ListKind::Ordered, &caps[1]);
                continue;
            }
            if let Some(caps) = UNORDERED_ITEM.captures(line) {
                self.push_item(
                    &mut out,
                    &mut pending,
                    &mut kind,
                    ListKind::Unordered,
                    &caps[1],
                );
                continue;
            }

            self.flush_list(&mut out, &mut pending, &mut kind);
            out.push_str("<p>");
            out.push_str(&self.render_inline(line));
            out.push_str("</p>");
        }

        self.flush_list(&mut out, &mut pending, &mut kind);
        out
    }

    fn push_item(
        &self,
        out: &mut String,
        pending: &mut Vec<String>,
        kind: &mut Option<ListKind>,
        item_kind: ListKind,
        item_text: &str,
    ) {
        if *kind != Some(item_kind) {
            self.flush_list(out, pending, kind);
            *kind = Some(item_kind);
        }
        pending.push(format!("<li>{}</li>", self.render_inline(item_text)));
    }

    fn flush_list(&self, out: &mut String, pending: &mut Vec<String>, kind: &mut Option<ListKind>) {
        if let Some(list_kind) = kind.take() {
            if !pending.is_empty() {
                let (open, close) = list_kind.tags();
                out.push_str(open);
                for item in pending.drain(..) {
                    out.push_str(&item);
                }
                out.push_str(close);
            }
        }
    }

    /// Inline pipeline: math extraction, escaping, bold/code on the
    /// escaped text, then placeholder substitution.
    fn render_inline(&self, text: &str) -> String {
        let mut math_markup: Vec<String> = Vec::new();
        let extracted = MATH_SPAN.replace_all(text, |caps: &Captures| {
            let markup = self.typesetter.render_lenient(&caps[1]);
            let token = format!("{}{}{}", MATH_OPEN, math_markup.len(), MATH_CLOSE);
            math_markup.push(markup);
            token
        });

        let mut line = escape_html(&extracted);
        line = BOLD_SPAN
            .replace_all(&line, "<strong>$1</strong>")
            .into_owned();
        line = CODE_SPAN.replace_all(&line, "<code>$1</code>").into_owned();

        for (index, markup) in math_markup.iter().enumerate() {
            let token = format!("{}{}{}", MATH_OPEN, index, MATH_CLOSE);
            line = line.replace(&token, markup);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::math::InlineMathTypesetter;

    fn render(text: &str) -> String {
        let typesetter = InlineMathTypesetter::new();
        ChatMarkdownRenderer::new(&typesetter).render(text)
    }

    #[test]
    fn test_plain_lines_become_paragraphs() {
        assert_eq!(render("hello"), "<p>hello</p>");
        assert_eq!(render("one\ntwo"), "<p>one</p><p>two</p>");
    }

    #[test]
    fn test_bold_code_and_math_inline() {
        let html = render("**bold** and `code` and $x^2$");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<code>code</code>"));
        assert!(html.contains("<span class=\"math-inline\">x^2</span>"));
        assert!(!html.contains('$'));
    }

    #[test]
    fn test_literal_markup_is_escaped() {
        let html = render("<script>alert(1)</script>");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_markup_inside_bold_and_code_stays_escaped() {
        let html = render("**a<b** and `x & y`");
        assert!(html.contains("<strong>a&lt;b</strong>"));
        assert!(html.contains("<code>x &amp; y</code>"));
    }

    #[test]
    fn test_ordered_list_accumulates() {
        let html = render("1. a\n2. b");
        assert_eq!(html, "<ol><li>a</li><li>b</li></ol>");
    }

    #[test]
    fn test_unordered_list_markers() {
        assert_eq!(render("- a\n* b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_list_kind_switch_flushes() {
        let html = render("1. a\n2. b\n\n- c");
        assert_eq!(html, "<ol><li>a</li><li>b</li></ol><ul><li>c</li></ul>");
    }

    #[test]
    fn test_paragraph_flushes_pending_list() {
        let html = render("- a\nplain");
        assert_eq!(html, "<ul><li>a</li></ul><p>plain</p>");
    }

    #[test]
    fn test_blank_lines_produce_nothing() {
        assert_eq!(render("\n\n   \n"), "");
    }

    #[test]
    fn test_math_markup_is_not_double_escaped() {
        let html = render("see $a<b$ here");
        // The typesetter escaped the expression once; the renderer must
        // not escape the surrounding span tags.
        assert!(html.contains("<span class=\"math-inline\">a&lt;b</span>"));
    }

    #[test]
    fn test_unmatched_dollar_is_plain_text() {
        let html = render("costs $5 total");
        assert!(html.contains("$5"));
    }

    #[test]
    fn test_list_items_render_inline_markup() {
        let html = render("1. **bold** item");
        assert_eq!(html, "<ol><li><strong>bold</strong> item</li></ol>");
    }
}
