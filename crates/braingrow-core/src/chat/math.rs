//! Math typesetting collaborator.

use crate::error::Result;

/// Renders a math expression to trusted display markup.
///
/// The renderer inserts the returned markup into its output without
/// escaping it, so implementations must produce markup that is safe to
/// display verbatim.
pub trait MathTypesetter: Send + Sync {
    /// Renders an expression, failing on input the typesetter cannot
    /// handle.
    fn render(&self, expression: &str) -> Result<String>;

    /// Non-throwing mode: malformed expressions degrade to empty markup
    /// instead of failing. The chat renderer always goes through this.
    fn render_lenient(&self, expression: &str) -> String {
        self.render(expression).unwrap_or_default()
    }
}

/// Conservative fallback typesetter.
///
/// Escapes the expression and wraps it in an inline math span, leaving
/// actual typesetting to the display layer's stylesheet. Total: `render`
/// never fails.
#[derive(Debug, Clone, Default)]
pub struct InlineMathTypesetter;

impl InlineMathTypesetter {
    /// Creates the fallback typesetter.
    pub fn new() -> Self {
        Self
    }
}

impl MathTypesetter for InlineMathTypesetter {
    fn render(&self, expression: &str) -> Result<String> {
        Ok(format!(
            "<span class=\"math-inline\">{}</span>",
            super::markdown::escape_html(expression)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_typesetter_escapes_expression() {
        let typesetter = InlineMathTypesetter::new();
        let markup = typesetter.render_lenient("a < b");
        assert_eq!(markup, "<span class=\"math-inline\">a &lt; b</span>");
    }
}
