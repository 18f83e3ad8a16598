//! # Text Component
//!
//! One logical line of text, optionally emphasized, wrapped, or followed by
//! a blank line.

use super::Component;
use crate::format::wrap_lines;
use crate::ir::Op;

/// A text line.
///
/// ## Example
///
/// ```
/// use danfce::components::*;
///
/// // Simple line
/// let text = Text::new("Fonte IBPT - Lei Federal 12.741/2012");
///
/// // Emphasized heading wrapped to the paper, blank line after
/// let heading = Text::new("EMITIDA EM AMBIENTE DE HOMOLOGAÇÃO - SEM VALOR FISCAL")
///     .bold()
///     .wrap(48)
///     .spaced();
/// ```
pub struct Text {
    content: String,
    bold: bool,
    spaced: bool,
    wrap: Option<usize>,
}

impl Text {
    /// Create a new text line.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            bold: false,
            spaced: false,
            wrap: None,
        }
    }

    /// Emphasize the text.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Follow the text with a blank line.
    pub fn spaced(mut self) -> Self {
        self.spaced = true;
        self
    }

    /// Word-wrap at `width` columns.
    pub fn wrap(mut self, width: usize) -> Self {
        self.wrap = Some(width);
        self
    }
}

impl Component for Text {
    fn emit(&self, ops: &mut Vec<Op>) {
        let mut text = match self.wrap {
            Some(width) => wrap_lines(&self.content, width).join("\n"),
            None => self.content.clone(),
        };
        text.push('\n');
        if self.spaced {
            text.push('\n');
        }

        if self.bold {
            ops.push(Op::SetEmphasis(true));
        }
        ops.push(Op::Text(text));
        if self.bold {
            ops.push(Op::SetEmphasis(false));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;

    #[test]
    fn test_plain_text() {
        let ir = Text::new("Hello").compile();
        assert_eq!(ir.ops, vec![Op::Text("Hello\n".into())]);
    }

    #[test]
    fn test_bold_spaced() {
        let ir = Text::new("TROCO").bold().spaced().compile();
        assert_eq!(
            ir.ops,
            vec![
                Op::SetEmphasis(true),
                Op::Text("TROCO\n\n".into()),
                Op::SetEmphasis(false),
            ]
        );
    }

    #[test]
    fn test_wrap() {
        let ir = Text::new("NOTA FISCAL INVÁLIDA - SEM PROTOCOLO").wrap(20).compile();
        assert_eq!(ir.lines(), vec!["NOTA FISCAL INVÁLIDA", "- SEM PROTOCOLO"]);
    }

    #[test]
    fn test_wrap_keeps_semicolons() {
        let ir = Text::new("BAR DO ZE; FILIAL 2 LTDA").wrap(48).compile();
        assert_eq!(ir.ops, vec![Op::Text("BAR DO ZE; FILIAL 2 LTDA\n".into())]);
    }
}
