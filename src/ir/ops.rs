//! # Print Directives
//!
//! This module defines the directive stream produced by the receipt composer.
//! A [`Program`] is an ordered list of [`Op`]s that any printer backend can
//! replay; layout decisions are finished by the time the program exists.
//!
//! ## Design Philosophy
//!
//! ```text
//! FiscalDocument → Sections → Program (inspectable) → PrinterBackend
//! ```
//!
//! Each op is a single atomic printer instruction. Style changes are
//! individual ops, so a section can be tested by looking at its ops alone.

use serde::Serialize;

use crate::logo::Logo;

/// Text justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    #[default]
    Left,
    Center,
    Right,
}

/// Printer fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Font {
    /// Font A: 12×24 dots, 48 columns on 80mm paper
    #[default]
    A,
    /// Font B: 9×17 dots, 64 columns on 80mm paper
    B,
    /// Font C: smallest face, where the printer has one
    C,
}

/// QR error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum QrErrorLevel {
    /// ~7% recovery
    L,
    /// ~15% recovery
    #[default]
    M,
    /// ~25% recovery
    Q,
    /// ~30% recovery
    H,
}

/// Print directives - the instruction set a backend must execute in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", content = "args", rename_all = "snake_case")]
pub enum Op {
    // ========== Content ==========
    /// Text, newlines included.
    Text(String),

    /// Bitmap logo.
    Image(Logo),

    /// QR code.
    QrCode {
        payload: String,
        error_level: QrErrorLevel,
        module_size: u8,
    },

    // ========== Style Changes ==========
    /// Enable/disable emphasis (bold).
    SetEmphasis(bool),

    /// Set justification for the following lines.
    SetJustification(Justification),

    /// Select font.
    SetFont(Font),

    /// Line spacing in printer dots.
    SetLineSpacing(u8),

    /// Character magnification, 1 = normal.
    SetTextSize { width: u8, height: u8 },

    // ========== Paper Control ==========
    /// Feed `n` lines.
    Feed(u8),

    /// Cut paper.
    Cut,
}

/// A composed receipt: the directive stream in print order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one directive.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        self.ops.iter()
    }

    /// Every printed text line, in order, without line terminators.
    ///
    /// Blank lines are kept, which makes this handy for layout assertions.
    pub fn lines(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(text) => Some(text.strip_suffix('\n').unwrap_or(text).split('\n')),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Program {
            ops: Vec::from_iter(iter),
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut program = Program::new();
        assert!(program.is_empty());
        program.push(Op::SetFont(Font::B));
        program.push(Op::Feed(2));
        program.push(Op::Cut);
        assert_eq!(program.len(), 3);
        assert_eq!(
            program.iter().collect::<Vec<_>>(),
            vec![&Op::SetFont(Font::B), &Op::Feed(2), &Op::Cut]
        );
    }

    #[test]
    fn test_lines_split_text_ops() {
        let program: Program = vec![
            Op::Text("first\n\n".into()),
            Op::SetEmphasis(true),
            Op::Text("second\nthird\n".into()),
        ]
        .into_iter()
        .collect();
        assert_eq!(program.lines(), vec!["first", "", "second", "third"]);
    }

    #[test]
    fn test_op_serializes_tagged() {
        let json = serde_json::to_string(&Op::QrCode {
            payload: "https://example.com".into(),
            error_level: QrErrorLevel::L,
            module_size: 6,
        })
        .unwrap();
        assert!(json.contains(r#""op":"qr_code""#));
        assert!(json.contains("example.com"));

        let json = serde_json::to_string(&Op::Cut).unwrap();
        assert_eq!(json, r#"{"op":"cut"}"#);
    }

    #[test]
    fn test_justification_default() {
        assert_eq!(Justification::default(), Justification::Left);
    }
}
