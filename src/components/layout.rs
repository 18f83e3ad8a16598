//! # Layout Components
//!
//! Fixed-width rows: a label/value pair and a full-width rule.

use super::Component;
use crate::format::{PadSide, pad};
use crate::ir::Op;

// ============================================================================
// Columns
// ============================================================================

/// A left label and a right-aligned value filling exactly `width` columns.
///
/// The value column is `value_width` wide, or wider if the value needs it;
/// the label gets the rest and is clipped when it does not fit.
///
/// ## Example
///
/// ```
/// use danfce::components::*;
///
/// let ir = Columns::new("TROCO R$", "R$ 5,00").width(32).value_width(12).compile();
/// assert_eq!(ir.lines(), vec!["TROCO R$                 R$ 5,00"]);
/// ```
pub struct Columns {
    left: String,
    right: String,
    width: usize,
    value_width: usize,
    bold: bool,
    spaced: bool,
}

impl Columns {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            width: 48,
            value_width: 16,
            bold: false,
            spaced: false,
        }
    }

    /// Total row width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Minimum width of the value column.
    pub fn value_width(mut self, value_width: usize) -> Self {
        self.value_width = value_width;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Follow the row with a blank line.
    pub fn spaced(mut self) -> Self {
        self.spaced = true;
        self
    }

    /// The padded row, without line terminator.
    pub fn row(&self) -> String {
        let right_width = self
            .value_width
            .max(self.right.chars().count())
            .min(self.width);
        let left_width = self.width - right_width;

        pad(&self.left, left_width, ' ', PadSide::Right) + &pad(&self.right, right_width, ' ', PadSide::Left)
    }
}

impl Component for Columns {
    fn emit(&self, ops: &mut Vec<Op>) {
        let mut text = self.row();
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

// ============================================================================
// Divider
// ============================================================================

/// A rule of `-` across the whole line.
pub struct Divider {
    width: usize,
}

impl Divider {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Component for Divider {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::Text(format!("{}\n", "-".repeat(self.width))));
    }
}
