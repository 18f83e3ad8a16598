//! # Section 3: Items and Totals
//!
//! Each item takes two fixed-width lines:
//!
//! ```text
//! 001  000042 PAO FRANCES
//!                2,00 UN  x       5,00       10,00
//! ```
//!
//! Line A is the sequence number, the zero-padded product code and the
//! description clipped to what is left of the line. Line B right-aligns
//! quantity, unit, unit price and total. A field widens when its value
//! does not fit, and the total drops to a line of its own once the row
//! would overflow; amounts are never clipped. An optional `Obs:` note and
//! the freight/discount breakdown follow when present. Every row is exactly
//! `columns` wide.

use rust_decimal::Decimal;

use super::Section;
use crate::components::{Columns, Component, Text};
use crate::config::RenderConfig;
use crate::document::{FiscalDocument, Item};
use crate::format::{PadSide, currency, pad, word_wrap};
use crate::ir::{Justification, Op};

const SEQ_WIDTH: usize = 3;
const CODE_WIDTH: usize = 6;
/// Sequence, two spaces, code, one space.
const LINE_A_FIXED: usize = SEQ_WIDTH + 2 + CODE_WIDTH + 1;
const UNIT_WIDTH: usize = 3;
const NOTE_PREFIX: &str = "   Obs: ";

/// Item table followed by the emphasized totals block.
pub struct Items;

/// Minimum widths of the numeric fields of line B.
#[derive(Debug, Clone, Copy)]
struct AmountColumns {
    quantity: usize,
    unit_price: usize,
    total: usize,
    columns: usize,
}

/// Right-align `value` in at least `width` characters, never clipping it.
fn field(value: &str, width: usize) -> String {
    pad(value, width.max(value.chars().count()), ' ', PadSide::Left)
}

impl AmountColumns {
    fn for_width(columns: usize) -> Self {
        let (quantity, unit_price, total) = if columns >= 48 { (8, 10, 12) } else { (7, 8, 10) };
        Self {
            quantity,
            unit_price,
            total,
            columns,
        }
    }

    /// Line B, right-aligned to the paper.
    ///
    /// `times` is the three-character gap between unit and unit price. When
    /// widened fields no longer fit, the total moves to a second line.
    fn rows(&self, quantity: &str, unit: &str, times: &str, unit_price: &str, total: &str) -> Vec<String> {
        let head = format!(
            "{} {}{}{}",
            field(quantity, self.quantity),
            pad(unit, UNIT_WIDTH, ' ', PadSide::Right),
            times,
            field(unit_price, self.unit_price),
        );
        let total = field(total, self.total);

        let used = head.chars().count() + total.chars().count();
        if used <= self.columns {
            return vec![format!("{}{}{}", " ".repeat(self.columns - used), head, total)];
        }
        vec![
            field(&head, self.columns),
            field(total.trim_start(), self.columns),
        ]
    }
}

fn line_a(item: &Item, columns: usize) -> String {
    format!(
        "{}  {} {}",
        pad(&item.seq.to_string(), SEQ_WIDTH, '0', PadSide::Left),
        pad(&item.code, CODE_WIDTH, '0', PadSide::Left),
        pad(&item.description, columns.saturating_sub(LINE_A_FIXED), ' ', PadSide::Right),
    )
}

impl Items {
    fn column_header(&self, columns: usize, amounts: &AmountColumns, ops: &mut Vec<Op>) {
        let first = format!(
            "{}  {} {}",
            pad("#", SEQ_WIDTH, ' ', PadSide::Right),
            pad("CÓD", CODE_WIDTH, ' ', PadSide::Right),
            pad("DESCRIÇÃO", columns.saturating_sub(LINE_A_FIXED), ' ', PadSide::Right),
        );

        Text::new(first).bold().spaced().emit(ops);
        for line in amounts.rows("QTD", "UN", "   ", "VL UNIT", "VL TOTAL") {
            Text::new(line).bold().spaced().emit(ops);
        }
    }

    fn item(&self, item: &Item, config: &RenderConfig, amounts: &AmountColumns, ops: &mut Vec<Op>) {
        let columns = config.columns;

        Text::new(line_a(item, columns)).spaced().emit(ops);
        let amounts = amounts.rows(
            &currency(item.quantity, 2),
            &item.unit,
            " x ",
            &currency(item.unit_price, 2),
            &currency(item.total_price, 2),
        );
        for line in amounts {
            Text::new(line).spaced().emit(ops);
        }

        self.note(&item.note, columns, ops);

        if item.has_adjustments() {
            let row = |label: &str, value| {
                Columns::new(label, currency(value, 2))
                    .width(columns)
                    .value_width(config.value_width())
                    .spaced()
            };
            if item.freight > Decimal::ZERO {
                row("+ Frete", item.freight).emit(ops);
            }
            if item.discount > Decimal::ZERO {
                row("- Desconto", item.discount).emit(ops);
            }
            row("= Valor Líquido", item.net_value()).emit(ops);
        }
    }

    fn note(&self, note: &str, columns: usize, ops: &mut Vec<Op>) {
        let note = note.replace(['\r', '\n'], " ");
        let indent = NOTE_PREFIX.chars().count();
        let wrapped = word_wrap(&note, columns.saturating_sub(indent));

        for (i, line) in wrapped.iter().filter(|l| !l.is_empty()).enumerate() {
            let prefix = if i == 0 { NOTE_PREFIX.to_string() } else { " ".repeat(indent) };
            Text::new(pad(&(prefix + line), columns, ' ', PadSide::Right))
                .spaced()
                .emit(ops);
        }
    }

    fn totals(&self, doc: &FiscalDocument, config: &RenderConfig, ops: &mut Vec<Op>) {
        let totals = &doc.totals;
        let row = |label: &str, value: String| {
            Columns::new(label, value)
                .width(config.columns)
                .value_width(config.value_width())
                .spaced()
        };

        ops.push(Op::SetEmphasis(true));
        let count = pad(&doc.item_count().to_string(), 3, ' ', PadSide::Left);
        row("QTD. TOTAL DE ITENS", count).emit(ops);
        row("VALOR TOTAL R$", format!("+ {}", currency(totals.product_total, 2))).emit(ops);
        if totals.freight > Decimal::ZERO {
            row("Frete R$", format!("+ {}", currency(totals.freight, 2))).emit(ops);
        }
        if totals.discount > Decimal::ZERO {
            row("Desconto R$", format!("- {}", currency(totals.discount, 2))).emit(ops);
        }
        row("VALOR A PAGAR R$", currency(totals.grand_total, 2)).emit(ops);
        ops.push(Op::SetEmphasis(false));
        ops.push(Op::SetTextSize { width: 1, height: 1 });
    }
}

impl Section for Items {
    fn emit(&self, doc: &FiscalDocument, config: &RenderConfig, ops: &mut Vec<Op>) {
        let amounts = AmountColumns::for_width(config.columns);

        ops.push(Op::SetJustification(Justification::Left));
        self.column_header(config.columns, &amounts, ops);
        for item in &doc.items {
            self.item(item, config, &amounts, ops);
        }
        self.totals(doc, config, ops);
    }
}
