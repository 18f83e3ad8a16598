//! Section 4: payment methods and change.

use rust_decimal::Decimal;

use super::Section;
use crate::components::{Columns, Component, Divider};
use crate::config::RenderConfig;
use crate::document::{FiscalDocument, Payment};
use crate::format::currency;
use crate::ir::{Justification, Op};
use crate::tables::{card_brand, payment_method};

/// Rule, two-column header, one row per payment, and the change line.
pub struct Payments;

/// Method label, with the card brand appended when known.
fn label(payment: &Payment) -> String {
    let mut label = payment_method(&payment.method_code).to_string();
    let brand = payment.card_brand.as_deref().map(card_brand).unwrap_or_default();
    if !brand.is_empty() {
        label.push(' ');
        label.push_str(brand);
    }
    label
}

impl Section for Payments {
    fn emit(&self, doc: &FiscalDocument, config: &RenderConfig, ops: &mut Vec<Op>) {
        let row = |left: String, right: String| {
            Columns::new(left, right)
                .width(config.columns)
                .value_width(config.value_width())
                .spaced()
        };

        ops.push(Op::SetJustification(Justification::Center));
        Divider::new(config.columns).emit(ops);
        ops.push(Op::SetJustification(Justification::Left));

        row("FORMA DE PAGAMENTO".into(), "VALOR PAGO".into()).bold().emit(ops);

        for payment in &doc.payments {
            row(label(payment), format!("R$ {}", currency(payment.amount, 2))).emit(ops);
        }

        if doc.change > Decimal::ZERO {
            row("TROCO R$".into(), format!("R$ {}", currency(doc.change, 2)))
                .bold()
                .emit(ops);
        }
    }
}
