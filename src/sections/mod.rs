//! # Receipt Sections
//!
//! The nine DANFCE sections, each a pure function of the document and the
//! render settings. The order is fixed by the NFC-e manual:
//!
//! | # | Section | Content |
//! |---|---------|---------|
//! | 1 | [`Header`] | logo, emitter identification and address |
//! | 2 | [`Title`] | document title |
//! | 3 | [`Items`] | item table and totals |
//! | 4 | [`Payments`] | payment methods and change |
//! | 5 | [`Notices`] | homologation / contingency warnings |
//! | 6 | [`ConsumerInfo`] | access-key lookup and consumer |
//! | 7 | [`ProtocolQr`] | number, series, protocol and QR code |
//! | 8 | [`TaxDisclosure`] | approximate taxes (IBPT) |
//! | 9 | [`Footer`] | free text and closing line |
//!
//! Sections never touch a backend; they append [`Op`]s.

mod consumer;
mod fiscal;
mod footer;
mod header;
mod items;
mod payments;

pub use consumer::ConsumerInfo;
pub use fiscal::{Notices, ProtocolQr, TaxDisclosure};
pub use footer::Footer;
pub use header::{Header, Title};
pub use items::Items;
pub use payments::Payments;

use crate::config::RenderConfig;
use crate::document::FiscalDocument;
use crate::ir::Op;

/// One printed section of the receipt.
pub trait Section {
    /// Append this section's directives.
    fn emit(&self, doc: &FiscalDocument, config: &RenderConfig, ops: &mut Vec<Op>);

    /// Render the section on its own.
    fn render(&self, doc: &FiscalDocument, config: &RenderConfig) -> Vec<Op> {
        let mut ops = Vec::new();
        self.emit(doc, config, &mut ops);
        ops
    }
}

/// All sections in print order.
pub fn standard() -> Vec<Box<dyn Section>> {
    vec![
        Box::new(Header),
        Box::new(Title),
        Box::new(Items),
        Box::new(Payments),
        Box::new(Notices),
        Box::new(ConsumerInfo),
        Box::new(ProtocolQr),
        Box::new(TaxDisclosure),
        Box::new(Footer),
    ]
}
