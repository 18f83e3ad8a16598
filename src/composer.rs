//! # Receipt Composer
//!
//! Runs the nine sections in their mandated order and frames them with the
//! font/spacing preset and the final feed and cut:
//!
//! ```text
//! SetFont(preset) → Header → SetLineSpacing(preset)
//!   → Title → Items → Payments → Notices → ConsumerInfo
//!   → ProtocolQr → TaxDisclosure → Footer
//!   → Feed(2) → Cut
//! ```
//!
//! The composer only builds a [`Program`]; sending it to a printer is
//! [`Program::play`]'s job.

use tracing::debug;

use crate::config::RenderConfig;
use crate::document::FiscalDocument;
use crate::ir::{Op, Program};
use crate::sections::{self, Section};

/// Lines fed before the cut.
const TRAILING_FEED: u8 = 2;

/// Builds the directive stream for one document.
pub struct ReceiptComposer<'a> {
    config: &'a RenderConfig,
    sections: Vec<Box<dyn Section>>,
}

impl<'a> ReceiptComposer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            sections: sections::standard(),
        }
    }

    /// Render `doc` into a complete program, ending in feed + cut.
    ///
    /// Deterministic: the same document and config always yield the same
    /// program.
    pub fn render(&self, doc: &FiscalDocument) -> Program {
        let layout = self.config.layout;
        let mut ops = vec![Op::SetFont(layout.font())];

        let mut sections = self.sections.iter();
        if let Some(header) = sections.next() {
            header.emit(doc, self.config, &mut ops);
        }
        ops.push(Op::SetLineSpacing(layout.line_spacing()));
        for section in sections {
            section.emit(doc, self.config, &mut ops);
        }

        ops.push(Op::Feed(TRAILING_FEED));
        ops.push(Op::Cut);

        debug!(
            ops = ops.len(),
            items = doc.item_count(),
            columns = self.config.columns,
            second_copy = self.config.second_copy,
            "composed DANFCE"
        );
        Program { ops }
    }
}
