//! Section 9: the emitter's free text and the closing line.

use super::Section;
use crate::components::{Component, Divider, Text};
use crate::config::RenderConfig;
use crate::document::FiscalDocument;
use crate::format::word_wrap;
use crate::ir::{Justification, Op};

/// `infCpl` free text, a rule, and the configured footer.
pub struct Footer;

impl Section for Footer {
    fn emit(&self, doc: &FiscalDocument, config: &RenderConfig, ops: &mut Vec<Op>) {
        let free_text = doc.additional_info.free_text.trim();
        if !free_text.is_empty() {
            ops.push(Op::SetJustification(Justification::Center));
            Text::new(word_wrap(free_text, config.columns).join("\n"))
                .spaced()
                .emit(ops);
        }

        Divider::new(config.columns).emit(ops);

        if !config.footer.is_empty() {
            ops.push(Op::SetJustification(Justification::Center));
            Text::new(&config.footer).wrap(config.columns).emit(ops);
        }
    }
}
