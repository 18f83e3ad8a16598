//! # Playback
//!
//! Feeds a [`Program`] to a [`PrinterBackend`], one call per op.

use tracing::{debug, warn};

use super::ops::{Op, Program};
use crate::backend::{PrinterBackend, QrModel};
use crate::error::Result;

impl Program {
    /// Execute every op on `backend` in order, then close it.
    ///
    /// A failed logo transfer is logged and skipped; the rest of the
    /// receipt still prints. Any other backend error stops playback.
    pub fn play(&self, backend: &mut dyn PrinterBackend) -> Result<()> {
        debug!(ops = self.len(), "playing program");

        for op in &self.ops {
            match op {
                // ===== Content =====
                Op::Text(text) => backend.text(text)?,
                Op::Image(logo) => {
                    if let Err(e) = backend.bit_image(logo) {
                        warn!(error = %e, "logo transfer failed, continuing without logo");
                    }
                }
                Op::QrCode {
                    payload,
                    error_level,
                    module_size,
                } => backend.qr_code(payload, *error_level, *module_size, QrModel::Model2)?,

                // ===== Style Changes =====
                Op::SetEmphasis(on) => backend.set_emphasis(*on)?,
                Op::SetJustification(justification) => backend.set_justification(*justification)?,
                Op::SetFont(font) => backend.set_font(*font)?,
                Op::SetLineSpacing(dots) => backend.set_line_spacing(*dots)?,
                Op::SetTextSize { width, height } => backend.set_text_size(*width, *height)?,

                // ===== Paper Control =====
                Op::Feed(lines) => backend.feed(*lines)?,
                Op::Cut => backend.cut()?,
            }
        }

        backend.close()
    }
}
