//! # Printer Backends
//!
//! A backend executes a directive stream on something that prints: a real
//! ESC/POS device, a network spooler, or the bundled [`TextPreview`].
//!
//! The layout never talks to a backend directly. [`Program::play`] walks
//! the ops in order and calls one method per op, finishing with
//! [`PrinterBackend::close`].
//!
//! [`Program::play`]: crate::ir::Program::play

mod preview;

pub use preview::TextPreview;

use crate::error::Result;
use crate::ir::{Font, Justification, QrErrorLevel};
use crate::logo::Logo;

/// QR code symbol model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrModel {
    Model1,
    #[default]
    Model2,
}

/// Operations a printer must support to print a DANFCE.
///
/// Implementations must apply calls in the order received. Retries and
/// timeouts are the implementation's business.
pub trait PrinterBackend {
    /// Print text; `\n` ends a line.
    fn text(&mut self, text: &str) -> Result<()>;

    fn set_emphasis(&mut self, on: bool) -> Result<()>;

    fn set_justification(&mut self, justification: Justification) -> Result<()>;

    /// Feed `lines` blank lines.
    fn feed(&mut self, lines: u8) -> Result<()>;

    fn cut(&mut self) -> Result<()>;

    /// Transfer and print a bitmap.
    fn bit_image(&mut self, logo: &Logo) -> Result<()>;

    fn qr_code(
        &mut self,
        payload: &str,
        error_level: QrErrorLevel,
        module_size: u8,
        model: QrModel,
    ) -> Result<()>;

    fn set_font(&mut self, font: Font) -> Result<()>;

    fn set_line_spacing(&mut self, dots: u8) -> Result<()>;

    fn set_text_size(&mut self, width: u8, height: u8) -> Result<()>;

    /// Flush and release the device.
    fn close(&mut self) -> Result<()>;
}
