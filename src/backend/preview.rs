//! # Plain-Text Preview
//!
//! A backend that "prints" to a `String`, the way a thermal printer would
//! lay the receipt out in a monospaced grid:
//!
//! - lines longer than the column count wrap onto the next line
//! - justification indents each physical line
//! - QR codes are drawn with Unicode half blocks
//! - logos and cuts become marker lines
//!
//! Emphasis, fonts, spacing and text size have no plain-text equivalent
//! and are accepted silently.

use qrcode::render::unicode;
use qrcode::{EcLevel, QrCode};

use super::{PrinterBackend, QrModel};
use crate::error::{DanfceError, Result};
use crate::ir::{Font, Justification, QrErrorLevel};
use crate::logo::Logo;

/// Text rendering backend.
#[derive(Debug, Clone)]
pub struct TextPreview {
    columns: usize,
    justification: Justification,
    pending: String,
    out: String,
    closed: bool,
}

impl TextPreview {
    /// Create a preview `columns` characters wide.
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            justification: Justification::Left,
            pending: String::new(),
            out: String::new(),
            closed: false,
        }
    }

    /// Everything printed so far.
    pub fn output(&self) -> &str {
        &self.out
    }

    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn flush_line(&mut self) {
        let line = std::mem::take(&mut self.pending);
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            self.out.push('\n');
            return;
        }
        for chunk in chars.chunks(self.columns) {
            let chunk: String = chunk.iter().collect();
            self.push_justified(&chunk);
        }
    }

    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            self.flush_line();
        }
    }

    fn push_justified(&mut self, line: &str) {
        let slack = self.columns.saturating_sub(line.chars().count());
        let indent = match self.justification {
            Justification::Left => 0,
            Justification::Center => slack / 2,
            Justification::Right => slack,
        };
        self.out.push_str(&" ".repeat(indent));
        self.out.push_str(line);
        self.out.push('\n');
    }
}

impl PrinterBackend for TextPreview {
    fn text(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            match ch {
                '\n' => self.flush_line(),
                '\r' => {}
                _ => self.pending.push(ch),
            }
        }
        Ok(())
    }

    fn set_emphasis(&mut self, _on: bool) -> Result<()> {
        Ok(())
    }

    fn set_justification(&mut self, justification: Justification) -> Result<()> {
        self.justification = justification;
        Ok(())
    }

    fn feed(&mut self, lines: u8) -> Result<()> {
        self.flush_pending();
        for _ in 0..lines {
            self.out.push('\n');
        }
        Ok(())
    }

    fn cut(&mut self) -> Result<()> {
        self.flush_pending();
        self.out
            .push_str(&format!("{:-^width$}\n", " corte ", width = self.columns));
        Ok(())
    }

    fn bit_image(&mut self, logo: &Logo) -> Result<()> {
        self.flush_pending();
        self.push_justified(&format!("[logo {}x{}]", logo.width, logo.height));
        Ok(())
    }

    fn qr_code(
        &mut self,
        payload: &str,
        error_level: QrErrorLevel,
        _module_size: u8,
        _model: QrModel,
    ) -> Result<()> {
        let level = match error_level {
            QrErrorLevel::L => EcLevel::L,
            QrErrorLevel::M => EcLevel::M,
            QrErrorLevel::Q => EcLevel::Q,
            QrErrorLevel::H => EcLevel::H,
        };
        let code = QrCode::with_error_correction_level(payload.as_bytes(), level)
            .map_err(|e| DanfceError::Backend(format!("QR code generation failed: {}", e)))?;
        let rendered = code
            .render::<unicode::Dense1x2>()
            .quiet_zone(false)
            .build();

        self.flush_pending();
        for line in rendered.lines() {
            self.push_justified(line);
        }
        Ok(())
    }

    fn set_font(&mut self, _font: Font) -> Result<()> {
        Ok(())
    }

    fn set_line_spacing(&mut self, _dots: u8) -> Result<()> {
        Ok(())
    }

    fn set_text_size(&mut self, _width: u8, _height: u8) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.flush_pending();
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_justification() {
        let mut preview = TextPreview::new(10);
        preview.text("left\n").unwrap();
        preview.set_justification(Justification::Center).unwrap();
        preview.text("mid\n").unwrap();
        preview.set_justification(Justification::Right).unwrap();
        preview.text("end\n").unwrap();
        assert_eq!(preview.output(), "left\n   mid\n       end\n");
    }

    #[test]
    fn test_long_lines_wrap_at_columns() {
        let mut preview = TextPreview::new(4);
        preview.text("abcdefghij\n\n").unwrap();
        assert_eq!(preview.output(), "abcd\nefgh\nij\n\n");
    }

    #[test]
    fn test_feed_and_cut() {
        let mut preview = TextPreview::new(11);
        preview.text("open line").unwrap();
        preview.feed(2).unwrap();
        preview.cut().unwrap();
        preview.close().unwrap();
        assert_eq!(preview.output(), "open line\n\n\n-- corte --\n");
        assert!(preview.is_closed());
    }

    #[test]
    fn test_qr_code_is_drawn() {
        let mut preview = TextPreview::new(48);
        preview.set_justification(Justification::Center).unwrap();
        preview
            .qr_code("https://www.nfce.fazenda.sp.gov.br/qrcode?p=1", QrErrorLevel::L, 6, QrModel::Model2)
            .unwrap();
        let lines: Vec<&str> = preview.output().lines().collect();
        assert!(lines.len() > 5);
        assert!(lines.iter().all(|l| l.chars().count() <= 48));
    }

    #[test]
    fn test_logo_marker() {
        let mut preview = TextPreview::new(20);
        let logo = Logo {
            width: 8,
            height: 2,
            data: vec![0; 2],
        };
        preview.bit_image(&logo).unwrap();
        assert_eq!(preview.output(), "[logo 8x2]\n");
    }
}
