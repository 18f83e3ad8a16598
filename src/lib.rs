//! # DANFCE - NFC-e Receipt Renderer
//!
//! Turns a Brazilian consumer fiscal document (NFC-e) into the ordered
//! print directives of its DANFCE, the auxiliary receipt handed to the
//! customer. It provides:
//!
//! - **Extraction**: NFC-e XML (bare or inside `nfeProc`) to a typed model
//! - **Layout**: the nine mandated sections inside a fixed column budget
//! - **Formatting**: Brazilian currency, CNPJ/CPF/phone/CEP masks, word wrap
//! - **Playback**: a backend trait plus a plain-text preview backend
//!
//! ## Quick Start
//!
//! ```no_run
//! use danfce::{FiscalDocument, RenderConfig, backend::TextPreview};
//!
//! let doc = FiscalDocument::load("nfce.xml")?;
//! let config = RenderConfig::default().columns(48);
//!
//! let program = danfce::render(&doc, &config)?;
//!
//! let mut preview = TextPreview::new(config.columns);
//! program.play(&mut preview)?;
//! print!("{}", preview.output());
//!
//! # Ok::<(), danfce::DanfceError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`document`] | XML tree and the `FiscalDocument` model |
//! | [`format`] | Padding, currency and document masks |
//! | [`sections`] | The nine receipt sections |
//! | [`composer`] | Section ordering and framing |
//! | [`ir`] | Print directives and playback |
//! | [`backend`] | Printer backend trait and text preview |
//! | [`logo`] | Logo loading and dithering |
//! | [`config`] | Render settings |
//! | [`error`] | Error types |

pub mod backend;
pub mod components;
pub mod composer;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod ir;
pub mod logo;
pub mod sections;
pub mod tables;

// Re-exports for convenience
pub use composer::ReceiptComposer;
pub use config::RenderConfig;
pub use document::FiscalDocument;
pub use error::DanfceError;

use error::Result;
use ir::Program;

/// Validate `config` and compose the receipt for `doc`.
pub fn render(doc: &FiscalDocument, config: &RenderConfig) -> Result<Program> {
    config.validate()?;
    Ok(ReceiptComposer::new(config).render(doc))
}
