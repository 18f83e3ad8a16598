//! # Directive Stream (IR)
//!
//! This module provides the contract between layout and hardware. Section
//! renderers append [`Op`]s; the composer collects them into a [`Program`];
//! a [`PrinterBackend`](crate::backend::PrinterBackend) replays the program.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌────────────────┐
//! │  Sections   │ ──► │   Program   │ ──► │ PrinterBackend │
//! │   (pure)    │     │  (Vec<Op>)  │     │  (text, ESC/…) │
//! └─────────────┘     └─────────────┘     └────────────────┘
//! ```
//!
//! ## Benefits of IR
//!
//! 1. **Inspectable**: Debug and visualize what will be printed
//! 2. **Testable**: Unit test layout without a printer
//! 3. **Serializable**: Dump a receipt as JSON
//!
//! ## Example
//!
//! ```
//! use danfce::backend::TextPreview;
//! use danfce::ir::{Justification, Op, Program};
//!
//! let mut program = Program::new();
//! program.push(Op::SetJustification(Justification::Center));
//! program.push(Op::SetEmphasis(true));
//! program.push(Op::Text("HELLO\n".into()));
//! program.push(Op::Cut);
//!
//! let mut preview = TextPreview::new(11);
//! program.play(&mut preview)?;
//! assert!(preview.output().starts_with("   HELLO\n"));
//! # Ok::<(), danfce::DanfceError>(())
//! ```

mod ops;
mod play;

// Re-export the ops types (play adds a method to Program via impl)
pub use ops::*;
