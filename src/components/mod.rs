//! # Line Components
//!
//! Small building blocks that the receipt sections are written with.
//!
//! ## Design Philosophy
//!
//! A section describes *what* goes on a line; the component turns that into
//! directives and keeps the line inside the column budget:
//!
//! ```
//! use danfce::components::*;
//! use danfce::ir::Op;
//!
//! let mut ops = Vec::new();
//! Text::new("CONSUMIDOR NÃO IDENTIFICADO").bold().spaced().emit(&mut ops);
//! Columns::new("VALOR A PAGAR R$", "12,50").width(32).value_width(12).emit(&mut ops);
//! Divider::new(32).emit(&mut ops);
//!
//! assert_eq!(ops[0], Op::SetEmphasis(true));
//! assert_eq!(ops[1], Op::Text("CONSUMIDOR NÃO IDENTIFICADO\n\n".into()));
//! ```
//!
//! ## Component Trait
//!
//! All components implement the `Component` trait, which appends ops.

mod layout;
mod text;

pub use layout::*;
pub use text::*;

use crate::ir::{Op, Program};

/// Trait for line components.
pub trait Component {
    /// Emit ops for this component into the ops vector.
    fn emit(&self, ops: &mut Vec<Op>);
}

/// Extension trait for compiling a single component.
pub trait ComponentExt: Component {
    /// Compile this component to a standalone program.
    fn compile(&self) -> Program {
        let mut ops = Vec::new();
        self.emit(&mut ops);
        Program { ops }
    }
}

// Blanket implementation for all components
impl<T: Component> ComponentExt for T {}
