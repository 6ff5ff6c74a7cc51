//! Terminal backend for the elegir selection toolkit.
//!
//! Provides a cell-grid [`CellCanvas`] that rasterizes widget paint
//! commands for crossterm, input translation from terminal events, and the
//! `elegir-demo` binary showing the controlled and uncontrolled select
//! widgets side by side.

mod canvas;
mod error;
mod input;

pub use canvas::{Cell, CellCanvas};
pub use error::TerminalError;
pub use input::translate;
