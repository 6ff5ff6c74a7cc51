//! Testing harness for elegir widgets.
//!
//! [`Harness`] drives a widget with synthetic clicks and key presses;
//! [`RecordingCanvas`] captures what it paints so tests can assert on the
//! output without a terminal.

mod canvas;
mod harness;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use harness::Harness;
