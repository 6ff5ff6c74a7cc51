//! Recording canvas for asserting on paint output.

use elegir_core::{Canvas, Color, Point, Rect, TextStyle};

/// A single recorded draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle.
    FillRect {
        /// Rectangle filled
        rect: Rect,
        /// Fill color
        color: Color,
    },
    /// A stroked rectangle.
    StrokeRect {
        /// Rectangle stroked
        rect: Rect,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// A text run.
    Text {
        /// Text content
        content: String,
        /// Position of the first glyph
        position: Point,
        /// Text color
        color: Color,
    },
}

/// A [`Canvas`] that records draw commands instead of rasterizing them.
///
/// Tests assert on the recorded commands to observe what a widget painted
/// without a real backend.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create an empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far, in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Discard recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All recorded text runs, in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Check whether any recorded text run equals `needle`.
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| *t == needle)
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            color: style.color,
        });
    }
}
