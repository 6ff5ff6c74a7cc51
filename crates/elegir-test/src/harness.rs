//! Test harness for driving widgets with synthetic input.

use elegir_core::{Constraints, Event, Key, MouseButton, Point, Rect, Widget};
use std::any::Any;

use crate::canvas::RecordingCanvas;

/// Drives a single root widget: lays it out, feeds it synthetic events,
/// collects the messages it emits, and paints it into a recording canvas.
pub struct Harness<W: Widget> {
    root: W,
    canvas: RecordingCanvas,
    viewport: Rect,
    messages: Vec<Box<dyn Any + Send>>,
}

impl<W: Widget> Harness<W> {
    /// Create a harness with a default 80x24 viewport and lay the widget out.
    pub fn new(root: W) -> Self {
        let mut harness = Self {
            root,
            canvas: RecordingCanvas::new(),
            viewport: Rect::new(0.0, 0.0, 80.0, 24.0),
            messages: Vec::new(),
        };
        harness.relayout();
        harness
    }

    /// Set the viewport size and lay the widget out again.
    #[must_use]
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self.relayout();
        self
    }

    /// Measure the widget against the viewport and lay it out at the origin.
    pub fn relayout(&mut self) {
        let size = self
            .root
            .measure(Constraints::loose(self.viewport.size()));
        self.root.layout(Rect::from_size(size));
    }

    // === Event simulation ===

    /// Dispatch a raw event, capturing any emitted message.
    pub fn dispatch(&mut self, event: &Event) {
        if let Some(message) = self.root.event(event) {
            self.messages.push(message);
        }
    }

    /// Simulate a full left click (move, press, release) at a position.
    pub fn click_at(&mut self, x: f32, y: f32) {
        let position = Point::new(x, y);
        self.dispatch(&Event::MouseMove { position });
        self.dispatch(&Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.dispatch(&Event::MouseUp {
            position,
            button: MouseButton::Left,
        });
    }

    /// Simulate a key press (down and up).
    pub fn press(&mut self, key: Key) {
        self.dispatch(&Event::KeyDown { key });
        self.dispatch(&Event::KeyUp { key });
    }

    // === Messages ===

    /// Take the first pending message of type `T`, if any.
    pub fn take_message<T: 'static>(&mut self) -> Option<T> {
        let index = self
            .messages
            .iter()
            .position(|m| m.downcast_ref::<T>().is_some())?;
        let boxed = self.messages.remove(index);
        boxed.downcast::<T>().ok().map(|b| *b)
    }

    /// Check whether a message of type `T` is pending.
    #[must_use]
    pub fn has_message<T: 'static>(&self) -> bool {
        self.messages.iter().any(|m| m.downcast_ref::<T>().is_some())
    }

    /// Number of pending messages.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Drop all pending messages.
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    // === Rendering ===

    /// Paint the widget into a fresh recording and return it.
    pub fn render(&mut self) -> &RecordingCanvas {
        self.canvas.clear();
        self.root.paint(&mut self.canvas);
        &self.canvas
    }

    /// Paint and return the text runs in paint order.
    pub fn rendered_texts(&mut self) -> Vec<String> {
        self.render();
        self.canvas.texts().iter().map(|t| (*t).to_string()).collect()
    }

    // === Access ===

    /// The widget under test.
    pub fn widget(&self) -> &W {
        &self.root
    }

    /// The widget under test, mutably.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.root
    }

    // === Assertions ===

    /// Assert that the painted output contains the exact text run.
    ///
    /// # Panics
    ///
    /// Panics if no text run equals `needle`.
    pub fn assert_text(&mut self, needle: &str) -> &mut Self {
        self.render();
        assert!(
            self.canvas.contains_text(needle),
            "expected painted text {needle:?}, got {:?}",
            self.canvas.texts()
        );
        self
    }

    /// Assert that the painted output contains no such text run.
    ///
    /// # Panics
    ///
    /// Panics if a text run equals `needle`.
    pub fn assert_no_text(&mut self, needle: &str) -> &mut Self {
        self.render();
        assert!(
            !self.canvas.contains_text(needle),
            "expected painted text {needle:?} to be absent"
        );
        self
    }
}
