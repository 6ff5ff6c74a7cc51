//! Button widget for user interactions.

use elegir_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TextStyle, TypeId,
    Widget,
};
use std::any::Any;

/// Message emitted when the button is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonClicked;

/// Button widget with a label and click handling.
pub struct Button {
    /// Button label
    label: String,
    /// Background color (normal state)
    background: Color,
    /// Background color (hover state)
    background_hover: Color,
    /// Background color (pressed state)
    background_pressed: Color,
    /// Text color
    text_color: Color,
    /// Horizontal padding in cells
    padding: f32,
    /// Whether the button is disabled
    disabled: bool,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible name (overrides label)
    accessible_name_value: Option<String>,
    /// Current hover state
    hovered: bool,
    /// Current pressed state
    pressed: bool,
    /// Cached bounds
    bounds: Rect,
}

impl Button {
    /// Create a new button with a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            background: Color::from_hex("#4f46e5").unwrap_or(Color::BLACK),
            background_hover: Color::from_hex("#6366f1").unwrap_or(Color::BLACK),
            background_pressed: Color::from_hex("#4338ca").unwrap_or(Color::BLACK),
            text_color: Color::WHITE,
            padding: 1.0,
            disabled: false,
            test_id_value: None,
            accessible_name_value: None,
            hovered: false,
            pressed: false,
            bounds: Rect::default(),
        }
    }

    /// Set background color.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set text color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// The button label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    fn current_background(&self) -> Color {
        if self.disabled {
            let gray = (self.background.r + self.background.g + self.background.b) / 3.0;
            Color::rgb(gray, gray, gray)
        } else if self.pressed {
            self.background_pressed
        } else if self.hovered {
            self.background_hover
        } else {
            self.background
        }
    }
}

impl Widget for Button {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = self.label.chars().count() as f32 + self.padding * 2.0;
        constraints.constrain(Size::new(width, 1.0))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.current_background());

        let label_width = self.label.chars().count() as f32;
        let text_pos = Point::new(
            self.bounds.x + ((self.bounds.width - label_width) / 2.0).max(0.0),
            self.bounds.y + (self.bounds.height - 1.0) / 2.0,
        );
        canvas.draw_text(
            &self.label,
            text_pos,
            &TextStyle {
                color: self.text_color,
                ..Default::default()
            },
        );
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }

        match event {
            Event::MouseMove { position } => {
                self.hovered = self.bounds.contains_point(position);
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.bounds.contains_point(position) {
                    self.pressed = true;
                }
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let was_pressed = self.pressed;
                self.pressed = false;
                if was_pressed && self.bounds.contains_point(position) {
                    return Some(Box::new(ButtonClicked));
                }
            }
            Event::KeyDown {
                key: Key::Enter | Key::Space,
            } => {
                return Some(Box::new(ButtonClicked));
            }
            _ => {}
        }

        None
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref().or(Some(&self.label))
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Button
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
