//! Dual-mode select/dropdown widget.
//!
//! A `Select` operates in exactly one of two modes, fixed at construction:
//!
//! - **Uncontrolled**: the widget owns the selected value. Activating an
//!   option stores the value internally and closes the list.
//! - **Controlled**: the owner owns the value. Activating an option invokes
//!   the owner's change handler; the displayed value only changes when the
//!   owner applies it back via [`Select::set_value`].
//!
//! Open/closed visibility is internal state in both modes.

use elegir_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TextStyle, TypeId,
    Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use thiserror::Error;

/// Handler invoked by a controlled select with the requested new value.
pub type ChangeHandler = Box<dyn Fn(&str) + Send + Sync>;

/// A selectable option: one (value, content) pair.
///
/// Options are plain descriptors; the select renders them itself and binds
/// activation by index, so an option never holds selection logic or state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique value for this option
    pub value: String,
    /// Display label
    pub label: String,
    /// Whether this option is disabled
    pub disabled: bool,
}

impl SelectOption {
    /// Create a new option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Create an option where value equals label.
    #[must_use]
    pub fn simple(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            label: text,
            disabled: false,
        }
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Message emitted when an option is activated.
///
/// In uncontrolled mode the select has already applied the value when this
/// is emitted; in controlled mode it reports what was requested of the
/// owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    /// The activated value
    pub value: Option<String>,
    /// Index of the activated option
    pub index: Option<usize>,
}

/// Message emitted when the list is toggled via the header or keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectToggled {
    /// Whether the list is now open
    pub open: bool,
}

/// Message emitted when the list closes without a selection
/// (outside click or Escape).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectClosed;

/// Configuration error detected when building a [`Select`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectConfigError {
    /// Controlled mode (a `value` is supplied) requires a change handler.
    #[error("controlled select requires an `on_change` handler")]
    MissingChangeHandler,
}

/// Who owns the selected value. Decided once, never changes.
enum Ownership {
    /// The owner supplies the value and applies changes itself; `value` is
    /// the owner's last applied value, `on_change` requests the next one.
    Controlled {
        value: Option<String>,
        on_change: ChangeHandler,
    },
    /// The select owns the value.
    Uncontrolled { selected: Option<String> },
}

/// Prop-bag configuration for [`Select::from_config`].
///
/// Presence of `value` selects controlled mode; otherwise the select is
/// uncontrolled and starts from `default_value`.
#[derive(Default)]
pub struct SelectConfig {
    value: Option<String>,
    default_value: Option<String>,
    on_change: Option<ChangeHandler>,
    options: Vec<SelectOption>,
    placeholder: Option<String>,
}

impl SelectConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply an owner value, selecting controlled mode.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the initial value for uncontrolled mode.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set the change handler (required in controlled mode).
    #[must_use]
    pub fn on_change(mut self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Set the options.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

/// Placeholder shown when no value is set and none was configured.
const DEFAULT_PLACEHOLDER: &str = "label";

/// Dual-mode select/dropdown widget.
pub struct Select {
    /// Available options
    options: Vec<SelectOption>,
    /// Value ownership, fixed at construction
    ownership: Ownership,
    /// Placeholder text when nothing is selected
    placeholder: String,
    /// Whether the list is currently open
    open: bool,
    /// Option index the pointer or keyboard has highlighted
    highlighted: Option<usize>,
    /// Whether the whole widget is disabled
    disabled: bool,
    /// Minimum width in cells
    min_width: f32,
    /// Row height in cells
    item_height: f32,
    /// Maximum visible options in the open list
    max_visible_items: usize,
    /// Header background
    header_bg: Color,
    /// Open-list background
    panel_bg: Color,
    /// Background of the selected option row
    selected_bg: Color,
    /// Background of the highlighted option row
    highlight_bg: Color,
    /// Text color
    text_color: Color,
    /// Placeholder text color
    placeholder_color: Color,
    /// Disabled text color
    disabled_color: Color,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
}

impl Select {
    /// Create an uncontrolled select with no initial value.
    #[must_use]
    pub fn uncontrolled() -> Self {
        Self::with_ownership(Ownership::Uncontrolled { selected: None })
    }

    /// Create an uncontrolled select with an initial value.
    #[must_use]
    pub fn uncontrolled_with(initial: impl Into<String>) -> Self {
        Self::with_ownership(Ownership::Uncontrolled {
            selected: Some(initial.into()),
        })
    }

    /// Create a controlled select with no value applied yet.
    ///
    /// The handler receives each requested value; the displayed value
    /// changes only when the owner calls [`Select::set_value`].
    #[must_use]
    pub fn controlled(on_change: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self::with_ownership(Ownership::Controlled {
            value: None,
            on_change: Box::new(on_change),
        })
    }

    /// Build a select from a prop-bag configuration.
    ///
    /// Presence of a `value` selects controlled mode, which requires an
    /// `on_change` handler.
    ///
    /// # Errors
    ///
    /// Returns [`SelectConfigError::MissingChangeHandler`] for a controlled
    /// configuration without a handler, before any interaction can occur.
    pub fn from_config(config: SelectConfig) -> Result<Self, SelectConfigError> {
        let SelectConfig {
            value,
            default_value,
            on_change,
            options,
            placeholder,
        } = config;

        let ownership = if let Some(value) = value {
            if default_value.is_some() {
                log::warn!(
                    "select configured with both `value` and `default_value`; \
                     `value` selects controlled mode and `default_value` is ignored"
                );
            }
            let Some(on_change) = on_change else {
                return Err(SelectConfigError::MissingChangeHandler);
            };
            Ownership::Controlled {
                value: Some(value),
                on_change,
            }
        } else {
            Ownership::Uncontrolled {
                selected: default_value,
            }
        };

        let mut select = Self::with_ownership(ownership);
        select.options = options;
        if let Some(placeholder) = placeholder {
            select.placeholder = placeholder;
        }
        Ok(select)
    }

    fn with_ownership(ownership: Ownership) -> Self {
        Self {
            options: Vec::new(),
            ownership,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            open: false,
            highlighted: None,
            disabled: false,
            min_width: 24.0,
            item_height: 1.0,
            max_visible_items: 8,
            header_bg: Color::from_hex("#1f2937").unwrap_or(Color::BLACK),
            panel_bg: Color::from_hex("#111827").unwrap_or(Color::BLACK),
            selected_bg: Color::from_hex("#2563eb").unwrap_or(Color::BLACK),
            highlight_bg: Color::from_hex("#374151").unwrap_or(Color::BLACK),
            text_color: Color::from_hex("#e5e7eb").unwrap_or(Color::WHITE),
            placeholder_color: Color::from_hex("#9ca3af").unwrap_or(Color::WHITE),
            disabled_color: Color::from_hex("#6b7280").unwrap_or(Color::WHITE),
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
        }
    }

    // === Builder methods ===

    /// Add an option.
    #[must_use]
    pub fn option(mut self, opt: SelectOption) -> Self {
        self.options.push(opt);
        self
    }

    /// Add multiple options.
    #[must_use]
    pub fn options(mut self, opts: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(opts);
        self
    }

    /// Set options from simple string values.
    #[must_use]
    pub fn options_from_strings(
        mut self,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.options = values.into_iter().map(SelectOption::simple).collect();
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set minimum width in cells.
    #[must_use]
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width.max(8.0);
        self
    }

    /// Set row height in cells.
    #[must_use]
    pub fn item_height(mut self, height: f32) -> Self {
        self.item_height = height.max(1.0);
        self
    }

    /// Set maximum visible options in the open list.
    #[must_use]
    pub fn max_visible_items(mut self, count: usize) -> Self {
        self.max_visible_items = count.max(1);
        self
    }

    /// Set header background color.
    #[must_use]
    pub const fn header_background(mut self, color: Color) -> Self {
        self.header_bg = color;
        self
    }

    /// Set text color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
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

    // === Reads ===

    /// Whether the owner supplies the value.
    ///
    /// The single mode predicate: every value read and write branches on
    /// this, and it never changes after construction.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        matches!(self.ownership, Ownership::Controlled { .. })
    }

    /// Check if the list is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Check if there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Get option count.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Get all options.
    #[must_use]
    pub fn get_options(&self) -> &[SelectOption] {
        &self.options
    }

    /// The value currently displayed: the owner's value in controlled mode,
    /// the internal selection otherwise.
    #[must_use]
    pub fn display_value(&self) -> Option<&str> {
        match &self.ownership {
            Ownership::Controlled { value, .. } => value.as_deref(),
            Ownership::Uncontrolled { selected } => selected.as_deref(),
        }
    }

    /// Index of the option matching the displayed value.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        let value = self.display_value()?;
        self.options.iter().position(|o| o.value == value)
    }

    /// Index of the currently highlighted option.
    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    // === Operations ===

    /// Flip list visibility. No other state is affected.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Apply the authoritative value from the owner (controlled mode only).
    ///
    /// On an uncontrolled select this is a mode misuse: it is logged and
    /// ignored.
    pub fn set_value(&mut self, value: Option<String>) {
        match &mut self.ownership {
            Ownership::Controlled { value: applied, .. } => *applied = value,
            Ownership::Uncontrolled { .. } => {
                log::warn!("set_value called on an uncontrolled select; ignoring");
            }
        }
    }

    /// Activate the option at `index`.
    ///
    /// Disabled or out-of-range options are inert. Otherwise the list
    /// closes and, depending on mode, the value is either stored
    /// (uncontrolled) or requested from the owner via the change handler
    /// (controlled; the displayed value is not touched).
    pub fn activate(&mut self, index: usize) -> Option<SelectionChanged> {
        let option = self.options.get(index)?;
        if option.disabled {
            return None;
        }
        let value = option.value.clone();

        match &mut self.ownership {
            Ownership::Controlled { on_change, .. } => on_change(&value),
            Ownership::Uncontrolled { selected } => *selected = Some(value.clone()),
        }

        self.open = false;
        self.highlighted = None;
        Some(SelectionChanged {
            value: Some(value),
            index: Some(index),
        })
    }

    // === Geometry ===

    /// Number of options shown when open.
    fn visible_count(&self) -> usize {
        self.options.len().min(self.max_visible_items)
    }

    /// Height of the open list.
    fn dropdown_height(&self) -> f32 {
        self.visible_count() as f32 * self.item_height
    }

    /// The always-visible header row.
    fn header_rect(&self) -> Rect {
        Rect::new(self.bounds.x, self.bounds.y, self.bounds.width, self.item_height)
    }

    /// The open list below the header.
    fn dropdown_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y + self.item_height,
            self.bounds.width,
            self.dropdown_height(),
        )
    }

    /// Row rect of the option at `index`.
    fn item_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.bounds.x,
            (index as f32).mul_add(self.item_height, self.bounds.y + self.item_height),
            self.bounds.width,
            self.item_height,
        )
    }

    /// Visible option index under a pointer position, if the list is open.
    fn item_at_position(&self, position: &Point) -> Option<usize> {
        if !self.open || !self.dropdown_rect().contains_point(position) {
            return None;
        }
        let relative = position.y - (self.bounds.y + self.item_height);
        let index = (relative / self.item_height) as usize;
        (index < self.visible_count()).then_some(index)
    }

    // === Keyboard navigation ===

    /// Open the list and highlight the selected option, or the first
    /// enabled one.
    fn open_with_highlight(&mut self) {
        self.open = true;
        self.highlighted = self
            .selected_index()
            .filter(|&i| i < self.visible_count())
            .or_else(|| self.edge_enabled(true));
    }

    /// Close the list and drop the highlight.
    fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    /// Next enabled option walking up or down from the current highlight.
    /// Clamps at the ends rather than wrapping.
    fn next_enabled(&self, forward: bool) -> Option<usize> {
        let visible = self.visible_count();
        if visible == 0 {
            return None;
        }
        let found = if forward {
            let start = self.highlighted.map_or(0, |i| i + 1);
            (start..visible).find(|&i| !self.options[i].disabled)
        } else {
            let end = self.highlighted.unwrap_or(visible);
            (0..end).rev().find(|&i| !self.options[i].disabled)
        };
        found.or(self.highlighted)
    }

    /// First or last enabled option in the visible range.
    fn edge_enabled(&self, first: bool) -> Option<usize> {
        let visible = self.visible_count();
        if first {
            (0..visible).find(|&i| !self.options[i].disabled)
        } else {
            (0..visible).rev().find(|&i| !self.options[i].disabled)
        }
    }

    /// Header label: the matching option's label, else the raw value
    /// (controlled owners may supply values outside the option list), else
    /// the placeholder.
    fn display_label(&self) -> &str {
        match self.display_value() {
            Some(value) => self
                .options
                .iter()
                .find(|o| o.value == value)
                .map_or(value, |o| o.label.as_str()),
            None => &self.placeholder,
        }
    }
}

impl Widget for Select {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.min_width, self.item_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let header = self.header_rect();
        canvas.fill_rect(header, self.header_bg);

        let text_color = if self.disabled {
            self.disabled_color
        } else if self.display_value().is_some() {
            self.text_color
        } else {
            self.placeholder_color
        };
        let text_y = header.y + (self.item_height - 1.0) / 2.0;
        canvas.draw_text(
            self.display_label(),
            Point::new(header.x + 1.0, text_y),
            &TextStyle {
                color: text_color,
                ..Default::default()
            },
        );
        canvas.draw_text(
            "▾",
            Point::new(header.right() - 2.0, text_y),
            &TextStyle {
                color: text_color,
                ..Default::default()
            },
        );

        if self.open && !self.options.is_empty() {
            canvas.fill_rect(self.dropdown_rect(), self.panel_bg);

            for (i, option) in self.options.iter().take(self.visible_count()).enumerate() {
                let row = self.item_rect(i);
                let row_bg = if Some(i) == self.selected_index() {
                    self.selected_bg
                } else if Some(i) == self.highlighted {
                    self.highlight_bg
                } else {
                    self.panel_bg
                };
                canvas.fill_rect(row, row_bg);

                let row_color = if option.disabled {
                    self.disabled_color
                } else {
                    self.text_color
                };
                canvas.draw_text(
                    &option.label,
                    Point::new(row.x + 1.0, row.y + (self.item_height - 1.0) / 2.0),
                    &TextStyle {
                        color: row_color,
                        ..Default::default()
                    },
                );
            }
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }

        match event {
            Event::MouseMove { position } => {
                if self.open {
                    self.highlighted = self.item_at_position(position);
                }
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.header_rect().contains_point(position) {
                    self.toggle_open();
                    if !self.open {
                        self.highlighted = None;
                    }
                    return Some(Box::new(SelectToggled { open: self.open }));
                }
                if self.open {
                    if let Some(index) = self.item_at_position(position) {
                        if let Some(changed) = self.activate(index) {
                            return Some(Box::new(changed));
                        }
                    } else {
                        self.close();
                        return Some(Box::new(SelectClosed));
                    }
                }
            }
            Event::KeyDown { key } if self.open => match key {
                Key::Escape => {
                    self.close();
                    return Some(Box::new(SelectClosed));
                }
                Key::Up => self.highlighted = self.next_enabled(false),
                Key::Down => self.highlighted = self.next_enabled(true),
                Key::Home => self.highlighted = self.edge_enabled(true),
                Key::End => self.highlighted = self.edge_enabled(false),
                Key::Enter | Key::Space => {
                    if let Some(index) = self.highlighted {
                        if let Some(changed) = self.activate(index) {
                            return Some(Box::new(changed));
                        }
                    }
                }
                _ => {}
            },
            Event::KeyDown { key } => {
                if matches!(key, Key::Enter | Key::Space | Key::Down) {
                    self.open_with_highlight();
                    return Some(Box::new(SelectToggled { open: true }));
                }
            }
            Event::FocusOut => {
                if self.open {
                    self.close();
                }
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
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ListBox
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
