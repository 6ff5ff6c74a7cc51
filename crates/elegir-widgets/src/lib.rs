//! Widget implementations for the elegir selection toolkit.

pub mod button;
pub mod select;

pub use button::{Button, ButtonClicked};
pub use select::{
    ChangeHandler, Select, SelectClosed, SelectConfig, SelectConfigError, SelectOption,
    SelectToggled, SelectionChanged,
};
