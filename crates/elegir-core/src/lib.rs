//! Core types and traits for the elegir selection-widget toolkit.
//!
//! This crate provides the foundational types used throughout elegir:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with WCAG contrast calculations
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`], [`Key`], [`MouseButton`]
//! - The [`Widget`] and [`Canvas`] traits

mod color;
mod constraints;
mod event;
mod geometry;
pub mod widget;

pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn constrain_always_within_bounds(
            w in 0.0f32..200.0,
            h in 0.0f32..200.0,
            max_w in 1.0f32..100.0,
            max_h in 1.0f32..100.0,
        ) {
            let c = Constraints::loose(Size::new(max_w, max_h));
            let s = c.constrain(Size::new(w, h));
            prop_assert!(s.width <= max_w);
            prop_assert!(s.height <= max_h);
            prop_assert!(s.width >= 0.0);
            prop_assert!(s.height >= 0.0);
        }

        #[test]
        fn color_hex_round_trips(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            let c = Color::from_hex(&hex).unwrap();
            prop_assert_eq!(c.to_hex(), hex);
        }

        #[test]
        fn contrast_ratio_in_wcag_range(
            r1 in 0.0f32..=1.0, g1 in 0.0f32..=1.0, b1 in 0.0f32..=1.0,
            r2 in 0.0f32..=1.0, g2 in 0.0f32..=1.0, b2 in 0.0f32..=1.0,
        ) {
            let ratio = Color::rgb(r1, g1, b1).contrast_ratio(&Color::rgb(r2, g2, b2));
            prop_assert!((1.0..=21.01).contains(&ratio));
        }

        #[test]
        fn point_containment_matches_edges(
            x in -10.0f32..10.0,
            y in -10.0f32..10.0,
        ) {
            let r = Rect::new(0.0, 0.0, 5.0, 5.0);
            let p = Point::new(x, y);
            let expected =
                (0.0..=5.0).contains(&x) && (0.0..=5.0).contains(&y);
            prop_assert_eq!(r.contains_point(&p), expected);
        }
    }

    #[test]
    fn event_serde_round_trip() {
        let e = Event::KeyDown { key: Key::Down };
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(serde_json::from_str::<Event>(&json).unwrap(), e);
    }
}
