//! Behavioral tests for the dual-mode select, driven through the test
//! harness with synthetic input and recorded paint output.

use elegir_core::Key;
use elegir_test::Harness;
use elegir_widgets::{
    Select, SelectConfig, SelectConfigError, SelectOption, SelectToggled, SelectionChanged,
};
use std::sync::{Arc, Mutex};

fn dishes() -> Vec<SelectOption> {
    vec![
        SelectOption::simple("tikka-masala"),
        SelectOption::simple("tandoori-chicken"),
        SelectOption::simple("dosa"),
        SelectOption::simple("mint-chutney"),
    ]
}

/// An uncontrolled select with a default value displays it untouched.
#[test]
fn uncontrolled_default_value_is_displayed() {
    let select = Select::uncontrolled_with("tikka-masala").options(dishes());
    let mut harness = Harness::new(select);

    harness.assert_text("tikka-masala");
}

/// Opening the list and clicking an option updates the header and closes
/// the list.
#[test]
fn uncontrolled_selection_updates_label_and_closes() {
    let select = Select::uncontrolled_with("tikka-masala").options(dishes());
    let mut harness = Harness::new(select);

    // Open via the header, then click the "dosa" row (header row 0,
    // options start on row 1).
    harness.click_at(5.0, 0.0);
    assert!(harness.widget().is_open());
    harness.click_at(5.0, 3.0);

    assert!(!harness.widget().is_open());
    assert_eq!(harness.widget().display_value(), Some("dosa"));
    harness.assert_text("dosa");
    // The list is closed, so no other option row is painted.
    harness.assert_no_text("tandoori-chicken");
}

/// A controlled select displays the owner's value; activating an option
/// only requests a change, and the header follows the owner's next
/// `set_value`.
#[test]
fn controlled_display_tracks_owner_value() {
    let requested = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&requested);
    let select = Select::from_config(
        SelectConfig::new()
            .value("dosa")
            .on_change(move |value| {
                if let Ok(mut guard) = sink.lock() {
                    guard.push(value.to_string());
                }
            })
            .options(dishes()),
    )
    .unwrap();
    let mut harness = Harness::new(select);

    harness.assert_text("dosa");

    // Activate "mint-chutney" (row 3 of the open list).
    harness.click_at(5.0, 0.0);
    harness.click_at(5.0, 4.0);

    assert_eq!(requested.lock().unwrap().as_slice(), ["mint-chutney"]);
    let changed = harness.take_message::<SelectionChanged>().unwrap();
    assert_eq!(changed.value.as_deref(), Some("mint-chutney"));

    // The widget did not apply the value itself.
    harness.assert_text("dosa");
    assert_eq!(harness.widget().display_value(), Some("dosa"));

    // The owner applies it; only now does the header change.
    harness
        .widget_mut()
        .set_value(Some("mint-chutney".to_string()));
    harness.assert_text("mint-chutney");
    harness.assert_no_text("dosa");
}

/// Two consecutive toggles restore the original visibility.
#[test]
fn toggle_pairs_are_idempotent() {
    let select = Select::uncontrolled().options(dishes());
    let mut harness = Harness::new(select);

    assert!(!harness.widget().is_open());
    harness.click_at(5.0, 0.0);
    assert!(harness.widget().is_open());
    assert!(harness.has_message::<SelectToggled>());
    harness.click_at(5.0, 0.0);
    assert!(!harness.widget().is_open());

    // One toggle message per click, nothing else.
    assert_eq!(harness.message_count(), 2);
    harness.clear_messages();
    assert_eq!(harness.message_count(), 0);
}

/// With no default and no selection the placeholder literal is shown.
#[test]
fn no_value_shows_placeholder() {
    let select = Select::uncontrolled().options(dishes());
    let mut harness = Harness::new(select);

    harness.assert_text("label");
}

/// A controlled configuration without a change handler is rejected at
/// build time, before any interaction.
#[test]
fn controlled_without_handler_is_a_configuration_error() {
    let result = Select::from_config(SelectConfig::new().value("dosa").options(dishes()));
    assert_eq!(
        result.err(),
        Some(SelectConfigError::MissingChangeHandler)
    );
}

/// The full keyboard path: open, navigate, activate.
#[test]
fn keyboard_selection_flow() {
    let select = Select::uncontrolled().options(dishes());
    let mut harness = Harness::new(select);

    harness.press(Key::Down); // open, highlight first
    assert!(harness.widget().is_open());
    harness.press(Key::Down);
    harness.press(Key::Down); // highlight "dosa"
    harness.press(Key::Enter);

    assert!(!harness.widget().is_open());
    assert_eq!(harness.widget().display_value(), Some("dosa"));
}

/// Escape abandons the interaction without changing the value.
#[test]
fn escape_closes_without_selection() {
    let select = Select::uncontrolled_with("tikka-masala").options(dishes());
    let mut harness = Harness::new(select);

    harness.press(Key::Down);
    harness.press(Key::Escape);

    assert!(!harness.widget().is_open());
    assert_eq!(harness.widget().display_value(), Some("tikka-masala"));
}

/// Disabled options cannot be activated from the pointer path.
#[test]
fn disabled_option_is_inert() {
    let select = Select::uncontrolled()
        .option(SelectOption::simple("ok"))
        .option(SelectOption::simple("nope").disabled(true));
    let mut harness = Harness::new(select);

    harness.click_at(5.0, 0.0);
    harness.click_at(5.0, 2.0); // the disabled row

    assert!(harness.widget().is_open());
    assert_eq!(harness.widget().display_value(), None);
}

/// Applying a value to an uncontrolled select is ignored (mode misuse).
#[test]
fn set_value_is_ignored_in_uncontrolled_mode() {
    let select = Select::uncontrolled_with("dosa").options(dishes());
    let mut harness = Harness::new(select);

    harness.widget_mut().set_value(Some("mint-chutney".to_string()));
    harness.assert_text("dosa");
}
