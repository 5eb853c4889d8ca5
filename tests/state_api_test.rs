//! Integration tests for the state public API.

use wisp::state::{ColorStore, EffectContext, Mode, ModeStore};
use wisp::WispError;

#[test]
fn public_api_accessible() {
    // Verify all public types are accessible
    let _mode: Mode = Mode::default();
    let _modes = ModeStore::new();
    let _colors = ColorStore::new();
    let _state = EffectContext::new();
}

#[test]
fn fresh_context_has_documented_defaults() {
    let state = EffectContext::new();
    assert_eq!(state.mode.current(), Mode::Bubbles);
    assert_eq!(state.color.current(), "hsla(210, 100%, 50%, 1)");
    assert_eq!(state.color.current(), ColorStore::DEFAULT);
}

#[test]
fn every_mode_can_be_stored_and_read_back() {
    let mut state = EffectContext::new();
    for mode in Mode::ALL {
        state.mode.set(mode);
        assert_eq!(state.mode.current(), mode);
    }
}

#[test]
fn last_write_wins_in_both_stores() {
    let mut state = EffectContext::new();

    state.mode.set(Mode::Fireworks);
    state.mode.set(Mode::Net);
    assert_eq!(state.mode.current(), Mode::Net);

    state.color.set("#111111");
    state.color.set("#222222");
    assert_eq!(state.color.current(), "#222222");
}

#[test]
fn stores_do_not_affect_each_other() {
    let mut state = EffectContext::new();

    state.mode.set(Mode::Off);
    assert_eq!(state.color.current(), ColorStore::DEFAULT);

    state.color.set("rebeccapurple");
    assert_eq!(state.mode.current(), Mode::Off);
}

#[test]
fn mode_enumeration_is_complete() {
    assert_eq!(Mode::ALL.len(), 6);
    for name in ["bubbles", "fireworks", "constellation", "matrix", "net", "off"] {
        let mode: Mode = name.parse().unwrap();
        assert!(Mode::ALL.contains(&mode));
        assert_eq!(mode.as_str(), name);
    }
}

#[test]
fn unknown_mode_names_are_rejected() {
    let result = "lasers".parse::<Mode>();
    match result {
        Err(WispError::UnknownMode { value }) => assert_eq!(value, "lasers"),
        other => panic!("Expected UnknownMode, got {:?}", other),
    }
}

#[test]
fn color_store_keeps_arbitrary_strings_verbatim() {
    let mut colors = ColorStore::new();
    for value in ["#fff", "rgb(1, 2, 3)", "not a color at all", ""] {
        colors.set(value);
        assert_eq!(colors.current(), value);
    }
}

#[test]
fn contexts_do_not_share_state() {
    let mut first = EffectContext::new();
    let second = EffectContext::new();

    first.mode.set(Mode::Matrix);
    first.color.set("#00ff41");

    assert_eq!(second.mode.current(), Mode::Bubbles);
    assert_eq!(second.color.current(), ColorStore::DEFAULT);
}

#[test]
fn full_console_state_workflow() {
    // 1. Create a fresh context
    let mut state = EffectContext::new();

    // 2. Parse user input at the string boundary
    let mode: Mode = " Fireworks ".parse().unwrap();
    assert_eq!(mode, Mode::Fireworks);

    // 3. Apply the writes
    state.mode.set(mode);
    state.color.set("hsla(30, 90%, 55%, 0.8)");

    // 4. Reads observe the writes immediately
    assert_eq!(state.mode.current(), Mode::Fireworks);
    assert_eq!(state.color.current(), "hsla(30, 90%, 55%, 0.8)");

    // 5. Reset restores the documented defaults
    state.reset();
    assert_eq!(state.mode.current(), Mode::Bubbles);
    assert_eq!(state.color.current(), ColorStore::DEFAULT);
}
