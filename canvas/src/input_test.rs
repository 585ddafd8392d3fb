use super::*;

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
}

// =============================================================
// Key
// =============================================================

#[test]
fn delete_and_backspace_are_delete_keys() {
    assert!(Key("Delete".into()).is_delete());
    assert!(Key("Backspace".into()).is_delete());
    assert!(!Key("d".into()).is_delete());
}

#[test]
fn escape_key() {
    assert!(Key("Escape".into()).is_escape());
    assert!(!Key("Esc".into()).is_escape());
}

#[test]
fn space_is_pan_key() {
    assert!(Key(" ".into()).is_pan_key());
    assert!(!Key("Space".into()).is_pan_key());
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_has_no_selection() {
    let ui = UiState::default();
    assert!(ui.selected_id.is_none());
    assert_eq!(ui.new_box_class, 0);
    assert!(!ui.pan_key_held);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(matches!(InputState::default(), InputState::Idle));
    assert!(!InputState::default().is_active());
}

#[test]
fn pending_rect_follows_drag_direction() {
    let state = InputState::Drawing { anchor: Point::new(100.0, 100.0), current: Point::new(60.0, 130.0) };
    let rect = state.pending_rect();
    assert_eq!(rect, Some(CanvasRect::new(60.0, 100.0, 40.0, 30.0)));
    assert!(state.is_active());
}

#[test]
fn pending_rect_absent_outside_drawing() {
    let state = InputState::Panning { last_screen: Point::new(0.0, 0.0) };
    assert!(state.pending_rect().is_none());
    assert!(state.is_active());
}
