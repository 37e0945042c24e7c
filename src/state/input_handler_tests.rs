//! Tests for the text-control transitions and key interpretation.

use super::*;

fn composing(text: &str) -> InputState {
    text.chars().fold(InputState::default(), handle_char)
}

#[test]
fn default_state_is_idle() {
    let state = InputState::default();
    assert!(state.is_idle());
    assert_eq!(state.text(), "");
    assert_eq!(state.cursor(), 0);
}

#[test]
fn typing_leaves_idle() {
    let state = handle_char(InputState::default(), 'a');
    assert!(!state.is_idle());
    assert_eq!(state.text(), "a");
    assert_eq!(state.cursor(), 1);
}

#[test]
fn chars_insert_at_cursor() {
    let state = composing("ac");
    let state = handle_cursor_left(state);
    let state = handle_char(state, 'b');
    assert_eq!(state.text(), "abc");
    assert_eq!(state.cursor(), 2);
}

#[test]
fn backspace_deletes_char_before_cursor() {
    let state = composing("ab");
    let (state, outcome) = handle_backspace(state);
    assert_eq!(outcome, BackspaceOutcome::DeletedChar);
    assert_eq!(state.text(), "a");
    assert_eq!(state.cursor(), 1);
}

#[test]
fn backspace_on_idle_requests_chip_removal() {
    let (state, outcome) = handle_backspace(InputState::default());
    assert_eq!(outcome, BackspaceOutcome::RemoveLastChip);
    assert!(state.is_idle());
}

#[test]
fn backspace_at_start_of_pending_text_is_noop() {
    let state = composing("ab");
    let state = handle_cursor_left(handle_cursor_left(state));
    let (state, outcome) = handle_backspace(state);
    assert_eq!(outcome, BackspaceOutcome::Noop);
    assert_eq!(state.text(), "ab");
    assert_eq!(state.cursor(), 0);
}

#[test]
fn backspace_handles_multibyte_chars() {
    let state = composing("aé");
    let (state, outcome) = handle_backspace(state);
    assert_eq!(outcome, BackspaceOutcome::DeletedChar);
    assert_eq!(state.text(), "a");
}

#[test]
fn cursor_movement_saturates_at_both_ends() {
    let state = composing("xy");
    let state = handle_cursor_right(state);
    assert_eq!(state.cursor(), 2);

    let state = (0..5).fold(state, |s, _| handle_cursor_left(s));
    assert_eq!(state.cursor(), 0);
}

#[test]
fn take_pending_returns_text_and_resets() {
    let state = composing("a@b.com");
    let (state, pending) = take_pending(state);
    assert_eq!(pending.as_deref(), Some("a@b.com"));
    assert!(state.is_idle());
    assert_eq!(state.cursor(), 0);
}

#[test]
fn take_pending_on_idle_is_none() {
    let (state, pending) = take_pending(InputState::default());
    assert!(pending.is_none());
    assert!(state.is_idle());
}

#[test]
fn split_paste_trims_and_drops_empty_pieces() {
    let pieces = split_paste(" a@b.com , c@d.com ,, bad ,");
    assert_eq!(pieces, ["a@b.com", "c@d.com", "bad"]);
}

#[test]
fn split_paste_without_commas_is_one_piece() {
    assert_eq!(split_paste("solo@x.com"), ["solo@x.com"]);
}

#[test]
fn split_paste_of_only_separators_is_empty() {
    assert!(split_paste(" , ,  ").is_empty());
}

#[test]
fn interpret_enter_commits() {
    let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(interpret_key(key), Some(EditorAction::Commit));
}

#[test]
fn interpret_comma_commits_instead_of_inserting() {
    let key = KeyEvent::new(KeyCode::Char(','), KeyModifiers::NONE);
    assert_eq!(interpret_key(key), Some(EditorAction::Commit));
}

#[test]
fn interpret_backspace_is_delete_back() {
    let key = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
    assert_eq!(interpret_key(key), Some(EditorAction::DeleteBack));
}

#[test]
fn interpret_printable_char_inserts() {
    let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
    assert_eq!(interpret_key(key), Some(EditorAction::InsertChar('x')));
}

#[test]
fn interpret_shifted_char_inserts() {
    let key = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);
    assert_eq!(interpret_key(key), Some(EditorAction::InsertChar('X')));
}

#[test]
fn interpret_control_chord_is_left_for_the_host() {
    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(interpret_key(key), None);
}

#[test]
fn interpret_unmapped_key_is_none() {
    let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    assert_eq!(interpret_key(key), None);
}
