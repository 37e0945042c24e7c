//! Text-control state and key interpretation (pure).
//!
//! The control is idle while its text is empty and composing otherwise;
//! a commit always returns it to idle. Backspace while idle is the only
//! path that deletes a chip instead of text; that decision is surfaced
//! through [`BackspaceOutcome`] and acted on by the controller.

use crate::model::EditorAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The single-line input control: pending text plus cursor position.
///
/// The cursor is a byte offset into `text`, always on a character
/// boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    text: String,
    cursor: usize,
}

impl InputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when no text is pending.
    pub fn is_idle(&self) -> bool {
        self.text.is_empty()
    }
}

/// What a backspace press did, decided by the state machine position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackspaceOutcome {
    /// A pending character was deleted.
    DeletedChar,
    /// Nothing was pending: the editor should remove the last chip instead.
    RemoveLastChip,
    /// Text is pending but the cursor sits at the start; nothing to delete.
    Noop,
}

/// Insert a character at the cursor and advance past it.
pub fn handle_char(mut state: InputState, ch: char) -> InputState {
    state.text.insert(state.cursor, ch);
    state.cursor += ch.len_utf8();
    state
}

/// Handle a backspace press.
///
/// Deletes the character before the cursor when text is pending; reports
/// [`BackspaceOutcome::RemoveLastChip`] when the control is idle.
pub fn handle_backspace(mut state: InputState) -> (InputState, BackspaceOutcome) {
    if state.text.is_empty() {
        return (state, BackspaceOutcome::RemoveLastChip);
    }
    match state.text[..state.cursor].chars().next_back() {
        Some(prev) => {
            let new_cursor = state.cursor - prev.len_utf8();
            state.text.remove(new_cursor);
            state.cursor = new_cursor;
            (state, BackspaceOutcome::DeletedChar)
        }
        // cursor at the start of pending text
        None => (state, BackspaceOutcome::Noop),
    }
}

/// Move the cursor one character left. Saturates at the start.
pub fn handle_cursor_left(mut state: InputState) -> InputState {
    if let Some(prev) = state.text[..state.cursor].chars().next_back() {
        state.cursor -= prev.len_utf8();
    }
    state
}

/// Move the cursor one character right. Saturates at the end.
pub fn handle_cursor_right(mut state: InputState) -> InputState {
    if let Some(next) = state.text[state.cursor..].chars().next() {
        state.cursor += next.len_utf8();
    }
    state
}

/// Take the pending text for a commit, resetting the control to idle.
///
/// Returns `None` when the control holds no text: a commit on an idle
/// control is a no-op, never an empty entry.
pub fn take_pending(mut state: InputState) -> (InputState, Option<String>) {
    if state.text.is_empty() {
        return (state, None);
    }
    let text = std::mem::take(&mut state.text);
    state.cursor = 0;
    (state, Some(text))
}

/// Split pasted text into candidate values: comma-separated, each piece
/// trimmed, empty pieces dropped, order preserved.
pub fn split_paste(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Map a key event to an editor action.
///
/// Enter and comma both commit; the separator character is consumed, never
/// inserted. Keys with control or alt held are left for the host.
pub fn interpret_key(key: KeyEvent) -> Option<EditorAction> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(',') => Some(EditorAction::Commit),
        KeyCode::Backspace => Some(EditorAction::DeleteBack),
        KeyCode::Left => Some(EditorAction::CursorLeft),
        KeyCode::Right => Some(EditorAction::CursorRight),
        KeyCode::Char(ch) => Some(EditorAction::InsertChar(ch)),
        _ => None,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "input_handler_tests.rs"]
mod tests;
