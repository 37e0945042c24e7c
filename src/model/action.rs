//! Domain-level editor actions, independent of key bindings.

use crossterm::event::KeyEvent;

/// What an input event asks the editor to do.
///
/// These represent user intent, not specific keys or mouse buttons. The
/// mapping from raw events to actions lives in the input and mouse
/// handlers; the controller applies actions without knowing where they
/// came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Insert a character into the input control at the cursor.
    InsertChar(char),
    /// Move the input cursor one character left.
    CursorLeft,
    /// Move the input cursor one character right.
    CursorRight,
    /// Commit the pending input text as a new entry (Enter, comma, blur).
    Commit,
    /// Delete backwards: a pending character when the control has text,
    /// otherwise the most recently added chip.
    DeleteBack,
    /// Remove the chip holding this exact value (remove affordance click).
    RemoveChip(String),
    /// Add each comma-separated piece of pasted text as an entry.
    PasteText(String),
    /// Give keyboard focus to the input control (container click).
    FocusInput,
}

/// Raw widget-level events the host feeds into [`crate::ChipEditor::handle_event`].
///
/// This is the explicit input capability: the host's event loop translates
/// whatever its platform delivers into these and the editor does the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press while the widget may have focus.
    Key(KeyEvent),
    /// Plain text pasted into the widget.
    Paste(String),
    /// The widget lost focus; pending text is committed.
    Blur,
    /// A primary-button click at absolute terminal coordinates.
    Click { column: u16, row: u16 },
}
