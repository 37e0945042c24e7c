//! Shared helpers for editor tests.
//!
//! Builders for editors wired to a recording change listener, plus small
//! event constructors so scenario tests read as the interaction they
//! simulate.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::InputEvent;
use crate::state::{ChipEditor, EditorOptions};
use crate::surface::Surface;

/// Every value list the change listener received, in order.
pub type RecordedChanges = Rc<RefCell<Vec<Vec<String>>>>;

/// An editor attached to a fresh empty surface, no listener.
pub fn editor() -> ChipEditor {
    ChipEditor::new(EditorOptions::new().surface(Surface::new())).expect("empty surface attaches")
}

/// An editor whose listener records every notification it receives.
pub fn recording_editor() -> (ChipEditor, RecordedChanges) {
    let changes: RecordedChanges = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let editor = ChipEditor::new(
        EditorOptions::new()
            .surface(Surface::new())
            .on_change(move |values: &[String]| sink.borrow_mut().push(values.to_vec())),
    )
    .expect("empty surface attaches");
    (editor, changes)
}

/// A plain key press with no modifiers.
pub fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Type `text` into the editor one character at a time.
pub fn type_text(editor: &mut ChipEditor, text: &str) {
    for ch in text.chars() {
        editor.handle_event(key(KeyCode::Char(ch)));
    }
}
