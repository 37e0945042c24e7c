//! The editor state controller.
//!
//! [`ChipEditor`] owns the container surface, the authoritative ordered
//! entry collection, and the single input control. The surface is kept
//! synchronized with the model on every mutation, but queries are always
//! answered from the model; rendering is a projection, never the source
//! of truth.
//!
//! All operations are synchronous. The change listener fires only from
//! here, and only for non-silent mutations; bulk replacement notifies
//! exactly once after the whole replacement completes, so subscribers
//! never observe a partially cleared list.

use std::fmt;
use std::mem;

use tracing::debug;

use crate::model::{ConstructionError, EditorAction, EmailEntry, InputEvent};
use crate::state::input_handler::{self, BackspaceOutcome, InputState};
use crate::state::mouse_handler::{self, ClickTarget};
use crate::surface::{Surface, CONTAINER_MARKER};
use crate::view::nodes::{self, DEFAULT_PLACEHOLDER};
use crate::view::EditorLayout;

/// Change-notification capability.
///
/// Supplied by the host at construction; receives the complete current
/// ordered value list after every non-silent mutation, never a delta.
/// Any `FnMut(&[String])` closure qualifies.
pub trait ChangeListener {
    fn on_change(&mut self, values: &[String]);
}

impl<F: FnMut(&[String])> ChangeListener for F {
    fn on_change(&mut self, values: &[String]) {
        self(values);
    }
}

/// Whether a mutation should reach the change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notify {
    /// Fire the listener with the full resulting value list.
    Subscribers,
    /// Mutate without notifying.
    Silent,
}

/// Construction options for [`ChipEditor`].
///
/// The surface is required at runtime; the listener and placeholder are
/// optional.
pub struct EditorOptions {
    surface: Option<Surface>,
    on_change: Option<Box<dyn ChangeListener>>,
    placeholder: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            surface: None,
            on_change: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl EditorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The surface to attach to. Required; construction fails without it.
    #[must_use]
    pub fn surface(mut self, surface: Surface) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Listener invoked with the full value list after non-silent mutations.
    #[must_use]
    pub fn on_change(mut self, listener: impl ChangeListener + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    /// Placeholder shown in the empty input control.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }
}

impl fmt::Debug for EditorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorOptions")
            .field("surface", &self.surface)
            .field("on_change", &self.on_change.is_some())
            .field("placeholder", &self.placeholder)
            .finish()
    }
}

/// The chip editor widget state.
///
/// Invariants held from construction until [`ChipEditor::destruct`]:
/// - the surface's child list is `[chip, chip, .., input]`: exactly one
///   input node, always last;
/// - surface chip nodes and model entries agree in order and key;
/// - entry values are unique (case-sensitive exact match).
pub struct ChipEditor {
    surface: Surface,
    entries: Vec<EmailEntry>,
    input: InputState,
    placeholder: String,
    focused: bool,
    on_change: Option<Box<dyn ChangeListener>>,
    layout: EditorLayout,
    destructed: bool,
}

impl ChipEditor {
    /// Attach a new editor to the surface carried in `options`.
    ///
    /// Fails fast when no surface was supplied or when the surface already
    /// has child content, since the widget refuses to corrupt an occupied
    /// container. On success the surface carries the container marker and
    /// exactly one input node.
    ///
    /// # Errors
    ///
    /// [`ConstructionError::MissingSurface`] or
    /// [`ConstructionError::SurfaceNotEmpty`].
    pub fn new(options: EditorOptions) -> Result<Self, ConstructionError> {
        let EditorOptions {
            surface,
            on_change,
            placeholder,
        } = options;

        let mut surface = surface.ok_or(ConstructionError::MissingSurface)?;
        if !surface.is_empty() {
            return Err(ConstructionError::SurfaceNotEmpty {
                child_count: surface.child_count(),
            });
        }

        surface.add_marker(CONTAINER_MARKER);
        surface.push_child(nodes::input_node(&placeholder));

        Ok(Self {
            surface,
            entries: Vec::new(),
            input: InputState::default(),
            placeholder,
            focused: false,
            on_change,
            layout: EditorLayout::default(),
            destructed: false,
        })
    }

    // ===== Public operations =====

    /// Add an entry unless one with this exact value already exists.
    ///
    /// The value is classified once, rendered as a chip inserted just
    /// before the input control, and appended to the model. Duplicates are
    /// a silent no-op.
    pub fn add_entry(&mut self, value: &str, notify: Notify) {
        if self.destructed || self.contains(value) {
            return;
        }
        let entry = EmailEntry::classify(value);
        let chip = nodes::chip_node(entry.value(), entry.is_valid());
        // keep the input node last: the chip goes just before it
        let input_index = self.surface.child_count().saturating_sub(1);
        self.surface.insert_child(input_index, chip);
        debug!(value, is_valid = entry.is_valid(), "entry added");
        self.entries.push(entry);
        self.emit(notify);
    }

    /// Remove the entry with this exact value, if present.
    ///
    /// Removal acts only when exactly one entry matches; an ambiguous
    /// lookup leaves the list untouched. Absent values are a silent no-op.
    pub fn remove_entry(&mut self, value: &str, notify: Notify) {
        if self.destructed {
            return;
        }
        let matches: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.value() == value)
            .map(|(index, _)| index)
            .collect();
        if let [index] = matches[..] {
            self.entries.remove(index);
            self.surface.remove_child(index);
            debug!(value, "entry removed");
            self.emit(notify);
        }
    }

    /// Remove the most recently added remaining entry by position,
    /// bypassing the value lookup. This is the Backspace path. No-op when
    /// no chips exist.
    pub fn remove_last_entry(&mut self, notify: Notify) {
        if self.destructed {
            return;
        }
        if let Some(entry) = self.entries.pop() {
            let index = self.entries.len();
            self.surface.remove_child(index);
            debug!(value = entry.value(), "last entry removed");
            self.emit(notify);
        }
    }

    /// Every current entry's raw value in append order, valid or not.
    pub fn values(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.value().to_string())
            .collect()
    }

    /// Current values whose creation-time classification was valid.
    pub fn valid_values(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.is_valid())
            .map(|entry| entry.value().to_string())
            .collect()
    }

    /// Replace the whole list.
    ///
    /// Removes every present entry silently, adds the given values in
    /// order silently (duplicates skipped by the uniqueness rule, so a
    /// list with repeats yields a shorter result), then fires the listener
    /// exactly once with the resulting list.
    pub fn replace_all<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.destructed {
            return;
        }
        while !self.entries.is_empty() {
            self.remove_last_entry(Notify::Silent);
        }
        for value in values {
            self.add_entry(&value.into(), Notify::Silent);
        }
        self.emit(Notify::Subscribers);
    }

    /// Tear the widget down.
    ///
    /// Removes the container marker, every widget-created child (all chips
    /// plus the input control), and the change listener. Safe to call
    /// again: a destructed editor ignores further operations and answers
    /// queries with empty lists.
    pub fn destruct(&mut self) {
        if self.destructed {
            return;
        }
        self.destructed = true;
        self.surface.remove_marker(CONTAINER_MARKER);
        self.surface.clear_children();
        self.entries.clear();
        self.input = InputState::default();
        self.focused = false;
        self.on_change = None;
        self.layout = EditorLayout::default();
        debug!("editor destructed");
    }

    // ===== Event handling =====

    /// Feed a widget-level event through the input and mouse handlers.
    ///
    /// Key and paste events are ignored while the input control is not
    /// focused; blur commits pending text regardless.
    pub fn handle_event(&mut self, event: InputEvent) {
        if self.destructed {
            return;
        }
        match event {
            InputEvent::Key(key) => {
                if !self.focused {
                    return;
                }
                if let Some(action) = input_handler::interpret_key(key) {
                    self.apply(action);
                }
            }
            InputEvent::Paste(text) => {
                if !self.focused {
                    return;
                }
                self.apply(EditorAction::PasteText(text));
            }
            InputEvent::Blur => {
                self.focused = false;
                self.commit_pending(Notify::Subscribers);
            }
            InputEvent::Click { column, row } => {
                match mouse_handler::route_click(column, row, &self.layout) {
                    ClickTarget::RemoveChip(value) => {
                        // the remove affordance swallows the click: no focus
                        self.apply(EditorAction::RemoveChip(value));
                    }
                    ClickTarget::Container => self.apply(EditorAction::FocusInput),
                    ClickTarget::Outside => {}
                }
            }
        }
    }

    fn apply(&mut self, action: EditorAction) {
        match action {
            EditorAction::InsertChar(ch) => {
                self.input = input_handler::handle_char(mem::take(&mut self.input), ch);
            }
            EditorAction::CursorLeft => {
                self.input = input_handler::handle_cursor_left(mem::take(&mut self.input));
            }
            EditorAction::CursorRight => {
                self.input = input_handler::handle_cursor_right(mem::take(&mut self.input));
            }
            EditorAction::Commit => self.commit_pending(Notify::Subscribers),
            EditorAction::DeleteBack => {
                let (state, outcome) = input_handler::handle_backspace(mem::take(&mut self.input));
                self.input = state;
                if outcome == BackspaceOutcome::RemoveLastChip {
                    self.remove_last_entry(Notify::Subscribers);
                }
            }
            EditorAction::RemoveChip(value) => self.remove_entry(&value, Notify::Subscribers),
            EditorAction::PasteText(text) => {
                for piece in input_handler::split_paste(&text) {
                    self.add_entry(&piece, Notify::Subscribers);
                }
            }
            EditorAction::FocusInput => self.focused = true,
        }
    }

    fn commit_pending(&mut self, notify: Notify) {
        let (state, pending) = input_handler::take_pending(mem::take(&mut self.input));
        self.input = state;
        if let Some(text) = pending {
            self.add_entry(&text, notify);
        }
    }

    fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|entry| entry.value() == value)
    }

    fn emit(&mut self, notify: Notify) {
        if notify == Notify::Silent || self.on_change.is_none() {
            return;
        }
        let values = self.values();
        if let Some(listener) = self.on_change.as_mut() {
            listener.on_change(&values);
        }
    }

    // ===== Accessors =====

    /// The surface as currently synchronized with the model.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Entries in append order; the projection reads these.
    pub fn entries(&self) -> &[EmailEntry] {
        &self.entries
    }

    /// Pending text in the input control.
    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    /// Cursor byte offset within the pending text.
    pub fn input_cursor(&self) -> usize {
        self.input.cursor()
    }

    /// Placeholder shown while the input control is empty.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Give the input control keyboard focus (e.g. on startup).
    pub fn focus(&mut self) {
        if !self.destructed {
            self.focused = true;
        }
    }

    /// Record the geometry of the last projection for click routing.
    pub fn note_layout(&mut self, layout: EditorLayout) {
        self.layout = layout;
    }
}

impl fmt::Debug for ChipEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChipEditor")
            .field("entries", &self.entries)
            .field("input", &self.input)
            .field("focused", &self.focused)
            .field("destructed", &self.destructed)
            .finish_non_exhaustive()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
