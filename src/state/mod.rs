//! Editor state: pure transition handlers plus the owning controller.
//!
//! The handlers (`input_handler`, `mouse_handler`) are pure functions
//! testable without a terminal; `editor` owns the state they transform.

pub mod editor;
pub mod input_handler;
pub mod mouse_handler;

// Re-export for convenience
pub use editor::{ChangeListener, ChipEditor, EditorOptions, Notify};
pub use input_handler::{BackspaceOutcome, InputState};
pub use mouse_handler::ClickTarget;
