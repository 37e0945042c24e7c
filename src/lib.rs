//! chipbox
//!
//! A tag-style ("chip") editor widget for lists of email addresses,
//! rendered with ratatui. The editor owns a retained container surface;
//! typing, pasting, or calling the public operations turns values into
//! removable chips, and a change listener receives the full ordered value
//! list after every non-silent mutation.
//!
//! The authoritative state is the editor's entry collection; the surface
//! and the terminal projection are kept in sync with it, never consulted
//! to answer queries.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod surface;
pub mod validate;
pub mod view;

pub use model::{ConstructionError, EmailEntry, InputEvent};
pub use state::{ChangeListener, ChipEditor, EditorOptions, Notify};
pub use surface::Surface;
pub use validate::is_valid_email;
pub use view::{ChipStyles, ColorConfig};

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
