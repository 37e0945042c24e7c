//! Terminal projection (pure) and the demo app shell (impure).

pub mod app;
pub mod chips;
pub mod nodes;
pub mod styles;

pub use chips::{compute_layout, render_editor, ChipRegion, EditorLayout};
pub use styles::{ChipStyles, ColorConfig};
