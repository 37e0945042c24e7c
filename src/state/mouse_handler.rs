//! Mouse click routing (pure).
//!
//! Maps click coordinates to a target using the geometry recorded by the
//! last projection. The remove affordance is checked before the container
//! hit box, so a removal click never doubles as a focus click.

use crate::view::EditorLayout;
use ratatui::layout::Rect;

/// Where a click landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// The remove affordance of the chip holding this value.
    RemoveChip(String),
    /// The widget background, a chip body, or the input region: the input
    /// control should take focus.
    Container,
    /// Outside the widget entirely.
    Outside,
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Route a click through the last rendered layout.
pub fn route_click(column: u16, row: u16, layout: &EditorLayout) -> ClickTarget {
    for chip in &layout.chips {
        if contains(chip.remove_area, column, row) {
            return ClickTarget::RemoveChip(chip.value.clone());
        }
    }
    if contains(layout.area, column, row) {
        ClickTarget::Container
    } else {
        ClickTarget::Outside
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
