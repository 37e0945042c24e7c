//! Node factories for the retained surface (the tag renderer).
//!
//! These build the visual units the controller inserts into the surface.
//! The terminal projection in [`crate::view::chips`] draws from the model;
//! these nodes are what styling layers and tests address through markers
//! and keys.

use crate::surface::{
    NodeKind, SurfaceNode, CHIP_INVALID_MARKER, CHIP_MARKER, CHIP_REMOVE_MARKER, INPUT_MARKER,
};

/// Placeholder shown in the empty input control.
pub const DEFAULT_PLACEHOLDER: &str = "add more people...";

/// Glyph drawn for the remove affordance.
pub const REMOVE_GLYPH: &str = "×";

/// Build the chip node for one entry: the literal value as text, the value
/// as lookup key, the invalid marker when classification failed, and an
/// embedded remove affordance.
pub fn chip_node(value: &str, is_valid: bool) -> SurfaceNode {
    let mut chip = SurfaceNode::new(NodeKind::Chip, value).with_key(value);
    chip.add_marker(CHIP_MARKER);
    if !is_valid {
        chip.add_marker(CHIP_INVALID_MARKER);
    }
    chip.push_child(remove_node(value));
    chip
}

/// Build the remove affordance embedded in a chip. Carries the same key as
/// its chip so activation can name the value to remove.
pub fn remove_node(value: &str) -> SurfaceNode {
    let mut node = SurfaceNode::new(NodeKind::RemoveAffordance, REMOVE_GLYPH).with_key(value);
    node.add_marker(CHIP_REMOVE_MARKER);
    node
}

/// Build the single input control node. Its text is the placeholder.
pub fn input_node(placeholder: &str) -> SurfaceNode {
    let mut node = SurfaceNode::new(NodeKind::Input, placeholder);
    node.add_marker(INPUT_MARKER);
    node
}
