//! The retained container surface the widget attaches to.
//!
//! A surface is a small tree of nodes, each carrying namespaced markers,
//! an optional lookup key, literal text, and children. The host hands an
//! empty surface to the editor at construction; the editor owns it
//! exclusively until `destruct` and keeps it synchronized with the
//! authoritative entry collection. Styling layers and tests identify nodes
//! through the markers and keys, never through their position in source.

/// Marker placed on the container itself while the widget is attached.
pub const CONTAINER_MARKER: &str = "cbx-container";

/// Marker on the single input control node.
pub const INPUT_MARKER: &str = "cbx-input";

/// Marker on every chip node.
pub const CHIP_MARKER: &str = "cbx-chip";

/// Additional marker on chips whose value failed classification.
pub const CHIP_INVALID_MARKER: &str = "cbx-chip--invalid";

/// Marker on the remove affordance embedded in each chip.
pub const CHIP_REMOVE_MARKER: &str = "cbx-chip-remove";

/// What a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A removable chip holding one entry.
    Chip,
    /// The small interactive element inside a chip that removes it.
    RemoveAffordance,
    /// The single-line text control.
    Input,
}

/// One node in the surface tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceNode {
    kind: NodeKind,
    markers: Vec<String>,
    key: Option<String>,
    text: String,
    children: Vec<SurfaceNode>,
}

impl SurfaceNode {
    /// Create a node with no markers, key, or children.
    pub fn new(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            markers: Vec::new(),
            key: None,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Set the lookup key. Chips and remove affordances carry the raw entry
    /// value here.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn children(&self) -> &[SurfaceNode] {
        &self.children
    }

    /// Append a marker. Markers accumulate; adding the same marker twice is
    /// harmless but not deduplicated.
    pub fn add_marker(&mut self, marker: &str) {
        self.markers.push(marker.to_string());
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    pub fn push_child(&mut self, child: SurfaceNode) {
        self.children.push(child);
    }
}

/// The container: an ordered list of child nodes plus its own markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    markers: Vec<String>,
    children: Vec<SurfaceNode>,
}

impl Surface {
    /// An empty surface, ready to hand to the editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the surface has no children at all.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn children(&self) -> &[SurfaceNode] {
        &self.children
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn add_marker(&mut self, marker: &str) {
        self.markers.push(marker.to_string());
    }

    pub fn remove_marker(&mut self, marker: &str) {
        self.markers.retain(|m| m != marker);
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    pub fn push_child(&mut self, child: SurfaceNode) {
        self.children.push(child);
    }

    /// Insert a child at `index`, clamped to the current child count.
    pub fn insert_child(&mut self, index: usize, child: SurfaceNode) {
        let index = index.min(self.children.len());
        self.children.insert(index, child);
    }

    /// Detach and return the child at `index`, or `None` when out of bounds.
    pub fn remove_child(&mut self, index: usize) -> Option<SurfaceNode> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Position of the first child whose key equals `key`.
    pub fn position_by_key(&self, key: &str) -> Option<usize> {
        self.children.iter().position(|c| c.key() == Some(key))
    }

    /// Children that carry the given marker, in order.
    pub fn children_with_marker<'a>(&'a self, marker: &'a str) -> impl Iterator<Item = &'a SurfaceNode> {
        self.children.iter().filter(move |c| c.has_marker(marker))
    }
}
