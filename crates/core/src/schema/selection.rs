//! Selection range hierarchies (i.e. "expand selection").
//!
//! Nodes are stored in an arena and link to their parents by index.
//! A parent is always added before its children so parent chains are finite and acyclic.

use crate::Range;

/// Identifies a node in a [`SelectionRanges`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionId(usize);

/// A selection range and the range that contains it (if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionNode {
    pub range: Range,
    pub parent: Option<SelectionId>,
}

/// An arena of selection range nodes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionRanges {
    nodes: Vec<SelectionNode>,
}

impl SelectionRanges {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its id.
    ///
    /// A `parent` that isn't in this arena is ignored.
    pub fn push(&mut self, range: Range, parent: Option<SelectionId>) -> SelectionId {
        let id = SelectionId(self.nodes.len());
        self.nodes.push(SelectionNode {
            range,
            parent: parent.filter(|parent| parent.0 < id.0),
        });
        id
    }

    /// Adds a chain of ranges ordered from the innermost to the outermost range,
    /// and returns the id of the innermost node (if any).
    pub fn push_chain(&mut self, ranges: impl IntoIterator<Item = Range>) -> Option<SelectionId> {
        let ranges: Vec<Range> = ranges.into_iter().collect();
        ranges
            .into_iter()
            .rev()
            .fold(None, |parent, range| Some(self.push(range, parent)))
    }

    /// Returns the node (if any).
    pub fn get(&self, id: SelectionId) -> Option<&SelectionNode> {
        self.nodes.get(id.0)
    }

    /// Returns the node's parent (if any).
    pub fn parent(&self, id: SelectionId) -> Option<SelectionId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// Returns an iterator over the node and its ancestors (from the innermost to the outermost node).
    pub fn chain(&self, id: SelectionId) -> impl Iterator<Item = (SelectionId, &SelectionNode)> {
        let mut next = self.get(id).map(|node| (id, node));
        std::iter::from_fn(move || {
            let current = next?;
            next = current
                .1
                .parent
                .and_then(|parent| self.get(parent).map(|node| (parent, node)));
            Some(current)
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
