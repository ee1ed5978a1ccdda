//! Per-frame scene tree used for hit testing and containment checks.
//!
//! Views register a node for every interactive region while they paint, in
//! paint order and always parent before child. A pointer position resolves to
//! the most recently painted node under it, and ancestry queries answer "is
//! this target inside that window" the same way a DOM `contains` call does.

use ratatui::layout::Rect;

use crate::geometry::rect_contains;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node<T> {
    parent: Option<NodeId>,
    rect: Rect,
    tag: T,
}

#[derive(Debug, Clone)]
pub struct SceneTree<T: Copy> {
    nodes: Vec<Node<T>>,
}

impl<T: Copy> Default for SceneTree<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T: Copy + PartialEq> SceneTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn insert(&mut self, parent: Option<NodeId>, rect: Rect, tag: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { parent, rect, tag });
        id
    }

    pub fn tag(&self, id: NodeId) -> Option<T> {
        self.nodes.get(id.0).map(|node| node.tag)
    }

    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.nodes.get(id.0).map(|node| node.rect)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    /// First node carrying `tag`.
    pub fn find(&self, tag: T) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.tag == tag)
            .map(NodeId)
    }

    /// Topmost node under the pointer.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<NodeId> {
        self.nodes
            .iter()
            .rposition(|node| rect_contains(node.rect, column, row))
            .map(NodeId)
    }

    /// True when `node` is `ancestor` or lies in its subtree.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Walk from `node` to the root, returning the first tag matching `pick`.
    pub fn closest<U>(&self, node: NodeId, mut pick: impl FnMut(T) -> Option<U>) -> Option<U> {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if let Some(found) = self.tag(current).and_then(&mut pick) {
                return Some(found);
            }
            cursor = self.parent(current);
        }
        None
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
