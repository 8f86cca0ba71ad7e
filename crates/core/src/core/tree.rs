//! Huffman tree storage.
//!
//! Nodes live in a single arena owned by [`HuffmanTree`] and refer to each
//! other by [`NodeId`]. Child links are the ownership structure; the parent
//! link is a plain back-reference into the same arena.

use compact_str::CompactString;
use std::fmt::Write;

use crate::error::{HuffError, Result};

/// Index of a node inside its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Leaf: symbol frequency. Internal: sum of both children.
    pub weight: u64,
    /// Leaf: the symbol. Internal: left label followed by right label.
    pub label: CompactString,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

impl TreeNode {
    fn leaf(weight: u64, label: CompactString) -> Self {
        Self {
            weight,
            label,
            left: None,
            right: None,
            parent: None,
        }
    }

    /// Left child, if any.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child, if any.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Parent back-reference. `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// A leaf has neither child.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena used while a tree is being assembled.
///
/// Every merge takes two existing roots and makes them the children of a new
/// node, so the result is always a strict binary tree.
#[derive(Debug, Default)]
pub struct TreeArena {
    nodes: Vec<TreeNode>,
}

impl TreeArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create an arena sized for `leaves` leaves (and their merges).
    pub fn with_leaves(leaves: usize) -> Self {
        Self {
            nodes: Vec::with_capacity((2 * leaves).saturating_sub(1)),
        }
    }

    /// Add a leaf.
    pub fn leaf(&mut self, weight: u64, label: impl Into<CompactString>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::leaf(weight, label.into()));
        id
    }

    /// Join two parentless nodes under a new parent.
    ///
    /// `left` and `right` keep that order; the parent's weight is the sum of
    /// both and its label is their concatenation. A sum past `u64::MAX` is an
    /// error.
    pub fn merge(&mut self, left: NodeId, right: NodeId) -> Result<NodeId> {
        if left == right {
            return Err(HuffError::InvalidArgument(
                "cannot merge a node with itself".to_string(),
            ));
        }

        let (weight, label) = {
            let l = self.node(left)?;
            let r = self.node(right)?;
            if l.parent.is_some() || r.parent.is_some() {
                return Err(HuffError::InvalidArgument(
                    "merged nodes must not already have a parent".to_string(),
                ));
            }

            let weight = l.weight.checked_add(r.weight).ok_or_else(|| {
                HuffError::InvalidArgument("total weight overflows u64".to_string())
            })?;

            let mut label = CompactString::with_capacity(l.label.len() + r.label.len());
            label.push_str(&l.label);
            label.push_str(&r.label);
            (weight, label)
        };

        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            weight,
            label,
            left: Some(left),
            right: Some(right),
            parent: None,
        });
        self.nodes[left.0].parent = Some(id);
        self.nodes[right.0].parent = Some(id);

        Ok(id)
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Result<&TreeNode> {
        self.nodes.get(id.0).ok_or(HuffError::IndexOutOfRange {
            index: id.0,
            len: self.nodes.len(),
        })
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no node was allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finish the tree with `root` as its root.
    pub fn into_tree(self, root: NodeId) -> Result<HuffmanTree> {
        let node = self.node(root)?;
        if node.parent.is_some() {
            return Err(HuffError::InvalidArgument(
                "tree root must not have a parent".to_string(),
            ));
        }

        Ok(HuffmanTree {
            nodes: self.nodes,
            root,
        })
    }
}

/// A finished Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<TreeNode>,
    root: NodeId,
}

impl HuffmanTree {
    /// The root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Access a node. Ids handed out by this tree are always valid.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Left child of `id`.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).left
    }

    /// Right child of `id`.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).right
    }

    /// Parent of `id`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Whether `id` is a leaf.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).is_leaf()
    }

    /// Weight of the whole tree (the root weight).
    pub fn weight(&self) -> u64 {
        self.node(self.root).weight
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A finished tree always holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of all leaves, in allocation order.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_leaf())
            .map(|(i, _)| NodeId(i))
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Ids from `id` up to and including the root.
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path
    }

    /// Distance from the root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.path_to_root(id).len() - 1
    }

    /// Root-to-node path as '0' (left) and '1' (right), following parent links.
    pub fn path_bits(&self, id: NodeId) -> String {
        let path = self.path_to_root(id);
        let mut bits: Vec<char> = path
            .windows(2)
            .map(|pair| {
                if self.left(pair[1]) == Some(pair[0]) {
                    '0'
                } else {
                    '1'
                }
            })
            .collect();
        bits.reverse();
        bits.into_iter().collect()
    }

    /// Render the tree sideways, one `weight:label` per line.
    ///
    /// Right subtrees are printed above their parent, left subtrees below.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_node(self.root, 0, &mut out);
        out
    }

    fn render_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let node = self.node(id);
        if let Some(right) = node.right {
            self.render_node(right, depth + 1, out);
        }
        let _ = writeln!(out, "{}{}:{}", "    ".repeat(depth), node.weight, node.label);
        if let Some(left) = node.left {
            self.render_node(left, depth + 1, out);
        }
    }
}
