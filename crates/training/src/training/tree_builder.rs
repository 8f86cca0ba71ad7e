//! Huffman tree construction.
//!
//! Greedy merge: every symbol starts as a leaf, and the two lowest-ordered
//! nodes are joined under a new parent until one node is left. Nodes order by
//! weight, then label, so the resulting tree (and every code derived from it)
//! is fully determined by the frequency table.

use super::counter::FrequencyTable;
use huffer_core::{CodeTable, HuffmanTree, MergeEntry, QueueKind, Result, TreeArena};
use serde::{Deserialize, Serialize};

/// Configuration for tree construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Priority structure used for the merge loop
    pub queue: QueueKind,
}

/// Huffman tree builder.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    config: BuildConfig,
}

impl TreeBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Create a builder that merges through the given queue kind.
    pub fn with_queue(queue: QueueKind) -> Self {
        Self::new(BuildConfig { queue })
    }

    /// The builder configuration.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build the tree for a frequency table.
    ///
    /// Returns `Ok(None)` for an empty table. A table with a single symbol
    /// yields a tree whose root is that symbol's leaf.
    pub fn build(&self, frequencies: &FrequencyTable) -> Result<Option<HuffmanTree>> {
        if frequencies.is_empty() {
            return Ok(None);
        }

        let mut arena = TreeArena::with_leaves(frequencies.len());
        let mut queue = self.config.queue.create(frequencies.len());

        for (symbol, count) in frequencies.iter() {
            if count < 0 {
                tracing::warn!(%symbol, count, "negative frequency clamped to zero");
            }
            let weight = count.max(0) as u64;
            let node = arena.leaf(weight, symbol.clone());
            queue.push(MergeEntry::new(weight, symbol.clone(), node));
        }

        // Main loop: join the two lightest nodes until one is left
        while queue.len() > 1 {
            let (Some(left), Some(right)) = (queue.pop_min(), queue.pop_min()) else {
                break;
            };

            let parent = arena.merge(left.node, right.node)?;
            let node = arena.node(parent)?;
            tracing::trace!(
                left = %left.label,
                right = %right.label,
                weight = node.weight,
                "merged nodes"
            );
            queue.push(MergeEntry::new(node.weight, node.label.clone(), parent));
        }

        let Some(root) = queue.pop_min() else {
            return Ok(None);
        };

        let tree = arena.into_tree(root.node)?;
        tracing::debug!(
            leaves = frequencies.len(),
            nodes = tree.len(),
            weight = tree.weight(),
            queue = ?self.config.queue,
            "built huffman tree"
        );

        Ok(Some(tree))
    }

    /// Build the tree and derive its code table in one step.
    pub fn build_codes(&self, frequencies: &FrequencyTable) -> Result<CodeTable> {
        let tree = self.build(frequencies)?;
        Ok(CodeTable::from_tree(tree.as_ref()))
    }
}
