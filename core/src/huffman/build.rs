//! huffman/build.rs
//! Priority-queue construction of the tree from a frequency table.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::constants::SYMBOL_COUNT;
use crate::frequency::FrequencyTable;
use crate::huffman::types::{HuffmanTree, Node, NodeId};

impl HuffmanTree {
    /// Build the tree for `table`.
    ///
    /// Nodes are extracted in `(weight, sequence)` order, where `sequence` is
    /// the creation index: leaves are created in ascending symbol order,
    /// internal nodes are numbered as they are merged. The first node
    /// extracted becomes the zero-child. The key is a total order, so the
    /// result depends on `table` alone.
    ///
    /// An all-zero table yields a placeholder root with no children; a
    /// single present symbol yields a root leaf with zero-length codes.
    pub fn build(table: &FrequencyTable) -> Self {
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * table.distinct().max(1));
        let mut leaves = [None; SYMBOL_COUNT];

        for (symbol, count) in table.present() {
            let id = NodeId::new(nodes.len());
            nodes.push(Node::leaf(symbol, count));
            leaves[symbol as usize] = Some(id);
        }

        if nodes.is_empty() {
            nodes.push(Node::leaf(0, 0));
            return HuffmanTree { nodes, root: NodeId::new(0), leaves };
        }

        // Sequence and arena index coincide, so NodeId is the tie-break key.
        let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| Reverse((node.weight, NodeId::new(i))))
            .collect();

        while let (Some(Reverse((w0, zero))), Some(Reverse((w1, one)))) = (heap.pop(), heap.pop()) {
            let id = NodeId::new(nodes.len());
            let weight = w0 + w1;
            nodes.push(Node::internal(weight, zero, one));
            nodes[zero.index()].parent = Some(id);
            nodes[one.index()].parent = Some(id);
            trace!(node = id.index(), weight, zero = zero.index(), one = one.index(), "merge");
            heap.push(Reverse((weight, id)));
        }

        // The last merged node (or the only leaf) is the root.
        let root = NodeId::new(nodes.len() - 1);
        HuffmanTree { nodes, root, leaves }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_weight_is_sum_of_children() {
        let table = FrequencyTable::from_bytes(b"abracadabra");
        let tree = HuffmanTree::build(&table);
        for node in &tree.nodes {
            if let Some([zero, one]) = node.children() {
                assert_eq!(node.weight, tree.node(zero).weight + tree.node(one).weight);
            }
        }
        assert_eq!(tree.node(tree.root()).weight, 11);
        assert_eq!(tree.len(), 2 * 5 - 1);
    }

    #[test]
    fn single_symbol_root_is_leaf() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(&[7u8; 10]));
        assert!(tree.is_degenerate());
        assert_eq!(tree.node(tree.root()).symbol, 7);
        assert_eq!(tree.leaf(7), Some(tree.root()));
    }

    #[test]
    fn empty_table_gives_placeholder() {
        let tree = HuffmanTree::build(&FrequencyTable::new());
        assert!(tree.is_empty());
        assert!(!tree.is_degenerate());
        assert!(tree.node(tree.root()).is_leaf());
    }
}
