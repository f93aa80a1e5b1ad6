//! huffman/topology.rs
//! Pre-order tree serialization: the alternate header layout.
//!
//! Layout, per node in pre-order (node, zero subtree, one subtree):
//!
//! ```text
//! internal: 0
//! leaf:     1 s7 s6 s5 s4 s3 s2 s1 s0
//! ```
//!
//! Weights are not carried. A tree read back has identical codes and
//! all-zero weights. The compress/decompress pipelines never use this
//! layout; they persist the frequency table instead.

use crate::bitio::{BitSink, BitSource};
use crate::constants::SYMBOL_COUNT;
use crate::huffman::types::{HuffmanError, HuffmanTree, Node, NodeId, MAX_NODES};

impl HuffmanTree {
    /// Serialize the tree shape and leaf symbols to `sink`.
    pub fn write_topology<S: BitSink>(&self, sink: &mut S) -> Result<(), HuffmanError> {
        if self.is_empty() {
            return Err(HuffmanError::EmptyTree);
        }
        self.write_subtree(self.root, sink)
    }

    fn write_subtree<S: BitSink>(&self, id: NodeId, sink: &mut S) -> Result<(), HuffmanError> {
        let node = self.node(id);
        match node.children() {
            None => {
                sink.write_bit(true)?;
                sink.write_bits(u64::from(node.symbol), 8)?;
            }
            Some([zero, one]) => {
                sink.write_bit(false)?;
                self.write_subtree(zero, sink)?;
                self.write_subtree(one, sink)?;
            }
        }
        Ok(())
    }

    /// Rebuild a tree from a pre-order topology.
    pub fn read_topology<S: BitSource>(source: &mut S) -> Result<Self, HuffmanError> {
        let mut nodes = Vec::new();
        let mut leaves = [None; SYMBOL_COUNT];
        let root = read_subtree(source, &mut nodes, &mut leaves, None)?;
        Ok(HuffmanTree { nodes, root, leaves })
    }
}

fn read_subtree<S: BitSource>(
    source: &mut S,
    nodes: &mut Vec<Node>,
    leaves: &mut [Option<NodeId>; SYMBOL_COUNT],
    parent: Option<NodeId>,
) -> Result<NodeId, HuffmanError> {
    if nodes.len() >= MAX_NODES {
        return Err(HuffmanError::InvalidTopology(format!("more than {MAX_NODES} nodes")));
    }
    let id = NodeId::new(nodes.len());

    if source.read_bit()? {
        let mut symbol = 0u8;
        for _ in 0..8 {
            symbol = (symbol << 1) | u8::from(source.read_bit()?);
        }
        if leaves[symbol as usize].is_some() {
            return Err(HuffmanError::InvalidTopology(format!(
                "symbol 0x{symbol:02x} appears twice"
            )));
        }
        let mut leaf = Node::leaf(symbol, 0);
        leaf.parent = parent;
        nodes.push(leaf);
        leaves[symbol as usize] = Some(id);
    } else {
        // Children are filled in once both subtrees are read.
        let mut internal = Node::internal(0, id, id);
        internal.parent = parent;
        nodes.push(internal);
        let zero = read_subtree(source, nodes, leaves, Some(id))?;
        let one = read_subtree(source, nodes, leaves, Some(id))?;
        nodes[id.index()].children = Some([zero, one]);
    }

    Ok(id)
}
