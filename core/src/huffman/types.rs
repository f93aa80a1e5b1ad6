//! huffman/types.rs
//! Tree, node and code types plus the tree error.

use std::fmt;

use crate::bitio::BitIoError;
use crate::constants::SYMBOL_COUNT;

/// Upper bound on arena size: a full binary tree over 256 leaves.
pub const MAX_NODES: usize = 2 * SYMBOL_COUNT - 1;

/// Index of a node inside its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u16);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(index < MAX_NODES);
        NodeId(index as u16)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One tree vertex. Exactly zero or two children, never one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Sum of the frequencies of every leaf below (or at) this node.
    pub weight: u64,
    /// Byte value; meaningful on leaves only.
    pub symbol: u8,
    pub(crate) children: Option<[NodeId; 2]>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn leaf(symbol: u8, weight: u64) -> Self {
        Self { weight, symbol, children: None, parent: None }
    }

    pub(crate) fn internal(weight: u64, zero: NodeId, one: NodeId) -> Self {
        Self { weight, symbol: 0, children: Some([zero, one]), parent: None }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// `[zero_child, one_child]` for internal nodes.
    #[inline]
    pub fn children(&self) -> Option<[NodeId; 2]> {
        self.children
    }

    /// Non-owning back-reference; `None` at the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Huffman coding tree over at most 256 leaf symbols.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: NodeId,
    pub(crate) leaves: [Option<NodeId>; SYMBOL_COUNT],
}

impl HuffmanTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True for the placeholder tree built from an all-zero table.
    pub fn is_empty(&self) -> bool {
        self.leaves.iter().all(Option::is_none)
    }

    /// True when the root is itself the only leaf (zero-length codes).
    pub fn is_degenerate(&self) -> bool {
        !self.is_empty() && self.node(self.root).is_leaf()
    }

    /// O(1) leaf lookup by symbol.
    #[inline]
    pub fn leaf(&self, symbol: u8) -> Option<NodeId> {
        self.leaves[symbol as usize]
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.leaf(symbol).is_some()
    }

    /// Symbols with a leaf, ascending.
    pub fn symbols(&self) -> impl Iterator<Item = u8> + '_ {
        self.leaves
            .iter()
            .enumerate()
            .filter(|(_, leaf)| leaf.is_some())
            .map(|(s, _)| s as u8)
    }
}

/// A symbol's code, root-to-leaf, most significant bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub(crate) fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HuffmanError {
    /// Encode was asked for a symbol that had zero frequency.
    #[error("symbol 0x{symbol:02x} has no leaf in this tree")]
    SymbolNotPresent { symbol: u8 },

    /// The operation needs at least one leaf.
    #[error("tree has no symbols")]
    EmptyTree,

    /// A serialized topology could not be rebuilt into a tree.
    #[error("invalid tree topology: {0}")]
    InvalidTopology(String),

    #[error(transparent)]
    BitIo(#[from] BitIoError),
}
