use std::fmt::{Display, Formatter};

use super::heap::NodeHeap;
use super::{CodingError, Symbol, SymbolFrequency};

/// A node of the coding tree. Leaves carry a source symbol, internal nodes
/// only the combined weight of their subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn leaf(symbol: Symbol, weight: u64) -> Self {
        HuffmanNode::Leaf { symbol, weight }
    }

    pub fn merge(left: HuffmanNode, right: HuffmanNode) -> Self {
        let weight = left.weight() + right.weight();
        HuffmanNode::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    fn fmt_indented(&self, f: &mut Formatter<'_>, depth: usize) -> std::fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            HuffmanNode::Leaf { symbol, weight } => {
                writeln!(f, "{}leaf symbol=0x{:02X} weight={}", indent, symbol, weight)
            }
            HuffmanNode::Internal {
                weight,
                left,
                right,
            } => {
                writeln!(f, "{}node weight={}", indent, weight)?;
                left.fmt_indented(f, depth + 1)?;
                right.fmt_indented(f, depth + 1)
            }
        }
    }
}

/// Huffman coding tree over the symbols that occur in the source stream.
///
/// The tree is built with the textbook greedy construction: every symbol
/// starts out as a leaf in a min-heap, then the two lowest-weight nodes are
/// merged repeatedly until one root remains. The first node extracted per
/// round becomes the left child, the second the right child. Together with
/// the strict weight comparisons of [`NodeHeap`] this makes the tree shape a
/// pure function of the frequency input order.
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    pub fn build(frequencies: &[SymbolFrequency]) -> Result<HuffmanTree, CodingError> {
        let leaves: Vec<HuffmanNode> = frequencies
            .iter()
            .filter(|f| f.frequency > 0)
            .map(|f| HuffmanNode::leaf(f.symbol, f.frequency))
            .collect();
        if leaves.is_empty() {
            return Err(CodingError::EmptyAlphabet);
        }
        let mut heap = NodeHeap::from_leaves(leaves)?;
        while !heap.is_size_one() {
            let left = heap.extract_min()?;
            let right = heap.extract_min()?;
            heap.insert(HuffmanNode::merge(left, right));
        }
        let root = heap.extract_min()?;
        Ok(HuffmanTree { root })
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }
}

impl Display for HuffmanTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.root.fmt_indented(f, 0)
    }
}

#[cfg(test)]
mod test {
    use super::super::{CodingError, SymbolFrequency};
    use super::{HuffmanNode, HuffmanTree};

    fn frequencies(pairs: &[(u8, u64)]) -> Vec<SymbolFrequency> {
        pairs.iter().map(|&p| SymbolFrequency::from(p)).collect()
    }

    fn collect_leaf_symbols(node: &HuffmanNode, symbols: &mut Vec<u8>) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => symbols.push(*symbol),
            HuffmanNode::Internal { left, right, .. } => {
                collect_leaf_symbols(left, symbols);
                collect_leaf_symbols(right, symbols);
            }
        }
    }

    fn sorted_leaf_symbols(tree: &HuffmanTree) -> Vec<u8> {
        let mut symbols = Vec::new();
        collect_leaf_symbols(tree.root(), &mut symbols);
        symbols.sort_unstable();
        symbols
    }

    #[test]
    fn test_root_weight_is_total_frequency() {
        let input = frequencies(&[
            (b'a', 45),
            (b'b', 13),
            (b'c', 12),
            (b'd', 16),
            (b'e', 9),
            (b'f', 5),
        ]);
        let tree = HuffmanTree::build(&input).unwrap();
        assert_eq!(tree.root().weight(), 100);
        assert_eq!(
            sorted_leaf_symbols(&tree),
            vec![b'a', b'b', b'c', b'd', b'e', b'f']
        );
        assert!(!tree.root().is_leaf());
    }

    #[test]
    fn test_first_extracted_node_becomes_left_child() {
        let input = frequencies(&[(b'a', 1), (b'b', 2)]);
        let tree = HuffmanTree::build(&input).unwrap();
        let expected = HuffmanNode::merge(HuffmanNode::leaf(b'a', 1), HuffmanNode::leaf(b'b', 2));
        assert_eq!(*tree.root(), expected);
    }

    #[test]
    fn test_single_symbol_tree_is_a_single_leaf() {
        let input = frequencies(&[(b'x', 7)]);
        let tree = HuffmanTree::build(&input).unwrap();
        assert_eq!(*tree.root(), HuffmanNode::leaf(b'x', 7));
        assert!(tree.root().is_leaf());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let result = HuffmanTree::build(&[]);
        assert!(matches!(result, Err(CodingError::EmptyAlphabet)));
    }

    #[test]
    fn test_all_zero_frequencies_are_rejected() {
        let input = frequencies(&[(b'a', 0), (b'b', 0)]);
        let result = HuffmanTree::build(&input);
        assert!(matches!(result, Err(CodingError::EmptyAlphabet)));
    }

    #[test]
    fn test_zero_frequency_symbols_are_dropped() {
        let input = frequencies(&[(b'a', 0), (b'b', 3), (b'c', 0), (b'd', 1)]);
        let tree = HuffmanTree::build(&input).unwrap();
        assert_eq!(tree.root().weight(), 4);
        assert_eq!(sorted_leaf_symbols(&tree), vec![b'b', b'd']);
    }

    #[test]
    fn test_tree_display_lists_every_node() {
        let input = frequencies(&[(b'a', 1), (b'b', 2)]);
        let tree = HuffmanTree::build(&input).unwrap();
        let rendered = tree.to_string();
        assert!(rendered.contains("node weight=3"));
        assert!(rendered.contains("leaf symbol=0x61 weight=1"));
        assert!(rendered.contains("leaf symbol=0x62 weight=2"));
    }
}
