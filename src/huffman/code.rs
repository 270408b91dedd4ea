use super::tree::{HuffmanNode, HuffmanTree};
use super::{Symbol, SymbolFrequency};

/// Variable-length bit pattern assigned to one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeWord {
    symbol: Symbol,
    bits: Vec<bool>,
}

impl CodeWord {
    fn new(symbol: Symbol, bits: Vec<bool>) -> Self {
        Self { symbol, bits }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Renders the pattern as a string of '0' and '1' characters, most
    /// significant bit first.
    pub fn bit_string(&self) -> String {
        self.bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
    }
}

/// The complete symbol-to-code mapping derived from one coding tree.
///
/// Words are stored in tree traversal order, left subtree before right
/// subtree. Because the tree shape is deterministic for a given frequency
/// input order, so is the order of this table.
pub struct CodeTable {
    words: Vec<CodeWord>,
}

impl CodeTable {
    /// Walks the tree depth-first and assigns 0 for every left edge and 1
    /// for every right edge on the path from the root to each leaf.
    pub fn from_tree(tree: &HuffmanTree) -> CodeTable {
        let mut words = Vec::new();
        let mut path = Vec::new();
        collect_codes(tree.root(), &mut path, &mut words);
        CodeTable { words }
    }

    pub fn words(&self) -> &[CodeWord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn sort_by_symbol(&mut self) {
        self.words.sort_by_key(|word| word.symbol());
    }

    /// Size in bits of the source stream after replacing every symbol
    /// occurrence with its code word.
    pub fn total_encoded_bits(&self, frequencies: &[SymbolFrequency]) -> u64 {
        let mut lengths = [0u64; 256];
        for word in &self.words {
            lengths[word.symbol() as usize] = word.len() as u64;
        }
        frequencies
            .iter()
            .map(|f| f.frequency * lengths[f.symbol as usize])
            .sum()
    }
}

fn collect_codes(node: &HuffmanNode, path: &mut Vec<bool>, words: &mut Vec<CodeWord>) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            // A one-leaf tree leaves the root path empty. The lone symbol
            // still needs a code of at least one bit, so it is fixed to 0.
            let bits = if path.is_empty() {
                vec![false]
            } else {
                path.clone()
            };
            words.push(CodeWord::new(*symbol, bits));
        }
        HuffmanNode::Internal { left, right, .. } => {
            path.push(false);
            collect_codes(left, path, words);
            path.pop();
            path.push(true);
            collect_codes(right, path, words);
            path.pop();
        }
    }
}
