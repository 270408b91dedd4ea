use std::fmt::Display;

pub mod code;
pub mod heap;
pub mod tree;

pub use code::{CodeTable, CodeWord};
pub use heap::NodeHeap;
pub use tree::{HuffmanNode, HuffmanTree};

/// One coding symbol, a single byte of the source alphabet.
pub type Symbol = u8;

/// A symbol paired with its occurrence count in the source stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: u64,
}

impl SymbolFrequency {
    pub fn new(symbol: Symbol, frequency: u64) -> Self {
        Self { symbol, frequency }
    }
}

impl From<(Symbol, u64)> for SymbolFrequency {
    fn from(value: (Symbol, u64)) -> Self {
        Self {
            symbol: value.0,
            frequency: value.1,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum CodingError {
    EmptyAlphabet,
    ExtractFromEmptyHeap,
    ZeroHeapCapacity,
}

impl Display for CodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAlphabet => {
                write!(f, "No symbol in the alphabet has a non-zero count")
            }
            Self::ExtractFromEmptyHeap => {
                write!(f, "Minimum extraction was requested from an empty node heap")
            }
            Self::ZeroHeapCapacity => {
                write!(f, "Node heap capacity must hold at least one node")
            }
        }
    }
}

impl std::error::Error for CodingError {}
