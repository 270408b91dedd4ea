use std::io::{BufRead, BufReader, Read};

use crate::huffman::{Symbol, SymbolFrequency};

/// Occurrence counts for every byte value of a source stream, together with
/// the order in which distinct bytes were first seen.
///
/// The first-seen order decides the layout of the heap the coding tree is
/// built from, so counting the same stream twice always leads to the same
/// tree and the same code table.
pub struct FrequencyCensus {
    occurrences: [u64; 256],
    discovery_order: Vec<Symbol>,
}

impl FrequencyCensus {
    fn new() -> Self {
        Self {
            occurrences: [0; 256],
            discovery_order: Vec::new(),
        }
    }

    /// Counts every byte of `reader` until end of stream. All 256 byte
    /// values are ordinary symbols, including 0x00 and 0xFF.
    pub fn from_reader<R: Read>(reader: R) -> std::io::Result<FrequencyCensus> {
        let mut census = FrequencyCensus::new();
        let mut buffered = BufReader::new(reader);
        loop {
            let consumed = {
                let chunk = buffered.fill_buf()?;
                if chunk.is_empty() {
                    break;
                }
                for &byte in chunk {
                    census.increment_symbol(byte);
                }
                chunk.len()
            };
            buffered.consume(consumed);
        }
        Ok(census)
    }

    fn increment_symbol(&mut self, symbol: Symbol) {
        if self.occurrences[symbol as usize] == 0 {
            self.discovery_order.push(symbol);
        }
        self.occurrences[symbol as usize] += 1;
    }

    pub fn distinct_symbols(&self) -> usize {
        self.discovery_order.len()
    }

    pub fn total_symbols(&self) -> u64 {
        self.occurrences.iter().sum()
    }

    /// Frequencies of the symbols that occur, in first-seen order.
    pub fn to_symbol_frequencies(&self) -> Vec<SymbolFrequency> {
        self.discovery_order
            .iter()
            .map(|&symbol| SymbolFrequency::new(symbol, self.occurrences[symbol as usize]))
            .collect()
    }
}

impl FromIterator<u8> for FrequencyCensus {
    fn from_iter<T: IntoIterator<Item = u8>>(bytes: T) -> Self {
        let mut census = FrequencyCensus::new();
        for byte in bytes {
            census.increment_symbol(byte);
        }
        census
    }
}
