use huffman_codebook::emitter::write_code_table;
use huffman_codebook::frequency::FrequencyCensus;
use huffman_codebook::huffman::{CodeTable, HuffmanTree};
use std::io::stdout;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sample = b"abracadabra";

    let census = FrequencyCensus::from_iter(sample.iter().copied());
    let frequencies = census.to_symbol_frequencies();
    println!("symbol frequencies in discovery order");
    for frequency in &frequencies {
        println!("{}: {}", frequency.symbol as char, frequency.frequency);
    }

    let tree = HuffmanTree::build(&frequencies)?;
    println!("huffman tree\n{}", tree);

    let table = CodeTable::from_tree(&tree);
    println!("code table");
    write_code_table(&mut stdout().lock(), &table)?;

    println!(
        "encoded size: {} bits for {} input bytes",
        table.total_encoded_bits(&frequencies),
        census.total_symbols()
    );
    Ok(())
}
