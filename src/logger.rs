use crate::huffman::SymbolFrequency;

#[ctor::ctor]
fn init() {
    use log4rs;
    log4rs::init_file("log4rs.yaml", Default::default()).unwrap();
}

pub fn log_frequencies(frequencies: &[SymbolFrequency]) {
    fn format_symbol(symbol: u8) -> String {
        if symbol.is_ascii_graphic() {
            format!("'{}'", symbol as char)
        } else {
            format!("0x{:02X}", symbol)
        }
    }
    log::debug!(
        "Symbol frequencies in discovery order: {}",
        frequencies
            .iter()
            .map(|f| format!("{}={}", format_symbol(f.symbol), f.frequency))
            .collect::<Vec<String>>()
            .join(", ")
    );
}
