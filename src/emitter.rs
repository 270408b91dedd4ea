use std::io::Write;

use crate::huffman::CodeTable;

/// Writes the code table in the line-oriented text format
/// `<symbol>: <bit string>`, one line per code word.
///
/// The symbol is written as its raw byte value, so lines are only printable
/// where the source alphabet is. The writer is flushed before returning,
/// which surfaces buffered write failures to the caller instead of losing
/// them on drop.
pub fn write_code_table<W: Write>(writer: &mut W, table: &CodeTable) -> std::io::Result<()> {
    for word in table.words() {
        writer.write_all(&[word.symbol()])?;
        writeln!(writer, ": {}", word.bit_string())?;
    }
    writer.flush()
}
