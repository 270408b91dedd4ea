use std::{
    fs::{File, OpenOptions},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use log::{debug, info};

pub use cli::CLIParser;
use error::Error;
use frequency::FrequencyCensus;
use huffman::{CodeTable, HuffmanTree};

mod cli;
pub mod emitter;
mod error;
pub mod frequency;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: Option<PathBuf>,
    sort_by_symbol: bool,
}

impl Arguments {
    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e))
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e))
}

pub fn generate_code_table(arguments: &Arguments) -> Result<()> {
    let input_path = arguments.input_file.display().to_string();
    let input_file = open_input_file(&arguments.input_file)?;
    let census = FrequencyCensus::from_reader(&input_file)
        .map_err(|e| Error::UnableToReadFromInputFile(input_path.clone(), e))?;
    if census.distinct_symbols() == 0 {
        return Err(Error::InputStreamContainsNoSymbols(input_path));
    }
    info!(
        "Counted {} bytes with {} distinct symbols in '{}'",
        census.total_symbols(),
        census.distinct_symbols(),
        input_path
    );
    let frequencies = census.to_symbol_frequencies();
    logger::log_frequencies(&frequencies);
    let tree = HuffmanTree::build(&frequencies).map_err(Error::CodingFailed)?;
    debug!("Coding tree:\n{}", tree);
    let mut table = CodeTable::from_tree(&tree);
    if arguments.sort_by_symbol {
        table.sort_by_symbol();
    }
    let encoded_bits = table.total_encoded_bits(&frequencies);
    let unencoded_bits = census.total_symbols() * 8;
    info!(
        "Encoding the input would take {} of {} bits ({:.1}% of the unencoded size)",
        encoded_bits,
        unencoded_bits,
        100.0 * encoded_bits as f64 / unencoded_bits as f64
    );
    write_table_to_sink(arguments, &table)
}

fn write_table_to_sink(arguments: &Arguments, table: &CodeTable) -> Result<()> {
    match &arguments.output_file {
        Some(path) => {
            let output_file = open_output_file(path)?;
            let mut writer = BufWriter::new(&output_file);
            emitter::write_code_table(&mut writer, table)
                .map_err(|e| Error::UnableToWriteCodeTableToFile(path.display().to_string(), e))
        }
        None => emitter::write_code_table(&mut io::stdout().lock(), table)
            .map_err(Error::UnableToWriteCodeTableToConsole),
    }
}
