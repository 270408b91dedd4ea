use std::fmt::Display;

use crate::huffman::CodingError;

#[derive(Debug)]
pub enum Error {
    InputStreamContainsNoSymbols(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadFromInputFile(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    UnableToWriteCodeTableToFile(String, std::io::Error),
    UnableToWriteCodeTableToConsole(std::io::Error),
    CodingFailed(CodingError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputStreamContainsNoSymbols(path) => {
                write!(f, "Input file '{}' contains no symbols to code", path)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadFromInputFile(path, error) => {
                write!(f, "Unable to read from input file '{}': {}", path, error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::UnableToWriteCodeTableToFile(path, error) => {
                write!(
                    f,
                    "Unable to write code table to output file '{}': {}",
                    path, error
                )
            }
            Self::UnableToWriteCodeTableToConsole(error) => {
                write!(f, "Unable to write code table to console: {}", error)
            }
            Self::CodingFailed(error) => {
                write!(f, "Construction of the Huffman code failed: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {}
