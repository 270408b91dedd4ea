use std::env::args_os;
use std::process::ExitCode;

use huffman_codebook::{generate_code_table, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match generate_code_table(&arguments) {
        Ok(_) => {
            if let Some(path) = arguments.output_file() {
                println!("Code table written to '{}'", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Code table generation failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
