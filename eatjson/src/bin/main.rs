// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as _;
use eatjson::{Parser, ParserConfig};

/// Check whether files contain exactly one well-formed JSON value.
#[derive(clap::Parser)]
#[command(name = "eatjson", version, about, long_about = None)]
struct Args {
    /// Validate string escape sequences and reject raw control characters
    #[arg(long)]
    strict: bool,
    /// Reject documents with arrays/objects nested deeper than N
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,
    /// Files to check, `-` reads standard input
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn read_input(path: &PathBuf) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s)?;
        Ok(s)
    } else {
        fs::read_to_string(path)
    }
}

/// Checks every input in order and reports one line per input to `out`.
///
/// Returns the process status: 0 when all inputs are valid, 1 when any is
/// invalid, 2 as soon as an input cannot be read.
fn check_inputs(parser: &Parser, paths: &[PathBuf], out: &mut impl Write) -> io::Result<u8> {
    let mut status = 0;
    for path in paths {
        let text = match read_input(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error: Unable to read '{}': {}", path.display(), e);
                return Ok(2);
            }
        };

        match parser.validate(&text) {
            Ok(()) => writeln!(out, "{}: valid", path.display())?,
            Err(e) => {
                log::debug!("{}: rejected with {:?}", path.display(), e);
                writeln!(out, "{}: invalid: {}", path.display(), e)?;
                status = 1;
            }
        }
    }
    Ok(status)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut config = ParserConfig::new().with_strict(args.strict);
    if let Some(depth) = args.max_depth {
        config = config.with_max_depth(depth);
    }
    let parser = Parser::with_config(config);
    log::info!("Checking {} input(s) with {:?}", args.files.len(), config);

    match check_inputs(&parser, &args.files, &mut io::stdout().lock()) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("Error: Unable to write report: {}", e);
            ExitCode::from(2)
        }
    }
}
