use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use csv_to_json::{convert_to_path, output_path_for};

#[derive(clap::Parser, Debug)]
#[command(
    name = "csv-to-json",
    about = "Converts a CSV file into a JSON array of records, one object per data row"
)]
struct Args {
    /// Input CSV file path (prompted for interactively when omitted)
    input: Option<PathBuf>,

    /// Output JSON file path (defaults to <input base name>.json in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let input = match args.input {
        Some(path) => path,
        None => {
            let stdin = std::io::stdin();
            prompt_for_path(&mut std::io::stdout(), &mut stdin.lock())?
        }
    };

    let output = match args.output {
        Some(path) => path,
        None => output_path_for(&input)?,
    };

    convert_to_path(&input, &output)?;
    eprintln!("Wrote {}", output.display());

    Ok(())
}

/// Asks for an input path on `out` and reads one line back. The conversion
/// core never reads standard input; this is the only interactive piece.
fn prompt_for_path<W: Write, R: BufRead>(out: &mut W, input: &mut R) -> Result<PathBuf> {
    write!(out, "Please enter the path to the CSV file: ")?;
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read path from stdin")?;

    let path = line.trim();
    if path.is_empty() {
        anyhow::bail!("no input path given");
    }

    Ok(PathBuf::from(path))
}
