use anyhow::Result;
use clap::Parser;
use insta_tablegen::{init_tracing_once, TableGen};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Build post, hashtag and account CSV tables from a folder of `.json.xz` post metadata.
/// The tables are written next to the folder, named after it.
#[derive(Parser)]
#[command(name = "insta-tablegen", version)]
struct Cli {
    /// Folder containing the `.json.xz` metadata files
    folder: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing_once();

    TableGen::new()
        .input_dir(&cli.folder)
        .progress(std::io::stderr().is_terminal())
        .run()?;

    Ok(())
}
