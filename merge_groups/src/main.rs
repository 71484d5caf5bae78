//! Merges groups of aligned tokens into equivalence classes.
//!
//! Reads a JSON array of groups, each an array of arbitrary JSON tokens, and prints one JSON
//! object per merged group.

use std::{
    io::{BufReader, BufWriter, Read, Write},
    path::PathBuf,
};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use serde_json::{json, Value};

mod merge;

use merge::{merge_groups, TokenKey};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with an array of token groups, reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Compare string tokens case insensitively.
    #[clap(short = 'i', long)]
    ignore_case: bool,

    /// Also print groups consisting of a single token.
    #[clap(short = 's', long)]
    singletons: bool,
}

fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    parcor_logger::setup();

    let reader: Box<dyn Read> = match &args.input {
        Some(path) if path.as_os_str() != "-" => Box::new(
            std::fs::File::open(path)
                .wrap_err_with(|| format!("failed to open {}", path.display()))?,
        ),
        _ => Box::new(std::io::stdin().lock()),
    };

    let groups: Vec<Vec<Value>> = serde_json::from_reader(BufReader::new(reader))
        .wrap_err("failed to parse token groups")?;
    log::info!("read {} token groups", groups.len());

    let key = TokenKey {
        ignore_case: args.ignore_case,
    };
    let merged = merge_groups(groups, key, args.singletons)?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    for group in merged {
        let line = json!({ "repr": group[0], "members": group });
        writeln!(out, "{}", serde_json::to_string(&line)?)?;
    }
    out.flush()?;

    Ok(())
}
