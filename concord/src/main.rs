//! Command line interface for building a concordance of a text file.

use std::{
    io::{BufWriter, Write},
    num::NonZeroUsize,
    path::PathBuf,
};

use clap::Parser;
use concord::ConcordanceOptions;

/// Builds a word concordance of a text file, leaving out stop words.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File with one stop word per line.
    stop_words: PathBuf,
    /// Text file to index.
    input: PathBuf,
    /// Write the concordance to this file instead of stdout.
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,
    /// Initial number of slots of the stop word and concordance tables.
    #[clap(short = 'c', long, default_value = "191")]
    capacity: NonZeroUsize,
}

fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    concord_logger::setup();

    let options = ConcordanceOptions {
        initial_capacity: args.capacity.get(),
    };

    let concordance = concord::build(&args.stop_words, &args.input, &options)?;

    let table = concordance.table();
    log::info!(
        "{} words, {} slots, load factor {:.3}",
        table.len(),
        table.capacity(),
        table.load_factor().to_f64()
    );

    match &args.output {
        Some(path) => concordance.write_file(path)?,
        None => {
            let mut stdout = BufWriter::new(std::io::stdout().lock());
            concordance.write_to(&mut stdout)?;
            if !concordance.is_empty() {
                writeln!(stdout)?;
            }
            stdout.flush()?;
        }
    }

    Ok(())
}
