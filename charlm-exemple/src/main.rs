use std::path::PathBuf;

use charlm_core::{open_corpus, ModelConfig};
use clap::Parser;
use log::info;

/// Train a character model on a corpus and print a generated text.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Corpus file used for training
    corpus: PathBuf,

    /// Number of characters in a context window
    #[arg(short, long, default_value_t = 7)]
    window: usize,

    /// Text to start from (at least `window` characters)
    #[arg(short, long)]
    initial: String,

    /// Length of the generated text, initial text included
    #[arg(short, long, default_value_t = 500)]
    length: usize,

    /// Seed for reproducible generation; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of training passes over the corpus
    #[arg(short, long, default_value_t = 1)]
    passes: usize,

    /// Print every context and its distribution before generating
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    // Same window and seed give the same text on every run
    let mut config = ModelConfig::new(args.window);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut model = config.build()?;

    model.train_passes(args.passes, || open_corpus(&args.corpus))?;
    info!("{} contexts learned from {}", model.len(), args.corpus.display());

    if args.dump {
        print!("{}", model);
    }

    println!("{}", model.generate(&args.initial, args.length)?);

    Ok(())
}
