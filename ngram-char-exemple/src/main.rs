use std::env;

use log::{info, warn};
use ngram_char_core::{GenerationOptions, Generator, ModelError, NGramCharacter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log level is read from RUST_LOG (ex. RUST_LOG=debug)
    env_logger::init();

    // Usage: ngram-char-exemple <corpus.txt> [n] [count] [seed]
    let args: Vec<String> = env::args().skip(1).collect();
    let corpus = match args.first() {
        Some(path) => path.as_str(),
        None => return Err("usage: ngram-char-exemple <corpus.txt> [n] [count] [seed]".into()),
    };
    let n: usize = args.get(1).map(|s| s.parse::<usize>()).transpose()?.unwrap_or(3);
    let count: usize = args.get(2).map(|s| s.parse::<usize>()).transpose()?.unwrap_or(10);
    let seed: u64 = args.get(3).map(|s| s.parse::<u64>()).transpose()?.unwrap_or(12345);

    // One word per line; '$' frames every word.
    // Loads `<corpus>.bin` if it exists for the same order, otherwise fits and writes it
    let mut model = NGramCharacter::new(n)?;
    model.fit_file(corpus)?;
    info!(
        "{}-gram model: {} contexts, {} characters",
        model.n(),
        model.contexts().len(),
        model.characters().len()
    );

    // Cap word length so a corpus with unreachable end sentinels cannot hang
    let options = GenerationOptions { max_length: Some(64), nb_try: 0 };
    let mut generator = Generator::seeded(&model, seed).with_options(options);

    for i in 0..count {
        match generator.next_word() {
            Ok(word) => println!("Generated word {}: {}", i + 1, word),
            Err(ModelError::GenerationLimit(max)) => warn!("word {} skipped: longer than {}", i + 1, max),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
