use markov_core::corpus;
use markov_core::model::markov_model::build_model;

/// Corpus read from the working directory when no path is given.
const DEFAULT_CORPUS: &str = "pg84.txt";

/// Generation attempts per target punctuation mark.
const MAX_ATTEMPTS: usize = 1000;

/// Byte cap on one generated sentence.
const MAX_SENTENCE_LEN: usize = 4096;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CORPUS.to_owned());

    // Load and sanitize the corpus; the model borrows this buffer.
    let text = match corpus::load_corpus(&path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: could not open {path}: {e}. Put the corpus next to the program.");
            std::process::exit(1);
        }
    };

    let model = match build_model(&text) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // One interrogative sentence, a blank line, then one exclamatory one.
    match model.generate_sentence_ending_in('?', MAX_ATTEMPTS, MAX_SENTENCE_LEN) {
        Some(sentence) => println!("{sentence}\n"),
        None => log::warn!("no interrogative sentence found in {MAX_ATTEMPTS} attempts"),
    }

    match model.generate_sentence_ending_in('!', MAX_ATTEMPTS, MAX_SENTENCE_LEN) {
        Some(sentence) => println!("{sentence}"),
        None => log::warn!("no exclamatory sentence found in {MAX_ATTEMPTS} attempts"),
    }
}
