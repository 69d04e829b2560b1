use log::trace;
use rand::Rng;

use super::interner::TokenId;
use super::markov_model::Model;

/// Random draws attempted when selecting a sentence start, before falling
/// back to a deterministic scan.
const START_ATTEMPTS: usize = 10_000;

/// Secondary bound on walk length, in tokens. The byte-length cap is the
/// primary termination guarantee; this bounds cyclic walks independently
/// of token sizes.
const MAX_WALK_STEPS: usize = 4_096;

/// Whether a token closes a sentence.
fn token_ends_sentence(token: &str) -> bool {
	token.ends_with(['.', '?', '!'])
}

/// Whether a token plausibly opens a sentence (ASCII uppercase first
/// letter). Proper nouns mid-corpus qualify too; that imprecision is part
/// of the heuristic.
fn token_starts_sentence(token: &str) -> bool {
	token.starts_with(|c: char| c.is_ascii_uppercase())
}

impl Model<'_> {
	/// Picks a sentence-start token id.
	///
	/// Up to `START_ATTEMPTS` uniform draws over all interned tokens,
	/// accepting the first uppercase-starting one; on exhaustion, a linear
	/// scan in id order. `None` if the corpus holds no candidate at all.
	fn select_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<TokenId> {
		let count = self.token_count();
		if count == 0 {
			return None;
		}
		for _ in 0..START_ATTEMPTS {
			let id = TokenId::from_usize(rng.random_range(0..count));
			if token_starts_sentence(self.token(id)) {
				return Some(id);
			}
		}
		(0..count)
			.map(TokenId::from_usize)
			.find(|&id| token_starts_sentence(self.token(id)))
	}

	/// Generates one sentence by random walk, drawing from the thread RNG.
	///
	/// See [`Model::generate_sentence_with`].
	pub fn generate_sentence(&self, max_len: usize) -> Option<String> {
		self.generate_sentence_with(&mut rand::rng(), max_len)
	}

	/// Generates one sentence by random walk over the successor graph.
	///
	/// Starts from an uppercase-starting token and repeatedly appends a
	/// uniformly-drawn successor, separated by single spaces. The walk
	/// stops on the first token ending in `.`, `?` or `!`, on a dead end
	/// (empty successor list), or when appending the next token would push
	/// the output past `max_len` bytes. The cap is checked before each
	/// append, so tokens are never split.
	///
	/// # Returns
	/// - `Some(sentence)`: the accumulated walk. Not guaranteed to end in
	///   sentence punctuation when stopped by a dead end or the cap.
	/// - `None`: the corpus contains no uppercase-starting token.
	///
	/// # Notes
	/// - The successor graph may contain cycles; only the caps guarantee
	///   termination.
	pub fn generate_sentence_with<R: Rng + ?Sized>(&self, rng: &mut R, max_len: usize) -> Option<String> {
		let start = self.select_start(rng)?;
		let first = self.token(start);
		if first.len() > max_len {
			return Some(String::new());
		}

		let mut sentence = String::from(first);
		let mut current = start;
		for _ in 0..MAX_WALK_STEPS {
			if token_ends_sentence(self.token(current)) {
				break;
			}
			let successors = self.successors_of(current);
			if successors.is_empty() {
				break; // dead end
			}
			let next = successors[rng.random_range(0..successors.len())];
			let next_text = self.token(next);
			if sentence.len() + 1 + next_text.len() > max_len {
				break;
			}
			sentence.push(' ');
			sentence.push_str(next_text);
			current = next;
		}
		Some(sentence)
	}

	/// Rejection-samples a sentence ending in `target`, drawing from the
	/// thread RNG.
	///
	/// See [`Model::generate_sentence_ending_in_with`].
	pub fn generate_sentence_ending_in(&self, target: char, max_attempts: usize, max_len: usize) -> Option<String> {
		self.generate_sentence_ending_in_with(&mut rand::rng(), target, max_attempts, max_len)
	}

	/// Rejection-samples a sentence whose final character is `target`.
	///
	/// Invokes the generator up to `max_attempts` times, each with a fresh
	/// start selection, and accepts the first matching sentence.
	///
	/// # Returns
	/// - `Some(sentence)`: first attempt whose last character is `target`.
	/// - `None`: no match within the bound, or the corpus has no
	///   sentence-start candidate. Never loops indefinitely.
	pub fn generate_sentence_ending_in_with<R: Rng + ?Sized>(
		&self,
		rng: &mut R,
		target: char,
		max_attempts: usize,
		max_len: usize,
	) -> Option<String> {
		for attempt in 0..max_attempts {
			let sentence = self.generate_sentence_with(rng, max_len)?;
			if sentence.ends_with(target) {
				trace!("target '{target}' matched on attempt {}", attempt + 1);
				return Some(sentence);
			}
		}
		None
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use crate::model::markov_model::build_model;

	use super::*;

	#[test]
	fn sentence_ending_detection() {
		assert!(token_ends_sentence("sat."));
		assert!(token_ends_sentence("run?"));
		assert!(token_ends_sentence("ran!"));
		assert!(!token_ends_sentence("cat"));
		assert!(!token_ends_sentence("semi;"));
		assert!(!token_ends_sentence(""));
	}

	#[test]
	fn sentence_start_detection() {
		assert!(token_starts_sentence("The"));
		assert!(!token_starts_sentence("the"));
		assert!(!token_starts_sentence("'Tis"));
		assert!(!token_starts_sentence("42"));
		assert!(!token_starts_sentence(""));
	}

	#[test]
	fn generated_sentence_ends_in_punctuation_when_not_capped() {
		// Every walk from "A" reaches "end." with no cycles or dead ends.
		let model = build_model("A path to the end.").unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		let sentence = model.generate_sentence_with(&mut rng, 4096).unwrap();
		assert_eq!(sentence, "A path to the end.");
	}

	#[test]
	fn walk_stops_at_dead_end() {
		// "stops" never appears as a predecessor: dead end, no punctuation.
		let model = build_model("A walk stops").unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		let sentence = model.generate_sentence_with(&mut rng, 4096).unwrap();
		assert_eq!(sentence, "A walk stops");
	}

	#[test]
	fn degenerate_corpus_without_start_candidate() {
		let model = build_model("all lowercase words here.").unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		assert!(model.generate_sentence_with(&mut rng, 4096).is_none());
		assert!(
			model
				.generate_sentence_ending_in_with(&mut rng, '?', 100, 4096)
				.is_none()
		);
	}

	#[test]
	fn empty_model_generates_nothing() {
		let model = build_model("").unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		assert!(model.generate_sentence_with(&mut rng, 4096).is_none());
	}

	#[test]
	fn cap_is_checked_before_appending() {
		// Cycle with no sentence-ending token; only the caps stop the walk.
		let model = build_model("Loop again Loop again Loop").unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		let max_len = 21;
		let sentence = model.generate_sentence_with(&mut rng, max_len).unwrap();
		assert!(sentence.len() <= max_len);
		// Every piece of the output is a complete interned token.
		for word in sentence.split(' ') {
			assert!(model.token_id(word).is_some(), "split token: {word:?}");
		}
	}

	#[test]
	fn rejection_sampling_misses_absent_punctuation() {
		let model = build_model("No question marks here.").unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		assert!(
			model
				.generate_sentence_ending_in_with(&mut rng, '?', 50, 4096)
				.is_none()
		);
	}
}
