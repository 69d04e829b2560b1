use log::debug;

use super::interner::{Interner, TokenId};
use super::successors::SuccessorTable;

/// Token delimiters: space, CR, LF. Every other character, punctuation
/// included, stays attached to its token.
const DELIMITERS: [char; 3] = [' ', '\r', '\n'];

/// A built first-order Markov model: interned tokens plus their observed
/// successor lists.
///
/// Immutable once [`build_model`] returns; generation only reads it. All
/// token text borrows from the source buffer, so the buffer must outlive
/// the model.
pub struct Model<'text> {
	interner: Interner<'text>,
	successors: SuccessorTable,
}

/// Builds a model in a single forward pass over `text`.
///
/// Splits on the fixed delimiter set, interns each non-empty token and
/// records each consecutive pair in the successor table. The first token
/// of the corpus has no predecessor and is never recorded as one.
///
/// # Errors
/// Returns an error if the corpus exceeds the interner's fixed hash-index
/// capacity. The partial model is discarded; there is no recovery path.
pub fn build_model(text: &str) -> Result<Model<'_>, String> {
	let mut interner = Interner::new();
	let mut successors = SuccessorTable::new();

	let mut prev: Option<TokenId> = None;
	for token in text.split(DELIMITERS).filter(|t| !t.is_empty()) {
		let id = interner.intern(token)?;
		if let Some(prev_id) = prev {
			successors.record(prev_id, id);
		}
		prev = Some(id);
	}

	debug!("model built: {} distinct tokens", interner.len());
	Ok(Model { interner, successors })
}

impl<'text> Model<'text> {
	/// Resolves an id to its token text.
	///
	/// Panics if `id` was not issued while building this model.
	#[inline]
	pub fn token(&self, id: TokenId) -> &'text str {
		self.interner.lookup(id)
	}

	/// Looks up the id of a token text, if it occurs in the corpus.
	pub fn token_id(&self, text: &str) -> Option<TokenId> {
		self.interner.get(text)
	}

	/// Number of distinct tokens in the model.
	#[inline]
	pub fn token_count(&self) -> usize {
		self.interner.len()
	}

	/// Observed successors of `id`, in first-seen order, duplicates kept.
	#[inline]
	pub fn successors_of(&self, id: TokenId) -> &[TokenId] {
		self.successors.successors_of(id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn build_interns_distinct_tokens_once() {
		let model = build_model("the cat and the hat").unwrap();
		assert_eq!(model.token_count(), 4);
		assert!(model.token_id("the").is_some());
		assert!(model.token_id("dog").is_none());
	}

	#[test]
	fn successors_preserve_frequency_and_order() {
		let model = build_model("a b a c a b").unwrap();
		let a = model.token_id("a").unwrap();
		let b = model.token_id("b").unwrap();
		let c = model.token_id("c").unwrap();
		// "a" is followed by b, c, b in that order; duplicates kept.
		assert_eq!(model.successors_of(a), &[b, c, b]);
		// "b" is followed by "a" once; the final "b" closes the corpus.
		assert_eq!(model.successors_of(b), &[a]);
		assert_eq!(model.successors_of(c), &[a]);
	}

	#[test]
	fn last_token_is_a_dead_end() {
		let model = build_model("one two three").unwrap();
		let three = model.token_id("three").unwrap();
		assert!(model.successors_of(three).is_empty());
	}

	#[test]
	fn runs_of_delimiters_yield_no_empty_tokens() {
		let model = build_model("  a \r\n  b  \n").unwrap();
		assert_eq!(model.token_count(), 2);
		assert!(model.token_id("").is_none());
		let a = model.token_id("a").unwrap();
		let b = model.token_id("b").unwrap();
		assert_eq!(model.successors_of(a), &[b]);
	}

	#[test]
	fn empty_corpus_builds_an_empty_model() {
		let model = build_model("").unwrap();
		assert_eq!(model.token_count(), 0);
	}

	#[test]
	fn case_variants_are_distinct_tokens() {
		let model = build_model("The the THE").unwrap();
		assert_eq!(model.token_count(), 3);
	}
}
