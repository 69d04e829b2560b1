use super::interner::TokenId;

/// Per-token adjacency lists of observed next tokens.
///
/// For each token id, an append-only sequence of the ids seen immediately
/// following it anywhere in the source, in observation order. Duplicates
/// are kept rather than counted, so picking uniformly from a list
/// reproduces the token's empirical next-word frequency distribution.
///
/// # Invariants
/// - `successors_of(id)` holds every observed immediate follower of `id`,
///   exactly as many times as it was observed
/// - An empty list is valid and marks a dead end
pub struct SuccessorTable {
	lists: Vec<Vec<TokenId>>,
}

impl SuccessorTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self { lists: Vec::new() }
	}

	/// Records that `next` was observed immediately after `prev`.
	///
	/// Appends to `prev`'s list, keeping duplicates. Both the outer table
	/// and the per-token lists grow geometrically.
	pub fn record(&mut self, prev: TokenId, next: TokenId) {
		let index = prev.as_usize();
		if index >= self.lists.len() {
			self.lists.resize_with(index + 1, Vec::new);
		}
		self.lists[index].push(next);
	}

	/// Observed successors of `id`, in insertion order.
	///
	/// The empty slice signals a dead end: `id` only ever appeared as the
	/// last token of the corpus, or was never recorded as a predecessor.
	pub fn successors_of(&self, id: TokenId) -> &[TokenId] {
		match self.lists.get(id.as_usize()) {
			Some(list) => list,
			None => &[],
		}
	}
}
