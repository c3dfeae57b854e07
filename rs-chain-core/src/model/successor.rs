use rand::Rng;
use rand::seq::IndexedRandom;

use super::token::TokenId;

/// Records, for every token, the tokens observed right after it.
///
/// Conceptually this is the edge set of a Markov chain over words. Edges are
/// not weighted explicitly: a successor that follows a token `k` times is
/// stored `k` times, so uniform sampling over the list is frequency weighted.
///
/// ## Responsibilities:
/// - Accumulate successor occurrences in encounter order
/// - Stop recording for a token once its list is full
/// - Sample the next token uniformly from a successor list
///
/// ## Invariants
/// - Every list holds at most `max_successors` entries
/// - Lists are indexed by `TokenId`, so the table never holds more lists
///   than the vocabulary holds tokens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccessorTable {
	lists: Vec<Vec<TokenId>>,
	max_successors: usize,
}

impl SuccessorTable {
	/// Creates an empty table whose lists hold at most `max_successors` entries.
	pub fn new(max_successors: usize) -> Self {
		Self { lists: Vec::new(), max_successors }
	}

	/// Records one occurrence of `next` following `token`.
	///
	/// Returns `false` if the successor list of `token` is already full, in
	/// which case the pair is dropped.
	pub fn record(&mut self, token: TokenId, next: TokenId) -> bool {
		let index = token.index();
		if self.lists.len() <= index {
			self.lists.resize_with(index + 1, Vec::new);
		}

		let list = &mut self.lists[index];
		if list.len() >= self.max_successors {
			return false;
		}
		list.push(next);
		true
	}

	/// Returns the successors of `token` in encounter order.
	///
	/// Tokens that never preceded another token have an empty list.
	pub fn successors(&self, token: TokenId) -> &[TokenId] {
		self.lists.get(token.index()).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Picks a successor of `token` uniformly from its list.
	///
	/// Returns `None` if the list is empty.
	pub fn sample<R: Rng + ?Sized>(&self, token: TokenId, rng: &mut R) -> Option<TokenId> {
		self.successors(token).choose(rng).copied()
	}

	/// Returns `true` if no more successors can be recorded for `token`.
	pub fn is_saturated(&self, token: TokenId) -> bool {
		self.successors(token).len() >= self.max_successors
	}

	/// Total number of recorded pairs.
	pub fn pair_count(&self) -> usize {
		self.lists.iter().map(Vec::len).sum()
	}
}
