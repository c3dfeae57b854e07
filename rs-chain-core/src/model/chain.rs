use log::{debug, info};

use super::config::ChainLimits;
use super::successor::SuccessorTable;
use super::token::{TokenId, Vocabulary};
use super::tokenizer::Tokenizer;
use crate::error::ChainError;

/// First-order Markov chain over the words of a text.
///
/// The `WordChain` owns the vocabulary of a text and the table of observed
/// successors. It is built once from a text and is read-only afterwards.
///
/// # Responsibilities
/// - Tokenize the source text and intern every token
/// - Record every adjacent pair of tokens, within the configured limits
/// - Expose the tokens that may start a sentence
///
/// # Invariants
/// - Every `TokenId` stored in `successors` belongs to `vocabulary`
/// - `vocabulary.len() <= limits.max_tokens()`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordChain {
	vocabulary: Vocabulary,
	successors: SuccessorTable,
	limits: ChainLimits,
}

impl WordChain {
	/// Builds a chain from `text` with the default tokenizer and limits.
	///
	/// # Errors
	/// Returns [`ChainError::VocabularyFull`] if the text holds more distinct
	/// tokens than the default limit.
	pub fn from_text(text: &str) -> Result<Self, ChainError> {
		Self::build(text, &Tokenizer::default(), ChainLimits::default())
	}

	/// Builds a chain from `text`.
	///
	/// Each token is interned in reading order, then appended to the
	/// successor list of the token before it. Pairs landing on a full
	/// successor list are dropped silently.
	///
	/// # Errors
	/// Returns [`ChainError::VocabularyFull`] as soon as a new token does not
	/// fit in the vocabulary. The partially built chain is discarded.
	pub fn build(text: &str, tokenizer: &Tokenizer, limits: ChainLimits) -> Result<Self, ChainError> {
		let mut chain = Self {
			vocabulary: Vocabulary::with_capacity(limits.max_tokens()),
			successors: SuccessorTable::new(limits.max_successors()),
			limits,
		};

		let clean = Tokenizer::sanitize(text);
		let mut previous: Option<TokenId> = None;
		let mut dropped = 0usize;

		for token in tokenizer.split(&clean) {
			let id = chain.vocabulary.intern(token)?;
			if let Some(prev) = previous {
				if chain.successors.record(prev, id) {
					if chain.successors.is_saturated(prev) {
						debug!("Successor list of {:?} is full ({} entries)", chain.vocabulary.get(prev), limits.max_successors());
					}
				} else {
					dropped += 1;
				}
			}
			previous = Some(id);
		}

		info!(
			"Word chain built: {} tokens, {} pairs recorded, {} pairs dropped",
			chain.vocabulary.len(),
			chain.successors.pair_count(),
			dropped
		);

		Ok(chain)
	}

	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	pub fn successor_table(&self) -> &SuccessorTable {
		&self.successors
	}

	pub fn limits(&self) -> ChainLimits {
		self.limits
	}

	/// Returns the surface string of `id`, or `None` for an id that does not
	/// belong to this chain.
	pub fn token(&self, id: TokenId) -> Option<&str> {
		self.vocabulary.get(id)
	}

	/// Looks up the identity of a surface string.
	pub fn lookup(&self, token: &str) -> Option<TokenId> {
		self.vocabulary.lookup(token)
	}

	/// Returns the successors of `id` in encounter order.
	pub fn successors(&self, id: TokenId) -> &[TokenId] {
		self.successors.successors(id)
	}

	/// Returns every token that may begin a sentence, in insertion order.
	pub fn sentence_starts(&self) -> Vec<TokenId> {
		self.vocabulary
			.iter()
			.filter(|(_, token)| starts_sentence(token))
			.map(|(id, _)| id)
			.collect()
	}
}

/// Returns whether `token` begins with an uppercase letter.
pub fn starts_sentence(token: &str) -> bool {
	token.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;

	const TWO_SENTENCES: &str = "Victor said hello. Did she answer?";

	fn successors_of<'a>(chain: &'a WordChain, token: &str) -> Vec<&'a str> {
		let id = chain.lookup(token).unwrap();
		chain.successors(id).iter().filter_map(|s| chain.token(*s)).collect()
	}

	#[test]
	fn two_sentence_table() {
		let chain = WordChain::from_text(TWO_SENTENCES).unwrap();

		assert_eq!(chain.vocabulary().len(), 6);
		assert_eq!(successors_of(&chain, "Victor"), vec!["said"]);
		assert_eq!(successors_of(&chain, "said"), vec!["hello."]);
		assert_eq!(successors_of(&chain, "hello."), vec!["Did"]);
		assert_eq!(successors_of(&chain, "Did"), vec!["she"]);
		assert_eq!(successors_of(&chain, "she"), vec!["answer?"]);
		assert!(successors_of(&chain, "answer?").is_empty());
	}

	#[test]
	fn repeated_pairs_are_repeated_successors() {
		let chain = WordChain::from_text("the cat the cat the dog").unwrap();
		assert_eq!(successors_of(&chain, "the"), vec!["cat", "cat", "dog"]);
		assert_eq!(successors_of(&chain, "cat"), vec!["the", "the"]);
	}

	#[test]
	fn building_twice_is_identical() {
		let first = WordChain::from_text(TWO_SENTENCES).unwrap();
		let second = WordChain::from_text(TWO_SENTENCES).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn sentence_starts_are_uppercase_tokens() {
		let chain = WordChain::from_text(TWO_SENTENCES).unwrap();
		let starts: Vec<&str> = chain.sentence_starts().into_iter().filter_map(|id| chain.token(id)).collect();
		assert_eq!(starts, vec!["Victor", "Did"]);
	}

	#[test]
	fn foreign_ids_have_no_token() {
		let small = WordChain::from_text("One").unwrap();
		let large = WordChain::from_text("One two three").unwrap();
		let three = large.lookup("three").unwrap();

		assert_eq!(large.token(three), Some("three"));
		assert_eq!(small.token(three), None);
		assert!(small.successors(three).is_empty());
	}

	#[test]
	fn starts_sentence_checks_first_character() {
		assert!(starts_sentence("Victor"));
		assert!(!starts_sentence("victor"));
		assert!(!starts_sentence("\"Victor"));
		assert!(!starts_sentence(""));
	}

	#[test]
	fn vocabulary_overflow_is_fatal() {
		let limits = ChainLimits::with_max_tokens(3).unwrap();
		let result = WordChain::build("a b c d", &Tokenizer::default(), limits);
		assert_matches!(result, Err(ChainError::VocabularyFull { capacity: 3 }));

		// Repeated tokens do not consume capacity
		assert!(WordChain::build("a b c a b c", &Tokenizer::default(), limits).is_ok());
	}

	#[test]
	fn successor_overflow_is_tolerated() {
		let mut limits = ChainLimits::default();
		limits.set_max_successors(2).unwrap();
		let chain = WordChain::build("x a x b x c x d", &Tokenizer::default(), limits).unwrap();

		assert_eq!(successors_of(&chain, "x"), vec!["a", "b"]);
		assert_eq!(chain.vocabulary().len(), 5);
	}
}
