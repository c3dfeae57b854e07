use log::{debug, trace};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::chain::WordChain;
use super::config::GenerationInput;
use super::sentence::{Sentence, is_terminator, last_char};
use super::token::TokenId;
use crate::error::ChainError;

/// Random-walk sentence generator over a [`WordChain`].
///
/// # Responsibilities
/// - Pick a random sentence start among the tokens beginning with an uppercase letter
/// - Follow random successor links until a terminator, a dead end, or a full buffer
/// - Retry generation, within a bounded number of attempts, until a sentence is accepted
///
/// The random source is injected, so a seeded generator replays the same
/// sentences.
#[derive(Debug)]
pub struct SentenceGenerator<'a, R: Rng> {
	chain: &'a WordChain,
	rng: R,
	input: GenerationInput,
	/// Sentence starts short enough to fit in the sentence buffer.
	starts: Vec<TokenId>,
}

impl<'a, R: Rng> SentenceGenerator<'a, R> {
	/// Creates a generator borrowing `chain`.
	///
	/// Sentence starts that would not fit in the buffer on their own are
	/// left out of the start set.
	pub fn new(chain: &'a WordChain, rng: R, input: GenerationInput) -> Self {
		let empty = Sentence::with_capacity(input.sentence_capacity());
		let starts = chain
			.sentence_starts()
			.into_iter()
			.filter(|id| chain.token(*id).is_some_and(|token| empty.fits_first(token.len())))
			.collect();

		Self { chain, rng, input, starts }
	}

	/// Token ids this generator may start a sentence with.
	pub fn starts(&self) -> &[TokenId] {
		&self.starts
	}

	/// Generates one sentence from a random start.
	///
	/// The sentence may end without a terminator if the walk reaches a token
	/// with no successor or if the next token would overflow the buffer.
	///
	/// # Errors
	/// Returns [`ChainError::NoSentenceStart`] if no token can start a sentence.
	pub fn generate(&mut self) -> Result<String, ChainError> {
		let mut sentence = Sentence::with_capacity(self.input.sentence_capacity());
		self.fill(&mut sentence)?;
		Ok(sentence.into_string())
	}

	/// Generates one sentence walking from `start`.
	///
	/// Returns `None` if `start` is not one of [`SentenceGenerator::starts`]:
	/// a token of another chain, a token not beginning with an uppercase
	/// letter, or one too long for the buffer.
	pub fn generate_from(&mut self, start: TokenId) -> Option<String> {
		if !self.starts.contains(&start) {
			return None;
		}
		let mut sentence = Sentence::with_capacity(self.input.sentence_capacity());
		self.walk(start, &mut sentence);
		Some(sentence.into_string())
	}

	/// Generates sentences until one satisfies `accept`.
	///
	/// Rejected sentences are discarded. At most `max_attempts` sentences are
	/// generated.
	///
	/// # Errors
	/// - [`ChainError::NoSentenceStart`] if no token can start a sentence
	/// - [`ChainError::AttemptsExhausted`] if no sentence was accepted
	pub fn generate_until<F>(&mut self, mut accept: F) -> Result<String, ChainError>
	where
		F: FnMut(&str) -> bool,
	{
		let attempts = self.input.max_attempts();
		let mut sentence = Sentence::with_capacity(self.input.sentence_capacity());

		for attempt in 1..=attempts {
			sentence.clear();
			self.fill(&mut sentence)?;
			if accept(sentence.as_str()) {
				trace!("Sentence accepted after {} attempt(s)", attempt);
				return Ok(sentence.into_string());
			}
			trace!("Attempt {} rejected: {:?}", attempt, sentence.as_str());
		}

		debug!("Giving up after {} attempts", attempts);
		Err(ChainError::AttemptsExhausted { attempts })
	}

	/// Generates sentences until one ends with `terminator`.
	///
	/// # Errors
	/// Same as [`SentenceGenerator::generate_until`].
	pub fn generate_ending_with(&mut self, terminator: char) -> Result<String, ChainError> {
		self.generate_until(|sentence| last_char(sentence) == Some(terminator))
	}

	/// Runs one attempt into an empty `sentence`.
	fn fill(&mut self, sentence: &mut Sentence) -> Result<(), ChainError> {
		let start = *self.starts.choose(&mut self.rng).ok_or(ChainError::NoSentenceStart)?;
		self.walk(start, sentence);
		Ok(())
	}

	/// Appends `start` then follows random successors.
	///
	/// `start` and every successor come from `self.chain`, so their tokens
	/// always resolve.
	fn walk(&mut self, start: TokenId, sentence: &mut Sentence) {
		let chain = self.chain;
		let table = chain.successor_table();

		let mut current = start;
		let Some(mut text) = chain.token(start) else {
			return;
		};
		// Ends on a dead end, a full buffer or a terminator
		loop {
			if !sentence.try_push(text) || is_terminator(text) {
				break;
			}
			let Some(next) = table.sample(current, &mut self.rng) else {
				break;
			};
			let Some(next_text) = chain.token(next) else {
				break;
			};
			current = next;
			text = next_text;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	const TWO_SENTENCES: &str = "Victor said hello. Did she answer?";

	fn generator(chain: &WordChain, seed: u64) -> SentenceGenerator<'_, StdRng> {
		SentenceGenerator::new(chain, StdRng::seed_from_u64(seed), GenerationInput::default())
	}

	#[test]
	fn walk_from_victor_stops_at_terminator() {
		let chain = WordChain::from_text(TWO_SENTENCES).unwrap();
		let victor = chain.lookup("Victor").unwrap();

		for seed in 0..10 {
			assert_eq!(generator(&chain, seed).generate_from(victor).as_deref(), Some("Victor said hello."));
		}
	}

	#[test]
	fn random_start_yields_one_of_two_sentences() {
		let chain = WordChain::from_text(TWO_SENTENCES).unwrap();
		let mut generator = generator(&chain, 3);

		for _ in 0..20 {
			let sentence = generator.generate().unwrap();
			assert!(sentence == "Victor said hello." || sentence == "Did she answer?", "{}", sentence);
		}
	}

	#[test]
	fn terminated_start_is_a_sentence() {
		let chain = WordChain::from_text("Stop! go on").unwrap();
		let mut generator = generator(&chain, 1);
		assert_eq!(generator.generate().unwrap(), "Stop!");
	}

	#[test]
	fn dead_end_start_is_returned_unterminated() {
		let chain = WordChain::from_text("words then Alone").unwrap();
		let mut generator = generator(&chain, 1);
		assert_eq!(generator.generate().unwrap(), "Alone");
	}

	#[test]
	fn no_uppercase_token_fails_fast() {
		let chain = WordChain::from_text("nothing here starts a sentence.").unwrap();
		let mut generator = generator(&chain, 1);

		assert_matches!(generator.generate(), Err(ChainError::NoSentenceStart));
		assert_matches!(generator.generate_ending_with('.'), Err(ChainError::NoSentenceStart));
	}

	#[test]
	fn empty_text_fails_fast() {
		let chain = WordChain::from_text("").unwrap();
		assert_matches!(generator(&chain, 1).generate(), Err(ChainError::NoSentenceStart));
	}

	#[test]
	fn acceptance_loop_finds_each_terminator() {
		let chain = WordChain::from_text(TWO_SENTENCES).unwrap();
		let mut generator = generator(&chain, 11);

		assert_eq!(generator.generate_ending_with('?').unwrap(), "Did she answer?");
		assert_eq!(generator.generate_ending_with('.').unwrap(), "Victor said hello.");
	}

	#[test]
	fn acceptance_loop_is_bounded() {
		let chain = WordChain::from_text(TWO_SENTENCES).unwrap();
		let mut input = GenerationInput::default();
		input.set_max_attempts(25).unwrap();
		let mut generator = SentenceGenerator::new(&chain, StdRng::seed_from_u64(5), input);

		assert_matches!(
			generator.generate_ending_with('!'),
			Err(ChainError::AttemptsExhausted { attempts: 25 })
		);
	}

	#[test]
	fn acceptance_loop_counts_calls() {
		let chain = WordChain::from_text(TWO_SENTENCES).unwrap();
		let mut input = GenerationInput::default();
		input.set_max_attempts(7).unwrap();
		let mut generator = SentenceGenerator::new(&chain, StdRng::seed_from_u64(5), input);

		let mut calls = 0;
		let result = generator.generate_until(|_| {
			calls += 1;
			false
		});
		assert!(result.is_err());
		assert_eq!(calls, 7);
	}

	#[test]
	fn full_buffer_truncates_the_walk() {
		let chain = WordChain::from_text(TWO_SENTENCES).unwrap();
		let victor = chain.lookup("Victor").unwrap();

		// "Victor said" is 11 bytes, "Victor said hello." would be 18
		let mut input = GenerationInput::default();
		input.set_sentence_capacity(13).unwrap();
		let mut generator = SentenceGenerator::new(&chain, StdRng::seed_from_u64(0), input);

		assert_eq!(generator.generate_from(victor).as_deref(), Some("Victor said"));
	}

	#[test]
	fn walk_only_starts_from_sentence_starts() {
		let chain = WordChain::from_text(TWO_SENTENCES).unwrap();
		let other = WordChain::from_text("a b c d e f g h i j").unwrap();
		let foreign = other.lookup("j").unwrap();
		let said = chain.lookup("said").unwrap();
		let mut generator = generator(&chain, 0);

		assert_eq!(generator.generate_from(foreign), None);
		assert_eq!(generator.generate_from(said), None);
	}

	#[test]
	fn unbounded_capacity_generates_normally() {
		let chain = WordChain::from_text(TWO_SENTENCES).unwrap();
		let mut input = GenerationInput::default();
		input.set_sentence_capacity(usize::MAX).unwrap();
		let mut generator = SentenceGenerator::new(&chain, StdRng::seed_from_u64(8), input);

		assert_eq!(generator.starts().len(), 2);
		let sentence = generator.generate().unwrap();
		assert!(sentence == "Victor said hello." || sentence == "Did she answer?", "{}", sentence);
		assert_eq!(generator.generate_ending_with('?').unwrap(), "Did she answer?");
	}

	#[test]
	fn oversized_starts_are_excluded() {
		let chain = WordChain::from_text("Tiny. Enormous.").unwrap();
		let mut input = GenerationInput::default();
		input.set_sentence_capacity(7).unwrap();
		let mut generator = SentenceGenerator::new(&chain, StdRng::seed_from_u64(0), input);

		assert_eq!(generator.starts().len(), 1);
		assert_eq!(generator.generate().unwrap(), "Tiny.");
	}

	#[test]
	fn seeded_generators_replay_the_same_sentences() {
		let text = "The cat sat. The dog ran! A cat ran? The bird sat on the cat. A dog sat.";
		let chain = WordChain::from_text(text).unwrap();

		let first: Vec<String> = {
			let mut generator = generator(&chain, 99);
			(0..10).map(|_| generator.generate().unwrap()).collect()
		};
		let second: Vec<String> = {
			let mut generator = generator(&chain, 99);
			(0..10).map(|_| generator.generate().unwrap()).collect()
		};
		assert_eq!(first, second);
	}
}
