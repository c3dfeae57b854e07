use crate::error::ChainError;

/// Default maximum number of distinct tokens in a chain.
pub const DEFAULT_MAX_TOKENS: usize = 50_000;

/// Default sentence buffer capacity, in bytes.
pub const DEFAULT_SENTENCE_CAPACITY: usize = 1000;

/// Default number of attempts of an acceptance loop.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// Size limits of a word chain.
///
/// # Invariants
/// - `max_tokens >= 1`
/// - `max_successors >= 1`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainLimits {
	max_tokens: usize,
	max_successors: usize,
}

impl Default for ChainLimits {
	fn default() -> Self {
		Self {
			max_tokens: DEFAULT_MAX_TOKENS,
			max_successors: DEFAULT_MAX_TOKENS / 10,
		}
	}
}

impl ChainLimits {
	/// Creates limits for `max_tokens` tokens, with successor lists sized to
	/// a tenth of it (at least one).
	///
	/// # Errors
	/// Returns an error if `max_tokens` is zero.
	pub fn with_max_tokens(max_tokens: usize) -> Result<Self, ChainError> {
		let mut limits = Self::default();
		limits.set_max_tokens(max_tokens)?;
		limits.max_successors = (max_tokens / 10).max(1);
		Ok(limits)
	}

	pub fn max_tokens(&self) -> usize {
		self.max_tokens
	}

	pub fn max_successors(&self) -> usize {
		self.max_successors
	}

	/// Sets the vocabulary capacity.
	///
	/// # Errors
	/// Returns an error if the value is zero.
	pub fn set_max_tokens(&mut self, max_tokens: usize) -> Result<(), ChainError> {
		if max_tokens == 0 {
			return Err(ChainError::InvalidLimit("max_tokens must be >= 1".to_owned()));
		}
		self.max_tokens = max_tokens;
		Ok(())
	}

	/// Sets the capacity of every successor list.
	///
	/// # Errors
	/// Returns an error if the value is zero.
	pub fn set_max_successors(&mut self, max_successors: usize) -> Result<(), ChainError> {
		if max_successors == 0 {
			return Err(ChainError::InvalidLimit("max_successors must be >= 1".to_owned()));
		}
		self.max_successors = max_successors;
		Ok(())
	}
}

/// Parameters of sentence generation.
///
/// # Invariants
/// - `sentence_capacity >= 2` (one byte is always kept as a margin)
/// - `max_attempts >= 1`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	sentence_capacity: usize,
	max_attempts: usize,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			sentence_capacity: DEFAULT_SENTENCE_CAPACITY,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		}
	}
}

impl GenerationInput {
	/// Sentence buffer capacity. Generated sentences are always strictly shorter.
	pub fn sentence_capacity(&self) -> usize {
		self.sentence_capacity
	}

	/// Number of attempts an acceptance loop makes before giving up.
	pub fn max_attempts(&self) -> usize {
		self.max_attempts
	}

	/// Sets the sentence buffer capacity.
	///
	/// # Errors
	/// Returns an error if the value is lower than 2.
	pub fn set_sentence_capacity(&mut self, capacity: usize) -> Result<(), ChainError> {
		if capacity < 2 {
			return Err(ChainError::InvalidLimit(format!(
				"sentence capacity must be >= 2, got {}",
				capacity
			)));
		}
		self.sentence_capacity = capacity;
		Ok(())
	}

	/// Sets the acceptance loop bound.
	///
	/// # Errors
	/// Returns an error if the value is zero.
	pub fn set_max_attempts(&mut self, attempts: usize) -> Result<(), ChainError> {
		if attempts == 0 {
			return Err(ChainError::InvalidLimit("max_attempts must be >= 1".to_owned()));
		}
		self.max_attempts = attempts;
		Ok(())
	}
}
