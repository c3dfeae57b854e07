use std::collections::HashMap;

use crate::error::ChainError;

/// Identity of an interned token.
///
/// Identities are handed out sequentially in first-seen order, so a
/// `TokenId` is also the index of the token inside its [`Vocabulary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(usize);

impl TokenId {
	/// Returns the insertion index of the token.
	pub fn index(self) -> usize {
		self.0
	}
}

/// Registry of every distinct token seen in a text.
///
/// The vocabulary maps a surface string to a stable identity and back.
/// It only grows while a chain is built and is read-only afterwards.
///
/// ## Invariants
/// - No two entries share the same surface string (comparison is exact and case-sensitive)
/// - `tokens.len() <= capacity`
/// - Every id stored in `index` points inside `tokens`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
	/// Surface strings indexed by `TokenId`.
	tokens: Vec<Box<str>>,
	/// Reverse lookup: surface string to identity.
	index: HashMap<Box<str>, TokenId>,
	/// Maximum number of distinct tokens.
	capacity: usize,
}

impl Vocabulary {
	/// Creates an empty vocabulary able to hold `capacity` distinct tokens.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			tokens: Vec::new(),
			index: HashMap::new(),
			capacity,
		}
	}

	/// Returns the identity of `token`, registering it first if needed.
	///
	/// # Errors
	/// Returns [`ChainError::VocabularyFull`] if `token` is new and the
	/// vocabulary already holds `capacity` tokens.
	pub fn intern(&mut self, token: &str) -> Result<TokenId, ChainError> {
		if let Some(id) = self.index.get(token) {
			return Ok(*id);
		}
		if self.tokens.len() >= self.capacity {
			return Err(ChainError::VocabularyFull { capacity: self.capacity });
		}

		let id = TokenId(self.tokens.len());
		let owned: Box<str> = token.into();
		self.tokens.push(owned.clone());
		self.index.insert(owned, id);
		Ok(id)
	}

	/// Looks up an already registered token.
	pub fn lookup(&self, token: &str) -> Option<TokenId> {
		self.index.get(token).copied()
	}

	/// Returns the surface string of `id`, if it belongs to this vocabulary.
	pub fn get(&self, id: TokenId) -> Option<&str> {
		self.tokens.get(id.0).map(|t| &**t)
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Iterates over `(id, surface)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (TokenId, &str)> {
		self.tokens.iter().enumerate().map(|(i, t)| (TokenId(i), &**t))
	}
}
