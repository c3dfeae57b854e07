use thiserror::Error;

/// Errors raised while building a word chain or generating sentences.
#[derive(Error, Debug)]
pub enum ChainError {
	/// A new token had to be registered but the vocabulary is full.
	///
	/// This is not recoverable: the source text is too large for the
	/// configured model size.
	#[error("Token limit reached: the vocabulary holds at most {capacity} tokens")]
	VocabularyFull { capacity: usize },

	#[error("No token can start a sentence (no token begins with an uppercase letter)")]
	NoSentenceStart,

	#[error("No accepted sentence after {attempts} attempts")]
	AttemptsExhausted { attempts: usize },

	#[error("Invalid limit: {0}")]
	InvalidLimit(String),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}
