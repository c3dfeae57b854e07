/// Characters that end a sentence when they close a token.
pub const TERMINATORS: [char; 3] = ['.', '?', '!'];

/// Last character of `text`, if any.
pub fn last_char(text: &str) -> Option<char> {
	text.chars().next_back()
}

/// Returns whether `token` ends a sentence.
pub fn is_terminator(token: &str) -> bool {
	last_char(token).is_some_and(|c| TERMINATORS.contains(&c))
}

/// Bounded text buffer a sentence is accumulated into.
///
/// The buffer refuses any append that would bring its length to
/// `capacity - 1` bytes or more, so its content is always strictly shorter
/// than `capacity`. The capacity is a logical bound only: storage grows with
/// the content.
#[derive(Clone, Debug)]
pub struct Sentence {
	text: String,
	capacity: usize,
}

impl Sentence {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			text: String::new(),
			capacity,
		}
	}

	/// Returns whether a first token of `len` bytes fits in an empty buffer.
	pub fn fits_first(&self, len: usize) -> bool {
		len + 1 < self.capacity
	}

	/// Appends `token`, preceded by a space unless the buffer is empty.
	///
	/// Returns `false`, leaving the buffer untouched, if the result would not
	/// fit.
	pub fn try_push(&mut self, token: &str) -> bool {
		let separator = usize::from(!self.text.is_empty());
		let next_len = self.text.len() + separator + token.len();
		if next_len + 1 >= self.capacity {
			return false;
		}

		if separator == 1 {
			self.text.push(' ');
		}
		self.text.push_str(token);
		true
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}

	pub fn len(&self) -> usize {
		self.text.len()
	}

	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	/// Empties the buffer for a new attempt.
	pub fn clear(&mut self) {
		self.text.clear();
	}

	pub fn into_string(self) -> String {
		self.text
	}
}
