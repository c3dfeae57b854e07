use std::borrow::Cow;

/// Default delimiters: space, line feed and carriage return.
pub const DEFAULT_DELIMITERS: &[char] = &[' ', '\n', '\r'];

/// Splits raw text into whitespace-delimited tokens.
///
/// Before splitting, every character outside the ASCII printable range is
/// replaced with a space, so control characters never end up inside a token
/// and never glue two tokens together.
#[derive(Clone, Debug)]
pub struct Tokenizer {
	delimiters: Vec<char>,
}

impl Default for Tokenizer {
	fn default() -> Self {
		Self::new(DEFAULT_DELIMITERS)
	}
}

impl Tokenizer {
	/// Creates a tokenizer splitting on the given delimiter characters.
	pub fn new(delimiters: &[char]) -> Self {
		Self { delimiters: delimiters.to_vec() }
	}

	/// Replaces every non printable character with a single space.
	///
	/// Borrows the input untouched when it is already clean.
	pub fn sanitize(text: &str) -> Cow<'_, str> {
		if text.chars().all(is_printable) {
			return Cow::Borrowed(text);
		}
		Cow::Owned(text.chars().map(|c| if is_printable(c) { c } else { ' ' }).collect())
	}

	/// Splits already sanitized text into non-empty tokens.
	pub fn split<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
		text.split(move |c: char| self.delimiters.contains(&c))
			.filter(|token| !token.is_empty())
	}

	/// Sanitizes then splits `text`, returning owned tokens.
	pub fn tokenize(&self, text: &str) -> Vec<String> {
		let clean = Self::sanitize(text);
		self.split(&clean).map(str::to_owned).collect()
	}
}

/// Locale independent equivalent of C `isprint`: `0x20..=0x7E`.
fn is_printable(c: char) -> bool {
	matches!(c, ' '..='~')
}
