use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ChainError;

/// Reads a whole corpus file into memory.
///
/// - Reads raw bytes, so a corpus that is not valid UTF-8 is still accepted
/// - Invalid sequences become `U+FFFD`, which the tokenizer later blanks out
///   like any other non-printable character
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<String, ChainError> {
	let mut bytes = Vec::new();
	File::open(filename)?.read_to_end(&mut bytes)?;
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}
