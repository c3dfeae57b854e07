//! Word-level Markov chain sentence generation library.
//!
//! This crate provides a first-order word chain system including:
//! - Whitespace tokenization with token interning
//! - Successor tables recording which word follows which
//! - Random-walk sentence generation with an injectable random source
//! - Bounded acceptance loops for sentences ending with a given terminator
//!
//! Typical usage builds a [`model::chain::WordChain`] from a text and then
//! borrows it from a [`model::generator::SentenceGenerator`].

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// Word chain model and sentence generation logic.
///
/// This module exposes the high-level chain and generator interfaces along
/// with the registry and table they are built upon.
pub mod model;

/// I/O utilities (corpus loading).
pub mod io;

pub use error::ChainError;
