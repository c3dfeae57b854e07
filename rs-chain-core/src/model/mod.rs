//! Top-level module for the word chain system.
//!
//! This module provides a first-order word-level Markov chain, including:
//! - Text splitting (`Tokenizer`)
//! - Token interning (`Vocabulary`)
//! - Successor recording and sampling (`SuccessorTable`)
//! - The chain built from a text (`WordChain`)
//! - A high-level generation interface (`SentenceGenerator`)

/// Size limits and generation parameters.
pub mod config;

/// Word chain built from a text.
///
/// Owns the vocabulary and the successor table, and exposes the sentence starts.
pub mod chain;

/// High-level interface for generating sentences from a `WordChain`.
///
/// Exposes single random walks and bounded acceptance loops.
pub mod generator;

/// Bounded sentence buffer and terminator detection.
pub mod sentence;

/// Per-token successor lists with frequency-weighted sampling.
pub mod successor;

/// Interned tokens and their registry.
pub mod token;

/// Whitespace tokenizer with non-printable character sanitization.
pub mod tokenizer;
