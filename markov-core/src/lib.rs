//! First-order Markov sentence generation library.
//!
//! This crate builds a word-level Markov model from a body of text and
//! generates novel sentences from it, including:
//! - Token interning (deduplicated text-to-id mapping over borrowed slices)
//! - Successor tables (observed next-word adjacency lists)
//! - Random-walk sentence generation with punctuation-targeted sampling
//! - Corpus loading and sanitization helpers for the binaries
//!
//! The model borrows every token from the caller's text buffer; nothing is
//! copied during the build pass and nothing is mutated after it.

/// Core Markov model and generation logic.
///
/// This module exposes the model build entry point and the generation
/// interface while keeping internal storage layouts private.
pub mod model;

/// Corpus helpers (file loading, byte sanitization).
///
/// Collaborators around the model: the model itself never performs I/O.
pub mod corpus;
