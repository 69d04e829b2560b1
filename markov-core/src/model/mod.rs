//! Top-level module for the Markov generation system.
//!
//! This module provides a word-level first-order Markov generator, including:
//! - Token interning (`Interner`, `TokenId`)
//! - Successor adjacency lists (`SuccessorTable`)
//! - The built model and its single-pass construction (`Model`, `build_model`)
//! - Random-walk sentence generation (implemented on `Model`)

/// Deduplicating token table mapping text to dense ids.
///
/// Backed by a fixed-size open-addressing hash index over borrowed
/// string slices. The index capacity is a documented hard limit.
pub mod interner;

/// Per-token successor lists.
///
/// Append-only adjacency lists in observation order; duplicates are kept
/// so uniform sampling reproduces empirical next-word frequencies.
pub mod successors;

/// The built model and the single-pass tokenize/intern/record construction.
pub mod markov_model;

/// Sentence generation by random walk, with rejection sampling on the
/// final punctuation mark.
pub mod generator;
