//! Bag-of-words feature indexing for short texts.
//!
//! Raw titles and snippets are normalized, split into terms, and counted.
//! Every term receives a stable position in a growing [`Vocabulary`], so a
//! document becomes a sparse term-count [`Vector`] over that shared space.
//!
//! ## Core Types
//!
//! - [`Tokenizer`] — Normalization and alphabet rule (default: [`Alphabet`])
//! - [`Vocabulary`] — Term → index table with document frequencies
//! - [`Vector`] — Sparse index → count mapping
//! - [`Document`] — Caller id, raw text, and its vector
//! - [`Corpus`] — The indexer: ingestion, frequency cutoff, pruning
mod corpus;
mod document;
mod tokenizer;
mod vector;
mod vocabulary;

pub use corpus::*;
pub use document::*;
pub use tokenizer::*;
pub use vector::*;
pub use vocabulary::*;
