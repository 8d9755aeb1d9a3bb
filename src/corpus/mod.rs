//! Corpus: the sentence pairs the drill works through
//!
//! # Components
//! - `store.rs`: SentenceStore with id lookup, range queries and sampling
//! - `loader.rs`: line-pair corpus parsing (file or embedded)

pub mod loader;
pub mod store;

pub use loader::Corpus;
pub use store::{Sentence, SentenceStore};
