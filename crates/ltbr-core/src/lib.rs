//! Core ltbr library (document model, statistics, stores, persistence, config).
//!
//! Everything here is terminal-agnostic. The TUI crate composes these pieces
//! into the interactive reading session.

pub mod clock;
pub mod config;
pub mod corpus;
pub mod links;
pub mod notes;
pub mod progress;
pub mod reading;
pub mod search;
pub mod stats;
pub mod viewport;
pub mod vocabulary;

pub use corpus::{Corpus, sanitize_word};
