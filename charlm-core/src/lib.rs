//! Character-level Markov language model.
//!
//! This crate provides a fixed-order character model including:
//! - Training from any character stream with a sliding context window
//! - Per-context frequency distributions with cumulative probabilities
//! - Seedable generation by cumulative-probability sampling
//! - Character sources over strings, readers and files
//!
//! Only the model, its configuration and the character sources are
//! exposed. Records and distributions are readable but can only be
//! mutated through training.

/// Language model, training and generation.
///
/// Exposes `LanguageModel`, its configuration and the read-only views
/// over learned distributions.
pub mod model;

/// Character sources used as training input.
pub mod io;

/// Error type shared by the whole crate.
pub mod error;

pub use error::{ModelError, Result};
pub use io::{CharSource, ReaderSource, open_corpus};
pub use model::config::ModelConfig;
pub use model::language_model::LanguageModel;
