//! Top-level module for the character language model.
//!
//! This module provides:
//! - Per-character observation records (`CharData`)
//! - Per-context distributions and their normalization (`Distribution`)
//! - The trainable model itself (`LanguageModel`)
//! - Cumulative-probability sampling and generation (`generator`)
//! - Model construction parameters (`ModelConfig`)

/// One observed continuation character with its count and probabilities.
pub mod char_data;

/// Ordered continuation records for a single context.
///
/// Handles count accumulation, normalization into probabilities
/// and cumulative-probability lookup.
pub mod distribution;

/// Fixed-order character model (`window_length >= 1`).
///
/// Handles stream training, merging and read access to contexts.
pub mod language_model;

/// Text generation by walking the context map.
///
/// Exposes the sampling rule and the generation loop over any `rand::Rng`.
pub mod generator;

/// Construction parameters (window length, optional seed).
pub mod config;
