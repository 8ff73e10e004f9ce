//! Core processing modules
//!
//! Text normalization, phrase matching and intent classification.

pub mod classifier;
pub mod pattern_matcher;
pub mod text_normalizer;
