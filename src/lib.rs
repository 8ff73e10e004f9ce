//! ChatDesk Library
//!
//! Rule-based intent matching for a website FAQ chat widget.

pub mod config;
pub mod core;
pub mod error;
pub mod intents;
pub mod processor;
pub mod responses;
pub mod session;
pub mod utils;

pub use crate::core::classifier::{Classification, IntentClassifier};
pub use intents::Intent;
pub use processor::{ChatProcessor, Reply};
