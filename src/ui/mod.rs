//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Line-oriented input
//! - [`output`] - Display formatting for movie records

pub mod output;
pub mod prompts;
