//! Terminal helpers for fuzzrank tools
//!
//! Provides shared CLI functionality:
//! - Status messages and ranked result formatting
//! - Progress indicators

#![warn(missing_docs)]

pub mod output;
pub mod progress;
