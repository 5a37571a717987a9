//! Validation utilities
//!
//! Re-reads compiled output the way the front-end would consume it.

mod roundtrip;

pub use roundtrip::{validate_output, ValidationSummary};
