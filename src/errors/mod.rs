//! Error types for the front end.
//!
//! This module defines the diagnostics recorded while parsing:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of malformed input
//! - Helpful suggestions for reporting

pub mod errors;
