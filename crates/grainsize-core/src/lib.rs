//! Core utilities for the grainsize toolkit
//!
//! This crate owns the unified error type shared by every grainsize crate
//! and a handful of closed-form sample statistics (means, Bessel-corrected
//! spread, median) that the histogram, stereology, and averages crates all
//! rely on.

pub mod error;
pub mod sample;

pub use error::{Error, Result};
