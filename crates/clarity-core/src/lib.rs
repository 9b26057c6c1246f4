//! # Clarity-Core
//!
//! Core types and utilities for the Clarity nonverbal communication
//! metrics engine: landmark data model, fixed landmark index tables,
//! geometry helpers, and the shared error type.

pub mod error;
pub mod geometry;
pub mod landmarks;
pub mod stats;
pub mod types;

pub use error::{Error, Result};
pub use geometry::*;
pub use stats::*;
pub use types::*;
