//! Error types for the particle force kernel.
//!
//! Only table construction can fail. Force application itself degrades to
//! local fallbacks and never reports errors.

use thiserror::Error;

/// Errors produced while building the precomputed lookup tables.
#[derive(Debug, Error)]
pub enum ForceError {
    /// A table dimension was zero.
    #[error("invalid table size for '{name}': {value} (must be non-zero)")]
    InvalidTableSize { name: &'static str, value: usize },

    /// `width * height` of the noise field overflowed `usize`.
    #[error("noise field size overflow: {width} x {height}")]
    TableSizeOverflow { width: usize, height: usize },
}
