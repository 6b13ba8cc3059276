//! Utils module - Shared utilities and helpers

/// Conversions from third-party errors into the crate's error types
pub mod error_helpers;

/// Unicode-aware wrapping and truncation
pub mod text;

/// Input validation
pub mod validation;
