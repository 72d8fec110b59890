//! Error handling.
//!
//! This module defines the typed errors surfaced by the library:
//! - Initialization failures (logger setup)
//! - Script extraction failures (no `<script>` block in the document)
//!
//! An unexpected closing delimiter is deliberately NOT an error type: the
//! scanner reports it as a normal `ScanOutcome` variant, since finding one
//! is the tool's purpose rather than a failure.

mod types;

// Re-export public API
pub use types::{ExtractionError, InitializationError};
