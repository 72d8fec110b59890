//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for script block extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The document contains no `<script>` block.
    #[error("No <script> block found")]
    NoScriptBlock,
}
