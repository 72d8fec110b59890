//! Application initialization.
//!
//! This module provides the logger setup used by the CLI binary. There are
//! no other shared resources to initialize: the whole run is one synchronous
//! pass over one in-memory buffer.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
