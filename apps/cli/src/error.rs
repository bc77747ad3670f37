//! # CLI Error Type
//!
//! Everything that can stop a session from starting or finishing.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CoreError (shopper mistakes, stock limits)                            │
//! │     └── printed by the Session, flow continues   ◄── NOT a CliError     │
//! │                                                                         │
//! │  CliError                                                              │
//! │     ├── Config        bad QUICKMART_* value                            │
//! │     ├── CatalogRead   catalog file missing / unreadable                │
//! │     ├── CatalogParse  catalog file is not the expected JSON            │
//! │     ├── Catalog       catalog data rejected by quickmart-core          │
//! │     └── Io            stdin/stdout failed mid-session                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │     logged at ERROR by `run()`; the process still exits 0              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use quickmart_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not read catalog file {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Catalog file {} is not valid: {source}", .path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog rejected: {0}")]
    Catalog(#[from] CoreError),

    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
