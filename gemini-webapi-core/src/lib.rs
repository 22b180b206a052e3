//! # gemini-webapi-core
//!
//! Data model for responses parsed from gemini.google.com.
//!
//! A single turn is represented by a [`ModelOutput`]: the `[cid, rid, rcid]`
//! continuation metadata, every [`Candidate`] answer the service returned,
//! the index of the candidate in use, and optionally the raw and parsed
//! response bodies for debugging. Views such as [`ModelOutput::text`] forward
//! to the chosen candidate and fail with [`ModelOutputError::Index`] when the
//! index does not select one.
//!
//! ```rust
//! use gemini_webapi_core::{Candidate, ModelOutput};
//!
//! let output = ModelOutput::new(
//!     vec!["c_123".to_string(), "r_456".to_string()],
//!     vec![Candidate::new("rc_789", "hello")],
//! );
//!
//! assert_eq!(output.text()?, "hello");
//! assert_eq!(output.continuation()?.to_tokens(), ["c_123", "r_456", "rc_789"]);
//! # Ok::<(), gemini_webapi_core::ModelOutputError>(())
//! ```
//!
//! The `config` module holds the settings used when rendering saved
//! responses.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ConfigManager, DisplayConfig, GeminiWebConfig, LoggingConfig};
pub use error::{ModelOutputError, Result};
pub use types::{Candidate, ChatMetadata, Image, ImageKind, ModelOutput};
