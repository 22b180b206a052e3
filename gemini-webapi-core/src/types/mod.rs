//! Response data model
//!
//! [`ModelOutput`] is the envelope returned for one turn; it owns the
//! [`Candidate`] answers and each candidate owns its [`Image`]s.

pub mod candidate;
pub mod image;
pub mod metadata;
pub mod model_output;

pub use candidate::Candidate;
pub use image::{Image, ImageKind};
pub use metadata::ChatMetadata;
pub use model_output::ModelOutput;
