//! Classified output of a single gemini.google.com response
//!
//! A [`ModelOutput`] wraps everything the response parser produced for one
//! turn: the continuation metadata, every candidate answer, and which of
//! them is currently selected. Accessors forward to the selected candidate.
//!
//! The selected index is checked when a view is read rather than when the
//! envelope is built, so a malformed envelope can still be logged and
//! inspected in full.

use super::candidate::Candidate;
use super::image::Image;
use super::metadata::ChatMetadata;
use crate::config::constants::model::MAX_METADATA_TOKENS;
use crate::error::{ModelOutputError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput {
    metadata: Vec<String>,
    candidates: Vec<Candidate>,
    /// Signed so that any integer the upstream parser produced is kept and
    /// rejected only when a view is read
    #[serde(default)]
    chosen: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parsed_json: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    raw_body: Option<String>,
}

impl ModelOutput {
    /// Create an envelope selecting the first candidate
    pub fn new(metadata: Vec<String>, candidates: Vec<Candidate>) -> Self {
        Self {
            metadata,
            candidates,
            chosen: 0,
            parsed_json: None,
            raw_body: None,
        }
    }

    /// Set the chosen index without checking it against the candidates
    pub fn with_chosen(mut self, chosen: i64) -> Self {
        self.chosen = chosen;
        self
    }

    /// Attach the parsed response payload for debugging
    pub fn with_parsed_json(mut self, parsed_json: Value) -> Self {
        self.parsed_json = Some(parsed_json);
        self
    }

    /// Attach the unprocessed response text for debugging
    pub fn with_raw_body(mut self, raw_body: impl Into<String>) -> Self {
        self.raw_body = Some(raw_body.into());
        self
    }

    /// Build an envelope from an already-parsed JSON document
    ///
    /// Wrong element types or missing `metadata`/`candidates` are reported as
    /// [`ModelOutputError::Validation`]. Any integer `chosen` is accepted.
    pub fn from_value(value: Value) -> Result<Self> {
        let output: ModelOutput = serde_json::from_value(value)?;
        output.log_construction();
        Ok(output)
    }

    /// Build an envelope from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let output: ModelOutput = serde_json::from_str(json)?;
        output.log_construction();
        Ok(output)
    }

    fn log_construction(&self) {
        debug!(
            candidates = self.candidates.len(),
            chosen = self.chosen,
            "model output constructed"
        );
        if self.metadata.len() > MAX_METADATA_TOKENS {
            warn!(
                tokens = self.metadata.len(),
                "model output metadata has more tokens than [cid, rid, rcid]"
            );
        }
    }

    /// Raw continuation tokens, `[cid, rid, rcid]` or a prefix of it
    pub fn metadata(&self) -> &[String] {
        &self.metadata
    }

    /// Every candidate in the order the service returned them
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Index of the selected candidate, possibly out of range
    pub fn chosen(&self) -> i64 {
        self.chosen
    }

    pub fn parsed_json(&self) -> Option<&Value> {
        self.parsed_json.as_ref()
    }

    pub fn raw_body(&self) -> Option<&str> {
        self.raw_body.as_deref()
    }

    /// Conversation id, the first metadata token
    pub fn cid(&self) -> Option<&str> {
        self.metadata.first().map(String::as_str)
    }

    /// Response id, the second metadata token
    pub fn rid(&self) -> Option<&str> {
        self.metadata.get(1).map(String::as_str)
    }

    /// The candidate selected by `chosen`
    pub fn chosen_candidate(&self) -> Result<&Candidate> {
        usize::try_from(self.chosen)
            .ok()
            .and_then(|index| self.candidates.get(index))
            .ok_or_else(|| {
                debug!(
                    chosen = self.chosen,
                    candidates = self.candidates.len(),
                    "chosen candidate index out of range"
                );
                ModelOutputError::Index {
                    chosen: self.chosen,
                    len: self.candidates.len(),
                }
            })
    }

    /// Answer text of the chosen candidate
    pub fn text(&self) -> Result<&str> {
        self.chosen_candidate().map(Candidate::text)
    }

    /// Reasoning text of the chosen candidate, if it has any
    pub fn thoughts(&self) -> Result<Option<&str>> {
        self.chosen_candidate().map(Candidate::thoughts)
    }

    /// Images attached to the chosen candidate
    pub fn images(&self) -> Result<&[Image]> {
        self.chosen_candidate().map(Candidate::images)
    }

    /// Continuation id of the chosen candidate
    pub fn rcid(&self) -> Result<&str> {
        self.chosen_candidate().map(Candidate::rcid)
    }

    /// Owned copy of [`ModelOutput::text`]
    pub fn to_text(&self) -> Result<String> {
        self.text().map(str::to_string)
    }

    /// Select a different candidate, checking the index up front
    pub fn choose(self, index: usize) -> Result<Self> {
        let len = self.candidates.len();
        match i64::try_from(index) {
            Ok(chosen) if index < len => Ok(self.with_chosen(chosen)),
            _ => Err(ModelOutputError::Index {
                chosen: i64::try_from(index).unwrap_or(i64::MAX),
                len,
            }),
        }
    }

    /// Metadata a follow-up turn sends to continue from the chosen candidate
    pub fn continuation(&self) -> Result<ChatMetadata> {
        let rcid = self.rcid()?;
        Ok(ChatMetadata {
            cid: self.cid().map(str::to_string),
            rid: self.rid().map(str::to_string),
            rcid: Some(rcid.to_string()),
        })
    }
}

/// Writes the chosen candidate's text, or `<Index error: ...>` when `chosen`
/// does not select a candidate. Use [`ModelOutput::text`] to get the error.
impl fmt::Display for ModelOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Ok(text) => f.write_str(text),
            Err(err) => write!(f, "<{err}>"),
        }
    }
}
