use crate::config::constants::model::MAX_METADATA_TOKENS;
use crate::error::{ModelOutputError, Result};
use serde::{Deserialize, Serialize};

/// Typed view of the `[cid, rid, rcid]` continuation tokens
///
/// The upstream service returns between zero and three tokens; trailing
/// tokens it did not send are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMetadata {
    /// Conversation id
    pub cid: Option<String>,
    /// Response id
    pub rid: Option<String>,
    /// Candidate id
    pub rcid: Option<String>,
}

impl ChatMetadata {
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        if tokens.len() > MAX_METADATA_TOKENS {
            return Err(ModelOutputError::Validation(format!(
                "metadata cannot exceed {MAX_METADATA_TOKENS} elements, got {}",
                tokens.len()
            )));
        }

        let token = |index: usize| tokens.get(index).map(|t| t.as_ref().to_string());
        Ok(Self {
            cid: token(0),
            rid: token(1),
            rcid: token(2),
        })
    }

    /// Tokens up to the last present one, gaps filled with empty strings
    pub fn to_tokens(&self) -> Vec<String> {
        let slots = [&self.cid, &self.rid, &self.rcid];
        let len = slots
            .iter()
            .rposition(|slot| slot.is_some())
            .map_or(0, |last| last + 1);

        slots[..len]
            .iter()
            .map(|slot| slot.as_deref().unwrap_or_default().to_string())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cid.is_none() && self.rid.is_none() && self.rcid.is_none()
    }
}
