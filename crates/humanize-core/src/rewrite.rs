use serde::{Deserialize, Serialize};

use crate::strength::HumanizationStrength;

/// Body of `POST /rewrite`. Field names are camelCase on the wire.
///
/// `text` defaults to empty rather than failing deserialization, so a
/// missing field reaches the handler's own validation and comes back as a
/// 400 instead of a framework rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub preserve_style: bool,
    /// Raw strength value as submitted. Unrecognized or missing values
    /// behave as `medium`; see [`RewriteRequest::strength`].
    #[serde(default)]
    pub humanization_strength: Option<String>,
}

impl RewriteRequest {
    pub fn strength(&self) -> HumanizationStrength {
        self.humanization_strength
            .as_deref()
            .and_then(HumanizationStrength::parse_str)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteResponse {
    pub rewritten: String,
}
