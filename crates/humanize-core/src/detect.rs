use serde::{Deserialize, Serialize};

/// Body of `POST /detect`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectRequest {
    #[serde(default)]
    pub text: String,
    /// Caller's hint that the text is a rewritten/humanized version.
    /// Only consulted by the mock detector to pick its score range.
    #[serde(default)]
    pub is_rewritten: bool,
}

/// Body of a successful `POST /detect` response.
///
/// `aiProbability` is optional in the schema so clients keep working against
/// deployments that answer without a score. This server always fills it in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_probability: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mock_data: Option<bool>,
}

/// What a detector reports for one text: a 0–100 score and whether it was
/// synthesized rather than obtained from the real detection API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub ai_probability: u8,
    pub mocked: bool,
}
