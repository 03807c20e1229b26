use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ServiceError;

/// Substituted when the completion API answers 200 without usable content.
pub const REWRITE_FALLBACK: &str = "Rewrite failed.";

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Produces a rewritten version of a text given a system instruction.
///
/// Routes program against this trait. `OpenAiRewriter` is the live
/// implementation; tests substitute their own.
#[async_trait]
pub trait Rewriter: Send + Sync {
    fn name(&self) -> &'static str;
    async fn rewrite(&self, instruction: &str, text: &str) -> Result<String, ServiceError>;
}

/// Live rewriter backed by an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiRewriter {
    base_url: String,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl OpenAiRewriter {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        model: &str,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: model.to_string(),
            timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Rewriter for OpenAiRewriter {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn rewrite(&self, instruction: &str, text: &str) -> Result<String, ServiceError> {
        // Checked here, before the outbound call, so a missing key fails
        // fast instead of surfacing as an upstream 401.
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ServiceError::Configuration(
                "no rewrite API key configured (set OPENAI_API_KEY)".into(),
            )
        })?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: instruction,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let resp = self
            .client
            .post(format!("{}{CHAT_COMPLETIONS_PATH}", self.base_url))
            .bearer_auth(api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Internal(format!("rewrite request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = error_detail(resp).await;
            warn!("chat completion API returned {status}: {detail}");
            return Err(ServiceError::Upstream(format!(
                "chat completion API error ({status}): {detail}"
            )));
        }

        let completion: ChatResponse = resp
            .json()
            .await
            .map_err(|e| ServiceError::Internal(format!("decode completion: {e}")))?;

        Ok(extract_rewritten(completion))
    }
}

/// First completion's message content, or the fixed fallback text when the
/// body carries no usable completion.
fn extract_rewritten(resp: ChatResponse) -> String {
    resp.choices
        .into_iter()
        .flatten()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .unwrap_or_else(|| REWRITE_FALLBACK.to_string())
}

/// Best-effort error message from a failed upstream body
/// (`{"error": {"message": ...}}` on this API).
async fn error_detail(resp: reqwest::Response) -> String {
    let body = resp.text().await.unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(String::from))
        .unwrap_or(body)
}

// --- API types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_first_choice_content() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"content": "Echo: hello"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_rewritten(resp), "Echo: hello");
    }

    #[test]
    fn extract_takes_first_of_many() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"choices": [
                {"message": {"content": "first"}},
                {"message": {"content": "second"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(extract_rewritten(resp), "first");
    }

    #[test]
    fn missing_choices_yields_fallback() {
        let resp: ChatResponse = serde_json::from_str(r#"{"id": "cmpl-1"}"#).unwrap();
        assert_eq!(extract_rewritten(resp), REWRITE_FALLBACK);
    }

    #[test]
    fn empty_choices_yields_fallback() {
        let resp: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(extract_rewritten(resp), REWRITE_FALLBACK);
    }

    #[test]
    fn choice_without_content_yields_fallback() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"role": "assistant"}}]}"#).unwrap();
        assert_eq!(extract_rewritten(resp), REWRITE_FALLBACK);
    }

    #[tokio::test]
    async fn missing_key_fails_fast() {
        let rewriter = OpenAiRewriter::new(
            "http://127.0.0.1:9",
            None,
            "gpt-4.1",
            Duration::from_secs(1),
        );
        let err = rewriter.rewrite("instruction", "text").await.unwrap_err();
        assert!(matches!(err, ServiceError::Configuration(_)));
    }

    #[test]
    fn chat_request_wire_shape() {
        let body = ChatRequest {
            model: "gpt-4.1",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "instruction",
                },
                ChatMessage {
                    role: "user",
                    content: "text",
                },
            ],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4.1");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "text");
    }
}
