//! HTTP client for the generation backend

use super::{Operation, RemoteReply, TransportError};
use crate::config::BackendConfig;
use crate::conversation::{Role, Turn};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Common interface to the generation backend
///
/// One bounded request/response exchange per call; failures are terminal for
/// that call (retry policy, if any, belongs to the caller — and the session
/// controller deliberately performs none).
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn call(
        &self,
        history: &[Turn],
        operation: Operation,
    ) -> Result<RemoteReply, TransportError>;
}

/// Render the conversation for the wire: `"<role>: <content>"` per turn,
/// user and assistant roles only, conversation order preserved.
pub fn serialize_history(history: &[Turn]) -> Vec<String> {
    history
        .iter()
        .filter(|turn| matches!(turn.role, Role::User | Role::Assistant))
        .map(|turn| format!("{}: {}", turn.role.as_str(), turn.content))
        .collect()
}

/// Reqwest-backed client for the story-brewing backend
pub struct HttpGenerationClient {
    client: Client,
    base_url: String,
}

impl HttpGenerationClient {
    pub fn new(config: &BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GenerationClient for HttpGenerationClient {
    async fn call(
        &self,
        history: &[Turn],
        operation: Operation,
    ) -> Result<RemoteReply, TransportError> {
        let url = format!("{}{}", self.base_url, operation.endpoint_suffix());
        let payload = GenerateRequest {
            chat_history: serialize_history(history),
        };

        let start = std::time::Instant::now();
        let result = self.exchange(&url, &payload, operation).await;
        let duration = start.elapsed();

        match &result {
            Ok(_) => {
                tracing::info!(
                    operation = operation.name(),
                    duration_ms = %duration.as_millis(),
                    turns = history.len(),
                    "Generation request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    operation = operation.name(),
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "Generation request failed"
                );
            }
        }

        result
    }
}

impl HttpGenerationClient {
    async fn exchange(
        &self,
        url: &str,
        payload: &GenerateRequest,
        operation: Operation,
    ) -> Result<RemoteReply, TransportError> {
        let response = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::timeout(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    TransportError::network(format!("Connection failed: {e}"))
                } else {
                    TransportError::network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(TransportError::http(format!("HTTP {status}: {body}")));
        }

        decode_reply(operation, &body)
    }
}

/// Decode a 2xx response body into a typed reply.
///
/// The `success` field is required; its absence means the body is not from
/// our backend contract and is treated as malformed rather than defaulted.
fn decode_reply(operation: Operation, body: &str) -> Result<RemoteReply, TransportError> {
    let decoded: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| TransportError::malformed(format!("Failed to parse response: {e}")))?;

    let Some(success) = decoded.success else {
        return Err(TransportError::malformed(
            "Response is missing the `success` field",
        ));
    };

    if !success {
        let message = decoded
            .error
            .unwrap_or_else(|| "Backend reported failure without an error message".to_string());
        let mut err = TransportError::remote(message);
        if let Some(details) = decoded.details {
            err = err.with_detail(details);
        }
        return Err(err);
    }

    match operation {
        Operation::NextQuestion => Ok(RemoteReply::NextQuestion {
            next_question: decoded.next_question,
        }),
        Operation::FinalizeScript => {
            let script = decoded.script.ok_or_else(|| {
                TransportError::malformed("Successful response is missing the `script` field")
            })?;
            Ok(RemoteReply::Script { script })
        }
    }
}

// Wire types

#[derive(Debug, Serialize)]
struct GenerateRequest {
    chat_history: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    success: Option<bool>,
    next_question: Option<String>,
    script: Option<String>,
    error: Option<String>,
    details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportErrorKind;

    #[test]
    fn test_serialize_history_format_and_order() {
        let history = vec![Turn::assistant("A"), Turn::user("B")];
        assert_eq!(
            serialize_history(&history),
            vec!["assistant: A".to_string(), "user: B".to_string()]
        );
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = GenerateRequest {
            chat_history: serialize_history(&[Turn::assistant("嗨"), Turn::user("你好")]),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "chat_history": ["assistant: 嗨", "user: 你好"] })
        );
    }

    #[test]
    fn test_decode_next_question_success() {
        let body = r#"{"success": true, "next_question": "丢钱包后你第一反应是什么？"}"#;
        let reply = decode_reply(Operation::NextQuestion, body).unwrap();
        assert_eq!(
            reply,
            RemoteReply::NextQuestion {
                next_question: Some("丢钱包后你第一反应是什么？".to_string())
            }
        );
    }

    #[test]
    fn test_decode_next_question_missing_field_is_none() {
        let body = r#"{"success": true}"#;
        let reply = decode_reply(Operation::NextQuestion, body).unwrap();
        assert_eq!(reply, RemoteReply::NextQuestion { next_question: None });
    }

    #[test]
    fn test_decode_script_success() {
        let body = r#"{"success": true, "script": "最终短文"}"#;
        let reply = decode_reply(Operation::FinalizeScript, body).unwrap();
        assert_eq!(
            reply,
            RemoteReply::Script {
                script: "最终短文".to_string()
            }
        );
    }

    #[test]
    fn test_decode_missing_success_is_malformed() {
        let body = r#"{"next_question": "q"}"#;
        let err = decode_reply(Operation::NextQuestion, body).unwrap_err();
        assert_eq!(err.kind, TransportErrorKind::Malformed);
    }

    #[test]
    fn test_decode_undecodable_body_is_malformed() {
        let err = decode_reply(Operation::NextQuestion, "<html>gateway error</html>").unwrap_err();
        assert_eq!(err.kind, TransportErrorKind::Malformed);
    }

    #[test]
    fn test_decode_remote_failure_carries_error_and_details() {
        let body = r#"{"success": false, "error": "生成失败", "details": "colab offline"}"#;
        let err = decode_reply(Operation::FinalizeScript, body).unwrap_err();
        assert_eq!(err.kind, TransportErrorKind::Remote);
        assert_eq!(err.message, "生成失败");
        assert_eq!(err.detail.as_deref(), Some("colab offline"));
    }

    #[test]
    fn test_decode_successful_script_without_script_field_is_malformed() {
        let body = r#"{"success": true}"#;
        let err = decode_reply(Operation::FinalizeScript, body).unwrap_err();
        assert_eq!(err.kind, TransportErrorKind::Malformed);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = crate::config::BackendConfig::new("http://example.com/");
        let client = HttpGenerationClient::new(&config);
        assert_eq!(client.base_url, "http://example.com");
    }
}
