//! Nova native envelopes and conversions to domain types
//!
//! Encodes the `InvokeModel` request body, extracts the answer text from the
//! response envelope, and decodes each streamed chunk into a [`StreamEvent`].

use aws_sdk_bedrockruntime::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_bedrockruntime::types::ResponseStream;
use duet_application::ports::model_transport::TransportError;
use duet_domain::{ControlKind, StreamEvent, TierConfig};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

// ─── Domain → Nova ───────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct NovaRequest<'a> {
    messages: [NovaMessage<'a>; 1],
    #[serde(rename = "inferenceConfig")]
    inference_config: InferenceConfig,
}

#[derive(Debug, Serialize)]
struct NovaMessage<'a> {
    role: &'static str,
    content: [TextBlock<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextBlock<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct InferenceConfig {
    max_new_tokens: u32,
    temperature: f32,
}

/// Encode a single-turn user prompt as a Nova request body.
pub fn encode_request(prompt: &str, tier: &TierConfig) -> Result<Vec<u8>, TransportError> {
    let request = NovaRequest {
        messages: [NovaMessage {
            role: "user",
            content: [TextBlock { text: prompt }],
        }],
        inference_config: InferenceConfig {
            max_new_tokens: tier.max_tokens,
            temperature: tier.temperature,
        },
    };
    serde_json::to_vec(&request)
        .map_err(|e| TransportError::RequestFailed(format!("Failed to encode request: {}", e)))
}

// ─── Nova → Domain ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct NovaResponse {
    output: NovaOutput,
}

#[derive(Debug, Deserialize)]
struct NovaOutput {
    message: NovaResponseMessage,
}

#[derive(Debug, Deserialize)]
struct NovaResponseMessage {
    #[serde(default)]
    content: Vec<NovaContent>,
}

#[derive(Debug, Deserialize)]
struct NovaContent {
    text: Option<String>,
}

/// Extract `output.message.content[0].text` from an `InvokeModel` response body.
pub fn decode_response(body: &[u8]) -> Result<String, TransportError> {
    let response: NovaResponse = serde_json::from_slice(body)
        .map_err(|e| TransportError::MalformedResponse(format!("Invalid response body: {}", e)))?;

    response
        .output
        .message
        .content
        .into_iter()
        .next()
        .and_then(|block| block.text)
        .ok_or_else(|| {
            TransportError::MalformedResponse(
                "Missing output.message.content[0].text".to_string(),
            )
        })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NovaStreamChunk {
    message_start: Option<IgnoredAny>,
    content_block_start: Option<IgnoredAny>,
    content_block_delta: Option<ContentBlockDelta>,
    content_block_stop: Option<IgnoredAny>,
    message_stop: Option<IgnoredAny>,
    metadata: Option<IgnoredAny>,
}

#[derive(Debug, Deserialize)]
struct ContentBlockDelta {
    delta: Option<DeltaBody>,
}

#[derive(Debug, Deserialize)]
struct DeltaBody {
    text: Option<String>,
}

/// Decode the JSON payload of one stream chunk.
pub fn decode_chunk(bytes: &[u8]) -> Result<StreamEvent, TransportError> {
    let chunk: NovaStreamChunk = serde_json::from_slice(bytes)
        .map_err(|e| TransportError::MalformedEvent(format!("Invalid chunk JSON: {}", e)))?;

    if let Some(block) = chunk.content_block_delta {
        return Ok(match block.delta.and_then(|d| d.text) {
            Some(text) => StreamEvent::Delta(text),
            None => StreamEvent::Control(ControlKind::Other("contentBlockDelta".to_string())),
        });
    }

    let kind = if chunk.message_start.is_some() {
        ControlKind::MessageStart
    } else if chunk.content_block_start.is_some() {
        ControlKind::ContentBlockStart
    } else if chunk.content_block_stop.is_some() {
        ControlKind::ContentBlockStop
    } else if chunk.message_stop.is_some() {
        ControlKind::MessageStop
    } else if chunk.metadata.is_some() {
        ControlKind::Metadata
    } else {
        ControlKind::Other("unrecognized chunk".to_string())
    };
    Ok(StreamEvent::Control(kind))
}

/// Decode one event from the Bedrock response stream.
pub fn decode_stream_event(event: &ResponseStream) -> Result<StreamEvent, TransportError> {
    match event {
        ResponseStream::Chunk(part) => match part.bytes() {
            Some(blob) => decode_chunk(blob.as_ref()),
            None => Err(TransportError::MalformedEvent(
                "Chunk without payload bytes".to_string(),
            )),
        },
        other => Ok(StreamEvent::Control(ControlKind::Other(format!("{:?}", other)))),
    }
}

// ─── Errors ──────────────────────────────────────────────────────

/// Convert a Bedrock SDK error to a TransportError.
pub fn convert_sdk_error<E, R>(err: &SdkError<E, R>) -> TransportError
where
    E: ProvideErrorMetadata + std::fmt::Display,
{
    match err {
        SdkError::ServiceError(service_err) => {
            let inner = service_err.err();
            let rendered = inner.to_string();
            classify_service_error(inner.code(), Some(inner.message().unwrap_or(&rendered)))
        }
        SdkError::TimeoutError(_) => TransportError::Timeout,
        SdkError::DispatchFailure(_) => {
            TransportError::ConnectionError("Bedrock dispatch failure".to_string())
        }
        SdkError::ConstructionFailure(_) => {
            TransportError::RequestFailed("Bedrock request could not be built".to_string())
        }
        _ => TransportError::ConnectionError("Bedrock response could not be read".to_string()),
    }
}

/// Map a Bedrock service error code to a TransportError.
pub fn classify_service_error(code: Option<&str>, message: Option<&str>) -> TransportError {
    let message = message.unwrap_or("no message");
    match code {
        Some("ThrottlingException") | Some("ServiceQuotaExceededException") => {
            TransportError::RequestFailed(format!("Bedrock throttled: {}", message))
        }
        Some("ModelNotReadyException")
        | Some("ResourceNotFoundException")
        | Some("AccessDeniedException") => {
            TransportError::ModelNotAvailable(format!("Bedrock model not available: {}", message))
        }
        Some("ModelTimeoutException") => TransportError::Timeout,
        Some("ValidationException") => {
            TransportError::RequestFailed(format!("Bedrock validation error: {}", message))
        }
        Some("ModelStreamErrorException") => {
            TransportError::StreamInterrupted(format!("Bedrock stream error: {}", message))
        }
        Some(code) => TransportError::RequestFailed(format!("Bedrock error {}: {}", code, message)),
        None => TransportError::RequestFailed(format!("Bedrock error: {}", message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_request_shape() {
        let body = encode_request("안녕?", &TierConfig::fast_default()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"][0]["text"], "안녕?");
        assert_eq!(json["inferenceConfig"]["max_new_tokens"], 100);
        let temperature = json["inferenceConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_encode_request_escapes_quotes() {
        let prompt = r#"질문: "what is \n?""#;
        let body = encode_request(prompt, &TierConfig::deep_default()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["messages"][0]["content"][0]["text"], prompt);
    }

    #[test]
    fn test_decode_response_extracts_text() {
        let body = br#"{
            "output": {"message": {"role": "assistant", "content": [{"text": "  Sure!  "}]}},
            "stopReason": "end_turn",
            "usage": {"inputTokens": 10, "outputTokens": 3}
        }"#;
        assert_eq!(decode_response(body).unwrap(), "  Sure!  ");
    }

    #[test]
    fn test_decode_response_empty_text_is_ok() {
        let body = br#"{"output": {"message": {"content": [{"text": ""}]}}}"#;
        assert_eq!(decode_response(body).unwrap(), "");
    }

    #[test]
    fn test_decode_response_missing_content_is_malformed() {
        let body = br#"{"output": {"message": {"content": []}}}"#;
        assert!(matches!(
            decode_response(body),
            Err(TransportError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_decode_response_invalid_json_is_malformed() {
        assert!(matches!(
            decode_response(b"<html>"),
            Err(TransportError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_decode_chunk_delta() {
        let bytes = br#"{"contentBlockDelta": {"delta": {"text": "Hel"}, "contentBlockIndex": 0}}"#;
        assert_eq!(decode_chunk(bytes).unwrap(), StreamEvent::delta("Hel"));
    }

    #[test]
    fn test_decode_chunk_control_events() {
        let cases: [(&[u8], ControlKind); 5] = [
            (br#"{"messageStart": {"role": "assistant"}}"#, ControlKind::MessageStart),
            (br#"{"contentBlockStart": {"start": {}}}"#, ControlKind::ContentBlockStart),
            (br#"{"contentBlockStop": {"contentBlockIndex": 0}}"#, ControlKind::ContentBlockStop),
            (br#"{"messageStop": {"stopReason": "end_turn"}}"#, ControlKind::MessageStop),
            (br#"{"metadata": {"usage": {"inputTokens": 1}}}"#, ControlKind::Metadata),
        ];
        for (bytes, kind) in cases {
            assert_eq!(decode_chunk(bytes).unwrap(), StreamEvent::Control(kind));
        }
    }

    #[test]
    fn test_decode_chunk_delta_without_text_is_control() {
        let bytes = br#"{"contentBlockDelta": {"delta": {"toolUse": {}}}}"#;
        let event = decode_chunk(bytes).unwrap();
        assert_eq!(event.text(), None);
    }

    #[test]
    fn test_decode_chunk_invalid_json_is_malformed_event() {
        let err = decode_chunk(b"{not json").unwrap_err();
        assert!(err.is_malformed_event());
    }

    #[test]
    fn test_classify_service_errors() {
        assert_eq!(
            classify_service_error(Some("ModelTimeoutException"), None),
            TransportError::Timeout
        );
        assert!(matches!(
            classify_service_error(Some("AccessDeniedException"), Some("no access")),
            TransportError::ModelNotAvailable(_)
        ));
        assert!(matches!(
            classify_service_error(Some("ThrottlingException"), Some("slow down")),
            TransportError::RequestFailed(ref m) if m.contains("slow down")
        ));
        assert!(matches!(
            classify_service_error(None, None),
            TransportError::RequestFailed(_)
        ));
    }

    #[test]
    fn test_chunk_without_bytes_is_malformed_event() {
        use aws_sdk_bedrockruntime::types::PayloadPart;

        let event = ResponseStream::Chunk(PayloadPart::builder().build());
        let err = decode_stream_event(&event).unwrap_err();
        assert!(err.is_malformed_event());
    }

    #[test]
    fn test_chunk_with_bytes_is_decoded() {
        use aws_sdk_bedrockruntime::types::PayloadPart;
        use aws_smithy_types::Blob;

        let body = br#"{"contentBlockDelta":{"delta":{"text":"Hi"}}}"#.to_vec();
        let event = ResponseStream::Chunk(PayloadPart::builder().bytes(Blob::new(body)).build());
        assert_eq!(decode_stream_event(&event).unwrap(), StreamEvent::delta("Hi"));
    }
}
