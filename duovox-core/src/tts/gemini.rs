//! Gemini TTS client.
//!
//! Exactly one `generateContent` call per run. The HTTP client carries a
//! bounded timeout; expiry surfaces as [`Error::RequestTimeout`], distinct
//! from other request failures.

use anyhow::anyhow;
use base64::Engine as _;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Error;
use crate::tts::provider::SpeechSynthesizer;
use crate::tts::request;
use crate::tts::types::{AudioData, SynthesisRequest};

#[derive(Clone)]
pub struct GeminiSynthesizer {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiSynthesizer {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Request(anyhow!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for GeminiSynthesizer {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioData, Error> {
        let wire = request::to_wire(request);
        let url = format!("{}/models/{}:generateContent", self.base_url, request.model);

        debug!(model = %request.model, "sending synthesis request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&wire)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::RequestTimeout(anyhow!("no response within the request deadline: {e}"))
                } else {
                    Error::Request(anyhow!("network error: {e}"))
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                Error::RequestTimeout(anyhow!("response body timed out: {e}"))
            } else {
                Error::Request(anyhow!("failed to read response body: {e}"))
            }
        })?;

        if !status.is_success() {
            debug!(?status, body = %body, "Gemini API returned error");
            return Err(Error::Request(anyhow!("Gemini API error {status}: {body}")));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            Error::Request(anyhow!(
                "failed to parse Gemini response: {e} - response: {body}"
            ))
        })?;

        let part = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .ok_or_else(|| Error::Request(anyhow!("no candidates in response")))?;

        let inline = part
            .inline_data
            .ok_or_else(|| Error::Request(anyhow!("response part carries no audio data")))?;

        let data = base64::engine::general_purpose::STANDARD
            .decode(inline.data.as_bytes())
            .map_err(|e| Error::Request(anyhow!("invalid base64 audio payload: {e}")))?;

        info!(
            bytes = data.len(),
            mime_type = %inline.mime_type,
            "received audio payload"
        );

        Ok(AudioData {
            data,
            mime_type: inline.mime_type,
        })
    }
}

// Gemini generateContent response types

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}
