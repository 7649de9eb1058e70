//! HTTP client for `POST /v1beta/models/{model}:generateContent`.

use super::error::GeminiError;
use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::settings::ApiKey;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// A text generation backend: one request in, the generated text out.
pub trait TextModel {
    fn generate_text(
        &self,
        request: &GenerateContentRequest,
    ) -> impl Future<Output = Result<String, GeminiError>> + Send;
}

/// Gemini API client bound to one model.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: Url,
    api_key: ApiKey,
}

impl GeminiClient {
    /// Build a client for `model` under `base_url`. `timeout` bounds each
    /// HTTP request (connect through body).
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: ApiKey,
        timeout: Duration,
    ) -> Result<Self, GeminiError> {
        let endpoint = endpoint(base_url, model)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }
}

impl TextModel for GeminiClient {
    async fn generate_text(&self, request: &GenerateContentRequest) -> Result<String, GeminiError> {
        tracing::debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-goog-api-key", self.api_key.expose())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::http(status.as_u16(), body));
        }

        let resp: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::InvalidResponse(e.to_string()))?;
        if let Some(version) = &resp.model_version {
            tracing::debug!("response from model version {}", version);
        }

        match resp.first_text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(GeminiError::EmptyText {
                reason: empty_reason(&resp),
            }),
        }
    }
}

/// Why a response carried no text, when the API says so.
fn empty_reason(resp: &GenerateContentResponse) -> Option<String> {
    if let Some(reason) = resp
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        return Some(format!("blocked: {}", reason));
    }
    resp.candidates
        .first()
        .and_then(|c| c.finish_reason.as_deref())
        .map(|r| format!("finish reason: {}", r))
}

/// `{base_url}/v1beta/models/{model}:generateContent`. A leading `models/`
/// on the model name is accepted and dropped.
pub(crate) fn endpoint(base_url: &str, model: &str) -> Result<Url, GeminiError> {
    let model = model.trim();
    let model = model.strip_prefix("models/").unwrap_or(model);
    if model.is_empty() {
        return Err(GeminiError::InvalidEndpoint("empty model name".to_string()));
    }

    let mut url = Url::parse(base_url)
        .map_err(|e| GeminiError::InvalidEndpoint(format!("{}: {}", base_url, e)))?;
    let action = format!("{}:generateContent", model);
    url.path_segments_mut()
        .map_err(|_| GeminiError::InvalidEndpoint(format!("{} cannot be a base URL", base_url)))?
        .pop_if_empty()
        .extend(["v1beta", "models", action.as_str()]);
    Ok(url)
}
