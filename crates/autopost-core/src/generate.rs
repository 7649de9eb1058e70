//! One post generation: build the request, call the model under the retry
//! policy, hand back the raw text.

use crate::gemini::{GeminiClient, GeminiError, GenerateContentRequest, TextModel};
use crate::prompt;
use crate::retry::{self, RetryPolicy};
use crate::settings::RunSettings;

/// Call `model` with `request`, retrying throttled or unavailable responses.
pub async fn generate_with<M: TextModel>(
    model: &M,
    request: &GenerateContentRequest,
    policy: &RetryPolicy,
) -> Result<String, GeminiError> {
    retry::run_with_retry(policy, || model.generate_text(request)).await
}

/// Generate one post against the Gemini API described by `settings`.
pub async fn generate_post(settings: &RunSettings) -> Result<String, GeminiError> {
    let client = GeminiClient::new(
        &settings.base_url,
        &settings.model,
        settings.api_key.clone(),
        settings.request_timeout,
    )?;
    let request = prompt::build_request(&settings.generation);
    tracing::info!(
        "requesting post from {} (up to {} attempts)",
        settings.model,
        settings.retry.max_attempts()
    );
    generate_with(&client, &request, &settings.retry).await
}
