use crate::{
    AnthropicContentBlock, AnthropicImageSource, AnthropicMessage, AnthropicRequest,
    AnthropicResponse,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use std::time::Duration;
use stillmotion_core::{GenerateRequest, GenerateResponse, Input, MediaSource, Output, Role};
use stillmotion_error::{RewriteError, RewriteErrorKind, StillmotionResult};
use stillmotion_interface::{PromptDriver, Vision};
use tracing::{debug, error, instrument};

/// Default Messages API endpoint.
pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 1024;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Anthropic API client.
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    api_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., "claude-3-5-sonnet-20241022")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new Anthropic client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            api_url: ANTHROPIC_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Points the client at a different endpoint (proxies, tests).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends a request to the Anthropic API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate_anthropic(
        &self,
        request: &AnthropicRequest,
    ) -> Result<AnthropicResponse, RewriteError> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                RewriteError::new(RewriteErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(RewriteError::new(RewriteErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let anthropic_response: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            RewriteError::new(RewriteErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!(
            response_id = %anthropic_response.id(),
            input_tokens = anthropic_response.usage().input_tokens(),
            output_tokens = anthropic_response.usage().output_tokens(),
            "Received response from Anthropic"
        );
        Ok(anthropic_response)
    }

    /// Converts a stillmotion GenerateRequest to an Anthropic API request.
    #[instrument(skip(self, request))]
    pub(crate) fn convert_request(
        &self,
        request: &GenerateRequest,
    ) -> Result<AnthropicRequest, RewriteError> {
        debug!("Converting GenerateRequest to AnthropicRequest");

        if request.messages().is_empty() {
            return Err(RewriteError::new(RewriteErrorKind::Builder(
                "Request must contain at least one message".to_string(),
            )));
        }

        let messages = request
            .messages()
            .iter()
            .map(|msg| {
                let content: Vec<AnthropicContentBlock> =
                    msg.content.iter().map(convert_input).collect();

                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };

                AnthropicMessage::builder()
                    .role(role)
                    .content(content)
                    .build()
                    .map_err(|e| RewriteError::new(RewriteErrorKind::Builder(e.to_string())))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let model = request.model().clone().unwrap_or_else(|| self.model.clone());

        AnthropicRequest::builder()
            .model(model)
            .max_tokens(request.max_tokens().unwrap_or(DEFAULT_MAX_TOKENS))
            .messages(messages)
            .system(request.system().clone())
            .temperature(*request.temperature())
            .build()
            .map_err(|e| RewriteError::new(RewriteErrorKind::Builder(e.to_string())))
    }

    /// Converts an Anthropic API response to a stillmotion GenerateResponse.
    fn convert_response(response: &AnthropicResponse) -> GenerateResponse {
        let outputs = response
            .content()
            .iter()
            .filter(|block| block.kind() == "text")
            .filter_map(|block| block.text().clone())
            .map(Output::Text)
            .collect();

        GenerateResponse { outputs }
    }
}

fn convert_input(input: &Input) -> AnthropicContentBlock {
    match input {
        Input::Text(text) => AnthropicContentBlock::Text { text: text.clone() },
        Input::Image { mime, source } => {
            let media_type = mime.clone().unwrap_or_else(|| "image/png".to_string());
            let source = match source {
                MediaSource::Base64(data) => AnthropicImageSource::Base64 {
                    media_type,
                    data: data.clone(),
                },
                MediaSource::Binary(bytes) => AnthropicImageSource::Base64 {
                    media_type,
                    data: STANDARD.encode(bytes),
                },
                MediaSource::Url(url) => AnthropicImageSource::Url { url: url.clone() },
            };
            AnthropicContentBlock::Image { source }
        }
    }
}

#[async_trait::async_trait]
impl PromptDriver for AnthropicClient {
    #[instrument(skip(self, request))]
    async fn generate(&self, request: &GenerateRequest) -> StillmotionResult<GenerateResponse> {
        debug!("Generating response with Anthropic");

        let anthropic_request = self.convert_request(request)?;
        let anthropic_response = self.generate_anthropic(&anthropic_request).await?;

        Ok(Self::convert_response(&anthropic_response))
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

impl Vision for AnthropicClient {}
