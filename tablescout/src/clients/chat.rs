use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tablescout_core::{ChatModel, ChatRequest, ChatResponse, Message, ScoutError};
use url::Url;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.5;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Chat client for any provider speaking the OpenAI chat-completions wire
/// format.
#[derive(Clone)]
pub struct OpenAiCompatClient {
    base_url: Url,
    api_key: SecretString,
    model: String,
    temperature: f32,
    http: Client,
}

impl OpenAiCompatClient {
    pub fn builder(api_key: impl Into<String>) -> OpenAiCompatClientBuilder {
        OpenAiCompatClientBuilder {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: SecretString::new(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Clone)]
pub struct OpenAiCompatClientBuilder {
    base_url: String,
    api_key: SecretString,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl OpenAiCompatClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<OpenAiCompatClient, ScoutError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|err| ScoutError::InvalidConfig(format!("chat base url: {}", err)))?;
        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| ScoutError::ChatModel(err.to_string()))?;
        Ok(OpenAiCompatClient {
            base_url,
            api_key: self.api_key,
            model: self.model,
            temperature: self.temperature,
            http,
        })
    }
}

#[derive(Serialize, Debug, Clone)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    stream: bool,
}

#[derive(Deserialize, Debug, Clone)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug, Clone)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize, Debug, Clone)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize, Debug, Clone)]
struct ApiErrorDetail {
    message: String,
}

#[async_trait::async_trait]
impl ChatModel for OpenAiCompatClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ScoutError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.base_url.as_str().trim_end_matches('/')
        );
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: request.messages,
            temperature: self.temperature,
            stream: false,
        };

        let response = self
            .http
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|err| ScoutError::ChatModel(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or(text);
            return Err(ScoutError::ChatModel(format!("{}: {}", status, detail)));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| ScoutError::ChatModel(err.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ScoutError::ChatModel("response carried no content".to_string()))?;

        Ok(ChatResponse { content })
    }
}
