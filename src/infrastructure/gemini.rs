//! Client for the Gemini `generateContent` endpoint and the three
//! generation operations built on it.
//!
//! Every operation sends one prompt, takes the first candidate's text and
//! runs it through [`decode`]. There is no retry and no status-specific
//! handling: any non-success status is a [`GenerationError::RequestFailed`].

use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde_json::Value;

use super::config::AppConfig;
use crate::domain::prompts::{blueprint_prompt, rank_apps_prompt, recommend_apps_prompt};
use crate::domain::{decode, AppDescriptor, Blueprint, GenerationError, GenerationResult, RankedApps};

/// Anything that turns a prompt into reply text. Lets tests replace the
/// network.
pub trait TextGenerator: Send + Sync {
    /// # Errors
    ///
    /// Returns [`GenerationError::MissingApiKey`] before any I/O when no key
    /// is configured, and [`GenerationError::RequestFailed`] for transport
    /// failures and non-success statuses.
    fn generate(&self, prompt: &str) -> GenerationResult<String>;
}

/// API key shared between the settings page and the client, so a newly
/// saved key applies to the next request.
pub type SharedApiKey = Arc<RwLock<Option<String>>>;

pub fn shared_api_key(key: Option<String>) -> SharedApiKey {
    Arc::new(RwLock::new(key))
}

pub struct GeminiClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: SharedApiKey,
}

impl GeminiClient {
    pub fn new(config: &AppConfig, api_key: SharedApiKey) -> GenerationResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| GenerationError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.endpoint(), api_key })
    }

    fn current_key(&self) -> Option<String> {
        self.api_key.read().ok().and_then(|key| key.clone())
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> GenerationResult<String> {
        let Some(api_key) = self.current_key() else {
            return Err(GenerationError::MissingApiKey);
        };
        let api_key = api_key.as_str();

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&request_body(prompt))
            .send()
            .map_err(|e| request_failed(e, api_key))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| request_failed(e, api_key))?;
        if !status.is_success() {
            return Err(GenerationError::RequestFailed { detail: format!("status {}", status.as_u16()) });
        }
        extract_reply_text(&body)
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

fn request_body(prompt: &str) -> GenerateRequest<'_> {
    GenerateRequest { contents: [RequestContent { parts: [RequestPart { text: prompt }] }] }
}

/// Pulls `candidates[0].content.parts[0].text` out of a response body.
///
/// A body that is not JSON is a failed request; JSON of the wrong shape
/// yields empty text, which the decoder treats as an empty reply.
pub(crate) fn extract_reply_text(body: &str) -> GenerationResult<String> {
    let root: Value = serde_json::from_str(body)
        .map_err(|e| GenerationError::RequestFailed { detail: format!("response body: {e}") })?;
    let text = root
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .unwrap_or_default();
    Ok(text.to_string())
}

/// reqwest errors carry the request URL, and with it the `key` query
/// parameter.
fn request_failed(error: impl std::fmt::Display, api_key: &str) -> GenerationError {
    GenerationError::RequestFailed { detail: without_key(&error.to_string(), api_key) }
}

fn without_key(message: &str, api_key: &str) -> String {
    message.replace(api_key, "***")
}

/// The three generation operations over any [`TextGenerator`].
#[derive(Clone)]
pub struct GenerationClient {
    generator: Arc<dyn TextGenerator>,
}

impl GenerationClient {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// A client talking to Gemini with the given key.
    pub fn gemini(config: &AppConfig, api_key: SharedApiKey) -> GenerationResult<Self> {
        Ok(Self::new(Arc::new(GeminiClient::new(config, api_key)?)))
    }

    /// Ranks `apps` as triggers and actions for `description`. Replies of
    /// the wrong shape give empty lists.
    pub fn rank_apps(&self, description: &str, apps: &[AppDescriptor]) -> GenerationResult<RankedApps> {
        let reply = self.call("rank_apps", &rank_apps_prompt(description, apps))?;
        Ok(decode(&reply).into_ranked())
    }

    /// Recommends apps for a plain-language request. Replies that are not a
    /// list give an empty list.
    pub fn recommend_apps(&self, request: &str) -> GenerationResult<Vec<AppDescriptor>> {
        let reply = self.call("recommend_apps", &recommend_apps_prompt(request))?;
        Ok(decode(&reply).into_app_list())
    }

    pub fn generate_blueprint(&self, request: &str) -> GenerationResult<Blueprint> {
        let reply = self.call("generate_blueprint", &blueprint_prompt(request))?;
        Ok(decode(&reply).into_blueprint())
    }

    fn call(&self, operation: &str, prompt: &str) -> GenerationResult<String> {
        tracing::info!(operation, prompt_chars = prompt.len(), "generation request");
        match self.generator.generate(prompt) {
            Ok(reply) => {
                tracing::info!(operation, reply_chars = reply.len(), "generation reply");
                Ok(reply)
            }
            Err(GenerationError::RequestFailed { detail }) => {
                tracing::warn!(operation, %detail, "generation request failed");
                Err(GenerationError::RequestFailed { detail })
            }
            Err(err) => {
                tracing::warn!(operation, error = %err, "generation request not sent");
                Err(err)
            }
        }
    }
}
