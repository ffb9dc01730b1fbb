// Copyright 2025-present DevLearning Hub
// SPDX-License-Identifier: Apache-2.0

//! "Explain this code" via a text-generation API.
//!
//! The core never talks to a vendor directly. It builds a prompt from a
//! module's code sample and hands it to an [`Explainer`], a single
//! prompt-in, text-out capability. The terminal front end injects an
//! [`HttpExplainer`] talking to Ollama or an OpenAI-compatible endpoint;
//! tests inject a [`StaticExplainer`] and never touch the network.
//!
//! HTTP support sits behind the `http-explain` cargo feature (on by
//! default). Without it the library still builds, prompts still render, and
//! only the real network call is missing.

use std::fmt;
use std::str::FromStr;

use crate::catalog::Module;

/// Env var selecting the provider ("ollama" or "openai").
pub const PROVIDER_ENV: &str = "SYLLABUS_EXPLAIN_PROVIDER";
/// Env var overriding the provider base URL.
pub const URL_ENV: &str = "SYLLABUS_EXPLAIN_URL";
/// Env var overriding the model name.
pub const MODEL_ENV: &str = "SYLLABUS_EXPLAIN_MODEL";
/// Env var holding the API key, where the provider wants one.
pub const API_KEY_ENV: &str = "SYLLABUS_EXPLAIN_API_KEY";
/// Env var overriding the request timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "SYLLABUS_EXPLAIN_TIMEOUT";

/// Local models can take a while on a first load; leave them room.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Anything that can turn a prompt into an explanation.
pub trait Explainer {
    fn explain(&self, prompt: &str) -> Result<String, ExplainError>;
}

/// Why an explanation could not be produced.
///
/// A module without code is not an error at this level: [`explain_prompt`]
/// returns `None` for that case before any service is involved.
#[derive(Debug)]
pub enum ExplainError {
    /// The provider name was not one we speak.
    UnsupportedProvider(String),
    /// The timeout override was not a positive number of seconds.
    InvalidTimeout(String),
    /// Could not reach the service or read its reply.
    Transport(String),
    /// The service answered with a non-success status.
    Api { status: u16, body: String },
    /// The service answered successfully but with no content.
    EmptyReply,
}

impl fmt::Display for ExplainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplainError::UnsupportedProvider(name) => {
                write!(f, "unsupported explanation provider '{name}' (expected ollama or openai)")
            }
            ExplainError::InvalidTimeout(value) => {
                write!(f, "invalid explanation timeout '{value}' (expected whole seconds, at least 1)")
            }
            ExplainError::Transport(msg) => {
                write!(f, "could not reach the explanation service: {msg}")
            }
            ExplainError::Api { status, body } => {
                write!(f, "explanation API returned {status}: {body}")
            }
            ExplainError::EmptyReply => write!(f, "explanation API returned no content"),
        }
    }
}

impl std::error::Error for ExplainError {}

/// Supported backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Provider {
    /// Local Ollama, `POST {base}/api/chat`.
    #[default]
    Ollama,
    /// OpenAI-compatible, `POST {base}/v1/chat/completions`.
    OpenAi,
}

impl Provider {
    fn default_base_url(self) -> &'static str {
        match self {
            Provider::Ollama => "http://localhost:11434",
            Provider::OpenAi => "https://api.openai.com",
        }
    }

    fn default_model(self) -> &'static str {
        match self {
            Provider::Ollama => "llama3.2",
            Provider::OpenAi => "gpt-4o-mini",
        }
    }
}

impl FromStr for Provider {
    type Err = ExplainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(Provider::Ollama),
            "openai" => Ok(Provider::OpenAi),
            other => Err(ExplainError::UnsupportedProvider(other.to_string())),
        }
    }
}

/// Connection settings for the HTTP explainer.
#[derive(Debug, Clone)]
pub struct ExplainConfig {
    pub provider: Provider,
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl ExplainConfig {
    /// Read configuration from `SYLLABUS_EXPLAIN_*` environment variables,
    /// falling back to a local Ollama with its stock model.
    pub fn from_env() -> Result<ExplainConfig, ExplainError> {
        Self::from_vars(
            std::env::var(PROVIDER_ENV).ok().as_deref(),
            std::env::var(URL_ENV).ok().as_deref(),
            std::env::var(MODEL_ENV).ok().as_deref(),
            std::env::var(API_KEY_ENV).ok().as_deref(),
            std::env::var(TIMEOUT_ENV).ok().as_deref(),
        )
    }

    fn from_vars(
        provider: Option<&str>,
        url: Option<&str>,
        model: Option<&str>,
        api_key: Option<&str>,
        timeout: Option<&str>,
    ) -> Result<ExplainConfig, ExplainError> {
        let provider = match provider {
            Some(name) => name.parse()?,
            None => Provider::default(),
        };
        let timeout_secs = match timeout {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ExplainError::InvalidTimeout(value.to_string())),
            },
            None => DEFAULT_TIMEOUT_SECS,
        };
        Ok(ExplainConfig {
            provider,
            base_url: url
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| provider.default_base_url().to_string()),
            model: model
                .map(str::to_string)
                .unwrap_or_else(|| provider.default_model().to_string()),
            api_key: api_key.map(str::to_string),
            timeout_secs,
        })
    }
}

/// Build the prompt for one module's code sample.
///
/// `None` when the module has no code; there is nothing to explain then and
/// callers should say so instead of phoning a model about it.
pub fn explain_prompt(course_title: &str, module: &Module) -> Option<String> {
    let code = module.code.as_ref()?;
    Some(format!(
        "Explain this {lang} code sample to a beginner in a few short \
         paragraphs. It comes from the module \"{module}\" of the course \
         \"{course}\". Focus on what it does and why, not on syntax trivia.\n\n\
         ```{lang}\n{body}\n```",
        lang = code.lang,
        module = module.title,
        course = course_title,
        body = code.body,
    ))
}

/// Canned explainer for tests and offline runs. Always answers with the
/// same text and never fails.
#[derive(Debug, Clone)]
pub struct StaticExplainer {
    reply: String,
}

impl StaticExplainer {
    pub fn new(reply: impl Into<String>) -> Self {
        StaticExplainer { reply: reply.into() }
    }
}

impl Default for StaticExplainer {
    fn default() -> Self {
        StaticExplainer::new(
            "This sample is covered in the module text above; \
             connect an explanation service for a detailed walkthrough.",
        )
    }
}

impl Explainer for StaticExplainer {
    fn explain(&self, _prompt: &str) -> Result<String, ExplainError> {
        Ok(self.reply.clone())
    }
}

#[cfg(feature = "http-explain")]
pub use http::HttpExplainer;

#[cfg(feature = "http-explain")]
mod http {
    use std::time::Duration;

    use serde::{Deserialize, Serialize};

    use super::{ExplainConfig, ExplainError, Explainer, Provider};

    #[derive(Serialize, Deserialize)]
    struct ChatMessage {
        role: String,
        content: String,
    }

    #[derive(Serialize)]
    struct ChatRequest {
        model: String,
        messages: Vec<ChatMessage>,
        stream: bool,
    }

    #[derive(Deserialize)]
    struct OllamaReply {
        message: ChatMessage,
    }

    #[derive(Deserialize)]
    struct OpenAiReply {
        choices: Vec<OpenAiChoice>,
    }

    #[derive(Deserialize)]
    struct OpenAiChoice {
        message: ChatMessage,
    }

    /// Blocking client for Ollama or an OpenAI-compatible chat endpoint.
    pub struct HttpExplainer {
        config: ExplainConfig,
        client: reqwest::blocking::Client,
    }

    impl HttpExplainer {
        pub fn new(config: ExplainConfig) -> Result<Self, ExplainError> {
            let client = reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .map_err(|e| ExplainError::Transport(e.to_string()))?;
            Ok(HttpExplainer { config, client })
        }

        fn endpoint(&self) -> String {
            match self.config.provider {
                Provider::Ollama => format!("{}/api/chat", self.config.base_url),
                Provider::OpenAi => format!("{}/v1/chat/completions", self.config.base_url),
            }
        }
    }

    impl Explainer for HttpExplainer {
        fn explain(&self, prompt: &str) -> Result<String, ExplainError> {
            let request = ChatRequest {
                model: self.config.model.clone(),
                messages: vec![ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                }],
                stream: false,
            };

            let mut builder = self.client.post(self.endpoint()).json(&request);
            if let Some(key) = &self.config.api_key {
                builder = builder.header("Authorization", format!("Bearer {key}"));
            }

            let response = builder
                .send()
                .map_err(|e| ExplainError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().unwrap_or_default();
                return Err(ExplainError::Api {
                    status: status.as_u16(),
                    body,
                });
            }

            let content = match self.config.provider {
                Provider::Ollama => {
                    let reply: OllamaReply = response
                        .json()
                        .map_err(|e| ExplainError::Transport(e.to_string()))?;
                    reply.message.content
                }
                Provider::OpenAi => {
                    let reply: OpenAiReply = response
                        .json()
                        .map_err(|e| ExplainError::Transport(e.to_string()))?;
                    reply
                        .choices
                        .into_iter()
                        .next()
                        .map(|choice| choice.message.content)
                        .unwrap_or_default()
                }
            };

            if content.trim().is_empty() {
                return Err(ExplainError::EmptyReply);
            }
            Ok(content)
        }
    }

}
