//! The Q&A assistant boundary.
//!
//! The core treats the assistant as an opaque text-completion service: the
//! processed records are serialized into the prompt, one block of text comes
//! back, and nothing structured flows into the pipeline. One question may be
//! in flight at a time; requests arriving while busy are dropped, not
//! queued. Any provider failure surfaces as a single fixed fallback message
//! and the session stays usable.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::models::{Config, StockRecord};

/// Shown whenever the completion service fails for any reason.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, the assistant could not be reached right now. Please try again in a moment.";

/// Display rows serialized into the prompt are capped so one large pasted
/// sheet cannot blow the request body.
const MAX_CONTEXT_ROWS: usize = 200;

/// Opaque text-completion service: prompt in, one block of text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// HTTP client for an OpenAI-compatible chat-completions endpoint. Single
/// attempt per question: no retry, no streaming, one fixed timeout.
pub struct AssistantClient {
    client: Client,
    base_url: Url,
    api_key: String,
    model: String,
}

impl AssistantClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .assistant_api_key
            .clone()
            .ok_or_else(|| anyhow!("ASSISTANT_API_KEY is not set"))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.assistant_timeout_secs))
            .user_agent("rust-screener/0.1")
            .build()?;

        // a trailing slash keeps Url::join from replacing the last path segment
        let mut base = config.assistant_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).context("invalid assistant base URL")?;

        Ok(Self {
            client,
            base_url,
            api_key,
            model: config.assistant_model.clone(),
        })
    }
}

#[async_trait]
impl CompletionProvider for AssistantClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = self.base_url.join("chat/completions")?;
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.2,
        };

        debug!(model = %self.model, "sending assistant request");
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        let answer = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("assistant response contained no choices"))?;

        Ok(answer.trim().to_string())
    }
}

/// Serializes questions against a provider, one at a time.
pub struct Assistant<P: CompletionProvider> {
    provider: P,
    busy: AtomicBool,
}

impl<P: CompletionProvider> Assistant<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            busy: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Ask one question against a serialized table context. Returns `None`
    /// when a previous question is still in flight (the request is dropped,
    /// not queued); otherwise always returns an answer, falling back to
    /// [`FALLBACK_MESSAGE`] on provider failure.
    pub async fn ask(&self, question: &str, context: &str) -> Option<String> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return None;
        }

        let prompt = build_prompt(question, context);
        let answer = match self.provider.complete(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!("assistant request failed: {err:#}");
                FALLBACK_MESSAGE.to_string()
            }
        };

        self.busy.store(false, Ordering::SeqCst);
        Some(answer)
    }
}

/// Serialize the processed table into a compact TSV block for the prompt.
pub fn build_context(headers: &[String], records: &[StockRecord]) -> String {
    let mut block = headers.join("\t");
    for record in records.iter().take(MAX_CONTEXT_ROWS) {
        block.push('\n');
        block.push_str(&record.raw.join("\t"));
    }
    if records.len() > MAX_CONTEXT_ROWS {
        block.push_str(&format!(
            "\n(... {} further rows omitted)",
            records.len() - MAX_CONTEXT_ROWS
        ));
    }
    block
}

fn build_prompt(question: &str, context: &str) -> String {
    format!(
        "You are a stock screening assistant. Answer the question using only \
         the tab-separated screening table below. Numbers use a comma as the \
         decimal separator. Be concise.\n\nTable:\n{context}\n\nQuestion: {question}"
    )
}
