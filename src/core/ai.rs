// gemini integration - the bot's brain

use crate::Error;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Anything that can turn a prompt into text.
///
/// An `Err` covers both transport failures and answers the service refused
/// to produce ([`Error::Blocked`]).
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockLowAndAbove,
    BlockMediumAndAbove,
    BlockOnlyHigh,
    BlockNone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// Per-category rejection thresholds sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetySettings(Vec<SafetySetting>);

impl SafetySettings {
    /// Reject anything rated low severity or worse, in every category.
    pub fn strict() -> Self {
        Self::uniform(HarmBlockThreshold::BlockLowAndAbove)
    }

    pub fn uniform(threshold: HarmBlockThreshold) -> Self {
        let categories = [
            HarmCategory::Harassment,
            HarmCategory::HateSpeech,
            HarmCategory::SexuallyExplicit,
            HarmCategory::DangerousContent,
        ];
        Self(
            categories
                .into_iter()
                .map(|category| SafetySetting {
                    category,
                    threshold,
                })
                .collect(),
        )
    }

    pub fn threshold(&self, category: HarmCategory) -> Option<HarmBlockThreshold> {
        self.0
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.threshold)
    }
}

impl Default for SafetySettings {
    fn default() -> Self {
        Self::strict()
    }
}

pub struct Gemini {
    client: reqwest::Client,
    api_key: String,
    model: String,
    safety: SafetySettings,
}

// what we send to gemini
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Request<'a> {
    contents: Vec<Content>,
    safety_settings: &'a [SafetySetting],
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

// what gemini sends back
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Content,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl Gemini {
    /// Builds a client. `api_key` comes from the cli (flag or
    /// `GEMINI_API_KEY`); nothing is sent anywhere without one.
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        safety: SafetySettings,
    ) -> Result<Self, Error> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: model.into(),
            safety,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LanguageModel for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let request = Request {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            safety_settings: &self.safety.0,
        };

        let url = format!("{API_BASE}/models/{}:generateContent", self.model);
        tracing::debug!(model = %self.model, "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error = response.text().await?;
            return Err(Error::Gemini(format!("{status}: {error}")));
        }

        let response: Response = response.json().await?;
        extract_text(response)
    }
}

// a blocked prompt or a candidate cut off by the safety filter has no text
fn extract_text(response: Response) -> Result<String, Error> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(Error::Blocked(reason));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| Error::Blocked("no candidates".to_string()))?;

    let text: String = candidate
        .content
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "empty response".to_string());
        return Err(Error::Blocked(reason));
    }

    Ok(text)
}
