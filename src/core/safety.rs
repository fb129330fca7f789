// input-side safety gate
// fixes toddler-speak and refuses unsafe topics before anything is searched

use crate::core::LanguageModel;
use std::sync::Arc;

/// Exact reply the model gives for a topic that isn't fit for a small child.
pub const SENTINEL: &str = "UNSAFE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafetyVerdict {
    Unsafe,
    /// The corrected, trimmed question. Never empty.
    Cleaned(String),
}

pub struct SafetyFilter {
    model: Arc<dyn LanguageModel>,
}

impl SafetyFilter {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Fails closed: a blocked, empty or failed response is `Unsafe`.
    pub async fn check(&self, utterance: &str) -> SafetyVerdict {
        let prompt = prompt(utterance);

        let text = match self.model.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("safety check blocked/failed: {e}");
                return SafetyVerdict::Unsafe;
            }
        };

        let cleaned = text.trim();
        if cleaned.is_empty() || cleaned == SENTINEL {
            tracing::info!(utterance, "topic rejected");
            return SafetyVerdict::Unsafe;
        }

        SafetyVerdict::Cleaned(cleaned.to_string())
    }
}

fn prompt(utterance: &str) -> String {
    format!(
        "You are a safety filter and translator for a toddler. \
         The user input is: '{utterance}'. \
         1. Correct any mispronunciations or toddler-speak (e.g., 'wawa' -> 'water'). \
         2. If the topic is inappropriate for a 3-year-old (violence, adult topics, scary things), \
         return exactly: {SENTINEL}. \
         3. If safe, return only the corrected simple question."
    )
}
