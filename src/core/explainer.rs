// turns search context into something a 3-year-old can follow

use crate::core::{Context, LanguageModel, Query};
use std::sync::Arc;

/// Persona for every explanation. The last rule is the context-side safety
/// check: unsafe material can arrive through search results even when the
/// question itself was fine.
pub const PERSONA: &str = "You are a gentle, wise, and enthusiastic teacher talking to a 3-year-old toddler. \
Your goal is to satisfy their curiosity. \
Use very simple words, analogies involving toys, animals, or snacks, and a warm tone. \
Keep the answer short (2-3 sentences max). \
Do not use jargon. \
Use the provided context to answer the question truthfully. \
CRITICAL SAFETY RULE: If the context contains anything violent, scary, or adult, \
ignore it and provide a happy, safe, generic answer about the topic.";

pub const FALLBACK: &str = "Oh no! My brain got a little stuck";

pub struct Explainer {
    model: Arc<dyn LanguageModel>,
}

impl Explainer {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Never fails. A broken call becomes an in-character apology.
    pub async fn explain(&self, query: &Query, context: &Context) -> String {
        let prompt = prompt(query, context);

        match self.model.generate(&prompt).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("explanation failed: {e}");
                format!("{FALLBACK}: {e}")
            }
        }
    }
}

fn prompt(query: &Query, context: &Context) -> String {
    format!(
        "{PERSONA}\n\nThe toddler asks: '{query}'\n\nHere is what the internet says (Context):\n{}",
        context.as_str()
    )
}
