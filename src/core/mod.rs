// core logic - safety gate, query shaping, search and explanation

mod ai;
mod explainer;
mod query;
mod retriever;
mod safety;
mod search;

pub use ai::{
    DEFAULT_MODEL, Gemini, HarmBlockThreshold, HarmCategory, LanguageModel, SafetySetting,
    SafetySettings,
};
pub use explainer::{Explainer, FALLBACK, PERSONA};
pub use query::{Query, is_question};
pub use retriever::{Context, MAX_RESULTS, Retriever};
pub use safety::{SENTINEL, SafetyFilter, SafetyVerdict};
pub use search::{DuckDuckGo, SafeSearch, SearchEngine, SearchHit};
