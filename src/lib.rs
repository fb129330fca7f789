// toddlerbot library - safe, simple answers for curious toddlers

mod agent;
pub mod cli;
mod core;
mod error;
mod input;
mod output;
mod telemetry;
mod theme;

pub use agent::{Agent, Outcome};
pub use crate::core::{
    Context, DEFAULT_MODEL, DuckDuckGo, Explainer, FALLBACK, Gemini, HarmBlockThreshold,
    HarmCategory, LanguageModel, MAX_RESULTS, PERSONA, Query, Retriever, SENTINEL, SafeSearch,
    SafetyFilter, SafetySetting, SafetySettings, SafetyVerdict, SearchEngine, SearchHit,
    is_question,
};
pub use error::Error;
pub use input::Input;
pub use output::Output;
pub use theme::{Theme, ThemeKind};
