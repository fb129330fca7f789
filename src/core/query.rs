// turns a cleaned statement into something that reads like a question

use std::fmt;

const QUESTION_WORDS: [&str; 6] = ["why", "how", "what", "when", "who", "where"];

/// A search query that reads as a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Leaves questions alone. Anything else is assumed to be asking "why".
    pub fn normalize(cleaned: &str) -> Self {
        if is_question(cleaned) {
            Self(cleaned.to_string())
        } else {
            Self(format!("Why {cleaned}?"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// prefix match on purpose, "whoa" counts as "who"
pub fn is_question(text: &str) -> bool {
    let lower = text.to_lowercase();
    QUESTION_WORDS.iter().any(|w| lower.starts_with(w)) || text.ends_with('?')
}
