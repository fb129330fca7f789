// fetches a little bit of the internet for a query

use crate::core::{Query, SafeSearch, SearchEngine};
use std::sync::Arc;

pub const MAX_RESULTS: usize = 3;

/// Search snippets joined one per line, each prefixed with `- `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context(String);

impl Context {
    pub fn from_snippets<I, S>(snippets: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = snippets
            .into_iter()
            .map(|s| format!("- {}", s.as_ref()))
            .collect();

        if lines.is_empty() {
            None
        } else {
            Some(Self(lines.join("\n")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub struct Retriever {
    search: Arc<dyn SearchEngine>,
}

impl Retriever {
    pub fn new(search: Arc<dyn SearchEngine>) -> Self {
        Self { search }
    }

    /// `None` when nothing came back, including when the search itself failed.
    pub async fn retrieve(&self, query: &Query) -> Option<Context> {
        match self
            .search
            .text(query.as_str(), MAX_RESULTS, SafeSearch::On)
            .await
        {
            Ok(hits) => Context::from_snippets(hits.iter().map(|h| h.body.as_str())),
            Err(e) => {
                tracing::warn!("search failed: {e}");
                None
            }
        }
    }
}
