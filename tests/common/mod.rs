// stub services shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use toddlerbot::{Error, Input, LanguageModel, Output, SafeSearch, SearchEngine, SearchHit, Theme};

#[derive(Clone)]
pub enum Reply {
    Text(String),
    Blocked,
    Fail,
}

impl Reply {
    pub fn text(s: &str) -> Self {
        Self::Text(s.to_string())
    }

    fn produce(&self) -> Result<String, Error> {
        match self {
            Self::Text(s) => Ok(s.clone()),
            Self::Blocked => Err(Error::Blocked("SAFETY".to_string())),
            Self::Fail => Err(Error::Gemini("503: overloaded".to_string())),
        }
    }
}

/// Answers the safety prompt and the explain prompt separately and keeps
/// every prompt it was sent.
pub struct StubModel {
    safety: Reply,
    explain: Reply,
    pub prompts: Mutex<Vec<String>>,
}

impl StubModel {
    pub fn new(safety: Reply, explain: Reply) -> Self {
        Self {
            safety,
            explain,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn safety_calls(&self) -> usize {
        self.prompts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| is_safety_prompt(p))
            .count()
    }

    pub fn explain_prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| !is_safety_prompt(p))
            .cloned()
            .collect()
    }
}

fn is_safety_prompt(prompt: &str) -> bool {
    prompt.starts_with("You are a safety filter")
}

#[async_trait]
impl LanguageModel for StubModel {
    async fn generate(&self, prompt: &str) -> Result<String, Error> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if is_safety_prompt(prompt) {
            self.safety.produce()
        } else {
            self.explain.produce()
        }
    }
}

pub enum Results {
    Snippets(Vec<String>),
    Fail,
    Hang,
}

pub struct StubSearch {
    results: Results,
    pub calls: Mutex<Vec<(String, usize, SafeSearch)>>,
}

impl StubSearch {
    pub fn snippets(snippets: &[&str]) -> Self {
        Self::new(Results::Snippets(
            snippets.iter().map(|s| s.to_string()).collect(),
        ))
    }

    pub fn new(results: Results) -> Self {
        Self {
            results,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchEngine for StubSearch {
    async fn text(
        &self,
        query: &str,
        max_results: usize,
        safe_search: SafeSearch,
    ) -> Result<Vec<SearchHit>, Error> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), max_results, safe_search));

        match &self.results {
            Results::Snippets(snippets) => Ok(snippets
                .iter()
                .take(max_results)
                .enumerate()
                .map(|(i, body)| SearchHit {
                    title: format!("result {i}"),
                    url: format!("https://example.com/{i}"),
                    body: body.clone(),
                })
                .collect()),
            Results::Fail => Err(Error::Search("search returned 502".to_string())),
            Results::Hang => std::future::pending().await,
        }
    }
}

pub fn output() -> Output<Vec<u8>> {
    Output::new(Vec::new(), Theme::plain())
}

pub fn transcript(out: Output<Vec<u8>>) -> String {
    String::from_utf8(out.into_inner()).unwrap()
}

pub fn input(bytes: &[u8]) -> Input {
    Input::from_reader(std::io::Cursor::new(bytes.to_vec()))
}
