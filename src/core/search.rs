// duckduckgo integration - the bot's hands

use crate::Error;
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

const DDG_HTML_URL: &str = "https://html.duckduckgo.com/html/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SafeSearch {
    #[default]
    On,
    Moderate,
    Off,
}

impl SafeSearch {
    // duckduckgo's `kp` parameter
    fn kp(self) -> &'static str {
        match self {
            Self::On => "1",
            Self::Moderate => "-1",
            Self::Off => "-2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub body: String,
}

/// A text search backend. An empty vec is a normal answer, not an error.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    async fn text(
        &self,
        query: &str,
        max_results: usize,
        safe_search: SafeSearch,
    ) -> Result<Vec<SearchHit>, Error>;
}

pub struct DuckDuckGo {
    client: reqwest::Client,
}

impl DuckDuckGo {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for DuckDuckGo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchEngine for DuckDuckGo {
    async fn text(
        &self,
        query: &str,
        max_results: usize,
        safe_search: SafeSearch,
    ) -> Result<Vec<SearchHit>, Error> {
        let response = self
            .client
            .post(DDG_HTML_URL)
            .form(&[("q", query), ("kp", safe_search.kp())])
            .header("user-agent", concat!("toddlerbot/", env!("CARGO_PKG_VERSION")))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Search(format!(
                "search returned {}",
                response.status()
            )));
        }

        let page = response.text().await?;
        let hits = parse_results(&page, max_results)?;
        tracing::debug!(query, hits = hits.len(), "search finished");
        Ok(hits)
    }
}

// html results page -> hits, in page order, ads skipped
fn parse_results(page: &str, max_results: usize) -> Result<Vec<SearchHit>, Error> {
    let result = selector("div.result:not(.result--ad)")?;
    let title = selector("a.result__a")?;
    let snippet = selector(".result__snippet")?;

    let document = Html::parse_document(page);

    let hits = document
        .select(&result)
        .filter_map(|node| {
            let body = node.select(&snippet).next().map(collapse_text)?;
            if body.is_empty() {
                return None;
            }
            let link = node.select(&title).next();
            Some(SearchHit {
                title: link.map(collapse_text).unwrap_or_default(),
                url: link
                    .and_then(|a| a.value().attr("href"))
                    .unwrap_or_default()
                    .to_string(),
                body,
            })
        })
        .take(max_results)
        .collect();

    Ok(hits)
}

fn selector(css: &str) -> Result<Selector, Error> {
    Selector::parse(css).map_err(|e| Error::Search(format!("bad selector {css}: {e:?}")))
}

fn collapse_text(node: ElementRef<'_>) -> String {
    node.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
