// the conversation loop - one question in, one answer out, nothing remembered

use crate::Error;
use crate::core::{
    Explainer, LanguageModel, Query, Retriever, SafetyFilter, SafetyVerdict, SearchEngine,
};
use crate::input::Input;
use crate::output::Output;
use std::future::Future;
use std::io::Write;
use std::sync::Arc;

const EXIT_WORDS: [&str; 3] = ["exit", "quit", "bye"];

/// How a single turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Exit,
    /// empty line, nothing happened
    Skipped,
    Blocked,
    NoResults,
    Answered {
        heard: String,
        query: Query,
        answer: String,
    },
}

pub struct Agent {
    safety: SafetyFilter,
    retriever: Retriever,
    explainer: Explainer,
}

impl Agent {
    pub fn new(model: Arc<dyn LanguageModel>, search: Arc<dyn SearchEngine>) -> Self {
        Self {
            safety: SafetyFilter::new(Arc::clone(&model)),
            retriever: Retriever::new(search),
            explainer: Explainer::new(model),
        }
    }

    /// Reads lines until an exit word, end of input or `interrupt` resolves.
    /// An interrupt also cancels whatever call the current turn is waiting on.
    pub async fn run<W, F>(
        &self,
        mut input: Input,
        out: &mut Output<W>,
        interrupt: F,
    ) -> Result<(), Error>
    where
        W: Write,
        F: Future<Output = ()>,
    {
        tokio::pin!(interrupt);

        out.banner()?;

        loop {
            out.listening()?;

            let line = tokio::select! {
                line = input.next_line() => Some(line?),
                () = &mut interrupt => None,
            };
            let Some(line) = line else {
                out.interrupted()?;
                return Ok(());
            };
            let Some(line) = line else {
                // stdin closed
                out.end_of_input()?;
                return Ok(());
            };

            let outcome = tokio::select! {
                outcome = self.turn(&line, out) => Some(outcome?),
                () = &mut interrupt => None,
            };

            match outcome {
                None => {
                    out.interrupted()?;
                    return Ok(());
                }
                Some(Outcome::Exit) => return Ok(()),
                Some(_) => {}
            }
        }
    }

    pub async fn turn<W: Write>(
        &self,
        utterance: &str,
        out: &mut Output<W>,
    ) -> Result<Outcome, Error> {
        let utterance = utterance.trim();

        if EXIT_WORDS.iter().any(|w| utterance.eq_ignore_ascii_case(w)) {
            out.goodbye()?;
            return Ok(Outcome::Exit);
        }

        if utterance.is_empty() {
            return Ok(Outcome::Skipped);
        }

        out.status("Brain is checking if this question is safe and clear...")?;
        let heard = match self.safety.check(utterance).await {
            SafetyVerdict::Unsafe => {
                out.blocked()?;
                return Ok(Outcome::Blocked);
            }
            SafetyVerdict::Cleaned(text) => text,
        };
        out.heard(&heard)?;

        let query = Query::normalize(&heard);
        tracing::debug!(%query, "normalized");

        out.status(&format!("Hands are looking up '{query}' on the internet..."))?;
        let Some(context) = self.retriever.retrieve(&query).await else {
            out.no_results()?;
            return Ok(Outcome::NoResults);
        };

        out.status("Brain is thinking about how to explain this...")?;
        let answer = self.explainer.explain(&query, &context).await;
        out.answer(&answer)?;

        Ok(Outcome::Answered {
            heard,
            query,
            answer,
        })
    }
}
