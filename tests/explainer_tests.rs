// tests for the explanation step

mod common;

use common::{Reply, StubModel};
use std::sync::Arc;
use toddlerbot::{Context, Explainer, FALLBACK, PERSONA, Query};

fn context() -> Context {
    Context::from_snippets(["Sunlight bounces off air.", "Blue light scatters most."]).unwrap()
}

#[tokio::test]
async fn test_answer_passed_through() {
    let model = Arc::new(StubModel::new(
        Reply::Fail,
        Reply::text("The sky is like a big blue blanket!"),
    ));
    let explainer = Explainer::new(model);

    let answer = explainer
        .explain(&Query::normalize("why is the sky blue"), &context())
        .await;
    assert_eq!(answer, "The sky is like a big blue blanket!");
}

#[tokio::test]
async fn test_prompt_has_persona_query_and_context() {
    let model = Arc::new(StubModel::new(Reply::Fail, Reply::text("ok")));
    let explainer = Explainer::new(model.clone());

    explainer
        .explain(&Query::normalize("why is the sky blue"), &context())
        .await;

    let prompts = model.explain_prompts();
    assert_eq!(prompts.len(), 1);
    let prompt = &prompts[0];
    assert!(prompt.starts_with(PERSONA));
    assert!(prompt.contains("The toddler asks: 'why is the sky blue'"));
    assert!(prompt.ends_with("- Sunlight bounces off air.\n- Blue light scatters most."));
}

#[test]
fn test_persona_keeps_context_safety_rule() {
    assert!(PERSONA.contains("violent, scary, or adult"));
    assert!(PERSONA.contains("2-3 sentences"));
}

#[tokio::test]
async fn test_failure_becomes_fallback() {
    let model = Arc::new(StubModel::new(Reply::Fail, Reply::Fail));
    let explainer = Explainer::new(model);

    let answer = explainer
        .explain(&Query::normalize("why is the sky blue"), &context())
        .await;
    assert!(answer.starts_with(FALLBACK));
    assert!(answer.contains("overloaded"));
}

#[tokio::test]
async fn test_blocked_becomes_fallback() {
    let model = Arc::new(StubModel::new(Reply::Fail, Reply::Blocked));
    let explainer = Explainer::new(model);

    let answer = explainer
        .explain(&Query::normalize("why is the sky blue"), &context())
        .await;
    assert!(answer.starts_with(FALLBACK));
}
