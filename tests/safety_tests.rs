// tests for the input-side safety gate

mod common;

use common::{Reply, StubModel};
use std::sync::Arc;
use toddlerbot::{SafetyFilter, SafetyVerdict};

fn filter(reply: Reply) -> (SafetyFilter, Arc<StubModel>) {
    let model = Arc::new(StubModel::new(reply, Reply::Fail));
    (SafetyFilter::new(model.clone()), model)
}

#[tokio::test]
async fn test_cleaned_question_is_trimmed() {
    let (filter, _) = filter(Reply::text("  Why is water wet?\n"));
    let verdict = filter.check("why wawa wet").await;
    assert_eq!(verdict, SafetyVerdict::Cleaned("Why is water wet?".to_string()));
}

#[tokio::test]
async fn test_sentinel_is_unsafe() {
    let (filter, _) = filter(Reply::text("UNSAFE"));
    assert_eq!(filter.check("something scary").await, SafetyVerdict::Unsafe);
}

#[tokio::test]
async fn test_sentinel_with_whitespace_is_unsafe() {
    let (filter, _) = filter(Reply::text("\n UNSAFE \n"));
    assert_eq!(filter.check("something scary").await, SafetyVerdict::Unsafe);
}

#[tokio::test]
async fn test_sentinel_inside_sentence_is_not_the_sentinel() {
    let (filter, _) = filter(Reply::text("Why is it UNSAFE to touch a stove?"));
    assert!(matches!(
        filter.check("why hot stove owie").await,
        SafetyVerdict::Cleaned(_)
    ));
}

#[tokio::test]
async fn test_empty_response_is_unsafe() {
    let (filter, _) = filter(Reply::text("   "));
    assert_eq!(filter.check("hmm").await, SafetyVerdict::Unsafe);
}

#[tokio::test]
async fn test_blocked_response_is_unsafe() {
    let (filter, _) = filter(Reply::Blocked);
    assert_eq!(filter.check("hmm").await, SafetyVerdict::Unsafe);
}

#[tokio::test]
async fn test_service_failure_fails_closed() {
    let (filter, _) = filter(Reply::Fail);
    assert_eq!(filter.check("why is the sky blue").await, SafetyVerdict::Unsafe);
}

#[tokio::test]
async fn test_prompt_carries_utterance() {
    let (filter, model) = filter(Reply::text("Why do dogs bark?"));
    filter.check("why doggy woof").await;

    let prompts = model.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("'why doggy woof'"));
    assert!(prompts[0].contains("UNSAFE"));
}
