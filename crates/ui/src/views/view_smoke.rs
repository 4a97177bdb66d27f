use std::collections::BTreeMap;
use std::sync::Arc;

use quiz_core::model::{AnswerRecord, QuestionId, SessionState};
use services::Intent;
use storage::{InMemoryStore, SnapshotStore};

use super::test_harness::{setup_view_harness, setup_view_harness_with_store};

#[tokio::test(flavor = "current_thread")]
async fn intro_smoke_renders_header_and_start() {
    let harness = setup_view_harness().await;
    let html = harness.render();
    assert!(html.contains("Knowledge Check"), "missing subtitle in {html}");
    assert!(html.contains("Defensive Concepts"), "missing title in {html}");
    assert!(html.contains("0/6"), "missing counter in {html}");
    assert!(html.contains("6 scenarios"), "missing intro copy in {html}");
    assert!(
        html.contains("Remember progress on this device"),
        "missing toggle in {html}"
    );
    assert!(html.contains("Start"), "missing start button in {html}");
    assert!(!html.contains("Question 1 of 6"), "question shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_smoke_renders_prompt_and_options() {
    let mut harness = setup_view_harness().await;
    harness.context.dispatch(Intent::Start);
    harness.remount();

    let html = harness.render();
    assert!(html.contains("Question 1 of 6"), "missing position in {html}");
    assert!(
        html.contains("What defensive mistake just happened here?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Rotating from the weak side"), "missing option in {html}");
    assert!(html.contains("/clips/strong_side_corner.mp4"), "missing clip in {html}");
    assert!(html.contains("Why?"), "missing explain button in {html}");
    assert!(!html.contains("Session Complete"), "summary shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_answer_smoke_renders_review_sheet() {
    let mut harness = setup_view_harness().await;
    harness.context.dispatch(Intent::Start);
    harness.context.dispatch(Intent::Select(2));
    harness.remount();

    let html = harness.render();
    assert!(html.contains("1/6"), "missing counter in {html}");
    assert!(html.contains("option correct"), "missing correct marker in {html}");
    assert!(html.contains("option wrong"), "missing wrong marker in {html}");
    assert!(
        html.contains("You chose Executing a stunt. The correct answer is Helping from the strong-side corner."),
        "missing verdict in {html}"
    );
    assert!(html.contains("Close"), "missing close button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn summary_smoke_renders_score() {
    let mut harness = setup_view_harness().await;
    harness.context.dispatch(Intent::Start);
    for pick in [0, 1, 1, 2, 2, 0] {
        harness.context.dispatch(Intent::Select(pick));
        harness.context.dispatch(Intent::Next);
    }
    harness.remount();

    let html = harness.render();
    assert!(html.contains("6/6"), "missing counter in {html}");
    assert!(html.contains("Session Complete"), "missing summary in {html}");
    assert!(html.contains("100%"), "missing percent in {html}");
    assert!(
        html.contains("You answered 6 of 6 correctly."),
        "missing score line in {html}"
    );
    assert!(html.contains("band-strong"), "missing band in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reset_smoke_returns_to_intro_and_clears_storage() {
    let mut harness = setup_view_harness().await;
    harness.context.dispatch(Intent::Start);
    harness.context.dispatch(Intent::Select(0));
    harness.context.dispatch(Intent::Reset);
    harness.context.flush().await;
    harness.remount();

    let html = harness.render();
    assert!(html.contains("0/6"), "missing counter in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
    assert_eq!(harness.store.load().await, None);
}

#[tokio::test(flavor = "current_thread")]
async fn restored_session_smoke_resumes_at_saved_question() {
    let store = SnapshotStore::with_default_key(Arc::new(InMemoryStore::new()));
    let mut answers = BTreeMap::new();
    answers.insert(QuestionId::new("q1"), AnswerRecord::from_persisted(0, true));
    answers.insert(QuestionId::new("q2"), AnswerRecord::from_persisted(3, false));
    store
        .save(&SessionState::from_persisted(true, 2, answers))
        .await;

    let harness = setup_view_harness_with_store(store).await;
    let html = harness.render();
    assert!(html.contains("Question 3 of 6"), "missing position in {html}");
    assert!(html.contains("2/6"), "missing counter in {html}");
}
