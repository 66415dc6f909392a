use std::sync::Arc;

use quiz_core::model::{LoadTicket, QuizState};
use quiz_source::InMemorySource;

use super::QuizIntent;
use super::test_harness::{OfflineSource, setup_quiz_harness, setup_with_records};

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_with_records(&[1, 0, 2]);
    harness.start().await;

    let html = harness.render();
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Q0 first"), "missing option in {html}");
    assert!(html.contains("media/q0"), "missing media in {html}");
    assert_eq!(html.matches("class=\"option-btn\"").count(), 3, "options in {html}");
    assert!(!html.contains("next-btn"), "next shown before answering in {html}");
    assert!(!html.contains("scoreboard"), "scoreboard shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_empty_source_shows_message() {
    let mut harness = setup_quiz_harness(Arc::new(InMemorySource::empty()));
    harness.start().await;

    let html = harness.render();
    assert!(html.contains("No questions found."), "missing empty message in {html}");
    assert!(!html.contains("option-btn"), "options rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_offline_source_shows_load_failure() {
    let mut harness = setup_quiz_harness(Arc::new(OfflineSource));
    harness.start().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to load questions.json"),
        "missing failure message in {html}"
    );
    assert!(!html.contains("option-btn"), "options rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_wrong_answer_marks_options_and_locks() {
    let mut harness = setup_with_records(&[1, 0]);
    harness.start().await;

    harness.send(QuizIntent::Select(2));
    let html = harness.render();
    assert!(html.contains("❌ Wrong!"), "missing feedback in {html}");
    assert!(html.contains("option-btn correct"), "missing correct mark in {html}");
    assert!(html.contains("option-btn wrong"), "missing wrong mark in {html}");
    assert_eq!(html.matches("disabled").count(), 3, "options not locked in {html}");
    assert!(html.contains("next-btn"), "missing next in {html}");

    // A second pick on the same question changes nothing.
    harness.send(QuizIntent::Select(1));
    let session_score = harness.state().session().map(|s| s.score());
    assert_eq!(session_score, Some(0));
    assert!(harness.render().contains("Score: 0"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_plays_to_scoreboard() {
    let mut harness = setup_with_records(&[1, 0, 2]);
    harness.start().await;

    for pick in [1, 0, 0] {
        harness.send(QuizIntent::Select(pick));
        harness.send(QuizIntent::Next);
    }

    let html = harness.render();
    assert!(html.contains("You scored 2 out of 3!"), "missing final score in {html}");
    assert!(html.contains("Play Again"), "missing restart in {html}");
    assert!(html.contains("width: 100%"), "progress not full in {html}");
    assert!(!html.contains("id=\"game\""), "quiz still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_restart_reloads_fresh_session() {
    let mut harness = setup_with_records(&[0]);
    harness.start().await;
    harness.send(QuizIntent::Select(0));
    harness.send(QuizIntent::Next);
    assert!(harness.state().is_finished());

    harness.send(QuizIntent::Restart);
    harness.drive_async().await;
    harness.drive_async().await;

    let state = harness.state();
    assert_eq!(state.ticket(), Some(LoadTicket::new(2)));
    let session = state.session().expect("session after restart");
    assert_eq!((session.position(), session.score()), (0, 0));

    let html = harness.render();
    assert!(html.contains("Score: 0"), "score not reset in {html}");
    assert!(html.contains("Q0 first"), "question not shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_media_failure_is_per_question() {
    let mut harness = setup_with_records(&[0, 0]);
    harness.start().await;

    let ticket = harness.state().ticket().expect("ticket");
    harness.send(QuizIntent::MediaFailed((ticket, 0)));
    let html = harness.render();
    assert!(html.contains("Image not found"), "missing media message in {html}");
    assert!(html.contains("option-btn"), "options hidden in {html}");

    harness.send(QuizIntent::Select(0));
    harness.send(QuizIntent::Next);
    let html = harness.render();
    assert!(!html.contains("not found"), "failure leaked into next question in {html}");
    assert!(html.contains("<video"), "missing video in {html}");
    assert!(matches!(harness.state(), QuizState::Playing { .. }));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_video_plays_inline_and_reports_failure() {
    let mut harness = setup_with_records(&[0, 1]);
    harness.start().await;
    harness.send(QuizIntent::Select(0));
    harness.send(QuizIntent::Next);

    let html = harness.render();
    assert!(html.contains("<video"), "missing video in {html}");
    for attr in ["autoplay=true", "muted=true", "playsinline=true", "controls=true"] {
        assert!(html.contains(attr), "missing {attr} in {html}");
    }
    assert!(html.contains("media/q1"), "missing video source in {html}");

    let ticket = harness.state().ticket().expect("ticket");
    harness.send(QuizIntent::MediaFailed((ticket, 1)));
    let html = harness.render();
    assert!(html.contains("Video not found"), "missing video message in {html}");
    assert!(!html.contains("<video"), "failed video still rendered in {html}");
    assert!(html.contains("option-btn"), "options hidden in {html}");
}
