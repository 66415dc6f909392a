use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{Question, QuizState};
use quiz_core::time::fixed_now;
use quiz_source::{InMemorySource, QuestionRecord, QuestionSource, SourceError};
use services::{Clock, QuizService, ShuffleMode};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizIntent;
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

#[derive(Clone)]
struct TestApp {
    quiz_service: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }
}

/// A source whose every fetch fails, like an unreachable server.
pub struct OfflineSource;

#[async_trait::async_trait]
impl QuestionSource for OfflineSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, SourceError> {
        Err(SourceError::Unavailable("connection refused".to_string()))
    }

    fn describe(&self) -> String {
        "offline".to_string()
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for QuizHarnessProps {}

#[component]
fn QuizHarnessRoot(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct QuizHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl QuizHarness {
    /// First render plus the initial fetch.
    pub async fn start(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
        self.drive_async().await;
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn send(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn state(&self) -> QuizState {
        let controller = self.handles.controller();
        self.dom.in_runtime(|| controller.peek().state().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Records whose correct answers are `correct`, three options each.
pub fn records(correct: &[usize]) -> Vec<QuestionRecord> {
    correct
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            let kind = if i % 2 == 0 { "image" } else { "video" };
            QuestionRecord::new(
                kind,
                format!("media/q{i}"),
                [format!("Q{i} first"), format!("Q{i} second"), format!("Q{i} third")],
                *answer,
            )
        })
        .collect()
}

pub fn setup_quiz_harness(source: Arc<dyn QuestionSource>) -> QuizHarness {
    let quiz_service = Arc::new(QuizService::new(source).with_shuffle(ShuffleMode::Off));
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarnessRoot,
        QuizHarnessProps {
            app: Arc::new(TestApp { quiz_service }),
            handles: handles.clone(),
        },
    );
    QuizHarness { dom, handles }
}

pub fn setup_with_records(correct: &[usize]) -> QuizHarness {
    setup_quiz_harness(Arc::new(InMemorySource::new(records(correct))))
}
