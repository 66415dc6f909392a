use dioxus::prelude::*;
use quiz_core::model::MediaKind;
use services::QuizController;

use crate::context::AppContext;
use crate::vm::{
    MediaKey, MediaVm, OptionVm, QuestionVm, QuizBody, QuizScreenVm, map_quiz_screen,
    progress_style,
};
use super::scoreboard::Scoreboard;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Everything the player can do on the quiz page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Next,
    Restart,
    MediaFailed(MediaKey),
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_service = ctx.quiz_service();
    let clock = ctx.clock();

    let controller = use_signal(move || QuizController::new(clock));
    let failed_media = use_signal(|| None::<MediaKey>);

    let loader = use_resource(move || {
        let quiz_service = quiz_service.clone();
        let mut controller = controller;

        async move {
            let ticket = {
                let mut controller = controller.write();
                if controller.state().ticket().is_some() {
                    controller.restart()
                } else {
                    controller.begin_load()
                }
            }?;
            let result = quiz_service.fetch_questions().await;
            controller.write().finish_load(ticket, result);
            Some(ticket)
        }
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut controller = controller;
        let mut failed_media = failed_media;
        let mut loader = loader;

        match intent {
            QuizIntent::Select(index) => {
                let _ = controller.write().select(index);
            }
            QuizIntent::Next => {
                failed_media.set(None);
                controller.write().advance();
            }
            QuizIntent::Restart => {
                failed_media.set(None);
                // Cancels any fetch still in flight before issuing a new ticket.
                loader.restart();
            }
            QuizIntent::MediaFailed(key) => {
                tracing::warn!(ticket = %key.0, position = key.1, "media failed to load");
                failed_media.set(Some(key));
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, controller);
            }
        }
    }

    let screen: QuizScreenVm = map_quiz_screen(controller.read().state());
    let progress = progress_style(screen.progress_percent);

    rsx! {
        div { class: "quiz-page",
            header { class: "quiz-header",
                h1 { "Media Quiz" }
                div { id: "score-display", class: "score-display", "{screen.score_label}" }
                div { class: "progress-track",
                    div { id: "progress-bar", class: "progress-bar", style: "{progress}" }
                }
            }

            match screen.body {
                QuizBody::Loading => rsx! {
                    p { class: "quiz-status", "Loading questions..." }
                },
                QuizBody::Failed(error) => rsx! {
                    p { id: "feedback", class: "quiz-status error", "{error.message()}" }
                },
                QuizBody::Question(question) => {
                    let media_failed = failed_media() == Some(question.key);
                    rsx! {
                        QuestionPanel {
                            question,
                            media_failed,
                            on_intent: move |intent: QuizIntent| dispatch_intent.call(intent),
                        }
                    }
                }
                QuizBody::Scoreboard(scoreboard) => rsx! {
                    Scoreboard {
                        scoreboard,
                        on_restart: move |()| dispatch_intent.call(QuizIntent::Restart),
                    }
                },
            }
        }
    }
}

#[component]
fn QuestionPanel(
    question: QuestionVm,
    media_failed: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let key = question.key;
    let feedback = question.feedback.unwrap_or_default();

    rsx! {
        div { id: "game", class: "game",
            div { id: "media-container", class: "media-container",
                MediaFrame {
                    media: question.media.clone(),
                    failed: media_failed,
                    on_error: move |()| on_intent.call(QuizIntent::MediaFailed(key)),
                }
            }
            div { id: "options", class: "options",
                for option in question.options.iter().cloned() {
                    OptionButton { key: "{option.index}", option, on_intent }
                }
            }
            p { id: "feedback", class: "feedback", "{feedback}" }
            if question.show_next {
                button {
                    id: "next-btn",
                    class: "next-btn",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "Next"
                }
            }
        }
    }
}

#[component]
fn MediaFrame(media: MediaVm, failed: bool, on_error: EventHandler<()>) -> Element {
    if failed {
        return rsx! {
            p { class: "media-missing", "{media.not_found_message()}" }
        };
    }

    match media.kind {
        MediaKind::Image => rsx! {
            img {
                class: "quiz-media",
                src: "{media.src}",
                alt: "Quiz image",
                onerror: move |_| on_error.call(()),
            }
        },
        MediaKind::Video => rsx! {
            video {
                class: "quiz-media",
                src: "{media.src}",
                autoplay: true,
                muted: true,
                playsinline: true,
                controls: true,
                onerror: move |_| on_error.call(()),
            }
        },
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = option.index;
    rsx! {
        button {
            class: "{option.status.class()}",
            r#type: "button",
            disabled: option.disabled,
            onclick: move |_| on_intent.call(QuizIntent::Select(index)),
            "{option.label}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    controller: Rc<RefCell<Option<Signal<QuizController>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        controller: Signal<QuizController>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.controller.borrow_mut() = Some(controller);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn controller(&self) -> Signal<QuizController> {
        (*self.controller.borrow()).expect("quiz controller registered")
    }
}
