use std::sync::Arc;

use dioxus::LaunchBuilder;
use services::QuizService;
use ui::{App, UiApp, build_app_context};

#[cfg(not(target_arch = "wasm32"))]
mod config;

struct QuizApp {
    quiz_service: Arc<QuizService>,
}

impl UiApp for QuizApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    use config::{Config, Parsed, QuestionsLocation, print_usage};
    use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

    init_tracing();

    let parsed = Config::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    let config = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(config) => config,
    };

    if let QuestionsLocation::File(path) = &config.questions {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "question file not found");
        }
    }

    let source = config.questions.into_source();
    tracing::info!(source = %source.describe(), shuffle = ?config.shuffle, "starting quiz");
    let quiz_service = Arc::new(QuizService::new(source).with_shuffle(config.shuffle));
    let app: Arc<dyn UiApp> = Arc::new(QuizApp { quiz_service });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Media Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(target_arch = "wasm32")]
fn page_source() -> Result<quiz_source::HttpSource, Box<dyn std::error::Error>> {
    let href = web_sys::window()
        .ok_or("no browser window")?
        .location()
        .href()
        .map_err(|_| "page location unavailable")?;
    let page = url::Url::parse(&href)?;
    Ok(quiz_source::HttpSource::relative_to(&page, "questions.json")?)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    dioxus::logger::initialize_default();

    let source = match page_source() {
        Ok(source) => source,
        Err(err) => {
            tracing::error!(error = %err, "cannot locate questions.json");
            return;
        }
    };
    tracing::info!(url = %source.url(), "starting quiz");

    let quiz_service = Arc::new(QuizService::new(Arc::new(source)));
    let app: Arc<dyn UiApp> = Arc::new(QuizApp { quiz_service });
    let context = build_app_context(&app);

    LaunchBuilder::web().with_context(context).launch(App);
}
