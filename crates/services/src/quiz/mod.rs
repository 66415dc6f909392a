mod controller;
mod service;
mod shuffle;

// Public API of the quiz subsystem.
pub use controller::QuizController;
pub use service::QuizService;
pub use shuffle::ShuffleMode;
