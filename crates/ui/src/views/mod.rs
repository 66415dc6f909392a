mod quiz;
mod scoreboard;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::{QuizIntent, QuizView};
pub use scoreboard::Scoreboard;
pub use state::ViewError;
