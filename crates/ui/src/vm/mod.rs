mod quiz_vm;

pub use quiz_vm::{
    MediaKey, MediaVm, OptionStatus, OptionVm, QuestionVm, QuizBody, QuizScreenVm, ScoreboardVm,
    final_score_message, map_quiz_screen, progress_style,
};
