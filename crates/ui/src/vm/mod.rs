mod quiz_vm;

pub use quiz_vm::{
    OptionVm, QuestionScreenVm, QuizIntent, QuizScreenVm, QuizVm, ResultScreenVm, map_quiz_screen,
    start_quiz,
};
