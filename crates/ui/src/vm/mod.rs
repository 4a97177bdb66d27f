mod quiz_vm;

pub use quiz_vm::{
    ExplanationVm, HeaderVm, IntroVm, OptionState, OptionVm, QuestionVm, QuizScreenVm, ScreenVm,
    SummaryVm, map_quiz_screen,
};
