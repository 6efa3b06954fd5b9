mod quiz;
mod rule;

pub use quiz::{
    QuestionOutcome, Question, Quiz, QuizAnswers, QuizError, QuizScore, score_quiz,
};
pub use rule::{Example, ExampleKind, Rule, RuleError, validate_rules};
