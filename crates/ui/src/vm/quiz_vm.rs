use grammar_core::model::{QuestionOutcome, Quiz, QuizScore};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    /// Radio group name, unique per question.
    pub field_name: String,
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub questions: Vec<QuestionVm>,
}

impl From<&Quiz> for QuizVm {
    fn from(quiz: &Quiz) -> Self {
        let questions = quiz
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionVm {
                index,
                field_name: format!("quiz-q{index}"),
                prompt: format!("{}. {}", index + 1, question.prompt),
                options: question.options.clone(),
            })
            .collect();
        Self { questions }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeVm {
    pub label: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub label: String,
    pub outcomes: Vec<OutcomeVm>,
}

#[must_use]
pub fn map_quiz_result(quiz: &Quiz, score: &QuizScore) -> QuizResultVm {
    let outcomes = quiz
        .questions()
        .iter()
        .zip(&score.outcomes)
        .enumerate()
        .map(|(index, (question, outcome))| {
            let number = index + 1;
            match outcome {
                QuestionOutcome::Correct => OutcomeVm {
                    label: format!("Question {number}: correct"),
                    class: "quiz-outcome quiz-outcome--correct",
                },
                QuestionOutcome::Incorrect => OutcomeVm {
                    label: format!(
                        "Question {number}: incorrect (answer: {})",
                        question.correct_answer
                    ),
                    class: "quiz-outcome quiz-outcome--incorrect",
                },
                QuestionOutcome::Unanswered => OutcomeVm {
                    label: format!(
                        "Question {number}: not answered (answer: {})",
                        question.correct_answer
                    ),
                    class: "quiz-outcome quiz-outcome--unanswered",
                },
            }
        })
        .collect();

    QuizResultVm {
        label: format!("You scored {} out of {}", score.score, score.total),
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use grammar_core::model::{Question, QuizAnswers, score_quiz};

    use super::*;

    fn quiz() -> Quiz {
        Quiz::new(vec![
            Question::new("She ___ home.", vec!["go", "goes"], "goes"),
            Question::new("We ___ late.", vec!["was", "were"], "were"),
            Question::new("It ___ cold.", vec!["is", "are"], "is"),
        ])
    }

    #[test]
    fn question_fields_are_numbered() {
        let vm = QuizVm::from(&quiz());
        assert_eq!(vm.questions[0].prompt, "1. She ___ home.");
        assert_eq!(vm.questions[2].field_name, "quiz-q2");
        assert_eq!(vm.questions[1].options, vec!["was", "were"]);
    }

    #[test]
    fn result_lists_each_outcome() {
        let quiz = quiz();
        let answers: QuizAnswers = [(0, "goes"), (1, "was")].into_iter().collect();
        let result = map_quiz_result(&quiz, &score_quiz(&quiz, &answers));

        assert_eq!(result.label, "You scored 1 out of 3");
        assert_eq!(result.outcomes[0].label, "Question 1: correct");
        assert_eq!(
            result.outcomes[1].label,
            "Question 2: incorrect (answer: were)"
        );
        assert_eq!(
            result.outcomes[2].class,
            "quiz-outcome quiz-outcome--unanswered"
        );
    }
}
