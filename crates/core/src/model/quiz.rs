use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question {question} repeats option {option:?}")]
    DuplicateOption { question: usize, option: String },

    #[error("question {question} answer {answer:?} is not one of its options")]
    AnswerNotInOptions { question: usize, answer: String },
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<impl Into<String>>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    /// Exact, case-sensitive comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_answer == selected
    }
}

/// Ordered questions attached to a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quiz(Vec<Question>);

impl Quiz {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self(questions)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// # Errors
    ///
    /// Returns `QuizError` for the first question with repeated options or an
    /// answer outside its options.
    pub fn validate(&self) -> Result<(), QuizError> {
        for (index, question) in self.0.iter().enumerate() {
            let mut seen = HashSet::with_capacity(question.options.len());
            for option in &question.options {
                if !seen.insert(option.as_str()) {
                    return Err(QuizError::DuplicateOption {
                        question: index,
                        option: option.clone(),
                    });
                }
            }
            if !seen.contains(question.correct_answer.as_str()) {
                return Err(QuizError::AnswerNotInOptions {
                    question: index,
                    answer: question.correct_answer.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Selected option per question index. Unanswered questions have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswers(BTreeMap<usize, String>);

impl QuizAnswers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, question: usize, option: impl Into<String>) {
        self.0.insert(question, option.into());
    }

    #[must_use]
    pub fn selected(&self, question: usize) -> Option<&str> {
        self.0.get(&question).map(String::as_str)
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<S: Into<String>> FromIterator<(usize, S)> for QuizAnswers {
    fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(idx, opt)| (idx, opt.into())).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOutcome {
    Correct,
    Incorrect,
    Unanswered,
}

/// Result of scoring one quiz submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizScore {
    pub score: usize,
    pub total: usize,
    pub outcomes: Vec<QuestionOutcome>,
}

/// Score a submission. Each exact match is worth one point; unanswered or
/// mismatched questions score zero.
#[must_use]
pub fn score_quiz(quiz: &Quiz, answers: &QuizAnswers) -> QuizScore {
    let outcomes = quiz
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| match answers.selected(index) {
            None => QuestionOutcome::Unanswered,
            Some(selected) if question.is_correct(selected) => QuestionOutcome::Correct,
            Some(_) => QuestionOutcome::Incorrect,
        })
        .collect::<Vec<_>>();

    let score = outcomes
        .iter()
        .filter(|outcome| **outcome == QuestionOutcome::Correct)
        .count();

    QuizScore {
        score,
        total: quiz.len(),
        outcomes,
    }
}
