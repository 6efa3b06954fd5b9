use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::quiz::{Quiz, QuizError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RuleError {
    #[error("rule {number}: invalid quiz: {source}")]
    InvalidQuiz {
        number: u32,
        #[source]
        source: QuizError,
    },
}

//
// ─── EXAMPLES ──────────────────────────────────────────────────────────────────
//

/// Whether an example sentence shows correct or incorrect usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleKind {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub sentence: String,
    #[serde(rename = "type")]
    pub kind: ExampleKind,
}

impl Example {
    #[must_use]
    pub fn new(sentence: impl Into<String>, kind: ExampleKind) -> Self {
        Self {
            sentence: sentence.into(),
            kind,
        }
    }
}

//
// ─── RULES ─────────────────────────────────────────────────────────────────────
//

/// One grammar rule as authored in the rules document.
///
/// `number` is a display identifier only; duplicates are not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "rule_number")]
    pub number: u32,
    pub title: String,
    pub explanation: String,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
}

impl Rule {
    #[must_use]
    pub fn new(number: u32, title: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            explanation: explanation.into(),
            examples: Vec::new(),
            quiz: None,
        }
    }

    #[must_use]
    pub fn with_examples(mut self, examples: Vec<Example>) -> Self {
        self.examples = examples;
        self
    }

    #[must_use]
    pub fn with_quiz(mut self, quiz: Quiz) -> Self {
        self.quiz = Some(quiz);
        self
    }

    /// Check the attached quiz, if any.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidQuiz` when a question repeats an option or
    /// names a correct answer that is not one of its options.
    pub fn validate(&self) -> Result<(), RuleError> {
        if let Some(quiz) = &self.quiz {
            quiz.validate().map_err(|source| RuleError::InvalidQuiz {
                number: self.number,
                source,
            })?;
        }
        Ok(())
    }
}

/// Validate every rule in a freshly loaded sequence.
///
/// # Errors
///
/// Returns the first `RuleError` encountered, in sequence order.
pub fn validate_rules(rules: &[Rule]) -> Result<(), RuleError> {
    rules.iter().try_for_each(Rule::validate)
}
