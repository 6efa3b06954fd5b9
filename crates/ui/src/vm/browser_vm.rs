use grammar_core::model::{QuizAnswers, QuizScore, Rule};
use grammar_core::{BrowserSession, Navigation, PageSize};

use crate::vm::quiz_vm::{QuizResultVm, map_quiz_result};
use crate::vm::rule_page_vm::{RulePageVm, map_rule_page};

/// Browsing state plus the answers and result of the quiz on screen.
///
/// Answers and result belong to the current page: any navigation that moves
/// clears both, a no-op navigation keeps them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserVm {
    session: BrowserSession,
    answers: QuizAnswers,
    result: Option<QuizScore>,
}

impl BrowserVm {
    #[must_use]
    pub fn new(rules: Vec<Rule>, page_size: PageSize) -> Self {
        Self {
            session: BrowserSession::new(rules, page_size),
            answers: QuizAnswers::new(),
            result: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &BrowserSession {
        &self.session
    }

    #[must_use]
    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    #[must_use]
    pub fn page(&self) -> RulePageVm {
        map_rule_page(self.session.page())
    }

    /// Result of the last submission, if it belongs to the current page.
    #[must_use]
    pub fn result(&self) -> Option<QuizResultVm> {
        self.result
            .as_ref()
            .zip(self.session.active_quiz())
            .map(|(score, quiz)| map_quiz_result(quiz, score))
    }

    pub fn select(&mut self, question: usize, option: impl Into<String>) {
        self.answers.select(question, option);
    }

    /// Score the current answers. Returns `None` when the page has no quiz.
    pub fn submit(&mut self) -> Option<&QuizScore> {
        self.result = self.session.score_active_quiz(&self.answers);
        if let Some(score) = &self.result {
            tracing::debug!(
                score = score.score,
                total = score.total,
                answered = self.answers.answered(),
                "quiz submitted"
            );
        }
        self.result.as_ref()
    }

    pub fn go_to_prev_page(&mut self) -> Navigation {
        let navigation = self.session.go_to_prev_page();
        self.after_navigation(navigation, "previous page");
        navigation
    }

    pub fn go_to_next_page(&mut self) -> Navigation {
        let navigation = self.session.go_to_next_page();
        self.after_navigation(navigation, "next page");
        navigation
    }

    fn after_navigation(&mut self, navigation: Navigation, direction: &'static str) {
        if navigation.moved() {
            tracing::debug!(page = self.session.current_page(), "{direction}");
            self.answers.clear();
            self.result = None;
        }
    }
}
