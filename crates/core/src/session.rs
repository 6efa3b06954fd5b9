use crate::model::{Quiz, QuizAnswers, QuizScore, Rule, score_quiz};
use crate::pagination::{PageSize, page_count, quiz_for_page};
use crate::render::{PageModel, render_page};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Moved,
    Unchanged,
}

impl Navigation {
    #[must_use]
    pub fn moved(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Browsing state over a loaded rule sequence.
///
/// The rules are fixed at construction. The current page only changes through
/// `go_to_prev_page` / `go_to_next_page`, and each change re-renders the page
/// model, which also replaces the active quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserSession {
    rules: Vec<Rule>,
    page_size: PageSize,
    total_pages: usize,
    current_page: usize,
    page: PageModel,
}

impl BrowserSession {
    #[must_use]
    pub fn new(rules: Vec<Rule>, page_size: PageSize) -> Self {
        let total_pages = page_count(rules.len(), page_size);
        let page = render_page(&rules, 1, page_size);
        Self {
            rules,
            page_size,
            total_pages,
            current_page: 1,
            page,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Model of the page currently displayed.
    #[must_use]
    pub fn page(&self) -> &PageModel {
        &self.page
    }

    #[must_use]
    pub fn active_quiz(&self) -> Option<&Quiz> {
        self.page.quiz.as_ref()
    }

    pub fn go_to_prev_page(&mut self) -> Navigation {
        if self.current_page <= 1 {
            return Navigation::Unchanged;
        }
        self.current_page -= 1;
        self.render();
        Navigation::Moved
    }

    pub fn go_to_next_page(&mut self) -> Navigation {
        if self.current_page >= self.total_pages {
            return Navigation::Unchanged;
        }
        self.current_page += 1;
        self.render();
        Navigation::Moved
    }

    /// Score answers against the active quiz. `None` when the page has no quiz.
    #[must_use]
    pub fn score_active_quiz(&self, answers: &QuizAnswers) -> Option<QuizScore> {
        self.active_quiz().map(|quiz| score_quiz(quiz, answers))
    }

    /// Pages whose last slot carries a quiz, in order.
    #[must_use]
    pub fn quiz_pages(&self) -> Vec<usize> {
        (1..=self.total_pages)
            .filter(|page| quiz_for_page(&self.rules, *page, self.page_size).is_some())
            .collect()
    }

    fn render(&mut self) {
        self.page = render_page(&self.rules, self.current_page, self.page_size);
    }
}
