use crate::model::{Quiz, Rule};
use crate::pagination::{PageSize, page_count, page_range, quiz_for_page};

/// Everything needed to display one page, independent of any UI toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    pub current_page: usize,
    pub total_pages: usize,
    /// Absolute index of `rules[0]` in the full sequence.
    pub first_index: usize,
    pub rules: Vec<Rule>,
    pub quiz: Option<Quiz>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageModel {
    /// `(current, total)` for the page indicator; `(0, 0)` when there are no
    /// rules at all.
    #[must_use]
    pub fn indicator(&self) -> (usize, usize) {
        if self.total_pages == 0 {
            (0, 0)
        } else {
            (self.current_page, self.total_pages)
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Build the model for `page`.
#[must_use]
pub fn render_page(rules: &[Rule], page: usize, page_size: PageSize) -> PageModel {
    let total_pages = page_count(rules.len(), page_size);
    let range = page_range(rules.len(), page, page_size);

    PageModel {
        current_page: page,
        total_pages,
        first_index: range.start,
        rules: rules[range].to_vec(),
        quiz: quiz_for_page(rules, page, page_size).cloned(),
        prev_enabled: page > 1,
        next_enabled: page < total_pages,
    }
}
