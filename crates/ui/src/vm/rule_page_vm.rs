use grammar_core::PageModel;
use grammar_core::model::{Example, ExampleKind, Rule};

use crate::vm::markdown_vm::markdown_to_html;
use crate::vm::quiz_vm::QuizVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExampleVm {
    pub sentence: String,
    pub class: &'static str,
}

impl From<&Example> for ExampleVm {
    fn from(example: &Example) -> Self {
        let class = match example.kind {
            ExampleKind::Correct => "example example--correct",
            ExampleKind::Incorrect => "example example--incorrect",
        };
        Self {
            sentence: example.sentence.clone(),
            class,
        }
    }
}

/// One rule card, ready to display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleCardVm {
    pub heading: String,
    pub explanation_html: String,
    pub examples: Vec<ExampleVm>,
}

impl From<&Rule> for RuleCardVm {
    fn from(rule: &Rule) -> Self {
        Self {
            heading: format!("Rule {}: {}", rule.number, rule.title),
            explanation_html: markdown_to_html(&rule.explanation),
            examples: rule.examples.iter().map(ExampleVm::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulePageVm {
    pub cards: Vec<RuleCardVm>,
    pub page_label: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub quiz: Option<QuizVm>,
}

impl RulePageVm {
    /// Page shown when nothing could be loaded.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            cards: Vec::new(),
            page_label: page_label(0, 0),
            prev_disabled: true,
            next_disabled: true,
            quiz: None,
        }
    }
}

#[must_use]
pub fn page_label(current: usize, total: usize) -> String {
    format!("Page {current} of {total}")
}

#[must_use]
pub fn map_rule_page(page: &PageModel) -> RulePageVm {
    let (current, total) = page.indicator();
    RulePageVm {
        cards: page.rules.iter().map(RuleCardVm::from).collect(),
        page_label: page_label(current, total),
        prev_disabled: !page.prev_enabled,
        next_disabled: !page.next_enabled,
        quiz: page.quiz.as_ref().map(QuizVm::from),
    }
}

#[cfg(test)]
mod tests {
    use grammar_core::model::{Question, Quiz};
    use grammar_core::{PageSize, render_page};

    use super::*;

    fn rules(n: u32) -> Vec<Rule> {
        (1..=n)
            .map(|i| {
                Rule::new(i, format!("Title {i}"), "Plain *text*.").with_examples(vec![
                    Example::new("good", ExampleKind::Correct),
                    Example::new("bad", ExampleKind::Incorrect),
                ])
            })
            .collect()
    }

    #[test]
    fn maps_cards_and_label() {
        let vm = map_rule_page(&render_page(&rules(12), 3, PageSize::DEFAULT));
        assert_eq!(vm.page_label, "Page 3 of 3");
        assert_eq!(vm.cards.len(), 2);
        assert_eq!(vm.cards[0].heading, "Rule 11: Title 11");
        assert_eq!(vm.cards[0].explanation_html.trim(), "<p>Plain <em>text</em>.</p>");
        assert_eq!(vm.cards[0].examples[1].class, "example example--incorrect");
        assert!(!vm.prev_disabled);
        assert!(vm.next_disabled);
    }

    #[test]
    fn empty_page_reads_zero_of_zero() {
        let vm = map_rule_page(&render_page(&[], 1, PageSize::DEFAULT));
        assert_eq!(vm, RulePageVm::unavailable());
    }

    #[test]
    fn carries_quiz() {
        let mut rules = rules(5);
        rules[4].quiz = Some(Quiz::new(vec![Question::new("q", vec!["a", "b"], "a")]));
        let vm = map_rule_page(&render_page(&rules, 1, PageSize::DEFAULT));
        let quiz = vm.quiz.expect("quiz");
        assert_eq!(quiz.questions.len(), 1);
    }
}
