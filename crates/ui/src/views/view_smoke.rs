use std::sync::Arc;

use dioxus::prelude::*;
use grammar_core::PageSize;
use grammar_core::model::{Example, ExampleKind, Question, Quiz, Rule};
use services::{LoadError, RuleSource, StaticRuleSource, StatusCode};

use super::rules::BrowserBody;
use super::test_harness::{drive_dom, setup_view_harness};
use crate::vm::BrowserVm;

fn rules(n: u32) -> Vec<Rule> {
    (1..=n)
        .map(|i| {
            Rule::new(i, format!("Title {i}"), format!("Explanation **{i}**")).with_examples(
                vec![
                    Example::new(format!("good {i}"), ExampleKind::Correct),
                    Example::new(format!("bad {i}"), ExampleKind::Incorrect),
                ],
            )
        })
        .collect()
}

struct MissingDocument;

#[async_trait::async_trait]
impl RuleSource for MissingDocument {
    async fn fetch(&self) -> Result<Vec<Rule>, LoadError> {
        Err(LoadError::Status(StatusCode::NOT_FOUND))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn rules_view_renders_first_page() {
    let source = Arc::new(StaticRuleSource::new(rules(12)));
    let mut harness = setup_view_harness(source, PageSize::DEFAULT);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Rule 1: Title 1"), "missing first rule in {html}");
    assert!(html.contains("Rule 5: Title 5"), "missing fifth rule in {html}");
    assert!(!html.contains("Rule 6: Title 6"), "second page leaked into {html}");
    assert!(html.contains("Page 1 of 3"), "missing indicator in {html}");
    assert!(html.contains("<strong>1</strong>"), "missing markdown in {html}");
    assert!(html.contains("example--incorrect"), "missing example tag in {html}");
    assert!(!html.contains("quiz-container"), "unexpected quiz in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rules_view_renders_quiz_from_last_slot() {
    let mut rules = rules(5);
    rules[4].quiz = Some(Quiz::new(vec![
        Question::new("She ___ home.", vec!["go", "goes"], "goes"),
        Question::new("They ___ here.", vec!["was", "were"], "were"),
    ]));
    let mut harness = setup_view_harness(Arc::new(StaticRuleSource::new(rules)), PageSize::DEFAULT);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("quiz-container"), "missing quiz in {html}");
    assert!(html.contains("1. She ___ home."), "missing question in {html}");
    assert!(html.contains("quiz-q1"), "missing radio group in {html}");
    assert!(html.contains("Submit Answers"), "missing submit in {html}");
    assert!(!html.contains("quiz-results"), "results before submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rules_view_renders_empty_document() {
    let mut harness = setup_view_harness(Arc::new(StaticRuleSource::default()), PageSize::DEFAULT);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Page 0 of 0"), "missing indicator in {html}");
    assert!(!html.contains("rule-card"), "unexpected card in {html}");
    assert!(!html.contains("Could not load"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rules_view_renders_load_failure() {
    let mut harness = setup_view_harness(Arc::new(MissingDocument), PageSize::DEFAULT);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains(
            "Could not load grammar rules. Please check if &#39;120_Grammar_Rules.json&#39; is in the same folder and is a valid JSON file."
        ) || html.contains(
            "Could not load grammar rules. Please check if '120_Grammar_Rules.json' is in the same folder and is a valid JSON file."
        ),
        "missing error in {html}"
    );
    assert!(!html.contains("rule-card"), "unexpected card in {html}");
    assert!(html.contains("Page 0 of 0"), "missing indicator in {html}");
}

fn quiz_rules() -> Vec<Rule> {
    let mut rules = rules(10);
    for slot in [4, 9] {
        rules[slot].quiz = Some(Quiz::new(vec![
            Question::new("She ___ home.", vec!["go", "goes"], "goes"),
            Question::new("They ___ here.", vec!["was", "were"], "were"),
        ]));
    }
    rules
}

fn submitted() -> BrowserVm {
    let mut vm = BrowserVm::new(quiz_rules(), PageSize::DEFAULT);
    vm.select(0, "goes");
    vm.select(1, "was");
    vm.submit();
    vm
}

#[component]
fn SubmittedBrowser() -> Element {
    let state = use_signal(submitted);
    rsx! { BrowserBody { state } }
}

#[component]
fn SubmittedThenMovedBrowser() -> Element {
    let state = use_signal(|| {
        let mut vm = submitted();
        vm.go_to_next_page();
        vm
    });
    rsx! { BrowserBody { state } }
}

fn render_root(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}

#[test]
fn submitted_quiz_renders_results() {
    let html = render_root(SubmittedBrowser);
    assert!(html.contains("quiz-results"), "missing results in {html}");
    assert!(html.contains("You scored 1 out of 2"), "missing score in {html}");
    assert!(
        html.contains("Question 2: incorrect (answer: were)"),
        "missing outcome in {html}"
    );
    assert!(html.contains("Page 1 of 2"), "missing indicator in {html}");
}

#[test]
fn moving_after_submit_hides_results() {
    let html = render_root(SubmittedThenMovedBrowser);
    assert!(html.contains("Page 2 of 2"), "missing indicator in {html}");
    assert!(html.contains("quiz-container"), "missing quiz in {html}");
    assert!(!html.contains("quiz-results"), "stale results in {html}");
    assert!(!html.contains("You scored"), "stale score in {html}");
}
