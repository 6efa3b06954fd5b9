use dioxus::prelude::*;
use grammar_core::PageSize;
use grammar_core::model::{QuizAnswers, Rule};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{BrowserVm, QuizResultVm, QuizVm, RuleCardVm, RulePageVm};

#[component]
pub fn RulesView() -> Element {
    let ctx = use_context::<AppContext>();
    let loader = ctx.rule_loader();
    let page_size = ctx.page_size();

    let resource = use_resource(move || {
        let loader = loader.clone();
        async move {
            loader.load().await.map_err(|_| ViewError::LoadFailed {
                file_name: loader.file_name(),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page rules-page",
            header { class: "view-header",
                h1 { class: "view-title", "Grammar Rules" }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "rules-loading", "Loading..." }
                },
                ViewState::Ready(rules) => rsx! {
                    RuleBrowser { rules, page_size }
                },
                ViewState::Error(err) => {
                    let page = RulePageVm::unavailable();
                    rsx! {
                        div { id: "rules-container", class: "rules-container",
                            p { class: "load-error", "{err.message()}" }
                        }
                        PageNav {
                            page_label: page.page_label,
                            prev_disabled: page.prev_disabled,
                            next_disabled: page.next_disabled,
                            on_prev: move |()| {},
                            on_next: move |()| {},
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RuleBrowser(rules: Vec<Rule>, page_size: PageSize) -> Element {
    let state = use_signal(|| BrowserVm::new(rules.clone(), page_size));
    rsx! {
        BrowserBody { state }
    }
}

#[component]
pub(super) fn BrowserBody(state: Signal<BrowserVm>) -> Element {
    let mut state = state;
    let (page, answers, result) = {
        let vm = state.read();
        (vm.page(), vm.answers().clone(), vm.result())
    };

    let cards = page.cards.iter().enumerate().map(|(slot, card)| {
        rsx! {
            RuleCard { key: "{slot}", card: card.clone() }
        }
    });

    rsx! {
        div { id: "rules-container", class: "rules-container", {cards} }

        if let Some(quiz) = page.quiz.clone() {
            QuizPanel {
                quiz,
                answers,
                result,
                on_select: move |(question, option): (usize, String)| {
                    state.write().select(question, option);
                },
                on_submit: move |()| {
                    state.write().submit();
                },
            }
        }

        PageNav {
            page_label: page.page_label.clone(),
            prev_disabled: page.prev_disabled,
            next_disabled: page.next_disabled,
            on_prev: move |()| {
                state.write().go_to_prev_page();
            },
            on_next: move |()| {
                state.write().go_to_next_page();
            },
        }
    }
}

#[component]
fn RuleCard(card: RuleCardVm) -> Element {
    rsx! {
        article { class: "rule-card",
            h3 { "{card.heading}" }
            div { class: "rule-explanation", dangerous_inner_html: "{card.explanation_html}" }
            if !card.examples.is_empty() {
                ul { class: "rule-examples",
                    for example in card.examples.iter() {
                        li { class: "{example.class}", "{example.sentence}" }
                    }
                }
            }
        }
    }
}

#[component]
fn QuizPanel(
    quiz: QuizVm,
    answers: QuizAnswers,
    result: Option<QuizResultVm>,
    on_select: EventHandler<(usize, String)>,
    on_submit: EventHandler<()>,
) -> Element {
    let questions = quiz.questions.iter().map(|question| {
        let index = question.index;
        let options = question.options.iter().map(|option| {
            let value = option.clone();
            let checked = answers.selected(index) == Some(option.as_str());
            rsx! {
                label { class: "quiz-option",
                    input {
                        r#type: "radio",
                        name: "{question.field_name}",
                        value: "{option}",
                        checked,
                        onchange: move |_| on_select.call((index, value.clone())),
                    }
                    span { "{option}" }
                }
            }
        });
        rsx! {
            fieldset { class: "quiz-question",
                legend { "{question.prompt}" }
                {options}
            }
        }
    });

    rsx! {
        section { id: "quiz-container", class: "quiz",
            h2 { class: "quiz-title", "Quiz" }
            {questions}
            button {
                id: "submit-quiz",
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_submit.call(()),
                "Submit Answers"
            }
            if let Some(result) = result {
                div { id: "quiz-results", class: "quiz-results",
                    p { class: "quiz-score", "{result.label}" }
                    ul {
                        for outcome in result.outcomes.iter() {
                            li { class: "{outcome.class}", "{outcome.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PageNav(
    page_label: String,
    prev_disabled: bool,
    next_disabled: bool,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        nav { class: "pagination",
            button {
                id: "prev-btn",
                class: "btn btn-secondary",
                r#type: "button",
                disabled: prev_disabled,
                onclick: move |_| on_prev.call(()),
                "Previous"
            }
            span { id: "page-info", class: "page-info", "{page_label}" }
            button {
                id: "next-btn",
                class: "btn btn-secondary",
                r#type: "button",
                disabled: next_disabled,
                onclick: move |_| on_next.call(()),
                "Next"
            }
        }
    }
}
