mod browser_vm;
mod markdown_vm;
mod quiz_vm;
mod rule_page_vm;

pub use browser_vm::BrowserVm;
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use quiz_vm::{OutcomeVm, QuestionVm, QuizResultVm, QuizVm, map_quiz_result};
pub use rule_page_vm::{ExampleVm, RuleCardVm, RulePageVm, map_rule_page, page_label};
