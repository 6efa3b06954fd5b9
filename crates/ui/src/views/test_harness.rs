use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use grammar_core::PageSize;
use services::{RuleLoader, RuleSource};

use crate::context::{UiApp, build_app_context};
use crate::views::RulesView;

struct TestApp {
    loader: RuleLoader,
    page_size: PageSize,
}

impl UiApp for TestApp {
    fn rule_loader(&self) -> RuleLoader {
        self.loader.clone()
    }

    fn page_size(&self) -> PageSize {
        self.page_size
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { RulesView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Build, then poll until the rules resource has resolved.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..10 {
            self.drive_async().await;
            if !self.render().contains("Loading...") {
                break;
            }
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(source: Arc<dyn RuleSource>, page_size: PageSize) -> ViewHarness {
    let app = Arc::new(TestApp {
        loader: RuleLoader::new(source),
        page_size,
    });
    let dom = VirtualDom::new_with_props(ViewRoot, ViewHarnessProps { app });
    ViewHarness { dom }
}
