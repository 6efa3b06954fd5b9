use std::sync::Arc;

use grammar_core::PageSize;
use services::RuleLoader;

pub trait UiApp: Send + Sync {
    fn rule_loader(&self) -> RuleLoader;
    fn page_size(&self) -> PageSize;
}

#[derive(Clone)]
pub struct AppContext {
    rule_loader: RuleLoader,
    page_size: PageSize,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            rule_loader: app.rule_loader(),
            page_size: app.page_size(),
        }
    }

    #[must_use]
    pub fn rule_loader(&self) -> RuleLoader {
        self.rule_loader.clone()
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
