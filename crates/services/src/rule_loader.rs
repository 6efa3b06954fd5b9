use std::env;
use std::sync::Arc;

use grammar_core::PageSize;
use grammar_core::model::{Rule, validate_rules};
use tracing::{debug, info, instrument, warn};

use crate::error::LoadError;
use crate::rule_source::{RuleLocation, RuleSource};

pub const SOURCE_ENV: &str = "GRAMMAR_RULES_SOURCE";
pub const PAGE_SIZE_ENV: &str = "GRAMMAR_PAGE_SIZE";

/// Where to load rules from and how many to show per page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    pub location: RuleLocation,
    pub page_size: PageSize,
}

impl LoaderConfig {
    /// Read `GRAMMAR_RULES_SOURCE` and `GRAMMAR_PAGE_SIZE`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unparseable values are
    /// logged and replaced by defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let location = lookup(SOURCE_ENV)
            .and_then(|raw| match RuleLocation::parse(&raw) {
                Ok(location) => Some(location),
                Err(err) => {
                    warn!(%err, raw = %raw, "ignoring {SOURCE_ENV}");
                    None
                }
            })
            .unwrap_or_default();

        let page_size = lookup(PAGE_SIZE_ENV)
            .and_then(|raw| match raw.parse::<PageSize>() {
                Ok(size) => Some(size),
                Err(err) => {
                    warn!(%err, raw = %raw, "ignoring {PAGE_SIZE_ENV}");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            location,
            page_size,
        }
    }
}

/// Loads and validates the rule sequence from a source, once per call.
#[derive(Clone)]
pub struct RuleLoader {
    source: Arc<dyn RuleSource>,
}

impl RuleLoader {
    #[must_use]
    pub fn new(source: Arc<dyn RuleSource>) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn from_location(location: RuleLocation) -> Self {
        Self::new(location.into_source())
    }

    /// Name of the document, for error messages.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.source.file_name()
    }

    /// Fetch, decode and validate the rules. There are no retries.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the source fails, the payload is not a rule
    /// array, or a quiz is inconsistent.
    #[instrument(skip(self), fields(file = %self.file_name()))]
    pub async fn load(&self) -> Result<Vec<Rule>, LoadError> {
        debug!("loading grammar rules");

        let result = self.source.fetch().await.and_then(|rules| {
            validate_rules(&rules)?;
            Ok(rules)
        });

        match &result {
            Ok(rules) => info!(count = rules.len(), "loaded grammar rules"),
            Err(err) => warn!(error = %err, kind = ?err.kind(), "could not load grammar rules"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use grammar_core::model::{Question, Quiz};

    use super::*;
    use crate::error::LoadFailure;
    use crate::rule_source::StaticRuleSource;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn config_defaults() {
        let config = LoaderConfig::from_lookup(lookup(&[]));
        assert_eq!(config, LoaderConfig::default());
        assert_eq!(config.page_size, PageSize::DEFAULT);
    }

    #[test]
    fn config_reads_values() {
        let config = LoaderConfig::from_lookup(lookup(&[
            (SOURCE_ENV, "data/rules.json"),
            (PAGE_SIZE_ENV, "10"),
        ]));
        assert_eq!(
            config.location,
            RuleLocation::File(PathBuf::from("data/rules.json"))
        );
        assert_eq!(config.page_size, PageSize::EXTENDED);
    }

    #[test]
    fn config_ignores_bad_values() {
        let config =
            LoaderConfig::from_lookup(lookup(&[(SOURCE_ENV, "  "), (PAGE_SIZE_ENV, "0")]));
        assert_eq!(config, LoaderConfig::default());
    }

    #[tokio::test]
    async fn load_rejects_inconsistent_quiz() {
        let quiz = Quiz::new(vec![Question::new("q", vec!["a", "b"], "z")]);
        let rules = vec![Rule::new(1, "T", "E").with_quiz(quiz)];
        let loader = RuleLoader::new(Arc::new(StaticRuleSource::new(rules)));

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Invalid(_)));
        assert_eq!(err.kind(), LoadFailure::Parse);
    }

    #[tokio::test]
    async fn load_returns_rules_in_order() {
        let rules = vec![Rule::new(2, "B", "E"), Rule::new(1, "A", "E")];
        let loader = RuleLoader::new(Arc::new(StaticRuleSource::new(rules.clone())));
        assert_eq!(loader.load().await.unwrap(), rules);
    }
}
