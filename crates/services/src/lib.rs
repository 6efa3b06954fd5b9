#![forbid(unsafe_code)]

pub mod error;
pub mod rule_loader;
pub mod rule_source;

pub use error::{LoadError, LoadFailure, LocationError};
pub use reqwest::StatusCode;
pub use rule_loader::{LoaderConfig, PAGE_SIZE_ENV, RuleLoader, SOURCE_ENV};
pub use rule_source::{
    DEFAULT_RULES_FILE, FileRuleSource, HttpRuleSource, RuleLocation, RuleSource,
    StaticRuleSource,
};
