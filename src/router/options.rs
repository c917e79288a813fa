use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_TEMPLATE_LENGTH: usize = 4096;

/// What to do when a route is registered twice for the same path, verb and
/// method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DuplicatePolicy {
    /// Last registration wins.
    #[default]
    Overwrite,
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouterConfig {
    pub trim_whitespace: bool,
    pub case_sensitive_methods: bool,
    pub duplicate_policy: DuplicatePolicy,
    pub max_template_length: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            case_sensitive_methods: true,
            duplicate_policy: DuplicatePolicy::default(),
            max_template_length: DEFAULT_MAX_TEMPLATE_LENGTH,
        }
    }
}

impl RouterConfig {
    pub fn builder() -> RouterConfigBuilder {
        RouterConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterConfigError> {
        if self.max_template_length == 0 {
            return Err(RouterConfigError::MaxTemplateLengthInvalid { provided: 0 });
        }
        Ok(())
    }

    pub(crate) fn normalize_method<'m>(&self, method: &'m str) -> std::borrow::Cow<'m, str> {
        if self.case_sensitive_methods {
            std::borrow::Cow::Borrowed(method)
        } else {
            std::borrow::Cow::Owned(method.to_ascii_uppercase())
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterConfigBuilder {
    config: RouterConfig,
}

impl RouterConfigBuilder {
    pub fn trim_whitespace(mut self, value: bool) -> Self {
        self.config.trim_whitespace = value;
        self
    }

    pub fn case_sensitive_methods(mut self, value: bool) -> Self {
        self.config.case_sensitive_methods = value;
        self
    }

    pub fn duplicate_policy(mut self, value: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = value;
        self
    }

    pub fn max_template_length(mut self, value: usize) -> Self {
        self.config.max_template_length = value;
        self
    }

    pub fn build(self) -> Result<RouterConfig, RouterConfigError> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterConfigError {
    #[error("max_template_length must be at least 1 (got {provided})")]
    MaxTemplateLengthInvalid { provided: usize },
}

pub type RouterOptions = RouterConfig;
pub type RouterOptionsBuilder = RouterConfigBuilder;
pub type RouterOptionsError = RouterConfigError;
