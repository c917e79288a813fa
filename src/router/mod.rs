mod errors;
mod options;
mod service;

pub use errors::{RouterError, RouterResult};
pub use options::{
    DEFAULT_MAX_TEMPLATE_LENGTH, DuplicatePolicy, RouterConfig, RouterConfigBuilder,
    RouterConfigError, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
};
pub use service::Router;
