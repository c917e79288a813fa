pub mod path;
pub mod registry;
pub mod router;
pub mod template;
pub mod tree;
pub mod types;

pub use registry::RegistryMetrics;
pub use router::{
    DuplicatePolicy, Router, RouterError, RouterOptions, RouterOptionsBuilder,
    RouterOptionsError, RouterResult,
};
pub use template::{CompiledRoute, TemplateError, compile, compile_template, parse_template};
pub use tree::{RouteEntry, RouteTree, TreeError, TreeResult};
pub use types::{MatchResult, PathVar};
