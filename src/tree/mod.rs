mod error;
pub mod node;
mod traversal;
#[allow(clippy::module_inception)]
mod tree;

pub use error::{TreeError, TreeResult};
pub use node::{PathNode, RouteTarget};
pub use traversal::RouteEntry;
pub use tree::RouteTree;
