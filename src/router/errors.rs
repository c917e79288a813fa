use crate::tree::TreeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("router is sealed; cannot add route '{template}'")]
    AddWhileSealed { template: String },
    #[error("router is sealed; cannot add {count} routes in bulk")]
    BulkAddWhileSealed { count: usize },
    #[error("router is not sealed; cannot perform route lookup")]
    FindWhileMutable,
    #[error("router is not sealed; readonly snapshot is unavailable")]
    ReadOnlyUnavailable,
    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl RouterError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Tree(err) if err.is_not_found())
    }
}

pub type RouterResult<T> = Result<T, RouterError>;
