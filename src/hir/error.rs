//! Error types for the symbol model.

use std::sync::Arc;

use thiserror::Error;

use super::ModuleId;

/// Errors raised while building or merging the symbol graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// A declaration already owned by one module was added to another.
    #[error("declaration '{name}' belongs to {owner}, refusing to add it to {target}")]
    OwnershipViolation {
        name: Arc<str>,
        owner: ModuleId,
        target: ModuleId,
    },

    /// The module id does not name a live module.
    #[error("unknown module: {0}")]
    UnknownModule(ModuleId),
}

pub type Result<T> = std::result::Result<T, SymbolError>;
