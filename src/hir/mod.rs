//! High-level IR (HIR): the symbol graph.
//!
//! Modules, declarations and imports gathered by inspection passes, stored
//! in an arena and merged by identity.
//!
//! ## Key Types
//!
//! - [`SymbolDb`]: Arena owning every [`Module`] and [`Declaration`]
//! - [`ModuleId`], [`DeclId`]: Stable arena identifiers
//! - [`DeclarationRef`]: A declaration plus the db, for navigation
//! - [`ModuleFacts`]: Raw output of one inspection pass
//!
//! ## Data Flow
//!
//! ```text
//! ModuleFacts (inspection output)
//!     │
//!     ▼
//! Module + Declarations      ← fresh values, location attached
//!     │
//!     ▼
//! SymbolDb::merge_module     ← same_module decides replace vs insert
//!     │
//!     ▼
//! DeclarationRef             ← queried by ide rendering
//! ```

mod db;
mod declaration;
mod error;
mod facts;
mod identity;
mod ids;
mod module;

pub use db::{DeclarationRef, SharedSymbolDb, SymbolDb};
pub use declaration::{Declaration, DeclarationKind, SymbolKind, TypeInfo, TypeKind};
pub use error::{Result, SymbolError};
pub use facts::{DeclarationFacts, DeclarationKindFacts, ImportFacts, ModuleFacts, TypeFacts};
pub use identity::{
    is_by_sources, is_within_cabal, is_within_project, same_declaration, same_module,
    update_with,
};
pub use ids::{DeclId, ModuleId};
pub use module::{Import, Module};
