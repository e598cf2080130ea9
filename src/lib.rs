//! # hsym-base
//!
//! Core library for the Haskell symbol model: modules, declarations and
//! imports gathered from source files and installed packages, merged by
//! identity and rendered for editors.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Rendering (brief, detailed, popup), suggestions, corrections
//!   ↓
//! hir       → Symbol graph: SymbolDb, Module, Declaration, merge rules
//!   ↓
//! worker    → Background job queue
//!   ↓
//! core      → Name utilities (qualified names, identifiers)
//!   ↓
//! base      → Primitives (Position, Location, Package, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → core → worker → hir → ide)
// ============================================================================

/// Foundation types: Position, Location, Package, TextRange
pub mod base;

/// Identifier and qualified name helpers
pub mod core;

/// Background job queue with failure isolation
pub mod worker;

/// Symbol graph: arena, entities, identity and merge rules
pub mod hir;

/// Editor-facing rendering and correction regions
pub mod ide;

// Re-export foundation types
pub use base::{
    LineIndex, Location, Package, PackageDb, Position, TextRange, TextSize, parse_package,
    source_location,
};
pub use hir::{DeclId, Declaration, DeclarationRef, Module, ModuleId, SymbolDb, SymbolError};
pub use worker::{JobError, Worker, WorkerConfig, WorkerError, WorkerHandle};
