//! Foundation types for the hsym toolchain.
//!
//! This module provides the value types everything else is built on:
//! - [`Position`] - Line/column positions (column optional)
//! - [`Location`] - Provenance of a module (source file, installed package, other)
//! - [`Package`], [`PackageDb`] - Installed package identity
//! - [`LineIndex`], [`TextRange`], [`TextSize`] - Offsets for editor regions
//!
//! This module has NO dependencies on other hsym modules.

mod line_index;
mod location;
mod position;

pub use line_index::LineIndex;
pub use location::{
    InstalledLocation, Location, OtherLocation, Package, PackageDb, SourceLocation,
    parse_package, source_location,
};
pub use position::Position;

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
