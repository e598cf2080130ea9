//! IDE features: rendering the symbol graph for editors.
//!
//! This module sits between the symbol graph (HIR) and the editor plugin.
//! Plain-text forms never contain markup; markup forms escape every piece
//! of text taken from the graph.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No editor types**: Editors are reached through [`EditorView`]
//! 3. **Composable**: Built on top of [`DeclarationRef`](crate::hir::DeclarationRef)
//!
//! ## Usage
//!
//! ```ignore
//! use hsym::ide::{RenderOptions, detailed, popup};
//!
//! let decl = db.declaration_ref(id).unwrap();
//! let info = detailed(decl);
//! let html = popup(decl, &RenderOptions::default());
//! ```

mod corrections;
mod escape;
mod options;
mod package;
mod popup;
mod render;
mod type_format;

pub use corrections::{
    CORRECTIONS_ICON, CORRECTIONS_KEY, CORRECTIONS_SCOPE, Correction, Corrector, EditorView,
    Severity, TextBuffer, mark_corrections, same_file,
};
pub use escape::{escape_attr, escape_html, escape_text};
pub use options::RenderOptions;
pub use package::CabalPackage;
pub use popup::{popup, popup_brief};
pub use render::{Suggestion, brief, detailed, suggest, wrap_operator};
pub use type_format::{TokenClass, TypeToken, classify_type, format_type};
