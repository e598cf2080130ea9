//! IDE layer tests
//!
//! Tests for the editor-facing renderers:
//! - Plain-text brief, detailed and suggestion forms
//! - Markup popups and their escaping
//! - Correction regions in editor views

pub mod tests_popup;
pub mod tests_render;
