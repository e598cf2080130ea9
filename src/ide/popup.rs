//! Markup rendering of declarations for hover popups.
//!
//! All text coming from the symbol graph is escaped; the only tags in the
//! output are the `<span>`, `<a>`, `<p>` and `<br>` inserted here. Anchors
//! point at `file:line:column` targets (see [`source_location`]) or at the
//! documentation page of an installed module.
//!
//! [`source_location`]: crate::base::source_location

use super::escape::{escape_attr, escape_html, escape_text};
use super::options::RenderOptions;
use super::render::context_text;
use super::type_format::format_type;
use crate::base::Location;
use crate::hir::{DeclarationKind, DeclarationRef, Module};

fn link(href: &str, inner: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, escape_attr(href), inner)
}

fn span(class: &str, inner: &str) -> String {
    format!(r#"<span class="{class}">{inner}</span>"#)
}

/// Name (linked to its definition when known) and signature.
pub fn popup_brief(decl: DeclarationRef<'_>) -> String {
    let source = decl.source_location();
    let linked = |inner: String| match &source {
        Some(target) => link(target, &inner),
        None => inner,
    };

    match &decl.kind {
        DeclarationKind::Other => linked(span("function", &escape_html(&decl.name))),
        DeclarationKind::Function { signature } => format!(
            "{} {} {}",
            linked(span("function", &escape_html(&decl.name))),
            span("operator", "::"),
            format_type(signature.as_deref().unwrap_or("?"))
        ),
        DeclarationKind::Type { info, .. } => {
            let mut parts = vec![span("keyword", &escape_html(decl.what().display()))];
            if let Some(context) = context_text(&info.context) {
                parts.push(format_type(&context));
            }
            parts.push(linked(span("type", &escape_html(&decl.name))));
            if !info.args.is_empty() {
                parts.push(format_type(&info.args.join(" ")));
            }
            parts.join(" ")
        }
    }
}

/// Reference to the defining module: a link to the file for source
/// modules, to the documentation site for installed ones.
fn module_ref(module: &Module, options: &RenderOptions) -> String {
    let name = escape_html(&module.name);
    match &module.location {
        Some(location @ Location::Source(_)) => link(&location.to_string(), &name),
        Some(Location::Installed(loc)) => link(
            &options.module_docs_url(&loc.package.package_id(), &module.name),
            &name,
        ),
        _ => name,
    }
}

/// Full popup: signature, origin comments and docs.
pub fn popup(decl: DeclarationRef<'_>, options: &RenderOptions) -> String {
    let indent = options.indent();
    let mut out = String::from("<p>");
    out.push_str(&popup_brief(decl));

    let imported = decl.imported_names();
    if !imported.is_empty() {
        let comment = format!("-- Imported from {}", escape_html(&imported.join(", ")));
        out.push_str(&format!("<br>{indent}{}", span("comment", &comment)));
    }

    if let Some(module) = decl.defined_module() {
        let comment = format!("-- Defined in {}", module_ref(module, options));
        out.push_str(&format!("<br>{indent}{}", span("comment", &comment)));
    }
    out.push_str("</p>");

    if let Some(docs) = &decl.docs {
        out.push_str(&format!("<p>{}</p>", span("docs", &escape_text(docs))));
    }
    out
}
