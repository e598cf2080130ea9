//! Plain-text rendering of declarations: completion entries, one-line
//! signatures and the multi-line symbol info block.
//!
//! Nothing here emits markup; see [`popup`](super::popup) for that.

use std::sync::Arc;

use crate::base::Location;
use crate::core::text_utils::is_identifier_character;
use crate::hir::{Declaration, DeclarationKind, DeclarationRef, TypeInfo};

/// A completion entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    /// Shown in the completion list: signature, tab, origin module.
    pub display: String,
    /// Inserted when the entry is accepted.
    pub insert_text: Arc<str>,
}

impl Suggestion {
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.display, &self.insert_text)
    }
}

/// Wrap operator names in parentheses: `+` becomes `(+)`.
pub fn wrap_operator(name: &str) -> String {
    if name.starts_with(is_identifier_character) {
        name.to_string()
    } else {
        format!("({name})")
    }
}

/// `C =>` for a single constraint, `(C1, C2) =>` for several.
pub(crate) fn context_text(context: &[Arc<str>]) -> Option<String> {
    match context {
        [] => None,
        [single] => Some(format!("{single} =>")),
        many => Some(format!("({}) =>", many.join(", "))),
    }
}

/// Completion entry for a declaration.
pub fn suggest(decl: &Declaration) -> Suggestion {
    let from = decl.imported_from_name();
    let display = match &decl.kind {
        DeclarationKind::Function { signature } => format!(
            "{} :: {}\t{}",
            wrap_operator(&decl.name),
            signature.as_deref().unwrap_or("?"),
            from
        ),
        DeclarationKind::Type { info, .. } if !info.args.is_empty() => {
            format!("{} {}\t{}", decl.name, info.args.join(" "), from)
        }
        _ => format!("{}\t{}", decl.name, from),
    };
    Suggestion {
        display,
        insert_text: decl.name.clone(),
    }
}

/// One-line signature. `short` drops the type of functions and the
/// context and definition of types.
pub fn brief(decl: &Declaration, short: bool) -> String {
    match &decl.kind {
        DeclarationKind::Other => decl.name.to_string(),
        DeclarationKind::Function { signature } => {
            if short {
                wrap_operator(&decl.name)
            } else {
                format!(
                    "{} :: {}",
                    wrap_operator(&decl.name),
                    signature.as_deref().unwrap_or("?")
                )
            }
        }
        DeclarationKind::Type { info, .. } => type_brief(decl, info, short),
    }
}

fn type_brief(decl: &Declaration, info: &TypeInfo, short: bool) -> String {
    let what = decl.what().display();
    if short {
        let mut parts = vec![what.to_string(), decl.name.to_string()];
        parts.extend(info.args.iter().map(|a| a.to_string()));
        return parts.join(" ");
    }
    if let Some(definition) = &info.definition {
        return definition.to_string();
    }

    let mut parts = vec![what.to_string()];
    if let Some(context) = context_text(&info.context) {
        parts.push(context);
    }
    parts.push(decl.name.to_string());
    if !info.args.is_empty() {
        parts.push(info.args.join(" "));
    }
    parts.join(" ")
}

/// Symbol info block: signature, origin, docs, provenance and location.
pub fn detailed(decl: DeclarationRef<'_>) -> String {
    let mut parts = vec![brief(&decl, false)];

    let imported = decl.imported_names();
    if !imported.is_empty() {
        parts.push(String::new());
        parts.push(format!("Imported from {}", imported.join(", ")));
    }

    if let Some(docs) = &decl.docs {
        parts.push(String::new());
        parts.push(docs.to_string());
    }

    parts.push(String::new());

    let defined = decl.defined_module();
    match defined.and_then(|m| m.location.as_ref()) {
        Some(Location::Source(loc)) => {
            if let Some(project) = &loc.project {
                parts.push(format!("Project: {project}"));
            }
        }
        Some(Location::Installed(loc)) => {
            parts.push(format!("Installed in: {}", loc.db));
            parts.push(format!("Package: {}", loc.package.package_id()));
        }
        _ => {}
    }

    match decl.source_location() {
        Some(location) => parts.push(format!("Defined at: {location}")),
        None => {
            if let Some(module) = defined {
                parts.push(format!("Defined in: {}", module.name));
            }
        }
    }

    parts.join("\n")
}
