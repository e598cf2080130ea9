//! Identity rules used to merge facts from separate inspection passes.

use std::hash::Hash;

use indexmap::IndexMap;

use super::{Declaration, Module, SymbolDb};

/// Whether `l` and `r` describe the same module.
///
/// Names must match, and then either both come from the same installed
/// package, both come from the same source file, or neither has any
/// location at all.
pub fn same_module(l: &Module, r: &Module) -> bool {
    if l.name != r.name {
        return false;
    }
    let same_cabal = match (l.cabal_id(), r.cabal_id()) {
        (Some(lc), Some(rc)) => lc == rc,
        _ => false,
    };
    let same_filename = match (
        l.location.as_ref().and_then(|loc| loc.filename()),
        r.location.as_ref().and_then(|loc| loc.filename()),
    ) {
        (Some(lf), Some(rf)) => lf == rf,
        _ => false,
    };
    let nowhere = l.location.is_none() && r.location.is_none();
    same_cabal || same_filename || nowhere
}

/// Whether `l` and `r` describe the same declaration: same name, and either
/// owned by the same module or both detached.
pub fn same_declaration(db: &SymbolDb, l: &Declaration, r: &Declaration) -> bool {
    if l.name != r.name {
        return false;
    }
    match (l.module(), r.module()) {
        (Some(lm), Some(rm)) => match (db.module(lm), db.module(rm)) {
            (Some(lm), Some(rm)) => same_module(lm, rm),
            _ => false,
        },
        (None, None) => true,
        _ => false,
    }
}

/// Union-merge `overrides` into `map` in place.
///
/// Keys missing from `map` are seeded with a clone of `default` before
/// `combine` folds the new value in. Untouched keys are kept.
pub fn update_with<'m, K, V, U, I, F>(
    map: &'m mut IndexMap<K, V>,
    overrides: I,
    default: &V,
    mut combine: F,
) -> &'m mut IndexMap<K, V>
where
    K: Hash + Eq,
    V: Clone,
    I: IntoIterator<Item = (K, U)>,
    F: FnMut(&mut V, U),
{
    for (key, value) in overrides {
        let slot = map.entry(key).or_insert_with(|| default.clone());
        combine(slot, value);
    }
    map
}

/// Whether the module is a source module of the given project.
pub fn is_within_project(module: &Module, project: &str) -> bool {
    module
        .location
        .as_ref()
        .and_then(|loc| loc.project())
        .is_some_and(|p| p == project)
}

/// Whether the module comes from the given installed package identity
/// (`<db>:<package-id>`).
pub fn is_within_cabal(module: &Module, cabal: Option<&str>) -> bool {
    match (cabal, module.cabal_id()) {
        (Some(cabal), Some(id)) => cabal == id,
        _ => false,
    }
}

/// Whether the module was read from source.
pub fn is_by_sources(module: &Module) -> bool {
    module.by_source()
}
