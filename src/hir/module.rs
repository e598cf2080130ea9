//! Modules and their imports.

use std::sync::Arc;

use indexmap::IndexMap;

use super::DeclId;
use crate::base::{Location, Position};

/// An import statement of a module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    /// Name of the imported module.
    pub module: Arc<str>,
    pub is_qualified: bool,
    /// Alias from `import qualified M as Alias`.
    pub import_as: Option<Arc<str>>,
    /// Where the import statement is.
    pub position: Option<Position>,
    /// Location of the importing module, set when the module is stored.
    pub location: Option<Location>,
}

impl Import {
    pub fn new(module: impl Into<Arc<str>>) -> Self {
        Self {
            module: module.into(),
            is_qualified: false,
            import_as: None,
            position: None,
            location: None,
        }
    }

    pub fn qualified(mut self, alias: Option<&str>) -> Self {
        self.is_qualified = true;
        self.import_as = alias.map(Arc::from);
        self
    }

    pub fn with_alias(mut self, alias: impl Into<Arc<str>>) -> Self {
        self.import_as = Some(alias.into());
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

/// A named compilation unit.
///
/// Declarations live in the [`SymbolDb`](super::SymbolDb) arena; the module
/// maps their names to ids in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub name: Arc<str>,
    /// Exported names, `None` meaning everything is exported.
    pub exports: Option<Vec<Arc<str>>>,
    pub imports: Vec<Import>,
    pub location: Option<Location>,
    /// Unix time of the last successful inspection, 0 if never inspected.
    pub last_inspection_time: u64,
    pub(crate) declarations: IndexMap<Arc<str>, DeclId>,
}

impl Module {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            exports: None,
            imports: Vec::new(),
            location: None,
            last_inspection_time: 0,
            declarations: IndexMap::new(),
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self.attribute_imports();
        self
    }

    pub fn with_exports<I, S>(mut self, exports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        self.exports = Some(exports.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self.attribute_imports();
        self
    }

    pub fn inspected_at(mut self, time: u64) -> Self {
        self.last_inspection_time = time;
        self
    }

    /// Point every import back at this module's location.
    pub(crate) fn attribute_imports(&mut self) {
        for import in &mut self.imports {
            import.location = self.location.clone();
        }
    }

    pub fn declarations(&self) -> &IndexMap<Arc<str>, DeclId> {
        &self.declarations
    }

    pub fn declaration_id(&self, name: &str) -> Option<DeclId> {
        self.declarations.get(name).copied()
    }

    pub fn is_inspected(&self) -> bool {
        self.last_inspection_time != 0
    }

    /// Modules imported under the given alias.
    pub fn unalias(&self, alias: &str) -> Vec<Arc<str>> {
        self.imports
            .iter()
            .filter(|i| i.import_as.as_deref() == Some(alias))
            .map(|i| i.module.clone())
            .collect()
    }

    /// Cache key: installed modules are keyed by package and module name,
    /// everything else by its location id.
    pub fn location_id(&self) -> String {
        match &self.location {
            Some(loc @ Location::Installed(_)) => format!("{}:{}", loc.id(), self.name),
            Some(loc) => loc.id(),
            None => String::new(),
        }
    }

    /// The installed package identity (`<db>:<package-id>`), if any.
    pub fn cabal_id(&self) -> Option<String> {
        match &self.location {
            Some(Location::Installed(loc)) => Some(loc.id()),
            _ => None,
        }
    }

    pub fn by_source(&self) -> bool {
        self.location.as_ref().is_some_and(Location::is_source)
    }

    pub fn by_cabal(&self) -> bool {
        self.location.as_ref().is_some_and(Location::is_installed)
    }

    pub fn by_hayoo(&self) -> bool {
        self.location.as_ref().is_some_and(Location::is_other)
    }
}
