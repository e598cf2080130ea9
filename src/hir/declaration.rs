//! Declarations: functions, type synonyms, newtypes, data types and classes.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::{Import, ModuleId};
use crate::base::{Location, Position};

/// Kind tag of a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Module,
    Function,
    Type,
    Newtype,
    Data,
    Class,
    Declaration,
}

impl SymbolKind {
    /// The keyword used when displaying this kind.
    pub fn display(&self) -> &'static str {
        match self {
            SymbolKind::Module => "module",
            SymbolKind::Function => "function",
            SymbolKind::Type => "type",
            SymbolKind::Newtype => "newtype",
            SymbolKind::Data => "data",
            SymbolKind::Class => "class",
            SymbolKind::Declaration => "declaration",
        }
    }
}

/// The type-like declaration kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Type,
    Newtype,
    Data,
    Class,
}

impl From<TypeKind> for SymbolKind {
    fn from(kind: TypeKind) -> Self {
        match kind {
            TypeKind::Type => SymbolKind::Type,
            TypeKind::Newtype => SymbolKind::Newtype,
            TypeKind::Data => SymbolKind::Data,
            TypeKind::Class => SymbolKind::Class,
        }
    }
}

/// Head of a type-like declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// Class constraints, e.g. `Ord k`.
    pub context: Vec<Arc<str>>,
    /// Type parameters.
    pub args: Vec<Arc<str>>,
    /// Full textual definition, shown verbatim when present.
    pub definition: Option<Arc<str>>,
}

/// What a declaration is, with the fields specific to that kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// A declaration of unknown kind.
    Other,
    /// A function or value; the signature is `None` when unknown.
    Function { signature: Option<Arc<str>> },
    /// A type synonym, newtype, data type or class.
    Type { kind: TypeKind, info: TypeInfo },
}

/// A named entity visible within a module.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub name: Arc<str>,
    pub kind: DeclarationKind,
    pub docs: Option<Arc<str>>,
    /// Imports through which the name became visible; empty if local.
    pub imported: Vec<Import>,
    /// Module that actually defines the name, if not the owning one.
    pub defined: Option<ModuleId>,
    pub position: Option<Position>,
    pub(crate) module: Option<ModuleId>,
    pub(crate) location: Option<Location>,
}

impl Declaration {
    pub fn new(name: impl Into<Arc<str>>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            docs: None,
            imported: Vec::new(),
            defined: None,
            position: None,
            module: None,
            location: None,
        }
    }

    pub fn function(name: impl Into<Arc<str>>, signature: Option<&str>) -> Self {
        Self::new(
            name,
            DeclarationKind::Function {
                signature: signature.map(Arc::from),
            },
        )
    }

    pub fn type_like(name: impl Into<Arc<str>>, kind: TypeKind, info: TypeInfo) -> Self {
        Self::new(name, DeclarationKind::Type { kind, info })
    }

    pub fn with_docs(mut self, docs: impl Into<Arc<str>>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn imported_via(mut self, import: Import) -> Self {
        self.imported.push(import);
        self
    }

    pub fn defined_in(mut self, module: ModuleId) -> Self {
        self.defined = Some(module);
        self
    }

    pub fn what(&self) -> SymbolKind {
        match &self.kind {
            DeclarationKind::Other => SymbolKind::Declaration,
            DeclarationKind::Function { .. } => SymbolKind::Function,
            DeclarationKind::Type { kind, .. } => (*kind).into(),
        }
    }

    /// Owning (visible-in) module.
    pub fn module(&self) -> Option<ModuleId> {
        self.module
    }

    /// Location of the owning module, set when the declaration is stored.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Defining module if set, otherwise the owning one.
    pub fn defined_module_id(&self) -> Option<ModuleId> {
        self.defined.or(self.module)
    }

    /// Sorted, de-duplicated names of the modules this was imported from.
    pub fn imported_names(&self) -> Vec<Arc<str>> {
        self.imported
            .iter()
            .map(|i| i.module.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First of [`imported_names`](Self::imported_names), or empty.
    pub fn imported_from_name(&self) -> Arc<str> {
        self.imported_names()
            .into_iter()
            .next()
            .unwrap_or_else(|| Arc::from(""))
    }
}
