//! Inspection facts: what one inspection pass reports about a module.
//!
//! The inspection tool runs outside this crate; these are the in-memory
//! shapes its output is deposited into before becoming [`Module`] and
//! [`Declaration`] values. With the `serde` feature they deserialize from
//! the tool's JSON, where declarations are tagged by `what`.

use std::sync::Arc;

use super::error::Result;
use super::{
    Declaration, DeclarationKind, Import, Module, ModuleId, SymbolDb, TypeInfo, TypeKind,
};
use crate::base::{Location, Position};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleFacts {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exports: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub imports: Vec<ImportFacts>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub declarations: Vec<DeclarationFacts>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportFacts {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub qualified: bool,
    #[cfg_attr(feature = "serde", serde(default, rename = "as"))]
    pub alias: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclarationFacts {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub docs: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub imported: Vec<ImportFacts>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: DeclarationKindFacts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "what", rename_all = "lowercase"))]
pub enum DeclarationKindFacts {
    Function {
        #[cfg_attr(feature = "serde", serde(default, rename = "type"))]
        signature: Option<String>,
    },
    Type(TypeFacts),
    Newtype(TypeFacts),
    Data(TypeFacts),
    Class(TypeFacts),
    Declaration,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TypeFacts {
    pub context: Vec<String>,
    pub args: Vec<String>,
    pub definition: Option<String>,
}

impl From<ImportFacts> for Import {
    fn from(facts: ImportFacts) -> Self {
        Import {
            module: facts.name.into(),
            is_qualified: facts.qualified,
            import_as: facts.alias.map(Arc::from),
            position: facts.position,
            location: None,
        }
    }
}

impl From<TypeFacts> for TypeInfo {
    fn from(facts: TypeFacts) -> Self {
        TypeInfo {
            context: facts.context.into_iter().map(Arc::from).collect(),
            args: facts.args.into_iter().map(Arc::from).collect(),
            definition: facts.definition.map(Arc::from),
        }
    }
}

impl From<DeclarationKindFacts> for DeclarationKind {
    fn from(facts: DeclarationKindFacts) -> Self {
        let type_like = |kind, info: TypeFacts| DeclarationKind::Type {
            kind,
            info: info.into(),
        };
        match facts {
            DeclarationKindFacts::Function { signature } => DeclarationKind::Function {
                signature: signature.map(Arc::from),
            },
            DeclarationKindFacts::Type(info) => type_like(TypeKind::Type, info),
            DeclarationKindFacts::Newtype(info) => type_like(TypeKind::Newtype, info),
            DeclarationKindFacts::Data(info) => type_like(TypeKind::Data, info),
            DeclarationKindFacts::Class(info) => type_like(TypeKind::Class, info),
            DeclarationKindFacts::Declaration => DeclarationKind::Other,
        }
    }
}

impl From<DeclarationFacts> for Declaration {
    fn from(facts: DeclarationFacts) -> Self {
        let mut decl = Declaration::new(facts.name, facts.kind.into());
        decl.docs = facts.docs.map(Arc::from);
        decl.position = facts.position;
        decl.imported = facts.imported.into_iter().map(Import::from).collect();
        decl
    }
}

impl ModuleFacts {
    /// Split the facts into a module and its declarations.
    pub fn into_parts(
        self,
        location: Option<Location>,
        inspected_at: u64,
    ) -> (Module, Vec<Declaration>) {
        let mut module = Module::new(self.name)
            .with_imports(self.imports.into_iter().map(Import::from))
            .inspected_at(inspected_at);
        if let Some(exports) = self.exports {
            module = module.with_exports(exports);
        }
        if let Some(location) = location {
            module = module.with_location(location);
        }
        let declarations = self.declarations.into_iter().map(Declaration::from).collect();
        (module, declarations)
    }

    #[cfg(feature = "serde")]
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

impl SymbolDb {
    /// Build a module from inspection facts and merge it in.
    pub fn load_module(
        &mut self,
        facts: ModuleFacts,
        location: Option<Location>,
        inspected_at: u64,
    ) -> Result<ModuleId> {
        let name = facts.name.clone();
        let (module, declarations) = facts.into_parts(location, inspected_at);
        let id = self.merge_module(module, declarations)?;
        tracing::trace!(module = %name, id = %id, "loaded inspection facts");
        Ok(id)
    }
}
