//! Symbol database: arena of modules and declarations.
//!
//! Modules and declarations reference each other through [`ModuleId`] and
//! [`DeclId`] rather than pointers. A declaration records the id of the
//! module it is visible in; the module maps declaration names to ids.
//!
//! Each inspection pass produces fresh [`Module`] and [`Declaration`] values
//! which are folded in with [`SymbolDb::merge_module`]: a module that is the
//! same as a known one (see [`same_module`]) replaces it in place and keeps
//! its id.
//!
//! The database itself is not synchronised. Callers that merge from a
//! background job while other threads read must lock it, for instance by
//! sharing it as a [`SharedSymbolDb`].

use std::ops::Deref;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::error::{Result, SymbolError};
use super::identity::{same_declaration, same_module};
use super::{DeclId, Declaration, Module, ModuleId};
use crate::base::{Location, source_location};
use crate::core::text_utils::split_qualified;

/// A symbol database shared between the inspection worker and readers.
pub type SharedSymbolDb = Arc<RwLock<SymbolDb>>;

#[derive(Debug, Default)]
pub struct SymbolDb {
    modules: Vec<Option<Module>>,
    declarations: Vec<Option<Declaration>>,
    /// Module name -> ids of live modules with that name
    modules_by_name: FxHashMap<Arc<str>, Vec<ModuleId>>,
    /// Declarations not owned by any module
    detached: Vec<DeclId>,
    /// Emptied declaration slots, reused before the arena grows
    free: Vec<DeclId>,
}

impl SymbolDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> SharedSymbolDb {
        Arc::new(RwLock::new(self))
    }

    // ------------------------------------------------------------------
    // Modules
    // ------------------------------------------------------------------

    /// Store a module as a new entry, without looking for an existing one.
    ///
    /// Use [`merge_module`](Self::merge_module) for inspection results.
    pub fn add_module(&mut self, mut module: Module) -> ModuleId {
        let id = ModuleId::new(self.modules.len());
        module.attribute_imports();
        module.declarations.clear();
        self.modules_by_name
            .entry(module.name.clone())
            .or_default()
            .push(id);
        self.modules.push(Some(module));
        id
    }

    /// Fold a freshly inspected module and its declarations into the db.
    ///
    /// If a known module is the same module, its previous declarations are
    /// dropped and the new data takes its place under the same id. A
    /// declaration that keeps its name keeps its [`DeclId`]. Ownership is
    /// checked up front; on error the db is unchanged.
    pub fn merge_module(
        &mut self,
        module: Module,
        declarations: impl IntoIterator<Item = Declaration>,
    ) -> Result<ModuleId> {
        let declarations: Vec<Declaration> = declarations.into_iter().collect();
        let existing = self.find_module(&module);
        let target = existing.unwrap_or(ModuleId::new(self.modules.len()));
        for declaration in &declarations {
            match declaration.module {
                Some(owner) if owner != target => {
                    return Err(SymbolError::OwnershipViolation {
                        name: declaration.name.clone(),
                        owner,
                        target,
                    });
                }
                _ => {}
            }
        }

        match existing {
            Some(id) => {
                tracing::debug!(
                    module = %module.name,
                    id = %id,
                    "replacing previously inspected module"
                );
                self.replace_module(id, module, declarations)?;
                Ok(id)
            }
            None => {
                tracing::debug!(module = %module.name, "adding new module");
                let id = self.add_module(module);
                for declaration in declarations {
                    self.add_declaration(id, declaration)?;
                }
                Ok(id)
            }
        }
    }

    fn replace_module(
        &mut self,
        id: ModuleId,
        mut module: Module,
        declarations: Vec<Declaration>,
    ) -> Result<()> {
        let mut previous = self.modules[id.index()]
            .take()
            .map(|old| old.declarations)
            .unwrap_or_default();
        module.attribute_imports();
        module.declarations.clear();
        for declaration in &declarations {
            if let Some(decl) = previous.shift_remove(declaration.name.as_ref()) {
                module.declarations.insert(declaration.name.clone(), decl);
            }
        }
        self.modules[id.index()] = Some(module);
        for decl in previous.into_values() {
            self.release_declaration(decl);
        }

        for declaration in declarations {
            self.add_declaration(id, declaration)?;
        }
        Ok(())
    }

    /// Remove a module and all declarations it owns.
    pub fn remove_module(&mut self, id: ModuleId) -> Option<Module> {
        let module = self.modules.get_mut(id.index())?.take()?;
        for decl in module.declarations.values() {
            self.release_declaration(*decl);
        }
        if let Some(ids) = self.modules_by_name.get_mut(&module.name) {
            ids.retain(|m| *m != id);
        }
        Some(module)
    }

    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.get(id.index())?.as_ref()
    }

    pub fn modules(&self) -> impl Iterator<Item = (ModuleId, &Module)> {
        self.modules
            .iter()
            .enumerate()
            .filter_map(|(i, m)| m.as_ref().map(|m| (ModuleId::new(i), m)))
    }

    pub fn modules_named<'a>(&'a self, name: &str) -> impl Iterator<Item = (ModuleId, &'a Module)> {
        self.modules_by_name
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|id| self.module(*id).map(|m| (*id, m)))
    }

    /// A known module which is the same module as `module`.
    pub fn find_module(&self, module: &Module) -> Option<ModuleId> {
        self.modules_named(&module.name)
            .find(|(_, known)| same_module(known, module))
            .map(|(id, _)| id)
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    /// Add a declaration to a module, replacing one of the same name.
    ///
    /// The declaration takes the module's location. Adding a declaration
    /// that is already owned by another module is an error and leaves the
    /// module untouched.
    pub fn add_declaration(
        &mut self,
        module_id: ModuleId,
        mut declaration: Declaration,
    ) -> Result<DeclId> {
        let module = self
            .modules
            .get(module_id.index())
            .and_then(Option::as_ref)
            .ok_or(SymbolError::UnknownModule(module_id))?;

        match declaration.module {
            Some(owner) if owner != module_id => {
                return Err(SymbolError::OwnershipViolation {
                    name: declaration.name.clone(),
                    owner,
                    target: module_id,
                });
            }
            _ => {}
        }
        declaration.module = Some(module_id);
        declaration.location = module.location.clone();

        let existing = module.declarations.get(&declaration.name).copied();
        let id = match existing {
            Some(existing) => {
                self.declarations[existing.index()] = Some(declaration);
                existing
            }
            None => {
                let name = declaration.name.clone();
                let id = self.alloc_declaration(declaration);
                if let Some(module) = self.modules[module_id.index()].as_mut() {
                    module.declarations.insert(name, id);
                }
                id
            }
        };
        Ok(id)
    }

    /// Merge a declaration by identity: owned declarations go to their
    /// module, detached ones replace a detached declaration of the same name.
    pub fn merge_declaration(&mut self, declaration: Declaration) -> Result<DeclId> {
        if let Some(module) = declaration.module {
            return self.add_declaration(module, declaration);
        }

        let existing = self.detached.iter().copied().find(|id| {
            self.declaration(*id)
                .is_some_and(|known| same_declaration(self, known, &declaration))
        });
        match existing {
            Some(id) => {
                self.declarations[id.index()] = Some(declaration);
                Ok(id)
            }
            None => {
                let id = self.alloc_declaration(declaration);
                self.detached.push(id);
                Ok(id)
            }
        }
    }

    fn alloc_declaration(&mut self, declaration: Declaration) -> DeclId {
        match self.free.pop() {
            Some(id) => {
                self.declarations[id.index()] = Some(declaration);
                id
            }
            None => {
                let id = DeclId::new(self.declarations.len());
                self.declarations.push(Some(declaration));
                id
            }
        }
    }

    fn release_declaration(&mut self, id: DeclId) {
        if self.declarations[id.index()].take().is_some() {
            self.free.push(id);
        }
    }

    pub fn declaration(&self, id: DeclId) -> Option<&Declaration> {
        self.declarations.get(id.index())?.as_ref()
    }

    pub fn declaration_ref(&self, id: DeclId) -> Option<DeclarationRef<'_>> {
        self.declaration(id).map(|decl| DeclarationRef::new(self, decl))
    }

    /// Declaration `name` visible in `module`.
    pub fn lookup(&self, module: ModuleId, name: &str) -> Option<DeclarationRef<'_>> {
        let id = self.module(module)?.declaration_id(name)?;
        self.declaration_ref(id)
    }

    /// Resolve a possibly qualified name (`M.insert`) as seen from `module`.
    ///
    /// The qualifier may be an import alias or a module name. Names in
    /// scope win; otherwise the modules the qualifier stands for are
    /// searched directly.
    pub fn resolve_name(&self, module: ModuleId, name: &str) -> Option<DeclarationRef<'_>> {
        let scope = self.module(module)?;
        let (qualifier, name) = match split_qualified(name) {
            (Some(qualifier), name) => (qualifier, name),
            (None, name) => return self.lookup(module, name),
        };

        let in_scope = scope
            .declarations
            .values()
            .filter_map(|id| self.declaration_ref(*id))
            .find(|decl| {
                decl.name.as_ref() == name
                    && decl.imported.iter().any(|import| {
                        import.import_as.as_deref() == Some(qualifier)
                            || import.module.as_ref() == qualifier
                    })
            });
        if in_scope.is_some() {
            return in_scope;
        }

        let mut targets = scope.unalias(qualifier);
        targets.push(qualifier.into());
        targets.iter().find_map(|target| {
            self.modules_named(target)
                .find_map(|(id, _)| self.lookup(id, name))
        })
    }

    /// A known declaration which is the same declaration as `declaration`.
    pub fn find_declaration(&self, declaration: &Declaration) -> Option<DeclId> {
        self.declarations
            .iter()
            .enumerate()
            .filter_map(|(index, decl)| Some((DeclId::new(index), decl.as_ref()?)))
            .find(|(_, known)| same_declaration(self, known, declaration))
            .map(|(id, _)| id)
    }

    /// All declarations of a module, in declaration order.
    pub fn module_declarations(&self, module: ModuleId) -> Vec<DeclarationRef<'_>> {
        self.module(module)
            .map(|m| {
                m.declarations
                    .values()
                    .filter_map(|id| self.declaration_ref(*id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every live declaration with the given name.
    pub fn declarations_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = DeclarationRef<'a>> {
        self.declarations
            .iter()
            .flatten()
            .filter(move |d| d.name.as_ref() == name)
            .map(|d| DeclarationRef::new(self, d))
    }

    pub fn module_count(&self) -> usize {
        self.modules.iter().flatten().count()
    }

    pub fn declaration_count(&self) -> usize {
        self.declarations.iter().flatten().count()
    }
}

// ============================================================================
// DECLARATION VIEW
// ============================================================================

/// A declaration together with the db it lives in, for navigation.
///
/// Also wraps declarations that are not stored in the db, such as
/// qualified copies.
#[derive(Clone, Copy, Debug)]
pub struct DeclarationRef<'db> {
    db: &'db SymbolDb,
    decl: &'db Declaration,
}

impl<'db> DeclarationRef<'db> {
    pub fn new(db: &'db SymbolDb, decl: &'db Declaration) -> Self {
        Self { db, decl }
    }

    pub fn db(&self) -> &'db SymbolDb {
        self.db
    }

    pub fn declaration(&self) -> &'db Declaration {
        self.decl
    }

    pub fn module(&self) -> Option<&'db Module> {
        self.db.module(self.decl.module?)
    }

    pub fn defined_module(&self) -> Option<&'db Module> {
        self.db.module(self.decl.defined_module_id()?)
    }

    fn defined_location(&self) -> Option<&'db Location> {
        self.defined_module()?.location.as_ref()
    }

    pub fn by_source(&self) -> bool {
        self.defined_location().is_some_and(Location::is_source)
    }

    pub fn by_cabal(&self) -> bool {
        self.defined_location().is_some_and(Location::is_installed)
    }

    pub fn by_hayoo(&self) -> bool {
        self.defined_location().is_some_and(Location::is_other)
    }

    pub fn has_source_location(&self) -> bool {
        self.by_source() && self.decl.position.is_some()
    }

    /// `file:line:column` of the definition, if defined in a source file.
    pub fn source_location(&self) -> Option<String> {
        if !self.has_source_location() {
            return None;
        }
        let location = self.defined_location()?;
        Some(source_location(location, self.decl.position.as_ref()))
    }

    /// Module the name is referred to through: the first import if
    /// imported, otherwise the owning module.
    pub fn module_name(&self) -> Option<&'db str> {
        match self.decl.imported.first() {
            Some(import) => Some(&import.module),
            None => self.module().map(|m| m.name.as_ref()),
        }
    }

    pub fn qualified_name(&self) -> String {
        match self.module_name() {
            Some(module) => format!("{}.{}", module, self.decl.name),
            None => self.decl.name.to_string(),
        }
    }

    /// A detached copy named by its qualified name, for qualified completion.
    pub fn make_qualified(&self) -> Declaration {
        let mut decl = self.decl.clone();
        decl.name = self.qualified_name().into();
        decl
    }
}

impl Deref for DeclarationRef<'_> {
    type Target = Declaration;

    fn deref(&self) -> &Self::Target {
        self.decl
    }
}
