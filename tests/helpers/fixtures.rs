//! Symbol graphs shared by the integration tests.

use std::sync::Arc;

use hsym::base::{Location, PackageDb, Position, parse_package};
use hsym::hir::{Declaration, Import, Module, ModuleId, SymbolDb, TypeInfo, TypeKind};

pub fn source_module(name: &str, file: &str, project: Option<&str>) -> Module {
    Module::new(name).with_location(Location::source(file, project))
}

pub fn installed_module(name: &str, package_id: &str, db: PackageDb) -> Module {
    let package = parse_package(Some(package_id)).expect("fixture package id parses");
    Module::new(name).with_location(Location::installed(package, db))
}

pub fn type_info(context: &[&str], args: &[&str]) -> TypeInfo {
    TypeInfo {
        context: context.iter().map(|c| Arc::from(*c)).collect(),
        args: args.iter().map(|a| Arc::from(*a)).collect(),
        definition: None,
    }
}

/// A project module `Main` importing `Data.Map` qualified as `M`.
pub struct Workspace {
    pub db: SymbolDb,
    pub main: ModuleId,
    pub data_map: ModuleId,
}

pub fn workspace() -> Workspace {
    let mut db = SymbolDb::new();
    let data_map = db
        .merge_module(
            installed_module("Data.Map", "containers-0.5.7.1", PackageDb::Global),
            [
                Declaration::function("insert", Some("Ord k => k -> a -> Map k a -> Map k a"))
                    .with_docs("Insert a new key and value in the map."),
                Declaration::type_like("Map", TypeKind::Data, type_info(&[], &["k", "a"])),
            ],
        )
        .expect("fresh module accepts declarations");

    let map_import = Import::new("Data.Map")
        .qualified(Some("M"))
        .at(Position::new(3, 1));
    let main = db
        .merge_module(
            source_module("Main", "src/Main.hs", Some("demo")).with_imports([map_import.clone()]),
            [
                Declaration::function("<+>", Some("Vec -> Vec -> Vec"))
                    .with_docs("Add two vectors.\n  Componentwise.")
                    .with_position(Position::new(12, 1)),
                Declaration::function("insert", Some("Ord k => k -> a -> Map k a -> Map k a"))
                    .imported_via(map_import)
                    .defined_in(data_map),
            ],
        )
        .expect("fresh module accepts declarations");

    Workspace { db, main, data_map }
}
