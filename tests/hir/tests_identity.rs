//! Identity rules used as merge keys.

use indexmap::IndexMap;
use rstest::rstest;

use crate::helpers::fixtures::*;
use hsym::base::{Location, PackageDb};
use hsym::hir::{
    Module, is_by_sources, is_within_cabal, is_within_project, same_module, update_with,
};

fn sandbox() -> PackageDb {
    PackageDb::Path("/work/.cabal-sandbox/db".into())
}

// =============================================================================
// SAME MODULE
// =============================================================================

#[rstest]
#[case::same_file(
    source_module("Main", "src/Main.hs", Some("demo")),
    source_module("Main", "src/Main.hs", None),
    true
)]
#[case::different_file(
    source_module("Main", "a/Main.hs", None),
    source_module("Main", "b/Main.hs", None),
    false
)]
#[case::different_name(
    source_module("Main", "src/Main.hs", None),
    source_module("Lib", "src/Main.hs", None),
    false
)]
#[case::same_package(
    installed_module("Data.Map", "containers-0.5.7.1", PackageDb::Global),
    installed_module("Data.Map", "containers-0.5.7.1", PackageDb::Global),
    true
)]
#[case::other_version(
    installed_module("Data.Map", "containers-0.5.7.1", PackageDb::Global),
    installed_module("Data.Map", "containers-0.5.6.2", PackageDb::Global),
    false
)]
#[case::other_db(
    installed_module("Data.Map", "containers-0.5.7.1", PackageDb::Global),
    installed_module("Data.Map", "containers-0.5.7.1", sandbox()),
    false
)]
#[case::both_unlocated(Module::new("Main"), Module::new("Main"), true)]
#[case::one_unlocated(
    Module::new("Main"),
    source_module("Main", "src/Main.hs", None),
    false
)]
#[case::source_and_installed(
    source_module("Data.Map", "Data/Map.hs", None),
    installed_module("Data.Map", "containers-0.5.7.1", PackageDb::Global),
    false
)]
#[case::external_source(
    Module::new("Data.Map").with_location(Location::other("hayoo")),
    Module::new("Data.Map").with_location(Location::other("hayoo")),
    false
)]
fn test_same_module(#[case] l: Module, #[case] r: Module, #[case] expected: bool) {
    assert_eq!(same_module(&l, &r), expected);
    assert_eq!(same_module(&r, &l), expected, "same_module is symmetric");
}

#[test]
fn test_same_module_is_reflexive_for_located_modules() {
    let modules = [
        source_module("Main", "src/Main.hs", Some("demo")),
        installed_module("Data.Map", "containers-0.5.7.1", PackageDb::User),
        installed_module("Data.Map", "containers-0.5.7.1", sandbox()),
        Module::new("Unknown"),
    ];
    for module in &modules {
        assert!(same_module(module, module), "{} not same as itself", module.name);
    }
}

#[test]
fn test_modules_from_different_packages_are_never_the_same() {
    let packages = ["base-4.9.0.0", "base-4.8.2.0", "containers-0.5.7.1"];
    for (i, l) in packages.iter().enumerate() {
        for r in &packages[i + 1..] {
            let lm = installed_module("Data.List", l, PackageDb::Global);
            let rm = installed_module("Data.List", r, PackageDb::Global);
            assert!(!same_module(&lm, &rm), "{l} vs {r}");
        }
    }
}

// =============================================================================
// PROVENANCE PREDICATES
// =============================================================================

#[test]
fn test_within_project() {
    let module = source_module("Main", "src/Main.hs", Some("demo"));
    assert!(is_within_project(&module, "demo"));
    assert!(!is_within_project(&module, "other"));
    assert!(!is_within_project(&Module::new("Main"), "demo"));
    assert!(is_by_sources(&module));
}

#[test]
fn test_within_cabal() {
    let module = installed_module("Data.Map", "containers-0.5.7.1", PackageDb::Global);
    assert!(is_within_cabal(&module, Some("global-db:containers-0.5.7.1")));
    assert!(!is_within_cabal(&module, Some("user-db:containers-0.5.7.1")));
    assert!(!is_within_cabal(&module, None));
    assert!(!is_by_sources(&module));
}

// =============================================================================
// UPDATE WITH
// =============================================================================

#[test]
fn test_update_with_seeds_missing_keys_and_keeps_others() {
    let mut tables: IndexMap<&str, Vec<&str>> = IndexMap::new();
    tables.insert("demo", vec!["Main"]);
    tables.insert("untouched", vec!["Lib"]);

    update_with(
        &mut tables,
        [("demo", "Utils"), ("fresh", "Fresh.Module")],
        &Vec::new(),
        |existing, new| existing.push(new),
    );

    assert_eq!(tables["demo"], vec!["Main", "Utils"]);
    assert_eq!(tables["untouched"], vec!["Lib"]);
    assert_eq!(tables["fresh"], vec!["Fresh.Module"]);
    assert_eq!(
        tables.keys().copied().collect::<Vec<_>>(),
        vec!["demo", "untouched", "fresh"]
    );
}
