//! Resolving names as seen from a module.

use rstest::rstest;

use crate::helpers::fixtures::*;

#[rstest]
#[case("M.insert", true)]
#[case("Data.Map.insert", true)]
#[case("insert", true)]
#[case("<+>", true)]
#[case("M.lookup", false)]
#[case("X.insert", false)]
fn test_resolve_from_main(#[case] name: &str, #[case] found: bool) {
    let ws = workspace();
    assert_eq!(ws.db.resolve_name(ws.main, name).is_some(), found, "{name}");
}

#[test]
fn test_alias_resolves_to_defining_module() {
    let ws = workspace();
    let insert = ws.db.resolve_name(ws.main, "M.insert").unwrap();
    assert_eq!(insert.defined_module().map(|m| m.name.as_ref()), Some("Data.Map"));
    assert!(insert.by_cabal());
    assert_eq!(insert.qualified_name(), "Data.Map.insert");
}

#[test]
fn test_unalias() {
    let ws = workspace();
    let main = ws.db.module(ws.main).unwrap();
    assert_eq!(
        main.unalias("M").iter().map(|m| m.as_ref()).collect::<Vec<_>>(),
        vec!["Data.Map"]
    );
    assert!(main.unalias("Map").is_empty());
}
