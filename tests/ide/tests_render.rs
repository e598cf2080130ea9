//! Plain-text rendering of declarations from a merged symbol graph.

use rstest::rstest;

use crate::helpers::fixtures::*;
use hsym::hir::{Declaration, TypeKind};
use hsym::ide::{brief, detailed, suggest};

// =============================================================================
// OPERATORS
// =============================================================================

#[test]
fn test_operator_forms() {
    let ws = workspace();
    let op = ws.db.lookup(ws.main, "<+>").unwrap();

    assert_eq!(brief(&op, true), "(<+>)");
    assert_eq!(brief(&op, false), "(<+>) :: Vec -> Vec -> Vec");
    assert_eq!(
        suggest(&op).as_pair(),
        ("(<+>) :: Vec -> Vec -> Vec\t", "<+>")
    );
}

#[test]
fn test_detailed_source_declaration() {
    let ws = workspace();
    let op = ws.db.lookup(ws.main, "<+>").unwrap();
    assert_eq!(
        detailed(op),
        "(<+>) :: Vec -> Vec -> Vec\n\
         \n\
         Add two vectors.\n  Componentwise.\n\
         \n\
         Project: demo\n\
         Defined at: src/Main.hs:12:1"
    );
}

#[test]
fn test_detailed_imported_declaration() {
    let ws = workspace();
    let insert = ws.db.lookup(ws.main, "insert").unwrap();
    assert_eq!(
        detailed(insert),
        "insert :: Ord k => k -> a -> Map k a -> Map k a\n\
         \n\
         Imported from Data.Map\n\
         \n\
         Installed in: global-db\n\
         Package: containers-0.5.7.1\n\
         Defined in: Data.Map"
    );
    assert_eq!(
        suggest(&insert).display,
        "insert :: Ord k => k -> a -> Map k a -> Map k a\tData.Map"
    );
}

// =============================================================================
// TYPES
// =============================================================================

#[rstest]
#[case(TypeKind::Type, "type")]
#[case(TypeKind::Newtype, "newtype")]
#[case(TypeKind::Data, "data")]
#[case(TypeKind::Class, "class")]
fn test_type_keyword(#[case] kind: TypeKind, #[case] keyword: &str) {
    let decl = Declaration::type_like("T", kind, type_info(&["Show a"], &["a"]));
    assert_eq!(brief(&decl, true), format!("{keyword} T a"));
    assert_eq!(brief(&decl, false), format!("{keyword} Show a => T a"));
}

#[test]
fn test_type_without_args_suggests_bare_name() {
    let ws = workspace();
    let map = ws.db.lookup(ws.data_map, "Map").unwrap();
    assert_eq!(suggest(&map).display, "Map k a\t");

    let unit = Declaration::type_like("Unit", TypeKind::Data, type_info(&[], &[]));
    assert_eq!(suggest(&unit).display, "Unit\t");
}

#[test]
fn test_detailed_without_provenance() {
    let decl = Declaration::function("orphan", Some("Int"));
    let mut db = hsym::hir::SymbolDb::new();
    let id = db.merge_declaration(decl).unwrap();
    assert_eq!(detailed(db.declaration_ref(id).unwrap()), "orphan :: Int\n");
}
