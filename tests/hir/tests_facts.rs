//! Loading inspection facts.

use crate::helpers::fixtures::*;
use hsym::base::{Location, PackageDb, Position};
use hsym::hir::{
    DeclarationFacts, DeclarationKind, DeclarationKindFacts, ImportFacts, ModuleFacts, SymbolDb,
    SymbolKind, TypeFacts,
};

fn facts(names: &[&str]) -> ModuleFacts {
    ModuleFacts {
        name: "Data.Stack".to_string(),
        exports: None,
        imports: vec![ImportFacts {
            name: "Data.List".to_string(),
            ..ImportFacts::default()
        }],
        declarations: names
            .iter()
            .map(|name| DeclarationFacts {
                name: name.to_string(),
                docs: None,
                position: Some(Position::new(1, 1)),
                imported: Vec::new(),
                kind: DeclarationKindFacts::Function { signature: None },
            })
            .collect(),
    }
}

#[test]
fn test_load_module_twice_merges() {
    let mut db = SymbolDb::new();
    let location = Location::source("src/Data/Stack.hs", Some("stack"));
    let first = db.load_module(facts(&["push", "pop"]), Some(location.clone()), 1).unwrap();
    let second = db.load_module(facts(&["push"]), Some(location), 2).unwrap();

    assert_eq!(first, second);
    assert_eq!(db.module_declarations(first).len(), 1);
    assert!(db.module(first).unwrap().is_inspected());
}

#[test]
fn test_load_installed_module() {
    let mut db = SymbolDb::new();
    let mut facts = facts(&[]);
    facts.declarations.push(DeclarationFacts {
        name: "Stack".to_string(),
        docs: Some("A LIFO stack".to_string()),
        position: None,
        imported: Vec::new(),
        kind: DeclarationKindFacts::Newtype(TypeFacts {
            args: vec!["a".to_string()],
            ..TypeFacts::default()
        }),
    });
    let location = installed_module("Data.Stack", "stack-0.1", PackageDb::User).location;

    let id = db.load_module(facts, location, 7).unwrap();
    let stack = db.lookup(id, "Stack").unwrap();
    assert_eq!(stack.what(), SymbolKind::Newtype);
    assert!(matches!(&stack.kind, DeclarationKind::Type { info, .. } if info.args.len() == 1));
    assert!(stack.by_cabal());
    assert!(!stack.has_source_location());
    assert_eq!(db.module(id).unwrap().location_id(), "user-db:stack-0.1:Data.Stack");
}

#[cfg(feature = "serde")]
#[test]
fn test_facts_from_json() {
    let json = r#"{
        "name": "Data.Stack",
        "imports": [{"name": "Data.List", "qualified": true, "as": "L"}],
        "declarations": [
            {"name": "push", "what": "function", "type": "a -> Stack a -> Stack a",
             "position": {"line": 10, "column": 1}},
            {"name": "Stack", "what": "newtype", "args": ["a"]},
            {"name": "pattern", "what": "declaration"}
        ]
    }"#;
    let facts = ModuleFacts::from_json(json).unwrap();
    assert_eq!(facts.imports[0].alias.as_deref(), Some("L"));

    let mut db = SymbolDb::new();
    let id = db
        .load_module(facts, Some(Location::source("Stack.hs", None)), 1)
        .unwrap();
    let push = db.lookup(id, "push").unwrap();
    assert_eq!(push.source_location().as_deref(), Some("Stack.hs:10:1"));
    assert_eq!(db.lookup(id, "pattern").unwrap().what(), SymbolKind::Declaration);
    assert_eq!(db.module(id).unwrap().unalias("L").len(), 1);
}
