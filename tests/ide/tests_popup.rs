//! Markup popups: links, highlighting and escaping.

use rstest::rstest;

use crate::helpers::fixtures::*;
use hsym::base::Position;
use hsym::hir::{Declaration, SymbolDb, TypeKind};
use hsym::ide::{CabalPackage, RenderOptions, popup, popup_brief};

const ALLOWED_TAGS: &[&str] = &["<span ", "</span>", "<a ", "</a>", "<p>", "</p>", "<br>"];
const ALLOWED_ENTITIES: &[&str] = &["&amp;", "&lt;", "&gt;", "&nbsp;", "&quot;", "&#x27;"];

/// Every `<` opens a tag we emit and every `&` starts an entity.
fn assert_well_escaped(html: &str) {
    for (i, _) in html.match_indices('<') {
        assert!(
            ALLOWED_TAGS.iter().any(|tag| html[i..].starts_with(tag)),
            "raw '<' at {i} in: {html}"
        );
    }
    for (i, _) in html.match_indices('&') {
        assert!(
            ALLOWED_ENTITIES.iter().any(|e| html[i..].starts_with(e)),
            "raw '&' at {i} in: {html}"
        );
    }
}

#[rstest]
#[case("<&>", Some("Functor f => f a -> (a -> b) -> f b"), Some("Flipped <$>, see <b>docs</b> & more"))]
#[case(">>=", Some("m a -> (a -> m b) -> m b"), None)]
#[case("f", None, Some("  indented <code>\n\tand & tabbed"))]
#[case("cmp", Some("a -> a -> Ordering \"quoted\""), Some("it's 'fine'"))]
fn test_popup_escapes_everything(
    #[case] name: &str,
    #[case] signature: Option<&str>,
    #[case] docs: Option<&str>,
) {
    let mut db = SymbolDb::new();
    let m = db
        .merge_module(source_module("Ops", "src/Ops & <Co>.hs", Some("p<1>")), [])
        .unwrap();
    let mut decl = Declaration::function(name, signature).with_position(Position::new(1, 1));
    if let Some(docs) = docs {
        decl = decl.with_docs(docs);
    }
    let id = db.add_declaration(m, decl).unwrap();
    let decl = db.declaration_ref(id).unwrap();

    assert_well_escaped(&popup_brief(decl));
    assert_well_escaped(&popup(decl, &RenderOptions::default()));
}

#[test]
fn test_popup_of_imported_declaration() {
    let ws = workspace();
    let insert = ws.db.lookup(ws.main, "insert").unwrap();
    let html = popup(insert, &RenderOptions::default());

    assert_well_escaped(&html);
    assert!(html.contains(r#"<span class="comment">-- Imported from Data.Map</span>"#));
    assert!(html.contains(
        r#"<a href="http://hackage.haskell.org/package/containers-0.5.7.1/docs/Data-Map.html">Data.Map</a>"#
    ));
    assert!(html.contains("&nbsp;&nbsp;&nbsp;&nbsp;<span class=\"comment\">"));
}

#[test]
fn test_popup_links_source_definition() {
    let ws = workspace();
    let op = ws.db.lookup(ws.main, "<+>").unwrap();
    let html = popup(op, &RenderOptions::default());

    assert!(html.starts_with(
        r#"<p><a href="src/Main.hs:12:1"><span class="function">&lt;+&gt;</span></a>"#
    ));
    assert!(html.contains(r#"-- Defined in <a href="src/Main.hs">Main</a>"#));
    assert!(html.ends_with(
        r#"<p><span class="docs">Add two vectors.<br>&nbsp;&nbsp;Componentwise.</span></p>"#
    ));
}

#[test]
fn test_custom_docs_site_and_indent() {
    let ws = workspace();
    let options = RenderOptions {
        docs_base_url: "https://hackage.example.org/package/".to_string(),
        comment_indent: 1,
    };
    let html = popup(ws.db.lookup(ws.main, "insert").unwrap(), &options);
    assert!(html.contains(
        r#"href="https://hackage.example.org/package/containers-0.5.7.1/docs/Data-Map.html""#
    ));
    assert!(html.contains("<br>&nbsp;<span"));
}

#[test]
fn test_type_popup_brief() {
    let mut db = SymbolDb::new();
    let m = db
        .merge_module(source_module("Data.Set", "Data/Set.hs", None), [])
        .unwrap();
    let id = db
        .add_declaration(
            m,
            Declaration::type_like("Set", TypeKind::Data, type_info(&["Ord a", "Show a"], &["a"])),
        )
        .unwrap();

    let html = popup_brief(db.declaration_ref(id).unwrap());
    assert!(html.starts_with(r#"<span class="keyword">data</span> "#));
    assert!(html.contains(r#"(<span class="type">Ord</span> <span class="tyvar">a</span>, "#));
    // no position, so no link to the definition
    assert!(html.ends_with(r#"<span class="type">Set</span> <span class="tyvar">a</span>"#));
}

#[test]
fn test_package_popup_is_escaped() {
    let package = CabalPackage {
        name: "lens".to_string(),
        synopsis: Some("Lenses, Folds & Traversals <3".to_string()),
        default_version: Some("4.15".to_string()),
        installed_versions: vec!["4.14".to_string()],
        homepage: Some("http://github.com/ekmett/lens/".to_string()),
        license: Some("BSD3".to_string()),
    };
    assert_well_escaped(&package.popup());
    assert!(package.detailed().contains("Installed versions: 4.14"));
}
