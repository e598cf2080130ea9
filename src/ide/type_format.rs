//! Highlighting of type expressions.
//!
//! Identifiers starting with an uppercase letter are types, lowercase ones
//! are type variables, and `->`, `=>`, `::` are operators. Everything in
//! between is passed through escaped.

use std::sync::LazyLock;

use regex::Regex;

use super::escape::escape_html;

static TYPE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z]\w*)|(->|=>|::)").expect("valid type token pattern"));

/// Highlight class of a token in a type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Type,
    TyVar,
    Operator,
}

impl TokenClass {
    /// CSS class used in popups.
    pub fn css_class(self) -> &'static str {
        match self {
            TokenClass::Type => "type",
            TokenClass::TyVar => "tyvar",
            TokenClass::Operator => "operator",
        }
    }
}

/// A piece of a type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeToken<'a> {
    /// Text between classified tokens.
    Plain(&'a str),
    Classified(TokenClass, &'a str),
}

/// Split a type expression into plain and classified tokens, left to right.
pub fn classify_type(expr: &str) -> Vec<TypeToken<'_>> {
    let mut tokens = Vec::new();
    let mut rest = 0;
    for caps in TYPE_TOKEN.captures_iter(expr) {
        let Some(m) = caps.get(0) else { continue };
        if m.start() > rest {
            tokens.push(TypeToken::Plain(&expr[rest..m.start()]));
        }
        let class = if caps.get(1).is_some() {
            if m.as_str().starts_with(|c: char| c.is_ascii_uppercase()) {
                TokenClass::Type
            } else {
                TokenClass::TyVar
            }
        } else {
            TokenClass::Operator
        };
        tokens.push(TypeToken::Classified(class, m.as_str()));
        rest = m.end();
    }
    if rest < expr.len() {
        tokens.push(TypeToken::Plain(&expr[rest..]));
    }
    tokens
}

/// Render a type expression as escaped markup with `<span class=…>` tokens.
pub fn format_type(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len() * 2);
    for token in classify_type(expr) {
        match token {
            TypeToken::Plain(text) => out.push_str(&escape_html(text)),
            TypeToken::Classified(class, text) => {
                out.push_str(&format!(
                    r#"<span class="{}">{}</span>"#,
                    class.css_class(),
                    escape_html(text)
                ));
            }
        }
    }
    out
}
