/// Options for the markup renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Base of the package documentation site; module pages live under
    /// `<base>/<package-id>/docs/<Module-Name>.html`.
    pub docs_base_url: String,
    /// Number of non-breaking spaces before popup comment lines.
    pub comment_indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            docs_base_url: "http://hackage.haskell.org/package".to_string(),
            comment_indent: 4,
        }
    }
}

impl RenderOptions {
    /// Indentation string for popup comment lines
    pub fn indent(&self) -> String {
        "&nbsp;".repeat(self.comment_indent)
    }

    /// Documentation page of a module in an installed package.
    pub fn module_docs_url(&self, package_id: &str, module: &str) -> String {
        format!(
            "{}/{}/docs/{}.html",
            self.docs_base_url.trim_end_matches('/'),
            package_id,
            module.replace('.', "-")
        )
    }
}
