//! Package metadata records, as listed by package search.

use super::escape::{escape_attr, escape_html, escape_text};

/// Metadata of a package in the package index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CabalPackage {
    pub name: String,
    pub synopsis: Option<String>,
    pub default_version: Option<String>,
    pub installed_versions: Vec<String>,
    pub homepage: Option<String>,
    pub license: Option<String>,
}

impl CabalPackage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn brief(&self) -> String {
        self.name.clone()
    }

    fn info_lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = Vec::new();
        if let Some(version) = &self.default_version {
            lines.push(("Last version", version.clone()));
        }
        if !self.installed_versions.is_empty() {
            lines.push(("Installed versions", self.installed_versions.join(", ")));
        }
        if let Some(homepage) = &self.homepage {
            lines.push(("Homepage", homepage.clone()));
        }
        if let Some(license) = &self.license {
            lines.push(("License", license.clone()));
        }
        lines
    }

    pub fn detailed(&self) -> String {
        let mut info = vec![self.brief(), String::new()];
        if let Some(synopsis) = &self.synopsis {
            info.push(synopsis.clone());
            info.push(String::new());
        }
        info.extend(
            self.info_lines()
                .into_iter()
                .map(|(label, value)| format!("{label}: {value}")),
        );
        info.join("\n")
    }

    /// Markup form; the homepage becomes a link.
    pub fn popup(&self) -> String {
        let mut out = format!(
            r#"<p><span class="type">{}</span></p>"#,
            escape_html(&self.name)
        );
        if let Some(synopsis) = &self.synopsis {
            out.push_str(&format!(
                r#"<p><span class="docs">{}</span></p>"#,
                escape_text(synopsis)
            ));
        }
        let lines: Vec<String> = self
            .info_lines()
            .into_iter()
            .map(|(label, value)| {
                let value = if label == "Homepage" {
                    format!(
                        r#"<a href="{}">{}</a>"#,
                        escape_attr(&value),
                        escape_html(&value)
                    )
                } else {
                    escape_html(&value)
                };
                format!(r#"<span class="comment">{label}:</span> {value}"#)
            })
            .collect();
        if !lines.is_empty() {
            out.push_str(&format!("<p>{}</p>", lines.join("<br>")));
        }
        out
    }
}
