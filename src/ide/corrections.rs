//! Corrections: mapping suggested fixes onto editor regions.
//!
//! A [`Corrector`] is an abstract (line, column) span plus replacement text.
//! Editors are reached through the narrow [`EditorView`] interface, which
//! translates coordinates to offsets and marks regions.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::base::{LineIndex, Position, TextRange, TextSize};

/// Region category used to mark corrections.
pub const CORRECTIONS_KEY: &str = "autofix";
/// Scope the marked regions are styled with.
pub const CORRECTIONS_SCOPE: &str = "entity.name.function";
/// Gutter icon for marked regions.
pub const CORRECTIONS_ICON: &str = "dot";

/// What an editor view must provide to have corrections marked in it.
pub trait EditorView {
    /// Path of the file shown, if the view is backed by one.
    fn file_name(&self) -> Option<&Path>;

    /// Offset of a 0-based (line, column) in the view.
    fn text_point(&self, line: i64, column: i64) -> TextSize;

    /// Replace the regions marked under `key`.
    fn add_regions(&mut self, key: &str, regions: Vec<TextRange>, scope: &str, icon: &str);
}

/// Severity of the diagnostic a correction fixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Hint,
}

impl Severity {
    /// Parse the tool's level string; anything unknown is a hint.
    pub fn from_level(level: &str) -> Self {
        match level.to_ascii_lowercase().as_str() {
            "error" => Severity::Error,
            "warning" | "warn" => Severity::Warning,
            _ => Severity::Hint,
        }
    }
}

/// An editable span with its replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corrector {
    pub start: Position,
    pub end: Position,
    pub contents: String,
}

impl Corrector {
    pub fn new(start: Position, end: Position, contents: impl Into<String>) -> Self {
        Self {
            start,
            end,
            contents: contents.into(),
        }
    }

    /// The span in the view's coordinates.
    pub fn to_region(&self, view: &impl EditorView) -> TextRange {
        let start = view.text_point(self.start.line, self.start.column.unwrap_or(0));
        let end = view.text_point(self.end.line, self.end.column.unwrap_or(0));
        TextRange::new(start.min(end), start.max(end))
    }
}

/// A suggested fix for a diagnostic in a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Correction {
    pub file: PathBuf,
    pub level: Severity,
    pub message: String,
    pub corrector: Corrector,
}

impl Correction {
    pub fn to_region(&self, view: &impl EditorView) -> TextRange {
        self.corrector.to_region(view)
    }
}

/// Mark every correction in the view showing its file.
///
/// Files are matched by identity on disk, not by path spelling; a
/// correction whose file cannot be resolved is skipped. Views without a
/// file are left alone.
pub fn mark_corrections<V: EditorView>(views: &mut [V], corrections: &[Correction]) {
    for view in views.iter_mut() {
        let Some(view_file) = view.file_name().map(Path::to_path_buf) else {
            continue;
        };
        let regions: Vec<TextRange> = corrections
            .iter()
            .filter(|c| same_file(&c.file, &view_file))
            .map(|c| c.to_region(&*view))
            .collect();
        tracing::trace!(
            file = %view_file.display(),
            regions = regions.len(),
            "marking corrections"
        );
        view.add_regions(CORRECTIONS_KEY, regions, CORRECTIONS_SCOPE, CORRECTIONS_ICON);
    }
}

/// Whether two paths name the same file on disk. Paths that cannot be
/// resolved never match.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

// ============================================================================
// IN-MEMORY VIEW
// ============================================================================

/// An [`EditorView`] over a string, for headless use.
#[derive(Clone, Debug)]
pub struct TextBuffer {
    path: Option<PathBuf>,
    text: String,
    index: LineIndex,
    regions: FxHashMap<String, Vec<TextRange>>,
}

impl TextBuffer {
    pub fn new(path: Option<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            index: LineIndex::new(&text),
            path,
            text,
            regions: FxHashMap::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn regions(&self, key: &str) -> &[TextRange] {
        self.regions.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Text covered by a region.
    pub fn slice(&self, range: TextRange) -> &str {
        &self.text[range]
    }

    /// Apply a corrector, replacing its span with its contents.
    pub fn apply(&mut self, corrector: &Corrector) {
        let range = corrector.to_region(&*self);
        self.text.replace_range(
            usize::from(range.start())..usize::from(range.end()),
            &corrector.contents,
        );
        self.index = LineIndex::new(&self.text);
        self.regions.clear();
    }
}

impl EditorView for TextBuffer {
    fn file_name(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn text_point(&self, line: i64, column: i64) -> TextSize {
        self.index.offset(&self.text, line, column)
    }

    fn add_regions(&mut self, key: &str, regions: Vec<TextRange>, _scope: &str, _icon: &str) {
        self.regions.insert(key.to_string(), regions);
    }
}
