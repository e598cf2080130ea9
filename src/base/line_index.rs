//! Line start table for translating (line, column) into byte offsets.

use text_size::TextSize;

/// Start offsets of every line of a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::from(offset as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Offset of a 0-based (line, column) pair in `text`, clamped to it.
    ///
    /// `text` must be the text the index was built from. Columns count
    /// characters, not bytes. Negative coordinates clamp to the start,
    /// lines past the end clamp to the end of the text, and columns past
    /// the line end clamp to the end of that line.
    pub fn offset(&self, text: &str, line: i64, column: i64) -> TextSize {
        if line < 0 {
            return TextSize::from(0);
        }
        let line = usize::try_from(line).unwrap_or(usize::MAX);
        let Some(&start) = self.line_starts.get(line) else {
            return self.len;
        };
        let line_end = self
            .line_starts
            .get(line + 1)
            .map(|next| *next - TextSize::from(1))
            .unwrap_or(self.len);
        let Some(line_text) = text.get(usize::from(start)..usize::from(line_end)) else {
            return start;
        };
        let column = usize::try_from(column.max(0)).unwrap_or(usize::MAX);
        let within = line_text
            .char_indices()
            .nth(column)
            .map_or(line_text.len(), |(offset, _)| offset);
        start + TextSize::of(&line_text[..within])
    }
}
