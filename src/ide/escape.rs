//! HTML escaping for the markup renderers.

/// Escape `&`, `<` and `>`. Quotes are left alone.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push_str(&escape_html(c.encode_utf8(&mut [0; 4]))),
        }
    }
    out
}

/// Escape multi-line text, keeping its indentation visible.
///
/// Leading whitespace of each line becomes one `&nbsp;` per character and
/// lines are joined with `<br>`.
pub fn escape_text(text: &str) -> String {
    text.lines()
        .map(|line| {
            let body = line.trim_start();
            let indent = line[..line.len() - body.len()].chars().count();
            format!("{}{}", "&nbsp;".repeat(indent), escape_html(body))
        })
        .collect::<Vec<_>>()
        .join("<br>")
}
