//! Text manipulation utilities for working with Haskell names.

/// Identifier characters per Unicode Standard Annex #31, plus the prime
/// as in `foldl'`.
#[inline]
pub fn is_identifier_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c) || c == '\''
}

/// Split `Data.Map.lookup` into `(Some("Data.Map"), "lookup")`.
///
/// Only capitalised segments followed by a dot count as qualifier, so
/// operators such as `.` and `M..` (the qualified `.`) split correctly.
///
/// # Example
/// ```
/// use hsym::core::split_qualified;
///
/// assert_eq!(split_qualified("Map.lookup"), (Some("Map"), "lookup"));
/// assert_eq!(split_qualified("f"), (None, "f"));
/// ```
pub fn split_qualified(name: &str) -> (Option<&str>, &str) {
    let mut end = 0;
    let mut rest = name;
    loop {
        let segment_len = rest
            .find(|c: char| !is_identifier_character(c))
            .unwrap_or(rest.len());
        let segment = &rest[..segment_len];
        let after = &rest[segment_len..];
        if segment.starts_with(char::is_uppercase) && after.len() > 1 && after.starts_with('.') {
            end += segment_len + 1;
            rest = &after[1..];
        } else {
            break;
        }
    }

    if end == 0 {
        (None, name)
    } else {
        (Some(&name[..end - 1]), &name[end..])
    }
}
