//! Whitespace helpers for extracted lines.
//!
//! Only the four ASCII whitespace bytes that can appear around an entry are
//! considered: tab, space, CR and LF. Everything else, including bytes that are
//! not valid UTF-8, is content and passes through untouched.

fn is_horizontal(byte: &u8) -> bool {
    matches!(byte, b'\t' | b' ')
}

fn is_outer(byte: &u8) -> bool {
    matches!(byte, b'\t' | b'\n' | b'\r' | b' ')
}

/// Returns the leading run of tabs and spaces.
///
/// ```
/// assert_eq!(texgrid_input::indent(b"\t  x"), b"\t  ");
/// assert_eq!(texgrid_input::indent(b"x  "), b"");
/// ```
pub fn indent(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .position(|b| !is_horizontal(b))
        .unwrap_or(line.len());
    &line[..end]
}

/// Strips whitespace from both ends, leaving inner runs untouched.
///
/// ```
/// assert_eq!(texgrid_input::trim(b" \t hi  there \t"), b"hi  there");
/// ```
pub fn trim(line: &[u8]) -> &[u8] {
    let Some(start) = line.iter().position(|b| !is_outer(b)) else {
        return &[];
    };
    let end = line.iter().rposition(|b| !is_outer(b)).map_or(start, |i| i + 1);
    &line[start..end]
}
