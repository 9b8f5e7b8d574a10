//! Utility functions for cell measurement and padding.
//!
//! Cells are raw bytes. Width assumes UTF-8 but never decodes, so cells that
//! are not valid UTF-8 are measured and written unchanged.

/// Returns the display width of a cell, counted in encoded characters.
///
/// Every byte that is not a UTF-8 continuation byte (`10xxxxxx`) starts a
/// character and counts as one unit.
///
/// # Example
///
/// ```rust
/// use texgrid_render::display_width;
///
/// assert_eq!(display_width("abc"), 3);
/// assert_eq!(display_width("äöü"), 3);
/// assert_eq!(display_width(b"caf\xe9"), 4);
/// assert_eq!(display_width(""), 0);
/// ```
pub fn display_width(cell: impl AsRef<[u8]>) -> usize {
    cell.as_ref()
        .iter()
        .filter(|&&byte| byte & 0xC0 != 0x80)
        .count()
}

/// Computes the width of each column of a row-major grid.
///
/// The width of a column is the largest [`display_width`] among its cells.
/// Cells past the last complete row are ignored.
///
/// # Example
///
/// ```rust
/// use texgrid_render::column_widths;
///
/// let cells = ["1", "22", "333", "4"];
/// assert_eq!(column_widths(&cells, 2), vec![3, 2]);
/// ```
pub fn column_widths<S: AsRef<[u8]>>(cells: &[S], columns: usize) -> Vec<usize> {
    let mut widths = vec![0; columns];
    if columns == 0 {
        return widths;
    }

    for row in cells.chunks_exact(columns) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    widths
}

/// Right-aligns `cell` within `width` characters.
///
/// Cells that are already wider are returned unchanged.
///
/// # Example
///
/// ```rust
/// use texgrid_render::pad_left;
///
/// assert_eq!(pad_left("7", 3), b"  7");
/// assert_eq!(pad_left("ä", 2), " ä".as_bytes());
/// assert_eq!(pad_left("long", 2), b"long");
/// ```
pub fn pad_left(cell: impl AsRef<[u8]>, width: usize) -> Vec<u8> {
    let cell = cell.as_ref();
    let padding = width.saturating_sub(display_width(cell));
    let mut out = Vec::with_capacity(padding + cell.len());
    out.resize(padding, b' ');
    out.extend_from_slice(cell);
    out
}
