//! Matrix dimension resolution.

use std::fmt;

use crate::Error;

/// Rows and columns of the rendered matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    /// Determine the shape for `count` entries.
    ///
    /// Without an explicit column count a perfect square becomes a square
    /// matrix and anything else a single column. With one, the entries must
    /// fill whole rows.
    ///
    /// ```
    /// use texgrid::Shape;
    ///
    /// assert_eq!(Shape::resolve(9, None).unwrap(), Shape { rows: 3, columns: 3 });
    /// assert_eq!(Shape::resolve(6, None).unwrap(), Shape { rows: 6, columns: 1 });
    /// assert_eq!(Shape::resolve(6, Some(3)).unwrap(), Shape { rows: 2, columns: 3 });
    /// assert!(Shape::resolve(7, Some(3)).is_err());
    /// ```
    pub fn resolve(count: usize, columns: Option<usize>) -> Result<Shape, Error> {
        if count == 0 {
            return Err(Error::NoEntries);
        }

        // zero columns means none were given
        match columns.filter(|&c| c > 0) {
            None => {
                let root = integer_sqrt(count);
                if root * root == count {
                    Ok(Shape {
                        rows: root,
                        columns: root,
                    })
                } else {
                    Ok(Shape {
                        rows: count,
                        columns: 1,
                    })
                }
            }
            Some(columns) => {
                let rows = count / columns;
                if rows * columns != count {
                    return Err(Error::AmbiguousShape {
                        entries: count,
                        columns,
                    });
                }
                Ok(Shape { rows, columns })
            }
        }
    }

    /// Number of cells the shape holds.
    pub fn cells(&self) -> usize {
        self.rows * self.columns
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}
