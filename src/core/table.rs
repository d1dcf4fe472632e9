//! Edit distance memoization table
//!
//! Restricted Damerau-Levenshtein distance: insertions, deletions,
//! replacements and transpositions of two *adjacent* characters each cost 1.
//!
//! The table is kept whole (not the usual two-row rolling buffer) because the
//! backtrace walks it afterwards to recover which operations were used.

/// Completed memoization grid for transforming a row string into a column string
///
/// Cell `(r, c)` holds the minimal number of operations turning the first `r`
/// characters of the row string into the first `c` characters of the column
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    /// Row-major cells, `(rows + 1) * (cols + 1)` entries
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl DistanceTable {
    /// Build the full table for `row` (source) against `col` (target)
    ///
    /// # Examples
    /// ```
    /// use distle::core::DistanceTable;
    ///
    /// let row: Vec<char> = "ab".chars().collect();
    /// let col: Vec<char> = "ba".chars().collect();
    /// let table = DistanceTable::new(&row, &col);
    ///
    /// assert_eq!(table.distance(), 1); // one transposition
    /// assert_eq!(table.get(2, 0), 2);
    /// ```
    #[must_use]
    pub fn new(row: &[char], col: &[char]) -> Self {
        let rows = row.len();
        let cols = col.len();
        let width = cols + 1;
        let mut cells = vec![0; (rows + 1) * width];

        for r in 0..=rows {
            for c in 0..=cols {
                cells[r * width + c] = if r == 0 {
                    c
                } else if c == 0 {
                    r
                } else {
                    let insert = cells[r * width + c - 1] + 1;
                    let delete = cells[(r - 1) * width + c] + 1;
                    let replace =
                        cells[(r - 1) * width + c - 1] + usize::from(row[r - 1] != col[c - 1]);

                    let mut best = insert.min(delete).min(replace);
                    if is_transposition(row, col, r, c) {
                        best = best.min(cells[(r - 2) * width + c - 2] + 1);
                    }
                    best
                };
            }
        }

        Self { cells, rows, cols }
    }

    /// Build the table for two string slices
    #[must_use]
    pub fn from_strs(row: &str, col: &str) -> Self {
        let row: Vec<char> = row.chars().collect();
        let col: Vec<char> = col.chars().collect();
        Self::new(&row, &col)
    }

    /// Cost stored at `(r, c)`
    ///
    /// # Panics
    /// Panics if `r > rows()` or `c > cols()`.
    #[inline]
    #[must_use]
    pub fn get(&self, r: usize, c: usize) -> usize {
        assert!(r <= self.rows && c <= self.cols, "cell ({r}, {c}) out of range");
        self.cells[r * (self.cols + 1) + c]
    }

    /// Length of the row string
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Length of the column string
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Edit distance between the full row and column strings
    #[inline]
    #[must_use]
    pub fn distance(&self) -> usize {
        self.get(self.rows, self.cols)
    }

    /// Iterate over the table row by row
    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks(self.cols + 1)
    }
}

/// Whether the last two characters of `row[..r]` are the swapped last two of `col[..c]`
#[inline]
pub(crate) fn is_transposition(row: &[char], col: &[char], r: usize, c: usize) -> bool {
    r >= 2 && c >= 2 && row[r - 1] == col[c - 2] && row[r - 2] == col[c - 1]
}

/// Edit distance between two strings
///
/// Counts the minimal number of insertions, deletions, replacements and
/// adjacent transpositions turning `s0` into `s1`. Equal strings short-circuit
/// without building a table.
///
/// # Examples
/// ```
/// use distle::core::edit_distance;
///
/// assert_eq!(edit_distance("parisss", "parsimony"), 5);
/// assert_eq!(edit_distance("abcde", "edbca"), 4);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
#[must_use]
pub fn edit_distance(s0: &str, s1: &str) -> usize {
    if s0 == s1 {
        return 0;
    }
    DistanceTable::from_strs(s0, s1).distance()
}
