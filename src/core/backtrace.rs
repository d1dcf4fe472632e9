//! Operation sequence reconstruction
//!
//! Walks a completed [`DistanceTable`] from the full-string cell back to the
//! empty-prefix cell, choosing at every step the first operation in
//! [`Operation::PRIORITY`] that explains the cell's cost.

use super::operation::{Operation, OperationSequence};
use super::table::{DistanceTable, is_transposition};

/// One step of the walk: the operation considered, the cell it came from and
/// the cost it adds
struct Step {
    operation: Operation,
    from: (usize, usize),
    cost: usize,
}

/// Predecessor cell for `operation` at `(r, c)`, if that operation is available there
fn step(operation: Operation, row: &[char], col: &[char], r: usize, c: usize) -> Option<Step> {
    let (from, cost) = match operation {
        Operation::Replace if r > 0 && c > 0 => {
            ((r - 1, c - 1), usize::from(row[r - 1] != col[c - 1]))
        }
        Operation::Transpose if is_transposition(row, col, r, c) => ((r - 2, c - 2), 1),
        Operation::Insert if c > 0 => ((r, c - 1), 1),
        Operation::Delete if r > 0 => ((r - 1, c), 1),
        _ => return None,
    };

    Some(Step {
        operation,
        from,
        cost,
    })
}

/// Reconstruct the operations turning `row` into `col` from an already-built table
///
/// The table must have been built for exactly this `(row, col)` pair; it is
/// read, never recomputed. Operations are listed top-down: the first entry
/// belongs to the largest subproblem. A replacement between equal characters
/// costs nothing and emits no token.
///
/// Given a table for different strings the result is meaningless but the
/// walk still terminates.
///
/// # Examples
/// ```
/// use distle::core::{DistanceTable, Operation, transformation_list_with_table};
///
/// let row: Vec<char> = "hack".chars().collect();
/// let col: Vec<char> = "fkc".chars().collect();
/// let table = DistanceTable::new(&row, &col);
///
/// let ops = transformation_list_with_table(&row, &col, &table);
/// assert_eq!(ops, [Operation::Transpose, Operation::Replace, Operation::Delete]);
/// ```
#[must_use]
pub fn transformation_list_with_table(
    row: &[char],
    col: &[char],
    table: &DistanceTable,
) -> OperationSequence {
    let mut operations = OperationSequence::new();
    let (mut r, mut c) = (table.rows().min(row.len()), table.cols().min(col.len()));

    while table.get(r, c) != 0 {
        let current = table.get(r, c);

        let chosen = Operation::PRIORITY
            .iter()
            .filter_map(|&op| step(op, row, col, r, c))
            .find(|s| table.get(s.from.0, s.from.1) + s.cost == current);

        let Some(chosen) = chosen else {
            // Table was not built for these strings; nothing explains this cell.
            break;
        };

        if chosen.cost > 0 {
            operations.push(chosen.operation);
        }
        (r, c) = chosen.from;
    }

    operations
}

/// Reconstruct the operations turning `s0` into `s1`
///
/// Ties between equally cheap operations are broken in the order Replace,
/// Transpose, Insert, Delete.
///
/// # Examples
/// ```
/// use distle::core::transformation_list;
///
/// assert_eq!(transformation_list("hack", "fkc").to_tokens(), "TRD");
/// assert_eq!(transformation_list("fkc", "hack").to_tokens(), "TRI");
/// ```
#[must_use]
pub fn transformation_list(s0: &str, s1: &str) -> OperationSequence {
    let row: Vec<char> = s0.chars().collect();
    let col: Vec<char> = s1.chars().collect();
    let table = DistanceTable::new(&row, &col);
    transformation_list_with_table(&row, &col, &table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::edit_distance;
    use proptest::prelude::*;

    fn tokens(s0: &str, s1: &str) -> String {
        transformation_list(s0, s1).to_tokens()
    }

    /// Both directions of a fixture pair, the second given as the mirror of the first
    fn assert_mirrored(s0: &str, s1: &str, forward: &str) {
        let backward: String = forward
            .chars()
            .map(|t| match t {
                'I' => 'D',
                'D' => 'I',
                other => other,
            })
            .collect();
        assert_eq!(tokens(s0, s1), forward, "{s0} -> {s1}");
        assert_eq!(tokens(s1, s0), backward, "{s1} -> {s0}");
    }

    #[test]
    fn empty_strings() {
        assert_eq!(tokens("", ""), "");
    }

    #[test]
    fn single_deletion() {
        assert_mirrored("a", "", "D");
    }

    #[test]
    fn only_deletions() {
        assert_mirrored("abc", "", "DDD");
    }

    #[test]
    fn single_transposition() {
        assert_mirrored("abc", "bac", "T");
        assert_mirrored("ab", "ba", "T");
    }

    #[test]
    fn only_replacements() {
        assert_mirrored("aaa", "bbb", "RRR");
        assert_mirrored("eagle", "bagle", "R");
        assert_mirrored("intuition", "inception", "RRR");
        assert_mirrored("housemaid", "heartsick", "RRRRRRRR");
        assert_mirrored("fullness", "fineness", "RRR");
    }

    #[test]
    fn mixed_operations() {
        assert_mirrored("hack", "fkc", "TRD");
        assert_mirrored("astound", "distant", "RRDRI");
        assert_mirrored("axbczy", "abxyzc", "RRT");
    }

    #[test]
    fn replacement_outranks_transposition() {
        // Top cell of aba -> bab is explained by both R and T at cost 2.
        assert_eq!(tokens("aba", "bab"), "RT");
        assert_eq!(tokens("xy", "yz"), "RR");
    }

    #[test]
    fn insertion_outranks_deletion() {
        // Equal-cost I and D at the top cell: I is taken, so the reverse
        // direction does not mirror token for token.
        assert_eq!(tokens("ccbacb", "cacba"), "IDD");
        assert_eq!(tokens("cacba", "ccbacb"), "IID");
    }

    #[test]
    fn longer_fixtures() {
        assert_eq!(tokens("parisss", "parsimony"), "RRRII");
        assert_eq!(tokens("wxyyxw", "wyxxyx"), "RTT");
        assert_eq!(tokens("abcde", "edbca"), "RDRI");
        assert_eq!(tokens("ab", "c"), "RD");
    }

    #[test]
    fn uses_given_table() {
        let row: Vec<char> = "astound".chars().collect();
        let col: Vec<char> = "distant".chars().collect();
        let table = DistanceTable::new(&row, &col);

        let ops = transformation_list_with_table(&row, &col, &table);
        assert_eq!(ops.len(), table.distance());
        assert_eq!(ops, transformation_list("astound", "distant"));
    }

    #[test]
    fn mismatched_table_still_terminates() {
        let table = DistanceTable::from_strs("abcdef", "xyz");
        let row: Vec<char> = "ab".chars().collect();
        let col: Vec<char> = "ba".chars().collect();
        let ops = transformation_list_with_table(&row, &col, &table);
        assert!(ops.len() <= 4);
    }

    proptest! {
        #[test]
        fn length_matches_distance(a in "[a-c]{0,7}", b in "[a-c]{0,7}") {
            prop_assert_eq!(transformation_list(&a, &b).len(), edit_distance(&a, &b));
        }

        #[test]
        fn reversed_pair_has_equal_length(a in "[a-c]{0,7}", b in "[a-c]{0,7}") {
            prop_assert_eq!(transformation_list(&a, &b).len(), transformation_list(&b, &a).len());
        }

        #[test]
        fn length_delta_matches_lengths(a in "[a-c]{0,7}", b in "[a-c]{0,7}") {
            let delta = b.chars().count() as isize - a.chars().count() as isize;
            prop_assert_eq!(transformation_list(&a, &b).length_delta(), delta);
        }

        #[test]
        fn equal_strings_need_nothing(s in "[a-c]{0,7}") {
            prop_assert!(transformation_list(&s, &s).is_empty());
        }
    }
}
