//! Edit operations and operation sequences
//!
//! An operation sequence is the feedback Distle gives alongside the edit
//! distance: the top-down list of primitive edits turning a guess into the
//! secret word.

use crate::error::DistleError;
use std::fmt;
use std::str::FromStr;

/// A primitive string manipulation counted by the edit distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    /// Replace one character with another (`R`)
    Replace,
    /// Swap two adjacent characters (`T`)
    Transpose,
    /// Insert one character (`I`)
    Insert,
    /// Delete one character (`D`)
    Delete,
}

impl Operation {
    /// Tie-break order used when several operations explain a table cell.
    ///
    /// Earlier entries win.
    pub const PRIORITY: [Self; 4] = [Self::Replace, Self::Transpose, Self::Insert, Self::Delete];

    /// Single-letter token for this operation
    #[inline]
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Replace => 'R',
            Self::Transpose => 'T',
            Self::Insert => 'I',
            Self::Delete => 'D',
        }
    }

    /// Parse a single-letter token (case-insensitive)
    ///
    /// # Errors
    /// Returns [`DistleError::InvalidOperation`] for any other character.
    pub fn from_token(token: char) -> Result<Self, DistleError> {
        match token.to_ascii_uppercase() {
            'R' => Ok(Self::Replace),
            'T' => Ok(Self::Transpose),
            'I' => Ok(Self::Insert),
            'D' => Ok(Self::Delete),
            _ => Err(DistleError::InvalidOperation(token)),
        }
    }

    /// Operation seen from the other side of the transformation.
    ///
    /// Turning B into A undoes an insertion with a deletion and vice versa.
    #[inline]
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Insert => Self::Delete,
            Self::Delete => Self::Insert,
            other => other,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Top-down sequence of operations realizing one minimal transformation
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OperationSequence(Vec<Operation>);

impl OperationSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn push(&mut self, operation: Operation) {
        self.0.push(operation);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Operation] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.0.iter()
    }

    /// Number of occurrences of `operation`
    #[must_use]
    pub fn count(&self, operation: Operation) -> usize {
        self.0.iter().filter(|&&op| op == operation).count()
    }

    #[must_use]
    pub fn contains(&self, operation: Operation) -> bool {
        self.0.contains(&operation)
    }

    /// Length difference between target and source implied by this sequence
    ///
    /// Replacements and transpositions keep the length; each insertion adds
    /// one character and each deletion removes one.
    ///
    /// # Examples
    /// ```
    /// use distle::core::OperationSequence;
    ///
    /// let ops: OperationSequence = "TRD".parse().unwrap();
    /// assert_eq!(ops.length_delta(), -1);
    /// ```
    #[must_use]
    pub fn length_delta(&self) -> isize {
        self.count(Operation::Insert) as isize - self.count(Operation::Delete) as isize
    }

    /// Sequence for the reverse transformation with the same alignment
    #[must_use]
    pub fn inverted(&self) -> Self {
        self.0.iter().map(|op| op.inverse()).collect()
    }

    /// Compact token string such as `"TRD"`
    #[must_use]
    pub fn to_tokens(&self) -> String {
        self.0.iter().map(|op| op.token()).collect()
    }
}

impl From<Vec<Operation>> for OperationSequence {
    fn from(operations: Vec<Operation>) -> Self {
        Self(operations)
    }
}

impl FromIterator<Operation> for OperationSequence {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OperationSequence {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[Operation]> for OperationSequence {
    fn eq(&self, other: &[Operation]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<[Operation; N]> for OperationSequence {
    fn eq(&self, other: &[Operation; N]) -> bool {
        self.0 == other
    }
}

/// Accepts `"TRD"`, `"T,R,D"`, `"T R D"` and `"[T, R, D]"`.
impl FromStr for OperationSequence {
    type Err = DistleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|ch| !matches!(ch, '[' | ']' | ',' | '"' | '\'') && !ch.is_whitespace())
            .map(Operation::from_token)
            .collect()
    }
}

impl fmt::Display for OperationSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, op) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{op}")?;
        }
        write!(f, "]")
    }
}
