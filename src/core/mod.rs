//! Core domain types for Distle
//!
//! The edit distance metric, the operation backtrace and the feedback built
//! from them. Everything here is pure and deterministic.

mod backtrace;
mod feedback;
mod operation;
mod table;
mod word;

pub use backtrace::{transformation_list, transformation_list_with_table};
pub use feedback::Feedback;
pub use operation::{Operation, OperationSequence};
pub use table::{DistanceTable, edit_distance};
pub use word::Word;
