//! Pull LeetCode favorite question lists and keep exported CSVs in sync
//! with them.

pub mod catalog;
pub mod fetch;
pub mod merge;
pub mod table;
