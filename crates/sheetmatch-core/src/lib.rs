//! Matching engine: key normalization, lookup index and the left join.
//!
//! Everything here is synchronous and free of I/O. A join builds its own
//! [`LookupIndex`], uses it, and drops it, so identical inputs always give
//! identical output.

pub mod index;
pub mod join;
pub mod normalize;

pub use index::LookupIndex;
pub use join::{
    COLLISION_SUFFIX, ColumnRename, JoinOutcome, JoinStats, NOT_FOUND, join, join_with_stats,
    run_match, target_column,
};
pub use normalize::{normalize_key, normalize_text, parse_numeric_literal};
