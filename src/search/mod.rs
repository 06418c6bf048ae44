//! Search operations: fuzzy completion over the radix tree

mod fuzzy;

pub use fuzzy::{edit_distance, FuzzyMatcher, Suggestion};
