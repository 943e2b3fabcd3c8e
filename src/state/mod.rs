//! Modularized state module.
//!
//! Splits catalog value types from the filter/sort configuration while
//! keeping the public API flat under `crate::state::*` via re-exports.

pub mod filters;
pub mod types;

// Public re-exports to keep import paths short
pub use filters::{FilterConfig, FilterPatch, FilterTextTarget, SortMode, StoredFilters};
pub use types::{Company, FirstLoad, Game, PreviewData, Section, SectionSet, UserSelection};
