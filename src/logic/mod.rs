//! Core engine logic split into modular submodules.

pub mod filter;
pub mod predicate;
pub mod sections;
pub mod sort;

// Re-export public APIs to keep import paths short (crate::logic::...)
pub use filter::{filter_companies, filter_games};
pub use sections::build_sections;
pub use sort::{sort_companies_by_name, sort_games_by_name, sort_sections_by_location};
