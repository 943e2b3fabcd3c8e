//! Total-order comparators for companies, games, and sections.
//!
//! All orders are ascending, case-sensitive codepoint order on the relevant
//! string field. Callers rely on the standard library sort being stable:
//! re-sorting sections by location must keep the earlier name order within
//! a location.

use crate::state::{Company, Game, Section};

/// Sort companies ascending by display name.
pub fn sort_companies_by_name(companies: &mut [Company]) {
    companies.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Sort games ascending by display name.
pub fn sort_games_by_name(games: &mut [Game]) {
    games.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Sort sections ascending by booth location.
pub fn sort_sections_by_location(sections: &mut [Section]) {
    sections.sort_by(|a, b| a.location.cmp(&b.location));
}
