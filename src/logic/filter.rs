//! Filter evaluator for the company and game collections.

use std::collections::HashMap;

use crate::catalog;
use crate::logic::predicate;
use crate::state::{Company, FilterConfig, FilterTextTarget, Game, UserSelection};

/// Notes text of the overlay entry for `item_id`, or the empty string when
/// the user never annotated that game.
fn notes_for(selections: &HashMap<u64, UserSelection>, item_id: u64) -> &str {
    selections.get(&item_id).map_or("", |s| s.notes.as_str())
}

/// What: Apply the company-side filters to the loaded exhibitor list.
///
/// Inputs:
/// - `filters`: Current filter configuration
/// - `companies`: Loaded companies, in catalog order
///
/// Output:
/// - Companies whose name contains the text term when the term targets
///   publishers; the unchanged list otherwise.
///
/// Details:
/// - Only the text filter applies to companies. Priority, hall, seen, and
///   availability restrict games, never their exhibitors.
#[must_use]
pub fn filter_companies(filters: &FilterConfig, companies: &[Company]) -> Vec<Company> {
    if filters.name.is_empty() || filters.filter_text_on != FilterTextTarget::Publisher {
        return companies.to_vec();
    }
    let term = filters.name.to_lowercase();
    companies
        .iter()
        .filter(|c| predicate::text_matches(&c.name, &term))
        .cloned()
        .collect()
}

/// What: Run the ordered game filter pipeline.
///
/// Inputs:
/// - `filters`: Current filter configuration
/// - `games`: Loaded games, in catalog order
/// - `selections`: Per-game user overlay, keyed by preview item id
///
/// Output:
/// - Games surviving every active pass, input order preserved.
///
/// Details:
/// - Passes run in order: text, priority, hall, seen, availability. Each is
///   skipped when its selection imposes no restriction (empty or full set).
/// - A `publisher`-targeted text term filters companies only and is a no-op
///   here.
/// - The seen pass only applies when exactly one flag is selected; choosing
///   both (or neither) filters nothing.
#[must_use]
pub fn filter_games(
    filters: &FilterConfig,
    games: &[Game],
    selections: &HashMap<u64, UserSelection>,
) -> Vec<Game> {
    let mut filtered: Vec<Game> = games.to_vec();

    if !filters.name.is_empty() {
        let term = filters.name.to_lowercase();
        match filters.filter_text_on {
            FilterTextTarget::Note => {
                filtered
                    .retain(|g| predicate::text_matches(notes_for(selections, g.item_id), &term));
            }
            FilterTextTarget::Game => {
                filtered.retain(|g| predicate::text_matches(&g.name, &term));
            }
            FilterTextTarget::Publisher => {}
        }
    }

    if predicate::restricts(&filters.priorities, catalog::PRIORITY_CHOICES.len()) {
        filtered.retain(|g| {
            filters
                .priorities
                .contains(&predicate::priority_of(selections.get(&g.item_id)))
        });
    }

    if predicate::restricts(&filters.halls, catalog::HALL_CODES.len()) {
        filtered.retain(|g| {
            g.location
                .as_deref()
                .is_some_and(|loc| predicate::hall_matches(&filters.halls, loc))
        });
    }

    // Seen is a two-value dimension; it only restricts when exactly one
    // flag is picked.
    if filters.seen.len() == 1 {
        let want_seen = filters.seen.contains(&1);
        filtered.retain(|g| {
            predicate::notes_marked_seen(notes_for(selections, g.item_id)) == want_seen
        });
    }

    if predicate::restricts(&filters.availability, catalog::AVAILABILITY_STATUSES.len()) {
        filtered.retain(|g| filters.availability.contains(&g.status));
    }

    filtered
}
