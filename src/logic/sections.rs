//! Section builder: joins filtered games to filtered companies into the
//! ordered, grouped view model.

use std::collections::HashMap;

use crate::logic::{filter, sort};
use crate::state::{
    Company, FilterConfig, Game, Section, SectionSet, SortMode, UserSelection,
};

/// What: Build the ordered section list from the loaded collections.
///
/// Inputs:
/// - `games`: Loaded games, in catalog order
/// - `companies`: Loaded companies, in catalog order
/// - `selections`: Per-game user overlay, keyed by preview item id
/// - `filters`: Current filter configuration
/// - `sort_by`: Section ordering
///
/// Output:
/// - Sections (one per company with surviving games), the count of games
///   placed, and the missing-companies flag.
///
/// Details:
/// - Empty input collections mean data is still loading; the build returns
///   an empty set with the flag off rather than treating it as an error.
/// - Surviving games are indexed by item id and consumed on match, so a
///   game can never appear under two companies. A membership id with no
///   surviving game is skipped.
/// - Matched games are stamped with their overlay entry and the owning
///   company's location.
/// - Leftover games after the join flag `missing_companies`, but only when
///   no company-side filter explains the shortfall.
/// - Games no membership list claims are dropped from the output entirely;
///   they surface only through the flag.
#[must_use]
pub fn build_sections(
    games: &[Game],
    companies: &[Company],
    selections: &HashMap<u64, UserSelection>,
    filters: &FilterConfig,
    sort_by: SortMode,
) -> SectionSet {
    if games.is_empty() || companies.is_empty() {
        return SectionSet::default();
    }

    let mut filtered_companies = filter::filter_companies(filters, companies);
    let mut pool: HashMap<u64, Game> = filter::filter_games(filters, games, selections)
        .into_iter()
        .map(|g| (g.item_id, g))
        .collect();

    sort::sort_companies_by_name(&mut filtered_companies);
    let company_survivors = filtered_companies.len();

    let mut game_count = 0usize;
    let mut sections: Vec<Section> = Vec::with_capacity(company_survivors);
    for company in filtered_companies {
        let mut data: Vec<Game> = Vec::new();
        for item_id in &company.preview_item_ids {
            if let Some(mut game) = pool.remove(item_id) {
                game.user_selection = selections.get(item_id).cloned();
                game.location = Some(company.location.clone());
                data.push(game);
            }
        }
        sort::sort_games_by_name(&mut data);
        game_count += data.len();
        sections.push(Section {
            company_id: company.id,
            name: company.name,
            location: company.location,
            thumbnail: company.thumbnail,
            data,
        });
    }

    if sort_by == SortMode::LocationPublisherGame {
        sort::sort_sections_by_location(&mut sections);
    }

    // Leftover games mean the loaded company set is incomplete relative to
    // the loaded game set, unless the user filtered companies out.
    let missing_companies = !pool.is_empty() && company_survivors == companies.len();

    sections.retain(|s| !s.data.is_empty());

    SectionSet {
        sections,
        game_count,
        missing_companies,
    }
}
