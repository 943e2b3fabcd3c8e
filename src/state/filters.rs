//! Filter and sort configuration, including the persisted form.

use std::collections::BTreeSet;

/// Which text field the free-text filter term applies to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterTextTarget {
    /// Match against game names.
    #[default]
    Game,
    /// Match against company names.
    Publisher,
    /// Match against the user's notes.
    Note,
}

/// Section ordering selected by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Companies by name, games by name.
    #[default]
    PublisherGame,
    /// Companies by location first, then name; games by name.
    LocationPublisherGame,
}

/// The full filter configuration the user can express through the form.
///
/// For every set-valued dimension an empty set and the full universe both
/// mean "no restriction"; only a non-empty proper subset filters. The text
/// term is inactive while empty.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    /// Free-text term, matched case-insensitively as a substring.
    pub name: String,
    /// Selected priority values.
    pub priorities: BTreeSet<i32>,
    /// Selected hall codes (uppercase letters).
    pub halls: BTreeSet<char>,
    /// Selected seen flags (`0` = not seen, `1` = seen).
    pub seen: BTreeSet<u8>,
    /// Selected availability statuses.
    pub availability: BTreeSet<String>,
    /// Field the text term applies to.
    pub filter_text_on: FilterTextTarget,
}

impl FilterConfig {
    /// What: Build a fresh, fully permissive configuration.
    ///
    /// Output:
    /// - Empty term and empty selection sets, text targeted at game names;
    ///   every dimension passes everything through.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            name: String::new(),
            priorities: BTreeSet::new(),
            halls: BTreeSet::new(),
            seen: BTreeSet::new(),
            availability: BTreeSet::new(),
            filter_text_on: FilterTextTarget::Game,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::permissive()
    }
}

/// Partial filter update merged over the current configuration.
///
/// The filter form submits only the dimensions it owns; absent fields keep
/// their current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterPatch {
    /// Replacement text term.
    pub name: Option<String>,
    /// Replacement priority selection.
    pub priorities: Option<BTreeSet<i32>>,
    /// Replacement hall selection.
    pub halls: Option<BTreeSet<char>>,
    /// Replacement seen selection.
    pub seen: Option<BTreeSet<u8>>,
    /// Replacement availability selection.
    pub availability: Option<BTreeSet<String>>,
    /// Replacement text target.
    pub filter_text_on: Option<FilterTextTarget>,
}

impl FilterPatch {
    /// Merge this patch over `base`, yielding the resulting configuration.
    #[must_use]
    pub fn apply_to(&self, base: &FilterConfig) -> FilterConfig {
        FilterConfig {
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            priorities: self
                .priorities
                .clone()
                .unwrap_or_else(|| base.priorities.clone()),
            halls: self.halls.clone().unwrap_or_else(|| base.halls.clone()),
            seen: self.seen.clone().unwrap_or_else(|| base.seen.clone()),
            availability: self
                .availability
                .clone()
                .unwrap_or_else(|| base.availability.clone()),
            filter_text_on: self.filter_text_on.unwrap_or(base.filter_text_on),
        }
    }
}

/// Persisted payload: filter configuration plus sort mode, stored as one
/// JSON document in the external key-value store.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredFilters {
    /// Filter configuration at the time of persisting.
    pub filters: FilterConfig,
    /// Sort mode at the time of persisting.
    pub sort_by: SortMode,
}
