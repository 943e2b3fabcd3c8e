//! View-state controller.
//!
//! Owns the active filter/sort configuration plus the last derived section
//! set, and mediates between the data loader, the persistent store, and the
//! presentation layer. Every event handler rebuilds synchronously from the
//! snapshot passed at call time, so a stale derivation can never overwrite
//! a newer configuration.

use crate::logic;
use crate::state::{
    FilterConfig, FilterPatch, FirstLoad, PreviewData, Section, SectionSet, SortMode,
    StoredFilters,
};
use crate::storage::{self, FilterStore};

/// Loader collaborator the controller can ask for a full company reload.
pub trait CompanyLoader {
    /// Re-fetch the complete company collection.
    fn force_company_full_load(&mut self);
}

/// What the grouped list should show in place of (or around) its rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    /// First import is still running; worth a long-running-import notice.
    FirstImport,
    /// A refresh of previously imported data is underway.
    Refreshing,
    /// Filters are user-set and nothing survived them.
    NoMatches,
    /// Sections are available, or the list is legitimately empty without
    /// the user having filtered.
    Ready,
}

/// Controller owning the current configuration and derived sections.
pub struct PreviewController<S, L> {
    /// Persistent key-value collaborator.
    store: S,
    /// Loader collaborator for company reloads.
    loader: L,
    /// Active filter configuration.
    filters: FilterConfig,
    /// Active sort mode.
    sort_by: SortMode,
    /// Whether the user actively set filters this session.
    filters_set: bool,
    /// Last derived aggregate.
    derived: SectionSet,
    /// Missing-companies flag from the previous rebuild; the reload signal
    /// fires only on the false-to-true edge.
    last_missing: bool,
}

impl<S: FilterStore, L: CompanyLoader> PreviewController<S, L> {
    /// Create a controller with permissive defaults and no derived state.
    #[must_use]
    pub fn new(store: S, loader: L) -> Self {
        Self {
            store,
            loader,
            filters: FilterConfig::permissive(),
            sort_by: SortMode::default(),
            filters_set: false,
            derived: SectionSet::default(),
            last_missing: false,
        }
    }

    /// What: Restore the persisted configuration, then rebuild.
    ///
    /// Inputs:
    /// - `data`: Current loader snapshot
    ///
    /// Output:
    /// - Adopts the stored filters and sort mode when a readable payload
    ///   exists; keeps the permissive defaults otherwise. Either way the
    ///   sections are rebuilt against `data`.
    ///
    /// Details:
    /// - Restored filters are ambient state, not a user action: they do not
    ///   count as user-set, so an empty list stays quiet instead of
    ///   claiming "no matches".
    pub fn load_persisted_filters(&mut self, data: &PreviewData) {
        if let Some(stored) = storage::load_stored_filters(&self.store) {
            self.filters = stored.filters;
            self.sort_by = stored.sort_by;
        }
        self.filters_set = false;
        self.recompute(data);
    }

    /// Rebuild sections after the loader delivered new collections or
    /// overlay entries.
    pub fn handle_data_change(&mut self, data: &PreviewData) {
        self.recompute(data);
    }

    /// What: Apply an edited free-text term, persist, and rebuild.
    ///
    /// Inputs:
    /// - `text`: New term; empty clears the text filter
    /// - `data`: Current loader snapshot
    pub fn handle_filter_text_change(&mut self, text: &str, data: &PreviewData) {
        let mut filters = self.filters.clone();
        filters.name = text.to_string();
        self.persist_and_apply(filters, self.sort_by, data);
    }

    /// What: Merge a partial filter update plus sort mode, persist, rebuild.
    ///
    /// Inputs:
    /// - `patch`: Dimensions the filter form submitted
    /// - `sort_by`: Sort mode picked alongside
    /// - `data`: Current loader snapshot
    pub fn set_filters(&mut self, patch: &FilterPatch, sort_by: SortMode, data: &PreviewData) {
        let filters = patch.apply_to(&self.filters);
        self.persist_and_apply(filters, sort_by, data);
    }

    /// Drop back to the permissive defaults, persist, and rebuild.
    pub fn reset_filters(&mut self, data: &PreviewData) {
        self.persist_and_apply(FilterConfig::permissive(), SortMode::default(), data);
    }

    /// Persist `filters` and `sort_by`, adopt them, and rebuild against the
    /// snapshot passed by the caller.
    fn persist_and_apply(&mut self, filters: FilterConfig, sort_by: SortMode, data: &PreviewData) {
        storage::save_stored_filters(
            &mut self.store,
            &StoredFilters {
                filters: filters.clone(),
                sort_by,
            },
        );
        self.filters = filters;
        self.sort_by = sort_by;
        self.filters_set = true;
        self.recompute(data);
    }

    /// Rebuild the derived sections and, on a fresh missing-companies
    /// transition with no load in flight, signal the loader once.
    fn recompute(&mut self, data: &PreviewData) {
        let built = logic::build_sections(
            &data.games,
            &data.companies,
            &data.user_selections,
            &self.filters,
            self.sort_by,
        );
        let rising = built.missing_companies && !self.last_missing;
        self.last_missing = built.missing_companies;
        self.derived = built;

        if rising && !data.loading {
            tracing::info!(
                game_count = self.derived.game_count,
                "games reference companies outside the loaded set; forcing full company reload"
            );
            self.loader.force_company_full_load();
        }
    }

    /// Ordered sections from the last rebuild.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.derived.sections
    }

    /// Total games placed into sections, for the surrounding chrome.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.derived.game_count
    }

    /// Whether the last rebuild left games without a loaded company.
    #[must_use]
    pub fn missing_companies(&self) -> bool {
        self.derived.missing_companies
    }

    /// Active filter configuration.
    #[must_use]
    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    /// Active sort mode.
    #[must_use]
    pub fn sort_by(&self) -> SortMode {
        self.sort_by
    }

    /// Whether the user actively set filters this session.
    #[must_use]
    pub fn filters_set(&self) -> bool {
        self.filters_set
    }

    /// Loader collaborator, for hosts that own further loader state.
    #[must_use]
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Store collaborator, for hosts that share it with other settings.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// What: Classify what the list should show for the current snapshot.
    ///
    /// Inputs:
    /// - `data`: Current loader snapshot
    ///
    /// Output:
    /// - Import/refresh progress while the first load is incomplete; after
    ///   that, "no matches" only when user-set filters emptied the list.
    #[must_use]
    pub fn list_status(&self, data: &PreviewData) -> ListStatus {
        match data.first_load {
            FirstLoad::Ever => ListStatus::FirstImport,
            FirstLoad::Pending => ListStatus::Refreshing,
            FirstLoad::Complete => {
                if self.derived.sections.is_empty() && self.filters_set {
                    ListStatus::NoMatches
                } else {
                    ListStatus::Ready
                }
            }
        }
    }
}
