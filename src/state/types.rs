//! Core value types for the preview catalog.

use std::collections::HashMap;

/// An exhibitor record owning zero or more previewed games.
///
/// Companies are loaded from an external source and treated as read-only
/// input; the engine copies their display fields onto the sections it
/// derives instead of mutating them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Stable exhibitor identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Booth location code, e.g. `"B-310"`.
    pub location: String,
    /// Thumbnail image URL shown in section headers.
    #[serde(default)]
    pub thumbnail: String,
    /// Preview item ids this company exhibits, in catalog order. Some
    /// records carry none.
    #[serde(default)]
    pub preview_item_ids: Vec<u64>,
}

/// A single catalog entry a user can rate, filter, or mark seen.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Preview item identifier; membership lists and overlays key on this.
    pub item_id: u64,
    /// Identifier of the underlying game record.
    pub object_id: u64,
    /// Display name.
    pub name: String,
    /// Booth location inherited from the owning company. Absent until the
    /// section builder stamps it (or the loader pre-filled it).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Availability status code, one of
    /// [`AVAILABILITY_STATUSES`](crate::catalog::AVAILABILITY_STATUSES).
    pub status: String,
    /// Per-user annotation joined onto the game at build time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_selection: Option<UserSelection>,
}

/// Per-user, per-game annotation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserSelection {
    /// Priority rank, or [`UNPRIORITIZED`](crate::catalog::UNPRIORITIZED).
    pub priority: i32,
    /// Free-text notes. The note editor serializes its document here,
    /// including a `"seen"` key when the game was marked seen.
    #[serde(default)]
    pub notes: String,
}

/// One company plus its ordered, filtered games; the unit the grouped list
/// renders.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Owning company id.
    pub company_id: u64,
    /// Company display name.
    pub name: String,
    /// Company booth location.
    pub location: String,
    /// Company thumbnail URL.
    pub thumbnail: String,
    /// Games placed under this company, sorted by name.
    pub data: Vec<Game>,
}

/// Derived aggregate produced by one section build.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionSet {
    /// Ordered sections; never contains an empty one.
    pub sections: Vec<Section>,
    /// Total games placed into sections.
    pub game_count: usize,
    /// True when leftover games reference companies outside the loaded set
    /// and no company-side filter explains the shortfall.
    pub missing_companies: bool,
}

/// Progress of the initial catalog import.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FirstLoad {
    /// Importing for the very first time; nothing cached yet.
    #[default]
    Ever,
    /// A refresh of previously imported data is underway.
    Pending,
    /// Data is present and current.
    Complete,
}

/// Snapshot of the loader-owned collections handed to the engine per event.
///
/// The engine reads the snapshot passed at call time and never retains it,
/// so a recomputation can never run against stale captures.
#[derive(Clone, Debug, Default)]
pub struct PreviewData {
    /// Loaded games, in catalog order.
    pub games: Vec<Game>,
    /// Loaded companies, in catalog order.
    pub companies: Vec<Company>,
    /// Per-game user overlay, keyed by preview item id.
    pub user_selections: HashMap<u64, UserSelection>,
    /// Whether a load is currently in flight.
    pub loading: bool,
    /// Progress of the initial import.
    pub first_load: FirstLoad,
}
