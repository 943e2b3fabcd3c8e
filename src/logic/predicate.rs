//! Pure boolean tests shared by the filter evaluator.

use std::collections::BTreeSet;

use crate::catalog;
use crate::state::UserSelection;

/// What: Case-insensitive substring match of `term_lower` within `text`.
///
/// Inputs:
/// - `text`: Candidate text (any case)
/// - `term_lower`: Search term, already lowercased by the caller
///
/// Output:
/// - `true` when the term occurs in the lowercased candidate; an empty term
///   matches everything.
#[must_use]
pub fn text_matches(text: &str, term_lower: &str) -> bool {
    text.to_lowercase().contains(term_lower)
}

/// What: Decide whether a selection set actually restricts its dimension.
///
/// Inputs:
/// - `selected`: Values chosen in the filter form
/// - `universe`: Number of values the form offers for this dimension
///
/// Output:
/// - `true` only for a non-empty proper subset; empty and "all selected"
///   are both pass-through.
#[must_use]
pub fn restricts<T: Ord>(selected: &BTreeSet<T>, universe: usize) -> bool {
    !selected.is_empty() && selected.len() < universe
}

/// Effective priority of a game given its overlay entry, defaulting to
/// [`catalog::UNPRIORITIZED`] when the user never touched it.
#[must_use]
pub fn priority_of(selection: Option<&UserSelection>) -> i32 {
    selection.map_or(catalog::UNPRIORITIZED, |s| s.priority)
}

/// What: Test a booth location against the selected halls.
///
/// Inputs:
/// - `halls`: Selected hall codes (uppercase letters)
/// - `location`: Location string of the form `<hall>-<booth>`
///
/// Output:
/// - `true` when the leading character, uppercased, is a selected hall and
///   is followed by the `-` separator.
#[must_use]
pub fn hall_matches(halls: &BTreeSet<char>, location: &str) -> bool {
    let mut chars = location.chars();
    let Some(hall) = chars.next() else {
        return false;
    };
    chars.next() == Some('-') && halls.contains(&hall.to_ascii_uppercase())
}

/// What: Scan overlay notes for the serialized seen marker.
///
/// Inputs:
/// - `notes`: Raw notes text; the note editor embeds a `"seen"` key in the
///   document it serializes here
///
/// Output:
/// - `true` when a `"seen":` key is followed by `true`, allowing at most
///   one filler character (typically a space) between colon and value.
#[must_use]
pub fn notes_marked_seen(notes: &str) -> bool {
    const KEY: &str = "\"seen\":";
    let mut rest = notes;
    while let Some(at) = rest.find(KEY) {
        let tail = &rest[at + KEY.len()..];
        if tail.starts_with("true") {
            return true;
        }
        let mut chars = tail.chars();
        if chars.next().is_some() && chars.as_str().starts_with("true") {
            return true;
        }
        rest = tail;
    }
    false
}
