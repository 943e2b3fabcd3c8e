//! Universes of selectable filter values.
//!
//! The filter form offers a fixed set of choices per dimension, and the
//! evaluator needs those universes to tell a meaningful restriction apart
//! from an "everything selected" no-op. These tables are the engine-side
//! counterpart of the data the form renders its tag selectors from.

/// Priority a game carries when the user never prioritized it.
pub const UNPRIORITIZED: i32 = -1;

/// Selectable priority values: unprioritized plus ranks 1 (highest) to 5.
pub const PRIORITY_CHOICES: [i32; 6] = [UNPRIORITIZED, 1, 2, 3, 4, 5];

/// Exhibit hall codes; booth locations are printed as `<hall>-<booth>`.
pub const HALL_CODES: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Seen-flag choices: `0` = not seen, `1` = seen.
pub const SEEN_CHOICES: [u8; 2] = [0, 1];

/// Availability statuses a preview item can carry.
pub const AVAILABILITY_STATUSES: [&str; 3] = ["forsale", "preorder", "demo"];
