//! Run and group validity.
//!
//! Both checks are order-insensitive: the submitted tiles are sorted by
//! number before gaps are measured, so `[r3 j r1]` is judged the same as
//! `[r1 j r3]`.
//!
//! ## Runs
//!
//! Three or more tiles of one color with consecutive numbers. Jokers fill
//! gaps between the numbered tiles or extend either end. Duplicate numbers
//! are never a run, and a run cannot leave 1..=13, which (once the gaps are
//! covered) is the same as having at most 13 tiles.
//!
//! ## Groups
//!
//! Three or four tiles sharing a number, no color repeated; jokers stand in
//! for missing colors. A 3-4 tile same-color block of strictly consecutive
//! numbers also counts as a group, but there jokers only pad the length
//! and never bridge a gap.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::tile::{Color, Tile, MAX_NUMBER};

/// Minimum tiles in any meld.
pub const MIN_MELD_LEN: usize = 3;

/// Maximum tiles in a group.
pub const MAX_GROUP_LEN: usize = 4;

/// Maximum tiles in a run (1 through 13).
pub const MAX_RUN_LEN: usize = MAX_NUMBER as usize;

/// Which rule a meld satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    /// Same color, consecutive numbers.
    Run,
    /// Same number, distinct colors.
    Group,
}

type Numbered = SmallVec<[(Color, u8); MAX_RUN_LEN]>;

/// Numbered tiles as (color, number) pairs; jokers are dropped.
fn numbered(tiles: &[Tile]) -> Numbered {
    tiles
        .iter()
        .filter_map(|tile| match *tile {
            Tile::Number { color, number } => Some((color, number)),
            Tile::Joker => None,
        })
        .collect()
}

fn single_color(numbered: &[(Color, u8)]) -> bool {
    numbered.windows(2).all(|pair| pair[0].0 == pair[1].0)
}

/// Check whether `tiles` form a valid run.
#[must_use]
pub fn is_valid_run(tiles: &[Tile]) -> bool {
    if !(MIN_MELD_LEN..=MAX_RUN_LEN).contains(&tiles.len()) {
        return false;
    }

    let mut numbered = numbered(tiles);
    let jokers = tiles.len() - numbered.len();

    if numbered.is_empty() || !single_color(&numbered) {
        return false;
    }

    numbered.sort_unstable_by_key(|&(_, number)| number);

    let mut gaps = 0usize;
    for pair in numbered.windows(2) {
        let (prev, next) = (pair[0].1, pair[1].1);
        if next == prev {
            return false;
        }
        gaps += usize::from(next - prev - 1);
    }

    gaps <= jokers
}

/// Check whether `tiles` form a valid group.
#[must_use]
pub fn is_valid_group(tiles: &[Tile]) -> bool {
    if !(MIN_MELD_LEN..=MAX_GROUP_LEN).contains(&tiles.len()) {
        return false;
    }

    let mut numbered = numbered(tiles);
    let Some(&(first_color, first_number)) = numbered.first() else {
        return false;
    };

    if numbered.iter().all(|&(_, number)| number == first_number) {
        let mut colors: SmallVec<[Color; MAX_GROUP_LEN]> =
            numbered.iter().map(|&(color, _)| color).collect();
        colors.sort_unstable();
        colors.dedup();
        return colors.len() == numbered.len();
    }

    if numbered.iter().all(|&(color, _)| color == first_color) {
        numbered.sort_unstable_by_key(|&(_, number)| number);
        return numbered
            .windows(2)
            .all(|pair| pair[1].1 == pair[0].1 + 1);
    }

    false
}

/// Check whether `tiles` form a valid run or group.
#[must_use]
pub fn is_valid_meld(tiles: &[Tile]) -> bool {
    classify(tiles).is_some()
}

/// Which rule `tiles` satisfy, preferring `Run` when both hold.
#[must_use]
pub fn classify(tiles: &[Tile]) -> Option<MeldKind> {
    if is_valid_run(tiles) {
        Some(MeldKind::Run)
    } else if is_valid_group(tiles) {
        Some(MeldKind::Group)
    } else {
        None
    }
}
