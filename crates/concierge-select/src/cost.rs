// Copyright (c) 2025 the Concierge authors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Travel Cost Model
//!
//! The travel metric between rooms: one unit per step of in-floor distance,
//! two units per floor of vertical distance. Aggregate cost for a room block
//! is the path cost along the block's **canonical order** (floor ascending,
//! then position ascending): sort, then sum pairwise costs of consecutive
//! rooms. The canonical order, not the arrival order of the input, defines
//! which rooms count as consecutive, which makes the aggregate invariant to
//! input permutation.
//!
//! Note that this is deliberately a path cost along the sorted sequence and
//! not an all-pairs or spanning-tree metric; downstream consumers render the
//! exact breakdown, so the definition is part of the output contract.

use crate::num::SelectNumeric;
use concierge_model::room::Room;

/// Cost weight per unit of in-floor (horizontal) distance.
pub const HORIZONTAL_WEIGHT: u32 = 1;

/// Cost weight per floor of vertical distance.
pub const VERTICAL_WEIGHT: u32 = 2;

#[inline]
fn widen<T: SelectNumeric>(value: u32) -> T {
    T::from_u32(value)
        .unwrap_or_else(|| panic!("travel cost component {} does not fit the numeric type", value))
}

/// A travel cost split into its horizontal and vertical components.
///
/// The total is always `horizontal + vertical`; it is computed on demand
/// rather than stored so the two components can never drift out of sync.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TravelTime<T> {
    horizontal: T,
    vertical: T,
}

impl<T> TravelTime<T>
where
    T: SelectNumeric,
{
    /// The zero cost, as carried by empty and single-room blocks.
    #[inline]
    pub fn zero() -> Self {
        Self {
            horizontal: T::zero(),
            vertical: T::zero(),
        }
    }

    /// Computes the pairwise travel cost between two rooms.
    ///
    /// Symmetric in its arguments, and zero exactly when both rooms share a
    /// floor and a position (i.e., are the same room, ids being unique).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use concierge_model::room::Room;
    /// use concierge_select::cost::TravelTime;
    ///
    /// let a = Room::new(1, 2);
    /// let b = Room::new(3, 5);
    /// let cost: TravelTime<i64> = TravelTime::between(&a, &b);
    /// assert_eq!(cost.horizontal(), 3); // |2 - 5| * 1
    /// assert_eq!(cost.vertical(), 4);   // |1 - 3| * 2
    /// assert_eq!(cost.total(), 7);
    /// ```
    pub fn between(a: &Room, b: &Room) -> Self {
        let horizontal = a.position().abs_diff(b.position()) * HORIZONTAL_WEIGHT;
        let vertical = a.floor().abs_diff(b.floor()) * VERTICAL_WEIGHT;

        Self {
            horizontal: widen(horizontal),
            vertical: widen(vertical),
        }
    }

    /// Computes the aggregate travel cost of a room block.
    ///
    /// Zero for fewer than two rooms. Otherwise the block is sorted into
    /// canonical order and the pairwise costs of consecutive rooms in that
    /// order are summed. The input order of `rooms` therefore does not
    /// matter.
    pub fn along_route(rooms: &[Room]) -> Self {
        if rooms.len() < 2 {
            return Self::zero();
        }

        let mut sorted: Vec<Room> = rooms.to_vec();
        sorted.sort_unstable_by_key(Room::canonical_key);

        let mut cost = Self::zero();
        for pair in sorted.windows(2) {
            let leg = Self::between(&pair[0], &pair[1]);
            cost.horizontal = cost.horizontal + leg.horizontal;
            cost.vertical = cost.vertical + leg.vertical;
        }
        cost
    }

    /// Returns the horizontal component.
    #[inline]
    pub fn horizontal(&self) -> T {
        self.horizontal
    }

    /// Returns the vertical component.
    #[inline]
    pub fn vertical(&self) -> T {
        self.vertical
    }

    /// Returns the total cost (`horizontal + vertical`).
    #[inline]
    pub fn total(&self) -> T {
        self.horizontal + self.vertical
    }
}

impl<T> std::fmt::Display for TravelTime<T>
where
    T: SelectNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (horizontal {}, vertical {})",
            self.total(),
            self.horizontal,
            self.vertical
        )
    }
}
