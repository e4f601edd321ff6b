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

/// A single bookable room.
///
/// Identity is the pair `(floor, position)`; the public-facing `id` is
/// derived from it as `floor * 100 + position` (room 3 on floor 2 is `203`,
/// room 7 on floor 10 is `1007`) and never changes after construction. The
/// only mutable state is the `booked` flag, and that is flipped exclusively
/// through [`Hotel`](crate::hotel::Hotel) by the caller's booking workflow;
/// the selection engine treats rooms as read-only.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Room {
    id: u32,
    floor: u32,
    position: u32,
    booked: bool,
}

impl Room {
    /// Creates a new, unbooked room on the given floor at the given
    /// in-floor position.
    ///
    /// # Panics
    ///
    /// Panics if `floor` is zero, or if `position` is outside `1..=99`.
    /// The upper bound keeps the derived id scheme injective: with two-digit
    /// positions, no two `(floor, position)` pairs share an id.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use concierge_model::room::Room;
    ///
    /// let room = Room::new(2, 3);
    /// assert_eq!(room.id(), 203);
    /// assert!(!room.is_booked());
    /// ```
    pub fn new(floor: u32, position: u32) -> Self {
        assert!(
            floor >= 1,
            "called `Room::new` with invalid floor: floors are numbered from 1, got {}",
            floor
        );
        assert!(
            (1..=99).contains(&position),
            "called `Room::new` with invalid position: positions must lie in 1..=99, got {}",
            position
        );

        Self {
            id: floor * 100 + position,
            floor,
            position,
            booked: false,
        }
    }

    /// Returns the derived room id (`floor * 100 + position`).
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the floor this room is on.
    #[inline]
    pub fn floor(&self) -> u32 {
        self.floor
    }

    /// Returns the in-floor position of this room.
    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Returns whether this room is currently booked.
    #[inline]
    pub fn is_booked(&self) -> bool {
        self.booked
    }

    /// Returns the canonical sort key `(floor, position)`.
    ///
    /// Canonical order (floor ascending, then position ascending) is the
    /// ordering the selection engine uses both for aggregating travel cost
    /// along a room block and for deterministic tie-breaking.
    #[inline]
    pub fn canonical_key(&self) -> (u32, u32) {
        (self.floor, self.position)
    }

    #[inline]
    pub(crate) fn set_booked(&mut self, booked: bool) {
        self.booked = booked;
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.booked { "booked" } else { "free" };
        write!(f, "Room {} ({})", self.id, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_derivation() {
        assert_eq!(Room::new(1, 1).id(), 101);
        assert_eq!(Room::new(9, 10).id(), 910);
        // Floor 10 continues the same scheme: 1001..=1007.
        assert_eq!(Room::new(10, 7).id(), 1007);
    }

    #[test]
    fn test_new_rooms_start_unbooked() {
        let room = Room::new(3, 4);
        assert!(!room.is_booked());
    }

    #[test]
    #[should_panic(expected = "called `Room::new` with invalid floor")]
    fn test_zero_floor_panics() {
        let _ = Room::new(0, 1);
    }

    #[test]
    #[should_panic(expected = "called `Room::new` with invalid position")]
    fn test_zero_position_panics() {
        let _ = Room::new(1, 0);
    }

    #[test]
    #[should_panic(expected = "called `Room::new` with invalid position")]
    fn test_three_digit_position_panics() {
        // Position 100 would collide with position 0 on the next floor.
        let _ = Room::new(1, 100);
    }

    #[test]
    fn test_canonical_key_sorts_floor_first() {
        let low = Room::new(1, 9);
        let high = Room::new(2, 1);
        assert!(low.canonical_key() < high.canonical_key());
    }

    #[test]
    fn test_display() {
        let mut room = Room::new(2, 5);
        assert_eq!(format!("{}", room), "Room 205 (free)");
        room.set_booked(true);
        assert_eq!(format!("{}", room), "Room 205 (booked)");
    }
}
