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

//! # The Hotel Pool
//!
//! The ordered collection of all rooms, plus the booking operations the
//! caller's workflow applies after a selection returns. The pool layout
//! (which rooms exist, and in what order) is fixed at construction through
//! `HotelBuilder`; only the `booked` flags change afterwards.
//!
//! The selection engine receives the pool by shared reference and never
//! mutates it. If an embedding system handles concurrent booking requests,
//! it must serialize read-snapshot, select, and commit itself; the pool
//! offers no locking of its own.

use crate::{index::RoomIndex, room::Room};
use std::collections::HashSet;

/// The hotel: an ordered, fixed-layout pool of rooms with mutable occupancy.
///
/// Room ids are unique across the pool (enforced by [`HotelBuilder`]).
/// Pool order is insertion order and defines the enumeration order the
/// selection engine sees; for [`Hotel::standard`] this is ascending id order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hotel {
    rooms: Vec<Room>,
}

impl Hotel {
    /// The standard 97-room layout: floors 1 through 9 with ten rooms each
    /// (ids 101..=110 up to 901..=910) and floor 10 with seven rooms
    /// (1001..=1007). All rooms start unbooked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use concierge_model::hotel::Hotel;
    ///
    /// let hotel = Hotel::standard();
    /// assert_eq!(hotel.num_rooms(), 97);
    /// assert_eq!(hotel.num_available(), 97);
    /// ```
    pub fn standard() -> Self {
        let mut builder = HotelBuilder::new();
        for floor in 1..=9 {
            for position in 1..=10 {
                builder.push_room(floor, position);
            }
        }
        for position in 1..=7 {
            builder.push_room(10, position);
        }
        builder.build()
    }

    /// Builds the standard layout with every room booked except those whose
    /// ids appear in `available_ids`. Ids that do not exist in the standard
    /// layout are ignored.
    ///
    /// Useful for reproducing fixed occupancy scenarios.
    pub fn with_only_available(available_ids: &[u32]) -> Self {
        let mut hotel = Self::standard();
        hotel.book_all();
        for &id in available_ids {
            hotel.set_booked_by_id(id, false);
        }
        hotel
    }

    /// Returns the total number of rooms in the pool.
    #[inline]
    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }

    /// Returns all rooms in pool order.
    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Returns the room at the given pool index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn room(&self, index: RoomIndex) -> &Room {
        &self.rooms[index.get()]
    }

    /// Returns the pool index of the room with the given id, if present.
    pub fn find_by_id(&self, id: u32) -> Option<RoomIndex> {
        self.rooms
            .iter()
            .position(|room| room.id() == id)
            .map(RoomIndex::new)
    }

    /// Returns copies of all unbooked rooms, in pool order.
    ///
    /// This is the snapshot the selection engine works against; mutating the
    /// pool afterwards does not affect a selection already in flight.
    pub fn available_rooms(&self) -> Vec<Room> {
        self.rooms
            .iter()
            .filter(|room| !room.is_booked())
            .copied()
            .collect()
    }

    /// Returns the number of unbooked rooms.
    #[inline]
    pub fn num_available(&self) -> usize {
        self.rooms.iter().filter(|room| !room.is_booked()).count()
    }

    /// Sets the booked flag of the room at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn set_booked(&mut self, index: RoomIndex, booked: bool) {
        self.rooms[index.get()].set_booked(booked);
    }

    /// Marks the room at `index` as booked.
    #[inline]
    pub fn book(&mut self, index: RoomIndex) {
        self.set_booked(index, true);
    }

    /// Marks the room at `index` as available again.
    #[inline]
    pub fn release(&mut self, index: RoomIndex) {
        self.set_booked(index, false);
    }

    /// Sets the booked flag of the room with the given id.
    ///
    /// Returns `false` (and changes nothing) if no room has that id.
    pub fn set_booked_by_id(&mut self, id: u32, booked: bool) -> bool {
        match self.find_by_id(id) {
            Some(index) => {
                self.set_booked(index, booked);
                true
            }
            None => false,
        }
    }

    /// Marks every room as booked.
    pub fn book_all(&mut self) {
        for room in &mut self.rooms {
            room.set_booked(true);
        }
    }

    /// Clears every booking, returning the pool to fully available.
    pub fn reset(&mut self) {
        for room in &mut self.rooms {
            room.set_booked(false);
        }
    }
}

impl std::fmt::Display for Hotel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Hotel: {} rooms, {} available",
            self.num_rooms(),
            self.num_available()
        )?;

        let mut floors: Vec<u32> = self.rooms.iter().map(|r| r.floor()).collect();
        floors.sort_unstable();
        floors.dedup();

        for floor in floors {
            let on_floor: Vec<&Room> =
                self.rooms.iter().filter(|r| r.floor() == floor).collect();
            let free = on_floor.iter().filter(|r| !r.is_booked()).count();
            writeln!(
                f,
                "   Floor {:>2}: {:>2} rooms, {:>2} free",
                floor,
                on_floor.len(),
                free
            )?;
        }

        Ok(())
    }
}

/// Builder for [`Hotel`].
///
/// Validates eagerly: floors and positions must be positive, positions must
/// fit the two-digit id scheme, and `(floor, position)` pairs must be unique
/// across the pool. The selection engine can therefore assume unique ids.
#[derive(Clone, Debug, Default)]
pub struct HotelBuilder {
    rooms: Vec<Room>,
    seen: HashSet<(u32, u32)>,
}

impl HotelBuilder {
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self {
            rooms: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Appends a room, returning the pool index it will occupy.
    ///
    /// # Panics
    ///
    /// Panics if `floor`/`position` are invalid (see [`Room::new`]) or if a
    /// room at `(floor, position)` was already added.
    pub fn push_room(&mut self, floor: u32, position: u32) -> RoomIndex {
        let room = Room::new(floor, position);
        assert!(
            self.seen.insert((floor, position)),
            "called `HotelBuilder::push_room` with duplicate room: floor {} position {} was already added",
            floor,
            position
        );

        let index = RoomIndex::new(self.rooms.len());
        self.rooms.push(room);
        index
    }

    /// Finalizes the pool.
    #[inline]
    pub fn build(self) -> Hotel {
        Hotel { rooms: self.rooms }
    }
}
