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

//! # Concierge Model
//!
//! **The Core Domain Model for the Concierge Room-Block Selector.**
//!
//! This crate defines the data structures describing a hotel and its rooms.
//! It serves as the data interchange layer between the caller (which owns the
//! pool and commits bookings) and the selection engine (`concierge_select`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **selection**:
//!
//! * **`index`**: A strongly-typed room index (`RoomIndex`) to prevent
//!   logical indexing errors against the pool.
//! * **`room`**: The `Room` record: immutable identity (floor, in-floor
//!   position, derived id) plus the single mutable `booked` flag.
//! * **`hotel`**: The `Hotel` pool (immutable layout, mutable occupancy) and
//!   the `HotelBuilder` used to construct and validate it.
//! * **`occupancy`**: Seedable random-occupancy assignment for demos and
//!   tests.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: The builder validates floors, positions, and uniqueness
//!     eagerly, so the selection engine never encounters an invalid pool.
//! 2.  **Caller-Owned Mutation**: The selection engine only ever reads the
//!     pool. Booking flags are flipped here, by the caller's workflow, after
//!     a selection returns.

pub mod hotel;
pub mod index;
pub mod occupancy;
pub mod room;
