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

//! # Strongly Typed Room Index (Zero-Cost)
//!
//! A transparent wrapper around `usize` identifying a room by its position
//! in the hotel pool. Using a dedicated type instead of a raw `usize` keeps
//! pool positions from being confused with room numbers, floor numbers, or
//! room ids, all of which are small integers in this domain.

/// A strongly typed index into the hotel's room pool.
///
/// # Examples
///
/// ```rust
/// use concierge_model::index::RoomIndex;
///
/// let idx = RoomIndex::new(5);
/// assert_eq!(idx.get(), 5);
/// assert_eq!(format!("{}", idx), "RoomIndex(5)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomIndex {
    index: usize,
}

impl RoomIndex {
    /// Creates a new `RoomIndex` for the given pool position.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Returns the underlying `usize` pool position.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }
}

impl std::fmt::Debug for RoomIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RoomIndex({})", self.index)
    }
}

impl std::fmt::Display for RoomIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RoomIndex({})", self.index)
    }
}

impl From<usize> for RoomIndex {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<RoomIndex> for usize {
    fn from(index: RoomIndex) -> Self {
        index.index
    }
}
