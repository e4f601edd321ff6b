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

/// Statistics collected during a selection call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStatistics {
    /// Number of candidate combinations scored.
    ///
    /// For single-room requests this reports the number of available rooms
    /// (every singleton is a candidate, even though cost comparison is
    /// moot); for rejected requests it is zero.
    pub combinations_evaluated: u64,
    /// Number of rooms that were available when the snapshot was taken.
    pub available_rooms: usize,
    /// Total duration of the selection call.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SelectionStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Selection Statistics:")?;
        writeln!(
            f,
            "  Combinations Evaluated: {}",
            self.combinations_evaluated
        )?;
        writeln!(f, "  Available Rooms: {}", self.available_rooms)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SelectionStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStatisticsBuilder {
    combinations_evaluated: u64,
    available_rooms: usize,
    solve_duration: std::time::Duration,
}

impl Default for SelectionStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStatisticsBuilder {
    /// Creates a new `SelectionStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            combinations_evaluated: 0,
            available_rooms: 0,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of combinations scored.
    #[inline]
    pub fn combinations_evaluated(mut self, combinations_evaluated: u64) -> Self {
        self.combinations_evaluated = combinations_evaluated;
        self
    }

    /// Sets the number of available rooms at snapshot time.
    #[inline]
    pub fn available_rooms(mut self, available_rooms: usize) -> Self {
        self.available_rooms = available_rooms;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SelectionStatistics` instance.
    #[inline]
    pub fn build(self) -> SelectionStatistics {
        SelectionStatistics {
            combinations_evaluated: self.combinations_evaluated,
            available_rooms: self.available_rooms,
            solve_duration: self.solve_duration,
        }
    }
}
