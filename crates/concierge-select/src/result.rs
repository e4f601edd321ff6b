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

use crate::{cost::TravelTime, num::SelectNumeric, stats::SelectionStatistics};
use concierge_model::room::Room;

/// Why a selection request was turned down.
///
/// Every variant is a reported, recoverable condition: the engine never
/// panics for these, it returns them as values and lets the caller decide
/// the user-facing presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// The requested block size is zero or above the request cap.
    InvalidRequestSize { requested: usize, max: usize },
    /// Fewer rooms are available than were requested.
    InsufficientAvailability { requested: usize, available: usize },
    /// Enumeration produced no candidate despite the availability check
    /// passing. Guards against an inconsistent pool; should not occur.
    NoValidCombination,
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::InvalidRequestSize { requested, max } => write!(
                f,
                "Cannot book {} room(s): requests must be between 1 and {}.",
                requested, max
            ),
            RejectionReason::InsufficientAvailability {
                requested,
                available,
            } => write!(
                f,
                "Only {} room(s) available. Cannot book {} rooms.",
                available, requested
            ),
            RejectionReason::NoValidCombination => {
                write!(f, "No valid room combinations found.")
            }
        }
    }
}

/// An accepted selection: the optimal room block and its cost breakdown.
///
/// Invariant: `rooms` is non-empty, canonically sorted (floor ascending,
/// then position ascending), and its total cost is minimal over every block
/// of the same size drawn from the available set at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    rooms: Vec<Room>,
    travel_time: TravelTime<T>,
    next_best_total: T,
}

impl<T> Selection<T>
where
    T: SelectNumeric,
{
    /// Constructs a new `Selection`.
    ///
    /// # Panics
    ///
    /// Panics if `rooms` is empty or not in canonical order.
    pub fn new(rooms: Vec<Room>, travel_time: TravelTime<T>, next_best_total: T) -> Self {
        assert!(
            !rooms.is_empty(),
            "called `Selection::new` with an empty room block"
        );
        assert!(
            rooms.windows(2).all(|p| p[0].canonical_key() < p[1].canonical_key()),
            "called `Selection::new` with rooms not in canonical (floor, position) order"
        );

        Self {
            rooms,
            travel_time,
            next_best_total,
        }
    }

    /// The selected rooms, in canonical order.
    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The ids of the selected rooms, in canonical order.
    pub fn room_ids(&self) -> Vec<u32> {
        self.rooms.iter().map(Room::id).collect()
    }

    /// The cost breakdown of the selected block.
    #[inline]
    pub fn travel_time(&self) -> TravelTime<T> {
        self.travel_time
    }

    /// The total cost of the runner-up candidate under the engine's total
    /// order. Equals the winning total when there was only one candidate.
    #[inline]
    pub fn next_best_total(&self) -> T {
        self.next_best_total
    }
}

/// The outcome of scoring a selection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult<T> {
    /// The request was satisfied with a proven-optimal block.
    Selected(Selection<T>),
    /// The request could not be satisfied; no rooms are selected.
    Rejected(RejectionReason),
}

impl<T> std::fmt::Display for SelectionResult<T>
where
    T: SelectNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionResult::Selected(selection) => {
                write!(
                    f,
                    "Selected(rooms={:?}, travel_time={})",
                    selection.room_ids(),
                    selection.travel_time()
                )
            }
            SelectionResult::Rejected(reason) => write!(f, "Rejected: {}", reason),
        }
    }
}

/// A `SelectionResult` together with the statistics of the call that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutcome<T> {
    result: SelectionResult<T>,
    statistics: SelectionStatistics,
}

impl<T> SelectionOutcome<T>
where
    T: SelectNumeric,
{
    /// Wraps an accepted selection.
    #[inline]
    pub fn selected(selection: Selection<T>, statistics: SelectionStatistics) -> Self {
        Self {
            result: SelectionResult::Selected(selection),
            statistics,
        }
    }

    /// Wraps a rejection.
    #[inline]
    pub fn rejected(reason: RejectionReason, statistics: SelectionStatistics) -> Self {
        Self {
            result: SelectionResult::Rejected(reason),
            statistics,
        }
    }

    #[inline]
    pub fn result(&self) -> &SelectionResult<T> {
        &self.result
    }

    #[inline]
    pub fn statistics(&self) -> &SelectionStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        matches!(self.result, SelectionResult::Selected(_))
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self.result, SelectionResult::Rejected(_))
    }

    /// The selection, if the request was satisfied.
    #[inline]
    pub fn selection(&self) -> Option<&Selection<T>> {
        match &self.result {
            SelectionResult::Selected(selection) => Some(selection),
            SelectionResult::Rejected(_) => None,
        }
    }

    /// The rejection reason, if the request was turned down.
    #[inline]
    pub fn rejection(&self) -> Option<&RejectionReason> {
        match &self.result {
            SelectionResult::Selected(_) => None,
            SelectionResult::Rejected(reason) => Some(reason),
        }
    }
}

impl<T> std::fmt::Display for SelectionOutcome<T>
where
    T: SelectNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.result)?;
        write!(f, "{}", self.statistics)
    }
}
