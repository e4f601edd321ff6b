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

//! # The Exhaustive Optimal Selector
//!
//! Scores every candidate block and returns the global minimum with a
//! deterministic tie-break. Exhaustive evaluation is chosen over greedy
//! construction deliberately: the domain requires a *provable* optimum over
//! a small, bounded search space (requests are capped at five rooms), and
//! greedy nearest-insertion can lock itself into a worse arrangement (the
//! test module constructs such an instance).
//!
//! ## Tie-break
//!
//! Whenever several candidates share the minimum total cost, the winner is
//! the lexicographically smallest canonically-sorted room sequence: lower
//! floor first, then lower position, element by element. Because room ids
//! are unique this is a total order over candidate blocks, so the winner is
//! fully determined by the pool's availability alone.
//!
//! The implementation gets this for free: the available snapshot is sorted
//! canonically before enumeration, and `Combinations` yields index subsets
//! in lexicographic order, so the first candidate reaching the minimum total
//! *is* the tie-break winner and strict-improvement tracking suffices.
//!
//! ## Purity
//!
//! `select` takes the pool by shared reference, snapshots availability once,
//! and has no side effects. Calling it twice on an unmutated pool yields an
//! identical result. Committing the returned block (flipping booked flags)
//! is the caller's responsibility, as is serializing snapshot-select-commit
//! if multiple actors book concurrently.

use crate::{
    combinations::Combinations,
    cost::TravelTime,
    num::SelectNumeric,
    result::{RejectionReason, Selection, SelectionOutcome},
    stats::{SelectionStatistics, SelectionStatisticsBuilder},
};
use concierge_model::{hotel::Hotel, room::Room};
use std::time::Instant;

/// The system-wide cap on block size. Keeps C(available, k) tractable for
/// realistic pools (for the 97-room standard layout the worst case is
/// C(97, 5), about 64 million candidates).
pub const MAX_REQUEST_SIZE: usize = 5;

/// Selects a room block with the globally minimal travel cost.
///
/// Stateless apart from its configured request cap; one value can serve any
/// number of selection calls against any number of pools.
///
/// # Examples
///
/// ```rust
/// use concierge_model::hotel::Hotel;
/// use concierge_select::selector::OptimalSelector;
///
/// let hotel = Hotel::standard();
/// let outcome = OptimalSelector::new().select::<i64>(&hotel, 3);
///
/// let selection = outcome.selection().unwrap();
/// assert_eq!(selection.room_ids(), vec![101, 102, 103]);
/// assert_eq!(selection.travel_time().total(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalSelector {
    max_request: usize,
}

impl Default for OptimalSelector {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl OptimalSelector {
    /// Creates a selector with the standard request cap of
    /// [`MAX_REQUEST_SIZE`] rooms.
    #[inline]
    pub fn new() -> Self {
        Self {
            max_request: MAX_REQUEST_SIZE,
        }
    }

    /// Creates a selector with a custom request cap.
    ///
    /// # Panics
    ///
    /// Panics if `max_request` is zero.
    pub fn with_max_request(max_request: usize) -> Self {
        assert!(
            max_request >= 1,
            "called `OptimalSelector::with_max_request` with a zero cap"
        );
        Self { max_request }
    }

    /// Returns the configured request cap.
    #[inline]
    pub fn max_request(&self) -> usize {
        self.max_request
    }

    /// Selects the optimal block of `requested` rooms from the pool's
    /// currently available rooms.
    ///
    /// Returns a rejected outcome (never panics) when the request size is
    /// out of range or availability is insufficient; see
    /// [`RejectionReason`]. For a single-room request the first available
    /// room in pool order is returned with zero cost.
    pub fn select<T>(&self, hotel: &Hotel, requested: usize) -> SelectionOutcome<T>
    where
        T: SelectNumeric,
    {
        let start = Instant::now();
        let available = hotel.available_rooms();

        if requested == 0 || requested > self.max_request {
            return SelectionOutcome::rejected(
                RejectionReason::InvalidRequestSize {
                    requested,
                    max: self.max_request,
                },
                build_statistics(0, available.len(), start),
            );
        }

        if available.len() < requested {
            return SelectionOutcome::rejected(
                RejectionReason::InsufficientAvailability {
                    requested,
                    available: available.len(),
                },
                build_statistics(0, available.len(), start),
            );
        }

        if requested == 1 {
            // Pool order, not canonical order: the first free room wins.
            // Every singleton counts as an evaluated candidate by convention.
            let selection = Selection::new(vec![available[0]], TravelTime::zero(), T::zero());
            return SelectionOutcome::selected(
                selection,
                build_statistics(available.len() as u64, available.len(), start),
            );
        }

        // Canonical pre-sort: from here on, index order is canonical order,
        // every candidate materializes already sorted, and lexicographic
        // index enumeration doubles as the tie-break order.
        let mut pool = available;
        pool.sort_unstable_by_key(Room::canonical_key);
        let num_available = pool.len();

        let mut evaluated: u64 = 0;
        let mut best: Option<(T, Vec<usize>)> = None;
        let mut runner_up_total: Option<T> = None;
        let mut block: Vec<Room> = Vec::with_capacity(requested);

        for candidate in Combinations::new(num_available, requested) {
            evaluated += 1;

            block.clear();
            block.extend(candidate.iter().map(|&i| pool[i]));
            let total = TravelTime::<T>::along_route(&block).total();

            match &mut best {
                None => best = Some((total, candidate)),
                Some((best_total, best_indices)) if total < *best_total => {
                    // The dethroned incumbent is the new runner-up: its
                    // total was the second-smallest seen so far.
                    runner_up_total = Some(*best_total);
                    *best_total = total;
                    *best_indices = candidate;
                }
                Some(_) => {
                    // Ties keep the incumbent: it came earlier in the
                    // enumeration and is therefore lexicographically smaller.
                    if runner_up_total.is_none_or(|second| total < second) {
                        runner_up_total = Some(total);
                    }
                }
            }
        }

        let Some((best_total, best_indices)) = best else {
            // Unreachable if the availability check passed; guards against
            // an inconsistent pool.
            return SelectionOutcome::rejected(
                RejectionReason::NoValidCombination,
                build_statistics(evaluated, num_available, start),
            );
        };

        let rooms: Vec<Room> = best_indices.iter().map(|&i| pool[i]).collect();
        let travel_time = TravelTime::along_route(&rooms);
        let next_best_total = runner_up_total.unwrap_or(best_total);

        SelectionOutcome::selected(
            Selection::new(rooms, travel_time, next_best_total),
            build_statistics(evaluated, num_available, start),
        )
    }
}

/// Selects with the standard request cap; shorthand for one-off calls.
#[inline]
pub fn select_optimal<T>(hotel: &Hotel, requested: usize) -> SelectionOutcome<T>
where
    T: SelectNumeric,
{
    OptimalSelector::new().select(hotel, requested)
}

fn build_statistics(
    combinations_evaluated: u64,
    available_rooms: usize,
    start: Instant,
) -> SelectionStatistics {
    SelectionStatisticsBuilder::new()
        .combinations_evaluated(combinations_evaluated)
        .available_rooms(available_rooms)
        .solve_duration(start.elapsed())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_model::{hotel::HotelBuilder, occupancy::randomize_occupancy};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    type Cost = i64;

    fn single_floor_hotel(num_rooms: u32) -> Hotel {
        let mut builder = HotelBuilder::new();
        for position in 1..=num_rooms {
            builder.push_room(1, position);
        }
        builder.build()
    }

    #[test]
    fn test_contiguous_block_on_a_single_floor() {
        // Ten free rooms on floor 1; the three lowest positions win.
        let hotel = single_floor_hotel(10);
        let outcome = select_optimal::<Cost>(&hotel, 3);

        let selection = outcome.selection().unwrap();
        assert_eq!(selection.room_ids(), vec![101, 102, 103]);
        assert_eq!(selection.travel_time().horizontal(), 2);
        assert_eq!(selection.travel_time().vertical(), 0);
        assert_eq!(selection.travel_time().total(), 2);

        // Every consecutive triple also costs 2; the runner-up ties.
        assert_eq!(selection.next_best_total(), 2);

        // C(10, 3) candidates were scored.
        assert_eq!(outcome.statistics().combinations_evaluated, 120);
        assert_eq!(outcome.statistics().available_rooms, 10);
    }

    #[test]
    fn test_fixed_occupancy_scenario() {
        // The classic mostly-booked pool: ten free rooms across three floors.
        let hotel = Hotel::with_only_available(&[
            101, 102, 105, 106, 201, 202, 203, 210, 301, 302,
        ]);
        let outcome = select_optimal::<Cost>(&hotel, 4);

        // 101 and 102 pair with the vertically adjacent 202 and 203: the
        // canonical route 101-102-202-203 has legs 1, 2, 1 (the 102-202 leg
        // is purely vertical), beating the same-floor 101-102-105-106 block
        // whose position gap costs 5.
        let selection = outcome.selection().unwrap();
        assert_eq!(selection.room_ids(), vec![101, 102, 202, 203]);
        assert_eq!(selection.travel_time().horizontal(), 2);
        assert_eq!(selection.travel_time().vertical(), 2);
        assert_eq!(selection.travel_time().total(), 4);

        // 101-201-202-203 also totals 4 but loses the tie on its second
        // room (floor 2 vs floor 1).
        assert_eq!(selection.next_best_total(), 4);

        assert_eq!(outcome.statistics().combinations_evaluated, 210); // C(10, 4)
    }

    #[test]
    fn test_insufficient_availability_is_rejected() {
        let hotel = Hotel::with_only_available(&[101, 102]);
        let outcome = select_optimal::<Cost>(&hotel, 3);

        assert_eq!(
            outcome.rejection(),
            Some(&RejectionReason::InsufficientAvailability {
                requested: 3,
                available: 2,
            })
        );
        assert_eq!(outcome.statistics().combinations_evaluated, 0);
        assert_eq!(outcome.statistics().available_rooms, 2);
    }

    #[test]
    fn test_request_above_cap_is_rejected() {
        let hotel = Hotel::standard();
        let outcome = select_optimal::<Cost>(&hotel, 6);

        assert_eq!(
            outcome.rejection(),
            Some(&RejectionReason::InvalidRequestSize {
                requested: 6,
                max: MAX_REQUEST_SIZE,
            })
        );
        assert_eq!(outcome.statistics().combinations_evaluated, 0);
    }

    #[test]
    fn test_zero_request_is_rejected() {
        let hotel = Hotel::standard();
        let outcome = select_optimal::<Cost>(&hotel, 0);

        assert!(matches!(
            outcome.rejection(),
            Some(&RejectionReason::InvalidRequestSize { requested: 0, .. })
        ));
        assert_eq!(outcome.statistics().combinations_evaluated, 0);
    }

    #[test]
    fn test_custom_request_cap() {
        let hotel = single_floor_hotel(8);
        let selector = OptimalSelector::with_max_request(6);

        let outcome = selector.select::<Cost>(&hotel, 6);
        let selection = outcome.selection().unwrap();
        assert_eq!(
            selection.room_ids(),
            vec![101, 102, 103, 104, 105, 106]
        );
        assert_eq!(selection.travel_time().total(), 5);
    }

    #[test]
    fn test_single_room_short_circuit() {
        let mut hotel = Hotel::standard();
        hotel.set_booked_by_id(101, true);

        let outcome = select_optimal::<Cost>(&hotel, 1);
        let selection = outcome.selection().unwrap();

        // First available room in pool order, at zero cost.
        assert_eq!(selection.room_ids(), vec![102]);
        assert_eq!(selection.travel_time().total(), 0);
        assert_eq!(selection.next_best_total(), 0);

        // Convention: every available singleton counts as evaluated.
        assert_eq!(outcome.statistics().combinations_evaluated, 96);
    }

    #[test]
    fn test_single_room_follows_pool_order_not_canonical_order() {
        // Pool order deliberately places floor 2 first.
        let mut builder = HotelBuilder::new();
        builder.push_room(2, 1);
        builder.push_room(1, 1);
        let hotel = builder.build();

        let outcome = select_optimal::<Cost>(&hotel, 1);
        assert_eq!(outcome.selection().unwrap().room_ids(), vec![201]);
    }

    #[test]
    fn test_tie_break_prefers_lower_floor_then_position() {
        // {101, 102} and {201, 202} both cost 1; the lower floor wins.
        let mut builder = HotelBuilder::new();
        builder.push_room(2, 1);
        builder.push_room(2, 2);
        builder.push_room(1, 1);
        builder.push_room(1, 2);
        let hotel = builder.build();

        let outcome = select_optimal::<Cost>(&hotel, 2);
        let selection = outcome.selection().unwrap();
        assert_eq!(selection.room_ids(), vec![101, 102]);
        assert_eq!(selection.travel_time().total(), 1);
        assert_eq!(selection.next_best_total(), 1);
    }

    #[test]
    fn test_next_best_reports_the_runner_up_total() {
        // Candidates: {1,2} costs 1, {2,4} costs 2, {1,4} costs 3.
        let mut builder = HotelBuilder::new();
        builder.push_room(1, 1);
        builder.push_room(1, 2);
        builder.push_room(1, 4);
        let hotel = builder.build();

        let selection_outcome = select_optimal::<Cost>(&hotel, 2);
        let selection = selection_outcome.selection().unwrap();
        assert_eq!(selection.room_ids(), vec![101, 102]);
        assert_eq!(selection.travel_time().total(), 1);
        assert_eq!(selection.next_best_total(), 2);
    }

    #[test]
    fn test_single_candidate_next_best_equals_winner() {
        let hotel = Hotel::with_only_available(&[101, 305]);
        let outcome = select_optimal::<Cost>(&hotel, 2);

        let selection = outcome.selection().unwrap();
        assert_eq!(outcome.statistics().combinations_evaluated, 1);
        assert_eq!(selection.travel_time().total(), 8); // h 4, v 4
        assert_eq!(selection.next_best_total(), 8);
    }

    #[test]
    fn test_winner_beats_every_candidate() {
        // Exhaustive-optimality property on a randomized pool.
        let mut hotel = Hotel::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        randomize_occupancy(&mut hotel, 0.7, &mut rng);

        let outcome = select_optimal::<Cost>(&hotel, 3);
        let winner_total = outcome.selection().unwrap().travel_time().total();

        let available = hotel.available_rooms();
        let mut candidates = 0u64;
        for subset in Combinations::new(available.len(), 3) {
            let block: Vec<_> = subset.iter().map(|&i| available[i]).collect();
            assert!(winner_total <= TravelTime::<Cost>::along_route(&block).total());
            candidates += 1;
        }
        assert_eq!(outcome.statistics().combinations_evaluated, candidates);
    }

    #[test]
    fn test_selection_is_idempotent_and_pure() {
        let mut hotel = Hotel::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        randomize_occupancy(&mut hotel, 0.4, &mut rng);

        let snapshot = hotel.clone();
        let first = select_optimal::<Cost>(&hotel, 4);
        let second = select_optimal::<Cost>(&hotel, 4);

        // The pool is untouched and both calls agree (durations aside).
        assert_eq!(hotel, snapshot);
        assert_eq!(first.result(), second.result());
        assert_eq!(
            first.statistics().combinations_evaluated,
            second.statistics().combinations_evaluated
        );
    }

    #[test]
    fn test_result_is_invariant_to_pool_order() {
        let mut forward = HotelBuilder::new();
        for (floor, position) in [(1, 1), (1, 2), (2, 1), (2, 2), (3, 5)] {
            forward.push_room(floor, position);
        }

        let mut reversed = HotelBuilder::new();
        for (floor, position) in [(3, 5), (2, 2), (2, 1), (1, 2), (1, 1)] {
            reversed.push_room(floor, position);
        }

        let a = select_optimal::<Cost>(&forward.build(), 2);
        let b = select_optimal::<Cost>(&reversed.build(), 2);

        assert_eq!(
            a.selection().unwrap().room_ids(),
            b.selection().unwrap().room_ids()
        );
        assert_eq!(
            a.selection().unwrap().travel_time(),
            b.selection().unwrap().travel_time()
        );
    }

    /// The rejected alternative: greedy nearest-insertion. Grows the block
    /// from the first available room, always adding the room that keeps the
    /// route cheapest *right now*.
    fn greedy_nearest_insertion(available: &[Room], requested: usize) -> Vec<Room> {
        let mut block = vec![available[0]];
        let mut rest: Vec<Room> = available[1..].to_vec();

        while block.len() < requested {
            let (idx, _) = rest
                .iter()
                .enumerate()
                .map(|(i, room)| {
                    let mut candidate = block.clone();
                    candidate.push(*room);
                    (i, TravelTime::<Cost>::along_route(&candidate).total())
                })
                .min_by_key(|&(_, total)| total)
                .unwrap();
            block.push(rest.remove(idx));
        }
        block
    }

    #[test]
    fn test_greedy_nearest_insertion_misses_the_optimum() {
        // Two rooms on floor 1, three on floor 2. Greedy anchors on 101,
        // extends to 102, and can then do no better than total 3; the true
        // optimum is the floor-2 triple at total 2.
        let mut builder = HotelBuilder::new();
        builder.push_room(1, 1);
        builder.push_room(1, 2);
        builder.push_room(2, 1);
        builder.push_room(2, 2);
        builder.push_room(2, 3);
        let hotel = builder.build();

        let greedy_block = greedy_nearest_insertion(&hotel.available_rooms(), 3);
        let greedy_total = TravelTime::<Cost>::along_route(&greedy_block).total();

        let outcome = select_optimal::<Cost>(&hotel, 3);
        let selection = outcome.selection().unwrap();

        assert_eq!(selection.room_ids(), vec![201, 202, 203]);
        assert_eq!(selection.travel_time().total(), 2);
        assert!(greedy_total > selection.travel_time().total());
    }
}
