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

//! # Concierge Select
//!
//! **The Exhaustive Room-Block Selection Engine.**
//!
//! Given a hotel pool (see `concierge_model`) and a request for `k` rooms,
//! this crate finds the `k`-room subset of the available rooms that minimizes
//! the travel cost along the block, with a proven global optimum and a
//! deterministic tie-break. The search space is bounded by the caller-facing
//! request cap (five rooms), so exhaustive enumeration stays tractable
//! against realistic pools of around a hundred rooms.
//!
//! ## Modules
//!
//! - `num`: The `SelectNumeric` trait alias bounding the cost type.
//! - `cost`: Pairwise and canonical-route travel cost (`TravelTime<T>`).
//! - `combinations`: Lexicographic k-subset enumeration and a checked
//!   binomial coefficient.
//! - `result`: `SelectionResult`, `Selection`, `RejectionReason`, and the
//!   `SelectionOutcome` wrapper carrying statistics.
//! - `stats`: `SelectionStatistics` collected per selection call.
//! - `selector`: The `OptimalSelector` tying it all together.
//!
//! ## Guarantees
//!
//! - **Optimality**: every C(available, k) candidate is scored; the returned
//!   block's total cost is minimal. No sampling, no pruning.
//! - **Determinism**: ties on total cost are broken by lexicographic
//!   comparison of the canonically-sorted room sequences (lower floor first,
//!   then lower position), a total order over distinct subsets.
//! - **Purity**: a selection call reads an immutable snapshot of the pool
//!   and has no side effects; committing bookings is the caller's job.

pub mod combinations;
pub mod cost;
pub mod num;
pub mod result;
pub mod selector;
pub mod stats;
