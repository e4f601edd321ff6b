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

//! # Exhaustive k-Subset Enumeration
//!
//! `Combinations` yields every strictly-increasing `k`-element index subset
//! of `0..n`, in lexicographic order, as a streaming iterator. Exhaustiveness
//! is a correctness requirement for the optimal selector, which must see
//! every candidate; there is no sampling or pruning.
//!
//! The enumeration is the iterative equivalent of increasing-index recursive
//! selection: each yielded subset's indices ascend, so no subset is produced
//! twice. Complexity is combinatorial, C(n, k); callers bound `k` (the
//! selector caps requests at five) to keep it tractable.

use std::iter::FusedIterator;

/// The binomial coefficient C(n, k), or `None` on `u64` overflow.
///
/// # Examples
///
/// ```rust
/// use concierge_select::combinations::binomial;
///
/// assert_eq!(binomial(5, 3), Some(10));
/// assert_eq!(binomial(97, 5), Some(64_446_024));
/// assert_eq!(binomial(3, 7), Some(0));
/// ```
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }

    // C(n, k) == C(n, n - k); evaluate the shorter product.
    let k = k.min(n - k);

    let mut result: u64 = 1;
    for i in 0..k {
        // Exact at every step: after this iteration result == C(n, i + 1).
        result = result.checked_mul((n - i) as u64)? / (i as u64 + 1);
    }
    Some(result)
}

/// An iterator over all `k`-element index subsets of `0..n`.
///
/// Subsets are yielded as strictly-increasing `Vec<usize>` in lexicographic
/// order. The iterator is empty when `k == 0` or `k > n`.
///
/// # Examples
///
/// ```rust
/// use concierge_select::combinations::Combinations;
///
/// let subsets: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(
///     subsets,
///     vec![
///         vec![0, 1], vec![0, 2], vec![0, 3],
///         vec![1, 2], vec![1, 3], vec![2, 3],
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
    /// Subsets left to yield, when that count fits a `u64`.
    remaining: Option<u64>,
}

impl Combinations {
    /// Creates the enumeration of all `k`-element subsets of `0..n`.
    pub fn new(n: usize, k: usize) -> Self {
        let done = k == 0 || k > n;
        let remaining = if done { Some(0) } else { binomial(n, k) };

        Self {
            n,
            k,
            indices: Vec::new(),
            started: false,
            done,
            remaining,
        }
    }

    /// Advances `self.indices` to its lexicographic successor.
    ///
    /// Returns `false` when the current subset is the last one.
    fn step(&mut self) -> bool {
        // Rightmost index that can still move up; indices[i] may grow to
        // at most n - k + i so the suffix can stay strictly increasing.
        let Some(pivot) = (0..self.k).rev().find(|&i| self.indices[i] < self.n - self.k + i)
        else {
            return false;
        };

        self.indices[pivot] += 1;
        for i in pivot + 1..self.k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            self.indices = (0..self.k).collect();
        } else if !self.step() {
            self.done = true;
            return None;
        }

        if let Some(remaining) = &mut self.remaining {
            *remaining -= 1;
        }
        Some(self.indices.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.map(usize::try_from) {
            Some(Ok(remaining)) => (remaining, Some(remaining)),
            // Overflowed u64 or usize: still a finite lower bound of zero.
            _ => (0, None),
        }
    }
}

impl FusedIterator for Combinations {}
