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

//! # Selection Numeric Trait
//!
//! Unified numeric bounds for the selection engine. `SelectNumeric` collects
//! the integer capabilities cost arithmetic needs (`PrimInt`, `Signed`,
//! widening from `u32` room coordinates via `FromPrimitive`) into a single
//! alias, keeping generic signatures short and consistent across the crate.
//!
//! Travel costs here are small sums (blocks are capped at five rooms, floor
//! and position deltas are two-digit numbers), so plain operator arithmetic
//! is sufficient; no checked or saturating variants are required.

use num_traits::{FromPrimitive, PrimInt, Signed};

/// A trait alias for numeric types usable as travel costs.
///
/// These are usually the signed integer types `i16`, `i32`, `i64`, and
/// `isize`. `i8` also satisfies the bounds but leaves little headroom for
/// larger pools.
pub trait SelectNumeric:
    PrimInt + Signed + FromPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> SelectNumeric for T where
    T: PrimInt + Signed + FromPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}
