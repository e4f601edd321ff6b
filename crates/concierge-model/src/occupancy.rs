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

//! # Random Occupancy Assignment
//!
//! Demo/test utility that books a fraction of the pool at random. The random
//! source is supplied by the caller, so occupancy patterns are reproducible
//! with a seeded generator; the selection engine itself stays fully
//! deterministic regardless of how occupancy was produced.

use crate::{hotel::Hotel, index::RoomIndex};
use rand::{Rng, seq::SliceRandom};

/// Randomly books `fraction` of the hotel's rooms and releases the rest.
///
/// `fraction` is clamped to `[0.0, 1.0]`; the number of rooms booked is
/// `floor(num_rooms * fraction)`. Previous occupancy is discarded.
///
/// Room indices are shuffled with the caller-supplied `rng`, so a seeded
/// generator reproduces the same pattern every time.
///
/// # Examples
///
/// ```rust
/// use concierge_model::{hotel::Hotel, occupancy::randomize_occupancy};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut hotel = Hotel::standard();
/// let mut rng = StdRng::seed_from_u64(7);
/// randomize_occupancy(&mut hotel, 0.4, &mut rng);
/// assert_eq!(hotel.num_available(), 97 - 38); // floor(97 * 0.4) = 38 booked
/// ```
pub fn randomize_occupancy<R>(hotel: &mut Hotel, fraction: f64, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let fraction = fraction.clamp(0.0, 1.0);
    let num_to_book = (hotel.num_rooms() as f64 * fraction).floor() as usize;

    let mut indices: Vec<usize> = (0..hotel.num_rooms()).collect();
    indices.shuffle(rng);

    for (i, &pool_index) in indices.iter().enumerate() {
        hotel.set_booked(RoomIndex::new(pool_index), i < num_to_book);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        // ChaCha8Rng is deterministic with a fixed seed
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn test_books_floor_of_fraction() {
        let mut hotel = Hotel::standard();
        randomize_occupancy(&mut hotel, 0.4, &mut rng(42));
        // floor(97 * 0.4) = 38
        assert_eq!(hotel.num_available(), 97 - 38);
    }

    #[test]
    fn test_same_seed_same_pattern() {
        let mut first = Hotel::standard();
        let mut second = Hotel::standard();

        randomize_occupancy(&mut first, 0.5, &mut rng(1234));
        randomize_occupancy(&mut second, 0.5, &mut rng(1234));

        assert_eq!(first, second);
    }

    #[test]
    fn test_fraction_is_clamped() {
        let mut hotel = Hotel::standard();

        randomize_occupancy(&mut hotel, 2.0, &mut rng(0));
        assert_eq!(hotel.num_available(), 0);

        randomize_occupancy(&mut hotel, -1.0, &mut rng(0));
        assert_eq!(hotel.num_available(), 97);
    }

    #[test]
    fn test_discards_previous_occupancy() {
        let mut hotel = Hotel::standard();
        hotel.book_all();

        // Fraction zero must release everything that was booked before.
        randomize_occupancy(&mut hotel, 0.0, &mut rng(9));
        assert_eq!(hotel.num_available(), 97);
    }
}
