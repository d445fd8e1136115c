//! Deterministic Lehmer (Park-Miller) pseudo-random generator.

const MODULUS: i64 = 2_147_483_647;
const MULTIPLIER: i64 = 16_807;

/// Multiplicative congruential generator seeded from an integer.
///
/// Two generators built from the same seed produce identical output sequences
/// on every platform: state evolution is pure integer arithmetic (the largest
/// intermediate is below 2^45, well inside i64), and only the final division
/// in [`next`](Self::next) touches floating point, always in f64.
pub struct SeededRandom {
    state: i64,
}

impl SeededRandom {
    /// Build a generator from any integer seed.
    ///
    /// The seed is reduced modulo 2147483647; non-positive results are shifted
    /// by 2147483646 so the state is always in (0, 2147483647).
    pub fn new(seed: i64) -> Self {
        let mut state = seed % MODULUS;
        if state <= 0 {
            state += MODULUS - 1;
        }
        Self { state }
    }

    /// Advance the state and return a value in [0, 1).
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Random integer in [min, max], inclusive on both ends.
    /// Callers must not pass an empty range.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(max >= min, "next_int called with an empty range");
        (self.next() * (max - min + 1) as f64).floor() as i64 + min
    }

    /// Pick a random element. Panics on an empty slice; callers guarantee
    /// non-empty input (the keyword fallback exists for exactly this reason).
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "choice called on an empty slice");
        &items[self.next_int(0, items.len() as i64 - 1) as usize]
    }
}
