//! Uniform random source for particle emission
//!
//! The emitter only needs uniform floats. Hosts with their own random
//! source implement [`Rng`]; everyone else uses [`Xorshift64`].

/// Uniform random number source
pub trait Rng {
    /// Next value in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[lo, hi)`
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// xorshift64 PRNG (deterministic, no allocation)
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Seeded generator
    ///
    /// A zero seed is remapped; xorshift sticks at zero.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::DEFAULT_SEED } else { seed },
        }
    }
}

impl Default for Xorshift64 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl Rng for Xorshift64 {
    fn next_f64(&mut self) -> f64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        // Top 53 bits give a uniform double in [0, 1).
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }
}
