//! Unique identifiers for building entities.
//!
//! Uids are drawn from a seeded ChaCha8 stream so that two models built from
//! the same seed with the same sequence of insertions carry identical uids.

use std::fmt;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A 128-bit unique identifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Default)]
pub struct Uid(pub u128);

impl Uid {
    /// The all-zero uid, carried by records not yet inserted into a building.
    pub const NIL: Uid = Uid(0);

    /// Returns true if this is the nil uid.
    #[must_use]
    pub const fn is_nil(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uid({self})")
    }
}

impl fmt::Display for Uid {
    #[allow(clippy::cast_possible_truncation)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            (v >> 96) as u32,
            (v >> 80) as u16,
            (v >> 64) as u16,
            (v >> 48) as u16,
            v & 0xffff_ffff_ffff
        )
    }
}

/// Deterministic uid source.
#[derive(Clone, Debug)]
pub struct UidGenerator {
    rng: ChaCha8Rng,
    seed: u64,
}

impl UidGenerator {
    /// Creates a generator seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws the next uid. Never returns [`Uid::NIL`].
    pub fn next_uid(&mut self) -> Uid {
        loop {
            let hi = u128::from(self.rng.next_u64());
            let lo = u128::from(self.rng.next_u64());
            let uid = Uid((hi << 64) | lo);
            if !uid.is_nil() {
                return uid;
            }
        }
    }
}
