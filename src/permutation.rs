//! Permutation seam.
//!
//! The sponge only needs `permute(state, rounds)`. The default provider runs
//! the Ascon permutation from the `ascon` crate.

use crate::STATE_WORDS;

/// Round counts used by Ascon-80pq.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounds {
    Six,
    Eight,
    Twelve,
}

impl Rounds {
    pub const fn count(self) -> u8 {
        match self {
            Rounds::Six => 6,
            Rounds::Eight => 8,
            Rounds::Twelve => 12,
        }
    }
}

/// A stateless 320-bit permutation.
pub trait Permutation {
    /// Apply the last `rounds` rounds of the permutation in place.
    fn permute(state: &mut [u64; STATE_WORDS], rounds: Rounds);
}

/// Ascon permutation provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsconPermutation;

impl Permutation for AsconPermutation {
    fn permute(state: &mut [u64; STATE_WORDS], rounds: Rounds) {
        let mut p = ascon::State::new(state[0], state[1], state[2], state[3], state[4]);
        match rounds {
            Rounds::Six => p.permute_6(),
            Rounds::Eight => p.permute_8(),
            Rounds::Twelve => p.permute_12(),
        }
        for (i, word) in state.iter_mut().enumerate() {
            *word = p[i];
        }
    }
}
