//! Parameter sets.
//!
//! Rate and light round count live in one immutable [`Variant`] value chosen
//! when a [`Cipher`](crate::Cipher) is built.

use core::fmt;
use core::str::FromStr;

use crate::permutation::Rounds;
use crate::KEY_BYTES;

/// Rounds used by initialization and finalization, for every variant.
pub const HEAVY_ROUNDS: Rounds = Rounds::Twelve;

/// Ascon-80pq parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Standard Ascon-80pq: 64-bit rate, 6 light rounds.
    #[default]
    Ascon80pq,
    /// 128-bit rate with 8 light rounds (the Ascon-128a round structure
    /// over the 160-bit key).
    Ascon80pqWide,
}

impl Variant {
    /// All supported variants.
    pub const ALL: [Variant; 2] = [Variant::Ascon80pq, Variant::Ascon80pqWide];

    /// Bytes absorbed or emitted per light permutation.
    pub const fn rate(self) -> usize {
        match self {
            Variant::Ascon80pq => 8,
            Variant::Ascon80pqWide => 16,
        }
    }

    /// Number of 64-bit state words covered by the rate.
    pub const fn rate_lanes(self) -> usize {
        self.rate() / 8
    }

    /// Rounds for the permutation calls between data blocks.
    pub const fn light_rounds(self) -> Rounds {
        match self {
            Variant::Ascon80pq => Rounds::Six,
            Variant::Ascon80pqWide => Rounds::Eight,
        }
    }

    /// Rounds for initialization and finalization.
    pub const fn heavy_rounds(self) -> Rounds {
        HEAVY_ROUNDS
    }

    /// Initialization vector: key bits, rate bits and both round counts in
    /// the top 32 bits of the first word.
    pub const fn iv(self) -> u64 {
        ((KEY_BYTES as u64 * 8) << 56)
            | ((self.rate() as u64 * 8) << 48)
            | ((HEAVY_ROUNDS.count() as u64) << 40)
            | ((self.light_rounds().count() as u64) << 32)
    }

    /// Look up the variant with the given rate in bytes.
    pub const fn from_rate(rate: usize) -> Option<Variant> {
        match rate {
            8 => Some(Variant::Ascon80pq),
            16 => Some(Variant::Ascon80pqWide),
            _ => None,
        }
    }

    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Ascon80pq => "Ascon-80pq",
            Variant::Ascon80pqWide => "Ascon-80pq-wide",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse error for [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownVariant;

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant (expected rate 8 or 16)")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownVariant {}

impl FromStr for Variant {
    type Err = UnknownVariant;

    /// Accepts a canonical name or a rate in bytes (`"8"`, `"16"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(v) = Variant::ALL.iter().find(|v| v.name().eq_ignore_ascii_case(s)) {
            return Ok(*v);
        }
        s.parse::<usize>()
            .ok()
            .and_then(Variant::from_rate)
            .ok_or(UnknownVariant)
    }
}
