//! Seeding of the search's random number generator.

use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for a deterministic search run.
///
/// This is a 128-bit (16-byte) seed used to initialize the [`Pcg32`] generator
/// that every random draw of a run goes through: population initialization,
/// parent sampling, crossover points and mutation. Using the same seed with the
/// same [`SearchParams`](crate::params::SearchParams) reproduces the run
/// exactly.
///
/// Seeds are written as 32 hexadecimal digits, both by `Display` and by serde.
///
/// # Example
///
/// ```
/// use queensga_search::seed::SearchSeed;
/// use rand::Rng as _;
///
/// let seed: SearchSeed = rand::rng().random();
/// let parsed: SearchSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSeed([u8; 16]);

/// Error returned when a seed string is not 32 hexadecimal digits.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex: {reason}")]
pub struct ParseSeedError {
    reason: String,
}

impl SearchSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Creates the generator for a run started from this seed.
    #[must_use]
    pub fn to_rng(self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for SearchSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for SearchSeed {
    type Err = ParseSeedError;

    fn from_str(hex_str: &str) -> Result<Self, Self::Err> {
        if hex_str.len() != 32 {
            return Err(ParseSeedError {
                reason: format!("expected 32 characters, got {}", hex_str.len()),
            });
        }
        // from_str_radix accepts a leading '+', which is not a hex digit
        if !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseSeedError {
                reason: format!("{hex_str} contains non-hex characters"),
            });
        }
        let num = u128::from_str_radix(hex_str, 16).map_err(|e| ParseSeedError {
            reason: format!("{hex_str} ({e})"),
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for SearchSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SearchSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `SearchSeed` values with `rng.random()`.
impl Distribution<SearchSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SearchSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SearchSeed(seed)
    }
}
