//! Randomness sources for password generation.
//!
//! The generators draw every random decision through [`RandomnessSource`],
//! which keeps the construction logic testable: production code injects
//! [`OsRandomness`] (the OS CSPRNG), tests inject a [`ScriptedSource`] with a
//! fixed draw sequence. There is no seeded fallback; if the OS entropy source
//! cannot be read the whole run fails with
//! [`PwgenError::EntropyUnavailable`].

use std::collections::VecDeque;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::PwgenError;

/// A source of uniformly distributed integers in a bounded range.
pub trait RandomnessSource {
    /// A uniform integer in `[0, n)`. `n` must be non-zero.
    fn next_in_range(&mut self, n: usize) -> Result<usize, PwgenError>;
}

/// The operating system's CSPRNG.
///
/// Zero-sized handle; every draw reads the system entropy source directly,
/// so separate instances are fine on separate threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomness;

impl RandomnessSource for OsRandomness {
    fn next_in_range(&mut self, n: usize) -> Result<usize, PwgenError> {
        debug_assert!(n > 0, "range upper bound must be non-zero");
        let bound = n as u32;
        // Rejection sampling keeps the draw uniform for bounds that do not
        // divide 2^32.
        let zone = (u32::MAX / bound) * bound;
        loop {
            let mut buf = [0u8; 4];
            OsRng
                .try_fill_bytes(&mut buf)
                .map_err(PwgenError::EntropyUnavailable)?;
            let value = u32::from_le_bytes(buf);
            if value < zone {
                return Ok((value % bound) as usize);
            }
        }
    }
}

/// A deterministic source fed from a fixed sequence of draws.
///
/// Each call pops the next scripted value and reduces it modulo the requested
/// bound. Running past the end of the script behaves like entropy exhaustion,
/// which also makes it a convenient double for entropy-failure paths.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    draws: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        ScriptedSource {
            draws: draws.into_iter().collect(),
        }
    }

    /// Draws left in the script.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomnessSource for ScriptedSource {
    fn next_in_range(&mut self, n: usize) -> Result<usize, PwgenError> {
        debug_assert!(n > 0, "range upper bound must be non-zero");
        let value = self
            .draws
            .pop_front()
            .ok_or_else(|| PwgenError::EntropyUnavailable(rand::Error::new("script exhausted")))?;
        Ok(value % n)
    }
}

#[cfg(test)]
mod tests {
    use super::{OsRandomness, RandomnessSource, ScriptedSource};
    use crate::PwgenError;

    #[test]
    fn os_draws_stay_in_range() {
        let mut rng = OsRandomness;
        for _ in 0..1000 {
            let v = rng.next_in_range(10).unwrap();
            assert!(v < 10);
        }
    }

    #[test]
    fn scripted_draws_follow_the_script() {
        let mut rng = ScriptedSource::new([3, 17, 0]);
        assert_eq!(rng.next_in_range(10).unwrap(), 3);
        assert_eq!(rng.next_in_range(10).unwrap(), 7); // 17 % 10
        assert_eq!(rng.next_in_range(4).unwrap(), 0);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn exhausted_script_reports_entropy_failure() {
        let mut rng = ScriptedSource::new([]);
        assert!(matches!(
            rng.next_in_range(2),
            Err(PwgenError::EntropyUnavailable(_))
        ));
    }
}
