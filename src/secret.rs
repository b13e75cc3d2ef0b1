/// Where a round's secret comes from
use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;
use rand_core::{RngCore, SeedableRng};

use crate::round::SECRET_RANGE;

/// Supplies the hidden number for a new round.
///
/// Implementations should stay inside [`SECRET_RANGE`]; rounds clamp
/// anything else.
pub trait SecretSource {
    fn draw_secret(&mut self) -> u32;
}

impl<S: SecretSource + ?Sized> SecretSource for &mut S {
    fn draw_secret(&mut self) -> u32 {
        (**self).draw_secret()
    }
}

impl<S: SecretSource + ?Sized> SecretSource for Box<S> {
    fn draw_secret(&mut self) -> u32 {
        (**self).draw_secret()
    }
}

/// Uniform draws over [`SECRET_RANGE`] from any rand generator
#[derive(Debug, Clone)]
pub struct RandomSecret<R> {
    rng: R,
}

impl<R: RngCore> RandomSecret<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSecret<ThreadRng> {
    /// Thread-local generator, the default for interactive play
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RandomSecret<StdRng> {
    /// Reproducible sequence of secrets for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> SecretSource for RandomSecret<R> {
    fn draw_secret(&mut self) -> u32 {
        self.rng.random_range(SECRET_RANGE)
    }
}

/// Always the same secret. Handy for scripted sessions and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSecret(u32);

impl FixedSecret {
    /// `None` when `secret` is outside [`SECRET_RANGE`]
    pub fn new(secret: u32) -> Option<Self> {
        SECRET_RANGE.contains(&secret).then_some(Self(secret))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl SecretSource for FixedSecret {
    fn draw_secret(&mut self) -> u32 {
        self.0
    }
}
