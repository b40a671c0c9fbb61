use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::canvas::geometry::Position;

pub const DEFAULT_PLACEMENT_EXTENT: i32 = 500;

/// Decides where newly added images land.
pub trait Placement {
    fn next_position(&mut self) -> Position;
}

/// Uniform positions in `[0, extent] x [0, extent]`, both ends inclusive.
#[derive(Debug, Clone)]
pub struct RandomPlacement {
    extent: i32,
    rng: StdRng,
}

impl RandomPlacement {
    pub fn new(extent: i32) -> Self {
        Self {
            extent: extent.max(0),
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(extent: i32, seed: u64) -> Self {
        Self {
            extent: extent.max(0),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlacement {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEMENT_EXTENT)
    }
}

impl Placement for RandomPlacement {
    fn next_position(&mut self) -> Position {
        Position::new(
            self.rng.random_range(0..=self.extent),
            self.rng.random_range(0..=self.extent),
        )
    }
}
