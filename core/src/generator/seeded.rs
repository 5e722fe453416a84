use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Purely random placement: draws uniform positions and retries on positions that already hold a mine.
///
/// The same seed always reproduces the same layout on a given platform and `rand` release; `SmallRng` streams are
/// not portable across either.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SeededMineGenerator {
    seed: u64,
}

impl SeededMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for SeededMineGenerator {
    fn generate(self, mines: &mut MineSet, count: CellCount) -> Result<()> {
        let size = mines.size();
        let requested = mines.len().saturating_add(count);

        // a full board would leave rejection sampling spinning forever
        GameConfig::new_unchecked(size, requested).validate()?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;
        let mut retries: u32 = 0;
        while placed < count {
            let coords = (rng.random_range(0..size), rng.random_range(0..size));
            if mines.insert(coords)? {
                placed += 1;
            } else {
                retries += 1;
                log::trace!("Mine already at {:?}, drawing again", coords);
            }
        }

        log::debug!(
            "Placed {} mines with seed {} after {} retries",
            placed,
            self.seed,
            retries
        );
        Ok(())
    }
}
