use crate::*;
pub use seeded::*;

mod seeded;

/// Strategy for adding mines to an existing set.
pub trait MineGenerator {
    /// Places exactly `count` new mines, failing up front if they cannot fit.
    fn generate(self, mines: &mut MineSet, count: CellCount) -> Result<()>;
}
