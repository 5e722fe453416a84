/// Single coordinate axis used for board dimension and positions.
///
/// Signed so that off-board neighbors of edge cells can be expressed and rejected.
pub type Coord = i16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Only meaningful for coordinates that already passed a bounds check.
    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = if a < 0 { 0 } else { a as CellCount };
    let b = if b < 0 { 0 } else { b as CellCount };
    a.saturating_mul(b)
}

/// Whether `coords` lies on a square board of side `size`.
pub const fn in_bounds((row, column): Coord2, size: Coord) -> bool {
    0 <= row && row < size && 0 <= column && column < size
}

/// Row-major 3x3 block, center included.
const DISPLACEMENTS: [(Coord, Coord); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const CENTER_INDEX: u8 = 4;

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (Coord, Coord), size: Coord) -> Option<Coord2> {
    let next = (
        coords.0.checked_add(delta.0)?,
        coords.1.checked_add(delta.1)?,
    );
    in_bounds(next, size).then_some(next)
}

/// Iterates the 3x3 block around a cell in row-major order, silently skipping
/// positions outside the board.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord,
    index: u8,
    include_center: bool,
}

impl NeighborIter {
    fn new(center: Coord2, size: Coord, include_center: bool) -> Self {
        Self {
            center,
            size,
            index: 0,
            include_center,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let index = self.index;
            self.index += 1;

            if index == CENTER_INDEX && !self.include_center {
                continue;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[index as usize], self.size);
            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

/// The up-to-8 surrounding cells of `center`.
pub fn iter_neighbors(center: Coord2, size: Coord) -> NeighborIter {
    NeighborIter::new(center, size, false)
}

/// The 3x3 block around `center`, center included.
pub fn iter_block(center: Coord2, size: Coord) -> NeighborIter {
    NeighborIter::new(center, size, true)
}
