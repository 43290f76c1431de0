//! Grid module - the global voxel playfield
//!
//! The grid is a 7x7x10 boolean voxel volume using flat array storage for
//! cache locality and zero allocation. Cells on the outer x/y columns and the
//! bottom layer (z = 9) are permanent boundary voxels: they are marked at
//! construction, survive reset and compaction, and double as the wall/floor
//! collision surface.
//!
//! Every piece movement, rotation, and gravity step is gated here. A move
//! either applies in full or leaves the piece untouched; there are no
//! partial shifts and no faults. Coordinates outside the volume are treated
//! as non-colliding so transiently out-of-range candidates never index past
//! the array.

use arrayvec::ArrayVec;

use crate::core::piece::Piece;
use crate::types::{Axis, StepOutcome, FLOOR_LAYER, GRID_DEPTH, GRID_LAYERS, GRID_WIDTH};

/// Total number of cells in the volume
const GRID_SIZE: usize = GRID_WIDTH as usize * GRID_DEPTH as usize * GRID_LAYERS as usize;

/// Most layers a single compaction pass can remove
const MAX_CLEARED: usize = FLOOR_LAYER as usize;

/// The global playfield - 7x7 columns by 10 layers of boolean voxels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat occupancy, x-major order ((x * DEPTH + y) * LAYERS + z)
    cells: [bool; GRID_SIZE],
}

impl Grid {
    /// Create a new grid with only the permanent boundary voxels occupied
    pub fn new() -> Self {
        let mut grid = Self {
            cells: [false; GRID_SIZE],
        };
        grid.mark_boundaries();
        grid
    }

    /// Calculate flat index from (x, y, z) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8, z: i8) -> Option<usize> {
        if x < 0
            || x >= GRID_WIDTH as i8
            || y < 0
            || y >= GRID_DEPTH as i8
            || z < 0
            || z >= GRID_LAYERS as i8
        {
            return None;
        }
        Some((x as usize * GRID_DEPTH as usize + y as usize) * GRID_LAYERS as usize + z as usize)
    }

    fn mark_boundaries(&mut self) {
        for x in 0..GRID_WIDTH as i8 {
            for y in 0..GRID_DEPTH as i8 {
                for z in 0..GRID_LAYERS as i8 {
                    if Self::is_boundary(x, y, z) {
                        self.cells[Self::index(x, y, z).unwrap()] = true;
                    }
                }
            }
        }
    }

    /// Whether (x, y, z) is a permanent wall or floor voxel
    pub fn is_boundary(x: i8, y: i8, z: i8) -> bool {
        x == 0
            || x == GRID_WIDTH as i8 - 1
            || y == 0
            || y == GRID_DEPTH as i8 - 1
            || z == FLOOR_LAYER as i8
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn depth(&self) -> u8 {
        GRID_DEPTH
    }

    pub fn layers(&self) -> u8 {
        GRID_LAYERS
    }

    /// Whether the cell at (x, y, z) is occupied
    ///
    /// Out-of-range coordinates are never occupied; callers may probe
    /// candidate positions without bounds checks of their own.
    pub fn occupied(&self, x: i8, y: i8, z: i8) -> bool {
        match Self::index(x, y, z) {
            Some(idx) => self.cells[idx],
            None => false,
        }
    }

    /// Set the occupancy of cell (x, y, z)
    ///
    /// Returns false without writing when the coordinate is out of range or
    /// the write would clear a permanent boundary voxel.
    pub fn set(&mut self, x: i8, y: i8, z: i8, occupied: bool) -> bool {
        if !occupied && Self::is_boundary(x, y, z) {
            return false;
        }
        match Self::index(x, y, z) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Reallocate the volume in place: clear everything, re-mark boundaries
    pub fn reset(&mut self) {
        self.cells = [false; GRID_SIZE];
        self.mark_boundaries();
    }

    /// Whether every cell of layer z is occupied (walls included)
    pub fn is_layer_full(&self, z: i8) -> bool {
        if z < 0 || z >= GRID_LAYERS as i8 {
            return false;
        }
        for x in 0..GRID_WIDTH as i8 {
            for y in 0..GRID_DEPTH as i8 {
                if !self.occupied(x, y, z) {
                    return false;
                }
            }
        }
        true
    }

    /// Try to shift the piece one cell horizontally
    ///
    /// Exactly one of dx, dy is nonzero with magnitude one. Only the
    /// outermost occupied cell in the direction of travel needs testing per
    /// perpendicular slice: every cell behind it was already clear of the
    /// same obstruction when the current position was validated. The move
    /// applies in full or not at all.
    fn try_shift(&self, piece: &mut Piece, dx: i8, dy: i8) -> bool {
        debug_assert!((dx == 0) != (dy == 0));
        debug_assert!(dx.abs() <= 1 && dy.abs() <= 1);

        let side = piece.side();
        for a in 0..side {
            for k in 0..side {
                // Extremal occupied cell along the travel axis for this
                // (perpendicular column, layer) slice.
                let extremal = (0..side)
                    .filter(|&t| {
                        if dx != 0 {
                            piece.occupied(t, a, k)
                        } else {
                            piece.occupied(a, t, k)
                        }
                    })
                    .reduce(|best, t| {
                        if (dx + dy) > 0 {
                            best.max(t)
                        } else {
                            best.min(t)
                        }
                    });
                let Some(t) = extremal else {
                    continue;
                };

                let (i, j) = if dx != 0 { (t, a) } else { (a, t) };
                let gx = i as i8 + piece.offset_x() + dx;
                let gy = j as i8 + piece.offset_y() + dy;
                let gz = k as i8 + piece.layer();
                if self.occupied(gx, gy, gz) {
                    return false;
                }
            }
        }

        if dx != 0 {
            piece.shift_x(dx);
        } else {
            piece.shift_y(dy);
        }
        true
    }

    /// Move the piece one cell toward negative x
    pub fn move_left(&self, piece: &mut Piece) -> bool {
        self.try_shift(piece, -1, 0)
    }

    /// Move the piece one cell toward positive x
    pub fn move_right(&self, piece: &mut Piece) -> bool {
        self.try_shift(piece, 1, 0)
    }

    /// Move the piece one cell toward positive y
    pub fn move_forward(&self, piece: &mut Piece) -> bool {
        self.try_shift(piece, 0, 1)
    }

    /// Move the piece one cell toward negative y
    pub fn move_backward(&self, piece: &mut Piece) -> bool {
        self.try_shift(piece, 0, -1)
    }

    /// Whether any occupied piece cell overlaps an occupied grid cell
    ///
    /// Used to gate rotations and to validate spawn placements.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.occupied_cells().iter().any(|&(i, j, k)| {
            self.occupied(
                i as i8 + piece.offset_x(),
                j as i8 + piece.offset_y(),
                k as i8 + piece.layer(),
            )
        })
    }

    /// Rotate the piece 90 degrees about the given axis
    ///
    /// `clockwise = false` spins the other way by applying three quarter
    /// turns in one call. On collision at the piece's current offsets the
    /// rotation is undone by completing the 4-cycle and false is returned;
    /// the piece is then bit-identical to its pre-call state.
    pub fn rotate(&self, piece: &mut Piece, axis: Axis, clockwise: bool) -> bool {
        let steps = if clockwise { 1 } else { 3 };
        for _ in 0..steps {
            piece.rotate(axis);
        }
        if self.collides(piece) {
            for _ in 0..(4 - steps) {
                piece.rotate(axis);
            }
            return false;
        }
        true
    }

    /// Advance the piece one layer, or fuse it into the grid when blocked
    ///
    /// A candidate cell below the volume never blocks; the floor sentinel
    /// layer already stops descent in bounds. After fusing, full layers are
    /// compacted in the same call.
    pub fn lock_step(&mut self, piece: &mut Piece) -> StepOutcome {
        let blocked = piece.occupied_cells().iter().any(|&(i, j, k)| {
            self.occupied(
                i as i8 + piece.offset_x(),
                j as i8 + piece.offset_y(),
                k as i8 + piece.layer() + 1,
            )
        });

        if !blocked {
            piece.descend();
            return StepOutcome::Falling;
        }

        for &(i, j, k) in &piece.occupied_cells() {
            self.set(
                i as i8 + piece.offset_x(),
                j as i8 + piece.offset_y(),
                k as i8 + piece.layer(),
                true,
            );
        }
        let cleared = self.compact_full_layers();
        StepOutcome::Locked {
            layers_cleared: cleared.len() as u8,
        }
    }

    /// Remove every full layer, shifting the stack above it one layer down
    ///
    /// Layers are scanned from z = 0 toward the floor, sentinel excluded.
    /// Each full layer z is removed at the moment of detection by copying
    /// interior cells of layer zz-1 into zz for zz = z down to 1, so several
    /// full layers collapse correctly in a single pass. Wall columns never
    /// change. Returns the indices that were full, in scan order.
    pub fn compact_full_layers(&mut self) -> ArrayVec<u8, MAX_CLEARED> {
        let mut cleared = ArrayVec::new();
        for z in 0..FLOOR_LAYER as i8 {
            if !self.is_layer_full(z) {
                continue;
            }
            for zz in (1..=z).rev() {
                for x in 1..GRID_WIDTH as i8 - 1 {
                    for y in 1..GRID_DEPTH as i8 - 1 {
                        let above = self.occupied(x, y, zz - 1);
                        self.set(x, y, zz, above);
                    }
                }
            }
            cleared.push(z as u8);
        }
        cleared
    }

    /// Copy the full occupancy volume into `out`, indexed [x][y][z]
    ///
    /// Allocation-free export for snapshots and renderers.
    pub fn write_occupancy(
        &self,
        out: &mut [[[bool; GRID_LAYERS as usize]; GRID_DEPTH as usize]; GRID_WIDTH as usize],
    ) {
        for x in 0..GRID_WIDTH as usize {
            for y in 0..GRID_DEPTH as usize {
                for z in 0..GRID_LAYERS as usize {
                    out[x][y][z] = self.occupied(x as i8, y as i8, z as i8);
                }
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_calculation() {
        assert_eq!(Grid::index(0, 0, 0), Some(0));
        assert_eq!(Grid::index(0, 0, 9), Some(9));
        assert_eq!(Grid::index(0, 1, 0), Some(10));
        assert_eq!(Grid::index(6, 6, 9), Some(GRID_SIZE - 1));
        assert_eq!(Grid::index(-1, 0, 0), None);
        assert_eq!(Grid::index(7, 0, 0), None);
        assert_eq!(Grid::index(0, 7, 0), None);
        assert_eq!(Grid::index(0, 0, 10), None);
    }

    #[test]
    fn boundaries_marked_on_construction() {
        let grid = Grid::new();
        assert!(grid.occupied(0, 3, 4));
        assert!(grid.occupied(6, 3, 4));
        assert!(grid.occupied(3, 0, 4));
        assert!(grid.occupied(3, 6, 4));
        assert!(grid.occupied(3, 3, 9));
        assert!(!grid.occupied(3, 3, 4));
    }

    #[test]
    fn boundary_voxels_refuse_clearing() {
        let mut grid = Grid::new();
        assert!(!grid.set(0, 3, 4, false));
        assert!(grid.occupied(0, 3, 4));
        assert!(!grid.set(3, 3, 9, false));
        assert!(grid.occupied(3, 3, 9));
    }

    #[test]
    fn floor_layer_counts_as_full() {
        let grid = Grid::new();
        assert!(grid.is_layer_full(FLOOR_LAYER as i8));
        assert!(!grid.is_layer_full(0));
        assert!(!grid.is_layer_full(-1));
        assert!(!grid.is_layer_full(GRID_LAYERS as i8));
    }
}
