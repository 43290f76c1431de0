//! Piece module - polycube shapes and 90-degree axis rotation
//!
//! A piece owns a small cubic occupancy buffer (its local voxel footprint)
//! plus its placement offsets within the global grid. The buffer is sized for
//! the largest bounding box (4x4x4) and overwritten in place on each
//! rotation; no allocation happens after construction.
//!
//! Local cell (i, j, k) maps to global cell
//! (i + offset_x, j + offset_y, k + layer).

use arrayvec::ArrayVec;

use crate::types::{Axis, Color, PieceKind, GRID_WIDTH};

/// Largest piece bounding-box edge across all kinds and rotations
pub const MAX_PIECE_SIDE: usize = 4;

/// Capacity of the local occupancy buffer
const CELL_BUF: usize = MAX_PIECE_SIDE * MAX_PIECE_SIDE * MAX_PIECE_SIDE;

/// Most voxels any kind occupies (the 2x2x2 cube)
const MAX_VOXELS: usize = 8;

/// A falling polycube: local occupancy plus world placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    /// Bounding-box edge length for this kind (2, 3, or 4)
    side: u8,
    /// Local occupancy, x-major within the side*side*side box
    cells: [bool; CELL_BUF],
    offset_x: i8,
    offset_y: i8,
    layer: i8,
}

/// Footprint of each kind inside its bounding box: (edge, occupied cells)
fn footprint(kind: PieceKind) -> (u8, &'static [(u8, u8, u8)]) {
    match kind {
        PieceKind::Bar => (4, &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)]),
        PieceKind::Cube => (
            2,
            &[
                (0, 0, 0),
                (1, 0, 0),
                (0, 1, 0),
                (1, 1, 0),
                (0, 0, 1),
                (1, 0, 1),
                (0, 1, 1),
                (1, 1, 1),
            ],
        ),
        PieceKind::Ell => (3, &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0)]),
        PieceKind::Tee => (3, &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0)]),
        PieceKind::Ess => (3, &[(1, 0, 0), (2, 0, 0), (0, 1, 0), (1, 1, 0)]),
        PieceKind::Corner => (2, &[(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 0, 1)]),
    }
}

impl Piece {
    /// Create a new piece at its spawn placement (horizontally centered,
    /// layer 0)
    pub fn new(kind: PieceKind) -> Self {
        let (side, occupied) = footprint(kind);
        let mut cells = [false; CELL_BUF];
        for &(i, j, k) in occupied {
            cells[Self::index(side, i, j, k)] = true;
        }
        let spawn = (GRID_WIDTH as i8 - side as i8) / 2;
        Self {
            kind,
            side,
            cells,
            offset_x: spawn,
            offset_y: spawn,
            layer: 0,
        }
    }

    /// Flat index into the local buffer for a cell inside the bounding box
    #[inline(always)]
    fn index(side: u8, i: u8, j: u8, k: u8) -> usize {
        debug_assert!(i < side && j < side && k < side);
        let side = side as usize;
        (i as usize * side + j as usize) * side + k as usize
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Bounding-box edge length of the local occupancy
    pub fn side(&self) -> u8 {
        self.side
    }

    /// Whether local cell (i, j, k) is occupied; out-of-box cells are empty
    pub fn occupied(&self, i: u8, j: u8, k: u8) -> bool {
        if i >= self.side || j >= self.side || k >= self.side {
            return false;
        }
        self.cells[Self::index(self.side, i, j, k)]
    }

    /// Number of occupied local cells (invariant under rotation)
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Occupied local coordinates, at most eight of them
    pub fn occupied_cells(&self) -> ArrayVec<(u8, u8, u8), MAX_VOXELS> {
        let mut out = ArrayVec::new();
        for i in 0..self.side {
            for j in 0..self.side {
                for k in 0..self.side {
                    if self.cells[Self::index(self.side, i, j, k)] {
                        out.push((i, j, k));
                    }
                }
            }
        }
        out
    }

    /// Rotate the local occupancy 90 degrees about the given axis
    ///
    /// Every occupied cell is transformed, then the set is rebuilt into a
    /// freshly zeroed buffer re-anchored so the minimum occupied index along
    /// each axis is zero. The occupied count is preserved and four rotations
    /// about the same axis restore the original occupancy.
    pub fn rotate(&mut self, axis: Axis) {
        let mut coords: ArrayVec<(i8, i8, i8), MAX_VOXELS> = ArrayVec::new();
        for (i, j, k) in self.occupied_cells() {
            let (i, j, k) = (i as i8, j as i8, k as i8);
            coords.push(match axis {
                Axis::X => (i, -k, j),
                Axis::Y => (k, j, -i),
                Axis::Z => (-j, i, k),
            });
        }

        // Re-anchor so no negative local coordinate survives.
        let mut min = (i8::MAX, i8::MAX, i8::MAX);
        for &(i, j, k) in &coords {
            min.0 = min.0.min(i);
            min.1 = min.1.min(j);
            min.2 = min.2.min(k);
        }

        self.cells = [false; CELL_BUF];
        for (i, j, k) in coords {
            let (i, j, k) = (
                (i - min.0) as u8,
                (j - min.1) as u8,
                (k - min.2) as u8,
            );
            self.cells[Self::index(self.side, i, j, k)] = true;
        }
    }

    pub fn offset_x(&self) -> i8 {
        self.offset_x
    }

    pub fn offset_y(&self) -> i8 {
        self.offset_y
    }

    pub fn layer(&self) -> i8 {
        self.layer
    }

    pub fn set_offset_x(&mut self, x: i8) {
        self.offset_x = x;
    }

    pub fn set_offset_y(&mut self, y: i8) {
        self.offset_y = y;
    }

    pub fn set_layer(&mut self, layer: i8) {
        self.layer = layer;
    }

    /// Unconditional horizontal shift, called after the grid validated it
    pub fn shift_x(&mut self, delta: i8) {
        self.offset_x += delta;
    }

    /// Unconditional depth shift, called after the grid validated it
    pub fn shift_y(&mut self, delta: i8) {
        self.offset_y += delta;
    }

    /// Advance one layer toward the floor
    pub fn descend(&mut self) {
        self.layer += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALL_PIECE_KINDS;

    #[test]
    fn footprints_fit_their_boxes() {
        for kind in ALL_PIECE_KINDS {
            let (side, occupied) = footprint(kind);
            assert!(!occupied.is_empty());
            for &(i, j, k) in occupied {
                assert!(i < side && j < side && k < side, "{kind:?}");
            }
        }
    }

    #[test]
    fn spawn_is_inside_the_walls() {
        for kind in ALL_PIECE_KINDS {
            let piece = Piece::new(kind);
            assert!(piece.offset_x() >= 1);
            assert!(piece.offset_x() + piece.side() as i8 <= GRID_WIDTH as i8 - 1);
            assert_eq!(piece.layer(), 0);
        }
    }

    #[test]
    fn rotation_reanchors_to_origin() {
        let mut piece = Piece::new(PieceKind::Ess);
        piece.rotate(Axis::X);
        let cells = piece.occupied_cells();
        let min_j = cells.iter().map(|&(_, j, _)| j).min().unwrap();
        let min_k = cells.iter().map(|&(_, _, k)| k).min().unwrap();
        let min_i = cells.iter().map(|&(i, _, _)| i).min().unwrap();
        assert_eq!((min_i, min_j, min_k), (0, 0, 0));
    }
}
