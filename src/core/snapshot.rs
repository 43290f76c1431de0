//! Plain-data observation structs for the driver/renderer layer
//!
//! A snapshot is a detached copy of everything a renderer needs: the global
//! occupancy volume plus the active piece's footprint and placement. Filling
//! an existing snapshot via [`crate::core::GameState::snapshot_into`] does
//! not allocate.

use arrayvec::ArrayVec;

use crate::core::Piece;
use crate::types::{PieceKind, GRID_DEPTH, GRID_LAYERS, GRID_WIDTH};

/// Detached view of the active piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    /// Bounding-box edge of the local occupancy
    pub side: u8,
    /// Occupied local cells at the current orientation
    pub cells: ArrayVec<(u8, u8, u8), 8>,
    pub offset_x: i8,
    pub offset_y: i8,
    pub layer: i8,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind(),
            side: piece.side(),
            cells: piece.occupied_cells(),
            offset_x: piece.offset_x(),
            offset_y: piece.offset_y(),
            layer: piece.layer(),
        }
    }
}

/// Detached view of a whole game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Global occupancy, indexed [x][y][z]; boundary voxels included
    pub grid: [[[bool; GRID_LAYERS as usize]; GRID_DEPTH as usize]; GRID_WIDTH as usize],
    pub active: Option<ActiveSnapshot>,
    pub game_over: bool,
    /// Monotonic id of the most recently spawned piece
    pub piece_id: u32,
    /// Monotonic episode id (increments on restart)
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid =
            [[[false; GRID_LAYERS as usize]; GRID_DEPTH as usize]; GRID_WIDTH as usize];
        self.active = None;
        self.game_over = false;
        self.piece_id = 0;
        self.episode_id = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[[false; GRID_LAYERS as usize]; GRID_DEPTH as usize]; GRID_WIDTH as usize],
            active: None,
            game_over: false,
            piece_id: 0,
            episode_id: 0,
        }
    }
}
