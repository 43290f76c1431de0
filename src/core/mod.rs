//! Core module - pure game logic with no external dependencies
//!
//! This module contains the playfield, the piece abstraction, and the rules
//! that gate movement, rotation, locking, and layer compaction. It has zero
//! dependencies on UI, networking, or I/O.

pub mod game_state;
pub mod grid;
pub mod piece;
pub mod snapshot;

// Re-export commonly used types
pub use game_state::GameState;
pub use grid::Grid;
pub use piece::Piece;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
