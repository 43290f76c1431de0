//! voxel-tetris - falling-piece core for a stacked-layer 3D Tetris variant
//!
//! A bounded 7x7x10 voxel playfield, a closed set of falling polycube
//! pieces, and the rules governing their movement, 90-degree axis rotation,
//! locking, and full-layer compaction. Rendering, input mapping, and piece
//! selection are driver-layer concerns; this crate only owns the state
//! machine they observe.
//!
//! # Example
//!
//! ```
//! use voxel_tetris::core::GameState;
//! use voxel_tetris::types::{GameAction, PieceKind};
//!
//! let mut game = GameState::new();
//! assert!(game.spawn(PieceKind::Cube));
//! game.apply(GameAction::MoveLeft);
//! let outcome = game.hard_drop();
//! assert!(outcome.is_locked());
//! ```

pub mod core;
pub mod types;

pub use crate::core::{GameState, Grid, Piece};
pub use crate::types::{Axis, GameAction, PieceKind, StepOutcome};
