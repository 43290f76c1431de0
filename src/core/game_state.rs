//! Game state module - thin session driver over grid and active piece
//!
//! Ties the grid and the falling piece together behind single `&mut self`
//! entry points so every read-validate-mutate sequence is atomic per call:
//! a driver that steps gravity from a timer and applies input actions from
//! an event loop only has to serialize access to this one value.
//!
//! Piece selection stays with the caller: `spawn` takes the kind to drop
//! next, so the core carries no randomness.

use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::core::{Grid, Piece};
use crate::types::{Axis, GameAction, PieceKind, StepOutcome};

/// A complete game session: playfield, active piece, lifecycle flags
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Option<Piece>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id for spawned pieces (increments only on successful spawn).
    piece_id: u32,
    game_over: bool,
}

impl GameState {
    /// Create a fresh session with an empty grid and no active piece
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            episode_id: 0,
            piece_id: 0,
            game_over: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for drivers and tests that pre-fill the field
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Introduce the next falling piece
    ///
    /// Rejected while a piece is still falling, after game over, or when the
    /// spawn volume is already occupied; the last case also flags game over.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        if self.game_over || self.active.is_some() {
            return false;
        }

        let piece = Piece::new(kind);
        if self.grid.collides(&piece) {
            self.game_over = true;
            return false;
        }

        self.piece_id = self.piece_id.wrapping_add(1);
        self.active = Some(piece);
        true
    }

    /// Apply a movement or rotation action to the active piece
    ///
    /// Returns false when there is no active piece or the grid rejected the
    /// action; the piece is left exactly as it was.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        match action {
            GameAction::MoveLeft => self.grid.move_left(piece),
            GameAction::MoveRight => self.grid.move_right(piece),
            GameAction::MoveForward => self.grid.move_forward(piece),
            GameAction::MoveBackward => self.grid.move_backward(piece),
            GameAction::RotateX => self.grid.rotate(piece, Axis::X, true),
            GameAction::RotateY => self.grid.rotate(piece, Axis::Y, true),
            GameAction::RotateZ => self.grid.rotate(piece, Axis::Z, true),
            GameAction::RotateXRev => self.grid.rotate(piece, Axis::X, false),
            GameAction::RotateYRev => self.grid.rotate(piece, Axis::Y, false),
            GameAction::RotateZRev => self.grid.rotate(piece, Axis::Z, false),
        }
    }

    /// Advance gravity by one step
    ///
    /// On lock the piece is retired; the caller spawns the next one. With no
    /// active piece this reports a lock of zero layers.
    pub fn step(&mut self) -> StepOutcome {
        let Some(piece) = self.active.as_mut() else {
            return StepOutcome::Locked { layers_cleared: 0 };
        };

        let outcome = self.grid.lock_step(piece);
        if outcome.is_locked() {
            self.active = None;
        }
        outcome
    }

    /// Drop the active piece all the way down and lock it
    ///
    /// Convenience for drivers; equivalent to calling `step` until it
    /// reports a lock. Returns the outcome of the final step.
    pub fn hard_drop(&mut self) -> StepOutcome {
        loop {
            let outcome = self.step();
            if outcome.is_locked() {
                return outcome;
            }
        }
    }

    /// Start a new episode: reset the grid, retire the piece, clear flags
    pub fn restart(&mut self) {
        self.grid.reset();
        self.active = None;
        self.game_over = false;
        self.piece_id = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Fill an existing snapshot without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_occupancy(&mut out.grid);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.game_over = self.game_over;
        out.piece_id = self.piece_id;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
