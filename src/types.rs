//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the crate.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, renderer, driver loop).
//!
//! # Grid Dimensions
//!
//! The playfield is a 7x7x10 voxel grid:
//!
//! - **Width** (x): 7 columns, with x = 0 and x = 6 as permanent walls
//! - **Depth** (y): 7 columns, with y = 0 and y = 6 as permanent walls
//! - **Layers** (z): 10 horizontal slices; z = 9 is the permanent floor
//!   sentinel, so layers 0..=8 are playable
//!
//! Pieces fall toward increasing z and come to rest on the floor sentinel or
//! on previously locked voxels.
//!
//! # Examples
//!
//! ```
//! use voxel_tetris::types::{Axis, GameAction, PieceKind, GRID_WIDTH, GRID_LAYERS};
//!
//! let kind = PieceKind::Tee;
//! assert_eq!(PieceKind::from_str("tee"), Some(kind));
//!
//! let action = GameAction::from_str("rotateZ").unwrap();
//! assert_eq!(action, GameAction::RotateZ);
//! assert_eq!(Axis::Z.as_str(), "z");
//!
//! assert_eq!(GRID_WIDTH, 7);
//! assert_eq!(GRID_LAYERS, 10);
//! ```

/// Grid width in cells (x axis, 7 columns including both walls)
pub const GRID_WIDTH: u8 = 7;

/// Grid depth in cells (y axis, 7 columns including both walls)
pub const GRID_DEPTH: u8 = 7;

/// Grid layer count (z axis, 10 slices including the floor sentinel at z = 9)
pub const GRID_LAYERS: u8 = 10;

/// Index of the permanent floor sentinel layer
pub const FLOOR_LAYER: u8 = GRID_LAYERS - 1;

/// The polycube piece kinds
///
/// Each piece has a distinct footprint and color:
/// - **Bar**: Cyan, four voxels in a row
/// - **Cube**: Yellow, 2x2x2 block of eight voxels
/// - **Ell**: Orange, flat L-tetromino
/// - **Tee**: Magenta, flat T-tetromino
/// - **Ess**: Green, flat S-tetromino
/// - **Corner**: Red, 3D tripod (three voxels meeting at a corner voxel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Bar,
    Cube,
    Ell,
    Tee,
    Ess,
    Corner,
}

/// All piece kinds, in a fixed order (useful for drivers and tests)
pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Bar,
    PieceKind::Cube,
    PieceKind::Ell,
    PieceKind::Tee,
    PieceKind::Ess,
    PieceKind::Corner,
];

impl PieceKind {
    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use voxel_tetris::types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("bar"), Some(PieceKind::Bar));
    /// assert_eq!(PieceKind::from_str("Cube"), Some(PieceKind::Cube));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bar" => Some(PieceKind::Bar),
            "cube" => Some(PieceKind::Cube),
            "ell" => Some(PieceKind::Ell),
            "tee" => Some(PieceKind::Tee),
            "ess" => Some(PieceKind::Ess),
            "corner" => Some(PieceKind::Corner),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Bar => "bar",
            PieceKind::Cube => "cube",
            PieceKind::Ell => "ell",
            PieceKind::Tee => "tee",
            PieceKind::Ess => "ess",
            PieceKind::Corner => "corner",
        }
    }

    /// Color tag for this kind, consumed by the (out-of-scope) renderer
    pub fn color(&self) -> Color {
        match self {
            PieceKind::Bar => Color::Cyan,
            PieceKind::Cube => Color::Yellow,
            PieceKind::Ell => Color::Orange,
            PieceKind::Tee => Color::Magenta,
            PieceKind::Ess => Color::Green,
            PieceKind::Corner => Color::Red,
        }
    }
}

/// Color tag attached to each piece kind
///
/// The core never interprets colors; they ride along for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Orange,
    Magenta,
    Green,
    Red,
}

/// The three mutually orthogonal rotation axes
///
/// Rotating four times about the same axis returns a piece to its original
/// occupancy (the rotation 4-cycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Parse axis from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Game actions that can be applied to the active piece
///
/// These actions are used by both human input and scripted drivers.
/// Rotations come in forward (one 90-degree step) and reverse (three steps,
/// i.e. the opposite spin) variants per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell toward negative x
    MoveLeft,
    /// Move piece one cell toward positive x
    MoveRight,
    /// Move piece one cell toward positive y
    MoveForward,
    /// Move piece one cell toward negative y
    MoveBackward,
    /// Rotate 90 degrees about the x axis
    RotateX,
    /// Rotate 90 degrees about the y axis
    RotateY,
    /// Rotate 90 degrees about the z axis
    RotateZ,
    /// Rotate the opposite way about the x axis
    RotateXRev,
    /// Rotate the opposite way about the y axis
    RotateYRev,
    /// Rotate the opposite way about the z axis
    RotateZRev,
}

impl GameAction {
    /// Parse action from string (for driver protocols)
    ///
    /// # Examples
    ///
    /// ```
    /// use voxel_tetris::types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateXRev"), Some(GameAction::RotateXRev));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveforward" => Some(GameAction::MoveForward),
            "movebackward" => Some(GameAction::MoveBackward),
            "rotatex" => Some(GameAction::RotateX),
            "rotatey" => Some(GameAction::RotateY),
            "rotatez" => Some(GameAction::RotateZ),
            "rotatexrev" => Some(GameAction::RotateXRev),
            "rotateyrev" => Some(GameAction::RotateYRev),
            "rotatezrev" => Some(GameAction::RotateZRev),
            _ => None,
        }
    }

    /// Convert to camelCase string for driver protocols
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveForward => "moveForward",
            GameAction::MoveBackward => "moveBackward",
            GameAction::RotateX => "rotateX",
            GameAction::RotateY => "rotateY",
            GameAction::RotateZ => "rotateZ",
            GameAction::RotateXRev => "rotateXRev",
            GameAction::RotateYRev => "rotateYRev",
            GameAction::RotateZRev => "rotateZRev",
        }
    }
}

/// Outcome of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece descended one layer and is still falling
    Falling,
    /// The piece was fused into the grid at its current position
    Locked {
        /// Number of full layers removed by the compaction pass
        layers_cleared: u8,
    },
}

impl StepOutcome {
    /// True once the piece has been fused into the grid
    pub fn is_locked(&self) -> bool {
        matches!(self, StepOutcome::Locked { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_strings_roundtrip() {
        let all = [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::MoveForward,
            GameAction::MoveBackward,
            GameAction::RotateX,
            GameAction::RotateY,
            GameAction::RotateZ,
            GameAction::RotateXRev,
            GameAction::RotateYRev,
            GameAction::RotateZRev,
        ];
        for action in all {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn piece_kind_strings_roundtrip() {
        for kind in ALL_PIECE_KINDS {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }
}
