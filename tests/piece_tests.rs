//! Piece tests - local occupancy, rotation closure, recentering

use voxel_tetris::core::Piece;
use voxel_tetris::types::{Axis, PieceKind, ALL_PIECE_KINDS};

const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

#[test]
fn test_cell_counts() {
    assert_eq!(Piece::new(PieceKind::Bar).cell_count(), 4);
    assert_eq!(Piece::new(PieceKind::Cube).cell_count(), 8);
    assert_eq!(Piece::new(PieceKind::Ell).cell_count(), 4);
    assert_eq!(Piece::new(PieceKind::Tee).cell_count(), 4);
    assert_eq!(Piece::new(PieceKind::Ess).cell_count(), 4);
    assert_eq!(Piece::new(PieceKind::Corner).cell_count(), 4);
}

#[test]
fn test_bounding_box_sides() {
    assert_eq!(Piece::new(PieceKind::Bar).side(), 4);
    assert_eq!(Piece::new(PieceKind::Cube).side(), 2);
    assert_eq!(Piece::new(PieceKind::Ell).side(), 3);
    assert_eq!(Piece::new(PieceKind::Tee).side(), 3);
    assert_eq!(Piece::new(PieceKind::Ess).side(), 3);
    assert_eq!(Piece::new(PieceKind::Corner).side(), 2);
}

#[test]
fn test_rotation_closure_every_kind_every_axis() {
    for kind in ALL_PIECE_KINDS {
        for axis in AXES {
            let mut piece = Piece::new(kind);
            let original = piece.occupied_cells();
            for _ in 0..4 {
                piece.rotate(axis);
            }
            assert_eq!(
                piece.occupied_cells(),
                original,
                "four {axis:?} rotations must restore {kind:?}"
            );
        }
    }
}

#[test]
fn test_rotation_preserves_cell_count() {
    for kind in ALL_PIECE_KINDS {
        let mut piece = Piece::new(kind);
        let count = piece.cell_count();
        // A mixed-axis sequence; count must never drift.
        for axis in [Axis::X, Axis::Z, Axis::Y, Axis::X, Axis::Y, Axis::Z] {
            piece.rotate(axis);
            assert_eq!(piece.cell_count(), count, "{kind:?} after {axis:?}");
        }
    }
}

#[test]
fn test_rotation_keeps_cells_inside_the_box() {
    for kind in ALL_PIECE_KINDS {
        let mut piece = Piece::new(kind);
        let side = piece.side();
        for axis in [Axis::Y, Axis::Y, Axis::X, Axis::Z, Axis::X] {
            piece.rotate(axis);
            for (i, j, k) in piece.occupied_cells() {
                assert!(i < side && j < side && k < side, "{kind:?} after {axis:?}");
            }
        }
    }
}

#[test]
fn test_rotation_reanchors_each_axis_to_zero() {
    for kind in ALL_PIECE_KINDS {
        for axis in AXES {
            let mut piece = Piece::new(kind);
            piece.rotate(axis);
            let cells = piece.occupied_cells();
            assert_eq!(cells.iter().map(|&(i, _, _)| i).min(), Some(0));
            assert_eq!(cells.iter().map(|&(_, j, _)| j).min(), Some(0));
            assert_eq!(cells.iter().map(|&(_, _, k)| k).min(), Some(0));
        }
    }
}

#[test]
fn test_corner_rotation_about_z_exact() {
    // Corner starts as {(0,0,0), (1,0,0), (0,1,0), (0,0,1)}. A quarter turn
    // about z maps (i,j,k) to (-j,i,k); re-anchoring shifts x back up by one.
    let mut piece = Piece::new(PieceKind::Corner);
    piece.rotate(Axis::Z);
    let cells = piece.occupied_cells();
    assert_eq!(
        cells.as_slice(),
        &[(0, 0, 0), (1, 0, 0), (1, 0, 1), (1, 1, 0)]
    );
}

#[test]
fn test_cube_is_rotation_invariant() {
    let original = Piece::new(PieceKind::Cube).occupied_cells();
    for axis in AXES {
        let mut piece = Piece::new(PieceKind::Cube);
        piece.rotate(axis);
        assert_eq!(piece.occupied_cells(), original);
    }
}

#[test]
fn test_placement_accessors() {
    let mut piece = Piece::new(PieceKind::Tee);
    piece.set_offset_x(3);
    piece.set_offset_y(1);
    piece.set_layer(5);
    assert_eq!(
        (piece.offset_x(), piece.offset_y(), piece.layer()),
        (3, 1, 5)
    );

    piece.shift_x(1);
    piece.shift_y(-1);
    piece.descend();
    assert_eq!(
        (piece.offset_x(), piece.offset_y(), piece.layer()),
        (4, 0, 6)
    );
}

#[test]
fn test_occupied_is_false_outside_the_box() {
    let piece = Piece::new(PieceKind::Cube);
    assert!(piece.occupied(0, 0, 0));
    assert!(!piece.occupied(2, 0, 0));
    assert!(!piece.occupied(0, 5, 0));
}

#[test]
fn test_rotation_does_not_touch_placement() {
    let mut piece = Piece::new(PieceKind::Ell);
    piece.set_offset_x(2);
    piece.set_offset_y(3);
    piece.set_layer(4);
    piece.rotate(Axis::Y);
    assert_eq!(
        (piece.offset_x(), piece.offset_y(), piece.layer()),
        (2, 3, 4)
    );
}
