//! Piece module - a positioned, rotated instance of a catalog shape
//!
//! `Piece` is a small `Copy` value. Movement and rotation are legal only if the
//! moved copy does not collide, so the controller builds a trial piece, tests
//! it against the grid and commits it by assignment.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::shapes::{self, BOX_SIZE};
use crate::types::{Attribute, Rotation, ShapeKind, EMPTY};

/// Absolute grid positions of a piece's filled cells
pub type PieceCells = ArrayVec<(i32, i32), 16>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    /// Grid column of the bounding box's left edge (may be negative)
    pub x: i32,
    /// Grid row of the bounding box's top edge (may be negative)
    pub y: i32,
    rotation: Rotation,
}

impl Piece {
    /// A piece of `kind` at the origin in its spawn rotation
    pub fn new(kind: ShapeKind) -> Self {
        Self::at(kind, 0, 0, Rotation::North)
    }

    pub fn at(kind: ShapeKind, x: i32, y: i32, rotation: Rotation) -> Self {
        Self { kind, x, y, rotation }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn attribute(&self) -> Attribute {
        self.kind.attribute()
    }

    /// Attribute at local (lx, ly) of the current rotation, `EMPTY` outside the box
    #[inline]
    pub fn cell_at(&self, lx: i32, ly: i32) -> Attribute {
        shapes::cell_at(self.kind, self.rotation, lx, ly)
    }

    /// Attribute this piece shows at absolute grid (x, y)
    #[inline]
    pub fn attribute_at(&self, x: i32, y: i32) -> Attribute {
        self.cell_at(x - self.x, y - self.y)
    }

    pub fn rotate_left(&mut self) {
        self.rotation = self.rotation.rotate_left();
    }

    pub fn rotate_right(&mut self) {
        self.rotation = self.rotation.rotate_right();
    }

    /// Copy shifted by (dx, dy)
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy rotated one step left
    pub fn rotated_left(&self) -> Self {
        let mut trial = *self;
        trial.rotate_left();
        trial
    }

    /// Copy rotated one step right
    pub fn rotated_right(&self) -> Self {
        let mut trial = *self;
        trial.rotate_right();
        trial
    }

    /// Spawn placement: `x = grid_width / 2 - 2`, y untouched
    pub fn center_horizontally(&mut self, grid_width: u16) {
        self.x = grid_width as i32 / 2 - BOX_SIZE / 2;
    }

    /// Absolute positions of the filled cells
    pub fn cells(&self) -> PieceCells {
        shapes::shape(self.kind)
            .filled_cells(self.rotation)
            .map(|(lx, ly)| (self.x + lx, self.y + ly))
            .collect()
    }

    /// True if any filled cell is off-grid or lands on an occupied cell.
    ///
    /// Off-grid is whatever [`Grid::in_range`] rejects, including rows above
    /// row 0: there is no hidden spawn area.
    pub fn is_colliding_with(&self, grid: &Grid) -> bool {
        self.cells()
            .iter()
            .any(|&(x, y)| !grid.in_range(x, y) || grid.at(x, y) != EMPTY)
    }
}
