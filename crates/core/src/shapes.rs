//! Shapes module - the static tetromino catalog
//!
//! Each kind has four rotation masks over a 4x4 bounding box. A mask is stored as
//! four row nibbles (row 0 first); within a row, bit 3 is local x = 0 and bit 0 is
//! local x = 3, so `0b1110` reads left to right as `###.`.
//!
//! The table is plain `static` data and is never mutated.

use crate::types::{Attribute, Rotation, ShapeKind, EMPTY};

/// Side length of a piece's bounding box
pub const BOX_SIZE: i32 = 4;

/// One rotation state: four rows of four bits
pub type Mask = [u8; 4];

/// Catalog entry for one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub kind: ShapeKind,
    pub masks: [Mask; 4],
}

impl ShapeDef {
    /// Whether local cell (lx, ly) is filled in the given rotation.
    /// Anything outside `0..4` is unfilled.
    #[inline]
    pub fn is_filled(&self, rotation: Rotation, lx: i32, ly: i32) -> bool {
        if !(0..BOX_SIZE).contains(&lx) || !(0..BOX_SIZE).contains(&ly) {
            return false;
        }
        let row = self.masks[rotation.index()][ly as usize];
        row & (0b1000 >> lx) != 0
    }

    /// Filled local cells of one rotation, row-major
    pub fn filled_cells(&self, rotation: Rotation) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..BOX_SIZE).flat_map(move |ly| {
            (0..BOX_SIZE)
                .filter(move |&lx| self.is_filled(rotation, lx, ly))
                .map(move |lx| (lx, ly))
        })
    }
}

const I_MASKS: [Mask; 4] = [
    [0b0000, 0b0000, 0b1111, 0b0000],
    [0b0010, 0b0010, 0b0010, 0b0010],
    [0b0000, 0b0000, 0b1111, 0b0000],
    [0b0010, 0b0010, 0b0010, 0b0010],
];

const J_MASKS: [Mask; 4] = [
    [0b0000, 0b1110, 0b0010, 0b0000],
    [0b0100, 0b0100, 0b1100, 0b0000],
    [0b1000, 0b1110, 0b0000, 0b0000],
    [0b0110, 0b0100, 0b0100, 0b0000],
];

const L_MASKS: [Mask; 4] = [
    [0b0000, 0b1110, 0b1000, 0b0000],
    [0b1100, 0b0100, 0b0100, 0b0000],
    [0b0010, 0b1110, 0b0000, 0b0000],
    [0b0100, 0b0100, 0b0110, 0b0000],
];

// Same square in every state
const O_MASKS: [Mask; 4] = [[0b0000, 0b0110, 0b0110, 0b0000]; 4];

const S_MASKS: [Mask; 4] = [
    [0b0000, 0b0110, 0b1100, 0b0000],
    [0b0100, 0b0110, 0b0010, 0b0000],
    [0b0000, 0b0110, 0b1100, 0b0000],
    [0b0100, 0b0110, 0b0010, 0b0000],
];

const T_MASKS: [Mask; 4] = [
    [0b0000, 0b1110, 0b0100, 0b0000],
    [0b0100, 0b1100, 0b0100, 0b0000],
    [0b0100, 0b1110, 0b0000, 0b0000],
    [0b0100, 0b0110, 0b0100, 0b0000],
];

const Z_MASKS: [Mask; 4] = [
    [0b0000, 0b1100, 0b0110, 0b0000],
    [0b0010, 0b0110, 0b0100, 0b0000],
    [0b0000, 0b1100, 0b0110, 0b0000],
    [0b0010, 0b0110, 0b0100, 0b0000],
];

/// The catalog, indexed by [`ShapeKind::index`]
pub static CATALOG: [ShapeDef; 7] = [
    ShapeDef { kind: ShapeKind::I, masks: I_MASKS },
    ShapeDef { kind: ShapeKind::J, masks: J_MASKS },
    ShapeDef { kind: ShapeKind::L, masks: L_MASKS },
    ShapeDef { kind: ShapeKind::O, masks: O_MASKS },
    ShapeDef { kind: ShapeKind::S, masks: S_MASKS },
    ShapeDef { kind: ShapeKind::T, masks: T_MASKS },
    ShapeDef { kind: ShapeKind::Z, masks: Z_MASKS },
];

/// Catalog entry for a kind
#[inline]
pub fn shape(kind: ShapeKind) -> &'static ShapeDef {
    &CATALOG[kind.index()]
}

/// Attribute of `kind` at local (lx, ly) in `rotation`, or `EMPTY`.
///
/// Total over all inputs: local coordinates outside the 4x4 box are empty, so
/// callers can probe a padded neighborhood without bounds checks.
#[inline]
pub fn cell_at(kind: ShapeKind, rotation: Rotation, lx: i32, ly: i32) -> Attribute {
    if shape(kind).is_filled(rotation, lx, ly) {
        kind.attribute()
    } else {
        EMPTY
    }
}
