//! Shared types module - plain data used by the engine, the renderer and the input layer
//!
//! Everything here is a pure data structure with no external dependencies, so the
//! same definitions can be used by the core engine, the terminal view and tests.
//!
//! # Grid Dimensions
//!
//! Default playfield dimensions (a session may use any validated size):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn**: bounding box at `x = width / 2 - 2`, `y = 0`
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 200 | Gravity: one row every 200ms |
//! | `INPUT_POLL_MS` | 50 | How long the loop driver waits for a key |
//!
//! # Examples
//!
//! ```
//! use fallgrid_types::{Command, Rotation, ShapeKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! let kind = ShapeKind::T;
//! assert_eq!(kind.as_str(), "T");
//! assert_eq!(ShapeKind::from_attribute(kind.attribute()), Some(kind));
//!
//! assert_eq!(Rotation::North.rotate_right(), Rotation::East);
//! assert_ne!(Command::RotateLeft, Command::RotateRight);
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Default grid width in cells
pub const GRID_WIDTH: u16 = 10;

/// Default grid height in cells
pub const GRID_HEIGHT: u16 = 20;

/// Default gravity interval in milliseconds (one row per interval)
pub const FALL_INTERVAL_MS: u32 = 200;

/// Input poll timeout used by the loop driver
pub const INPUT_POLL_MS: u32 = 50;

/// Opaque cell tag. `EMPTY` (0) means unoccupied, any other value is the
/// attribute of the piece that locked there.
pub type Attribute = u8;

/// The empty cell marker
pub const EMPTY: Attribute = 0;

/// The seven tetromino kinds
///
/// Each kind carries a distinct non-zero attribute the renderer maps to a color:
/// - **I**: cyan bar
/// - **J**: blue
/// - **L**: orange
/// - **O**: yellow square
/// - **S**: green
/// - **T**: magenta
/// - **Z**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// Every kind, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Position of this kind in [`ShapeKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Attribute written into the grid when a piece of this kind locks
    ///
    /// ```
    /// use fallgrid_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::I.attribute(), 1);
    /// assert_eq!(ShapeKind::Z.attribute(), 7);
    /// ```
    pub fn attribute(self) -> crate::Attribute {
        self as u8 + 1
    }

    /// Inverse of [`ShapeKind::attribute`]; `None` for `EMPTY` and unknown tags
    pub fn from_attribute(attr: crate::Attribute) -> Option<Self> {
        match attr {
            1..=7 => Some(Self::ALL[(attr - 1) as usize]),
            _ => None,
        }
    }

    /// Uppercase letter, as shown in the next-piece panel
    ///
    /// ```
    /// use fallgrid_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::O.as_str(), "O");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
            ShapeKind::O => "O",
            ShapeKind::S => "S",
            ShapeKind::T => "T",
            ShapeKind::Z => "Z",
        }
    }
}

/// Rotation state of a piece, one of four
///
/// `North` is the spawn state (index 0). `rotate_right` steps the index up,
/// `rotate_left` steps it down, both modulo 4:
/// North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index in `0..4`
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from any index; wraps modulo 4
    ///
    /// ```
    /// use fallgrid_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(2), Rotation::South);
    /// assert_eq!(Rotation::from_index(5), Rotation::East);
    /// ```
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Increment the rotation state
    ///
    /// ```
    /// use fallgrid_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_right(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_right(), Rotation::North);
    /// ```
    pub fn rotate_right(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Decrement the rotation state
    ///
    /// ```
    /// use fallgrid_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_left(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_left(), Rotation::North);
    /// ```
    pub fn rotate_left(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Player commands accepted by a game session
///
/// Produced by the input layer, consumed by `GameSession::apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Step the rotation state down
    RotateLeft,
    /// Step the rotation state up
    RotateRight,
    /// Drop one row, locking if the piece is resting
    SoftDrop,
    /// Soft drop repeatedly until the piece locks
    HardDrop,
}

/// Result of a downward step (gravity tick, soft drop or hard drop)
///
/// `rows_cleared` is reported for collaborators that keep score; the engine
/// itself only needs to know whether the session topped out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Descended,
    /// The piece locked and the next piece spawned cleanly
    Locked { rows_cleared: usize },
    /// The piece locked and the next piece spawned already colliding
    ToppedOut { rows_cleared: usize },
}

impl DropOutcome {
    /// True when the step ended with a lock
    pub fn locked(&self) -> bool {
        !matches!(self, DropOutcome::Descended)
    }

    /// Rows removed by the lock, zero when the piece only descended
    pub fn rows_cleared(&self) -> usize {
        match *self {
            DropOutcome::Descended => 0,
            DropOutcome::Locked { rows_cleared } | DropOutcome::ToppedOut { rows_cleared } => {
                rows_cleared
            }
        }
    }
}
