//! Property tests for the engine invariants.
//!
//! - Four same-direction turns, or a turn and its inverse, restore a piece.
//! - On an empty grid a piece collides exactly when a cell leaves the bounds.
//! - Locking writes exactly the piece's cells and nothing else.
//! - Clearing keeps the surviving rows in order and refills from the top.
//! - A running session's falling piece never overlaps the grid.

use proptest::prelude::*;

use fallgrid::core::{EngineConfig, GameSession, Grid, Piece, Randomizer, RandomizerKind};
use fallgrid::types::{Attribute, Command, Rotation, ShapeKind, EMPTY};

fn kind_strategy() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ShapeKind::ALL.to_vec())
}

fn rotation_strategy() -> impl Strategy<Value = Rotation> {
    (0usize..4).prop_map(Rotation::from_index)
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop::sample::select(vec![
        Command::MoveLeft,
        Command::MoveRight,
        Command::RotateLeft,
        Command::RotateRight,
        Command::SoftDrop,
        Command::HardDrop,
    ])
}

/// Rows of attributes, with full rows mixed in so clears actually happen
fn rows_strategy() -> impl Strategy<Value = Vec<Vec<Attribute>>> {
    (4usize..=12, 4usize..=24).prop_flat_map(|(w, h)| {
        let cell = prop_oneof![3 => Just(EMPTY), 1 => 1u8..=7];
        let row = prop_oneof![
            3 => prop::collection::vec(cell, w),
            1 => (1u8..=7).prop_map(move |a| vec![a; w]),
        ];
        prop::collection::vec(row, h)
    })
}

fn to_grid(rows: &[Vec<Attribute>]) -> Grid {
    let picture: String = rows
        .iter()
        .map(|row| {
            let mut line: String = row
                .iter()
                .map(|&a| if a == EMPTY { '.' } else { (b'0' + a) as char })
                .collect();
            line.push('\n');
            line
        })
        .collect();
    Grid::parse(&picture).unwrap()
}

fn grid_rows(grid: &Grid) -> Vec<Vec<Attribute>> {
    (0..grid.height() as usize).map(|y| grid.row(y).to_vec()).collect()
}

proptest! {
    #[test]
    fn rotations_cycle_with_order_four(kind in kind_strategy(), rot in rotation_strategy(), x in -5i32..15, y in -5i32..25) {
        let start = Piece::at(kind, x, y, rot);

        let mut p = start;
        for _ in 0..4 {
            p.rotate_right();
        }
        prop_assert_eq!(p, start);

        for _ in 0..4 {
            p.rotate_left();
        }
        prop_assert_eq!(p, start);

        prop_assert_eq!(start.rotated_right().rotated_left(), start);
        prop_assert_eq!(start.rotated_left().rotated_right(), start);
    }

    #[test]
    fn empty_grid_collision_is_bounds(kind in kind_strategy(), rot in rotation_strategy(), x in -4i32..12, y in -4i32..22) {
        let grid = Grid::new(10, 20);
        let piece = Piece::at(kind, x, y, rot);
        let outside = piece.cells().iter().any(|&(cx, cy)| !grid.in_range(cx, cy));
        prop_assert_eq!(piece.is_colliding_with(&grid), outside);
    }

    #[test]
    fn place_writes_only_piece_cells(rows in rows_strategy(), kind in kind_strategy(), rot in rotation_strategy(), x in -3i32..12, y in -3i32..24) {
        let piece = Piece::at(kind, x, y, rot);
        let cells = piece.cells();

        // Carve the piece's footprint out of the generated rows
        let mut rows = rows;
        for &(cx, cy) in cells.iter().filter(|&&(cx, cy)| cx >= 0 && cy >= 0) {
            if let Some(cell) = rows.get_mut(cy as usize).and_then(|r| r.get_mut(cx as usize)) {
                *cell = EMPTY;
            }
        }
        let mut grid = to_grid(&rows);
        if piece.is_colliding_with(&grid) {
            // Partly out of bounds
            return Ok(());
        }

        let before = grid.clone();
        grid.place(&piece);

        prop_assert_eq!(grid.filled_count(), before.filled_count() + cells.len());
        for cy in 0..grid.height() as i32 {
            for cx in 0..grid.width() as i32 {
                let expected = if cells.contains(&(cx, cy)) {
                    kind.attribute()
                } else {
                    before.at(cx, cy)
                };
                prop_assert_eq!(grid.at(cx, cy), expected);
            }
        }
    }

    #[test]
    fn clearing_compacts_surviving_rows(rows in rows_strategy()) {
        let mut grid = to_grid(&rows);
        let width = grid.width() as usize;
        let height = grid.height() as usize;

        let survivors: Vec<Vec<Attribute>> = rows
            .iter()
            .filter(|row| row.iter().any(|&a| a == EMPTY))
            .cloned()
            .collect();
        let full = height - survivors.len();
        let filled_before = grid.filled_count();

        prop_assert_eq!(grid.clear_full_rows(), full);
        prop_assert_eq!((grid.width() as usize, grid.height() as usize), (width, height));
        prop_assert_eq!(grid.filled_count(), filled_before - full * width);

        let after = grid_rows(&grid);
        for row in &after[..full] {
            prop_assert!(row.iter().all(|&a| a == EMPTY));
        }
        prop_assert_eq!(&after[full..], &survivors[..]);
        prop_assert!((0..height).all(|y| !grid.is_row_full(y)));
    }

    #[test]
    fn running_session_piece_never_overlaps(
        seed in any::<u64>(),
        use_bag in any::<bool>(),
        commands in prop::collection::vec((command_strategy(), 0u32..400), 1..120),
    ) {
        let kind = if use_bag { RandomizerKind::Bag } else { RandomizerKind::Uniform };
        let config = EngineConfig::default();
        let mut session = GameSession::new(&config, Randomizer::new(kind, seed)).unwrap();

        for (command, elapsed_ms) in commands {
            session.apply(command);
            session.update(elapsed_ms);

            let grid = session.grid();
            prop_assert!((0..grid.height() as usize).all(|y| !grid.is_row_full(y)));
            if session.is_running() {
                prop_assert!(!session.player().current().is_colliding_with(grid));
            }
        }
    }
}
