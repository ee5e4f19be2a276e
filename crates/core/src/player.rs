//! Player controller - the falling piece, its successor and gravity
//!
//! Every move is trial-then-commit: copy the current piece, apply the move to the
//! copy, and assign it back only if it does not collide. Rejected moves change
//! nothing.
//!
//! Per active piece the controller is always `Falling`; a downward step that is
//! blocked runs the lock sequence (place, clear rows, promote next, spawn a new
//! next) and reports whether the promoted piece spawned cleanly or topped out.

use tracing::{debug, info, trace};

use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::PieceSource;
use crate::types::{Attribute, DropOutcome};

#[derive(Debug, Clone)]
pub struct PlayerController<S> {
    current: Piece,
    next: Piece,
    fall_interval_ms: u32,
    /// Countdown to the next gravity step; may go negative before it is reset
    fall_timer_ms: i64,
    source: S,
}

impl<S: PieceSource> PlayerController<S> {
    /// Draw the current and next pieces and center the current one at row 0.
    ///
    /// The caller decides what an immediately colliding first piece means.
    pub fn new(grid_width: u16, fall_interval_ms: u32, mut source: S) -> Self {
        let mut current = Piece::new(source.next_kind());
        current.center_horizontally(grid_width);
        let next = Piece::new(source.next_kind());

        trace!(kind = ?current.kind(), x = current.x, "spawned first piece");

        Self {
            current,
            next,
            fall_interval_ms,
            fall_timer_ms: fall_interval_ms as i64,
            source,
        }
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// The lookahead piece, in spawn rotation at the origin
    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn fall_timer_ms(&self) -> i64 {
        self.fall_timer_ms
    }

    /// The falling piece's attribute at absolute grid (x, y), `EMPTY` if it does
    /// not cover that cell. Lets a renderer overlay the piece without touching
    /// the grid.
    pub fn attribute_at(&self, x: i32, y: i32) -> Attribute {
        self.current.attribute_at(x, y)
    }

    fn try_commit(&mut self, grid: &Grid, trial: Piece) -> bool {
        if trial.is_colliding_with(grid) {
            return false;
        }
        self.current = trial;
        true
    }

    pub fn move_left(&mut self, grid: &Grid) -> bool {
        self.try_commit(grid, self.current.translated(-1, 0))
    }

    pub fn move_right(&mut self, grid: &Grid) -> bool {
        self.try_commit(grid, self.current.translated(1, 0))
    }

    /// No wall kicks: a blocked rotation is simply rejected
    pub fn rotate_left(&mut self, grid: &Grid) -> bool {
        self.try_commit(grid, self.current.rotated_left())
    }

    pub fn rotate_right(&mut self, grid: &Grid) -> bool {
        self.try_commit(grid, self.current.rotated_right())
    }

    /// Player-initiated step down. Descending restarts the fall timer; a resting
    /// piece locks instead.
    pub fn soft_drop(&mut self, grid: &mut Grid) -> DropOutcome {
        let outcome = self.step_down(grid);
        if outcome == DropOutcome::Descended {
            self.fall_timer_ms = self.fall_interval_ms as i64;
        }
        outcome
    }

    /// Soft drop until the piece locks
    pub fn hard_drop(&mut self, grid: &mut Grid) -> DropOutcome {
        loop {
            match self.soft_drop(grid) {
                DropOutcome::Descended => continue,
                locked => return locked,
            }
        }
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// At most one gravity step runs per call, however large `elapsed_ms` is.
    /// Returns `None` while the timer is still running.
    pub fn update(&mut self, grid: &mut Grid, elapsed_ms: u32) -> Option<DropOutcome> {
        self.fall_timer_ms -= elapsed_ms as i64;
        if self.fall_timer_ms > 0 {
            return None;
        }
        self.fall_timer_ms = self.fall_interval_ms as i64;
        Some(self.step_down(grid))
    }

    fn step_down(&mut self, grid: &mut Grid) -> DropOutcome {
        let below = self.current.translated(0, 1);
        if below.is_colliding_with(grid) {
            return self.lock_and_advance(grid);
        }
        self.current = below;
        DropOutcome::Descended
    }

    fn lock_and_advance(&mut self, grid: &mut Grid) -> DropOutcome {
        let locked = self.current;
        grid.place(&locked);
        let rows_cleared = grid.clear_full_rows();

        debug!(
            kind = ?locked.kind(),
            x = locked.x,
            y = locked.y,
            rotation = locked.rotation().index(),
            rows_cleared,
            "piece locked"
        );

        let mut spawned = self.next;
        spawned.center_horizontally(grid.width());
        spawned.y = 0;
        self.current = spawned;
        self.next = Piece::new(self.source.next_kind());

        if self.current.is_colliding_with(grid) {
            info!(kind = ?self.current.kind(), "spawned piece collides, topped out");
            return DropOutcome::ToppedOut { rows_cleared };
        }

        trace!(kind = ?self.current.kind(), next = ?self.next.kind(), "spawned piece");
        DropOutcome::Locked { rows_cleared }
    }
}
