//! Game session - one grid, one player, and whether the game is still running
//!
//! The session is driven from outside: the loop driver calls [`GameSession::update`]
//! with the measured frame delta and forwards input as commands. Once a freshly
//! spawned piece collides the session stops running for good; every later
//! command and update is ignored. Start a new session to play again.

use tracing::{debug, info};

use crate::config::{check_limits, EngineConfig};
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::player::PlayerController;
use crate::rng::PieceSource;
use crate::types::{Attribute, Command, DropOutcome, EMPTY};

#[derive(Debug, Clone)]
pub struct GameSession<S> {
    grid: Grid,
    player: PlayerController<S>,
    running: bool,
}

impl<S: PieceSource> GameSession<S> {
    /// Start a session on an empty grid sized by `config`
    pub fn new(config: &EngineConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height);
        Self::with_grid(grid, config.fall_interval_ms, source)
    }

    /// Start a session on an existing grid, under the same size and gravity
    /// limits as [`EngineConfig::validate`]. If the first piece already
    /// collides, the session starts out stopped.
    pub fn with_grid(grid: Grid, fall_interval_ms: u32, source: S) -> Result<Self, ConfigError> {
        check_limits(grid.width(), grid.height(), fall_interval_ms)?;
        let player = PlayerController::new(grid.width(), fall_interval_ms, source);
        let running = !player.current().is_colliding_with(&grid);
        if !running {
            info!("first piece collides on spawn, session not running");
        }
        Ok(Self {
            grid,
            player,
            running,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &PlayerController<S> {
        &self.player
    }

    /// What a renderer shows at (x, y): the locked cell if any, otherwise the
    /// falling piece's cell
    pub fn attribute_at(&self, x: i32, y: i32) -> Attribute {
        match self.grid.at(x, y) {
            EMPTY => self.player.attribute_at(x, y),
            locked => locked,
        }
    }

    /// Advance gravity by `elapsed_ms`. Returns the step taken, if any.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<DropOutcome> {
        if !self.running {
            return None;
        }
        let outcome = self.player.update(&mut self.grid, elapsed_ms);
        self.observe(outcome)
    }

    pub fn move_left(&mut self) -> bool {
        self.running && self.player.move_left(&self.grid)
    }

    pub fn move_right(&mut self) -> bool {
        self.running && self.player.move_right(&self.grid)
    }

    pub fn rotate_left(&mut self) -> bool {
        self.running && self.player.rotate_left(&self.grid)
    }

    pub fn rotate_right(&mut self) -> bool {
        self.running && self.player.rotate_right(&self.grid)
    }

    pub fn soft_drop(&mut self) -> Option<DropOutcome> {
        if !self.running {
            return None;
        }
        let outcome = self.player.soft_drop(&mut self.grid);
        self.observe(Some(outcome))
    }

    pub fn hard_drop(&mut self) -> Option<DropOutcome> {
        if !self.running {
            return None;
        }
        let outcome = self.player.hard_drop(&mut self.grid);
        self.observe(Some(outcome))
    }

    /// Dispatch a command. Returns true if it changed the game state.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::RotateLeft => self.rotate_left(),
            Command::RotateRight => self.rotate_right(),
            Command::SoftDrop => self.soft_drop().is_some(),
            Command::HardDrop => self.hard_drop().is_some(),
        }
    }

    fn observe(&mut self, outcome: Option<DropOutcome>) -> Option<DropOutcome> {
        let rows = outcome.map_or(0, |o| o.rows_cleared());
        if rows > 0 {
            debug!(rows, "rows cleared");
        }
        if let Some(DropOutcome::ToppedOut { .. }) = outcome {
            self.running = false;
            info!("session lost");
        }
        outcome
    }
}
