/// Game entities: the shared `Mob` capability set and the two concrete
/// variants, `Enemy` and `Player`.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::RngCore;

use crate::compute::{pick_random_row, pick_random_speed, try_move};
use crate::error::{EntityError, ResourceError};
use crate::resources::Resources;
use crate::sprites::{CHAR_HORN_GIRL, ENEMY_BUG};
use crate::surface::Surface;

// ── Grid geometry ─────────────────────────────────────────────────────────────

pub const GRID_COLS: i32 = 5;
pub const GRID_ROWS: i32 = 6;
/// Pixel width of one grid column.
pub const COL_WIDTH: i32 = 101;
/// Pixel height of one grid row (tile face, not the full tile sprite).
pub const ROW_HEIGHT: i32 = 83;
/// Mob sprites are lifted this many pixels so they sit centred on a tile.
pub const SPRITE_Y_OFFSET: i32 = 15;
/// Width of the horizontal collision box shared by every mob.
pub const HITBOX_WIDTH: i32 = 100;

/// Where the player starts, and where it returns after a hit or a win.
pub const PLAYER_START: (i32, i32) = (2, 5);
/// The goal (water) row.
pub const GOAL_ROW: i32 = 0;

pub const ENEMY_COUNT: usize = 3;
/// Rows enemies may travel along (the stone rows).
pub const ENEMY_ROWS: std::ops::RangeInclusive<i32> = 1..=3;
/// Respawn column: one full tile off the left edge.
pub const ENEMY_SPAWN_X: i32 = -COL_WIDTH;
/// Past this x the enemy is off the right edge and respawns.
pub const ENEMY_RESPAWN_BOUND: i32 = 605;

/// Pixel y for a mob standing on grid row `grid_y`.
pub fn row_to_y(grid_y: i32) -> i32 {
    grid_y * ROW_HEIGHT - SPRITE_Y_OFFSET
}

// ── Mob capability set ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MobKind {
    Enemy,
    Player,
}

impl MobKind {
    pub fn name(self) -> &'static str {
        match self {
            MobKind::Enemy => "Enemy",
            MobKind::Player => "Player",
        }
    }
}

impl fmt::Display for MobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MobKind {
    type Err = EntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Enemy" => Ok(MobKind::Enemy),
            "Player" => Ok(MobKind::Player),
            other => Err(EntityError::UnknownVariant(other.to_string())),
        }
    }
}

/// Anything that moves and draws itself.
pub trait Mob {
    fn kind(&self) -> MobKind;

    /// Catalogue key of the sprite, resolved through the loader at draw time.
    fn sprite_key(&self) -> &'static str;

    /// Current draw location in canvas pixels.
    fn position(&self) -> (i32, i32);

    /// Advance by `dt` milliseconds.
    fn update(&mut self, dt: f64, rng: &mut dyn RngCore);

    fn render(&self, surface: &mut dyn Surface, resources: &Resources) -> Result<(), ResourceError> {
        let sprite = resources.get(self.sprite_key())?;
        let (x, y) = self.position();
        surface.draw_image(sprite, x, y);
        Ok(())
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyState {
    /// On screen (or still entering from the left); keeps moving right.
    Traveling,
    /// Past the right edge; next update sends it back to the left.
    Respawning,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub grid_y: i32,
    /// Pixels per millisecond.
    pub speed: f64,
    pub loc_x: i32,
    pub loc_y: i32,
}

impl Enemy {
    /// A fresh enemy parked just past the right edge, so its first update
    /// drops it into a random lane at a random speed.
    pub fn new() -> Self {
        Self {
            grid_y: 1,
            speed: 505.0 / 1000.0,
            loc_x: ENEMY_RESPAWN_BOUND + 1,
            loc_y: row_to_y(1),
        }
    }

    pub fn state(&self) -> EnemyState {
        if self.loc_x > ENEMY_RESPAWN_BOUND {
            EnemyState::Respawning
        } else {
            EnemyState::Traveling
        }
    }

    fn respawn(&mut self, rng: &mut dyn RngCore) {
        self.grid_y = pick_random_row(rng);
        self.loc_y = row_to_y(self.grid_y);
        self.loc_x = ENEMY_SPAWN_X;
        self.speed = pick_random_speed(rng);
        debug!("enemy respawned on row {} at {:.3} px/ms", self.grid_y, self.speed);
    }
}

impl Default for Enemy {
    fn default() -> Self {
        Self::new()
    }
}

impl Mob for Enemy {
    fn kind(&self) -> MobKind {
        MobKind::Enemy
    }

    fn sprite_key(&self) -> &'static str {
        ENEMY_BUG
    }

    fn position(&self) -> (i32, i32) {
        (self.loc_x, self.loc_y)
    }

    fn update(&mut self, dt: f64, rng: &mut dyn RngCore) {
        match self.state() {
            EnemyState::Traveling => {
                self.loc_x += (self.speed * dt).floor() as i32;
            }
            EnemyState::Respawning => self.respawn(rng),
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Unit grid delta `(dx, dy)`; y grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// What became of a movement request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The target cell is off the grid; nothing changed.
    Blocked,
    /// No direction was given.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub grid_x: i32,
    pub grid_y: i32,
    pub loc_x: i32,
    pub loc_y: i32,
}

impl Player {
    pub fn new() -> Self {
        let (gx, gy) = PLAYER_START;
        Self {
            grid_x: gx,
            grid_y: gy,
            loc_x: gx * COL_WIDTH,
            loc_y: row_to_y(gy),
        }
    }

    /// Project grid coordinates onto canvas pixels.
    pub fn sync_position(&mut self) {
        self.loc_x = self.grid_x * COL_WIDTH;
        self.loc_y = row_to_y(self.grid_y);
    }

    /// Send the player back to the start cell.  Pixels follow on the next
    /// update.
    pub fn reset_to_start(&mut self) {
        (self.grid_x, self.grid_y) = PLAYER_START;
    }

    pub fn handle_input(&mut self, direction: Option<Direction>) -> MoveOutcome {
        let (dx, dy) = direction.map(Direction::delta).unwrap_or((0, 0));
        if (dx, dy) == (0, 0) {
            return MoveOutcome::Ignored;
        }
        match try_move((self.grid_x, self.grid_y), dx, dy) {
            Some((nx, ny)) => {
                self.grid_x = nx;
                self.grid_y = ny;
                MoveOutcome::Moved
            }
            None => MoveOutcome::Blocked,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Mob for Player {
    fn kind(&self) -> MobKind {
        MobKind::Player
    }

    fn sprite_key(&self) -> &'static str {
        CHAR_HORN_GIRL
    }

    fn position(&self) -> (i32, i32) {
        (self.loc_x, self.loc_y)
    }

    // Grid-driven: neither elapsed time nor randomness matters.
    fn update(&mut self, _dt: f64, _rng: &mut dyn RngCore) {
        self.sync_position();
    }
}
