/// The game loop engine: owns the mobs and the pre-rendered background, and
/// runs one update → collision → win-check → render cycle per tick.

use std::time::Instant;

use log::{debug, info, trace};
use rand::RngCore;

use crate::compute::{any_collision, frame_delta, reached_goal};
use crate::entities::{Direction, Enemy, Mob, MoveOutcome, Player, COL_WIDTH, ENEMY_COUNT, GRID_COLS, GRID_ROWS, ROW_HEIGHT};
use crate::error::{GameError, ResourceError};
use crate::factory::create;
use crate::resources::Resources;
use crate::sprites::{GRASS_BLOCK, STONE_BLOCK, WATER_BLOCK};
use crate::surface::{Canvas, Surface, BLACK, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Background tile for each grid row, top to bottom.
pub const ROW_IMAGES: [&str; GRID_ROWS as usize] = [
    WATER_BLOCK, // goal
    STONE_BLOCK,
    STONE_BLOCK,
    STONE_BLOCK,
    GRASS_BLOCK,
    GRASS_BLOCK,
];

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    pub dt: f64,
    pub collided: bool,
    pub won: bool,
}

pub struct Engine {
    pub enemies: Vec<Enemy>,
    pub player: Player,
    game_map: Canvas,
    last_tick: Option<Instant>,
}

impl Engine {
    /// Build the mobs and paint the static background.  Needs every tile
    /// in `ROW_IMAGES` already loaded.
    pub fn new(resources: &Resources) -> Result<Self, GameError> {
        let enemies = (0..ENEMY_COUNT).map(|_| create::<Enemy>()).collect();
        let player = create::<Player>();
        let game_map = generate_game_map(resources)?;
        info!("engine ready: {} enemies, {}x{} map", ENEMY_COUNT, GRID_COLS, GRID_ROWS);
        Ok(Self {
            enemies,
            player,
            game_map,
            last_tick: None,
        })
    }

    /// One-off setup before the first frame.  Nothing to do yet.
    pub fn reset(&mut self) {
        trace!("engine reset");
    }

    pub fn game_map(&self) -> &Canvas {
        &self.game_map
    }

    pub fn handle_input(&mut self, direction: Option<Direction>) -> MoveOutcome {
        let outcome = self.player.handle_input(direction);
        debug!(
            "input {:?} -> {:?}, player at ({}, {})",
            direction, outcome, self.player.grid_x, self.player.grid_y
        );
        outcome
    }

    /// Update phase plus collision and win checks for a frame `dt`
    /// milliseconds long.
    pub fn update<R: RngCore>(&mut self, dt: f64, rng: &mut R) -> TickReport {
        for enemy in &mut self.enemies {
            enemy.update(dt, rng);
        }
        self.player.update(dt, rng);

        let collided = any_collision(&self.player, &self.enemies);
        if collided {
            debug!("collision on row {}", self.player.grid_y);
            self.player.reset_to_start();
        }

        let won = reached_goal(&self.player);
        if won {
            info!("player reached the water");
            self.player.reset_to_start();
        }

        TickReport { dt, collided, won }
    }

    /// Background, then enemies, then the player on top.
    pub fn render(&self, surface: &mut dyn Surface, resources: &Resources) -> Result<(), ResourceError> {
        surface.draw_image(&self.game_map, 0, 0);
        for enemy in &self.enemies {
            enemy.render(surface, resources)?;
        }
        self.player.render(surface, resources)
    }

    /// A full tick at wall-clock time `now`.  The first tick after start
    /// measures from itself, so its `dt` is zero.
    pub fn tick<R: RngCore>(
        &mut self,
        now: Instant,
        surface: &mut dyn Surface,
        resources: &Resources,
        rng: &mut R,
    ) -> Result<TickReport, ResourceError> {
        let dt = frame_delta(self.last_tick.unwrap_or(now), now);
        let report = self.update(dt, rng);
        self.render(surface, resources)?;
        self.last_tick = Some(now);
        Ok(report)
    }
}

/// Paint the static background once: black fill, then one tile per cell.
pub fn generate_game_map(resources: &Resources) -> Result<Canvas, ResourceError> {
    let mut map = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    map.fill_rect(0, 0, CANVAS_WIDTH, CANVAS_HEIGHT, BLACK);

    for (row, key) in ROW_IMAGES.iter().enumerate() {
        let tile = resources.get(key)?;
        for col in 0..GRID_COLS {
            map.draw_image(tile, col * COL_WIDTH, row as i32 * ROW_HEIGHT);
        }
    }
    Ok(map)
}
