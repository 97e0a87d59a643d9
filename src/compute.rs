/// Pure game-rule functions.
///
/// Nothing here touches the terminal or the clock directly.  All randomness
/// comes through an injected RNG handle, so callers control determinism
/// (tests use a seeded `StdRng`).

use std::time::Instant;

use rand::Rng;

use crate::entities::{Enemy, Player, COL_WIDTH, ENEMY_ROWS, GOAL_ROW, GRID_COLS, GRID_ROWS, HITBOX_WIDTH};

/// Upper bound on a single frame's `dt`, in milliseconds.  Covers the very
/// first frame as well as stalls (suspended terminal, debugger pause).
pub const MAX_FRAME_DT_MS: f64 = 250.0;

/// Slowest and fastest enemy speeds, in columns per second.
pub const MIN_CPS: u32 = 2;
pub const MAX_CPS: u32 = 6;

// ── Randomness ────────────────────────────────────────────────────────────────

/// Fair coin.
pub fn flip_a_coin<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

/// A uniformly chosen enemy lane.
pub fn pick_random_row<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(ENEMY_ROWS)
}

/// Enemy speed in columns per second, drawn from 2..=6 and nudged away from
/// the extremes: half of all 2s become 3, half of all 6s become 5.
pub fn pick_random_cps<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    let cps = rng.gen_range(MIN_CPS..=MAX_CPS);
    if cps == MIN_CPS && flip_a_coin(rng) {
        MIN_CPS + 1
    } else if cps == MAX_CPS && flip_a_coin(rng) {
        MAX_CPS - 1
    } else {
        cps
    }
}

pub fn cps_to_px_per_ms(cps: u32) -> f64 {
    (cps as i32 * COL_WIDTH) as f64 / 1000.0
}

/// Enemy speed in pixels per millisecond.
pub fn pick_random_speed<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    cps_to_px_per_ms(pick_random_cps(rng))
}

// ── Movement ──────────────────────────────────────────────────────────────────

/// The cell reached by stepping `(dx, dy)` from `from`, or `None` if it lies
/// off the grid.
pub fn try_move(from: (i32, i32), dx: i32, dy: i32) -> Option<(i32, i32)> {
    let (nx, ny) = (from.0 + dx, from.1 + dy);
    if nx < 0 || nx >= GRID_COLS || ny < 0 || ny >= GRID_ROWS {
        None
    } else {
        Some((nx, ny))
    }
}

// ── Collision & win ───────────────────────────────────────────────────────────

/// Same lane and overlapping horizontal hitboxes.
pub fn collides(player: &Player, enemy: &Enemy) -> bool {
    enemy.grid_y == player.grid_y
        && enemy.loc_x < player.loc_x + HITBOX_WIDTH
        && enemy.loc_x + HITBOX_WIDTH > player.loc_x
}

pub fn any_collision(player: &Player, enemies: &[Enemy]) -> bool {
    enemies.iter().any(|e| collides(player, e))
}

pub fn reached_goal(player: &Player) -> bool {
    player.grid_y == GOAL_ROW
}

// ── Timing ────────────────────────────────────────────────────────────────────

pub fn clamp_dt(raw_ms: f64) -> f64 {
    raw_ms.clamp(0.0, MAX_FRAME_DT_MS)
}

/// Milliseconds from `last` to `now`, clamped.
pub fn frame_delta(last: Instant, now: Instant) -> f64 {
    clamp_dt(now.saturating_duration_since(last).as_secs_f64() * 1000.0)
}
