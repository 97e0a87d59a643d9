use std::time::{Duration, Instant};

use bug_crossing::compute::*;
use bug_crossing::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn player_at(grid_x: i32, grid_y: i32) -> Player {
    let mut p = Player::new();
    p.grid_x = grid_x;
    p.grid_y = grid_y;
    p.sync_position();
    p
}

fn enemy_at(loc_x: i32, grid_y: i32) -> Enemy {
    Enemy {
        grid_y,
        speed: 0.0,
        loc_x,
        loc_y: row_to_y(grid_y),
    }
}

// ── Randomness ────────────────────────────────────────────────────────────────

#[test]
fn random_row_covers_exactly_the_enemy_lanes() {
    let mut rng = seeded_rng();
    let mut seen = [false; 4];
    for _ in 0..1_000 {
        let row = pick_random_row(&mut rng);
        assert!((1..=3).contains(&row));
        seen[row as usize] = true;
    }
    assert_eq!(seen, [false, true, true, true]);
}

#[test]
fn speed_pick_favours_the_middle() {
    let mut rng = seeded_rng();
    let mut counts = [0u32; 7];
    for _ in 0..20_000 {
        counts[pick_random_cps(&mut rng) as usize] += 1;
    }
    assert_eq!(counts[0] + counts[1], 0);
    assert!(counts[3] > counts[2]);
    assert!(counts[5] > counts[6]);
    // Extremes are rarer, not gone
    assert!(counts[2] > 0);
    assert!(counts[6] > 0);
}

#[test]
fn speed_is_columns_per_second_in_px_per_ms() {
    assert!((cps_to_px_per_ms(2) - 0.202).abs() < 1e-12);
    assert!((cps_to_px_per_ms(6) - 0.606).abs() < 1e-12);

    let mut rng = seeded_rng();
    for _ in 0..500 {
        let speed = pick_random_speed(&mut rng);
        assert!((0.202..=0.606).contains(&speed));
    }
}

#[test]
fn coin_lands_both_ways() {
    let mut rng = seeded_rng();
    let heads = (0..1_000).filter(|_| flip_a_coin(&mut rng)).count();
    assert!(heads > 400 && heads < 600);
}

// ── try_move ──────────────────────────────────────────────────────────────────

#[test]
fn try_move_inside_grid() {
    assert_eq!(try_move((2, 5), 0, -1), Some((2, 4)));
    assert_eq!(try_move((0, 0), 1, 0), Some((1, 0)));
    assert_eq!(try_move((2, 2), 0, 0), Some((2, 2)));
}

#[test]
fn try_move_rejects_every_edge() {
    assert_eq!(try_move((0, 3), -1, 0), None);
    assert_eq!(try_move((4, 3), 1, 0), None);
    assert_eq!(try_move((2, 0), 0, -1), None);
    assert_eq!(try_move((2, 5), 0, 1), None);
}

// ── Collision ─────────────────────────────────────────────────────────────────

#[test]
fn collision_requires_same_row() {
    let p = player_at(2, 3);
    assert!(collides(&p, &enemy_at(202, 3)));
    assert!(!collides(&p, &enemy_at(202, 2)));
}

#[test]
fn collision_box_edges_are_exclusive() {
    let p = player_at(2, 2); // loc_x = 202, box 202..302
    assert!(!collides(&p, &enemy_at(302, 2))); // enemy starts where player ends
    assert!(collides(&p, &enemy_at(301, 2)));
    assert!(!collides(&p, &enemy_at(102, 2))); // enemy ends where player starts
    assert!(collides(&p, &enemy_at(103, 2)));
}

#[test]
fn any_collision_over_list() {
    let p = player_at(1, 1);
    let far = enemy_at(400, 1);
    let near = enemy_at(120, 1);
    assert!(!any_collision(&p, &[far.clone()]));
    assert!(any_collision(&p, &[far, near]));
    assert!(!any_collision(&p, &[]));
}

#[test]
fn goal_is_row_zero() {
    assert!(reached_goal(&player_at(3, 0)));
    assert!(!reached_goal(&player_at(3, 1)));
}

// ── Timing ────────────────────────────────────────────────────────────────────

#[test]
fn dt_is_clamped() {
    assert_eq!(clamp_dt(16.0), 16.0);
    assert_eq!(clamp_dt(-5.0), 0.0);
    assert_eq!(clamp_dt(10_000.0), MAX_FRAME_DT_MS);
}

#[test]
fn frame_delta_measures_milliseconds() {
    let t0 = Instant::now();
    let t1 = t0 + Duration::from_millis(40);
    assert!((frame_delta(t0, t1) - 40.0).abs() < 1e-6);
    // Clock going backwards gives zero, not a negative step
    assert_eq!(frame_delta(t1, t0), 0.0);
    assert_eq!(frame_delta(t0, t0 + Duration::from_secs(5)), MAX_FRAME_DT_MS);
}
