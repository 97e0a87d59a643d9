use bug_crossing::entities::*;
use bug_crossing::error::EntityError;
use bug_crossing::factory::*;
use bug_crossing::sprites::{CHAR_HORN_GIRL, ENEMY_BUG};

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn create_mob_builds_each_registered_variant() {
    let enemy = create_mob("Enemy").unwrap();
    assert_eq!(enemy.kind(), MobKind::Enemy);
    assert_eq!(enemy.sprite_key(), ENEMY_BUG);
    assert_eq!(enemy.position(), (606, 68));

    let player = create_mob("Player").unwrap();
    assert_eq!(player.kind(), MobKind::Player);
    assert_eq!(player.sprite_key(), CHAR_HORN_GIRL);
    assert_eq!(player.position(), (202, 400));
}

#[test]
fn create_mob_rejects_unknown_names() {
    match create_mob("Dragon") {
        Err(EntityError::UnknownVariant(name)) => assert_eq!(name, "Dragon"),
        Ok(_) => panic!("unknown variant must not build a mob"),
    }
    // Names are case-sensitive
    assert!(create_mob("enemy").is_err());
    assert!(create_mob("").is_err());
}

#[test]
fn mobs_from_the_same_variant_are_independent() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut a = create_mob("Enemy").unwrap();
    let b = create_mob("Enemy").unwrap();

    a.update(16.0, &mut rng); // respawns a
    assert_eq!(a.position().0, -101);
    assert_eq!(b.position(), (606, 68));
}

#[test]
fn typed_create_matches_constructor() {
    assert_eq!(create::<Enemy>(), Enemy::new());
    assert_eq!(create::<Player>(), Player::new());
    assert_eq!(<Enemy as Variant>::KIND, MobKind::Enemy);
    assert_eq!(<Player as Variant>::KIND, MobKind::Player);
}
