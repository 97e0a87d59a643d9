/// Mob factory.  Each call builds a brand-new mob; nothing is shared
/// between two mobs of the same variant.

use log::debug;

use crate::entities::{Enemy, Mob, MobKind, Player};
use crate::error::EntityError;

/// A concrete mob type the factory knows how to build.
pub trait Variant: Mob + Sized {
    const KIND: MobKind;

    fn fresh() -> Self;
}

impl Variant for Enemy {
    const KIND: MobKind = MobKind::Enemy;

    fn fresh() -> Self {
        Enemy::new()
    }
}

impl Variant for Player {
    const KIND: MobKind = MobKind::Player;

    fn fresh() -> Self {
        Player::new()
    }
}

fn boxed<V: Variant + 'static>() -> Box<dyn Mob> {
    Box::new(create::<V>())
}

/// Build a typed mob.
pub fn create<V: Variant>() -> V {
    debug!("creating {}", V::KIND);
    V::fresh()
}

/// Build a mob by variant name ("Enemy" or "Player").  Unknown names are
/// rejected.
pub fn create_mob(name: &str) -> Result<Box<dyn Mob>, EntityError> {
    let kind: MobKind = name.parse()?;
    Ok(match kind {
        MobKind::Enemy => boxed::<Enemy>(),
        MobKind::Player => boxed::<Player>(),
    })
}
