//! World domain: the mutable handle passed into entity updates.

use rand_chacha::ChaCha8Rng;

use crate::combat::Projectile;
use crate::core::FrameEvent;
use crate::effects::Effects;
use crate::level::Tilemap;
use crate::sprites::SpriteLibrary;

/// Everything an entity may read or spawn into during its update.
///
/// Spawn targets are separate from the collection being traversed, so an
/// enemy pushing projectiles or sparks never disturbs the enemy loop.
pub struct FrameContext<'a> {
    pub tilemap: &'a dyn Tilemap,
    pub sprites: &'a SpriteLibrary,
    pub rng: &'a mut ChaCha8Rng,
    pub effects: &'a mut Effects,
    pub projectiles: &'a mut Vec<Projectile>,
    pub events: &'a mut Vec<FrameEvent>,
}
