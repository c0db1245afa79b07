//! Combat domain: enemies, their projectiles and the tuning both share.

pub mod enemy;
pub mod projectile;
pub mod resources;

#[cfg(test)]
mod tests;

pub use enemy::Enemy;
pub use projectile::Projectile;
pub use resources::{EnemyTuning, ProjectileTuning};
