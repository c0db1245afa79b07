//! Physics domain: axis-aligned bodies resolved against the tile grid.

pub mod body;


pub use body::{
    Action, CollisionFlags, Facing, PhysicsBody, PhysicsTuning, contains_point, overlaps,
};
