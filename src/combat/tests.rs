//! Combat domain: tests for enemy patrol, shooting, death and projectiles.

use bevy::prelude::*;
use std::f32::consts::PI;

use super::enemy::EnemyState;
use super::projectile::ProjectileFate;
use super::{Enemy, EnemyTuning, Projectile, ProjectileTuning};
use crate::core::FrameEvent;
use crate::level::TileGrid;
use crate::movement::{Player, PlayerTuning};
use crate::physics::{Facing, PhysicsTuning};
use crate::sprites::DrawList;
use crate::test_support::{FLOOR_Y, Harness};

const STANDING_Y: f32 = FLOOR_Y - 15.0;

fn enemy_at(harness: &Harness, position: Vec2, tuning: EnemyTuning) -> Enemy {
    Enemy::new(position, &harness.sprites.enemy, tuning, PhysicsTuning::default())
}

fn player_at(harness: &Harness, position: Vec2) -> Player {
    Player::new(
        position,
        &harness.sprites.player,
        PlayerTuning::default(),
        PhysicsTuning::default(),
    )
}

fn sleepy() -> EnemyTuning {
    EnemyTuning {
        wake_up_chance: 0.0,
        ..default()
    }
}

/// Floor cells 0..=7, so the floor ends at x = 128.
fn short_floor() -> Harness {
    let mut grid = TileGrid::new(16).unwrap();
    for x in 0..=7 {
        grid.insert("grass", 0, IVec2::new(x, 10));
    }
    Harness::new(grid)
}

// -----------------------------------------------------------------------------
// Patrol
// -----------------------------------------------------------------------------

#[test]
fn test_idle_enemy_stays_put_without_waking() {
    let mut harness = Harness::on_floor();
    let mut enemy = enemy_at(&harness, Vec2::new(100.0, STANDING_Y), sleepy());
    let player = player_at(&harness, Vec2::new(0.0, 0.0));

    for _ in 0..100 {
        assert!(!enemy.update(&mut harness.ctx(), &player, &ProjectileTuning::default()));
    }

    assert_eq!(enemy.state(), EnemyState::Idle);
    assert_eq!(enemy.body.position.x, 100.0);
}

#[test]
fn test_enemy_wakes_into_walk_burst() {
    let mut harness = Harness::on_floor();
    let tuning = EnemyTuning {
        wake_up_chance: 1.0,
        ..default()
    };
    let mut enemy = enemy_at(&harness, Vec2::new(100.0, STANDING_Y), tuning);
    let player = player_at(&harness, Vec2::new(0.0, 0.0));

    enemy.update(&mut harness.ctx(), &player, &ProjectileTuning::default());
    assert!((30..=120).contains(&enemy.walking));
    assert_eq!(enemy.body.position.x, 100.0);

    let walking = enemy.walking;
    enemy.update(&mut harness.ctx(), &player, &ProjectileTuning::default());
    assert_eq!(enemy.walking, walking - 1);
    assert_eq!(enemy.body.position.x, 100.5);
    assert_eq!(enemy.body.animation().current_image().size, UVec2::new(13, 16));
}

#[test]
fn test_enemy_turns_at_ledge() {
    let mut harness = short_floor();
    let mut enemy = enemy_at(&harness, Vec2::new(118.0, STANDING_Y), sleepy());
    enemy.walking = 50;
    let player = player_at(&harness, Vec2::new(0.0, 0.0));

    // Sensor at x = 129 finds no ground.
    enemy.update(&mut harness.ctx(), &player, &ProjectileTuning::default());
    assert_eq!(enemy.body.facing, Facing::Left);
    assert_eq!(enemy.body.position.x, 118.0);

    enemy.update(&mut harness.ctx(), &player, &ProjectileTuning::default());
    assert_eq!(enemy.body.facing, Facing::Left);
    assert_eq!(enemy.body.position.x, 117.5);
}

#[test]
fn test_ledge_sensor_follows_facing() {
    let harness = Harness::on_floor();
    let mut enemy = enemy_at(&harness, Vec2::new(100.0, STANDING_Y), sleepy());

    assert_eq!(enemy.ledge_sensor(), Vec2::new(111.0, STANDING_Y + 23.0));
    enemy.body.facing = Facing::Left;
    assert_eq!(enemy.ledge_sensor(), Vec2::new(97.0, STANDING_Y + 23.0));
}

// -----------------------------------------------------------------------------
// Shooting
// -----------------------------------------------------------------------------

#[test]
fn test_enemy_shoots_when_walk_ends_facing_player() {
    let mut harness = Harness::on_floor();
    let mut enemy = enemy_at(&harness, Vec2::new(100.0, STANDING_Y), sleepy());
    enemy.walking = 1;
    let player = player_at(&harness, Vec2::new(150.0, STANDING_Y));

    enemy.update(&mut harness.ctx(), &player, &ProjectileTuning::default());

    assert_eq!(enemy.state(), EnemyState::Idle);
    assert_eq!(harness.projectiles.len(), 1);
    let projectile = &harness.projectiles[0];
    assert_eq!(projectile.position, Vec2::new(111.0, STANDING_Y + 7.5));
    assert_eq!(projectile.velocity_x, 1.5);
    assert_eq!(harness.effects.sparks.len(), 4);
    assert!(
        harness
            .effects
            .sparks
            .iter()
            .all(|spark| spark.angle.abs() <= 0.5)
    );
    assert_eq!(
        harness.events,
        vec![FrameEvent::ProjectileFired {
            position: Vec2::new(111.0, STANDING_Y + 7.5)
        }]
    );
}

#[test]
fn test_enemy_facing_left_shoots_left() {
    let mut harness = Harness::on_floor();
    let mut enemy = enemy_at(&harness, Vec2::new(100.0, STANDING_Y), sleepy());
    enemy.body.facing = Facing::Left;
    enemy.walking = 1;
    let player = player_at(&harness, Vec2::new(40.0, STANDING_Y - 10.0));

    enemy.update(&mut harness.ctx(), &player, &ProjectileTuning::default());

    assert_eq!(harness.projectiles.len(), 1);
    assert_eq!(harness.projectiles[0].velocity_x, -1.5);
    assert_eq!(harness.projectiles[0].position.x, 97.0);
    assert!(
        harness
            .effects
            .sparks
            .iter()
            .all(|spark| (spark.angle - PI).abs() <= 0.5)
    );
}

#[test]
fn test_enemy_holds_fire_facing_away() {
    let mut harness = Harness::on_floor();
    let mut enemy = enemy_at(&harness, Vec2::new(100.0, STANDING_Y), sleepy());
    enemy.walking = 1;
    let player = player_at(&harness, Vec2::new(40.0, STANDING_Y));

    enemy.update(&mut harness.ctx(), &player, &ProjectileTuning::default());

    assert!(harness.projectiles.is_empty());
    assert!(harness.events.is_empty());
}

#[test]
fn test_enemy_holds_fire_out_of_vertical_range() {
    let mut harness = Harness::on_floor();
    let mut enemy = enemy_at(&harness, Vec2::new(100.0, STANDING_Y), sleepy());
    enemy.walking = 1;
    let player = player_at(&harness, Vec2::new(150.0, STANDING_Y - 16.0));

    enemy.update(&mut harness.ctx(), &player, &ProjectileTuning::default());

    assert!(harness.projectiles.is_empty());
}

// -----------------------------------------------------------------------------
// Death
// -----------------------------------------------------------------------------

#[test]
fn test_dashing_player_kills_enemy() {
    let mut harness = Harness::on_floor();
    let mut enemy = enemy_at(&harness, Vec2::new(100.0, STANDING_Y), sleepy());
    let mut player = player_at(&harness, Vec2::new(104.0, STANDING_Y));
    player.dash_timer = 55;

    let killed = enemy.update(&mut harness.ctx(), &player, &ProjectileTuning::default());

    assert!(killed);
    assert_eq!(harness.effects.sparks.len(), 32);
    assert_eq!(harness.effects.particles.len(), 30);
    assert_eq!(
        harness.events,
        vec![FrameEvent::EnemyKilled {
            position: Vec2::new(104.0, STANDING_Y + 7.5)
        }]
    );
}

#[test]
fn test_touching_enemy_outside_dash_is_harmless() {
    let mut harness = Harness::on_floor();
    let mut enemy = enemy_at(&harness, Vec2::new(100.0, STANDING_Y), sleepy());
    let mut player = player_at(&harness, Vec2::new(104.0, STANDING_Y));
    player.dash_timer = 50;

    assert!(!enemy.update(&mut harness.ctx(), &player, &ProjectileTuning::default()));
    assert!(harness.effects.particles.is_empty());
    assert!(harness.effects.sparks.is_empty());
}

#[test]
fn test_enemy_renders_gun_on_facing_side() {
    let harness = Harness::on_floor();
    let mut enemy = enemy_at(&harness, Vec2::new(100.0, 100.0), sleepy());
    let gun = harness.sprites.gun.clone();

    let mut canvas = DrawList::default();
    enemy.render(&mut canvas, &gun, Vec2::ZERO);
    assert_eq!(canvas.blits.len(), 2);
    assert_eq!(canvas.blits[1].position, Vec2::new(108.0, 105.5));
    assert!(!canvas.blits[1].flip_x);

    enemy.body.facing = Facing::Left;
    let mut canvas = DrawList::default();
    enemy.render(&mut canvas, &gun, Vec2::ZERO);
    assert_eq!(canvas.blits[1].position, Vec2::new(93.0, 105.5));
    assert!(canvas.blits[1].flip_x);
}

// -----------------------------------------------------------------------------
// Projectiles
// -----------------------------------------------------------------------------

#[test]
fn test_projectile_flies_and_ages() {
    let mut harness = Harness::new(TileGrid::new(16).unwrap());
    let player = player_at(&harness, Vec2::new(500.0, 500.0));
    let mut projectile = Projectile::new(Vec2::new(10.0, 10.0), -1.5);

    let fate = projectile.update(&mut harness.ctx(), &player, &ProjectileTuning::default());

    assert_eq!(fate, ProjectileFate::Flying);
    assert!(!fate.is_spent());
    assert_eq!(projectile.position, Vec2::new(8.5, 10.0));
    assert_eq!(projectile.age, 1);
}

#[test]
fn test_projectile_stops_in_wall_with_sparks_toward_shooter() {
    let mut grid = TileGrid::new(16).unwrap();
    grid.insert("stone", 0, IVec2::new(5, 5));
    let mut harness = Harness::new(grid);
    let player = player_at(&harness, Vec2::new(500.0, 500.0));
    let mut projectile = Projectile::new(Vec2::new(79.0, 88.0), 1.5);

    let fate = projectile.update(&mut harness.ctx(), &player, &ProjectileTuning::default());

    assert_eq!(fate, ProjectileFate::HitWall);
    assert_eq!(harness.effects.sparks.len(), 4);
    assert!(
        harness
            .effects
            .sparks
            .iter()
            .all(|spark| (spark.angle - PI).abs() <= 0.5)
    );
}

#[test]
fn test_projectile_expires_after_max_age() {
    let mut harness = Harness::new(TileGrid::new(16).unwrap());
    let player = player_at(&harness, Vec2::new(500.0, 500.0));
    let tuning = ProjectileTuning::default();
    let mut projectile = Projectile::new(Vec2::ZERO, 1.5);
    projectile.age = 359;

    assert_eq!(
        projectile.update(&mut harness.ctx(), &player, &tuning),
        ProjectileFate::Flying
    );
    assert_eq!(
        projectile.update(&mut harness.ctx(), &player, &tuning),
        ProjectileFate::Expired
    );
    assert!(harness.effects.particles.is_empty());
    assert!(harness.effects.sparks.is_empty());
}

#[test]
fn test_projectile_hits_unprotected_player() {
    let mut harness = Harness::new(TileGrid::new(16).unwrap());
    let player = player_at(&harness, Vec2::new(50.0, 100.0));
    let mut projectile = Projectile::new(Vec2::new(49.0, 105.0), 1.5);

    let fate = projectile.update(&mut harness.ctx(), &player, &ProjectileTuning::default());

    assert_eq!(fate, ProjectileFate::HitPlayer);
    assert_eq!(harness.effects.sparks.len(), 30);
    assert_eq!(harness.effects.particles.len(), 30);
    assert_eq!(
        harness.events,
        vec![FrameEvent::PlayerHit {
            position: Vec2::new(54.0, 107.5)
        }]
    );
}

#[test]
fn test_dash_protects_player_from_projectiles() {
    let mut harness = Harness::new(TileGrid::new(16).unwrap());
    let mut player = player_at(&harness, Vec2::new(50.0, 100.0));
    player.dash_timer = -50;
    let mut projectile = Projectile::new(Vec2::new(49.0, 105.0), 1.5);

    let fate = projectile.update(&mut harness.ctx(), &player, &ProjectileTuning::default());

    assert_eq!(fate, ProjectileFate::Flying);
    assert!(harness.events.is_empty());
}

#[test]
fn test_projectile_renders_centered() {
    let harness = Harness::on_floor();
    let projectile = Projectile::new(Vec2::new(10.0, 10.0), 1.5);
    let mut canvas = DrawList::default();

    projectile.render(&mut canvas, &harness.sprites.projectile, Vec2::new(1.0, 1.0));

    assert_eq!(canvas.blits[0].position, Vec2::new(6.5, 8.0));
}
