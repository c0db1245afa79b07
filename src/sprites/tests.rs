//! Sprites domain: tests for clips, play-heads, the manifest and draw lists.

use bevy::prelude::*;
use std::sync::Arc;

use super::animation::ClipError;
use super::manifest::{ManifestError, frame_path};
use super::present::display_to_world;
use super::{Animation, AnimationClip, Canvas, DrawList, ImageRef, SpriteLibrary};
use crate::test_support::{manifest, sprites};

fn image(size: u32) -> ImageRef {
    ImageRef::new(Handle::default(), UVec2::splat(size))
}

fn clip(images: u32, image_duration: u32, looping: bool) -> Arc<AnimationClip> {
    let images = (1..=images).map(image).collect();
    Arc::new(AnimationClip::new(images, image_duration, looping).unwrap())
}

// -----------------------------------------------------------------------------
// AnimationClip tests
// -----------------------------------------------------------------------------

#[test]
fn test_clip_rejects_empty_images() {
    assert_eq!(
        AnimationClip::new(Vec::new(), 5, true).unwrap_err(),
        ClipError::NoImages
    );
}

#[test]
fn test_clip_rejects_zero_duration() {
    assert_eq!(
        AnimationClip::new(vec![image(1)], 0, true).unwrap_err(),
        ClipError::ZeroDuration
    );
}

#[test]
fn test_clip_rejects_frame_count_overflow() {
    assert_eq!(
        AnimationClip::new(vec![image(1); 2], u32::MAX, true).unwrap_err(),
        ClipError::TooManyFrames
    );
    let longest = AnimationClip::new(vec![image(1)], u32::MAX, false).unwrap();
    assert_eq!(longest.total_frames(), u32::MAX);
}

#[test]
fn test_clip_total_frames() {
    let clip = clip(4, 6, false);
    assert_eq!(clip.total_frames(), 24);
    assert_eq!(clip.image_count(), 4);
}

// -----------------------------------------------------------------------------
// Animation tests
// -----------------------------------------------------------------------------

#[test]
fn test_looping_animation_wraps() {
    let mut animation = Animation::new(clip(2, 3, true));
    for _ in 0..6 {
        animation.update();
        assert!(animation.frame() < 6);
    }
    assert_eq!(animation.frame(), 0);
    assert!(!animation.done());
}

#[test]
fn test_looping_animation_never_finishes() {
    let mut animation = Animation::new(clip(3, 2, true));
    for _ in 0..100 {
        animation.update();
        assert!(!animation.done());
        assert!(animation.image_index() < 3);
    }
}

#[test]
fn test_non_looping_done_latches_at_last_frame() {
    let mut animation = Animation::new(clip(2, 3, false));
    for expected in 1..5 {
        animation.update();
        assert_eq!(animation.frame(), expected);
        assert!(!animation.done());
    }

    animation.update();
    assert_eq!(animation.frame(), 5);
    assert!(animation.done());

    animation.update();
    assert_eq!(animation.frame(), 5);
    assert!(animation.done());
}

#[test]
fn test_current_image_follows_image_duration() {
    let mut animation = Animation::new(clip(3, 2, true));
    assert_eq!(animation.current_image().size, UVec2::splat(1));
    animation.update();
    assert_eq!(animation.current_image().size, UVec2::splat(1));
    animation.update();
    assert_eq!(animation.current_image().size, UVec2::splat(2));
    animation.update();
    animation.update();
    assert_eq!(animation.current_image().size, UVec2::splat(3));
}

#[test]
fn test_with_frame_clamps_into_clip() {
    let clip = clip(2, 3, false);
    assert_eq!(Animation::with_frame(Arc::clone(&clip), 4).frame(), 4);
    assert_eq!(Animation::with_frame(clip, 40).frame(), 5);
}

#[test]
fn test_play_heads_over_one_clip_advance_independently() {
    let shared = clip(2, 3, false);
    let mut finished = Animation::new(Arc::clone(&shared));
    for _ in 0..10 {
        finished.update();
    }
    assert!(finished.done());

    let fresh = Animation::new(Arc::clone(&shared));
    assert_eq!(fresh.frame(), 0);
    assert!(!fresh.done());
    assert_eq!(fresh.current_image(), &image(1));
    assert_eq!(Arc::strong_count(&shared), 3);
}

// -----------------------------------------------------------------------------
// Manifest tests
// -----------------------------------------------------------------------------

#[test]
fn test_frame_path_is_zero_padded() {
    assert_eq!(frame_path("images/clouds", 1), "images/clouds/01.png");
    assert_eq!(frame_path("images/clouds", 12), "images/clouds/12.png");
}

#[test]
fn test_manifest_resolves_every_clip() {
    let sprites = sprites();

    assert_eq!(sprites.player.idle.image_count(), 22);
    assert_eq!(sprites.player.idle.image_duration(), 6);
    assert_eq!(sprites.player.jump.image_count(), 1);
    assert_eq!(sprites.player.jump.image_duration(), 5);
    assert_eq!(sprites.enemy.run.image_count(), 8);
    assert!(sprites.player.run.looping());
    assert!(!sprites.particle.looping());
    assert_eq!(sprites.particle.total_frames(), 24);
    let last = Animation::with_frame(Arc::clone(&sprites.particle), 23);
    assert_eq!(last.current_image().size, UVec2::new(6, 6));
    assert_eq!(sprites.clouds.len(), 2);
    assert_eq!(sprites.gun.size, UVec2::new(7, 4));
}

#[test]
fn test_manifest_tiles_by_kind() {
    let sprites = sprites();

    assert_eq!(sprites.tiles.len(), 4);
    assert!(sprites.tile("grass", 8).is_some());
    assert!(sprites.tile("grass", 9).is_none());
    assert!(sprites.tile("lava", 0).is_none());
    assert_eq!(sprites.tile("stone", 0).unwrap().size, UVec2::new(17, 17));
}

#[test]
fn test_manifest_missing_animation_is_an_error() {
    let mut manifest = manifest();
    manifest.animations.remove("enemy/run");

    let result = SpriteLibrary::from_manifest(&manifest, |_| Handle::default());
    assert!(matches!(result, Err(ManifestError::MissingAnimation(key)) if key == "enemy/run"));
}

#[test]
fn test_manifest_missing_image_is_an_error() {
    let mut manifest = manifest();
    manifest.images.remove("gun");

    let result = SpriteLibrary::from_manifest(&manifest, |_| Handle::default());
    assert!(matches!(result, Err(ManifestError::MissingImage(key)) if key == "gun"));
}

#[test]
fn test_manifest_size_list_must_match_count() {
    let mut manifest = manifest();
    if let Some(clouds) = manifest.image_sets.get_mut("clouds") {
        clouds.count = 3;
    }

    let result = SpriteLibrary::from_manifest(&manifest, |_| Handle::default());
    assert!(matches!(
        result,
        Err(ManifestError::BadSizes {
            expected: 3,
            found: 2,
            ..
        })
    ));
}

#[test]
fn test_manifest_loads_numbered_frames() {
    let mut paths = Vec::new();
    SpriteLibrary::from_manifest(&manifest(), |path| {
        paths.push(path.to_string());
        Handle::default()
    })
    .unwrap();

    assert!(paths.contains(&"images/entities/player/idle/21.png".to_string()));
    assert!(paths.contains(&"images/background.png".to_string()));
    assert!(!paths.contains(&"images/entities/player/idle/22.png".to_string()));
}

// -----------------------------------------------------------------------------
// DrawList tests
// -----------------------------------------------------------------------------

#[test]
fn test_draw_list_records_in_call_order() {
    let mut draw_list = DrawList::default();
    draw_list.blit(&image(1), Vec2::new(1.0, 2.0), false);
    draw_list.blit(&image(2), Vec2::new(3.0, 4.0), true);
    draw_list.polygon([Vec2::ZERO; 4], Color::WHITE);

    assert_eq!(draw_list.blits.len(), 2);
    assert_eq!(draw_list.blits[0].image, image(1));
    assert!(draw_list.blits[1].flip_x);
    assert_eq!(draw_list.polygons.len(), 1);
    assert_eq!(draw_list.blits[1].image, image(2));

    draw_list.clear();
    assert!(draw_list.blits.is_empty());
    assert!(draw_list.polygons.is_empty());
    assert_eq!(draw_list.size(), Vec2::new(320.0, 240.0));
}

#[test]
fn test_display_to_world_flips_y_and_centers() {
    assert_eq!(display_to_world(Vec2::new(160.0, 120.0)), Vec2::ZERO);
    assert_eq!(display_to_world(Vec2::ZERO), Vec2::new(-320.0, 240.0));
    assert_eq!(display_to_world(Vec2::new(320.0, 240.0)), Vec2::new(320.0, -240.0));
}
