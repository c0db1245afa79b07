//! Level domain: tile grid storage and the physics query surface.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::sprites::{Canvas, SpriteLibrary};

/// Tile kinds that block movement.
pub const PHYSICS_TILES: [&str; 2] = ["grass", "stone"];

/// Cells inspected around a query point. The order is the order in which
/// candidate rects are reported, which decides ties during collision.
pub const NEIGHBOR_OFFSETS: [IVec2; 9] = [
    IVec2::new(-1, 0),
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(1, 0),
    IVec2::new(0, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

/// What the simulation needs to know about level geometry.
pub trait Tilemap {
    /// Solid rects near `position`, wide enough to catch any overlap from a
    /// single frame of movement.
    fn physics_rects_around(&self, position: Vec2) -> Vec<Rect>;

    /// Whether `point` lies inside a solid tile.
    fn solid_check(&self, point: Vec2) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub kind: String,
    pub variant: usize,
    /// Grid cell for on-grid tiles.
    pub cell: IVec2,
}

impl Tile {
    pub fn is_solid(&self) -> bool {
        PHYSICS_TILES.contains(&self.kind.as_str())
    }
}

/// Decoration placed at a free pixel position; never collides.
#[derive(Debug, Clone, PartialEq)]
pub struct OffgridTile {
    pub kind: String,
    pub variant: usize,
    pub position: Vec2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSizeError;

impl std::fmt::Display for TileSizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tile size must be at least 1 pixel")
    }
}

impl std::error::Error for TileSizeError {}

/// Sparse grid of square tiles plus off-grid decoration.
#[derive(Debug, Clone)]
pub struct TileGrid {
    tile_size: u32,
    tiles: HashMap<IVec2, Tile>,
    offgrid: Vec<OffgridTile>,
}

impl TileGrid {
    pub fn new(tile_size: u32) -> Result<Self, TileSizeError> {
        if tile_size == 0 {
            return Err(TileSizeError);
        }
        Ok(Self {
            tile_size,
            tiles: HashMap::new(),
            offgrid: Vec::new(),
        })
    }

    pub fn insert(&mut self, kind: impl Into<String>, variant: usize, cell: IVec2) {
        self.tiles.insert(
            cell,
            Tile {
                kind: kind.into(),
                variant,
                cell,
            },
        );
    }

    pub fn insert_offgrid(&mut self, kind: impl Into<String>, variant: usize, position: Vec2) {
        self.offgrid.push(OffgridTile {
            kind: kind.into(),
            variant,
            position,
        });
    }

    pub fn tile(&self, cell: IVec2) -> Option<&Tile> {
        self.tiles.get(&cell)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    pub fn offgrid(&self) -> &[OffgridTile] {
        &self.offgrid
    }

    /// Grid cell containing a pixel position.
    pub fn cell_at(&self, position: Vec2) -> IVec2 {
        (position / self.tile_size as f32).floor().as_ivec2()
    }

    pub fn cell_rect(&self, cell: IVec2) -> Rect {
        let size = self.tile_size as f32;
        let min = cell.as_vec2() * size;
        Rect::from_corners(min, min + Vec2::splat(size))
    }

    pub fn tiles_around(&self, position: Vec2) -> impl Iterator<Item = &Tile> {
        let origin = self.cell_at(position);
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |offset| self.tiles.get(&(origin + *offset)))
    }

    /// Draw decoration, then every on-grid tile intersecting the viewport.
    pub fn render(&self, canvas: &mut impl Canvas, sprites: &SpriteLibrary, offset: Vec2) {
        for tile in &self.offgrid {
            if let Some(image) = sprites.tile(&tile.kind, tile.variant) {
                canvas.blit(image, tile.position - offset, false);
            }
        }

        let size = self.tile_size as f32;
        let first = (offset / size).floor().as_ivec2();
        let last = ((offset + canvas.size()) / size).floor().as_ivec2();
        for x in first.x..=last.x {
            for y in first.y..=last.y {
                let Some(tile) = self.tiles.get(&IVec2::new(x, y)) else {
                    continue;
                };
                if let Some(image) = sprites.tile(&tile.kind, tile.variant) {
                    canvas.blit(image, tile.cell.as_vec2() * size - offset, false);
                }
            }
        }
    }
}

impl Tilemap for TileGrid {
    fn physics_rects_around(&self, position: Vec2) -> Vec<Rect> {
        self.tiles_around(position)
            .filter(|tile| tile.is_solid())
            .map(|tile| self.cell_rect(tile.cell))
            .collect()
    }

    fn solid_check(&self, point: Vec2) -> bool {
        self.tile(self.cell_at(point)).is_some_and(Tile::is_solid)
    }
}
