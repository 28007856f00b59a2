//! Camera, generated tile sheets and tile sprites.

use std::collections::HashMap;

use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use tile_display::config::{ICON_FRAME_SIZE, SHEET_STRIDE};
use tile_display::TileCoord;

use crate::host::SandboxWorld;
use crate::world::{cell_to_world, TILE_SIZE, WORLD_WIDTH};

/// Sheet size in cells. Column 9, row 3 holds the default icon.
const SHEET_COLUMNS: u32 = 10;
const SHEET_ROWS: u32 = 4;

/// Fired when a tile has been mined out.
#[derive(Event, Debug, Clone, Copy)]
pub struct TileBroken(pub TileCoord);

/// Sprite entity of each occupied cell.
#[derive(Resource, Default)]
pub struct TileSprites(pub HashMap<TileCoord, Entity>);

/// Outline drawn over the targeted cell.
#[derive(Component)]
pub struct TargetHighlight;

pub fn setup_camera(mut commands: Commands) {
    let center = cell_to_world(TileCoord::new(WORLD_WIDTH as i32 / 2, 30));
    commands.spawn((Camera2d, Transform::from_xyz(center.x, center.y, 999.0)));
    commands.spawn((
        TargetHighlight,
        Sprite::from_color(Color::srgba(1.0, 1.0, 1.0, 0.25), Vec2::splat(TILE_SIZE)),
        Transform::from_xyz(0.0, 0.0, 10.0),
    ));
}

/// RGBA pixels of a sprite sheet in `color`. Each 16x16 cell gets a slight
/// brightness shift and a darker one-pixel rim so frames read as distinct.
pub fn sheet_pixels(color: [u8; 3]) -> (u32, u32, Vec<u8>) {
    let stride = SHEET_STRIDE as u32;
    let frame = ICON_FRAME_SIZE as u32;
    let width = SHEET_COLUMNS * stride;
    let height = SHEET_ROWS * stride;
    let mut data = vec![0u8; (width * height * 4) as usize];

    for y in 0..height {
        for x in 0..width {
            let (fx, fy) = (x % stride, y % stride);
            if fx >= frame || fy >= frame {
                continue;
            }
            let variant = ((x / stride + y / stride) % 3) as f32;
            let rim = fx == 0 || fy == 0 || fx == frame - 1 || fy == frame - 1;
            let shade = if rim { 0.7 } else { 0.9 + variant * 0.05 };

            let i = ((y * width + x) * 4) as usize;
            for c in 0..3 {
                data[i + c] = (f32::from(color[c]) * shade).min(255.0) as u8;
            }
            data[i + 3] = 255;
        }
    }

    (width, height, data)
}

/// Build a sheet image for every registered tile type.
pub fn build_tile_sheets(mut images: ResMut<Assets<Image>>, mut world: ResMut<SandboxWorld>) {
    let world = &mut *world;
    for kind in world.registry.iter() {
        let (width, height, data) = sheet_pixels(kind.color);
        let mut image = Image::new(
            Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            data,
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
        );
        image.sampler = ImageSampler::nearest();
        world.sheets.insert(kind.id, images.add(image));
    }
}

fn frame_rect(frame_x: u16, frame_y: u16) -> Rect {
    let (x, y) = (f32::from(frame_x), f32::from(frame_y));
    Rect::new(x, y, x + ICON_FRAME_SIZE, y + ICON_FRAME_SIZE)
}

pub fn spawn_tile_sprites(
    mut commands: Commands,
    world: Res<SandboxWorld>,
    mut sprites: ResMut<TileSprites>,
) {
    for (cell, tile) in world.grid.iter() {
        let pos = cell_to_world(cell);
        let mut sprite = Sprite::from_image(world.sheets.get(&tile.tile_type).cloned().unwrap_or_default());
        sprite.rect = Some(frame_rect(tile.frame_x, tile.frame_y));
        sprite.custom_size = Some(Vec2::splat(TILE_SIZE));

        let entity = commands
            .spawn((sprite, Transform::from_xyz(pos.x, pos.y, 0.0)))
            .id();
        sprites.0.insert(cell, entity);
    }
    info!("Spawned {} tile sprites", sprites.0.len());
}

pub fn despawn_broken_tiles(
    mut commands: Commands,
    mut broken: EventReader<TileBroken>,
    mut sprites: ResMut<TileSprites>,
) {
    for TileBroken(cell) in broken.read() {
        if let Some(entity) = sprites.0.remove(cell) {
            commands.entity(entity).despawn();
        }
    }
}

pub fn move_target_highlight(
    world: Res<SandboxWorld>,
    mut highlight_q: Query<&mut Transform, With<TargetHighlight>>,
) {
    let pos = cell_to_world(world.target);
    for mut transform in &mut highlight_q {
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}
