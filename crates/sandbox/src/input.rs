//! Cursor targeting, mining and camera panning.

use bevy::prelude::*;

use crate::host::SandboxWorld;
use crate::mining::StrikeOutcome;
use crate::render::TileBroken;
use crate::world::world_to_cell;

/// Damage dealt per tick to a tile of hardness 1.
pub const PICK_POWER: f32 = 4.0;
/// Camera pan speed in world units per second.
pub const PAN_SPEED: f32 = 400.0;

/// Point the player's target at the cell under the cursor.
///
/// The target keeps its last in-world value while the cursor is outside
/// the window or over empty space beyond the world edge.
pub fn update_target_cell(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut world: ResMut<SandboxWorld>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };
    let Some(screen_pos) = window.cursor_position() else {
        return;
    };
    let Ok(world_pos) = camera.viewport_to_world_2d(cam_transform, screen_pos) else {
        return;
    };

    let cell = world_to_cell(world_pos);
    if world.grid.in_bounds(cell) && world.target != cell {
        world.target = cell;
    }
}

/// Hit the targeted tile while the left mouse button is held.
pub fn mine_target(
    buttons: Res<ButtonInput<MouseButton>>,
    mut world: ResMut<SandboxWorld>,
    mut broken: EventWriter<TileBroken>,
) {
    if !buttons.pressed(MouseButton::Left) {
        return;
    }
    let cell = world.target;
    let Some(tile) = world.grid.get(cell) else {
        return;
    };
    let Some(hardness) = world.registry.get(tile.tile_type).map(|kind| kind.hardness) else {
        return;
    };

    match world.hits.strike(cell, PICK_POWER / hardness) {
        StrikeOutcome::Damaged(damage) => trace!("Hit {:?}: {damage:.1}", cell),
        StrikeOutcome::Broken => {
            world.grid.remove(cell);
            debug!("Broke tile at {:?}", cell);
            broken.send(TileBroken(cell));
        }
    }
}

pub fn age_hit_records(mut world: ResMut<SandboxWorld>) {
    world.hits.tick();
}

pub fn pan_camera(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut camera_q: Query<&mut Transform, With<Camera2d>>,
) {
    let mut direction = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        direction.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        direction.x += 1.0;
    }
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        direction.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        direction.y -= 1.0;
    }
    if direction == Vec2::ZERO {
        return;
    }

    let step = direction.normalize() * PAN_SPEED * time.delta_secs();
    for mut transform in &mut camera_q {
        transform.translation.x += step.x;
        transform.translation.y += step.y;
    }
}
