use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::state::{PlacementPreview, PlacerState};
use crate::camera::PlacerCamera;
use crate::constants::{preview_colors, queries, sizes};
use crate::palette::PrefabPalette;
use crate::snap::snap_to_grid;

/// Keep the preview ghost in sync with the palette selection.
///
/// The ghost is rebuilt when the selected template changes (shape, size, or
/// name edits included) and despawned when nothing is selected. It carries
/// no collider, so scene raycasts pass through it.
pub fn sync_preview_entity(
    palette: Res<PrefabPalette>,
    mut state: ResMut<PlacerState>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let desired = palette.selected().cloned();
    if state.preview_template == desired {
        return;
    }

    if let Some(old_preview) = state.preview_entity.take() {
        commands.entity(old_preview).despawn();
    }

    if let Some(template) = &desired {
        let ghost_material = materials.add(StandardMaterial {
            base_color: preview_colors::GHOST,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        let preview_entity = commands
            .spawn((
                PlacementPreview,
                Mesh3d(meshes.add(template.shape.create_mesh())),
                MeshMaterial3d(ghost_material),
                Transform::from_translation(Vec3::ZERO).with_scale(template.size),
            ))
            .id();

        state.preview_entity = Some(preview_entity);
    }

    state.preview_template = desired;
}

/// Update the preview position from a camera raycast through the cursor.
///
/// The hit point is grid-snapped when snapping is enabled; with no hit the
/// preview floats at a fixed distance along the cursor ray.
pub fn update_preview_position(
    state: Res<PlacerState>,
    camera_query: Query<(&Camera, &GlobalTransform), With<PlacerCamera>>,
    spatial_query: SpatialQuery,
    mut preview_query: Query<&mut Transform, With<PlacementPreview>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let Some(preview_entity) = state.preview_entity else {
        return;
    };

    let Ok(mut preview_transform) = preview_query.get_mut(preview_entity) else {
        return;
    };

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let Ok(window) = window_query.single() else {
        return;
    };

    // Use the window center as fallback when the cursor is outside
    let cursor_position = window
        .cursor_position()
        .unwrap_or_else(|| Vec2::new(window.width() / 2.0, window.height() / 2.0));

    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_position) else {
        return;
    };

    // The preview has no collider, but exclude it anyway in case the host
    // attached one
    let filter = SpatialQueryFilter::default().with_excluded_entities([preview_entity]);

    let Some(hit) = spatial_query.cast_ray(
        ray.origin,
        ray.direction,
        queries::RAYCAST_MAX_DISTANCE,
        true,
        &filter,
    ) else {
        preview_transform.translation =
            ray.origin + ray.direction * sizes::PREVIEW_DEFAULT_DISTANCE;
        preview_transform.rotation = Quat::IDENTITY;
        return;
    };

    let hit_point = ray.origin + ray.direction * hit.distance;
    let position = if state.snapping {
        snap_to_grid(hit_point, state.snap_interval)
    } else {
        hit_point
    };

    preview_transform.translation = position;
    preview_transform.rotation = Quat::IDENTITY;
}

/// Draw a wire cuboid around the preview bounds
pub fn draw_preview_bounds(
    mut gizmos: Gizmos,
    preview_query: Query<&Transform, With<PlacementPreview>>,
) {
    for transform in &preview_query {
        gizmos.cube(*transform, preview_colors::BOUNDS);
    }
}
