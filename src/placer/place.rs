use avian3d::prelude::*;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::state::{PlacementPreview, PlacerState};
use crate::constants::queries::OVERLAP_RESULT_CAPACITY;
use crate::overlap::{resolve_overlap, PlacedAabb};
use crate::palette::{AwaitingOverlapCheck, PrefabPalette, SpawnPrefabEvent};
use crate::utils::pointer_available;

/// Confirm placement on left click at the preview pose.
///
/// The tool stays active after each placement, so repeated clicks keep
/// stamping instances.
pub fn handle_place_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    state: Res<PlacerState>,
    palette: Res<PrefabPalette>,
    preview_query: Query<&Transform, With<PlacementPreview>>,
    mut spawn_events: MessageWriter<SpawnPrefabEvent>,
    mut contexts: EguiContexts,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    if !pointer_available(&mut contexts) {
        return;
    }

    let Some(template) = palette.selected() else {
        return;
    };

    let Some(preview_entity) = state.preview_entity else {
        return;
    };

    let Ok(preview_transform) = preview_query.get(preview_entity) else {
        return;
    };

    spawn_events.write(SpawnPrefabEvent {
        template: template.clone(),
        position: preview_transform.translation,
        rotation: preview_transform.rotation,
    });
}

/// Run the overlap check on freshly spawned instances and push them off
/// their first overlapping neighbor.
///
/// Neighbors come from one Avian shape-intersection query over the placed
/// collider's world AABB, collected into a fixed-size scratch buffer; any
/// intersections past its capacity are dropped and remain unresolved. An
/// instance without a collider is left where it is, with a warning.
pub fn resolve_new_placements(
    mut placed_query: Query<
        (Entity, &mut Transform, Option<&Collider>),
        With<AwaitingOverlapCheck>,
    >,
    neighbor_query: Query<(&Transform, &Collider), Without<AwaitingOverlapCheck>>,
    spatial_query: SpatialQuery,
    state: Res<PlacerState>,
    mut commands: Commands,
) {
    for (entity, mut transform, collider) in &mut placed_query {
        // One check per instance, whether or not it can be performed
        commands.entity(entity).remove::<AwaitingOverlapCheck>();

        let Some(collider) = collider else {
            warn!("Placed prefab {:?} has no collider, skipping overlap check", entity);
            continue;
        };

        let aabb = collider.aabb(transform.translation, transform.rotation);
        let min: Vec3 = aabb.min.into();
        let max: Vec3 = aabb.max.into();
        let placed = PlacedAabb::from_min_max(min, max);

        // Query with the AABB extents at the instance's orientation; the
        // resolver math itself stays world-axis-aligned.
        let size = max - min;
        let shape = Collider::cuboid(size.x, size.y, size.z);
        let filter = SpatialQueryFilter::default();

        // Scratch buffers seeded with the placed entity; slots past the fill
        // count are never read
        let mut hits = [entity; OVERLAP_RESULT_CAPACITY];
        let mut hit_count = 0;
        spatial_query.shape_intersections_callback(
            &shape,
            placed.center,
            transform.rotation,
            &filter,
            |hit_entity| {
                hits[hit_count] = hit_entity;
                hit_count += 1;
                hit_count < OVERLAP_RESULT_CAPACITY
            },
        );

        let mut neighbors = [(entity, PlacedAabb::ZERO); OVERLAP_RESULT_CAPACITY];
        let mut neighbor_count = 0;
        for &hit_entity in &hits[..hit_count] {
            let Ok((neighbor_transform, neighbor_collider)) = neighbor_query.get(hit_entity)
            else {
                continue;
            };
            let neighbor_aabb =
                neighbor_collider.aabb(neighbor_transform.translation, neighbor_transform.rotation);
            neighbors[neighbor_count] = (
                hit_entity,
                PlacedAabb::from_min_max(neighbor_aabb.min.into(), neighbor_aabb.max.into()),
            );
            neighbor_count += 1;
        }

        let offset = resolve_overlap(
            placed,
            &entity,
            &neighbors[..neighbor_count],
            state.snap_interval,
        );

        if offset != Vec3::ZERO {
            transform.translation += offset;
            info!("Nudged {:?} by {:?} to clear its neighbor", entity, offset);
        }
    }
}
