use avian3d::prelude::*;
use bevy::prelude::*;

use super::registry::PrefabPalette;
use super::template::{AwaitingOverlapCheck, PlacedPrefab, PrefabTemplate};

/// Message to instantiate a template at a pose
#[derive(Message)]
pub struct SpawnPrefabEvent {
    pub template: PrefabTemplate,
    pub position: Vec3,
    pub rotation: Quat,
}

pub struct PrefabSpawnPlugin;

impl Plugin for PrefabSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SpawnPrefabEvent>()
            .add_systems(Update, handle_spawn_prefab);
    }
}

/// Spawn a scene entity for each requested template instance.
///
/// Instances are static colliders so later raycasts and overlap queries see
/// them. The `AwaitingOverlapCheck` marker hands the new entity off to the
/// placer's resolution pass.
fn handle_spawn_prefab(
    mut events: MessageReader<SpawnPrefabEvent>,
    mut palette: ResMut<PrefabPalette>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in events.read() {
        let template = &event.template;
        let instance_id = palette.next_instance_id(&template.name);

        commands.spawn((
            Name::new(instance_id.clone()),
            PlacedPrefab {
                template_name: template.name.clone(),
                instance_id: instance_id.clone(),
            },
            AwaitingOverlapCheck,
            Mesh3d(meshes.add(template.shape.create_mesh())),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: template.color,
                ..default()
            })),
            template.shape.create_collider(),
            RigidBody::Static,
            Transform::from_translation(event.position)
                .with_rotation(event.rotation)
                .with_scale(template.size),
        ));

        info!("Spawned {} at {:?}", instance_id, event.position);
    }
}
