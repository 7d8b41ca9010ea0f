//! Main binary for running the placer standalone.
//!
//! Spawns a ground slab to place onto, an infinite grid matching the snap
//! plane, and a sun light.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy_infinite_grid::{InfiniteGridBundle, InfiniteGridPlugin};
use bevy_prefab_placer::PrefabPlacerPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Bevy Prefab Placer".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(InfiniteGridPlugin)
        .add_plugins(PrefabPlacerPlugin)
        .add_systems(Startup, setup_demo_scene)
        .run();
}

fn setup_demo_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Ground slab the cursor raycast can hit
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(40.0, 40.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.38, 0.35),
            ..default()
        })),
        Collider::cuboid(40.0, 0.01, 40.0),
        RigidBody::Static,
        Transform::from_translation(Vec3::ZERO),
    ));

    commands.spawn(InfiniteGridBundle::default());

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
