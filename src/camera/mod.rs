//! Viewport fly camera for the placement tool.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::ui::Settings;
use crate::utils::{keyboard_available, pointer_available};

pub struct PlacerCameraPlugin;

impl Plugin for PlacerCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_placer_camera)
            .add_systems(Update, (camera_look, camera_movement));
    }
}

/// Marker component for the placer's viewport camera
#[derive(Component)]
pub struct PlacerCamera;

/// Fly camera state
#[derive(Component)]
pub struct FlyCamera {
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            // Look slightly down at the build plane
            pitch: -std::f32::consts::FRAC_PI_6,
        }
    }
}

fn spawn_placer_camera(mut commands: Commands) {
    let fly_cam = FlyCamera::default();
    let rotation = Quat::from_euler(EulerRot::YXZ, fly_cam.yaw, fly_cam.pitch, 0.0);

    commands.spawn((
        PlacerCamera,
        fly_cam,
        Camera3d::default(),
        Transform::from_translation(Vec3::new(0.0, 5.0, 10.0)).with_rotation(rotation),
    ));
}

/// Look around with right mouse button drag
fn camera_look(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    settings: Res<Settings>,
    mut query: Query<(&mut FlyCamera, &mut Transform), With<PlacerCamera>>,
    mut contexts: EguiContexts,
) {
    if !mouse_button.pressed(MouseButton::Right) {
        return;
    }

    if !pointer_available(&mut contexts) {
        return;
    }

    let delta = mouse_motion.delta;
    if delta == Vec2::ZERO {
        return;
    }

    for (mut fly_cam, mut transform) in &mut query {
        fly_cam.yaw -= delta.x * settings.camera_sensitivity;
        fly_cam.pitch = (fly_cam.pitch - delta.y * settings.camera_sensitivity).clamp(
            -std::f32::consts::FRAC_PI_2 + 0.1,
            std::f32::consts::FRAC_PI_2 - 0.1,
        );

        transform.rotation = Quat::from_euler(EulerRot::YXZ, fly_cam.yaw, fly_cam.pitch, 0.0);
    }
}

/// WASD movement for the fly camera, Space/Ctrl for vertical, Shift to boost
fn camera_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    settings: Res<Settings>,
    mut query: Query<&mut Transform, With<PlacerCamera>>,
    mut contexts: EguiContexts,
) {
    if !keyboard_available(&mut contexts) {
        return;
    }

    for mut transform in &mut query {
        let mut velocity = Vec3::ZERO;

        let forward = transform.forward().as_vec3();
        let right = transform.right().as_vec3();
        let up = transform.up().as_vec3();

        if keyboard.pressed(KeyCode::KeyW) {
            velocity += forward;
        }
        if keyboard.pressed(KeyCode::KeyS) {
            velocity -= forward;
        }
        if keyboard.pressed(KeyCode::KeyA) {
            velocity -= right;
        }
        if keyboard.pressed(KeyCode::KeyD) {
            velocity += right;
        }
        if keyboard.pressed(KeyCode::Space) {
            velocity += up;
        }
        if keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight) {
            velocity -= up;
        }

        if velocity != Vec3::ZERO {
            velocity = velocity.normalize();

            let speed_mult = if keyboard.pressed(KeyCode::ShiftLeft)
                || keyboard.pressed(KeyCode::ShiftRight)
            {
                3.0
            } else {
                1.0
            };

            transform.translation +=
                velocity * settings.camera_speed * speed_mult * time.delta_secs();
        }
    }
}
