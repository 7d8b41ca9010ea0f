use bevy::prelude::*;
use bevy_egui::{EguiContext, EguiContextSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::sizes;
use crate::placer::PlacerState;

/// Tool settings that persist to disk
#[derive(Resource, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// UI scale factor (1.0 = default)
    pub ui_scale: f32,
    /// Camera movement speed
    pub camera_speed: f32,
    /// Camera mouse sensitivity
    pub camera_sensitivity: f32,
    /// Whether grid snapping is enabled
    #[serde(default = "default_snap_enabled")]
    pub snap_enabled: bool,
    /// Grid snap interval in world units
    #[serde(default = "default_snap_interval")]
    pub snap_interval: f32,
}

fn default_snap_enabled() -> bool {
    true
}

fn default_snap_interval() -> f32 {
    sizes::DEFAULT_SNAP_INTERVAL
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            camera_speed: 10.0,
            camera_sensitivity: 0.003,
            snap_enabled: true,
            snap_interval: sizes::DEFAULT_SNAP_INTERVAL,
        }
    }
}

impl Settings {
    /// Get the settings file path
    fn file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("bevy_prefab_placer");
            p.push("settings.ron");
            p
        })
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => ron::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) {
        let Some(path) = Self::file_path() else {
            error!("Could not determine config directory");
            return;
        };

        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {}", e);
                return;
            }
        }

        match ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            Ok(content) => {
                if let Err(e) = fs::write(&path, content) {
                    error!("Failed to save settings: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to serialize settings: {}", e);
            }
        }
    }
}

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        let settings = Settings::load();
        app.insert_resource(settings)
            .add_systems(Startup, apply_settings_to_placer_state)
            .add_systems(Update, (apply_ui_scale, sync_snap_settings));
    }
}

/// Apply loaded settings to PlacerState on startup
fn apply_settings_to_placer_state(settings: Res<Settings>, mut state: ResMut<PlacerState>) {
    state.snapping = settings.snap_enabled;
    state.snap_interval = settings.snap_interval;
}

/// Sync snap settings from PlacerState back to Settings and save on change
fn sync_snap_settings(state: Res<PlacerState>, mut settings: ResMut<Settings>) {
    if state.snapping != settings.snap_enabled || state.snap_interval != settings.snap_interval {
        settings.snap_enabled = state.snapping;
        settings.snap_interval = state.snap_interval;
        settings.save();
    }
}

/// Apply UI scale to egui
fn apply_ui_scale(
    settings: Res<Settings>,
    mut query: Query<&mut EguiContextSettings, With<EguiContext>>,
) {
    for mut ctx_settings in &mut query {
        ctx_settings.scale_factor = settings.ui_scale;
    }
}
