//! # Bevy Prefab Placer
//!
//! A prefab placement tool plugin for Bevy games using Avian3D physics.
//!
//! Point at the scene to position a preview ghost, optionally snapped to a
//! grid, and left-click to stamp an instance of the selected template.
//! Freshly placed instances are checked against existing colliders and
//! nudged sideways when they land inside a neighbor.
//!
//! ## Quick Start
//!
//! Add the placer to your Bevy app:
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_prefab_placer::PrefabPlacerPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(PrefabPlacerPlugin)
//!         .run();
//! }
//! ```
//!
//! The scene needs at least one collider for the cursor raycast to hit
//! (a ground slab is enough). Everything the placer spawns is itself a
//! static collider, so placements stack up into valid raycast targets.
//!
//! ## Panel
//!
//! The side panel edits the template palette (add/remove rows, shape, size,
//! color), picks the selected template, and controls grid snapping. Settings
//! persist across runs in the user config directory.

pub mod camera;
pub mod constants;
pub mod overlap;
pub mod palette;
pub mod placer;
pub mod snap;
pub mod ui;
pub mod utils;

use avian3d::debug_render::PhysicsDebugPlugin;
use avian3d::prelude::PhysicsPlugins;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use camera::PlacerCameraPlugin;
use palette::PalettePlugin;
use placer::PlacerPlugin;
use ui::UiPlugin;

// Re-export the core placement types
pub use overlap::{resolve_overlap, PlacedAabb};
pub use snap::snap_to_grid;

// Re-export the palette and placer state types
pub use palette::{PlacedPrefab, PrefabPalette, PrefabTemplate, SpawnPrefabEvent, TemplateShape};
pub use placer::{PlacementPreview, PlacerState};

// Re-export the camera marker and persisted settings
pub use camera::PlacerCamera;
pub use ui::Settings;

/// Main plugin that bundles the whole placement tool
pub struct PrefabPlacerPlugin;

impl Plugin for PrefabPlacerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Third-party plugins
            .add_plugins(EguiPlugin::default())
            .add_plugins(PhysicsPlugins::default())
            .add_plugins(PhysicsDebugPlugin)
            // Tool core
            .add_plugins(PlacerCameraPlugin)
            .add_plugins(PalettePlugin)
            .add_plugins(PlacerPlugin)
            // UI
            .add_plugins(UiPlugin)
            // Setup
            .add_systems(Startup, setup_placer_scene);
    }
}

/// Ambient light so placed instances are visible without host lighting
fn setup_placer_scene(mut commands: Commands) {
    commands.spawn(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: true,
    });
}
