use bevy::prelude::*;

use crate::constants::sizes;
use crate::palette::PrefabTemplate;

/// Marker component for the preview ghost entity
#[derive(Component)]
pub struct PlacementPreview;

/// State for the placement tool
#[derive(Resource)]
pub struct PlacerState {
    /// Whether hit points are snapped to the grid before positioning the
    /// preview
    pub snapping: bool,
    /// Grid interval in world units; also the overlap-resolution threshold
    pub snap_interval: f32,
    /// The ghost entity tracking the cursor (None while the palette has no
    /// valid selection)
    pub preview_entity: Option<Entity>,
    /// Template the current ghost was built from, compared against the
    /// palette selection to detect when the ghost must be rebuilt
    pub preview_template: Option<PrefabTemplate>,
}

impl Default for PlacerState {
    fn default() -> Self {
        Self {
            snapping: true,
            snap_interval: sizes::DEFAULT_SNAP_INTERVAL,
            preview_entity: None,
            preview_template: None,
        }
    }
}
