mod place;
mod preview;
mod state;

pub use place::*;
pub use preview::*;
pub use state::*;

use bevy::prelude::*;

pub struct PlacerPlugin;

impl Plugin for PlacerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlacerState>().add_systems(
            Update,
            (
                sync_preview_entity,
                update_preview_position,
                draw_preview_bounds,
                handle_place_click,
                resolve_new_placements,
            )
                .chain(),
        );
    }
}
