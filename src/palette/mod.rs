mod registry;
mod spawn;
mod template;

pub use registry::*;
pub use spawn::*;
pub use template::*;

use bevy::prelude::*;

pub struct PalettePlugin;

impl Plugin for PalettePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PrefabPalette>()
            .register_type::<PlacedPrefab>()
            .add_plugins(PrefabSpawnPlugin);
    }
}
