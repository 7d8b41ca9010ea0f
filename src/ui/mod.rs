mod panel;
mod settings;

pub use panel::*;
pub use settings::*;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(SettingsPlugin)
            .add_systems(EguiPrimaryContextPass, draw_placer_panel);
    }
}
