use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::constants::sizes;
use crate::palette::{PrefabPalette, TemplateShape};
use crate::placer::PlacerState;

/// Draw the placer side panel: the template list with add/remove rows, the
/// selected-template dropdown, and the snap controls.
pub fn draw_placer_panel(
    mut contexts: EguiContexts,
    mut palette: ResMut<PrefabPalette>,
    mut state: ResMut<PlacerState>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::SidePanel::right("prefab_placer_panel")
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.heading("Prefab Placer");
            ui.separator();

            if ui.button("Add Prefab").clicked() {
                palette.add_default();
            }
            ui.add_space(4.0);

            // Deferred so the row indices stay stable while drawing
            let mut remove_index = None;

            for (i, template) in palette.templates.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    ui.add(egui::TextEdit::singleline(&mut template.name).desired_width(90.0));

                    egui::ComboBox::from_id_salt(("template_shape", i))
                        .selected_text(template.shape.display_name())
                        .show_ui(ui, |ui| {
                            for shape in TemplateShape::ALL {
                                ui.selectable_value(
                                    &mut template.shape,
                                    shape,
                                    shape.display_name(),
                                );
                            }
                        });

                    let srgba = template.color.to_srgba();
                    let mut rgb = [srgba.red, srgba.green, srgba.blue];
                    if ui.color_edit_button_rgb(&mut rgb).changed() {
                        template.color = Color::srgb(rgb[0], rgb[1], rgb[2]);
                    }

                    if ui.button("Remove").clicked() {
                        remove_index = Some(i);
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("Size");
                    for component in [
                        &mut template.size.x,
                        &mut template.size.y,
                        &mut template.size.z,
                    ] {
                        ui.add(
                            egui::DragValue::new(component)
                                .speed(0.1)
                                .range(0.1..=100.0),
                        );
                    }
                });
            }

            if let Some(index) = remove_index {
                palette.remove(index);
            }

            ui.separator();

            let names: Vec<String> = palette.templates.iter().map(|t| t.name.clone()).collect();
            let selected_text = names
                .get(palette.selected)
                .cloned()
                .unwrap_or_else(|| "None".to_string());
            egui::ComboBox::from_label("Selected Prefab")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for (i, name) in names.iter().enumerate() {
                        ui.selectable_value(&mut palette.selected, i, name);
                    }
                });

            ui.separator();

            ui.checkbox(&mut state.snapping, "Enable Snapping");
            ui.horizontal(|ui| {
                ui.label("Snap Value");
                ui.add(
                    egui::DragValue::new(&mut state.snap_interval)
                        .speed(0.05)
                        .range(sizes::MIN_SNAP_INTERVAL..=100.0),
                );
            });
        });

    Ok(())
}
