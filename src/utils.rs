//! Shared utility functions for the placer

use bevy_egui::EguiContexts;

/// Check if pointer input should be processed by placer systems.
///
/// Returns `false` (block input) when the egui UI wants the pointer, e.g.
/// while the cursor is over the tool panel or dragging one of its widgets.
pub fn pointer_available(contexts: &mut EguiContexts) -> bool {
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_pointer_input() || ctx.is_pointer_over_area() {
            return false;
        }
    }
    true
}

/// Check if keyboard input should be processed by placer systems.
///
/// Returns `false` when egui has keyboard focus (e.g. a text field in the
/// panel is being edited).
pub fn keyboard_available(contexts: &mut EguiContexts) -> bool {
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_keyboard_input() {
            return false;
        }
    }
    true
}
