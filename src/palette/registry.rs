use bevy::prelude::*;
use std::collections::HashMap;

use super::template::{PrefabTemplate, TemplateShape};

/// Resource holding the ordered list of placeable templates and the current
/// selection. This is the tool's only mutable GUI-owned state; the panel
/// edits it directly and the placement systems read it.
#[derive(Resource)]
pub struct PrefabPalette {
    pub templates: Vec<PrefabTemplate>,
    /// Index into `templates`; may be stale after removals, so reads go
    /// through the bounds-checked [`selected`](Self::selected).
    pub selected: usize,
    next_instance_counters: HashMap<String, u32>,
}

impl Default for PrefabPalette {
    fn default() -> Self {
        Self {
            templates: vec![PrefabTemplate::default()],
            selected: 0,
            next_instance_counters: HashMap::new(),
        }
    }
}

impl PrefabPalette {
    /// Append a template to the palette
    pub fn add(&mut self, template: PrefabTemplate) {
        self.templates.push(template);
    }

    /// Append a default cube template
    pub fn add_default(&mut self) {
        self.add(PrefabTemplate::new("Cube", TemplateShape::Cube));
    }

    /// Remove the template at `index`, clamping the selection so it stays
    /// valid. Out-of-range indices are logged and ignored.
    pub fn remove(&mut self, index: usize) {
        if index >= self.templates.len() {
            warn!(
                "Ignoring removal of palette index {} (len {})",
                index,
                self.templates.len()
            );
            return;
        }
        self.templates.remove(index);
        if self.selected >= self.templates.len() && !self.templates.is_empty() {
            self.selected = self.templates.len() - 1;
        }
    }

    /// The currently selected template, or `None` when the palette is empty
    /// or the selection points past the end
    pub fn selected(&self) -> Option<&PrefabTemplate> {
        self.templates.get(self.selected)
    }

    /// List all template names in palette order
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    /// Generate a unique instance ID for a template (e.g. "Crate_1", "Crate_2")
    pub fn next_instance_id(&mut self, template_name: &str) -> String {
        let counter = self
            .next_instance_counters
            .entry(template_name.to_string())
            .or_insert(0);
        *counter += 1;
        format!("{}_{}", template_name, counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_cube() {
        let palette = PrefabPalette::default();
        assert_eq!(palette.templates.len(), 1);
        assert_eq!(palette.selected().map(|t| t.shape), Some(TemplateShape::Cube));
    }

    #[test]
    fn add_and_remove() {
        let mut palette = PrefabPalette::default();
        palette.add(PrefabTemplate::new("Pillar", TemplateShape::Cylinder));
        assert_eq!(palette.names(), vec!["Cube", "Pillar"]);

        palette.remove(0);
        assert_eq!(palette.names(), vec!["Pillar"]);
    }

    #[test]
    fn remove_out_of_range_is_ignored() {
        let mut palette = PrefabPalette::default();
        palette.remove(5);
        assert_eq!(palette.templates.len(), 1);
    }

    #[test]
    fn selection_clamps_after_removal() {
        let mut palette = PrefabPalette::default();
        palette.add(PrefabTemplate::new("Pillar", TemplateShape::Cylinder));
        palette.selected = 1;

        palette.remove(1);
        assert_eq!(palette.selected, 0);
        assert!(palette.selected().is_some());

        palette.remove(0);
        assert!(palette.selected().is_none());
    }

    #[test]
    fn instance_ids_are_monotonic_per_name() {
        let mut palette = PrefabPalette::default();
        assert_eq!(palette.next_instance_id("Crate"), "Crate_1");
        assert_eq!(palette.next_instance_id("Crate"), "Crate_2");
        assert_eq!(palette.next_instance_id("Barrel"), "Barrel_1");
    }
}
