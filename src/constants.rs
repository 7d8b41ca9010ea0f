//! Centralized constants for the placer
//!
//! Shared colors, sizes, and capacities so the systems stay consistent.

use bevy::prelude::*;

/// Colors for the placement preview ghost
pub mod preview_colors {
    use super::*;

    /// Semi-transparent tint applied to the preview mesh
    pub const GHOST: Color = Color::srgba(0.3, 0.7, 1.0, 0.5);
    /// Wire cuboid drawn around the preview bounds
    pub const BOUNDS: Color = Color::srgb(0.2, 1.0, 0.3);
}

/// Default colors for spawned template shapes
pub mod template_colors {
    use super::*;

    pub const CUBE: Color = Color::srgb(0.8, 0.7, 0.6);
    pub const SPHERE: Color = Color::srgb(0.6, 0.7, 0.8);
    pub const CYLINDER: Color = Color::srgb(0.7, 0.8, 0.6);
    pub const CAPSULE: Color = Color::srgb(0.8, 0.6, 0.7);
    pub const PLANE: Color = Color::srgb(0.6, 0.6, 0.8);
}

/// Spatial query limits
pub mod queries {
    /// Hard cap on overlap results per placement check. Queries returning
    /// more intersections silently truncate at this count, so crowded
    /// placements may leave overlaps with neighbors past the cap unresolved.
    pub const OVERLAP_RESULT_CAPACITY: usize = 10;

    /// Maximum cursor raycast distance when positioning the preview
    pub const RAYCAST_MAX_DISTANCE: f32 = 100.0;
}

/// Default sizes for placement
pub mod sizes {
    /// Distance from the camera at which the preview floats when the cursor
    /// ray hits nothing
    pub const PREVIEW_DEFAULT_DISTANCE: f32 = 10.0;

    /// Default grid snap interval for new installs
    pub const DEFAULT_SNAP_INTERVAL: f32 = 1.0;

    /// Smallest snap interval the settings UI allows
    pub const MIN_SNAP_INTERVAL: f32 = 0.01;
}
