//! Grid snapping for placement positions.
//!
//! The snap interval comes from the tool settings; positions are rounded
//! per axis to the nearest multiple of the interval.

use bevy::prelude::*;

/// Snap a world position to the grid.
///
/// Each component is rounded independently to the nearest multiple of
/// `interval` (ties round away from zero, per `f32::round`).
///
/// A non-positive interval is a configuration error; the position is
/// returned unchanged rather than producing NaN or panicking. The settings
/// UI clamps the interval so this state is normally unreachable.
pub fn snap_to_grid(pos: Vec3, interval: f32) -> Vec3 {
    if interval <= 0.0 {
        return pos;
    }
    Vec3::new(
        (pos.x / interval).round() * interval,
        (pos.y / interval).round() * interval,
        (pos.z / interval).round() * interval,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_nearest_multiple() {
        assert_eq!(
            snap_to_grid(Vec3::new(1.4, -0.6, 2.5), 1.0),
            Vec3::new(1.0, -1.0, 3.0)
        );
        assert_eq!(
            snap_to_grid(Vec3::new(0.74, 0.76, -0.24), 0.5),
            Vec3::new(0.5, 1.0, 0.0)
        );
    }

    #[test]
    fn output_is_multiple_of_interval() {
        let interval = 0.25;
        let snapped = snap_to_grid(Vec3::new(3.1415, -2.718, 0.577), interval);
        for component in snapped.to_array() {
            let cells = component / interval;
            assert!(
                (cells - cells.round()).abs() < 1e-4,
                "{component} is not a multiple of {interval}"
            );
        }
    }

    #[test]
    fn idempotent() {
        for interval in [0.1, 0.5, 1.0, 2.5] {
            let once = snap_to_grid(Vec3::new(12.34, -56.78, 9.01), interval);
            let twice = snap_to_grid(once, interval);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn non_positive_interval_is_identity() {
        let pos = Vec3::new(1.2, 3.4, -5.6);
        assert_eq!(snap_to_grid(pos, 0.0), pos);
        assert_eq!(snap_to_grid(pos, -1.0), pos);
    }

    #[test]
    fn origin_is_fixed_point() {
        assert_eq!(snap_to_grid(Vec3::ZERO, 0.75), Vec3::ZERO);
    }
}
