//! Overlap resolution for freshly placed prefabs.
//!
//! When a prefab is placed on top of existing geometry, the placer queries
//! Avian for intersecting colliders and nudges the new instance sideways so
//! it sits next to its neighbor instead of inside it. The resolution is a
//! grid-building heuristic, not a physics solve: it considers the first
//! non-self neighbor only, pushes along a single world axis (X before Z,
//! never Y), and treats anything within one snap interval of an edge as
//! "overlapping enough" to separate.

use bevy::prelude::*;

/// World-axis-aligned bounding box used by the resolver.
///
/// Built from a collider AABB at the entity's current pose. Rotation only
/// matters for the spatial query that produces the neighbor set; the
/// resolver math works on world-aligned min/max edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedAabb {
    pub center: Vec3,
    /// Half-widths per axis, all components non-negative.
    pub half_extents: Vec3,
}

impl PlacedAabb {
    pub const ZERO: Self = Self {
        center: Vec3::ZERO,
        half_extents: Vec3::ZERO,
    };

    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Build from world-space min/max corners.
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            half_extents: (max - min) * 0.5,
        }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }
}

/// Compute the corrective offset for a newly placed box against its
/// neighbors, returning a delta to add to the placed entity's translation
/// (`Vec3::ZERO` when no correction applies).
///
/// `neighbors` is the (possibly truncated) result of one overlap query in
/// query order. Entries whose id equals `placed_id` are skipped; the first
/// remaining neighbor decides the outcome and the rest are ignored, even if
/// the correction leaves residual overlap with a later entry.
///
/// Against that neighbor, the distances between facing edges are measured on
/// X and Z. If either X edge pair is closer than `snap_interval`, the placed
/// box is pushed along X by the sum of the two X half-widths, away from the
/// nearer edge; otherwise the same rule is tried on Z; otherwise no offset.
/// Y is never touched: placement is a horizontal-plane operation and stacked
/// objects are left where they land.
///
/// A non-positive `snap_interval` never satisfies the strict thresholds, so
/// it degrades to "no correction" rather than misbehaving.
pub fn resolve_overlap<I: PartialEq>(
    placed: PlacedAabb,
    placed_id: &I,
    neighbors: &[(I, PlacedAabb)],
    snap_interval: f32,
) -> Vec3 {
    for (id, neighbor) in neighbors {
        if id == placed_id {
            continue;
        }

        let mut offset = Vec3::ZERO;

        let x_overlap = (placed.min().x - neighbor.max().x).abs();
        let x_reverse = (placed.max().x - neighbor.min().x).abs();
        let z_overlap = (placed.min().z - neighbor.max().z).abs();
        let z_reverse = (placed.max().z - neighbor.min().z).abs();

        if x_overlap < snap_interval || x_reverse < snap_interval {
            let push = neighbor.half_extents.x + placed.half_extents.x;
            offset.x = if x_overlap < x_reverse { push } else { -push };
        } else if z_overlap < snap_interval || z_reverse < snap_interval {
            let push = neighbor.half_extents.z + placed.half_extents.z;
            offset.z = if z_overlap < z_reverse { push } else { -push };
        }

        // First non-self neighbor decides; later entries are never inspected.
        return offset;
    }

    Vec3::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACED_ID: u32 = 1;

    fn unit_box(center: Vec3) -> PlacedAabb {
        PlacedAabb::new(center, Vec3::ONE)
    }

    #[test]
    fn min_max_round_trip() {
        let aabb = PlacedAabb::from_min_max(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 1.0, 4.0));
        assert_eq!(aabb.center, Vec3::new(1.0, 0.5, 3.0));
        assert_eq!(aabb.half_extents, Vec3::new(2.0, 0.5, 1.0));
        assert_eq!(aabb.min(), Vec3::new(-1.0, 0.0, 2.0));
        assert_eq!(aabb.max(), Vec3::new(3.0, 1.0, 4.0));
    }

    #[test]
    fn empty_neighbor_set_is_noop() {
        let offset = resolve_overlap(unit_box(Vec3::ZERO), &PLACED_ID, &[], 1.0);
        assert_eq!(offset, Vec3::ZERO);
    }

    #[test]
    fn own_entry_is_skipped() {
        let neighbors = [(PLACED_ID, unit_box(Vec3::new(0.5, 0.0, 0.0)))];
        let offset = resolve_overlap(unit_box(Vec3::ZERO), &PLACED_ID, &neighbors, 1.0);
        assert_eq!(offset, Vec3::ZERO);
    }

    #[test]
    fn neighbor_on_positive_x_pushes_negative_x() {
        // Pinned scenario: placed at origin, neighbor centered at (1.5, 0, 0),
        // both with half-extents (1,1,1), interval 1.0. Near-edge distance is
        // 0.5 on the reverse side, so the push is -X by the summed widths.
        let neighbors = [(2u32, unit_box(Vec3::new(1.5, 0.0, 0.0)))];
        let offset = resolve_overlap(unit_box(Vec3::ZERO), &PLACED_ID, &neighbors, 1.0);
        assert_eq!(offset, Vec3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn neighbor_on_negative_x_pushes_positive_x() {
        let neighbors = [(2u32, unit_box(Vec3::new(-1.5, 0.0, 0.0)))];
        let offset = resolve_overlap(unit_box(Vec3::ZERO), &PLACED_ID, &neighbors, 1.0);
        assert_eq!(offset, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn push_magnitude_is_summed_half_extents() {
        let placed = PlacedAabb::new(Vec3::ZERO, Vec3::new(0.5, 0.5, 0.5));
        let neighbors = [(
            2u32,
            PlacedAabb::new(Vec3::new(1.2, 0.0, 0.0), Vec3::new(1.5, 1.0, 1.0)),
        )];
        let offset = resolve_overlap(placed, &PLACED_ID, &neighbors, 1.0);
        assert_eq!(offset, Vec3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn x_wins_when_both_axes_overlap() {
        // Diagonal neighbor within threshold on both axes: the fixed priority
        // order resolves along X only.
        let neighbors = [(2u32, unit_box(Vec3::new(1.5, 0.0, 1.5)))];
        let offset = resolve_overlap(unit_box(Vec3::ZERO), &PLACED_ID, &neighbors, 1.0);
        assert_eq!(offset, Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(offset.z, 0.0);
    }

    #[test]
    fn falls_back_to_z_axis() {
        let neighbors = [(2u32, unit_box(Vec3::new(0.0, 0.0, 1.5)))];
        let offset = resolve_overlap(unit_box(Vec3::ZERO), &PLACED_ID, &neighbors, 1.0);
        assert_eq!(offset, Vec3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn y_overlap_is_ignored() {
        // Stacked boxes sharing the same X/Z footprint: the facing-edge
        // distances on X and Z are a full box width, so no correction fires
        // even though the boxes interpenetrate on Y.
        let neighbors = [(2u32, unit_box(Vec3::new(0.0, 1.5, 0.0)))];
        let offset = resolve_overlap(unit_box(Vec3::ZERO), &PLACED_ID, &neighbors, 1.0);
        assert_eq!(offset, Vec3::ZERO);
    }

    #[test]
    fn distant_neighbor_needs_no_correction() {
        let neighbors = [(2u32, unit_box(Vec3::new(10.0, 0.0, 10.0)))];
        let offset = resolve_overlap(unit_box(Vec3::ZERO), &PLACED_ID, &neighbors, 1.0);
        assert_eq!(offset, Vec3::ZERO);
    }

    #[test]
    fn first_non_self_neighbor_decides() {
        // The second entry would push along -X, but the scan stops at the
        // first non-self neighbor even though it needs no correction.
        let neighbors = [
            (2u32, unit_box(Vec3::new(10.0, 0.0, 10.0))),
            (3u32, unit_box(Vec3::new(1.5, 0.0, 0.0))),
        ];
        let offset = resolve_overlap(unit_box(Vec3::ZERO), &PLACED_ID, &neighbors, 1.0);
        assert_eq!(offset, Vec3::ZERO);
    }

    #[test]
    fn self_entries_before_a_real_neighbor_are_skipped() {
        let neighbors = [
            (PLACED_ID, unit_box(Vec3::ZERO)),
            (2u32, unit_box(Vec3::new(1.5, 0.0, 0.0))),
        ];
        let offset = resolve_overlap(unit_box(Vec3::ZERO), &PLACED_ID, &neighbors, 1.0);
        assert_eq!(offset, Vec3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn zero_interval_never_corrects() {
        let neighbors = [(2u32, unit_box(Vec3::new(1.5, 0.0, 0.0)))];
        let offset = resolve_overlap(unit_box(Vec3::ZERO), &PLACED_ID, &neighbors, 0.0);
        assert_eq!(offset, Vec3::ZERO);
    }
}
