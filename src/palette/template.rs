use avian3d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::template_colors;

/// Shapes a template can be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateShape {
    #[default]
    Cube,
    Sphere,
    Cylinder,
    Capsule,
    Plane,
}

impl TemplateShape {
    pub const ALL: [TemplateShape; 5] = [
        TemplateShape::Cube,
        TemplateShape::Sphere,
        TemplateShape::Cylinder,
        TemplateShape::Capsule,
        TemplateShape::Plane,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateShape::Cube => "Cube",
            TemplateShape::Sphere => "Sphere",
            TemplateShape::Cylinder => "Cylinder",
            TemplateShape::Capsule => "Capsule",
            TemplateShape::Plane => "Plane",
        }
    }

    /// Create the unit mesh for this shape; the template size is applied as
    /// transform scale at spawn time.
    pub fn create_mesh(&self) -> Mesh {
        match self {
            TemplateShape::Cube => Mesh::from(Cuboid::new(1.0, 1.0, 1.0)),
            TemplateShape::Sphere => Mesh::from(Sphere::new(0.5)),
            TemplateShape::Cylinder => Mesh::from(Cylinder::new(0.5, 1.0)),
            TemplateShape::Capsule => Mesh::from(Capsule3d::new(0.25, 0.5)),
            TemplateShape::Plane => Plane3d::default().mesh().size(2.0, 2.0).build(),
        }
    }

    /// Create the collider for this shape (unit-sized, scaled by the entity
    /// transform like the mesh)
    pub fn create_collider(&self) -> Collider {
        match self {
            TemplateShape::Cube => Collider::cuboid(1.0, 1.0, 1.0),
            TemplateShape::Sphere => Collider::sphere(0.5),
            TemplateShape::Cylinder => Collider::cylinder(0.5, 1.0),
            TemplateShape::Capsule => Collider::capsule(0.25, 0.5),
            TemplateShape::Plane => Collider::cuboid(2.0, 0.01, 2.0),
        }
    }

    pub fn default_color(&self) -> Color {
        match self {
            TemplateShape::Cube => template_colors::CUBE,
            TemplateShape::Sphere => template_colors::SPHERE,
            TemplateShape::Cylinder => template_colors::CYLINDER,
            TemplateShape::Capsule => template_colors::CAPSULE,
            TemplateShape::Plane => template_colors::PLANE,
        }
    }
}

/// A reusable object definition the placer can stamp into the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefabTemplate {
    /// Display name, also the prefix for instance IDs
    pub name: String,
    pub shape: TemplateShape,
    /// Per-axis scale applied to the unit mesh and collider
    pub size: Vec3,
    pub color: Color,
}

impl PrefabTemplate {
    pub fn new(name: impl Into<String>, shape: TemplateShape) -> Self {
        Self {
            name: name.into(),
            shape,
            size: Vec3::ONE,
            color: shape.default_color(),
        }
    }
}

impl Default for PrefabTemplate {
    fn default() -> Self {
        Self::new("Cube", TemplateShape::Cube)
    }
}

/// Marker on entities spawned from a template.
/// Tracks which template this instance came from and its unique instance ID.
#[derive(Component, Reflect, Serialize, Deserialize, Clone, Debug)]
#[reflect(Component, Serialize, Deserialize)]
pub struct PlacedPrefab {
    /// Template name at spawn time, e.g. "Crate"
    pub template_name: String,
    /// Unique per-instance identifier, e.g. "Crate_1"
    pub instance_id: String,
}

/// Marker for instances that have not yet had their overlap check.
/// Consumed by the placer's resolution system the frame after spawning.
#[derive(Component, Default)]
pub struct AwaitingOverlapCheck;
