use crate::constants::*;
use crate::geometry::{self, Geometry};
use crate::palette::{self, Swatch};
use crate::path::Outline;
use glam::{EulerRot, Mat4, Quat, Vec3};
use lyon::tessellation::TessellationError;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Index into [`Scene::meshes`](crate::Scene::meshes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

/// Position, XYZ Euler rotation (radians) and uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rot, self.position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialStyle {
    Wireframe,
    Solid,
}

/// Unlit, translucent, double-sided.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Swatch,
    pub opacity: f32,
    pub style: MaterialStyle,
}

impl Material {
    /// Linear RGB plus opacity, as the mesh shader expects it.
    pub fn rgba(&self) -> [f32; 4] {
        let [r, g, b] = self.color.linear_rgb();
        [r, g, b, self.opacity]
    }
}

#[derive(Clone, Debug)]
pub struct MeshInstance {
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
}

/// Per-shape animation parameters, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatParams {
    pub rotation_speed: Vec3,
    pub float_speed: f32,
    pub float_offset: f32,
    pub original_y: f32,
}

impl FloatParams {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, original_y: f32) -> Self {
        let mut spin = || (rng.gen::<f32>() - 0.5) * SHAPE_SPIN_RANGE;
        let rotation_speed = Vec3::new(spin(), spin(), spin());
        Self {
            rotation_speed,
            float_speed: rng.gen::<f32>() * SHAPE_FLOAT_SPEED_SPAN + SHAPE_FLOAT_SPEED_MIN,
            float_offset: rng.gen::<f32>() * TAU,
            original_y,
        }
    }

    /// Vertical position at elapsed time `t`.
    #[inline]
    pub fn float_y(&self, t: f32) -> f32 {
        self.original_y + (t * self.float_speed + self.float_offset).sin() * SHAPE_FLOAT_AMPLITUDE
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingShape {
    pub mesh: MeshId,
    pub params: FloatParams,
}

impl FloatingShape {
    pub fn advance(&self, transform: &mut Transform, t: f32) {
        transform.rotation += self.params.rotation_speed;
        transform.position.y = self.params.float_y(t);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightRing {
    pub mesh: MeshId,
    pub spin_speed: f32,
}

impl LightRing {
    /// Rings further down the list spin proportionally faster.
    pub fn advance(&self, transform: &mut Transform, index: usize) {
        transform.rotation.z += self.spin_speed * (index + 1) as f32;
    }
}

// ---------------- Authored layout ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Icosahedron { detail: u32 },
    Octahedron,
    Tetrahedron,
    Torus,
    Dodecahedron,
    TorusKnot,
}

impl ShapeKind {
    /// Unit-sized geometry for this kind.
    pub fn geometry(&self) -> Geometry {
        match *self {
            ShapeKind::Icosahedron { detail } => geometry::icosahedron(1.0, detail),
            ShapeKind::Octahedron => geometry::octahedron(1.0, 0),
            ShapeKind::Tetrahedron => geometry::tetrahedron(1.0, 0),
            ShapeKind::Torus => geometry::torus(1.0, 0.3, 8, 16),
            ShapeKind::Dodecahedron => geometry::dodecahedron(1.0, 0),
            ShapeKind::TorusKnot => geometry::torus_knot(1.0, 0.3, 64, 8, 2, 3),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ShapePlacement {
    pub kind: ShapeKind,
    pub color: Swatch,
    pub position: [f32; 3],
    pub scale: f32,
}

pub const SHAPE_LAYOUT: [ShapePlacement; 7] = [
    ShapePlacement {
        kind: ShapeKind::Icosahedron { detail: 0 },
        color: palette::LAVENDER,
        position: [-15.0, 5.0, -20.0],
        scale: 3.0,
    },
    ShapePlacement {
        kind: ShapeKind::Octahedron,
        color: palette::TEAL,
        position: [20.0, -8.0, -25.0],
        scale: 4.0,
    },
    ShapePlacement {
        kind: ShapeKind::Tetrahedron,
        color: palette::MINT,
        position: [-25.0, -5.0, -30.0],
        scale: 3.5,
    },
    ShapePlacement {
        kind: ShapeKind::Torus,
        color: palette::SOFT_PURPLE,
        position: [25.0, 10.0, -35.0],
        scale: 2.5,
    },
    ShapePlacement {
        kind: ShapeKind::Dodecahedron,
        color: palette::OCEAN_BLUE,
        position: [0.0, 15.0, -40.0],
        scale: 2.0,
    },
    ShapePlacement {
        kind: ShapeKind::Icosahedron { detail: 1 },
        color: palette::LAVENDER,
        position: [-30.0, 12.0, -45.0],
        scale: 2.5,
    },
    ShapePlacement {
        kind: ShapeKind::TorusKnot,
        color: palette::TEAL,
        position: [30.0, -12.0, -50.0],
        scale: 1.5,
    },
];

/// (radius, color, height) for each light ring.
pub const RING_LAYOUT: [(f32, Swatch, f32); 3] = [
    (20.0, palette::SOFT_PURPLE, -5.0),
    (25.0, palette::TEAL, 5.0),
    (30.0, palette::LAVENDER, 0.0),
];

// ---------------- Factories ----------------

/// Wireframe mesh with randomised spin and float parameters.
pub fn create_floating_shape<R: Rng + ?Sized>(
    rng: &mut R,
    geometry: Geometry,
    color: Swatch,
    position: Vec3,
    scale: f32,
) -> (MeshInstance, FloatParams) {
    let mesh = MeshInstance {
        geometry: geometry.to_wireframe(),
        material: Material {
            color,
            opacity: SHAPE_OPACITY,
            style: MaterialStyle::Wireframe,
        },
        transform: Transform {
            position,
            rotation: Vec3::ZERO,
            scale,
        },
    };
    (mesh, FloatParams::random(rng, position.y))
}

pub fn heart_outline() -> Outline {
    Outline::move_to(0.5, 0.5)
        .bezier_to([0.5, 0.5], [0.4, 0.0], [0.0, 0.0])
        .bezier_to([-0.6, 0.0], [-0.6, 0.7], [-0.6, 0.7])
        .bezier_to([-0.6, 1.1], [-0.3, 1.54], [0.5, 1.9])
        .bezier_to([1.2, 1.54], [1.6, 1.1], [1.6, 0.7])
        .bezier_to([1.6, 0.7], [1.6, 0.0], [1.0, 0.0])
        .bezier_to([0.7, 0.0], [0.5, 0.5], [0.5, 0.5])
}

/// The outline is authored upside down; a half turn about z rights it.
pub fn create_heart() -> Result<(MeshInstance, FloatParams), TessellationError> {
    let mesh = MeshInstance {
        geometry: geometry::shape_from_path(&heart_outline(), HEART_CURVE_SEGMENTS)?,
        material: Material {
            color: palette::LAVENDER,
            opacity: HEART_OPACITY,
            style: MaterialStyle::Solid,
        },
        transform: Transform {
            position: Vec3::from(HEART_POSITION),
            rotation: Vec3::new(0.0, 0.0, PI),
            scale: HEART_SCALE,
        },
    };
    let params = FloatParams {
        rotation_speed: Vec3::new(0.0, HEART_SPIN_Y, 0.0),
        float_speed: HEART_FLOAT_SPEED,
        float_offset: 0.0,
        original_y: 0.0,
    };
    Ok((mesh, params))
}

/// Thin solid torus laid flat (rotated a quarter turn about x).
pub fn create_light_ring(radius: f32, color: Swatch, y: f32) -> MeshInstance {
    MeshInstance {
        geometry: geometry::torus(radius, RING_TUBE, RING_RADIAL_SEGMENTS, RING_TUBULAR_SEGMENTS),
        material: Material {
            color,
            opacity: RING_OPACITY,
            style: MaterialStyle::Solid,
        },
        transform: Transform {
            position: Vec3::new(0.0, y, 0.0),
            rotation: Vec3::new(FRAC_PI_2, 0.0, 0.0),
            scale: 1.0,
        },
    }
}
