//! Software-projected 3D scene: orbit camera, flat-lit cube, ground grid
//!
//! Geometry is transformed on the CPU with glam and drawn as 2D triangles.
//! Back faces are culled; the cube is convex so no depth sort is needed.

use std::f32::consts::FRAC_PI_4;

use glam::{Mat4, Vec2, Vec3};

use crate::renderer::{Canvas, colors};

pub const CUBE_HALF_SIZE: f32 = 1.0;
pub const GRID_HALF_EXTENT: i32 = 5;
const GROUND_Y: f32 = -CUBE_HALF_SIZE;
const AMBIENT: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Radians around the Y axis
    pub yaw: f32,
    /// Radians above the ground plane
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.45,
            distance: 8.0,
        }
    }
}

impl OrbitCamera {
    pub const MIN_PITCH: f32 = 0.1;
    pub const MAX_PITCH: f32 = 1.4;

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(cp * sy, sp, cp * cy) * self.distance
    }

    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw = (self.yaw + d_yaw).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + d_pitch).clamp(Self::MIN_PITCH, Self::MAX_PITCH);
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(FRAC_PI_4, aspect, 0.1, 100.0);
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y);
        proj * view
    }
}

/// Maps world points into a screen rectangle
pub struct Projector {
    view_proj: Mat4,
    origin: Vec2,
    size: Vec2,
}

impl Projector {
    pub fn new(camera: &OrbitCamera, origin: Vec2, size: Vec2) -> Self {
        Self {
            view_proj: camera.view_proj(size.x / size.y),
            origin,
            size,
        }
    }

    /// Screen position of `p`, None if it is behind the near plane
    pub fn project(&self, p: Vec3) -> Option<Vec2> {
        let clip = self.view_proj * p.extend(1.0);
        if clip.w <= 0.1 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            self.origin.x + (ndc.x * 0.5 + 0.5) * self.size.x,
            self.origin.y + (0.5 - ndc.y * 0.5) * self.size.y,
        ))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Face {
    /// Counter-clockwise seen from outside
    pub corners: [Vec3; 4],
    pub normal: Vec3,
}

impl Face {
    pub fn center(&self) -> Vec3 {
        self.corners.iter().copied().sum::<Vec3>() * 0.25
    }

    pub fn faces_toward(&self, eye: Vec3) -> bool {
        self.normal.dot(eye - self.center()) > 0.0
    }
}

/// The six faces of a cube transformed by `model`
pub fn cube_faces(model: Mat4, half: f32) -> [Face; 6] {
    let h = half;
    let face = |normal: Vec3, corners: [Vec3; 4]| Face {
        corners: corners.map(|c| model.transform_point3(c)),
        normal: model.transform_vector3(normal).normalize(),
    };
    [
        face(
            Vec3::Z,
            [
                Vec3::new(-h, -h, h),
                Vec3::new(h, -h, h),
                Vec3::new(h, h, h),
                Vec3::new(-h, h, h),
            ],
        ),
        face(
            Vec3::NEG_Z,
            [
                Vec3::new(h, -h, -h),
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(h, h, -h),
            ],
        ),
        face(
            Vec3::X,
            [
                Vec3::new(h, -h, h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, h, -h),
                Vec3::new(h, h, h),
            ],
        ),
        face(
            Vec3::NEG_X,
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, -h, h),
                Vec3::new(-h, h, h),
                Vec3::new(-h, h, -h),
            ],
        ),
        face(
            Vec3::Y,
            [
                Vec3::new(-h, h, h),
                Vec3::new(h, h, h),
                Vec3::new(h, h, -h),
                Vec3::new(-h, h, -h),
            ],
        ),
        face(
            Vec3::NEG_Y,
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, -h, h),
                Vec3::new(-h, -h, h),
            ],
        ),
    ]
}

/// Lambert shading with an ambient floor
pub fn shade(color: [f32; 4], normal: Vec3, light_dir: Vec3) -> [f32; 4] {
    let diffuse = normal.dot(light_dir.normalize()).max(0.0);
    let k = AMBIENT + (1.0 - AMBIENT) * diffuse;
    [color[0] * k, color[1] * k, color[2] * k, color[3]]
}

/// Draw the grid and the cube rotated by `rotation` radians about Y
pub fn draw_scene(
    canvas: &mut Canvas,
    camera: &OrbitCamera,
    rotation: f32,
    origin: Vec2,
    size: Vec2,
) {
    let projector = Projector::new(camera, origin, size);

    for i in -GRID_HALF_EXTENT..=GRID_HALF_EXTENT {
        let f = i as f32;
        let e = GRID_HALF_EXTENT as f32;
        let color = if i == 0 { colors::GRAY } else { colors::LIGHTGRAY };
        let segments = [
            (Vec3::new(f, GROUND_Y, -e), Vec3::new(f, GROUND_Y, e)),
            (Vec3::new(-e, GROUND_Y, f), Vec3::new(e, GROUND_Y, f)),
        ];
        for (a, b) in segments {
            if let (Some(a), Some(b)) = (projector.project(a), projector.project(b)) {
                canvas.line(a, b, 1.0, color);
            }
        }
    }

    let model = Mat4::from_rotation_y(rotation);
    let eye = camera.eye();
    let light = Vec3::new(0.5, 1.0, 0.8);
    for face in cube_faces(model, CUBE_HALF_SIZE) {
        if !face.faces_toward(eye) {
            continue;
        }
        let points: Option<Vec<Vec2>> = face.corners.iter().map(|c| projector.project(*c)).collect();
        let Some(p) = points else {
            continue;
        };
        let color = shade(colors::RED, face.normal, light);
        canvas.triangle(p[0], p[1], p[2], color);
        canvas.triangle(p[0], p[2], p[3], color);
        for i in 0..4 {
            canvas.line(p[i], p[(i + 1) % 4], 2.0, colors::MAROON);
        }
    }
}
