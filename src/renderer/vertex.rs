//! Vertex type and named colors for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex in logical canvas pixels with an RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Named colors (classic immediate-mode palette)
pub mod colors {
    pub const LIGHTGRAY: [f32; 4] = [0.784, 0.784, 0.784, 1.0];
    pub const GRAY: [f32; 4] = [0.510, 0.510, 0.510, 1.0];
    pub const DARKGRAY: [f32; 4] = [0.314, 0.314, 0.314, 1.0];
    pub const YELLOW: [f32; 4] = [0.992, 0.976, 0.0, 1.0];
    pub const GOLD: [f32; 4] = [1.0, 0.796, 0.0, 1.0];
    pub const ORANGE: [f32; 4] = [1.0, 0.631, 0.0, 1.0];
    pub const PINK: [f32; 4] = [1.0, 0.427, 0.761, 1.0];
    pub const RED: [f32; 4] = [0.902, 0.161, 0.216, 1.0];
    pub const MAROON: [f32; 4] = [0.745, 0.129, 0.216, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 0.894, 0.188, 1.0];
    pub const LIME: [f32; 4] = [0.0, 0.620, 0.184, 1.0];
    pub const DARKGREEN: [f32; 4] = [0.0, 0.459, 0.173, 1.0];
    pub const SKYBLUE: [f32; 4] = [0.400, 0.749, 1.0, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 0.475, 0.945, 1.0];
    pub const DARKBLUE: [f32; 4] = [0.0, 0.322, 0.675, 1.0];
    pub const PURPLE: [f32; 4] = [0.784, 0.478, 1.0, 1.0];
    pub const VIOLET: [f32; 4] = [0.529, 0.235, 0.745, 1.0];
    pub const DARKPURPLE: [f32; 4] = [0.439, 0.122, 0.494, 1.0];
    pub const BEIGE: [f32; 4] = [0.827, 0.690, 0.514, 1.0];
    pub const BROWN: [f32; 4] = [0.498, 0.416, 0.310, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const RAYWHITE: [f32; 4] = [0.961, 0.961, 0.961, 1.0];
    pub const SPACE: [f32; 4] = [0.02, 0.02, 0.06, 1.0];

    /// Same color with a different alpha
    pub const fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
        [color[0], color[1], color[2], alpha]
    }
}
