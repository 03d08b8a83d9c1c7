//! Literal quad geometry shared by every lesson.

use cgmath::{Deg, InnerSpace, Matrix4, Vector3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub colour: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Corners in NDC, starting top right and going clockwise.
pub const QUAD_VERTICES: [Vertex; 4] = [
    Vertex {
        position: [0.5, 0.5, 0.0],
        colour: [1.0, 0.0, 0.0],
        tex_coords: [1.0, 1.0],
    },
    Vertex {
        position: [0.5, -0.5, 0.0],
        colour: [0.0, 1.0, 0.0],
        tex_coords: [1.0, 0.0],
    },
    Vertex {
        position: [-0.5, -0.5, 0.0],
        colour: [0.0, 0.0, 1.0],
        tex_coords: [0.0, 0.0],
    },
    Vertex {
        position: [-0.5, 0.5, 0.0],
        colour: [1.0, 1.0, 0.0],
        tex_coords: [0.0, 1.0],
    },
];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

/// World positions of the quads drawn by the camera lesson.
pub const QUAD_POSITIONS: [[f32; 3]; 10] = [
    [0.0, 0.0, 0.0],
    [2.0, 5.0, -15.0],
    [-1.5, -2.2, -2.5],
    [-3.8, -2.0, -12.3],
    [2.4, -0.4, -3.5],
    [-1.7, 3.0, -7.5],
    [1.3, -2.0, -2.5],
    [1.5, 2.0, -2.5],
    [1.5, 0.2, -1.5],
    [-1.3, 1.0, -1.5],
];

/// Model matrix for the quad at `QUAD_POSITIONS[index]`, tilted by `20° * index`.
///
/// Indices past the end of the table wrap around.
pub fn placement_matrix(index: usize) -> Matrix4<f32> {
    let position: Vector3<f32> = QUAD_POSITIONS[index % QUAD_POSITIONS.len()].into();
    let axis = Vector3::new(1.0, 0.3, 0.5).normalize();
    let angle = Deg(20.0 * index as f32);
    Matrix4::from_translation(position) * Matrix4::from_axis_angle(axis, angle)
}
