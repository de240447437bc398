use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
}

const fn v(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Vertex {
    Vertex {
        position,
        normal,
        tex_coord,
    }
}

pub const CUBE_VERTEX_COUNT: u32 = 36;

/// Unit cube centred on the origin, two triangles per face, drawn once per instance.
pub const CUBE_VERTICES: [Vertex; 36] = [
    // back
    v([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 0.0]),
    v([0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 1.0]),
    v([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
    // front
    v([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 0.0]),
    v([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 1.0]),
    // left
    v([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    v([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    v([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    v([-0.5, -0.5, 0.5], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    // right
    v([0.5, 0.5, 0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
    v([0.5, 0.5, -0.5], [1.0, 0.0, 0.0], [1.0, 1.0]),
    v([0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([0.5, -0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([0.5, 0.5, 0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
    // bottom
    v([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([-0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [0.0, 0.0]),
    // top
    v([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
];

pub fn cube_vertex_bytes() -> &'static [u8] {
    bytemuck::cast_slice(&CUBE_VERTICES)
}
