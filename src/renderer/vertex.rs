use std::mem;
use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use rand::Rng;

const R: [f32; 3] = [1.0, 0.0, 0.0];
const B: [f32; 3] = [0.0, 0.0, 1.0];

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub location: u32,
    pub components: i32,
    pub offset: i32,
}

impl Vertex {
    pub const STRIDE: i32 = mem::size_of::<Vertex>() as i32;

    pub const ATTRIBUTES: [Attribute; 2] = [
        Attribute {
            location: 0,
            components: 3,
            offset: mem::offset_of!(Vertex, position) as i32,
        },
        Attribute {
            location: 1,
            components: 3,
            offset: mem::offset_of!(Vertex, color) as i32,
        },
    ];
}

pub const VERTEX_COUNT: usize = 6;

pub const FRONT_TRIANGLE: Range<u32> = 0..3;
pub const BACK_TRIANGLE: Range<u32> = 3..6;

// back to front, for blending
pub const DRAW_ORDER: [Range<u32>; 2] = [BACK_TRIANGLE, FRONT_TRIANGLE];

const TRIANGLES: [Vertex; VERTEX_COUNT] = [
    Vertex {
        position: [-0.5, -0.5, 0.0],
        color: R,
    },
    Vertex {
        position: [0.5, -0.5, 0.0],
        color: R,
    },
    Vertex {
        position: [0.0, 0.5, 0.0],
        color: R,
    },
    Vertex {
        position: [-0.2, -0.2, 0.5],
        color: B,
    },
    Vertex {
        position: [0.8, -0.2, 0.5],
        color: B,
    },
    Vertex {
        position: [0.3, 0.8, 0.5],
        color: B,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: [Vertex; VERTEX_COUNT],
}

impl Default for Mesh {
    fn default() -> Self {
        Mesh {
            vertices: TRIANGLES,
        }
    }
}

impl Mesh {
    pub const BYTE_LEN: usize = mem::size_of::<[Vertex; VERTEX_COUNT]>();

    #[cfg(test)]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn randomize_back_colors(&mut self, rng: &mut impl Rng) {
        let range = BACK_TRIANGLE.start as usize..BACK_TRIANGLE.end as usize;
        for vertex in &mut self.vertices[range] {
            vertex.color = [rng.random(), rng.random(), rng.random()];
        }
    }
}
