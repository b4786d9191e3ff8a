use std::ops::Range;

use rand::Rng;

use crate::state::{FrameActions, RenderState};

mod buffer;
mod gl;
mod pipeline;
#[cfg(test)]
pub(crate) mod recorder;
mod vertex;

pub use gl::GlBackend;
use vertex::{Mesh, DRAW_ORDER};

pub const CLEAR_COLOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonMode {
    Fill,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniforms {
    pub offset_y: f32,
    pub alpha: f32,
}

/// The immediate-mode commands a frame is made of, applied in call order.
pub trait Backend {
    fn set_viewport(&mut self, width: u32, height: u32);

    fn set_polygon_mode(&mut self, mode: PolygonMode);

    /// Overwrites the whole vertex buffer with `bytes`.
    fn upload_vertices(&mut self, bytes: &[u8]);

    fn clear(&mut self, color: [f32; 4]);

    fn bind_pipeline(&mut self);

    fn set_uniforms(&mut self, uniforms: Uniforms);

    fn draw(&mut self, vertices: Range<u32>);
}

pub struct Renderer<B: Backend> {
    frame: usize,
    backend: B,
    mesh: Mesh,
}

impl<B> Renderer<B>
where
    B: Backend,
{
    pub fn new(mut backend: B) -> Self {
        let mesh = Mesh::default();
        backend.upload_vertices(mesh.as_bytes());

        Renderer {
            frame: 0,
            backend,
            mesh,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.backend.set_viewport(width, height);
    }

    pub fn render(&mut self, state: &RenderState, actions: &FrameActions, rng: &mut impl Rng) {
        self.backend.set_polygon_mode(if state.wireframe {
            PolygonMode::Line
        } else {
            PolygonMode::Fill
        });

        if actions.randomize_colors {
            self.mesh.randomize_back_colors(rng);
            self.backend.upload_vertices(self.mesh.as_bytes());
            log::debug!("regenerated back triangle colors at frame {}", self.frame);
        }

        self.backend.clear(CLEAR_COLOR);
        self.backend.bind_pipeline();
        self.backend.set_uniforms(Uniforms {
            offset_y: state.offset_y,
            alpha: state.alpha,
        });
        for vertices in DRAW_ORDER {
            self.backend.draw(vertices);
        }

        self.frame += 1;
    }
}
