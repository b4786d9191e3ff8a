use std::ops::Range;

use glow::HasContext;

use super::buffer::VertexBuffer;
use super::pipeline::Pipeline;
use super::vertex::Mesh;
use super::{Backend, PolygonMode, Uniforms};
use crate::error::Result;

/// [`Backend`] over an OpenGL 3.3 core context.
///
/// The context must stay current on this thread for the lifetime of the
/// backend, including its drop.
pub struct GlBackend {
    gl: glow::Context,
    pipeline: Pipeline,
    buffer: VertexBuffer,
}

impl GlBackend {
    pub fn new(gl: glow::Context) -> Result<Self> {
        unsafe {
            log::info!(
                "OpenGL {} on {}",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER)
            );

            gl.enable(glow::DEPTH_TEST);
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

            let pipeline = Pipeline::new(&gl)?;
            let buffer = match VertexBuffer::new(&gl, Mesh::BYTE_LEN) {
                Ok(buffer) => buffer,
                Err(err) => {
                    pipeline.destroy(&gl);
                    return Err(err);
                }
            };
            check_for_gl_error(&gl, "setup");

            Ok(GlBackend {
                gl,
                pipeline,
                buffer,
            })
        }
    }
}

impl Backend for GlBackend {
    fn set_viewport(&mut self, width: u32, height: u32) {
        unsafe { self.gl.viewport(0, 0, gl_int(width), gl_int(height)) }
    }

    fn set_polygon_mode(&mut self, mode: PolygonMode) {
        let mode = match mode {
            PolygonMode::Fill => glow::FILL,
            PolygonMode::Line => glow::LINE,
        };
        unsafe { self.gl.polygon_mode(glow::FRONT_AND_BACK, mode) }
    }

    fn upload_vertices(&mut self, bytes: &[u8]) {
        unsafe { self.buffer.write(&self.gl, bytes) }
    }

    fn clear(&mut self, color: [f32; 4]) {
        let [r, g, b, a] = color;
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    fn bind_pipeline(&mut self) {
        unsafe {
            self.pipeline.bind(&self.gl);
            self.buffer.bind(&self.gl);
        }
    }

    fn set_uniforms(&mut self, uniforms: Uniforms) {
        unsafe { self.pipeline.set_uniforms(&self.gl, uniforms) }
    }

    fn draw(&mut self, vertices: Range<u32>) {
        let count = vertices.end.saturating_sub(vertices.start);
        unsafe {
            self.gl
                .draw_arrays(glow::TRIANGLES, gl_int(vertices.start), gl_int(count))
        }
    }
}

impl Drop for GlBackend {
    fn drop(&mut self) {
        unsafe {
            self.gl.bind_vertex_array(None);
            self.gl.use_program(None);
            self.buffer.destroy(&self.gl);
            self.pipeline.destroy(&self.gl);
        }
    }
}

/// GL sizes and indices are `GLint`; anything past its range saturates.
fn gl_int(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn check_for_gl_error(gl: &glow::Context, context: &str) {
    let error_code = unsafe { gl.get_error() };
    if error_code != glow::NO_ERROR {
        log::error!("GL error during {}: 0x{:X}", context, error_code);
    }
}
