use glow::HasContext;

use super::vertex::Vertex;
use crate::error::{Error, Result};

pub struct VertexBuffer {
    vbo: glow::Buffer,
    vao: glow::VertexArray,
    len: usize,
}

impl VertexBuffer {
    pub unsafe fn new(gl: &glow::Context, len: usize) -> Result<Self> {
        let size = buffer_size(len)?;

        let vbo = gl.create_buffer().map_err(Error::Gpu)?;
        let vao = match gl.create_vertex_array() {
            Ok(vao) => vao,
            Err(err) => {
                gl.delete_buffer(vbo);
                return Err(Error::Gpu(err));
            }
        };

        gl.bind_vertex_array(Some(vao));
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_size(glow::ARRAY_BUFFER, size, glow::DYNAMIC_DRAW);

        for attribute in &Vertex::ATTRIBUTES {
            gl.vertex_attrib_pointer_f32(
                attribute.location,
                attribute.components,
                glow::FLOAT,
                false,
                Vertex::STRIDE,
                attribute.offset,
            );
            gl.enable_vertex_attrib_array(attribute.location);
        }

        gl.bind_vertex_array(None);

        Ok(VertexBuffer { vbo, vao, len })
    }

    pub unsafe fn bind(&self, gl: &glow::Context) {
        gl.bind_vertex_array(Some(self.vao));
    }

    pub unsafe fn write(&self, gl: &glow::Context, bytes: &[u8]) {
        debug_assert_eq!(bytes.len(), self.len);
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
        gl.buffer_sub_data_u8_slice(glow::ARRAY_BUFFER, 0, bytes);
    }

    pub unsafe fn destroy(&self, gl: &glow::Context) {
        gl.delete_vertex_array(self.vao);
        gl.delete_buffer(self.vbo);
    }
}

fn buffer_size(len: usize) -> Result<i32> {
    i32::try_from(len)
        .map_err(|_| Error::Gpu(format!("vertex buffer of {} bytes is too large", len)))
}
